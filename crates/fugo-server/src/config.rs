//! Server Configuration

use std::path::PathBuf;

use anyhow::Context;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory holding the compiled WASM bundle and `index.html`
    pub static_dir: PathBuf,
    /// `max-age` sent with proxied images
    pub image_cache_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            image_cache_secs: 3600,
        }
    }
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let image_cache_secs = match lookup("IMAGE_CACHE_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("IMAGE_CACHE_SECS is not a number: {raw}"))?,
            None => defaults.image_cache_secs,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            image_cache_secs,
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
