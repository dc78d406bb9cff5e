//! Site Configuration
//!
//! Built once at start-up and passed by reference to every client. Values
//! come from a key lookup so the same parsing serves the process environment
//! (native) and compile-time variables (wasm).

use std::time::Duration;

use crate::error::{ContentError, Result};
use crate::images::ImagePolicy;

pub const DEFAULT_CMS_BASE_URL: &str = "https://cdn.contentful.com";
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://randomuser.me";
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

/// Content repository (Contentful delivery API) settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CmsConfig {
    pub base_url: String,
    pub space_id: String,
    pub environment: String,
    pub access_token: String,
    pub content_type: String,
    /// Maximum acceptable age of a cached response; `None` sends no hint
    pub revalidate: Option<Duration>,
}

impl CmsConfig {
    pub fn new(space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_CMS_BASE_URL.into(),
            space_id: space_id.into(),
            environment: "master".into(),
            access_token: access_token.into(),
            content_type: "portfolio".into(),
            revalidate: Some(Duration::from_secs(DEFAULT_REVALIDATE_SECS)),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = trim_base(&base_url.into());
        self
    }

    /// `<base>/spaces/<space>/environments/<env>/entries`
    pub fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url, self.space_id, self.environment
        )
    }
}

/// Identity generator settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    pub base_url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_IDENTITY_BASE_URL.into() }
    }
}

impl IdentityConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: trim_base(&base_url.into()) }
    }

    pub fn api_url(&self) -> String {
        format!("{}/api/", self.base_url)
    }
}

/// Everything the site needs to talk to the outside world
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub cms: CmsConfig,
    pub identity: IdentityConfig,
    pub images: ImagePolicy,
}

impl SiteConfig {
    /// Read settings through `lookup`, which returns `None` for unset keys.
    ///
    /// | key | default |
    /// |-----|---------|
    /// | `CONTENTFUL_BASE_URL` | `https://cdn.contentful.com` |
    /// | `CONTENTFUL_SPACE_ID` | required |
    /// | `CONTENTFUL_TOKEN` | required |
    /// | `CONTENTFUL_ENVIRONMENT` | `master` |
    /// | `CONTENTFUL_REVALIDATE_SECS` | `3600`, `0` disables |
    /// | `IDENTITY_BASE_URL` | `https://randomuser.me` |
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| ContentError::Config(format!("{key} is not set")))
        };

        let mut cms = CmsConfig::new(required("CONTENTFUL_SPACE_ID")?, required("CONTENTFUL_TOKEN")?);
        if let Some(base) = get("CONTENTFUL_BASE_URL") {
            cms = cms.with_base_url(base);
        }
        if let Some(environment) = get("CONTENTFUL_ENVIRONMENT") {
            cms.environment = environment;
        }
        if let Some(secs) = get("CONTENTFUL_REVALIDATE_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ContentError::Config(format!("CONTENTFUL_REVALIDATE_SECS is not a number: {secs}"))
            })?;
            cms.revalidate = (secs > 0).then(|| Duration::from_secs(secs));
        }

        let identity = get("IDENTITY_BASE_URL")
            .map(IdentityConfig::with_base_url)
            .unwrap_or_default();

        Ok(Self { cms, identity, images: ImagePolicy::default() })
    }

    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
