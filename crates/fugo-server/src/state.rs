//! Application State

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use fugo_content::ImagePolicy;

/// Upper bound on a single upstream image fetch
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Client for upstream image fetches; redirects are not followed, so only
    /// the allow-listed URL itself is ever fetched
    pub http: reqwest::Client,

    /// Remote hosts images may be proxied from
    pub images: Arc<ImagePolicy>,

    /// `Cache-Control` value for proxied images
    pub image_cache_control: HeaderValue,
}

impl AppState {
    pub fn new(images: ImagePolicy, image_cache_secs: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            images: Arc::new(images),
            image_cache_control: HeaderValue::from_str(&format!("public, max-age={image_cache_secs}"))?,
        })
    }
}
