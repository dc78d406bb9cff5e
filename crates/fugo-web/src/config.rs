//! Build-time configuration
//!
//! The bundle has no process environment, so settings are baked in when the
//! crate is compiled (`CONTENTFUL_SPACE_ID=... trunk build`).

use fugo_content::{CmsConfig, IdentityConfig, ImagePolicy, SiteConfig};

const DEFAULT_IMAGE_PROXY: &str = "/_image";

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "CONTENTFUL_BASE_URL" => option_env!("CONTENTFUL_BASE_URL"),
        "CONTENTFUL_SPACE_ID" => option_env!("CONTENTFUL_SPACE_ID"),
        "CONTENTFUL_TOKEN" => option_env!("CONTENTFUL_TOKEN"),
        "CONTENTFUL_ENVIRONMENT" => option_env!("CONTENTFUL_ENVIRONMENT"),
        "CONTENTFUL_REVALIDATE_SECS" => option_env!("CONTENTFUL_REVALIDATE_SECS"),
        "IDENTITY_BASE_URL" => option_env!("IDENTITY_BASE_URL"),
        "IMAGE_PROXY" => option_env!("IMAGE_PROXY"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Settings shared with every page through context
#[derive(Clone, Debug)]
pub struct WebConfig {
    /// `None` when the CMS keys were missing at build time
    pub cms: Option<CmsConfig>,
    pub identity: IdentityConfig,
    pub images: ImagePolicy,
    /// Path of the image proxy; empty loads remote images directly
    pub image_proxy: String,
}

impl WebConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let image_proxy = lookup("IMAGE_PROXY").unwrap_or_else(|| DEFAULT_IMAGE_PROXY.into());

        match SiteConfig::from_lookup(&lookup) {
            Ok(site) => Self {
                cms: Some(site.cms),
                identity: site.identity,
                images: site.images,
                image_proxy,
            },
            Err(e) => {
                tracing::warn!("Portfolio disabled: {}", e);
                Self {
                    cms: None,
                    identity: lookup("IDENTITY_BASE_URL")
                        .map(IdentityConfig::with_base_url)
                        .unwrap_or_default(),
                    images: ImagePolicy::default(),
                    image_proxy,
                }
            }
        }
    }

    /// `src` for a remote image: allow-listed hosts go through the proxy
    pub fn image_src(&self, url: &str) -> String {
        if self.image_proxy.is_empty() || !self.images.allows(url) {
            return url.to_string();
        }
        format!("{}?url={}", self.image_proxy, urlencoding::encode(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(key: &str) -> Option<String> {
        match key {
            "CONTENTFUL_SPACE_ID" => Some("sp1".into()),
            "CONTENTFUL_TOKEN" => Some("tok".into()),
            _ => None,
        }
    }

    #[test]
    fn test_configured_build() {
        let config = WebConfig::from_lookup(configured);
        assert_eq!(config.cms.as_ref().map(|c| c.space_id.as_str()), Some("sp1"));
        assert_eq!(config.image_proxy, "/_image");
    }

    #[test]
    fn test_missing_cms_keys_keep_identity() {
        let config = WebConfig::from_lookup(|key| {
            (key == "IDENTITY_BASE_URL").then(|| "http://localhost:9000".to_string())
        });
        assert!(config.cms.is_none());
        assert_eq!(config.identity.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_image_src_proxies_allowed_hosts() {
        let config = WebConfig::from_lookup(configured);
        assert_eq!(
            config.image_src("https://randomuser.me/api/portraits/men/1.jpg"),
            "/_image?url=https%3A%2F%2Frandomuser.me%2Fapi%2Fportraits%2Fmen%2F1.jpg"
        );
        assert_eq!(
            config.image_src("https://images.pexels.com/photos/1.jpeg"),
            "https://images.pexels.com/photos/1.jpeg"
        );
    }

    #[test]
    fn test_image_proxy_can_be_disabled() {
        let config = WebConfig::from_lookup(|key| match key {
            "IMAGE_PROXY" => Some(String::new()),
            other => configured(other),
        });
        assert_eq!(
            config.image_src("https://randomuser.me/api/portraits/men/1.jpg"),
            "https://randomuser.me/api/portraits/men/1.jpg"
        );
    }
}
