//! Remote image allow-list
//!
//! Only two remote hosts serve images on the site: the avatar host used for
//! team photos and the CMS asset CDN.

use reqwest::Url;

/// One allowed remote image location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
    /// Exact path, or a prefix ending in `/**` that matches any sub-path
    pub pathname: String,
}

impl RemotePattern {
    pub fn https(hostname: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self { protocol: "https".into(), hostname: hostname.into(), pathname: pathname.into() }
    }

    pub fn matches(&self, url: &Url) -> bool {
        url.scheme() == self.protocol
            && url.host_str().is_some_and(|host| host.eq_ignore_ascii_case(&self.hostname))
            && self.path_matches(url.path())
    }

    fn path_matches(&self, path: &str) -> bool {
        match self.pathname.strip_suffix("/**") {
            Some(prefix) => {
                path == prefix || path.starts_with(&format!("{prefix}/"))
            }
            None => path == self.pathname,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::new(vec![
            RemotePattern::https("randomuser.me", "/**"),
            RemotePattern::https("images.ctfassets.net", "/**"),
        ])
    }
}

impl ImagePolicy {
    pub const fn new(patterns: Vec<RemotePattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[RemotePattern] {
        &self.patterns
    }

    /// Whether `url` may be loaded as a remote image
    pub fn allows(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.patterns.iter().any(|p| p.matches(&parsed)),
            Err(e) => {
                tracing::debug!("rejecting unparsable image url {}: {}", url, e);
                false
            }
        }
    }
}
