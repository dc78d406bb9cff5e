//! Contentful delivery API client

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ContentSource, fetch_portfolio};
use crate::config::CmsConfig;
use crate::error::{ContentError, Result};
use crate::model::PortfolioItem;

/// HTTP client for the content repository
#[derive(Clone, Debug)]
pub struct HttpContentClient {
    client: reqwest::Client,
    config: CmsConfig,
}

impl HttpContentClient {
    pub fn new(config: &CmsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing connection pool
    pub fn with_client(client: reqwest::Client, config: &CmsConfig) -> Self {
        Self { client, config: config.clone() }
    }

    pub const fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Portfolio items using the configured revalidate window
    pub async fn portfolio(&self) -> Result<Vec<PortfolioItem>> {
        fetch_portfolio(self, self.config.revalidate).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentSource for HttpContentClient {
    async fn entries(&self, revalidate: Option<Duration>) -> Result<Value> {
        let url = self.config.entries_url();

        let request = self.client.get(&url).query(&[
            ("access_token", self.config.access_token.as_str()),
            ("content_type", self.config.content_type.as_str()),
        ]);
        let request = with_cache_hint(request, revalidate);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            // `url` carries no token; the query string is added by the builder.
            return Err(ContentError::Status { status: status.as_u16(), url });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &str {
        "Contentful"
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn with_cache_hint(request: reqwest::RequestBuilder, revalidate: Option<Duration>) -> reqwest::RequestBuilder {
    match revalidate {
        Some(max_age) => request.header(
            reqwest::header::CACHE_CONTROL,
            format!("max-age={}", max_age.as_secs()),
        ),
        None => request,
    }
}

// Browsers manage their own HTTP cache, and the header would force a CORS preflight.
#[cfg(target_arch = "wasm32")]
fn with_cache_hint(request: reqwest::RequestBuilder, _revalidate: Option<Duration>) -> reqwest::RequestBuilder {
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::{Router, extract::Query, http::HeaderMap, http::StatusCode, routing::get};
    use serde_json::json;

    const ENTRIES_PATH: &str = "/spaces/sp1/environments/master/entries";

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn entries(Query(query): Query<HashMap<String, String>>, headers: HeaderMap) -> (StatusCode, String) {
        if query.get("access_token").map(String::as_str) != Some("tok")
            || query.get("content_type").map(String::as_str) != Some("portfolio")
        {
            return (StatusCode::UNAUTHORIZED, "{}".into());
        }
        let cache = headers
            .get("cache-control")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string();
        let body = json!({
            "items": [{
                "sys": { "type": "Entry", "id": "e1" },
                "fields": {
                    "judul": cache,
                    "desc": "d",
                    "service": "Production House",
                    "picture": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } }
                }
            }],
            "includes": { "Asset": [
                { "sys": { "type": "Asset", "id": "a1" }, "fields": { "file": { "url": "//images.ctfassets.net/a1.jpg" } } }
            ]}
        });
        (StatusCode::OK, body.to_string())
    }

    #[tokio::test]
    async fn test_fetches_and_resolves_over_http() {
        let base = serve(Router::new().route(ENTRIES_PATH, get(entries))).await;
        let config = CmsConfig::new("sp1", "tok").with_base_url(base);
        let client = HttpContentClient::new(&config);

        let items = client.portfolio().await.unwrap();
        assert_eq!(items.len(), 1);
        // the handler echoes the cache header into the title
        assert_eq!(items[0].title, "max-age=3600");
        assert_eq!(items[0].image_url, "https://images.ctfassets.net/a1.jpg");
    }

    #[tokio::test]
    async fn test_no_cache_hint_without_revalidate() {
        let base = serve(Router::new().route(ENTRIES_PATH, get(entries))).await;
        let mut config = CmsConfig::new("sp1", "tok").with_base_url(base);
        config.revalidate = None;

        let items = HttpContentClient::new(&config).portfolio().await.unwrap();
        assert_eq!(items[0].title, "none");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let base = serve(Router::new().route(ENTRIES_PATH, get(entries))).await;
        let config = CmsConfig::new("sp1", "wrong-token").with_base_url(base);

        let err = HttpContentClient::new(&config).portfolio().await.unwrap_err();
        match err {
            ContentError::Status { status, url } => {
                assert_eq!(status, 401);
                assert!(!url.contains("wrong-token"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_serialization_error() {
        let app = Router::new().route(ENTRIES_PATH, get(|| async { "<html>oops</html>" }));
        let base = serve(app).await;
        let config = CmsConfig::new("sp1", "tok").with_base_url(base);

        let err = HttpContentClient::new(&config).portfolio().await.unwrap_err();
        assert!(matches!(err, ContentError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let config = CmsConfig::new("sp1", "tok").with_base_url("http://127.0.0.1:1");
        let err = HttpContentClient::new(&config).portfolio().await.unwrap_err();
        assert!(err.is_network());
    }
}
