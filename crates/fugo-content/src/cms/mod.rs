//! Content Repository
//!
//! Abstraction over the headless CMS plus the portfolio retrieval built on
//! top of it.

mod client;
mod entry;
mod mock;
pub mod resolve;

pub use client::HttpContentClient;
pub use mock::MockContentSource;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::model::PortfolioItem;

/// Source of raw CMS collection responses (Strategy pattern)
///
/// The HTTP client talks to the delivery API; the mock serves canned bodies.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ContentSource {
    /// Fetch the raw `entries` collection for the portfolio content type.
    ///
    /// `revalidate` is the oldest cached response the caller will accept.
    async fn entries(&self, revalidate: Option<Duration>) -> Result<Value>;

    /// Source name for logs
    fn name(&self) -> &str;
}

/// Fetch, link-resolve and convert every portfolio entry.
///
/// Entries that do not convert (for example a picture link the response did
/// not include) are skipped with a warning; the rest of the batch is kept.
pub async fn fetch_portfolio<S>(source: &S, revalidate: Option<Duration>) -> Result<Vec<PortfolioItem>>
where
    S: ContentSource + ?Sized,
{
    let body = source.entries(revalidate).await?;
    let resolved = resolve::resolve_response(&body)?;

    let mut items = Vec::with_capacity(resolved.len());
    for entry in resolved {
        let id = entry::entry_id(&entry).to_string();
        match entry::to_portfolio_item(entry) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!("Skipping portfolio entry {} from {}: {}", id, source.name(), e),
        }
    }

    tracing::debug!("{} portfolio items from {}", items.len(), source.name());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::filter::filter_items;
    use crate::model::{CategoryFilter, ServiceCategory};
    use serde_json::json;

    fn two_entry_body() -> Value {
        json!({
            "items": [
                {
                    "sys": { "type": "Entry", "id": "e1" },
                    "fields": {
                        "judul": "Kopi Label",
                        "desc": "Label design",
                        "service": "Digital Design",
                        "picture": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } }
                    }
                },
                {
                    "sys": { "type": "Entry", "id": "e2" },
                    "fields": {
                        "judul": "Festival Jazz",
                        "desc": "Three-day festival",
                        "service": "Event Organizer",
                        "picture": { "sys": { "type": "Link", "linkType": "Asset", "id": "a2" } }
                    }
                }
            ],
            "includes": { "Asset": [
                { "sys": { "type": "Asset", "id": "a1" }, "fields": { "file": { "url": "//images.ctfassets.net/a1.jpg" } } },
                { "sys": { "type": "Asset", "id": "a2" }, "fields": { "file": { "url": "//images.ctfassets.net/a2.jpg" } } }
            ]}
        })
    }

    #[tokio::test]
    async fn test_fetch_and_filter_scenario() {
        let source = MockContentSource::new(two_entry_body());
        let items = fetch_portfolio(&source, None).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.image_url.starts_with("https://")));

        let design = filter_items(&items, CategoryFilter::Only(ServiceCategory::DigitalDesign));
        assert_eq!(design.len(), 1);
        assert_eq!(design[0].title, "Kopi Label");

        let production = filter_items(&items, CategoryFilter::Only(ServiceCategory::ProductionHouse));
        assert!(production.is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_entry_is_skipped() {
        let mut body = two_entry_body();
        body["includes"]["Asset"].as_array_mut().unwrap().remove(1);

        let items = fetch_portfolio(&MockContentSource::new(body), None).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kopi Label");
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let source = MockContentSource::failing(503);
        let err = fetch_portfolio(&source, None).await.unwrap_err();
        assert!(matches!(err, ContentError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let source = MockContentSource::new(json!({ "total": 0 }));
        assert!(matches!(fetch_portfolio(&source, None).await, Err(ContentError::Shape(_))));
    }
}
