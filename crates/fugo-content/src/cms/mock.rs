//! Mock Content Source
//!
//! Serves a canned collection body, or fails with a fixed status.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::ContentSource;
use crate::error::{ContentError, Result};

pub struct MockContentSource {
    response: std::result::Result<Value, u16>,
}

impl MockContentSource {
    pub const fn new(body: Value) -> Self {
        Self { response: Ok(body) }
    }

    /// Every call answers with HTTP `status`
    pub const fn failing(status: u16) -> Self {
        Self { response: Err(status) }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentSource for MockContentSource {
    async fn entries(&self, _revalidate: Option<Duration>) -> Result<Value> {
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(ContentError::Status { status: *status, url: "mock://entries".into() }),
        }
    }

    fn name(&self) -> &str {
        "MockContentSource"
    }
}
