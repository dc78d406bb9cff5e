//! One-shot fetch tasks
//!
//! Pages fetch once on mount. [`run_fetch`] awaits the request, converts any
//! failure into a logged [`FetchOutcome::Failed`], and gives up early when the
//! page's [`CancelToken`] fires.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::{self, Either};
use tokio::sync::Notify;

use crate::error::Result;

/// Result of a page-level fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Loaded(Vec<T>),
    /// The request succeeded but returned nothing
    Empty,
    /// The request failed; carries the logged diagnostic
    Failed(String),
    Cancelled,
}

impl<T> FetchOutcome<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() { Self::Empty } else { Self::Loaded(items) }
    }

    /// Items to render; every non-loaded outcome degrades to an empty list
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Loaded(items) => items,
            Self::Empty | Self::Failed(_) | Self::Cancelled => Vec::new(),
        }
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Explicit cancellation handle shared between a page and its fetch task
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    state: Arc<CancelState>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent
    pub fn cancel(&self) {
        if !self.state.cancelled.swap(true, Ordering::SeqCst) {
            self.state.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once [`cancel`](Self::cancel) has been called
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag so a concurrent cancel is not missed.
            let notified = self.state.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// Await `request` unless `token` fires first.
///
/// `section` names the page section in log output.
pub async fn run_fetch<T, F>(section: &str, token: &CancelToken, request: F) -> FetchOutcome<T>
where
    F: Future<Output = Result<Vec<T>>>,
{
    if token.is_cancelled() {
        tracing::debug!("{} fetch skipped: already cancelled", section);
        return FetchOutcome::Cancelled;
    }

    let request = std::pin::pin!(request);
    let cancelled = std::pin::pin!(token.cancelled());

    match future::select(request, cancelled).await {
        Either::Left((Ok(items), _)) => {
            tracing::debug!("{} fetch returned {} records", section, items.len());
            FetchOutcome::from_items(items)
        }
        Either::Left((Err(e), _)) => {
            tracing::warn!("Failed to fetch {}: {}", section, e);
            FetchOutcome::Failed(e.diagnostic())
        }
        Either::Right(((), _)) => {
            tracing::debug!("{} fetch cancelled", section);
            FetchOutcome::Cancelled
        }
    }
}
