//! # fugo-content
//!
//! Content layer for the Fugo Creative marketing site.
//!
//! Everything dynamic on the site comes from two read-only services:
//!
//! - **Content repository** (Contentful) - portfolio entries, fetched once per
//!   page mount and link-resolved into flat [`PortfolioItem`] records
//! - **Identity generator** (randomuser.me) - placeholder team photos
//!
//! ## Data flow
//!
//! ```text
//! ┌────────────┐   GET /entries   ┌──────────────┐  resolve links  ┌───────────────┐
//! │ SiteConfig │────────────────▶│ ContentSource │───────────────▶│ PortfolioItem │
//! └────────────┘                  └──────────────┘                 └───────┬───────┘
//!                                                                          │
//!                         CategoryFilter (All | one service) ──▶ filter_items()
//! ```
//!
//! Every fetch runs through [`fetch::run_fetch`], which turns failures into a
//! logged [`FetchOutcome::Failed`] instead of propagating them to the page.

pub mod cms;
pub mod config;
pub mod copy;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod identity;
pub mod images;
pub mod model;

pub use cms::{ContentSource, HttpContentClient, fetch_portfolio};
pub use config::{CmsConfig, IdentityConfig, SiteConfig};
pub use error::{ContentError, Result};
pub use fetch::{CancelToken, FetchOutcome, run_fetch};
pub use filter::filter_items;
pub use identity::{Gender, IdentitySource, RandomUserClient, TeamRequest};
pub use images::{ImagePolicy, RemotePattern};
pub use model::{CategoryFilter, PortfolioItem, ServiceCategory, TeamMember};
