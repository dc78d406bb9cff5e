//! Category Filter
//!
//! Derived view for the portfolio grid. Pure: the same inputs always give the
//! same output, in fetched order.

use crate::model::{CategoryFilter, PortfolioItem};

/// Items visible under `filter`, in their original order.
pub fn filter_items(items: &[PortfolioItem], filter: CategoryFilter) -> Vec<PortfolioItem> {
    match filter {
        CategoryFilter::All => items.to_vec(),
        selected => items.iter().filter(|item| selected.matches(item)).cloned().collect(),
    }
}
