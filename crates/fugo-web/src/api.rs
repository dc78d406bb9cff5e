//! Page data loaders
//!
//! Each loader is awaited once per page mount and never fails: problems are
//! logged by `run_fetch` and come back as a non-loaded outcome.

use fugo_content::{
    CancelToken, FetchOutcome, HttpContentClient, IdentitySource, PortfolioItem, RandomUserClient,
    TeamMember, TeamRequest, run_fetch,
};

use crate::config::WebConfig;

/// Team photos on the home page
pub const HOME_TEAM_SIZE: u32 = 12;
/// Photos on the team page
pub const TEAM_PAGE_SIZE: u32 = 12;

pub async fn load_portfolio(config: &WebConfig, token: &CancelToken) -> FetchOutcome<PortfolioItem> {
    let Some(cms) = &config.cms else {
        tracing::warn!("Failed to fetch portfolio: content repository not configured");
        return FetchOutcome::Failed("content repository not configured".into());
    };

    let client = HttpContentClient::new(cms);
    run_fetch("portfolio", token, client.portfolio()).await
}

pub async fn load_team(config: &WebConfig, count: u32, token: &CancelToken) -> FetchOutcome<TeamMember> {
    let request = match TeamRequest::new(count) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Failed to fetch team members: {}", e);
            return FetchOutcome::Failed(e.diagnostic());
        }
    };

    let client = RandomUserClient::new(&config.identity);
    run_fetch("team members", token, client.team(request)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> WebConfig {
        WebConfig::from_lookup(|_| None)
    }

    #[tokio::test]
    async fn test_portfolio_without_cms_fails_softly() {
        let outcome = load_portfolio(&unconfigured(), &CancelToken::new()).await;
        assert!(outcome.is_failed());
        assert!(outcome.into_items().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_team_size_fails_softly() {
        let outcome = load_team(&unconfigured(), 0, &CancelToken::new()).await;
        assert!(outcome.is_failed());
    }

    #[tokio::test]
    async fn test_unmounted_page_skips_fetch() {
        let token = CancelToken::new();
        token.cancel();
        let outcome = load_team(&unconfigured(), HOME_TEAM_SIZE, &token).await;
        assert!(outcome.is_cancelled());
    }
}
