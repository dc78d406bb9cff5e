//! Identity Generator
//!
//! Placeholder team photos and names from randomuser.me, plus the contact
//! details the team page shows next to each photo.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IdentityConfig;
use crate::copy::TEAM_ROLES;
use crate::error::{ContentError, Result};
use crate::model::TeamMember;

/// Upper bound the generator accepts for `results`
pub const MAX_RESULTS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Parameters for one identity fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamRequest {
    pub results: u32,
    pub gender: Option<Gender>,
}

impl TeamRequest {
    pub fn new(results: u32) -> Result<Self> {
        if results == 0 || results > MAX_RESULTS {
            return Err(ContentError::InvalidRequest(format!(
                "results must be between 1 and {MAX_RESULTS}, got {results}"
            )));
        }
        Ok(Self { results, gender: None })
    }

    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("results", self.results.to_string())];
        if let Some(gender) = self.gender {
            query.push(("gender", gender.as_str().to_string()));
        }
        query
    }
}

/// Source of synthetic team members
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentitySource {
    async fn team(&self, request: TeamRequest) -> Result<Vec<TeamMember>>;
}

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    name: RandomUserName,
    picture: RandomUserPicture,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RandomUserPicture {
    large: String,
}

impl From<RandomUser> for TeamMember {
    fn from(user: RandomUser) -> Self {
        Self {
            first_name: user.name.first,
            last_name: user.name.last,
            picture_url: user.picture.large,
            email: user.email,
        }
    }
}

/// HTTP client for randomuser.me
#[derive(Clone, Debug)]
pub struct RandomUserClient {
    client: reqwest::Client,
    config: IdentityConfig,
}

impl RandomUserClient {
    pub fn new(config: &IdentityConfig) -> Self {
        Self { client: reqwest::Client::new(), config: config.clone() }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentitySource for RandomUserClient {
    async fn team(&self, request: TeamRequest) -> Result<Vec<TeamMember>> {
        let url = self.config.api_url();
        let response = self.client.get(&url).query(&request.query()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status { status: status.as_u16(), url });
        }

        let body = response.text().await?;
        let parsed: RandomUserResponse = serde_json::from_str(&body)?;
        Ok(parsed.results.into_iter().map(TeamMember::from).collect())
    }
}

/// A team member as shown on the team page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub member: TeamMember,
    pub role: &'static str,
    pub contact_email: String,
    pub contact_phone: String,
}

/// Attach roles and contact details in display order.
///
/// Roles cycle through [`TEAM_ROLES`] by position.
pub fn roster(members: Vec<TeamMember>) -> Vec<RosterEntry> {
    members
        .into_iter()
        .enumerate()
        .map(|(index, member)| RosterEntry {
            role: TEAM_ROLES[index % TEAM_ROLES.len()],
            contact_email: contact_email(&member.first_name, &member.last_name),
            contact_phone: contact_phone(&member.full_name()),
            member,
        })
        .collect()
}

pub fn contact_email(first: &str, last: &str) -> String {
    format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase())
}

/// `+1 (555) XXX-XXXX`, stable for a given name
pub fn contact_phone(name: &str) -> String {
    let seed = name
        .bytes()
        .fold(0x811c_9dc5_u32, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193));
    let exchange = 100 + seed % 900;
    let line = 1000 + (seed / 900) % 9000;
    format!("+1 (555) {exchange}-{line}")
}
