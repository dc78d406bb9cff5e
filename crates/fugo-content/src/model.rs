//! Domain Models
//!
//! Records handed to the page layer. Everything here is immutable once
//! fetched; pages replace whole vectors rather than editing items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A resolved portfolio entry from the content repository
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    /// Free-form category label as stored in the CMS
    pub service_category: String,
    /// Always carries a scheme (see [`normalize_image_url`])
    pub image_url: String,
}

impl PortfolioItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        service_category: impl Into<String>,
        image_url: &str,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            service_category: service_category.into(),
            image_url: normalize_image_url(image_url),
        }
    }
}

/// Asset URLs from the CMS are protocol-relative (`//images.ctfassets.net/...`).
pub fn normalize_image_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with("https://") || raw.starts_with("http://") {
        raw.to_string()
    } else if raw.starts_with("//") {
        format!("https:{raw}")
    } else {
        format!("https://{}", raw.trim_start_matches('/'))
    }
}

/// A synthetic team member from the identity generator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub first_name: String,
    pub last_name: String,
    pub picture_url: String,
    pub email: Option<String>,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The agency's service lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    DigitalDesign,
    DigitalBranding,
    MerchandiseProduction,
    ProductionHouse,
    EventOrganizer,
}

impl ServiceCategory {
    pub const ALL: [Self; 5] = [
        Self::DigitalDesign,
        Self::DigitalBranding,
        Self::MerchandiseProduction,
        Self::ProductionHouse,
        Self::EventOrganizer,
    ];

    /// Label exactly as stored in the CMS `service` field
    pub const fn label(self) -> &'static str {
        match self {
            Self::DigitalDesign => "Digital Design",
            Self::DigitalBranding => "Digital Branding",
            Self::MerchandiseProduction => "Merchandise Production",
            Self::ProductionHouse => "Production House",
            Self::EventOrganizer => "Event Organizer",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceCategory {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ContentError::InvalidRequest(format!("unknown service category: {s}")))
    }
}

/// Portfolio page selection: everything, or a single service line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Selectable filters in display order
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ServiceCategory::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.service_category == category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}
