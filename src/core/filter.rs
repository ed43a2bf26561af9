use crate::core::classify::ClassificationEngine;
use crate::domain::model::{Lead, LeadDetail, PlaceRecord, WebsiteStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CHAIN_EXCLUSION_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.primaryType,places.websiteUri,places.location";
pub const WEBSITE_STATUS_FIELD_MASK: &str =
    "places.id,places.displayName,places.formattedAddress,places.primaryType,places.websiteUri";

/// Which classification policy turns places into leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadFilter {
    /// Drop chains; leads carry website and coordinates for map plotting.
    #[default]
    ChainExclusion,
    /// Drop places with an owned website; leads carry a status label.
    WebsiteStatus,
}

impl LeadFilter {
    pub fn field_mask(&self) -> &'static str {
        match self {
            LeadFilter::ChainExclusion => CHAIN_EXCLUSION_FIELD_MASK,
            LeadFilter::WebsiteStatus => WEBSITE_STATUS_FIELD_MASK,
        }
    }

    /// Returns the lead for a place that passes the filter, `None` otherwise.
    pub fn apply(
        &self,
        engine: &ClassificationEngine,
        place: &PlaceRecord,
        category: &str,
    ) -> Option<Lead> {
        let detail = match self {
            LeadFilter::ChainExclusion => {
                if engine.is_chain(place.name(), place.website()) {
                    return None;
                }
                LeadDetail::Mapped {
                    website_uri: place.website_uri.clone(),
                    lat: place.location.map(|l| l.latitude),
                    lng: place.location.map(|l| l.longitude),
                }
            }
            LeadFilter::WebsiteStatus => match engine.website_status(place.website()) {
                WebsiteStatus::HasWebsite => return None,
                status => LeadDetail::Status { status },
            },
        };

        Some(Lead {
            id: place.id.clone(),
            name: place.name().to_string(),
            address: place.formatted_address.clone(),
            category: category.to_string(),
            detail,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadFilter::ChainExclusion => "chain_exclusion",
            LeadFilter::WebsiteStatus => "website_status",
        }
    }
}

impl fmt::Display for LeadFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "chain_exclusion" | "chain-exclusion" => Ok(LeadFilter::ChainExclusion),
            "website_status" | "website-status" => Ok(LeadFilter::WebsiteStatus),
            other => Err(format!(
                "unknown policy '{}', expected chain_exclusion or website_status",
                other
            )),
        }
    }
}
