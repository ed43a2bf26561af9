pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::GooglePlacesClient;
pub use crate::config::AppConfig;
pub use crate::core::{
    classify::ClassificationEngine, filter::LeadFilter, registry::Registry,
    search::SearchOrchestrator,
};
pub use crate::domain::model::{Lead, LeadDetail, PlaceRecord, WebsiteStatus};
pub use crate::utils::error::{LeadError, Result};
