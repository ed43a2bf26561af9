pub mod classify;
pub mod filter;
pub mod registry;
pub mod search;

pub use crate::domain::model::{Lead, LeadDetail, PlaceRecord, WebsiteStatus};
pub use crate::domain::ports::{PlacesClient, TextSearch};
pub use crate::utils::error::Result;
