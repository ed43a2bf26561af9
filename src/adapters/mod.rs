// Adapters layer: concrete implementations of domain ports for external systems.

pub mod places_client;

pub use places_client::GooglePlacesClient;
