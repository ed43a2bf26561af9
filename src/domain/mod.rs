// Domain layer: place/lead models and the provider port. No HTTP or config concerns here.

pub mod model;
pub mod ports;
