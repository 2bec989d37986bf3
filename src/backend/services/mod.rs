//! Domain services.

pub mod tracking;

pub use tracking::TrackingNumber;
