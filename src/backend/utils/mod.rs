//! Utility modules for the client backend.

/// Application configuration.
pub mod config;
/// Embedded stylesheets.
pub mod css;
