//! Application root and routing.

pub mod main;
pub mod route;

pub use main::App;
