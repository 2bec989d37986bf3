//! Application pages.

pub mod admin;
pub mod auth;
pub mod consignment;
pub mod dashboard;
pub mod errors;
pub mod home;
pub mod landing;
pub mod tracking;
