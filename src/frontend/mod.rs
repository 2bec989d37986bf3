//! Frontend module for the GoldVault client.

pub mod app;
pub mod components;
pub mod guards;
pub mod pages;
pub mod services;
