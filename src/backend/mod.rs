//! Non-UI side of the client: API transport, the session cache, and
//! configuration.

pub mod api;
pub mod services;
pub mod session;
pub mod utils;
