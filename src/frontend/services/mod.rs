//! Frontend services shared across components.

pub mod context;

pub use context::{SessionHandle, use_session};
