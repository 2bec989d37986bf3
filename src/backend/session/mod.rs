//! Session model and the cache the guards read from.

pub mod error;
pub mod models;
pub mod query;

pub use error::SessionError;
pub use models::{Role, Session, User};
pub use query::{BoxedSource, SessionQuery, SessionSource};
