//! Route guards.

pub mod access;
pub mod protected;
pub mod public;

pub use access::AccessPolicy;
pub use protected::Protected;
pub use public::Public;
