//! Layout components.

pub mod footer;
pub mod main;
pub mod navigation;

pub use footer::Footer;
pub use main::Layout;
pub use navigation::Navigation;
