//! Common reusable UI components.

pub mod carousel;
pub mod loading;

pub use carousel::{Carousel, Slide};
pub use loading::LoadingIndicator;
