pub mod config;
pub mod data_url;
pub mod error;
pub mod gallery;
pub mod parallax;
pub mod strip;
pub mod transform;

pub use config::ParallaxConfig;
pub use gallery::{GalleryModel, StripSurface};
pub use parallax::{Direction, StripSlot, Viewport};
