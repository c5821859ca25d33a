pub mod bbox;
pub mod viewport;

pub use bbox::{GeoBoundingBox, LonLat};
pub use viewport::{PixelDimensions, Viewport};
