//! geoviewport - fit a map viewport to a geographic bounding box, and back
//!
//! Two operations over a spherical Mercator projection:
//! - [`viewport`]: the center and largest zoom at which a bounding box fits
//!   a pixel viewport
//! - [`bounds`]: the bounding box visible at a given center, zoom and size
//!
//! ```
//! use geoviewport::{FitOptions, GeoBoundingBox, PixelDimensions, viewport};
//!
//! let bbox = GeoBoundingBox::new(5.668344, 45.111511, 5.852472, 45.268002);
//! let vp = viewport(&bbox, PixelDimensions::new(640.0, 480.0), &FitOptions::default());
//! assert_eq!(vp.zoom, 11.0);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod viewport;

pub use config::FitOptions;
pub use domain::{GeoBoundingBox, LonLat, PixelDimensions, Viewport};
pub use error::{Error, Result};
pub use geometry::{DEFAULT_TILE_SIZE, Projector, ProjectorCache, get_projector};
pub use viewport::{
    bounds, bounds_from_slices, bounds_with, viewport, viewport_from_slices, viewport_with,
};
