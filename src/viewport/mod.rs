pub mod bounds;
pub mod fit;

pub use bounds::{bounds, bounds_from_slices, bounds_with};
pub use fit::{viewport, viewport_from_slices, viewport_with};
