use serde::{Deserialize, Serialize};

use super::LonLat;
use crate::error::{Error, expect_len};

/// Target viewport size in pixels
///
/// A zero dimension is not rejected; it drives the fitted zoom to the
/// configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelDimensions {
    pub width: f64,
    pub height: f64,
}

impl PixelDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for PixelDimensions {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl TryFrom<&[f64]> for PixelDimensions {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Error> {
        expect_len("dimensions", values, 2)?;
        Ok(Self::new(values[0], values[1]))
    }
}

/// A map view: center coordinate plus zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LonLat,
    pub zoom: f64,
}
