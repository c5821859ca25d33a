use serde::{Deserialize, Serialize};

use crate::error::{Error, expect_len};

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// As a `[lon, lat]` array
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<geo::Coord<f64>> for LonLat {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { lon: c.x, lat: c.y }
    }
}

impl From<LonLat> for geo::Coord<f64> {
    fn from(p: LonLat) -> Self {
        geo::coord! { x: p.lon, y: p.lat }
    }
}

impl TryFrom<&[f64]> for LonLat {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Error> {
        expect_len("center", values, 2)?;
        Ok(Self::new(values[0], values[1]))
    }
}

/// Bounding box in geographic coordinates (degrees)
///
/// Fields follow the `[west, south, east, north]` order. The order is trusted:
/// nothing checks that west < east or south < north.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoBoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Southwest corner
    pub fn south_west(&self) -> LonLat {
        LonLat::new(self.west, self.south)
    }

    /// Northeast corner
    pub fn north_east(&self) -> LonLat {
        LonLat::new(self.east, self.north)
    }

    /// As a `[west, south, east, north]` array
    pub fn to_array(self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl From<[f64; 4]> for GeoBoundingBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

impl TryFrom<&[f64]> for GeoBoundingBox {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Error> {
        expect_len("bounds", values, 4)?;
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl From<geo::Rect<f64>> for GeoBoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        let (min, max) = (rect.min(), rect.max());
        Self::new(min.x, min.y, max.x, max.y)
    }
}

/// Note that `geo::Rect` normalizes its corners, so a box given in reverse
/// order comes back with min and max swapped into place.
impl From<GeoBoundingBox> for geo::Rect<f64> {
    fn from(b: GeoBoundingBox) -> Self {
        geo::Rect::new(b.south_west(), b.north_east())
    }
}
