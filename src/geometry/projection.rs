use std::f64::consts::PI;

use crate::domain::LonLat;

/// Number of zoom levels with precomputed scale constants
const PRECOMPUTED_LEVELS: usize = 30;

/// Sine of latitude is clamped to this to keep the poles finite
const MAX_SIN_LAT: f64 = 0.9999;

/// Scale constants for one zoom level
#[derive(Debug, Clone, Copy, PartialEq)]
struct LevelScale {
    /// Pixels per degree of longitude
    per_degree: f64,
    /// Pixels per radian
    per_radian: f64,
    /// Half the world width in pixels
    half: f64,
    /// World width in pixels
    size: f64,
}

impl LevelScale {
    fn for_size(size: f64) -> Self {
        Self {
            per_degree: size / 360.0,
            per_radian: size / (2.0 * PI),
            half: size / 2.0,
            size,
        }
    }
}

/// Spherical Mercator projection between lon/lat and world pixels
///
/// The world at zoom `z` is `tile_size * 2^z` pixels wide. Pixel y grows
/// southward. At integral zooms the forward projection snaps to whole pixels,
/// at fractional zooms it does not.
#[derive(Debug, Clone)]
pub struct Projector {
    tile_size: u32,
    levels: [LevelScale; PRECOMPUTED_LEVELS],
}

impl Projector {
    /// Create a projector for the given tile edge length in pixels
    pub fn new(tile_size: u32) -> Self {
        let base = f64::from(tile_size);
        let levels =
            std::array::from_fn(|level| LevelScale::for_size(base * (1u64 << level) as f64));
        Self { tile_size, levels }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// World width (and height) in pixels at `zoom`
    pub fn map_size(&self, zoom: f64) -> f64 {
        self.scale(zoom).size
    }

    fn scale(&self, zoom: f64) -> LevelScale {
        if is_integral(zoom) && zoom >= 0.0 && zoom < PRECOMPUTED_LEVELS as f64 {
            self.levels[zoom as usize]
        } else {
            LevelScale::for_size(f64::from(self.tile_size) * 2f64.powf(zoom))
        }
    }

    /// Project a lon/lat pair to world pixels at `zoom`
    ///
    /// # Returns
    /// * (x, y) with x growing east and y growing south, capped at the world size
    pub fn to_pixel(&self, lon: f64, lat: f64, zoom: f64) -> (f64, f64) {
        let s = self.scale(zoom);
        let f = lat.to_radians().sin().clamp(-MAX_SIN_LAT, MAX_SIN_LAT);

        let mut x = s.half + lon * s.per_degree;
        let mut y = s.half + 0.5 * ((1.0 + f) / (1.0 - f)).ln() * -s.per_radian;

        if is_integral(zoom) {
            x = x.round();
            y = y.round();
        }

        // Only the upper edge is capped; NaN passes through untouched
        if x > s.size {
            x = s.size;
        }
        if y > s.size {
            y = s.size;
        }

        (x, y)
    }

    /// Unproject world pixels at `zoom` back to lon/lat
    pub fn to_lonlat(&self, x: f64, y: f64, zoom: f64) -> LonLat {
        let s = self.scale(zoom);
        let g = (y - s.half) / -s.per_radian;
        let lon = (x - s.half) / s.per_degree;
        let lat = (2.0 * g.exp().atan() - 0.5 * PI).to_degrees();
        LonLat::new(lon, lat)
    }

    /// Project a [`LonLat`] to world pixels at `zoom`
    pub fn project(&self, point: LonLat, zoom: f64) -> (f64, f64) {
        self.to_pixel(point.lon, point.lat, zoom)
    }
}

fn is_integral(zoom: f64) -> bool {
    zoom.fract() == 0.0
}
