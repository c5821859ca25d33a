use std::f64::consts::LN_2;

use crate::config::FitOptions;
use crate::domain::{GeoBoundingBox, PixelDimensions, Viewport};
use crate::error::Result;
use crate::geometry::ProjectorCache;

/// Fit a viewport to `bounds` using the process-wide projector cache
///
/// See [`viewport_with`].
pub fn viewport(
    bounds: &GeoBoundingBox,
    dimensions: PixelDimensions,
    options: &FitOptions,
) -> Viewport {
    viewport_with(ProjectorCache::global(), bounds, dimensions, options)
}

/// Fit a viewport to `bounds` so the whole box is visible in `dimensions`
///
/// The box is projected at `max_zoom`. Each axis gives the zoom at which it
/// exactly fills the target. The smaller of the two wins, is floored unless
/// fractional zooms are allowed, and is clamped into `[min_zoom, max_zoom]`.
/// The center is the midpoint of the projected box, unprojected at
/// `max_zoom`.
///
/// Degenerate input is not rejected: a zero-size box axis leaves the other
/// axis in control (and a point box clamps to `max_zoom`), while a zero
/// pixel dimension clamps to `min_zoom`.
pub fn viewport_with(
    cache: &ProjectorCache,
    bounds: &GeoBoundingBox,
    dimensions: PixelDimensions,
    options: &FitOptions,
) -> Viewport {
    let projector = cache.get(options.tile_size);
    let base = options.max_zoom;

    let (bl_x, bl_y) = projector.project(bounds.south_west(), base);
    let (tr_x, tr_y) = projector.project(bounds.north_east(), base);

    let width = tr_x - bl_x;
    let height = bl_y - tr_y;
    let center_x = bl_x + width / 2.0;
    let center_y = tr_y + height / 2.0;

    let zoom = fitted_zoom(
        base,
        [width / dimensions.width, height / dimensions.height],
        options.allow_fractional_zoom,
    );
    let zoom = clamp_zoom(zoom, options.min_zoom, options.max_zoom);

    let center = projector.to_lonlat(center_x, center_y, base);
    log::trace!(
        "fitted {:?} into {}x{}px -> center ({:.6}, {:.6}) zoom {}",
        bounds,
        dimensions.width,
        dimensions.height,
        center.lon,
        center.lat,
        zoom
    );

    Viewport { center, zoom }
}

/// Fit a viewport from `[west, south, east, north]` and `[width, height]` slices
pub fn viewport_from_slices(
    bounds: &[f64],
    dimensions: &[f64],
    options: &FitOptions,
) -> Result<Viewport> {
    let bounds = GeoBoundingBox::try_from(bounds)?;
    let dimensions = PixelDimensions::try_from(dimensions)?;
    Ok(viewport(&bounds, dimensions, options))
}

/// Zoom at which both axes fit, given each axis' extent/target ratio at `base`
fn fitted_zoom(base: f64, ratios: [f64; 2], allow_fractional: bool) -> f64 {
    let [x, y] = ratios.map(|ratio| base - ratio.ln() / LN_2);
    let zoom = nan_min(x, y);
    if allow_fractional { zoom } else { zoom.floor() }
}

/// Clamp into `[min, max]`, letting NaN through
fn clamp_zoom(zoom: f64, min: f64, max: f64) -> f64 {
    nan_max(min, nan_min(max, zoom))
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}
