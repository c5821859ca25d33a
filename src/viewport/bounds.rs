use crate::domain::{GeoBoundingBox, LonLat, PixelDimensions};
use crate::error::Result;
use crate::geometry::ProjectorCache;

/// Bounding box visible around `center` at `zoom`, using the process-wide cache
///
/// See [`bounds_with`].
pub fn bounds(
    center: LonLat,
    zoom: f64,
    dimensions: PixelDimensions,
    tile_size: Option<u32>,
) -> GeoBoundingBox {
    bounds_with(ProjectorCache::global(), center, zoom, dimensions, tile_size)
}

/// Bounding box covered by a `dimensions`-sized view centered on `center`
///
/// The center is projected at `zoom`, offset by half the dimensions toward
/// the top-left and bottom-right, and both corners are unprojected at the
/// same zoom. West and north come from the top-left corner, east and south
/// from the bottom-right.
pub fn bounds_with(
    cache: &ProjectorCache,
    center: LonLat,
    zoom: f64,
    dimensions: PixelDimensions,
    tile_size: Option<u32>,
) -> GeoBoundingBox {
    let projector = cache.get(tile_size);
    let (x, y) = projector.project(center, zoom);

    let half_w = dimensions.width / 2.0;
    let half_h = dimensions.height / 2.0;

    let top_left = projector.to_lonlat(x - half_w, y - half_h, zoom);
    let bottom_right = projector.to_lonlat(x + half_w, y + half_h, zoom);

    GeoBoundingBox::new(top_left.lon, bottom_right.lat, bottom_right.lon, top_left.lat)
}

/// Bounds from a `[lon, lat]` center and `[width, height]` slices
pub fn bounds_from_slices(
    center: &[f64],
    zoom: f64,
    dimensions: &[f64],
    tile_size: Option<u32>,
) -> Result<GeoBoundingBox> {
    let center = LonLat::try_from(center)?;
    let dimensions = PixelDimensions::try_from(dimensions)?;
    Ok(bounds(center, zoom, dimensions, tile_size))
}
