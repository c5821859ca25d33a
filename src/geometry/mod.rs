pub mod cache;
pub mod projection;

pub use cache::{DEFAULT_TILE_SIZE, ProjectorCache, get_projector, resolve_tile_size};
pub use projection::Projector;
