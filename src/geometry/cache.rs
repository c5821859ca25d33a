use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::Projector;

/// Tile size used when none (or zero) is given
pub const DEFAULT_TILE_SIZE: u32 = 256;

static GLOBAL: Lazy<ProjectorCache> = Lazy::new(ProjectorCache::new);

/// Projectors keyed by tile size, built on first request
///
/// Entries are never evicted; realistic tile sizes are a handful of values.
#[derive(Debug, Default)]
pub struct ProjectorCache {
    projectors: RwLock<HashMap<u32, Arc<Projector>>>,
}

impl ProjectorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by the free functions
    pub fn global() -> &'static ProjectorCache {
        &GLOBAL
    }

    /// Get the projector for `tile_size`, building it on a miss
    ///
    /// `None` and `Some(0)` both select [`DEFAULT_TILE_SIZE`].
    pub fn get(&self, tile_size: Option<u32>) -> Arc<Projector> {
        let tile_size = resolve_tile_size(tile_size);

        // A poisoned lock still holds a consistent map: inserts are atomic
        if let Some(projector) = self
            .projectors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tile_size)
        {
            return Arc::clone(projector);
        }

        let mut projectors = self
            .projectors
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let projector = projectors.entry(tile_size).or_insert_with(|| {
            log::debug!("building projector for {}px tiles", tile_size);
            Arc::new(Projector::new(tile_size))
        });
        Arc::clone(projector)
    }

    /// Number of distinct tile sizes cached so far
    pub fn len(&self) -> usize {
        self.projectors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Projector for `tile_size` from the process-wide cache
pub fn get_projector(tile_size: Option<u32>) -> Arc<Projector> {
    ProjectorCache::global().get(tile_size)
}

/// Apply the "zero or unset means default" tile size rule
pub fn resolve_tile_size(tile_size: Option<u32>) -> u32 {
    match tile_size {
        None | Some(0) => DEFAULT_TILE_SIZE,
        Some(size) => size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_tile_size() {
        let cache = ProjectorCache::new();
        assert_eq!(cache.get(None).tile_size(), 256);
        assert_eq!(cache.get(Some(0)).tile_size(), 256);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reuses_projector() {
        let cache = ProjectorCache::new();
        let a = cache.get(Some(512));
        let b = cache.get(Some(512));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        cache.get(Some(256));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_concurrent_inserts_keep_one_entry() {
        let cache = Arc::new(ProjectorCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get(Some(1024)))
            })
            .collect();

        let projectors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.len(), 1);
        assert!(projectors.iter().all(|p| Arc::ptr_eq(p, &projectors[0])));
    }

    #[test]
    fn test_global_cache_shared() {
        let a = get_projector(Some(384));
        let b = ProjectorCache::global().get(Some(384));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_fresh_cache_is_empty() {
        assert!(ProjectorCache::new().is_empty());
    }
}
