//! Loaders for reading game data from RON files.

pub mod map;
pub mod starters;

pub use map::MapLoader;
pub use starters::StarterTables;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read file {}: {}", path.display(), e))
}
