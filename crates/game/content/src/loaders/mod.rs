//! Content loaders for reading battle data from files.
//!
//! Every loader offers `load(path)` for files on disk, `parse(source)` for
//! in-memory text and `embedded()` for the content shipped in [`crate::embedded`].

pub mod actions;
pub mod config;
pub mod scenario;

pub use actions::ActionCatalogLoader;
pub use config::ConfigLoader;
pub use scenario::{AreaOrder, Order, Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
