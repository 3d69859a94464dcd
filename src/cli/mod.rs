pub mod catalog;
pub mod classify;

use smartmeal::config::Config;
use smartmeal::{GraphCache, RecipeStore};

/// Open the graph cache over the configured data file, honoring the
/// `--data` override.
pub fn open_cache(config: &Config, data_override: Option<String>) -> GraphCache {
    let path = data_override.unwrap_or_else(|| config.data.path.clone());
    GraphCache::new(RecipeStore::new(path))
}
