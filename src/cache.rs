use crate::store::{RecipeStore, StoreError};
use recipe_graph::{build_graph, RecipeGraph};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

struct CacheState {
    graph: Arc<RecipeGraph>,
    modified: SystemTime,
}

/// Memoizes the built recipe graph, keyed by the source's last-modified
/// timestamp.
///
/// The whole check-rebuild-store sequence runs under one mutex, so
/// concurrent callers never observe a half-updated (graph, timestamp) pair
/// and never rebuild the same graph twice. Read or parse failures propagate
/// to the caller; a stale graph is never served in their place.
pub struct GraphCache {
    store: RecipeStore,
    state: Mutex<Option<CacheState>>,
}

impl GraphCache {
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store,
            state: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Return the cached graph, rebuilding first if the source changed.
    pub fn get(&self) -> Result<Arc<RecipeGraph>, StoreError> {
        let modified = self.store.last_modified()?;
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = state.as_ref() {
            if cached.modified == modified {
                tracing::debug!("recipe graph cache hit");
                return Ok(Arc::clone(&cached.graph));
            }
        }

        let records = self.store.load()?;
        let graph = Arc::new(build_graph(&records));
        tracing::info!(
            ingredients = graph.ingredient_count(),
            recipes = graph.recipe_count(),
            edges = graph.edge_count(),
            "recipe graph rebuilt"
        );
        *state = Some(CacheState {
            graph: Arc::clone(&graph),
            modified,
        });
        Ok(graph)
    }

    /// Drop the cached graph; the next [`get`] rebuilds unconditionally.
    ///
    /// [`get`]: GraphCache::get
    pub fn invalidate(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = None;
    }
}
