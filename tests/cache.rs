use smartmeal::{GraphCache, RecipeStore, StoreError};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

const TWO_RECIPES: &str = r#"[
  {"id": 1, "name": "Arroz con pollo", "ingredients": ["pollo", "arroz", "ajo", "cebolla", "aceite"]},
  {"id": 2, "name": "Tortilla", "ingredients": ["huevo", "cebolla", "aceite"]}
]"#;

const ONE_RECIPE: &str = r#"[
  {"id": 3, "name": "Frittata", "ingredients": ["huevo", "leche", "aceite"]}
]"#;

/// Pin the file mtime so freshness changes are deterministic regardless of
/// filesystem timestamp granularity.
fn set_modified(path: &Path, seconds: u64) {
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(UNIX_EPOCH + Duration::from_secs(seconds))
        .unwrap();
}

fn cache_over(path: &Path) -> GraphCache {
    GraphCache::new(RecipeStore::new(path))
}

#[test]
fn unchanged_source_returns_the_cached_graph() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, TWO_RECIPES).unwrap();
    set_modified(&path, 1_000);

    let cache = cache_over(&path);
    let first = cache.get().unwrap();
    let second = cache.get().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.recipe_count(), 2);
}

#[test]
fn changed_source_triggers_a_rebuild() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, TWO_RECIPES).unwrap();
    set_modified(&path, 1_000);

    let cache = cache_over(&path);
    let first = cache.get().unwrap();
    assert_eq!(first.recipe_count(), 2);

    fs::write(&path, ONE_RECIPE).unwrap();
    set_modified(&path, 2_000);

    let second = cache.get().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.recipe_count(), 1);
    assert_eq!(second.recipe_names(), vec!["Frittata"]);
}

#[test]
fn timestamps_never_mix_across_rebuilds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, TWO_RECIPES).unwrap();
    set_modified(&path, 1_000);

    let cache = cache_over(&path);
    cache.get().unwrap();

    // Same content, new mtime: rebuild happens, then the new stamp is cached.
    set_modified(&path, 2_000);
    let rebuilt = cache.get().unwrap();
    let again = cache.get().unwrap();
    assert!(Arc::ptr_eq(&rebuilt, &again));
}

#[test]
fn invalidate_forces_a_rebuild() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, TWO_RECIPES).unwrap();
    set_modified(&path, 1_000);

    let cache = cache_over(&path);
    let first = cache.get().unwrap();
    cache.invalidate();
    let second = cache.get().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn source_failures_propagate_without_stale_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, TWO_RECIPES).unwrap();
    set_modified(&path, 1_000);

    let cache = cache_over(&path);
    cache.get().unwrap();

    // Fresh read fails: surface the failure, never the stale graph.
    fs::write(&path, "{not json").unwrap();
    set_modified(&path, 2_000);
    assert!(matches!(cache.get(), Err(StoreError::Malformed { .. })));

    fs::remove_file(&path).unwrap();
    assert!(matches!(cache.get(), Err(StoreError::Unreadable { .. })));
}

#[test]
fn concurrent_readers_share_one_graph() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, TWO_RECIPES).unwrap();
    set_modified(&path, 1_000);

    let cache = Arc::new(cache_over(&path));
    let baseline = cache.get().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.get().unwrap())
        })
        .collect();

    for handle in handles {
        let graph = handle.join().unwrap();
        assert!(Arc::ptr_eq(&baseline, &graph));
    }
}
