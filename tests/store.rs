use smartmeal::{RecipeStore, StoreError};
use std::fs;
use tempfile::TempDir;

const RECIPES_JSON: &str = r#"[
  {"id": 1, "name": "Arroz con pollo", "ingredients": ["pollo", "arroz", "ajo", "cebolla", "aceite"]},
  {"id": 2, "name": "Tortilla", "ingredients": ["huevo", "cebolla", "aceite"]}
]"#;

#[test]
fn loads_records_from_json_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, RECIPES_JSON).unwrap();

    let store = RecipeStore::new(&path);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Arroz con pollo");
    assert_eq!(records[1].ingredients, vec!["huevo", "cebolla", "aceite"]);
}

#[test]
fn exposes_last_modified_marker() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, RECIPES_JSON).unwrap();

    let store = RecipeStore::new(&path);
    let modified = store.last_modified().unwrap();
    assert_eq!(modified, fs::metadata(&path).unwrap().modified().unwrap());
}

#[test]
fn missing_file_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::new(dir.path().join("nope.json"));

    assert!(matches!(
        store.last_modified(),
        Err(StoreError::Unreadable { .. })
    ));
    assert!(matches!(store.load(), Err(StoreError::Unreadable { .. })));
}

#[test]
fn invalid_json_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, "{not json").unwrap();

    let store = RecipeStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
}

#[test]
fn non_string_ingredient_entries_are_rejected_at_parse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(
        &path,
        r#"[{"id": 1, "name": "Tortilla", "ingredients": ["huevo", 3]}]"#,
    )
    .unwrap();

    let store = RecipeStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
}
