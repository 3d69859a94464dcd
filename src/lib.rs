pub mod cache;
pub mod config;
pub mod observability;
pub mod store;

pub use cache::GraphCache;
pub use store::{RecipeStore, StoreError};
