pub mod config;
pub mod error;
pub mod merge;
pub mod store;
pub mod unlocks;

pub use error::{CatalogError, Result};
