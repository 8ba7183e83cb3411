pub mod archive;
pub mod attribution;
pub mod checkpoint;
pub mod collect;
pub mod config;
pub mod courses;
pub mod error;
pub mod pages;
pub mod util;

pub use error::{FetchError, Result};
