use std::path::PathBuf;

/// Errors raised while reading or writing the persisted JSON files
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file parsed, but its top-level value is not the expected kind
    #[error("expected a top-level {expected} in {path:?}, found {found}")]
    Shape {
        path: PathBuf,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
