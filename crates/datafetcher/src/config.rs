use crate::error::{FetchError, Result};
use std::path::PathBuf;

/// Course catalog index listing every subject
pub const DEFAULT_CATALOG_URL: &str =
    "https://uwaterloo.ca/academic-calendar/undergraduate-studies/catalog#/courses";

/// Archived calendar page whose table maps subject codes to their owning faculty
pub const DEFAULT_ARCHIVE_URL: &str = "https://academic-calendar-archive.uwaterloo.ca/undergraduate-studies/2023-2024/page/Course-Descriptions-Index.html";

/// Model used to attribute subjects to faculties
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Reads an environment variable, treating blank values as unset
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Settings shared by the page collectors
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub data_dir: PathBuf,
    pub catalog_url: String,
    pub archive_url: String,
}

impl FetcherConfig {
    /// Loads `.env` if present and reads `DATA_DIR`, `CATALOG_URL` and `ARCHIVE_URL`
    pub fn from_env() -> Self {
        Self {
            data_dir: catalog::config::data_dir(),
            catalog_url: env_or("CATALOG_URL", DEFAULT_CATALOG_URL),
            archive_url: env_or("ARCHIVE_URL", DEFAULT_ARCHIVE_URL),
        }
    }

    /// Path of a data file inside [`FetcherConfig::data_dir`]
    pub fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

/// Credentials for the faculty attribution API
#[derive(Debug, Clone)]
pub struct AttributionConfig {
    pub api_key: String,
    pub model: String,
}

impl AttributionConfig {
    /// Reads `ANTHROPIC_API_KEY` (required) and `ANTHROPIC_MODEL`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FetchError::Config("ANTHROPIC_API_KEY environment variable must be set".into())
            })?;

        Ok(Self {
            api_key,
            model: env_or("ANTHROPIC_MODEL", DEFAULT_MODEL),
        })
    }
}
