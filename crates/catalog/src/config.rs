use std::path::PathBuf;

/// Output directory for data files
pub const DEFAULT_DATA_DIR: &str = "./data/output";

pub const PREREQUISITES_FILE: &str = "prerequisites.json";
pub const COURSE_EXTRAS_FILE: &str = "course_extras.json";
pub const FACULTIES_ARCHIVE_FILE: &str = "faculties_archive.json";
pub const COURSES_FILE: &str = "courses.json";
pub const SUBJECT_LINKS_FILE: &str = "subject_links.json";
pub const COURSE_LINKS_FILE: &str = "course_links.json";
pub const SUBJECT_FACULTIES_FILE: &str = "subject_faculties.json";

/// Resolves the directory every JSON file is read from and written to
///
/// Loads `.env` if present, then honours `DATA_DIR`, falling back to
/// [`DEFAULT_DATA_DIR`].
pub fn data_dir() -> PathBuf {
    dotenvy::dotenv().ok();

    std::env::var("DATA_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Sets up `env_logger`, defaulting to `info` when `RUST_LOG` is unset
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
