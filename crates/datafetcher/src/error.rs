use catalog::CatalogError;

/// Errors raised while collecting pages or talking to the attribution API
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    /// A required element never showed up on the page
    #[error("no element matching `{selector}` on page")]
    MissingElement { selector: String },

    /// The page loaded but never mentioned the course it was fetched for
    #[error("course {course_code} not found on page")]
    CourseNotFound { course_code: String },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}
