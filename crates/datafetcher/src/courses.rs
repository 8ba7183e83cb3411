use crate::{
    error::{FetchError, Result},
    pages::{DESCRIPTION_BOX, extract_description, extract_prerequisites, page_mentions_course},
};
use log::{info, warn};
use models::course_data::{CourseExtra, Link, PrerequisiteEntry};
use scraper::Html;

/// Pause after each prerequisite page
pub const PREREQUISITES_DELAY_MS: u64 = 300;

/// Pause after each description page
pub const EXTRAS_DELAY_MS: u64 = 50;

/// Turns a fetched course page into its prerequisite entry
///
/// The page must mention the course it was fetched for; otherwise, like any fetch
/// failure, the entry is recorded with no prerequisites and the error message.
///
/// # Arguments
/// * `link` - The course link that was visited
/// * `subject` - The subject the course is listed under
/// * `page` - The page HTML, or the error fetching it
pub fn prerequisite_entry(link: &Link, subject: &str, page: Result<String>) -> PrerequisiteEntry {
    let course_code = link.course_code();

    let prerequisites = page.and_then(|html| {
        let document = Html::parse_document(&html);
        if page_mentions_course(&document, course_code) {
            Ok(extract_prerequisites(&document))
        } else {
            Err(FetchError::CourseNotFound {
                course_code: course_code.to_string(),
            })
        }
    });

    match prerequisites {
        Ok(prerequisites) => {
            if prerequisites.is_empty() {
                info!("    No prerequisites found");
            } else {
                info!("    Found prerequisites: {}", prerequisites.join(", "));
            }

            PrerequisiteEntry {
                name: link.text.clone(),
                subject: Some(subject.to_string()),
                prerequisites,
                error: None,
            }
        }
        Err(e) => {
            warn!("    Error: {e}");

            PrerequisiteEntry {
                name: link.text.clone(),
                subject: Some(subject.to_string()),
                prerequisites: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Turns a fetched course page into its title and description
///
/// A page without a description box counts as a failure. Failed pages are
/// recorded with an empty description, the error message, and no subject.
///
/// # Arguments
/// * `link` - The course link that was visited
/// * `subject` - The subject the course is listed under
/// * `page` - The page HTML, or the error fetching it
pub fn course_extra(link: &Link, subject: &str, page: Result<String>) -> CourseExtra {
    let description = page.and_then(|html| {
        extract_description(&Html::parse_document(&html)).ok_or_else(|| FetchError::missing(DESCRIPTION_BOX))
    });

    match description {
        Ok(description) => {
            if description.is_empty() {
                info!("    Description: None found");
            } else {
                let preview: String = description.chars().take(50).collect();
                info!("    Description: {preview}...");
            }

            CourseExtra {
                title: link.text.clone(),
                subject: Some(subject.to_string()),
                description,
                error: None,
            }
        }
        Err(e) => {
            warn!("    Error: {e}");

            CourseExtra {
                title: link.text.clone(),
                subject: None,
                description: String::new(),
                error: Some(e.to_string()),
            }
        }
    }
}
