use crate::{checkpoint::Checkpoint, error::Result, util::PageClient};
use log::info;
use models::course_data::{CourseLinkMap, Link};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Visits every course page listed in `course_links`, resuming from `checkpoint`
///
/// Courses already present in the checkpoint are skipped. Each remaining page is
/// fetched and handed to `process` together with its subject; whatever `process`
/// returns is recorded, including failures, so one bad page never stops the
/// run. The checkpoint is flushed after every subject.
///
/// # Arguments
/// * `client` - Client used to fetch the course pages
/// * `course_links` - Subject name → course links
/// * `checkpoint` - Results collected so far, keyed by course code
/// * `delay` - Pause after each request
/// * `process` - Turns a fetched page (or the fetch error) into a result
pub async fn collect_course_pages<T, F>(
    client: &PageClient,
    course_links: &CourseLinkMap,
    checkpoint: &mut Checkpoint<T>,
    delay: Duration,
    mut process: F,
) -> Result<()>
where
    T: Serialize + DeserializeOwned,
    F: FnMut(&Link, &str, Result<String>) -> T,
{
    let subject_count = course_links.len();
    info!("Found {subject_count} subjects to process");

    for (s, (subject, courses)) in course_links.iter().enumerate() {
        info!(
            "[Subject {}/{}] {} ({} courses)",
            s + 1,
            subject_count,
            subject,
            courses.len()
        );

        for (i, course) in courses.iter().enumerate() {
            let course_code = course.course_code();

            if checkpoint.contains(course_code) {
                info!(
                    "  [{}/{}] Skipping {} (already processed)",
                    i + 1,
                    courses.len(),
                    course_code
                );
                continue;
            }

            info!("  [{}/{}] Processing: {}", i + 1, courses.len(), course.text);

            let page = client.fetch_html(&course.href).await;
            let result = process(course, subject.as_str(), page);
            checkpoint.insert(course_code, result);

            tokio::time::sleep(delay).await;
        }

        checkpoint.flush()?;
        info!("  Saved progress ({} courses total)", checkpoint.len());
    }

    Ok(())
}
