use catalog::{
    config::{COURSE_LINKS_FILE, PREREQUISITES_FILE, init_logging},
    store::read_map,
};
use datafetcher::{
    checkpoint::Checkpoint,
    collect::collect_course_pages,
    config::FetcherConfig,
    courses::{PREREQUISITES_DELAY_MS, prerequisite_entry},
    util::PageClient,
};
use log::info;
use models::course_data::{Link, PrerequisiteEntry};
use std::time::Duration;

/// Collects the prerequisites of every listed course, resuming previous progress
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FetcherConfig::from_env();

    let course_links = read_map::<Vec<Link>>(&config.file(COURSE_LINKS_FILE))?;
    let mut checkpoint = Checkpoint::<PrerequisiteEntry>::load(config.file(PREREQUISITES_FILE))?;

    let client = PageClient::new()?;
    collect_course_pages(
        &client,
        &course_links,
        &mut checkpoint,
        Duration::from_millis(PREREQUISITES_DELAY_MS),
        prerequisite_entry,
    )
    .await?;

    info!(
        "Done! Saved prerequisites for {} courses to {PREREQUISITES_FILE}",
        checkpoint.len()
    );

    Ok(())
}
