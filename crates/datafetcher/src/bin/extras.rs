use catalog::{
    config::{COURSE_EXTRAS_FILE, COURSE_LINKS_FILE, init_logging},
    store::read_map,
};
use datafetcher::{
    checkpoint::Checkpoint,
    collect::collect_course_pages,
    config::FetcherConfig,
    courses::{EXTRAS_DELAY_MS, course_extra},
    util::PageClient,
};
use log::info;
use models::course_data::{CourseExtra, Link};
use std::time::Duration;

/// Collects the title and description of every listed course, resuming previous progress
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FetcherConfig::from_env();

    let course_links = read_map::<Vec<Link>>(&config.file(COURSE_LINKS_FILE))?;
    let mut checkpoint = Checkpoint::<CourseExtra>::load(config.file(COURSE_EXTRAS_FILE))?;

    let client = PageClient::new()?;
    collect_course_pages(
        &client,
        &course_links,
        &mut checkpoint,
        Duration::from_millis(EXTRAS_DELAY_MS),
        course_extra,
    )
    .await?;

    info!(
        "Done! Saved extras for {} courses to {COURSE_EXTRAS_FILE}",
        checkpoint.len()
    );

    Ok(())
}
