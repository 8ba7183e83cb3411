use catalog::{
    config::{COURSE_LINKS_FILE, SUBJECT_LINKS_FILE, init_logging},
    store::{read_list, write_json},
};
use datafetcher::{
    config::FetcherConfig,
    pages::{extract_links, has_link_boxes},
    util::{PageClient, group_param},
};
use log::{info, warn};
use models::course_data::{CourseLinkMap, Link};
use reqwest::Url;
use scraper::Html;
use std::time::Duration;

/// Pause after each subject page
const DELAY: Duration = Duration::from_millis(500);

/// Collects the course links listed on every subject page
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FetcherConfig::from_env();

    let subject_links = read_list::<Link>(&config.file(SUBJECT_LINKS_FILE))?;
    info!("Found {} subjects to process", subject_links.len());

    let client = PageClient::new()?;
    let mut course_links = CourseLinkMap::new();

    for (i, subject) in subject_links.iter().enumerate() {
        let subject_name = group_param(&subject.href).unwrap_or_else(|| subject.text.clone());
        info!(
            "[{}/{}] Processing: {}",
            i + 1,
            subject_links.len(),
            subject_name
        );

        let links = match client.fetch_html(&subject.href).await {
            Ok(html) => {
                let document = Html::parse_document(&html);
                if !has_link_boxes(&document) {
                    info!("  No collapsible boxes found for {subject_name}");
                }
                let base = Url::parse(&subject.href)?;
                extract_links(&document, &base)
            }
            Err(e) => {
                warn!("  Failed to load {subject_name}: {e}");
                Vec::new()
            }
        };

        info!("  Found {} course links", links.len());
        course_links.insert(subject_name, links);

        tokio::time::sleep(DELAY).await;
    }

    let output = config.file(COURSE_LINKS_FILE);
    write_json(&output, &course_links)?;
    info!(
        "Done! Saved course links for {} subjects to {}",
        course_links.len(),
        output.display()
    );

    Ok(())
}
