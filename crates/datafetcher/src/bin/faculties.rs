use catalog::{
    config::{SUBJECT_FACULTIES_FILE, SUBJECT_LINKS_FILE, init_logging},
    store::read_list,
};
use datafetcher::{
    attribution::FacultyAttributor,
    checkpoint::Checkpoint,
    config::{AttributionConfig, FetcherConfig},
    util::{subject_code_from_href, subject_name_from_href},
};
use log::{error, info};
use models::course_data::{Link, SubjectFaculty};
use std::time::Duration;

/// Pause after each successful attribution
const DELAY: Duration = Duration::from_millis(500);

/// Asks a language model which faculty owns each subject, resuming previous progress
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FetcherConfig::from_env();
    let attributor = FacultyAttributor::new(AttributionConfig::from_env()?)?;

    let subject_links = read_list::<Link>(&config.file(SUBJECT_LINKS_FILE))?;
    let output = config.file(SUBJECT_FACULTIES_FILE);
    let mut checkpoint = Checkpoint::<SubjectFaculty>::load(&output)?;

    for link in &subject_links {
        let Some(subject_code) = subject_code_from_href(&link.href) else {
            info!("Skipping invalid link: {}", link.href);
            continue;
        };
        let subject_name = subject_name_from_href(&link.href);

        if checkpoint.contains(&subject_code) {
            info!("Skipping {subject_code} (already processed)");
            continue;
        }

        info!("Processing {subject_code} ({subject_name})...");

        match attributor.attribute(&subject_code, &subject_name).await {
            Ok(faculty) => {
                info!("  -> {faculty}");
                checkpoint.insert(
                    subject_code,
                    SubjectFaculty {
                        name: subject_name,
                        faculty,
                    },
                );
                checkpoint.flush()?;

                tokio::time::sleep(DELAY).await;
            }
            Err(e) => error!("Error processing {subject_code}: {e}"),
        }
    }

    info!("Done! Results saved to {}", output.display());

    Ok(())
}
