use catalog::{
    config::{COURSES_FILE, data_dir, init_logging},
    store::{read_map, write_json},
    unlocks::{CourseDocument, build_unlocks},
};
use log::info;

/// Adds the reverse prerequisite edges to `courses.json` in place
fn main() -> anyhow::Result<()> {
    init_logging();
    let path = data_dir().join(COURSES_FILE);

    let mut courses: CourseDocument = read_map(&path)?;
    let summary = build_unlocks(&mut courses);
    write_json(&path, &courses)?;

    info!("Updated {} courses", summary.courses);
    info!(
        "{} courses unlock at least one other course",
        summary.courses_with_unlocks
    );
    info!("Total unlock relationships: {}", summary.total_unlocks);

    Ok(())
}
