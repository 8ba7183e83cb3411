use catalog::{
    config::{
        COURSES_FILE, COURSE_EXTRAS_FILE, FACULTIES_ARCHIVE_FILE, PREREQUISITES_FILE, data_dir,
        init_logging,
    },
    merge::merge_courses,
    store::{read_list, read_map, write_json},
};
use log::info;
use models::course_data::{CourseExtra, FacultyArchiveEntry, PrerequisiteEntry};

/// Joins the scraped prerequisites, extras and faculty archive into `courses.json`
fn main() -> anyhow::Result<()> {
    init_logging();
    let dir = data_dir();

    let prerequisites = read_map::<PrerequisiteEntry>(&dir.join(PREREQUISITES_FILE))?;
    let extras = read_map::<CourseExtra>(&dir.join(COURSE_EXTRAS_FILE))?;
    let faculties = read_list::<FacultyArchiveEntry>(&dir.join(FACULTIES_ARCHIVE_FILE))?;

    let (courses, summary) = merge_courses(&prerequisites, &extras, &faculties);

    let output = dir.join(COURSES_FILE);
    write_json(&output, &courses)?;

    info!("Combined {} courses into {}", summary.courses, output.display());
    info!("- From {PREREQUISITES_FILE}: {} courses", summary.from_prerequisites);
    info!("- From {COURSE_EXTRAS_FILE}: {} courses", summary.from_extras);
    info!("- Faculty mappings: {} subjects", summary.faculty_mappings);

    Ok(())
}
