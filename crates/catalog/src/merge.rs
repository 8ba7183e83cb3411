use log::debug;
use models::{
    course_code::{level, subject_code},
    course_data::{
        CourseExtra, CourseExtraMap, CourseMap, CourseRecord, FacultyArchiveEntry,
        PrerequisiteEntry, PrerequisiteMap,
    },
};
use std::collections::HashMap;

/// Counts reported after a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub courses: usize,
    pub from_prerequisites: usize,
    pub from_extras: usize,
    pub faculty_mappings: usize,
}

/// Builds the subject code → faculty lookup from the archived subject index
///
/// Entries are applied in order, so the last row for a subject code wins.
pub fn faculty_lookup(entries: &[FacultyArchiveEntry]) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for entry in entries {
        lookup.insert(entry.subject_code.clone(), entry.faculty.clone());
    }
    lookup
}

/// Returns the value unless it is missing or an empty string
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Resolves one merged record from whichever sources know about the course
fn merge_course(
    course_id: &str,
    prereq: Option<&PrerequisiteEntry>,
    extra: Option<&CourseExtra>,
    faculties: &HashMap<String, String>,
) -> CourseRecord {
    let faculty = subject_code(course_id).and_then(|code| faculties.get(code).cloned());

    // Extras win over the prerequisites view
    let title = present(extra.map(|e| e.title.as_str()))
        .or_else(|| present(prereq.map(|p| p.name.as_str())))
        .unwrap_or(course_id)
        .to_string();

    let subject = present(extra.and_then(|e| e.subject.as_deref()))
        .or_else(|| present(prereq.and_then(|p| p.subject.as_deref())))
        .map(str::to_string);

    let description = present(extra.map(|e| e.description.as_str()))
        .unwrap_or_default()
        .to_string();

    CourseRecord {
        id: course_id.to_string(),
        title,
        subject,
        description,
        faculty,
        level: level(course_id),
        prerequisites: prereq.map(|p| p.prerequisites.clone()).unwrap_or_default(),
        unlocks: None,
    }
}

/// Joins the scraped views into one record per course
///
/// Every course code that appears in either `prerequisites` or `extras` yields
/// exactly one record. Codes from `prerequisites` come first in their file
/// order, followed by codes only present in `extras`.
///
/// # Arguments
/// * `prerequisites` - Course code → scraped prerequisites
/// * `extras` - Course code → scraped title and description
/// * `faculties` - Archived subject index rows
///
/// # Returns
/// The merged courses along with a [`MergeSummary`]
pub fn merge_courses(
    prerequisites: &PrerequisiteMap,
    extras: &CourseExtraMap,
    faculties: &[FacultyArchiveEntry],
) -> (CourseMap, MergeSummary) {
    let lookup = faculty_lookup(faculties);

    let course_ids = prerequisites
        .keys()
        .chain(extras.keys().filter(|id| !prerequisites.contains_key(*id)));

    let courses: CourseMap = course_ids
        .map(|id| {
            let record = merge_course(id, prerequisites.get(id), extras.get(id), &lookup);
            if record.faculty.is_none() {
                debug!("No faculty resolved for {id}");
            }
            (id.clone(), record)
        })
        .collect();

    let summary = MergeSummary {
        courses: courses.len(),
        from_prerequisites: prerequisites.len(),
        from_extras: extras.len(),
        faculty_mappings: lookup.len(),
    };

    (courses, summary)
}
