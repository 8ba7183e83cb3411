use indexmap::IndexMap;
use serde_json::Value;

/// `courses.json` as read from disk: course code → record, with every field
/// kept as written
pub type CourseDocument = IndexMap<String, Value>;

/// Counts reported after the unlock edges are rebuilt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnlockSummary {
    pub courses: usize,
    /// Courses that unlock at least one other course
    pub courses_with_unlocks: usize,
    pub total_unlocks: usize,
}

/// The forward edges of a record; a missing or `null` list has none
fn prerequisites_of(course: &Value) -> impl Iterator<Item = &str> {
    course
        .get("prerequisites")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Rebuilds every course's `unlocks` list from the `prerequisites` lists
///
/// Only the `unlocks` key of each record is written; every other field is left
/// exactly as it was. Any previous `unlocks` values are discarded, so running
/// this on its own output yields the same result. Prerequisites naming a course
/// that is not in `courses` are ignored. A course listing the same prerequisite
/// twice appears twice in that prerequisite's `unlocks`.
///
/// # Arguments
/// * `courses` - The merged courses, updated in place
///
/// # Returns
/// An [`UnlockSummary`] of the rebuilt edges
pub fn build_unlocks(courses: &mut CourseDocument) -> UnlockSummary {
    let mut unlocks: IndexMap<String, Vec<String>> = courses
        .keys()
        .map(|id| (id.clone(), Vec::new()))
        .collect();

    for (course_id, course) in courses.iter() {
        for prereq in prerequisites_of(course) {
            if let Some(unlocked) = unlocks.get_mut(prereq) {
                unlocked.push(course_id.clone());
            }
        }
    }

    let mut summary = UnlockSummary {
        courses: courses.len(),
        ..Default::default()
    };

    for (course_id, course) in courses.iter_mut() {
        let unlocked = unlocks.swap_remove(course_id).unwrap_or_default();
        if !unlocked.is_empty() {
            summary.courses_with_unlocks += 1;
        }
        summary.total_unlocks += unlocked.len();

        // Records that are not objects have nowhere to hold the list
        if let Some(record) = course.as_object_mut() {
            record.insert("unlocks".to_string(), Value::from(unlocked));
        }
    }

    summary
}
