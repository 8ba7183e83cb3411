use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Mapping from course code to its merged record, in catalog order
pub type CourseMap = IndexMap<String, CourseRecord>;

/// Mapping from course code to its scraped prerequisites
pub type PrerequisiteMap = IndexMap<String, PrerequisiteEntry>;

/// Mapping from course code to its scraped title and description
pub type CourseExtraMap = IndexMap<String, CourseExtra>;

/// Mapping from subject name to the course links listed under it
pub type CourseLinkMap = IndexMap<String, Vec<Link>>;

/// Mapping from subject code to its attributed faculty
pub type SubjectFacultyMap = IndexMap<String, SubjectFaculty>;

/// Deserializes an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An anchor captured from a calendar page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL the anchor points to
    pub href: String,
    /// Trimmed anchor text (e.g., "CS349 - User Interfaces")
    pub text: String,
}

impl Link {
    /// Extracts the course code from the anchor text.
    ///
    /// # Returns
    /// Everything before the first `" - "` separator, trimmed (e.g., `"CS349"`)
    pub fn course_code(&self) -> &str {
        self.text.split(" - ").next().unwrap_or_default().trim()
    }
}

/// A course's forward prerequisite edges as scraped from its page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteEntry {
    /// Full link text of the course
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Subject name the course was listed under
    #[serde(default)]
    pub subject: Option<String>,
    /// Course codes that must be completed first
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Vec<String>,
    /// Failure message when the page could not be processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A course's title and description as scraped from its page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseExtra {
    /// Full link text of the course
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Subject name; absent when the page failed to load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Failure message when the page could not be processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One row of the archived subject index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyArchiveEntry {
    pub subject_code: String,
    pub faculty: String,
}

/// Faculty attribution for a single subject code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFaculty {
    /// Full subject name (e.g., "Mathematics")
    pub name: String,
    /// Faculty name as answered, or "UNKNOWN"
    pub faculty: String,
}

/// The canonical merged record for a single course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code (e.g., "CS349")
    pub id: String,
    pub title: String,
    /// Subject grouping name
    pub subject: Option<String>,
    pub description: String,
    /// Owning faculty, when the subject code could be resolved
    pub faculty: Option<String>,
    /// Course level in hundreds (e.g., 300)
    pub level: Option<u16>,
    /// Forward edges: courses required before this one
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Vec<String>,
    /// Reverse edges: courses that list this one as a prerequisite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocks: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_course_code() {
        let link = Link {
            href: "https://example.com/#/courses/view/abc".to_string(),
            text: "AFM100 - Introduction to Experiential Learning".to_string(),
        };
        assert_eq!(link.course_code(), "AFM100");

        let link = Link {
            href: String::new(),
            text: "CS349".to_string(),
        };
        assert_eq!(link.course_code(), "CS349");
    }

    #[test]
    fn test_course_extra_error_shape() {
        // Failed pages are persisted without a subject
        let extra = CourseExtra {
            title: "CS349 - User Interfaces".to_string(),
            subject: None,
            description: String::new(),
            error: Some("timed out".to_string()),
        };
        let value = serde_json::to_value(&extra).unwrap();
        assert!(value.get("subject").is_none());
        assert_eq!(value["error"], "timed out");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let entry: PrerequisiteEntry =
            serde_json::from_str(r#"{"name": null, "subject": null, "prerequisites": null}"#)
                .unwrap();
        assert_eq!(entry, PrerequisiteEntry::default());

        let extra: CourseExtra =
            serde_json::from_str(r#"{"title": null, "description": null}"#).unwrap();
        assert_eq!(extra, CourseExtra::default());

        let record: CourseRecord = serde_json::from_str(
            r#"{"id": "CS135", "title": "CS135", "subject": null, "description": "",
                "faculty": null, "level": 100, "prerequisites": null}"#,
        )
        .unwrap();
        assert!(record.prerequisites.is_empty());
    }

    #[test]
    fn test_faculty_archive_entry_field_names() {
        let entry: FacultyArchiveEntry =
            serde_json::from_str(r#"{"subjectCode": "CS", "faculty": "MAT"}"#).unwrap();
        assert_eq!(entry.subject_code, "CS");
        assert_eq!(entry.faculty, "MAT");
    }

    #[test]
    fn test_course_record_unlocks_omitted_until_built() {
        let record = CourseRecord {
            id: "CS349".to_string(),
            title: "CS349".to_string(),
            subject: None,
            description: String::new(),
            faculty: None,
            level: Some(300),
            prerequisites: vec![],
            unlocks: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("unlocks").is_none());
        assert!(value["faculty"].is_null());
        assert_eq!(value["level"], 300);
    }
}
