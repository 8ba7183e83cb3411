use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SUBJECT_PREFIX: Regex = Regex::new(r"^([A-Z]+)").unwrap();
    static ref LEVEL_SUFFIX: Regex = Regex::new(r"([0-9])[0-9]{2}[A-Z]*$").unwrap();
    static ref COURSE_CODE: Regex = Regex::new(r"^[A-Z]{1,10}[0-9]{3}[A-Z]*$").unwrap();
    static ref CODE_PARTS: Regex = Regex::new(r"([A-Z]+)([0-9]+)").unwrap();
}

/// Extracts the subject code from a course code
///
/// # Arguments
/// * `course_id` - A course code such as `"AMATH231"`
///
/// # Returns
/// The leading run of uppercase letters (e.g., `"AMATH"`), or `None` if the code
/// does not start with one
pub fn subject_code(course_id: &str) -> Option<&str> {
    SUBJECT_PREFIX
        .captures(course_id)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Determines the level of a course from its code
///
/// Only the three digits directly before any trailing letters at the end of the
/// code are considered, so `"STAT900A"` is level 900 and `"CS45"` has no level.
///
/// # Arguments
/// * `course_id` - A course code such as `"CS349"`
///
/// # Returns
/// The first of those three digits times 100, or `None` if there is no match
pub fn level(course_id: &str) -> Option<u16> {
    LEVEL_SUFFIX
        .captures(course_id)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u16>().ok())
        .map(|digit| digit * 100)
}

/// Determines whether a string looks like a catalog course code (e.g., `"MATH135"`)
pub fn is_course_code(s: &str) -> bool {
    COURSE_CODE.is_match(s)
}

/// Inserts a space between the subject letters and the number (`"AFM101"` → `"AFM 101"`)
pub fn spaced(course_id: &str) -> String {
    CODE_PARTS.replace(course_id, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_code() {
        assert_eq!(subject_code("CS349"), Some("CS"));
        assert_eq!(subject_code("AMATH231"), Some("AMATH"));
        assert_eq!(subject_code("101"), None);
        assert_eq!(subject_code("cs349"), None);
        assert_eq!(subject_code(""), None);
    }

    #[test]
    fn test_level() {
        assert_eq!(level("CS349"), Some(300));
        assert_eq!(level("AMATH231"), Some(200));
        assert_eq!(level("STAT900A"), Some(900));
        assert_eq!(level("CS45"), None);
        assert_eq!(level("CS"), None);
        assert_eq!(level("ECE100AB"), Some(100));
    }

    #[test]
    fn test_level_uses_trailing_digits() {
        // The pattern is only anchored at the end
        assert_eq!(level("CS1234"), Some(200));
        assert_eq!(level("CS349x"), None);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert_eq!(level("CS3٤٩"), None);
        assert_eq!(level("CS٣49"), None);
        assert!(!is_course_code("CS3٤٩"));
        assert_eq!(spaced("CS٣٤٩"), "CS٣٤٩");
    }

    #[test]
    fn test_is_course_code() {
        assert!(is_course_code("MATH135"));
        assert!(is_course_code("ECE105L"));
        assert!(!is_course_code("MATH 135"));
        assert!(!is_course_code("CS45"));
        assert!(!is_course_code("Prerequisites"));
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("AFM101"), "AFM 101");
        assert_eq!(spaced("STAT900A"), "STAT 900A");
        assert_eq!(spaced("101"), "101");
    }
}
