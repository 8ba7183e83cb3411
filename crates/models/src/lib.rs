pub mod course_code;
pub mod course_data;
pub mod faculty;
