use crate::util::element_text;
use lazy_static::lazy_static;
use models::course_data::FacultyArchiveEntry;
use scraper::{Html, Selector};

/// Rows of the subject index table on the archived calendar page
const ARCHIVE_ROWS: &str = r##"table[style="width: 100%;"][cellspacing="0"][cellpadding="1"][bordercolor="#c0c0c0"][border="1"] tr"##;

/// Header text of the subject code column
const SUBJECT_CODE_HEADER: &str = "Subject Code";

lazy_static! {
    static ref ROWS: Selector = Selector::parse(ARCHIVE_ROWS).unwrap();
    static ref CELLS: Selector = Selector::parse("td, th").unwrap();
}

/// Extracts the subject code → owning faculty rows from the archived subject index
///
/// Only the second (subject code) and third (owner) columns are read. Rows with
/// fewer than three cells, an empty code, or the header text are skipped.
///
/// # Arguments
/// * `html` - The archived index page HTML
///
/// # Returns
/// The rows in table order
pub fn extract_archive_rows(html: &str) -> Vec<FacultyArchiveEntry> {
    let document = Html::parse_document(html);

    document
        .select(&ROWS)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&CELLS).map(|cell| element_text(&cell)).collect();

            match cells.as_slice() {
                [_, code, faculty, ..] if !code.is_empty() && code != SUBJECT_CODE_HEADER => {
                    Some(FacultyArchiveEntry {
                        subject_code: code.clone(),
                        faculty: faculty.clone(),
                    })
                }
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARCHIVE_PAGE: &str = r##"
        <html><body>
          <table style="width: 100%;" cellspacing="0" cellpadding="1" bordercolor="#c0c0c0" border="1">
            <tr><th>Subject</th><th>Subject Code</th><th>Owner</th></tr>
            <tr><td colspan="3">A</td></tr>
            <tr><td>Actuarial Science</td><td> ACTSC </td><td>MAT</td></tr>
            <tr><td>Applied Mathematics</td><td>AMATH</td><td>MAT</td></tr>
            <tr><td>Blank</td><td></td><td>ART</td></tr>
            <tr><td>Computer Science</td><td>CS</td><td>MAT</td></tr>
          </table>
          <table><tr><td>Other</td><td>NOPE</td><td>ENG</td></tr></table>
        </body></html>
    "##;

    #[test]
    fn test_extract_archive_rows() {
        let rows = extract_archive_rows(ARCHIVE_PAGE);

        let codes: Vec<&str> = rows.iter().map(|r| r.subject_code.as_str()).collect();
        assert_eq!(codes, ["ACTSC", "AMATH", "CS"]);
        assert!(rows.iter().all(|r| r.faculty == "MAT"));
    }

    #[test]
    fn test_no_matching_table() {
        let html = "<html><body><table><tr><td>a</td><td>CS</td><td>MAT</td></tr></table></body></html>";
        assert!(extract_archive_rows(html).is_empty());
    }
}
