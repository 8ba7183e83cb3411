use crate::error::{FetchError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, Url};
use scraper::ElementRef;
use std::time::Duration;

/// User-Agent sent with every page request
const USER_AGENT: &str = concat!("course-catalog-datafetcher/", env!("CARGO_PKG_VERSION"));

/// How long to wait for a page before recording it as failed
const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref TRAILING_CODE: Regex = Regex::new(r"\(([^)]+)\)$").unwrap();
    static ref NAME_BEFORE_CODE: Regex = Regex::new(r"^(.+?)\s*\(").unwrap();
}

/// Thin wrapper around a [`Client`] for fetching calendar pages
///
/// Pages are fetched with a plain GET and nothing on them is executed. The live
/// calendar fills in its link boxes and course details client-side, so against
/// it the link collectors find nothing and course pages are recorded as
/// `no element matching ...` or `course ... not found on page`. Point
/// `CATALOG_URL` at a pre-rendered mirror of the calendar to collect real data.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
}

impl PageClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(PAGE_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a page and returns its HTML
    ///
    /// # Arguments
    /// * `url` - The page to fetch
    ///
    /// # Returns
    /// The response body, or an error for transport failures and non-2xx statuses
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Collects the text content of an element, trimmed
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Resolves an `href` attribute against the page it was found on
///
/// # Returns
/// The absolute URL, or `None` if `href` cannot be resolved
pub fn absolute_url(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

/// Decodes the `group` query parameter of a catalog URL
///
/// Subject pages carry the subject in their fragment, e.g.
/// `catalog#/courses?group=Mathematics%20(MATH)`.
///
/// # Returns
/// The decoded value (e.g., `"Mathematics (MATH)"`), or `None` if the URL has no
/// `group` parameter
pub fn group_param(href: &str) -> Option<String> {
    let raw = href.split("group=").nth(1)?;
    let raw = raw.split('&').next().unwrap_or(raw).replace('+', " ");

    urlencoding::decode(&raw).ok().map(|s| s.into_owned())
}

/// Extracts the subject code in trailing parentheses of a subject link
///
/// # Returns
/// `"MATH"` for a link ending in `"(MATH)"`, otherwise `None`
pub fn subject_code_from_href(href: &str) -> Option<String> {
    TRAILING_CODE
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts the subject name from a subject link, dropping the code in parentheses
///
/// # Returns
/// `"Mathematics"` for `group=Mathematics (MATH)`, the whole parameter if it has no
/// parenthesised code, or an empty string if there is no `group` parameter
pub fn subject_name_from_href(href: &str) -> String {
    let group = group_param(href).unwrap_or_default();

    NAME_BEFORE_CODE
        .captures(&group)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    const MATH_HREF: &str =
        "https://uwaterloo.ca/academic-calendar/undergraduate-studies/catalog#/courses?group=Mathematics%20(MATH)";

    #[test]
    fn test_group_param() {
        assert_eq!(group_param(MATH_HREF).as_deref(), Some("Mathematics (MATH)"));
        assert_eq!(
            group_param("catalog#/courses?group=Applied+Mathematics+(AMATH)&bc=true").as_deref(),
            Some("Applied Mathematics (AMATH)")
        );
        assert_eq!(group_param("catalog#/courses"), None);
    }

    #[test]
    fn test_subject_code_from_href() {
        assert_eq!(
            subject_code_from_href("catalog#/courses?group=Mathematics (MATH)").as_deref(),
            Some("MATH")
        );
        assert_eq!(subject_code_from_href(MATH_HREF).as_deref(), Some("MATH"));
        assert_eq!(subject_code_from_href("catalog#/courses?group=Mathematics"), None);
    }

    #[test]
    fn test_subject_name_from_href() {
        assert_eq!(subject_name_from_href(MATH_HREF), "Mathematics");
        assert_eq!(
            subject_name_from_href("catalog#/courses?group=Interdisciplinary"),
            "Interdisciplinary"
        );
        assert_eq!(subject_name_from_href("catalog#/courses"), "");
    }

    #[test]
    fn test_absolute_url() {
        let base = Url::parse("https://uwaterloo.ca/academic-calendar/catalog").unwrap();
        assert_eq!(
            absolute_url(&base, "/academic-calendar/catalog#/courses/view/abc").as_deref(),
            Some("https://uwaterloo.ca/academic-calendar/catalog#/courses/view/abc")
        );
        assert_eq!(
            absolute_url(&base, "https://example.com/x").as_deref(),
            Some("https://example.com/x")
        );
    }

    #[test]
    fn test_element_text() {
        let html = Html::parse_fragment("<p>  Intro to\n   <b>proofs</b>  </p>");
        let selector = Selector::parse("p").unwrap();
        let p = html.select(&selector).next().unwrap();

        assert_eq!(element_text(&p), "Intro to\n   proofs");
    }
}
