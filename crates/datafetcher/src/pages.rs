use crate::util::{absolute_url, element_text};
use lazy_static::lazy_static;
use models::{
    course_code::{is_course_code, spaced},
    course_data::Link,
};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Boxes on the catalog index and subject pages that hold the navigation links
pub const COLLAPSIBLE_BOX: &str = "div.style__collapsibleBox___DBqEP";

/// Container of a course page's description text
pub const DESCRIPTION_BOX: &str = "div.course-view__pre___iwNIQ";

/// Heading text that introduces a course's prerequisites
const PREREQUISITES_HEADING: &str = "Prerequisites";

lazy_static! {
    static ref BOX_SELECTOR: Selector = Selector::parse(COLLAPSIBLE_BOX).unwrap();
    static ref BOX_LINKS: Selector = Selector::parse(&format!("{COLLAPSIBLE_BOX} a")).unwrap();
    static ref DESCRIPTION: Selector = Selector::parse(DESCRIPTION_BOX).unwrap();
    static ref H3: Selector = Selector::parse("h3").unwrap();
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    static ref BODY: Selector = Selector::parse("body").unwrap();
}

/// Whether the page has any of the collapsible link boxes
pub fn has_link_boxes(document: &Html) -> bool {
    document.select(&BOX_SELECTOR).next().is_some()
}

/// Collects the links listed in the collapsible boxes of a catalog page
///
/// # Arguments
/// * `document` - The parsed page
/// * `base` - The URL the page was fetched from, used to resolve relative links
///
/// # Returns
/// Every anchor with a resolvable `href`, in document order
pub fn extract_links(document: &Html, base: &Url) -> Vec<Link> {
    document
        .select(&BOX_LINKS)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some(Link {
                href: absolute_url(base, href)?,
                text: element_text(&anchor),
            })
        })
        .collect()
}

/// Whether the page mentions a course code, either as `"AFM101"` or `"AFM 101"`
pub fn page_mentions_course(document: &Html, course_code: &str) -> bool {
    let text: String = match document.select(&BODY).next() {
        Some(body) => body.text().collect(),
        None => document.root_element().text().collect(),
    };

    text.contains(course_code) || text.contains(&spaced(course_code))
}

/// Finds the nearest `div` enclosing an element, falling back to its parent
fn enclosing_container<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "div")
        .or_else(|| element.parent().and_then(ElementRef::wrap))
}

/// Extracts the prerequisite course codes from a course page
///
/// Looks for the `Prerequisites` heading and collects the text of every link in
/// the section around it that looks like a course code. Duplicates are dropped,
/// keeping the first occurrence.
///
/// # Returns
/// The prerequisite codes, or an empty vector if the page has no such section
pub fn extract_prerequisites(document: &Html) -> Vec<String> {
    let Some(heading) = document
        .select(&H3)
        .find(|h| element_text(h) == PREREQUISITES_HEADING)
    else {
        return Vec::new();
    };

    let Some(container) = enclosing_container(&heading) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    container
        .select(&ANCHOR)
        .map(|anchor| element_text(&anchor))
        .filter(|text| is_course_code(text))
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

/// Extracts the description text of a course page
///
/// # Returns
/// The trimmed description, or `None` if the page has no description box
pub fn extract_description(document: &Html) -> Option<String> {
    document
        .select(&DESCRIPTION)
        .next()
        .map(|div| element_text(&div))
}
