use crate::{
    config::AttributionConfig,
    error::{FetchError, Result},
};
use lazy_static::lazy_static;
use log::{error, warn};
use models::faculty::Faculty;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::str::FromStr;

/// Messages API endpoint
const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value
const API_VERSION: &str = "2023-06-01";

const MAX_TOKENS: u32 = 1024;

/// How many searches the model may run per subject
const MAX_SEARCHES: u32 = 3;

lazy_static! {
    static ref JSON_OBJECT: Regex = Regex::new(r"(?s)\{.*?\}").unwrap();
}

/// The JSON object the model is asked to answer with
#[derive(Debug, Deserialize)]
struct FacultyAnswer {
    faculty: Option<String>,
}

/// Builds the system prompt listing every faculty the model may choose from
fn system_prompt() -> String {
    let choices = Faculty::known()
        .iter()
        .map(|faculty| format!("- {faculty}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are determining which University of Waterloo faculty owns a subject code.
Use web search to find official University of Waterloo information about which faculty owns this subject.
You must choose exactly one of the following:
{choices}

If uncertain, say \"{unknown}\".
After searching, respond with ONLY valid JSON, no other text.",
        unknown = Faculty::Unknown
    )
}

/// Builds the user message asking about a single subject
fn user_prompt(subject_code: &str, subject_name: &str) -> String {
    format!(
        "Search for which faculty owns the University of Waterloo subject code \"{subject_code}\" ({subject_name}).
Look for official UWaterloo faculty pages listing their departments and subject codes.

After searching, return ONLY this JSON format:
{{\"faculty\": \"...\"}}"
    )
}

/// Builds the Messages API request body for one subject
pub fn request_body(model: &str, subject_code: &str, subject_name: &str) -> Value {
    json!({
        "model": model,
        "max_tokens": MAX_TOKENS,
        "tools": [
            {
                "type": "web_search_20250305",
                "name": "web_search",
                "max_uses": MAX_SEARCHES,
            }
        ],
        "system": system_prompt(),
        "messages": [
            {
                "role": "user",
                "content": user_prompt(subject_code, subject_name),
            }
        ],
    })
}

/// Reads the faculty out of a Messages API response
///
/// The response may contain search results alongside the answer, so the first
/// `text` block is used and the first `{...}` object inside it is parsed.
///
/// # Returns
/// The answered faculty, or `"UNKNOWN"` if no answer could be parsed
pub fn parse_faculty(response: &Value) -> String {
    let answer = response["content"]
        .as_array()
        .and_then(|blocks| blocks.iter().find(|block| block["type"] == "text"))
        .and_then(|block| block["text"].as_str())
        .and_then(|text| JSON_OBJECT.find(text.trim()))
        .and_then(|m| serde_json::from_str::<FacultyAnswer>(m.as_str()).ok())
        .and_then(|answer| answer.faculty);

    match answer {
        Some(faculty) => {
            if Faculty::from_str(&faculty).is_err() {
                warn!("Answer \"{faculty}\" is not one of the listed faculties");
            }
            faculty
        }
        None => {
            error!("Failed to parse response: {}", response["content"]);
            Faculty::Unknown.to_string()
        }
    }
}

/// Client asking a language model which faculty owns a subject code
#[derive(Debug, Clone)]
pub struct FacultyAttributor {
    client: Client,
    config: AttributionConfig,
}

impl FacultyAttributor {
    pub fn new(config: AttributionConfig) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            config,
        })
    }

    /// Asks which faculty owns a subject
    ///
    /// # Arguments
    /// * `subject_code` - The subject code (e.g., `"MATH"`)
    /// * `subject_name` - The full subject name (e.g., `"Mathematics"`)
    ///
    /// # Returns
    /// The faculty name or `"UNKNOWN"`; transport failures and error statuses are
    /// returned as errors so the subject can be retried on the next run
    pub async fn attribute(&self, subject_code: &str, subject_name: &str) -> Result<String> {
        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request_body(&self.config.model, subject_code, subject_name))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: MESSAGES_URL.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(parse_faculty(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = request_body("some-model", "MATH", "Mathematics");

        assert_eq!(body["model"], "some-model");
        assert_eq!(body["max_tokens"], 1024);
        assert_eq!(body["tools"][0]["name"], "web_search");
        assert_eq!(body["tools"][0]["max_uses"], 3);

        let system = body["system"].as_str().unwrap();
        assert!(system.contains("- Faculty of Mathematics"));
        assert!(system.contains("- Faculty of Health"));
        assert!(system.contains("say \"UNKNOWN\""));

        let content = body["messages"][0]["content"].as_str().unwrap();
        assert!(content.contains("\"MATH\" (Mathematics)"));
        assert!(content.ends_with("{\"faculty\": \"...\"}"));
    }

    #[test]
    fn test_parse_faculty_after_search_results() {
        let response = json!({
            "content": [
                { "type": "server_tool_use", "name": "web_search" },
                { "type": "web_search_tool_result", "content": [] },
                {
                    "type": "text",
                    "text": "Based on the search:\n{\"faculty\": \"Faculty of Mathematics\"}\nDone."
                }
            ]
        });
        assert_eq!(parse_faculty(&response), "Faculty of Mathematics");
    }

    #[test]
    fn test_parse_faculty_multiline_object() {
        let response = json!({
            "content": [{ "type": "text", "text": "{\n  \"faculty\": \"Faculty of Arts\"\n}" }]
        });
        assert_eq!(parse_faculty(&response), "Faculty of Arts");
    }

    #[test]
    fn test_parse_faculty_falls_back_to_unknown() {
        let no_text = json!({ "content": [{ "type": "tool_use" }] });
        assert_eq!(parse_faculty(&no_text), "UNKNOWN");

        let no_json = json!({ "content": [{ "type": "text", "text": "I am not sure." }] });
        assert_eq!(parse_faculty(&no_json), "UNKNOWN");

        let bad_json = json!({ "content": [{ "type": "text", "text": "{faculty: maths}" }] });
        assert_eq!(parse_faculty(&bad_json), "UNKNOWN");

        let missing_field = json!({ "content": [{ "type": "text", "text": "{\"owner\": \"x\"}" }] });
        assert_eq!(parse_faculty(&missing_field), "UNKNOWN");

        assert_eq!(parse_faculty(&json!({})), "UNKNOWN");
    }

    #[test]
    fn test_parse_faculty_keeps_unlisted_answers() {
        let response = json!({
            "content": [{ "type": "text", "text": "{\"faculty\": \"Renison University College\"}" }]
        });
        assert_eq!(parse_faculty(&response), "Renison University College");
    }
}
