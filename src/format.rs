//! Rendering of resolved responses for the terminal.

use crate::{DnsError, DohResponse, Resolution};
use serde_json::Value;

/// Pretty-print the decoded response with 2-space indentation.
///
/// Every field is kept in provider order and non-ASCII text is written as-is.
pub fn render_raw(value: &Value) -> Result<String, DnsError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per answer, `<name> → <data> (TTL <ttl>)`, or a single
/// `no records (<TYPE>)` line when there are none.
pub fn render_answers(response: &DohResponse, record_type: &str) -> Result<Vec<String>, DnsError> {
    let answers = response.answers()?;

    if answers.is_empty() {
        return Ok(vec![format!("no records ({})", record_type)]);
    }

    Ok(answers
        .iter()
        .map(|a| format!("{} → {} (TTL {})", a.display_name(), a.data, a.ttl))
        .collect())
}

/// Render a resolution either raw or as answer lines
pub fn render(resolution: &Resolution, raw: bool) -> Result<Vec<String>, DnsError> {
    if raw {
        return Ok(vec![render_raw(resolution.response.value())?]);
    }

    render_answers(&resolution.response, &resolution.query.record_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Provider, Query};
    use serde_json::json;
    use std::time::Duration;

    fn resolution(value: Value, record_type: &str) -> Resolution {
        Resolution {
            query: Query::new("example.com", record_type, Provider::Google),
            provider: Provider::Google,
            fell_back: false,
            response: DohResponse::new(value),
            duration: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_answer_line() {
        let response = DohResponse::new(json!({
            "Answer": [{"name": "example.com.", "data": "93.184.216.34", "TTL": 300}]
        }));

        let lines = render_answers(&response, "A").unwrap();
        assert_eq!(lines, vec!["example.com → 93.184.216.34 (TTL 300)"]);
    }

    #[test]
    fn test_multiple_answers_keep_order() {
        let response = DohResponse::new(json!({
            "Answer": [
                {"name": "www.example.com.", "type": 5, "TTL": 60, "data": "example.com."},
                {"name": "example.com.", "type": 1, "TTL": 300, "data": "93.184.216.34"}
            ]
        }));

        let lines = render_answers(&response, "A").unwrap();
        assert_eq!(
            lines,
            vec![
                "www.example.com → example.com. (TTL 60)",
                "example.com → 93.184.216.34 (TTL 300)",
            ]
        );
    }

    #[test]
    fn test_no_records() {
        let response = DohResponse::new(json!({"Status": 0}));
        assert_eq!(render_answers(&response, "A").unwrap(), vec!["no records (A)"]);

        let empty = DohResponse::new(json!({"Status": 0, "Answer": []}));
        assert_eq!(render_answers(&empty, "MX").unwrap(), vec!["no records (MX)"]);
    }

    #[test]
    fn test_raw_is_pretty_and_unescaped() {
        let value: Value = serde_json::from_str(
            r#"{"Status":0,"TC":false,"Question":[{"name":"пример.рф.","type":1}],"Comment":"ответ"}"#,
        )
        .unwrap();

        let out = render_raw(&value).unwrap();
        assert_eq!(
            out,
            "{\n  \"Status\": 0,\n  \"TC\": false,\n  \"Question\": [\n    {\n      \"name\": \"пример.рф.\",\n      \"type\": 1\n    }\n  ],\n  \"Comment\": \"ответ\"\n}"
        );
    }

    #[test]
    fn test_render_dispatch() {
        let value = json!({"Answer": [{"name": "example.com.", "data": "::1", "TTL": 5}]});
        let res = resolution(value.clone(), "aaaa");

        assert_eq!(render(&res, false).unwrap(), vec!["example.com → ::1 (TTL 5)"]);
        assert_eq!(
            render(&res, true).unwrap(),
            vec![serde_json::to_string_pretty(&value).unwrap()]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let res = resolution(
            json!({"Answer": [{"name": "example.com.", "data": "93.184.216.34", "TTL": 300}]}),
            "A",
        );
        assert_eq!(render(&res, false).unwrap(), render(&res, false).unwrap());
    }
}
