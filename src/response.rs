use crate::DnsError;
use serde::Deserialize;
use serde_json::Value;

/// One resource record from a DoH JSON response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Answer {
    pub name: String,
    pub data: String,
    #[serde(rename = "TTL")]
    pub ttl: u64,
}

impl Answer {
    /// Owner name without trailing dots
    pub fn display_name(&self) -> &str {
        self.name.trim_end_matches('.')
    }
}

#[derive(Deserialize)]
struct AnswerSection {
    #[serde(rename = "Answer", default)]
    answer: Option<Vec<Answer>>,
}

/// A decoded DoH JSON response.
///
/// The full JSON value is kept so raw output can reproduce every field the
/// provider sent, in the order it sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct DohResponse {
    value: Value,
}

impl DohResponse {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// DNS response code (`Status`), when present
    pub fn status(&self) -> Option<u64> {
        self.value.get("Status").and_then(Value::as_u64)
    }

    /// The answer records, in provider order. A missing or `null` `Answer`
    /// key means no records.
    pub fn answers(&self) -> Result<Vec<Answer>, DnsError> {
        if self.value.get("Answer").map_or(true, Value::is_null) {
            return Ok(Vec::new());
        }

        let section = AnswerSection::deserialize(&self.value)?;
        Ok(section.answer.unwrap_or_default())
    }
}

impl From<Value> for DohResponse {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
