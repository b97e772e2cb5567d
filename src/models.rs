// src/models.rs
use serde::Serialize;
use serde_json::Value;

use crate::errors::{LegalEaseError, Result};

/// Body of `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    /// Per-request credential override; empty or null means "use the server's key".
    pub api_key: Option<String>,
}

impl SummaryRequest {
    /// Validates a decoded JSON body.
    ///
    /// The body must be an object with a `text` key. Its value is not
    /// inspected: strings pass through, anything else is rendered as JSON.
    /// `apiKey` may be absent, null or a string.
    pub fn from_value(body: Value) -> Result<Self> {
        let Value::Object(mut fields) = body else {
            return Err(LegalEaseError::MissingText);
        };

        let text = match fields.remove("text") {
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => return Err(LegalEaseError::MissingText),
        };

        let api_key = match fields.remove("apiKey") {
            None | Some(Value::Null) => None,
            Some(Value::String(key)) => Some(key),
            Some(_) => return Err(LegalEaseError::InvalidApiKey),
        };

        Ok(Self { text, api_key })
    }
}

/// Outcome of a summarization. Exactly one of `summary` or `error` is present
/// in the serialized form.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SummaryResult {
    Summary { summary: String },
    Error { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_optional_api_key() {
        let req = SummaryRequest::from_value(json!({"text": "doc"})).unwrap();
        assert_eq!(req.api_key, None);

        let req = SummaryRequest::from_value(json!({"text": "doc", "apiKey": null})).unwrap();
        assert_eq!(req.api_key, None);

        let req = SummaryRequest::from_value(json!({"text": "doc", "apiKey": "abc"})).unwrap();
        assert_eq!(req.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_request_requires_object_with_text() {
        for body in [json!({}), json!(["a lease"]), json!("text"), json!(null), json!({"apiKey": "k"})] {
            assert!(
                matches!(SummaryRequest::from_value(body.clone()), Err(LegalEaseError::MissingText)),
                "should reject {}",
                body
            );
        }
    }

    #[test]
    fn test_non_string_text_is_rendered() {
        let req = SummaryRequest::from_value(json!({"text": null})).unwrap();
        assert_eq!(req.text, "null");

        let req = SummaryRequest::from_value(json!({"text": 42})).unwrap();
        assert_eq!(req.text, "42");
    }

    #[test]
    fn test_non_string_api_key_is_rejected() {
        assert!(matches!(
            SummaryRequest::from_value(json!({"text": "x", "apiKey": 5})),
            Err(LegalEaseError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_result_serializes_single_key() {
        let ok = SummaryResult::Summary { summary: "s".to_string() };
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"summary": "s"}));

        let err = SummaryResult::Error { error: "e".to_string() };
        assert_eq!(serde_json::to_value(&err).unwrap(), json!({"error": "e"}));
    }
}
