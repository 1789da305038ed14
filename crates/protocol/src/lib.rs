use serde::{Deserialize, Serialize};

pub mod object_id;

pub use object_id::{ObjectId, ObjectIdError};

pub const CHAT_API_VERSION: u32 = 1;

/// Body of `POST /chat`.
///
/// `company_id` is the raw string as sent by the client; it is parsed into an
/// [`ObjectId`] at the service boundary and rejected there if malformed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "companyId")]
    pub company_id: String,
}

/// Successful chat response: a single natural-language sentence or block.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

/// Error body returned for non-2xx chat responses.
///
/// `message` carries the user-facing (Hebrew) sentence; `code` is a stable
/// machine-readable discriminator; `hint` is for operators, not end users.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chat_request_uses_camel_case_company_id() {
        let parsed: ChatRequest =
            serde_json::from_str(r#"{"message":"מה המלאי?","companyId":"aaaaaaaaaaaaaaaaaaaaaaaa"}"#)
                .unwrap();
        assert_eq!(parsed.message, "מה המלאי?");
        assert_eq!(parsed.company_id, "aaaaaaaaaaaaaaaaaaaaaaaa");

        let raw = serde_json::to_string(&parsed).unwrap();
        assert!(raw.contains("companyId"));
    }

    #[test]
    fn error_envelope_roundtrip() {
        let envelope = ErrorEnvelope::new("invalid_company_id", "מזהה החברה אינו תקין.")
            .with_hint("companyId must be a 24-character hex string");
        let raw = serde_json::to_string(&envelope).unwrap();
        let back: ErrorEnvelope = serde_json::from_str(&raw).unwrap();
        assert_eq!(envelope, back);
    }
}
