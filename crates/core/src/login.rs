//! Login body decoding and field presence validation.
//!
//! The wire body is `{ "fullName": ..., "pin": ..., "role": ... }`. Each field
//! may be a JSON string or another scalar; numbers and `true` are converted to
//! their text form so a numeric PIN still matches the stored string (a whole
//! float such as `1234.0` reads as `"1234"`). Values
//! that read as "empty" (`null`, `false`, `0`, `""`) count as missing.

use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

/// Message returned when any login field is absent or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

// ---------------------------------------------------------------------------
// Wire type
// ---------------------------------------------------------------------------

/// Login body as decoded from the request, before presence checks.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "fullName", default, deserialize_with = "scalar_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub pin: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub role: Option<String>,
}

impl LoginRequest {
    /// Decode a raw request body.
    ///
    /// An empty (or whitespace-only) body decodes to a request with every
    /// field missing. Anything else must be a JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self, CoreError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|e| CoreError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(CoreError::Malformed("login body must be a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| CoreError::Malformed(e.to_string()))
    }

    /// Check that all three fields are present and non-empty.
    pub fn validate(self) -> Result<Credentials, CoreError> {
        match (non_empty(self.full_name), non_empty(self.pin), non_empty(self.role)) {
            (Some(full_name), Some(pin), Some(role)) => Ok(Credentials {
                full_name,
                pin,
                role,
            }),
            _ => Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Accept any JSON scalar as text; reject arrays and objects.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        // A whole float prints without its fraction, so `1234.0` matches "1234".
        Some(Value::Number(n)) if n.is_f64() => Ok(n.as_f64().map(|f| f.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or scalar, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Validated credentials
// ---------------------------------------------------------------------------

/// A login attempt with every field present.
///
/// The PIN is compared by plain equality against the store; it is kept out
/// of `Debug` output so it never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub full_name: String,
    pub pin: String,
    pub role: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("full_name", &self.full_name)
            .field("pin", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
