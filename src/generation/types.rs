//! Core types for the generation domain
//!
//! These mirror the shapes the OpenAPI loader hands to templates: parameters
//! tagged with their `in` location and `(status code, payload type)` response
//! pairs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

use crate::core::Error;

/// Parameter location, as spelled by the OpenAPI `in` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
    FormData,
}

impl ParameterLocation {
    /// The OpenAPI spelling of this location
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
        }
    }

    /// Get all locations
    pub fn all() -> &'static [ParameterLocation] {
        &[
            ParameterLocation::Path,
            ParameterLocation::Query,
            ParameterLocation::Header,
            ParameterLocation::Cookie,
            ParameterLocation::Body,
            ParameterLocation::FormData,
        ]
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterLocation::all()
            .iter()
            .copied()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| Error::InvalidLocation(s.to_string()))
    }
}

/// Anything exposing an identifier name
pub trait Named {
    fn name(&self) -> &str;
}

/// Anything tagged with a parameter location
///
/// `None` means the record carries no recognisable location.
pub trait Located {
    fn location(&self) -> Option<ParameterLocation>;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

/// Template context records read `in` first, then `location`.
impl Located for JsonValue {
    fn location(&self) -> Option<ParameterLocation> {
        self.get("in")
            .or_else(|| self.get("location"))
            .and_then(JsonValue::as_str)
            .and_then(|tag| tag.parse().ok())
    }
}

/// Operation parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Identifier, possibly carrying a trailing optionality marker
    pub name: String,
    #[serde(rename = "in", alias = "location")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            required: false,
            description: None,
        }
    }
}

impl Named for Parameter {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Located for Parameter {
    fn location(&self) -> Option<ParameterLocation> {
        Some(self.location)
    }
}

/// Payload type used when a response declares none
pub const UNDEFINED_PAYLOAD: &str = "undefined";

/// A `(status code, payload type)` pair describing one operation response
///
/// Deserializes from `{ "statusCode": .., "payloadType": .. }` as well as the
/// loader's positional `{ "e1": .., "e2": .. }` form. The status code may be a
/// string or a number; a missing or `null` code reads as empty and maps to no
/// wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    #[serde(default, alias = "e1", deserialize_with = "status_code_text")]
    pub status_code: String,
    #[serde(default, alias = "e2")]
    pub payload_type: Option<String>,
}

impl ResponseDescriptor {
    pub fn new(status_code: impl Into<String>, payload_type: Option<&str>) -> Self {
        Self {
            status_code: status_code.into(),
            payload_type: payload_type.map(String::from),
        }
    }

    /// Numeric status code, if the text parses to a whole number
    ///
    /// Surrounding whitespace is ignored and `"200.0"` reads as 200.
    pub fn status(&self) -> Option<u16> {
        let code: f64 = self.status_code.trim().parse().ok()?;
        if code.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&code) {
            Some(code as u16)
        } else {
            None
        }
    }

    /// Payload type name, defaulting to `undefined`
    pub fn payload(&self) -> &str {
        self.payload_type.as_deref().unwrap_or(UNDEFINED_PAYLOAD)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusCodeRepr {
    Text(String),
    Number(serde_json::Number),
}

fn status_code_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<StatusCodeRepr>::deserialize(deserializer)? {
        Some(StatusCodeRepr::Text(text)) => text,
        Some(StatusCodeRepr::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
