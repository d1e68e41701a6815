//! Mapping of OpenAPI responses onto response-wrapper types.
//!
//! Only the 200, 201 and 202 success shapes have a wrapper. Any other code
//! renders as the `NotImplemented` sentinel unless strict mode is on.

use std::fmt;

use crate::core::{Error, Result};
use crate::generation::types::ResponseDescriptor;

/// Rendered form of an unmapped response
pub const NOT_IMPLEMENTED: &str = "NotImplemented";

/// Response-wrapper type for one operation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseWrapper {
    /// 200: `IResponseSuccessJson<T>`
    SuccessJson(String),
    /// 201: `IResponseSuccessRedirectToResource<T, T>`
    SuccessRedirectToResource(String),
    /// 202: `ResponseSuccessAccepted<T>`
    SuccessAccepted(String),
    NotImplemented,
}

impl ResponseWrapper {
    pub fn is_implemented(&self) -> bool {
        !matches!(self, ResponseWrapper::NotImplemented)
    }
}

impl fmt::Display for ResponseWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseWrapper::SuccessJson(payload) => write!(f, "IResponseSuccessJson<{payload}>"),
            ResponseWrapper::SuccessRedirectToResource(payload) => {
                write!(f, "IResponseSuccessRedirectToResource<{payload}, {payload}>")
            }
            ResponseWrapper::SuccessAccepted(payload) => {
                write!(f, "ResponseSuccessAccepted<{payload}>")
            }
            ResponseWrapper::NotImplemented => f.write_str(NOT_IMPLEMENTED),
        }
    }
}

/// Select the wrapper for a response by exact status code.
pub fn map_response(response: &ResponseDescriptor) -> ResponseWrapper {
    let payload = response.payload().to_string();
    match response.status() {
        Some(200) => ResponseWrapper::SuccessJson(payload),
        Some(201) => ResponseWrapper::SuccessRedirectToResource(payload),
        Some(202) => ResponseWrapper::SuccessAccepted(payload),
        _ => {
            tracing::warn!(
                status_code = %response.status_code,
                "Response status code has no wrapper mapping, emitting {NOT_IMPLEMENTED}"
            );
            ResponseWrapper::NotImplemented
        }
    }
}

/// Like [`map_response`], but an unmapped status code is an error.
pub fn map_response_strict(response: &ResponseDescriptor) -> Result<ResponseWrapper> {
    match map_response(response) {
        ResponseWrapper::NotImplemented => Err(Error::UnsupportedStatusCode(
            response.status_code.clone(),
        )),
        wrapper => Ok(wrapper),
    }
}
