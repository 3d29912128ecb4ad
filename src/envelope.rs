use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, ValidationErrors};

/// Longest envelope summary attached to a request's log record
const SUMMARY_MAX_LEN: usize = 80;

/// Truncated envelope attached to a response for request logging
#[derive(Debug, Clone)]
pub struct EnvelopeSummary(pub String);

/// Uniform response body shared by every API endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl Envelope {
    /// Successful creation of the record with the given id
    pub fn created(message: impl Into<String>, id: u64) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id),
            errors: None,
        }
    }

    /// Rejected payload, listing every failing field
    pub fn invalid(message: impl Into<String>, errors: ValidationErrors) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
            errors: Some(errors.into_inner()),
        }
    }

    /// Failure with no further detail
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
            errors: None,
        }
    }

    /// Build the HTTP response carrying this envelope.
    ///
    /// A short summary rides along in the response extensions so the request
    /// logger can report the body without re-reading it.
    pub fn respond(&self, status: StatusCode) -> HttpResponse {
        let mut res = HttpResponse::build(status).json(self);
        res.extensions_mut().insert(EnvelopeSummary(self.summary()));
        res
    }

    /// Serialized form for logging, truncated to a single short line
    pub fn summary(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| self.message.clone());
        truncate(json)
    }
}

fn truncate(line: String) -> String {
    if line.chars().count() <= SUMMARY_MAX_LEN {
        return line;
    }
    let mut short: String = line.chars().take(SUMMARY_MAX_LEN - 1).collect();
    short.push('…');
    short
}
