use actix_web::{HttpMessage, HttpRequest};

use serde_json::{Map, Value};

use url::form_urlencoded;

use crate::validation::{Fields, ValidationErrors};

pub mod contact;
pub mod newsletter;
pub mod resources;

/// Pseudo-field used when the request body is not readable as JSON at all
pub const BODY_FIELD: &str = "body";

/// Read the submitted fields from a JSON or url-encoded body.
///
/// Bodies of any other content type carry no fields, so every required field
/// is reported missing by the endpoint's rules.
pub fn read_fields(req: &HttpRequest, body: &[u8]) -> Result<Fields, ValidationErrors> {
    let content_type = req.content_type().to_ascii_lowercase();
    match content_type.as_str() {
        "application/json" => json_fields(body),
        "application/x-www-form-urlencoded" => Ok(form_fields(body)),
        other => {
            tracing::debug!(content_type = other, "Ignoring body of unsupported content type");
            Ok(Fields::default())
        }
    }
}

fn json_fields(body: &[u8]) -> Result<Fields, ValidationErrors> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::default());
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationErrors::single(BODY_FIELD, e.to_string()))?;
    Fields::try_from(value).map_err(|message| ValidationErrors::single(BODY_FIELD, message))
}

fn form_fields(body: &[u8]) -> Fields {
    let mut map = Map::new();
    for (key, value) in form_urlencoded::parse(body) {
        let value = Value::String(value.into_owned());
        // Repeated keys collect into an array, which fails the string rules
        match map.get_mut(key.as_ref()) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(key.into_owned(), value);
            }
        }
    }
    map.into()
}
