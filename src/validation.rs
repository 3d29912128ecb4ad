use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::EmailAddress;

/// Message reported for a field that is absent
pub const REQUIRED: &str = "Required";

/// A single failing field and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found while validating a payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Names of the failing fields, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields().join(", ");
        write!(f, "{} invalid field(s): {}", self.0.len(), fields)
    }
}

impl std::error::Error for ValidationErrors {}

/// Untyped submitted fields, checked one by one so a single bad field
/// never hides the others
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Fields {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(format!("Expected object, received {}", type_name(&other))),
        }
    }
}

/// Name of a JSON value's type as reported in type mismatch messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects the outcome of named field rules without stopping at the first failure.
///
/// Each rule returns the accepted value (or `None` on failure) so callers can
/// assemble the validated type once every rule has run.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of at least `min` UTF-16 code units, the unit browsers count in
    pub fn min_len(
        &mut self,
        field: &str,
        value: Option<&Value>,
        min: usize,
        message: &str,
    ) -> Option<String> {
        let value = self.string(field, value)?;
        if value.encode_utf16().count() >= min {
            Some(value)
        } else {
            self.reject(field, message);
            None
        }
    }

    /// Syntactically valid email address
    pub fn email(
        &mut self,
        field: &str,
        value: Option<&Value>,
        message: &str,
    ) -> Option<EmailAddress> {
        let value = self.string(field, value)?;
        match value.parse::<EmailAddress>() {
            Ok(email) => Some(email),
            Err(reason) => {
                tracing::debug!(field, reason = %reason, "Rejected email address");
                self.reject(field, message);
                None
            }
        }
    }

    /// Boolean strictly equal to `true`
    pub fn accepted(&mut self, field: &str, value: Option<&Value>, message: &str) -> bool {
        match self.typed(field, value, "boolean", Value::as_bool) {
            Some(true) => true,
            Some(false) => {
                self.reject(field, message);
                false
            }
            None => false,
        }
    }

    pub fn reject(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }

    fn string(&mut self, field: &str, value: Option<&Value>) -> Option<String> {
        self.typed(field, value, "string", |v| v.as_str().map(String::from))
    }

    /// Present and of the expected type, otherwise a `Required` or type mismatch violation
    fn typed<T>(
        &mut self,
        field: &str,
        value: Option<&Value>,
        expected: &str,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> Option<T> {
        let Some(value) = value else {
            self.reject(field, REQUIRED);
            return None;
        };
        let extracted = extract(value);
        if extracted.is_none() {
            let message = format!("Expected {}, received {}", expected, type_name(value));
            self.reject(field, &message);
        }
        extracted
    }
}
