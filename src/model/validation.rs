//! Field-level validation hooks shared by construction and partial updates.

use serde_json::Value;
use std::fmt;

pub const MIN_CAMPER_AGE: i64 = 8;
pub const MAX_CAMPER_AGE: i64 = 18;
pub const MIN_SIGNUP_HOUR: i64 = 0;
pub const MAX_SIGNUP_HOUR: i64 = 23;

/// One rejected field. `message` is what the client sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        ValidationError::new(field, format!("{} is required", field))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_camper_name(name: Option<&str>) -> Result<String, ValidationError> {
    match name {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(ValidationError::new("name", "The camper must have a name")),
    }
}

pub fn validate_camper_age(age: Option<i64>) -> Result<i64, ValidationError> {
    let age = age.ok_or_else(|| ValidationError::required("age"))?;
    if (MIN_CAMPER_AGE..=MAX_CAMPER_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(ValidationError::new(
            "age",
            format!("The age must be between {} and {}", MIN_CAMPER_AGE, MAX_CAMPER_AGE),
        ))
    }
}

pub fn validate_signup_time(time: Option<i64>) -> Result<i64, ValidationError> {
    let time = time.ok_or_else(|| ValidationError::required("time"))?;
    if (MIN_SIGNUP_HOUR..=MAX_SIGNUP_HOUR).contains(&time) {
        Ok(time)
    } else {
        Err(ValidationError::new(
            "time",
            format!("Time must be between {} and {}", MIN_SIGNUP_HOUR, MAX_SIGNUP_HOUR),
        ))
    }
}

pub fn require_id(field: &'static str, id: Option<i64>) -> Result<i64, ValidationError> {
    id.ok_or_else(|| ValidationError::required(field))
}

/// Integer out of a loosely-typed JSON value (partial updates). `null` counts as missing.
pub(crate) fn json_int(field: &'static str, v: &Value) -> Result<Option<i64>, ValidationError> {
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ValidationError::new(field, format!("{} must be an integer", field))),
        _ => Err(ValidationError::new(field, format!("{} must be an integer", field))),
    }
}

pub(crate) fn json_str<'a>(field: &'static str, v: &'a Value) -> Result<Option<&'a str>, ValidationError> {
    match v {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(ValidationError::new(field, format!("{} must be a string", field))),
    }
}

/// Collects per-field results so every failing field is reported at once.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
