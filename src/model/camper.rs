//! Camper: a named child aged 8 to 18.

use super::validation::{json_int, json_str, validate_camper_age, validate_camper_name, Collector, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted camper row. Fields only change through the validating setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Camper {
    id: i64,
    name: String,
    age: i64,
}

impl Camper {
    /// A camper that has just been written under `id`.
    pub fn persisted(id: i64, new: NewCamper) -> Self {
        Camper {
            id,
            name: new.name,
            age: new.age,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_name(&mut self, name: Option<&str>) -> Result<(), ValidationError> {
        self.name = validate_camper_name(name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: Option<i64>) -> Result<(), ValidationError> {
        self.age = validate_camper_age(age)?;
        Ok(())
    }

    /// Assign each key of a partial update through its setter.
    /// On failure the camper is left unchanged and every bad field is reported.
    pub fn apply_patch(&mut self, patch: &Map<String, Value>) -> Result<(), Vec<ValidationError>> {
        let mut next = self.clone();
        let mut errors = Collector::default();
        for (key, value) in patch {
            match key.as_str() {
                "name" => {
                    errors.check(json_str("name", value).and_then(|n| next.set_name(n)));
                }
                "age" => {
                    errors.check(json_int("age", value).and_then(|a| next.set_age(a)));
                }
                "id" => errors.push(ValidationError::new("id", "id cannot be changed")),
                _ => errors.push(ValidationError::new("camper", format!("unknown field '{}'", key))),
            }
        }
        errors.finish()?;
        *self = next;
        Ok(())
    }
}

/// Request body for creating a camper. Both fields are validated before anything is written.
#[derive(Debug, Default, Deserialize)]
pub struct CamperInput {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// A validated camper not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    pub name: String,
    pub age: i64,
}

impl NewCamper {
    pub fn new(name: Option<&str>, age: Option<i64>) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Collector::default();
        let name = errors.check(validate_camper_name(name));
        let age = errors.check(validate_camper_age(age));
        match (name, age) {
            (Some(name), Some(age)) => Ok(NewCamper { name, age }),
            _ => Err(errors.finish().err().unwrap_or_default()),
        }
    }
}

impl TryFrom<CamperInput> for NewCamper {
    type Error = Vec<ValidationError>;

    fn try_from(input: CamperInput) -> Result<Self, Self::Error> {
        NewCamper::new(input.name.as_deref(), input.age)
    }
}
