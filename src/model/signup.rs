//! Signup: a camper attending an activity at a given hour.

use super::validation::{require_id, validate_signup_time, Collector, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Signup {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignupInput {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}

/// A validated signup. The referenced rows are checked by the store inside the insert transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSignup {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

impl NewSignup {
    pub fn new(camper_id: Option<i64>, activity_id: Option<i64>, time: Option<i64>) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Collector::default();
        let camper_id = errors.check(require_id("camper_id", camper_id));
        let activity_id = errors.check(require_id("activity_id", activity_id));
        let time = errors.check(validate_signup_time(time));
        match (camper_id, activity_id, time) {
            (Some(camper_id), Some(activity_id), Some(time)) => Ok(NewSignup {
                camper_id,
                activity_id,
                time,
            }),
            _ => Err(errors.finish().err().unwrap_or_default()),
        }
    }
}

impl TryFrom<SignupInput> for NewSignup {
    type Error = Vec<ValidationError>;

    fn try_from(input: SignupInput) -> Result<Self, Self::Error> {
        NewSignup::new(input.camper_id, input.activity_id, input.time)
    }
}
