//! JSON views. Each nested entity is rendered without its own `signups`,
//! so the object graph flattens without cycles.

use super::{Activity, Camper, Signup};
use serde::Serialize;

/// Signup as listed under its camper: carries the activity, not the camper.
#[derive(Debug, Serialize)]
pub struct SignupWithActivity {
    #[serde(flatten)]
    pub signup: Signup,
    pub activity: Activity,
}

/// Signup as listed under its activity: carries the camper, not the activity.
#[derive(Debug, Serialize)]
pub struct SignupWithCamper {
    #[serde(flatten)]
    pub signup: Signup,
    pub camper: Camper,
}

#[derive(Debug, Serialize)]
pub struct CamperDetail {
    #[serde(flatten)]
    pub camper: Camper,
    pub signups: Vec<SignupWithActivity>,
}

#[derive(Debug, Serialize)]
pub struct ActivityDetail {
    #[serde(flatten)]
    pub activity: Activity,
    pub signups: Vec<SignupWithCamper>,
}

#[derive(Debug, Serialize)]
pub struct SignupDetail {
    #[serde(flatten)]
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCamper;
    use serde_json::json;

    fn activity() -> Activity {
        Activity {
            id: 3,
            name: Some("Archery".into()),
            difficulty: Some(2),
        }
    }

    fn signup() -> Signup {
        Signup {
            id: 5,
            time: 9,
            camper_id: 1,
            activity_id: 3,
        }
    }

    #[test]
    fn camper_detail_nests_activity_without_back_reference() {
        let camper = Camper::persisted(1, NewCamper::new(Some("Ana"), Some(11)).unwrap());
        let detail = CamperDetail {
            camper,
            signups: vec![SignupWithActivity {
                signup: signup(),
                activity: activity(),
            }],
        };
        let v = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 1,
                "name": "Ana",
                "age": 11,
                "signups": [{
                    "id": 5,
                    "time": 9,
                    "camper_id": 1,
                    "activity_id": 3,
                    "activity": { "id": 3, "name": "Archery", "difficulty": 2 }
                }]
            })
        );
    }

    #[test]
    fn summaries_have_no_signups_key() {
        let v = serde_json::to_value(activity()).unwrap();
        assert!(v.get("signups").is_none());
    }
}
