//! Signup creation.

use crate::error::AppError;
use crate::model::{NewSignup, Signup, SignupDetail, ValidationError};
use crate::service::{ActivityService, CamperService};
use sqlx::{SqliteConnection, SqlitePool};

const SQL_INSERT: &str = "INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?)";

pub struct SignupService;

impl SignupService {
    /// Insert a signup after checking both referenced rows inside the same transaction.
    /// A missing camper or activity is a validation error; a constraint the store rejects is an integrity error.
    pub async fn create(pool: &SqlitePool, new: NewSignup) -> Result<SignupDetail, AppError> {
        let mut tx = pool.begin().await?;
        let camper = CamperService::find(&mut tx, new.camper_id).await?;
        let activity = ActivityService::find(&mut tx, new.activity_id).await?;
        let (camper, activity) = match (camper, activity) {
            (Some(c), Some(a)) => (c, a),
            (camper, activity) => {
                let mut errors = Vec::new();
                if camper.is_none() {
                    errors.push(ValidationError::new(
                        "camper_id",
                        format!("Camper {} does not exist", new.camper_id),
                    ));
                }
                if activity.is_none() {
                    errors.push(ValidationError::new(
                        "activity_id",
                        format!("Activity {} does not exist", new.activity_id),
                    ));
                }
                return Err(AppError::Validation(errors));
            }
        };

        let signup = Self::insert(&mut tx, new).await?;
        tx.commit().await?;
        tracing::info!(
            signup_id = signup.id,
            camper_id = signup.camper_id,
            activity_id = signup.activity_id,
            "signup created"
        );
        Ok(SignupDetail {
            signup,
            camper,
            activity,
        })
    }

    /// Insert without the existence checks; foreign keys still apply. The caller commits.
    pub async fn insert(conn: &mut SqliteConnection, new: NewSignup) -> Result<Signup, AppError> {
        tracing::debug!(sql = %SQL_INSERT, "query");
        let id = sqlx::query(SQL_INSERT)
            .bind(new.time)
            .bind(new.camper_id)
            .bind(new.activity_id)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        Ok(Signup {
            id,
            time: new.time,
            camper_id: new.camper_id,
            activity_id: new.activity_id,
        })
    }
}
