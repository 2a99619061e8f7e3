//! Activity queries and deletion.

use crate::error::AppError;
use crate::model::{Activity, ActivityDetail, Camper, NewActivity, NewCamper, Signup, SignupWithCamper};
use sqlx::{SqliteConnection, SqlitePool};

const SQL_LIST: &str = "SELECT id, name, difficulty FROM activities ORDER BY id";
const SQL_BY_ID: &str = "SELECT id, name, difficulty FROM activities WHERE id = ?";
const SQL_INSERT: &str = "INSERT INTO activities (name, difficulty) VALUES (?, ?)";
const SQL_DELETE_SIGNUPS: &str = "DELETE FROM signups WHERE activity_id = ?";
const SQL_DELETE: &str = "DELETE FROM activities WHERE id = ?";
const SQL_SIGNUPS: &str = r#"
SELECT s.id, s.time, s.camper_id, s.activity_id,
       c.name AS camper_name, c.age AS camper_age
FROM signups s
JOIN campers c ON c.id = s.camper_id
WHERE s.activity_id = ?
ORDER BY s.id
"#;

#[derive(sqlx::FromRow)]
struct SignupCamperRow {
    id: i64,
    time: i64,
    camper_id: i64,
    activity_id: i64,
    camper_name: String,
    camper_age: i64,
}

impl From<SignupCamperRow> for SignupWithCamper {
    fn from(r: SignupCamperRow) -> Self {
        SignupWithCamper {
            signup: Signup {
                id: r.id,
                time: r.time,
                camper_id: r.camper_id,
                activity_id: r.activity_id,
            },
            camper: Camper::persisted(
                r.camper_id,
                NewCamper {
                    name: r.camper_name,
                    age: r.camper_age,
                },
            ),
        }
    }
}

pub struct ActivityService;

impl ActivityService {
    /// All activities, without signups.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, AppError> {
        tracing::debug!(sql = %SQL_LIST, "query");
        let rows = sqlx::query_as::<_, Activity>(SQL_LIST).fetch_all(pool).await?;
        Ok(rows)
    }

    /// One activity with its signups and their campers.
    pub async fn detail(pool: &SqlitePool, id: i64) -> Result<Option<ActivityDetail>, AppError> {
        let mut conn = pool.acquire().await?;
        let Some(activity) = Self::find(&mut conn, id).await? else {
            return Ok(None);
        };
        tracing::debug!(sql = %SQL_SIGNUPS, activity_id = id, "query");
        let rows = sqlx::query_as::<_, SignupCamperRow>(SQL_SIGNUPS)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(Some(ActivityDetail {
            activity,
            signups: rows.into_iter().map(Into::into).collect(),
        }))
    }

    /// Delete an activity and its signups in one transaction.
    /// Returns the number of signups removed, or None if the activity does not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<u64>, AppError> {
        let mut tx = pool.begin().await?;
        if Self::find(&mut tx, id).await?.is_none() {
            return Ok(None);
        }
        tracing::debug!(sql = %SQL_DELETE_SIGNUPS, activity_id = id, "query (tx)");
        let removed = sqlx::query(SQL_DELETE_SIGNUPS)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::debug!(sql = %SQL_DELETE, activity_id = id, "query (tx)");
        sqlx::query(SQL_DELETE).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!(activity_id = id, signups_removed = removed, "activity deleted");
        Ok(Some(removed))
    }

    /// Insert on an open connection or transaction; the caller commits.
    pub async fn insert(conn: &mut SqliteConnection, new: &NewActivity) -> Result<Activity, AppError> {
        tracing::debug!(sql = %SQL_INSERT, "query");
        let id = sqlx::query(SQL_INSERT)
            .bind(&new.name)
            .bind(new.difficulty)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        Ok(Activity {
            id,
            name: Some(new.name.clone()),
            difficulty: Some(new.difficulty),
        })
    }

    pub(crate) async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Activity>, AppError> {
        tracing::debug!(sql = %SQL_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Activity>(SQL_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }
}
