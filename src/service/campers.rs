//! Camper queries and writes.

use crate::error::AppError;
use crate::model::{Activity, Camper, CamperDetail, NewCamper, Signup, SignupWithActivity};
use serde_json::{Map, Value};
use sqlx::{SqliteConnection, SqlitePool};

const SQL_LIST: &str = "SELECT id, name, age FROM campers ORDER BY id";
const SQL_BY_ID: &str = "SELECT id, name, age FROM campers WHERE id = ?";
const SQL_INSERT: &str = "INSERT INTO campers (name, age) VALUES (?, ?)";
const SQL_UPDATE: &str = "UPDATE campers SET name = ?, age = ? WHERE id = ?";
const SQL_SIGNUPS: &str = r#"
SELECT s.id, s.time, s.camper_id, s.activity_id,
       a.name AS activity_name, a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?
ORDER BY s.id
"#;

#[derive(sqlx::FromRow)]
struct SignupActivityRow {
    id: i64,
    time: i64,
    camper_id: i64,
    activity_id: i64,
    activity_name: Option<String>,
    activity_difficulty: Option<i64>,
}

impl From<SignupActivityRow> for SignupWithActivity {
    fn from(r: SignupActivityRow) -> Self {
        SignupWithActivity {
            signup: Signup {
                id: r.id,
                time: r.time,
                camper_id: r.camper_id,
                activity_id: r.activity_id,
            },
            activity: Activity {
                id: r.activity_id,
                name: r.activity_name,
                difficulty: r.activity_difficulty,
            },
        }
    }
}

pub struct CamperService;

impl CamperService {
    /// All campers, without signups.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Camper>, AppError> {
        tracing::debug!(sql = %SQL_LIST, "query");
        let rows = sqlx::query_as::<_, Camper>(SQL_LIST).fetch_all(pool).await?;
        Ok(rows)
    }

    /// One camper with its signups and their activities.
    pub async fn detail(pool: &SqlitePool, id: i64) -> Result<Option<CamperDetail>, AppError> {
        let mut conn = pool.acquire().await?;
        let Some(camper) = Self::find(&mut conn, id).await? else {
            return Ok(None);
        };
        Ok(Some(Self::with_signups(&mut conn, camper).await?))
    }

    pub async fn create(pool: &SqlitePool, new: NewCamper) -> Result<CamperDetail, AppError> {
        let mut tx = pool.begin().await?;
        let camper = Self::insert(&mut tx, new).await?;
        tx.commit().await?;
        tracing::info!(camper_id = camper.id(), "camper created");
        Ok(CamperDetail {
            camper,
            signups: Vec::new(),
        })
    }

    /// Insert on an open connection or transaction; the caller commits.
    pub async fn insert(conn: &mut SqliteConnection, new: NewCamper) -> Result<Camper, AppError> {
        tracing::debug!(sql = %SQL_INSERT, "query");
        let id = sqlx::query(SQL_INSERT)
            .bind(&new.name)
            .bind(new.age)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        Ok(Camper::persisted(id, new))
    }

    /// Apply a partial update. Returns None if the camper does not exist;
    /// a validation failure rolls back without writing.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &Map<String, Value>,
    ) -> Result<Option<CamperDetail>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(mut camper) = Self::find(&mut tx, id).await? else {
            return Ok(None);
        };
        camper.apply_patch(patch)?;
        tracing::debug!(sql = %SQL_UPDATE, "query (tx)");
        sqlx::query(SQL_UPDATE)
            .bind(camper.name())
            .bind(camper.age())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let detail = Self::with_signups(&mut tx, camper).await?;
        tx.commit().await?;
        tracing::info!(camper_id = id, "camper updated");
        Ok(Some(detail))
    }

    pub(crate) async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Camper>, AppError> {
        tracing::debug!(sql = %SQL_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Camper>(SQL_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn with_signups(conn: &mut SqliteConnection, camper: Camper) -> Result<CamperDetail, AppError> {
        tracing::debug!(sql = %SQL_SIGNUPS, camper_id = camper.id(), "query");
        let rows = sqlx::query_as::<_, SignupActivityRow>(SQL_SIGNUPS)
            .bind(camper.id())
            .fetch_all(&mut *conn)
            .await?;
        Ok(CamperDetail {
            camper,
            signups: rows.into_iter().map(Into::into).collect(),
        })
    }
}
