//! Sample data for local development.

use crate::error::AppError;
use crate::model::{NewActivity, NewCamper, NewSignup};
use crate::service::{ActivityService, CamperService, SignupService};
use sqlx::SqlitePool;

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Hiking", 2),
    ("Canoeing", 4),
    ("Arts and Crafts", 1),
];

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 13),
    ("Ashley", 11),
    ("Dominic", 16),
    ("Jordan", 18),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub activities: usize,
    pub campers: usize,
    pub signups: usize,
}

/// Replace all rows with the sample data set in one transaction.
/// Every camper gets two signups at distinct hours.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    let mut tx = pool.begin().await?;
    for table in ["signups", "campers", "activities"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }

    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let new = NewActivity {
            name: name.to_string(),
            difficulty: *difficulty,
        };
        activity_ids.push(ActivityService::insert(&mut tx, &new).await?.id);
    }

    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let new = NewCamper::new(Some(*name), Some(*age))?;
        camper_ids.push(CamperService::insert(&mut tx, new).await?.id());
    }

    let mut signups = 0;
    for (i, camper_id) in camper_ids.iter().enumerate() {
        for offset in 0..2 {
            let activity_id = activity_ids[(i + offset) % activity_ids.len()];
            let time = 9 + (i as i64 + 3 * offset as i64) % 10;
            let new = NewSignup::new(Some(*camper_id), Some(activity_id), Some(time))?;
            SignupService::insert(&mut tx, new).await?;
            signups += 1;
        }
    }
    tx.commit().await?;

    let summary = SeedSummary {
        activities: activity_ids.len(),
        campers: camper_ids.len(),
        signups,
    };
    tracing::info!(?summary, "seeded sample data");
    Ok(summary)
}
