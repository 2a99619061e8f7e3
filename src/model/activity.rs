//! Activity: something campers sign up for.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

/// Activity not yet persisted. Only the seed tool creates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}
