//! Schema DDL for activities, campers and signups.
//! Constraint names follow one convention so migrations stay diffable:
//! `ix_<table>_<col>`, `uq_<table>_<col>`, `ck_<table>_<name>`, `fk_<table>_<col>_<referred>`, `pk_<table>`.

use crate::error::AppError;
use crate::model::{MAX_CAMPER_AGE, MAX_SIGNUP_HOUR, MIN_CAMPER_AGE, MIN_SIGNUP_HOUR};
use sqlx::SqlitePool;

pub const ACTIVITIES: &str = "activities";
pub const CAMPERS: &str = "campers";
pub const SIGNUPS: &str = "signups";

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn index_name(table: &str, column: &str) -> String {
    format!("ix_{}_{}", table, column)
}

/// No table declares a unique constraint yet; kept so the `uq_` form has one definition.
pub fn unique_name(table: &str, column: &str) -> String {
    format!("uq_{}_{}", table, column)
}

pub fn check_name(table: &str, constraint: &str) -> String {
    format!("ck_{}_{}", table, constraint)
}

pub fn foreign_key_name(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referred_table)
}

pub fn primary_key_name(table: &str) -> String {
    format!("pk_{}", table)
}

/// Single-column foreign key onto `<referred>.id`, cascading deletes.
struct ForeignKey {
    column: &'static str,
    referred: &'static str,
}

struct Table {
    name: &'static str,
    columns: &'static [&'static str],
    checks: Vec<(&'static str, String)>,
    foreign_keys: &'static [ForeignKey],
}

impl Table {
    fn create_sql(&self) -> String {
        let mut defs: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        defs.push(format!(
            "CONSTRAINT {} PRIMARY KEY (\"id\")",
            quote(&primary_key_name(self.name))
        ));
        for (name, expr) in &self.checks {
            defs.push(format!(
                "CONSTRAINT {} CHECK ({})",
                quote(&check_name(self.name, name)),
                expr
            ));
        }
        for fk in self.foreign_keys {
            defs.push(format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} (\"id\") ON DELETE CASCADE",
                quote(&foreign_key_name(self.name, fk.column, fk.referred)),
                quote(fk.column),
                quote(fk.referred)
            ));
        }
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
            quote(self.name),
            defs.join(",\n  ")
        )
    }

    fn index_sql(&self) -> Vec<String> {
        self.foreign_keys
            .iter()
            .map(|fk| {
                format!(
                    "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                    quote(&index_name(self.name, fk.column)),
                    quote(self.name),
                    quote(fk.column)
                )
            })
            .collect()
    }
}

/// Parents before children so foreign keys resolve.
fn tables() -> Vec<Table> {
    vec![
        Table {
            name: ACTIVITIES,
            columns: &["\"id\" INTEGER NOT NULL", "\"name\" TEXT", "\"difficulty\" INTEGER"],
            checks: Vec::new(),
            foreign_keys: &[],
        },
        Table {
            name: CAMPERS,
            columns: &["\"id\" INTEGER NOT NULL", "\"name\" TEXT NOT NULL", "\"age\" INTEGER NOT NULL"],
            checks: vec![
                ("name_not_empty", "length(\"name\") > 0".to_string()),
                (
                    "age_range",
                    format!("\"age\" BETWEEN {} AND {}", MIN_CAMPER_AGE, MAX_CAMPER_AGE),
                ),
            ],
            foreign_keys: &[],
        },
        Table {
            name: SIGNUPS,
            columns: &[
                "\"id\" INTEGER NOT NULL",
                "\"time\" INTEGER NOT NULL",
                "\"camper_id\" INTEGER NOT NULL",
                "\"activity_id\" INTEGER NOT NULL",
            ],
            checks: vec![(
                "time_range",
                format!("\"time\" BETWEEN {} AND {}", MIN_SIGNUP_HOUR, MAX_SIGNUP_HOUR),
            )],
            foreign_keys: &[
                ForeignKey {
                    column: "camper_id",
                    referred: CAMPERS,
                },
                ForeignKey {
                    column: "activity_id",
                    referred: ACTIVITIES,
                },
            ],
        },
    ]
}

/// All statements in execution order.
pub fn schema_statements() -> Vec<String> {
    let tables = tables();
    let mut out: Vec<String> = tables.iter().map(Table::create_sql).collect();
    out.extend(tables.iter().flat_map(Table::index_sql));
    out
}

/// Create tables and indexes if missing. Safe to run on every start.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for sql in schema_statements() {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_names_follow_convention() {
        assert_eq!(index_name("signups", "camper_id"), "ix_signups_camper_id");
        assert_eq!(unique_name("campers", "name"), "uq_campers_name");
        assert_eq!(check_name("campers", "age_range"), "ck_campers_age_range");
        assert_eq!(
            foreign_key_name("signups", "activity_id", "activities"),
            "fk_signups_activity_id_activities"
        );
        assert_eq!(primary_key_name("campers"), "pk_campers");
    }

    #[test]
    fn signups_cascade_from_both_parents() {
        let stmts = schema_statements();
        let signups = stmts
            .iter()
            .find(|s| s.starts_with("CREATE TABLE IF NOT EXISTS \"signups\""))
            .unwrap();
        assert!(signups.contains(
            "CONSTRAINT \"fk_signups_camper_id_campers\" FOREIGN KEY (\"camper_id\") REFERENCES \"campers\" (\"id\") ON DELETE CASCADE"
        ));
        assert!(signups.contains("\"fk_signups_activity_id_activities\""));
        assert!(signups.contains("CONSTRAINT \"ck_signups_time_range\" CHECK (\"time\" BETWEEN 0 AND 23)"));
    }

    #[test]
    fn camper_name_check_only_rejects_empty() {
        let stmts = schema_statements();
        let campers = stmts
            .iter()
            .find(|s| s.starts_with("CREATE TABLE IF NOT EXISTS \"campers\""))
            .unwrap();
        assert!(campers.contains("CONSTRAINT \"ck_campers_name_not_empty\" CHECK (length(\"name\") > 0)"));
        assert!(!campers.contains("trim("));
    }

    #[test]
    fn parents_are_created_first() {
        let stmts = schema_statements();
        let pos = |t: &str| {
            stmts
                .iter()
                .position(|s| s.starts_with(&format!("CREATE TABLE IF NOT EXISTS \"{}\"", t)))
                .unwrap()
        };
        assert!(pos(ACTIVITIES) < pos(SIGNUPS));
        assert!(pos(CAMPERS) < pos(SIGNUPS));
        assert_eq!(stmts.len(), 5);
    }
}
