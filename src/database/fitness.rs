//! Contains all database functions related to goals and the activity log.

use tracing::instrument;

use super::Store;
use super::models::{ActivityEntry, ActivityTotal, DATE_FORMAT};
use crate::error::StoreError;

impl Store {
    /// Insert-or-replace the user's goal. Earlier text is not kept.
    #[instrument(level = "debug", skip(self, goal))]
    pub async fn upsert_goal(&self, user_id: &str, goal: &str) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (id, goal) VALUES (?1, ?2)
             ON CONFLICT (id) DO UPDATE SET goal = excluded.goal",
        )
        .bind(user_id)
        .bind(goal)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn goal(&self, user_id: &str) -> Result<Option<String>, StoreError> {
        let goal = sqlx::query_scalar::<_, Option<String>>("SELECT goal FROM users WHERE id = ?1")
            .bind(user_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(goal.flatten())
    }

    #[instrument(level = "debug", skip(self, entry), fields(user_id = %entry.user_id))]
    pub async fn log_activity(&self, entry: &ActivityEntry) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO logs (id, type, duration, date) VALUES (?1, ?2, ?3, ?4)")
            .bind(&entry.user_id)
            .bind(&entry.activity_type)
            .bind(entry.duration_minutes)
            .bind(entry.date.format(DATE_FORMAT).to_string())
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Sum of logged minutes per activity type, recomputed on every call.
    pub async fn activity_totals(&self, user_id: &str) -> Result<Vec<ActivityTotal>, StoreError> {
        let totals = sqlx::query_as::<_, ActivityTotal>(
            r#"SELECT type AS activity_type, SUM(duration) AS total_minutes
               FROM logs WHERE id = ?1
               GROUP BY type
               ORDER BY type"#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(totals)
    }

    /// Number of log rows for one user. Only tests use this, to check that a
    /// rejected command wrote nothing.
    pub async fn activity_entry_count(&self, user_id: &str) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM logs WHERE id = ?1")
            .bind(user_id)
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}
