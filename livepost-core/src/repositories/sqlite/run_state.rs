// src/repositories/sqlite/run_state.rs

use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

use crate::Error;
use livepost_common::models::RunState;
use livepost_common::traits::repository_traits::RunStateRepository;

const LAST_START_KEY: &str = "last_start";
const LAST_POST_KEY: &str = "last_post";

/// Stores each fact as one row of `run_state`, keyed by name.
#[derive(Clone)]
pub struct SqliteRunStateRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRunStateRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    async fn get_value(&self, state_key: &str) -> Result<Option<String>, Error> {
        let row = sqlx::query(
            r#"
            SELECT state_value
            FROM run_state
            WHERE state_key = ?
            "#,
        )
            .bind(state_key)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(r.try_get("state_value")?))
        } else {
            Ok(None)
        }
    }

    /// Upsert on the primary key, so a fact never has more than one row.
    async fn set_value(&self, state_key: &str, state_value: &str) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO run_state (state_key, state_value)
            VALUES (?, ?)
            ON CONFLICT (state_key)
            DO UPDATE SET state_value = excluded.state_value
            "#,
        )
            .bind(state_key)
            .bind(state_value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RunStateRepository for SqliteRunStateRepository {
    async fn get_last_start(&self) -> Result<Option<String>, Error> {
        let started_at = self.get_value(LAST_START_KEY).await?;
        if let Some(ts) = &started_at {
            debug!("Previous timestamp was {}", ts);
        }
        Ok(started_at)
    }

    async fn set_last_start(&self, started_at: &str) -> Result<(), Error> {
        debug!("Saving stream starting time {}", started_at);
        self.set_value(LAST_START_KEY, started_at).await
    }

    async fn get_last_post(&self) -> Result<Option<String>, Error> {
        let post_id = self.get_value(LAST_POST_KEY).await?;
        if let Some(id) = &post_id {
            debug!("Previous post id was {}", id);
        }
        Ok(post_id)
    }

    async fn set_last_post(&self, post_id: &str) -> Result<(), Error> {
        debug!("Saving post id {}", post_id);
        self.set_value(LAST_POST_KEY, post_id).await
    }

    async fn load(&self) -> Result<RunState, Error> {
        let rows = sqlx::query(r#"SELECT state_key, state_value FROM run_state"#)
            .fetch_all(&self.pool)
            .await?;

        let mut state = RunState::default();
        for row in rows {
            let key: String = row.try_get("state_key")?;
            let value: String = row.try_get("state_value")?;
            match key.as_str() {
                LAST_START_KEY => state.last_start = Some(value),
                LAST_POST_KEY => state.last_post = Some(value),
                _ => {}
            }
        }
        Ok(state)
    }

    async fn clear(&self) -> Result<(), Error> {
        debug!("Clearing run state");
        sqlx::query(
            r#"
            DELETE FROM run_state
            WHERE state_key IN (?, ?)
            "#,
        )
            .bind(LAST_START_KEY)
            .bind(LAST_POST_KEY)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
