// src/repositories/sqlite/stream_history.rs

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

use crate::Error;
use livepost_common::models::HistoryRecord;
use livepost_common::traits::repository_traits::StreamHistoryRepository;

#[derive(Clone)]
pub struct SqliteStreamHistoryRepository {
    pool: Pool<Sqlite>,
}

impl SqliteStreamHistoryRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

fn row_to_record(r: &SqliteRow) -> Result<HistoryRecord, Error> {
    Ok(HistoryRecord {
        title: r.try_get("title")?,
        game_id: r.try_get("game_id")?,
        started_at: r.try_get("started_at")?,
        recorded_at: r.try_get("recorded_at")?,
    })
}

#[async_trait]
impl StreamHistoryRepository for SqliteStreamHistoryRepository {
    async fn record_history(&self, title: &str, game_id: &str, started_at: &str) -> Result<bool, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO stream_history (started_at, title, game_id, recorded_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (started_at) DO NOTHING
            "#,
        )
            .bind(started_at)
            .bind(title)
            .bind(game_id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            debug!("Saved stream info for {}", started_at);
        } else {
            debug!("Stream info for {} already recorded", started_at);
        }
        Ok(inserted)
    }

    async fn get_by_start(&self, started_at: &str) -> Result<Option<HistoryRecord>, Error> {
        let row = sqlx::query(
            r#"
            SELECT started_at, title, game_id, recorded_at
            FROM stream_history
            WHERE started_at = ?
            "#,
        )
            .bind(started_at)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<HistoryRecord>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT started_at, title, game_id, recorded_at
            FROM stream_history
            ORDER BY started_at DESC
            LIMIT ?
            "#,
        )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        let mut results = Vec::with_capacity(rows.len());
        for r in &rows {
            results.push(row_to_record(r)?);
        }
        Ok(results)
    }
}
