//! PostgreSQL implementation of the click ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
pub(super) struct ClickRow {
    id: i64,
    short_code: String,
    ip_address: String,
    user_agent: String,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            short_code: row.short_code,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            clicked_at: row.clicked_at,
        }
    }
}

/// PostgreSQL repository for the append-only `click_events` table.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO click_events (short_code, ip_address, user_agent, clicked_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, short_code, ip_address, user_agent, clicked_at
            "#,
        )
        .bind(&new_click.short_code)
        .bind(&new_click.ip_address)
        .bind(&new_click.user_agent)
        .bind(new_click.clicked_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn events_for(&self, code: &str) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, short_code, ip_address, user_agent, clicked_at
            FROM click_events
            WHERE short_code = $1
            ORDER BY clicked_at DESC, id DESC
            "#,
        )
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn recent_events_for(&self, code: &str, limit: usize) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, short_code, ip_address, user_agent, clicked_at
            FROM click_events
            WHERE short_code = $1
            ORDER BY clicked_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(code)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn all_events_grouped(&self) -> Result<HashMap<String, Vec<Click>>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, short_code, ip_address, user_agent, clicked_at
            FROM click_events
            ORDER BY clicked_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut grouped: HashMap<String, Vec<Click>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.short_code.clone())
                .or_default()
                .push(row.into());
        }

        Ok(grouped)
    }
}
