//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::pg_click_repository::ClickRow;
use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str =
    "id, original_url, short_code, is_alias, short_url, click_count, expires_at, created_at";

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    is_alias: bool,
    short_url: String,
    click_count: i64,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            is_alias: row.is_alias,
            short_url: row.short_url,
            click_count: row.click_count,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uniqueness of `short_code` is enforced by a unique index; creation is an
/// `INSERT … ON CONFLICT DO NOTHING` so a taken code yields no row instead of
/// an aborted statement.
///
/// Clicks are counted and appended to `click_events` by one data-modifying
/// CTE, so a failed insert also rolls back the counter.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            r#"
            INSERT INTO links (original_url, short_code, is_alias, short_url, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING {LINK_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.original_url)
            .bind(&new_link.short_code)
            .bind(new_link.is_alias)
            .bind(&new_link.short_url)
            .bind(new_link.expires_at)
            .bind(new_link.created_at)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Link::from).ok_or_else(|| {
            AppError::conflict(
                "Unique constraint violation",
                json!({ "code": new_link.short_code }),
            )
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE short_code = $1");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC, id DESC");

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_click(&self, new_click: NewClick) -> Result<Option<Click>, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            WITH hit AS (
                UPDATE links
                SET click_count = click_count + 1
                WHERE short_code = $1 AND (expires_at IS NULL OR expires_at >= $4)
                RETURNING short_code
            )
            INSERT INTO click_events (short_code, ip_address, user_agent, clicked_at)
            SELECT short_code, $2, $3, $4 FROM hit
            RETURNING id, short_code, ip_address, user_agent, clicked_at
            "#,
        )
        .bind(&new_click.short_code)
        .bind(&new_click.ip_address)
        .bind(&new_click.user_agent)
        .bind(new_click.clicked_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Click::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
