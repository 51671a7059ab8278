//! PostgreSQL click repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::{AppError, map_sqlx_error};

/// Append-only `clicks` table backed by PostgreSQL.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO clicks
                (target_url, asin, tag, src, created_by, created_at_label, ip, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, clicked_at
            "#,
        )
        .bind(&new_click.target_url)
        .bind(&new_click.asin)
        .bind(&new_click.tag)
        .bind(&new_click.src)
        .bind(&new_click.created_by)
        .bind(&new_click.created_at_label)
        .bind(&new_click.ip)
        .bind(&new_click.user_agent)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(Click {
            id: row.get("id"),
            clicked_at: row.get("clicked_at"),
            target_url: new_click.target_url,
            asin: new_click.asin,
            tag: new_click.tag,
            src: new_click.src,
            created_by: new_click.created_by,
            created_at_label: new_click.created_at_label,
            ip: new_click.ip,
            user_agent: new_click.user_agent,
        })
    }
}
