use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    ContentStore, Credentials, Profile, ProfileStore, RowStamp, SectionWrite, StoreError,
};
use crate::content::{PageKey, SectionEntry};

/// PostgreSQL-backed store over the `site_content` and `profiles` tables.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn section_entries(&self, page: PageKey) -> Result<Vec<SectionEntry>, StoreError> {
        let rows: Vec<(String, Value)> = sqlx::query_as(
            "SELECT section, content FROM site_content WHERE page = $1 ORDER BY sort_order, updated_at",
        )
        .bind(page.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(section, content)| SectionEntry { section, content })
            .collect())
    }

    async fn find_section(
        &self,
        page: PageKey,
        section: &str,
    ) -> Result<Option<Uuid>, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM site_content WHERE page = $1 AND section = $2",
        )
        .bind(page.as_str())
        .bind(section)
        .fetch_optional(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_section(&self, id: Uuid, write: &SectionWrite) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE site_content \
             SET content = $2, content_type = $3, sort_order = $4, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&write.content)
        .bind(write.content_type)
        .bind(write.sort_order)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_section(&self, write: &SectionWrite) -> Result<Uuid, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO site_content (id, page, section, content_type, content, sort_order, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, now()) \
             RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(write.page.as_str())
        .bind(write.section)
        .bind(write.content_type)
        .bind(&write.content)
        .bind(write.sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn row_stamps(&self, pages: &[PageKey]) -> Result<Vec<RowStamp>, StoreError> {
        let keys: Vec<String> = pages.iter().map(|p| p.as_str().to_string()).collect();
        let stamps = sqlx::query_as::<_, RowStamp>(
            "SELECT page, updated_at FROM site_content WHERE page = ANY($1)",
        )
        .bind(&keys)
        .fetch_all(&self.pool)
        .await?;
        Ok(stamps)
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, email, role FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn credentials(&self, email: &str) -> Result<Option<Credentials>, StoreError> {
        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT id, password_hash FROM profiles WHERE lower(email) = lower($1)",
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await?;
        Ok(credentials)
    }
}
