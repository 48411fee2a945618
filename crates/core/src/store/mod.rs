//! Persistence of section overrides and admin profiles.
//!
//! Handlers talk to the traits below; `PgStore` backs them with the
//! `site_content` and `profiles` tables, `MemoryStore` with in-process
//! vectors for tests and local runs.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::content::{PageKey, SectionEntry};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Content type recorded on rows written by the editors.
pub const TEXT_CONTENT: &str = "text";

/// Role that grants access to the admin panel.
pub const ADMIN_ROLE: &str = "admin";

/// Database row of the `site_content` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SiteContentRow {
    pub id: Uuid,
    pub page: String,
    pub section: String,
    pub content_type: String,
    pub content: Value,
    pub sort_order: i32,
    pub updated_at: DateTime<Utc>,
}

/// Values written by one section save.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionWrite {
    pub page: PageKey,
    pub section: &'static str,
    pub content_type: &'static str,
    pub content: Value,
    pub sort_order: i32,
}

/// Page and last update of one row, for the dashboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RowStamp {
    pub page: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Row of the `profiles` table, without credentials.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Password hash of a profile, looked up by email at sign-in.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credentials {
    pub id: Uuid,
    pub password_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), StoreError>;

    /// All override rows of `page` as merge input.
    async fn section_entries(&self, page: PageKey) -> Result<Vec<SectionEntry>, StoreError>;

    /// Id of the row for `(page, section)`, if one exists.
    async fn find_section(&self, page: PageKey, section: &str)
        -> Result<Option<Uuid>, StoreError>;

    async fn update_section(&self, id: Uuid, write: &SectionWrite) -> Result<(), StoreError>;

    async fn insert_section(&self, write: &SectionWrite) -> Result<Uuid, StoreError>;

    /// `(page, updated_at)` of every row belonging to `pages`.
    async fn row_stamps(&self, pages: &[PageKey]) -> Result<Vec<RowStamp>, StoreError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError>;

    async fn credentials(&self, email: &str) -> Result<Option<Credentials>, StoreError>;
}
