use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{
    ContentStore, Credentials, Profile, ProfileStore, RowStamp, SectionWrite, SiteContentRow,
    StoreError,
};
use crate::content::{PageKey, SectionEntry};

/// In-process store. Rows live in insertion order, like a table without
/// an index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<SiteContentRow>>,
    profiles: Mutex<Vec<(Profile, String)>>,
    offline: Mutex<bool>,
    rejected_sections: Mutex<HashSet<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stored row as if it had been written earlier.
    pub fn seed(&self, page: PageKey, section: &str, content: serde_json::Value) -> Uuid {
        let id = Uuid::new_v4();
        lock(&self.rows).push(SiteContentRow {
            id,
            page: page.as_str().to_string(),
            section: section.to_string(),
            content_type: super::TEXT_CONTENT.to_string(),
            content,
            sort_order: 0,
            updated_at: Utc::now(),
        });
        id
    }

    /// Register a profile with an already hashed password.
    pub fn add_profile(&self, email: &str, role: &str, password_hash: String) -> Uuid {
        let id = Uuid::new_v4();
        let profile = Profile {
            id,
            email: email.to_string(),
            role: role.to_string(),
        };
        lock(&self.profiles).push((profile, password_hash));
        id
    }

    /// Make every call fail as if the database were unreachable.
    #[cfg(any(test, feature = "test-util"))]
    pub fn set_offline(&self, offline: bool) {
        *lock(&self.offline) = offline;
    }

    /// Make writes to `section` (on any page) fail.
    #[cfg(any(test, feature = "test-util"))]
    pub fn reject_writes_to(&self, section: &str) {
        lock(&self.rejected_sections).insert(section.to_string());
    }

    pub fn rows(&self) -> Vec<SiteContentRow> {
        lock(&self.rows).clone()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if *lock(&self.offline) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }

    fn check_writable(&self, section: &str) -> Result<(), StoreError> {
        self.check_online()?;
        if lock(&self.rejected_sections).contains(section) {
            return Err(StoreError::Unavailable(format!(
                "writes to `{section}` are rejected"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_online()
    }

    async fn section_entries(&self, page: PageKey) -> Result<Vec<SectionEntry>, StoreError> {
        self.check_online()?;
        let mut rows: Vec<_> = lock(&self.rows)
            .iter()
            .filter(|row| row.page == page.as_str())
            .cloned()
            .collect();
        rows.sort_by_key(|row| (row.sort_order, row.updated_at));
        Ok(rows
            .into_iter()
            .map(|row| SectionEntry::new(row.section, row.content))
            .collect())
    }

    async fn find_section(
        &self,
        page: PageKey,
        section: &str,
    ) -> Result<Option<Uuid>, StoreError> {
        self.check_online()?;
        Ok(lock(&self.rows)
            .iter()
            .find(|row| row.page == page.as_str() && row.section == section)
            .map(|row| row.id))
    }

    async fn update_section(&self, id: Uuid, write: &SectionWrite) -> Result<(), StoreError> {
        self.check_writable(write.section)?;
        let mut rows = lock(&self.rows);
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            row.content = write.content.clone();
            row.content_type = write.content_type.to_string();
            row.sort_order = write.sort_order;
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn insert_section(&self, write: &SectionWrite) -> Result<Uuid, StoreError> {
        self.check_writable(write.section)?;
        let id = Uuid::new_v4();
        lock(&self.rows).push(SiteContentRow {
            id,
            page: write.page.as_str().to_string(),
            section: write.section.to_string(),
            content_type: write.content_type.to_string(),
            content: write.content.clone(),
            sort_order: write.sort_order,
            updated_at: Utc::now(),
        });
        Ok(id)
    }

    async fn row_stamps(&self, pages: &[PageKey]) -> Result<Vec<RowStamp>, StoreError> {
        self.check_online()?;
        Ok(lock(&self.rows)
            .iter()
            .filter(|row| pages.iter().any(|page| page.as_str() == row.page))
            .map(|row| RowStamp {
                page: row.page.clone(),
                updated_at: Some(row.updated_at),
            })
            .collect())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        self.check_online()?;
        Ok(lock(&self.profiles)
            .iter()
            .find(|(profile, _)| profile.id == id)
            .map(|(profile, _)| profile.clone()))
    }

    async fn credentials(&self, email: &str) -> Result<Option<Credentials>, StoreError> {
        self.check_online()?;
        Ok(lock(&self.profiles)
            .iter()
            .find(|(profile, _)| profile.email.eq_ignore_ascii_case(email.trim()))
            .map(|(profile, hash)| Credentials {
                id: profile.id,
                password_hash: hash.clone(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(section: &'static str, title: &str) -> SectionWrite {
        SectionWrite {
            page: PageKey::Branding,
            section,
            content_type: super::super::TEXT_CONTENT,
            content: json!({ "title": title }),
            sort_order: 3,
        }
    }

    #[tokio::test]
    async fn entries_are_scoped_to_page() {
        let store = MemoryStore::new();
        store.seed(PageKey::Home, "hero", json!({"title": "Accueil"}));
        store.insert_section(&write("cta", "Contact")).await.unwrap();

        let entries = store.section_entries(PageKey::Branding).await.unwrap();
        assert_eq!(entries, vec![SectionEntry::new("cta", json!({"title": "Contact"}))]);
        assert_eq!(store.row_stamps(&[PageKey::Home]).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn offline_store_fails_reads_and_writes() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(store.section_entries(PageKey::Home).await.is_err());
        assert!(store.insert_section(&write("cta", "x")).await.is_err());
    }
}
