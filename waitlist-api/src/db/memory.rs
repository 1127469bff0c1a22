use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, WaitlistStore};
use crate::models::{NewWaitlistEntry, WaitlistEntry};

/// Process-local store used when no database is configured, and by tests.
#[derive(Default)]
pub struct MemoryWaitlistStore {
    entries: RwLock<Vec<WaitlistEntry>>,
}

impl MemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WaitlistStore for MemoryWaitlistStore {
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let stored = WaitlistEntry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            email: entry.email,
            full_name: entry.full_name,
            role: entry.role,
            price_per_scan_cents: entry.price_per_scan_cents,
            contacted_at: None,
        };
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<WaitlistEntry>, StoreError> {
        let entries = self.entries.read().await;
        // newest insert first among equal timestamps
        let mut recent: Vec<WaitlistEntry> = entries.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit as usize);
        Ok(recent)
    }

    async fn set_contacted(
        &self,
        id: Uuid,
        contacted_at: Option<DateTime<Utc>>,
    ) -> Result<Option<WaitlistEntry>, StoreError> {
        let mut entries = self.entries.write().await;
        Ok(entries.iter_mut().find(|e| e.id == id).map(|entry| {
            entry.contacted_at = contacted_at;
            entry.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str) -> NewWaitlistEntry {
        NewWaitlistEntry {
            email: email.to_string(),
            full_name: "Test User".to_string(),
            role: "developer".to_string(),
            price_per_scan_cents: 150,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryWaitlistStore::new();
        store.insert(signup("a@example.com")).await.unwrap();
        assert!(matches!(
            store.insert(signup("a@example.com")).await,
            Err(StoreError::DuplicateEmail)
        ));
    }

    #[tokio::test]
    async fn test_list_recent_newest_first_and_limited() {
        let store = MemoryWaitlistStore::new();
        for i in 0..5 {
            store.insert(signup(&format!("{i}@example.com"))).await.unwrap();
        }

        let recent = store.list_recent(3).await.unwrap();
        let emails: Vec<&str> = recent.iter().map(|e| e.email.as_str()).collect();
        assert_eq!(emails, ["4@example.com", "3@example.com", "2@example.com"]);
    }

    #[tokio::test]
    async fn test_set_contacted_toggles() {
        let store = MemoryWaitlistStore::new();
        let entry = store.insert(signup("a@example.com")).await.unwrap();

        let now = Utc::now();
        let updated = store.set_contacted(entry.id, Some(now)).await.unwrap().unwrap();
        assert_eq!(updated.contacted_at, Some(now));

        let cleared = store.set_contacted(entry.id, None).await.unwrap().unwrap();
        assert_eq!(cleared.contacted_at, None);

        assert!(store.set_contacted(Uuid::new_v4(), None).await.unwrap().is_none());
    }
}
