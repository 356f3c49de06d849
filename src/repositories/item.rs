use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::entities::Item;

/// Persistence contract for items: id minting, lookup, full-record save.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepositoryTrait {
    /// Mint the next unique id. Monotonically increasing.
    async fn next_id(&self) -> Result<i64>;
    async fn find(&self, id: i64) -> Result<Option<Item>>;
    async fn list(&self) -> Result<Vec<Item>>;
    /// Insert or fully replace the record stored under `item.id`.
    async fn save(&self, item: Item) -> Result<()>;
    /// Remove the record; `false` when the id was absent.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Concurrent in-memory store. Ids come from an atomic counter so two
/// concurrent creates can never race to the same id.
pub struct InMemoryItemRepository {
    items: DashMap<i64, Item>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepositoryTrait for InMemoryItemRepository {
    async fn next_id(&self) -> Result<i64> {
        Ok(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn find(&self, id: i64) -> Result<Option<Item>> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary; present items in id order.
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn save(&self, item: Item) -> Result<()> {
        self.items.insert(item.id, item);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.items.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::WarrantyState;
    use chrono::NaiveDate;

    fn sample_item(id: i64) -> Item {
        Item {
            id,
            item_name: "Fridge".to_string(),
            serial_number: format!("SN-{id}"),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            notes: "kitchen".to_string(),
            remain_days: 120,
            is_warranty: WarrantyState::Warranty,
        }
    }

    #[tokio::test]
    async fn test_next_id_is_monotonic() {
        let repo = InMemoryItemRepository::new();
        let first = repo.next_id().await.unwrap();
        let second = repo.next_id().await.unwrap();
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemoryItemRepository::new();
        let item = sample_item(1);
        repo.save(item.clone()).await.unwrap();
        assert_eq!(repo.find(1).await.unwrap(), Some(item));
        assert_eq!(repo.find(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_record() {
        let repo = InMemoryItemRepository::new();
        repo.save(sample_item(1)).await.unwrap();

        let mut replacement = sample_item(1);
        replacement.notes = "moved to garage".to_string();
        repo.save(replacement.clone()).await.unwrap();

        assert_eq!(repo.find(1).await.unwrap(), Some(replacement));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryItemRepository::new();
        for id in [3, 1, 2] {
            repo.save(sample_item(id)).await.unwrap();
        }
        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let repo = InMemoryItemRepository::new();
        repo.save(sample_item(1)).await.unwrap();

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
        assert_eq!(repo.find(1).await.unwrap(), None);
    }
}
