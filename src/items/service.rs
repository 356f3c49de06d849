use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    entities::{Item, ItemDraft, WarrantyState},
    items::validation::{self, ValidationError},
    repositories::ItemRepositoryTrait,
    warranty,
};

/// Outcomes an item operation can produce. Validation failures and missing
/// ids are expected, recoverable results; repository faults propagate
/// opaquely for the transport layer to map to a generic server error.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("validation failed ({} field(s) missing)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("item {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Orchestrates validation, warranty evaluation and persistence for items.
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepositoryTrait + Send + Sync>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepositoryTrait + Send + Sync>) -> Self {
        Self { repo }
    }

    /// Validate and classify a draft, then persist it under a fresh id.
    pub async fn create(&self, draft: ItemDraft, today: NaiveDate) -> Result<Item, ItemError> {
        let (end_date, remain_days, is_warranty) = evaluate(&draft, today)?;
        let id = self.repo.next_id().await?;

        let item = Item {
            id,
            item_name: draft.item_name,
            serial_number: draft.serial_number,
            end_date,
            notes: draft.notes,
            remain_days,
            is_warranty,
        };
        self.repo.save(item.clone()).await?;
        Ok(item)
    }

    /// Fully replace the record stored under `id`, recomputing the derived
    /// fields from the new end date. Nothing is written when the id is
    /// absent or the draft is invalid.
    pub async fn update(
        &self,
        id: i64,
        draft: ItemDraft,
        today: NaiveDate,
    ) -> Result<Item, ItemError> {
        if self.repo.find(id).await?.is_none() {
            return Err(ItemError::NotFound(id));
        }
        let (end_date, remain_days, is_warranty) = evaluate(&draft, today)?;

        let item = Item {
            id,
            item_name: draft.item_name,
            serial_number: draft.serial_number,
            end_date,
            notes: draft.notes,
            remain_days,
            is_warranty,
        };
        self.repo.save(item.clone()).await?;
        Ok(item)
    }

    pub async fn get(&self, id: i64) -> Result<Item, ItemError> {
        self.repo.find(id).await?.ok_or(ItemError::NotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<Item>, ItemError> {
        Ok(self.repo.list().await?)
    }

    /// Remove the record and return it, as the delete response echoes the
    /// removed row.
    pub async fn delete(&self, id: i64) -> Result<Item, ItemError> {
        let item = self.repo.find(id).await?.ok_or(ItemError::NotFound(id))?;
        self.repo.delete(id).await?;
        Ok(item)
    }
}

/// Run the validator, then derive the warranty fields from the end date.
fn evaluate(
    draft: &ItemDraft,
    today: NaiveDate,
) -> Result<(NaiveDate, i64, WarrantyState), ItemError> {
    let errors = validation::validate(draft);
    if let (true, Some(end_date)) = (errors.is_empty(), draft.end_date) {
        let (remain_days, is_warranty) = warranty::classify(warranty::days_between(today, end_date));
        Ok((end_date, remain_days, is_warranty))
    } else {
        Err(ItemError::Validation(errors))
    }
}
