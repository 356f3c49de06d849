use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tri-state warranty coverage, serialized with the wire names consumers
/// already rely on (`warranty` / `nearExpire` / `expired`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum WarrantyState {
    Warranty,
    NearExpire,
    Expired,
}

/// --- Stored records ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub pw_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A tracked item. `remain_days` and `is_warranty` are derived from
/// `end_date` on every create/update and are never set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub item_name: String,
    pub serial_number: String,
    pub end_date: NaiveDate,
    pub notes: String,
    pub remain_days: i64,
    pub is_warranty: WarrantyState,
}

/// An unvalidated candidate submitted for creation or update, prior to
/// passing through the validator. A missing end date is a validation
/// failure, not a malformed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub item_name: String,
    pub serial_number: String,
    pub end_date: Option<NaiveDate>,
    pub notes: String,
}
