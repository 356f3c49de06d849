use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entities::{Item, ItemDraft, WarrantyState},
    items::validation::ValidationError,
};

/// Create/update request body.
///
/// Absent fields deserialize to their empty forms so the validator can
/// report the complete error set, instead of the transport rejecting the
/// body at the first missing key.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl From<ItemPayload> for ItemDraft {
    fn from(payload: ItemPayload) -> Self {
        Self {
            item_name: payload.item_name,
            serial_number: payload.serial_number,
            end_date: payload.end_date,
            notes: payload.notes,
        }
    }
}

/// Serialized item record. Field names mirror the stored attributes
/// (`itemName`, `serialNumber`, `endDate`, `notes`, `remainDays`,
/// `isWarranty`) for compatibility with existing consumers.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub item_name: String,
    pub serial_number: String,
    pub end_date: NaiveDate,
    pub notes: String,
    pub remain_days: i64,
    pub is_warranty: WarrantyState,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            item_name: item.item_name,
            serial_number: item.serial_number,
            end_date: item.end_date,
            notes: item.notes,
            remain_days: item.remain_days,
            is_warranty: item.is_warranty,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationError>,
}
