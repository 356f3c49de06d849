use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::ItemDraft;

/// A single missing-field failure. The full list is reported in one pass
/// so clients can show every problem at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is required"),
        }
    }
}

/// Check a candidate for required-field completeness.
///
/// All four fields are checked in declaration order, never short-circuited.
/// Whitespace-only text counts as missing, uniformly across the text fields.
pub fn validate(draft: &ItemDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.item_name.trim().is_empty() {
        errors.push(ValidationError::required("itemName"));
    }
    if draft.serial_number.trim().is_empty() {
        errors.push(ValidationError::required("serialNumber"));
    }
    if draft.end_date.is_none() {
        errors.push(ValidationError::required("endDate"));
    }
    if draft.notes.trim().is_empty() {
        errors.push(ValidationError::required("notes"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn complete_draft() -> ItemDraft {
        ItemDraft {
            item_name: "Washing machine".to_string(),
            serial_number: "SN-1001".to_string(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            notes: "bought at the outlet".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn test_blank_item_name_yields_exactly_one_error() {
        let draft = ItemDraft {
            item_name: "".to_string(),
            ..complete_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "itemName");
        assert_eq!(errors[0].message, "itemName is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let draft = ItemDraft {
            serial_number: "   ".to_string(),
            notes: "\t\n".to_string(),
            ..complete_draft()
        };
        let fields: Vec<_> = validate(&draft).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["serialNumber", "notes"]);
    }

    #[test]
    fn test_all_missing_reports_full_set_in_declaration_order() {
        let errors = validate(&ItemDraft::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["itemName", "serialNumber", "endDate", "notes"]);
    }

    #[test]
    fn test_validate_is_pure() {
        let draft = ItemDraft {
            item_name: "".to_string(),
            ..complete_draft()
        };
        assert_eq!(validate(&draft), validate(&draft));
    }
}
