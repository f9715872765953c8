//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting DynamoDB AttributeValue maps into record
//! types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use statuskit_core::records::{Component, Incident};
use statuskit_core::storage::StoreError;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_COMPONENT_ID: &str = "componentID";
pub const ATTR_INCIDENT_ID: &str = "incidentID";
pub const ATTR_NAME: &str = "name";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_STATUS: &str = "status";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Item conversions
// ============================================================================

/// Convert a DynamoDB item to a Component.
pub fn item_to_component(item: &Item) -> Result<Component, StoreError> {
    Ok(Component {
        component_id: get_string(item, ATTR_COMPONENT_ID)?,
        name: get_string(item, ATTR_NAME)?,
        description: get_string(item, ATTR_DESCRIPTION)?,
        status: get_string(item, ATTR_STATUS)?,
    })
}

/// Convert a DynamoDB item to an Incident.
pub fn item_to_incident(item: &Item) -> Result<Incident, StoreError> {
    Ok(Incident {
        incident_id: get_string(item, ATTR_INCIDENT_ID)?,
        name: get_string(item, ATTR_NAME)?,
        status: get_string(item, ATTR_STATUS)?,
        updated_at: get_string(item, ATTR_UPDATED_AT)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidRecord(format!("missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component_item() -> Item {
        let mut item = HashMap::new();
        item.insert(
            ATTR_COMPONENT_ID.to_string(),
            AttributeValue::S("abc123def456".to_string()),
        );
        item.insert(ATTR_NAME.to_string(), AttributeValue::S("API".to_string()));
        item.insert(
            ATTR_DESCRIPTION.to_string(),
            AttributeValue::S("Public REST API".to_string()),
        );
        item.insert(
            ATTR_STATUS.to_string(),
            AttributeValue::S("Operational".to_string()),
        );
        item
    }

    fn incident_item() -> Item {
        let mut item = HashMap::new();
        item.insert(
            ATTR_INCIDENT_ID.to_string(),
            AttributeValue::S("inc-001".to_string()),
        );
        item.insert(
            ATTR_NAME.to_string(),
            AttributeValue::S("Elevated error rates".to_string()),
        );
        item.insert(
            ATTR_STATUS.to_string(),
            AttributeValue::S("Investigating".to_string()),
        );
        item.insert(
            ATTR_UPDATED_AT.to_string(),
            AttributeValue::S("2024-01-15T10:30:00Z".to_string()),
        );
        item
    }

    #[test]
    fn test_item_to_component_preserves_fields() {
        let component = item_to_component(&component_item()).unwrap();

        assert_eq!(component.component_id, "abc123def456");
        assert_eq!(component.name, "API");
        assert_eq!(component.description, "Public REST API");
        assert_eq!(component.status, "Operational");
    }

    #[test]
    fn test_item_to_component_missing_field() {
        let mut item = component_item();
        item.remove(ATTR_NAME);

        let err = item_to_component(&item).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidRecord("missing or invalid field: name".to_string())
        );
    }

    #[test]
    fn test_item_to_component_non_string_field() {
        let mut item = component_item();
        item.insert(
            ATTR_STATUS.to_string(),
            AttributeValue::N("3".to_string()),
        );

        assert!(item_to_component(&item).is_err());
    }

    #[test]
    fn test_item_to_incident_preserves_fields() {
        let incident = item_to_incident(&incident_item()).unwrap();

        assert_eq!(incident.incident_id, "inc-001");
        assert_eq!(incident.name, "Elevated error rates");
        assert_eq!(incident.status, "Investigating");
        assert_eq!(incident.updated_at, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_item_to_incident_missing_updated_at() {
        let mut item = incident_item();
        item.remove(ATTR_UPDATED_AT);

        let err = item_to_incident(&item).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidRecord("missing or invalid field: updatedAt".to_string())
        );
    }
}
