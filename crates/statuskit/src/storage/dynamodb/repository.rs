//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `statuskit_core::storage` using
//! DynamoDB. Each operation issues a single remote call; scans are unbounded
//! and assumed to return small result sets.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use tracing::debug;

use statuskit_core::records::{Component, ComponentUpsert, Incident};
use statuskit_core::storage::{ComponentRepository, IncidentRepository, Result, StoreError};

use super::conversions::{
    item_to_component, item_to_incident, ATTR_COMPONENT_ID, ATTR_NAME, ATTR_STATUS,
};
use super::error::map_sdk_error;
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds one table per record type. The SDK client manages connections
/// internally; no pooling or retry logic lives here.
pub struct DynamoDbRepository {
    client: Client,
    component_table: String,
    incident_table: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and tables.
    pub fn new(
        client: Client,
        component_table: impl Into<String>,
        incident_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            component_table: component_table.into(),
            incident_table: incident_table.into(),
        }
    }

    /// Creates a new repository from explicit configuration.
    ///
    /// Uses the AWS SDK default credential chain with the region taken from
    /// the config rather than ambient environment state.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;
        let client = Client::new(&sdk_config);

        Self::new(
            client,
            config.component_table.clone(),
            config.incident_table.clone(),
        )
    }

    /// Get the components table name.
    pub fn component_table(&self) -> &str {
        &self.component_table
    }

    /// Get the incidents table name.
    pub fn incident_table(&self) -> &str {
        &self.incident_table
    }
}

#[async_trait]
impl ComponentRepository for DynamoDbRepository {
    async fn list_components(&self) -> Result<Vec<Component>> {
        // `name` and `status` are DynamoDB reserved words and must be aliased.
        let result = self
            .client
            .scan()
            .table_name(&self.component_table)
            .projection_expression("componentID, description, #nm, #st")
            .expression_attribute_names("#nm", ATTR_NAME)
            .expression_attribute_names("#st", ATTR_STATUS)
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", &self.component_table, e))?;

        let items = result.items.unwrap_or_default();
        let components = items
            .iter()
            .map(item_to_component)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            table = %self.component_table,
            count = components.len(),
            "scanned components"
        );
        Ok(components)
    }

    async fn upsert_component(&self, upsert: ComponentUpsert) -> Result<Component> {
        let id = upsert.id_or_generated();

        let result = self
            .client
            .update_item()
            .table_name(&self.component_table)
            .key(ATTR_COMPONENT_ID, AttributeValue::S(id.clone()))
            .update_expression("SET #n = :n, description = :d, #s = :s")
            .expression_attribute_names("#n", ATTR_NAME)
            .expression_attribute_names("#s", ATTR_STATUS)
            .expression_attribute_values(":n", AttributeValue::S(upsert.name))
            .expression_attribute_values(":d", AttributeValue::S(upsert.description))
            .expression_attribute_values(":s", AttributeValue::S(upsert.status))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateItem", &self.component_table, e))?;

        debug!(table = %self.component_table, id = %id, "upserted component");

        let attributes = result.attributes.ok_or_else(|| {
            StoreError::InvalidRecord("UpdateItem returned no attributes".to_string())
        })?;
        item_to_component(&attributes)
    }

    async fn delete_component(&self, id: &str) -> Result<()> {
        // No condition expression: deleting a missing id succeeds silently.
        self.client
            .delete_item()
            .table_name(&self.component_table)
            .key(ATTR_COMPONENT_ID, AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::None)
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", &self.component_table, e))?;

        debug!(table = %self.component_table, id = %id, "deleted component");
        Ok(())
    }
}

#[async_trait]
impl IncidentRepository for DynamoDbRepository {
    async fn list_incidents(&self) -> Result<Vec<Incident>> {
        let result = self
            .client
            .scan()
            .table_name(&self.incident_table)
            .projection_expression("incidentID, #nm, #st, updatedAt")
            .expression_attribute_names("#nm", ATTR_NAME)
            .expression_attribute_names("#st", ATTR_STATUS)
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", &self.incident_table, e))?;

        let items = result.items.unwrap_or_default();
        let incidents = items
            .iter()
            .map(item_to_incident)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            table = %self.incident_table,
            count = incidents.len(),
            "scanned incidents"
        );
        Ok(incidents)
    }
}
