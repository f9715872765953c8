//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use statuskit_core::records::{Component, ComponentUpsert, Incident};
use statuskit_core::storage::{ComponentRepository, IncidentRepository, Result};

/// In-memory storage backend for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access. Data is
/// not persisted and will be lost when the repository is dropped. Observable
/// semantics match the DynamoDB backend: upserts generate missing
/// identifiers, and deleting an unknown identifier succeeds silently.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    components: Arc<RwLock<HashMap<String, Component>>>,
    incidents: Arc<RwLock<HashMap<String, Incident>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an incident directly into storage.
    ///
    /// Incidents are read-only through the repository trait, so tests use
    /// this to arrange data.
    pub async fn seed_incident(&self, incident: Incident) {
        let mut incidents = self.incidents.write().await;
        incidents.insert(incident.incident_id.clone(), incident);
    }
}

#[async_trait]
impl ComponentRepository for InMemoryRepository {
    async fn list_components(&self) -> Result<Vec<Component>> {
        let components = self.components.read().await;
        Ok(components.values().cloned().collect())
    }

    async fn upsert_component(&self, upsert: ComponentUpsert) -> Result<Component> {
        let component = Component {
            component_id: upsert.id_or_generated(),
            name: upsert.name,
            description: upsert.description,
            status: upsert.status,
        };

        let mut components = self.components.write().await;
        components.insert(component.component_id.clone(), component.clone());
        Ok(component)
    }

    async fn delete_component(&self, id: &str) -> Result<()> {
        let mut components = self.components.write().await;
        components.remove(id);
        Ok(())
    }
}

#[async_trait]
impl IncidentRepository for InMemoryRepository {
    async fn list_incidents(&self) -> Result<Vec<Incident>> {
        let incidents = self.incidents.read().await;
        Ok(incidents.values().cloned().collect())
    }
}
