use async_trait::async_trait;

use crate::records::{Component, ComponentUpsert, Incident};

use super::Result;

/// Repository for service component operations.
///
/// Each call is independent and stateless; implementations hold no shared
/// mutable state besides the store itself, so calls are safe to issue
/// concurrently.
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Lists all components via an unfiltered scan.
    async fn list_components(&self) -> Result<Vec<Component>>;

    /// Creates or fully replaces a component, returning the stored record.
    ///
    /// Generates a new identifier when the upsert carries none.
    async fn upsert_component(&self, upsert: ComponentUpsert) -> Result<Component>;

    /// Deletes a component by its identifier.
    ///
    /// Deleting an identifier that was never stored succeeds silently.
    async fn delete_component(&self, id: &str) -> Result<()>;
}

/// Repository for incident operations.
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// Lists all incidents via an unfiltered scan.
    async fn list_incidents(&self) -> Result<Vec<Incident>>;
}
