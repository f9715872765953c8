use serde::{Deserialize, Serialize};

use super::id::generate_component_id;

/// A monitored service component shown on the status page.
///
/// `status` is an enum-like string (`Operational`, `Under Maintenance`,
/// `Degraded Performance`, `Partial Outage`, `Major Outage`). This layer
/// passes status values through without validating them; the store is the
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "componentID")]
    pub component_id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

impl Component {
    /// Creates a new component with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            component_id: generate_component_id(),
            name: name.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Sets a specific identifier for this component (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.component_id = id.into();
        self
    }
}

/// Request value for a component upsert.
///
/// When `component_id` is `None`, the storage backend generates a new
/// identifier before issuing the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentUpsert {
    pub component_id: Option<String>,
    pub name: String,
    pub description: String,
    pub status: String,
}

impl ComponentUpsert {
    /// Creates an upsert request without an identifier.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            component_id: None,
            name: name.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Targets an existing component by identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.component_id = Some(id.into());
        self
    }

    /// Resolves the identifier the write will be keyed on, generating a new
    /// one when none was supplied.
    pub fn id_or_generated(&self) -> String {
        self.component_id
            .clone()
            .unwrap_or_else(generate_component_id)
    }
}

/// An incident recorded against the status page.
///
/// Read-only in this layer; incidents are created elsewhere and only
/// enumerated here. `updated_at` is passed through unchanged from the store
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "incidentID")]
    pub incident_id: String,
    pub name: String,
    pub status: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
