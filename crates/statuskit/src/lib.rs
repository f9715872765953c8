//! Record access layer for a status-page backend.
//!
//! Exposes CRUD-style helpers for two record types stored in AWS DynamoDB:
//! service components and incidents. Each operation builds one request,
//! issues one remote call, and reshapes the response; there is no caching,
//! retrying, or batching in this layer. Higher-level HTTP handlers consume
//! the plain records it returns.

pub mod config;
pub mod storage;

pub use statuskit_core::records::{Component, ComponentUpsert, Incident};
pub use statuskit_core::storage::{ComponentRepository, IncidentRepository, Result, StoreError};
