//! Record types for the status page.
//!
//! These are the plain values handed to higher-level HTTP handlers. The
//! storage backends in the `statuskit` crate convert between these types and
//! their store representation.

mod id;
mod types;

pub use id::{generate_component_id, COMPONENT_ID_LENGTH};
pub use types::{Component, ComponentUpsert, Incident};
