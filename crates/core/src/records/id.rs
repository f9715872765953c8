//! Component identifier generation.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of generated component identifiers.
pub const COMPONENT_ID_LENGTH: usize = 12;

/// Generates a new random component identifier.
///
/// Identifiers are 12 alphanumeric characters, matching the format of ids
/// already present in the components table.
pub fn generate_component_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(COMPONENT_ID_LENGTH)
        .map(char::from)
        .collect()
}
