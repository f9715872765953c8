use std::env;

/// Storage configuration loaded from environment variables.
///
/// The region is an explicit parameter rather than ambient global state so
/// that constructors can be exercised without touching the process
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region identifier (default: "us-east-1")
    pub region: String,
    /// Components table name (default: "ServiceComponents")
    pub component_table: String,
    /// Incidents table name (default: "Incidents")
    pub incident_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION` - AWS region identifier (default: "us-east-1")
    /// - `COMPONENT_TABLE_NAME` - Components table name (default: "ServiceComponents")
    /// - `INCIDENT_TABLE_NAME` - Incidents table name (default: "Incidents")
    pub fn from_env() -> Self {
        Self {
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            component_table: env::var("COMPONENT_TABLE_NAME")
                .unwrap_or_else(|_| "ServiceComponents".to_string()),
            incident_table: env::var("INCIDENT_TABLE_NAME")
                .unwrap_or_else(|_| "Incidents".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_are_kept() {
        let config = Config {
            region: "eu-west-1".to_string(),
            component_table: "components-test".to_string(),
            incident_table: "incidents-test".to_string(),
        };

        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.component_table, "components-test");
        assert_eq!(config.incident_table, "incidents-test");
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("AWS_REGION");
        env::remove_var("COMPONENT_TABLE_NAME");
        env::remove_var("INCIDENT_TABLE_NAME");

        let config = Config::from_env();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.component_table, "ServiceComponents");
        assert_eq!(config.incident_table, "Incidents");
    }
}
