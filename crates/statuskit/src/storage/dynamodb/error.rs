//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `statuskit_core::storage`. All
//! SDK faults collapse into `StoreError::Call` uniformly; this layer does
//! not distinguish throttling from missing tables or permission faults.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use statuskit_core::storage::StoreError;

/// Map any SDK error to a `StoreError::Call` carrying the call context.
pub fn map_sdk_error<E, R>(operation: &'static str, table: &str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    StoreError::Call {
        operation,
        table: table.to_string(),
        message: DisplayErrorContext(&err).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_maps_to_call() {
        let err: SdkError<aws_sdk_dynamodb::operation::scan::ScanError, ()> =
            SdkError::timeout_error("request timed out");

        let mapped = map_sdk_error("Scan", "ServiceComponents", err);
        match mapped {
            StoreError::Call {
                operation, table, ..
            } => {
                assert_eq!(operation, "Scan");
                assert_eq!(table, "ServiceComponents");
            }
            other => panic!("expected Call, got {other:?}"),
        }
    }

    #[test]
    fn test_construction_error_maps_to_call() {
        let err: SdkError<aws_sdk_dynamodb::operation::delete_item::DeleteItemError, ()> =
            SdkError::construction_failure("bad credentials provider");

        let mapped = map_sdk_error("DeleteItem", "ServiceComponents", err);
        assert!(matches!(mapped, StoreError::Call { .. }));
    }
}
