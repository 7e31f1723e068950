// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::model::{Operation, SetCommonInstanceMetadataOperationMetadata};

impl Operation {
    /// Converts a completed operation into a `Result`.
    ///
    /// Compute Engine reports the outcome of an operation in the operation
    /// itself: the HTTP request that started the operation succeeds even if
    /// the operation later fails. Use this function to convert the final
    /// value of an operation (e.g. as returned by
    /// [ZoneOperations::wait][crate::client::ZoneOperations::wait]) into a
    /// `Result`.
    ///
    /// # Example
    /// ```no_run
    /// # use cloud_compute_v1::client::ZoneOperations;
    /// # tokio_test::block_on(async {
    /// let client = ZoneOperations::builder().build().await?;
    /// let operation = client
    ///     .wait()
    ///     .set_project("my-project")
    ///     .set_zone("us-central1-a")
    ///     .set_operation("operation-123")
    ///     .send()
    ///     .await?;
    /// match operation.to_result() {
    ///     Ok(op) => println!("operation {:?} completed", op.name),
    ///     Err(e) => println!("operation failed: {e}"),
    /// }
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn to_result(self) -> std::result::Result<Self, OperationError> {
        if self.error.is_some()
            || self.http_error_status_code.is_some()
            || self.http_error_message.is_some()
        {
            let error = GenericOperationError {
                message: self.http_error_message,
                status_code: self.http_error_status_code,
                details: self.error,
            };
            return Err(OperationError::Generic(error));
        }
        let failed = self
            .set_common_instance_metadata_operation_metadata
            .as_ref()
            .is_some_and(|m| m.per_location_operations.values().any(|v| v.error.is_some()));
        if failed {
            let metadata = self
                .set_common_instance_metadata_operation_metadata
                .unwrap_or_default();
            return Err(OperationError::SetCommonInstanceMetadata(
                SetCommonInstanceMetadataOperationError::new().set_metadata(metadata),
            ));
        }
        Ok(self)
    }
}

/// Possible errors returned by an operation.
///
/// Most Compute Engine operations report failures using the `error`,
/// `httpErrorStatusCode`, and `httpErrorMessage` fields. Some operations
/// report partial failures in operation-specific metadata.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OperationError {
    /// A HTTP error with additional details.
    Generic(GenericOperationError),
    /// A partial failure when setting the common metadata for all instances.
    SetCommonInstanceMetadata(SetCommonInstanceMetadataOperationError),
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(d) => write!(f, "the operation failed with {d:?}"),
            Self::SetCommonInstanceMetadata(d) => write!(
                f,
                "the operation to set the common instance metadata failed with {d:?}"
            ),
        }
    }
}

impl std::error::Error for OperationError {}

/// Details about a failed operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GenericOperationError {
    /// The HTTP error message.
    pub message: Option<String>,

    /// The HTTP error status code.
    pub status_code: Option<i32>,

    /// The errors generated while processing the operation.
    pub details: Option<crate::model::operation::Error>,
}

impl GenericOperationError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [message][Self::message] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::errors::GenericOperationError;
    /// let error = GenericOperationError::new().set_message("useful in mocks");
    /// ```
    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Set the [status_code][Self::status_code] field.
    pub fn set_status_code(mut self, v: i32) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Set the [details][Self::details] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::errors::GenericOperationError;
    /// use cloud_compute_v1::model::operation::{Error, error::Errors};
    /// let error = GenericOperationError::new().set_details(
    ///     Error::new().set_errors([
    ///         Errors::new()
    ///             .set_code("RESOURCE_NOT_FOUND")
    ///             .set_message("The resource 'my-disk' was not found"),
    ///     ]),
    /// );
    /// ```
    pub fn set_details<V: Into<crate::model::operation::Error>>(mut self, v: V) -> Self {
        self.details = Some(v.into());
        self
    }
}

/// Details about a failed [set common instance metadata] operation.
///
/// [set common instance metadata]: crate::client::Projects::set_common_instance_metadata
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SetCommonInstanceMetadataOperationError {
    /// The state of the operation in each location.
    pub metadata: SetCommonInstanceMetadataOperationMetadata,
}

impl SetCommonInstanceMetadataOperationError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [metadata][Self::metadata] field.
    pub fn set_metadata(mut self, v: SetCommonInstanceMetadataOperationMetadata) -> Self {
        self.metadata = v;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo as PerLocation, Status,
        operation::Error, operation::error::Errors,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn to_result_success() {
        let operation = Operation::new()
            .set_name("operation-123")
            .set_status(crate::model::operation::status::DONE);
        let got = operation.clone().to_result();
        assert_eq!(got, Ok(operation));
    }

    #[test]
    fn to_result_generic() {
        let operation = Operation::new().set_http_error_message("uh-oh");
        let got = operation.to_result();
        assert_eq!(
            got,
            Err(OperationError::Generic(
                GenericOperationError::new().set_message("uh-oh")
            ))
        );

        let operation = Operation::new().set_http_error_status_code(503);
        let got = operation.to_result();
        assert_eq!(
            got,
            Err(OperationError::Generic(
                GenericOperationError::new().set_status_code(503)
            ))
        );

        let details = Error::new().set_errors([Errors::new().set_code("QUOTA_EXCEEDED")]);
        let operation = Operation::new()
            .set_error(details.clone())
            .set_http_error_status_code(403)
            .set_http_error_message("FORBIDDEN");
        let got = operation.to_result();
        assert_eq!(
            got,
            Err(OperationError::Generic(
                GenericOperationError::new()
                    .set_details(details)
                    .set_status_code(403)
                    .set_message("FORBIDDEN")
            ))
        );
    }

    #[test]
    fn to_result_set_common_instance_metadata() {
        let metadata = SetCommonInstanceMetadataOperationMetadata::new();
        let operation =
            Operation::new().set_set_common_instance_metadata_operation_metadata(metadata);
        let got = operation.clone().to_result();
        assert_eq!(got, Ok(operation));

        let metadata = SetCommonInstanceMetadataOperationMetadata::new()
            .set_per_location_operations([(
                "zones/us-central1-a",
                PerLocation::new().set_state("DONE"),
            )]);
        let operation =
            Operation::new().set_set_common_instance_metadata_operation_metadata(metadata);
        let got = operation.clone().to_result();
        assert_eq!(got, Ok(operation));

        let metadata = SetCommonInstanceMetadataOperationMetadata::new()
            .set_per_location_operations([
                ("zones/us-central1-a", PerLocation::new().set_state("DONE")),
                (
                    "zones/us-central1-f",
                    PerLocation::new()
                        .set_state("ABANDONED")
                        .set_error(Status::new().set_message("uh-oh")),
                ),
            ]);
        let operation =
            Operation::new().set_set_common_instance_metadata_operation_metadata(metadata.clone());
        let got = operation.to_result();
        assert_eq!(
            got,
            Err(OperationError::SetCommonInstanceMetadata(
                SetCommonInstanceMetadataOperationError::new().set_metadata(metadata)
            ))
        );
    }

    #[test]
    fn display() {
        let input =
            OperationError::Generic(GenericOperationError::new().set_message("test-message"));
        let got = input.to_string();
        assert!(got.contains("test-message"), "{input:?} => {got}");

        let input = OperationError::SetCommonInstanceMetadata(
            SetCommonInstanceMetadataOperationError::new().set_metadata(
                SetCommonInstanceMetadataOperationMetadata::new().set_per_location_operations([(
                    "zones/us-central1-a",
                    PerLocation::new().set_error(Status::new().set_message("error-message")),
                )]),
            ),
        );
        let got = input.to_string();
        assert!(got.contains("zones/us-central1-a"), "{input:?} => {got}");
        assert!(got.contains("error-message"), "{input:?} => {got}");
    }
}
