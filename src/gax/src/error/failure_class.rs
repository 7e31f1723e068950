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

use super::rpc::Code;

/// The broad category of a failed request.
///
/// Returned by [Error::failure_class][super::Error::failure_class].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureClass {
    /// The service (or the network) failed, the same request may succeed later.
    ///
    /// Includes HTTP 5xx, 408 and 429 responses, timeouts, and broken
    /// connections.
    ServerRetryable,
    /// The request is missing valid credentials.
    ///
    /// Includes HTTP 401 responses and failures creating the authentication
    /// headers. The request may succeed with refreshed credentials.
    AuthorizationRequired,
    /// The request is invalid, sending it again will fail the same way.
    ///
    /// Includes all other HTTP 4xx responses, and requests the client could
    /// not format.
    ClientNonRetryable,
}

impl FailureClass {
    pub(crate) fn from_http_status(code: u16) -> Self {
        match code {
            401 => Self::AuthorizationRequired,
            408 | 429 => Self::ServerRetryable,
            500..=599 => Self::ServerRetryable,
            _ => Self::ClientNonRetryable,
        }
    }

    pub(crate) fn from_code(code: Code) -> Self {
        match code {
            Code::Unauthenticated => Self::AuthorizationRequired,
            Code::Unavailable
            | Code::Internal
            | Code::Unknown
            | Code::DeadlineExceeded
            | Code::ResourceExhausted => Self::ServerRetryable,
            _ => Self::ClientNonRetryable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(200, FailureClass::ClientNonRetryable)]
    #[test_case(304, FailureClass::ClientNonRetryable)]
    #[test_case(400, FailureClass::ClientNonRetryable)]
    #[test_case(401, FailureClass::AuthorizationRequired)]
    #[test_case(403, FailureClass::ClientNonRetryable)]
    #[test_case(408, FailureClass::ServerRetryable)]
    #[test_case(412, FailureClass::ClientNonRetryable)]
    #[test_case(429, FailureClass::ServerRetryable)]
    #[test_case(500, FailureClass::ServerRetryable)]
    #[test_case(599, FailureClass::ServerRetryable)]
    fn http_status(code: u16, want: FailureClass) {
        assert_eq!(FailureClass::from_http_status(code), want);
    }

    #[test_case(Code::Unauthenticated, FailureClass::AuthorizationRequired)]
    #[test_case(Code::Unavailable, FailureClass::ServerRetryable)]
    #[test_case(Code::Internal, FailureClass::ServerRetryable)]
    #[test_case(Code::Unknown, FailureClass::ServerRetryable)]
    #[test_case(Code::DeadlineExceeded, FailureClass::ServerRetryable)]
    #[test_case(Code::ResourceExhausted, FailureClass::ServerRetryable)]
    #[test_case(Code::NotFound, FailureClass::ClientNonRetryable)]
    #[test_case(Code::PermissionDenied, FailureClass::ClientNonRetryable)]
    #[test_case(Code::FailedPrecondition, FailureClass::ClientNonRetryable)]
    fn code(code: Code, want: FailureClass) {
        assert_eq!(FailureClass::from_code(code), want);
    }
}
