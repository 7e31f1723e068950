// Copyright 2024 Google LLC
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

#[cfg(test)]
mod tests {
    use compute_gax::error::rpc::{Code, ErrorReason, Status};
    use compute_gax::error::{CredentialsError, Error, FailureClass};
    use std::error::Error as _;

    static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    static_assertions::assert_impl_all!(CredentialsError: Send, Sync, Clone);
    static_assertions::assert_impl_all!(compute_gax::client_builder::Error: Send, Sync);

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl std::error::Error for LeafError {}

    #[test]
    fn downcast_source() {
        let root = Error::io(LeafError::default());
        let leaf = root
            .source()
            .and_then(|e| e.downcast_ref::<LeafError>())
            .map(LeafError::hey);
        assert_eq!(leaf, Some("hey"));
        assert!(root.is_io(), "{root:?}");
        assert!(root.to_string().contains("leaf error"), "{root}");
    }

    #[test]
    fn classify_for_application_retry() {
        let errors = [
            (
                Error::service_with_http_metadata(
                    Status::default()
                        .set_code(Code::Unavailable)
                        .set_message("backend unavailable"),
                    Some(503),
                    None,
                ),
                FailureClass::ServerRetryable,
            ),
            (
                Error::service_with_http_metadata(
                    Status::default()
                        .set_code(Code::Unauthenticated)
                        .set_message("invalid token"),
                    Some(401),
                    None,
                ),
                FailureClass::AuthorizationRequired,
            ),
            (
                Error::service_with_http_metadata(
                    Status::default()
                        .set_code(Code::InvalidArgument)
                        .set_message("bad zone")
                        .set_errors([ErrorReason::new().set_reason("invalid")]),
                    Some(400),
                    None,
                ),
                FailureClass::ClientNonRetryable,
            ),
            (Error::timeout("deadline"), FailureClass::ServerRetryable),
            (
                Error::binding("missing zone"),
                FailureClass::ClientNonRetryable,
            ),
        ];
        for (error, want) in errors {
            assert_eq!(error.failure_class(), want, "{error:?}");
        }
    }
}
