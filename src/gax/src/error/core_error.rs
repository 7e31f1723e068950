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

use super::CredentialsError;
use super::FailureClass;
use super::rpc::Status;
use bytes::Bytes;
use http::HeaderMap;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error returned by all the Compute Engine client methods.
///
/// A request may fail before it is sent (a required path parameter is empty,
/// the credentials cannot produce headers), while it is in flight (timeouts,
/// broken connections), or in the service. Use the predicates to tell these
/// apart, [status()][Error::status] to examine the error details returned by
/// the service, and [failure_class()][Error::failure_class] to decide if a
/// new attempt may succeed.
///
/// # Example
/// ```
/// use compute_gax::error::Error;
/// use compute_gax::error::rpc::{Code, Status};
/// fn describe(e: &Error) -> String {
///     match e.status() {
///         Some(s) if s.code == Code::NotFound => "no such resource".to_string(),
///         Some(s) => format!("service error: {}", s.message),
///         None if e.is_timeout() => "too slow".to_string(),
///         None => format!("{e}"),
///     }
/// }
/// let e = Error::service(Status::default().set_code(Code::NotFound));
/// assert_eq!(describe(&e), "no such resource");
/// ```
#[derive(Debug)]
pub struct Error(Box<Repr>);

#[derive(Debug, thiserror::Error)]
enum Repr {
    #[error("cannot format the request path: {0}")]
    Binding(#[source] BoxError),
    #[error("cannot serialize the request: {0}")]
    Serialization(#[source] BoxError),
    #[error("cannot deserialize the response: {0}")]
    Deserialization(#[source] BoxError),
    #[error("cannot create the authentication headers: {0}")]
    Authentication(#[source] CredentialsError),
    #[error("the request exceeded its attempt timeout: {0}")]
    Timeout(#[source] BoxError),
    #[error("the request failed in the transport layer: {0}")]
    Io(#[source] BoxError),
    #[error("the HTTP transport reports a [{status_code}] error: {}", payload_text(.payload))]
    Http {
        status_code: u16,
        headers: HeaderMap,
        payload: Bytes,
    },
    #[error("the service reports an error with code {} described as: {}", .status.code, .status.message)]
    Service {
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    },
}

fn payload_text(payload: &Bytes) -> String {
    match std::str::from_utf8(payload) {
        Ok(s) => s.to_string(),
        Err(_) => format!("{payload:?}"),
    }
}

impl Error {
    fn new(repr: Repr) -> Self {
        Self(Box::new(repr))
    }

    /// An error returned by the service.
    ///
    /// Mocks use this to simulate service errors:
    /// ```
    /// use compute_gax::error::Error;
    /// use compute_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("not found");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    #[doc(hidden)]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        Self::new(Repr::Service {
            status,
            status_code,
            headers,
        })
    }

    /// An error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Timeout(source.into()))
    }

    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Binding(source.into()))
    }

    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Serialization(source.into()))
    }

    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Deserialization(source.into()))
    }

    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self::new(Repr::Authentication(source))
    }

    /// A response without a JSON error object, e.g. from a proxy.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        Self::new(Repr::Http {
            status_code,
            headers,
            payload,
        })
    }

    /// The request failed without a complete HTTP response.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Io(source.into()))
    }

    /// A required path parameter was missing or empty.
    ///
    /// The request was not sent. The message names the missing field, e.g.
    /// `zone` or `instance`.
    pub fn is_binding(&self) -> bool {
        matches!(*self.0, Repr::Binding(_))
    }

    /// The request could not be serialized, it was not sent.
    ///
    /// The usual cause is an invalid header value, for example, a user agent
    /// containing control characters.
    pub fn is_serialization(&self) -> bool {
        matches!(*self.0, Repr::Serialization(_))
    }

    /// The response could not be deserialized.
    ///
    /// The request may have completed in the service. The resource types
    /// ignore unknown fields and accept unknown enum values, new fields in the
    /// responses do not cause this error.
    pub fn is_deserialization(&self) -> bool {
        matches!(*self.0, Repr::Deserialization(_))
    }

    /// The credentials could not create the authentication headers.
    pub fn is_authentication(&self) -> bool {
        matches!(*self.0, Repr::Authentication(_))
    }

    /// The request did not complete before its attempt timeout.
    ///
    /// The service may or may not have received the request. Mutations
    /// accept a `request_id`, which makes a second attempt safe.
    pub fn is_timeout(&self) -> bool {
        matches!(*self.0, Repr::Timeout(_))
    }

    /// The connection failed before a complete HTTP response was received.
    pub fn is_io(&self) -> bool {
        matches!(*self.0, Repr::Io(_))
    }

    /// The transport failed, or returned an HTTP error without details.
    ///
    /// Includes the [is_io][Error::is_io] errors, and HTTP errors created by
    /// proxies and load balancers.
    pub fn is_transport(&self) -> bool {
        matches!(*self.0, Repr::Io(_) | Repr::Http { .. })
    }

    /// The error details returned by the service, if any.
    ///
    /// The `errors` field of the [Status] often includes a machine readable
    /// `reason`, such as `resourceNotReady` or `quotaExceeded`.
    pub fn status(&self) -> Option<&Status> {
        match &*self.0 {
            Repr::Service { status, .. } => Some(status),
            _ => None,
        }
    }

    /// The HTTP status code of the response, if any.
    pub fn http_status_code(&self) -> Option<u16> {
        match &*self.0 {
            Repr::Http { status_code, .. } => Some(*status_code),
            Repr::Service { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// The HTTP headers of the response, if any.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &*self.0 {
            Repr::Http { headers, .. } => Some(headers),
            Repr::Service { headers, .. } => headers.as_ref(),
            _ => None,
        }
    }

    /// The body of an HTTP error response without error details.
    ///
    /// ```
    /// use compute_gax::error::Error;
    /// let error = Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"bad gateway"));
    /// assert_eq!(error.http_payload().map(|b| b.as_ref()), Some(b"bad gateway".as_slice()));
    /// assert!(error.status().is_none());
    /// ```
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &*self.0 {
            Repr::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Classifies the failure.
    ///
    /// The clients make a single attempt for each request. Applications
    /// implementing their own retry loops use this to decide if a new attempt
    /// may succeed.
    ///
    /// ```
    /// use compute_gax::error::{Error, FailureClass};
    /// let error = Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
    /// assert_eq!(error.failure_class(), FailureClass::ServerRetryable);
    /// ```
    pub fn failure_class(&self) -> FailureClass {
        match &*self.0 {
            Repr::Timeout(_) | Repr::Io(_) => FailureClass::ServerRetryable,
            Repr::Authentication(_) => FailureClass::AuthorizationRequired,
            Repr::Binding(_) | Repr::Serialization(_) | Repr::Deserialization(_) => {
                FailureClass::ClientNonRetryable
            }
            Repr::Http { status_code, .. } => FailureClass::from_http_status(*status_code),
            Repr::Service {
                status_code: Some(code),
                ..
            } => FailureClass::from_http_status(*code),
            Repr::Service { status, .. } => FailureClass::from_code(status.code),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&*self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use std::error::Error as _;
    use test_case::test_case;

    fn not_found() -> Status {
        Status::default()
            .set_code(Code::NotFound)
            .set_message("The resource 'projects/p/zones/z/instances/vm-1' was not found")
    }

    #[test]
    fn service() {
        let error = Error::service(not_found());
        assert_eq!(error.status(), Some(&not_found()));
        assert!(error.source().is_none(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("NOT_FOUND"), "{fmt}");
        assert!(fmt.contains("vm-1"), "{fmt}");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        assert_eq!(error.http_payload(), None);
        assert!(!error.is_transport(), "{error:?}");
        assert_eq!(error.failure_class(), FailureClass::ClientNonRetryable);
    }

    #[test]
    fn service_with_http_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("application/json"));
        let error = Error::service_with_http_metadata(not_found(), Some(404), Some(headers.clone()));
        assert_eq!(error.status(), Some(&not_found()));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), None);
    }

    #[test]
    fn http() {
        let payload = Bytes::from_static(b"upstream connect error");
        let error = Error::http(502, HeaderMap::new(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&HeaderMap::new()));
        assert_eq!(error.http_payload(), Some(&payload));
        let fmt = error.to_string();
        assert!(fmt.contains("[502]"), "{fmt}");
        assert!(fmt.contains("upstream connect error"), "{fmt}");
    }

    #[test]
    fn http_binary_payload() {
        let error = Error::http(500, HeaderMap::new(), Bytes::from_static(&[0xff, 0xfe]));
        assert!(error.to_string().contains("[500]"), "{error}");
    }

    #[test_case(Error::binding("missing zone"), Error::is_binding)]
    #[test_case(Error::ser("bad header"), Error::is_serialization)]
    #[test_case(Error::deser("bad json"), Error::is_deserialization)]
    #[test_case(Error::timeout("too slow"), Error::is_timeout)]
    #[test_case(Error::io("connection reset"), Error::is_io)]
    fn predicates(error: Error, predicate: fn(&Error) -> bool) {
        assert!(predicate(&error), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        let all: [fn(&Error) -> bool; 6] = [
            Error::is_binding,
            Error::is_serialization,
            Error::is_deserialization,
            Error::is_timeout,
            Error::is_io,
            Error::is_authentication,
        ];
        assert_eq!(all.iter().filter(|p| p(&error)).count(), 1, "{error:?}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_str(false, "empty token"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.to_string().contains("empty token"), "{error}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(source.is_some(), "{error:?}");
        assert_eq!(error.failure_class(), FailureClass::AuthorizationRequired);
    }

    #[test_case(Error::binding("missing zone"), FailureClass::ClientNonRetryable)]
    #[test_case(Error::ser("bad header"), FailureClass::ClientNonRetryable)]
    #[test_case(Error::deser("bad json"), FailureClass::ClientNonRetryable)]
    #[test_case(Error::timeout("too slow"), FailureClass::ServerRetryable)]
    #[test_case(Error::io("connection reset"), FailureClass::ServerRetryable)]
    fn local_failure_class(error: Error, want: FailureClass) {
        assert_eq!(error.failure_class(), want, "{error:?}");
    }

    #[test_case(400, FailureClass::ClientNonRetryable)]
    #[test_case(401, FailureClass::AuthorizationRequired)]
    #[test_case(404, FailureClass::ClientNonRetryable)]
    #[test_case(408, FailureClass::ServerRetryable)]
    #[test_case(429, FailureClass::ServerRetryable)]
    #[test_case(503, FailureClass::ServerRetryable)]
    fn http_failure_class(code: u16, want: FailureClass) {
        let error = Error::service_with_http_metadata(Status::default(), Some(code), None);
        assert_eq!(error.failure_class(), want, "{error:?}");
        let error = Error::http(code, HeaderMap::new(), Bytes::new());
        assert_eq!(error.failure_class(), want, "{error:?}");
    }

    #[test_case(Code::Unavailable, FailureClass::ServerRetryable)]
    #[test_case(Code::Unauthenticated, FailureClass::AuthorizationRequired)]
    #[test_case(Code::InvalidArgument, FailureClass::ClientNonRetryable)]
    fn code_failure_class(code: Code, want: FailureClass) {
        let error = Error::service(Status::default().set_code(code));
        assert_eq!(error.failure_class(), want, "{error:?}");
    }
}
