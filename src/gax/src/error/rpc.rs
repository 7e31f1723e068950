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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The error payload returned by the service.
///
/// Compute Engine reports errors as a JSON object with an HTTP status code, a
/// developer-facing message, and a list of individual errors. Each item in
/// the list carries a machine readable `reason` (e.g. `notFound`,
/// `resourceInUseByAnotherResource`, `quotaExceeded`).
///
/// Some responses also include a canonical `status` name and structured
/// `details`, these are preserved as-is.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// The individual errors reported by the service.
    pub errors: Vec<ErrorReason>,

    /// Additional error details, in the form sent by the service.
    pub details: Vec<serde_json::Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [errors][Status::errors].
    pub fn set_errors<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<ErrorReason>,
    {
        self.errors = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<serde_json::Value>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// One of the errors in a [Status].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorReason {
    /// The scope of the error, typically `global`.
    pub domain: String,
    /// A short, machine readable, description of the error.
    pub reason: String,
    /// A developer-facing error message.
    pub message: String,
    /// The location of the error in the request, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// How to interpret `location`, for example `parameter` or `header`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
}

impl ErrorReason {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [domain][ErrorReason::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }

    /// Sets the value for [reason][ErrorReason::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value for [message][ErrorReason::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [location][ErrorReason::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value for [location_type][ErrorReason::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }
}

macro_rules! codes {
    ($($(#[$doc:meta])* $variant:ident = $value:literal, $name:literal;)*) => {
        /// The canonical error codes.
        ///
        /// Compute Engine error payloads carry an HTTP status code, and
        /// sometimes the canonical name of the error. The client maps the
        /// HTTP status code with [Code::from_http_status] when the name is
        /// missing.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum Code {
            $($(#[$doc])* $variant = $value,)*
        }

        impl Code {
            /// The canonical name, e.g. `NOT_FOUND`.
            pub fn name(&self) -> &str {
                match self {
                    $(Code::$variant => $name,)*
                }
            }
        }

        impl TryFrom<&str> for Code {
            type Error = String;
            fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
                match value {
                    $($name => Ok(Code::$variant),)*
                    _ => Err(format!("unknown status code name {value}")),
                }
            }
        }

        impl From<i32> for Code {
            fn from(value: i32) -> Self {
                match value {
                    $($value => Code::$variant,)*
                    _ => Code::default(),
                }
            }
        }
    };
}

codes! {
    /// Not an error.
    Ok = 0, "OK";
    /// The request was cancelled, typically by the caller.
    Cancelled = 1, "CANCELLED";
    Unknown = 2, "UNKNOWN";
    /// The request has an invalid field, e.g. a malformed `machineType` URL.
    InvalidArgument = 3, "INVALID_ARGUMENT";
    DeadlineExceeded = 4, "DEADLINE_EXCEEDED";
    /// The resource (instance, disk, operation, ...) does not exist.
    NotFound = 5, "NOT_FOUND";
    AlreadyExists = 6, "ALREADY_EXISTS";
    /// The caller lacks the IAM permission for the method.
    PermissionDenied = 7, "PERMISSION_DENIED";
    /// A quota or rate limit was exceeded.
    ResourceExhausted = 8, "RESOURCE_EXHAUSTED";
    /// The resource is not in the state the request needs, e.g. deleting a
    /// disk attached to a running instance.
    FailedPrecondition = 9, "FAILED_PRECONDITION";
    /// Typically a fingerprint mismatch.
    Aborted = 10, "ABORTED";
    OutOfRange = 11, "OUT_OF_RANGE";
    Unimplemented = 12, "UNIMPLEMENTED";
    Internal = 13, "INTERNAL";
    /// The service is temporarily unavailable.
    Unavailable = 14, "UNAVAILABLE";
    DataLoss = 15, "DATA_LOSS";
    /// The request has no valid credentials.
    Unauthenticated = 16, "UNAUTHENTICATED";
}

impl Code {
    /// The closest canonical code for an HTTP status.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            400..=499 => Code::FailedPrecondition,
            500..=599 => Code::Internal,
            _ => Code::Unknown,
        }
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<Code> for String {
    fn from(value: Code) -> String {
        value.name().to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

/// A helper class to deserialize the wrapped error payload.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    code: u16,
    message: String,
    status: Option<String>,
    errors: Vec<ErrorReason>,
    details: Vec<serde_json::Value>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) | None => Code::from_http_status(wrapper.code),
        };
        Ok(Status {
            code,
            message: wrapper.message,
            errors: wrapper.errors,
            details: wrapper.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_code(Code::Unimplemented)
            .set_message("test-message");
        let want = Status {
            code: Code::Unimplemented,
            message: "test-message".into(),
            ..Default::default()
        };
        assert_eq!(got, want);

        let got = Status::default()
            .set_code(Code::Unimplemented as i32)
            .set_message("test-message");
        assert_eq!(got, want);
    }

    #[test]
    fn status_errors_setter() {
        let e0 = ErrorReason::new()
            .set_domain("global")
            .set_reason("notFound")
            .set_message("not here");
        let e1 = ErrorReason::new()
            .set_domain("global")
            .set_reason("invalid")
            .set_location("zone")
            .set_location_type("parameter");
        let got = Status::default().set_errors([e0.clone(), e1.clone()]);
        assert_eq!(got.errors, vec![e0, e1]);
    }

    #[test]
    fn try_from_compute_error() -> Result<()> {
        let payload = json!({"error": {
            "code": 404,
            "message": "The resource 'projects/p/zones/z/instances/i' was not found",
            "errors": [{
                "message": "The resource 'projects/p/zones/z/instances/i' was not found",
                "domain": "global",
                "reason": "notFound",
            }],
        }});
        let got = Status::try_from(&bytes::Bytes::from(payload.to_string()))?;
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("The resource 'projects/p/zones/z/instances/i' was not found")
            .set_errors([ErrorReason::new()
                .set_domain("global")
                .set_reason("notFound")
                .set_message("The resource 'projects/p/zones/z/instances/i' was not found")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn try_from_with_status_name() -> Result<()> {
        let payload = json!({"error": {
            "code": 400,
            "message": "Precondition check failed.",
            "status": "FAILED_PRECONDITION",
            "details": [{"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "test-only"}],
        }});
        let got = Status::try_from(&bytes::Bytes::from(payload.to_string()))?;
        assert_eq!(got.code, Code::FailedPrecondition);
        assert_eq!(got.message, "Precondition check failed.");
        assert!(got.errors.is_empty(), "{got:?}");
        assert_eq!(
            got.details,
            vec![json!({"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "test-only"})]
        );
        Ok(())
    }

    #[test]
    fn try_from_unknown_status_name() -> Result<()> {
        let payload = json!({"error": {"code": 503, "message": "m", "status": "NOT_A_CODE"}});
        let got = Status::try_from(&bytes::Bytes::from(payload.to_string()))?;
        assert_eq!(got.code, Code::Unavailable);
        Ok(())
    }

    #[test_case(r#"{"error": "bad request"}"#)]
    #[test_case("not json")]
    #[test_case("")]
    fn try_from_invalid(input: &str) {
        let got = Status::try_from(&bytes::Bytes::from(input.to_string()));
        assert!(got.is_err(), "{got:?}");
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test_case(200, Code::Ok)]
    #[test_case(400, Code::InvalidArgument)]
    #[test_case(401, Code::Unauthenticated)]
    #[test_case(403, Code::PermissionDenied)]
    #[test_case(404, Code::NotFound)]
    #[test_case(409, Code::Aborted)]
    #[test_case(412, Code::FailedPrecondition)]
    #[test_case(418, Code::FailedPrecondition)]
    #[test_case(429, Code::ResourceExhausted)]
    #[test_case(500, Code::Internal)]
    #[test_case(502, Code::Internal)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(504, Code::DeadlineExceeded)]
    #[test_case(0, Code::Unknown)]
    fn from_http_status(input: u16, want: Code) {
        assert_eq!(Code::from_http_status(input), want);
    }

    #[test]
    fn code_to_string() {
        let got = String::from(Code::AlreadyExists);
        let want = "ALREADY_EXISTS";
        assert_eq!(got, want);
    }

    #[test_case("OK")]
    #[test_case("NOT_FOUND")]
    #[test_case("ALREADY_EXISTS")]
    #[test_case("PERMISSION_DENIED")]
    #[test_case("RESOURCE_EXHAUSTED")]
    #[test_case("FAILED_PRECONDITION")]
    #[test_case("UNAVAILABLE")]
    #[test_case("UNAUTHENTICATED")]
    fn code_roundtrip(input: &str) -> Result<()> {
        let code = Code::try_from(input).map_err(anyhow::Error::msg)?;
        let output = String::from(code);
        assert_eq!(output.as_str(), input.to_string());
        assert_eq!(&format!("{code}"), input);
        Ok(())
    }

    #[test]
    fn code_try_from_string_error() {
        let err = Code::try_from("INVALID-NOT-A-CODE");
        assert!(
            matches!(&err, Err(s) if s.contains("INVALID-NOT-A-CODE")),
            "{err:?}"
        );
    }

    #[test_case(json!(5), Code::NotFound)]
    #[test_case(json!(16), Code::Unauthenticated)]
    #[test_case(json!(-17), Code::Unknown; "unknown")]
    fn code_deserialize(input: serde_json::Value, want: Code) -> Result<()> {
        let code = serde_json::from_value::<Code>(input)?;
        assert_eq!(code, want);
        Ok(())
    }
}
