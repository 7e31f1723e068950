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

use std::sync::Arc;

type Source = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// The credentials could not produce the authentication headers for a request.
///
/// The credentials used with the Compute Engine clients hold a token obtained
/// by the application, they never fetch one. Creating the headers can still
/// fail, for example, if the token contains characters that are not valid in
/// an HTTP header value.
///
/// Applications only create these errors to test code using a custom
/// credentials provider.
///
/// # Example
/// ```
/// # use compute_gax::error::CredentialsError;
/// let err = CredentialsError::from_str(true, "token service unavailable");
/// assert!(err.is_retryable());
/// assert!(err.to_string().contains("token service unavailable"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_retryable: bool,
    details: Details,
}

#[derive(Clone, Debug)]
enum Details {
    Message(String),
    Wrapped(Source),
}

fn retry_hint(is_retryable: bool) -> &'static str {
    if is_retryable {
        "a new attempt may succeed"
    } else {
        "new attempts will fail"
    }
}

impl CredentialsError {
    /// Wraps `source` in a new error.
    pub fn new<T>(is_retryable: bool, source: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self {
            is_retryable,
            details: Details::Wrapped(Arc::new(source)),
        }
    }

    /// Creates a new error with the given message and no source.
    pub fn from_str<T: Into<String>>(is_retryable: bool, message: T) -> Self {
        Self {
            is_retryable,
            details: Details::Message(message.into()),
        }
    }

    /// Returns `true` if the same credentials may succeed later.
    pub fn is_retryable(&self) -> bool {
        self.is_retryable
    }
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hint = retry_hint(self.is_retryable);
        match &self.details {
            Details::Message(m) => write!(f, "cannot create the authentication headers ({hint}), {m}"),
            Details::Wrapped(e) => write!(f, "cannot create the authentication headers ({hint}), {e}"),
        }
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.details {
            Details::Message(_) => None,
            Details::Wrapped(e) => Some(e.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(true, "a new attempt may succeed")]
    #[test_case(false, "new attempts will fail")]
    fn wrapped(retryable: bool, hint: &str) {
        let got = CredentialsError::new(retryable, std::io::Error::other("bad header value"));
        assert_eq!(got.is_retryable(), retryable, "{got:?}");
        let fmt = got.to_string();
        assert!(fmt.contains("bad header value"), "{fmt}");
        assert!(fmt.contains(hint), "{fmt}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{got:?}");
    }

    #[test]
    fn message() {
        let got = CredentialsError::from_str(false, "empty token");
        assert!(!got.is_retryable(), "{got:?}");
        assert!(got.to_string().contains("empty token"), "{got}");
        assert!(got.source().is_none(), "{got:?}");
    }
}
