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

//! Handling of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required. An empty value would produce a path that refers to a different
//! resource (or collection), so the generated code returns an error when the
//! parameter is empty. Small helper functions make the generated code easier
//! to read.

/// The set of characters that are percent encoded in a path segment.
///
/// Compute resource names are RFC 1035 labels, but project ids and some
/// resource names (e.g. `organizations/123` style parents) may contain other
/// characters.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the percent-encoded `value` for the `name` path parameter.
///
/// Fails with a binding error if `value` is empty.
pub fn required(value: &str, name: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string())
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        assert!(e.is_binding(), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test_case("my-project", "my-project")]
    #[test_case("us-central1-a", "us-central1-a")]
    #[test_case("google.com:my-project", "google.com%3Amy-project")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("with space", "with%20space")]
    #[test_case("12345678901234", "12345678901234")]
    fn required(input: &str, want: &str) -> gax::Result<()> {
        let got = super::required(input, "project")?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn required_empty() {
        let e = super::required("", "zone").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(format!("{e}").contains("zone"), "{e}");
    }
}
