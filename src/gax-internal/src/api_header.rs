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

//! The `x-goog-api-client` header.
//!
//! Every request identifies the client library, the shared components, and
//! the compiler version used to build them. The service uses this header for
//! usage reports and to diagnose problems affecting specific releases.

pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// The library type of generated clients.
pub const GAPIC: &str = "gapic";

// Created by `build.rs`, defines `RUSTC_VERSION`.
include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

/// Describes a client library.
///
/// Each client crate keeps one `'static` value and caches the header value,
/// as it never changes.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

impl XGoogApiClient {
    /// The header value, e.g. `gl-rust/1.85.0 gax/0.3.0 rest/0.3.0-reqwest gapic/0.3.0`.
    pub fn rest_header_value(&self) -> String {
        let gax = env!("CARGO_PKG_VERSION");
        let rustc = compiler_version(RUSTC_VERSION);
        let Self {
            library_type,
            version,
            ..
        } = self;
        format!("gl-rust/{rustc} gax/{gax} rest/{gax}-reqwest {library_type}/{version}")
    }
}

// `rustc_version` reports values such as `rustc 1.85.0`.
fn compiler_version(reported: &str) -> &str {
    reported.strip_prefix("rustc ").unwrap_or(reported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const CLIENT: XGoogApiClient = XGoogApiClient {
        name: "cloud-compute-v1",
        library_type: GAPIC,
        version: "1.2.3",
    };

    fn component<'a>(header: &'a str, name: &str) -> Option<&'a str> {
        header
            .split_whitespace()
            .filter_map(|c| c.split_once('/'))
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    #[test]
    fn components() {
        let value = CLIENT.rest_header_value();
        let gax = env!("CARGO_PKG_VERSION");
        assert_eq!(component(&value, "gapic"), Some("1.2.3"), "{value}");
        assert_eq!(component(&value, "gax"), Some(gax), "{value}");
        let rest = format!("{gax}-reqwest");
        assert_eq!(component(&value, "rest"), Some(rest.as_str()), "{value}");
        let rustc = component(&value, "gl-rust");
        assert!(
            rustc.is_some_and(|v| !v.is_empty() && RUSTC_VERSION.contains(v)),
            "{value} vs {RUSTC_VERSION}"
        );
    }

    #[test]
    fn valid_header() {
        let value = http::HeaderValue::from_str(&CLIENT.rest_header_value());
        assert!(value.is_ok(), "{value:?}");
    }

    #[test_case("rustc 1.85.0", "1.85.0")]
    #[test_case("1.85.0", "1.85.0")]
    fn compiler(reported: &str, want: &str) {
        assert_eq!(compiler_version(reported), want);
    }
}
