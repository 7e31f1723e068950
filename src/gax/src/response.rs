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

//! The result of a successful request.
//!
//! Every client method returns a [Response], which carries the decoded
//! resource and the HTTP headers sent by the service. The request builders
//! return only the body; the stubs return the full response so mocks can
//! provide headers too:
//!
//! ```
//! # use compute_gax::response::{Parts, Response};
//! let mut headers = http::HeaderMap::new();
//! headers.insert("etag", http::HeaderValue::from_static("abc123"));
//! let response = Response::from_parts(Parts::new().set_headers(headers), 42_u64);
//! assert_eq!(response.headers().get("etag").map(|v| v.as_bytes()), Some(b"abc123".as_slice()));
//! assert_eq!(response.into_body(), 42);
//! ```

/// A decoded response body and its metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    body: T,
    parts: Parts,
}

impl<T> Response<T> {
    /// A response with `body` and no headers.
    pub fn from(body: T) -> Self {
        Self::from_parts(Parts::default(), body)
    }

    /// A response with `body` and the given metadata.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { body, parts }
    }

    /// The HTTP headers in the response.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    /// Splits the response into its metadata and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

/// The metadata in a [Response].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    pub headers: http::HeaderMap,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the headers.
    pub fn set_headers<V: Into<http::HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn body_only() {
        let response = Response::from(vec!["us-central1-a", "us-central1-b"]);
        assert!(response.headers().is_empty(), "{response:?}");
        assert_eq!(response.body().len(), 2);
        assert_eq!(response.into_body(), vec!["us-central1-a", "us-central1-b"]);
    }

    #[test]
    fn with_headers() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-goog-request-id", HeaderValue::from_static("req-1"));
        let response = Response::from_parts(Parts::new().set_headers(headers.clone()), ());
        assert_eq!(response.headers(), &headers);
        let (parts, ()) = response.into_parts();
        assert_eq!(parts.headers, headers);
    }
}
