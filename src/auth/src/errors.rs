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

//! Errors returned while creating the authentication headers.

pub use gax::error::CredentialsError;

/// Header values are fixed for the lifetime of the credentials, retrying
/// cannot fix them.
pub(crate) fn invalid_header<T>(source: T) -> CredentialsError
where
    T: std::error::Error + Send + Sync + 'static,
{
    CredentialsError::new(false, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_header_is_permanent() {
        let source = http::HeaderValue::from_str("bad\nvalue").unwrap_err();
        let got = invalid_header(source);
        assert!(!got.is_retryable(), "{got:?}");
        assert!(got.to_string().contains("new attempts will fail"), "{got}");
    }
}
