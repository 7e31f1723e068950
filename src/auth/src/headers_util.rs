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

use crate::Result;
use crate::credentials::QUOTA_PROJECT_KEY;
use crate::errors::invalid_header;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use http::HeaderMap;

/// The headers sent with each request authenticated by an access token.
///
/// The `authorization` value is marked sensitive so it is omitted from the
/// `Debug` output of the request.
pub(crate) fn bearer_headers(token: &str, quota_project: Option<&str>) -> Result<HeaderMap> {
    let mut authorization =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(invalid_header)?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(AUTHORIZATION, authorization);
    if let Some(project) = quota_project {
        let value = HeaderValue::from_str(project).map_err(invalid_header)?;
        headers.insert(HeaderName::from_static(QUOTA_PROJECT_KEY), value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn token_only() -> anyhow::Result<()> {
        let headers = bearer_headers("ya29.test-token", None)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let got = headers.get(AUTHORIZATION);
        assert_eq!(got, Some(&HeaderValue::from_static("Bearer ya29.test-token")));
        assert!(got.is_some_and(HeaderValue::is_sensitive), "{headers:?}");
        Ok(())
    }

    #[test]
    fn with_quota_project() -> anyhow::Result<()> {
        let headers = bearer_headers("ya29.test-token", Some("billing-project"))?;
        assert_eq!(headers.len(), 2, "{headers:?}");
        let got = headers.get(QUOTA_PROJECT_KEY);
        assert_eq!(got, Some(&HeaderValue::from_static("billing-project")));
        assert!(!got.is_some_and(HeaderValue::is_sensitive), "{headers:?}");
        Ok(())
    }

    #[test_case("ya29.bad\ntoken", None; "token")]
    #[test_case("ya29.test-token", Some("bad\rproject"); "quota project")]
    fn invalid(token: &str, quota_project: Option<&str>) {
        let err = bearer_headers(token, quota_project).unwrap_err();
        assert!(!err.is_retryable(), "{err:?}");
    }
}
