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

//! Credentials wrapping an externally obtained [access token].
//!
//! The token is sent, unchanged, as a `Bearer` token in the `Authorization`
//! header. These credentials never refresh the token. Applications must build
//! new credentials (and a new client) before the token expires.
//!
//! [access token]: https://cloud.google.com/docs/authentication/token-types#access

use crate::build_errors::Error as BuilderError;
use crate::credentials::{Credentials, CredentialsProvider};
use crate::headers_util::bearer_headers;
use crate::{BuildResult, Result};
use http::HeaderMap;

struct AccessTokenCredentials {
    token: String,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        bearer_headers(&self.token, self.quota_project_id.as_deref())
    }
}

/// A builder for credentials that send a pre-fetched access token.
///
/// # Example
/// ```
/// # use compute_auth::credentials::access_token::Builder;
/// # tokio_test::block_on(async {
/// let credentials = Builder::new("ya29.my-access-token")
///     .with_quota_project_id("my-project")
///     .build()?;
/// let headers = credentials.headers().await?;
/// assert!(headers.contains_key("authorization"));
/// # Ok::<(), anyhow::Error>(())
/// # });
/// ```
pub struct Builder {
    token: String,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given access token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// In some services, you can use an account in one project for
    /// authentication and authorization, and charge the usage to a different
    /// project. This requires that the user has `serviceusage.services.use`
    /// permissions on the quota project.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns a [BuilderError] if the access token is empty.
    pub fn build(self) -> BuildResult<Credentials> {
        if self.token.is_empty() {
            return Err(BuilderError::missing_field("access_token"));
        }
        Ok(Credentials::from(AccessTokenCredentials {
            token: self.token,
            quota_project_id: self.quota_project_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::QUOTA_PROJECT_KEY;
    use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

    type TestResult = anyhow::Result<()>;

    #[test]
    fn debug_token_censored() {
        let builder = Builder::new("super-secret-token");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
        assert!(fmt.contains("[censored]"), "{fmt}");

        let credentials = builder.with_quota_project_id("qp").build().unwrap();
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
        assert!(fmt.contains("qp"), "{fmt}");
    }

    #[test]
    fn empty_token() {
        let err = Builder::new("").build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
    }

    #[tokio::test]
    async fn headers() -> TestResult {
        let credentials = Builder::new("test-token").build()?;
        let headers = credentials.headers().await?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn headers_with_quota_project() -> TestResult {
        let credentials = Builder::new("test-token")
            .with_quota_project_id("test-project")
            .build()?;
        let headers = credentials.headers().await?;
        assert_eq!(headers.len(), 2, "{headers:?}");
        assert_eq!(
            headers.get(HeaderName::from_static(QUOTA_PROJECT_KEY)),
            Some(&HeaderValue::from_static("test-project"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn headers_invalid_token() -> TestResult {
        let credentials = Builder::new("bad\ntoken").build()?;
        let err = credentials.headers().await.unwrap_err();
        assert!(!err.is_retryable(), "{err:?}");
        Ok(())
    }
}
