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

use crate::build_errors::Error as BuilderError;
use crate::{BuildResult, Result};
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

pub mod access_token;
pub mod anonymous;

pub(crate) const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";

/// The environment variable holding an externally obtained access token.
pub const ACCESS_TOKEN_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// The environment variable overriding the quota project.
pub const QUOTA_PROJECT_VAR: &str = "GOOGLE_CLOUD_QUOTA_PROJECT";

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// Modern authentication protocols do not send the credentials to
/// authenticate with a service. Even when sent over encrypted transports, the
/// credentials may be accidentally exposed via logging or may be captured if
/// there are errors in the transport encryption. Because the credentials are
/// often long-lived, that risk of exposure is also long-lived.
///
/// Instead, modern authentication protocols exchange the credentials for a
/// time-limited [Token][token-link], a digital object that shows the caller
/// was in possession of the credentials. The Compute Engine clients expect the
/// application to perform this exchange, and to wrap the resulting token
/// using [access_token::Builder].
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
/// [token-link]: https://cloud.google.com/docs/authentication#token
#[derive(Clone, Debug)]
pub struct Credentials {
    // Shared by all the clones of a client, possibly across threads.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Asynchronously constructs the auth headers.
    ///
    /// Different auth tokens are sent via different headers. The
    /// [Credentials] constructs the headers (and header values) that should
    /// be sent with a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Represents a [Credentials] used to obtain auth request headers.
///
/// Applications rarely need to implement this trait. The most common
/// exception is testing, where a mock credentials provider can inject
/// specific headers or errors.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible
    /// CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// A builder for the default [Credentials].
///
/// The default credentials use the access token in the
/// `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set. Otherwise they
/// fall back to [anonymous] credentials, which are only useful to access
/// public resources.
///
/// If the `GOOGLE_CLOUD_QUOTA_PROJECT` environment variable is set, it
/// overrides the quota project configured in the builder.
///
/// # Example
/// ```
/// # use compute_auth::credentials::Builder;
/// # tokio_test::block_on(async {
/// let credentials = Builder::new().build()?;
/// let headers = credentials.headers().await?;
/// println!("Headers: {headers:?}");
/// # Ok::<(), anyhow::Error>(())
/// # });
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// The quota project is only used when the credentials carry an access
    /// token. Anonymous credentials never send a quota project header.
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
    /// Returns a [BuilderError] if `GOOGLE_OAUTH_ACCESS_TOKEN` is set but it
    /// is empty, or if it is not valid Unicode.
    pub fn build(self) -> BuildResult<Credentials> {
        let token = match std::env::var(ACCESS_TOKEN_VAR) {
            Ok(token) if token.is_empty() => {
                return Err(BuilderError::missing_field("access_token"));
            }
            Ok(token) => token,
            Err(std::env::VarError::NotPresent) => {
                return Ok(anonymous::Builder::new().build());
            }
            Err(e) => return Err(BuilderError::loading(ACCESS_TOKEN_VAR, e)),
        };
        let quota_project_id = std::env::var(QUOTA_PROJECT_VAR)
            .ok()
            .or(self.quota_project_id);
        let builder = access_token::Builder::new(token);
        let builder = match quota_project_id {
            Some(project) => builder.with_quota_project_id(project),
            None => builder,
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
    use scoped_env::ScopedEnv;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug)]
    struct FakeProvider;

    impl CredentialsProvider for FakeProvider {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert("x-test-only", HeaderValue::from_static("fake"));
            Ok(headers)
        }
    }

    #[tokio::test]
    async fn from_custom_provider() -> TestResult {
        let credentials = Credentials::from(FakeProvider);
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get("x-test-only"),
            Some(&HeaderValue::from_static("fake"))
        );
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("FakeProvider"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_without_token_is_anonymous() -> TestResult {
        let _e = ScopedEnv::remove(ACCESS_TOKEN_VAR);
        let credentials = Builder::new().with_quota_project_id("ignored").build()?;
        let headers = credentials.headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_with_token() -> TestResult {
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "test-token");
        let _q = ScopedEnv::remove(QUOTA_PROJECT_VAR);
        let credentials = Builder::new().build()?;
        let headers = credentials.headers().await?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_with_token_and_quota_project() -> TestResult {
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "test-token");
        let _q = ScopedEnv::remove(QUOTA_PROJECT_VAR);
        let credentials = Builder::new()
            .with_quota_project_id("test-project")
            .build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(HeaderName::from_static(QUOTA_PROJECT_KEY)),
            Some(&HeaderValue::from_static("test-project"))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_quota_project_from_env_overrides() -> TestResult {
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "test-token");
        let _q = ScopedEnv::set(QUOTA_PROJECT_VAR, "env-project");
        let credentials = Builder::new()
            .with_quota_project_id("test-project")
            .build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(HeaderName::from_static(QUOTA_PROJECT_KEY)),
            Some(&HeaderValue::from_static("env-project"))
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_with_empty_token() {
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "");
        let err = Builder::new().build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
    }
}
