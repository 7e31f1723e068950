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

#[cfg(test)]
mod tests {
    use compute_auth::credentials::{
        ACCESS_TOKEN_VAR, Credentials, CredentialsProvider, access_token, anonymous,
    };
    use compute_auth::errors::CredentialsError;
    use http::HeaderMap;
    use http::header::{AUTHORIZATION, HeaderValue};
    use scoped_env::ScopedEnv;

    type Result<T> = anyhow::Result<T>;

    static_assertions::assert_impl_all!(Credentials: Send, Sync, Clone, std::fmt::Debug);
    static_assertions::assert_impl_all!(compute_auth::build_errors::Error: Send, Sync);

    #[derive(Debug)]
    struct FailingProvider;

    impl CredentialsProvider for FailingProvider {
        async fn headers(&self) -> std::result::Result<HeaderMap, CredentialsError> {
            Err(CredentialsError::from_str(true, "try again later"))
        }
    }

    #[tokio::test]
    async fn custom_provider_errors_propagate() -> Result<()> {
        let credentials = Credentials::from(FailingProvider);
        let err = credentials.headers().await.unwrap_err();
        assert!(err.is_retryable(), "{err:?}");
        assert!(err.to_string().contains("try again later"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_has_no_headers() -> Result<()> {
        let credentials = anonymous::Builder::new().build();
        let headers = credentials.headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn access_token_is_bearer() -> Result<()> {
        let credentials = access_token::Builder::new("abc123").build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer abc123"))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_credentials_from_env() -> Result<()> {
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "from-env");
        let credentials = compute_auth::credentials::Builder::new().build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer from-env"))
        );
        Ok(())
    }
}
