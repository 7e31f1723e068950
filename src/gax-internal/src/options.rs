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

pub use auth::credentials::Credentials;
use gax::client_builder::Error as BuilderError;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "COMPUTE_RUST_LOGGING";

/// Tracing is enabled by the client configuration, or for all clients by
/// setting `COMPUTE_RUST_LOGGING=true`.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing || std::env::var(LOGGING_VAR).is_ok_and(|v| v == "true")
}

/// The endpoint used by a client, without any trailing `/`.
///
/// The request paths always start with `/`.
pub fn effective_endpoint(config: &ClientConfig, default_endpoint: &str) -> String {
    let endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint);
    endpoint.trim_end_matches('/').to_string()
}

/// The credentials used by a client.
///
/// Uses the configured credentials, if any. Otherwise, loads the default
/// credentials from the environment.
pub fn effective_credentials(config: &ClientConfig) -> gax::client_builder::Result<Credentials> {
    if let Some(c) = config.cred.clone() {
        return Ok(c);
    }
    auth::credentials::Builder::default()
        .build()
        .map_err(BuilderError::cred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    #[test_case(false, None, false; "disabled")]
    #[test_case(true, None, true; "configured")]
    #[test_case(false, Some("true"), true; "environment")]
    #[test_case(false, Some("yes"), false; "only true enables")]
    #[test_case(true, Some("false"), true; "configuration wins")]
    #[serial_test::serial]
    fn tracing(configured: bool, env: Option<&str>, want: bool) {
        let _e = match env {
            Some(v) => ScopedEnv::set(LOGGING_VAR, v),
            None => ScopedEnv::remove(LOGGING_VAR),
        };
        let mut config = ClientConfig::default();
        config.tracing = configured;
        assert_eq!(tracing_enabled(&config), want);
    }

    #[test_case(None, "https://compute.googleapis.com")]
    #[test_case(Some("http://localhost:8080"), "http://localhost:8080")]
    #[test_case(Some("http://localhost:8080/"), "http://localhost:8080")]
    fn endpoint(configured: Option<&str>, want: &str) {
        let mut config = ClientConfig::default();
        config.endpoint = configured.map(str::to_string);
        let got = effective_endpoint(&config, "https://compute.googleapis.com/");
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn configured_credentials() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::access_token::Builder::new("test-token").build()?);
        let cred = effective_credentials(&config)?;
        let headers = cred.headers().await?;
        assert!(headers.contains_key(http::header::AUTHORIZATION), "{headers:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_credentials_error() {
        let _e = ScopedEnv::set("GOOGLE_OAUTH_ACCESS_TOKEN", "");
        let config = ClientConfig::default();
        let err = effective_credentials(&config).unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
    }
}
