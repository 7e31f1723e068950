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

#[cfg(test)]
mod tests {
    use auth::credentials::{Credentials, CredentialsProvider};
    use auth::errors::CredentialsError;
    use compute_gax_internal::http::{NoBody, ReqwestClient};
    use compute_gax_internal::options::ClientConfig;
    use gax::error::FailureClass;
    use gax::options::*;
    use http::HeaderMap;
    use http::header::{HeaderName, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::error::Error as _;

    type AuthResult<T> = std::result::Result<T, CredentialsError>;
    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> AuthResult<HeaderMap>;
        }
    }

    async fn test_client(server: &Server, mock: MockCredentials) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = ReqwestClient::new(config, &endpoint).await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/p"),
                request::headers(contains(("auth-key-1", "auth-value-1"))),
                request::headers(contains(("auth-key-2", "auth-value-2"))),
            ])
            .respond_with(json_encoded(json!({"name": "p"}))),
        );

        // Mock credentials verify that all the headers are included in the
        // request, and that the credentials are called exactly once.
        let mut mock = MockCredentials::new();
        let header = HeaderMap::from_iter([
            (
                HeaderName::from_static("auth-key-1"),
                HeaderValue::from_static("auth-value-1"),
            ),
            (
                HeaderName::from_static("auth-key-2"),
                HeaderValue::from_static("auth-value-2"),
            ),
        ]);
        mock.expect_headers().times(1).return_once(|| Ok(header));

        let client = test_client(&server, mock).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let response: serde_json::Value = client
            .execute(builder, None::<NoBody>, RequestOptions::default())
            .await?
            .into_body();
        assert_eq!(response, json!({"name": "p"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_error() -> Result<()> {
        // No requests reach the server.
        let server = Server::run();

        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(1)
            .returning(|| Err(CredentialsError::from_str(false, "mock non-retryable error")));

        let client = test_client(&server, mock).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let result = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await;
        let err = result.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        assert_eq!(err.failure_class(), FailureClass::AuthorizationRequired);
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(source, Some(e) if !e.is_retryable()), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unauthorized_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/p"))
                .respond_with(
                    status_code(401).body(
                        json!({"error": {
                            "code": 401,
                            "message": "Request had invalid authentication credentials.",
                            "status": "UNAUTHENTICATED",
                        }})
                        .to_string(),
                    ),
                ),
        );

        let mut mock = MockCredentials::new();
        mock.expect_headers().returning(|| Ok(HeaderMap::new()));

        let client = test_client(&server, mock).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code),
            Some(gax::error::rpc::Code::Unauthenticated),
            "{err:?}"
        );
        assert_eq!(err.failure_class(), FailureClass::AuthorizationRequired);
        Ok(())
    }
}
