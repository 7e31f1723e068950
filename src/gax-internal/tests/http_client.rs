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

//! These tests use a fixture HTTP server to verify the requests created by
//! the `ReqwestClient` and how it interprets the responses.

#[cfg(test)]
mod tests {
    use compute_gax_internal::http::{NoBody, ReqwestClient};
    use compute_gax_internal::options::ClientConfig;
    use gax::error::FailureClass;
    use gax::options::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config
    }

    async fn test_client(server: &Server) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_without_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/p/zones/z/instances/vm-1"),
                request::query(url_decoded(len(eq(0)))),
                request::headers(not(contains(key("content-type")))),
                request::headers(not(contains(key("content-length")))),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(json_encoded(json!({"name": "vm-1", "id": "123"}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::GET,
            "/compute/v1/projects/p/zones/z/instances/vm-1".into(),
        );
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.body(), &json!({"name": "vm-1", "id": "123"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn post_with_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/p/global/networks"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"name": "net-1"})))),
            ])
            .respond_with(json_encoded(json!({"name": "operation-1", "status": "RUNNING"}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::POST,
            "/compute/v1/projects/p/global/networks".into(),
        );
        let response = client
            .execute::<Value, Value>(
                builder,
                Some(json!({"name": "net-1"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(
            response.into_body(),
            json!({"name": "operation-1", "status": "RUNNING"})
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn post_without_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/p/zones/z/operations/op-1/wait"),
                request::headers(contains(("content-length", "0"))),
                request::headers(not(contains(key("content-type")))),
                request::body(""),
            ])
            .respond_with(json_encoded(json!({"name": "op-1", "status": "DONE"}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::POST,
            "/compute/v1/projects/p/zones/z/operations/op-1/wait".into(),
        );
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.body(), &json!({"name": "op-1", "status": "DONE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn standard_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/p"),
                request::query(url_decoded(contains(("quotaUser", "user-1")))),
                request::query(url_decoded(contains(("fields", "name,id")))),
                request::headers(contains(("user-agent", "test-prefix/1.2.3"))),
            ])
            .respond_with(json_encoded(json!({"name": "p"}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let mut options = RequestOptions::default();
        options.set_quota_user("user-1");
        options.set_fields("name,id");
        options.set_user_agent("test-prefix/1.2.3");
        let response = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        assert_eq!(response.body(), &json!({"name": "p"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn bearer_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/p"),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains(("x-goog-user-project", "quota-project"))),
            ])
            .respond_with(json_encoded(json!({"name": "p"}))),
        );

        let endpoint = format!("http://{}", server.addr());
        let mut config = ClientConfig::default();
        config.cred = Some(
            auth::credentials::access_token::Builder::new("test-token")
                .with_quota_project_id("quota-project")
                .build()?,
        );
        let client = ReqwestClient::new(config, &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.body(), &json!({"name": "p"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn configured_endpoint_overrides_default() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/p"))
                .respond_with(json_encoded(json!({"name": "p"}))),
        );

        let mut config = test_config();
        config.endpoint = Some(format!("http://{}/", server.addr()));
        let client = ReqwestClient::new(config, "https://compute.googleapis.com").await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.body(), &json!({"name": "p"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/compute/v1/projects/p/zones/z/operations/op-1",
            ))
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::DELETE,
            "/compute/v1/projects/p/zones/z/operations/op-1".into(),
        );
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.body(), &Value::Null);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/p"))
                .respond_with(
                    status_code(403)
                        .append_header("content-type", "application/json")
                        .body(
                            json!({"error": {
                                "code": 403,
                                "message": "Required 'compute.projects.get' permission",
                                "errors": [{
                                    "domain": "global",
                                    "reason": "forbidden",
                                    "message": "Required 'compute.projects.get' permission",
                                }],
                            }})
                            .to_string(),
                        ),
                ),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(403), "{err:?}");
        let status = err.status().unwrap();
        assert_eq!(status.code, gax::error::rpc::Code::PermissionDenied);
        assert_eq!(status.errors.len(), 1, "{status:?}");
        assert_eq!(status.errors[0].reason, "forbidden");
        assert_eq!(err.failure_class(), FailureClass::ClientNonRetryable);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn server_error_is_retryable() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/p"))
                .respond_with(status_code(503).body("try-again")),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.failure_class(), FailureClass::ServerRetryable);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/p"))
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({"name": "p"})),
                )),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .execute::<NoBody, Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(err.failure_class(), FailureClass::ServerRetryable);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unreachable_endpoint() -> Result<()> {
        // Nothing listens on port 1 of the loopback interface.
        let client = ReqwestClient::new(test_config(), "http://127.0.0.1:1").await?;
        let builder = client.builder(reqwest::Method::GET, "/compute/v1/projects/p".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert_eq!(err.failure_class(), FailureClass::ServerRetryable);
        Ok(())
    }
}
