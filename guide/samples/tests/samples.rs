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

//! Run the samples against a fake Compute Engine service.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use cloud_compute_v1::client::{Images, Instances, ZoneOperations, Zones};
    use compute_samples::*;
    use httptest::cycle;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const INSTANCES: &str = "/compute/v1/projects/test-project/zones/us-central1-a/instances";

    async fn instances(server: &Server) -> Result<Instances> {
        let client = Instances::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    async fn operations(server: &Server) -> Result<ZoneOperations> {
        let client = ZoneOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn quickstart() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", INSTANCES),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{"name": "vm-1", "status": "RUNNING"}],
                "nextPageToken": "page-2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", INSTANCES),
                request::query(url_decoded(contains(("pageToken", "page-2")))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{"name": "vm-2", "status": "TERMINATED"}],
            }))),
        );

        let client = instances(&server).await?;
        quickstart::quickstart(&client, "test-project", "us-central1-a").await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_waits_for_operation() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", INSTANCES),
                request::body(json_decoded(|b: &serde_json::Value| {
                    b.get("name") == Some(&json!("vm-1"))
                })),
            ])
            .respond_with(json_encoded(json!({
                "name": "operation-1",
                "status": "RUNNING",
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1/wait",
            ))
            .times(2)
            .respond_with(cycle![
                json_encoded(json!({"name": "operation-1", "status": "RUNNING", "progress": 50})),
                json_encoded(json!({"name": "operation-1", "status": "DONE", "progress": 100})),
            ]),
        );

        let client = instances(&server).await?;
        let operations = operations(&server).await?;
        instances::create(&client, &operations, "test-project", "us-central1-a", "vm-1").await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_reports_operation_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/compute/v1/projects/test-project/zones/us-central1-a/instances/vm-1"))
                .respond_with(json_encoded(json!({
                    "name": "operation-2",
                    "status": "DONE",
                    "error": {"errors": [{"code": "RESOURCE_IN_USE_BY_ANOTHER_RESOURCE"}]},
                }))),
        );

        let client = instances(&server).await?;
        let operations = operations(&server).await?;
        let err = instances::delete(&client, &operations, "test-project", "us-central1-a", "vm-1")
            .await
            .unwrap_err();
        let err = err.downcast_ref::<cloud_compute_v1::errors::OperationError>();
        assert!(
            matches!(err, Some(cloud_compute_v1::errors::OperationError::Generic(_))),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_all() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/instances"),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "items": {
                    "zones/us-central1-a": {"instances": [{"name": "vm-1"}, {"name": "vm-2"}]},
                    "zones/us-central1-b": {"warning": {"code": "NO_RESULTS_ON_PAGE", "message": "no results"}},
                    "zones/europe-west1-b": {"instances": [{"name": "vm-3"}]},
                },
                "unreachables": ["zones/asia-east1-a"],
            }))),
        );

        let client = instances(&server).await?;
        let count = instances::list_all(&client, "test-project").await?;
        assert_eq!(count, 3);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn images() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/debian-cloud/global/images"),
                request::query(url_decoded(contains(("filter", "deprecated.state != DEPRECATED")))),
                request::query(url_decoded(contains(("maxResults", "100")))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{"name": "debian-12-v1"}, {"name": "debian-12-v2"}],
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/debian-cloud/global/images/family/debian-12",
            ))
            .respond_with(json_encoded(json!({"name": "debian-12-v2", "family": "debian-12"}))),
        );

        let client = Images::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let names = images::list(&client, "debian-cloud").await?;
        assert_eq!(names, vec!["debian-12-v1", "debian-12-v2"]);
        let image = images::latest(&client, "debian-cloud", "debian-12").await?;
        assert_eq!(image.name.as_deref(), Some("debian-12-v2"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn binding_errors() -> Result<()> {
        // No expectations, the sample must not send any requests.
        let server = Server::run();
        let client = instances(&server).await?;
        binding_errors::missing_zone(&client, "test-project").await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn error_handling() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances/missing"))
                .respond_with(status_code(404).body(
                    json!({"error": {"code": 404, "message": "The resource was not found"}})
                        .to_string(),
                )),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances/vm-1"))
                .respond_with(json_encoded(json!({"name": "vm-1"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances/denied"))
                .respond_with(status_code(403).body(
                    json!({"error": {"code": 403, "message": "Required 'compute.instances.get' permission"}})
                        .to_string(),
                )),
        );

        let client = instances(&server).await?;
        let got =
            error_handling::get_if_exists(&client, "test-project", "us-central1-a", "missing")
                .await?;
        assert!(got.is_none(), "{got:?}");
        let got =
            error_handling::get_if_exists(&client, "test-project", "us-central1-a", "vm-1").await?;
        assert_eq!(got.and_then(|i| i.name).as_deref(), Some("vm-1"));
        let got =
            error_handling::get_if_exists(&client, "test-project", "us-central1-a", "denied")
                .await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn logging() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/test-project/zones",
            ))
            .respond_with(json_encoded(json!({
                "items": [{"name": "us-central1-a", "status": "UP"}],
            }))),
        );

        let builder = Zones::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build());
        logging::sample(builder, "test-project").await?;
        Ok(())
    }
}
