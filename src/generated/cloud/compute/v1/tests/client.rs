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

//! Verify the clients encode requests and decode responses as the
//! Compute Engine REST API expects.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use cloud_compute_v1::client::{Firewalls, Instances, Projects, ZoneOperations};
    use cloud_compute_v1::model::{
        AccessConfig, Instance, Metadata, NetworkInterface, firewall::Allowed, metadata::Items,
    };
    use gax::error::rpc::Code;
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    async fn instances(server: &Server) -> Result<Instances> {
        let client = Instances::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_decodes_resource() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/compute/v1/projects/my-project/zones/us-central1-a/instances/vm-1"
                ),
                request::headers(contains(key("x-goog-api-client"))),
            ])
            .respond_with(json_encoded(json!({
                "kind": "compute#instance",
                "id": "1234567890123456789",
                "name": "vm-1",
                "status": "RUNNING",
                "networkInterfaces": [{
                    "networkIP": "10.128.0.2",
                    "accessConfigs": [{"natIP": "34.1.2.3", "type": "ONE_TO_ONE_NAT"}]
                }],
                "someFutureField": {"ignored": true},
            }))),
        );

        let client = instances(&server).await?;
        let got = client
            .get()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("vm-1")
            .send()
            .await?;
        let want = Instance::new()
            .set_kind("compute#instance")
            .set_id(1234567890123456789_u64)
            .set_name("vm-1")
            .set_status(cloud_compute_v1::model::instance::status::RUNNING)
            .set_network_interfaces([NetworkInterface::new()
                .set_network_ip("10.128.0.2")
                .set_access_configs([AccessConfig::new()
                    .set_nat_ip("34.1.2.3")
                    .set_type(cloud_compute_v1::model::access_config::r#type::ONE_TO_ONE_NAT)])]);
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn insert_sends_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/compute/v1/projects/my-project/zones/us-central1-a/instances"
                ),
                request::query(url_decoded(contains(("requestId", "req-1")))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "name": "vm-1",
                    "machineType": "zones/us-central1-a/machineTypes/e2-small",
                    "networkInterfaces": [{"network": "global/networks/default"}],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "operation-123",
                "status": "RUNNING",
                "operationType": "insert",
                "targetId": "42",
            }))),
        );

        let client = instances(&server).await?;
        let operation = client
            .insert()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_request_id("req-1")
            .set_instance_resource(
                Instance::new()
                    .set_name("vm-1")
                    .set_machine_type("zones/us-central1-a/machineTypes/e2-small")
                    .set_network_interfaces([
                        NetworkInterface::new().set_network("global/networks/default")
                    ]),
            )
            .send()
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operation-123"));
        assert_eq!(operation.target_id, Some(42));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn action_without_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/compute/v1/projects/my-project/zones/us-central1-a/instances/vm-1/reset"
                ),
                request::headers(not(contains(key("content-type")))),
                request::headers(contains(("content-length", "0"))),
                request::body(""),
            ])
            .respond_with(json_encoded(json!({"name": "operation-456"}))),
        );

        let client = instances(&server).await?;
        let operation = client
            .reset()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("vm-1")
            .send()
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operation-456"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/compute/v1/projects/my-project/zones/us-central1-a/instances"
                ),
                request::query(url_decoded(len(eq(4)))),
                request::query(url_decoded(contains(("filter", "status = RUNNING")))),
                request::query(url_decoded(contains(("maxResults", "10")))),
                request::query(url_decoded(contains(("pageToken", "abc&def")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{"name": "vm-1"}, {"name": "vm-2"}],
                "nextPageToken": "next-page",
            }))),
        );

        let client = instances(&server).await?;
        let list = client
            .list()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_filter("status = RUNNING")
            .set_max_results(10_u32)
            .set_page_token("abc&def")
            .set_return_partial_success(true)
            .send()
            .await?;
        let names = list
            .items
            .iter()
            .filter_map(|i| i.name.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["vm-1", "vm-2"]);
        assert_eq!(list.next_page_token.as_deref(), Some("next-page"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn required_query_parameter() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/compute/v1/projects/my-project/zones/us-central1-a/instances/vm-1/detachDisk"
                ),
                request::query(url_decoded(len(eq(1)))),
                request::query(url_decoded(contains(("deviceName", "persistent-disk-1")))),
            ])
            .respond_with(json_encoded(json!({"name": "operation-789"}))),
        );

        let client = instances(&server).await?;
        let operation = client
            .detach_disk()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("vm-1")
            .set_device_name("persistent-disk-1")
            .send()
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operation-789"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn path_parameters_are_encoded() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/example.com%3Amy-project/zones/us-central1-a/instances/vm%2F1",
            ))
            .respond_with(json_encoded(json!({"name": "vm/1"}))),
        );

        let client = instances(&server).await?;
        let got = client
            .get()
            .set_project("example.com:my-project")
            .set_zone("us-central1-a")
            .set_instance("vm/1")
            .send()
            .await?;
        assert_eq!(got.name.as_deref(), Some("vm/1"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_path_parameter() -> Result<()> {
        // The server has no expectations, any request fails the test.
        let server = Server::run();

        let client = instances(&server).await?;
        let err = client
            .get()
            .set_project("my-project")
            .set_instance("vm-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("zone"), "{err}");

        let err = client
            .detach_disk()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_device_name("persistent-disk-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("instance"), "{err}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/my-project/zones/us-central1-a/instances/missing",
            ))
            .respond_with(status_code(404).body(
                json!({"error": {
                    "code": 404,
                    "message": "The resource 'projects/my-project/zones/us-central1-a/instances/missing' was not found",
                    "errors": [{
                        "domain": "global",
                        "reason": "notFound",
                        "message": "The resource 'projects/my-project/zones/us-central1-a/instances/missing' was not found",
                    }],
                }})
                .to_string(),
            )),
        );

        let client = instances(&server).await?;
        let err = client
            .get()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code, Code::NotFound);
        assert!(status.message.contains("was not found"), "{status:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_options() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/compute/v1/projects/my-project/zones/us-central1-a/instances/vm-1"
                ),
                request::query(url_decoded(contains(("quotaUser", "user-1")))),
                request::query(url_decoded(contains(("fields", "name,status")))),
                request::headers(contains(("user-agent", "my-app/1.0"))),
            ])
            .respond_with(json_encoded(json!({"name": "vm-1", "status": "STOPPED"}))),
        );

        let client = instances(&server).await?;
        let got = client
            .get()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("vm-1")
            .with_quota_user("user-1")
            .with_fields("name,status")
            .with_user_agent("my-app/1.0")
            .send()
            .await?;
        assert_eq!(got.status.as_deref(), Some("STOPPED"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn odd_field_names() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/my-project/global/firewalls"),
                request::body(json_decoded(eq(json!({
                    "name": "allow-ssh",
                    "allowed": [{"IPProtocol": "tcp", "ports": ["22"]}],
                    "sourceRanges": ["0.0.0.0/0"],
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operation-fw"}))),
        );

        let client = Firewalls::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let operation = client
            .insert()
            .set_project("my-project")
            .set_firewall_resource(
                cloud_compute_v1::model::Firewall::new()
                    .set_name("allow-ssh")
                    .set_allowed([Allowed::new().set_ip_protocol("tcp").set_ports(["22"])])
                    .set_source_ranges(["0.0.0.0/0"]),
            )
            .send()
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operation-fw"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn set_common_instance_metadata() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/compute/v1/projects/my-project/setCommonInstanceMetadata"
                ),
                request::body(json_decoded(eq(json!({
                    "fingerprint": "abc=",
                    "items": [{"key": "enable-oslogin", "value": "TRUE"}],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "operation-meta",
                "status": "DONE",
                "setCommonInstanceMetadataOperationMetadata": {
                    "perLocationOperations": {
                        "zones/us-central1-a": {"state": "DONE"},
                        "zones/us-central1-f": {
                            "state": "FAILED",
                            "error": {"code": 13, "message": "internal error"},
                        },
                    },
                },
            }))),
        );

        let client = Projects::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let operation = client
            .set_common_instance_metadata()
            .set_project("my-project")
            .set_metadata_resource(
                Metadata::new()
                    .set_fingerprint("abc=")
                    .set_items([Items::new().set_key("enable-oslogin").set_value("TRUE")]),
            )
            .send()
            .await?;
        let err = operation.to_result().unwrap_err();
        assert!(
            matches!(
                err,
                cloud_compute_v1::errors::OperationError::SetCommonInstanceMetadata(_)
            ),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn operations_wait_and_delete() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/compute/v1/projects/my-project/zones/us-central1-a/operations/operation-123/wait",
            ))
            .respond_with(json_encoded(json!({
                "name": "operation-123",
                "status": "DONE",
                "httpErrorStatusCode": 409,
                "httpErrorMessage": "CONFLICT",
                "error": {"errors": [{"code": "RESOURCE_ALREADY_EXISTS", "message": "already exists"}]},
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/compute/v1/projects/my-project/zones/us-central1-a/operations/operation-123",
            ))
            .respond_with(status_code(204)),
        );

        let client = ZoneOperations::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let operation = client
            .wait()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_operation("operation-123")
            .send()
            .await?;
        assert_eq!(
            operation.status.as_deref(),
            Some(cloud_compute_v1::model::operation::status::DONE)
        );
        match operation.to_result() {
            Err(cloud_compute_v1::errors::OperationError::Generic(e)) => {
                assert_eq!(e.status_code, Some(409));
                assert_eq!(e.message.as_deref(), Some("CONFLICT"));
                let details = e.details.unwrap_or_default();
                assert_eq!(details.errors.len(), 1, "{details:?}");
            }
            r => panic!("expected a generic operation error, got {r:?}"),
        }

        client
            .delete()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_operation("operation-123")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn with_tracing() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/my-project/zones/us-central1-a/instances/vm-1",
            ))
            .respond_with(json_encoded(json!({"name": "vm-1"}))),
        );

        let client = Instances::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous::Builder::new().build())
            .with_tracing()
            .build()
            .await?;
        let got = client
            .get()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("vm-1")
            .send()
            .await?;
        assert_eq!(got.name.as_deref(), Some("vm-1"));
        Ok(())
    }
}
