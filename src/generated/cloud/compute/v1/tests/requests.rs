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

//! Verify each method sends the expected HTTP verb, path, and query.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use cloud_compute_v1::client::{
        Addresses,
        BackendServices,
        Disks,
        Firewalls,
        ForwardingRules,
        GlobalAddresses,
        GlobalOperations,
        HealthChecks,
        Images,
        Instances,
        MachineTypes,
        Networks,
        Projects,
        RegionOperations,
        Regions,
        Snapshots,
        Subnetworks,
        TargetPools,
        UrlMaps,
        ZoneOperations,
        Zones,
    };
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn addresses() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/addresses"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/addresses/test-address"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/addresses/test-address"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/addresses"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/addresses"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/addresses/test-address/move"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/addresses/test-resource/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Addresses::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_address("test-address")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .get()
            .set_address("test-address")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .r#move()
            .set_address("test-address")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_region("us-central1")
            .set_resource("test-resource")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn global_addresses() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/addresses/test-address"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/addresses/test-address"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/addresses"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/addresses"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/addresses/test-address/move"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/addresses/test-resource/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = GlobalAddresses::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_address("test-address")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_address("test-address")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .r#move()
            .set_address("test-address")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_resource("test-resource")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn disks() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/disks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk/createSnapshot"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk/resize"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/disks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-resource/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Disks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .create_snapshot()
            .set_disk("test-disk")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_disk("test-disk")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .resize()
            .set_disk("test-disk")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .get()
            .set_disk("test-disk")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_resource("test-resource")
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn instances() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/instances"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/attachDisk"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/detachDisk"),
                request::query(url_decoded(len(eq(1)))),
                request::query(url_decoded(contains(("deviceName", "test-device-name")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/reset"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/resume"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/serialPort"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setMachineType"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setMetadata"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setTags"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/start"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/stop"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/suspend"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Instances::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .attach_disk()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .detach_disk()
            .set_device_name("test-device-name")
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .reset()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .resume()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .get()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .get_serial_port_output()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_machine_type()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_metadata()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_tags()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .start()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .stop()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .suspend()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn networks() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/networks/test-network/addPeering"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/networks/test-network"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/networks/test-network/removePeering"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/networks/test-network"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/networks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/networks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/networks/test-network"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Networks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .add_peering()
            .set_network("test-network")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_network("test-network")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .remove_peering()
            .set_network("test-network")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_network("test-network")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_network("test-network")
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn subnetworks() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/subnetworks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork/expandIpCidrRange"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/subnetworks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/subnetworks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork/setPrivateIpGoogleAccess"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Subnetworks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_region("us-central1")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .expand_ip_cidr_range()
            .set_project("test-project")
            .set_region("us-central1")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .set_region("us-central1")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_project("test-project")
            .set_region("us-central1")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .set_private_ip_google_access()
            .set_project("test-project")
            .set_region("us-central1")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn firewalls() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/firewalls"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/firewalls"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Firewalls::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .update()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn forwarding_rules() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/forwardingRules"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-resource/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule/setTarget"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = ForwardingRules::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .get()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_region("us-central1")
            .set_resource("test-resource")
            .send()
            .await?;
        let _ = client
            .set_target()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn backend_services() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/backendServices"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/backendServices/test-backend-service/getHealth"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/backendServices"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/backendServices"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = BackendServices::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get_health()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .update()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn health_checks() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/healthChecks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/healthChecks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/healthChecks"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = HealthChecks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .update()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn target_pools() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/addInstance"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/targetPools"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/removeInstance"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/getHealth"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/targetPools"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/setBackup"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = TargetPools::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .add_instance()
            .set_project("test-project")
            .set_region("us-central1")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_region("us-central1")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .remove_instance()
            .set_project("test-project")
            .set_region("us-central1")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .set_region("us-central1")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .get_health()
            .set_project("test-project")
            .set_region("us-central1")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .set_backup()
            .set_project("test-project")
            .set_region("us-central1")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn url_maps() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/urlMaps"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/urlMaps/test-url-map/invalidateCache"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/urlMaps"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = UrlMaps::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .invalidate_cache()
            .set_project("test-project")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .patch()
            .set_project("test-project")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .update()
            .set_project("test-project")
            .set_url_map("test-url-map")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn images() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/images/test-image"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/images/test-image/deprecate"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/images/test-image"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/images/family/test-family"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/images"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/images"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/images/test-resource/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Images::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_image("test-image")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .deprecate()
            .set_image("test-image")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_image("test-image")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get_from_family()
            .set_family("test-family")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_resource("test-resource")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn snapshots() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/snapshots/test-snapshot"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/snapshots/test-snapshot"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/snapshots"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/snapshots"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/snapshots/test-resource/setLabels"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Snapshots::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_snapshot("test-snapshot")
            .send()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .set_snapshot("test-snapshot")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_resource("test-resource")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn machine_types() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/machineTypes"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/machineTypes/test-machine-type"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/machineTypes"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = MachineTypes::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_machine_type("test-machine-type")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn zones() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Zones::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn regions() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Regions::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn zone_operations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/zones/us-central1-a/operations/test-operation"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/operations/test-operation"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/operations"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/operations/test-operation/wait"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = ZoneOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_operation("test-operation")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .get()
            .set_operation("test-operation")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .wait()
            .set_operation("test-operation")
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn region_operations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/operations/test-operation"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/operations/test-operation"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/operations"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/operations/test-operation/wait"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = RegionOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_operation("test-operation")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .get()
            .set_operation("test-operation")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        let _ = client
            .wait()
            .set_operation("test-operation")
            .set_project("test-project")
            .set_region("us-central1")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn global_operations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/operations"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/operations/test-operation"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/operations/test-operation"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/operations"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/operations/test-operation/wait"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = GlobalOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_operation("test-operation")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .get()
            .set_operation("test-operation")
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .list()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .wait()
            .set_operation("test-operation")
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn projects() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/setCommonInstanceMetadata"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/setDefaultNetworkTier"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/setUsageExportBucket"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Projects::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .get()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .set_common_instance_metadata()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .set_default_network_tier()
            .set_project("test-project")
            .send()
            .await?;
        let _ = client
            .set_usage_export_bucket()
            .set_project("test-project")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn addresses_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/addresses"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/addresses/test-address"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/addresses"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/addresses"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/addresses/test-resource/setLabels"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Addresses::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .delete()
            .set_address("test-address")
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_region("us-central1")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_resource("test-resource")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn global_addresses_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/addresses/test-address"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/addresses"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/addresses"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = GlobalAddresses::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_address("test-address")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn disks_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/disks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk/createSnapshot"),
                request::query(url_decoded(contains(("guestFlush", "true")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-disk/resize"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(contains(("sourceImage", "projects/test-project/global/images/test-image")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/disks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/disks/test-resource/setLabels"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Disks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .create_snapshot()
            .set_disk("test-disk")
            .set_guest_flush(true)
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_disk("test-disk")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .resize()
            .set_disk("test-disk")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_source_image("projects/test-project/global/images/test-image")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_resource("test-resource")
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn instances_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/instances"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/attachDisk"),
                request::query(url_decoded(contains(("forceAttach", "true")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance"),
                request::query(url_decoded(contains(("noGracefulShutdown", "true")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/detachDisk"),
                request::query(url_decoded(contains(("deviceName", "test-device")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/reset"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/resume"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/serialPort"),
                request::query(url_decoded(contains(("port", "2")))),
                request::query(url_decoded(contains(("start", "1024")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(contains(("sourceInstanceTemplate", "global/instanceTemplates/test-template")))),
                request::query(url_decoded(contains(("sourceMachineImage", "global/machineImages/test-machine-image")))),
                request::query(url_decoded(len(eq(3)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/instances"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setLabels"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setMachineType"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setMetadata"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/setTags"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/start"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/stop"),
                request::query(url_decoded(contains(("discardLocalSsd", "true")))),
                request::query(url_decoded(contains(("noGracefulShutdown", "true")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(3)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/zones/us-central1-a/instances/test-instance/suspend"),
                request::query(url_decoded(contains(("discardLocalSsd", "true")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Instances::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .attach_disk()
            .set_force_attach(true)
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_instance("test-instance")
            .set_no_graceful_shutdown(true)
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .detach_disk()
            .set_device_name("test-device")
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .reset()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .resume()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .get_serial_port_output()
            .set_instance("test-instance")
            .set_port(2_i32)
            .set_project("test-project")
            .set_start(1024_i64)
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_source_instance_template("global/instanceTemplates/test-template")
            .set_source_machine_image("global/machineImages/test-machine-image")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_machine_type()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_metadata()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .set_tags()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .start()
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .stop()
            .set_discard_local_ssd(true)
            .set_instance("test-instance")
            .set_no_graceful_shutdown(true)
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        let _ = client
            .suspend()
            .set_discard_local_ssd(true)
            .set_instance("test-instance")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn networks_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/networks/test-network/addPeering"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/networks/test-network"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/networks/test-network/removePeering"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/networks"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/networks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/networks/test-network"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Networks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .add_peering()
            .set_network("test-network")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .delete()
            .set_network("test-network")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .remove_peering()
            .set_network("test-network")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_network("test-network")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn subnetworks_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/subnetworks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork/expandIpCidrRange"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/subnetworks"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/subnetworks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork"),
                request::query(url_decoded(contains(("drainTimeoutSeconds", "30")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/subnetworks/test-subnetwork/setPrivateIpGoogleAccess"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Subnetworks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .expand_ip_cidr_range()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_region("us-central1")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_drain_timeout_seconds(30_i32)
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        let _ = client
            .set_private_ip_google_access()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_subnetwork("test-subnetwork")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn firewalls_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/firewalls"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/firewalls"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/firewalls/test-firewall"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Firewalls::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .update()
            .set_firewall("test-firewall")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn forwarding_rules_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/forwardingRules"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-resource/setLabels"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/forwardingRules/test-forwarding-rule/setTarget"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = ForwardingRules::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .delete()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_region("us-central1")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .set_labels()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_resource("test-resource")
            .send()
            .await?;
        let _ = client
            .set_target()
            .set_forwarding_rule("test-forwarding-rule")
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn backend_services_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/backendServices"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/backendServices"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/backendServices"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/backendServices/test-backend-service"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = BackendServices::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .delete()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .update()
            .set_backend_service("test-backend-service")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn health_checks_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/healthChecks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/healthChecks"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/healthChecks"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/healthChecks/test-health-check"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = HealthChecks::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .delete()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .update()
            .set_health_check("test-health-check")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn target_pools_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/addInstance"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/targetPools"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/removeInstance"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/targetPools"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/regions/us-central1/targetPools/test-target-pool/setBackup"),
                request::query(url_decoded(contains(("failoverRatio", "0.25")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = TargetPools::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .add_instance()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .remove_instance()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_region("us-central1")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .set_backup()
            .set_failover_ratio(0.25_f64)
            .set_project("test-project")
            .set_region("us-central1")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_target_pool("test-target-pool")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn url_maps_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/urlMaps"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/urlMaps/test-url-map/invalidateCache"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/urlMaps"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/compute/v1/projects/test-project/global/urlMaps/test-url-map"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = UrlMaps::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .invalidate_cache()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        let _ = client
            .patch()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_url_map("test-url-map")
            .send()
            .await?;
        let _ = client
            .update()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_url_map("test-url-map")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn images_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/images/test-image"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/images/test-image/deprecate"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/images"),
                request::query(url_decoded(contains(("forceCreate", "true")))),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(2)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/images"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Images::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_image("test-image")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .deprecate()
            .set_image("test-image")
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_force_create(true)
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn snapshots_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/compute/v1/projects/test-project/global/snapshots/test-snapshot"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/global/snapshots"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/snapshots"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Snapshots::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .delete()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .set_snapshot("test-snapshot")
            .send()
            .await?;
        let _ = client
            .insert()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn machine_types_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/machineTypes"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/machineTypes"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = MachineTypes::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn zones_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Zones::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn regions_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Regions::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn zone_operations_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/zones/us-central1-a/operations"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = ZoneOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_zone("us-central1-a")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn region_operations_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/regions/us-central1/operations"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = RegionOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_region("us-central1")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn global_operations_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/aggregated/operations"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("includeAllScopes", "true")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(contains(("serviceProjectNumber", "123456")))),
                request::query(url_decoded(len(eq(7)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/compute/v1/projects/test-project/global/operations"),
                request::query(url_decoded(contains(("filter", "name = test-name")))),
                request::query(url_decoded(contains(("maxResults", "25")))),
                request::query(url_decoded(contains(("orderBy", "creationTimestamp desc")))),
                request::query(url_decoded(contains(("pageToken", "test-page-token")))),
                request::query(url_decoded(contains(("returnPartialSuccess", "true")))),
                request::query(url_decoded(len(eq(5)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = GlobalOperations::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .aggregated_list()
            .set_filter("name = test-name")
            .set_include_all_scopes(true)
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .set_service_project_number(123456_i64)
            .send()
            .await?;
        let _ = client
            .list()
            .set_filter("name = test-name")
            .set_max_results(25_u32)
            .set_order_by("creationTimestamp desc")
            .set_page_token("test-page-token")
            .set_project("test-project")
            .set_return_partial_success(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn projects_query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/setCommonInstanceMetadata"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/setDefaultNetworkTier"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/compute/v1/projects/test-project/setUsageExportBucket"),
                request::query(url_decoded(contains(("requestId", "00000000-0000-0000-0000-000000000001")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Projects::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let _ = client
            .set_common_instance_metadata()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .set_default_network_tier()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        let _ = client
            .set_usage_export_bucket()
            .set_project("test-project")
            .set_request_id("00000000-0000-0000-0000-000000000001")
            .send()
            .await?;
        Ok(())
    }
}
