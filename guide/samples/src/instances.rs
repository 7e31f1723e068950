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

//! Create, list, and delete VMs.

use crate::operations::wait_for_zone_operation;
use cloud_compute_v1::client::{Instances, ZoneOperations};
use cloud_compute_v1::model::{
    AttachedDisk, AttachedDiskInitializeParams, Instance, NetworkInterface,
};

// ANCHOR: create
/// Creates a VM and waits until the operation completes.
pub async fn create(
    client: &Instances,
    operations: &ZoneOperations,
    project_id: &str,
    zone: &str,
    name: &str,
) -> anyhow::Result<()> {
    let instance = Instance::new()
        .set_machine_type(format!("zones/{zone}/machineTypes/e2-micro"))
        .set_name(name)
        .set_description("A test VM created by the Rust client library.")
        .set_labels([("source", "compute_instances_create")])
        .set_disks([AttachedDisk::new()
            .set_initialize_params(
                AttachedDiskInitializeParams::new()
                    .set_source_image("projects/cos-cloud/global/images/family/cos-stable"),
            )
            .set_boot(true)
            .set_auto_delete(true)])
        .set_network_interfaces([NetworkInterface::new().set_network("global/networks/default")]);

    let operation = client
        .insert()
        .set_project(project_id)
        .set_zone(zone)
        .set_instance_resource(instance)
        .send()
        .await?;
    let operation = wait_for_zone_operation(operations, project_id, zone, operation).await?;
    // The operation may complete with an error, even if the request to start
    // it succeeded.
    let operation = operation.to_result()?;
    println!("Instance successfully created: {operation:?}");
    Ok(())
}
// ANCHOR_END: create

// ANCHOR: list-all
/// Lists the VMs in all the zones, and returns the number of VMs found.
pub async fn list_all(client: &Instances, project_id: &str) -> anyhow::Result<usize> {
    let mut count = 0;
    let mut page_token = None;
    loop {
        let page = client
            .aggregated_list()
            .set_project(project_id)
            .set_return_partial_success(true)
            .set_or_clear_page_token(page_token)
            .send()
            .await?;
        for (scope, list) in page.items {
            if let Some(warning) = list.warning {
                println!("{scope}: {:?}", warning.message);
            }
            for instance in list.instances {
                println!("{scope}: {:?}", instance.name);
                count += 1;
            }
        }
        if !page.unreachables.is_empty() {
            println!("unreachable scopes: {:?}", page.unreachables);
        }
        page_token = page.next_page_token.filter(|t| !t.is_empty());
        if page_token.is_none() {
            break;
        }
    }
    Ok(count)
}
// ANCHOR_END: list-all

/// Deletes a VM and waits until the operation completes.
pub async fn delete(
    client: &Instances,
    operations: &ZoneOperations,
    project_id: &str,
    zone: &str,
    name: &str,
) -> anyhow::Result<()> {
    let operation = client
        .delete()
        .set_project(project_id)
        .set_zone(zone)
        .set_instance(name)
        .send()
        .await?;
    let operation = wait_for_zone_operation(operations, project_id, zone, operation).await?;
    operation.to_result()?;
    println!("Instance {name} deleted");
    Ok(())
}
