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

//! Wait for Compute Engine operations.
//!
//! The client library makes a single request for each method. Mutating
//! methods return an [Operation], applications use the `wait()` method in
//! the operations clients until the operation completes.

use cloud_compute_v1::client::{GlobalOperations, ZoneOperations};
use cloud_compute_v1::model::{Operation, operation::status};

// ANCHOR: zone
/// Waits until a zonal operation completes, and returns its final state.
pub async fn wait_for_zone_operation(
    client: &ZoneOperations,
    project_id: &str,
    zone: &str,
    mut operation: Operation,
) -> anyhow::Result<Operation> {
    loop {
        if operation.status.as_deref() == Some(status::DONE) {
            return Ok(operation);
        }
        let Some(name) = operation.name.clone() else {
            return Err(anyhow::Error::msg(format!(
                "the operation name should be set, operation={operation:?}"
            )));
        };
        println!("waiting for operation {name}, progress={:?}", operation.progress);
        // `wait()` returns when the operation completes, or after about two
        // minutes, whichever happens first.
        operation = client
            .wait()
            .set_project(project_id)
            .set_zone(zone)
            .set_operation(name)
            .send()
            .await?;
    }
}
// ANCHOR_END: zone

/// Waits until a global operation completes, and returns its final state.
pub async fn wait_for_global_operation(
    client: &GlobalOperations,
    project_id: &str,
    mut operation: Operation,
) -> anyhow::Result<Operation> {
    while operation.status.as_deref() != Some(status::DONE) {
        let Some(name) = operation.name.clone() else {
            return Err(anyhow::Error::msg(format!(
                "the operation name should be set, operation={operation:?}"
            )));
        };
        operation = client
            .wait()
            .set_project(project_id)
            .set_operation(name)
            .send()
            .await?;
    }
    Ok(operation)
}
