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

//! Examples showing how to examine errors returned by the service.

use cloud_compute_v1::client::Instances;
use cloud_compute_v1::model::Instance;
use gax::error::rpc::Code;

// ANCHOR: not-found
/// Returns the VM, or `None` if the VM does not exist.
pub async fn get_if_exists(
    client: &Instances,
    project_id: &str,
    zone: &str,
    name: &str,
) -> anyhow::Result<Option<Instance>> {
    let result = client
        .get()
        .set_project(project_id)
        .set_zone(zone)
        .set_instance(name)
        .send()
        .await;
    match result {
        Ok(instance) => Ok(Some(instance)),
        Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => Ok(None),
        Err(e) => {
            println!(
                "error getting VM {name}: http_status_code={:?}, status={:?}",
                e.http_status_code(),
                e.status()
            );
            Err(e.into())
        }
    }
}
// ANCHOR_END: not-found
