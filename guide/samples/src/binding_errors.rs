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

//! Examples showing how request parameters are validated.

use cloud_compute_v1::client::Instances;
use std::error::Error as _;

/// Shows the error returned when a required parameter is missing.
///
/// No request is sent to the service in this case.
pub async fn missing_zone(client: &Instances, project_id: &str) -> anyhow::Result<()> {
    // ANCHOR: inspect
    let result = client
        .get()
        .set_project(project_id)
        // .set_zone("us-central1-a")
        .set_instance("my-instance")
        .send()
        .await;

    let e = match result {
        Ok(instance) => {
            return Err(anyhow::Error::msg(format!(
                "expected a binding error, got {instance:?}"
            )));
        }
        Err(e) => e,
    };
    if !e.is_binding() {
        return Err(anyhow::Error::msg(format!("expected a binding error, got {e:?}")));
    }
    println!("binding error: {e}, source={:?}", e.source());
    // ANCHOR_END: inspect
    Ok(())
}
