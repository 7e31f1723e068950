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

use cloud_compute_v1::builder::zones::ClientBuilder;

/// Lists the zones in a project, logging each request.
///
/// # Parameters
/// - `builder`: the client builder, e.g. `Zones::builder()`. Tests use this
///   to configure the endpoint and credentials.
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
///   For example: `my-project`.
pub async fn sample(builder: ClientBuilder, project_id: &str) -> anyhow::Result<()> {
    // ANCHOR: init
    // Fails if the application already installed a subscriber.
    let _ = tracing_subscriber::fmt().try_init();
    // ANCHOR_END: init

    // ANCHOR: client
    let client = builder.with_tracing().build().await?;
    // ANCHOR_END: client

    let zones = client.list().set_project(project_id).send().await?;
    for zone in zones.items {
        println!("  {:?} {:?}", zone.name, zone.status);
    }
    println!("DONE");
    Ok(())
}
