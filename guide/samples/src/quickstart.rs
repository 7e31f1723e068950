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

// ANCHOR: all
use cloud_compute_v1::client::Instances;

/// Prints the name and status of every VM in a zone.
///
/// # Parameters
/// - `client`: the client used to make the requests.
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
///   For example: `my-project`.
/// - `zone`: the zone containing the VMs. For example: `us-central1-a`.
pub async fn quickstart(client: &Instances, project_id: &str, zone: &str) -> anyhow::Result<()> {
    println!("Listing instances for project {project_id} in zone {zone}");
    // ANCHOR: pages
    let mut page_token = None;
    loop {
        let page = client
            .list()
            .set_project(project_id)
            .set_zone(zone)
            .set_or_clear_page_token(page_token)
            .send()
            .await?;
        for item in page.items {
            println!("  {:?} status={:?}", item.name, item.status);
        }
        page_token = page.next_page_token.filter(|t| !t.is_empty());
        if page_token.is_none() {
            break;
        }
    }
    // ANCHOR_END: pages
    println!("DONE");
    Ok(())
}
// ANCHOR_END: all
