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

//! Find images to boot VMs.

use cloud_compute_v1::client::Images;
use cloud_compute_v1::model::Image;

/// Returns the names of all the non-deprecated images in a project.
pub async fn list(client: &Images, project_id: &str) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut page_token = None;
    loop {
        let page = client
            .list()
            .set_project(project_id)
            // Maximum number of results per page. Higher values reduce the
            // number of requests, but increase memory usage.
            .set_max_results(100_u32)
            .set_filter("deprecated.state != DEPRECATED")
            .set_or_clear_page_token(page_token)
            .send()
            .await?;
        names.extend(page.items.into_iter().filter_map(|i| i.name));
        page_token = page.next_page_token.filter(|t| !t.is_empty());
        if page_token.is_none() {
            break;
        }
    }
    Ok(names)
}

/// Returns the latest image in an image family.
///
/// For example, `latest(client, "debian-cloud", "debian-12")`.
pub async fn latest(client: &Images, project_id: &str, family: &str) -> anyhow::Result<Image> {
    let image = client
        .get_from_family()
        .set_project(project_id)
        .set_family(family)
        .send()
        .await?;
    Ok(image)
}
