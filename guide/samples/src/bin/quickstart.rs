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

use cloud_compute_v1::client::Instances;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
    let zone = std::env::var("COMPUTE_ZONE").unwrap_or_else(|_| "us-central1-a".to_string());
    let client = Instances::builder().build().await?;
    compute_samples::quickstart::quickstart(&client, &project_id, &zone).await
}
