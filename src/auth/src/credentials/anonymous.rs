// Copyright 2024 Google LLC
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

//! Credentials that send no authentication headers.
//!
//! Some Compute Engine resources, such as the images in public image
//! projects like `debian-cloud`, can be read without authentication.

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider};
use http::HeaderMap;

/// Creates anonymous [Credentials].
///
/// # Example
/// ```
/// # use compute_auth::credentials::anonymous::Builder;
/// # tokio_test::block_on(async {
/// let credentials = Builder::new().build();
/// assert!(credentials.headers().await?.is_empty());
/// # Ok::<(), anyhow::Error>(())
/// # });
/// ```
#[derive(Debug, Default)]
pub struct Builder;

impl Builder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(self) -> Credentials {
        Credentials::from(Anonymous)
    }
}

#[derive(Debug)]
struct Anonymous;

impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_headers() -> anyhow::Result<()> {
        let credentials = Builder::new().build();
        assert!(credentials.headers().await?.is_empty());
        assert!(format!("{credentials:?}").contains("Anonymous"), "{credentials:?}");
        Ok(())
    }
}
