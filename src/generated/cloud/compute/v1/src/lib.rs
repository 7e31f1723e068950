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

//! Compute Engine client library for Rust - Compute Engine v1 API
//!
//! This crate contains traits, types, and functions to interact with the
//! [Compute Engine] REST API.
//!
//! Each resource collection (instances, disks, networks, ...) has its own
//! client in the [client] module. Each method on a client returns a request
//! builder. Applications set the request parameters on the builder and then
//! call `send()`:
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use cloud_compute_v1::client::Instances;
//! let client = Instances::builder().build().await?;
//! let instance = client
//!     .get()
//!     .set_project("my-project")
//!     .set_zone("us-central1-a")
//!     .set_instance("my-instance")
//!     .send()
//!     .await?;
//! println!("{instance:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! Every method makes exactly one attempt. Mutations return an
//! [Operation][model::Operation]; use the zonal, regional, or global
//! operations clients to wait for completion, and
//! [Operation::to_result][model::Operation::to_result] to examine the outcome.
//!
//! # Features
//!
//! Each client is gated by a Cargo feature (e.g. `instances` enables
//! [client::Instances]). All the clients are enabled by default.
//! `default-tls` enables the default TLS backend of the HTTP client.
//!
//! [Compute Engine]: https://cloud.google.com/compute

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Errors carried by completed operations.
pub mod errors;

/// Traits to mock the clients in this library.
pub mod stub;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

/// The default host used by the service.
#[allow(dead_code)]
const DEFAULT_HOST: &str = "https://compute.googleapis.com";

#[allow(dead_code)]
pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.rest_header_value()
        };
    }
}
