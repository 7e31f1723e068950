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

//! Compute Engine client library for Rust - Authentication Components
//!
//! The Compute Engine clients consume an implementation of
//! [credentials::Credentials] and use these credentials to add the
//! authentication headers to each request.
//!
//! This crate does not obtain or refresh tokens. Applications obtain an access
//! token using their preferred mechanism (for example, `gcloud auth
//! print-access-token`, or a workload identity library) and wrap it with
//! [credentials::access_token::Builder]. Requests to public resources can use
//! [credentials::anonymous::Builder].

pub mod build_errors;
pub mod errors;

/// Types and functions to work with authentication [Credentials].
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
pub mod credentials;

/// A `Result` alias where the `Err` case is
/// `compute_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// The result of building credentials.
pub type BuildResult<T> = std::result::Result<T, build_errors::Error>;

pub(crate) mod headers_util;
