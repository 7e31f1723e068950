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

//! Compute Engine client helpers.
//!
//! This crate contains the types shared by every client in the Compute Engine
//! client library for Rust: the error type returned by all requests, the
//! per-request options, the response wrapper, and the generic client builder.
//!
//! Most applications only need the [Result] alias and, occasionally, the
//! predicates in [error::Error] to decide how to handle a failure.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping REST requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

pub mod client_builder;
pub mod options;
pub mod response;
