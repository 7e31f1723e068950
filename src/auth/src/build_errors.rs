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

//! Errors returned by the credentials builders.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The credentials could not be created.
///
/// Returned when the environment variables consulted by
/// [Builder::build][crate::credentials::Builder::build] hold invalid values,
/// or when a builder is given an empty access token.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(Kind);

#[derive(thiserror::Error, Debug)]
enum Kind {
    #[error("the `{variable}` environment variable has an invalid value")]
    Loading {
        variable: &'static str,
        #[source]
        source: BoxError,
    },
    #[error("the `{0}` value cannot be empty")]
    MissingField(&'static str),
}

impl Error {
    /// An environment variable could not be read.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, Kind::Loading { .. })
    }

    /// A required value was missing or empty.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, Kind::MissingField(_))
    }

    pub(crate) fn loading<T: Into<BoxError>>(variable: &'static str, source: T) -> Self {
        Self(Kind::Loading {
            variable,
            source: source.into(),
        })
    }

    pub(crate) fn missing_field(field: &'static str) -> Self {
        Self(Kind::MissingField(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn loading() {
        let error = Error::loading("GOOGLE_OAUTH_ACCESS_TOKEN", std::env::VarError::NotPresent);
        assert!(error.is_loading(), "{error:?}");
        assert!(!error.is_missing_field(), "{error:?}");
        assert!(error.to_string().contains("GOOGLE_OAUTH_ACCESS_TOKEN"), "{error}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<std::env::VarError>());
        assert!(source.is_some(), "{error:?}");
    }

    #[test]
    fn missing_field() {
        let error = Error::missing_field("access_token");
        assert!(error.is_missing_field(), "{error:?}");
        assert!(!error.is_loading(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("`access_token`"), "{error}");
    }
}
