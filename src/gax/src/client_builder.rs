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

//! Types used to configure and create the Compute Engine clients.
//!
//! Each client (`Instances`, `Disks`, `ZoneOperations`, ...) has a
//! `builder()` function returning a [ClientBuilder]. The default
//! configuration sends requests to `https://compute.googleapis.com` using the
//! default credentials. Tests and applications running in restricted networks
//! change the endpoint or the credentials before calling
//! [build()][ClientBuilder::build]:
//!
//! ```ignore
//! let client = Instances::builder()
//!     .with_endpoint("https://compute.p.googleapis.com")
//!     .with_credentials(access_token::Builder::new(token).build()?)
//!     .build()
//!     .await?;
//! ```

/// The result of building a client.
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A client could not be created.
///
/// Client creation fails if the default credentials are misconfigured, e.g.
/// `GOOGLE_OAUTH_ACCESS_TOKEN` is set to an empty value, or if the HTTP
/// client cannot be initialized.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot load the default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("cannot create the HTTP client")]
    Transport(#[source] BoxError),
}

impl Error {
    /// The default credentials could not be loaded.
    pub fn is_default_credentials(&self) -> bool {
        matches!(self.0, ErrorKind::DefaultCredentials(_))
    }

    /// The HTTP client could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

/// Configures and creates a client.
///
/// `F` is the factory creating the client type, and `Cr` the credentials type
/// used by the client. Applications do not name these types, they obtain a
/// builder from the client's `builder()` function.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    factory: F,
    config: internal::ClientConfig<Cr>,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sends the requests to `v` instead of `https://compute.googleapis.com`.
    ///
    /// `v` includes the scheme, and optionally the port, e.g.
    /// `http://localhost:8080`. Any trailing `/` is ignored.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Uses `v` to authenticate all the requests.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Instruments each request with a [tracing] span.
    ///
    /// The span records the request and its result. Setting the
    /// `COMPUTE_RUST_LOGGING` environment variable to `true` has the same
    /// effect for all clients.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! Used by the generated clients, not part of the public API.

    /// Creates a client from its configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = super::Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The configuration collected by a [ClientBuilder][super::ClientBuilder].
    ///
    /// `None` fields use the client defaults.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::{ClientConfig, ClientFactory, new_builder};
    use super::*;
    use std::error::Error as _;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeCredentials(&'static str);

    // The fake client exposes the configuration it was built with.
    struct FakeClient(ClientConfig<FakeCredentials>);

    struct FakeFactory;
    impl ClientFactory for FakeFactory {
        type Client = FakeClient;
        type Credentials = FakeCredentials;
        async fn build(self, config: ClientConfig<FakeCredentials>) -> Result<FakeClient> {
            Ok(FakeClient(config))
        }
    }

    fn builder() -> ClientBuilder<FakeFactory, FakeCredentials> {
        new_builder(FakeFactory)
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let FakeClient(config) = builder().build().await?;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn configured() -> anyhow::Result<()> {
        let FakeClient(config) = builder()
            .with_endpoint("http://localhost:8080")
            .with_credentials(FakeCredentials("test-token"))
            .with_tracing()
            .build()
            .await?;
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.cred, Some(FakeCredentials("test-token")));
        assert!(config.tracing);
        Ok(())
    }

    #[test]
    fn default_credentials_error() {
        let error = Error::cred(std::io::Error::other("bad token"));
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{error:?}");
    }

    #[test]
    fn transport_error() {
        let error = Error::transport(std::io::Error::other("no TLS backend"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_default_credentials(), "{error:?}");
        assert!(error.to_string().contains("HTTP client"), "{error}");
    }
}
