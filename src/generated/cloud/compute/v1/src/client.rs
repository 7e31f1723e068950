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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Addresses;
/// let client = Addresses::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `addresses` resource.
///
/// # Configuration
///
/// To configure `Addresses` use the `with_*` methods in the type returned
/// by [builder()][Addresses::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::addresses::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::addresses::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Addresses` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Addresses` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "addresses")]
#[derive(Clone, Debug)]
pub struct Addresses {
    inner: std::sync::Arc<dyn super::stub::dynamic::Addresses>,
}

#[cfg(feature = "addresses")]
impl Addresses {
    /// Returns a builder for [Addresses].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Addresses;
    /// let client = Addresses::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::addresses::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::addresses::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Addresses + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Addresses>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Addresses> {
        super::transport::Addresses::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Addresses> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Addresses::new)
    }

    /// Retrieves an aggregated list of addresses.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::addresses::AggregatedList {
        super::builder::addresses::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified Address resource.
    pub fn delete(&self) -> super::builder::addresses::Delete {
        super::builder::addresses::Delete::new(self.inner.clone())
    }

    /// Returns the specified Address resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Addresses;
    /// async fn sample(client: &Addresses, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_address("my-address")
    ///         .set_project(project_id)
    ///         .set_region("my-region")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::addresses::Get {
        super::builder::addresses::Get::new(self.inner.clone())
    }

    /// Creates an Address resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::addresses::Insert {
        super::builder::addresses::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of addresses contained within the specified scope.
    pub fn list(&self) -> super::builder::addresses::List {
        super::builder::addresses::List::new(self.inner.clone())
    }

    /// Moves the specified address resource.
    pub fn r#move(&self) -> super::builder::addresses::Move {
        super::builder::addresses::Move::new(self.inner.clone())
    }

    /// Sets the labels on an Address. To learn more about labels, read the
    /// Labeling Resources documentation.
    pub fn set_labels(&self) -> super::builder::addresses::SetLabels {
        super::builder::addresses::SetLabels::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::GlobalAddresses;
/// let client = GlobalAddresses::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `globalAddresses` resource.
///
/// # Configuration
///
/// To configure `GlobalAddresses` use the `with_*` methods in the type returned
/// by [builder()][GlobalAddresses::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::global_addresses::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::global_addresses::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `GlobalAddresses` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `GlobalAddresses` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "global-addresses")]
#[derive(Clone, Debug)]
pub struct GlobalAddresses {
    inner: std::sync::Arc<dyn super::stub::dynamic::GlobalAddresses>,
}

#[cfg(feature = "global-addresses")]
impl GlobalAddresses {
    /// Returns a builder for [GlobalAddresses].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::GlobalAddresses;
    /// let client = GlobalAddresses::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::global_addresses::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::global_addresses::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::GlobalAddresses + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::GlobalAddresses>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::GlobalAddresses> {
        super::transport::GlobalAddresses::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::GlobalAddresses> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::GlobalAddresses::new)
    }

    /// Deletes the specified Address resource.
    pub fn delete(&self) -> super::builder::global_addresses::Delete {
        super::builder::global_addresses::Delete::new(self.inner.clone())
    }

    /// Returns the specified Address resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::GlobalAddresses;
    /// async fn sample(client: &GlobalAddresses, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_address("my-address")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::global_addresses::Get {
        super::builder::global_addresses::Get::new(self.inner.clone())
    }

    /// Creates an Address resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::global_addresses::Insert {
        super::builder::global_addresses::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of addresses contained within the specified scope.
    pub fn list(&self) -> super::builder::global_addresses::List {
        super::builder::global_addresses::List::new(self.inner.clone())
    }

    /// Moves the specified address resource from one project to another
    /// project.
    pub fn r#move(&self) -> super::builder::global_addresses::Move {
        super::builder::global_addresses::Move::new(self.inner.clone())
    }

    /// Sets the labels on a GlobalAddress. To learn more about labels, read the
    /// Labeling Resources documentation.
    pub fn set_labels(&self) -> super::builder::global_addresses::SetLabels {
        super::builder::global_addresses::SetLabels::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Disks;
/// let client = Disks::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `disks` resource.
///
/// # Configuration
///
/// To configure `Disks` use the `with_*` methods in the type returned
/// by [builder()][Disks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::disks::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::disks::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Disks` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Disks` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "disks")]
#[derive(Clone, Debug)]
pub struct Disks {
    inner: std::sync::Arc<dyn super::stub::dynamic::Disks>,
}

#[cfg(feature = "disks")]
impl Disks {
    /// Returns a builder for [Disks].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Disks;
    /// let client = Disks::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::disks::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::disks::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Disks + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Disks>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Disks> {
        super::transport::Disks::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Disks> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Disks::new)
    }

    /// Retrieves an aggregated list of persistent disks.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::disks::AggregatedList {
        super::builder::disks::AggregatedList::new(self.inner.clone())
    }

    /// Creates a snapshot of a specified persistent disk.
    ///
    /// For regular snapshot creation, consider using
    /// [Snapshots::insert][crate::client::Snapshots::insert] instead, as that
    /// method supports more features, such as creating snapshots in a project
    /// different from the source disk project.
    pub fn create_snapshot(&self) -> super::builder::disks::CreateSnapshot {
        super::builder::disks::CreateSnapshot::new(self.inner.clone())
    }

    /// Deletes the specified Disk resource.
    pub fn delete(&self) -> super::builder::disks::Delete {
        super::builder::disks::Delete::new(self.inner.clone())
    }

    /// Resizes the specified persistent disk. You can only increase the size of
    /// the disk.
    pub fn resize(&self) -> super::builder::disks::Resize {
        super::builder::disks::Resize::new(self.inner.clone())
    }

    /// Returns the specified Disk resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Disks;
    /// async fn sample(client: &Disks, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_disk("my-disk")
    ///         .set_project(project_id)
    ///         .set_zone("my-zone")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::disks::Get {
        super::builder::disks::Get::new(self.inner.clone())
    }

    /// Creates a Disk resource in the specified project using the data included
    /// in the request.
    pub fn insert(&self) -> super::builder::disks::Insert {
        super::builder::disks::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of persistent disks contained within the specified
    /// scope.
    pub fn list(&self) -> super::builder::disks::List {
        super::builder::disks::List::new(self.inner.clone())
    }

    /// Sets the labels on a disk. To learn more about labels, read the Labeling
    /// Resources documentation.
    pub fn set_labels(&self) -> super::builder::disks::SetLabels {
        super::builder::disks::SetLabels::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Instances;
/// let client = Instances::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `instances` resource.
///
/// # Configuration
///
/// To configure `Instances` use the `with_*` methods in the type returned
/// by [builder()][Instances::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::instances::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::instances::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Instances` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Instances` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "instances")]
#[derive(Clone, Debug)]
pub struct Instances {
    inner: std::sync::Arc<dyn super::stub::dynamic::Instances>,
}

#[cfg(feature = "instances")]
impl Instances {
    /// Returns a builder for [Instances].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Instances;
    /// let client = Instances::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::instances::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::instances::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Instances + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Instances>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Instances> {
        super::transport::Instances::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Instances> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Instances::new)
    }

    /// Retrieves an aggregated list of instances.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::instances::AggregatedList {
        super::builder::instances::AggregatedList::new(self.inner.clone())
    }

    /// Attaches an existing Disk resource to an instance. You must first create
    /// the disk before you can attach it.
    pub fn attach_disk(&self) -> super::builder::instances::AttachDisk {
        super::builder::instances::AttachDisk::new(self.inner.clone())
    }

    /// Deletes the specified Instance resource.
    pub fn delete(&self) -> super::builder::instances::Delete {
        super::builder::instances::Delete::new(self.inner.clone())
    }

    /// Detaches a disk from an instance.
    pub fn detach_disk(&self) -> super::builder::instances::DetachDisk {
        super::builder::instances::DetachDisk::new(self.inner.clone())
    }

    /// Performs a reset on the instance. This is a hard reset. The VM does not
    /// do a graceful shutdown.
    pub fn reset(&self) -> super::builder::instances::Reset {
        super::builder::instances::Reset::new(self.inner.clone())
    }

    /// Resumes an instance that was suspended using the
    /// [suspend][crate::client::Instances::suspend] method.
    pub fn resume(&self) -> super::builder::instances::Resume {
        super::builder::instances::Resume::new(self.inner.clone())
    }

    /// Returns the specified Instance resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Instances;
    /// async fn sample(client: &Instances, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_instance("my-instance")
    ///         .set_project(project_id)
    ///         .set_zone("my-zone")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::instances::Get {
        super::builder::instances::Get::new(self.inner.clone())
    }

    /// Returns the last 1 MB of serial port output from the specified instance.
    pub fn get_serial_port_output(&self) -> super::builder::instances::GetSerialPortOutput {
        super::builder::instances::GetSerialPortOutput::new(self.inner.clone())
    }

    /// Creates an Instance resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::instances::Insert {
        super::builder::instances::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of instances contained within the specified scope.
    pub fn list(&self) -> super::builder::instances::List {
        super::builder::instances::List::new(self.inner.clone())
    }

    /// Sets labels on an instance.
    pub fn set_labels(&self) -> super::builder::instances::SetLabels {
        super::builder::instances::SetLabels::new(self.inner.clone())
    }

    /// Changes the machine type for a stopped instance to the machine type
    /// specified in the request.
    pub fn set_machine_type(&self) -> super::builder::instances::SetMachineType {
        super::builder::instances::SetMachineType::new(self.inner.clone())
    }

    /// Sets metadata for the specified instance to the data included in the
    /// request.
    pub fn set_metadata(&self) -> super::builder::instances::SetMetadata {
        super::builder::instances::SetMetadata::new(self.inner.clone())
    }

    /// Sets network tags for the specified instance to the data included in the
    /// request.
    pub fn set_tags(&self) -> super::builder::instances::SetTags {
        super::builder::instances::SetTags::new(self.inner.clone())
    }

    /// Starts an instance that was stopped using the
    /// [stop][crate::client::Instances::stop] method.
    pub fn start(&self) -> super::builder::instances::Start {
        super::builder::instances::Start::new(self.inner.clone())
    }

    /// Stops a running instance, shutting it down cleanly, and allows you to
    /// restart the instance at a later time.
    ///
    /// Stopped instances do not incur VM usage charges while they are stopped.
    /// However, resources that the VM is using, such as persistent disks and static
    /// IP addresses, will continue to be charged until they are deleted.
    pub fn stop(&self) -> super::builder::instances::Stop {
        super::builder::instances::Stop::new(self.inner.clone())
    }

    /// This method suspends a running instance, saving its state to persistent
    /// storage, and allows you to resume the instance at a later time.
    pub fn suspend(&self) -> super::builder::instances::Suspend {
        super::builder::instances::Suspend::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Networks;
/// let client = Networks::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `networks` resource.
///
/// # Configuration
///
/// To configure `Networks` use the `with_*` methods in the type returned
/// by [builder()][Networks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::networks::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::networks::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Networks` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Networks` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "networks")]
#[derive(Clone, Debug)]
pub struct Networks {
    inner: std::sync::Arc<dyn super::stub::dynamic::Networks>,
}

#[cfg(feature = "networks")]
impl Networks {
    /// Returns a builder for [Networks].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Networks;
    /// let client = Networks::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::networks::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::networks::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Networks + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Networks>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Networks> {
        super::transport::Networks::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Networks> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Networks::new)
    }

    /// Adds a peering to the specified network.
    pub fn add_peering(&self) -> super::builder::networks::AddPeering {
        super::builder::networks::AddPeering::new(self.inner.clone())
    }

    /// Deletes the specified Network resource.
    pub fn delete(&self) -> super::builder::networks::Delete {
        super::builder::networks::Delete::new(self.inner.clone())
    }

    /// Removes a peering from the specified network.
    pub fn remove_peering(&self) -> super::builder::networks::RemovePeering {
        super::builder::networks::RemovePeering::new(self.inner.clone())
    }

    /// Returns the specified Network resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Networks;
    /// async fn sample(client: &Networks, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_network("my-network")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::networks::Get {
        super::builder::networks::Get::new(self.inner.clone())
    }

    /// Creates a Network resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::networks::Insert {
        super::builder::networks::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of networks contained within the specified scope.
    pub fn list(&self) -> super::builder::networks::List {
        super::builder::networks::List::new(self.inner.clone())
    }

    /// Patches the specified network with the data included in the request.
    /// Only `routingConfig` can be modified.
    pub fn patch(&self) -> super::builder::networks::Patch {
        super::builder::networks::Patch::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Subnetworks;
/// let client = Subnetworks::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `subnetworks` resource.
///
/// # Configuration
///
/// To configure `Subnetworks` use the `with_*` methods in the type returned
/// by [builder()][Subnetworks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::subnetworks::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::subnetworks::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Subnetworks` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Subnetworks` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "subnetworks")]
#[derive(Clone, Debug)]
pub struct Subnetworks {
    inner: std::sync::Arc<dyn super::stub::dynamic::Subnetworks>,
}

#[cfg(feature = "subnetworks")]
impl Subnetworks {
    /// Returns a builder for [Subnetworks].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Subnetworks;
    /// let client = Subnetworks::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::subnetworks::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::subnetworks::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Subnetworks + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Subnetworks>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Subnetworks> {
        super::transport::Subnetworks::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Subnetworks> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Subnetworks::new)
    }

    /// Retrieves an aggregated list of subnetworks.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::subnetworks::AggregatedList {
        super::builder::subnetworks::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified Subnetwork resource.
    pub fn delete(&self) -> super::builder::subnetworks::Delete {
        super::builder::subnetworks::Delete::new(self.inner.clone())
    }

    /// Expands the IP CIDR range of the subnetwork to a specified value.
    pub fn expand_ip_cidr_range(&self) -> super::builder::subnetworks::ExpandIpCidrRange {
        super::builder::subnetworks::ExpandIpCidrRange::new(self.inner.clone())
    }

    /// Returns the specified Subnetwork resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Subnetworks;
    /// async fn sample(client: &Subnetworks, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .set_region("my-region")
    ///         .set_subnetwork("my-subnetwork")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::subnetworks::Get {
        super::builder::subnetworks::Get::new(self.inner.clone())
    }

    /// Creates a Subnetwork resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::subnetworks::Insert {
        super::builder::subnetworks::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of subnetworks contained within the specified scope.
    pub fn list(&self) -> super::builder::subnetworks::List {
        super::builder::subnetworks::List::new(self.inner.clone())
    }

    /// Patches the specified subnetwork with the data included in the request.
    /// Only certain fields can be updated with a patch request as indicated in
    /// the field descriptions. You must specify the current fingerprint of the
    /// subnetwork resource being patched.
    pub fn patch(&self) -> super::builder::subnetworks::Patch {
        super::builder::subnetworks::Patch::new(self.inner.clone())
    }

    /// Set whether VMs in this subnet can access Google services without
    /// assigning external IP addresses through Private Google Access.
    pub fn set_private_ip_google_access(&self) -> super::builder::subnetworks::SetPrivateIpGoogleAccess {
        super::builder::subnetworks::SetPrivateIpGoogleAccess::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Firewalls;
/// let client = Firewalls::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `firewalls` resource.
///
/// # Configuration
///
/// To configure `Firewalls` use the `with_*` methods in the type returned
/// by [builder()][Firewalls::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::firewalls::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firewalls::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Firewalls` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Firewalls` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "firewalls")]
#[derive(Clone, Debug)]
pub struct Firewalls {
    inner: std::sync::Arc<dyn super::stub::dynamic::Firewalls>,
}

#[cfg(feature = "firewalls")]
impl Firewalls {
    /// Returns a builder for [Firewalls].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Firewalls;
    /// let client = Firewalls::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::firewalls::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::firewalls::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Firewalls + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Firewalls>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Firewalls> {
        super::transport::Firewalls::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Firewalls> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Firewalls::new)
    }

    /// Deletes the specified Firewall resource.
    pub fn delete(&self) -> super::builder::firewalls::Delete {
        super::builder::firewalls::Delete::new(self.inner.clone())
    }

    /// Returns the specified Firewall resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Firewalls;
    /// async fn sample(client: &Firewalls, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_firewall("my-firewall")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::firewalls::Get {
        super::builder::firewalls::Get::new(self.inner.clone())
    }

    /// Creates a Firewall resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::firewalls::Insert {
        super::builder::firewalls::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of firewall rules contained within the specified scope.
    pub fn list(&self) -> super::builder::firewalls::List {
        super::builder::firewalls::List::new(self.inner.clone())
    }

    /// Updates the specified firewall rule with the data included in the
    /// request. This method supports PATCH semantics and uses the JSON merge
    /// patch format and processing rules.
    pub fn patch(&self) -> super::builder::firewalls::Patch {
        super::builder::firewalls::Patch::new(self.inner.clone())
    }

    /// Updates the specified firewall rule with the data included in the
    /// request. Note that all fields will be updated if using PUT, even fields
    /// that are not specified.
    pub fn update(&self) -> super::builder::firewalls::Update {
        super::builder::firewalls::Update::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::ForwardingRules;
/// let client = ForwardingRules::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `forwardingRules` resource.
///
/// # Configuration
///
/// To configure `ForwardingRules` use the `with_*` methods in the type returned
/// by [builder()][ForwardingRules::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::forwarding_rules::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::forwarding_rules::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `ForwardingRules` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `ForwardingRules` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "forwarding-rules")]
#[derive(Clone, Debug)]
pub struct ForwardingRules {
    inner: std::sync::Arc<dyn super::stub::dynamic::ForwardingRules>,
}

#[cfg(feature = "forwarding-rules")]
impl ForwardingRules {
    /// Returns a builder for [ForwardingRules].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::ForwardingRules;
    /// let client = ForwardingRules::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::forwarding_rules::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::forwarding_rules::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ForwardingRules + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::ForwardingRules>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ForwardingRules> {
        super::transport::ForwardingRules::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ForwardingRules> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ForwardingRules::new)
    }

    /// Retrieves an aggregated list of forwarding rules.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::forwarding_rules::AggregatedList {
        super::builder::forwarding_rules::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified ForwardingRule resource.
    pub fn delete(&self) -> super::builder::forwarding_rules::Delete {
        super::builder::forwarding_rules::Delete::new(self.inner.clone())
    }

    /// Returns the specified ForwardingRule resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::ForwardingRules;
    /// async fn sample(client: &ForwardingRules, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_forwarding_rule("my-forwarding-rule")
    ///         .set_project(project_id)
    ///         .set_region("my-region")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::forwarding_rules::Get {
        super::builder::forwarding_rules::Get::new(self.inner.clone())
    }

    /// Creates a ForwardingRule resource in the specified project using the
    /// data included in the request.
    pub fn insert(&self) -> super::builder::forwarding_rules::Insert {
        super::builder::forwarding_rules::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of forwarding rules contained within the specified
    /// scope.
    pub fn list(&self) -> super::builder::forwarding_rules::List {
        super::builder::forwarding_rules::List::new(self.inner.clone())
    }

    /// Updates the specified forwarding rule with the data included in the
    /// request. This method supports PATCH semantics and uses the JSON merge
    /// patch format and processing rules. Currently, you can only patch the
    /// network_tier field.
    pub fn patch(&self) -> super::builder::forwarding_rules::Patch {
        super::builder::forwarding_rules::Patch::new(self.inner.clone())
    }

    /// Sets the labels on the specified resource. To learn more about labels,
    /// read the Labeling Resources documentation.
    pub fn set_labels(&self) -> super::builder::forwarding_rules::SetLabels {
        super::builder::forwarding_rules::SetLabels::new(self.inner.clone())
    }

    /// Changes target URL for forwarding rule. The new target should be of the
    /// same type as the old target.
    pub fn set_target(&self) -> super::builder::forwarding_rules::SetTarget {
        super::builder::forwarding_rules::SetTarget::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::BackendServices;
/// let client = BackendServices::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `backendServices` resource.
///
/// # Configuration
///
/// To configure `BackendServices` use the `with_*` methods in the type returned
/// by [builder()][BackendServices::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::backend_services::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::backend_services::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `BackendServices` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `BackendServices` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "backend-services")]
#[derive(Clone, Debug)]
pub struct BackendServices {
    inner: std::sync::Arc<dyn super::stub::dynamic::BackendServices>,
}

#[cfg(feature = "backend-services")]
impl BackendServices {
    /// Returns a builder for [BackendServices].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::BackendServices;
    /// let client = BackendServices::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::backend_services::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::backend_services::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::BackendServices + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::BackendServices>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::BackendServices> {
        super::transport::BackendServices::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::BackendServices> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::BackendServices::new)
    }

    /// Retrieves an aggregated list of backend services.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::backend_services::AggregatedList {
        super::builder::backend_services::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified BackendService resource.
    pub fn delete(&self) -> super::builder::backend_services::Delete {
        super::builder::backend_services::Delete::new(self.inner.clone())
    }

    /// Returns the specified BackendService resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::BackendServices;
    /// async fn sample(client: &BackendServices, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_backend_service("my-backend-service")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::backend_services::Get {
        super::builder::backend_services::Get::new(self.inner.clone())
    }

    /// Gets the most recent health check results for this BackendService.
    pub fn get_health(&self) -> super::builder::backend_services::GetHealth {
        super::builder::backend_services::GetHealth::new(self.inner.clone())
    }

    /// Creates a BackendService resource in the specified project using the
    /// data included in the request.
    pub fn insert(&self) -> super::builder::backend_services::Insert {
        super::builder::backend_services::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of backend services contained within the specified
    /// scope.
    pub fn list(&self) -> super::builder::backend_services::List {
        super::builder::backend_services::List::new(self.inner.clone())
    }

    /// Patches the specified BackendService resource with the data included in
    /// the request. This method supports PATCH semantics and uses the JSON
    /// merge patch format and processing rules.
    pub fn patch(&self) -> super::builder::backend_services::Patch {
        super::builder::backend_services::Patch::new(self.inner.clone())
    }

    /// Updates the specified BackendService resource with the data included in
    /// the request.
    pub fn update(&self) -> super::builder::backend_services::Update {
        super::builder::backend_services::Update::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::HealthChecks;
/// let client = HealthChecks::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `healthChecks` resource.
///
/// # Configuration
///
/// To configure `HealthChecks` use the `with_*` methods in the type returned
/// by [builder()][HealthChecks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::health_checks::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::health_checks::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `HealthChecks` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `HealthChecks` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "health-checks")]
#[derive(Clone, Debug)]
pub struct HealthChecks {
    inner: std::sync::Arc<dyn super::stub::dynamic::HealthChecks>,
}

#[cfg(feature = "health-checks")]
impl HealthChecks {
    /// Returns a builder for [HealthChecks].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::HealthChecks;
    /// let client = HealthChecks::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::health_checks::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::health_checks::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::HealthChecks + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::HealthChecks>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::HealthChecks> {
        super::transport::HealthChecks::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::HealthChecks> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::HealthChecks::new)
    }

    /// Retrieves an aggregated list of health checks.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::health_checks::AggregatedList {
        super::builder::health_checks::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified HealthCheck resource.
    pub fn delete(&self) -> super::builder::health_checks::Delete {
        super::builder::health_checks::Delete::new(self.inner.clone())
    }

    /// Returns the specified HealthCheck resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::HealthChecks;
    /// async fn sample(client: &HealthChecks, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_health_check("my-health-check")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::health_checks::Get {
        super::builder::health_checks::Get::new(self.inner.clone())
    }

    /// Creates a HealthCheck resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::health_checks::Insert {
        super::builder::health_checks::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of health checks contained within the specified scope.
    pub fn list(&self) -> super::builder::health_checks::List {
        super::builder::health_checks::List::new(self.inner.clone())
    }

    /// Updates a HealthCheck resource in the specified project using the data
    /// included in the request. This method supports PATCH semantics and uses
    /// the JSON merge patch format and processing rules.
    pub fn patch(&self) -> super::builder::health_checks::Patch {
        super::builder::health_checks::Patch::new(self.inner.clone())
    }

    /// Updates a HealthCheck resource in the specified project using the data
    /// included in the request.
    pub fn update(&self) -> super::builder::health_checks::Update {
        super::builder::health_checks::Update::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::TargetPools;
/// let client = TargetPools::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `targetPools` resource.
///
/// # Configuration
///
/// To configure `TargetPools` use the `with_*` methods in the type returned
/// by [builder()][TargetPools::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::target_pools::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::target_pools::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `TargetPools` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `TargetPools` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "target-pools")]
#[derive(Clone, Debug)]
pub struct TargetPools {
    inner: std::sync::Arc<dyn super::stub::dynamic::TargetPools>,
}

#[cfg(feature = "target-pools")]
impl TargetPools {
    /// Returns a builder for [TargetPools].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::TargetPools;
    /// let client = TargetPools::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::target_pools::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::target_pools::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::TargetPools + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::TargetPools>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::TargetPools> {
        super::transport::TargetPools::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::TargetPools> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::TargetPools::new)
    }

    /// Adds an instance to a target pool.
    pub fn add_instance(&self) -> super::builder::target_pools::AddInstance {
        super::builder::target_pools::AddInstance::new(self.inner.clone())
    }

    /// Retrieves an aggregated list of target pools.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::target_pools::AggregatedList {
        super::builder::target_pools::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified TargetPool resource.
    pub fn delete(&self) -> super::builder::target_pools::Delete {
        super::builder::target_pools::Delete::new(self.inner.clone())
    }

    /// Removes instance URL from a target pool.
    pub fn remove_instance(&self) -> super::builder::target_pools::RemoveInstance {
        super::builder::target_pools::RemoveInstance::new(self.inner.clone())
    }

    /// Returns the specified TargetPool resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::TargetPools;
    /// async fn sample(client: &TargetPools, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .set_region("my-region")
    ///         .set_target_pool("my-target-pool")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::target_pools::Get {
        super::builder::target_pools::Get::new(self.inner.clone())
    }

    /// Gets the most recent health check results for each IP for the instance
    /// that is referenced by the given target pool.
    pub fn get_health(&self) -> super::builder::target_pools::GetHealth {
        super::builder::target_pools::GetHealth::new(self.inner.clone())
    }

    /// Creates a TargetPool resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::target_pools::Insert {
        super::builder::target_pools::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of target pools contained within the specified scope.
    pub fn list(&self) -> super::builder::target_pools::List {
        super::builder::target_pools::List::new(self.inner.clone())
    }

    /// Changes a backup target pool's configurations.
    pub fn set_backup(&self) -> super::builder::target_pools::SetBackup {
        super::builder::target_pools::SetBackup::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::UrlMaps;
/// let client = UrlMaps::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `urlMaps` resource.
///
/// # Configuration
///
/// To configure `UrlMaps` use the `with_*` methods in the type returned
/// by [builder()][UrlMaps::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::url_maps::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::url_maps::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `UrlMaps` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `UrlMaps` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "url-maps")]
#[derive(Clone, Debug)]
pub struct UrlMaps {
    inner: std::sync::Arc<dyn super::stub::dynamic::UrlMaps>,
}

#[cfg(feature = "url-maps")]
impl UrlMaps {
    /// Returns a builder for [UrlMaps].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::UrlMaps;
    /// let client = UrlMaps::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::url_maps::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::url_maps::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::UrlMaps + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::UrlMaps>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::UrlMaps> {
        super::transport::UrlMaps::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::UrlMaps> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::UrlMaps::new)
    }

    /// Deletes the specified UrlMap resource.
    pub fn delete(&self) -> super::builder::url_maps::Delete {
        super::builder::url_maps::Delete::new(self.inner.clone())
    }

    /// Returns the specified UrlMap resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::UrlMaps;
    /// async fn sample(client: &UrlMaps, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .set_url_map("my-url-map")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::url_maps::Get {
        super::builder::url_maps::Get::new(self.inner.clone())
    }

    /// Creates an UrlMap resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::url_maps::Insert {
        super::builder::url_maps::Insert::new(self.inner.clone())
    }

    /// Initiates a cache invalidation operation, invalidating the specified
    /// path, scoped to the specified UrlMap.
    pub fn invalidate_cache(&self) -> super::builder::url_maps::InvalidateCache {
        super::builder::url_maps::InvalidateCache::new(self.inner.clone())
    }

    /// Retrieves a list of URL maps contained within the specified scope.
    pub fn list(&self) -> super::builder::url_maps::List {
        super::builder::url_maps::List::new(self.inner.clone())
    }

    /// Patches the specified UrlMap resource with the data included in the
    /// request. This method supports PATCH semantics and uses the JSON merge
    /// patch format and processing rules.
    pub fn patch(&self) -> super::builder::url_maps::Patch {
        super::builder::url_maps::Patch::new(self.inner.clone())
    }

    /// Updates the specified UrlMap resource with the data included in the
    /// request.
    pub fn update(&self) -> super::builder::url_maps::Update {
        super::builder::url_maps::Update::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Images;
/// let client = Images::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `images` resource.
///
/// # Configuration
///
/// To configure `Images` use the `with_*` methods in the type returned
/// by [builder()][Images::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::images::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::images::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Images` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Images` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "images")]
#[derive(Clone, Debug)]
pub struct Images {
    inner: std::sync::Arc<dyn super::stub::dynamic::Images>,
}

#[cfg(feature = "images")]
impl Images {
    /// Returns a builder for [Images].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Images;
    /// let client = Images::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::images::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::images::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Images + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Images>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Images> {
        super::transport::Images::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Images> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Images::new)
    }

    /// Deletes the specified Image resource.
    pub fn delete(&self) -> super::builder::images::Delete {
        super::builder::images::Delete::new(self.inner.clone())
    }

    /// Sets the deprecation status of an image.
    ///
    /// If an empty request body is given, clears the deprecation status
    /// instead.
    pub fn deprecate(&self) -> super::builder::images::Deprecate {
        super::builder::images::Deprecate::new(self.inner.clone())
    }

    /// Returns the specified Image resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Images;
    /// async fn sample(client: &Images, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_image("my-image")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::images::Get {
        super::builder::images::Get::new(self.inner.clone())
    }

    /// Returns the latest image that is part of an image family and is not
    /// deprecated.
    pub fn get_from_family(&self) -> super::builder::images::GetFromFamily {
        super::builder::images::GetFromFamily::new(self.inner.clone())
    }

    /// Creates an Image resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::images::Insert {
        super::builder::images::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of images contained within the specified scope.
    pub fn list(&self) -> super::builder::images::List {
        super::builder::images::List::new(self.inner.clone())
    }

    /// Sets the labels on an image. To learn more about labels, read the
    /// Labeling Resources documentation.
    pub fn set_labels(&self) -> super::builder::images::SetLabels {
        super::builder::images::SetLabels::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Snapshots;
/// let client = Snapshots::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `snapshots` resource.
///
/// # Configuration
///
/// To configure `Snapshots` use the `with_*` methods in the type returned
/// by [builder()][Snapshots::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::snapshots::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::snapshots::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Snapshots` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Snapshots` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "snapshots")]
#[derive(Clone, Debug)]
pub struct Snapshots {
    inner: std::sync::Arc<dyn super::stub::dynamic::Snapshots>,
}

#[cfg(feature = "snapshots")]
impl Snapshots {
    /// Returns a builder for [Snapshots].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Snapshots;
    /// let client = Snapshots::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::snapshots::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::snapshots::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Snapshots + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Snapshots>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Snapshots> {
        super::transport::Snapshots::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Snapshots> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Snapshots::new)
    }

    /// Deletes the specified Snapshot resource.
    pub fn delete(&self) -> super::builder::snapshots::Delete {
        super::builder::snapshots::Delete::new(self.inner.clone())
    }

    /// Returns the specified Snapshot resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Snapshots;
    /// async fn sample(client: &Snapshots, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .set_snapshot("my-snapshot")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::snapshots::Get {
        super::builder::snapshots::Get::new(self.inner.clone())
    }

    /// Creates a Snapshot resource in the specified project using the data
    /// included in the request.
    pub fn insert(&self) -> super::builder::snapshots::Insert {
        super::builder::snapshots::Insert::new(self.inner.clone())
    }

    /// Retrieves a list of snapshots contained within the specified scope.
    pub fn list(&self) -> super::builder::snapshots::List {
        super::builder::snapshots::List::new(self.inner.clone())
    }

    /// Sets the labels on a snapshot. To learn more about labels, read the
    /// Labeling Resources documentation.
    pub fn set_labels(&self) -> super::builder::snapshots::SetLabels {
        super::builder::snapshots::SetLabels::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::MachineTypes;
/// let client = MachineTypes::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `machineTypes` resource.
///
/// # Configuration
///
/// To configure `MachineTypes` use the `with_*` methods in the type returned
/// by [builder()][MachineTypes::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::machine_types::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::machine_types::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `MachineTypes` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `MachineTypes` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "machine-types")]
#[derive(Clone, Debug)]
pub struct MachineTypes {
    inner: std::sync::Arc<dyn super::stub::dynamic::MachineTypes>,
}

#[cfg(feature = "machine-types")]
impl MachineTypes {
    /// Returns a builder for [MachineTypes].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::MachineTypes;
    /// let client = MachineTypes::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::machine_types::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::machine_types::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::MachineTypes + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::MachineTypes>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::MachineTypes> {
        super::transport::MachineTypes::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::MachineTypes> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::MachineTypes::new)
    }

    /// Retrieves an aggregated list of machine types.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::machine_types::AggregatedList {
        super::builder::machine_types::AggregatedList::new(self.inner.clone())
    }

    /// Returns the specified machine type.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::MachineTypes;
    /// async fn sample(client: &MachineTypes, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_machine_type("my-machine-type")
    ///         .set_project(project_id)
    ///         .set_zone("my-zone")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::machine_types::Get {
        super::builder::machine_types::Get::new(self.inner.clone())
    }

    /// Retrieves a list of machine types available to the specified project.
    pub fn list(&self) -> super::builder::machine_types::List {
        super::builder::machine_types::List::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Zones;
/// let client = Zones::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `zones` resource.
///
/// # Configuration
///
/// To configure `Zones` use the `with_*` methods in the type returned
/// by [builder()][Zones::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::zones::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::zones::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Zones` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Zones` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "zones")]
#[derive(Clone, Debug)]
pub struct Zones {
    inner: std::sync::Arc<dyn super::stub::dynamic::Zones>,
}

#[cfg(feature = "zones")]
impl Zones {
    /// Returns a builder for [Zones].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Zones;
    /// let client = Zones::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::zones::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::zones::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Zones + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Zones>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Zones> {
        super::transport::Zones::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Zones> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Zones::new)
    }

    /// Returns the specified Zone resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Zones;
    /// async fn sample(client: &Zones, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .set_zone("my-zone")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::zones::Get {
        super::builder::zones::Get::new(self.inner.clone())
    }

    /// Retrieves the list of Zone resources available to the specified project.
    pub fn list(&self) -> super::builder::zones::List {
        super::builder::zones::List::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Regions;
/// let client = Regions::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `regions` resource.
///
/// # Configuration
///
/// To configure `Regions` use the `with_*` methods in the type returned
/// by [builder()][Regions::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::regions::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::regions::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Regions` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Regions` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "regions")]
#[derive(Clone, Debug)]
pub struct Regions {
    inner: std::sync::Arc<dyn super::stub::dynamic::Regions>,
}

#[cfg(feature = "regions")]
impl Regions {
    /// Returns a builder for [Regions].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Regions;
    /// let client = Regions::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::regions::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::regions::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Regions + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Regions>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Regions> {
        super::transport::Regions::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Regions> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Regions::new)
    }

    /// Returns the specified Region resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Regions;
    /// async fn sample(client: &Regions, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .set_region("my-region")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::regions::Get {
        super::builder::regions::Get::new(self.inner.clone())
    }

    /// Retrieves the list of region resources available to the specified
    /// project.
    pub fn list(&self) -> super::builder::regions::List {
        super::builder::regions::List::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::ZoneOperations;
/// let client = ZoneOperations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `zoneOperations` resource.
///
/// # Configuration
///
/// To configure `ZoneOperations` use the `with_*` methods in the type returned
/// by [builder()][ZoneOperations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::zone_operations::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::zone_operations::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `ZoneOperations` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `ZoneOperations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "zone-operations")]
#[derive(Clone, Debug)]
pub struct ZoneOperations {
    inner: std::sync::Arc<dyn super::stub::dynamic::ZoneOperations>,
}

#[cfg(feature = "zone-operations")]
impl ZoneOperations {
    /// Returns a builder for [ZoneOperations].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::ZoneOperations;
    /// let client = ZoneOperations::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::zone_operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::zone_operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ZoneOperations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::ZoneOperations>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ZoneOperations> {
        super::transport::ZoneOperations::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ZoneOperations> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ZoneOperations::new)
    }

    /// Deletes the specified zone-specific Operations resource.
    pub fn delete(&self) -> super::builder::zone_operations::Delete {
        super::builder::zone_operations::Delete::new(self.inner.clone())
    }

    /// Retrieves the specified zone-specific Operations resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::ZoneOperations;
    /// async fn sample(client: &ZoneOperations, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_operation("my-operation")
    ///         .set_project(project_id)
    ///         .set_zone("my-zone")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::zone_operations::Get {
        super::builder::zone_operations::Get::new(self.inner.clone())
    }

    /// Retrieves a list of Operation resources contained within the specified
    /// zone-specific.
    pub fn list(&self) -> super::builder::zone_operations::List {
        super::builder::zone_operations::List::new(self.inner.clone())
    }

    /// Waits for the specified zone-specific Operation resource to return as
    /// `DONE` or for the request to approach the 2 minute deadline, and
    /// retrieves the specified Operation resource.
    ///
    /// This method waits for no more than the 2 minutes and then returns the
    /// current state of the operation, which might be `DONE` or still in progress.
    /// This method is called on a best-effort basis. Specifically, it might return
    /// earlier than the 2 minute deadline, or the operation might not be `DONE`
    /// when the method returns.
    pub fn wait(&self) -> super::builder::zone_operations::Wait {
        super::builder::zone_operations::Wait::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::RegionOperations;
/// let client = RegionOperations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `regionOperations` resource.
///
/// # Configuration
///
/// To configure `RegionOperations` use the `with_*` methods in the type returned
/// by [builder()][RegionOperations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::region_operations::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::region_operations::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `RegionOperations` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `RegionOperations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "region-operations")]
#[derive(Clone, Debug)]
pub struct RegionOperations {
    inner: std::sync::Arc<dyn super::stub::dynamic::RegionOperations>,
}

#[cfg(feature = "region-operations")]
impl RegionOperations {
    /// Returns a builder for [RegionOperations].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::RegionOperations;
    /// let client = RegionOperations::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::region_operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::region_operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::RegionOperations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::RegionOperations>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::RegionOperations> {
        super::transport::RegionOperations::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::RegionOperations> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::RegionOperations::new)
    }

    /// Deletes the specified region-specific Operations resource.
    pub fn delete(&self) -> super::builder::region_operations::Delete {
        super::builder::region_operations::Delete::new(self.inner.clone())
    }

    /// Retrieves the specified region-specific Operations resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::RegionOperations;
    /// async fn sample(client: &RegionOperations, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_operation("my-operation")
    ///         .set_project(project_id)
    ///         .set_region("my-region")
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::region_operations::Get {
        super::builder::region_operations::Get::new(self.inner.clone())
    }

    /// Retrieves a list of Operation resources contained within the specified
    /// region-specific.
    pub fn list(&self) -> super::builder::region_operations::List {
        super::builder::region_operations::List::new(self.inner.clone())
    }

    /// Waits for the specified region-specific Operation resource to return as
    /// `DONE` or for the request to approach the 2 minute deadline, and
    /// retrieves the specified Operation resource.
    ///
    /// This method waits for no more than the 2 minutes and then returns the
    /// current state of the operation, which might be `DONE` or still in progress.
    /// This method is called on a best-effort basis. Specifically, it might return
    /// earlier than the 2 minute deadline, or the operation might not be `DONE`
    /// when the method returns.
    pub fn wait(&self) -> super::builder::region_operations::Wait {
        super::builder::region_operations::Wait::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::GlobalOperations;
/// let client = GlobalOperations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `globalOperations` resource.
///
/// # Configuration
///
/// To configure `GlobalOperations` use the `with_*` methods in the type returned
/// by [builder()][GlobalOperations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::global_operations::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::global_operations::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `GlobalOperations` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `GlobalOperations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "global-operations")]
#[derive(Clone, Debug)]
pub struct GlobalOperations {
    inner: std::sync::Arc<dyn super::stub::dynamic::GlobalOperations>,
}

#[cfg(feature = "global-operations")]
impl GlobalOperations {
    /// Returns a builder for [GlobalOperations].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::GlobalOperations;
    /// let client = GlobalOperations::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::global_operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::global_operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::GlobalOperations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::GlobalOperations>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::GlobalOperations> {
        super::transport::GlobalOperations::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::GlobalOperations> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::GlobalOperations::new)
    }

    /// Retrieves an aggregated list of all operations.
    ///
    /// To prevent failure, it is recommended that you set the
    /// `returnPartialSuccess` parameter to `true`.
    pub fn aggregated_list(&self) -> super::builder::global_operations::AggregatedList {
        super::builder::global_operations::AggregatedList::new(self.inner.clone())
    }

    /// Deletes the specified global Operations resource.
    pub fn delete(&self) -> super::builder::global_operations::Delete {
        super::builder::global_operations::Delete::new(self.inner.clone())
    }

    /// Retrieves the specified global Operations resource.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::GlobalOperations;
    /// async fn sample(client: &GlobalOperations, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_operation("my-operation")
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::global_operations::Get {
        super::builder::global_operations::Get::new(self.inner.clone())
    }

    /// Retrieves a list of Operation resources contained within the specified
    /// global.
    pub fn list(&self) -> super::builder::global_operations::List {
        super::builder::global_operations::List::new(self.inner.clone())
    }

    /// Waits for the specified global Operation resource to return as `DONE` or
    /// for the request to approach the 2 minute deadline, and retrieves the
    /// specified Operation resource.
    ///
    /// This method waits for no more than the 2 minutes and then returns the
    /// current state of the operation, which might be `DONE` or still in progress.
    /// This method is called on a best-effort basis. Specifically, it might return
    /// earlier than the 2 minute deadline, or the operation might not be `DONE`
    /// when the method returns.
    pub fn wait(&self) -> super::builder::global_operations::Wait {
        super::builder::global_operations::Wait::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_compute_v1::client::Projects;
/// let client = Projects::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for the `projects` resource.
///
/// # Configuration
///
/// To configure `Projects` use the `with_*` methods in the type returned
/// by [builder()][Projects::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the access token in
///   the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable, if set, and
///   anonymous credentials otherwise. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::projects::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::projects::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Projects` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Projects` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[cfg(feature = "projects")]
#[derive(Clone, Debug)]
pub struct Projects {
    inner: std::sync::Arc<dyn super::stub::dynamic::Projects>,
}

#[cfg(feature = "projects")]
impl Projects {
    /// Returns a builder for [Projects].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_compute_v1::client::Projects;
    /// let client = Projects::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::projects::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::projects::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Projects + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Projects>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Projects> {
        super::transport::Projects::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Projects> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Projects::new)
    }

    /// Returns the specified Project resource.
    ///
    /// To decrease latency for this method, you can optionally omit any unneeded
    /// information from the response by using a field mask. This practice is
    /// especially recommended for unused quota information (the `quotas` field).
    /// To exclude one or more fields, set your request's `fields` query parameter
    /// to only include the fields you need.
    ///
    /// # Example
    /// ```
    /// # use cloud_compute_v1::client::Projects;
    /// async fn sample(client: &Projects, project_id: &str) -> cloud_compute_v1::Result<()> {
    ///     let response = client.get()
    ///         .set_project(project_id)
    ///         .send().await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn get(&self) -> super::builder::projects::Get {
        super::builder::projects::Get::new(self.inner.clone())
    }

    /// Sets metadata common to all instances within the specified project using
    /// the data included in the request.
    ///
    /// Use [Operation::to_result][crate::model::Operation::to_result] on the
    /// completed operation to detect per-location failures.
    pub fn set_common_instance_metadata(&self) -> super::builder::projects::SetCommonInstanceMetadata {
        super::builder::projects::SetCommonInstanceMetadata::new(self.inner.clone())
    }

    /// Sets the default network tier of the project. The default network tier
    /// is used when an address/forwardingRule/instance is created without
    /// specifying the network tier field.
    pub fn set_default_network_tier(&self) -> super::builder::projects::SetDefaultNetworkTier {
        super::builder::projects::SetDefaultNetworkTier::new(self.inner.clone())
    }

    /// Enables the usage export feature and sets the usage export bucket where
    /// reports are stored. If you provide an empty request body using this
    /// method, the usage export feature will be disabled.
    pub fn set_usage_export_bucket(&self) -> super::builder::projects::SetUsageExportBucket {
        super::builder::projects::SetUsageExportBucket::new(self.inner.clone())
    }
}
