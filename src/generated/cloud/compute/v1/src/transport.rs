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

use crate::Result;
#[allow(unused_imports)]
use gaxi::query_parameter::QueryParameter;

/// Implements [Addresses](super::stub::Addresses) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "addresses")]
#[derive(Clone)]
pub struct Addresses {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "addresses")]
impl std::fmt::Debug for Addresses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Addresses")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "addresses")]
impl Addresses {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "addresses")]
impl super::stub::Addresses for Addresses {
    async fn aggregated_list(
        &self,
        req: crate::model::addresses::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddressAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/addresses",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::addresses::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/addresses/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.address, "address")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::addresses::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Address>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/addresses/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.address, "address")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::addresses::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/addresses",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.address_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::addresses::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddressList>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/addresses",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn r#move(
        &self,
        req: crate::model::addresses::MoveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/addresses/{}/move",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.address, "address")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.region_addresses_move_request_resource, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::addresses::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/addresses/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.resource, "resource")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.region_set_labels_request_resource, options)
            .await
    }
}

/// Implements [GlobalAddresses](super::stub::GlobalAddresses) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "global-addresses")]
#[derive(Clone)]
pub struct GlobalAddresses {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "global-addresses")]
impl std::fmt::Debug for GlobalAddresses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("GlobalAddresses")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "global-addresses")]
impl GlobalAddresses {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "global-addresses")]
impl super::stub::GlobalAddresses for GlobalAddresses {
    async fn delete(
        &self,
        req: crate::model::global_addresses::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/addresses/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.address, "address")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::global_addresses::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Address>> {
        let path = format!(
            "/compute/v1/projects/{}/global/addresses/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.address, "address")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::global_addresses::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/addresses",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.address_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::global_addresses::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddressList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/addresses",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn r#move(
        &self,
        req: crate::model::global_addresses::MoveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/addresses/{}/move",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.address, "address")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.global_addresses_move_request_resource, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::global_addresses::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/addresses/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.resource, "resource")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, req.global_set_labels_request_resource, options)
            .await
    }
}

/// Implements [Disks](super::stub::Disks) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "disks")]
#[derive(Clone)]
pub struct Disks {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "disks")]
impl std::fmt::Debug for Disks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Disks")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "disks")]
impl Disks {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "disks")]
impl super::stub::Disks for Disks {
    async fn aggregated_list(
        &self,
        req: crate::model::disks::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DiskAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/disks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_snapshot(
        &self,
        req: crate::model::disks::CreateSnapshotRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}/createSnapshot",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.guest_flush.add(builder, "guestFlush");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.snapshot_resource, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::disks::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn resize(
        &self,
        req: crate::model::disks::ResizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}/resize",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.disks_resize_request_resource, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::disks::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Disk>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::disks::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        let builder = req.source_image.add(builder, "sourceImage");
        self.inner
            .execute(builder, req.disk_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::disks::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DiskList>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::disks::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.resource, "resource")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.zone_set_labels_request_resource, options)
            .await
    }
}

/// Implements [Instances](super::stub::Instances) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "instances")]
#[derive(Clone)]
pub struct Instances {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "instances")]
impl std::fmt::Debug for Instances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Instances")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "instances")]
impl Instances {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "instances")]
impl super::stub::Instances for Instances {
    async fn aggregated_list(
        &self,
        req: crate::model::instances::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::InstanceAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/instances",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn attach_disk(
        &self,
        req: crate::model::instances::AttachDiskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/attachDisk",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.force_attach.add(builder, "forceAttach");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.attached_disk_resource, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::instances::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.no_graceful_shutdown.add(builder, "noGracefulShutdown");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn detach_disk(
        &self,
        req: crate::model::instances::DetachDiskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/detachDisk",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.device_name.add(builder, "deviceName");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn reset(
        &self,
        req: crate::model::instances::ResetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/reset",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn resume(
        &self,
        req: crate::model::instances::ResumeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/resume",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::instances::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Instance>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_serial_port_output(
        &self,
        req: crate::model::instances::GetSerialPortOutputRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SerialPortOutput>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/serialPort",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.port.add(builder, "port");
        let builder = req.start.add(builder, "start");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::instances::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        let builder = req.source_instance_template.add(builder, "sourceInstanceTemplate");
        let builder = req.source_machine_image.add(builder, "sourceMachineImage");
        self.inner
            .execute(builder, req.instance_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::instances::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::InstanceList>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::instances::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.instances_set_labels_request_resource, options)
            .await
    }

    async fn set_machine_type(
        &self,
        req: crate::model::instances::SetMachineTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/setMachineType",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.instances_set_machine_type_request_resource, options)
            .await
    }

    async fn set_metadata(
        &self,
        req: crate::model::instances::SetMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/setMetadata",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.metadata_resource, options)
            .await
    }

    async fn set_tags(
        &self,
        req: crate::model::instances::SetTagsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/setTags",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.tags_resource, options)
            .await
    }

    async fn start(
        &self,
        req: crate::model::instances::StartRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/start",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn stop(
        &self,
        req: crate::model::instances::StopRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/stop",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.discard_local_ssd.add(builder, "discardLocalSsd");
        let builder = req.no_graceful_shutdown.add(builder, "noGracefulShutdown");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn suspend(
        &self,
        req: crate::model::instances::SuspendRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/instances/{}/suspend",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.instance, "instance")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.discard_local_ssd.add(builder, "discardLocalSsd");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [Networks](super::stub::Networks) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "networks")]
#[derive(Clone)]
pub struct Networks {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "networks")]
impl std::fmt::Debug for Networks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Networks")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "networks")]
impl Networks {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "networks")]
impl super::stub::Networks for Networks {
    async fn add_peering(
        &self,
        req: crate::model::networks::AddPeeringRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}/addPeering",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.network, "network")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.networks_add_peering_request_resource, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::networks::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.network, "network")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn remove_peering(
        &self,
        req: crate::model::networks::RemovePeeringRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}/removePeering",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.network, "network")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.networks_remove_peering_request_resource, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::networks::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Network>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.network, "network")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::networks::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.network_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::networks::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NetworkList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::networks::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/networks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.network, "network")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.network_resource, options)
            .await
    }
}

/// Implements [Subnetworks](super::stub::Subnetworks) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "subnetworks")]
#[derive(Clone)]
pub struct Subnetworks {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "subnetworks")]
impl std::fmt::Debug for Subnetworks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Subnetworks")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "subnetworks")]
impl Subnetworks {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "subnetworks")]
impl super::stub::Subnetworks for Subnetworks {
    async fn aggregated_list(
        &self,
        req: crate::model::subnetworks::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SubnetworkAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/subnetworks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::subnetworks::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.subnetwork, "subnetwork")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn expand_ip_cidr_range(
        &self,
        req: crate::model::subnetworks::ExpandIpCidrRangeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks/{}/expandIpCidrRange",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.subnetwork, "subnetwork")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.subnetworks_expand_ip_cidr_range_request_resource, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::subnetworks::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Subnetwork>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.subnetwork, "subnetwork")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::subnetworks::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.subnetwork_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::subnetworks::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SubnetworkList>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::subnetworks::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.subnetwork, "subnetwork")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.drain_timeout_seconds.add(builder, "drainTimeoutSeconds");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.subnetwork_resource, options)
            .await
    }

    async fn set_private_ip_google_access(
        &self,
        req: crate::model::subnetworks::SetPrivateIpGoogleAccessRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/subnetworks/{}/setPrivateIpGoogleAccess",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.subnetwork, "subnetwork")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.subnetworks_set_private_ip_google_access_request_resource, options)
            .await
    }
}

/// Implements [Firewalls](super::stub::Firewalls) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "firewalls")]
#[derive(Clone)]
pub struct Firewalls {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "firewalls")]
impl std::fmt::Debug for Firewalls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Firewalls")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "firewalls")]
impl Firewalls {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "firewalls")]
impl super::stub::Firewalls for Firewalls {
    async fn delete(
        &self,
        req: crate::model::firewalls::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/firewalls/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.firewall, "firewall")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::firewalls::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Firewall>> {
        let path = format!(
            "/compute/v1/projects/{}/global/firewalls/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.firewall, "firewall")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::firewalls::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/firewalls",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.firewall_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::firewalls::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FirewallList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/firewalls",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::firewalls::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/firewalls/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.firewall, "firewall")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.firewall_resource, options)
            .await
    }

    async fn update(
        &self,
        req: crate::model::firewalls::UpdateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/firewalls/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.firewall, "firewall")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.firewall_resource, options)
            .await
    }
}

/// Implements [ForwardingRules](super::stub::ForwardingRules) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "forwarding-rules")]
#[derive(Clone)]
pub struct ForwardingRules {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "forwarding-rules")]
impl std::fmt::Debug for ForwardingRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ForwardingRules")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "forwarding-rules")]
impl ForwardingRules {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "forwarding-rules")]
impl super::stub::ForwardingRules for ForwardingRules {
    async fn aggregated_list(
        &self,
        req: crate::model::forwarding_rules::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ForwardingRuleAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/forwardingRules",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::forwarding_rules::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.forwarding_rule, "forwardingRule")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::forwarding_rules::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ForwardingRule>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.forwarding_rule, "forwardingRule")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::forwarding_rules::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.forwarding_rule_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::forwarding_rules::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ForwardingRuleList>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::forwarding_rules::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.forwarding_rule, "forwardingRule")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.forwarding_rule_resource, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::forwarding_rules::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.resource, "resource")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.region_set_labels_request_resource, options)
            .await
    }

    async fn set_target(
        &self,
        req: crate::model::forwarding_rules::SetTargetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/forwardingRules/{}/setTarget",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.forwarding_rule, "forwardingRule")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.target_reference_resource, options)
            .await
    }
}

/// Implements [BackendServices](super::stub::BackendServices) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "backend-services")]
#[derive(Clone)]
pub struct BackendServices {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "backend-services")]
impl std::fmt::Debug for BackendServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("BackendServices")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "backend-services")]
impl BackendServices {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "backend-services")]
impl super::stub::BackendServices for BackendServices {
    async fn aggregated_list(
        &self,
        req: crate::model::backend_services::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BackendServiceAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/backendServices",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::backend_services::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.backend_service, "backendService")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::backend_services::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BackendService>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.backend_service, "backendService")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_health(
        &self,
        req: crate::model::backend_services::GetHealthRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BackendServiceGroupHealth>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices/{}/getHealth",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.backend_service, "backendService")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, req.resource_group_reference_resource, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::backend_services::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.backend_service_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::backend_services::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BackendServiceList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::backend_services::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.backend_service, "backendService")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.backend_service_resource, options)
            .await
    }

    async fn update(
        &self,
        req: crate::model::backend_services::UpdateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/backendServices/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.backend_service, "backendService")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.backend_service_resource, options)
            .await
    }
}

/// Implements [HealthChecks](super::stub::HealthChecks) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "health-checks")]
#[derive(Clone)]
pub struct HealthChecks {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "health-checks")]
impl std::fmt::Debug for HealthChecks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("HealthChecks")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "health-checks")]
impl HealthChecks {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "health-checks")]
impl super::stub::HealthChecks for HealthChecks {
    async fn aggregated_list(
        &self,
        req: crate::model::health_checks::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HealthChecksAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/healthChecks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::health_checks::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/healthChecks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.health_check, "healthCheck")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::health_checks::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HealthCheck>> {
        let path = format!(
            "/compute/v1/projects/{}/global/healthChecks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.health_check, "healthCheck")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::health_checks::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/healthChecks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.health_check_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::health_checks::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::HealthCheckList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/healthChecks",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::health_checks::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/healthChecks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.health_check, "healthCheck")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.health_check_resource, options)
            .await
    }

    async fn update(
        &self,
        req: crate::model::health_checks::UpdateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/healthChecks/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.health_check, "healthCheck")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.health_check_resource, options)
            .await
    }
}

/// Implements [TargetPools](super::stub::TargetPools) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "target-pools")]
#[derive(Clone)]
pub struct TargetPools {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "target-pools")]
impl std::fmt::Debug for TargetPools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("TargetPools")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "target-pools")]
impl TargetPools {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "target-pools")]
impl super::stub::TargetPools for TargetPools {
    async fn add_instance(
        &self,
        req: crate::model::target_pools::AddInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools/{}/addInstance",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.target_pool, "targetPool")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.target_pools_add_instance_request_resource, options)
            .await
    }

    async fn aggregated_list(
        &self,
        req: crate::model::target_pools::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TargetPoolAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/targetPools",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::target_pools::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.target_pool, "targetPool")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn remove_instance(
        &self,
        req: crate::model::target_pools::RemoveInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools/{}/removeInstance",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.target_pool, "targetPool")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.target_pools_remove_instance_request_resource, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::target_pools::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TargetPool>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.target_pool, "targetPool")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_health(
        &self,
        req: crate::model::target_pools::GetHealthRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TargetPoolInstanceHealth>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools/{}/getHealth",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.target_pool, "targetPool")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, req.instance_reference_resource, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::target_pools::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.target_pool_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::target_pools::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TargetPoolList>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_backup(
        &self,
        req: crate::model::target_pools::SetBackupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/targetPools/{}/setBackup",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.target_pool, "targetPool")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.failover_ratio.add(builder, "failoverRatio");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.target_reference_resource, options)
            .await
    }
}

/// Implements [UrlMaps](super::stub::UrlMaps) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "url-maps")]
#[derive(Clone)]
pub struct UrlMaps {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "url-maps")]
impl std::fmt::Debug for UrlMaps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("UrlMaps")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "url-maps")]
impl UrlMaps {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "url-maps")]
impl super::stub::UrlMaps for UrlMaps {
    async fn delete(
        &self,
        req: crate::model::url_maps::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.url_map, "urlMap")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::url_maps::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UrlMap>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.url_map, "urlMap")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::url_maps::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.url_map_resource, options)
            .await
    }

    async fn invalidate_cache(
        &self,
        req: crate::model::url_maps::InvalidateCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps/{}/invalidateCache",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.url_map, "urlMap")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.cache_invalidation_rule_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::url_maps::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UrlMapList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch(
        &self,
        req: crate::model::url_maps::PatchRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.url_map, "urlMap")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.url_map_resource, options)
            .await
    }

    async fn update(
        &self,
        req: crate::model::url_maps::UpdateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/urlMaps/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.url_map, "urlMap")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.url_map_resource, options)
            .await
    }
}

/// Implements [Images](super::stub::Images) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "images")]
#[derive(Clone)]
pub struct Images {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "images")]
impl std::fmt::Debug for Images {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Images")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "images")]
impl Images {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "images")]
impl super::stub::Images for Images {
    async fn delete(
        &self,
        req: crate::model::images::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.image, "image")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn deprecate(
        &self,
        req: crate::model::images::DeprecateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images/{}/deprecate",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.image, "image")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.deprecation_status_resource, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::images::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Image>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.image, "image")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_from_family(
        &self,
        req: crate::model::images::GetFromFamilyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Image>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images/family/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.family, "family")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::images::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.force_create.add(builder, "forceCreate");
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.image_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::images::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ImageList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::images::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/images/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.resource, "resource")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, req.global_set_labels_request_resource, options)
            .await
    }
}

/// Implements [Snapshots](super::stub::Snapshots) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "snapshots")]
#[derive(Clone)]
pub struct Snapshots {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "snapshots")]
impl std::fmt::Debug for Snapshots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Snapshots")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "snapshots")]
impl Snapshots {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "snapshots")]
impl super::stub::Snapshots for Snapshots {
    async fn delete(
        &self,
        req: crate::model::snapshots::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/snapshots/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.snapshot, "snapshot")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::snapshots::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Snapshot>> {
        let path = format!(
            "/compute/v1/projects/{}/global/snapshots/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.snapshot, "snapshot")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert(
        &self,
        req: crate::model::snapshots::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/snapshots",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.snapshot_resource, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::snapshots::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SnapshotList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/snapshots",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_labels(
        &self,
        req: crate::model::snapshots::SetLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/snapshots/{}/setLabels",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.resource, "resource")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, req.global_set_labels_request_resource, options)
            .await
    }
}

/// Implements [MachineTypes](super::stub::MachineTypes) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "machine-types")]
#[derive(Clone)]
pub struct MachineTypes {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "machine-types")]
impl std::fmt::Debug for MachineTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("MachineTypes")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "machine-types")]
impl MachineTypes {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "machine-types")]
impl super::stub::MachineTypes for MachineTypes {
    async fn aggregated_list(
        &self,
        req: crate::model::machine_types::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::MachineTypeAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/machineTypes",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get(
        &self,
        req: crate::model::machine_types::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::MachineType>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/machineTypes/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.machine_type, "machineType")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::machine_types::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::MachineTypeList>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/machineTypes",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [Zones](super::stub::Zones) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "zones")]
#[derive(Clone)]
pub struct Zones {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "zones")]
impl std::fmt::Debug for Zones {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Zones")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "zones")]
impl Zones {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "zones")]
impl super::stub::Zones for Zones {
    async fn get(
        &self,
        req: crate::model::zones::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Zone>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::zones::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ZoneList>> {
        let path = format!(
            "/compute/v1/projects/{}/zones",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [Regions](super::stub::Regions) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "regions")]
#[derive(Clone)]
pub struct Regions {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "regions")]
impl std::fmt::Debug for Regions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Regions")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "regions")]
impl Regions {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "regions")]
impl super::stub::Regions for Regions {
    async fn get(
        &self,
        req: crate::model::regions::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Region>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::regions::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RegionList>> {
        let path = format!(
            "/compute/v1/projects/{}/regions",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [ZoneOperations](super::stub::ZoneOperations) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "zone-operations")]
#[derive(Clone)]
pub struct ZoneOperations {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "zone-operations")]
impl std::fmt::Debug for ZoneOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ZoneOperations")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "zone-operations")]
impl ZoneOperations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "zone-operations")]
impl super::stub::ZoneOperations for ZoneOperations {
    async fn delete(
        &self,
        req: crate::model::zone_operations::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn get(
        &self,
        req: crate::model::zone_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::zone_operations::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OperationList>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn wait(
        &self,
        req: crate::model::zone_operations::WaitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations/{}/wait",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.zone, "zone")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [RegionOperations](super::stub::RegionOperations) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "region-operations")]
#[derive(Clone)]
pub struct RegionOperations {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "region-operations")]
impl std::fmt::Debug for RegionOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("RegionOperations")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "region-operations")]
impl RegionOperations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "region-operations")]
impl super::stub::RegionOperations for RegionOperations {
    async fn delete(
        &self,
        req: crate::model::region_operations::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn get(
        &self,
        req: crate::model::region_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::region_operations::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OperationList>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn wait(
        &self,
        req: crate::model::region_operations::WaitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations/{}/wait",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.region, "region")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [GlobalOperations](super::stub::GlobalOperations) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "global-operations")]
#[derive(Clone)]
pub struct GlobalOperations {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "global-operations")]
impl std::fmt::Debug for GlobalOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("GlobalOperations")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "global-operations")]
impl GlobalOperations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "global-operations")]
impl super::stub::GlobalOperations for GlobalOperations {
    async fn aggregated_list(
        &self,
        req: crate::model::global_operations::AggregatedListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OperationAggregatedList>> {
        let path = format!(
            "/compute/v1/projects/{}/aggregated/operations",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.include_all_scopes.add(builder, "includeAllScopes");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        let builder = req.service_project_number.add(builder, "serviceProjectNumber");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete(
        &self,
        req: crate::model::global_operations::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(|r| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn get(
        &self,
        req: crate::model::global_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list(
        &self,
        req: crate::model::global_operations::ListRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OperationList>> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.filter.add(builder, "filter");
        let builder = req.max_results.add(builder, "maxResults");
        let builder = req.order_by.add(builder, "orderBy");
        let builder = req.page_token.add(builder, "pageToken");
        let builder = req.return_partial_success.add(builder, "returnPartialSuccess");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn wait(
        &self,
        req: crate::model::global_operations::WaitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations/{}/wait",
            gaxi::path_parameter::required(&req.project, "project")?,
            gaxi::path_parameter::required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [Projects](super::stub::Projects) using a [gaxi::http::ReqwestClient].
#[cfg(feature = "projects")]
#[derive(Clone)]
pub struct Projects {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "projects")]
impl std::fmt::Debug for Projects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Projects")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "projects")]
impl Projects {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "projects")]
impl super::stub::Projects for Projects {
    async fn get(
        &self,
        req: crate::model::projects::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Project>> {
        let path = format!(
            "/compute/v1/projects/{}",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_common_instance_metadata(
        &self,
        req: crate::model::projects::SetCommonInstanceMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/setCommonInstanceMetadata",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.metadata_resource, options)
            .await
    }

    async fn set_default_network_tier(
        &self,
        req: crate::model::projects::SetDefaultNetworkTierRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/setDefaultNetworkTier",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.projects_set_default_network_tier_request_resource, options)
            .await
    }

    async fn set_usage_export_bucket(
        &self,
        req: crate::model::projects::SetUsageExportBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/setUsageExportBucket",
            gaxi::path_parameter::required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req.request_id.add(builder, "requestId");
        self.inner
            .execute(builder, req.usage_export_location_resource, options)
            .await
    }
}
