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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::Addresses].
///
/// Application developers may need to implement this trait to mock
/// `client::Addresses`.  In other use-cases, application developers only
/// use `client::Addresses` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "addresses")]
pub trait Addresses: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Addresses::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::addresses::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::AddressAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Addresses::delete].
    fn delete(
        &self,
        _req: crate::model::addresses::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Addresses::get].
    fn get(
        &self,
        _req: crate::model::addresses::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Address>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Addresses::insert].
    fn insert(
        &self,
        _req: crate::model::addresses::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Addresses::list].
    fn list(
        &self,
        _req: crate::model::addresses::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::AddressList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Addresses::move].
    fn r#move(
        &self,
        _req: crate::model::addresses::MoveRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Addresses::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::addresses::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::GlobalAddresses].
///
/// Application developers may need to implement this trait to mock
/// `client::GlobalAddresses`.  In other use-cases, application developers only
/// use `client::GlobalAddresses` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "global-addresses")]
pub trait GlobalAddresses: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::GlobalAddresses::delete].
    fn delete(
        &self,
        _req: crate::model::global_addresses::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalAddresses::get].
    fn get(
        &self,
        _req: crate::model::global_addresses::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Address>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalAddresses::insert].
    fn insert(
        &self,
        _req: crate::model::global_addresses::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalAddresses::list].
    fn list(
        &self,
        _req: crate::model::global_addresses::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::AddressList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalAddresses::move].
    fn r#move(
        &self,
        _req: crate::model::global_addresses::MoveRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalAddresses::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::global_addresses::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Disks].
///
/// Application developers may need to implement this trait to mock
/// `client::Disks`.  In other use-cases, application developers only
/// use `client::Disks` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "disks")]
pub trait Disks: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Disks::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::disks::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::DiskAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::create_snapshot].
    fn create_snapshot(
        &self,
        _req: crate::model::disks::CreateSnapshotRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::delete].
    fn delete(
        &self,
        _req: crate::model::disks::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::resize].
    fn resize(
        &self,
        _req: crate::model::disks::ResizeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::get].
    fn get(
        &self,
        _req: crate::model::disks::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Disk>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::insert].
    fn insert(
        &self,
        _req: crate::model::disks::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::list].
    fn list(
        &self,
        _req: crate::model::disks::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::DiskList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Disks::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::disks::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Instances].
///
/// Application developers may need to implement this trait to mock
/// `client::Instances`.  In other use-cases, application developers only
/// use `client::Instances` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "instances")]
pub trait Instances: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Instances::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::instances::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::InstanceAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::attach_disk].
    fn attach_disk(
        &self,
        _req: crate::model::instances::AttachDiskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::delete].
    fn delete(
        &self,
        _req: crate::model::instances::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::detach_disk].
    fn detach_disk(
        &self,
        _req: crate::model::instances::DetachDiskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::reset].
    fn reset(
        &self,
        _req: crate::model::instances::ResetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::resume].
    fn resume(
        &self,
        _req: crate::model::instances::ResumeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::get].
    fn get(
        &self,
        _req: crate::model::instances::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Instance>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::get_serial_port_output].
    fn get_serial_port_output(
        &self,
        _req: crate::model::instances::GetSerialPortOutputRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::SerialPortOutput>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::insert].
    fn insert(
        &self,
        _req: crate::model::instances::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::list].
    fn list(
        &self,
        _req: crate::model::instances::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::InstanceList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::instances::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::set_machine_type].
    fn set_machine_type(
        &self,
        _req: crate::model::instances::SetMachineTypeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::set_metadata].
    fn set_metadata(
        &self,
        _req: crate::model::instances::SetMetadataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::set_tags].
    fn set_tags(
        &self,
        _req: crate::model::instances::SetTagsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::start].
    fn start(
        &self,
        _req: crate::model::instances::StartRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::stop].
    fn stop(
        &self,
        _req: crate::model::instances::StopRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Instances::suspend].
    fn suspend(
        &self,
        _req: crate::model::instances::SuspendRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Networks].
///
/// Application developers may need to implement this trait to mock
/// `client::Networks`.  In other use-cases, application developers only
/// use `client::Networks` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "networks")]
pub trait Networks: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Networks::add_peering].
    fn add_peering(
        &self,
        _req: crate::model::networks::AddPeeringRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Networks::delete].
    fn delete(
        &self,
        _req: crate::model::networks::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Networks::remove_peering].
    fn remove_peering(
        &self,
        _req: crate::model::networks::RemovePeeringRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Networks::get].
    fn get(
        &self,
        _req: crate::model::networks::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Network>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Networks::insert].
    fn insert(
        &self,
        _req: crate::model::networks::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Networks::list].
    fn list(
        &self,
        _req: crate::model::networks::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::NetworkList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Networks::patch].
    fn patch(
        &self,
        _req: crate::model::networks::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Subnetworks].
///
/// Application developers may need to implement this trait to mock
/// `client::Subnetworks`.  In other use-cases, application developers only
/// use `client::Subnetworks` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "subnetworks")]
pub trait Subnetworks: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Subnetworks::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::subnetworks::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::SubnetworkAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::delete].
    fn delete(
        &self,
        _req: crate::model::subnetworks::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::expand_ip_cidr_range].
    fn expand_ip_cidr_range(
        &self,
        _req: crate::model::subnetworks::ExpandIpCidrRangeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::get].
    fn get(
        &self,
        _req: crate::model::subnetworks::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Subnetwork>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::insert].
    fn insert(
        &self,
        _req: crate::model::subnetworks::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::list].
    fn list(
        &self,
        _req: crate::model::subnetworks::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::SubnetworkList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::patch].
    fn patch(
        &self,
        _req: crate::model::subnetworks::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Subnetworks::set_private_ip_google_access].
    fn set_private_ip_google_access(
        &self,
        _req: crate::model::subnetworks::SetPrivateIpGoogleAccessRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Firewalls].
///
/// Application developers may need to implement this trait to mock
/// `client::Firewalls`.  In other use-cases, application developers only
/// use `client::Firewalls` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "firewalls")]
pub trait Firewalls: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Firewalls::delete].
    fn delete(
        &self,
        _req: crate::model::firewalls::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Firewalls::get].
    fn get(
        &self,
        _req: crate::model::firewalls::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Firewall>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Firewalls::insert].
    fn insert(
        &self,
        _req: crate::model::firewalls::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Firewalls::list].
    fn list(
        &self,
        _req: crate::model::firewalls::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::FirewallList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Firewalls::patch].
    fn patch(
        &self,
        _req: crate::model::firewalls::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Firewalls::update].
    fn update(
        &self,
        _req: crate::model::firewalls::UpdateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::ForwardingRules].
///
/// Application developers may need to implement this trait to mock
/// `client::ForwardingRules`.  In other use-cases, application developers only
/// use `client::ForwardingRules` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "forwarding-rules")]
pub trait ForwardingRules: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ForwardingRules::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::forwarding_rules::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ForwardingRuleAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::delete].
    fn delete(
        &self,
        _req: crate::model::forwarding_rules::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::get].
    fn get(
        &self,
        _req: crate::model::forwarding_rules::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ForwardingRule>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::insert].
    fn insert(
        &self,
        _req: crate::model::forwarding_rules::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::list].
    fn list(
        &self,
        _req: crate::model::forwarding_rules::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ForwardingRuleList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::patch].
    fn patch(
        &self,
        _req: crate::model::forwarding_rules::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::forwarding_rules::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ForwardingRules::set_target].
    fn set_target(
        &self,
        _req: crate::model::forwarding_rules::SetTargetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::BackendServices].
///
/// Application developers may need to implement this trait to mock
/// `client::BackendServices`.  In other use-cases, application developers only
/// use `client::BackendServices` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "backend-services")]
pub trait BackendServices: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::BackendServices::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::backend_services::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::BackendServiceAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::delete].
    fn delete(
        &self,
        _req: crate::model::backend_services::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::get].
    fn get(
        &self,
        _req: crate::model::backend_services::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::BackendService>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::get_health].
    fn get_health(
        &self,
        _req: crate::model::backend_services::GetHealthRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::BackendServiceGroupHealth>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::insert].
    fn insert(
        &self,
        _req: crate::model::backend_services::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::list].
    fn list(
        &self,
        _req: crate::model::backend_services::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::BackendServiceList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::patch].
    fn patch(
        &self,
        _req: crate::model::backend_services::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BackendServices::update].
    fn update(
        &self,
        _req: crate::model::backend_services::UpdateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::HealthChecks].
///
/// Application developers may need to implement this trait to mock
/// `client::HealthChecks`.  In other use-cases, application developers only
/// use `client::HealthChecks` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "health-checks")]
pub trait HealthChecks: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::HealthChecks::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::health_checks::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::HealthChecksAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::HealthChecks::delete].
    fn delete(
        &self,
        _req: crate::model::health_checks::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::HealthChecks::get].
    fn get(
        &self,
        _req: crate::model::health_checks::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::HealthCheck>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::HealthChecks::insert].
    fn insert(
        &self,
        _req: crate::model::health_checks::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::HealthChecks::list].
    fn list(
        &self,
        _req: crate::model::health_checks::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::HealthCheckList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::HealthChecks::patch].
    fn patch(
        &self,
        _req: crate::model::health_checks::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::HealthChecks::update].
    fn update(
        &self,
        _req: crate::model::health_checks::UpdateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::TargetPools].
///
/// Application developers may need to implement this trait to mock
/// `client::TargetPools`.  In other use-cases, application developers only
/// use `client::TargetPools` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "target-pools")]
pub trait TargetPools: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::TargetPools::add_instance].
    fn add_instance(
        &self,
        _req: crate::model::target_pools::AddInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::target_pools::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::TargetPoolAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::delete].
    fn delete(
        &self,
        _req: crate::model::target_pools::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::remove_instance].
    fn remove_instance(
        &self,
        _req: crate::model::target_pools::RemoveInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::get].
    fn get(
        &self,
        _req: crate::model::target_pools::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::TargetPool>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::get_health].
    fn get_health(
        &self,
        _req: crate::model::target_pools::GetHealthRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::TargetPoolInstanceHealth>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::insert].
    fn insert(
        &self,
        _req: crate::model::target_pools::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::list].
    fn list(
        &self,
        _req: crate::model::target_pools::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::TargetPoolList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TargetPools::set_backup].
    fn set_backup(
        &self,
        _req: crate::model::target_pools::SetBackupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::UrlMaps].
///
/// Application developers may need to implement this trait to mock
/// `client::UrlMaps`.  In other use-cases, application developers only
/// use `client::UrlMaps` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "url-maps")]
pub trait UrlMaps: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::UrlMaps::delete].
    fn delete(
        &self,
        _req: crate::model::url_maps::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::UrlMaps::get].
    fn get(
        &self,
        _req: crate::model::url_maps::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::UrlMap>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::UrlMaps::insert].
    fn insert(
        &self,
        _req: crate::model::url_maps::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::UrlMaps::invalidate_cache].
    fn invalidate_cache(
        &self,
        _req: crate::model::url_maps::InvalidateCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::UrlMaps::list].
    fn list(
        &self,
        _req: crate::model::url_maps::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::UrlMapList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::UrlMaps::patch].
    fn patch(
        &self,
        _req: crate::model::url_maps::PatchRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::UrlMaps::update].
    fn update(
        &self,
        _req: crate::model::url_maps::UpdateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Images].
///
/// Application developers may need to implement this trait to mock
/// `client::Images`.  In other use-cases, application developers only
/// use `client::Images` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "images")]
pub trait Images: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Images::delete].
    fn delete(
        &self,
        _req: crate::model::images::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Images::deprecate].
    fn deprecate(
        &self,
        _req: crate::model::images::DeprecateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Images::get].
    fn get(
        &self,
        _req: crate::model::images::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Image>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Images::get_from_family].
    fn get_from_family(
        &self,
        _req: crate::model::images::GetFromFamilyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Image>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Images::insert].
    fn insert(
        &self,
        _req: crate::model::images::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Images::list].
    fn list(
        &self,
        _req: crate::model::images::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ImageList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Images::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::images::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Snapshots].
///
/// Application developers may need to implement this trait to mock
/// `client::Snapshots`.  In other use-cases, application developers only
/// use `client::Snapshots` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "snapshots")]
pub trait Snapshots: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Snapshots::delete].
    fn delete(
        &self,
        _req: crate::model::snapshots::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Snapshots::get].
    fn get(
        &self,
        _req: crate::model::snapshots::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Snapshot>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Snapshots::insert].
    fn insert(
        &self,
        _req: crate::model::snapshots::InsertRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Snapshots::list].
    fn list(
        &self,
        _req: crate::model::snapshots::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::SnapshotList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Snapshots::set_labels].
    fn set_labels(
        &self,
        _req: crate::model::snapshots::SetLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::MachineTypes].
///
/// Application developers may need to implement this trait to mock
/// `client::MachineTypes`.  In other use-cases, application developers only
/// use `client::MachineTypes` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "machine-types")]
pub trait MachineTypes: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::MachineTypes::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::machine_types::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::MachineTypeAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::MachineTypes::get].
    fn get(
        &self,
        _req: crate::model::machine_types::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::MachineType>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::MachineTypes::list].
    fn list(
        &self,
        _req: crate::model::machine_types::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::MachineTypeList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Zones].
///
/// Application developers may need to implement this trait to mock
/// `client::Zones`.  In other use-cases, application developers only
/// use `client::Zones` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "zones")]
pub trait Zones: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Zones::get].
    fn get(
        &self,
        _req: crate::model::zones::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Zone>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Zones::list].
    fn list(
        &self,
        _req: crate::model::zones::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ZoneList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Regions].
///
/// Application developers may need to implement this trait to mock
/// `client::Regions`.  In other use-cases, application developers only
/// use `client::Regions` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "regions")]
pub trait Regions: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Regions::get].
    fn get(
        &self,
        _req: crate::model::regions::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Region>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Regions::list].
    fn list(
        &self,
        _req: crate::model::regions::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::RegionList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::ZoneOperations].
///
/// Application developers may need to implement this trait to mock
/// `client::ZoneOperations`.  In other use-cases, application developers only
/// use `client::ZoneOperations` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "zone-operations")]
pub trait ZoneOperations: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ZoneOperations::delete].
    fn delete(
        &self,
        _req: crate::model::zone_operations::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZoneOperations::get].
    fn get(
        &self,
        _req: crate::model::zone_operations::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZoneOperations::list].
    fn list(
        &self,
        _req: crate::model::zone_operations::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::OperationList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::ZoneOperations::wait].
    fn wait(
        &self,
        _req: crate::model::zone_operations::WaitRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::RegionOperations].
///
/// Application developers may need to implement this trait to mock
/// `client::RegionOperations`.  In other use-cases, application developers only
/// use `client::RegionOperations` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "region-operations")]
pub trait RegionOperations: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::RegionOperations::delete].
    fn delete(
        &self,
        _req: crate::model::region_operations::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::RegionOperations::get].
    fn get(
        &self,
        _req: crate::model::region_operations::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::RegionOperations::list].
    fn list(
        &self,
        _req: crate::model::region_operations::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::OperationList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::RegionOperations::wait].
    fn wait(
        &self,
        _req: crate::model::region_operations::WaitRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::GlobalOperations].
///
/// Application developers may need to implement this trait to mock
/// `client::GlobalOperations`.  In other use-cases, application developers only
/// use `client::GlobalOperations` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "global-operations")]
pub trait GlobalOperations: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::GlobalOperations::aggregated_list].
    fn aggregated_list(
        &self,
        _req: crate::model::global_operations::AggregatedListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::OperationAggregatedList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalOperations::delete].
    fn delete(
        &self,
        _req: crate::model::global_operations::DeleteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<()>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalOperations::get].
    fn get(
        &self,
        _req: crate::model::global_operations::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalOperations::list].
    fn list(
        &self,
        _req: crate::model::global_operations::ListRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::OperationList>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::GlobalOperations::wait].
    fn wait(
        &self,
        _req: crate::model::global_operations::WaitRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Projects].
///
/// Application developers may need to implement this trait to mock
/// `client::Projects`.  In other use-cases, application developers only
/// use `client::Projects` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[cfg(feature = "projects")]
pub trait Projects: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Projects::get].
    fn get(
        &self,
        _req: crate::model::projects::GetRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Project>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Projects::set_common_instance_metadata].
    fn set_common_instance_metadata(
        &self,
        _req: crate::model::projects::SetCommonInstanceMetadataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Projects::set_default_network_tier].
    fn set_default_network_tier(
        &self,
        _req: crate::model::projects::SetDefaultNetworkTierRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Projects::set_usage_export_bucket].
    fn set_usage_export_bucket(
        &self,
        _req: crate::model::projects::SetUsageExportBucketRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Operation>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}
