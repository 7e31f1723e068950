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

#![allow(rustdoc::bare_urls)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(rustdoc::redundant_explicit_links)]

pub(crate) mod internal;

/// Informational warning message.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Warning {
    /// A warning code, if applicable. For example, Compute Engine returns
    /// `NO_RESULTS_ON_PAGE` if there are no results in the response.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code: std::option::Option<std::string::String>,

    /// Metadata about this warning in key: value format.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub data: std::vec::Vec<crate::model::warning::Data>,

    /// A human-readable description of the warning code.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}

impl Warning {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code][crate::model::Warning::code].
    pub fn set_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code][crate::model::Warning::code].
    pub fn set_or_clear_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::Warning::data].
    pub fn set_data<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::warning::Data>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [message][crate::model::Warning::message].
    pub fn set_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::Warning::message].
    pub fn set_or_clear_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = v.map(|x| x.into());
        self
    }
}

/// The error details attached to a per-location operation.
///
/// The `code` field is a `google.rpc.Code` value, the `details` carry any
/// additional (typed) error information.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code: std::option::Option<i32>,

    /// A list of messages that carry the error details.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub details: std::vec::Vec<serde_json::Value>,

    /// A developer-facing error message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}

impl Status {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code][crate::model::Status::code].
    pub fn set_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code][crate::model::Status::code].
    pub fn set_or_clear_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [details][crate::model::Status::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.details = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [message][crate::model::Status::message].
    pub fn set_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::Status::message].
    pub fn set_or_clear_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = v.map(|x| x.into());
        self
    }
}

/// Guest OS features.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GuestOsFeature {
    /// The ID of a supported feature, for example `UEFI_COMPATIBLE` or `GVNIC`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,
}

impl GuestOsFeature {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::GuestOsFeature::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::GuestOsFeature::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// Deprecation status for a public resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeprecationStatus {
    /// An optional RFC3339 timestamp on or after which the state of this
    /// resource is intended to change to `DELETED`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deleted: std::option::Option<std::string::String>,

    /// An optional RFC3339 timestamp on or after which the state of this
    /// resource is intended to change to `DEPRECATED`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deprecated: std::option::Option<std::string::String>,

    /// An optional RFC3339 timestamp on or after which the state of this
    /// resource is intended to change to `OBSOLETE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub obsolete: std::option::Option<std::string::String>,

    /// The URL of the suggested replacement for a deprecated resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub replacement: std::option::Option<std::string::String>,

    /// The deprecation state of this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<std::string::String>,
}

impl DeprecationStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [deleted][crate::model::DeprecationStatus::deleted].
    pub fn set_deleted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.deleted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deleted][crate::model::DeprecationStatus::deleted].
    pub fn set_or_clear_deleted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.deleted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deprecated][crate::model::DeprecationStatus::deprecated].
    pub fn set_deprecated<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.deprecated = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deprecated][crate::model::DeprecationStatus::deprecated].
    pub fn set_or_clear_deprecated<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.deprecated = v.map(|x| x.into());
        self
    }

    /// Sets the value of [obsolete][crate::model::DeprecationStatus::obsolete].
    pub fn set_obsolete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.obsolete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [obsolete][crate::model::DeprecationStatus::obsolete].
    pub fn set_or_clear_obsolete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.obsolete = v.map(|x| x.into());
        self
    }

    /// Sets the value of [replacement][crate::model::DeprecationStatus::replacement].
    pub fn set_replacement<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.replacement = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [replacement][crate::model::DeprecationStatus::replacement].
    pub fn set_or_clear_replacement<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.replacement = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::DeprecationStatus::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::DeprecationStatus::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.map(|x| x.into());
        self
    }
}

/// A quotas entry.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Quota {
    /// Quota limit for this metric.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<f64>,

    /// Name of the quota metric.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric: std::option::Option<std::string::String>,

    /// Owning resource. This is the resource on which this quota is applied.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner: std::option::Option<std::string::String>,

    /// Current usage of this metric.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub usage: std::option::Option<f64>,
}

impl Quota {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit][crate::model::Quota::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::Quota::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metric][crate::model::Quota::metric].
    pub fn set_metric<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.metric = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metric][crate::model::Quota::metric].
    pub fn set_or_clear_metric<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.metric = v.map(|x| x.into());
        self
    }

    /// Sets the value of [owner][crate::model::Quota::owner].
    pub fn set_owner<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner][crate::model::Quota::owner].
    pub fn set_or_clear_owner<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner = v.map(|x| x.into());
        self
    }

    /// Sets the value of [usage][crate::model::Quota::usage].
    pub fn set_usage<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.usage = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [usage][crate::model::Quota::usage].
    pub fn set_or_clear_usage<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.usage = v.map(|x| x.into());
        self
    }
}

/// A metadata key/value entry.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Metadata {
    /// Specifies a fingerprint for this request, which is essentially a hash of
    /// the metadata's contents and used for optimistic locking. You must always
    /// provide an up-to-date fingerprint hash in order to update or change
    /// metadata.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// Array of key/value pairs. The total size of all keys and values must be
    /// less than 512 KB.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::metadata::Items>,

    /// Type of the resource. Always `compute#metadata` for metadata.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,
}

impl Metadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fingerprint][crate::model::Metadata::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::Metadata::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::Metadata::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::metadata::Items>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::Metadata::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Metadata::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }
}

/// A set of instance tags.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Tags {
    /// Specifies a fingerprint for this request. You must always provide an
    /// up-to-date fingerprint hash in order to update or change tags.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// An array of tags. Each tag must be 1-63 characters long, and comply with
    /// RFC1035.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<std::string::String>,
}

impl Tags {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fingerprint][crate::model::Tags::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::Tags::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::Tags::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ZoneSetLabelsRequest {
    /// The fingerprint of the previous set of labels for this resource, used to
    /// detect conflicts.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// The labels to set for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl ZoneSetLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_fingerprint][crate::model::ZoneSetLabelsRequest::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::ZoneSetLabelsRequest::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::ZoneSetLabelsRequest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegionSetLabelsRequest {
    /// The fingerprint of the previous set of labels for this resource, used to
    /// detect conflicts.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// The labels to set for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl RegionSetLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_fingerprint][crate::model::RegionSetLabelsRequest::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::RegionSetLabelsRequest::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::RegionSetLabelsRequest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GlobalSetLabelsRequest {
    /// The fingerprint of the previous set of labels for this resource, used to
    /// detect conflicts.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// A list of labels to apply for this resource.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl GlobalSetLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_fingerprint][crate::model::GlobalSetLabelsRequest::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::GlobalSetLabelsRequest::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::GlobalSetLabelsRequest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Represents an IP Address resource.
///
/// Google Compute Engine has two IP Address resources: global static external
/// IP addresses and regional static external IP addresses.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Address {
    /// The static IP address represented by this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address: std::option::Option<std::string::String>,

    /// The type of address to reserve, either `INTERNAL` or `EXTERNAL`. If
    /// unspecified, defaults to `EXTERNAL`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub address_type: std::option::Option<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// The IP version that will be used by this address.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_version: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_endpoint_type: std::option::Option<std::string::String>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// A fingerprint for the labels being applied to this resource, which is
    /// essentially a hash of the labels set used for optimistic locking. The
    /// fingerprint is initially generated by Compute Engine and changes after
    /// every request to modify or update labels. You must always provide an
    /// up-to-date fingerprint hash in order to update or change labels,
    /// otherwise the request will fail with error `412 conditionNotMet`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The URL of the network in which to reserve the address.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    /// This signifies the networking tier used for configuring this address.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_tier: std::option::Option<std::string::String>,

    /// The prefix length if the resource represents an IP range.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub prefix_length: std::option::Option<i32>,

    /// The purpose of this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purpose: std::option::Option<std::string::String>,

    /// The URL of the region where a regional address resides. This field is
    /// not applicable to global addresses.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// The status of the address, which can be one of `RESERVING`, `RESERVED`,
    /// or `IN_USE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    /// The URL of the subnetwork in which to reserve the address.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnetwork: std::option::Option<std::string::String>,

    /// The URLs of the resources that are using this address.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub users: std::vec::Vec<std::string::String>,
}

impl Address {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address][crate::model::Address::address].
    pub fn set_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address][crate::model::Address::address].
    pub fn set_or_clear_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_type][crate::model::Address::address_type].
    pub fn set_address_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_type][crate::model::Address::address_type].
    pub fn set_or_clear_address_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.address_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Address::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Address::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Address::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Address::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Address::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Address::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ip_version][crate::model::Address::ip_version].
    pub fn set_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_version][crate::model::Address::ip_version].
    pub fn set_or_clear_ip_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_endpoint_type][crate::model::Address::ipv6_endpoint_type].
    pub fn set_ipv6_endpoint_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_endpoint_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_endpoint_type][crate::model::Address::ipv6_endpoint_type].
    pub fn set_or_clear_ipv6_endpoint_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_endpoint_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Address::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Address::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_fingerprint][crate::model::Address::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::Address::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Address::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [name][crate::model::Address::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Address::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::Address::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::Address::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_tier][crate::model::Address::network_tier].
    pub fn set_network_tier<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_tier][crate::model::Address::network_tier].
    pub fn set_or_clear_network_tier<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix_length][crate::model::Address::prefix_length].
    pub fn set_prefix_length<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.prefix_length = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix_length][crate::model::Address::prefix_length].
    pub fn set_or_clear_prefix_length<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.prefix_length = v.map(|x| x.into());
        self
    }

    /// Sets the value of [purpose][crate::model::Address::purpose].
    pub fn set_purpose<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [purpose][crate::model::Address::purpose].
    pub fn set_or_clear_purpose<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purpose = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Address::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Address::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Address::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Address::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Address::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Address::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnetwork][crate::model::Address::subnetwork].
    pub fn set_subnetwork<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnetwork][crate::model::Address::subnetwork].
    pub fn set_or_clear_subnetwork<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork = v.map(|x| x.into());
        self
    }

    /// Sets the value of [users][crate::model::Address::users].
    pub fn set_users<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.users = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegionAddressesMoveRequest {
    /// An optional destination address description if intended to be different
    /// from the source.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The URL of the destination address to move to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination_address: std::option::Option<std::string::String>,
}

impl RegionAddressesMoveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::RegionAddressesMoveRequest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::RegionAddressesMoveRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_address][crate::model::RegionAddressesMoveRequest::destination_address].
    pub fn set_destination_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_address][crate::model::RegionAddressesMoveRequest::destination_address].
    pub fn set_or_clear_destination_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_address = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GlobalAddressesMoveRequest {
    /// An optional destination address description if intended to be different
    /// from the source.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The URL of the destination address to move to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination_address: std::option::Option<std::string::String>,
}

impl GlobalAddressesMoveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::GlobalAddressesMoveRequest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::GlobalAddressesMoveRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_address][crate::model::GlobalAddressesMoveRequest::destination_address].
    pub fn set_destination_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_address][crate::model::GlobalAddressesMoveRequest::destination_address].
    pub fn set_or_clear_destination_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_address = v.map(|x| x.into());
        self
    }
}

/// Represents a Persistent Disk resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Disk {
    /// The architecture of the disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub architecture: std::option::Option<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// A list of features to enable on the guest operating system.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub guest_os_features: std::vec::Vec<crate::model::GuestOsFeature>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// A fingerprint for the labels being applied to this resource, which is
    /// essentially a hash of the labels set used for optimistic locking. The
    /// fingerprint is initially generated by Compute Engine and changes after
    /// every request to modify or update labels. You must always provide an
    /// up-to-date fingerprint hash in order to update or change labels,
    /// otherwise the request will fail with error `412 conditionNotMet`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Last attach timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_attach_timestamp: std::option::Option<std::string::String>,

    /// Last detach timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_detach_timestamp: std::option::Option<std::string::String>,

    /// A list of publicly visible licenses.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub licenses: std::vec::Vec<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Internal use only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub options: std::option::Option<std::string::String>,

    /// Physical block size of the persistent disk, in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub physical_block_size_bytes: std::option::Option<i64>,

    /// Indicates how many IOPS to provision for the disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub provisioned_iops: std::option::Option<i64>,

    /// Indicates how much throughput to provision for the disk, in MB per
    /// second.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub provisioned_throughput: std::option::Option<i64>,

    /// URL of the region where the disk resides. Only applicable for regional
    /// resources.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// URLs of the zones where the disk should be replicated to.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub replica_zones: std::vec::Vec<std::string::String>,

    /// Resource policies applied to this disk for automatic snapshot creations.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub resource_policies: std::vec::Vec<std::string::String>,

    /// Reserved for future use.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub satisfies_pzs: std::option::Option<bool>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Size, in GB, of the persistent disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub size_gb: std::option::Option<i64>,

    /// The source disk used to create this disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_disk: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_disk_id: std::option::Option<std::string::String>,

    /// The source image used to create this disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_image: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_image_id: std::option::Option<std::string::String>,

    /// The source snapshot used to create this disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_snapshot: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_snapshot_id: std::option::Option<std::string::String>,

    /// The status of disk creation.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    /// URL of the disk type resource describing which disk type to use to
    /// create the disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,

    /// Links to the users of the disk (attached instances) in form:
    /// `projects/project/zones/zone/instances/instance`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub users: std::vec::Vec<std::string::String>,

    /// URL of the zone where the disk resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<std::string::String>,
}

impl Disk {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [architecture][crate::model::Disk::architecture].
    pub fn set_architecture<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [architecture][crate::model::Disk::architecture].
    pub fn set_or_clear_architecture<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Disk::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Disk::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Disk::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Disk::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guest_os_features][crate::model::Disk::guest_os_features].
    pub fn set_guest_os_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::GuestOsFeature>,
    {
        use std::iter::Iterator;
        self.guest_os_features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::Disk::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Disk::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Disk::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Disk::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_fingerprint][crate::model::Disk::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::Disk::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Disk::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [last_attach_timestamp][crate::model::Disk::last_attach_timestamp].
    pub fn set_last_attach_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_attach_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_attach_timestamp][crate::model::Disk::last_attach_timestamp].
    pub fn set_or_clear_last_attach_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_attach_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_detach_timestamp][crate::model::Disk::last_detach_timestamp].
    pub fn set_last_detach_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_detach_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_detach_timestamp][crate::model::Disk::last_detach_timestamp].
    pub fn set_or_clear_last_detach_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_detach_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [licenses][crate::model::Disk::licenses].
    pub fn set_licenses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.licenses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [name][crate::model::Disk::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Disk::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [options][crate::model::Disk::options].
    pub fn set_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [options][crate::model::Disk::options].
    pub fn set_or_clear_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [physical_block_size_bytes][crate::model::Disk::physical_block_size_bytes].
    pub fn set_physical_block_size_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.physical_block_size_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [physical_block_size_bytes][crate::model::Disk::physical_block_size_bytes].
    pub fn set_or_clear_physical_block_size_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.physical_block_size_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provisioned_iops][crate::model::Disk::provisioned_iops].
    pub fn set_provisioned_iops<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_iops = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provisioned_iops][crate::model::Disk::provisioned_iops].
    pub fn set_or_clear_provisioned_iops<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_iops = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provisioned_throughput][crate::model::Disk::provisioned_throughput].
    pub fn set_provisioned_throughput<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_throughput = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provisioned_throughput][crate::model::Disk::provisioned_throughput].
    pub fn set_or_clear_provisioned_throughput<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_throughput = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Disk::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Disk::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [replica_zones][crate::model::Disk::replica_zones].
    pub fn set_replica_zones<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.replica_zones = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [resource_policies][crate::model::Disk::resource_policies].
    pub fn set_resource_policies<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.resource_policies = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [satisfies_pzs][crate::model::Disk::satisfies_pzs].
    pub fn set_satisfies_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [satisfies_pzs][crate::model::Disk::satisfies_pzs].
    pub fn set_or_clear_satisfies_pzs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Disk::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Disk::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [size_gb][crate::model::Disk::size_gb].
    pub fn set_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [size_gb][crate::model::Disk::size_gb].
    pub fn set_or_clear_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.size_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_disk][crate::model::Disk::source_disk].
    pub fn set_source_disk<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_disk][crate::model::Disk::source_disk].
    pub fn set_or_clear_source_disk<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_disk_id][crate::model::Disk::source_disk_id].
    pub fn set_source_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_disk_id][crate::model::Disk::source_disk_id].
    pub fn set_or_clear_source_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_image][crate::model::Disk::source_image].
    pub fn set_source_image<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_image][crate::model::Disk::source_image].
    pub fn set_or_clear_source_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_image_id][crate::model::Disk::source_image_id].
    pub fn set_source_image_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_image_id][crate::model::Disk::source_image_id].
    pub fn set_or_clear_source_image_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_snapshot][crate::model::Disk::source_snapshot].
    pub fn set_source_snapshot<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_snapshot][crate::model::Disk::source_snapshot].
    pub fn set_or_clear_source_snapshot<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_snapshot_id][crate::model::Disk::source_snapshot_id].
    pub fn set_source_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_snapshot_id][crate::model::Disk::source_snapshot_id].
    pub fn set_or_clear_source_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Disk::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Disk::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::Disk::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::Disk::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [users][crate::model::Disk::users].
    pub fn set_users<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.users = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [zone][crate::model::Disk::zone].
    pub fn set_zone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][crate::model::Disk::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisksResizeRequest {
    /// The new size of the persistent disk, which is specified in GB.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub size_gb: std::option::Option<i64>,
}

impl DisksResizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [size_gb][crate::model::DisksResizeRequest::size_gb].
    pub fn set_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [size_gb][crate::model::DisksResizeRequest::size_gb].
    pub fn set_or_clear_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.size_gb = v.map(|x| x.into());
        self
    }
}

/// Represents an Instance resource.
///
/// An instance is a virtual machine that is hosted on Google Cloud Platform.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Instance {
    /// Allows this instance to send and receive packets with non-matching
    /// destination or source IPs.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub can_ip_forward: std::option::Option<bool>,

    /// The CPU platform used by this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cpu_platform: std::option::Option<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// Whether the resource should be protected against deletion.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deletion_protection: std::option::Option<bool>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Array of disks associated with this instance. Persistent disks must be
    /// created before you can assign them.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disks: std::vec::Vec<crate::model::AttachedDisk>,

    /// Specifies a fingerprint for this resource, which is essentially a hash
    /// of the instance's contents and used for optimistic locking.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// Specifies the hostname of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// A fingerprint for the labels being applied to this resource, which is
    /// essentially a hash of the labels set used for optimistic locking. The
    /// fingerprint is initially generated by Compute Engine and changes after
    /// every request to modify or update labels. You must always provide an
    /// up-to-date fingerprint hash in order to update or change labels,
    /// otherwise the request will fail with error `412 conditionNotMet`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Last start timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_start_timestamp: std::option::Option<std::string::String>,

    /// Last stop timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_stop_timestamp: std::option::Option<std::string::String>,

    /// Last suspended timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_suspended_timestamp: std::option::Option<std::string::String>,

    /// Full or partial URL of the machine type resource to use for this
    /// instance, in the format: `zones/zone/machineTypes/machine-type`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub machine_type: std::option::Option<std::string::String>,

    /// The metadata key/value pairs assigned to this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metadata: std::option::Option<crate::model::Metadata>,

    /// Specifies a minimum CPU platform for the VM instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub min_cpu_platform: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// An array of network configurations for this instance.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub network_interfaces: std::vec::Vec<crate::model::NetworkInterface>,

    /// Resource policies applied to this instance.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub resource_policies: std::vec::Vec<std::string::String>,

    /// Reserved for future use.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub satisfies_pzs: std::option::Option<bool>,

    /// Sets the scheduling options for this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scheduling: std::option::Option<crate::model::Scheduling>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// A list of service accounts, with their specified scopes, authorized for
    /// this instance.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub service_accounts: std::vec::Vec<crate::model::ServiceAccount>,

    /// Whether a VM has been restricted for start because Compute Engine has
    /// detected suspicious activity.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_restricted: std::option::Option<bool>,

    /// The status of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    /// An optional, human-readable explanation of the status.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_message: std::option::Option<std::string::String>,

    /// Tags to apply to this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<crate::model::Tags>,

    /// URL of the zone where the resource resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<std::string::String>,
}

impl Instance {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [can_ip_forward][crate::model::Instance::can_ip_forward].
    pub fn set_can_ip_forward<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.can_ip_forward = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [can_ip_forward][crate::model::Instance::can_ip_forward].
    pub fn set_or_clear_can_ip_forward<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.can_ip_forward = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cpu_platform][crate::model::Instance::cpu_platform].
    pub fn set_cpu_platform<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cpu_platform = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cpu_platform][crate::model::Instance::cpu_platform].
    pub fn set_or_clear_cpu_platform<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cpu_platform = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Instance::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Instance::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deletion_protection][crate::model::Instance::deletion_protection].
    pub fn set_deletion_protection<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.deletion_protection = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deletion_protection][crate::model::Instance::deletion_protection].
    pub fn set_or_clear_deletion_protection<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.deletion_protection = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Instance::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Instance::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disks][crate::model::Instance::disks].
    pub fn set_disks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AttachedDisk>,
    {
        use std::iter::Iterator;
        self.disks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [fingerprint][crate::model::Instance::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::Instance::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hostname][crate::model::Instance::hostname].
    pub fn set_hostname<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hostname][crate::model::Instance::hostname].
    pub fn set_or_clear_hostname<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.hostname = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Instance::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Instance::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Instance::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Instance::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_fingerprint][crate::model::Instance::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::Instance::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Instance::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [last_start_timestamp][crate::model::Instance::last_start_timestamp].
    pub fn set_last_start_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_start_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_start_timestamp][crate::model::Instance::last_start_timestamp].
    pub fn set_or_clear_last_start_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_start_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_stop_timestamp][crate::model::Instance::last_stop_timestamp].
    pub fn set_last_stop_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_stop_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_stop_timestamp][crate::model::Instance::last_stop_timestamp].
    pub fn set_or_clear_last_stop_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_stop_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_suspended_timestamp][crate::model::Instance::last_suspended_timestamp].
    pub fn set_last_suspended_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_suspended_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_suspended_timestamp][crate::model::Instance::last_suspended_timestamp].
    pub fn set_or_clear_last_suspended_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_suspended_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [machine_type][crate::model::Instance::machine_type].
    pub fn set_machine_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.machine_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [machine_type][crate::model::Instance::machine_type].
    pub fn set_or_clear_machine_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.machine_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Instance::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Metadata>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::Instance::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Metadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [min_cpu_platform][crate::model::Instance::min_cpu_platform].
    pub fn set_min_cpu_platform<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.min_cpu_platform = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [min_cpu_platform][crate::model::Instance::min_cpu_platform].
    pub fn set_or_clear_min_cpu_platform<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.min_cpu_platform = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Instance::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Instance::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interfaces][crate::model::Instance::network_interfaces].
    pub fn set_network_interfaces<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NetworkInterface>,
    {
        use std::iter::Iterator;
        self.network_interfaces = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [resource_policies][crate::model::Instance::resource_policies].
    pub fn set_resource_policies<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.resource_policies = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [satisfies_pzs][crate::model::Instance::satisfies_pzs].
    pub fn set_satisfies_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [satisfies_pzs][crate::model::Instance::satisfies_pzs].
    pub fn set_or_clear_satisfies_pzs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scheduling][crate::model::Instance::scheduling].
    pub fn set_scheduling<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Scheduling>,
    {
        self.scheduling = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scheduling][crate::model::Instance::scheduling].
    pub fn set_or_clear_scheduling<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Scheduling>,
    {
        self.scheduling = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Instance::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Instance::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_accounts][crate::model::Instance::service_accounts].
    pub fn set_service_accounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ServiceAccount>,
    {
        use std::iter::Iterator;
        self.service_accounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [start_restricted][crate::model::Instance::start_restricted].
    pub fn set_start_restricted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.start_restricted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_restricted][crate::model::Instance::start_restricted].
    pub fn set_or_clear_start_restricted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.start_restricted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Instance::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Instance::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_message][crate::model::Instance::status_message].
    pub fn set_status_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_message][crate::model::Instance::status_message].
    pub fn set_or_clear_status_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status_message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::Instance::tags].
    pub fn set_tags<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Tags>,
    {
        self.tags = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tags][crate::model::Instance::tags].
    pub fn set_or_clear_tags<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Tags>,
    {
        self.tags = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][crate::model::Instance::zone].
    pub fn set_zone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][crate::model::Instance::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }
}

/// An instance-attached disk resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDisk {
    /// The architecture of the attached disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub architecture: std::option::Option<std::string::String>,

    /// Specifies whether the disk will be auto-deleted when the instance is
    /// deleted (but not when the disk is detached from the instance).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_delete: std::option::Option<bool>,

    /// Indicates that this is a boot disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub boot: std::option::Option<bool>,

    /// Specifies a unique device name of your choice that is reflected into the
    /// `/dev/disk/by-id/google-*` tree of a Linux operating system running
    /// within the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device_name: std::option::Option<std::string::String>,

    /// The size of the disk in GB.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub disk_size_gb: std::option::Option<i64>,

    /// Whether to force attach the regional disk even if it's currently
    /// attached to another instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub force_attach: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub guest_os_features: std::vec::Vec<crate::model::GuestOsFeature>,

    /// A zero-based index to this disk, where 0 is reserved for the boot disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index: std::option::Option<i32>,

    /// Specifies the parameters for a new disk that will be created alongside
    /// the new instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initialize_params: std::option::Option<crate::model::AttachedDiskInitializeParams>,

    /// Specifies the disk interface to use for attaching this disk, which is
    /// either `SCSI` or `NVME`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub interface: std::option::Option<std::string::String>,

    /// Type of the resource. Always `compute#attachedDisk` for attached disks.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Any valid publicly visible licenses.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub licenses: std::vec::Vec<std::string::String>,

    /// The mode in which to attach this disk, either `READ_WRITE` or
    /// `READ_ONLY`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mode: std::option::Option<std::string::String>,

    /// Specifies a valid partial or full URL to an existing Persistent Disk
    /// resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source: std::option::Option<std::string::String>,

    /// Specifies the type of the disk, either `SCRATCH` or `PERSISTENT`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,
}

impl AttachedDisk {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [architecture][crate::model::AttachedDisk::architecture].
    pub fn set_architecture<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [architecture][crate::model::AttachedDisk::architecture].
    pub fn set_or_clear_architecture<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auto_delete][crate::model::AttachedDisk::auto_delete].
    pub fn set_auto_delete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_delete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_delete][crate::model::AttachedDisk::auto_delete].
    pub fn set_or_clear_auto_delete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_delete = v.map(|x| x.into());
        self
    }

    /// Sets the value of [boot][crate::model::AttachedDisk::boot].
    pub fn set_boot<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.boot = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [boot][crate::model::AttachedDisk::boot].
    pub fn set_or_clear_boot<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.boot = v.map(|x| x.into());
        self
    }

    /// Sets the value of [device_name][crate::model::AttachedDisk::device_name].
    pub fn set_device_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.device_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [device_name][crate::model::AttachedDisk::device_name].
    pub fn set_or_clear_device_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.device_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_size_gb][crate::model::AttachedDisk::disk_size_gb].
    pub fn set_disk_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_size_gb][crate::model::AttachedDisk::disk_size_gb].
    pub fn set_or_clear_disk_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [force_attach][crate::model::AttachedDisk::force_attach].
    pub fn set_force_attach<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.force_attach = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [force_attach][crate::model::AttachedDisk::force_attach].
    pub fn set_or_clear_force_attach<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.force_attach = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guest_os_features][crate::model::AttachedDisk::guest_os_features].
    pub fn set_guest_os_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::GuestOsFeature>,
    {
        use std::iter::Iterator;
        self.guest_os_features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [index][crate::model::AttachedDisk::index].
    pub fn set_index<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.index = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [index][crate::model::AttachedDisk::index].
    pub fn set_or_clear_index<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.index = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initialize_params][crate::model::AttachedDisk::initialize_params].
    pub fn set_initialize_params<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AttachedDiskInitializeParams>,
    {
        self.initialize_params = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initialize_params][crate::model::AttachedDisk::initialize_params].
    pub fn set_or_clear_initialize_params<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AttachedDiskInitializeParams>,
    {
        self.initialize_params = v.map(|x| x.into());
        self
    }

    /// Sets the value of [interface][crate::model::AttachedDisk::interface].
    pub fn set_interface<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interface = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interface][crate::model::AttachedDisk::interface].
    pub fn set_or_clear_interface<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interface = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::AttachedDisk::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::AttachedDisk::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [licenses][crate::model::AttachedDisk::licenses].
    pub fn set_licenses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.licenses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [mode][crate::model::AttachedDisk::mode].
    pub fn set_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mode][crate::model::AttachedDisk::mode].
    pub fn set_or_clear_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source][crate::model::AttachedDisk::source].
    pub fn set_source<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source][crate::model::AttachedDisk::source].
    pub fn set_or_clear_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::AttachedDisk::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::AttachedDisk::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// Input only. Specifies the parameters for a new disk that will be created
/// alongside the new instance.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDiskInitializeParams {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub architecture: std::option::Option<std::string::String>,

    /// An optional description. Provide this property when creating the disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Specifies the disk name. If not specified, the default is to use the
    /// name of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_name: std::option::Option<std::string::String>,

    /// Specifies the size of the disk in base-2 GB.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub disk_size_gb: std::option::Option<i64>,

    /// Specifies the disk type to use to create the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_type: std::option::Option<std::string::String>,

    /// Labels to apply to this disk.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub provisioned_iops: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub provisioned_throughput: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub resource_policies: std::vec::Vec<std::string::String>,

    /// The source image to create this disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_image: std::option::Option<std::string::String>,

    /// The source snapshot to create this disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_snapshot: std::option::Option<std::string::String>,
}

impl AttachedDiskInitializeParams {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [architecture][crate::model::AttachedDiskInitializeParams::architecture].
    pub fn set_architecture<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [architecture][crate::model::AttachedDiskInitializeParams::architecture].
    pub fn set_or_clear_architecture<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::AttachedDiskInitializeParams::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::AttachedDiskInitializeParams::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_name][crate::model::AttachedDiskInitializeParams::disk_name].
    pub fn set_disk_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_name][crate::model::AttachedDiskInitializeParams::disk_name].
    pub fn set_or_clear_disk_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_size_gb][crate::model::AttachedDiskInitializeParams::disk_size_gb].
    pub fn set_disk_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_size_gb][crate::model::AttachedDiskInitializeParams::disk_size_gb].
    pub fn set_or_clear_disk_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_type][crate::model::AttachedDiskInitializeParams::disk_type].
    pub fn set_disk_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_type][crate::model::AttachedDiskInitializeParams::disk_type].
    pub fn set_or_clear_disk_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::AttachedDiskInitializeParams::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [provisioned_iops][crate::model::AttachedDiskInitializeParams::provisioned_iops].
    pub fn set_provisioned_iops<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_iops = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provisioned_iops][crate::model::AttachedDiskInitializeParams::provisioned_iops].
    pub fn set_or_clear_provisioned_iops<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_iops = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provisioned_throughput][crate::model::AttachedDiskInitializeParams::provisioned_throughput].
    pub fn set_provisioned_throughput<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_throughput = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provisioned_throughput][crate::model::AttachedDiskInitializeParams::provisioned_throughput].
    pub fn set_or_clear_provisioned_throughput<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.provisioned_throughput = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_policies][crate::model::AttachedDiskInitializeParams::resource_policies].
    pub fn set_resource_policies<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.resource_policies = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [source_image][crate::model::AttachedDiskInitializeParams::source_image].
    pub fn set_source_image<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_image][crate::model::AttachedDiskInitializeParams::source_image].
    pub fn set_or_clear_source_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_snapshot][crate::model::AttachedDiskInitializeParams::source_snapshot].
    pub fn set_source_snapshot<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_snapshot][crate::model::AttachedDiskInitializeParams::source_snapshot].
    pub fn set_or_clear_source_snapshot<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot = v.map(|x| x.into());
        self
    }
}

/// A network interface resource attached to an instance.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkInterface {
    /// An array of configurations for this interface. Currently, only one
    /// access config, `ONE_TO_ONE_NAT`, is supported.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub access_configs: std::vec::Vec<crate::model::AccessConfig>,

    /// An array of alias IP ranges for this network interface.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub alias_ip_ranges: std::vec::Vec<crate::model::AliasIpRange>,

    /// Fingerprint of this resource. A hash of the contents stored in this
    /// object. This field is used in optimistic locking.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// An IPv6 internal network address for this network interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_address: std::option::Option<std::string::String>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// The name of the network interface, which is generated by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// URL of the VPC network resource for this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    /// An IPv4 internal IP address to assign to the instance for this network
    /// interface.
    #[serde(rename = "networkIP")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_ip: std::option::Option<std::string::String>,

    /// The type of vNIC to be used on this interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nic_type: std::option::Option<std::string::String>,

    /// The networking queue count that's specified by users for the network
    /// interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub queue_count: std::option::Option<i32>,

    /// The stack type for this network interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stack_type: std::option::Option<std::string::String>,

    /// The URL of the Subnetwork resource for this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnetwork: std::option::Option<std::string::String>,
}

impl NetworkInterface {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [access_configs][crate::model::NetworkInterface::access_configs].
    pub fn set_access_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AccessConfig>,
    {
        use std::iter::Iterator;
        self.access_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [alias_ip_ranges][crate::model::NetworkInterface::alias_ip_ranges].
    pub fn set_alias_ip_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AliasIpRange>,
    {
        use std::iter::Iterator;
        self.alias_ip_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [fingerprint][crate::model::NetworkInterface::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::NetworkInterface::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_address][crate::model::NetworkInterface::ipv6_address].
    pub fn set_ipv6_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_address][crate::model::NetworkInterface::ipv6_address].
    pub fn set_or_clear_ipv6_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::NetworkInterface::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::NetworkInterface::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::NetworkInterface::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::NetworkInterface::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::NetworkInterface::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::NetworkInterface::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_ip][crate::model::NetworkInterface::network_ip].
    pub fn set_network_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_ip][crate::model::NetworkInterface::network_ip].
    pub fn set_or_clear_network_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nic_type][crate::model::NetworkInterface::nic_type].
    pub fn set_nic_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.nic_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nic_type][crate::model::NetworkInterface::nic_type].
    pub fn set_or_clear_nic_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.nic_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [queue_count][crate::model::NetworkInterface::queue_count].
    pub fn set_queue_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.queue_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [queue_count][crate::model::NetworkInterface::queue_count].
    pub fn set_or_clear_queue_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.queue_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [stack_type][crate::model::NetworkInterface::stack_type].
    pub fn set_stack_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.stack_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_type][crate::model::NetworkInterface::stack_type].
    pub fn set_or_clear_stack_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.stack_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnetwork][crate::model::NetworkInterface::subnetwork].
    pub fn set_subnetwork<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnetwork][crate::model::NetworkInterface::subnetwork].
    pub fn set_or_clear_subnetwork<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork = v.map(|x| x.into());
        self
    }
}

/// An alias IP range attached to an instance's network interface.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AliasIpRange {
    /// The IP alias ranges to allocate for this interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_cidr_range: std::option::Option<std::string::String>,

    /// The name of a subnetwork secondary IP range from which to allocate an IP
    /// alias range.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnetwork_range_name: std::option::Option<std::string::String>,
}

impl AliasIpRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ip_cidr_range][crate::model::AliasIpRange::ip_cidr_range].
    pub fn set_ip_cidr_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_cidr_range][crate::model::AliasIpRange::ip_cidr_range].
    pub fn set_or_clear_ip_cidr_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnetwork_range_name][crate::model::AliasIpRange::subnetwork_range_name].
    pub fn set_subnetwork_range_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork_range_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnetwork_range_name][crate::model::AliasIpRange::subnetwork_range_name].
    pub fn set_or_clear_subnetwork_range_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork_range_name = v.map(|x| x.into());
        self
    }
}

/// An access configuration attached to an instance's network interface.
///
/// Only one access config per instance is supported.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AccessConfig {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub external_ipv6: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub external_ipv6_prefix_length: std::option::Option<i32>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// The name of this access configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Applies to `ONE_TO_ONE_NAT` only. An external IP address associated with
    /// this instance.
    #[serde(rename = "natIP")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nat_ip: std::option::Option<std::string::String>,

    /// This signifies the networking tier used for configuring this access
    /// configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_tier: std::option::Option<std::string::String>,

    /// The DNS domain name for the public PTR record.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub public_ptr_domain_name: std::option::Option<std::string::String>,

    /// Specifies whether a public DNS `PTR` record should be created to map the
    /// external IP address of the instance to a DNS domain name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub set_public_ptr: std::option::Option<bool>,

    /// The type of configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,
}

impl AccessConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [external_ipv6][crate::model::AccessConfig::external_ipv6].
    pub fn set_external_ipv6<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.external_ipv6 = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [external_ipv6][crate::model::AccessConfig::external_ipv6].
    pub fn set_or_clear_external_ipv6<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.external_ipv6 = v.map(|x| x.into());
        self
    }

    /// Sets the value of [external_ipv6_prefix_length][crate::model::AccessConfig::external_ipv6_prefix_length].
    pub fn set_external_ipv6_prefix_length<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.external_ipv6_prefix_length = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [external_ipv6_prefix_length][crate::model::AccessConfig::external_ipv6_prefix_length].
    pub fn set_or_clear_external_ipv6_prefix_length<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.external_ipv6_prefix_length = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::AccessConfig::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::AccessConfig::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::AccessConfig::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::AccessConfig::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nat_ip][crate::model::AccessConfig::nat_ip].
    pub fn set_nat_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.nat_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nat_ip][crate::model::AccessConfig::nat_ip].
    pub fn set_or_clear_nat_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.nat_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_tier][crate::model::AccessConfig::network_tier].
    pub fn set_network_tier<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_tier][crate::model::AccessConfig::network_tier].
    pub fn set_or_clear_network_tier<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = v.map(|x| x.into());
        self
    }

    /// Sets the value of [public_ptr_domain_name][crate::model::AccessConfig::public_ptr_domain_name].
    pub fn set_public_ptr_domain_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.public_ptr_domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [public_ptr_domain_name][crate::model::AccessConfig::public_ptr_domain_name].
    pub fn set_or_clear_public_ptr_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.public_ptr_domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [set_public_ptr][crate::model::AccessConfig::set_public_ptr].
    pub fn set_set_public_ptr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.set_public_ptr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [set_public_ptr][crate::model::AccessConfig::set_public_ptr].
    pub fn set_or_clear_set_public_ptr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.set_public_ptr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::AccessConfig::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::AccessConfig::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// Sets the scheduling options for an Instance.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Scheduling {
    /// Specifies whether the instance should be automatically restarted if it
    /// is terminated by Compute Engine (not terminated by a user).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub automatic_restart: std::option::Option<bool>,

    /// Specifies the termination action for the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_termination_action: std::option::Option<std::string::String>,

    /// The minimum number of virtual CPUs this instance will consume when
    /// running on a sole-tenant node.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub min_node_cpus: std::option::Option<i32>,

    /// Defines the maintenance behavior for this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub on_host_maintenance: std::option::Option<std::string::String>,

    /// Defines whether the instance is preemptible.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub preemptible: std::option::Option<bool>,

    /// Specifies the provisioning model of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioning_model: std::option::Option<std::string::String>,
}

impl Scheduling {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [automatic_restart][crate::model::Scheduling::automatic_restart].
    pub fn set_automatic_restart<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.automatic_restart = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [automatic_restart][crate::model::Scheduling::automatic_restart].
    pub fn set_or_clear_automatic_restart<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.automatic_restart = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_termination_action][crate::model::Scheduling::instance_termination_action].
    pub fn set_instance_termination_action<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instance_termination_action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_termination_action][crate::model::Scheduling::instance_termination_action].
    pub fn set_or_clear_instance_termination_action<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instance_termination_action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [min_node_cpus][crate::model::Scheduling::min_node_cpus].
    pub fn set_min_node_cpus<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.min_node_cpus = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [min_node_cpus][crate::model::Scheduling::min_node_cpus].
    pub fn set_or_clear_min_node_cpus<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.min_node_cpus = v.map(|x| x.into());
        self
    }

    /// Sets the value of [on_host_maintenance][crate::model::Scheduling::on_host_maintenance].
    pub fn set_on_host_maintenance<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.on_host_maintenance = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [on_host_maintenance][crate::model::Scheduling::on_host_maintenance].
    pub fn set_or_clear_on_host_maintenance<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.on_host_maintenance = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preemptible][crate::model::Scheduling::preemptible].
    pub fn set_preemptible<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preemptible = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preemptible][crate::model::Scheduling::preemptible].
    pub fn set_or_clear_preemptible<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preemptible = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provisioning_model][crate::model::Scheduling::provisioning_model].
    pub fn set_provisioning_model<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.provisioning_model = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provisioning_model][crate::model::Scheduling::provisioning_model].
    pub fn set_or_clear_provisioning_model<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.provisioning_model = v.map(|x| x.into());
        self
    }
}

/// A service account.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceAccount {
    /// Email address of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub email: std::option::Option<std::string::String>,

    /// The list of scopes to be made available for this service account.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub scopes: std::vec::Vec<std::string::String>,
}

impl ServiceAccount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [email][crate::model::ServiceAccount::email].
    pub fn set_email<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.email = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [email][crate::model::ServiceAccount::email].
    pub fn set_or_clear_email<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.email = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scopes][crate::model::ServiceAccount::scopes].
    pub fn set_scopes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.scopes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancesSetLabelsRequest {
    /// Fingerprint of the previous set of labels for this resource, used to
    /// prevent conflicts.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl InstancesSetLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_fingerprint][crate::model::InstancesSetLabelsRequest::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::InstancesSetLabelsRequest::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::InstancesSetLabelsRequest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancesSetMachineTypeRequest {
    /// Full or partial URL of the machine type resource. For example,
    /// `zones/us-central1-f/machineTypes/n1-standard-1`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub machine_type: std::option::Option<std::string::String>,
}

impl InstancesSetMachineTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [machine_type][crate::model::InstancesSetMachineTypeRequest::machine_type].
    pub fn set_machine_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.machine_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [machine_type][crate::model::InstancesSetMachineTypeRequest::machine_type].
    pub fn set_or_clear_machine_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.machine_type = v.map(|x| x.into());
        self
    }
}

/// An instance serial console output.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SerialPortOutput {
    /// The contents of the console output.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub contents: std::option::Option<std::string::String>,

    /// Type of the resource. Always `compute#serialPortOutput` for serial port
    /// output.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// The position of the next byte of content, regardless of whether the
    /// content exists.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub next: std::option::Option<i64>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// The starting byte position of the output that was returned.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub start: std::option::Option<i64>,
}

impl SerialPortOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [contents][crate::model::SerialPortOutput::contents].
    pub fn set_contents<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.contents = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [contents][crate::model::SerialPortOutput::contents].
    pub fn set_or_clear_contents<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.contents = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::SerialPortOutput::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::SerialPortOutput::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::SerialPortOutput::next].
    pub fn set_next<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::SerialPortOutput::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::SerialPortOutput::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::SerialPortOutput::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::SerialPortOutput::start].
    pub fn set_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::SerialPortOutput::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// Represents a VPC Network resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Network {
    /// Must be set to create a VPC network. If not set, a legacy network is
    /// created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_create_subnetworks: std::option::Option<bool>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Enable ULA internal ipv6 on this network.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_ula_internal_ipv6: std::option::Option<bool>,

    /// URL of the firewall policy the network is associated with.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub firewall_policy: std::option::Option<std::string::String>,

    /// The gateway address for default routing out of the network, selected by
    /// Google Cloud.
    #[serde(rename = "gatewayIPv4")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_ipv4: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_ipv6_range: std::option::Option<std::string::String>,

    /// Deprecated in favor of subnet mode networks. The range of internal
    /// addresses that are legal on this network.
    #[serde(rename = "IPv4Range")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv4_range: std::option::Option<std::string::String>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Maximum Transmission Unit in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mtu: std::option::Option<i32>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_firewall_policy_enforcement_order: std::option::Option<std::string::String>,

    /// A list of network peerings for the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub peerings: std::vec::Vec<crate::model::NetworkPeering>,

    /// The network-level routing configuration for this network.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub routing_config: std::option::Option<crate::model::NetworkRoutingConfig>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource with the resource id.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link_with_id: std::option::Option<std::string::String>,

    /// Server-defined fully-qualified URLs for all subnetworks in this VPC
    /// network.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub subnetworks: std::vec::Vec<std::string::String>,
}

impl Network {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [auto_create_subnetworks][crate::model::Network::auto_create_subnetworks].
    pub fn set_auto_create_subnetworks<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_create_subnetworks = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_create_subnetworks][crate::model::Network::auto_create_subnetworks].
    pub fn set_or_clear_auto_create_subnetworks<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_create_subnetworks = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Network::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Network::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Network::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Network::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_ula_internal_ipv6][crate::model::Network::enable_ula_internal_ipv6].
    pub fn set_enable_ula_internal_ipv6<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_ula_internal_ipv6 = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_ula_internal_ipv6][crate::model::Network::enable_ula_internal_ipv6].
    pub fn set_or_clear_enable_ula_internal_ipv6<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_ula_internal_ipv6 = v.map(|x| x.into());
        self
    }

    /// Sets the value of [firewall_policy][crate::model::Network::firewall_policy].
    pub fn set_firewall_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.firewall_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [firewall_policy][crate::model::Network::firewall_policy].
    pub fn set_or_clear_firewall_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.firewall_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_ipv4][crate::model::Network::gateway_ipv4].
    pub fn set_gateway_ipv4<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_ipv4 = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_ipv4][crate::model::Network::gateway_ipv4].
    pub fn set_or_clear_gateway_ipv4<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_ipv4 = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Network::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Network::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internal_ipv6_range][crate::model::Network::internal_ipv6_range].
    pub fn set_internal_ipv6_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_ipv6_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internal_ipv6_range][crate::model::Network::internal_ipv6_range].
    pub fn set_or_clear_internal_ipv6_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_ipv6_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv4_range][crate::model::Network::ipv4_range].
    pub fn set_ipv4_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv4_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv4_range][crate::model::Network::ipv4_range].
    pub fn set_or_clear_ipv4_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv4_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Network::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Network::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mtu][crate::model::Network::mtu].
    pub fn set_mtu<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.mtu = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mtu][crate::model::Network::mtu].
    pub fn set_or_clear_mtu<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.mtu = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Network::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Network::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_firewall_policy_enforcement_order][crate::model::Network::network_firewall_policy_enforcement_order].
    pub fn set_network_firewall_policy_enforcement_order<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_firewall_policy_enforcement_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_firewall_policy_enforcement_order][crate::model::Network::network_firewall_policy_enforcement_order].
    pub fn set_or_clear_network_firewall_policy_enforcement_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_firewall_policy_enforcement_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [peerings][crate::model::Network::peerings].
    pub fn set_peerings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NetworkPeering>,
    {
        use std::iter::Iterator;
        self.peerings = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [routing_config][crate::model::Network::routing_config].
    pub fn set_routing_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NetworkRoutingConfig>,
    {
        self.routing_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [routing_config][crate::model::Network::routing_config].
    pub fn set_or_clear_routing_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NetworkRoutingConfig>,
    {
        self.routing_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Network::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Network::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link_with_id][crate::model::Network::self_link_with_id].
    pub fn set_self_link_with_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link_with_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link_with_id][crate::model::Network::self_link_with_id].
    pub fn set_or_clear_self_link_with_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link_with_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnetworks][crate::model::Network::subnetworks].
    pub fn set_subnetworks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.subnetworks = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A network peering attached to a network resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkPeering {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_create_routes: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exchange_subnet_routes: std::option::Option<bool>,

    /// Whether to export the custom routes to peer network.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub export_custom_routes: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub export_subnet_routes_with_public_ip: std::option::Option<bool>,

    /// Whether to import the custom routes from peer network.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub import_custom_routes: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub import_subnet_routes_with_public_ip: std::option::Option<bool>,

    /// Name of this peering.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The URL of the peer network.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    /// Maximum Transmission Unit in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub peer_mtu: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stack_type: std::option::Option<std::string::String>,

    /// State for the peering, either `ACTIVE` or `INACTIVE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<std::string::String>,

    /// Details about the current state of the peering.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state_details: std::option::Option<std::string::String>,
}

impl NetworkPeering {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [auto_create_routes][crate::model::NetworkPeering::auto_create_routes].
    pub fn set_auto_create_routes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_create_routes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_create_routes][crate::model::NetworkPeering::auto_create_routes].
    pub fn set_or_clear_auto_create_routes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_create_routes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [exchange_subnet_routes][crate::model::NetworkPeering::exchange_subnet_routes].
    pub fn set_exchange_subnet_routes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exchange_subnet_routes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [exchange_subnet_routes][crate::model::NetworkPeering::exchange_subnet_routes].
    pub fn set_or_clear_exchange_subnet_routes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exchange_subnet_routes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [export_custom_routes][crate::model::NetworkPeering::export_custom_routes].
    pub fn set_export_custom_routes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.export_custom_routes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [export_custom_routes][crate::model::NetworkPeering::export_custom_routes].
    pub fn set_or_clear_export_custom_routes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.export_custom_routes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [export_subnet_routes_with_public_ip][crate::model::NetworkPeering::export_subnet_routes_with_public_ip].
    pub fn set_export_subnet_routes_with_public_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.export_subnet_routes_with_public_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [export_subnet_routes_with_public_ip][crate::model::NetworkPeering::export_subnet_routes_with_public_ip].
    pub fn set_or_clear_export_subnet_routes_with_public_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.export_subnet_routes_with_public_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [import_custom_routes][crate::model::NetworkPeering::import_custom_routes].
    pub fn set_import_custom_routes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.import_custom_routes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [import_custom_routes][crate::model::NetworkPeering::import_custom_routes].
    pub fn set_or_clear_import_custom_routes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.import_custom_routes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [import_subnet_routes_with_public_ip][crate::model::NetworkPeering::import_subnet_routes_with_public_ip].
    pub fn set_import_subnet_routes_with_public_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.import_subnet_routes_with_public_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [import_subnet_routes_with_public_ip][crate::model::NetworkPeering::import_subnet_routes_with_public_ip].
    pub fn set_or_clear_import_subnet_routes_with_public_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.import_subnet_routes_with_public_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::NetworkPeering::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::NetworkPeering::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::NetworkPeering::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::NetworkPeering::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [peer_mtu][crate::model::NetworkPeering::peer_mtu].
    pub fn set_peer_mtu<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.peer_mtu = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [peer_mtu][crate::model::NetworkPeering::peer_mtu].
    pub fn set_or_clear_peer_mtu<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.peer_mtu = v.map(|x| x.into());
        self
    }

    /// Sets the value of [stack_type][crate::model::NetworkPeering::stack_type].
    pub fn set_stack_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.stack_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_type][crate::model::NetworkPeering::stack_type].
    pub fn set_or_clear_stack_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.stack_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::NetworkPeering::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::NetworkPeering::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state_details][crate::model::NetworkPeering::state_details].
    pub fn set_state_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state_details][crate::model::NetworkPeering::state_details].
    pub fn set_or_clear_state_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state_details = v.map(|x| x.into());
        self
    }
}

/// A routing configuration attached to a network resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkRoutingConfig {
    /// The network-wide routing mode to use, either `REGIONAL` or `GLOBAL`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub routing_mode: std::option::Option<std::string::String>,
}

impl NetworkRoutingConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [routing_mode][crate::model::NetworkRoutingConfig::routing_mode].
    pub fn set_routing_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.routing_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [routing_mode][crate::model::NetworkRoutingConfig::routing_mode].
    pub fn set_or_clear_routing_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.routing_mode = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworksAddPeeringRequest {
    /// This field will be deprecated soon. Use `exchange_subnet_routes` in
    /// `network_peering` instead.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_create_routes: std::option::Option<bool>,

    /// Name of the peering, which should conform to RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Network peering parameters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_peering: std::option::Option<crate::model::NetworkPeering>,

    /// URL of the peer network. It can be either full URL or partial URL.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub peer_network: std::option::Option<std::string::String>,
}

impl NetworksAddPeeringRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [auto_create_routes][crate::model::NetworksAddPeeringRequest::auto_create_routes].
    pub fn set_auto_create_routes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_create_routes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_create_routes][crate::model::NetworksAddPeeringRequest::auto_create_routes].
    pub fn set_or_clear_auto_create_routes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_create_routes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::NetworksAddPeeringRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::NetworksAddPeeringRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_peering][crate::model::NetworksAddPeeringRequest::network_peering].
    pub fn set_network_peering<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NetworkPeering>,
    {
        self.network_peering = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_peering][crate::model::NetworksAddPeeringRequest::network_peering].
    pub fn set_or_clear_network_peering<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NetworkPeering>,
    {
        self.network_peering = v.map(|x| x.into());
        self
    }

    /// Sets the value of [peer_network][crate::model::NetworksAddPeeringRequest::peer_network].
    pub fn set_peer_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.peer_network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [peer_network][crate::model::NetworksAddPeeringRequest::peer_network].
    pub fn set_or_clear_peer_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.peer_network = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworksRemovePeeringRequest {
    /// Name of the peering, which should conform to RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
}

impl NetworksRemovePeeringRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::NetworksRemovePeeringRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::NetworksRemovePeeringRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }
}

/// Represents a Subnetwork resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Subnetwork {
    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Whether to enable flow logging for this subnetwork.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_flow_logs: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub external_ipv6_prefix: std::option::Option<std::string::String>,

    /// Fingerprint of this resource. A hash of the contents stored in this
    /// object. This field is used in optimistic locking.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// The gateway address for default routes to reach destination addresses
    /// outside this subnetwork.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_address: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_ipv6_prefix: std::option::Option<std::string::String>,

    /// The range of internal addresses that are owned by this subnetwork.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_cidr_range: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_access_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_cidr_range: std::option::Option<std::string::String>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This field denotes the VPC flow logging options for this subnetwork.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_config: std::option::Option<crate::model::SubnetworkLogConfig>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The URL of the network to which this subnetwork belongs.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    /// Whether the VMs in this subnet can access Google services without
    /// assigned external IP addresses.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub private_ip_google_access: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub private_ipv6_google_access: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purpose: std::option::Option<std::string::String>,

    /// URL of the region where the Subnetwork resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role: std::option::Option<std::string::String>,

    /// An array of configurations for secondary IP ranges for VM instances
    /// contained in this subnetwork.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub secondary_ip_ranges: std::vec::Vec<crate::model::SubnetworkSecondaryRange>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stack_type: std::option::Option<std::string::String>,

    /// The state of the subnetwork, which can be one of `READY` or `DRAINING`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<std::string::String>,
}

impl Subnetwork {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [creation_timestamp][crate::model::Subnetwork::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Subnetwork::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Subnetwork::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Subnetwork::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_flow_logs][crate::model::Subnetwork::enable_flow_logs].
    pub fn set_enable_flow_logs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_flow_logs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_flow_logs][crate::model::Subnetwork::enable_flow_logs].
    pub fn set_or_clear_enable_flow_logs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_flow_logs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [external_ipv6_prefix][crate::model::Subnetwork::external_ipv6_prefix].
    pub fn set_external_ipv6_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.external_ipv6_prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [external_ipv6_prefix][crate::model::Subnetwork::external_ipv6_prefix].
    pub fn set_or_clear_external_ipv6_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.external_ipv6_prefix = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fingerprint][crate::model::Subnetwork::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::Subnetwork::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_address][crate::model::Subnetwork::gateway_address].
    pub fn set_gateway_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_address][crate::model::Subnetwork::gateway_address].
    pub fn set_or_clear_gateway_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Subnetwork::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Subnetwork::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internal_ipv6_prefix][crate::model::Subnetwork::internal_ipv6_prefix].
    pub fn set_internal_ipv6_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_ipv6_prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internal_ipv6_prefix][crate::model::Subnetwork::internal_ipv6_prefix].
    pub fn set_or_clear_internal_ipv6_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_ipv6_prefix = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ip_cidr_range][crate::model::Subnetwork::ip_cidr_range].
    pub fn set_ip_cidr_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_cidr_range][crate::model::Subnetwork::ip_cidr_range].
    pub fn set_or_clear_ip_cidr_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_access_type][crate::model::Subnetwork::ipv6_access_type].
    pub fn set_ipv6_access_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_access_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_access_type][crate::model::Subnetwork::ipv6_access_type].
    pub fn set_or_clear_ipv6_access_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_access_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_cidr_range][crate::model::Subnetwork::ipv6_cidr_range].
    pub fn set_ipv6_cidr_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_cidr_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_cidr_range][crate::model::Subnetwork::ipv6_cidr_range].
    pub fn set_or_clear_ipv6_cidr_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_cidr_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Subnetwork::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Subnetwork::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_config][crate::model::Subnetwork::log_config].
    pub fn set_log_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubnetworkLogConfig>,
    {
        self.log_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_config][crate::model::Subnetwork::log_config].
    pub fn set_or_clear_log_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SubnetworkLogConfig>,
    {
        self.log_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Subnetwork::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Subnetwork::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::Subnetwork::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::Subnetwork::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_ip_google_access][crate::model::Subnetwork::private_ip_google_access].
    pub fn set_private_ip_google_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.private_ip_google_access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_ip_google_access][crate::model::Subnetwork::private_ip_google_access].
    pub fn set_or_clear_private_ip_google_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.private_ip_google_access = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_ipv6_google_access][crate::model::Subnetwork::private_ipv6_google_access].
    pub fn set_private_ipv6_google_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_ipv6_google_access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_ipv6_google_access][crate::model::Subnetwork::private_ipv6_google_access].
    pub fn set_or_clear_private_ipv6_google_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_ipv6_google_access = v.map(|x| x.into());
        self
    }

    /// Sets the value of [purpose][crate::model::Subnetwork::purpose].
    pub fn set_purpose<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [purpose][crate::model::Subnetwork::purpose].
    pub fn set_or_clear_purpose<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purpose = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Subnetwork::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Subnetwork::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [role][crate::model::Subnetwork::role].
    pub fn set_role<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::Subnetwork::role].
    pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secondary_ip_ranges][crate::model::Subnetwork::secondary_ip_ranges].
    pub fn set_secondary_ip_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SubnetworkSecondaryRange>,
    {
        use std::iter::Iterator;
        self.secondary_ip_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [self_link][crate::model::Subnetwork::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Subnetwork::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [stack_type][crate::model::Subnetwork::stack_type].
    pub fn set_stack_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.stack_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_type][crate::model::Subnetwork::stack_type].
    pub fn set_or_clear_stack_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.stack_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::Subnetwork::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::Subnetwork::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.map(|x| x.into());
        self
    }
}

/// Represents a secondary IP range of a subnetwork.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworkSecondaryRange {
    /// The range of IP addresses belonging to this subnetwork secondary range.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_cidr_range: std::option::Option<std::string::String>,

    /// The name associated with this subnetwork secondary range, used when
    /// adding an alias IP range to a VM instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub range_name: std::option::Option<std::string::String>,
}

impl SubnetworkSecondaryRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ip_cidr_range][crate::model::SubnetworkSecondaryRange::ip_cidr_range].
    pub fn set_ip_cidr_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_cidr_range][crate::model::SubnetworkSecondaryRange::ip_cidr_range].
    pub fn set_or_clear_ip_cidr_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [range_name][crate::model::SubnetworkSecondaryRange::range_name].
    pub fn set_range_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.range_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [range_name][crate::model::SubnetworkSecondaryRange::range_name].
    pub fn set_or_clear_range_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.range_name = v.map(|x| x.into());
        self
    }
}

/// The available logging options for this subnetwork.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworkLogConfig {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aggregation_interval: std::option::Option<std::string::String>,

    /// Whether to enable flow logging for this subnetwork.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter_expr: std::option::Option<std::string::String>,

    /// Can only be specified if VPC flow logging for this subnetwork is
    /// enabled. The value of the field must be in `[0, 1]`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_sampling: std::option::Option<f32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metadata: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub metadata_fields: std::vec::Vec<std::string::String>,
}

impl SubnetworkLogConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [aggregation_interval][crate::model::SubnetworkLogConfig::aggregation_interval].
    pub fn set_aggregation_interval<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.aggregation_interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [aggregation_interval][crate::model::SubnetworkLogConfig::aggregation_interval].
    pub fn set_or_clear_aggregation_interval<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.aggregation_interval = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable][crate::model::SubnetworkLogConfig::enable].
    pub fn set_enable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable][crate::model::SubnetworkLogConfig::enable].
    pub fn set_or_clear_enable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter_expr][crate::model::SubnetworkLogConfig::filter_expr].
    pub fn set_filter_expr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filter_expr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter_expr][crate::model::SubnetworkLogConfig::filter_expr].
    pub fn set_or_clear_filter_expr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filter_expr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [flow_sampling][crate::model::SubnetworkLogConfig::flow_sampling].
    pub fn set_flow_sampling<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.flow_sampling = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [flow_sampling][crate::model::SubnetworkLogConfig::flow_sampling].
    pub fn set_or_clear_flow_sampling<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.flow_sampling = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::SubnetworkLogConfig::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::SubnetworkLogConfig::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata_fields][crate::model::SubnetworkLogConfig::metadata_fields].
    pub fn set_metadata_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.metadata_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworksExpandIpCidrRangeRequest {
    /// The IP (in CIDR format or netmask) of internal addresses that are legal
    /// on this Subnetwork. This range should be disjoint from other subnetworks
    /// within this network.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_cidr_range: std::option::Option<std::string::String>,
}

impl SubnetworksExpandIpCidrRangeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ip_cidr_range][crate::model::SubnetworksExpandIpCidrRangeRequest::ip_cidr_range].
    pub fn set_ip_cidr_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_cidr_range][crate::model::SubnetworksExpandIpCidrRangeRequest::ip_cidr_range].
    pub fn set_or_clear_ip_cidr_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_cidr_range = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworksSetPrivateIpGoogleAccessRequest {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub private_ip_google_access: std::option::Option<bool>,
}

impl SubnetworksSetPrivateIpGoogleAccessRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [private_ip_google_access][crate::model::SubnetworksSetPrivateIpGoogleAccessRequest::private_ip_google_access].
    pub fn set_private_ip_google_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.private_ip_google_access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_ip_google_access][crate::model::SubnetworksSetPrivateIpGoogleAccessRequest::private_ip_google_access].
    pub fn set_or_clear_private_ip_google_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.private_ip_google_access = v.map(|x| x.into());
        self
    }
}

/// Represents a Firewall Rule resource.
///
/// Firewall rules allow or deny ingress traffic to, and egress traffic from your
/// instances.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Firewall {
    /// The list of ALLOW rules specified by this firewall.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub allowed: std::vec::Vec<crate::model::firewall::Allowed>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// The list of DENY rules specified by this firewall.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub denied: std::vec::Vec<crate::model::firewall::Denied>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// If destination ranges are specified, the firewall rule applies only to
    /// traffic that has destination IP address in these ranges.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub destination_ranges: std::vec::Vec<std::string::String>,

    /// Direction of traffic to which this firewall applies, either `INGRESS` or
    /// `EGRESS`. The default is `INGRESS`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub direction: std::option::Option<std::string::String>,

    /// Denotes whether the firewall rule is disabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disabled: std::option::Option<bool>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This field denotes the logging options for a particular firewall rule.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_config: std::option::Option<crate::model::FirewallLogConfig>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// URL of the network resource for this firewall rule.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    /// Priority for this rule. This is an integer between `0` and `65535`, both
    /// inclusive. The default value is `1000`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub priority: std::option::Option<i32>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_ranges: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_service_accounts: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_tags: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub target_service_accounts: std::vec::Vec<std::string::String>,

    /// A list of tags that controls which instances the firewall rule applies
    /// to.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub target_tags: std::vec::Vec<std::string::String>,
}

impl Firewall {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allowed][crate::model::Firewall::allowed].
    pub fn set_allowed<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::firewall::Allowed>,
    {
        use std::iter::Iterator;
        self.allowed = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Firewall::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Firewall::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [denied][crate::model::Firewall::denied].
    pub fn set_denied<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::firewall::Denied>,
    {
        use std::iter::Iterator;
        self.denied = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [description][crate::model::Firewall::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Firewall::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_ranges][crate::model::Firewall::destination_ranges].
    pub fn set_destination_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.destination_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [direction][crate::model::Firewall::direction].
    pub fn set_direction<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.direction = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [direction][crate::model::Firewall::direction].
    pub fn set_or_clear_direction<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.direction = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disabled][crate::model::Firewall::disabled].
    pub fn set_disabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.disabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disabled][crate::model::Firewall::disabled].
    pub fn set_or_clear_disabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.disabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Firewall::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Firewall::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Firewall::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Firewall::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_config][crate::model::Firewall::log_config].
    pub fn set_log_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FirewallLogConfig>,
    {
        self.log_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_config][crate::model::Firewall::log_config].
    pub fn set_or_clear_log_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FirewallLogConfig>,
    {
        self.log_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Firewall::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Firewall::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::Firewall::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::Firewall::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [priority][crate::model::Firewall::priority].
    pub fn set_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [priority][crate::model::Firewall::priority].
    pub fn set_or_clear_priority<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.priority = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Firewall::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Firewall::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_ranges][crate::model::Firewall::source_ranges].
    pub fn set_source_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.source_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [source_service_accounts][crate::model::Firewall::source_service_accounts].
    pub fn set_source_service_accounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.source_service_accounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [source_tags][crate::model::Firewall::source_tags].
    pub fn set_source_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.source_tags = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [target_service_accounts][crate::model::Firewall::target_service_accounts].
    pub fn set_target_service_accounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.target_service_accounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [target_tags][crate::model::Firewall::target_tags].
    pub fn set_target_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.target_tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The available logging options for a firewall rule.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallLogConfig {
    /// This field denotes whether to enable logging for a particular firewall
    /// rule.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metadata: std::option::Option<std::string::String>,
}

impl FirewallLogConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enable][crate::model::FirewallLogConfig::enable].
    pub fn set_enable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable][crate::model::FirewallLogConfig::enable].
    pub fn set_or_clear_enable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::FirewallLogConfig::metadata].
    pub fn set_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::FirewallLogConfig::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }
}

/// Represents a Forwarding Rule resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ForwardingRule {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub all_ports: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub allow_global_access: std::option::Option<bool>,

    /// Identifies the backend service to which the forwarding rule sends
    /// traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub backend_service: std::option::Option<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Fingerprint of this resource. A hash of the contents stored in this
    /// object. This field is used in optimistic locking.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// IP address for which this forwarding rule accepts traffic.
    #[serde(rename = "IPAddress")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_address: std::option::Option<std::string::String>,

    /// The IP protocol to which this rule applies.
    #[serde(rename = "IPProtocol")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_protocol: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_version: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_mirroring_collector: std::option::Option<bool>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// A fingerprint for the labels being applied to this resource, which is
    /// essentially a hash of the labels set used for optimistic locking. The
    /// fingerprint is initially generated by Compute Engine and changes after
    /// every request to modify or update labels. You must always provide an
    /// up-to-date fingerprint hash in order to update or change labels,
    /// otherwise the request will fail with error `412 conditionNotMet`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Specifies the forwarding rule type.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub load_balancing_scheme: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_tier: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_range: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub ports: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub psc_connection_id: std::option::Option<u64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub psc_connection_status: std::option::Option<std::string::String>,

    /// URL of the region where the regional forwarding rule resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_label: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_ip_ranges: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnetwork: std::option::Option<std::string::String>,

    /// The URL of the target resource to receive the matched traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target: std::option::Option<std::string::String>,
}

impl ForwardingRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [all_ports][crate::model::ForwardingRule::all_ports].
    pub fn set_all_ports<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.all_ports = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [all_ports][crate::model::ForwardingRule::all_ports].
    pub fn set_or_clear_all_ports<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.all_ports = v.map(|x| x.into());
        self
    }

    /// Sets the value of [allow_global_access][crate::model::ForwardingRule::allow_global_access].
    pub fn set_allow_global_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.allow_global_access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [allow_global_access][crate::model::ForwardingRule::allow_global_access].
    pub fn set_or_clear_allow_global_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.allow_global_access = v.map(|x| x.into());
        self
    }

    /// Sets the value of [backend_service][crate::model::ForwardingRule::backend_service].
    pub fn set_backend_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.backend_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [backend_service][crate::model::ForwardingRule::backend_service].
    pub fn set_or_clear_backend_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.backend_service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::ForwardingRule::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::ForwardingRule::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::ForwardingRule::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::ForwardingRule::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fingerprint][crate::model::ForwardingRule::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::ForwardingRule::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::ForwardingRule::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ForwardingRule::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ip_address][crate::model::ForwardingRule::ip_address].
    pub fn set_ip_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_address][crate::model::ForwardingRule::ip_address].
    pub fn set_or_clear_ip_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ip_protocol][crate::model::ForwardingRule::ip_protocol].
    pub fn set_ip_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_protocol][crate::model::ForwardingRule::ip_protocol].
    pub fn set_or_clear_ip_protocol<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_protocol = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ip_version][crate::model::ForwardingRule::ip_version].
    pub fn set_ip_version<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_version][crate::model::ForwardingRule::ip_version].
    pub fn set_or_clear_ip_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_mirroring_collector][crate::model::ForwardingRule::is_mirroring_collector].
    pub fn set_is_mirroring_collector<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_mirroring_collector = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_mirroring_collector][crate::model::ForwardingRule::is_mirroring_collector].
    pub fn set_or_clear_is_mirroring_collector<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_mirroring_collector = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::ForwardingRule::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::ForwardingRule::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_fingerprint][crate::model::ForwardingRule::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::ForwardingRule::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::ForwardingRule::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [load_balancing_scheme][crate::model::ForwardingRule::load_balancing_scheme].
    pub fn set_load_balancing_scheme<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancing_scheme = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [load_balancing_scheme][crate::model::ForwardingRule::load_balancing_scheme].
    pub fn set_or_clear_load_balancing_scheme<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancing_scheme = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ForwardingRule::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ForwardingRule::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::ForwardingRule::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::ForwardingRule::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_tier][crate::model::ForwardingRule::network_tier].
    pub fn set_network_tier<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_tier][crate::model::ForwardingRule::network_tier].
    pub fn set_or_clear_network_tier<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_range][crate::model::ForwardingRule::port_range].
    pub fn set_port_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_range][crate::model::ForwardingRule::port_range].
    pub fn set_or_clear_port_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ports][crate::model::ForwardingRule::ports].
    pub fn set_ports<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.ports = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [psc_connection_id][crate::model::ForwardingRule::psc_connection_id].
    pub fn set_psc_connection_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.psc_connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [psc_connection_id][crate::model::ForwardingRule::psc_connection_id].
    pub fn set_or_clear_psc_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.psc_connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [psc_connection_status][crate::model::ForwardingRule::psc_connection_status].
    pub fn set_psc_connection_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.psc_connection_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [psc_connection_status][crate::model::ForwardingRule::psc_connection_status].
    pub fn set_or_clear_psc_connection_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.psc_connection_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::ForwardingRule::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::ForwardingRule::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::ForwardingRule::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::ForwardingRule::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_label][crate::model::ForwardingRule::service_label].
    pub fn set_service_label<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_label = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_label][crate::model::ForwardingRule::service_label].
    pub fn set_or_clear_service_label<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_label = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_name][crate::model::ForwardingRule::service_name].
    pub fn set_service_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_name][crate::model::ForwardingRule::service_name].
    pub fn set_or_clear_service_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_ip_ranges][crate::model::ForwardingRule::source_ip_ranges].
    pub fn set_source_ip_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.source_ip_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [subnetwork][crate::model::ForwardingRule::subnetwork].
    pub fn set_subnetwork<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnetwork][crate::model::ForwardingRule::subnetwork].
    pub fn set_or_clear_subnetwork<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.subnetwork = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target][crate::model::ForwardingRule::target].
    pub fn set_target<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target][crate::model::ForwardingRule::target].
    pub fn set_or_clear_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetReference {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target: std::option::Option<std::string::String>,
}

impl TargetReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target][crate::model::TargetReference::target].
    pub fn set_target<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target][crate::model::TargetReference::target].
    pub fn set_or_clear_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target = v.map(|x| x.into());
        self
    }
}

/// Represents a Backend Service resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BackendService {
    /// Lifetime of cookies in seconds.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub affinity_cookie_ttl_sec: std::option::Option<i32>,

    /// The list of backends that serve this BackendService.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub backends: std::vec::Vec<crate::model::Backend>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub connection_draining: std::option::Option<crate::model::ConnectionDraining>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub custom_request_headers: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub custom_response_headers: std::vec::Vec<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// If true, enables Cloud CDN for the backend service of a global external
    /// Application Load Balancer.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_cdn: std::option::Option<bool>,

    /// Fingerprint of this resource. A hash of the contents stored in this
    /// object. This field is used in optimistic locking.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// The list of URLs to the healthChecks, httpHealthChecks (legacy), or
    /// httpsHealthChecks (legacy) resource for health checking this backend
    /// service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub health_checks: std::vec::Vec<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub load_balancing_scheme: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locality_lb_policy: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network: std::option::Option<std::string::String>,

    /// Deprecated in favor of portName.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_name: std::option::Option<std::string::String>,

    /// The protocol this BackendService uses to communicate with backends.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub protocol: std::option::Option<std::string::String>,

    /// URL of the region where the resource resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_policy: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub session_affinity: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout_sec: std::option::Option<i32>,
}

impl BackendService {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [affinity_cookie_ttl_sec][crate::model::BackendService::affinity_cookie_ttl_sec].
    pub fn set_affinity_cookie_ttl_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.affinity_cookie_ttl_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [affinity_cookie_ttl_sec][crate::model::BackendService::affinity_cookie_ttl_sec].
    pub fn set_or_clear_affinity_cookie_ttl_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.affinity_cookie_ttl_sec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [backends][crate::model::BackendService::backends].
    pub fn set_backends<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Backend>,
    {
        use std::iter::Iterator;
        self.backends = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [connection_draining][crate::model::BackendService::connection_draining].
    pub fn set_connection_draining<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConnectionDraining>,
    {
        self.connection_draining = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_draining][crate::model::BackendService::connection_draining].
    pub fn set_or_clear_connection_draining<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ConnectionDraining>,
    {
        self.connection_draining = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::BackendService::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::BackendService::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [custom_request_headers][crate::model::BackendService::custom_request_headers].
    pub fn set_custom_request_headers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.custom_request_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [custom_response_headers][crate::model::BackendService::custom_response_headers].
    pub fn set_custom_response_headers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.custom_response_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [description][crate::model::BackendService::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::BackendService::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_cdn][crate::model::BackendService::enable_cdn].
    pub fn set_enable_cdn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_cdn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_cdn][crate::model::BackendService::enable_cdn].
    pub fn set_or_clear_enable_cdn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_cdn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fingerprint][crate::model::BackendService::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::BackendService::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [health_checks][crate::model::BackendService::health_checks].
    pub fn set_health_checks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.health_checks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::BackendService::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::BackendService::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::BackendService::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::BackendService::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [load_balancing_scheme][crate::model::BackendService::load_balancing_scheme].
    pub fn set_load_balancing_scheme<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancing_scheme = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [load_balancing_scheme][crate::model::BackendService::load_balancing_scheme].
    pub fn set_or_clear_load_balancing_scheme<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.load_balancing_scheme = v.map(|x| x.into());
        self
    }

    /// Sets the value of [locality_lb_policy][crate::model::BackendService::locality_lb_policy].
    pub fn set_locality_lb_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.locality_lb_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [locality_lb_policy][crate::model::BackendService::locality_lb_policy].
    pub fn set_or_clear_locality_lb_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.locality_lb_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::BackendService::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::BackendService::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network][crate::model::BackendService::network].
    pub fn set_network<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network][crate::model::BackendService::network].
    pub fn set_or_clear_network<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::BackendService::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::BackendService::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_name][crate::model::BackendService::port_name].
    pub fn set_port_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_name][crate::model::BackendService::port_name].
    pub fn set_or_clear_port_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [protocol][crate::model::BackendService::protocol].
    pub fn set_protocol<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [protocol][crate::model::BackendService::protocol].
    pub fn set_or_clear_protocol<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.protocol = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::BackendService::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::BackendService::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [security_policy][crate::model::BackendService::security_policy].
    pub fn set_security_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_policy][crate::model::BackendService::security_policy].
    pub fn set_or_clear_security_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::BackendService::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::BackendService::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [session_affinity][crate::model::BackendService::session_affinity].
    pub fn set_session_affinity<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.session_affinity = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_affinity][crate::model::BackendService::session_affinity].
    pub fn set_or_clear_session_affinity<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.session_affinity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout_sec][crate::model::BackendService::timeout_sec].
    pub fn set_timeout_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.timeout_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout_sec][crate::model::BackendService::timeout_sec].
    pub fn set_or_clear_timeout_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.timeout_sec = v.map(|x| x.into());
        self
    }
}

/// Message containing information of one individual backend.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Backend {
    /// Specifies how to determine whether the backend of a load balancer can
    /// handle additional traffic or is fully loaded.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub balancing_mode: std::option::Option<std::string::String>,

    /// A multiplier applied to the backend's target capacity of its balancing
    /// mode.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capacity_scaler: std::option::Option<f32>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failover: std::option::Option<bool>,

    /// The fully-qualified URL of an instance group or network endpoint group
    /// (NEG) resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub group: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_connections: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_connections_per_endpoint: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_connections_per_instance: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_rate: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_rate_per_endpoint: std::option::Option<f32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_rate_per_instance: std::option::Option<f32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_utilization: std::option::Option<f32>,
}

impl Backend {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [balancing_mode][crate::model::Backend::balancing_mode].
    pub fn set_balancing_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.balancing_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [balancing_mode][crate::model::Backend::balancing_mode].
    pub fn set_or_clear_balancing_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.balancing_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [capacity_scaler][crate::model::Backend::capacity_scaler].
    pub fn set_capacity_scaler<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.capacity_scaler = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [capacity_scaler][crate::model::Backend::capacity_scaler].
    pub fn set_or_clear_capacity_scaler<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.capacity_scaler = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Backend::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Backend::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [failover][crate::model::Backend::failover].
    pub fn set_failover<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.failover = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [failover][crate::model::Backend::failover].
    pub fn set_or_clear_failover<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.failover = v.map(|x| x.into());
        self
    }

    /// Sets the value of [group][crate::model::Backend::group].
    pub fn set_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group][crate::model::Backend::group].
    pub fn set_or_clear_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_connections][crate::model::Backend::max_connections].
    pub fn set_max_connections<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_connections = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_connections][crate::model::Backend::max_connections].
    pub fn set_or_clear_max_connections<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_connections = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_connections_per_endpoint][crate::model::Backend::max_connections_per_endpoint].
    pub fn set_max_connections_per_endpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_connections_per_endpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_connections_per_endpoint][crate::model::Backend::max_connections_per_endpoint].
    pub fn set_or_clear_max_connections_per_endpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_connections_per_endpoint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_connections_per_instance][crate::model::Backend::max_connections_per_instance].
    pub fn set_max_connections_per_instance<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_connections_per_instance = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_connections_per_instance][crate::model::Backend::max_connections_per_instance].
    pub fn set_or_clear_max_connections_per_instance<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_connections_per_instance = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_rate][crate::model::Backend::max_rate].
    pub fn set_max_rate<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_rate = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_rate][crate::model::Backend::max_rate].
    pub fn set_or_clear_max_rate<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.max_rate = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_rate_per_endpoint][crate::model::Backend::max_rate_per_endpoint].
    pub fn set_max_rate_per_endpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.max_rate_per_endpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_rate_per_endpoint][crate::model::Backend::max_rate_per_endpoint].
    pub fn set_or_clear_max_rate_per_endpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.max_rate_per_endpoint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_rate_per_instance][crate::model::Backend::max_rate_per_instance].
    pub fn set_max_rate_per_instance<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.max_rate_per_instance = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_rate_per_instance][crate::model::Backend::max_rate_per_instance].
    pub fn set_or_clear_max_rate_per_instance<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.max_rate_per_instance = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_utilization][crate::model::Backend::max_utilization].
    pub fn set_max_utilization<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.max_utilization = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [max_utilization][crate::model::Backend::max_utilization].
    pub fn set_or_clear_max_utilization<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.max_utilization = v.map(|x| x.into());
        self
    }
}

/// Message containing connection draining configuration.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConnectionDraining {
    /// Configures a duration timeout for existing requests on a removed backend
    /// instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub draining_timeout_sec: std::option::Option<i32>,
}

impl ConnectionDraining {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [draining_timeout_sec][crate::model::ConnectionDraining::draining_timeout_sec].
    pub fn set_draining_timeout_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.draining_timeout_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [draining_timeout_sec][crate::model::ConnectionDraining::draining_timeout_sec].
    pub fn set_or_clear_draining_timeout_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.draining_timeout_sec = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroupReference {
    /// A URI referencing one of the instance groups or network endpoint groups
    /// listed in the backend service.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub group: std::option::Option<std::string::String>,
}

impl ResourceGroupReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group][crate::model::ResourceGroupReference::group].
    pub fn set_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group][crate::model::ResourceGroupReference::group].
    pub fn set_or_clear_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.group = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BackendServiceGroupHealth {
    /// Metadata defined as annotations on the network endpoint group.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub annotations: std::collections::HashMap<std::string::String, std::string::String>,

    /// Health state of the backend instances or endpoints in requested instance
    /// or network endpoint group.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub health_status: std::vec::Vec<crate::model::HealthStatus>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,
}

impl BackendServiceGroupHealth {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [annotations][crate::model::BackendServiceGroupHealth::annotations].
    pub fn set_annotations<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.annotations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [health_status][crate::model::BackendServiceGroupHealth::health_status].
    pub fn set_health_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HealthStatus>,
    {
        use std::iter::Iterator;
        self.health_status = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::BackendServiceGroupHealth::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::BackendServiceGroupHealth::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthStatus {
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub annotations: std::collections::HashMap<std::string::String, std::string::String>,

    /// URL of the forwarding rule associated with the health status of the
    /// instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub forwarding_rule: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub forwarding_rule_ip: std::option::Option<std::string::String>,

    /// Health state of the IPv4 address of the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub health_state: std::option::Option<std::string::String>,

    /// URL of the instance resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance: std::option::Option<std::string::String>,

    /// For target pool based Network Load Balancing, it indicates the
    /// forwarding rule's IP address assigned to this instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ip_address: std::option::Option<std::string::String>,

    /// The named port of the instance group, not necessarily the port that is
    /// health-checked.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub weight: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub weight_error: std::option::Option<std::string::String>,
}

impl HealthStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [annotations][crate::model::HealthStatus::annotations].
    pub fn set_annotations<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.annotations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [forwarding_rule][crate::model::HealthStatus::forwarding_rule].
    pub fn set_forwarding_rule<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.forwarding_rule = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [forwarding_rule][crate::model::HealthStatus::forwarding_rule].
    pub fn set_or_clear_forwarding_rule<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.forwarding_rule = v.map(|x| x.into());
        self
    }

    /// Sets the value of [forwarding_rule_ip][crate::model::HealthStatus::forwarding_rule_ip].
    pub fn set_forwarding_rule_ip<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.forwarding_rule_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [forwarding_rule_ip][crate::model::HealthStatus::forwarding_rule_ip].
    pub fn set_or_clear_forwarding_rule_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.forwarding_rule_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [health_state][crate::model::HealthStatus::health_state].
    pub fn set_health_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.health_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [health_state][crate::model::HealthStatus::health_state].
    pub fn set_or_clear_health_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.health_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance][crate::model::HealthStatus::instance].
    pub fn set_instance<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instance = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance][crate::model::HealthStatus::instance].
    pub fn set_or_clear_instance<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instance = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ip_address][crate::model::HealthStatus::ip_address].
    pub fn set_ip_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ip_address][crate::model::HealthStatus::ip_address].
    pub fn set_or_clear_ip_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ip_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::HealthStatus::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::HealthStatus::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [weight][crate::model::HealthStatus::weight].
    pub fn set_weight<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.weight = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [weight][crate::model::HealthStatus::weight].
    pub fn set_or_clear_weight<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.weight = v.map(|x| x.into());
        self
    }

    /// Sets the value of [weight_error][crate::model::HealthStatus::weight_error].
    pub fn set_weight_error<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.weight_error = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [weight_error][crate::model::HealthStatus::weight_error].
    pub fn set_or_clear_weight_error<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.weight_error = v.map(|x| x.into());
        self
    }
}

/// Represents a health check resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthCheck {
    /// How often (in seconds) to send a health check. The default value is 5
    /// seconds.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub check_interval_sec: std::option::Option<i32>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// A so-far unhealthy instance will be marked healthy after this many
    /// consecutive successes. The default value is 2.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub healthy_threshold: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub http_health_check: std::option::Option<crate::model::HttpHealthCheck>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub https_health_check: std::option::Option<crate::model::HttpsHealthCheck>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Configure logging on this health check.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_config: std::option::Option<crate::model::HealthCheckLogConfig>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Region where the health check resides. Not applicable to global health
    /// checks.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tcp_health_check: std::option::Option<crate::model::TcpHealthCheck>,

    /// How long (in seconds) to wait before claiming failure. The default value
    /// is 5 seconds.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout_sec: std::option::Option<i32>,

    /// Specifies the type of the healthCheck, either `TCP`, `SSL`, `HTTP`,
    /// `HTTPS`, `HTTP2` or `GRPC`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,

    /// A so-far healthy instance will be marked unhealthy after this many
    /// consecutive failures. The default value is 2.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unhealthy_threshold: std::option::Option<i32>,
}

impl HealthCheck {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [check_interval_sec][crate::model::HealthCheck::check_interval_sec].
    pub fn set_check_interval_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.check_interval_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [check_interval_sec][crate::model::HealthCheck::check_interval_sec].
    pub fn set_or_clear_check_interval_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.check_interval_sec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::HealthCheck::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::HealthCheck::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::HealthCheck::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::HealthCheck::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [healthy_threshold][crate::model::HealthCheck::healthy_threshold].
    pub fn set_healthy_threshold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.healthy_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [healthy_threshold][crate::model::HealthCheck::healthy_threshold].
    pub fn set_or_clear_healthy_threshold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.healthy_threshold = v.map(|x| x.into());
        self
    }

    /// Sets the value of [http_health_check][crate::model::HealthCheck::http_health_check].
    pub fn set_http_health_check<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HttpHealthCheck>,
    {
        self.http_health_check = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [http_health_check][crate::model::HealthCheck::http_health_check].
    pub fn set_or_clear_http_health_check<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HttpHealthCheck>,
    {
        self.http_health_check = v.map(|x| x.into());
        self
    }

    /// Sets the value of [https_health_check][crate::model::HealthCheck::https_health_check].
    pub fn set_https_health_check<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HttpsHealthCheck>,
    {
        self.https_health_check = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [https_health_check][crate::model::HealthCheck::https_health_check].
    pub fn set_or_clear_https_health_check<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HttpsHealthCheck>,
    {
        self.https_health_check = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::HealthCheck::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::HealthCheck::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::HealthCheck::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::HealthCheck::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_config][crate::model::HealthCheck::log_config].
    pub fn set_log_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HealthCheckLogConfig>,
    {
        self.log_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_config][crate::model::HealthCheck::log_config].
    pub fn set_or_clear_log_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HealthCheckLogConfig>,
    {
        self.log_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::HealthCheck::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::HealthCheck::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::HealthCheck::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::HealthCheck::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::HealthCheck::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::HealthCheck::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tcp_health_check][crate::model::HealthCheck::tcp_health_check].
    pub fn set_tcp_health_check<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TcpHealthCheck>,
    {
        self.tcp_health_check = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tcp_health_check][crate::model::HealthCheck::tcp_health_check].
    pub fn set_or_clear_tcp_health_check<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TcpHealthCheck>,
    {
        self.tcp_health_check = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout_sec][crate::model::HealthCheck::timeout_sec].
    pub fn set_timeout_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.timeout_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout_sec][crate::model::HealthCheck::timeout_sec].
    pub fn set_or_clear_timeout_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.timeout_sec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::HealthCheck::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::HealthCheck::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unhealthy_threshold][crate::model::HealthCheck::unhealthy_threshold].
    pub fn set_unhealthy_threshold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.unhealthy_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [unhealthy_threshold][crate::model::HealthCheck::unhealthy_threshold].
    pub fn set_or_clear_unhealthy_threshold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.unhealthy_threshold = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpHealthCheck {
    /// The value of the host header in the health check request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    /// The TCP port number to which the health check prober sends packets. The
    /// default value is 80.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_specification: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub proxy_header: std::option::Option<std::string::String>,

    /// The request path of the health check request. The default value is `/`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub request_path: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub response: std::option::Option<std::string::String>,
}

impl HttpHealthCheck {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host][crate::model::HttpHealthCheck::host].
    pub fn set_host<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [host][crate::model::HttpHealthCheck::host].
    pub fn set_or_clear_host<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::HttpHealthCheck::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::HttpHealthCheck::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_name][crate::model::HttpHealthCheck::port_name].
    pub fn set_port_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_name][crate::model::HttpHealthCheck::port_name].
    pub fn set_or_clear_port_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_specification][crate::model::HttpHealthCheck::port_specification].
    pub fn set_port_specification<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_specification = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_specification][crate::model::HttpHealthCheck::port_specification].
    pub fn set_or_clear_port_specification<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_specification = v.map(|x| x.into());
        self
    }

    /// Sets the value of [proxy_header][crate::model::HttpHealthCheck::proxy_header].
    pub fn set_proxy_header<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.proxy_header = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [proxy_header][crate::model::HttpHealthCheck::proxy_header].
    pub fn set_or_clear_proxy_header<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.proxy_header = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_path][crate::model::HttpHealthCheck::request_path].
    pub fn set_request_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_path][crate::model::HttpHealthCheck::request_path].
    pub fn set_or_clear_request_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [response][crate::model::HttpHealthCheck::response].
    pub fn set_response<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.response = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [response][crate::model::HttpHealthCheck::response].
    pub fn set_or_clear_response<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.response = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpsHealthCheck {
    /// The value of the host header in the health check request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    /// The TCP port number to which the health check prober sends packets. The
    /// default value is 80.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_specification: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub proxy_header: std::option::Option<std::string::String>,

    /// The request path of the health check request. The default value is `/`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub request_path: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub response: std::option::Option<std::string::String>,
}

impl HttpsHealthCheck {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host][crate::model::HttpsHealthCheck::host].
    pub fn set_host<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [host][crate::model::HttpsHealthCheck::host].
    pub fn set_or_clear_host<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::HttpsHealthCheck::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::HttpsHealthCheck::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_name][crate::model::HttpsHealthCheck::port_name].
    pub fn set_port_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_name][crate::model::HttpsHealthCheck::port_name].
    pub fn set_or_clear_port_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_specification][crate::model::HttpsHealthCheck::port_specification].
    pub fn set_port_specification<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_specification = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_specification][crate::model::HttpsHealthCheck::port_specification].
    pub fn set_or_clear_port_specification<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_specification = v.map(|x| x.into());
        self
    }

    /// Sets the value of [proxy_header][crate::model::HttpsHealthCheck::proxy_header].
    pub fn set_proxy_header<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.proxy_header = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [proxy_header][crate::model::HttpsHealthCheck::proxy_header].
    pub fn set_or_clear_proxy_header<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.proxy_header = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_path][crate::model::HttpsHealthCheck::request_path].
    pub fn set_request_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_path][crate::model::HttpsHealthCheck::request_path].
    pub fn set_or_clear_request_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request_path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [response][crate::model::HttpsHealthCheck::response].
    pub fn set_response<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.response = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [response][crate::model::HttpsHealthCheck::response].
    pub fn set_or_clear_response<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.response = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TcpHealthCheck {
    /// The TCP port number to which the health check prober sends packets. The
    /// default value is 80.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port_specification: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub proxy_header: std::option::Option<std::string::String>,

    /// Instructs the health check prober to send this exact ASCII string, up to
    /// 1024 bytes in length, after establishing the TCP connection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub request: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub response: std::option::Option<std::string::String>,
}

impl TcpHealthCheck {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [port][crate::model::TcpHealthCheck::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::TcpHealthCheck::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_name][crate::model::TcpHealthCheck::port_name].
    pub fn set_port_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_name][crate::model::TcpHealthCheck::port_name].
    pub fn set_or_clear_port_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port_specification][crate::model::TcpHealthCheck::port_specification].
    pub fn set_port_specification<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_specification = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port_specification][crate::model::TcpHealthCheck::port_specification].
    pub fn set_or_clear_port_specification<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.port_specification = v.map(|x| x.into());
        self
    }

    /// Sets the value of [proxy_header][crate::model::TcpHealthCheck::proxy_header].
    pub fn set_proxy_header<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.proxy_header = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [proxy_header][crate::model::TcpHealthCheck::proxy_header].
    pub fn set_or_clear_proxy_header<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.proxy_header = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request][crate::model::TcpHealthCheck::request].
    pub fn set_request<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request][crate::model::TcpHealthCheck::request].
    pub fn set_or_clear_request<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.request = v.map(|x| x.into());
        self
    }

    /// Sets the value of [response][crate::model::TcpHealthCheck::response].
    pub fn set_response<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.response = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [response][crate::model::TcpHealthCheck::response].
    pub fn set_or_clear_response<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.response = v.map(|x| x.into());
        self
    }
}

/// Configuration of logging on a health check.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthCheckLogConfig {
    /// Indicates whether or not to export logs. This is false by default.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable: std::option::Option<bool>,
}

impl HealthCheckLogConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enable][crate::model::HealthCheckLogConfig::enable].
    pub fn set_enable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable][crate::model::HealthCheckLogConfig::enable].
    pub fn set_or_clear_enable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable = v.map(|x| x.into());
        self
    }
}

/// Represents a Target Pool resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPool {
    /// The server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub backup_pool: std::option::Option<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failover_ratio: std::option::Option<f32>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub health_checks: std::vec::Vec<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// A list of resource URLs to the virtual machine instances serving this
    /// pool.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub instances: std::vec::Vec<std::string::String>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// URL of the region where the resource resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_policy: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub session_affinity: std::option::Option<std::string::String>,
}

impl TargetPool {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [backup_pool][crate::model::TargetPool::backup_pool].
    pub fn set_backup_pool<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.backup_pool = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [backup_pool][crate::model::TargetPool::backup_pool].
    pub fn set_or_clear_backup_pool<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.backup_pool = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::TargetPool::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::TargetPool::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::TargetPool::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::TargetPool::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [failover_ratio][crate::model::TargetPool::failover_ratio].
    pub fn set_failover_ratio<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.failover_ratio = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [failover_ratio][crate::model::TargetPool::failover_ratio].
    pub fn set_or_clear_failover_ratio<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.failover_ratio = v.map(|x| x.into());
        self
    }

    /// Sets the value of [health_checks][crate::model::TargetPool::health_checks].
    pub fn set_health_checks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.health_checks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::TargetPool::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::TargetPool::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instances][crate::model::TargetPool::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::TargetPool::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::TargetPool::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::TargetPool::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::TargetPool::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::TargetPool::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::TargetPool::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [security_policy][crate::model::TargetPool::security_policy].
    pub fn set_security_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_policy][crate::model::TargetPool::security_policy].
    pub fn set_or_clear_security_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.security_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::TargetPool::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::TargetPool::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [session_affinity][crate::model::TargetPool::session_affinity].
    pub fn set_session_affinity<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.session_affinity = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_affinity][crate::model::TargetPool::session_affinity].
    pub fn set_or_clear_session_affinity<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.session_affinity = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceReference {
    /// The URL for a specific instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance: std::option::Option<std::string::String>,
}

impl InstanceReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance][crate::model::InstanceReference::instance].
    pub fn set_instance<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instance = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance][crate::model::InstanceReference::instance].
    pub fn set_or_clear_instance<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.instance = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolInstanceHealth {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub health_status: std::vec::Vec<crate::model::HealthStatus>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,
}

impl TargetPoolInstanceHealth {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [health_status][crate::model::TargetPoolInstanceHealth::health_status].
    pub fn set_health_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HealthStatus>,
    {
        use std::iter::Iterator;
        self.health_status = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::TargetPoolInstanceHealth::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::TargetPoolInstanceHealth::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolsAddInstanceRequest {
    /// A full or partial URL to an instance to add to this target pool.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub instances: std::vec::Vec<crate::model::InstanceReference>,
}

impl TargetPoolsAddInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instances][crate::model::TargetPoolsAddInstanceRequest::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::InstanceReference>,
    {
        use std::iter::Iterator;
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolsRemoveInstanceRequest {
    /// URLs of the instances to be removed from target pool.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub instances: std::vec::Vec<crate::model::InstanceReference>,
}

impl TargetPoolsRemoveInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instances][crate::model::TargetPoolsRemoveInstanceRequest::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::InstanceReference>,
    {
        use std::iter::Iterator;
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Represents a URL Map resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMap {
    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// The full or partial URL of the defaultService resource to which traffic
    /// is directed if none of the hostRules match.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_service: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Fingerprint of this resource. A hash of the contents stored in this
    /// object. This field is used in optimistic locking.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fingerprint: std::option::Option<std::string::String>,

    /// The list of host rules to use against the URL.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub host_rules: std::vec::Vec<crate::model::HostRule>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The list of named PathMatchers to use against the URL.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub path_matchers: std::vec::Vec<crate::model::PathMatcher>,

    /// URL of the region where the resource resides.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// The list of expected URL mapping tests.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tests: std::vec::Vec<crate::model::UrlMapTest>,
}

impl UrlMap {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [creation_timestamp][crate::model::UrlMap::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::UrlMap::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_service][crate::model::UrlMap::default_service].
    pub fn set_default_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_service][crate::model::UrlMap::default_service].
    pub fn set_or_clear_default_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::UrlMap::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::UrlMap::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fingerprint][crate::model::UrlMap::fingerprint].
    pub fn set_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [fingerprint][crate::model::UrlMap::fingerprint].
    pub fn set_or_clear_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [host_rules][crate::model::UrlMap::host_rules].
    pub fn set_host_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HostRule>,
    {
        use std::iter::Iterator;
        self.host_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::UrlMap::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::UrlMap::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::UrlMap::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::UrlMap::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::UrlMap::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::UrlMap::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_matchers][crate::model::UrlMap::path_matchers].
    pub fn set_path_matchers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::PathMatcher>,
    {
        use std::iter::Iterator;
        self.path_matchers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [region][crate::model::UrlMap::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::UrlMap::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::UrlMap::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::UrlMap::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tests][crate::model::UrlMap::tests].
    pub fn set_tests<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UrlMapTest>,
    {
        use std::iter::Iterator;
        self.tests = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// UrlMaps A host-matching rule for a URL.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HostRule {
    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The list of host patterns to match.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hosts: std::vec::Vec<std::string::String>,

    /// The name of the PathMatcher to use to match the path portion of the URL
    /// if the hostRule matches the URL's host portion.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path_matcher: std::option::Option<std::string::String>,
}

impl HostRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::HostRule::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::HostRule::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hosts][crate::model::HostRule::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [path_matcher][crate::model::HostRule::path_matcher].
    pub fn set_path_matcher<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path_matcher = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_matcher][crate::model::HostRule::path_matcher].
    pub fn set_or_clear_path_matcher<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path_matcher = v.map(|x| x.into());
        self
    }
}

/// A matcher for the path portion of the URL.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PathMatcher {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_service: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The name to which this PathMatcher is referred by the HostRule.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub path_rules: std::vec::Vec<crate::model::PathRule>,
}

impl PathMatcher {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [default_service][crate::model::PathMatcher::default_service].
    pub fn set_default_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_service][crate::model::PathMatcher::default_service].
    pub fn set_or_clear_default_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::PathMatcher::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::PathMatcher::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::PathMatcher::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::PathMatcher::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_rules][crate::model::PathMatcher::path_rules].
    pub fn set_path_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::PathRule>,
    {
        use std::iter::Iterator;
        self.path_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A path-matching rule for a URL.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PathRule {
    /// The list of path patterns to match.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub paths: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<std::string::String>,
}

impl PathRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [paths][crate::model::PathRule::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [service][crate::model::PathRule::service].
    pub fn set_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service][crate::model::PathRule::service].
    pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service = v.map(|x| x.into());
        self
    }
}

/// Message for the expected URL mappings.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapTest {
    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expected_output_url: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expected_redirect_response_code: std::option::Option<i32>,

    /// Host portion of the URL.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    /// Path portion of the URL.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<std::string::String>,
}

impl UrlMapTest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::UrlMapTest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::UrlMapTest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expected_output_url][crate::model::UrlMapTest::expected_output_url].
    pub fn set_expected_output_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expected_output_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expected_output_url][crate::model::UrlMapTest::expected_output_url].
    pub fn set_or_clear_expected_output_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expected_output_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expected_redirect_response_code][crate::model::UrlMapTest::expected_redirect_response_code].
    pub fn set_expected_redirect_response_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.expected_redirect_response_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expected_redirect_response_code][crate::model::UrlMapTest::expected_redirect_response_code].
    pub fn set_or_clear_expected_redirect_response_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.expected_redirect_response_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [host][crate::model::UrlMapTest::host].
    pub fn set_host<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [host][crate::model::UrlMapTest::host].
    pub fn set_or_clear_host<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][crate::model::UrlMapTest::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][crate::model::UrlMapTest::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service][crate::model::UrlMapTest::service].
    pub fn set_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service][crate::model::UrlMapTest::service].
    pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.service = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CacheInvalidationRule {
    /// If set, this invalidation rule will only apply to requests with a Host
    /// header matching host.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path: std::option::Option<std::string::String>,
}

impl CacheInvalidationRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host][crate::model::CacheInvalidationRule::host].
    pub fn set_host<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [host][crate::model::CacheInvalidationRule::host].
    pub fn set_or_clear_host<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.host = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][crate::model::CacheInvalidationRule::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][crate::model::CacheInvalidationRule::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = v.map(|x| x.into());
        self
    }
}

/// Represents an Image resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Image {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub architecture: std::option::Option<std::string::String>,

    /// Size of the image tar.gz archive stored in Google Cloud Storage (in
    /// bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub archive_size_bytes: std::option::Option<i64>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// The deprecation status associated with this image.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deprecated: std::option::Option<crate::model::DeprecationStatus>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Size of the image when restored onto a persistent disk (in GB).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub disk_size_gb: std::option::Option<i64>,

    /// The name of the image family to which this image belongs.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub family: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub guest_os_features: std::vec::Vec<crate::model::GuestOsFeature>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// A fingerprint for the labels being applied to this resource, which is
    /// essentially a hash of the labels set used for optimistic locking. The
    /// fingerprint is initially generated by Compute Engine and changes after
    /// every request to modify or update labels. You must always provide an
    /// up-to-date fingerprint hash in order to update or change labels,
    /// otherwise the request will fail with error `412 conditionNotMet`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub licenses: std::vec::Vec<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The parameters of the raw disk image.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub raw_disk: std::option::Option<crate::model::image::RawDisk>,

    /// Reserved for future use.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub satisfies_pzs: std::option::Option<bool>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_disk: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_disk_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_image: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_snapshot: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type: std::option::Option<std::string::String>,

    /// The status of the image. An image can be used to create other resources,
    /// such as instances, only after the image has been successfully created
    /// and the status is set to `READY`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub storage_locations: std::vec::Vec<std::string::String>,
}

impl Image {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [architecture][crate::model::Image::architecture].
    pub fn set_architecture<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [architecture][crate::model::Image::architecture].
    pub fn set_or_clear_architecture<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = v.map(|x| x.into());
        self
    }

    /// Sets the value of [archive_size_bytes][crate::model::Image::archive_size_bytes].
    pub fn set_archive_size_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.archive_size_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [archive_size_bytes][crate::model::Image::archive_size_bytes].
    pub fn set_or_clear_archive_size_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.archive_size_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Image::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Image::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deprecated][crate::model::Image::deprecated].
    pub fn set_deprecated<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deprecated][crate::model::Image::deprecated].
    pub fn set_or_clear_deprecated<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Image::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Image::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_size_gb][crate::model::Image::disk_size_gb].
    pub fn set_disk_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_size_gb][crate::model::Image::disk_size_gb].
    pub fn set_or_clear_disk_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [family][crate::model::Image::family].
    pub fn set_family<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.family = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [family][crate::model::Image::family].
    pub fn set_or_clear_family<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.family = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guest_os_features][crate::model::Image::guest_os_features].
    pub fn set_guest_os_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::GuestOsFeature>,
    {
        use std::iter::Iterator;
        self.guest_os_features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::Image::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Image::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Image::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Image::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_fingerprint][crate::model::Image::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::Image::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Image::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [licenses][crate::model::Image::licenses].
    pub fn set_licenses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.licenses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [name][crate::model::Image::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Image::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [raw_disk][crate::model::Image::raw_disk].
    pub fn set_raw_disk<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::image::RawDisk>,
    {
        self.raw_disk = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [raw_disk][crate::model::Image::raw_disk].
    pub fn set_or_clear_raw_disk<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::image::RawDisk>,
    {
        self.raw_disk = v.map(|x| x.into());
        self
    }

    /// Sets the value of [satisfies_pzs][crate::model::Image::satisfies_pzs].
    pub fn set_satisfies_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [satisfies_pzs][crate::model::Image::satisfies_pzs].
    pub fn set_or_clear_satisfies_pzs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Image::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Image::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_disk][crate::model::Image::source_disk].
    pub fn set_source_disk<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_disk][crate::model::Image::source_disk].
    pub fn set_or_clear_source_disk<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_disk_id][crate::model::Image::source_disk_id].
    pub fn set_source_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_disk_id][crate::model::Image::source_disk_id].
    pub fn set_or_clear_source_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_image][crate::model::Image::source_image].
    pub fn set_source_image<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_image][crate::model::Image::source_image].
    pub fn set_or_clear_source_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_snapshot][crate::model::Image::source_snapshot].
    pub fn set_source_snapshot<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_snapshot][crate::model::Image::source_snapshot].
    pub fn set_or_clear_source_snapshot<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::Image::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::Image::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Image::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Image::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [storage_locations][crate::model::Image::storage_locations].
    pub fn set_storage_locations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.storage_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Represents a Persistent Disk Snapshot resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Snapshot {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub architecture: std::option::Option<std::string::String>,

    /// Set to true if snapshots are automatically created by applying resource
    /// policy on the target disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_created: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chain_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub creation_size_bytes: std::option::Option<i64>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Size of the source disk, specified in GB.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub disk_size_gb: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub download_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub guest_os_features: std::vec::Vec<crate::model::GuestOsFeature>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// A fingerprint for the labels being applied to this resource, which is
    /// essentially a hash of the labels set used for optimistic locking. The
    /// fingerprint is initially generated by Compute Engine and changes after
    /// every request to modify or update labels. You must always provide an
    /// up-to-date fingerprint hash in order to update or change labels,
    /// otherwise the request will fail with error `412 conditionNotMet`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_fingerprint: std::option::Option<std::string::String>,

    /// Labels for this resource. These can only be added or modified by the
    /// `setLabels` method. Each label key/value pair must comply with RFC1035.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub licenses: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location_hint: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Reserved for future use.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub satisfies_pzs: std::option::Option<bool>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_type: std::option::Option<std::string::String>,

    /// The source disk used to create this snapshot.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_disk: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_disk_id: std::option::Option<std::string::String>,

    /// The status of the snapshot.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    /// A size of the storage used by the snapshot.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub storage_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub storage_bytes_status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub storage_locations: std::vec::Vec<std::string::String>,
}

impl Snapshot {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [architecture][crate::model::Snapshot::architecture].
    pub fn set_architecture<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [architecture][crate::model::Snapshot::architecture].
    pub fn set_or_clear_architecture<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.architecture = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auto_created][crate::model::Snapshot::auto_created].
    pub fn set_auto_created<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_created][crate::model::Snapshot::auto_created].
    pub fn set_or_clear_auto_created<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.auto_created = v.map(|x| x.into());
        self
    }

    /// Sets the value of [chain_name][crate::model::Snapshot::chain_name].
    pub fn set_chain_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.chain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [chain_name][crate::model::Snapshot::chain_name].
    pub fn set_or_clear_chain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.chain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_size_bytes][crate::model::Snapshot::creation_size_bytes].
    pub fn set_creation_size_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.creation_size_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_size_bytes][crate::model::Snapshot::creation_size_bytes].
    pub fn set_or_clear_creation_size_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.creation_size_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Snapshot::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Snapshot::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Snapshot::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Snapshot::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_size_gb][crate::model::Snapshot::disk_size_gb].
    pub fn set_disk_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_size_gb][crate::model::Snapshot::disk_size_gb].
    pub fn set_or_clear_disk_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [download_bytes][crate::model::Snapshot::download_bytes].
    pub fn set_download_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.download_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [download_bytes][crate::model::Snapshot::download_bytes].
    pub fn set_or_clear_download_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.download_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guest_os_features][crate::model::Snapshot::guest_os_features].
    pub fn set_guest_os_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::GuestOsFeature>,
    {
        use std::iter::Iterator;
        self.guest_os_features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::Snapshot::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Snapshot::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Snapshot::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Snapshot::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_fingerprint][crate::model::Snapshot::label_fingerprint].
    pub fn set_label_fingerprint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_fingerprint][crate::model::Snapshot::label_fingerprint].
    pub fn set_or_clear_label_fingerprint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_fingerprint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Snapshot::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [licenses][crate::model::Snapshot::licenses].
    pub fn set_licenses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.licenses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location_hint][crate::model::Snapshot::location_hint].
    pub fn set_location_hint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_hint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_hint][crate::model::Snapshot::location_hint].
    pub fn set_or_clear_location_hint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_hint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Snapshot::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Snapshot::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [satisfies_pzs][crate::model::Snapshot::satisfies_pzs].
    pub fn set_satisfies_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [satisfies_pzs][crate::model::Snapshot::satisfies_pzs].
    pub fn set_or_clear_satisfies_pzs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.satisfies_pzs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Snapshot::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Snapshot::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [snapshot_type][crate::model::Snapshot::snapshot_type].
    pub fn set_snapshot_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_type][crate::model::Snapshot::snapshot_type].
    pub fn set_or_clear_snapshot_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_disk][crate::model::Snapshot::source_disk].
    pub fn set_source_disk<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_disk][crate::model::Snapshot::source_disk].
    pub fn set_or_clear_source_disk<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_disk_id][crate::model::Snapshot::source_disk_id].
    pub fn set_source_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_disk_id][crate::model::Snapshot::source_disk_id].
    pub fn set_or_clear_source_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_disk_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Snapshot::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Snapshot::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [storage_bytes][crate::model::Snapshot::storage_bytes].
    pub fn set_storage_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.storage_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [storage_bytes][crate::model::Snapshot::storage_bytes].
    pub fn set_or_clear_storage_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.storage_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [storage_bytes_status][crate::model::Snapshot::storage_bytes_status].
    pub fn set_storage_bytes_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.storage_bytes_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [storage_bytes_status][crate::model::Snapshot::storage_bytes_status].
    pub fn set_or_clear_storage_bytes_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.storage_bytes_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [storage_locations][crate::model::Snapshot::storage_locations].
    pub fn set_storage_locations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.storage_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Represents a Machine Type resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineType {
    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deprecated: std::option::Option<crate::model::DeprecationStatus>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The number of virtual CPUs that are available to the instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub guest_cpus: std::option::Option<i32>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_space_gb: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_shared_cpu: std::option::Option<bool>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub maximum_persistent_disks: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::I64>")]
    pub maximum_persistent_disks_size_gb: std::option::Option<i64>,

    /// The amount of physical memory available to the instance, defined in MB.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub memory_mb: std::option::Option<i32>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// The name of the zone where the machine type resides, such as
    /// us-central1-a.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<std::string::String>,
}

impl MachineType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [creation_timestamp][crate::model::MachineType::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::MachineType::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deprecated][crate::model::MachineType::deprecated].
    pub fn set_deprecated<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deprecated][crate::model::MachineType::deprecated].
    pub fn set_or_clear_deprecated<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::MachineType::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::MachineType::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guest_cpus][crate::model::MachineType::guest_cpus].
    pub fn set_guest_cpus<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.guest_cpus = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guest_cpus][crate::model::MachineType::guest_cpus].
    pub fn set_or_clear_guest_cpus<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.guest_cpus = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::MachineType::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::MachineType::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_space_gb][crate::model::MachineType::image_space_gb].
    pub fn set_image_space_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.image_space_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_space_gb][crate::model::MachineType::image_space_gb].
    pub fn set_or_clear_image_space_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.image_space_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_shared_cpu][crate::model::MachineType::is_shared_cpu].
    pub fn set_is_shared_cpu<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_shared_cpu = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_shared_cpu][crate::model::MachineType::is_shared_cpu].
    pub fn set_or_clear_is_shared_cpu<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_shared_cpu = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::MachineType::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::MachineType::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [maximum_persistent_disks][crate::model::MachineType::maximum_persistent_disks].
    pub fn set_maximum_persistent_disks<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.maximum_persistent_disks = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [maximum_persistent_disks][crate::model::MachineType::maximum_persistent_disks].
    pub fn set_or_clear_maximum_persistent_disks<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.maximum_persistent_disks = v.map(|x| x.into());
        self
    }

    /// Sets the value of [maximum_persistent_disks_size_gb][crate::model::MachineType::maximum_persistent_disks_size_gb].
    pub fn set_maximum_persistent_disks_size_gb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.maximum_persistent_disks_size_gb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [maximum_persistent_disks_size_gb][crate::model::MachineType::maximum_persistent_disks_size_gb].
    pub fn set_or_clear_maximum_persistent_disks_size_gb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.maximum_persistent_disks_size_gb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [memory_mb][crate::model::MachineType::memory_mb].
    pub fn set_memory_mb<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.memory_mb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [memory_mb][crate::model::MachineType::memory_mb].
    pub fn set_or_clear_memory_mb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.memory_mb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::MachineType::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::MachineType::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::MachineType::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::MachineType::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][crate::model::MachineType::zone].
    pub fn set_zone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][crate::model::MachineType::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }
}

/// Represents a Zone resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Zone {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub available_cpu_platforms: std::vec::Vec<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deprecated: std::option::Option<crate::model::DeprecationStatus>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Full URL reference to the region which hosts the zone.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Status of the zone, either `UP` or `DOWN`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub supports_pzs: std::option::Option<bool>,
}

impl Zone {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [available_cpu_platforms][crate::model::Zone::available_cpu_platforms].
    pub fn set_available_cpu_platforms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.available_cpu_platforms = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Zone::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Zone::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deprecated][crate::model::Zone::deprecated].
    pub fn set_deprecated<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deprecated][crate::model::Zone::deprecated].
    pub fn set_or_clear_deprecated<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Zone::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Zone::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Zone::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Zone::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Zone::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Zone::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Zone::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Zone::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Zone::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Zone::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Zone::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Zone::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Zone::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Zone::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [supports_pzs][crate::model::Zone::supports_pzs].
    pub fn set_supports_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.supports_pzs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [supports_pzs][crate::model::Zone::supports_pzs].
    pub fn set_or_clear_supports_pzs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.supports_pzs = v.map(|x| x.into());
        self
    }
}

/// Represents a Region resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Region {
    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deprecated: std::option::Option<crate::model::DeprecationStatus>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Quotas assigned to this region.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub quotas: std::vec::Vec<crate::model::Quota>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Status of the region, either `UP` or `DOWN`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub supports_pzs: std::option::Option<bool>,

    /// A list of zones available in this region, in the form of resource URLs.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub zones: std::vec::Vec<std::string::String>,
}

impl Region {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [creation_timestamp][crate::model::Region::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Region::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deprecated][crate::model::Region::deprecated].
    pub fn set_deprecated<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deprecated][crate::model::Region::deprecated].
    pub fn set_or_clear_deprecated<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeprecationStatus>,
    {
        self.deprecated = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Region::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Region::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Region::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Region::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Region::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Region::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Region::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Region::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [quotas][crate::model::Region::quotas].
    pub fn set_quotas<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Quota>,
    {
        use std::iter::Iterator;
        self.quotas = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [self_link][crate::model::Region::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Region::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Region::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Region::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [supports_pzs][crate::model::Region::supports_pzs].
    pub fn set_supports_pzs<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.supports_pzs = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [supports_pzs][crate::model::Region::supports_pzs].
    pub fn set_or_clear_supports_pzs<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.supports_pzs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zones][crate::model::Region::zones].
    pub fn set_zones<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.zones = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Represents a Project resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Project {
    /// Metadata key/value pairs available to all instances contained in this
    /// project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_instance_metadata: std::option::Option<crate::model::Metadata>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// This signifies the default network tier used for configuring resources
    /// of the project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_network_tier: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_service_account: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub enabled_features: std::vec::Vec<std::string::String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Quotas assigned to this project.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub quotas: std::vec::Vec<crate::model::Quota>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// The naming prefix for daily usage reports and the Google Cloud Storage
    /// bucket where they are stored.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub usage_export_location: std::option::Option<crate::model::UsageExportLocation>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub xpn_project_status: std::option::Option<std::string::String>,
}

impl Project {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [common_instance_metadata][crate::model::Project::common_instance_metadata].
    pub fn set_common_instance_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Metadata>,
    {
        self.common_instance_metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [common_instance_metadata][crate::model::Project::common_instance_metadata].
    pub fn set_or_clear_common_instance_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Metadata>,
    {
        self.common_instance_metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Project::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Project::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_network_tier][crate::model::Project::default_network_tier].
    pub fn set_default_network_tier<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_network_tier = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_network_tier][crate::model::Project::default_network_tier].
    pub fn set_or_clear_default_network_tier<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_network_tier = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_service_account][crate::model::Project::default_service_account].
    pub fn set_default_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_service_account][crate::model::Project::default_service_account].
    pub fn set_or_clear_default_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Project::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Project::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled_features][crate::model::Project::enabled_features].
    pub fn set_enabled_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.enabled_features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [id][crate::model::Project::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Project::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Project::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Project::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Project::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Project::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [quotas][crate::model::Project::quotas].
    pub fn set_quotas<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Quota>,
    {
        use std::iter::Iterator;
        self.quotas = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [self_link][crate::model::Project::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Project::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [usage_export_location][crate::model::Project::usage_export_location].
    pub fn set_usage_export_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UsageExportLocation>,
    {
        self.usage_export_location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [usage_export_location][crate::model::Project::usage_export_location].
    pub fn set_or_clear_usage_export_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UsageExportLocation>,
    {
        self.usage_export_location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [xpn_project_status][crate::model::Project::xpn_project_status].
    pub fn set_xpn_project_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.xpn_project_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [xpn_project_status][crate::model::Project::xpn_project_status].
    pub fn set_or_clear_xpn_project_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.xpn_project_status = v.map(|x| x.into());
        self
    }
}

/// The location in Cloud Storage and naming method of the daily usage report.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UsageExportLocation {
    /// The name of an existing bucket in Cloud Storage where the usage report
    /// object is stored.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub report_name_prefix: std::option::Option<std::string::String>,
}

impl UsageExportLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket_name][crate::model::UsageExportLocation::bucket_name].
    pub fn set_bucket_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bucket_name][crate::model::UsageExportLocation::bucket_name].
    pub fn set_or_clear_bucket_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bucket_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [report_name_prefix][crate::model::UsageExportLocation::report_name_prefix].
    pub fn set_report_name_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.report_name_prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [report_name_prefix][crate::model::UsageExportLocation::report_name_prefix].
    pub fn set_or_clear_report_name_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.report_name_prefix = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProjectsSetDefaultNetworkTierRequest {
    /// Default network tier to be set.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_tier: std::option::Option<std::string::String>,
}

impl ProjectsSetDefaultNetworkTierRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [network_tier][crate::model::ProjectsSetDefaultNetworkTierRequest::network_tier].
    pub fn set_network_tier<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_tier][crate::model::ProjectsSetDefaultNetworkTierRequest::network_tier].
    pub fn set_or_clear_network_tier<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_tier = v.map(|x| x.into());
        self
    }
}

/// Represents an Operation resource.
///
/// Operation resources track the progress of mutations, such as inserting or
/// deleting an instance. Use the `wait` and `get` methods of the zonal,
/// regional and global operations clients to poll their status.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The value of `requestId` if you provided it in the request. Not present
    /// otherwise.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_operation_id: std::option::Option<std::string::String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_timestamp: std::option::Option<std::string::String>,

    /// An optional description of this resource. Provide this property when you
    /// create the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The time that this operation was completed, in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<std::string::String>,

    /// If errors are generated during processing of the operation, this field
    /// will be populated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<crate::model::operation::Error>,

    /// If the operation fails, this field contains the HTTP error message that
    /// was returned, such as `NOT FOUND`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub http_error_message: std::option::Option<std::string::String>,

    /// If the operation fails, this field contains the HTTP error status code
    /// that was returned. For example, a `404` means the resource was not
    /// found.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub http_error_status_code: std::option::Option<i32>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub id: std::option::Option<u64>,

    /// The time that this operation was requested, in RFC3339 text format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub insert_time: std::option::Option<std::string::String>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// Name of the resource. The name must be 1-63 characters long, and comply
    /// with RFC1035.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_group_id: std::option::Option<std::string::String>,

    /// The type of operation, such as `insert`, `update`, or `delete`, and so
    /// on.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<std::string::String>,

    /// An optional progress indicator that ranges from 0 to 100. There is no
    /// requirement that this be linear or support any granularity of
    /// operations.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub progress: std::option::Option<i32>,

    /// The URL of the region where the operation resides. Only applicable when
    /// performing regional operations.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// If the operation is for `projects.setCommonInstanceMetadata`, this field
    /// will contain information on all underlying zonal actions and their
    /// state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub set_common_instance_metadata_operation_metadata: std::option::Option<crate::model::SetCommonInstanceMetadataOperationMetadata>,

    /// The time that this operation was started by the server, in RFC3339 text
    /// format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<std::string::String>,

    /// The status of the operation, which can be one of the following:
    /// `PENDING`, `RUNNING`, or `DONE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    /// An optional textual description of the current status of the operation.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_message: std::option::Option<std::string::String>,

    /// The unique target ID, which identifies a specific incarnation of the
    /// target resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<crate::model::internal::U64>")]
    pub target_id: std::option::Option<u64>,

    /// The URL of the resource that the operation modifies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_link: std::option::Option<std::string::String>,

    /// User who requested the operation, for example: `user@example.com`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user: std::option::Option<std::string::String>,

    /// If warning messages are generated during processing of the operation,
    /// this field will be populated.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub warnings: std::vec::Vec<crate::model::operation::Warnings>,

    /// The URL of the zone where the operation resides. Only applicable when
    /// performing per-zone operations.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<std::string::String>,
}

impl Operation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [client_operation_id][crate::model::Operation::client_operation_id].
    pub fn set_client_operation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_operation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_operation_id][crate::model::Operation::client_operation_id].
    pub fn set_or_clear_client_operation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_operation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [creation_timestamp][crate::model::Operation::creation_timestamp].
    pub fn set_creation_timestamp<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_timestamp][crate::model::Operation::creation_timestamp].
    pub fn set_or_clear_creation_timestamp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Operation::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Operation::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [end_time][crate::model::Operation::end_time].
    pub fn set_end_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.end_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [end_time][crate::model::Operation::end_time].
    pub fn set_or_clear_end_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.end_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error][crate::model::Operation::error].
    pub fn set_error<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::operation::Error>,
    {
        self.error = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [error][crate::model::Operation::error].
    pub fn set_or_clear_error<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::operation::Error>,
    {
        self.error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [http_error_message][crate::model::Operation::http_error_message].
    pub fn set_http_error_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.http_error_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [http_error_message][crate::model::Operation::http_error_message].
    pub fn set_or_clear_http_error_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.http_error_message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [http_error_status_code][crate::model::Operation::http_error_status_code].
    pub fn set_http_error_status_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.http_error_status_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [http_error_status_code][crate::model::Operation::http_error_status_code].
    pub fn set_or_clear_http_error_status_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.http_error_status_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Operation::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Operation::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [insert_time][crate::model::Operation::insert_time].
    pub fn set_insert_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.insert_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [insert_time][crate::model::Operation::insert_time].
    pub fn set_or_clear_insert_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.insert_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::Operation::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::Operation::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Operation::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Operation::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operation_group_id][crate::model::Operation::operation_group_id].
    pub fn set_operation_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [operation_group_id][crate::model::Operation::operation_group_id].
    pub fn set_or_clear_operation_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::Operation::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [operation_type][crate::model::Operation::operation_type].
    pub fn set_or_clear_operation_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.operation_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [progress][crate::model::Operation::progress].
    pub fn set_progress<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.progress = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [progress][crate::model::Operation::progress].
    pub fn set_or_clear_progress<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.progress = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Operation::region].
    pub fn set_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Operation::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::Operation::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::Operation::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [set_common_instance_metadata_operation_metadata][crate::model::Operation::set_common_instance_metadata_operation_metadata].
    pub fn set_set_common_instance_metadata_operation_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SetCommonInstanceMetadataOperationMetadata>,
    {
        self.set_common_instance_metadata_operation_metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [set_common_instance_metadata_operation_metadata][crate::model::Operation::set_common_instance_metadata_operation_metadata].
    pub fn set_or_clear_set_common_instance_metadata_operation_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SetCommonInstanceMetadataOperationMetadata>,
    {
        self.set_common_instance_metadata_operation_metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::Operation::start_time].
    pub fn set_start_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::Operation::start_time].
    pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Operation::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Operation::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_message][crate::model::Operation::status_message].
    pub fn set_status_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_message][crate::model::Operation::status_message].
    pub fn set_or_clear_status_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status_message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_id][crate::model::Operation::target_id].
    pub fn set_target_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.target_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_id][crate::model::Operation::target_id].
    pub fn set_or_clear_target_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.target_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_link][crate::model::Operation::target_link].
    pub fn set_target_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_link][crate::model::Operation::target_link].
    pub fn set_or_clear_target_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user][crate::model::Operation::user].
    pub fn set_user<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [user][crate::model::Operation::user].
    pub fn set_or_clear_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warnings][crate::model::Operation::warnings].
    pub fn set_warnings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::operation::Warnings>,
    {
        use std::iter::Iterator;
        self.warnings = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [zone][crate::model::Operation::zone].
    pub fn set_zone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][crate::model::Operation::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetCommonInstanceMetadataOperationMetadata {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_operation_id: std::option::Option<std::string::String>,

    /// Status information per location (location name is key).
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub per_location_operations: std::collections::HashMap<std::string::String, crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo>,
}

impl SetCommonInstanceMetadataOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [client_operation_id][crate::model::SetCommonInstanceMetadataOperationMetadata::client_operation_id].
    pub fn set_client_operation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_operation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_operation_id][crate::model::SetCommonInstanceMetadataOperationMetadata::client_operation_id].
    pub fn set_or_clear_client_operation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_operation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [per_location_operations][crate::model::SetCommonInstanceMetadataOperationMetadata::per_location_operations].
    pub fn set_per_location_operations<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo>,
    {
        use std::iter::Iterator;
        self.per_location_operations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo {
    /// If state is `ABANDONED` or `FAILED`, this field is populated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<crate::model::Status>,

    /// Status of the action, which can be one of the following: `PROPAGATING`,
    /// `PROPAGATED`, `ABANDONED`, `FAILED`, or `DONE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<std::string::String>,
}

impl SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [error][crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo::error].
    pub fn set_error<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Status>,
    {
        self.error = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [error][crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo::error].
    pub fn set_or_clear_error<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Status>,
    {
        self.error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo::state].
    pub fn set_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.state = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Address resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddressList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Address resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Address>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl AddressList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::AddressList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::AddressList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::AddressList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Address>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::AddressList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::AddressList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::AddressList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::AddressList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::AddressList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::AddressList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::AddressList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::AddressList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddressAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of AddressesScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::AddressesScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl AddressAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::AddressAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::AddressAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::AddressAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::AddressesScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::AddressAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::AddressAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::AddressAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::AddressAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::AddressAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::AddressAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::AddressAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::AddressAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::AddressAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddressesScopedList {
    /// A list of Address resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub addresses: std::vec::Vec<crate::model::Address>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl AddressesScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [addresses][crate::model::AddressesScopedList::addresses].
    pub fn set_addresses<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Address>,
    {
        use std::iter::Iterator;
        self.addresses = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::AddressesScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::AddressesScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Disk resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DiskList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Disk resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Disk>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl DiskList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DiskList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::DiskList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::DiskList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Disk>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::DiskList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::DiskList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::DiskList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::DiskList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::DiskList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::DiskList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::DiskList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::DiskList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DiskAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of DisksScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::DisksScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl DiskAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DiskAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::DiskAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::DiskAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::DisksScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::DiskAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::DiskAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::DiskAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::DiskAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::DiskAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::DiskAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::DiskAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::DiskAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::DiskAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisksScopedList {
    /// A list of Disk resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disks: std::vec::Vec<crate::model::Disk>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl DisksScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [disks][crate::model::DisksScopedList::disks].
    pub fn set_disks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Disk>,
    {
        use std::iter::Iterator;
        self.disks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::DisksScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::DisksScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Instance resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Instance resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Instance>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl InstanceList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::InstanceList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::InstanceList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::InstanceList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Instance>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::InstanceList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::InstanceList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::InstanceList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::InstanceList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::InstanceList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::InstanceList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::InstanceList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::InstanceList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of InstancesScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::InstancesScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl InstanceAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::InstanceAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::InstanceAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::InstanceAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::InstancesScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::InstanceAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::InstanceAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::InstanceAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::InstanceAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::InstanceAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::InstanceAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::InstanceAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::InstanceAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::InstanceAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancesScopedList {
    /// A list of Instance resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub instances: std::vec::Vec<crate::model::Instance>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl InstancesScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instances][crate::model::InstancesScopedList::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Instance>,
    {
        use std::iter::Iterator;
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::InstancesScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::InstancesScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Network resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Network resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Network>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl NetworkList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::NetworkList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::NetworkList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::NetworkList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Network>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::NetworkList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::NetworkList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::NetworkList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::NetworkList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::NetworkList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::NetworkList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::NetworkList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::NetworkList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Subnetwork resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworkList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Subnetwork resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Subnetwork>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl SubnetworkList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::SubnetworkList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::SubnetworkList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::SubnetworkList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Subnetwork>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::SubnetworkList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::SubnetworkList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::SubnetworkList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::SubnetworkList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::SubnetworkList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::SubnetworkList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::SubnetworkList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::SubnetworkList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworkAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of SubnetworksScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::SubnetworksScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl SubnetworkAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::SubnetworkAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::SubnetworkAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::SubnetworkAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::SubnetworksScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::SubnetworkAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::SubnetworkAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::SubnetworkAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::SubnetworkAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::SubnetworkAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::SubnetworkAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::SubnetworkAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::SubnetworkAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::SubnetworkAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubnetworksScopedList {
    /// A list of Subnetwork resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub subnetworks: std::vec::Vec<crate::model::Subnetwork>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl SubnetworksScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [subnetworks][crate::model::SubnetworksScopedList::subnetworks].
    pub fn set_subnetworks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Subnetwork>,
    {
        use std::iter::Iterator;
        self.subnetworks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::SubnetworksScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::SubnetworksScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Firewall resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Firewall resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Firewall>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl FirewallList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::FirewallList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::FirewallList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::FirewallList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Firewall>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::FirewallList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::FirewallList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::FirewallList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::FirewallList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::FirewallList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::FirewallList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::FirewallList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::FirewallList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of ForwardingRule resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ForwardingRuleList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of ForwardingRule resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::ForwardingRule>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl ForwardingRuleList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ForwardingRuleList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ForwardingRuleList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::ForwardingRuleList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ForwardingRule>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::ForwardingRuleList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::ForwardingRuleList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ForwardingRuleList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ForwardingRuleList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::ForwardingRuleList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::ForwardingRuleList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::ForwardingRuleList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::ForwardingRuleList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ForwardingRuleAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of ForwardingRulesScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::ForwardingRulesScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl ForwardingRuleAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ForwardingRuleAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ForwardingRuleAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::ForwardingRuleAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::ForwardingRulesScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::ForwardingRuleAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::ForwardingRuleAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ForwardingRuleAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ForwardingRuleAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::ForwardingRuleAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::ForwardingRuleAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::ForwardingRuleAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::ForwardingRuleAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::ForwardingRuleAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ForwardingRulesScopedList {
    /// A list of ForwardingRule resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub forwarding_rules: std::vec::Vec<crate::model::ForwardingRule>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl ForwardingRulesScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [forwarding_rules][crate::model::ForwardingRulesScopedList::forwarding_rules].
    pub fn set_forwarding_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ForwardingRule>,
    {
        use std::iter::Iterator;
        self.forwarding_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::ForwardingRulesScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::ForwardingRulesScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of BackendService resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BackendServiceList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of BackendService resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::BackendService>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl BackendServiceList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::BackendServiceList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::BackendServiceList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::BackendServiceList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BackendService>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::BackendServiceList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::BackendServiceList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::BackendServiceList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::BackendServiceList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::BackendServiceList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::BackendServiceList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::BackendServiceList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::BackendServiceList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BackendServiceAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of BackendServicesScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::BackendServicesScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl BackendServiceAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::BackendServiceAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::BackendServiceAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::BackendServiceAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::BackendServicesScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::BackendServiceAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::BackendServiceAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::BackendServiceAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::BackendServiceAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::BackendServiceAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::BackendServiceAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::BackendServiceAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::BackendServiceAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::BackendServiceAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BackendServicesScopedList {
    /// A list of BackendService resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub backend_services: std::vec::Vec<crate::model::BackendService>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl BackendServicesScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [backend_services][crate::model::BackendServicesScopedList::backend_services].
    pub fn set_backend_services<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BackendService>,
    {
        use std::iter::Iterator;
        self.backend_services = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::BackendServicesScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::BackendServicesScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of HealthCheck resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthCheckList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of HealthCheck resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::HealthCheck>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl HealthCheckList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::HealthCheckList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::HealthCheckList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::HealthCheckList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HealthCheck>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::HealthCheckList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::HealthCheckList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::HealthCheckList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::HealthCheckList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::HealthCheckList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::HealthCheckList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::HealthCheckList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::HealthCheckList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthChecksAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of HealthChecksScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::HealthChecksScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl HealthChecksAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::HealthChecksAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::HealthChecksAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::HealthChecksAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::HealthChecksScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::HealthChecksAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::HealthChecksAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::HealthChecksAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::HealthChecksAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::HealthChecksAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::HealthChecksAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::HealthChecksAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::HealthChecksAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::HealthChecksAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthChecksScopedList {
    /// A list of HealthCheck resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub health_checks: std::vec::Vec<crate::model::HealthCheck>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl HealthChecksScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [health_checks][crate::model::HealthChecksScopedList::health_checks].
    pub fn set_health_checks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::HealthCheck>,
    {
        use std::iter::Iterator;
        self.health_checks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::HealthChecksScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::HealthChecksScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of TargetPool resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of TargetPool resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::TargetPool>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl TargetPoolList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::TargetPoolList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::TargetPoolList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::TargetPoolList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TargetPool>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::TargetPoolList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::TargetPoolList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::TargetPoolList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::TargetPoolList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::TargetPoolList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::TargetPoolList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::TargetPoolList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::TargetPoolList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of TargetPoolsScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::TargetPoolsScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl TargetPoolAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::TargetPoolAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::TargetPoolAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::TargetPoolAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::TargetPoolsScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::TargetPoolAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::TargetPoolAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::TargetPoolAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::TargetPoolAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::TargetPoolAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::TargetPoolAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::TargetPoolAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::TargetPoolAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::TargetPoolAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TargetPoolsScopedList {
    /// A list of TargetPool resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub target_pools: std::vec::Vec<crate::model::TargetPool>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl TargetPoolsScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_pools][crate::model::TargetPoolsScopedList::target_pools].
    pub fn set_target_pools<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TargetPool>,
    {
        use std::iter::Iterator;
        self.target_pools = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::TargetPoolsScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::TargetPoolsScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of UrlMap resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UrlMapList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of UrlMap resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::UrlMap>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl UrlMapList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::UrlMapList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::UrlMapList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::UrlMapList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UrlMap>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::UrlMapList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::UrlMapList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::UrlMapList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::UrlMapList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::UrlMapList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::UrlMapList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::UrlMapList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::UrlMapList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Image resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Image resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Image>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl ImageList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ImageList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ImageList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::ImageList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Image>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::ImageList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::ImageList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ImageList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ImageList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::ImageList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::ImageList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::ImageList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::ImageList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Snapshot resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SnapshotList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Snapshot resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Snapshot>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl SnapshotList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::SnapshotList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::SnapshotList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::SnapshotList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Snapshot>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::SnapshotList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::SnapshotList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::SnapshotList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::SnapshotList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::SnapshotList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::SnapshotList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::SnapshotList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::SnapshotList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of MachineType resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineTypeList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of MachineType resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::MachineType>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl MachineTypeList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::MachineTypeList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::MachineTypeList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::MachineTypeList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MachineType>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::MachineTypeList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::MachineTypeList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::MachineTypeList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::MachineTypeList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::MachineTypeList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::MachineTypeList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::MachineTypeList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::MachineTypeList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineTypeAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of MachineTypesScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::MachineTypesScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl MachineTypeAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::MachineTypeAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::MachineTypeAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::MachineTypeAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::MachineTypesScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::MachineTypeAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::MachineTypeAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::MachineTypeAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::MachineTypeAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::MachineTypeAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::MachineTypeAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::MachineTypeAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::MachineTypeAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::MachineTypeAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MachineTypesScopedList {
    /// A list of MachineType resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub machine_types: std::vec::Vec<crate::model::MachineType>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl MachineTypesScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [machine_types][crate::model::MachineTypesScopedList::machine_types].
    pub fn set_machine_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MachineType>,
    {
        use std::iter::Iterator;
        self.machine_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::MachineTypesScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::MachineTypesScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Zone resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ZoneList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Zone resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Zone>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl ZoneList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ZoneList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ZoneList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::ZoneList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Zone>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::ZoneList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::ZoneList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ZoneList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ZoneList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::ZoneList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::ZoneList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::ZoneList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::ZoneList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Region resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegionList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Region resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Region>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl RegionList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::RegionList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::RegionList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::RegionList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Region>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::RegionList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::RegionList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::RegionList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::RegionList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::RegionList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::RegionList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::RegionList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::RegionList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Contains a list of Operation resources.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of Operation resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Operation>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    /// If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl OperationList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::OperationList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::OperationList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::OperationList::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Operation>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::OperationList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::OperationList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::OperationList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::OperationList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::OperationList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::OperationList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning][crate::model::OperationList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::OperationList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationAggregatedList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// A list of OperationsScopedList resources, keyed by scope name.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub items: std::collections::HashMap<std::string::String, crate::model::OperationsScopedList>,

    /// Type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<std::string::String>,

    /// This token allows you to get the next page of results for list requests.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    /// Server-defined URL for this resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub self_link: std::option::Option<std::string::String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub unreachables: std::vec::Vec<std::string::String>,

    /// Informational warning message.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl OperationAggregatedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::OperationAggregatedList::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::OperationAggregatedList::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [items][crate::model::OperationAggregatedList::items].
    pub fn set_items<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::OperationsScopedList>,
    {
        use std::iter::Iterator;
        self.items = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kind][crate::model::OperationAggregatedList::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::OperationAggregatedList::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_page_token][crate::model::OperationAggregatedList::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::OperationAggregatedList::next_page_token].
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [self_link][crate::model::OperationAggregatedList::self_link].
    pub fn set_self_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [self_link][crate::model::OperationAggregatedList::self_link].
    pub fn set_or_clear_self_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.self_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachables][crate::model::OperationAggregatedList::unreachables].
    pub fn set_unreachables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.unreachables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::OperationAggregatedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::OperationAggregatedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationsScopedList {
    /// A list of Operation resources contained in this scope.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub operations: std::vec::Vec<crate::model::Operation>,

    /// Informational warning which replaces the list when the list is empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning: std::option::Option<crate::model::Warning>,
}

impl OperationsScopedList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [operations][crate::model::OperationsScopedList::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Operation>,
    {
        use std::iter::Iterator;
        self.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [warning][crate::model::OperationsScopedList::warning].
    pub fn set_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning][crate::model::OperationsScopedList::warning].
    pub fn set_or_clear_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Warning>,
    {
        self.warning = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [AccessConfig].
pub mod access_config {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [AccessConfig::type][crate::model::AccessConfig::type].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod r#type {
        pub const DIRECT_IPV6: &str = "DIRECT_IPV6";
        pub const ONE_TO_ONE_NAT: &str = "ONE_TO_ONE_NAT";
    }

    /// Well-known values for [AccessConfig::network_tier][crate::model::AccessConfig::network_tier].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod network_tier {
        pub const FIXED_STANDARD: &str = "FIXED_STANDARD";
        pub const PREMIUM: &str = "PREMIUM";
        pub const STANDARD: &str = "STANDARD";
        pub const STANDARD_OVERRIDES_FIXED_STANDARD: &str = "STANDARD_OVERRIDES_FIXED_STANDARD";
    }
}

/// Defines additional types related to [Address].
pub mod address {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Address::address_type][crate::model::Address::address_type].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod address_type {
        pub const EXTERNAL: &str = "EXTERNAL";
        pub const INTERNAL: &str = "INTERNAL";
        pub const UNSPECIFIED_TYPE: &str = "UNSPECIFIED_TYPE";
    }

    /// Well-known values for [Address::status][crate::model::Address::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const IN_USE: &str = "IN_USE";
        pub const RESERVED: &str = "RESERVED";
        pub const RESERVING: &str = "RESERVING";
    }
}

/// The request messages for [Addresses][crate::client::Addresses].
#[cfg(feature = "addresses")]
pub mod addresses {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Addresses::aggregated_list][crate::client::Addresses::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::addresses::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::addresses::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::addresses::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::addresses::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::addresses::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::addresses::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::addresses::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::addresses::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::addresses::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::addresses::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::addresses::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::addresses::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::addresses::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::addresses::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::addresses::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Addresses::delete][crate::client::Addresses::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the address resource for this request.
        pub address: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address][crate::model::addresses::DeleteRequest::address].
        ///
        /// This is a **required** field for requests.
        pub fn set_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.address = v.into();
            self
        }

        /// Sets the value of [project][crate::model::addresses::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::addresses::DeleteRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::addresses::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::addresses::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Addresses::get][crate::client::Addresses::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the address resource for this request.
        pub address: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address][crate::model::addresses::GetRequest::address].
        ///
        /// This is a **required** field for requests.
        pub fn set_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.address = v.into();
            self
        }

        /// Sets the value of [project][crate::model::addresses::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::addresses::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }
    }

    /// The request message for [Addresses::insert][crate::client::Addresses::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub address_resource: std::option::Option<crate::model::Address>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address_resource][crate::model::addresses::InsertRequest::address_resource].
        pub fn set_address_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Address>,
        {
            self.address_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [address_resource][crate::model::addresses::InsertRequest::address_resource].
        pub fn set_or_clear_address_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Address>,
        {
            self.address_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::addresses::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::addresses::InsertRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::addresses::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::addresses::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Addresses::list][crate::client::Addresses::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::addresses::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::addresses::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::addresses::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::addresses::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::addresses::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::addresses::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::addresses::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::addresses::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::addresses::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::addresses::ListRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::addresses::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::addresses::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Addresses::move][crate::client::Addresses::r#move].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct MoveRequest {
        /// Name of the address resource for this request.
        pub address: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// The body resource for this request.
        pub region_addresses_move_request_resource: std::option::Option<crate::model::RegionAddressesMoveRequest>,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl MoveRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address][crate::model::addresses::MoveRequest::address].
        ///
        /// This is a **required** field for requests.
        pub fn set_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.address = v.into();
            self
        }

        /// Sets the value of [project][crate::model::addresses::MoveRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::addresses::MoveRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [region_addresses_move_request_resource][crate::model::addresses::MoveRequest::region_addresses_move_request_resource].
        pub fn set_region_addresses_move_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::RegionAddressesMoveRequest>,
        {
            self.region_addresses_move_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [region_addresses_move_request_resource][crate::model::addresses::MoveRequest::region_addresses_move_request_resource].
        pub fn set_or_clear_region_addresses_move_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::RegionAddressesMoveRequest>,
        {
            self.region_addresses_move_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [request_id][crate::model::addresses::MoveRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::addresses::MoveRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Addresses::set_labels][crate::client::Addresses::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// The body resource for this request.
        pub region_set_labels_request_resource: std::option::Option<crate::model::RegionSetLabelsRequest>,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name or id of the resource for this request.
        pub resource: std::string::String,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::addresses::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::addresses::SetLabelsRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [region_set_labels_request_resource][crate::model::addresses::SetLabelsRequest::region_set_labels_request_resource].
        pub fn set_region_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::RegionSetLabelsRequest>,
        {
            self.region_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [region_set_labels_request_resource][crate::model::addresses::SetLabelsRequest::region_set_labels_request_resource].
        pub fn set_or_clear_region_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::RegionSetLabelsRequest>,
        {
            self.region_set_labels_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [request_id][crate::model::addresses::SetLabelsRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::addresses::SetLabelsRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource][crate::model::addresses::SetLabelsRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.resource = v.into();
            self
        }
    }
}

/// Defines additional types related to [AttachedDisk].
pub mod attached_disk {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [AttachedDisk::mode][crate::model::AttachedDisk::mode].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod mode {
        pub const READ_ONLY: &str = "READ_ONLY";
        pub const READ_WRITE: &str = "READ_WRITE";
    }

    /// Well-known values for [AttachedDisk::type][crate::model::AttachedDisk::type].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod r#type {
        pub const PERSISTENT: &str = "PERSISTENT";
        pub const SCRATCH: &str = "SCRATCH";
    }
}

/// Defines additional types related to [Backend].
pub mod backend {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Backend::balancing_mode][crate::model::Backend::balancing_mode].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod balancing_mode {
        pub const CONNECTION: &str = "CONNECTION";
        pub const CUSTOM_METRICS: &str = "CUSTOM_METRICS";
        pub const RATE: &str = "RATE";
        pub const UTILIZATION: &str = "UTILIZATION";
    }
}

/// Defines additional types related to [BackendService].
pub mod backend_service {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [BackendService::protocol][crate::model::BackendService::protocol].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod protocol {
        pub const GRPC: &str = "GRPC";
        pub const H2C: &str = "H2C";
        pub const HTTP: &str = "HTTP";
        pub const HTTP2: &str = "HTTP2";
        pub const HTTPS: &str = "HTTPS";
        pub const SSL: &str = "SSL";
        pub const TCP: &str = "TCP";
        pub const UDP: &str = "UDP";
        pub const UNSPECIFIED: &str = "UNSPECIFIED";
    }
}

/// The request messages for [BackendServices][crate::client::BackendServices].
#[cfg(feature = "backend-services")]
pub mod backend_services {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [BackendServices::aggregated_list][crate::client::BackendServices::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::backend_services::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::backend_services::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::backend_services::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::backend_services::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::backend_services::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::backend_services::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::backend_services::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::backend_services::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::backend_services::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::backend_services::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::backend_services::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::backend_services::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::backend_services::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::backend_services::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::backend_services::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [BackendServices::delete][crate::client::BackendServices::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the backend service resource for this request.
        pub backend_service: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [backend_service][crate::model::backend_services::DeleteRequest::backend_service].
        ///
        /// This is a **required** field for requests.
        pub fn set_backend_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.backend_service = v.into();
            self
        }

        /// Sets the value of [project][crate::model::backend_services::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::backend_services::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::backend_services::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [BackendServices::get][crate::client::BackendServices::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the backend service resource for this request.
        pub backend_service: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [backend_service][crate::model::backend_services::GetRequest::backend_service].
        ///
        /// This is a **required** field for requests.
        pub fn set_backend_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.backend_service = v.into();
            self
        }

        /// Sets the value of [project][crate::model::backend_services::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [BackendServices::get_health][crate::client::BackendServices::get_health].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetHealthRequest {
        /// Name of the backend service resource for this request.
        pub backend_service: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The body resource for this request.
        pub resource_group_reference_resource: std::option::Option<crate::model::ResourceGroupReference>,
    }

    impl GetHealthRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [backend_service][crate::model::backend_services::GetHealthRequest::backend_service].
        ///
        /// This is a **required** field for requests.
        pub fn set_backend_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.backend_service = v.into();
            self
        }

        /// Sets the value of [project][crate::model::backend_services::GetHealthRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [resource_group_reference_resource][crate::model::backend_services::GetHealthRequest::resource_group_reference_resource].
        pub fn set_resource_group_reference_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ResourceGroupReference>,
        {
            self.resource_group_reference_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_group_reference_resource][crate::model::backend_services::GetHealthRequest::resource_group_reference_resource].
        pub fn set_or_clear_resource_group_reference_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ResourceGroupReference>,
        {
            self.resource_group_reference_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [BackendServices::insert][crate::client::BackendServices::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub backend_service_resource: std::option::Option<crate::model::BackendService>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [backend_service_resource][crate::model::backend_services::InsertRequest::backend_service_resource].
        pub fn set_backend_service_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::BackendService>,
        {
            self.backend_service_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [backend_service_resource][crate::model::backend_services::InsertRequest::backend_service_resource].
        pub fn set_or_clear_backend_service_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::BackendService>,
        {
            self.backend_service_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::backend_services::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::backend_services::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::backend_services::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [BackendServices::list][crate::client::BackendServices::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::backend_services::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::backend_services::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::backend_services::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::backend_services::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::backend_services::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::backend_services::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::backend_services::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::backend_services::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::backend_services::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::backend_services::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::backend_services::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [BackendServices::patch][crate::client::BackendServices::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// Name of the backend service resource for this request.
        pub backend_service: std::string::String,

        /// The body resource for this request.
        pub backend_service_resource: std::option::Option<crate::model::BackendService>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [backend_service][crate::model::backend_services::PatchRequest::backend_service].
        ///
        /// This is a **required** field for requests.
        pub fn set_backend_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.backend_service = v.into();
            self
        }

        /// Sets the value of [backend_service_resource][crate::model::backend_services::PatchRequest::backend_service_resource].
        pub fn set_backend_service_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::BackendService>,
        {
            self.backend_service_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [backend_service_resource][crate::model::backend_services::PatchRequest::backend_service_resource].
        pub fn set_or_clear_backend_service_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::BackendService>,
        {
            self.backend_service_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::backend_services::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::backend_services::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::backend_services::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [BackendServices::update][crate::client::BackendServices::update].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct UpdateRequest {
        /// Name of the backend service resource for this request.
        pub backend_service: std::string::String,

        /// The body resource for this request.
        pub backend_service_resource: std::option::Option<crate::model::BackendService>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl UpdateRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [backend_service][crate::model::backend_services::UpdateRequest::backend_service].
        ///
        /// This is a **required** field for requests.
        pub fn set_backend_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.backend_service = v.into();
            self
        }

        /// Sets the value of [backend_service_resource][crate::model::backend_services::UpdateRequest::backend_service_resource].
        pub fn set_backend_service_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::BackendService>,
        {
            self.backend_service_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [backend_service_resource][crate::model::backend_services::UpdateRequest::backend_service_resource].
        pub fn set_or_clear_backend_service_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::BackendService>,
        {
            self.backend_service_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::backend_services::UpdateRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::backend_services::UpdateRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::backend_services::UpdateRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [DeprecationStatus].
pub mod deprecation_status {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [DeprecationStatus::state][crate::model::DeprecationStatus::state].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod state {
        pub const ACTIVE: &str = "ACTIVE";
        pub const DELETED: &str = "DELETED";
        pub const DEPRECATED: &str = "DEPRECATED";
        pub const OBSOLETE: &str = "OBSOLETE";
    }
}

/// Defines additional types related to [Disk].
pub mod disk {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Disk::status][crate::model::Disk::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const CREATING: &str = "CREATING";
        pub const DELETING: &str = "DELETING";
        pub const FAILED: &str = "FAILED";
        pub const READY: &str = "READY";
        pub const RESTORING: &str = "RESTORING";
        pub const UNAVAILABLE: &str = "UNAVAILABLE";
    }
}

/// The request messages for [Disks][crate::client::Disks].
#[cfg(feature = "disks")]
pub mod disks {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Disks::aggregated_list][crate::client::Disks::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::disks::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::disks::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::disks::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::disks::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::disks::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::disks::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::disks::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::disks::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::disks::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::disks::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::disks::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::disks::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::disks::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::disks::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::disks::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Disks::create_snapshot][crate::client::Disks::create_snapshot].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct CreateSnapshotRequest {
        /// Name of the disk resource for this request.
        pub disk: std::string::String,

        /// Whether to attempt an application consistent snapshot by informing
        /// the OS to prepare for the snapshot process.
        pub guest_flush: std::option::Option<bool>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub snapshot_resource: std::option::Option<crate::model::Snapshot>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl CreateSnapshotRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [disk][crate::model::disks::CreateSnapshotRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.disk = v.into();
            self
        }

        /// Sets the value of [guest_flush][crate::model::disks::CreateSnapshotRequest::guest_flush].
        pub fn set_guest_flush<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.guest_flush = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [guest_flush][crate::model::disks::CreateSnapshotRequest::guest_flush].
        pub fn set_or_clear_guest_flush<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.guest_flush = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::disks::CreateSnapshotRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::CreateSnapshotRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::CreateSnapshotRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot_resource][crate::model::disks::CreateSnapshotRequest::snapshot_resource].
        pub fn set_snapshot_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Snapshot>,
        {
            self.snapshot_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [snapshot_resource][crate::model::disks::CreateSnapshotRequest::snapshot_resource].
        pub fn set_or_clear_snapshot_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Snapshot>,
        {
            self.snapshot_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::disks::CreateSnapshotRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Disks::delete][crate::client::Disks::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the disk resource for this request.
        pub disk: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [disk][crate::model::disks::DeleteRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.disk = v.into();
            self
        }

        /// Sets the value of [project][crate::model::disks::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::disks::DeleteRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Disks::resize][crate::client::Disks::resize].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ResizeRequest {
        /// Name of the disk resource for this request.
        pub disk: std::string::String,

        /// The body resource for this request.
        pub disks_resize_request_resource: std::option::Option<crate::model::DisksResizeRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ResizeRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [disk][crate::model::disks::ResizeRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.disk = v.into();
            self
        }

        /// Sets the value of [disks_resize_request_resource][crate::model::disks::ResizeRequest::disks_resize_request_resource].
        pub fn set_disks_resize_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::DisksResizeRequest>,
        {
            self.disks_resize_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [disks_resize_request_resource][crate::model::disks::ResizeRequest::disks_resize_request_resource].
        pub fn set_or_clear_disks_resize_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::DisksResizeRequest>,
        {
            self.disks_resize_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::disks::ResizeRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::ResizeRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::ResizeRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::disks::ResizeRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Disks::get][crate::client::Disks::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the disk resource for this request.
        pub disk: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [disk][crate::model::disks::GetRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.disk = v.into();
            self
        }

        /// Sets the value of [project][crate::model::disks::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::disks::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Disks::insert][crate::client::Disks::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub disk_resource: std::option::Option<crate::model::Disk>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Source image to restore onto a disk. This field is optional.
        pub source_image: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [disk_resource][crate::model::disks::InsertRequest::disk_resource].
        pub fn set_disk_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Disk>,
        {
            self.disk_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [disk_resource][crate::model::disks::InsertRequest::disk_resource].
        pub fn set_or_clear_disk_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Disk>,
        {
            self.disk_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::disks::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_image][crate::model::disks::InsertRequest::source_image].
        pub fn set_source_image<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source_image = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_image][crate::model::disks::InsertRequest::source_image].
        pub fn set_or_clear_source_image<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source_image = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::disks::InsertRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Disks::list][crate::client::Disks::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::disks::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::disks::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::disks::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::disks::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::disks::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::disks::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::disks::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::disks::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::disks::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::disks::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::disks::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::disks::ListRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Disks::set_labels][crate::client::Disks::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name or id of the resource for this request.
        pub resource: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,

        /// The body resource for this request.
        pub zone_set_labels_request_resource: std::option::Option<crate::model::ZoneSetLabelsRequest>,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::disks::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::SetLabelsRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::SetLabelsRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource][crate::model::disks::SetLabelsRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.resource = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::disks::SetLabelsRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }

        /// Sets the value of [zone_set_labels_request_resource][crate::model::disks::SetLabelsRequest::zone_set_labels_request_resource].
        pub fn set_zone_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ZoneSetLabelsRequest>,
        {
            self.zone_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [zone_set_labels_request_resource][crate::model::disks::SetLabelsRequest::zone_set_labels_request_resource].
        pub fn set_or_clear_zone_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ZoneSetLabelsRequest>,
        {
            self.zone_set_labels_request_resource = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [Firewall].
pub mod firewall {
    #[allow(unused_imports)]
    use super::*;

    /// An ALLOW rule in a firewall.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Allowed {
        /// The IP protocol to which this rule applies.
        #[serde(rename = "IPProtocol")]
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub ip_protocol: std::option::Option<std::string::String>,

        /// An optional list of ports to which this rule applies.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub ports: std::vec::Vec<std::string::String>,
    }

    impl Allowed {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [ip_protocol][crate::model::firewall::Allowed::ip_protocol].
        pub fn set_ip_protocol<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.ip_protocol = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ip_protocol][crate::model::firewall::Allowed::ip_protocol].
        pub fn set_or_clear_ip_protocol<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.ip_protocol = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ports][crate::model::firewall::Allowed::ports].
        pub fn set_ports<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.ports = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// A DENY rule in a firewall.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Denied {
        /// The IP protocol to which this rule applies.
        #[serde(rename = "IPProtocol")]
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub ip_protocol: std::option::Option<std::string::String>,

        /// An optional list of ports to which this rule applies.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub ports: std::vec::Vec<std::string::String>,
    }

    impl Denied {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [ip_protocol][crate::model::firewall::Denied::ip_protocol].
        pub fn set_ip_protocol<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.ip_protocol = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ip_protocol][crate::model::firewall::Denied::ip_protocol].
        pub fn set_or_clear_ip_protocol<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.ip_protocol = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ports][crate::model::firewall::Denied::ports].
        pub fn set_ports<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.ports = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// Well-known values for [Firewall::direction][crate::model::Firewall::direction].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod direction {
        pub const EGRESS: &str = "EGRESS";
        pub const INGRESS: &str = "INGRESS";
    }
}

/// The request messages for [Firewalls][crate::client::Firewalls].
#[cfg(feature = "firewalls")]
pub mod firewalls {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Firewalls::delete][crate::client::Firewalls::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the firewall resource for this request.
        pub firewall: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [firewall][crate::model::firewalls::DeleteRequest::firewall].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.firewall = v.into();
            self
        }

        /// Sets the value of [project][crate::model::firewalls::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::firewalls::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::firewalls::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Firewalls::get][crate::client::Firewalls::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the firewall resource for this request.
        pub firewall: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [firewall][crate::model::firewalls::GetRequest::firewall].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.firewall = v.into();
            self
        }

        /// Sets the value of [project][crate::model::firewalls::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [Firewalls::insert][crate::client::Firewalls::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub firewall_resource: std::option::Option<crate::model::Firewall>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [firewall_resource][crate::model::firewalls::InsertRequest::firewall_resource].
        pub fn set_firewall_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Firewall>,
        {
            self.firewall_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [firewall_resource][crate::model::firewalls::InsertRequest::firewall_resource].
        pub fn set_or_clear_firewall_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Firewall>,
        {
            self.firewall_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::firewalls::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::firewalls::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::firewalls::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Firewalls::list][crate::client::Firewalls::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::firewalls::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::firewalls::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::firewalls::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::firewalls::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::firewalls::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::firewalls::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::firewalls::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::firewalls::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::firewalls::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::firewalls::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::firewalls::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Firewalls::patch][crate::client::Firewalls::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// Name of the firewall resource for this request.
        pub firewall: std::string::String,

        /// The body resource for this request.
        pub firewall_resource: std::option::Option<crate::model::Firewall>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [firewall][crate::model::firewalls::PatchRequest::firewall].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.firewall = v.into();
            self
        }

        /// Sets the value of [firewall_resource][crate::model::firewalls::PatchRequest::firewall_resource].
        pub fn set_firewall_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Firewall>,
        {
            self.firewall_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [firewall_resource][crate::model::firewalls::PatchRequest::firewall_resource].
        pub fn set_or_clear_firewall_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Firewall>,
        {
            self.firewall_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::firewalls::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::firewalls::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::firewalls::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Firewalls::update][crate::client::Firewalls::update].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct UpdateRequest {
        /// Name of the firewall resource for this request.
        pub firewall: std::string::String,

        /// The body resource for this request.
        pub firewall_resource: std::option::Option<crate::model::Firewall>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl UpdateRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [firewall][crate::model::firewalls::UpdateRequest::firewall].
        ///
        /// This is a **required** field for requests.
        pub fn set_firewall<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.firewall = v.into();
            self
        }

        /// Sets the value of [firewall_resource][crate::model::firewalls::UpdateRequest::firewall_resource].
        pub fn set_firewall_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Firewall>,
        {
            self.firewall_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [firewall_resource][crate::model::firewalls::UpdateRequest::firewall_resource].
        pub fn set_or_clear_firewall_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Firewall>,
        {
            self.firewall_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::firewalls::UpdateRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::firewalls::UpdateRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::firewalls::UpdateRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }
}

/// The request messages for [ForwardingRules][crate::client::ForwardingRules].
#[cfg(feature = "forwarding-rules")]
pub mod forwarding_rules {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [ForwardingRules::aggregated_list][crate::client::ForwardingRules::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::forwarding_rules::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::forwarding_rules::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::forwarding_rules::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::forwarding_rules::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::forwarding_rules::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::forwarding_rules::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::forwarding_rules::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::forwarding_rules::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::forwarding_rules::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::forwarding_rules::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::forwarding_rules::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::forwarding_rules::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::forwarding_rules::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::forwarding_rules::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [ForwardingRules::delete][crate::client::ForwardingRules::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the forwarding rule resource for this request.
        pub forwarding_rule: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [forwarding_rule][crate::model::forwarding_rules::DeleteRequest::forwarding_rule].
        ///
        /// This is a **required** field for requests.
        pub fn set_forwarding_rule<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.forwarding_rule = v.into();
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::DeleteRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::forwarding_rules::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::forwarding_rules::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [ForwardingRules::get][crate::client::ForwardingRules::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the forwarding rule resource for this request.
        pub forwarding_rule: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [forwarding_rule][crate::model::forwarding_rules::GetRequest::forwarding_rule].
        ///
        /// This is a **required** field for requests.
        pub fn set_forwarding_rule<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.forwarding_rule = v.into();
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }
    }

    /// The request message for [ForwardingRules::insert][crate::client::ForwardingRules::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub forwarding_rule_resource: std::option::Option<crate::model::ForwardingRule>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [forwarding_rule_resource][crate::model::forwarding_rules::InsertRequest::forwarding_rule_resource].
        pub fn set_forwarding_rule_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ForwardingRule>,
        {
            self.forwarding_rule_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [forwarding_rule_resource][crate::model::forwarding_rules::InsertRequest::forwarding_rule_resource].
        pub fn set_or_clear_forwarding_rule_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ForwardingRule>,
        {
            self.forwarding_rule_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::InsertRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::forwarding_rules::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::forwarding_rules::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [ForwardingRules::list][crate::client::ForwardingRules::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::forwarding_rules::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::forwarding_rules::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::forwarding_rules::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::forwarding_rules::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::forwarding_rules::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::forwarding_rules::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::forwarding_rules::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::forwarding_rules::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::ListRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::forwarding_rules::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::forwarding_rules::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [ForwardingRules::patch][crate::client::ForwardingRules::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// Name of the forwarding rule resource for this request.
        pub forwarding_rule: std::string::String,

        /// The body resource for this request.
        pub forwarding_rule_resource: std::option::Option<crate::model::ForwardingRule>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [forwarding_rule][crate::model::forwarding_rules::PatchRequest::forwarding_rule].
        ///
        /// This is a **required** field for requests.
        pub fn set_forwarding_rule<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.forwarding_rule = v.into();
            self
        }

        /// Sets the value of [forwarding_rule_resource][crate::model::forwarding_rules::PatchRequest::forwarding_rule_resource].
        pub fn set_forwarding_rule_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ForwardingRule>,
        {
            self.forwarding_rule_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [forwarding_rule_resource][crate::model::forwarding_rules::PatchRequest::forwarding_rule_resource].
        pub fn set_or_clear_forwarding_rule_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ForwardingRule>,
        {
            self.forwarding_rule_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::PatchRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::forwarding_rules::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::forwarding_rules::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [ForwardingRules::set_labels][crate::client::ForwardingRules::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// The body resource for this request.
        pub region_set_labels_request_resource: std::option::Option<crate::model::RegionSetLabelsRequest>,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name or id of the resource for this request.
        pub resource: std::string::String,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::forwarding_rules::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::SetLabelsRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [region_set_labels_request_resource][crate::model::forwarding_rules::SetLabelsRequest::region_set_labels_request_resource].
        pub fn set_region_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::RegionSetLabelsRequest>,
        {
            self.region_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [region_set_labels_request_resource][crate::model::forwarding_rules::SetLabelsRequest::region_set_labels_request_resource].
        pub fn set_or_clear_region_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::RegionSetLabelsRequest>,
        {
            self.region_set_labels_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [request_id][crate::model::forwarding_rules::SetLabelsRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::forwarding_rules::SetLabelsRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource][crate::model::forwarding_rules::SetLabelsRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.resource = v.into();
            self
        }
    }

    /// The request message for [ForwardingRules::set_target][crate::client::ForwardingRules::set_target].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetTargetRequest {
        /// Name of the forwarding rule resource for this request.
        pub forwarding_rule: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub target_reference_resource: std::option::Option<crate::model::TargetReference>,
    }

    impl SetTargetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [forwarding_rule][crate::model::forwarding_rules::SetTargetRequest::forwarding_rule].
        ///
        /// This is a **required** field for requests.
        pub fn set_forwarding_rule<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.forwarding_rule = v.into();
            self
        }

        /// Sets the value of [project][crate::model::forwarding_rules::SetTargetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::forwarding_rules::SetTargetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::forwarding_rules::SetTargetRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::forwarding_rules::SetTargetRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_reference_resource][crate::model::forwarding_rules::SetTargetRequest::target_reference_resource].
        pub fn set_target_reference_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TargetReference>,
        {
            self.target_reference_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_reference_resource][crate::model::forwarding_rules::SetTargetRequest::target_reference_resource].
        pub fn set_or_clear_target_reference_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::TargetReference>,
        {
            self.target_reference_resource = v.map(|x| x.into());
            self
        }
    }
}

/// The request messages for [GlobalAddresses][crate::client::GlobalAddresses].
#[cfg(feature = "global-addresses")]
pub mod global_addresses {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [GlobalAddresses::delete][crate::client::GlobalAddresses::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the address resource for this request.
        pub address: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address][crate::model::global_addresses::DeleteRequest::address].
        ///
        /// This is a **required** field for requests.
        pub fn set_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.address = v.into();
            self
        }

        /// Sets the value of [project][crate::model::global_addresses::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::global_addresses::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::global_addresses::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [GlobalAddresses::get][crate::client::GlobalAddresses::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the address resource for this request.
        pub address: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address][crate::model::global_addresses::GetRequest::address].
        ///
        /// This is a **required** field for requests.
        pub fn set_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.address = v.into();
            self
        }

        /// Sets the value of [project][crate::model::global_addresses::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [GlobalAddresses::insert][crate::client::GlobalAddresses::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub address_resource: std::option::Option<crate::model::Address>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address_resource][crate::model::global_addresses::InsertRequest::address_resource].
        pub fn set_address_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Address>,
        {
            self.address_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [address_resource][crate::model::global_addresses::InsertRequest::address_resource].
        pub fn set_or_clear_address_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Address>,
        {
            self.address_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::global_addresses::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::global_addresses::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::global_addresses::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [GlobalAddresses::list][crate::client::GlobalAddresses::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::global_addresses::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::global_addresses::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::global_addresses::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::global_addresses::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::global_addresses::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::global_addresses::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::global_addresses::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::global_addresses::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::global_addresses::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::global_addresses::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::global_addresses::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [GlobalAddresses::move][crate::client::GlobalAddresses::r#move].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct MoveRequest {
        /// Name of the address resource for this request.
        pub address: std::string::String,

        /// The body resource for this request.
        pub global_addresses_move_request_resource: std::option::Option<crate::model::GlobalAddressesMoveRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl MoveRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [address][crate::model::global_addresses::MoveRequest::address].
        ///
        /// This is a **required** field for requests.
        pub fn set_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.address = v.into();
            self
        }

        /// Sets the value of [global_addresses_move_request_resource][crate::model::global_addresses::MoveRequest::global_addresses_move_request_resource].
        pub fn set_global_addresses_move_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::GlobalAddressesMoveRequest>,
        {
            self.global_addresses_move_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global_addresses_move_request_resource][crate::model::global_addresses::MoveRequest::global_addresses_move_request_resource].
        pub fn set_or_clear_global_addresses_move_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::GlobalAddressesMoveRequest>,
        {
            self.global_addresses_move_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::global_addresses::MoveRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::global_addresses::MoveRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::global_addresses::MoveRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [GlobalAddresses::set_labels][crate::client::GlobalAddresses::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// The body resource for this request.
        pub global_set_labels_request_resource: std::option::Option<crate::model::GlobalSetLabelsRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name or id of the resource for this request.
        pub resource: std::string::String,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [global_set_labels_request_resource][crate::model::global_addresses::SetLabelsRequest::global_set_labels_request_resource].
        pub fn set_global_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::GlobalSetLabelsRequest>,
        {
            self.global_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global_set_labels_request_resource][crate::model::global_addresses::SetLabelsRequest::global_set_labels_request_resource].
        pub fn set_or_clear_global_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::GlobalSetLabelsRequest>,
        {
            self.global_set_labels_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::global_addresses::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::global_addresses::SetLabelsRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.resource = v.into();
            self
        }
    }
}

/// The request messages for
/// [GlobalOperations][crate::client::GlobalOperations].
#[cfg(feature = "global-operations")]
pub mod global_operations {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [GlobalOperations::aggregated_list][crate::client::GlobalOperations::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::global_operations::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::global_operations::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::global_operations::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::global_operations::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::global_operations::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::global_operations::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::global_operations::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::global_operations::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::global_operations::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::global_operations::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::global_operations::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::global_operations::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::global_operations::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::global_operations::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::global_operations::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [GlobalOperations::delete][crate::client::GlobalOperations::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::global_operations::DeleteRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::global_operations::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [GlobalOperations::get][crate::client::GlobalOperations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::global_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::global_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [GlobalOperations::list][crate::client::GlobalOperations::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::global_operations::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::global_operations::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::global_operations::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::global_operations::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::global_operations::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::global_operations::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::global_operations::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::global_operations::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::global_operations::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::global_operations::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::global_operations::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [GlobalOperations::wait][crate::client::GlobalOperations::wait].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct WaitRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl WaitRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::global_operations::WaitRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::global_operations::WaitRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }
}

/// Defines additional types related to [HealthCheck].
pub mod health_check {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [HealthCheck::type][crate::model::HealthCheck::type].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod r#type {
        pub const GRPC: &str = "GRPC";
        pub const HTTP: &str = "HTTP";
        pub const HTTP2: &str = "HTTP2";
        pub const HTTPS: &str = "HTTPS";
        pub const INVALID: &str = "INVALID";
        pub const SSL: &str = "SSL";
        pub const TCP: &str = "TCP";
    }
}

/// The request messages for [HealthChecks][crate::client::HealthChecks].
#[cfg(feature = "health-checks")]
pub mod health_checks {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [HealthChecks::aggregated_list][crate::client::HealthChecks::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::health_checks::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::health_checks::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::health_checks::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::health_checks::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::health_checks::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::health_checks::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::health_checks::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::health_checks::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::health_checks::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::health_checks::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::health_checks::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::health_checks::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::health_checks::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::health_checks::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::health_checks::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [HealthChecks::delete][crate::client::HealthChecks::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the health check resource for this request.
        pub health_check: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [health_check][crate::model::health_checks::DeleteRequest::health_check].
        ///
        /// This is a **required** field for requests.
        pub fn set_health_check<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.health_check = v.into();
            self
        }

        /// Sets the value of [project][crate::model::health_checks::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::health_checks::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::health_checks::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [HealthChecks::get][crate::client::HealthChecks::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the health check resource for this request.
        pub health_check: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [health_check][crate::model::health_checks::GetRequest::health_check].
        ///
        /// This is a **required** field for requests.
        pub fn set_health_check<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.health_check = v.into();
            self
        }

        /// Sets the value of [project][crate::model::health_checks::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [HealthChecks::insert][crate::client::HealthChecks::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub health_check_resource: std::option::Option<crate::model::HealthCheck>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [health_check_resource][crate::model::health_checks::InsertRequest::health_check_resource].
        pub fn set_health_check_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::HealthCheck>,
        {
            self.health_check_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [health_check_resource][crate::model::health_checks::InsertRequest::health_check_resource].
        pub fn set_or_clear_health_check_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::HealthCheck>,
        {
            self.health_check_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::health_checks::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::health_checks::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::health_checks::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [HealthChecks::list][crate::client::HealthChecks::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::health_checks::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::health_checks::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::health_checks::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::health_checks::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::health_checks::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::health_checks::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::health_checks::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::health_checks::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::health_checks::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::health_checks::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::health_checks::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [HealthChecks::patch][crate::client::HealthChecks::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// Name of the health check resource for this request.
        pub health_check: std::string::String,

        /// The body resource for this request.
        pub health_check_resource: std::option::Option<crate::model::HealthCheck>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [health_check][crate::model::health_checks::PatchRequest::health_check].
        ///
        /// This is a **required** field for requests.
        pub fn set_health_check<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.health_check = v.into();
            self
        }

        /// Sets the value of [health_check_resource][crate::model::health_checks::PatchRequest::health_check_resource].
        pub fn set_health_check_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::HealthCheck>,
        {
            self.health_check_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [health_check_resource][crate::model::health_checks::PatchRequest::health_check_resource].
        pub fn set_or_clear_health_check_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::HealthCheck>,
        {
            self.health_check_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::health_checks::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::health_checks::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::health_checks::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [HealthChecks::update][crate::client::HealthChecks::update].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct UpdateRequest {
        /// Name of the health check resource for this request.
        pub health_check: std::string::String,

        /// The body resource for this request.
        pub health_check_resource: std::option::Option<crate::model::HealthCheck>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl UpdateRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [health_check][crate::model::health_checks::UpdateRequest::health_check].
        ///
        /// This is a **required** field for requests.
        pub fn set_health_check<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.health_check = v.into();
            self
        }

        /// Sets the value of [health_check_resource][crate::model::health_checks::UpdateRequest::health_check_resource].
        pub fn set_health_check_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::HealthCheck>,
        {
            self.health_check_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [health_check_resource][crate::model::health_checks::UpdateRequest::health_check_resource].
        pub fn set_or_clear_health_check_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::HealthCheck>,
        {
            self.health_check_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::health_checks::UpdateRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::health_checks::UpdateRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::health_checks::UpdateRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [HealthStatus].
pub mod health_status {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [HealthStatus::health_state][crate::model::HealthStatus::health_state].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod health_state {
        pub const HEALTHY: &str = "HEALTHY";
        pub const UNHEALTHY: &str = "UNHEALTHY";
    }
}

/// Defines additional types related to [Image].
pub mod image {
    #[allow(unused_imports)]
    use super::*;

    /// The parameters of the raw disk image.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct RawDisk {
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub container_type: std::option::Option<std::string::String>,

        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub sha1_checksum: std::option::Option<std::string::String>,

        /// The full Google Cloud Storage URL where the raw disk image archive
        /// is stored.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub source: std::option::Option<std::string::String>,
    }

    impl RawDisk {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [container_type][crate::model::image::RawDisk::container_type].
        pub fn set_container_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.container_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [container_type][crate::model::image::RawDisk::container_type].
        pub fn set_or_clear_container_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.container_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sha1_checksum][crate::model::image::RawDisk::sha1_checksum].
        pub fn set_sha1_checksum<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.sha1_checksum = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sha1_checksum][crate::model::image::RawDisk::sha1_checksum].
        pub fn set_or_clear_sha1_checksum<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.sha1_checksum = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source][crate::model::image::RawDisk::source].
        pub fn set_source<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source][crate::model::image::RawDisk::source].
        pub fn set_or_clear_source<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source = v.map(|x| x.into());
            self
        }
    }

    /// Well-known values for [Image::status][crate::model::Image::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const DELETING: &str = "DELETING";
        pub const FAILED: &str = "FAILED";
        pub const PENDING: &str = "PENDING";
        pub const READY: &str = "READY";
    }
}

/// The request messages for [Images][crate::client::Images].
#[cfg(feature = "images")]
pub mod images {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Images::delete][crate::client::Images::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the image resource for this request.
        pub image: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [image][crate::model::images::DeleteRequest::image].
        ///
        /// This is a **required** field for requests.
        pub fn set_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.image = v.into();
            self
        }

        /// Sets the value of [project][crate::model::images::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::images::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::images::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Images::deprecate][crate::client::Images::deprecate].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeprecateRequest {
        /// The body resource for this request.
        pub deprecation_status_resource: std::option::Option<crate::model::DeprecationStatus>,

        /// Name of the image resource for this request.
        pub image: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeprecateRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [deprecation_status_resource][crate::model::images::DeprecateRequest::deprecation_status_resource].
        pub fn set_deprecation_status_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::DeprecationStatus>,
        {
            self.deprecation_status_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [deprecation_status_resource][crate::model::images::DeprecateRequest::deprecation_status_resource].
        pub fn set_or_clear_deprecation_status_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::DeprecationStatus>,
        {
            self.deprecation_status_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [image][crate::model::images::DeprecateRequest::image].
        ///
        /// This is a **required** field for requests.
        pub fn set_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.image = v.into();
            self
        }

        /// Sets the value of [project][crate::model::images::DeprecateRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::images::DeprecateRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::images::DeprecateRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Images::get][crate::client::Images::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the image resource for this request.
        pub image: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [image][crate::model::images::GetRequest::image].
        ///
        /// This is a **required** field for requests.
        pub fn set_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.image = v.into();
            self
        }

        /// Sets the value of [project][crate::model::images::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [Images::get_from_family][crate::client::Images::get_from_family].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetFromFamilyRequest {
        /// Name of the family resource for this request.
        pub family: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetFromFamilyRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [family][crate::model::images::GetFromFamilyRequest::family].
        ///
        /// This is a **required** field for requests.
        pub fn set_family<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.family = v.into();
            self
        }

        /// Sets the value of [project][crate::model::images::GetFromFamilyRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [Images::insert][crate::client::Images::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// Force image creation if true.
        pub force_create: std::option::Option<bool>,

        /// The body resource for this request.
        pub image_resource: std::option::Option<crate::model::Image>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [force_create][crate::model::images::InsertRequest::force_create].
        pub fn set_force_create<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.force_create = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [force_create][crate::model::images::InsertRequest::force_create].
        pub fn set_or_clear_force_create<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.force_create = v.map(|x| x.into());
            self
        }

        /// Sets the value of [image_resource][crate::model::images::InsertRequest::image_resource].
        pub fn set_image_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Image>,
        {
            self.image_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [image_resource][crate::model::images::InsertRequest::image_resource].
        pub fn set_or_clear_image_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Image>,
        {
            self.image_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::images::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::images::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::images::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Images::list][crate::client::Images::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::images::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::images::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::images::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::images::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::images::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::images::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::images::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::images::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::images::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::images::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::images::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Images::set_labels][crate::client::Images::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// The body resource for this request.
        pub global_set_labels_request_resource: std::option::Option<crate::model::GlobalSetLabelsRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name or id of the resource for this request.
        pub resource: std::string::String,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [global_set_labels_request_resource][crate::model::images::SetLabelsRequest::global_set_labels_request_resource].
        pub fn set_global_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::GlobalSetLabelsRequest>,
        {
            self.global_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global_set_labels_request_resource][crate::model::images::SetLabelsRequest::global_set_labels_request_resource].
        pub fn set_or_clear_global_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::GlobalSetLabelsRequest>,
        {
            self.global_set_labels_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::images::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::images::SetLabelsRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.resource = v.into();
            self
        }
    }
}

/// Defines additional types related to [Instance].
pub mod instance {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Instance::status][crate::model::Instance::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const DEPROVISIONING: &str = "DEPROVISIONING";
        pub const PENDING: &str = "PENDING";
        pub const PROVISIONING: &str = "PROVISIONING";
        pub const REPAIRING: &str = "REPAIRING";
        pub const RUNNING: &str = "RUNNING";
        pub const STAGING: &str = "STAGING";
        pub const STOPPED: &str = "STOPPED";
        pub const STOPPING: &str = "STOPPING";
        pub const SUSPENDED: &str = "SUSPENDED";
        pub const SUSPENDING: &str = "SUSPENDING";
        pub const TERMINATED: &str = "TERMINATED";
    }
}

/// The request messages for [Instances][crate::client::Instances].
#[cfg(feature = "instances")]
pub mod instances {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Instances::aggregated_list][crate::client::Instances::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::instances::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::instances::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::instances::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::instances::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::instances::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::instances::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::instances::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::instances::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::instances::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::instances::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::instances::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::instances::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::instances::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::instances::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Instances::attach_disk][crate::client::Instances::attach_disk].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AttachDiskRequest {
        /// The body resource for this request.
        pub attached_disk_resource: std::option::Option<crate::model::AttachedDisk>,

        /// Whether to force attach the regional disk even if it's currently
        /// attached to another instance.
        pub force_attach: std::option::Option<bool>,

        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl AttachDiskRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [attached_disk_resource][crate::model::instances::AttachDiskRequest::attached_disk_resource].
        pub fn set_attached_disk_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::AttachedDisk>,
        {
            self.attached_disk_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [attached_disk_resource][crate::model::instances::AttachDiskRequest::attached_disk_resource].
        pub fn set_or_clear_attached_disk_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::AttachedDisk>,
        {
            self.attached_disk_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [force_attach][crate::model::instances::AttachDiskRequest::force_attach].
        pub fn set_force_attach<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.force_attach = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [force_attach][crate::model::instances::AttachDiskRequest::force_attach].
        pub fn set_or_clear_force_attach<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.force_attach = v.map(|x| x.into());
            self
        }

        /// Sets the value of [instance][crate::model::instances::AttachDiskRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::AttachDiskRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::AttachDiskRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::AttachDiskRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::AttachDiskRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::delete][crate::client::Instances::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// If set to true, Compute Engine skips the graceful shutdown and deletes
        /// the instance immediately.
        pub no_graceful_shutdown: std::option::Option<bool>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::DeleteRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [no_graceful_shutdown][crate::model::instances::DeleteRequest::no_graceful_shutdown].
        pub fn set_no_graceful_shutdown<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.no_graceful_shutdown = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [no_graceful_shutdown][crate::model::instances::DeleteRequest::no_graceful_shutdown].
        pub fn set_or_clear_no_graceful_shutdown<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.no_graceful_shutdown = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::DeleteRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::detach_disk][crate::client::Instances::detach_disk].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DetachDiskRequest {
        /// The device name of the disk to detach. Make a get() request on the
        /// instance to view currently attached disks and device names.
        pub device_name: std::string::String,

        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl DetachDiskRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [device_name][crate::model::instances::DetachDiskRequest::device_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_device_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.device_name = v.into();
            self
        }

        /// Sets the value of [instance][crate::model::instances::DetachDiskRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::DetachDiskRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::DetachDiskRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::DetachDiskRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::DetachDiskRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::reset][crate::client::Instances::reset].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ResetRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ResetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::ResetRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::ResetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::ResetRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::ResetRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::ResetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::resume][crate::client::Instances::resume].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ResumeRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ResumeRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::ResumeRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::ResumeRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::ResumeRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::ResumeRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::ResumeRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::get][crate::client::Instances::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::GetRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::instances::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::get_serial_port_output][crate::client::Instances::get_serial_port_output].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetSerialPortOutputRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Specifies which COM or serial port to retrieve data from.
        pub port: std::option::Option<i32>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Specifies the starting byte position of the output to return. To
        /// start with the first byte of output to the specified port, omit this
        /// field or set it to `0`.
        pub start: std::option::Option<i64>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl GetSerialPortOutputRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::GetSerialPortOutputRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [port][crate::model::instances::GetSerialPortOutputRequest::port].
        pub fn set_port<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.port = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [port][crate::model::instances::GetSerialPortOutputRequest::port].
        pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.port = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::GetSerialPortOutputRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [start][crate::model::instances::GetSerialPortOutputRequest::start].
        pub fn set_start<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::instances::GetSerialPortOutputRequest::start].
        pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::GetSerialPortOutputRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::insert][crate::client::Instances::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub instance_resource: std::option::Option<crate::model::Instance>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Specifies instance template to create the instance.
        pub source_instance_template: std::option::Option<std::string::String>,

        /// Specifies the machine image to use to create the instance.
        pub source_machine_image: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance_resource][crate::model::instances::InsertRequest::instance_resource].
        pub fn set_instance_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Instance>,
        {
            self.instance_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [instance_resource][crate::model::instances::InsertRequest::instance_resource].
        pub fn set_or_clear_instance_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Instance>,
        {
            self.instance_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_instance_template][crate::model::instances::InsertRequest::source_instance_template].
        pub fn set_source_instance_template<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source_instance_template = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_instance_template][crate::model::instances::InsertRequest::source_instance_template].
        pub fn set_or_clear_source_instance_template<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source_instance_template = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_machine_image][crate::model::instances::InsertRequest::source_machine_image].
        pub fn set_source_machine_image<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source_machine_image = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_machine_image][crate::model::instances::InsertRequest::source_machine_image].
        pub fn set_or_clear_source_machine_image<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.source_machine_image = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::InsertRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::list][crate::client::Instances::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::instances::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::instances::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::instances::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::instances::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::instances::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::instances::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::instances::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::instances::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::instances::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::instances::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::ListRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::set_labels][crate::client::Instances::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// The body resource for this request.
        pub instances_set_labels_request_resource: std::option::Option<crate::model::InstancesSetLabelsRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::SetLabelsRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [instances_set_labels_request_resource][crate::model::instances::SetLabelsRequest::instances_set_labels_request_resource].
        pub fn set_instances_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::InstancesSetLabelsRequest>,
        {
            self.instances_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [instances_set_labels_request_resource][crate::model::instances::SetLabelsRequest::instances_set_labels_request_resource].
        pub fn set_or_clear_instances_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::InstancesSetLabelsRequest>,
        {
            self.instances_set_labels_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::SetLabelsRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::SetLabelsRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::SetLabelsRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::set_machine_type][crate::client::Instances::set_machine_type].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetMachineTypeRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// The body resource for this request.
        pub instances_set_machine_type_request_resource: std::option::Option<crate::model::InstancesSetMachineTypeRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl SetMachineTypeRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::SetMachineTypeRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [instances_set_machine_type_request_resource][crate::model::instances::SetMachineTypeRequest::instances_set_machine_type_request_resource].
        pub fn set_instances_set_machine_type_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::InstancesSetMachineTypeRequest>,
        {
            self.instances_set_machine_type_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [instances_set_machine_type_request_resource][crate::model::instances::SetMachineTypeRequest::instances_set_machine_type_request_resource].
        pub fn set_or_clear_instances_set_machine_type_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::InstancesSetMachineTypeRequest>,
        {
            self.instances_set_machine_type_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::SetMachineTypeRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::SetMachineTypeRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::SetMachineTypeRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::SetMachineTypeRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::set_metadata][crate::client::Instances::set_metadata].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetMetadataRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// The body resource for this request.
        pub metadata_resource: std::option::Option<crate::model::Metadata>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl SetMetadataRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::SetMetadataRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [metadata_resource][crate::model::instances::SetMetadataRequest::metadata_resource].
        pub fn set_metadata_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Metadata>,
        {
            self.metadata_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [metadata_resource][crate::model::instances::SetMetadataRequest::metadata_resource].
        pub fn set_or_clear_metadata_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Metadata>,
        {
            self.metadata_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::SetMetadataRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::SetMetadataRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::SetMetadataRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::SetMetadataRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::set_tags][crate::client::Instances::set_tags].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetTagsRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub tags_resource: std::option::Option<crate::model::Tags>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl SetTagsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::SetTagsRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::SetTagsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::SetTagsRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::SetTagsRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags_resource][crate::model::instances::SetTagsRequest::tags_resource].
        pub fn set_tags_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Tags>,
        {
            self.tags_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tags_resource][crate::model::instances::SetTagsRequest::tags_resource].
        pub fn set_or_clear_tags_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Tags>,
        {
            self.tags_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::SetTagsRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::start][crate::client::Instances::start].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct StartRequest {
        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl StartRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance][crate::model::instances::StartRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::StartRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::StartRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::StartRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::StartRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::stop][crate::client::Instances::stop].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct StopRequest {
        /// This property is required if the instance has any attached Local SSD
        /// disks. If false, Local SSD data will be preserved when the instance
        /// is suspended. If true, the contents of any attached Local SSD disks
        /// will be discarded.
        pub discard_local_ssd: std::option::Option<bool>,

        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// If set to true, Compute Engine skips the graceful shutdown and stops
        /// the instance immediately.
        pub no_graceful_shutdown: std::option::Option<bool>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl StopRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [discard_local_ssd][crate::model::instances::StopRequest::discard_local_ssd].
        pub fn set_discard_local_ssd<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.discard_local_ssd = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [discard_local_ssd][crate::model::instances::StopRequest::discard_local_ssd].
        pub fn set_or_clear_discard_local_ssd<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.discard_local_ssd = v.map(|x| x.into());
            self
        }

        /// Sets the value of [instance][crate::model::instances::StopRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [no_graceful_shutdown][crate::model::instances::StopRequest::no_graceful_shutdown].
        pub fn set_no_graceful_shutdown<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.no_graceful_shutdown = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [no_graceful_shutdown][crate::model::instances::StopRequest::no_graceful_shutdown].
        pub fn set_or_clear_no_graceful_shutdown<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.no_graceful_shutdown = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::instances::StopRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::StopRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::StopRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::StopRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Instances::suspend][crate::client::Instances::suspend].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SuspendRequest {
        /// This property is required if the instance has any attached Local SSD
        /// disks. If false, Local SSD data will be preserved when the instance
        /// is suspended. If true, the contents of any attached Local SSD disks
        /// will be discarded.
        pub discard_local_ssd: std::option::Option<bool>,

        /// Name of the instance resource for this request.
        pub instance: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl SuspendRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [discard_local_ssd][crate::model::instances::SuspendRequest::discard_local_ssd].
        pub fn set_discard_local_ssd<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.discard_local_ssd = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [discard_local_ssd][crate::model::instances::SuspendRequest::discard_local_ssd].
        pub fn set_or_clear_discard_local_ssd<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.discard_local_ssd = v.map(|x| x.into());
            self
        }

        /// Sets the value of [instance][crate::model::instances::SuspendRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.instance = v.into();
            self
        }

        /// Sets the value of [project][crate::model::instances::SuspendRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instances::SuspendRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instances::SuspendRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::instances::SuspendRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }
}

/// The request messages for [MachineTypes][crate::client::MachineTypes].
#[cfg(feature = "machine-types")]
pub mod machine_types {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [MachineTypes::aggregated_list][crate::client::MachineTypes::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::machine_types::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::machine_types::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::machine_types::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::machine_types::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::machine_types::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::machine_types::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::machine_types::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::machine_types::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::machine_types::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::machine_types::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::machine_types::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::machine_types::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::machine_types::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::machine_types::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::machine_types::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [MachineTypes::get][crate::client::MachineTypes::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the machine type resource for this request.
        pub machine_type: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [machine_type][crate::model::machine_types::GetRequest::machine_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_machine_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.machine_type = v.into();
            self
        }

        /// Sets the value of [project][crate::model::machine_types::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::machine_types::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [MachineTypes::list][crate::client::MachineTypes::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::machine_types::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::machine_types::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::machine_types::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::machine_types::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::machine_types::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::machine_types::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::machine_types::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::machine_types::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::machine_types::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::machine_types::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::machine_types::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::machine_types::ListRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }
}

/// Defines additional types related to [Metadata].
pub mod metadata {
    #[allow(unused_imports)]
    use super::*;

    /// Metadata
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Items {
        /// Key for the metadata entry.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub key: std::option::Option<std::string::String>,

        /// Value for the metadata entry.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub value: std::option::Option<std::string::String>,
    }

    impl Items {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [key][crate::model::metadata::Items::key].
        pub fn set_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [key][crate::model::metadata::Items::key].
        pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [value][crate::model::metadata::Items::value].
        pub fn set_value<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::metadata::Items::value].
        pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.value = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [NetworkPeering].
pub mod network_peering {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [NetworkPeering::state][crate::model::NetworkPeering::state].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod state {
        pub const ACTIVE: &str = "ACTIVE";
        pub const INACTIVE: &str = "INACTIVE";
    }
}

/// Defines additional types related to [NetworkRoutingConfig].
pub mod network_routing_config {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [NetworkRoutingConfig::routing_mode][crate::model::NetworkRoutingConfig::routing_mode].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod routing_mode {
        pub const GLOBAL: &str = "GLOBAL";
        pub const REGIONAL: &str = "REGIONAL";
    }
}

/// The request messages for [Networks][crate::client::Networks].
#[cfg(feature = "networks")]
pub mod networks {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Networks::add_peering][crate::client::Networks::add_peering].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AddPeeringRequest {
        /// Name of the network resource for this request.
        pub network: std::string::String,

        /// The body resource for this request.
        pub networks_add_peering_request_resource: std::option::Option<crate::model::NetworksAddPeeringRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl AddPeeringRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [network][crate::model::networks::AddPeeringRequest::network].
        ///
        /// This is a **required** field for requests.
        pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [networks_add_peering_request_resource][crate::model::networks::AddPeeringRequest::networks_add_peering_request_resource].
        pub fn set_networks_add_peering_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::NetworksAddPeeringRequest>,
        {
            self.networks_add_peering_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [networks_add_peering_request_resource][crate::model::networks::AddPeeringRequest::networks_add_peering_request_resource].
        pub fn set_or_clear_networks_add_peering_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::NetworksAddPeeringRequest>,
        {
            self.networks_add_peering_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::networks::AddPeeringRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::networks::AddPeeringRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::networks::AddPeeringRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Networks::delete][crate::client::Networks::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the network resource for this request.
        pub network: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [network][crate::model::networks::DeleteRequest::network].
        ///
        /// This is a **required** field for requests.
        pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [project][crate::model::networks::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::networks::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::networks::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Networks::remove_peering][crate::client::Networks::remove_peering].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct RemovePeeringRequest {
        /// Name of the network resource for this request.
        pub network: std::string::String,

        /// The body resource for this request.
        pub networks_remove_peering_request_resource: std::option::Option<crate::model::NetworksRemovePeeringRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl RemovePeeringRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [network][crate::model::networks::RemovePeeringRequest::network].
        ///
        /// This is a **required** field for requests.
        pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [networks_remove_peering_request_resource][crate::model::networks::RemovePeeringRequest::networks_remove_peering_request_resource].
        pub fn set_networks_remove_peering_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::NetworksRemovePeeringRequest>,
        {
            self.networks_remove_peering_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [networks_remove_peering_request_resource][crate::model::networks::RemovePeeringRequest::networks_remove_peering_request_resource].
        pub fn set_or_clear_networks_remove_peering_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::NetworksRemovePeeringRequest>,
        {
            self.networks_remove_peering_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::networks::RemovePeeringRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::networks::RemovePeeringRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::networks::RemovePeeringRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Networks::get][crate::client::Networks::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the network resource for this request.
        pub network: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [network][crate::model::networks::GetRequest::network].
        ///
        /// This is a **required** field for requests.
        pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [project][crate::model::networks::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [Networks::insert][crate::client::Networks::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// The body resource for this request.
        pub network_resource: std::option::Option<crate::model::Network>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [network_resource][crate::model::networks::InsertRequest::network_resource].
        pub fn set_network_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Network>,
        {
            self.network_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_resource][crate::model::networks::InsertRequest::network_resource].
        pub fn set_or_clear_network_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Network>,
        {
            self.network_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::networks::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::networks::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::networks::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Networks::list][crate::client::Networks::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::networks::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::networks::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::networks::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::networks::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::networks::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::networks::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::networks::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::networks::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::networks::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::networks::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::networks::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Networks::patch][crate::client::Networks::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// Name of the network resource for this request.
        pub network: std::string::String,

        /// The body resource for this request.
        pub network_resource: std::option::Option<crate::model::Network>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [network][crate::model::networks::PatchRequest::network].
        ///
        /// This is a **required** field for requests.
        pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [network_resource][crate::model::networks::PatchRequest::network_resource].
        pub fn set_network_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Network>,
        {
            self.network_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_resource][crate::model::networks::PatchRequest::network_resource].
        pub fn set_or_clear_network_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Network>,
        {
            self.network_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::networks::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::networks::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::networks::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    #[allow(unused_imports)]
    use super::*;

    /// The errors generated while processing the operation.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Error {
        /// The array of errors encountered while processing this operation.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub errors: std::vec::Vec<crate::model::operation::error::Errors>,
    }

    impl Error {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [errors][crate::model::operation::Error::errors].
        pub fn set_errors<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::operation::error::Errors>,
        {
            use std::iter::Iterator;
            self.errors = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Warnings {
        /// A warning code, if applicable.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub code: std::option::Option<std::string::String>,

        /// Metadata about this warning in key: value format.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub data: std::vec::Vec<crate::model::operation::warnings::Data>,

        /// A human-readable description of the warning code.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub message: std::option::Option<std::string::String>,
    }

    impl Warnings {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [code][crate::model::operation::Warnings::code].
        pub fn set_code<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.code = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [code][crate::model::operation::Warnings::code].
        pub fn set_or_clear_code<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.code = v.map(|x| x.into());
            self
        }

        /// Sets the value of [data][crate::model::operation::Warnings::data].
        pub fn set_data<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::operation::warnings::Data>,
        {
            use std::iter::Iterator;
            self.data = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [message][crate::model::operation::Warnings::message].
        pub fn set_message<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.message = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [message][crate::model::operation::Warnings::message].
        pub fn set_or_clear_message<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.message = v.map(|x| x.into());
            self
        }
    }

    /// Well-known values for [Operation::status][crate::model::Operation::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const DONE: &str = "DONE";
        pub const PENDING: &str = "PENDING";
        pub const RUNNING: &str = "RUNNING";
    }

    /// Defines additional types related to [Error].
    pub mod error {
        #[allow(unused_imports)]
        use super::*;

        #[serde_with::serde_as]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Errors {
            /// The error type identifier for this error.
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub code: std::option::Option<std::string::String>,

            /// Indicates the field in the request that caused the error. This
            /// property is optional.
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub location: std::option::Option<std::string::String>,

            /// An optional, human-readable error message.
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub message: std::option::Option<std::string::String>,
        }

        impl Errors {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [code][crate::model::operation::error::Errors::code].
            pub fn set_code<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.code = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of [code][crate::model::operation::error::Errors::code].
            pub fn set_or_clear_code<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.code = v.map(|x| x.into());
                self
            }

            /// Sets the value of [location][crate::model::operation::error::Errors::location].
            pub fn set_location<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.location = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of [location][crate::model::operation::error::Errors::location].
            pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.location = v.map(|x| x.into());
                self
            }

            /// Sets the value of [message][crate::model::operation::error::Errors::message].
            pub fn set_message<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.message = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of [message][crate::model::operation::error::Errors::message].
            pub fn set_or_clear_message<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.message = v.map(|x| x.into());
                self
            }
        }
    }

    /// Defines additional types related to [Warnings].
    pub mod warnings {
        #[allow(unused_imports)]
        use super::*;

        #[serde_with::serde_as]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Data {
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub key: std::option::Option<std::string::String>,

            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub value: std::option::Option<std::string::String>,
        }

        impl Data {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [key][crate::model::operation::warnings::Data::key].
            pub fn set_key<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.key = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of [key][crate::model::operation::warnings::Data::key].
            pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.key = v.map(|x| x.into());
                self
            }

            /// Sets the value of [value][crate::model::operation::warnings::Data::value].
            pub fn set_value<T>(mut self, v: T) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.value = std::option::Option::Some(v.into());
                self
            }

            /// Sets or clears the value of [value][crate::model::operation::warnings::Data::value].
            pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
            where
                T: std::convert::Into<std::string::String>,
            {
                self.value = v.map(|x| x.into());
                self
            }
        }
    }
}

/// The request messages for [Projects][crate::client::Projects].
#[cfg(feature = "projects")]
pub mod projects {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Projects::get][crate::client::Projects::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::projects::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }
    }

    /// The request message for [Projects::set_common_instance_metadata][crate::client::Projects::set_common_instance_metadata].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetCommonInstanceMetadataRequest {
        /// The body resource for this request.
        pub metadata_resource: std::option::Option<crate::model::Metadata>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl SetCommonInstanceMetadataRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [metadata_resource][crate::model::projects::SetCommonInstanceMetadataRequest::metadata_resource].
        pub fn set_metadata_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Metadata>,
        {
            self.metadata_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [metadata_resource][crate::model::projects::SetCommonInstanceMetadataRequest::metadata_resource].
        pub fn set_or_clear_metadata_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Metadata>,
        {
            self.metadata_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::projects::SetCommonInstanceMetadataRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::projects::SetCommonInstanceMetadataRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::projects::SetCommonInstanceMetadataRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Projects::set_default_network_tier][crate::client::Projects::set_default_network_tier].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetDefaultNetworkTierRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// The body resource for this request.
        pub projects_set_default_network_tier_request_resource: std::option::Option<crate::model::ProjectsSetDefaultNetworkTierRequest>,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,
    }

    impl SetDefaultNetworkTierRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::projects::SetDefaultNetworkTierRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [projects_set_default_network_tier_request_resource][crate::model::projects::SetDefaultNetworkTierRequest::projects_set_default_network_tier_request_resource].
        pub fn set_projects_set_default_network_tier_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ProjectsSetDefaultNetworkTierRequest>,
        {
            self.projects_set_default_network_tier_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [projects_set_default_network_tier_request_resource][crate::model::projects::SetDefaultNetworkTierRequest::projects_set_default_network_tier_request_resource].
        pub fn set_or_clear_projects_set_default_network_tier_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ProjectsSetDefaultNetworkTierRequest>,
        {
            self.projects_set_default_network_tier_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [request_id][crate::model::projects::SetDefaultNetworkTierRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::projects::SetDefaultNetworkTierRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Projects::set_usage_export_bucket][crate::client::Projects::set_usage_export_bucket].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetUsageExportBucketRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub usage_export_location_resource: std::option::Option<crate::model::UsageExportLocation>,
    }

    impl SetUsageExportBucketRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::projects::SetUsageExportBucketRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::projects::SetUsageExportBucketRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::projects::SetUsageExportBucketRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [usage_export_location_resource][crate::model::projects::SetUsageExportBucketRequest::usage_export_location_resource].
        pub fn set_usage_export_location_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UsageExportLocation>,
        {
            self.usage_export_location_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [usage_export_location_resource][crate::model::projects::SetUsageExportBucketRequest::usage_export_location_resource].
        pub fn set_or_clear_usage_export_location_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UsageExportLocation>,
        {
            self.usage_export_location_resource = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [Region].
pub mod region {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Region::status][crate::model::Region::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const DOWN: &str = "DOWN";
        pub const UP: &str = "UP";
    }
}

/// The request messages for
/// [RegionOperations][crate::client::RegionOperations].
#[cfg(feature = "region-operations")]
pub mod region_operations {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [RegionOperations::delete][crate::client::RegionOperations::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::region_operations::DeleteRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::region_operations::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::DeleteRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }
    }

    /// The request message for [RegionOperations::get][crate::client::RegionOperations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::region_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::region_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }
    }

    /// The request message for [RegionOperations::list][crate::client::RegionOperations::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::region_operations::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::region_operations::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::region_operations::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::region_operations::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::region_operations::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::region_operations::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::region_operations::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::region_operations::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::region_operations::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::ListRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::region_operations::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::region_operations::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [RegionOperations::wait][crate::client::RegionOperations::wait].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct WaitRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,
    }

    impl WaitRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::region_operations::WaitRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::region_operations::WaitRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::WaitRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }
    }
}

/// The request messages for [Regions][crate::client::Regions].
#[cfg(feature = "regions")]
pub mod regions {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Regions::get][crate::client::Regions::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::regions::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::regions::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }
    }

    /// The request message for [Regions::list][crate::client::Regions::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::regions::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::regions::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::regions::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::regions::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::regions::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::regions::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::regions::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::regions::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::regions::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::regions::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::regions::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [Scheduling].
pub mod scheduling {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Scheduling::on_host_maintenance][crate::model::Scheduling::on_host_maintenance].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod on_host_maintenance {
        pub const MIGRATE: &str = "MIGRATE";
        pub const TERMINATE: &str = "TERMINATE";
    }
}

/// Defines additional types related to
/// [SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo].
pub mod set_common_instance_metadata_operation_metadata_per_location_operation_info {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo::state][crate::model::SetCommonInstanceMetadataOperationMetadataPerLocationOperationInfo::state].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod state {
        pub const ABANDONED: &str = "ABANDONED";
        pub const DONE: &str = "DONE";
        pub const FAILED: &str = "FAILED";
        pub const PROPAGATED: &str = "PROPAGATED";
        pub const PROPAGATING: &str = "PROPAGATING";
        pub const UNSPECIFIED: &str = "UNSPECIFIED";
    }
}

/// Defines additional types related to [Snapshot].
pub mod snapshot {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Snapshot::status][crate::model::Snapshot::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const CREATING: &str = "CREATING";
        pub const DELETING: &str = "DELETING";
        pub const FAILED: &str = "FAILED";
        pub const READY: &str = "READY";
        pub const UPLOADING: &str = "UPLOADING";
    }
}

/// The request messages for [Snapshots][crate::client::Snapshots].
#[cfg(feature = "snapshots")]
pub mod snapshots {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Snapshots::delete][crate::client::Snapshots::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the snapshot resource for this request.
        pub snapshot: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::snapshots::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::snapshots::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::snapshots::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot][crate::model::snapshots::DeleteRequest::snapshot].
        ///
        /// This is a **required** field for requests.
        pub fn set_snapshot<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.snapshot = v.into();
            self
        }
    }

    /// The request message for [Snapshots::get][crate::client::Snapshots::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the snapshot resource for this request.
        pub snapshot: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::snapshots::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [snapshot][crate::model::snapshots::GetRequest::snapshot].
        ///
        /// This is a **required** field for requests.
        pub fn set_snapshot<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.snapshot = v.into();
            self
        }
    }

    /// The request message for [Snapshots::insert][crate::client::Snapshots::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub snapshot_resource: std::option::Option<crate::model::Snapshot>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::snapshots::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::snapshots::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::snapshots::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot_resource][crate::model::snapshots::InsertRequest::snapshot_resource].
        pub fn set_snapshot_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Snapshot>,
        {
            self.snapshot_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [snapshot_resource][crate::model::snapshots::InsertRequest::snapshot_resource].
        pub fn set_or_clear_snapshot_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Snapshot>,
        {
            self.snapshot_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Snapshots::list][crate::client::Snapshots::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::snapshots::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::snapshots::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::snapshots::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::snapshots::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::snapshots::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::snapshots::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::snapshots::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::snapshots::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::snapshots::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::snapshots::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::snapshots::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Snapshots::set_labels][crate::client::Snapshots::set_labels].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetLabelsRequest {
        /// The body resource for this request.
        pub global_set_labels_request_resource: std::option::Option<crate::model::GlobalSetLabelsRequest>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name or id of the resource for this request.
        pub resource: std::string::String,
    }

    impl SetLabelsRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [global_set_labels_request_resource][crate::model::snapshots::SetLabelsRequest::global_set_labels_request_resource].
        pub fn set_global_set_labels_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::GlobalSetLabelsRequest>,
        {
            self.global_set_labels_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [global_set_labels_request_resource][crate::model::snapshots::SetLabelsRequest::global_set_labels_request_resource].
        pub fn set_or_clear_global_set_labels_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::GlobalSetLabelsRequest>,
        {
            self.global_set_labels_request_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::snapshots::SetLabelsRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::snapshots::SetLabelsRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.resource = v.into();
            self
        }
    }
}

/// Defines additional types related to [Subnetwork].
pub mod subnetwork {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Subnetwork::state][crate::model::Subnetwork::state].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod state {
        pub const DRAINING: &str = "DRAINING";
        pub const READY: &str = "READY";
    }
}

/// The request messages for [Subnetworks][crate::client::Subnetworks].
#[cfg(feature = "subnetworks")]
pub mod subnetworks {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Subnetworks::aggregated_list][crate::client::Subnetworks::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::subnetworks::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::subnetworks::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::subnetworks::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::subnetworks::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::subnetworks::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::subnetworks::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::subnetworks::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::subnetworks::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::subnetworks::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::subnetworks::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::subnetworks::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::subnetworks::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::subnetworks::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::subnetworks::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::subnetworks::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Subnetworks::delete][crate::client::Subnetworks::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the subnetwork resource for this request.
        pub subnetwork: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::subnetworks::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::DeleteRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::subnetworks::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::subnetworks::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [subnetwork][crate::model::subnetworks::DeleteRequest::subnetwork].
        ///
        /// This is a **required** field for requests.
        pub fn set_subnetwork<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.subnetwork = v.into();
            self
        }
    }

    /// The request message for [Subnetworks::expand_ip_cidr_range][crate::client::Subnetworks::expand_ip_cidr_range].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ExpandIpCidrRangeRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the subnetwork resource for this request.
        pub subnetwork: std::string::String,

        /// The body resource for this request.
        pub subnetworks_expand_ip_cidr_range_request_resource: std::option::Option<crate::model::SubnetworksExpandIpCidrRangeRequest>,
    }

    impl ExpandIpCidrRangeRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::subnetworks::ExpandIpCidrRangeRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::ExpandIpCidrRangeRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::subnetworks::ExpandIpCidrRangeRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::subnetworks::ExpandIpCidrRangeRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [subnetwork][crate::model::subnetworks::ExpandIpCidrRangeRequest::subnetwork].
        ///
        /// This is a **required** field for requests.
        pub fn set_subnetwork<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.subnetwork = v.into();
            self
        }

        /// Sets the value of [subnetworks_expand_ip_cidr_range_request_resource][crate::model::subnetworks::ExpandIpCidrRangeRequest::subnetworks_expand_ip_cidr_range_request_resource].
        pub fn set_subnetworks_expand_ip_cidr_range_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SubnetworksExpandIpCidrRangeRequest>,
        {
            self.subnetworks_expand_ip_cidr_range_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [subnetworks_expand_ip_cidr_range_request_resource][crate::model::subnetworks::ExpandIpCidrRangeRequest::subnetworks_expand_ip_cidr_range_request_resource].
        pub fn set_or_clear_subnetworks_expand_ip_cidr_range_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SubnetworksExpandIpCidrRangeRequest>,
        {
            self.subnetworks_expand_ip_cidr_range_request_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Subnetworks::get][crate::client::Subnetworks::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Name of the subnetwork resource for this request.
        pub subnetwork: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::subnetworks::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [subnetwork][crate::model::subnetworks::GetRequest::subnetwork].
        ///
        /// This is a **required** field for requests.
        pub fn set_subnetwork<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.subnetwork = v.into();
            self
        }
    }

    /// The request message for [Subnetworks::insert][crate::client::Subnetworks::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub subnetwork_resource: std::option::Option<crate::model::Subnetwork>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::subnetworks::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::InsertRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::subnetworks::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::subnetworks::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [subnetwork_resource][crate::model::subnetworks::InsertRequest::subnetwork_resource].
        pub fn set_subnetwork_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Subnetwork>,
        {
            self.subnetwork_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [subnetwork_resource][crate::model::subnetworks::InsertRequest::subnetwork_resource].
        pub fn set_or_clear_subnetwork_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Subnetwork>,
        {
            self.subnetwork_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Subnetworks::list][crate::client::Subnetworks::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::subnetworks::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::subnetworks::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::subnetworks::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::subnetworks::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::subnetworks::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::subnetworks::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::subnetworks::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::subnetworks::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::subnetworks::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::ListRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::subnetworks::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::subnetworks::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Subnetworks::patch][crate::client::Subnetworks::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// The drain timeout specifies the upper bound in seconds on the amount
        /// of time allowed to drain connections from the current ACTIVE
        /// subnetwork to the current BACKUP subnetwork.
        pub drain_timeout_seconds: std::option::Option<i32>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the subnetwork resource for this request.
        pub subnetwork: std::string::String,

        /// The body resource for this request.
        pub subnetwork_resource: std::option::Option<crate::model::Subnetwork>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [drain_timeout_seconds][crate::model::subnetworks::PatchRequest::drain_timeout_seconds].
        pub fn set_drain_timeout_seconds<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.drain_timeout_seconds = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [drain_timeout_seconds][crate::model::subnetworks::PatchRequest::drain_timeout_seconds].
        pub fn set_or_clear_drain_timeout_seconds<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.drain_timeout_seconds = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::subnetworks::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::PatchRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::subnetworks::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::subnetworks::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [subnetwork][crate::model::subnetworks::PatchRequest::subnetwork].
        ///
        /// This is a **required** field for requests.
        pub fn set_subnetwork<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.subnetwork = v.into();
            self
        }

        /// Sets the value of [subnetwork_resource][crate::model::subnetworks::PatchRequest::subnetwork_resource].
        pub fn set_subnetwork_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Subnetwork>,
        {
            self.subnetwork_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [subnetwork_resource][crate::model::subnetworks::PatchRequest::subnetwork_resource].
        pub fn set_or_clear_subnetwork_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Subnetwork>,
        {
            self.subnetwork_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [Subnetworks::set_private_ip_google_access][crate::client::Subnetworks::set_private_ip_google_access].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetPrivateIpGoogleAccessRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the subnetwork resource for this request.
        pub subnetwork: std::string::String,

        /// The body resource for this request.
        pub subnetworks_set_private_ip_google_access_request_resource: std::option::Option<crate::model::SubnetworksSetPrivateIpGoogleAccessRequest>,
    }

    impl SetPrivateIpGoogleAccessRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [subnetwork][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::subnetwork].
        ///
        /// This is a **required** field for requests.
        pub fn set_subnetwork<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.subnetwork = v.into();
            self
        }

        /// Sets the value of [subnetworks_set_private_ip_google_access_request_resource][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::subnetworks_set_private_ip_google_access_request_resource].
        pub fn set_subnetworks_set_private_ip_google_access_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SubnetworksSetPrivateIpGoogleAccessRequest>,
        {
            self.subnetworks_set_private_ip_google_access_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [subnetworks_set_private_ip_google_access_request_resource][crate::model::subnetworks::SetPrivateIpGoogleAccessRequest::subnetworks_set_private_ip_google_access_request_resource].
        pub fn set_or_clear_subnetworks_set_private_ip_google_access_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SubnetworksSetPrivateIpGoogleAccessRequest>,
        {
            self.subnetworks_set_private_ip_google_access_request_resource = v.map(|x| x.into());
            self
        }
    }
}

/// The request messages for [TargetPools][crate::client::TargetPools].
#[cfg(feature = "target-pools")]
pub mod target_pools {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [TargetPools::add_instance][crate::client::TargetPools::add_instance].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AddInstanceRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the target pool resource for this request.
        pub target_pool: std::string::String,

        /// The body resource for this request.
        pub target_pools_add_instance_request_resource: std::option::Option<crate::model::TargetPoolsAddInstanceRequest>,
    }

    impl AddInstanceRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::target_pools::AddInstanceRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::AddInstanceRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::target_pools::AddInstanceRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::target_pools::AddInstanceRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_pool][crate::model::target_pools::AddInstanceRequest::target_pool].
        ///
        /// This is a **required** field for requests.
        pub fn set_target_pool<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.target_pool = v.into();
            self
        }

        /// Sets the value of [target_pools_add_instance_request_resource][crate::model::target_pools::AddInstanceRequest::target_pools_add_instance_request_resource].
        pub fn set_target_pools_add_instance_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TargetPoolsAddInstanceRequest>,
        {
            self.target_pools_add_instance_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_pools_add_instance_request_resource][crate::model::target_pools::AddInstanceRequest::target_pools_add_instance_request_resource].
        pub fn set_or_clear_target_pools_add_instance_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::TargetPoolsAddInstanceRequest>,
        {
            self.target_pools_add_instance_request_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [TargetPools::aggregated_list][crate::client::TargetPools::aggregated_list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AggregatedListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// Indicates whether every visible scope for each scope type (zone,
        /// region, global) should be included in the response. For new resource
        /// types added after this field, the flag has no effect as new resource
        /// types will always include every visible scope for each scope type in
        /// response.
        pub include_all_scopes: std::option::Option<bool>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The Shared VPC service project id or service project number for
        /// which aggregated list request is invoked for subnetworks list-usable
        /// api.
        pub service_project_number: std::option::Option<i64>,
    }

    impl AggregatedListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::target_pools::AggregatedListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::target_pools::AggregatedListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_all_scopes][crate::model::target_pools::AggregatedListRequest::include_all_scopes].
        pub fn set_include_all_scopes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [include_all_scopes][crate::model::target_pools::AggregatedListRequest::include_all_scopes].
        pub fn set_or_clear_include_all_scopes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.include_all_scopes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::target_pools::AggregatedListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::target_pools::AggregatedListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::target_pools::AggregatedListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::target_pools::AggregatedListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::target_pools::AggregatedListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::target_pools::AggregatedListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::target_pools::AggregatedListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::target_pools::AggregatedListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::target_pools::AggregatedListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_project_number][crate::model::target_pools::AggregatedListRequest::service_project_number].
        pub fn set_service_project_number<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_project_number][crate::model::target_pools::AggregatedListRequest::service_project_number].
        pub fn set_or_clear_service_project_number<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.service_project_number = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [TargetPools::delete][crate::client::TargetPools::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the target pool resource for this request.
        pub target_pool: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::target_pools::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::DeleteRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::target_pools::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::target_pools::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_pool][crate::model::target_pools::DeleteRequest::target_pool].
        ///
        /// This is a **required** field for requests.
        pub fn set_target_pool<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.target_pool = v.into();
            self
        }
    }

    /// The request message for [TargetPools::remove_instance][crate::client::TargetPools::remove_instance].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct RemoveInstanceRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the target pool resource for this request.
        pub target_pool: std::string::String,

        /// The body resource for this request.
        pub target_pools_remove_instance_request_resource: std::option::Option<crate::model::TargetPoolsRemoveInstanceRequest>,
    }

    impl RemoveInstanceRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::target_pools::RemoveInstanceRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::RemoveInstanceRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::target_pools::RemoveInstanceRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::target_pools::RemoveInstanceRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_pool][crate::model::target_pools::RemoveInstanceRequest::target_pool].
        ///
        /// This is a **required** field for requests.
        pub fn set_target_pool<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.target_pool = v.into();
            self
        }

        /// Sets the value of [target_pools_remove_instance_request_resource][crate::model::target_pools::RemoveInstanceRequest::target_pools_remove_instance_request_resource].
        pub fn set_target_pools_remove_instance_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TargetPoolsRemoveInstanceRequest>,
        {
            self.target_pools_remove_instance_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_pools_remove_instance_request_resource][crate::model::target_pools::RemoveInstanceRequest::target_pools_remove_instance_request_resource].
        pub fn set_or_clear_target_pools_remove_instance_request_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::TargetPoolsRemoveInstanceRequest>,
        {
            self.target_pools_remove_instance_request_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [TargetPools::get][crate::client::TargetPools::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Name of the target pool resource for this request.
        pub target_pool: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::target_pools::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [target_pool][crate::model::target_pools::GetRequest::target_pool].
        ///
        /// This is a **required** field for requests.
        pub fn set_target_pool<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.target_pool = v.into();
            self
        }
    }

    /// The request message for [TargetPools::get_health][crate::client::TargetPools::get_health].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetHealthRequest {
        /// The body resource for this request.
        pub instance_reference_resource: std::option::Option<crate::model::InstanceReference>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Name of the target pool resource for this request.
        pub target_pool: std::string::String,
    }

    impl GetHealthRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [instance_reference_resource][crate::model::target_pools::GetHealthRequest::instance_reference_resource].
        pub fn set_instance_reference_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::InstanceReference>,
        {
            self.instance_reference_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [instance_reference_resource][crate::model::target_pools::GetHealthRequest::instance_reference_resource].
        pub fn set_or_clear_instance_reference_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::InstanceReference>,
        {
            self.instance_reference_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::target_pools::GetHealthRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::GetHealthRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [target_pool][crate::model::target_pools::GetHealthRequest::target_pool].
        ///
        /// This is a **required** field for requests.
        pub fn set_target_pool<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.target_pool = v.into();
            self
        }
    }

    /// The request message for [TargetPools::insert][crate::client::TargetPools::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub target_pool_resource: std::option::Option<crate::model::TargetPool>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::target_pools::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::InsertRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::target_pools::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::target_pools::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_pool_resource][crate::model::target_pools::InsertRequest::target_pool_resource].
        pub fn set_target_pool_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TargetPool>,
        {
            self.target_pool_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_pool_resource][crate::model::target_pools::InsertRequest::target_pool_resource].
        pub fn set_or_clear_target_pool_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::TargetPool>,
        {
            self.target_pool_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [TargetPools::list][crate::client::TargetPools::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::target_pools::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::target_pools::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::target_pools::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::target_pools::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::target_pools::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::target_pools::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::target_pools::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::target_pools::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::target_pools::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::ListRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::target_pools::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::target_pools::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [TargetPools::set_backup][crate::client::TargetPools::set_backup].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct SetBackupRequest {
        /// New failoverRatio value for the target pool.
        pub failover_ratio: std::option::Option<f64>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the region for this request.
        pub region: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the target pool resource for this request.
        pub target_pool: std::string::String,

        /// The body resource for this request.
        pub target_reference_resource: std::option::Option<crate::model::TargetReference>,
    }

    impl SetBackupRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [failover_ratio][crate::model::target_pools::SetBackupRequest::failover_ratio].
        pub fn set_failover_ratio<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<f64>,
        {
            self.failover_ratio = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [failover_ratio][crate::model::target_pools::SetBackupRequest::failover_ratio].
        pub fn set_or_clear_failover_ratio<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<f64>,
        {
            self.failover_ratio = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::target_pools::SetBackupRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::target_pools::SetBackupRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::target_pools::SetBackupRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::target_pools::SetBackupRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_pool][crate::model::target_pools::SetBackupRequest::target_pool].
        ///
        /// This is a **required** field for requests.
        pub fn set_target_pool<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.target_pool = v.into();
            self
        }

        /// Sets the value of [target_reference_resource][crate::model::target_pools::SetBackupRequest::target_reference_resource].
        pub fn set_target_reference_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TargetReference>,
        {
            self.target_reference_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_reference_resource][crate::model::target_pools::SetBackupRequest::target_reference_resource].
        pub fn set_or_clear_target_reference_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::TargetReference>,
        {
            self.target_reference_resource = v.map(|x| x.into());
            self
        }
    }
}

/// The request messages for [UrlMaps][crate::client::UrlMaps].
#[cfg(feature = "url-maps")]
pub mod url_maps {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [UrlMaps::delete][crate::client::UrlMaps::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the url map resource for this request.
        pub url_map: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::url_maps::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::url_maps::DeleteRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::url_maps::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [url_map][crate::model::url_maps::DeleteRequest::url_map].
        ///
        /// This is a **required** field for requests.
        pub fn set_url_map<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.url_map = v.into();
            self
        }
    }

    /// The request message for [UrlMaps::get][crate::client::UrlMaps::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// Name of the url map resource for this request.
        pub url_map: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::url_maps::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [url_map][crate::model::url_maps::GetRequest::url_map].
        ///
        /// This is a **required** field for requests.
        pub fn set_url_map<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.url_map = v.into();
            self
        }
    }

    /// The request message for [UrlMaps::insert][crate::client::UrlMaps::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// The body resource for this request.
        pub url_map_resource: std::option::Option<crate::model::UrlMap>,
    }

    impl InsertRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::url_maps::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::url_maps::InsertRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::url_maps::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [url_map_resource][crate::model::url_maps::InsertRequest::url_map_resource].
        pub fn set_url_map_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UrlMap>,
        {
            self.url_map_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [url_map_resource][crate::model::url_maps::InsertRequest::url_map_resource].
        pub fn set_or_clear_url_map_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UrlMap>,
        {
            self.url_map_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [UrlMaps::invalidate_cache][crate::client::UrlMaps::invalidate_cache].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InvalidateCacheRequest {
        /// The body resource for this request.
        pub cache_invalidation_rule_resource: std::option::Option<crate::model::CacheInvalidationRule>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the url map resource for this request.
        pub url_map: std::string::String,
    }

    impl InvalidateCacheRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [cache_invalidation_rule_resource][crate::model::url_maps::InvalidateCacheRequest::cache_invalidation_rule_resource].
        pub fn set_cache_invalidation_rule_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CacheInvalidationRule>,
        {
            self.cache_invalidation_rule_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cache_invalidation_rule_resource][crate::model::url_maps::InvalidateCacheRequest::cache_invalidation_rule_resource].
        pub fn set_or_clear_cache_invalidation_rule_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::CacheInvalidationRule>,
        {
            self.cache_invalidation_rule_resource = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::url_maps::InvalidateCacheRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::url_maps::InvalidateCacheRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::url_maps::InvalidateCacheRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [url_map][crate::model::url_maps::InvalidateCacheRequest::url_map].
        ///
        /// This is a **required** field for requests.
        pub fn set_url_map<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.url_map = v.into();
            self
        }
    }

    /// The request message for [UrlMaps::list][crate::client::UrlMaps::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::url_maps::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::url_maps::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::url_maps::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::url_maps::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::url_maps::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::url_maps::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::url_maps::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::url_maps::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::url_maps::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::url_maps::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::url_maps::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [UrlMaps::patch][crate::client::UrlMaps::patch].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct PatchRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the url map resource for this request.
        pub url_map: std::string::String,

        /// The body resource for this request.
        pub url_map_resource: std::option::Option<crate::model::UrlMap>,
    }

    impl PatchRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::url_maps::PatchRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::url_maps::PatchRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::url_maps::PatchRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [url_map][crate::model::url_maps::PatchRequest::url_map].
        ///
        /// This is a **required** field for requests.
        pub fn set_url_map<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.url_map = v.into();
            self
        }

        /// Sets the value of [url_map_resource][crate::model::url_maps::PatchRequest::url_map_resource].
        pub fn set_url_map_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UrlMap>,
        {
            self.url_map_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [url_map_resource][crate::model::url_maps::PatchRequest::url_map_resource].
        pub fn set_or_clear_url_map_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UrlMap>,
        {
            self.url_map_resource = v.map(|x| x.into());
            self
        }
    }

    /// The request message for [UrlMaps::update][crate::client::UrlMaps::update].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct UpdateRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// An optional request ID to identify requests. Specify a unique
        /// request ID so that if you must retry your request, the server will
        /// know to ignore the request if it has already been completed. The
        /// request ID must be a valid UUID with the exception that zero UUID is
        /// not supported (`00000000-0000-0000-0000-000000000000`).
        pub request_id: std::option::Option<std::string::String>,

        /// Name of the url map resource for this request.
        pub url_map: std::string::String,

        /// The body resource for this request.
        pub url_map_resource: std::option::Option<crate::model::UrlMap>,
    }

    impl UpdateRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::url_maps::UpdateRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::url_maps::UpdateRequest::request_id].
        pub fn set_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::url_maps::UpdateRequest::request_id].
        pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [url_map][crate::model::url_maps::UpdateRequest::url_map].
        ///
        /// This is a **required** field for requests.
        pub fn set_url_map<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.url_map = v.into();
            self
        }

        /// Sets the value of [url_map_resource][crate::model::url_maps::UpdateRequest::url_map_resource].
        pub fn set_url_map_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UrlMap>,
        {
            self.url_map_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [url_map_resource][crate::model::url_maps::UpdateRequest::url_map_resource].
        pub fn set_or_clear_url_map_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UrlMap>,
        {
            self.url_map_resource = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [Warning].
pub mod warning {
    #[allow(unused_imports)]
    use super::*;

    /// A key/value pair with additional information about a warning.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Data {
        /// A key that provides more detail on the warning being returned.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub key: std::option::Option<std::string::String>,

        /// A warning data value corresponding to the key.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub value: std::option::Option<std::string::String>,
    }

    impl Data {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [key][crate::model::warning::Data::key].
        pub fn set_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [key][crate::model::warning::Data::key].
        pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [value][crate::model::warning::Data::value].
        pub fn set_value<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::warning::Data::value].
        pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.value = v.map(|x| x.into());
            self
        }
    }
}

/// Defines additional types related to [Zone].
pub mod zone {
    #[allow(unused_imports)]
    use super::*;

    /// Well-known values for [Zone::status][crate::model::Zone::status].
    ///
    /// The service may return values not listed here; they are preserved as-is.
    pub mod status {
        pub const DOWN: &str = "DOWN";
        pub const UP: &str = "UP";
    }
}

/// The request messages for [ZoneOperations][crate::client::ZoneOperations].
#[cfg(feature = "zone-operations")]
pub mod zone_operations {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [ZoneOperations::delete][crate::client::ZoneOperations::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl DeleteRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::zone_operations::DeleteRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::zone_operations::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::DeleteRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [ZoneOperations::get][crate::client::ZoneOperations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::zone_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::zone_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [ZoneOperations::list][crate::client::ZoneOperations::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::zone_operations::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::zone_operations::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::zone_operations::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::zone_operations::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::zone_operations::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::zone_operations::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::zone_operations::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::zone_operations::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::zone_operations::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::zone_operations::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::zone_operations::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::ListRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [ZoneOperations::wait][crate::client::ZoneOperations::wait].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct WaitRequest {
        /// Name of the operation resource for this request.
        pub operation: std::string::String,

        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl WaitRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [operation][crate::model::zone_operations::WaitRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }

        /// Sets the value of [project][crate::model::zone_operations::WaitRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::WaitRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }
}

/// The request messages for [Zones][crate::client::Zones].
#[cfg(feature = "zones")]
pub mod zones {
    #[allow(unused_imports)]
    use super::*;

    /// The request message for [Zones::get][crate::client::Zones::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: std::string::String,

        /// The name of the zone for this request.
        pub zone: std::string::String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project][crate::model::zones::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zones::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.zone = v.into();
            self
        }
    }

    /// The request message for [Zones::list][crate::client::Zones::list].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct ListRequest {
        /// A filter expression that filters resources listed in the response.
        /// Most Compute resources support two types of filter expressions:
        /// expressions that support regular expressions and expressions that
        /// follow API improvement proposal AIP-160.
        pub filter: std::option::Option<std::string::String>,

        /// The maximum number of results per page that should be returned. If
        /// the number of available results is larger than `maxResults`, Compute
        /// Engine returns a `nextPageToken` that can be used to get the next
        /// page of results in subsequent list requests. Acceptable values are
        /// `0` to `500`, inclusive. (Default: `500`)
        pub max_results: std::option::Option<u32>,

        /// Sorts list results by a certain order. By default, results are
        /// returned in alphanumerical order based on the resource name.
        pub order_by: std::option::Option<std::string::String>,

        /// Specifies a page token to use. Set `pageToken` to the
        /// `nextPageToken` returned by a previous list request to get the next
        /// page of results.
        pub page_token: std::option::Option<std::string::String>,

        /// Project ID for this request.
        pub project: std::string::String,

        /// Opt-in for partial success behavior which provides partial results
        /// in case of failure. The default value is false.
        pub return_partial_success: std::option::Option<bool>,
    }

    impl ListRequest {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [filter][crate::model::zones::ListRequest::filter].
        pub fn set_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::zones::ListRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [max_results][crate::model::zones::ListRequest::max_results].
        pub fn set_max_results<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [max_results][crate::model::zones::ListRequest::max_results].
        pub fn set_or_clear_max_results<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.max_results = v.map(|x| x.into());
            self
        }

        /// Sets the value of [order_by][crate::model::zones::ListRequest::order_by].
        pub fn set_order_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [order_by][crate::model::zones::ListRequest::order_by].
        pub fn set_or_clear_order_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.order_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::zones::ListRequest::page_token].
        pub fn set_page_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page_token][crate::model::zones::ListRequest::page_token].
        pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [project][crate::model::zones::ListRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [return_partial_success][crate::model::zones::ListRequest::return_partial_success].
        pub fn set_return_partial_success<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [return_partial_success][crate::model::zones::ListRequest::return_partial_success].
        pub fn set_or_clear_return_partial_success<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.return_partial_success = v.map(|x| x.into());
            self
        }
    }
}
