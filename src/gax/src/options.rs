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

//! Options for a single request.
//!
//! Every request builder implements [RequestOptionsBuilder]. Use it to set an
//! attempt timeout, to request a partial response with the `fields` system
//! parameter, or to attribute the request to an end user with `quotaUser`:
//!
//! ```
//! # use compute_gax::options::{RequestOptions, RequestOptionsBuilder};
//! # use compute_gax::options::internal::RequestBuilder;
//! # #[derive(Default)]
//! # struct ListInstances(RequestOptions);
//! # impl RequestBuilder for ListInstances {
//! #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
//! # }
//! let builder = ListInstances::default()
//!     .with_attempt_timeout(std::time::Duration::from_secs(30))
//!     .with_fields("items(name,status),nextPageToken")
//!     .with_quota_user("tenant-42");
//! ```

/// The options for a single request.
///
/// Mocks receive this type and may use it to verify the application set the
/// expected options. Other code sets the options via the request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    quota_user: Option<String>,
    fields: Option<String>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Sets the `quotaUser` system parameter.
    ///
    /// The service uses this value to enforce per-user quota limits when the
    /// same credentials are shared by many end users.
    pub fn set_quota_user<T: Into<String>>(&mut self, v: T) {
        self.quota_user = Some(v.into());
    }

    /// Gets the current `quotaUser` system parameter.
    pub fn quota_user(&self) -> &Option<String> {
        &self.quota_user
    }

    /// Sets the `fields` system parameter.
    ///
    /// The service returns only the selected fields in the response, for
    /// example `items(name,status),nextPageToken`.
    pub fn set_fields<T: Into<String>>(&mut self, v: T) {
        self.fields = Some(v.into());
    }

    /// Gets the current `fields` system parameter.
    pub fn fields(&self) -> &Option<String> {
        &self.fields
    }
}

/// Setters for the [RequestOptions] of a request builder.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for this request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the `quotaUser` system parameter.
    fn with_quota_user<V: Into<String>>(self, v: V) -> Self;

    /// Sets the `fields` system parameter, requesting a partial response.
    fn with_fields<V: Into<String>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Used by the request builders, not part of the public API.
    use super::RequestOptions;

    /// Request builders implement this trait to get the
    /// [RequestOptionsBuilder][super::RequestOptionsBuilder] setters.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_quota_user(v);
        self
    }

    fn with_fields<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_fields(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::RequestBuilder;
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct GetInstance(RequestOptions);
    impl RequestBuilder for GetInstance {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(
            RequestOptions::default(),
            RequestOptions {
                user_agent: None,
                attempt_timeout: None,
                quota_user: None,
                fields: None,
            }
        );
    }

    #[test]
    fn setters() {
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        options.set_attempt_timeout(Duration::from_secs(10));
        options.set_quota_user("tenant-42");
        options.set_fields("name,status");
        assert_eq!(options.user_agent().as_deref(), Some("my-app/1.0"));
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(10)));
        assert_eq!(options.quota_user().as_deref(), Some("tenant-42"));
        assert_eq!(options.fields().as_deref(), Some("name,status"));
    }

    #[test]
    fn builder() {
        let GetInstance(got) = GetInstance::default()
            .with_user_agent("my-app/1.0")
            .with_attempt_timeout(Duration::from_millis(250))
            .with_quota_user("tenant-42")
            .with_fields("items(name)");
        let mut want = RequestOptions::default();
        want.set_user_agent("my-app/1.0");
        want.set_attempt_timeout(Duration::from_millis(250));
        want.set_quota_user("tenant-42");
        want.set_fields("items(name)");
        assert_eq!(got, want);
    }
}
