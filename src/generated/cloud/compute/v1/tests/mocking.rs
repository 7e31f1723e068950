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

//! Verify the clients can be created from mocked stubs.

#[cfg(test)]
mod tests {
    use cloud_compute_v1::client::Instances;
    use cloud_compute_v1::model::{Instance, Operation, instances};
    use gax::options::RequestOptions;
    use gax::options::RequestOptionsBuilder;
    use gax::response::Response;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Instances {}
        impl cloud_compute_v1::stub::Instances for Instances {
            async fn get(&self, req: instances::GetRequest, options: RequestOptions) -> gax::Result<Response<Instance>>;
            async fn stop(&self, req: instances::StopRequest, options: RequestOptions) -> gax::Result<Response<Operation>>;
        }
    }

    #[tokio::test]
    async fn request_reaches_stub() -> Result<()> {
        let mut mock = MockInstances::new();
        mock.expect_get()
            .withf(|r, o| {
                r == &instances::GetRequest::new()
                    .set_project("my-project")
                    .set_zone("us-central1-a")
                    .set_instance("vm-1")
                    && o.attempt_timeout() == &Some(Duration::from_secs(5))
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    Instance::new().set_name("vm-1").set_status("RUNNING"),
                ))
            });

        let client = Instances::from_stub(mock);
        let got = client
            .get()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("vm-1")
            .with_attempt_timeout(Duration::from_secs(5))
            .send()
            .await?;
        assert_eq!(got, Instance::new().set_name("vm-1").set_status("RUNNING"));
        Ok(())
    }

    #[tokio::test]
    async fn with_request_replaces_fields() -> Result<()> {
        let mut mock = MockInstances::new();
        mock.expect_stop()
            .withf(|r, _| r.project == "other-project" && r.request_id.is_none())
            .return_once(|_, _| Ok(Response::from(Operation::new().set_name("operation-1"))));

        let client = Instances::from_stub(mock);
        let got = client
            .stop()
            .set_request_id("discarded")
            .with_request(
                instances::StopRequest::new()
                    .set_project("other-project")
                    .set_zone("us-central1-a")
                    .set_instance("vm-1"),
            )
            .send()
            .await?;
        assert_eq!(got.name.as_deref(), Some("operation-1"));
        Ok(())
    }

    #[tokio::test]
    async fn stub_error() -> Result<()> {
        let mut mock = MockInstances::new();
        mock.expect_get().return_once(|_, _| {
            use gax::error::Error;
            use gax::error::rpc::{Code, Status};
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("Resource not found");
            Err(Error::service(status))
        });

        let client = Instances::from_stub(mock);
        let err = client.get().send().await.unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        Ok(())
    }

    #[derive(Debug)]
    struct Empty;
    impl cloud_compute_v1::stub::Instances for Empty {}

    #[tokio::test]
    #[should_panic(expected = "mocked all methods")]
    async fn default_stub_panics() {
        let client = Instances::from_stub(Empty);
        let _ = client.list().send().await;
    }
}
