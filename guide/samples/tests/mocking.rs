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

//! Examples showing how to mock a client in tests.

#[cfg(test)]
mod tests {
    use cloud_compute_v1::client::Instances;
    use cloud_compute_v1::model::{Instance, instances::GetRequest};
    use gax::options::RequestOptions;
    use gax::response::Response;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    // ANCHOR: my_application_function
    // An example application function.
    //
    // It makes a request, setting the parameters for the VM. It processes the
    // response from the service, in this case extracting the machine type.
    async fn my_application_function(client: &Instances) -> gax::Result<Option<String>> {
        client
            .get()
            .set_project("my-project")
            .set_zone("us-central1-a")
            .set_instance("my-instance")
            .send()
            .await
            .map(|i| i.machine_type)
    }
    // ANCHOR_END: my_application_function

    // ANCHOR: mockall_macro
    mockall::mock! {
        #[derive(Debug)]
        Instances {}
        impl cloud_compute_v1::stub::Instances for Instances {
            async fn get(&self, req: GetRequest, _options: RequestOptions) -> gax::Result<Response<Instance>>;
        }
    }
    // ANCHOR_END: mockall_macro

    #[tokio::test]
    async fn basic_success() -> Result<()> {
        let mut mock = MockInstances::new();
        mock.expect_get()
            .withf(move |r, _| r.instance == "my-instance" && r.zone == "us-central1-a")
            .return_once(|_, _| {
                Ok(Response::from(
                    Instance::new().set_machine_type("zones/us-central1-a/machineTypes/e2-micro"),
                ))
            });

        let client = Instances::from_stub(mock);
        let machine_type = my_application_function(&client).await?;
        assert_eq!(
            machine_type.as_deref(),
            Some("zones/us-central1-a/machineTypes/e2-micro")
        );
        Ok(())
    }

    #[tokio::test]
    async fn basic_fail() -> Result<()> {
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
        let machine_type = my_application_function(&client).await;
        assert!(machine_type.is_err());
        Ok(())
    }
}
