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

//! Defines traits and helpers to serialize query parameters.
//!
//! The Compute API query parameters are strings, integers, and booleans. Most
//! of them are optional, and an absent parameter must be omitted from the
//! query string, not sent as an empty value.
//!
//! The generated request records hold optional query parameters as `Option<T>`
//! and required query parameters as plain values. The code generator can be
//! simplified if all the query parameters can be treated uniformly, without
//! any conditionally generated code to handle different types.
//!
//! The types are not intended for application developers to use.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.into_iter().fold(builder, |builder, v| v.add(builder, name))
    }
}

macro_rules! scalar_query_parameter {
    ($($t:ty),*) => {
        $(
            impl QueryParameter for $t {
                fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
                    builder.query(&[(name, self.to_string())])
                }
            }
        )*
    };
}

scalar_query_parameter!(String, &str, bool, i32, u32, i64, u64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn test_builder() -> Result<reqwest::RequestBuilder, reqwest::Error> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://compute.googleapis.com/compute/v1/unused"))
    }

    #[test]
    fn absent_values_are_omitted() -> TestResult {
        let builder = test_builder()?;
        let builder = None::<String>.add(builder, "filter");
        let builder = None::<u32>.add(builder, "maxResults");
        let builder = None::<bool>.add(builder, "returnPartialSuccess");
        let request = builder.build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        assert_eq!(request.url().query(), None);
        Ok(())
    }

    #[test]
    fn present_values() -> TestResult {
        let builder = test_builder()?;
        let builder = Some("name = \"vm-1\"".to_string()).add(builder, "filter");
        let builder = Some(50_u32).add(builder, "maxResults");
        let builder = Some(false).add(builder, "returnPartialSuccess");
        let builder = Some(-7_i64).add(builder, "start");
        let builder = Some(12345678901234_u64).add(builder, "serviceProjectNumber");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "filter=name+%3D+%22vm-1%22",
                "maxResults=50",
                "returnPartialSuccess=false",
                "start=-7",
                "serviceProjectNumber=12345678901234",
            ]
        );
        Ok(())
    }

    #[test]
    fn required_values() -> TestResult {
        let builder = test_builder()?;
        let builder = "persistent-disk-0".add(builder, "deviceName");
        let builder = 2_i32.add(builder, "port");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec!["deviceName=persistent-disk-0", "port=2"]
        );
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let builder = test_builder()?;
        let builder = vec!["a".to_string(), "b".to_string()].add(builder, "name");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["name=a", "name=b"]);
        Ok(())
    }
}
