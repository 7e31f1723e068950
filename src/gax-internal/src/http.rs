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

//! The HTTP transport shared by all the Compute Engine clients.

use crate::options::{ClientConfig, effective_credentials, effective_endpoint};
use crate::query_parameter::QueryParameter;
use auth::credentials::Credentials;
use bytes::Bytes;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::HeaderMap;
use reqwest::header::{CONTENT_LENGTH, HeaderValue, USER_AGENT};
use reqwest::{Method, RequestBuilder, StatusCode};

/// Sends requests to the Compute Engine API.
///
/// Each call to [execute][ReqwestClient::execute] makes exactly one attempt.
/// Callers examine [Error::failure_class] to decide if a new attempt may
/// succeed.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

/// The request body type for methods without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let cred = effective_credentials(&config)?;
        let endpoint = effective_endpoint(&config, default_endpoint);
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
        })
    }

    /// Starts a request for `path`, relative to the client endpoint.
    pub fn builder(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}{path}", self.endpoint);
        self.inner.request(method, url)
    }

    /// Sends the request and decodes the response.
    ///
    /// `body` is sent as JSON when present. Otherwise the request has no
    /// `content-type` header, and `POST`, `PUT`, and `PATCH` requests send an
    /// empty body with `content-length: 0`. The service rejects those
    /// methods with `411 Length Required` when the header is missing.
    pub async fn execute<I, O>(
        &self,
        builder: RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let builder = apply_options(builder, &options)?;
        let has_body = body.is_some();
        let builder = match body {
            Some(b) => builder.json(&b),
            None => builder,
        };
        let headers = self.cred.headers().await.map_err(Error::authentication)?;
        let mut request = builder.headers(headers).build().map_err(Error::ser)?;
        if !has_body && needs_content_length(request.method()) {
            *request.body_mut() = Some(reqwest::Body::from(Vec::<u8>::new()));
            request
                .headers_mut()
                .insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.inner.execute(request).await.map_err(send_error)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %response.url(), "request failed");
            return Err(to_http_error(response).await);
        }
        decode(response).await
    }
}

fn apply_options(builder: RequestBuilder, options: &RequestOptions) -> Result<RequestBuilder> {
    let builder = match options.user_agent() {
        None => builder,
        Some(ua) => builder.header(USER_AGENT, HeaderValue::from_str(ua).map_err(Error::ser)?),
    };
    let builder = match options.attempt_timeout() {
        None => builder,
        Some(t) => builder.timeout(*t),
    };
    let builder = options.quota_user().clone().add(builder, "quotaUser");
    Ok(options.fields().clone().add(builder, "fields"))
}

fn needs_content_length(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(e)
    } else {
        Error::io(e)
    }
}

async fn split(response: reqwest::Response) -> Result<(StatusCode, HeaderMap, Bytes)> {
    let response = http::Response::from(response);
    let status = response.status();
    let (parts, body) = response.into_parts();
    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    Ok((status, parts.headers, body))
}

/// Converts an unsuccessful response into an error.
///
/// Responses carrying a JSON error object become service errors, anything
/// else is returned as an HTTP error with the raw payload.
pub async fn to_http_error(response: reqwest::Response) -> Error {
    let (status, headers, body) = match split(response).await {
        Ok(s) => s,
        Err(e) => return e,
    };
    let code = status.as_u16();
    match Status::try_from(&body) {
        Ok(s) => Error::service_with_http_metadata(s, Some(code), Some(headers)),
        Err(_) => Error::http(code, headers, body),
    }
}

async fn decode<O>(response: reqwest::Response) -> Result<Response<O>>
where
    O: serde::de::DeserializeOwned + Default,
{
    let (status, headers, body) = split(response).await?;
    let body = if status == StatusCode::NO_CONTENT && body.is_empty() {
        O::default()
    } else {
        serde_json::from_slice(&body).map_err(Error::deser)?
    };
    Ok(Response::from_parts(Parts::new().set_headers(headers), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::FailureClass;
    use gax::error::rpc::Code;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Zone {
        name: Option<String>,
    }

    fn response(status: u16, body: &str) -> http::Result<reqwest::Response> {
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())?;
        Ok(response.into())
    }

    #[tokio::test]
    async fn error_without_status() -> TestResult {
        let err = to_http_error(response(400, r#"{"error": "bad request"}"#)?).await;
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(
            err.http_headers().and_then(|h| h.get("content-type")),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(
            err.http_payload(),
            Some(&Bytes::from_static(br#"{"error": "bad request"}"#))
        );
        assert_eq!(err.failure_class(), FailureClass::ClientNonRetryable);
        Ok(())
    }

    #[tokio::test]
    async fn error_with_status() -> TestResult {
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The resource 'projects/p/zones/z/instances/vm-1' was not found",
            "errors": [{
                "domain": "global",
                "reason": "notFound",
                "message": "The resource 'projects/p/zones/z/instances/vm-1' was not found",
            }]
        }});
        let err = to_http_error(response(404, &body.to_string())?).await;
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::NotFound, "{err:?}");
        assert!(status.message.contains("vm-1"), "{status:?}");
        assert_eq!(status.errors.len(), 1, "{status:?}");
        assert_eq!(status.errors[0].reason, "notFound");
        assert_eq!(err.http_status_code(), Some(404));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(401, FailureClass::AuthorizationRequired)]
    #[test_case(403, FailureClass::ClientNonRetryable)]
    #[test_case(429, FailureClass::ServerRetryable)]
    #[test_case(503, FailureClass::ServerRetryable)]
    async fn error_class(code: u16, want: FailureClass) -> TestResult {
        let err = to_http_error(response(code, "<html>oops</html>")?).await;
        assert_eq!(err.failure_class(), want, "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(200, r#"{"name": "us-central1-a"}"#, Some("us-central1-a"); "200")]
    #[test_case(200, "{}", None; "200 empty object")]
    #[test_case(204, "", None; "204 empty")]
    #[test_case(204, "{}", None; "204 empty object")]
    async fn decode_success(code: u16, body: &str, want: Option<&str>) -> TestResult {
        let got = decode::<Zone>(response(code, body)?).await?;
        assert_eq!(got.body().name.as_deref(), want);
        assert!(got.headers().contains_key("content-type"), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(""; "empty")]
    #[test_case("not-json"; "not json")]
    async fn decode_error(body: &str) -> TestResult {
        let err = decode::<Zone>(response(200, body)?).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test_case(Method::POST, true)]
    #[test_case(Method::PUT, true)]
    #[test_case(Method::PATCH, true)]
    #[test_case(Method::GET, false)]
    #[test_case(Method::DELETE, false)]
    fn content_length_methods(method: Method, want: bool) {
        assert_eq!(needs_content_length(&method), want, "{method}");
    }

    #[test]
    fn invalid_user_agent() -> TestResult {
        let client = reqwest::Client::new();
        let mut options = RequestOptions::default();
        options.set_user_agent("bad\nagent");
        let err = apply_options(client.get("http://localhost/p"), &options).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        Ok(())
    }
}
