//! Generic HTTP caller for partner eligibility APIs.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::field::Empty;
use tracing::{debug, info, instrument, Span};

use crate::client_specific::error::{CallError, ClientSpecificError, ClientSpecificErrorKind, VerifyError};
use crate::client_specific::ClientSpecificRequest;

const NO_MATCH_MESSAGE: &str = "No match found for user.";
const UPSTREAM_MESSAGE: &str = "Got an upstream server error.";
const DECODE_MESSAGE: &str = "Got non-JSON response from server.";
const INVALID_ENCODING_MESSAGE: &str = "Received non-JSON content type with invalid encoding from server";

/// The partner-specific half of a client-specific check.
#[async_trait]
pub trait ClientSpecificProtocol: Send + Sync {
    type Payload: Serialize + Send + Sync;
    type Response: DeserializeOwned + Serialize + Send;

    fn payload(&self, request: &ClientSpecificRequest) -> Self::Payload;

    /// Headers for one call; may acquire an auth token.
    async fn headers(&self) -> Result<HeaderMap, CallError>;

    fn is_eligible(&self, response: &Self::Response) -> bool;
}

/// Type-erased verification, for callers that do not care which partner
/// answered.
#[async_trait]
pub trait ClientVerifier: Send + Sync {
    /// The eligible partner response as a JSON object, or `None` when the
    /// partner did not confirm the member.
    async fn verify_member(&self, request: &ClientSpecificRequest) -> Result<Option<Map<String, Value>>, VerifyError>;
}

/// Response metadata recorded on failed calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContext {
    pub url: String,
    pub status: u16,
    pub reason: String,
    pub ok: bool,
    pub method: String,
    pub content_type: String,
    pub charset: Option<String>,
}

impl ResponseContext {
    pub fn from_response(response: &Response, method: &Method) -> Self {
        let status = response.status();
        let (content_type, charset) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(split_content_type)
            .unwrap_or_else(|| ("application/octet-stream".to_string(), None));

        Self {
            url: response.url().to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            ok: status.is_success(),
            method: method.to_string(),
            content_type,
            charset,
        }
    }

    pub fn is_json(&self) -> bool {
        self.content_type == "application/json"
    }

    pub fn to_context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("response.url".to_string(), self.url.clone()),
            ("response.status".to_string(), self.status.to_string()),
            ("response.reason".to_string(), self.reason.clone()),
            ("response.ok".to_string(), self.ok.to_string()),
            ("response.method".to_string(), self.method.clone()),
            ("response.content_type".to_string(), self.content_type.clone()),
            (
                "response.charset".to_string(),
                self.charset.clone().unwrap_or_else(|| "None".to_string()),
            ),
        ])
    }
}

/// `text/html; charset=ISO-8859-1` -> (`text/html`, `Some("iso-8859-1")`)
fn split_content_type(header: &str) -> (String, Option<String>) {
    let mut parts = header.split(';');
    let mime = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
    let charset = parts.find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
    });
    (mime, charset)
}

/// Runs a [`ClientSpecificProtocol`] against its partner endpoint.
pub struct ClientSpecificCaller<P> {
    protocol: P,
    client: Client,
    url: Url,
    verify_timeout: Duration,
}

impl<P: ClientSpecificProtocol> ClientSpecificCaller<P> {
    /// `call_timeout` bounds one HTTP exchange; `verify_timeout` bounds a
    /// whole verification including token acquisition.
    pub fn new(protocol: P, url: &str, call_timeout: Duration, verify_timeout: Duration) -> anyhow::Result<Self> {
        let url = Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid client specific url {url}: {e}"))?;
        let client = Client::builder()
            .timeout(call_timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            protocol,
            client,
            url,
            verify_timeout,
        })
    }

    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// POST the request to the partner and validate the response.
    #[instrument(
        name = "client_specific_call",
        skip_all,
        fields(service = self.url.host_str().unwrap_or_default(), resource = self.url.path())
    )]
    pub async fn call(&self, request: &ClientSpecificRequest) -> Result<P::Response, CallError> {
        let payload = self.protocol.payload(request);
        let headers = self.protocol.headers().await?;

        let response = self
            .client
            .post(self.url.clone())
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let context = ResponseContext::from_response(&response, &Method::POST);
        if !context.ok {
            let message = if (300..=499).contains(&context.status) {
                NO_MATCH_MESSAGE
            } else {
                UPSTREAM_MESSAGE
            };
            return Err(ClientSpecificError::upstream(message).with_response(&context).into());
        }

        let bytes = response.bytes().await?;
        let body = extract_body(&bytes, &context)?;
        debug!(status = context.status, "Partner response decoded");

        serde_json::from_value(body).map_err(|e| {
            ClientSpecificError::new(ClientSpecificErrorKind::ResponseValidation, e.to_string())
                .with_response(&context)
                .into()
        })
    }

    /// Run [`call`](Self::call) under the verification timeout and apply the
    /// eligibility predicate.
    ///
    /// A [`ClientSpecificError`] is a definitive "no": its context is
    /// recorded on the span and `None` is returned. Anything else is an
    /// error.
    #[instrument(
        skip_all,
        fields(
            request.is_employee = request.is_employee,
            error.kind = Empty,
            error.message = Empty,
            response.status = Empty,
            response.url = Empty,
        )
    )]
    pub async fn verify(&self, request: &ClientSpecificRequest) -> Result<Option<P::Response>, VerifyError> {
        let outcome = match tokio::time::timeout(self.verify_timeout, self.call(request)).await {
            Ok(outcome) => outcome,
            Err(_) => return Err(VerifyError::Timeout(self.verify_timeout)),
        };

        match outcome {
            Ok(response) if self.protocol.is_eligible(&response) => Ok(Some(response)),
            Ok(_) => {
                info!("Partner reported member as ineligible");
                Ok(None)
            },
            Err(CallError::ClientSpecific(err)) => {
                let span = Span::current();
                span.record("error.kind", err.error_type());
                span.record("error.message", err.message.as_str());
                if let Some(status) = err.context.get("response.status") {
                    span.record("response.status", status.as_str());
                }
                if let Some(url) = err.context.get("response.url") {
                    span.record("response.url", url.as_str());
                }
                info!(context = ?err.context, "Client specific call did not verify member");
                Ok(None)
            },
            Err(CallError::Transport(err)) => Err(VerifyError::Transport(err)),
            Err(CallError::Task(message)) => Err(VerifyError::Task(message)),
        }
    }
}

/// Decode a 2xx body as JSON. A non-JSON content type is tolerated when the
/// body still decodes as text and parses as JSON.
fn extract_body(bytes: &[u8], context: &ResponseContext) -> Result<Value, ClientSpecificError> {
    let decode_error = || ClientSpecificError::new(ClientSpecificErrorKind::ResponseDecode, DECODE_MESSAGE).with_response(context);

    if context.is_json() {
        return serde_json::from_slice(bytes).map_err(|_| decode_error());
    }

    let encoding = context
        .charset
        .as_deref()
        .and_then(|label| encoding_rs::Encoding::for_label(label.as_bytes()))
        .unwrap_or(encoding_rs::UTF_8);
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| {
            ClientSpecificError::new(ClientSpecificErrorKind::InvalidResponseType, INVALID_ENCODING_MESSAGE)
                .with_response(context)
        })?;

    serde_json::from_str(&text).map_err(|_| decode_error())
}

#[async_trait]
impl<P> ClientVerifier for ClientSpecificCaller<P>
where
    P: ClientSpecificProtocol + 'static,
{
    async fn verify_member(&self, request: &ClientSpecificRequest) -> Result<Option<Map<String, Value>>, VerifyError> {
        let Some(response) = self.verify(request).await? else {
            return Ok(None);
        };
        match serde_json::to_value(response)? {
            Value::Object(map) => Ok(Some(map)),
            other => Ok(Some(Map::from_iter([("response".to_string(), other)]))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn context(content_type: &str, charset: Option<&str>) -> ResponseContext {
        ResponseContext {
            url: "http://partner.test/check".into(),
            status: 200,
            reason: "OK".into(),
            ok: true,
            method: "POST".into(),
            content_type: content_type.into(),
            charset: charset.map(str::to_string),
        }
    }

    #[test]
    fn test_split_content_type() {
        assert_eq!(
            split_content_type("Application/JSON; charset=\"UTF-8\""),
            ("application/json".to_string(), Some("utf-8".to_string()))
        );
        assert_eq!(split_content_type("text/plain"), ("text/plain".to_string(), None));
    }

    #[test]
    fn test_extract_json_body() {
        let body = extract_body(br#"{"a": 1}"#, &context("application/json", None)).unwrap();
        assert_eq!(body["a"], 1);

        let err = extract_body(b"<html>", &context("application/json", None)).unwrap_err();
        assert_eq!(err.kind, ClientSpecificErrorKind::ResponseDecode);
        assert_eq!(err.message, "Got non-JSON response from server.");
        assert_eq!(err.context["response.content_type"], "application/json");
    }

    #[test]
    fn test_extract_body_falls_back_to_text() {
        let body = extract_body(br#"{"a": "b"}"#, &context("text/plain", Some("utf-8"))).unwrap();
        assert_eq!(body["a"], "b");

        let err = extract_body(b"not json", &context("text/plain", None)).unwrap_err();
        assert_eq!(err.kind, ClientSpecificErrorKind::ResponseDecode);
    }

    #[test]
    fn test_extract_body_rejects_undecodable_text() {
        let err = extract_body(&[0x7b, 0xff, 0xfe, 0x7d], &context("text/plain", Some("utf-8"))).unwrap_err();
        assert_eq!(err.kind, ClientSpecificErrorKind::InvalidResponseType);
        assert_eq!(err.context["error.type"], "InvalidResponseType");
    }

    #[test]
    fn test_response_context_keys() {
        let keys: Vec<String> = context("text/plain", None).to_context().into_keys().collect();
        assert_eq!(
            keys,
            vec![
                "response.charset",
                "response.content_type",
                "response.method",
                "response.ok",
                "response.reason",
                "response.status",
                "response.url",
            ]
        );
    }
}
