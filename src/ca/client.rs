use crate::ca::target::ProxyTarget;
use crate::ca::trust;
use crate::utils::context::CallContext;
use crate::utils::errors::{EnrollerError, Result};
use reqwest::{Client, Response};
use serde_json::Value;

/// HTTP client for upstream certificate retrieval.
///
/// TLS verification is pinned to the configured CA pool and the inbound
/// caller's bearer token is forwarded on every request. Construction fails
/// fast on a bad target or trust bundle, so no client ever exists without a
/// verified pool behind it.
#[derive(Debug)]
pub struct CaClient {
    client: Client,
    target: ProxyTarget,
}

impl CaClient {
    pub fn new(target: &str, ca_pem: &[u8]) -> Result<Self> {
        let target = ProxyTarget::resolve(target)?;
        let pool = trust::load_trust_pool(ca_pem)?;
        let client = super::create_pinned_client(pool)?;

        tracing::debug!("Upstream CA client targeting {target}");
        Ok(Self { client, target })
    }

    /// Endpoint this client was resolved against.
    pub fn target(&self) -> &ProxyTarget {
        &self.target
    }

    /// Fetch certificate bytes from the upstream CA.
    ///
    /// Issues a single GET against the fixed target, copying the caller's
    /// token into the `Authorization` header when present. The upstream
    /// resolves the certificate from the forwarded credentials; no identifier
    /// travels in the request path. Cancelling the inbound call aborts the
    /// request and releases the connection.
    pub async fn fetch_crt(&self, ctx: &CallContext) -> Result<Vec<u8>> {
        let mut request = self.client.get(self.target.url().clone());
        match ctx.auth_token() {
            Some(token) => {
                request = request.header(reqwest::header::AUTHORIZATION, token);
            }
            None => {
                tracing::debug!("No auth token on inbound call, upstream request is anonymous");
            }
        }

        let fetch = async {
            let response = request.send().await?;
            decode_crt_response(response).await
        };

        tokio::select! {
            _ = ctx.cancellation().cancelled() => {
                tracing::debug!("Inbound call canceled, aborting upstream request");
                Err(EnrollerError::Canceled)
            }
            result = fetch => result,
        }
    }
}

/// Decode the upstream response into certificate bytes or an error.
///
/// Success bodies are returned verbatim; the payload is opaque here and gets
/// no parsing or content-type check. Anything else becomes an upstream error
/// carrying the status and response body.
async fn decode_crt_response(response: Response) -> Result<Vec<u8>> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        tracing::debug!("Upstream CA returned {} certificate bytes", body.len());
        return Ok(body.to_vec());
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(EnrollerError::Upstream {
        status,
        message: extract_error_message(&body),
    })
}

/// Pull a human-readable message out of an upstream error body.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return message.to_string();
        }
    }

    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}
