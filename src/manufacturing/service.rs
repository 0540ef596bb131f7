use crate::utils::context::CallContext;
use crate::utils::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Key and X.509 subject parameters for a certificate issuance request.
///
/// Every field passes through verbatim; the issuing service owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrtRequest {
    #[serde(rename = "keyAlg")]
    pub key_alg: String,
    #[serde(rename = "keySize")]
    pub key_size: u32,
    pub c: String,
    pub st: String,
    pub l: String,
    pub o: String,
    pub ou: String,
    pub cn: String,
    pub email: String,
}

/// Manufacturing-side service contract.
#[async_trait]
pub trait ManufacturingService: Send + Sync {
    async fn health(&self, ctx: &CallContext) -> bool;

    /// Push trust configuration into the service: the device authentication
    /// certificate and the CA certificate it chains to.
    async fn post_set_config(&self, ctx: &CallContext, auth_crt: &str, ca: &str) -> Result<()>;

    /// Request a certificate issued for the given key and subject parameters.
    async fn post_get_crt(&self, ctx: &CallContext, request: &CrtRequest) -> Result<Vec<u8>>;
}
