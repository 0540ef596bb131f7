use crate::manufacturing::service::{CrtRequest, ManufacturingService};
use crate::utils::context::CallContext;
use crate::utils::errors::Result;
use serde::{Deserialize, Serialize};

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
}

/// Trust configuration pushed by a device-manufacturing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetConfigRequest {
    #[serde(rename = "crt")]
    pub auth_crt: String,
    pub ca: String,
}

/// Issued certificate, carried base64-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCrtResponse {
    #[serde(with = "base64_bytes")]
    pub crt: Vec<u8>,
}

/// Adapts external request/response shapes onto a manufacturing service.
///
/// A pure adaptation boundary: no business logic, no payload rewriting, so
/// transport concerns stay independently testable from request shapes.
pub struct Endpoints<S> {
    service: S,
}

impl<S: ManufacturingService> Endpoints<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn health(&self, ctx: &CallContext) -> HealthResponse {
        HealthResponse {
            healthy: self.service.health(ctx).await,
        }
    }

    pub async fn post_set_config(
        &self,
        ctx: &CallContext,
        request: SetConfigRequest,
    ) -> Result<()> {
        self.service
            .post_set_config(ctx, &request.auth_crt, &request.ca)
            .await
    }

    pub async fn post_get_crt(
        &self,
        ctx: &CallContext,
        request: CrtRequest,
    ) -> Result<GetCrtResponse> {
        let crt = self.service.post_get_crt(ctx, &request).await?;
        Ok(GetCrtResponse { crt })
    }
}

mod base64_bytes {
    use base64::prelude::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64_STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64_STANDARD
            .decode(encoded)
            .map_err(serde::de::Error::custom)
    }
}
