use crate::ca::client::CaClient;
use crate::enroller::csr::Csr;
use crate::enroller::service::EnrollerService;
use crate::utils::context::CallContext;
use crate::utils::errors::Result;
use async_trait::async_trait;

/// Decorator that routes certificate retrieval through the upstream CA.
///
/// Every other operation delegates to the wrapped service unchanged. The
/// upstream path is trust-pinned and auth-forwarding; see [`CaClient`].
#[derive(Debug)]
pub struct ProxyService<S> {
    next: S,
    upstream: CaClient,
}

impl<S: EnrollerService> ProxyService<S> {
    /// Wrap `next`, routing `get_crt` through the given upstream target.
    ///
    /// Fails when the target URL or CA bundle is invalid; the proxy never
    /// comes up without a verified trust pool.
    pub fn new(next: S, target: &str, ca_pem: &[u8]) -> Result<Self> {
        let upstream = CaClient::new(target, ca_pem)?;
        Ok(Self { next, upstream })
    }

    /// Wrap `next` around an already-constructed upstream client.
    pub fn with_client(next: S, upstream: CaClient) -> Self {
        Self { next, upstream }
    }
}

#[async_trait]
impl<S: EnrollerService> EnrollerService for ProxyService<S> {
    async fn health(&self, ctx: &CallContext) -> bool {
        self.next.health(ctx).await
    }

    async fn get_csrs(&self, ctx: &CallContext) -> Vec<Csr> {
        self.next.get_csrs(ctx).await
    }

    async fn get_csr_status(&self, ctx: &CallContext, id: i64) -> Result<Csr> {
        self.next.get_csr_status(ctx, id).await
    }

    async fn get_crt(&self, ctx: &CallContext, id: i64) -> Result<Vec<u8>> {
        tracing::debug!("Fetching certificate for CSR {id} from upstream CA");
        self.upstream.fetch_crt(ctx).await
    }
}
