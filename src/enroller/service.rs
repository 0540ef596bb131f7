use crate::enroller::csr::Csr;
use crate::utils::context::CallContext;
use crate::utils::errors::Result;
use async_trait::async_trait;

/// Enrollment service contract.
///
/// Decorators implement this same trait around an owned inner implementation,
/// so a stack (proxying, instrumentation, ...) is assembled at construction
/// time by plain wrapping.
#[async_trait]
pub trait EnrollerService: Send + Sync {
    /// Liveness of the service and its collaborators.
    async fn health(&self, ctx: &CallContext) -> bool;

    /// All CSRs known to the service.
    async fn get_csrs(&self, ctx: &CallContext) -> Vec<Csr>;

    /// Status of a single CSR.
    async fn get_csr_status(&self, ctx: &CallContext, id: i64) -> Result<Csr>;

    /// Signed certificate bytes for a CSR.
    async fn get_crt(&self, ctx: &CallContext, id: i64) -> Result<Vec<u8>>;
}
