pub mod ca;
pub mod enroller;
pub mod manufacturing;
pub mod utils;

// Re-export specific items to avoid conflicts
pub use ca::client::CaClient;
pub use ca::target::ProxyTarget;
pub use enroller::{Csr, EnrollerService, ProxyService};
pub use manufacturing::{
    CrtRequest, Endpoints, InstrumentingService, ManufacturingService, MetricsRecorder,
};
pub use utils::context::CallContext;
pub use utils::errors::{EnrollerError, Result};
