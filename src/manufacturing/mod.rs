pub mod endpoints;
pub mod instrumenting;
pub mod service;

pub use endpoints::{Endpoints, GetCrtResponse, HealthResponse, SetConfigRequest};
pub use instrumenting::{InstrumentingService, MetricsRecorder};
pub use service::{CrtRequest, ManufacturingService};
