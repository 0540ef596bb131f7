use serde::{Deserialize, Serialize};

/// A pending certificate signing request tracked by the enrollment service.
///
/// The status vocabulary belongs to the inner service; this layer only
/// carries it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Csr {
    pub id: i64,
    pub status: String,
}
