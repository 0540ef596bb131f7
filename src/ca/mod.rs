pub mod client;
pub mod target;
pub mod trust;

use crate::utils::errors::{EnrollerError, Result};
use reqwest::{Certificate, Client};
use std::time::Duration;

/// Build the outbound HTTP client whose TLS verification is restricted to
/// the given trust pool.
///
/// Built-in roots are disabled, so only certificates from the pool can vouch
/// for the upstream CA. A builder failure is a fatal configuration error.
pub(crate) fn create_pinned_client(roots: Vec<Certificate>) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(30))
        .use_rustls_tls()
        .tls_built_in_root_certs(false);

    for cert in roots {
        builder = builder.add_root_certificate(cert);
    }

    builder
        .build()
        .map_err(|e| EnrollerError::Config(format!("Failed to build HTTP client: {e}")))
}
