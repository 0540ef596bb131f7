use crate::utils::errors::{EnrollerError, Result};
use reqwest::Certificate;
use std::fs;
use std::path::Path;

/// Parse a PEM bundle into the CA trust pool used to verify the upstream
/// CA's TLS certificate.
///
/// Fails with a configuration error when the bundle contains no certificates
/// or any block does not parse; a broken pool must never degrade into an
/// unpinned client.
pub fn load_trust_pool(pem_bundle: &[u8]) -> Result<Vec<Certificate>> {
    let text = std::str::from_utf8(pem_bundle)
        .map_err(|e| EnrollerError::Config(format!("CA bundle is not valid UTF-8: {e}")))?;

    let blocks = split_certificate_blocks(text);
    if blocks.is_empty() {
        return Err(EnrollerError::Config(
            "CA bundle contains no certificates".to_string(),
        ));
    }

    let mut pool = Vec::with_capacity(blocks.len());
    for block in blocks {
        let cert = Certificate::from_pem(block.as_bytes())
            .map_err(|e| EnrollerError::Config(format!("Invalid CA certificate: {e}")))?;
        pool.push(cert);
    }

    tracing::debug!("Loaded {} CA certificates into trust pool", pool.len());
    Ok(pool)
}

/// Load the trust pool from a PEM file on disk.
pub fn load_trust_pool_file(path: impl AsRef<Path>) -> Result<Vec<Certificate>> {
    let path = path.as_ref();
    let pem = fs::read(path)?;

    load_trust_pool(&pem).map_err(|e| match e {
        EnrollerError::Config(msg) => EnrollerError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Split concatenated PEM data into individual certificate blocks.
fn split_certificate_blocks(pem_data: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut in_cert = false;

    for line in pem_data.lines() {
        if line.starts_with("-----BEGIN CERTIFICATE-----") {
            in_cert = true;
            current.clear();
            current.push_str(line);
            current.push('\n');
        } else if line.starts_with("-----END CERTIFICATE-----") {
            current.push_str(line);
            current.push('\n');
            blocks.push(current.clone());
            current.clear();
            in_cert = false;
        } else if in_cert {
            current.push_str(line);
            current.push('\n');
        }
    }

    blocks
}
