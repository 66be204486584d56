//! The three fixture scenarios and the run-to-completion driver

use std::path::Path;

use log::info;

use crate::authority::CertificateAuthority;
use crate::certificate::{self, SubjectName, ValidityWindow, CLIENT_COMMON_NAME};
use crate::error::Result;
use crate::output::{self, PemPair};

/// Base name of the CA-signed, currently valid fixture.
pub const VALID_BASE_NAME: &str = "client";
/// Base name of the self-signed fixture no relying party should trust.
pub const UNTRUSTED_BASE_NAME: &str = "invalid";
/// Base name of the already-expired self-signed fixture.
pub const EXPIRED_BASE_NAME: &str = "expired";

const VALID_FOR_DAYS: i64 = 365;

/// CA-signed certificate, valid from now for one year.
///
/// Loads the CA credentials from the given paths; the issuer is the CA
/// certificate's subject and the signature is the CA key's.
pub fn valid_client_cert(ca_cert_path: &Path, ca_key_path: &Path) -> Result<PemPair> {
    let ca = CertificateAuthority::load(ca_cert_path, ca_key_path)?;
    let key_pair = certificate::generate_key_pair()?;
    let cert = certificate::build_certificate(
        &SubjectName::new(CLIENT_COMMON_NAME),
        ValidityWindow::starting_now(VALID_FOR_DAYS),
        &key_pair,
        Some(&ca),
    )?;

    Ok(PemPair {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
    })
}

/// Self-signed certificate, valid from now for one year.
///
/// Chains to no trusted root; relying parties under test should reject it.
pub fn untrusted_client_cert() -> Result<PemPair> {
    let key_pair = certificate::generate_key_pair()?;
    let cert = certificate::build_certificate(
        &SubjectName::new(CLIENT_COMMON_NAME),
        ValidityWindow::starting_now(VALID_FOR_DAYS),
        &key_pair,
        None,
    )?;

    Ok(PemPair {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
    })
}

/// Self-signed certificate whose validity window closed just before now.
pub fn expired_client_cert() -> Result<PemPair> {
    let key_pair = certificate::generate_key_pair()?;
    let cert = certificate::build_certificate(
        &SubjectName::new(CLIENT_COMMON_NAME),
        ValidityWindow::expired(),
        &key_pair,
        None,
    )?;

    Ok(PemPair {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
    })
}

/// Run a full generation pass into `out_dir`.
///
/// Re-initializes the directory, then emits the three fixture pairs in
/// sequence. Stops at the first failure; a partial run leaves fewer than six
/// files behind.
pub fn generate_all(ca_cert_path: &Path, ca_key_path: &Path, out_dir: &Path) -> Result<()> {
    output::init_certs_dir(out_dir)?;

    let pair = valid_client_cert(ca_cert_path, ca_key_path)?;
    output::write_pem_pair(out_dir, VALID_BASE_NAME, &pair)?;
    info!("wrote {VALID_BASE_NAME} fixture (CA-signed, valid)");

    let pair = untrusted_client_cert()?;
    output::write_pem_pair(out_dir, UNTRUSTED_BASE_NAME, &pair)?;
    info!("wrote {UNTRUSTED_BASE_NAME} fixture (self-signed, untrusted)");

    let pair = expired_client_cert()?;
    output::write_pem_pair(out_dir, EXPIRED_BASE_NAME, &pair)?;
    info!("wrote {EXPIRED_BASE_NAME} fixture (self-signed, expired)");

    Ok(())
}
