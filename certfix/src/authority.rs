//! Externally supplied certificate authority credentials

use std::fs;
use std::path::Path;

use log::{info, warn};
use rcgen::{Issuer, KeyPair};

use crate::error::{CertError, Result};

/// CA certificate and private key loaded from caller-provided PEM files.
///
/// The credentials are used only as a signer for the valid client fixture;
/// they are never mutated or regenerated here.
#[derive(Debug)]
pub struct CertificateAuthority {
    issuer: Issuer<'static, KeyPair>,
    subject: String,
}

impl CertificateAuthority {
    /// Load CA credentials from a certificate PEM file and a key PEM file.
    ///
    /// Content that is not a well-formed PEM certificate or key is a
    /// [`CertError::CertificateParsing`] / [`CertError::KeyParsing`] error.
    /// A CA outside its own validity window still loads; the fixtures are
    /// deliberately abnormal, so only a warning is logged.
    pub fn load(cert_path: &Path, key_path: &Path) -> Result<Self> {
        let cert_pem = fs::read_to_string(cert_path)?;
        let key_pem = fs::read_to_string(key_path)?;

        let block = pem::parse(&cert_pem).map_err(|e| {
            CertError::CertificateParsing(format!(
                "{} is not valid PEM: {e}",
                cert_path.display()
            ))
        })?;
        if block.tag() != "CERTIFICATE" {
            return Err(CertError::CertificateParsing(format!(
                "{}: expected a CERTIFICATE block, found {}",
                cert_path.display(),
                block.tag()
            )));
        }

        let (subject, currently_valid) = inspect_ca_certificate(block.contents())?;
        if !currently_valid {
            warn!("CA certificate {subject} is outside its own validity window");
        }

        let key_pair = KeyPair::from_pem(&key_pem).map_err(|e| {
            CertError::KeyParsing(format!(
                "failed to parse CA private key {}: {e}",
                key_path.display()
            ))
        })?;
        let issuer = Issuer::from_ca_cert_pem(&cert_pem, key_pair).map_err(|e| {
            CertError::CertificateParsing(format!(
                "failed to parse CA certificate {}: {e}",
                cert_path.display()
            ))
        })?;

        info!("loaded CA credentials for {subject}");
        Ok(Self { issuer, subject })
    }

    /// The signer handle used to issue CA-signed certificates.
    pub fn issuer(&self) -> &Issuer<'static, KeyPair> {
        &self.issuer
    }

    /// The CA certificate's subject, as a distinguished name string.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

// Parse the DER certificate to capture the CA subject and whether the CA is
// inside its own validity window.
fn inspect_ca_certificate(der: &[u8]) -> Result<(String, bool)> {
    let (_, cert) = x509_parser::parse_x509_certificate(der).map_err(|e| {
        CertError::CertificateParsing(format!("failed to parse CA certificate DER: {e}"))
    })?;

    Ok((cert.subject().to_string(), cert.validity().is_valid()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("certfix_authority_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("scratch dir should be creatable");
        dir
    }

    fn write_test_ca(dir: &Path) -> (PathBuf, PathBuf) {
        use rcgen::{BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa,
            KeyUsagePurpose};

        let mut params =
            CertificateParams::new(Vec::default()).expect("CA params should be creatable");
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.key_usages = vec![
            KeyUsagePurpose::KeyCertSign,
            KeyUsagePurpose::CrlSign,
            KeyUsagePurpose::DigitalSignature,
        ];
        let mut dn = DistinguishedName::new();
        dn.push(DnType::CommonName, "certfix_test_ca");
        params.distinguished_name = dn;

        let key = KeyPair::generate().expect("CA key generation should succeed");
        let cert = params
            .self_signed(&key)
            .expect("CA self-signing should succeed");

        let cert_path = dir.join("ca.pem");
        let key_path = dir.join("ca_key.pem");
        fs::write(&cert_path, cert.pem()).expect("writing CA cert should succeed");
        fs::write(&key_path, key.serialize_pem()).expect("writing CA key should succeed");
        (cert_path, key_path)
    }

    #[test]
    fn load_accepts_a_generated_ca() {
        let dir = scratch_dir("ok");
        let (cert_path, key_path) = write_test_ca(&dir);

        let ca = CertificateAuthority::load(&cert_path, &key_path)
            .expect("loading a well-formed CA should succeed");
        assert!(
            ca.subject().contains("certfix_test_ca"),
            "CA subject should carry the common name, got {}",
            ca.subject()
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_garbage_certificate() {
        let dir = scratch_dir("garbage");
        let (_, key_path) = write_test_ca(&dir);
        let bogus = dir.join("bogus.pem");
        fs::write(&bogus, "this is not a certificate").expect("writing bogus file should succeed");

        let err = CertificateAuthority::load(&bogus, &key_path)
            .expect_err("garbage certificate content must be rejected");
        assert!(
            matches!(err, CertError::CertificateParsing(_)),
            "expected a certificate parsing error, got {err:?}"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_missing_files() {
        let dir = scratch_dir("missing");

        let err = CertificateAuthority::load(&dir.join("absent.pem"), &dir.join("absent_key.pem"))
            .expect_err("missing CA files must be rejected");
        assert!(
            matches!(err, CertError::Io(_)),
            "expected an IO error, got {err:?}"
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
