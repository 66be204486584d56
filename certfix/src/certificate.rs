//! Certificate construction primitives

use rcgen::{
    Certificate, CertificateParams, DistinguishedName, DnType, ExtendedKeyUsagePurpose, KeyPair,
    KeyUsagePurpose,
};
use time::{Duration, OffsetDateTime};

use crate::authority::CertificateAuthority;
use crate::error::{CertError, Result};

/// Common name shared by every generated fixture certificate.
pub const CLIENT_COMMON_NAME: &str = "credhub_test_client";

/// Typed certificate subject.
///
/// Structured fields instead of a parsed DN string pattern, so a malformed
/// subject cannot surface as a runtime parse error.
pub struct SubjectName {
    common_name: String,
}

impl SubjectName {
    /// Create a subject with the given common name.
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
        }
    }

    /// The subject's common name.
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    fn to_distinguished_name(&self) -> DistinguishedName {
        let mut dn = DistinguishedName::new();
        dn.push(DnType::CommonName, &self.common_name);
        dn
    }
}

/// Not-before/not-after pair for a certificate.
///
/// Ordering is intentionally not validated: the expired fixture depends on
/// building a window that lies entirely in the past.
#[derive(Clone, Copy)]
pub struct ValidityWindow {
    /// Start of the window.
    pub not_before: OffsetDateTime,
    /// End of the window.
    pub not_after: OffsetDateTime,
}

impl ValidityWindow {
    /// A window opening now and closing `days` days from now.
    pub fn starting_now(days: i64) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            not_before: now,
            not_after: now + Duration::days(days),
        }
    }

    /// A window that closed just before now: (now − 2 days) → (now − 2 s).
    ///
    /// Expired at generation time and for every later check.
    pub fn expired() -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            not_before: now - Duration::days(2),
            not_after: now - Duration::seconds(2),
        }
    }
}

/// Generate a fresh key pair (ECDSA P-256, SHA-256) from the system CSPRNG.
pub fn generate_key_pair() -> Result<KeyPair> {
    KeyPair::generate()
        .map_err(|e| CertError::KeyGeneration(format!("failed to generate key pair: {e}")))
}

/// Build a signed certificate for `subject` over `key_pair`'s public key.
///
/// With `issuer` present the certificate is signed by the CA and carries the
/// CA's subject as issuer; otherwise it is self-signed (issuer equals
/// subject, signed with `key_pair` itself). All signatures use SHA-256.
/// The caller keeps `key_pair` for persistence; nothing is written here.
pub fn build_certificate(
    subject: &SubjectName,
    validity: ValidityWindow,
    key_pair: &KeyPair,
    issuer: Option<&CertificateAuthority>,
) -> Result<Certificate> {
    let mut params = CertificateParams::new(Vec::default()).map_err(|e| {
        CertError::CertificateGeneration(format!("failed to create certificate parameters: {e}"))
    })?;

    params.distinguished_name = subject.to_distinguished_name();
    params.not_before = validity.not_before;
    params.not_after = validity.not_after;

    // Client-authentication fixture profile.
    params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::KeyEncipherment,
    ];
    params.extended_key_usages = vec![ExtendedKeyUsagePurpose::ClientAuth];

    match issuer {
        Some(ca) => params.signed_by(key_pair, ca.issuer()).map_err(|e| {
            CertError::CertificateGeneration(format!("CA signing failed: {e}"))
        }),
        None => params.self_signed(key_pair).map_err(|e| {
            CertError::CertificateGeneration(format!("self-signing failed: {e}"))
        }),
    }
}
