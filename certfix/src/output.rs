//! Output directory management and PEM emission

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;

/// A certificate and its private key, both PEM-encoded.
pub struct PemPair {
    /// PEM-encoded certificate.
    pub cert_pem: String,
    /// PEM-encoded private key of the certificate's subject.
    pub key_pem: String,
}

/// Delete the output directory if present, then create it fresh.
///
/// Destructive: any prior contents are removed unconditionally. Filesystem
/// errors propagate; there is no recovery path.
pub fn init_certs_dir(dir: &Path) -> Result<()> {
    info!("initializing certificate directory {}", dir.display());

    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write `{base_name}.pem` and `{base_name}_key.pem` into `dir`.
///
/// Existing files of the same name are overwritten. A failed write may
/// leave zero or one of the two files behind; no cleanup is attempted.
pub fn write_pem_pair(dir: &Path, base_name: &str, pair: &PemPair) -> Result<()> {
    let cert_path = dir.join(format!("{base_name}.pem"));
    let key_path = dir.join(format!("{base_name}_key.pem"));

    fs::write(&cert_path, &pair.cert_pem)?;
    fs::write(&key_path, &pair.key_pem)?;
    restrict_key_permissions(&key_path)?;

    Ok(())
}

// Private key files are owner-readable only.
#[cfg(unix)]
fn restrict_key_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_key_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
