//! CLI command definitions

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Result;
use crate::scenarios;

/// Output directory, created relative to the invoking process's working
/// directory.
pub const CERTS_DIR: &str = "certs";

/// Generate TLS client certificate fixtures for test suites.
///
/// Emits six files into `certs/`: a CA-signed valid certificate, a
/// self-signed untrusted certificate and an already-expired certificate,
/// each with its private key. The directory is cleared on every run.
#[derive(Parser)]
#[command(name = "certfix")]
#[command(about = "Generate TLS client certificate fixtures for test suites")]
pub struct Cli {
    /// Path to the CA certificate that signs the valid client certificate
    pub ca_certificate: PathBuf,

    /// Path to the CA private key
    pub ca_private_key: PathBuf,
}

/// Parse arguments and run a full fixture generation pass.
///
/// An argument count other than two makes clap print usage and exit with
/// status 2 before any filesystem work happens.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    scenarios::generate_all(
        &cli.ca_certificate,
        &cli.ca_private_key,
        Path::new(CERTS_DIR),
    )
}
