//! Error types for fixture generation

/// Errors produced while generating certificate fixtures.
///
/// There is no retry or partial-success path: any of these aborts the run
/// and the caller must treat the output directory as "fixtures not ready".
#[derive(Debug, thiserror::Error)]
pub enum CertError {
    /// Filesystem failure: unreadable CA files, directory delete/create
    /// failure, or a failed fixture write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CA certificate content is not a well-formed PEM certificate.
    #[error("Certificate parsing failed: {0}")]
    CertificateParsing(String),
    /// CA private key content is not a well-formed PEM key.
    #[error("Key parsing failed: {0}")]
    KeyParsing(String),
    /// The system random source or key generation backend failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
    /// Certificate construction or signing failed, e.g. an incompatible
    /// CA key algorithm.
    #[error("Certificate generation failed: {0}")]
    CertificateGeneration(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CertError>;
