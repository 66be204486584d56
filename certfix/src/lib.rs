//! TLS client certificate fixtures for integration test suites
//!
//! This crate generates a small fixed set of X.509 test certificates for
//! exercising TLS client-authentication paths:
//! - `client` — signed by a caller-supplied CA, valid for one year
//! - `invalid` — self-signed, chains to no trusted root
//! - `expired` — self-signed with a validity window entirely in the past
//!
//! Each fixture is persisted as a `{name}.pem` / `{name}_key.pem` pair in a
//! freshly re-initialized output directory. Generation is synchronous and
//! run-to-completion; the output directory is not safe for concurrent
//! invocations.

pub mod authority;
pub mod certificate;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod scenarios;

pub use authority::CertificateAuthority;
pub use certificate::{SubjectName, ValidityWindow, CLIENT_COMMON_NAME};
pub use error::{CertError, Result};
pub use output::PemPair;
pub use scenarios::{
    expired_client_cert, generate_all, untrusted_client_cert, valid_client_cert,
};
