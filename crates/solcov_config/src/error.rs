use std::path::PathBuf;

use alloy_primitives::Address;
use solcov_signer::SignerError;

/// An error that occurred while loading or validating a coverage
/// configuration.
///
/// All errors are fatal: the configuration needs to be fixed before a coverage
/// run can start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file's extension doesn't map to a known format.
    #[error(
        "Unsupported configuration file '{}'. Expected a `.toml` or `.json` extension.",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf },
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to serialize TOML configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// An excluded path is unsafe or malformed.
    #[error("Invalid `excludedPaths` entry '{path}': {reason}")]
    MalformedPath {
        path: String,
        reason: MalformedPathReason,
    },
    #[error("Duplicate `excludedPaths` entry '{path}'")]
    DuplicateExcludedPath { path: String },
    /// A test account's secret key is malformed. The key itself is never part
    /// of the message.
    #[error("`testAccounts[{index}].secretKey` is invalid: {source}")]
    InvalidSecretKey {
        index: usize,
        #[source]
        source: SignerError,
    },
    /// Two test accounts share a secret key.
    #[error(
        "`testAccounts[{duplicate}]` uses the same secret key as `testAccounts[{first}]` (address {address})"
    )]
    DuplicateKey {
        first: usize,
        duplicate: usize,
        address: Address,
    },
    #[error("`testTimeoutMillis` must not be negative, got {0}")]
    InvalidTimeout(i64),
    #[error("`reportFormats` must contain at least one format")]
    EmptyReportFormats,
    #[error("Duplicate `reportFormats` entry '{0}'")]
    DuplicateReportFormat(String),
    #[error("`outputFolder` must not be empty")]
    EmptyOutputFolder,
}

/// Why an excluded path was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedPathReason {
    #[error("path is empty")]
    Empty,
    #[error("path must be relative to the source root")]
    Absolute,
    #[error("path must not contain `..` segments")]
    ParentTraversal,
}
