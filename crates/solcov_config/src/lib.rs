//! Configuration of a smart-contract coverage run.
//!
//! A [`CoverageConfig`] declares where coverage reports are written and in
//! which formats, which funded accounts the simulated ledger starts with,
//! which source files are excluded from instrumentation and how long a single
//! test may run. It is validated once when loaded and immutable afterwards.

mod account;
mod config;
mod error;
mod exclusion;
mod loader;
/// Options in the schema of the `solidity-coverage` instrumentation tool.
pub mod solcover;

pub use self::{
    account::{RawSecretKey, TestAccount, TestAccountConfig},
    config::{CoverageConfig, CoverageFileConfig},
    error::{ConfigError, MalformedPathReason},
    exclusion::{AnnotatedExcludedPath, ExcludedPath, ExcludedPathConfig},
    loader::ConfigFormat,
    solcover::SolcoverOptions,
};
