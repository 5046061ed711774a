use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    time::Duration,
};

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{
    ConfigError,
    account::{TestAccount, TestAccountConfig, parse_test_accounts},
    exclusion::{ExcludedPath, ExcludedPathConfig, parse_excluded_paths},
};

/// Parameters of a coverage run, validated and ready to be handed to the
/// instrumentation tool.
///
/// The configuration is immutable. Construct it once, either by loading a
/// file (see [`CoverageConfig::load`]) or from a [`CoverageFileConfig`]
/// literal, and pass it to whatever needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageConfig {
    output_folder: PathBuf,
    report_formats: Vec<String>,
    test_accounts: Vec<TestAccount>,
    excluded_paths: Vec<ExcludedPath>,
    test_timeout_millis: u64,
    default_balance_ether: Option<u64>,
}

impl CoverageConfig {
    /// Directory that coverage artifacts are written to.
    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// Report formats to emit, in the order they were configured.
    pub fn report_formats(&self) -> &[String] {
        &self.report_formats
    }

    /// Funded accounts of the simulated ledger, in configuration order.
    pub fn test_accounts(&self) -> &[TestAccount] {
        &self.test_accounts
    }

    /// All excluded paths, including disabled ones.
    pub fn excluded_paths(&self) -> &[ExcludedPath] {
        &self.excluded_paths
    }

    /// Excluded paths that are passed to the instrumentation tool.
    pub fn active_exclusions(&self) -> impl Iterator<Item = &ExcludedPath> {
        self.excluded_paths.iter().filter(|excluded| excluded.is_enabled())
    }

    pub fn test_timeout_millis(&self) -> u64 {
        self.test_timeout_millis
    }

    /// Maximum duration of a single test case before the test runner aborts
    /// it.
    pub fn test_timeout(&self) -> Duration {
        Duration::from_millis(self.test_timeout_millis)
    }

    /// Ether balance that the simulated ledger grants its own default
    /// accounts, if overridden.
    pub fn default_balance_ether(&self) -> Option<u64> {
        self.default_balance_ether
    }

    /// Initial balances of the test accounts, keyed by address, for seeding
    /// the simulated ledger.
    pub fn genesis_accounts(&self) -> HashMap<Address, U256> {
        self.test_accounts
            .iter()
            .map(|account| (account.address(), account.balance()))
            .collect()
    }

    /// Returns the active exclusions that don't exist below `source_root`.
    ///
    /// The instrumentation tool silently skips these, which usually indicates
    /// a stale configuration.
    pub fn missing_exclusions(&self, source_root: &Path) -> Vec<&ExcludedPath> {
        self.active_exclusions()
            .filter(|excluded| {
                let exists = source_root.join(excluded.path()).exists();
                if !exists {
                    log::warn!(
                        "Excluded path '{}' does not exist in '{}'",
                        excluded.path(),
                        source_root.display()
                    );
                }
                !exists
            })
            .collect()
    }

    /// Converts the configuration back to its file representation.
    pub fn to_file_config(&self) -> CoverageFileConfig {
        CoverageFileConfig {
            output_folder: self.output_folder.clone(),
            report_formats: self.report_formats.clone(),
            test_timeout_millis: i64::try_from(self.test_timeout_millis).unwrap_or(i64::MAX),
            default_balance_ether: self.default_balance_ether,
            test_accounts: self
                .test_accounts
                .iter()
                .map(TestAccount::to_config)
                .collect(),
            excluded_paths: self
                .excluded_paths
                .iter()
                .map(ExcludedPath::to_config)
                .collect(),
        }
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from(solcov_defaults::OUTPUT_FOLDER),
            report_formats: default_report_formats(),
            test_accounts: Vec::new(),
            excluded_paths: Vec::new(),
            test_timeout_millis: solcov_defaults::TEST_TIMEOUT_MILLIS,
            default_balance_ether: None,
        }
    }
}

impl TryFrom<CoverageFileConfig> for CoverageConfig {
    type Error = ConfigError;

    fn try_from(value: CoverageFileConfig) -> Result<Self, Self::Error> {
        if value.output_folder.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputFolder);
        }

        validate_report_formats(&value.report_formats)?;

        let test_timeout_millis = u64::try_from(value.test_timeout_millis)
            .map_err(|_err| ConfigError::InvalidTimeout(value.test_timeout_millis))?;
        if test_timeout_millis == 0 {
            log::warn!(
                "`testTimeoutMillis` is 0. Tests that include deliberate delays will time out."
            );
        }

        let test_accounts = parse_test_accounts(&value.test_accounts)?;
        let excluded_paths = parse_excluded_paths(value.excluded_paths)?;

        Ok(Self {
            output_folder: value.output_folder,
            report_formats: value.report_formats,
            test_accounts,
            excluded_paths,
            test_timeout_millis,
            default_balance_ether: value.default_balance_ether,
        })
    }
}

fn validate_report_formats(report_formats: &[String]) -> Result<(), ConfigError> {
    if report_formats.is_empty() {
        return Err(ConfigError::EmptyReportFormats);
    }

    let mut seen = HashSet::with_capacity(report_formats.len());
    for format in report_formats {
        if !seen.insert(format.as_str()) {
            return Err(ConfigError::DuplicateReportFormat(format.clone()));
        }
    }

    Ok(())
}

/// File representation of a [`CoverageConfig`], before validation.
///
/// Omitted fields fall back to the values in `solcov_defaults`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CoverageFileConfig {
    #[serde(default = "default_output_folder")]
    pub output_folder: PathBuf,
    #[serde(default = "default_report_formats")]
    pub report_formats: Vec<String>,
    /// Signed, so negative values are reported as an invalid timeout instead
    /// of a parse error.
    #[serde(default = "default_test_timeout_millis")]
    pub test_timeout_millis: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_balance_ether: Option<u64>,
    // Arrays of tables need to come after plain values in TOML.
    #[serde(default)]
    pub test_accounts: Vec<TestAccountConfig>,
    #[serde(default)]
    pub excluded_paths: Vec<ExcludedPathConfig>,
}

impl Default for CoverageFileConfig {
    fn default() -> Self {
        CoverageConfig::default().to_file_config()
    }
}

fn default_output_folder() -> PathBuf {
    PathBuf::from(solcov_defaults::OUTPUT_FOLDER)
}

fn default_report_formats() -> Vec<String> {
    solcov_defaults::REPORT_FORMATS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_test_timeout_millis() -> i64 {
    i64::try_from(solcov_defaults::TEST_TIMEOUT_MILLIS).unwrap_or(i64::MAX)
}
