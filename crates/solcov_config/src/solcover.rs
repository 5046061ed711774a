use std::{fmt, path::PathBuf};

use serde::Serialize;
use solcov_signer::secret_key_to_str;

use crate::{ConfigError, CoverageConfig, account::balance_to_hex};

/// Options object consumed by the instrumentation tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcoverOptions {
    pub istanbul_folder: PathBuf,
    pub istanbul_reporter: Vec<String>,
    pub provider_options: ProviderOptions,
    pub skip_files: Vec<String>,
    pub mocha: MochaOptions,
}

/// Options of the simulated ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_balance_ether: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<ProviderAccount>,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccount {
    pub secret_key: String,
    /// `0x`-prefixed hex string, in wei.
    pub balance: String,
}

impl fmt::Debug for ProviderAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderAccount")
            .field("secret_key", &"<redacted>")
            .field("balance", &self.balance)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MochaOptions {
    pub timeout: u64,
}

impl SolcoverOptions {
    pub fn to_json_string_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl CoverageConfig {
    /// Converts the configuration into the instrumentation tool's options.
    ///
    /// Only active exclusions end up in `skipFiles`.
    pub fn to_solcover_options(&self) -> SolcoverOptions {
        SolcoverOptions {
            istanbul_folder: self.output_folder().to_path_buf(),
            istanbul_reporter: self.report_formats().to_vec(),
            provider_options: ProviderOptions {
                default_balance_ether: self.default_balance_ether(),
                accounts: self
                    .test_accounts()
                    .iter()
                    .map(|account| ProviderAccount {
                        secret_key: secret_key_to_str(account.secret_key()),
                        balance: balance_to_hex(&account.balance()),
                    })
                    .collect(),
            },
            skip_files: self
                .active_exclusions()
                .map(|excluded| excluded.path().to_string())
                .collect(),
            mocha: MochaOptions {
                timeout: self.test_timeout_millis(),
            },
        }
    }
}
