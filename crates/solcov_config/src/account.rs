use std::{collections::HashMap, fmt, str::FromStr};

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
// Test account keys are parsed here and nowhere else.
use solcov_signer::DangerousSecretKeyStr;
use solcov_signer::{SecretKey, secret_key_to_address, secret_key_to_str};

use crate::ConfigError;

/// A funded account of the simulated ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestAccount {
    secret_key: SecretKey,
    address: Address,
    balance: U256,
}

impl TestAccount {
    /// Creates a new instance, deriving the account's address from the secret
    /// key.
    pub fn new(secret_key: SecretKey, balance: U256) -> Self {
        let address = secret_key_to_address(&secret_key);

        Self {
            secret_key,
            address,
            balance,
        }
    }

    /// The address controlled by the account's secret key.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The initial balance, in wei.
    pub fn balance(&self) -> U256 {
        self.balance
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Parses the account at position `index` of `testAccounts`.
    pub(crate) fn from_config(index: usize, config: &TestAccountConfig) -> Result<Self, ConfigError> {
        #[allow(deprecated)]
        let secret_key =
            solcov_signer::secret_key_from_str(DangerousSecretKeyStr(&config.secret_key.0))
                .map_err(|source| ConfigError::InvalidSecretKey { index, source })?;

        Ok(Self::new(secret_key, config.balance))
    }

    pub(crate) fn to_config(&self) -> TestAccountConfig {
        TestAccountConfig {
            secret_key: RawSecretKey(secret_key_to_str(&self.secret_key)),
            balance: self.balance,
        }
    }
}

/// Parses all accounts, rejecting accounts that share a secret key.
pub(crate) fn parse_test_accounts(
    configs: &[TestAccountConfig],
) -> Result<Vec<TestAccount>, ConfigError> {
    let mut seen: HashMap<Address, usize> = HashMap::with_capacity(configs.len());

    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let account = TestAccount::from_config(index, config)?;
            // Secret keys map one-to-one to addresses, so comparing addresses
            // avoids keeping key material around.
            if let Some(&first) = seen.get(&account.address) {
                return Err(ConfigError::DuplicateKey {
                    first,
                    duplicate: index,
                    address: account.address,
                });
            }
            seen.insert(account.address, index);

            Ok(account)
        })
        .collect()
}

/// File representation of a funded account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestAccountConfig {
    /// The 32-byte secret key as hex string, optionally `0x`-prefixed.
    pub secret_key: RawSecretKey,
    /// The initial balance, in wei.
    #[serde(with = "balance_serde")]
    pub balance: U256,
}

/// A secret key as written in a configuration file, before validation.
///
/// The [`fmt::Debug`] implementation redacts the key.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSecretKey(String);

impl RawSecretKey {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self(secret_key.into())
    }
}

impl fmt::Debug for RawSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawSecretKey(<redacted>)")
    }
}

/// Formats a balance the way the external tooling expects it.
pub(crate) fn balance_to_hex(balance: &U256) -> String {
    format!("0x{balance:x}")
}

/// Balances don't fit in TOML integers, so they are written as `0x`-prefixed
/// hex strings. Decimal strings and small integer literals are accepted as
/// well.
mod balance_serde {
    use super::{FromStr as _, U256, balance_to_hex, fmt};

    pub(super) fn serialize<S>(balance: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&balance_to_hex(balance))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(BalanceVisitor)
    }

    struct BalanceVisitor;

    impl serde::de::Visitor<'_> for BalanceVisitor {
        type Value = U256;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a non-negative integer or a hex or decimal string")
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(U256::from(value))
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
            u64::try_from(value)
                .map(U256::from)
                .map_err(|_err| E::custom(format!("balance must not be negative, got {value}")))
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let value = value.trim();
            if value.starts_with('-') {
                return Err(E::custom(format!(
                    "balance must not be negative, got {value}"
                )));
            }

            U256::from_str(value)
                .map_err(|error| E::custom(format!("invalid balance '{value}': {error}")))
        }
    }
}
