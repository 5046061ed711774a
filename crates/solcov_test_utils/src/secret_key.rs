use alloy_primitives::Address;
#[allow(deprecated)]
// This is test code, it's ok to use `DangerousSecretKeyStr`
use solcov_signer::DangerousSecretKeyStr;
pub use solcov_signer::{SecretKey, SignerError, secret_key_to_str};

/// Converts a hex string to a secret key.
pub fn secret_key_from_str(secret_key: &str) -> Result<SecretKey, SignerError> {
    // This is test code, it's ok to use `DangerousSecretKeyStr`
    #[allow(deprecated)]
    solcov_signer::secret_key_from_str(DangerousSecretKeyStr(secret_key))
}

/// Converts a secret key in a hex string format to an address.
///
/// Note that this function is in `solcov_test_utils` to restrict
/// opportunities for misuse. In production code there should be only one
/// place where secret keys are parsed from string to avoid potential leakage
/// into logs and error messages.
///
/// # Examples
///
/// ```
/// use solcov_test_utils::secret_key::secret_key_to_address;
///
/// let secret_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
///
/// let address = secret_key_to_address(secret_key).unwrap();
/// ```
pub fn secret_key_to_address(secret_key: &str) -> Result<Address, SignerError> {
    let secret_key = secret_key_from_str(secret_key)?;
    Ok(solcov_signer::secret_key_to_address(&secret_key))
}
