//! Default values shared by the coverage configuration crates.

use alloy_primitives::{U256, uint};

/// Conventional configuration file names, in lookup order, relative to the
/// project root.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".solcover.toml",
    ".solcover.json",
    "solcover.toml",
    "solcover.json",
];

/// Directory that coverage artifacts are written to when none is configured.
pub const OUTPUT_FOLDER: &str = "coverage";

/// Report formats emitted when none are configured.
pub const REPORT_FORMATS: [&str; 4] = ["html", "lcov", "text", "json"];

/// Per-test timeout of the external test runner, in milliseconds.
pub const TEST_TIMEOUT_MILLIS: u64 = 2_000;

/// Balance of the default development accounts: 10,000 ether in wei.
pub const ACCOUNT_BALANCE: U256 = uint!(10_000_000_000_000_000_000_000_U256);

/// Balance of the funded accounts used by long-running bridge test suites:
/// 10,000,000 ether in wei (`0x84595161401484a000000`).
pub const LARGE_ACCOUNT_BALANCE: U256 = uint!(0x84595161401484a000000_U256);

/// Secret keys of the well-known development accounts.
///
/// These keys are public and must never hold real funds.
pub const SECRET_KEYS: [&str; 3] = [
    // 0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    // 0x70997970c51812dc3a010c7d01b50e0d17dc79c8
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    // 0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
];
