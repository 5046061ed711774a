//! Configuration documents shared by tests.

/// Secret keys of the accounts funded by [`CROSS_CHAIN_CALL_TOML`].
pub const CROSS_CHAIN_CALL_SECRET_KEYS: [&str; 2] = [
    "0x8f2a55949038a9610f50fb23b5883af3b4ecb3c3bb792cbcefbd1542c692be63",
    "0xa6d23a0b704b649a92dd56bdff0f9874eeccc9746f10d78b683159af1617e08f",
];

/// Address controlled by the first of [`CROSS_CHAIN_CALL_SECRET_KEYS`].
pub const CROSS_CHAIN_CALL_DEPLOYER: &str = "0xfe3b557e8fb62b89f4916b721be55ceb828dbd73";

/// Coverage setup of a cross-chain call service suite: interfaces and test
/// helpers are excluded, the libraries are kept around as disabled entries.
pub const CROSS_CHAIN_CALL_TOML: &str = r#"
outputFolder = "build/hardhat/coverage"
reportFormats = ["html"]
testTimeoutMillis = 600000

[[testAccounts]]
secretKey = "0x8f2a55949038a9610f50fb23b5883af3b4ecb3c3bb792cbcefbd1542c692be63"
balance = "0x84595161401484a000000"

[[testAccounts]]
secretKey = "0xa6d23a0b704b649a92dd56bdff0f9874eeccc9746f10d78b683159af1617e08f"
balance = "0x84595161401484a000000"

[[excludedPaths]]
path = "CallService.sol"
reason = "the service itself is what we want covered"
enabled = false

[[excludedPaths]]
path = "interfaces/IBMC.sol"
reason = "interfaces carry no executable code"

[[excludedPaths]]
path = "interfaces/IBSH.sol"

[[excludedPaths]]
path = "interfaces/ICallService.sol"

[[excludedPaths]]
path = "interfaces/ICallServiceReceiver.sol"

[[excludedPaths]]
path = "interfaces/IFeeManage.sol"

[[excludedPaths]]
path = "libraries/BTPAddress.sol"
enabled = false

[[excludedPaths]]
path = "libraries/Integers.sol"
enabled = false

[[excludedPaths]]
path = "libraries/ParseAddress.sol"
enabled = false

[[excludedPaths]]
path = "libraries/RLPDecode.sol"
enabled = false

[[excludedPaths]]
path = "libraries/RLPDecodeStruct.sol"
enabled = false

[[excludedPaths]]
path = "libraries/RLPEncode.sol"
enabled = false

[[excludedPaths]]
path = "libraries/RLPEncodeStruct.sol"
enabled = false

[[excludedPaths]]
path = "libraries/Strings.sol"
enabled = false

[[excludedPaths]]
path = "libraries/Types.sol"
enabled = false

[[excludedPaths]]
path = "test/DAppProxySample.sol"
reason = "test helper"

[[excludedPaths]]
path = "test/LibRLPStruct.sol"
reason = "test helper"
"#;

/// The minimal document from the coverage loader's acceptance scenario.
pub const MINIMAL_TOML: &str = r#"
outputFolder = "build/coverage"
reportFormats = ["html"]
excludedPaths = ["interfaces/IFoo.sol"]
testTimeoutMillis = 20000

[[testAccounts]]
secretKey = "0x8f2a55949038a9610f50fb23b5883af3b4ecb3c3bb792cbcefbd1542c692be63"
balance = "0x84595161401484a000000"
"#;

/// [`MINIMAL_TOML`] expressed as JSON.
pub const MINIMAL_JSON: &str = r#"{
  "outputFolder": "build/coverage",
  "reportFormats": ["html"],
  "testAccounts": [
    {
      "secretKey": "0x8f2a55949038a9610f50fb23b5883af3b4ecb3c3bb792cbcefbd1542c692be63",
      "balance": "0x84595161401484a000000"
    }
  ],
  "excludedPaths": ["interfaces/IFoo.sol"],
  "testTimeoutMillis": 20000
}"#;
