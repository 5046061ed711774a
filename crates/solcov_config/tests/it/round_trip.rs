use proptest::prelude::*;
use similar_asserts::assert_eq;
use solcov_config::{
    AnnotatedExcludedPath, ConfigFormat, CoverageConfig, CoverageFileConfig, ExcludedPathConfig,
};
use solcov_test_utils::fixtures;

use crate::helpers::fixture_path;

fn reload(config: &CoverageConfig, format: ConfigFormat) -> anyhow::Result<CoverageConfig> {
    let contents = config.to_string_with_format(format)?;
    Ok(CoverageConfig::from_str_with_format(&contents, format)?)
}

#[test]
fn toml_round_trip() -> anyhow::Result<()> {
    let config: CoverageConfig = fixtures::CROSS_CHAIN_CALL_TOML.parse()?;

    assert_eq!(reload(&config, ConfigFormat::Toml)?, config);
    Ok(())
}

#[test]
fn json_round_trip() -> anyhow::Result<()> {
    let config: CoverageConfig = fixtures::CROSS_CHAIN_CALL_TOML.parse()?;

    assert_eq!(reload(&config, ConfigFormat::Json)?, config);
    Ok(())
}

#[test]
fn toml_and_json_describe_the_same_config() -> anyhow::Result<()> {
    let from_toml: CoverageConfig = fixtures::MINIMAL_TOML.parse()?;
    let from_json = CoverageConfig::from_str_with_format(fixtures::MINIMAL_JSON, ConfigFormat::Json)?;
    assert_eq!(from_toml, from_json);

    let from_json_file = CoverageConfig::load(fixture_path("cross_chain_call.json"))?;
    let from_toml: CoverageConfig = fixtures::CROSS_CHAIN_CALL_TOML.parse()?;
    assert_eq!(from_json_file, from_toml);

    Ok(())
}

#[test]
fn loading_is_idempotent() -> anyhow::Result<()> {
    let path = fixture_path("cross_chain_call.json");

    assert_eq!(CoverageConfig::load(&path)?, CoverageConfig::load(&path)?);
    Ok(())
}

#[test]
fn serialized_exclusions_keep_reasons_and_toggles() -> anyhow::Result<()> {
    let config: CoverageConfig = fixtures::CROSS_CHAIN_CALL_TOML.parse()?;
    let file_config = config.to_file_config();

    assert_eq!(
        file_config.excluded_paths.first(),
        Some(&ExcludedPathConfig::Annotated(AnnotatedExcludedPath {
            path: "CallService.sol".to_string(),
            reason: Some("the service itself is what we want covered".to_string()),
            enabled: false,
        }))
    );
    assert_eq!(
        file_config.excluded_paths.get(2),
        Some(&ExcludedPathConfig::Path("interfaces/IBSH.sol".to_string()))
    );

    Ok(())
}

fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z][A-Za-z0-9_]{0,8}", 1..4)
        .prop_map(|segments| format!("{}.sol", segments.join("/")))
}

fn excluded_path() -> impl Strategy<Value = ExcludedPathConfig> {
    (
        relative_path(),
        prop::option::of("[a-z ]{1,20}"),
        any::<bool>(),
    )
        .prop_map(|(path, reason, enabled)| {
            if reason.is_none() && enabled {
                ExcludedPathConfig::Path(path)
            } else {
                ExcludedPathConfig::Annotated(AnnotatedExcludedPath {
                    path,
                    reason,
                    enabled,
                })
            }
        })
}

proptest! {
    #[test]
    fn file_config_round_trips(
        output_folder in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        test_timeout_millis in 0..i64::from(u32::MAX),
        default_balance_ether in prop::option::of(0..1_000_000_000u64),
        excluded_paths in prop::collection::vec(excluded_path(), 0..6),
        format in prop_oneof![Just(ConfigFormat::Toml), Just(ConfigFormat::Json)],
    ) {
        let mut unique_paths = std::collections::HashSet::new();
        let excluded_paths: Vec<_> = excluded_paths
            .into_iter()
            .filter(|excluded| unique_paths.insert(excluded.path().to_string()))
            .collect();

        let file_config = CoverageFileConfig {
            output_folder: output_folder.into(),
            test_timeout_millis,
            default_balance_ether,
            excluded_paths,
            ..CoverageFileConfig::default()
        };

        let config = CoverageConfig::try_from(file_config.clone()).expect("valid config");
        prop_assert_eq!(config.to_file_config(), file_config);

        let reloaded = reload(&config, format).expect("reloads");
        prop_assert_eq!(reloaded, config);
    }
}
