use solcov_config::{ConfigError, CoverageConfig};
use solcov_test_utils::fixtures;

use crate::helpers::project_with_file;

#[test]
fn discovers_conventional_file_names() -> anyhow::Result<()> {
    for file_name in solcov_defaults::CONFIG_FILE_NAMES {
        let contents = if file_name.ends_with(".json") {
            fixtures::MINIMAL_JSON
        } else {
            fixtures::MINIMAL_TOML
        };
        let project = project_with_file(file_name, contents)?;

        assert_eq!(
            CoverageConfig::discover(project.path()),
            Some(project.path().join(file_name))
        );
        assert_eq!(
            CoverageConfig::load_from_project(project.path())?,
            fixtures::MINIMAL_TOML.parse::<CoverageConfig>()?
        );
    }

    Ok(())
}

#[test]
fn prefers_hidden_toml_file() -> anyhow::Result<()> {
    let project = project_with_file("solcover.json", fixtures::MINIMAL_JSON)?;
    std::fs::write(
        project.path().join(".solcover.toml"),
        fixtures::CROSS_CHAIN_CALL_TOML,
    )?;

    let config = CoverageConfig::load_from_project(project.path())?;
    assert_eq!(config, fixtures::CROSS_CHAIN_CALL_TOML.parse::<CoverageConfig>()?);

    Ok(())
}

#[test]
fn falls_back_to_defaults_without_config_file() -> anyhow::Result<()> {
    let project = tempfile::tempdir()?;

    assert_eq!(CoverageConfig::discover(project.path()), None);
    assert_eq!(
        CoverageConfig::load_from_project(project.path())?,
        CoverageConfig::default()
    );
    Ok(())
}

#[test]
fn invalid_config_file_fails_project_load() -> anyhow::Result<()> {
    let project = project_with_file(".solcover.toml", r#"excludedPaths = ["/abs.sol"]"#)?;

    let result = CoverageConfig::load_from_project(project.path());
    assert!(matches!(result, Err(ConfigError::MalformedPath { .. })));
    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let error = CoverageConfig::load("does/not/exist/.solcover.toml").expect_err("no such file");

    assert!(matches!(error, ConfigError::Io { .. }));
    assert!(error.to_string().contains("does/not/exist/.solcover.toml"));
}

#[test]
fn javascript_config_is_unsupported() -> anyhow::Result<()> {
    let project = project_with_file(".solcover.js", "module.exports = {};")?;

    let result = CoverageConfig::load(project.path().join(".solcover.js"));
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    assert_eq!(CoverageConfig::discover(project.path()), None);
    Ok(())
}
