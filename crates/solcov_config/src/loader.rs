use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{ConfigError, CoverageConfig, CoverageFileConfig};

/// Serialization format of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Determines the format from the file's extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(extension) if extension.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl CoverageFileConfig {
    pub fn from_str_with_format(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
        };
        Ok(config)
    }

    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let contents = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(contents)
    }
}

impl CoverageConfig {
    /// Loads and validates the configuration file at `path`.
    ///
    /// The format is determined by the file's extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_str_with_format(&contents, format)?;
        log::debug!("coverage config loaded from {}: {config:?}", path.display());

        Ok(config)
    }

    /// Parses and validates an in-memory configuration document.
    pub fn from_str_with_format(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let file_config = CoverageFileConfig::from_str_with_format(contents, format)?;
        let config = Self::try_from(file_config)?;

        let disabled = config.excluded_paths().len() - config.active_exclusions().count();
        if disabled > 0 {
            log::warn!("{disabled} excluded path(s) are disabled and will be instrumented");
        }

        Ok(config)
    }

    /// Serializes the configuration to its source representation.
    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        self.to_file_config().to_string_with_format(format)
    }

    /// Returns the path of the first conventionally named configuration file
    /// in `project_root`, if any.
    pub fn discover(project_root: impl AsRef<Path>) -> Option<PathBuf> {
        let project_root = project_root.as_ref();

        solcov_defaults::CONFIG_FILE_NAMES
            .iter()
            .map(|file_name| project_root.join(file_name))
            .find(|path| path.is_file())
    }

    /// Loads the configuration of the project at `project_root`, falling back
    /// to the defaults if the project has no configuration file.
    pub fn load_from_project(project_root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let project_root = project_root.as_ref();

        if let Some(path) = Self::discover(project_root) {
            Self::load(path)
        } else {
            log::debug!(
                "No coverage config found in {}, using defaults",
                project_root.display()
            );
            Ok(Self::default())
        }
    }
}

/// Parses a TOML document.
impl FromStr for CoverageConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_format(s, ConfigFormat::Toml)
    }
}
