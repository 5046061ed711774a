use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, MalformedPathReason};

/// A source file that is excluded from instrumentation.
///
/// Disabled entries stay part of the configuration, so they can be toggled
/// back on, but they are not passed to the instrumentation tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcludedPath {
    path: String,
    reason: Option<String>,
    enabled: bool,
}

impl ExcludedPath {
    /// The path relative to the source root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Why the file is (or was) excluded.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn from_config(config: ExcludedPathConfig) -> Result<Self, ConfigError> {
        let (path, reason, enabled) = match config {
            ExcludedPathConfig::Path(path) => (path, None, true),
            ExcludedPathConfig::Annotated(AnnotatedExcludedPath {
                path,
                reason,
                enabled,
            }) => (path, reason, enabled),
        };

        validate_relative_path(&path)
            .map_err(|reason| ConfigError::MalformedPath {
                path: path.clone(),
                reason,
            })?;

        Ok(Self {
            path,
            reason,
            enabled,
        })
    }

    pub(crate) fn to_config(&self) -> ExcludedPathConfig {
        if self.enabled && self.reason.is_none() {
            ExcludedPathConfig::Path(self.path.clone())
        } else {
            ExcludedPathConfig::Annotated(AnnotatedExcludedPath {
                path: self.path.clone(),
                reason: self.reason.clone(),
                enabled: self.enabled,
            })
        }
    }
}

/// File representation of an excluded path: either a bare path or a table
/// with an optional reason and toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExcludedPathConfig {
    Path(String),
    Annotated(AnnotatedExcludedPath),
}

impl ExcludedPathConfig {
    /// The path relative to the source root, regardless of the entry's form.
    pub fn path(&self) -> &str {
        match self {
            Self::Path(path) | Self::Annotated(AnnotatedExcludedPath { path, .. }) => path,
        }
    }
}

/// Table form of an excluded path.
///
/// Unknown keys are rejected, so a misspelled `enabled` can't silently turn a
/// disabled entry into an active one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotatedExcludedPath {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Parses all exclusions, rejecting malformed and duplicate paths.
pub(crate) fn parse_excluded_paths(
    configs: Vec<ExcludedPathConfig>,
) -> Result<Vec<ExcludedPath>, ConfigError> {
    let mut seen = HashSet::with_capacity(configs.len());

    configs
        .into_iter()
        .map(|config| {
            let excluded = ExcludedPath::from_config(config)?;
            if !seen.insert(normalize(&excluded.path).to_owned()) {
                return Err(ConfigError::DuplicateExcludedPath {
                    path: excluded.path,
                });
            }

            Ok(excluded)
        })
        .collect()
}

fn normalize(path: &str) -> &str {
    let mut path = path;
    while let Some(stripped) = path.strip_prefix("./") {
        path = stripped;
    }
    path
}

/// Excluded paths are resolved against the source root by the instrumentation
/// tool, so they need to stay inside it regardless of the host's path
/// conventions.
fn validate_relative_path(path: &str) -> Result<(), MalformedPathReason> {
    if path.trim().is_empty() {
        return Err(MalformedPathReason::Empty);
    }

    let has_drive_prefix =
        matches!(path.as_bytes(), [drive, b':', ..] if drive.is_ascii_alphabetic());
    if path.starts_with(['/', '\\']) || has_drive_prefix || Path::new(path).is_absolute() {
        return Err(MalformedPathReason::Absolute);
    }

    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(MalformedPathReason::ParentTraversal);
    }

    Ok(())
}
