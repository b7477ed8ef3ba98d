//! Configuration schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Development branch configuration.
    #[serde(default)]
    pub branch: BranchConfig,

    /// Repository layout.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Minimum repository-prefix version per branch line (e.g. `"2.9"`).
    #[serde(default)]
    pub version_rules: HashMap<String, VersionRule>,
}

impl Config {
    /// Returns the version rule of the given branch line, if any.
    #[must_use]
    pub fn rule_for(&self, branch_line: &str) -> Option<&VersionRule> {
        self.version_rules.get(branch_line)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBranchPrefix`] on an empty branch prefix and
    /// [`ConfigError::InvalidRule`] for a rule without a minimum version.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.branch.prefix.is_empty() {
            return Err(ConfigError::EmptyBranchPrefix);
        }

        for (line, rule) in &self.version_rules {
            if rule.min.trim().is_empty() {
                return Err(ConfigError::InvalidRule {
                    line: line.clone(),
                    reason: "min is empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Development branch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Prefix every development branch carries before its branch line.
    #[serde(default = "default_branch_prefix")]
    pub prefix: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            prefix: default_branch_prefix(),
        }
    }
}

fn default_branch_prefix() -> String {
    "dev-v".to_string()
}

/// Repository layout, relative to the repository root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one sub-directory per package.
    #[serde(default = "default_packages_dir")]
    pub packages: String,

    /// Helm repository index listing every published chart version.
    #[serde(default = "default_index_file")]
    pub index: String,

    /// Release descriptor the computed chart versions go to.
    #[serde(default = "default_release_file")]
    pub release: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            packages: default_packages_dir(),
            index: default_index_file(),
            release: default_release_file(),
        }
    }
}

fn default_packages_dir() -> String {
    "packages".to_string()
}

fn default_index_file() -> String {
    "index.yaml".to_string()
}

fn default_release_file() -> String {
    "release.yaml".to_string()
}

/// Version bounds of one branch line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRule {
    /// Minimum repository-prefix version (e.g. `"104.0.0"`).
    pub min: String,

    /// Exclusive upper bound, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.branch.prefix, "dev-v");
        assert_eq!(config.paths.packages, "packages");
        assert_eq!(config.paths.index, "index.yaml");
        assert_eq!(config.paths.release, "release.yaml");
        assert!(config.version_rules.is_empty());
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.branch.prefix, "dev-v");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            [branch]
            prefix = "release-v"

            [paths]
            packages = "pkgs"
            index = "assets/index.yaml"
            release = "releases.yaml"

            [version_rules."2.9"]
            min = "104.0.0"
            max = "105.0.0"

            [version_rules."2.10"]
            min = "105.0.0"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.branch.prefix, "release-v");
        assert_eq!(config.paths.packages, "pkgs");
        assert_eq!(config.paths.index, "assets/index.yaml");
        assert_eq!(config.paths.release, "releases.yaml");
        assert_eq!(config.version_rules.len(), 2);

        let rule = config.rule_for("2.9").unwrap();
        assert_eq!(rule.min, "104.0.0");
        assert_eq!(rule.max.as_deref(), Some("105.0.0"));
        assert!(config.rule_for("2.10").unwrap().max.is_none());
        assert!(config.rule_for("2.8").is_none());
    }

    #[test]
    fn test_rule_requires_min() {
        let toml = r#"
            [version_rules."2.9"]
            max = "105.0.0"
        "#;

        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_validate_empty_min() {
        let toml = r#"
            [version_rules."2.9"]
            min = " "
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        match config.validate() {
            Err(ConfigError::InvalidRule { line, reason }) => {
                assert_eq!(line, "2.9");
                assert_eq!(reason, "min is empty");
            }
            other => panic!("Expected InvalidRule error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_prefix() {
        let mut config = Config::default();
        config.branch.prefix = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBranchPrefix)));
    }

    #[test]
    fn test_serialize_config() {
        let mut config = Config::default();
        config.version_rules.insert(
            "2.9".to_string(),
            VersionRule {
                min: "104.0.0".to_string(),
                max: None,
            },
        );
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[branch]"));
        assert!(toml_str.contains("prefix = \"dev-v\""));
        assert!(toml_str.contains("min = \"104.0.0\""));
        assert!(!toml_str.contains("max"));
    }
}
