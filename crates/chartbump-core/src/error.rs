//! Core error types.

use chartbump_config::ConfigError;
use chartbump_package::{EligibilityError, PackageError};
use semver::Version;
use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The package is not configured for an automatic bump.
    #[error("package is not eligible for auto bump: {0}")]
    Eligibility(#[from] EligibilityError),

    /// Published or upstream versions do not allow a bump.
    #[error("version error: {0}")]
    VersionState(#[from] VersionStateError),

    /// Malformed semantic version.
    #[error("invalid version {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: semver::Error,
    },

    /// Bump target could not be resolved.
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Package data could not be read.
    #[error("package error: {0}")]
    Package(#[from] PackageError),
}

impl CoreError {
    pub(crate) fn parse(input: &str, source: semver::Error) -> Self {
        Self::Parse {
            input: input.to_string(),
            source,
        }
    }
}

/// Version data that rules out computing the next version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionStateError {
    /// The latest published version is empty or missing.
    #[error("latest published chart version is empty")]
    EmptyVersion,

    /// The upstream chart does not declare a version.
    #[error("upstream chart version is empty")]
    MissingUpstreamVersion,

    /// The upstream version carries a repository prefix.
    #[error("upstream chart version {0:?} must not carry a repository prefix")]
    UnexpectedPrefix(String),

    /// The upstream version is older than the latest published one.
    #[error("upstream version {to_release} is lower than the latest published version {latest}")]
    Regression { latest: Version, to_release: Version },

    /// No version rule exists for the branch line.
    #[error("no version rule for branch line {0:?}")]
    MissingVersionRule(String),

    /// The repository prefix component to bump is already at its maximum.
    #[error("repository prefix {0} cannot be bumped any further")]
    PrefixOverflow(Version),
}

/// Errors resolving which chart to bump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The target branch is not a development branch.
    #[error("a development branch must be provided; (e.g., {prefix}2.9), got {branch:?}")]
    NotDevBranch { branch: String, prefix: String },

    /// The target package is not `<chart>` or `<dir>/.../<chart>`.
    #[error("unexpected format for target package {0:?}")]
    BadPackage(String),

    /// No package matches the target.
    #[error("no package provided")]
    NoPackage,

    /// Several packages match the target.
    #[error("multiple packages provided ({0}); this is not supported")]
    MultiplePackages(usize),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_display() {
        let err = CoreError::from(EligibilityError::FalseAuto);
        insta::assert_snapshot!(
            err.to_string(),
            @"package is not eligible for auto bump: package.yaml must be configured for auto-chart-bump"
        );
    }

    #[test]
    fn test_regression_display() {
        let err = VersionStateError::Regression {
            latest: Version::new(1, 2, 3),
            to_release: Version::new(1, 2, 2),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"upstream version 1.2.2 is lower than the latest published version 1.2.3"
        );
    }

    #[test]
    fn test_prefix_overflow_display() {
        let err = VersionStateError::PrefixOverflow(Version::new(104, 2, u64::MAX));
        insta::assert_snapshot!(
            err.to_string(),
            @"repository prefix 104.2.18446744073709551615 cannot be bumped any further"
        );
    }

    #[test]
    fn test_parse_error_names_input() {
        let source = Version::parse("1.2").unwrap_err();
        let err = CoreError::parse("1.2", source);
        assert!(err.to_string().starts_with("invalid version \"1.2\""));
    }

    #[test]
    fn test_not_dev_branch_display() {
        let err = SetupError::NotDevBranch {
            branch: "main".to_string(),
            prefix: "dev-v".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "a development branch must be provided; (e.g., dev-v2.9), got \"main\""
        );
    }

    #[test]
    fn test_categories_match() {
        let errors = [
            CoreError::from(EligibilityError::DoNotRelease),
            CoreError::from(VersionStateError::EmptyVersion),
            CoreError::from(SetupError::NoPackage),
        ];

        assert!(matches!(errors[0], CoreError::Eligibility(_)));
        assert!(matches!(errors[1], CoreError::VersionState(_)));
        assert!(matches!(errors[2], CoreError::Setup(_)));
    }
}
