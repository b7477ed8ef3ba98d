//! Package error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading package data from disk.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Expected file or directory is missing.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// Invalid YAML in a manifest, chart or index file.
    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for package operations.
pub type PackageResult<T> = Result<T, PackageError>;

/// A manifest field that rules out an automatic version bump.
///
/// None of these are retryable: the operator has to fix the `package.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EligibilityError {
    /// `auto` is not `true`.
    #[error("package.yaml must be configured for auto-chart-bump")]
    FalseAuto,

    /// The package name (its directory) is empty.
    #[error("package name not loaded")]
    PackageName,

    /// `version` is set.
    #[error("package chart version loaded but it should be dynamically created")]
    ChartVersionSet,

    /// `packageVersion` is set.
    #[error("package version loaded but it should be dynamically created")]
    PackageVersionSet,

    /// `doNotRelease` is `true`.
    #[error("package is marked as doNotRelease")]
    DoNotRelease,

    /// `workingDir` is empty.
    #[error("chart working directory not loaded")]
    ChartWorkDir,

    /// `url` does not end with `.git`.
    #[error("chart upstream url field must be a git repository (.git suffix)")]
    UpstreamUrl,

    /// `commit` is set.
    #[error("chart upstream commit field should not be provided")]
    UpstreamCommit,

    /// `chartRepoBranch` is missing.
    #[error("chart upstream branch field must be provided")]
    UpstreamBranch,

    /// `subdirectory` is missing.
    #[error("chart upstream subdirectory field must be provided")]
    UpstreamSubdirectory,

    /// `additionalCharts[].crdOptions.templateDirectory` is empty.
    #[error("additional chart template directory not loaded")]
    AdditionalChartWorkDir,

    /// `additionalCharts[].crdOptions.crdDirectory` is empty.
    #[error("additional chart CRDs directory not loaded")]
    CrdWorkDir,

    /// `additionalCharts[].crdOptions.addCRDValidationToMainChart` is not `true`.
    #[error("additionalCharts.crdOptions.addCRDValidationToMainChart must be true")]
    CrdValidation,
}
