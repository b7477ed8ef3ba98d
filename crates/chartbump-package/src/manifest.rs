//! Package manifest as stored in `package.yaml`.

use semver::Version;
use serde::{Deserialize, Serialize};

/// A chart package, as described by its `package.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name, taken from the package directory.
    #[serde(skip)]
    pub name: String,

    /// Whether the package is configured for automatic version bumps.
    #[serde(default)]
    pub auto: bool,

    /// Chart version. Must stay unset for auto-bumped packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Package version. Must stay unset for auto-bumped packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_version: Option<u32>,

    /// Excludes the package from releases.
    #[serde(default)]
    pub do_not_release: bool,

    /// Directory the chart is prepared in.
    #[serde(default)]
    pub working_dir: String,

    /// Where the chart comes from.
    #[serde(flatten)]
    pub upstream: UpstreamOptions,

    /// Charts shipped alongside the main one (e.g. CRD charts).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_charts: Vec<AdditionalChart>,

    /// Version computed by the last successful auto bump.
    #[serde(skip)]
    pub auto_generated_bump_version: Option<Version>,
}

impl PackageManifest {
    /// Creates a manifest with the given name and upstream.
    #[must_use]
    pub fn new(name: impl Into<String>, upstream: UpstreamOptions) -> Self {
        Self {
            name: name.into(),
            upstream,
            ..Self::default()
        }
    }
}

/// Location of an upstream chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamOptions {
    /// Repository URL.
    #[serde(default)]
    pub url: String,

    /// Chart directory inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<String>,

    /// Pinned commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Branch to track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_repo_branch: Option<String>,
}

impl UpstreamOptions {
    /// Creates options tracking `branch` of the git repository at `url`.
    #[must_use]
    pub fn git(
        url: impl Into<String>,
        branch: impl Into<String>,
        subdirectory: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            subdirectory: Some(subdirectory.into()),
            commit: None,
            chart_repo_branch: Some(branch.into()),
        }
    }
}

/// A chart shipped alongside the main chart of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalChart {
    /// Directory the chart is prepared in.
    #[serde(default)]
    pub working_dir: String,

    /// Where the chart comes from.
    #[serde(default)]
    pub upstream_options: UpstreamOptions,

    /// Set when the additional chart carries the CRDs of the main chart.
    #[serde(default, rename = "crdOptions", skip_serializing_if = "Option::is_none")]
    pub crd_chart_options: Option<CrdChartOptions>,
}

/// Options of a CRD chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdChartOptions {
    /// Template directory of the generated CRD chart.
    #[serde(default)]
    pub template_directory: String,

    /// Directory the CRDs are moved to.
    #[serde(default, rename = "crdDirectory")]
    pub crd_directory: String,

    /// Makes the main chart fail to install without its CRDs.
    #[serde(default, rename = "addCRDValidationToMainChart")]
    pub add_crd_validation_to_main_chart: bool,
}
