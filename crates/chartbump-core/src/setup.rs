//! Bump orchestration for a single chart.

use std::path::Path;

use chartbump_config::{Config, VersionRule};
use chartbump_package::{ChartAsset, PackageManifest, load_index, load_packages, validate};
use semver::Version;
use tracing::{debug, info};

use crate::{BumpInput, CoreResult, ReleaseDescriptor, SetupError, VersionStateError, calculate};

/// A prepared bump of one chart.
///
/// Each chart gets its own `Bump`; it owns every input of the calculation and
/// the outputs it fills in.
#[derive(Debug, Clone)]
pub struct Bump {
    target_chart: String,
    branch_line: String,
    version_rule: VersionRule,
    history: Vec<ChartAsset>,
    package: PackageManifest,
    release: ReleaseDescriptor,
}

impl Bump {
    /// Resolves and validates everything needed to bump `target_package` on
    /// `target_branch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch or package target is malformed, the
    /// branch line has no version rule, the index or package cannot be read,
    /// the target matches zero or several packages, or the package is not
    /// eligible for an automatic bump.
    pub fn setup(
        repo_root: impl AsRef<Path>,
        target_package: &str,
        target_branch: &str,
        config: &Config,
    ) -> CoreResult<Self> {
        let repo_root = repo_root.as_ref();

        let branch_line = parse_branch_version(target_branch, &config.branch.prefix)?;
        let target_chart = parse_chart_from_package(target_package)?;
        debug!(branch_line, target_chart, "parsed bump target");

        let version_rule = config
            .rule_for(branch_line)
            .cloned()
            .ok_or_else(|| VersionStateError::MissingVersionRule(branch_line.to_string()))?;

        let mut index = load_index(repo_root.join(&config.paths.index))?;
        let history = index.remove(target_chart).unwrap_or_default();
        debug!(published = history.len(), "loaded version history");

        let packages = load_packages(repo_root, &config.paths.packages, target_package)?;
        let package = select_package(packages)?;
        validate(&package)?;

        let release = ReleaseDescriptor::new(target_chart, repo_root.join(&config.paths.release));

        info!(
            package = %package.name,
            chart = target_chart,
            branch_line,
            "bump ready"
        );
        Ok(Self {
            target_chart: target_chart.to_string(),
            branch_line: branch_line.to_string(),
            version_rule,
            history,
            package,
            release,
        })
    }

    /// Computes the next version from the given upstream version and records
    /// it in the release descriptor and the package.
    ///
    /// Nothing is recorded when the calculation fails.
    ///
    /// # Errors
    ///
    /// Returns the calculation error; see [`calculate`].
    pub fn calculate_next_version(&mut self, upstream_version: &str) -> CoreResult<Version> {
        let outcome = calculate(&BumpInput {
            history: &self.history,
            upstream_version,
            version_rule: &self.version_rule.min,
        })?;

        let previous = self.history.first().map(|asset| asset.version.as_str());
        info!(
            chart = %self.target_chart,
            previous = ?previous,
            next = %outcome.version,
            "calculated new version"
        );

        self.release.chart_version = Some(outcome.version.text().to_string());
        self.package.auto_generated_bump_version = Some(outcome.version.semver().clone());
        Ok(outcome.version.semver().clone())
    }

    /// Returns the chart being bumped.
    #[must_use]
    pub fn target_chart(&self) -> &str {
        &self.target_chart
    }

    /// Returns the branch line (e.g. `"2.9"`).
    #[must_use]
    pub fn branch_line(&self) -> &str {
        &self.branch_line
    }

    /// Returns the version rule of the branch line.
    #[must_use]
    pub fn version_rule(&self) -> &VersionRule {
        &self.version_rule
    }

    /// Returns the package being bumped.
    #[must_use]
    pub fn package(&self) -> &PackageManifest {
        &self.package
    }

    /// Returns the release descriptor entry.
    #[must_use]
    pub fn release(&self) -> &ReleaseDescriptor {
        &self.release
    }
}

/// Extracts the branch line from a development branch (`dev-v2.9` -> `2.9`).
///
/// # Errors
///
/// Returns [`SetupError::NotDevBranch`] if the branch lacks `prefix`.
pub fn parse_branch_version<'a>(
    target_branch: &'a str,
    prefix: &str,
) -> Result<&'a str, SetupError> {
    target_branch
        .strip_prefix(prefix)
        .ok_or_else(|| SetupError::NotDevBranch {
            branch: target_branch.to_string(),
            prefix: prefix.to_string(),
        })
}

/// Extracts the chart name from a target package.
///
/// The target is either `<chart>` or up to four path segments ending with the
/// chart, e.g. `rancher-istio/1.22/rancher-istio`.
///
/// # Errors
///
/// Returns [`SetupError::BadPackage`] on empty segments or more than four.
pub fn parse_chart_from_package(target_package: &str) -> Result<&str, SetupError> {
    let parts: Vec<&str> = target_package.split('/').collect();
    let bad = || SetupError::BadPackage(target_package.to_string());

    if parts.len() > 4 || parts.iter().any(|part| part.is_empty()) {
        return Err(bad());
    }
    parts.last().copied().ok_or_else(bad)
}

fn select_package(mut packages: Vec<PackageManifest>) -> Result<PackageManifest, SetupError> {
    match packages.len() {
        0 => Err(SetupError::NoPackage),
        1 => Ok(packages.remove(0)),
        n => Err(SetupError::MultiplePackages(n)),
    }
}
