//! Next-version calculation.
//!
//! The repository prefix follows the upstream chart: a patch-only upstream
//! release bumps the prefix patch, a minor or major one bumps the prefix minor.
//! The prefix major only moves when the branch line requires a new one.

use std::cmp::Ordering;

use chartbump_package::ChartAsset;
use semver::Version;
use tracing::debug;

use crate::{
    CoreResult, RepoPrefixed, TrackedVersion, UpstreamChange, VersionSet, VersionStateError,
    compose_repo_prefixed,
};

/// Everything one calculation depends on.
#[derive(Debug, Clone, Copy)]
pub struct BumpInput<'a> {
    /// Published versions of the chart, latest first.
    pub history: &'a [ChartAsset],
    /// Version of the upstream chart about to be released.
    pub upstream_version: &'a str,
    /// Minimum repository prefix of the branch line (e.g. `"105.0.0"`).
    pub version_rule: &'a str,
}

/// Result of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// The versions the decision was based on.
    pub versions: VersionSet,
    /// The version to release, `<repo prefix>+up<upstream version>`.
    pub version: TrackedVersion,
}

/// Computes the next version to release.
///
/// # Errors
///
/// Returns a [`VersionStateError`] when the versions do not allow a bump, and
/// [`CoreError::Parse`](crate::CoreError::Parse) when any of them is not a
/// semantic version.
pub fn calculate(input: &BumpInput<'_>) -> CoreResult<BumpOutcome> {
    let versions = load_versions(input.history, input.upstream_version)?;
    let versions = apply_version_rules(versions, input.version_rule)?;
    let version = compose(&versions)?;
    Ok(BumpOutcome { versions, version })
}

/// Loads the latest published version and the upstream version to release.
///
/// The latest version may carry a repository prefix; the upstream one may not.
///
/// # Errors
///
/// Returns an error if a version is empty, malformed, prefixed where it must
/// not be, or if the upstream version is lower than the latest one.
pub fn load_versions(history: &[ChartAsset], upstream_version: &str) -> CoreResult<VersionSet> {
    let latest_raw = history.first().map_or("", |asset| asset.version.as_str());
    if latest_raw.is_empty() {
        return Err(VersionStateError::EmptyVersion.into());
    }

    let latest_split = RepoPrefixed::parse(latest_raw);
    let latest_repo_prefix = latest_split
        .repo_prefix
        .map(TrackedVersion::parse)
        .transpose()?;
    let latest = TrackedVersion::parse(latest_split.version)?;
    debug!(
        latest = %latest,
        repo_prefix = ?latest_repo_prefix.as_ref().map(TrackedVersion::text),
        "loaded latest published version"
    );

    if upstream_version.is_empty() {
        return Err(VersionStateError::MissingUpstreamVersion.into());
    }
    if RepoPrefixed::parse(upstream_version).found() {
        return Err(VersionStateError::UnexpectedPrefix(upstream_version.to_string()).into());
    }
    let to_release = TrackedVersion::parse(upstream_version)?;

    if to_release.cmp_precedence(&latest) == Ordering::Less {
        return Err(VersionStateError::Regression {
            latest: latest.semver().clone(),
            to_release: to_release.semver().clone(),
        }
        .into());
    }
    debug!(to_release = %to_release, "loaded upstream version");

    Ok(VersionSet {
        latest,
        latest_repo_prefix,
        to_release,
        to_release_repo_prefix: None,
    })
}

/// Derives the repository prefix of the version to release.
///
/// # Errors
///
/// Returns [`CoreError::Parse`](crate::CoreError::Parse) if `version_rule` is
/// not a semantic version, and [`VersionStateError::PrefixOverflow`] if the
/// latest prefix cannot be bumped.
pub fn apply_version_rules(mut versions: VersionSet, version_rule: &str) -> CoreResult<VersionSet> {
    let rule = TrackedVersion::parse(version_rule)?;

    let repo_prefix = match &versions.latest_repo_prefix {
        Some(latest_prefix) if latest_prefix.semver().major == rule.semver().major => {
            let change =
                UpstreamChange::between(versions.latest.semver(), versions.to_release.semver());
            let mut repo_prefix = latest_prefix.clone();
            repo_prefix.update(|v: &mut Version| change.apply(v))?;
            debug!(
                %change,
                from = %latest_prefix,
                to = %repo_prefix,
                "bumped repository prefix"
            );
            repo_prefix
        }
        _ => {
            debug!(repo_prefix = %rule, "new branch line, using the rule version");
            rule
        }
    };

    versions.to_release_repo_prefix = Some(repo_prefix);
    Ok(versions)
}

/// Builds `<repo prefix>+up<upstream version>` from the version set.
///
/// # Errors
///
/// Returns [`CoreError::Parse`](crate::CoreError::Parse) if the composed
/// version is not a semantic version.
pub fn compose(versions: &VersionSet) -> CoreResult<TrackedVersion> {
    let repo_prefix = versions
        .to_release_repo_prefix
        .as_ref()
        .map_or("", TrackedVersion::text);
    TrackedVersion::parse(compose_repo_prefixed(repo_prefix, versions.to_release.text()))
}
