//! Versions tracked during one bump.

use std::cmp::Ordering;
use std::fmt;

use semver::Version;

use crate::{CoreError, CoreResult, VersionStateError};

/// A version kept both as text and as a parsed semantic version.
///
/// The two forms never drift apart: parsing sets both from the text and
/// [`TrackedVersion::update`] re-renders the text after changing the version.
/// A failed update leaves both untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedVersion {
    text: String,
    semver: Version,
}

impl TrackedVersion {
    /// Parses a semantic version, keeping the original text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] if `text` is not a semantic version.
    pub fn parse(text: impl Into<String>) -> CoreResult<Self> {
        let text = text.into();
        let semver = Version::parse(&text).map_err(|e| CoreError::parse(&text, e))?;
        Ok(Self { text, semver })
    }

    /// Wraps a parsed version, rendering its text.
    #[must_use]
    pub fn from_semver(semver: Version) -> Self {
        Self {
            text: semver.to_string(),
            semver,
        }
    }

    /// Changes the version and re-renders the text.
    ///
    /// # Errors
    ///
    /// Returns the error of `change`; the version is then left as it was.
    pub fn update<E>(
        &mut self,
        change: impl FnOnce(&mut Version) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut semver = self.semver.clone();
        change(&mut semver)?;
        self.text = semver.to_string();
        self.semver = semver;
        Ok(())
    }

    /// Returns the text form.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed form.
    #[must_use]
    pub fn semver(&self) -> &Version {
        &self.semver
    }

    /// Compares by semantic version precedence, ignoring build metadata.
    #[must_use]
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        let key = |v: &Version| (v.major, v.minor, v.patch, v.pre.clone());
        key(&self.semver).cmp(&key(&other.semver))
    }
}

impl fmt::Display for TrackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// How the upstream version moved since the latest published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamChange {
    /// Only the patch component increased.
    Patch,
    /// The minor or the major component increased.
    MinorOrMajor,
    /// No component increased.
    Unchanged,
}

impl UpstreamChange {
    /// Classifies the move from `latest` to `to_release`, component by component.
    #[must_use]
    pub fn between(latest: &Version, to_release: &Version) -> Self {
        let major = to_release.major > latest.major;
        let minor = to_release.minor > latest.minor;
        let patch = to_release.patch > latest.patch;

        if major || minor {
            Self::MinorOrMajor
        } else if patch {
            Self::Patch
        } else {
            Self::Unchanged
        }
    }

    /// Moves a repository prefix along with the upstream change.
    ///
    /// # Errors
    ///
    /// Returns [`VersionStateError::PrefixOverflow`] if the component to bump
    /// is already at its maximum.
    pub fn apply(self, repo_prefix: &mut Version) -> Result<(), VersionStateError> {
        let (minor, patch) = match self {
            Self::Patch => (Some(repo_prefix.minor), repo_prefix.patch.checked_add(1)),
            Self::MinorOrMajor => (repo_prefix.minor.checked_add(1), Some(0)),
            Self::Unchanged => return Ok(()),
        };
        let (Some(minor), Some(patch)) = (minor, patch) else {
            return Err(VersionStateError::PrefixOverflow(repo_prefix.clone()));
        };
        repo_prefix.minor = minor;
        repo_prefix.patch = patch;
        Ok(())
    }
}

impl fmt::Display for UpstreamChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patch => write!(f, "patch"),
            Self::MinorOrMajor => write!(f, "minor-or-major"),
            Self::Unchanged => write!(f, "none"),
        }
    }
}

/// The versions that decide one bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSet {
    /// Upstream part of the latest published version.
    pub latest: TrackedVersion,
    /// Repository prefix of the latest published version, if any.
    pub latest_repo_prefix: Option<TrackedVersion>,
    /// Upstream version about to be released.
    pub to_release: TrackedVersion,
    /// Repository prefix of the version about to be released, once rules are applied.
    pub to_release_repo_prefix: Option<TrackedVersion>,
}
