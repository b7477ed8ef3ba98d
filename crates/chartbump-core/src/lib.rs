//! Core library for chartbump.
//!
//! Computes the next version of a chart republished under a repository-owned
//! version line, written as `<repo prefix>+up<upstream version>`.
//!
//! [`Bump`] drives one chart: it loads and validates the package, then
//! [`calculate`] derives the next version from the published history, the
//! upstream version and the branch-line rule.

mod calculator;
mod error;
mod prefix;
mod release;
mod setup;
mod version;

pub use calculator::{
    BumpInput, BumpOutcome, apply_version_rules, calculate, compose, load_versions,
};
pub use error::{CoreError, CoreResult, SetupError, VersionStateError};
pub use prefix::{REPO_PREFIX_MARKER, RepoPrefixed, compose_repo_prefixed};
pub use release::ReleaseDescriptor;
pub use setup::{Bump, parse_branch_version, parse_chart_from_package};
pub use version::{TrackedVersion, UpstreamChange, VersionSet};
