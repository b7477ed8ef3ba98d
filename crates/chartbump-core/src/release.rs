//! Release descriptor entry of a bumped chart.

use std::path::PathBuf;

/// The release descriptor entry a bump fills in.
///
/// Only held in memory; writing it back to disk is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    /// Chart the entry belongs to.
    pub chart: String,
    /// Location of the release descriptor in the repository.
    pub path: PathBuf,
    /// Version to release, set once the bump succeeded.
    pub chart_version: Option<String>,
}

impl ReleaseDescriptor {
    /// Creates an entry with no version yet.
    #[must_use]
    pub fn new(chart: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            chart: chart.into(),
            path: path.into(),
            chart_version: None,
        }
    }
}
