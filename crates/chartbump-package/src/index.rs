//! Published chart versions from a Helm repository index.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PackageError, PackageResult};

/// One published version of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAsset {
    /// Published version, possibly carrying a repository prefix.
    #[serde(default)]
    pub version: String,
}

impl ChartAsset {
    /// Creates an asset for the given version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Published versions per chart name, latest first.
pub type AssetsVersionsMap = HashMap<String, Vec<ChartAsset>>;

#[derive(Debug, Deserialize)]
struct IndexFile {
    #[serde(default)]
    entries: AssetsVersionsMap,
}

/// Loads the published versions of every chart listed in an `index.yaml`.
///
/// Versions are sorted newest first. Versions that are not valid semantic
/// versions go last, in file order.
///
/// # Errors
///
/// Returns an error if the file is missing or is not a valid index.
pub fn load_index(path: impl AsRef<Path>) -> PackageResult<AssetsVersionsMap> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PackageError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let index: IndexFile = serde_yaml::from_str(&content).map_err(|source| PackageError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = index.entries;
    for assets in entries.values_mut() {
        sort_latest_first(assets);
    }

    debug!(?path, charts = entries.len(), "loaded chart index");
    Ok(entries)
}

fn sort_latest_first(assets: &mut [ChartAsset]) {
    assets.sort_by_cached_key(|asset| std::cmp::Reverse(Version::parse(&asset.version).ok()));
}
