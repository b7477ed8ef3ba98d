//! Upstream chart metadata.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{PackageError, PackageResult};

/// Chart metadata file name.
pub const CHART_FILE_NAME: &str = "Chart.yaml";

#[derive(Debug, Deserialize)]
struct ChartMetadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
}

/// Reads the version declared by the chart in `chart_dir`.
///
/// The version is returned verbatim; an empty string means the chart does not
/// declare one.
///
/// # Errors
///
/// Returns an error if `Chart.yaml` is missing or cannot be parsed.
pub fn read_chart_version(chart_dir: impl AsRef<Path>) -> PackageResult<String> {
    let path = chart_dir.as_ref().join(CHART_FILE_NAME);
    if !path.is_file() {
        return Err(PackageError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let chart: ChartMetadata =
        serde_yaml::from_str(&content).map_err(|source| PackageError::Yaml {
            path: path.clone(),
            source,
        })?;

    debug!(chart = %chart.name, version = %chart.version, "read upstream chart version");
    Ok(chart.version)
}
