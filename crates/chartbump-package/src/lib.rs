//! Package types for chartbump.
//!
//! This crate provides everything chartbump reads about a chart package:
//! - [`PackageManifest`]: a `package.yaml` as written by chart maintainers
//! - [`validate`]: the eligibility checks for automatic version bumps
//! - [`load_index`]: the published version history from a Helm `index.yaml`
//! - [`read_chart_version`]: the version of an upstream `Chart.yaml`

mod chart;
mod error;
mod index;
mod loader;
mod manifest;
mod validator;

pub use chart::{CHART_FILE_NAME, read_chart_version};
pub use error::{EligibilityError, PackageError, PackageResult};
pub use index::{AssetsVersionsMap, ChartAsset, load_index};
pub use loader::{PACKAGE_FILE_NAME, load_package, load_packages};
pub use manifest::{AdditionalChart, CrdChartOptions, PackageManifest, UpstreamOptions};
pub use validator::{check_upstream, validate};
