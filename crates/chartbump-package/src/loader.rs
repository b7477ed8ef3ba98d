//! Package discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{PackageError, PackageManifest, PackageResult};

/// Manifest file name inside a package directory.
pub const PACKAGE_FILE_NAME: &str = "package.yaml";

/// Loads the package stored in `dir`.
///
/// The package name is the directory name.
///
/// # Errors
///
/// Returns an error if `dir` holds no manifest or it cannot be parsed.
pub fn load_package(dir: impl AsRef<Path>) -> PackageResult<PackageManifest> {
    let dir = dir.as_ref();
    let path = dir.join(PACKAGE_FILE_NAME);
    if !path.is_file() {
        return Err(PackageError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let mut manifest: PackageManifest =
        serde_yaml::from_str(&content).map_err(|source| PackageError::Yaml {
            path: path.clone(),
            source,
        })?;
    manifest.name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(package = %manifest.name, ?path, "loaded package");
    Ok(manifest)
}

/// Loads every package matching `target` under `<repo_root>/<packages_dir>`.
///
/// `target` is a path relative to the packages directory. When it names a
/// package directory, that single package is returned; otherwise every
/// package found below it is, in path order. An unknown target yields no
/// packages.
///
/// # Errors
///
/// Returns an error if a directory cannot be read or a manifest cannot be parsed.
pub fn load_packages(
    repo_root: impl AsRef<Path>,
    packages_dir: &str,
    target: &str,
) -> PackageResult<Vec<PackageManifest>> {
    let root = repo_root.as_ref().join(packages_dir).join(target);
    debug!(?root, "looking for packages");

    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    collect_package_dirs(&root, &mut dirs)?;
    dirs.sort();

    dirs.iter().map(load_package).collect()
}

fn collect_package_dirs(dir: &Path, found: &mut Vec<PathBuf>) -> PackageResult<()> {
    if dir.join(PACKAGE_FILE_NAME).is_file() {
        found.push(dir.to_path_buf());
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_package_dirs(&path, found)?;
        }
    }
    Ok(())
}
