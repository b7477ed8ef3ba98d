//! Repository-prefixed versions (`<repo prefix>+up<upstream version>`).

/// Separates the repository prefix from the upstream version.
pub const REPO_PREFIX_MARKER: &str = "+up";

/// A version split on its first [`REPO_PREFIX_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoPrefixed<'a> {
    /// Text before the marker, `None` when the marker is absent.
    pub repo_prefix: Option<&'a str>,
    /// Text after the marker, or the whole input when the marker is absent.
    pub version: &'a str,
}

impl<'a> RepoPrefixed<'a> {
    /// Splits `raw` on the first marker occurrence. Later occurrences stay in
    /// the version part.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(REPO_PREFIX_MARKER) {
            Some((repo_prefix, version)) => Self {
                repo_prefix: Some(repo_prefix),
                version,
            },
            None => Self {
                repo_prefix: None,
                version: raw,
            },
        }
    }

    /// Returns true if the marker was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.repo_prefix.is_some()
    }

    /// Returns the repository prefix, or `""` when there is none.
    #[must_use]
    pub fn repo_prefix_or_empty(&self) -> &'a str {
        self.repo_prefix.unwrap_or_default()
    }
}

/// Renders `<repo_prefix>+up<version>`.
#[must_use]
pub fn compose_repo_prefixed(repo_prefix: &str, version: &str) -> String {
    format!("{repo_prefix}{REPO_PREFIX_MARKER}{version}")
}
