//! Eligibility checks for automatic version bumps.
//!
//! Every check is a `(predicate, error)` pair. Tables are evaluated in order and
//! the first predicate that does not hold decides the error.

use tracing::debug;

use crate::{AdditionalChart, CrdChartOptions, EligibilityError, PackageManifest, UpstreamOptions};

type Check<T> = (fn(&T) -> bool, EligibilityError);

fn package_checks() -> [Check<PackageManifest>; 6] {
    [
        (|p| p.auto, EligibilityError::FalseAuto),
        (|p| !p.name.is_empty(), EligibilityError::PackageName),
        (|p| p.version.is_none(), EligibilityError::ChartVersionSet),
        (|p| p.package_version.is_none(), EligibilityError::PackageVersionSet),
        (|p| !p.do_not_release, EligibilityError::DoNotRelease),
        (|p| !p.working_dir.is_empty(), EligibilityError::ChartWorkDir),
    ]
}

fn upstream_checks() -> [Check<UpstreamOptions>; 4] {
    [
        (|u| u.url.ends_with(".git"), EligibilityError::UpstreamUrl),
        (|u| u.commit.is_none(), EligibilityError::UpstreamCommit),
        (|u| u.chart_repo_branch.is_some(), EligibilityError::UpstreamBranch),
        (|u| u.subdirectory.is_some(), EligibilityError::UpstreamSubdirectory),
    ]
}

fn crd_checks() -> [Check<CrdChartOptions>; 3] {
    [
        (
            |c| !c.template_directory.is_empty(),
            EligibilityError::AdditionalChartWorkDir,
        ),
        (|c| !c.crd_directory.is_empty(), EligibilityError::CrdWorkDir),
        (
            |c| c.add_crd_validation_to_main_chart,
            EligibilityError::CrdValidation,
        ),
    ]
}

fn first_failure<T>(value: &T, checks: &[Check<T>]) -> Result<(), EligibilityError> {
    match checks.iter().find(|(holds, _)| !holds(value)) {
        Some((_, err)) => Err(*err),
        None => Ok(()),
    }
}

/// Checks that a package is configured for a fully automated version bump.
///
/// # Errors
///
/// Returns the first [`EligibilityError`] found, checking the package fields
/// first, then the main upstream, then each additional chart in order.
pub fn validate(manifest: &PackageManifest) -> Result<(), EligibilityError> {
    let result = first_failure(manifest, &package_checks())
        .and_then(|()| check_upstream(&manifest.upstream))
        .and_then(|()| {
            manifest
                .additional_charts
                .iter()
                .try_for_each(check_additional_chart)
        });

    match &result {
        Ok(()) => debug!(package = %manifest.name, "package is eligible for auto bump"),
        Err(err) => debug!(package = %manifest.name, %err, "package rejected"),
    }
    result
}

/// Checks that upstream options let the upstream version be resolved from a
/// branch rather than a pinned commit.
///
/// # Errors
///
/// Returns the first violated condition: URL suffix, commit, branch, subdirectory.
pub fn check_upstream(options: &UpstreamOptions) -> Result<(), EligibilityError> {
    first_failure(options, &upstream_checks())
}

fn check_additional_chart(chart: &AdditionalChart) -> Result<(), EligibilityError> {
    check_upstream(&chart.upstream_options)?;
    match &chart.crd_chart_options {
        Some(options) => first_failure(options, &crd_checks()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream() -> UpstreamOptions {
        UpstreamOptions::git("https://github.com/example/charts.git", "main", "charts/example")
    }

    fn eligible() -> PackageManifest {
        PackageManifest {
            auto: true,
            working_dir: "charts".to_string(),
            ..PackageManifest::new("rancher-example", upstream())
        }
    }

    fn crd_chart() -> AdditionalChart {
        AdditionalChart {
            working_dir: "charts-crd".to_string(),
            upstream_options: upstream(),
            crd_chart_options: Some(CrdChartOptions {
                template_directory: "crd-template".to_string(),
                crd_directory: "templates".to_string(),
                add_crd_validation_to_main_chart: true,
            }),
        }
    }

    #[test]
    fn test_eligible_package() {
        assert_eq!(validate(&eligible()), Ok(()));
    }

    #[test]
    fn test_eligible_package_with_crd_chart() {
        let mut manifest = eligible();
        manifest.additional_charts.push(crd_chart());
        assert_eq!(validate(&manifest), Ok(()));
    }

    #[test]
    fn test_additional_chart_without_crd_options() {
        let mut manifest = eligible();
        manifest.additional_charts.push(AdditionalChart {
            crd_chart_options: None,
            ..crd_chart()
        });
        assert_eq!(validate(&manifest), Ok(()));
    }

    #[test]
    fn test_rejects_false_auto() {
        let manifest = PackageManifest {
            auto: false,
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::FalseAuto));
    }

    #[test]
    fn test_rejects_empty_name() {
        let manifest = PackageManifest {
            name: String::new(),
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::PackageName));
    }

    #[test]
    fn test_rejects_chart_version() {
        let manifest = PackageManifest {
            version: Some("1.2.3".to_string()),
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::ChartVersionSet));
    }

    #[test]
    fn test_rejects_package_version() {
        let manifest = PackageManifest {
            package_version: Some(1),
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::PackageVersionSet));
    }

    #[test]
    fn test_rejects_do_not_release() {
        let manifest = PackageManifest {
            do_not_release: true,
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::DoNotRelease));
    }

    #[test]
    fn test_rejects_empty_working_dir() {
        let manifest = PackageManifest {
            working_dir: String::new(),
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::ChartWorkDir));
    }

    #[test]
    fn test_first_failure_wins() {
        let manifest = PackageManifest {
            auto: false,
            version: Some("1.2.3".to_string()),
            do_not_release: true,
            ..eligible()
        };
        assert_eq!(validate(&manifest), Err(EligibilityError::FalseAuto));
    }

    #[test]
    fn test_package_fields_checked_before_upstream() {
        let mut manifest = PackageManifest {
            do_not_release: true,
            ..eligible()
        };
        manifest.upstream.url = "https://example.com/chart.tgz".to_string();
        assert_eq!(validate(&manifest), Err(EligibilityError::DoNotRelease));
    }

    #[test]
    fn test_upstream_url_requires_git_suffix() {
        let mut options = upstream();
        options.url = "https://github.com/example/charts".to_string();
        assert_eq!(check_upstream(&options), Err(EligibilityError::UpstreamUrl));
    }

    #[test]
    fn test_upstream_rejects_commit() {
        let mut options = upstream();
        options.commit = Some("0a1b2c3".to_string());
        assert_eq!(check_upstream(&options), Err(EligibilityError::UpstreamCommit));
    }

    #[test]
    fn test_upstream_requires_branch() {
        let mut options = upstream();
        options.chart_repo_branch = None;
        assert_eq!(check_upstream(&options), Err(EligibilityError::UpstreamBranch));
    }

    #[test]
    fn test_upstream_requires_subdirectory() {
        let mut options = upstream();
        options.subdirectory = None;
        assert_eq!(
            check_upstream(&options),
            Err(EligibilityError::UpstreamSubdirectory)
        );
    }

    #[test]
    fn test_upstream_check_order() {
        let options = UpstreamOptions {
            url: "https://example.com/chart.tgz".to_string(),
            subdirectory: None,
            commit: Some("0a1b2c3".to_string()),
            chart_repo_branch: None,
        };
        assert_eq!(check_upstream(&options), Err(EligibilityError::UpstreamUrl));
    }

    #[test]
    fn test_main_upstream_is_checked() {
        let mut manifest = eligible();
        manifest.upstream.commit = Some("0a1b2c3".to_string());
        assert_eq!(validate(&manifest), Err(EligibilityError::UpstreamCommit));
    }

    #[test]
    fn test_additional_chart_upstream_is_checked() {
        let mut chart = crd_chart();
        chart.upstream_options.chart_repo_branch = None;
        let mut manifest = eligible();
        manifest.additional_charts.push(chart);
        assert_eq!(validate(&manifest), Err(EligibilityError::UpstreamBranch));
    }

    #[test]
    fn test_crd_template_directory_required() {
        let mut chart = crd_chart();
        if let Some(options) = chart.crd_chart_options.as_mut() {
            options.template_directory.clear();
        }
        let mut manifest = eligible();
        manifest.additional_charts.push(chart);
        assert_eq!(
            validate(&manifest),
            Err(EligibilityError::AdditionalChartWorkDir)
        );
    }

    #[test]
    fn test_crd_directory_required() {
        let mut chart = crd_chart();
        if let Some(options) = chart.crd_chart_options.as_mut() {
            options.crd_directory.clear();
        }
        let mut manifest = eligible();
        manifest.additional_charts.push(chart);
        assert_eq!(validate(&manifest), Err(EligibilityError::CrdWorkDir));
    }

    #[test]
    fn test_crd_validation_required() {
        let mut chart = crd_chart();
        if let Some(options) = chart.crd_chart_options.as_mut() {
            options.add_crd_validation_to_main_chart = false;
        }
        let mut manifest = eligible();
        manifest.additional_charts.push(chart);
        assert_eq!(validate(&manifest), Err(EligibilityError::CrdValidation));
    }

    #[test]
    fn test_additional_upstream_checked_before_crd_options() {
        let mut chart = crd_chart();
        chart.upstream_options.url = "https://example.com/crds".to_string();
        if let Some(options) = chart.crd_chart_options.as_mut() {
            options.add_crd_validation_to_main_chart = false;
        }
        let mut manifest = eligible();
        manifest.additional_charts.push(chart);
        assert_eq!(validate(&manifest), Err(EligibilityError::UpstreamUrl));
    }
}
