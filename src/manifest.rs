use std::path::{Component, Path};

use log::debug;

use crate::error::{Error, Result};

/// Files the synthesis pass must leave untouched.
///
/// Paths are relative to the repository root and maintained by hand; every
/// other common file is regenerated from the shared templates on each pass.
pub const EXCLUDED_TEMPLATES: &[&str] = &[
    "README.md",
    "CONTRIBUTING.md",
    ".github/auto-label.yaml",
    ".github/blunderbuss.yml",
    ".github/CODEOWNERS",
    ".github/ISSUE_TEMPLATE/bug_report.md",
    ".github/ISSUE_TEMPLATE/feature_request.md",
    ".github/ISSUE_TEMPLATE/support_request.md",
    ".github/snippet-bot.yml",
];

/// Returns the exclusion manifest after validating every entry.
///
/// Order is preserved exactly as written; duplicates are passed through
/// untouched.
pub fn excluded_templates() -> Result<Vec<String>> {
    EXCLUDED_TEMPLATES
        .iter()
        .map(|entry| {
            validate_entry(entry)?;
            debug!("Adding exclusion entry: {entry}");
            Ok((*entry).to_string())
        })
        .collect()
}

/// Checks a single manifest entry against the path invariant.
///
/// Entries must be non-empty relative paths that stay inside the repository
/// root.
fn validate_entry(entry: &str) -> Result<()> {
    if entry.is_empty() {
        return Err(Error::ManifestError("empty exclusion entry".to_string()));
    }

    let path = Path::new(entry);
    if path.is_absolute() {
        return Err(Error::ManifestError(format!(
            "exclusion '{entry}' must be a relative path"
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(Error::ManifestError(format!(
            "exclusion '{entry}' must not leave the repository root"
        )));
    }

    Ok(())
}

/// Lists manifest entries that name files absent from `repo_root`.
///
/// A stale entry is not an error: the synthesis tool simply has nothing to
/// skip for it. Callers surface these as warnings.
pub fn stale_entries<P: AsRef<Path>>(repo_root: P, excludes: &[String]) -> Vec<String> {
    let repo_root = repo_root.as_ref();
    excludes
        .iter()
        .filter(|entry| !repo_root.join(entry).exists())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_matches_the_literal() {
        let excludes = excluded_templates().unwrap();
        let expected: Vec<String> =
            EXCLUDED_TEMPLATES.iter().map(|entry| entry.to_string()).collect();
        assert_eq!(excludes, expected);
    }

    #[test]
    fn rejects_empty_entries() {
        assert!(validate_entry("").is_err());
    }

    #[test]
    fn rejects_absolute_entries() {
        assert!(validate_entry("/etc/passwd").is_err());
    }

    #[test]
    fn rejects_parent_dir_components() {
        assert!(validate_entry("../README.md").is_err());
        assert!(validate_entry("docs/../README.md").is_err());
    }

    #[test]
    fn accepts_nested_relative_entries() {
        assert!(validate_entry(".github/ISSUE_TEMPLATE/bug_report.md").is_ok());
    }

    #[test]
    fn reports_entries_missing_from_the_repository() {
        let repo = tempfile::tempdir().unwrap();
        std::fs::write(repo.path().join("README.md"), "# readme").unwrap();

        let excludes =
            vec!["README.md".to_string(), "CONTRIBUTING.md".to_string()];
        let stale = stale_entries(repo.path(), &excludes);
        assert_eq!(stale, vec!["CONTRIBUTING.md".to_string()]);
    }
}
