//! Joining collected license texts onto manifest dependencies.

use url::Url;

use crate::models::{Dependency, LicenseEntry};

/// Derive the repository name a pin was checked out under: the last segment
/// of the URL path, with a trailing `.git` removed.
///
/// `https://example.com/org/Foo.git` → `Foo`. Returns `None` when the URL
/// does not parse or the path yields an empty name; such pins never match a
/// checkout.
pub fn repository_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let last = parsed.path().rsplit('/').next().unwrap_or("");
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Find the collected license whose `libraryName` equals `name`.
/// Comparison is case-sensitive; the first match wins.
pub fn find_license<'a>(licenses: &'a [LicenseEntry], name: &str) -> Option<&'a LicenseEntry> {
    licenses.iter().find(|entry| entry.library_name == name)
}

/// Splice matching license texts into the dependency list.
///
/// A dependency whose repository name matches a collected checkout takes
/// that entry's `text` and `libraryName`; one without a match keeps its
/// manifest metadata and carries no license text.
pub fn merge_licenses(deps: &mut [Dependency], licenses: &[LicenseEntry]) {
    for dep in deps.iter_mut() {
        let matched = repository_name(&dep.url).and_then(|name| find_license(licenses, &name));
        if let Some(entry) = matched {
            dep.library_name = Some(entry.library_name.clone());
            dep.text = Some(entry.text.clone());
        }
    }
}
