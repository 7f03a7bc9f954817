//! Discovery of license files under the package checkouts directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::LicenseEntry;

/// Lower-cased prefixes that mark a file as a license text.
const LICENSE_PREFIXES: [&str; 2] = ["license", "licence"];

/// True when `name` names a license file (`LICENSE`, `License.txt`,
/// `licence-MIT`, ...). The check is anchored at the start of the basename:
/// `mylicense.txt` does not qualify.
fn is_license_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    LICENSE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// Collect the license text of every package checkout below `checkouts_dir`.
///
/// The checkouts directory holds one subdirectory per fetched package, and
/// license files are looked up exactly one level inside those, never deeper.
/// Each match becomes a [`LicenseEntry`] keyed by its package directory
/// name, with trailing whitespace stripped from the text.
///
/// A missing checkouts directory yields an empty list rather than an error,
/// so a project without package dependencies still produces a valid (empty)
/// document. Entries are visited in sorted order to keep output stable.
pub fn collect_licenses(checkouts_dir: &Path) -> Result<Vec<LicenseEntry>> {
    if !checkouts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();

    for package_dir in sorted_children(checkouts_dir)? {
        if !package_dir.is_dir() {
            continue;
        }
        let library_name = match package_dir.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        for candidate in sorted_children(&package_dir)? {
            let name = match candidate.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if !candidate.is_file() || !is_license_file(name) {
                continue;
            }

            let text = fs::read_to_string(&candidate)?;
            entries.push(LicenseEntry {
                library_name: library_name.clone(),
                text: text.trim_end().to_string(),
            });
        }
    }

    Ok(entries)
}

fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    children.sort();
    Ok(children)
}
