//! Reading pinned dependencies out of a SwiftPM `Package.resolved` manifest.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Dependency;

#[derive(Debug, Deserialize)]
struct PackageResolved {
    object: ResolvedObject,
}

#[derive(Debug, Deserialize)]
struct ResolvedObject {
    pins: Vec<Pin>,
}

#[derive(Debug, Deserialize)]
struct Pin {
    package: String,
    #[serde(rename = "repositoryURL")]
    repository_url: String,
    state: PinState,
}

#[derive(Debug, Deserialize)]
struct PinState {
    version: String,
}

/// Read the pinned dependency list from a `Package.resolved` file.
///
/// Unlike an absent checkouts directory, a missing or malformed manifest is
/// fatal: passing `-p`/`-w` is an explicit request for pin metadata.
pub fn read_dependencies(manifest_path: &Path) -> Result<Vec<Dependency>> {
    let content = std::fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read manifest {}", manifest_path.display()))?;
    let resolved: PackageResolved = serde_json::from_str(&content)
        .with_context(|| format!("Malformed manifest {}", manifest_path.display()))?;

    let deps = resolved
        .object
        .pins
        .into_iter()
        .map(|pin| Dependency {
            name: pin.package,
            version: pin.state.version,
            url: pin.repository_url,
            library_name: None,
            text: None,
        })
        .collect();

    Ok(deps)
}
