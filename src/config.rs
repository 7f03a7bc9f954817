//! Run configuration and the fixed Xcode derived-data layout.
//!
//! All knowledge about where Xcode puts things relative to the arguments
//! lives here, as named constants and documented derivation functions.

use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Directory under the derived-data root holding fetched package sources.
const SOURCE_PACKAGES_DIR: &str = "SourcePackages";

/// Directory under [`SOURCE_PACKAGES_DIR`] with one subdirectory per package.
const CHECKOUTS_DIR: &str = "checkouts";

/// File name of the SwiftPM lock manifest.
const RESOLVED_MANIFEST: &str = "Package.resolved";

/// Immutable run configuration, built once from the parsed CLI arguments
/// and handed to the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for per-package license files.
    pub checkouts_dir: PathBuf,
    /// `Package.resolved` location, when `-p` or `-w` was given.
    pub manifest_path: Option<PathBuf>,
    /// Destination of the generated JSON document.
    pub output_file: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        // A project file takes precedence over a workspace file.
        let manifest_path = match (&cli.project_file, &cli.workspace_file) {
            (Some(project), _) => Some(project_manifest_path(project)),
            (None, Some(workspace)) => Some(workspace_manifest_path(workspace)),
            (None, None) => None,
        };

        Config {
            checkouts_dir: checkouts_dir(&cli.build_dir),
            manifest_path,
            output_file: cli.output_file.clone(),
        }
    }
}

/// Locate the package checkouts directory for a build products directory.
///
/// Xcode lays derived data out as `<DerivedData>/Build/Products`, with
/// fetched package sources under `<DerivedData>/SourcePackages/checkouts`.
/// Two levels up from the build directory is therefore the derived-data
/// root. A build directory shallower than that produces a path that simply
/// does not exist, which the collector treats as "no checkouts".
pub fn checkouts_dir(build_dir: &Path) -> PathBuf {
    let derived_data = build_dir.ancestors().nth(2).unwrap_or(Path::new(""));
    derived_data.join(SOURCE_PACKAGES_DIR).join(CHECKOUTS_DIR)
}

/// Manifest location inside an `.xcodeproj` bundle.
pub fn project_manifest_path(project: &Path) -> PathBuf {
    project
        .join("project.xcworkspace")
        .join("xcshareddata")
        .join("swiftpm")
        .join(RESOLVED_MANIFEST)
}

/// Manifest location inside an `.xcworkspace` bundle.
pub fn workspace_manifest_path(workspace: &Path) -> PathBuf {
    workspace
        .join("xcshareddata")
        .join("swiftpm")
        .join(RESOLVED_MANIFEST)
}
