use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "spm-licenses",
    about = "Generate a single .json file with the licenses of all Swift Package Manager dependencies of an Xcode project",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Build products directory, usually $BUILD_DIR
    #[arg(
        short = 'b',
        long = "build-dir",
        value_name = "build_dir",
        value_parser = parse_build_dir
    )]
    pub build_dir: PathBuf,

    /// Path to the .json licenses file to be generated
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "output_file",
        value_parser = parse_output_file
    )]
    pub output_file: PathBuf,

    /// .xcodeproj whose Package.resolved supplies dependency metadata
    #[arg(
        short = 'p',
        long = "project-file",
        value_name = "project_file",
        value_parser = parse_project_file
    )]
    pub project_file: Option<PathBuf>,

    /// .xcworkspace whose Package.resolved supplies dependency metadata
    #[arg(
        short = 'w',
        long = "workspace-file",
        value_name = "workspace_file",
        value_parser = parse_workspace_file
    )]
    pub workspace_file: Option<PathBuf>,
}

/// The build directory must already exist; everything else is derived from it.
fn parse_build_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.is_dir() {
        return Err(format!("invalid build directory path: {s}"));
    }
    Ok(path)
}

fn parse_output_file(s: &str) -> Result<PathBuf, String> {
    if !s.contains(".json") {
        return Err(String::from("output file path must contain .json extension"));
    }
    Ok(PathBuf::from(s))
}

fn parse_project_file(s: &str) -> Result<PathBuf, String> {
    parse_bundle(s, ".xcodeproj")
}

fn parse_workspace_file(s: &str) -> Result<PathBuf, String> {
    parse_bundle(s, ".xcworkspace")
}

/// Xcode projects and workspaces are directory bundles; require the marker
/// extension somewhere in the path and an existing directory behind it.
fn parse_bundle(s: &str, marker: &str) -> Result<PathBuf, String> {
    if !s.contains(marker) {
        return Err(format!("path must contain {marker}: {s}"));
    }
    let path = PathBuf::from(s);
    if !path.is_dir() {
        return Err(format!("invalid bundle path: {s}"));
    }
    Ok(path)
}
