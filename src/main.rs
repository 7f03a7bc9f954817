//! `spm-licenses` — collect the licenses of an Xcode project's Swift Package
//! Manager dependencies into a single JSON file.
//!
//! # Flow
//! 1. Parse and validate CLI arguments ([`cli`]).
//! 2. Derive the run configuration and fixed paths ([`config`]).
//! 3. Collect license texts from the package checkouts ([`collector`]).
//! 4. Optionally read the pinned dependencies from `Package.resolved`
//!    ([`manifest`]) and join the license texts onto them ([`merge`]).
//! 5. Write the `licenses.json` document ([`output`]).

mod cli;
mod collector;
mod config;
mod manifest;
mod merge;
mod models;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::Config;
use models::LicenseDocument;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    run(&config)
}

/// The whole pipeline: collect, optionally merge with the manifest, write.
fn run(config: &Config) -> Result<()> {
    if !config.checkouts_dir.is_dir() {
        eprintln!(
            "{} no package checkouts at {}",
            "warning:".yellow(),
            config.checkouts_dir.display()
        );
    }

    let licenses = collector::collect_licenses(&config.checkouts_dir)?;
    eprintln!(
        "  {} {} license file(s) collected",
        "→".cyan(),
        licenses.len()
    );

    match &config.manifest_path {
        Some(manifest_path) => {
            let mut deps = manifest::read_dependencies(manifest_path)?;
            merge::merge_licenses(&mut deps, &licenses);

            let matched = deps.iter().filter(|d| d.text.is_some()).count();
            eprintln!(
                "  {} {}/{} dependencies matched a license",
                "→".cyan(),
                matched,
                deps.len()
            );

            output::write_document(&config.output_file, &LicenseDocument { licenses: deps })?;
        }
        None => {
            output::write_document(&config.output_file, &LicenseDocument { licenses })?;
        }
    }

    eprintln!("  {} wrote {}", "✓".green(), config.output_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::models::{Dependency, LicenseEntry};

    /// Lay out `<root>/Build/Products` and `<root>/SourcePackages/checkouts`
    /// the way Xcode derived data looks, with one checkout carrying a license.
    fn derived_data(root: &Path) -> std::path::PathBuf {
        let build_dir = root.join("Build").join("Products");
        fs::create_dir_all(&build_dir).unwrap();
        let checkout = root.join("SourcePackages").join("checkouts").join("Foo");
        fs::create_dir_all(&checkout).unwrap();
        fs::write(checkout.join("LICENSE"), "MIT...\n").unwrap();
        build_dir
    }

    #[test]
    fn test_run_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let build_dir = derived_data(dir.path());
        let output_file = dir.path().join("licenses.json");

        let config = Config {
            checkouts_dir: config::checkouts_dir(&build_dir),
            manifest_path: None,
            output_file: output_file.clone(),
        };
        run(&config).unwrap();

        let written = fs::read_to_string(&output_file).unwrap();
        let document: LicenseDocument<LicenseEntry> = serde_json::from_str(&written).unwrap();
        assert_eq!(document.licenses.len(), 1);
        assert_eq!(document.licenses[0].library_name, "Foo");
        assert_eq!(document.licenses[0].text, "MIT...");
    }

    #[test]
    fn test_run_with_manifest_merges_pins() {
        let dir = tempfile::tempdir().unwrap();
        let build_dir = derived_data(dir.path());
        let output_file = dir.path().join("licenses.json");

        let manifest_path = dir.path().join("Package.resolved");
        fs::write(
            &manifest_path,
            r#"{
  "object": {
    "pins": [
      {
        "package": "Foo",
        "repositoryURL": "https://example.com/org/Foo.git",
        "state": { "branch": null, "revision": "3a1b5c7d", "version": "1.0.0" }
      },
      {
        "package": "Missing",
        "repositoryURL": "https://example.com/org/Missing.git",
        "state": { "branch": null, "revision": "9e8f7a6b", "version": "0.4.2" }
      }
    ]
  },
  "version": 1
}"#,
        )
        .unwrap();

        let config = Config {
            checkouts_dir: config::checkouts_dir(&build_dir),
            manifest_path: Some(manifest_path),
            output_file: output_file.clone(),
        };
        run(&config).unwrap();

        let written = fs::read_to_string(&output_file).unwrap();
        let document: LicenseDocument<Dependency> = serde_json::from_str(&written).unwrap();
        assert_eq!(document.licenses.len(), 2);

        let foo = &document.licenses[0];
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.version, "1.0.0");
        assert_eq!(foo.url, "https://example.com/org/Foo.git");
        assert_eq!(foo.library_name.as_deref(), Some("Foo"));
        assert_eq!(foo.text.as_deref(), Some("MIT..."));

        let missing = &document.licenses[1];
        assert_eq!(missing.name, "Missing");
        assert!(missing.library_name.is_none());
        assert!(missing.text.is_none());
    }

    #[test]
    fn test_run_with_missing_manifest_fails_before_write() {
        let dir = tempfile::tempdir().unwrap();
        let build_dir = derived_data(dir.path());
        let output_file = dir.path().join("licenses.json");

        let config = Config {
            checkouts_dir: config::checkouts_dir(&build_dir),
            manifest_path: Some(dir.path().join("nope").join("Package.resolved")),
            output_file: output_file.clone(),
        };

        assert!(run(&config).is_err());
        assert!(!output_file.exists());
    }
}
