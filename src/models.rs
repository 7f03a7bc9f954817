use serde::{Deserialize, Serialize};

/// A license file discovered in a package checkout.
///
/// `library_name` is the name of the checkout directory the file was found
/// in; `text` holds the file contents with trailing whitespace stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseEntry {
    #[serde(rename = "libraryName")]
    pub library_name: String,
    pub text: String,
}

/// A dependency pinned in a `Package.resolved` manifest.
///
/// `library_name` and `text` start out empty and are filled in by the merge
/// step when the pin's repository matches a collected checkout; both are
/// omitted from the JSON output until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub url: String,
    #[serde(rename = "libraryName", skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The generated document: a single `"licenses"` key holding either plain
/// [`LicenseEntry`] values or manifest-driven [`Dependency`] values.
#[derive(Debug, Serialize, Deserialize)]
pub struct LicenseDocument<T> {
    pub licenses: Vec<T>,
}
