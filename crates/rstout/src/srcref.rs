//! Source-reference URL resolution for generated documentation.
//!
//! Whether a module can be linked to its source is an explicit capability:
//! a [`SourceModule`] either carries a URL template or it does not, and
//! resolution yields an absent result rather than an error when the
//! capability is missing.

use std::fs;
use std::path::PathBuf;

/// Describes a code module whose source may be linked from generated docs.
#[derive(Clone, Debug)]
pub struct SourceModule {
    /// Path to the module's source file.
    pub file: PathBuf,
    /// Directory the published link path is relative to.
    pub root: PathBuf,
    /// URL template with a `{}` placeholder for the relative file path,
    /// e.g. `https://example.com/blob/master/{}`. `None` when the project
    /// publishes no source links.
    pub url_template: Option<String>,
}

/// Resolve the source-reference URL for `module`.
///
/// Returns `None` when the module declares no URL template, or when the
/// underlying source file is empty or unreadable (such as placeholder files
/// whose only purpose is to mark a package). The relative path is
/// normalized to forward slashes before substitution.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use rstout::{srcref, SourceModule};
///
/// let module = SourceModule {
///     file: PathBuf::from("/src/pkg/lib.rs"),
///     root: PathBuf::from("/src"),
///     url_template: Some("https://example.com/blob/master/{}".into()),
/// };
/// if let Some(url) = srcref(&module) {
///     assert_eq!(url, "https://example.com/blob/master/pkg/lib.rs");
/// }
/// ```
pub fn srcref(module: &SourceModule) -> Option<String> {
    let template = module.url_template.as_deref()?;

    let size = fs::metadata(&module.file).ok()?.len();
    if size == 0 {
        return None;
    }

    let relative = module
        .file
        .strip_prefix(&module.root)
        .unwrap_or(&module.file);
    let relative = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Some(template.replace("{}", &relative))
}
