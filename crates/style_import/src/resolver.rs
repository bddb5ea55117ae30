//! Per-identifier style path resolution.
//!
//! For each bound identifier of a matched library: convert the name with the
//! library's convention, ask the configured resolver for the style module
//! path, optionally anchor it under the project's `node_modules`, and wrap it
//! as an import statement. Statements are collected in a file-wide ordered set
//! so the same style sheet is never imported twice, no matter how many import
//! statements of the library the file contains.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::options::{BuildConfig, LibrarySpec};

/// An insertion-ordered set of statement strings with exact-string
/// de-duplication.
#[derive(Debug, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: FxHashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; returns `false` if a byte-identical value is present.
    pub fn insert(&mut self, value: String) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// Resolve the style statements for one import's identifiers.
///
/// Returns the statements newly added to `seen` (this import's block), in
/// identifier order. Misconfigured libraries (no resolver, empty name)
/// resolve to nothing. A panic inside the caller-supplied resolver is not
/// caught here; it aborts the file's transform by design.
pub fn resolve_styles(
    lib: &LibrarySpec,
    identifiers: &[String],
    build: &BuildConfig,
    seen: &mut OrderedSet,
) -> Vec<String> {
    if !lib.can_resolve() {
        return Vec::new();
    }

    let mut block = Vec::new();
    for identifier in identifiers {
        let name = lib.library_name_change_case.convert(identifier);
        let Some(mut path) = lib.style_for(&name) else {
            continue;
        };
        if lib.es_module {
            path = resolve_node_modules(&build.root, &path);
        }
        let statement = format!("import '{path}';");
        if seen.insert(statement.clone()) {
            block.push(statement);
        }
    }
    block
}

/// Anchor a package-internal style path under `<root>/node_modules`,
/// normalized to forward slashes.
fn resolve_node_modules(root: &Path, path: &str) -> String {
    normalize_path(&root.join("node_modules").join(path))
}

/// Resolve `.` and `..` segments without touching the filesystem and emit
/// forward slashes regardless of platform.
fn normalize_path(path: &Path) -> String {
    let mut parts: Vec<std::path::Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                if matches!(parts.last(), Some(std::path::Component::Normal(_))) {
                    parts.pop();
                } else {
                    parts.push(component);
                }
            }
            _ => parts.push(component),
        }
    }
    let joined: std::path::PathBuf = parts.iter().collect();
    joined.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::NameCase;

    fn kit() -> LibrarySpec {
        LibrarySpec::new("ui-kit").with_resolve_style(|n| format!("style/{n}.css"))
    }

    #[test]
    fn converts_and_wraps_identifiers() {
        let mut seen = OrderedSet::new();
        let block = resolve_styles(
            &kit(),
            &["MyButton".to_string(), "Table".to_string()],
            &BuildConfig::new(),
            &mut seen,
        );
        assert_eq!(block, ["import 'style/my-button.css';", "import 'style/table.css';"]);
    }

    #[test]
    fn deduplicates_across_calls() {
        let mut seen = OrderedSet::new();
        let build = BuildConfig::new();
        let first = resolve_styles(&kit(), &["A".to_string(), "B".to_string()], &build, &mut seen);
        let second = resolve_styles(&kit(), &["B".to_string(), "C".to_string()], &build, &mut seen);
        assert_eq!(first.len(), 2);
        assert_eq!(second, ["import 'style/c.css';"]);
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn misconfigured_lib_resolves_nothing() {
        let mut seen = OrderedSet::new();
        let lib = LibrarySpec::new("ui-kit"); // no resolver
        let block =
            resolve_styles(&lib, &["A".to_string()], &BuildConfig::new(), &mut seen);
        assert!(block.is_empty());
        assert!(seen.is_empty());
    }

    #[test]
    fn respects_configured_case() {
        let mut seen = OrderedSet::new();
        let lib = kit().with_change_case(NameCase::Snake);
        let block = resolve_styles(&lib, &["MyButton".to_string()], &BuildConfig::new(), &mut seen);
        assert_eq!(block, ["import 'style/my_button.css';"]);
    }

    #[test]
    fn es_module_paths_anchor_under_node_modules() {
        let mut seen = OrderedSet::new();
        let lib = kit().with_es_module(true);
        let build = BuildConfig::new().with_root("/project");
        let block = resolve_styles(&lib, &["Button".to_string()], &build, &mut seen);
        assert_eq!(block, ["import '/project/node_modules/style/button.css';"]);
    }

    #[test]
    fn normalize_path_cleans_segments() {
        assert_eq!(
            normalize_path(Path::new("/a/b/../c/./d")),
            "/a/c/d"
        );
    }
}
