//! Configuration for the style-import transform.
//!
//! Two pieces of process-wide state exist, both written exactly once during
//! startup and read-only afterwards (enforced by construction, not locking):
//!
//! - [`StyleImportOptions`] — the library registry plus the include/exclude
//!   patterns the host pipeline's file filter consumes.
//! - [`BuildConfig`] — the resolved build mode captured from the host
//!   (command, source-map flag, project root).

use std::path::PathBuf;

use crate::case::NameCase;

/// Style path resolver supplied by the configuration author.
///
/// Receives the case-converted component name and returns the module path of
/// its style sheet.
pub type StyleResolver = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Registration of one component library.
///
/// `library_name` is the exact module specifier the library is imported under;
/// matching is exact string equality, never partial or path-resolved.
pub struct LibrarySpec {
    /// The module specifier this library is imported as (e.g. `"ant-design-vue"`).
    pub library_name: String,
    /// Maps a converted component name to its style module path.
    /// Without one, the library is a configuration no-op.
    resolve_style: Option<StyleResolver>,
    /// Convention used to derive style file names from identifiers.
    pub library_name_change_case: NameCase,
    /// When `true`, resolved style paths name files inside the installed
    /// package and are resolved to absolute paths under `<root>/node_modules`.
    pub es_module: bool,
    /// Internal directory for libraries that need per-component deep imports
    /// in bundling builds (e.g. `"lib"` for `element-plus/lib/button`).
    pub lib_directory: Option<String>,
}

impl LibrarySpec {
    pub fn new(library_name: impl Into<String>) -> Self {
        Self {
            library_name: library_name.into(),
            resolve_style: None,
            library_name_change_case: NameCase::default(),
            es_module: false,
            lib_directory: None,
        }
    }

    /// Set the style path resolver.
    #[must_use]
    pub fn with_resolve_style(
        mut self,
        f: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.resolve_style = Some(Box::new(f));
        self
    }

    /// Set the naming convention for style file names.
    #[must_use]
    pub fn with_change_case(mut self, case: NameCase) -> Self {
        self.library_name_change_case = case;
        self
    }

    /// Mark style paths as naming installed package files.
    #[must_use]
    pub fn with_es_module(mut self, es_module: bool) -> Self {
        self.es_module = es_module;
        self
    }

    /// Set the internal directory for deep-path rewriting.
    #[must_use]
    pub fn with_lib_directory(mut self, dir: impl Into<String>) -> Self {
        self.lib_directory = Some(dir.into());
        self
    }

    /// Whether this library can resolve styles at all.
    ///
    /// A spec without a resolver or with an empty name degrades to a no-op
    /// rather than an error; its correctness is the configuration author's
    /// responsibility.
    pub fn can_resolve(&self) -> bool {
        !self.library_name.is_empty() && self.resolve_style.is_some()
    }

    /// Resolve the style path for a converted component name.
    ///
    /// Returns `None` when no resolver is configured. A panic inside the
    /// caller-supplied resolver propagates unwrapped.
    pub fn style_for(&self, converted_name: &str) -> Option<String> {
        self.resolve_style.as_ref().map(|f| f(converted_name))
    }
}

impl std::fmt::Debug for LibrarySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibrarySpec")
            .field("library_name", &self.library_name)
            .field("resolve_style", &self.resolve_style.as_ref().map(|_| "Some(<fn>)"))
            .field("library_name_change_case", &self.library_name_change_case)
            .field("es_module", &self.es_module)
            .field("lib_directory", &self.lib_directory)
            .finish()
    }
}

/// Options for the transform, supplied once at startup.
#[derive(Debug)]
pub struct StyleImportOptions {
    /// Glob patterns of files the host pipeline should feed to the transform.
    /// The matching itself belongs to the host, not this crate.
    pub include: Vec<String>,
    /// Glob patterns of files the host pipeline should skip.
    pub exclude: Vec<String>,
    /// The component library registry. Library names must be unique;
    /// the first match wins.
    pub libs: Vec<LibrarySpec>,
}

impl Default for StyleImportOptions {
    fn default() -> Self {
        Self {
            include: ["**/*.vue", "**/*.ts", "**/*.js", "**/*.tsx", "**/*.jsx"]
                .map(String::from)
                .to_vec(),
            exclude: vec!["node_modules/**".to_string()],
            libs: Vec::new(),
        }
    }
}

impl StyleImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the include patterns.
    #[must_use]
    pub fn with_include(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.include = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exclude patterns.
    #[must_use]
    pub fn with_exclude(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Register a component library.
    #[must_use]
    pub fn with_lib(mut self, lib: LibrarySpec) -> Self {
        self.libs.push(lib);
        self
    }
}

/// The host build command the transform is running under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildCommand {
    /// Dev server; no deep-path rewriting, no source maps.
    #[default]
    Serve,
    /// Production bundling build.
    Build,
}

/// Resolved build configuration, captured once from the host pipeline.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub command: BuildCommand,
    /// Whether the host build has source maps enabled.
    pub sourcemap: bool,
    /// Project root; `es_module` style paths resolve under `<root>/node_modules`.
    pub root: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: BuildCommand::default(),
            sourcemap: false,
            root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the build command.
    #[must_use]
    pub fn with_command(mut self, command: BuildCommand) -> Self {
        self.command = command;
        self
    }

    /// Enable or disable source map emission.
    #[must_use]
    pub fn with_sourcemap(mut self, sourcemap: bool) -> Self {
        self.sourcemap = sourcemap;
        self
    }

    /// Set the project root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Source maps are emitted only for production builds that ask for them.
    pub fn needs_sourcemap(&self) -> bool {
        self.command == BuildCommand::Build && self.sourcemap
    }
}
