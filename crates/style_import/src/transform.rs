//! The per-file transform pipeline.
//!
//! Wires the stages together: prefilter, import scan, library match, style
//! resolution, and rewriting. One [`StyleImport`] instance holds the
//! process-wide configuration and serves any number of files; a file's
//! transform is a pure function of its text and id, so concurrent invocation
//! needs no locking.

use cow_utils::CowUtils;
use log::debug;
use oxc_sourcemap::SourceMap;

use crate::options::{BuildCommand, BuildConfig, LibrarySpec, StyleImportOptions};
use crate::prefilter::need_transform;
use crate::resolver::{OrderedSet, resolve_styles};
use crate::rewriter::SourceEditor;
use crate::scanner::scan_imports;

/// Result of transforming one file.
#[derive(Debug)]
pub struct TransformOutput {
    pub code: String,
    /// Present only for production builds with source maps enabled.
    pub map: Option<SourceMap>,
}

/// The configured transform.
///
/// Construction captures the library registry and the resolved build
/// configuration; both are immutable afterwards.
#[derive(Debug)]
pub struct StyleImport {
    options: StyleImportOptions,
    build: BuildConfig,
}

impl StyleImport {
    pub fn new(options: StyleImportOptions, build: BuildConfig) -> Self {
        debug!("style-import options: {options:?}");
        debug!("style-import build config: {build:?}");
        Self { options, build }
    }

    pub fn options(&self) -> &StyleImportOptions {
        &self.options
    }

    pub fn build(&self) -> &BuildConfig {
        &self.build
    }

    /// Transform one file. Returns `None` when the file needs no change.
    ///
    /// The host pipeline is expected to have applied the include/exclude
    /// filter to `id` already; this method only checks file content.
    pub fn transform(&self, code: &str, id: &str) -> Option<TransformOutput> {
        if code.is_empty() || !need_transform(code, &self.options.libs) {
            return None;
        }

        let imports = scan_imports(code, id);
        if imports.is_empty() {
            return None;
        }

        let mut editor = SourceEditor::new(code);
        let mut seen = OrderedSet::new();

        for record in &imports {
            let Some(lib) = match_lib(&record.specifier, &self.options.libs) else {
                continue;
            };

            // Legacy libraries: in bundling builds, replace the aggregate
            // import with one default-style deep import per bound identifier.
            // The statement qualified by specifier == library_name; the
            // rewrite keys on that same condition.
            if let Some(lib_directory) = &lib.lib_directory
                && self.build.command == BuildCommand::Build
                && !record.bindings.is_empty()
            {
                let replacement = record
                    .bindings
                    .iter()
                    .map(|ident| {
                        format!(
                            "import {ident} from \"{}/{}/{}\";",
                            lib.library_name,
                            lib_directory,
                            ident.cow_to_lowercase()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                editor.overwrite(record.statement_span, replacement);
            }

            let block = resolve_styles(lib, &record.bindings, &self.build, &mut seen);
            if !block.is_empty() {
                // Anchored to the document start for every matched import, so
                // later imports' blocks land ahead of earlier ones.
                let mut text = block.join("\n");
                text.push('\n');
                editor.prepend(&text);
            }
        }

        if !editor.has_edits() {
            return None;
        }
        debug!("style imports for {id}: [{}]", seen.iter().collect::<Vec<_>>().join(" "));

        let (code, map) = editor.finish(self.build.needs_sourcemap().then_some(id));
        Some(TransformOutput { code, map })
    }
}

/// Exact-equality registry lookup; first match wins.
fn match_lib<'l>(specifier: &str, libs: &'l [LibrarySpec]) -> Option<&'l LibrarySpec> {
    libs.iter().find(|lib| lib.library_name == specifier)
}
