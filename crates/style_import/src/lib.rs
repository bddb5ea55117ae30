//! style_import
//!
//! Build-time transform that injects per-component style imports for
//! registered component libraries, so a file that does
//!
//! ```js
//! import { MyButton } from 'ui-kit';
//! ```
//!
//! ships exactly the styles it uses without manual bookkeeping:
//!
//! ```js
//! import 'styles/my-button.css';
//! import { MyButton } from 'ui-kit';
//! ```
//!
//! The host build pipeline owns file selection and lifecycle; this crate owns
//! the per-file transform: prefilter, import scan, library match, style
//! resolution, and text rewriting with optional source maps.
//!
//! ```
//! use style_import::{BuildConfig, LibrarySpec, StyleImport, StyleImportOptions};
//!
//! let options = StyleImportOptions::new().with_lib(
//!     LibrarySpec::new("ui-kit").with_resolve_style(|name| format!("styles/{name}.css")),
//! );
//! let plugin = StyleImport::new(options, BuildConfig::new());
//!
//! let out = plugin.transform("import { MyButton } from 'ui-kit';", "src/App.ts").unwrap();
//! assert_eq!(out.code, "import 'styles/my-button.css';\nimport { MyButton } from 'ui-kit';");
//! ```

mod case;
mod options;
mod prefilter;
mod resolver;
mod rewriter;
mod scanner;
mod sourcemap_builder;
mod transform;

pub use case::NameCase;
pub use options::{BuildCommand, BuildConfig, LibrarySpec, StyleImportOptions, StyleResolver};
pub use prefilter::need_transform;
pub use transform::{StyleImport, TransformOutput};

pub use oxc_sourcemap::SourceMap;
