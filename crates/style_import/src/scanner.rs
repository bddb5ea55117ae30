//! Import statement scanning.
//!
//! Parses the file once and collects every static value import in a single
//! pass over the top-level statements. Bound identifiers are read from the
//! `imported` side of named specifiers, so aliases are already resolved to the
//! original exported names (`import { A as B }` binds `A`); default and
//! namespace imports contribute no names, matching the recovery contract of
//! the original import-to-export rescan trick.
//!
//! Parsing failure is never fatal: a file the parser panics on is logged and
//! reported as containing zero imports, so it passes through untransformed.

use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclarationSpecifier, ImportOrExportKind, Statement};
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};

/// One static import statement found in a file.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    /// Byte range of the whole statement, `import` keyword through specifier.
    pub statement_span: Span,
    /// Byte range of the quoted module specifier.
    pub source_span: Span,
    /// The cooked specifier text, without quotes.
    pub specifier: String,
    /// Original (pre-alias) names bound by named import specifiers,
    /// in source order. Type-only specifiers are excluded.
    pub bindings: Vec<String>,
}

/// Scan a file's static imports.
///
/// The source type is derived from the file id's extension, falling back to
/// TSX for unknown extensions so that as many files as possible scan.
pub fn scan_imports(code: &str, id: &str) -> Vec<ImportRecord> {
    let source_type = SourceType::from_path(id).unwrap_or_else(|_| SourceType::tsx());
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, source_type).parse();

    if ret.panicked {
        let reasons: Vec<String> = ret.diagnostics.iter().map(|d| format!("{d}")).collect();
        log::debug!("import scan failed for {id}: {}", reasons.join("; "));
        return Vec::new();
    }

    let mut records = Vec::new();
    for stmt in &ret.program.body {
        let Statement::ImportDeclaration(decl) = stmt else {
            continue;
        };
        // `import type { ... }` binds no runtime value.
        if matches!(decl.import_kind, ImportOrExportKind::Type) {
            continue;
        }

        let bindings = decl
            .specifiers
            .as_ref()
            .map(|specifiers| {
                specifiers
                    .iter()
                    .filter_map(|specifier| match specifier {
                        ImportDeclarationSpecifier::ImportSpecifier(named)
                            if !matches!(named.import_kind, ImportOrExportKind::Type) =>
                        {
                            Some(named.imported.name().as_str().to_string())
                        }
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        records.push(ImportRecord {
            statement_span: decl.span,
            source_span: decl.source.span,
            specifier: decl.source.value.as_str().to_string(),
            bindings,
        });
    }
    log::debug!("scanned {} import(s) in {id}", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_named_bindings() {
        let records = scan_imports("import { A, B } from 'lib';", "file.ts");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].specifier, "lib");
        assert_eq!(records[0].bindings, ["A", "B"]);
    }

    #[test]
    fn aliases_resolve_to_original_names() {
        let records = scan_imports("import { A as Z, C } from 'lib';", "file.ts");
        assert_eq!(records[0].bindings, ["A", "C"]);
    }

    #[test]
    fn default_and_namespace_imports_bind_nothing() {
        let records = scan_imports("import X from 'lib';\nimport * as ns from 'lib2';", "file.ts");
        assert_eq!(records.len(), 2);
        assert!(records[0].bindings.is_empty());
        assert!(records[1].bindings.is_empty());
    }

    #[test]
    fn type_only_imports_are_skipped() {
        let records =
            scan_imports("import type { T } from 'lib';\nimport { type U, V } from 'lib';", "file.ts");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bindings, ["V"]);
    }

    #[test]
    fn spans_cover_statement_and_specifier() {
        let code = "import { A } from 'lib';";
        let records = scan_imports(code, "file.ts");
        let stmt = &code[records[0].statement_span.start as usize..records[0].statement_span.end as usize];
        assert_eq!(stmt, "import { A } from 'lib';");
        let source = &code[records[0].source_span.start as usize..records[0].source_span.end as usize];
        assert_eq!(source, "'lib'");
    }

    #[test]
    fn malformed_source_yields_no_records() {
        assert!(scan_imports("import {", "file.ts").is_empty());
    }

    #[test]
    fn unknown_extension_falls_back_to_tsx() {
        let records = scan_imports("import { A } from 'lib';", "file.weird");
        assert_eq!(records.len(), 1);
    }
}
