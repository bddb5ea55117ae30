//! Cheap textual pre-check before any parsing happens.

use crate::options::LibrarySpec;

/// Whether the raw source can possibly contain an import of a registered
/// library.
///
/// Tests for the library name as a single- or double-quoted substring anywhere
/// in the text. This is a heuristic: a quoted string outside an import can
/// produce a false positive (the scan then finds nothing), but a genuine
/// matching import is always quoted, so a false negative is impossible.
pub fn need_transform(code: &str, libs: &[LibrarySpec]) -> bool {
    libs.iter().any(|lib| {
        if lib.library_name.is_empty() {
            return false;
        }
        code.contains(&format!("'{}'", lib.library_name))
            || code.contains(&format!("\"{}\"", lib.library_name))
    })
}
