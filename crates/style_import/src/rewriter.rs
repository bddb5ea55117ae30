//! Text splicing over the original source.
//!
//! Collects the edits for one file — prepended style blocks and statement
//! overwrites — and applies them in a single pass. Unrelated source bytes are
//! preserved exactly. When a source map is requested, every original segment
//! is mapped back line-accurately; injected and replacement text maps to the
//! position it displaced, or to nothing when prepended.

use oxc_sourcemap::SourceMap;
use oxc_span::Span;

use crate::sourcemap_builder::SourcemapBuilder;

/// Edit accumulator for one file.
pub struct SourceEditor<'a> {
    source: &'a str,
    intro: String,
    /// Disjoint byte ranges to replace, in any order of registration.
    overwrites: Vec<(Span, String)>,
}

impl<'a> SourceEditor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, intro: String::new(), overwrites: Vec::new() }
    }

    /// Insert text ahead of everything prepended so far.
    ///
    /// Repeated calls stack in reverse: the last prepended text ends up first
    /// in the output.
    pub fn prepend(&mut self, text: &str) {
        let mut intro = String::with_capacity(text.len() + self.intro.len());
        intro.push_str(text);
        intro.push_str(&self.intro);
        self.intro = intro;
    }

    /// Replace a byte range of the source. Ranges must not overlap.
    pub fn overwrite(&mut self, span: Span, replacement: String) {
        self.overwrites.push((span, replacement));
    }

    pub fn has_edits(&self) -> bool {
        !self.intro.is_empty() || !self.overwrites.is_empty()
    }

    /// Apply all edits. With `map_source` set, also build a source map naming
    /// that file.
    pub fn finish(mut self, map_source: Option<&str>) -> (String, Option<SourceMap>) {
        self.overwrites.sort_by_key(|(span, _)| span.start);
        debug_assert!(
            self.overwrites.windows(2).all(|w| w[0].0.end <= w[1].0.start),
            "overwrite ranges overlap"
        );

        let mut out = String::with_capacity(self.source.len() + self.intro.len());
        let mut builder = map_source.map(|name| SourcemapBuilder::new(name, self.source));

        out.push_str(&self.intro);

        let mut cursor = 0usize;
        for (span, replacement) in &self.overwrites {
            append_original(self.source, &mut out, builder.as_mut(), cursor, span.start as usize);
            if let Some(b) = builder.as_mut() {
                b.add_mapping(&out, span.start);
            }
            out.push_str(replacement);
            cursor = span.end as usize;
        }
        append_original(self.source, &mut out, builder.as_mut(), cursor, self.source.len());

        (out, builder.map(SourcemapBuilder::into_sourcemap))
    }
}

/// Copy `source[from..to]` to the output, mapping the start of every copied
/// line back to its original position.
fn append_original(
    source: &str,
    out: &mut String,
    mut builder: Option<&mut SourcemapBuilder<'_>>,
    from: usize,
    to: usize,
) {
    if from >= to {
        return;
    }
    let segment = &source[from..to];
    match builder.as_mut() {
        None => out.push_str(segment),
        Some(b) => {
            let mut offset = from;
            for line in segment.split_inclusive('\n') {
                b.add_mapping(out, u32::try_from(offset).unwrap_or(u32::MAX));
                out.push_str(line);
                offset += line.len();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_edits_returns_source_unchanged() {
        let editor = SourceEditor::new("const x = 1;\n");
        assert!(!editor.has_edits());
        let (code, map) = editor.finish(None);
        assert_eq!(code, "const x = 1;\n");
        assert!(map.is_none());
    }

    #[test]
    fn prepends_stack_in_reverse() {
        let mut editor = SourceEditor::new("body\n");
        editor.prepend("first\n");
        editor.prepend("second\n");
        let (code, _) = editor.finish(None);
        assert_eq!(code, "second\nfirst\nbody\n");
    }

    #[test]
    fn overwrite_replaces_only_its_range() {
        let source = "aaa bbb ccc";
        let mut editor = SourceEditor::new(source);
        editor.overwrite(Span::new(4, 7), "XXX".to_string());
        let (code, _) = editor.finish(None);
        assert_eq!(code, "aaa XXX ccc");
    }

    #[test]
    fn overwrites_apply_in_offset_order() {
        let source = "one two three";
        let mut editor = SourceEditor::new(source);
        editor.overwrite(Span::new(8, 13), "3".to_string());
        editor.overwrite(Span::new(0, 3), "1".to_string());
        let (code, _) = editor.finish(None);
        assert_eq!(code, "1 two 3");
    }

    #[test]
    fn map_tracks_shifted_original_lines() {
        let source = "line0;\nline1;\n";
        let mut editor = SourceEditor::new(source);
        editor.prepend("injected();\n");
        let (code, map) = editor.finish(Some("file.ts"));
        assert_eq!(code, "injected();\nline0;\nline1;\n");

        let map = map.expect("map requested");
        let lookup = map.generate_lookup_table();
        // Output line 1 is original line 0; output line 2 is original line 1.
        let token = map.lookup_token(&lookup, 1, 0).expect("token for line 1");
        assert_eq!((token.get_src_line(), token.get_src_col()), (0, 0));
        let token = map.lookup_token(&lookup, 2, 0).expect("token for line 2");
        assert_eq!((token.get_src_line(), token.get_src_col()), (1, 0));
    }

    #[test]
    fn map_records_source_content() {
        let source = "const x = 1;\n";
        let mut editor = SourceEditor::new(source);
        editor.prepend("import 'a.css';\n");
        let (_, map) = editor.finish(Some("file.ts"));
        let map = map.expect("map requested");
        assert_eq!(map.get_source(0).map(|s| &**s), Some("file.ts"));
        assert_eq!(map.get_source_content(0).map(|s| &**s), Some(source));
    }
}
