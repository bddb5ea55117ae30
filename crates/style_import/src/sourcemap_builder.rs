//! Position-accurate source map construction for the rewriter.
//!
//! Wraps `oxc_sourcemap::SourceMapBuilder` with the bookkeeping the rewriter
//! needs: a line-start table for the original file, incremental tracking of
//! the generated position as output is appended, and UTF-16 column counting
//! (the source map spec counts columns in UTF-16 code units).
//!
//! Mappings are added *before* the text they describe is appended: call
//! [`SourcemapBuilder::add_mapping`] with the output produced so far and the
//! original byte offset the next chunk comes from. Injected text gets no
//! mappings, so it maps to nothing, like any other generated code.

use oxc_sourcemap::SourceMap;

pub struct SourcemapBuilder<'a> {
    source_id: u32,
    source_text: &'a str,
    /// Byte offset of the first character of each original line.
    line_starts: Vec<u32>,
    inner: oxc_sourcemap::SourceMapBuilder,
    /// Output length at the last generated-position update.
    last_update: usize,
    generated_line: u32,
    generated_column: u32,
}

impl<'a> SourcemapBuilder<'a> {
    pub fn new(source_name: &str, source_text: &'a str) -> Self {
        let mut inner = oxc_sourcemap::SourceMapBuilder::default();
        let source_id = inner.set_source_and_content(source_name, source_text);
        Self {
            source_id,
            source_text,
            line_starts: line_starts(source_text),
            inner,
            last_update: 0,
            generated_line: 0,
            generated_column: 0,
        }
    }

    pub fn into_sourcemap(self) -> SourceMap {
        self.inner.into_sourcemap()
    }

    /// Record that the output appended after `output` continues at
    /// `original_offset` in the source.
    pub fn add_mapping(&mut self, output: &str, original_offset: u32) {
        self.advance_generated(output);
        let (line, column) = self.original_position(original_offset);
        self.inner.add_token(
            self.generated_line,
            self.generated_column,
            line,
            column,
            Some(self.source_id),
            None,
        );
    }

    /// Convert a byte offset in the source to 0-indexed (line, UTF-16 column).
    fn original_position(&self, byte_offset: u32) -> (u32, u32) {
        let byte_offset = byte_offset.min(u32::try_from(self.source_text.len()).unwrap_or(u32::MAX));
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let start = self.line_starts[line] as usize;
        let column = utf16_len(&self.source_text[start..byte_offset as usize]);
        (u32::try_from(line).unwrap_or(u32::MAX), column)
    }

    /// Advance the generated (line, column) over the bytes appended to the
    /// output since the last call.
    fn advance_generated(&mut self, output: &str) {
        let new_text = &output[self.last_update.min(output.len())..];
        self.last_update = output.len();

        if let Some(last_newline) = new_text.rfind('\n') {
            let newlines = new_text.bytes().filter(|&b| b == b'\n').count();
            self.generated_line += u32::try_from(newlines).unwrap_or(u32::MAX);
            self.generated_column = utf16_len(&new_text[last_newline + 1..]);
        } else {
            self.generated_column += utf16_len(new_text);
        }
    }
}

fn line_starts(source: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
        }
    }
    starts
}

/// Length of a chunk in UTF-16 code units, with an ASCII fast path.
fn utf16_len(chunk: &str) -> u32 {
    let len = if chunk.is_ascii() { chunk.len() } else { chunk.encode_utf16().count() };
    u32::try_from(len).unwrap_or(u32::MAX)
}
