//! Line flow for `white-space: pre-wrap; word-break: break-word` blocks.
//!
//! Hard lines are split on `\n` (a trailing `\r` is ignored). Each hard
//! line is then broken greedily at UAX-14 opportunities; whitespace before
//! a soft break hangs and never forces a break. A word wider than the block
//! falls back to grapheme boundaries, emitting at least one grapheme per
//! line.

use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::layout::line_breaker::break_offsets;

/// One visual line produced by [`flow_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLine {
    /// Index of the hard line this visual line belongs to.
    pub hard_line: usize,
    /// Byte range in the full source text, newline excluded.
    pub range: Range<usize>,
    /// Advance width of the whole range.
    pub width: f32,
    /// Width of whitespace hanging past a soft break (0 at a hard end).
    pub hanging: f32,
    /// Whether this is the last visual line of its hard line.
    pub ends_hard_line: bool,
}

impl FlowLine {
    /// Width without the hanging whitespace.
    pub fn visible_width(&self) -> f32 {
        self.width - self.hanging
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Flow `text` into lines no wider than `max_width`.
///
/// `advances` returns the per-char advances of one hard line; it is called
/// once per non-empty hard line.
pub fn flow_text<F>(text: &str, max_width: f32, mut advances: F) -> Vec<FlowLine>
where
    F: FnMut(&str) -> Vec<f32>,
{
    let mut out = Vec::new();
    let mut line_start = 0usize;

    for (hard_line, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let base = line_start;
        line_start += raw.len() + 1;

        if line.is_empty() {
            out.push(FlowLine {
                hard_line,
                range: base..base,
                width: 0.0,
                hanging: 0.0,
                ends_hard_line: true,
            });
            continue;
        }

        let metrics = LineMetrics::new(line, advances(line));
        let breaks = break_offsets(line);

        let mut start = 0usize;
        while start < line.len() {
            let mut end = None;
            for &offset in breaks.iter().filter(|&&b| b > start) {
                if metrics.width(start, metrics.trim_end(start, offset)) <= max_width {
                    end = Some(offset);
                } else {
                    break;
                }
            }
            let end = end.unwrap_or_else(|| metrics.grapheme_fallback(line, start, max_width));

            let ends_hard_line = end >= line.len();
            let width = metrics.width(start, end);
            let hanging = if ends_hard_line {
                0.0
            } else {
                width - metrics.width(start, metrics.trim_end(start, end))
            };
            out.push(FlowLine {
                hard_line,
                range: base + start..base + end,
                width,
                hanging,
                ends_hard_line,
            });
            start = end;
        }
    }

    out
}

/// Char offsets and prefix widths of one hard line.
struct LineMetrics {
    /// Byte offset of every char start, plus the line length.
    bytes: Vec<usize>,
    /// `prefix[i]` is the advance of the first `i` chars.
    prefix: Vec<f32>,
    whitespace: Vec<bool>,
}

impl LineMetrics {
    fn new(line: &str, advances: Vec<f32>) -> Self {
        let mut bytes = Vec::with_capacity(advances.len() + 1);
        let mut prefix = Vec::with_capacity(advances.len() + 1);
        let mut whitespace = Vec::with_capacity(advances.len());
        let mut pen = 0.0f32;
        prefix.push(pen);
        for (i, (byte, ch)) in line.char_indices().enumerate() {
            bytes.push(byte);
            whitespace.push(ch.is_whitespace());
            pen += advances.get(i).copied().unwrap_or(0.0);
            prefix.push(pen);
        }
        bytes.push(line.len());
        Self {
            bytes,
            prefix,
            whitespace,
        }
    }

    fn char_at(&self, byte: usize) -> usize {
        match self.bytes.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }

    fn width(&self, start: usize, end: usize) -> f32 {
        self.prefix[self.char_at(end)] - self.prefix[self.char_at(start)]
    }

    /// End of `start..end` with trailing whitespace removed.
    fn trim_end(&self, start: usize, end: usize) -> usize {
        let first = self.char_at(start);
        let mut last = self.char_at(end);
        while last > first && self.whitespace[last - 1] {
            last -= 1;
        }
        self.bytes[last]
    }

    fn grapheme_fallback(&self, line: &str, start: usize, max_width: f32) -> usize {
        let mut best = None;
        let mut first = None;
        for (idx, g) in line[start..].grapheme_indices(true) {
            let end = start + idx + g.len();
            first.get_or_insert(end);
            if self.width(start, end) <= max_width {
                best = Some(end);
            } else {
                break;
            }
        }
        best.or(first).unwrap_or(line.len())
    }
}
