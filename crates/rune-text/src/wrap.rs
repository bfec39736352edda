//! Assign text to measured line rects.
//!
//! The text is split into hard lines on `\n`. Rects are walked in order;
//! for each one the surface is probed for the character just inside its
//! right edge, and everything up to that character becomes the rect's
//! fragment while the rest carries over to the next rect. How whitespace is
//! trimmed at soft breaks and when the walk moves to the next hard line
//! follow the [`QuirkProfile`].

use crate::layout::Point;
use crate::measure::LineRect;
use crate::quirks::QuirkProfile;
use crate::surface::{LayoutSurface, RunStyle};

/// Distance from a rect's right edge at which the surface is probed, as a
/// fraction of the font size.
pub const PROBE_THRESHOLD_RATIO: f32 = 0.1;

/// Text and placement of one rendered line element.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Index of the visual line the rect belongs to; break rects share the
    /// index of the line they end.
    pub visual_line: usize,
}

/// Produce one [`WrappedLine`] per rect. No rects, no lines.
pub fn wrap_lines<S>(
    surface: &mut S,
    rects: &[LineRect],
    text: &str,
    style: &RunStyle<'_>,
    quirks: QuirkProfile,
) -> Vec<WrappedLine>
where
    S: LayoutSurface + ?Sized,
{
    let Some(first) = rects.first() else {
        return Vec::new();
    };

    let hard_lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let threshold = style.font_size * PROBE_THRESHOLD_RATIO;
    let trim = quirks.soft_break_trim();

    let mut hard_index = 0usize;
    let mut last_hard_index = hard_index;
    let mut current = hard_lines.first().copied();
    let mut last_top = first.top;
    let mut previous = "";
    let mut visual_line = 0usize;
    let mut out = Vec::with_capacity(rects.len());

    for rect in rects {
        let starts_visual_line = rect.top != last_top;
        if starts_visual_line {
            visual_line += 1;
        }

        // Soft break: same hard line, new visual line.
        if starts_visual_line && last_hard_index == hard_index && trim.applies(previous) {
            current = current.map(str::trim_start);
        }

        let probe = Point::new(
            if rect.width > threshold {
                rect.width - threshold
            } else {
                rect.width
            },
            rect.height * 0.5,
        );
        last_hard_index = hard_index;

        let hit = current.and_then(|line| surface.char_index_at(line, style, probe));
        let fragment = match (current, hit) {
            (Some(line), Some(index)) => {
                let split = byte_after_char(line, index);
                current = Some(&line[split..]);
                &line[..split]
            }
            (Some(line), None) => line,
            (None, _) => "",
        };

        out.push(WrappedLine {
            text: fragment.to_string(),
            x: rect.left,
            y: rect.top,
            visual_line,
        });

        let exhausted = current.is_none_or(str::is_empty);
        if hit.is_none() || (quirks.advance_on_exhausted_line() && exhausted) {
            hard_index += 1;
            current = hard_lines.get(hard_index).copied();
        }

        last_top = rect.top;
        previous = fragment;
    }

    log::trace!("wrapped {} rects over {} hard lines", rects.len(), hard_lines.len());
    out
}

/// Byte offset just past the char at `index`, or the end of `line`.
fn byte_after_char(line: &str, index: usize) -> usize {
    line.char_indices()
        .nth(index + 1)
        .map_or(line.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{SurfaceLayout, TextBlock};

    struct NoProbe;

    impl LayoutSurface for NoProbe {
        fn layout(&mut self, _block: &TextBlock<'_>) -> SurfaceLayout {
            SurfaceLayout::default()
        }

        fn char_index_at(&mut self, _run: &str, _style: &RunStyle<'_>, _point: Point) -> Option<usize> {
            None
        }

        fn quirks(&self) -> QuirkProfile {
            QuirkProfile::Blink
        }
    }

    const STYLE: RunStyle<'static> = RunStyle {
        font_size: 10.0,
        font_family: "Verdana",
    };

    fn rect(top: f32, width: f32) -> LineRect {
        LineRect {
            left: 0.0,
            top,
            bottom: top + 10.0,
            width,
            height: 10.0,
            absolute_bottom: 100.0,
        }
    }

    #[test]
    fn no_rects_no_lines() {
        assert!(wrap_lines(&mut NoProbe, &[], "text", &STYLE, QuirkProfile::Gecko).is_empty());
    }

    #[test]
    fn probe_misses_advance_through_hard_lines() {
        let rects = [rect(0.0, 10.0), rect(15.0, 10.0), rect(30.0, 10.0)];
        let lines = wrap_lines(&mut NoProbe, &rects, "one\ntwo", &STYLE, QuirkProfile::Blink);
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", ""]);
        assert_eq!(
            lines.iter().map(|l| l.visual_line).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn char_split_respects_multibyte_text() {
        assert_eq!(byte_after_char("héllo", 1), 3);
        assert_eq!(byte_after_char("héllo", 4), 6);
        assert_eq!(byte_after_char("héllo", 9), 6);
    }
}
