//! Layout surfaces: the place text is laid out to be measured.
//!
//! A surface plays the role of an offscreen layout node. It flows a text
//! block into a fixed width and reports the container rectangle and one
//! client rectangle per line fragment, in its own coordinate space, and it
//! answers which character of a single-line run sits under a point.
//! Every call overwrites whatever the surface computed before.

mod font;
mod monospace;

pub use font::FontSurface;
pub use monospace::MonospaceSurface;

use crate::layout::{FlowLine, Point, Rect, TextAlign};
use crate::quirks::QuirkProfile;

/// Font parameters of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStyle<'a> {
    /// Font size in pixels.
    pub font_size: f32,
    pub font_family: &'a str,
}

/// A block of text to flow into `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub style: RunStyle<'a>,
    /// Wrap width in pixels.
    pub width: f32,
    pub text_align: TextAlign,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

/// Geometry read back from a surface after laying out a block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceLayout {
    /// Bounding rectangle of the block container.
    pub container: Rect,
    /// Client rectangles of the inline content, in layout order.
    pub client_rects: Vec<Rect>,
}

/// Measurement provider for text boxes.
pub trait LayoutSurface {
    /// Lay `block` out and return its geometry.
    fn layout(&mut self, block: &TextBlock<'_>) -> SurfaceLayout;

    /// Index (in chars) of the character of `run` under `point` when the
    /// run sits unwrapped on one line starting at x = 0.
    fn char_index_at(&mut self, run: &str, style: &RunStyle<'_>, point: Point) -> Option<usize>;

    /// Engine family whose behavior this surface reproduces.
    fn quirks(&self) -> QuirkProfile;
}

impl<S: LayoutSurface + ?Sized> LayoutSurface for &mut S {
    fn layout(&mut self, block: &TextBlock<'_>) -> SurfaceLayout {
        (**self).layout(block)
    }

    fn char_index_at(&mut self, run: &str, style: &RunStyle<'_>, point: Point) -> Option<usize> {
        (**self).char_index_at(run, style, point)
    }

    fn quirks(&self) -> QuirkProfile {
        (**self).quirks()
    }
}

impl<S: LayoutSurface + ?Sized> LayoutSurface for Box<S> {
    fn layout(&mut self, block: &TextBlock<'_>) -> SurfaceLayout {
        (**self).layout(block)
    }

    fn char_index_at(&mut self, run: &str, style: &RunStyle<'_>, point: Point) -> Option<usize> {
        (**self).char_index_at(run, style, point)
    }

    fn quirks(&self) -> QuirkProfile {
        (**self).quirks()
    }
}

/// Vertical metrics of the lines a surface produces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineGeometry {
    /// Distance between consecutive line tops.
    pub line_px: f32,
    /// Height of the inline content box (ascent + descent).
    pub content_px: f32,
}

impl LineGeometry {
    fn half_leading(&self) -> f32 {
        (self.line_px - self.content_px) * 0.5
    }
}

/// Turn flowed lines into surface rectangles.
///
/// An empty text or a non-positive width produces an empty container.
pub(crate) fn place_lines(
    block: &TextBlock<'_>,
    lines: &[FlowLine],
    geometry: LineGeometry,
    origin: Point,
    quirks: QuirkProfile,
) -> SurfaceLayout {
    if block.text.is_empty() || block.width <= 0.0 {
        return SurfaceLayout {
            container: Rect::from_origin(origin, block.width.max(0.0), 0.0),
            client_rects: Vec::new(),
        };
    }

    let hard_lines = lines.last().map_or(0, |l| l.hard_line + 1);
    let mut client_rects = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let width = if quirks.rect_covers_trailing_whitespace() {
            line.width
        } else {
            line.visible_width()
        };
        let left = origin.x + block.text_align.offset(block.width, width);
        let top = origin.y + row as f32 * geometry.line_px + geometry.half_leading();
        let bottom = top + geometry.content_px;
        client_rects.push(Rect::new(left, top, left + width, bottom));

        let closes_hard_line = line.ends_hard_line && line.hard_line + 1 < hard_lines;
        if quirks.emits_break_rects() && closes_hard_line && !line.is_empty() {
            client_rects.push(Rect::new(left + width, top, left + width, bottom));
        }
    }

    SurfaceLayout {
        container: Rect::from_origin(origin, block.width, lines.len() as f32 * geometry.line_px),
        client_rects,
    }
}

/// Find the char whose advance cell `[pen, pen + advance)` contains `x`.
///
/// Zero-advance chars following the hit (the tail of a ligature or the
/// combining marks of a cluster) share its cell, so the last of them is
/// returned and a split after the index never breaks the cluster.
pub(crate) fn char_cell_at(advances: &[f32], x: f32) -> Option<usize> {
    if x < 0.0 {
        return None;
    }
    let mut pen = 0.0f32;
    for (i, advance) in advances.iter().enumerate() {
        if x >= pen && x < pen + advance {
            let tail = advances[i + 1..]
                .iter()
                .take_while(|&&next| next == 0.0)
                .count();
            return Some(i + tail);
        }
        pen += advance;
    }
    None
}
