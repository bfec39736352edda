//! Text box measurement.
//!
//! A [`MeasureContext`] owns the layout surface a text box is measured
//! against. Each call lays the text out afresh and normalizes the geometry
//! the surface reports into box-local coordinates: line 1 starts at y = 0
//! and the leading above the first line is removed from the height.

use crate::layout::TextAlign;
use crate::quirks::QuirkProfile;
use crate::surface::{LayoutSurface, RunStyle, TextBlock};
use crate::wrap::{WrappedLine, wrap_lines};

/// Wrap width used when a box has no width yet.
pub const DEFAULT_MEASURE_WIDTH: f32 = 10.0;

/// Geometry of one visual text line in box-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRect {
    pub left: f32,
    /// Top edge, shifted so the first line starts at 0.
    pub top: f32,
    /// Bottom edge relative to the container top.
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    /// Bottom edge of the container in surface coordinates.
    pub absolute_bottom: f32,
}

/// Snapshot of a text box measurement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    pub height: f32,
    /// Distance between the container top and the first line rect.
    pub first_line_offset: f32,
    /// Distance between the container top and the bottom of the first line.
    pub baseline: f32,
    pub rects: Vec<LineRect>,
}

impl Measurement {
    /// Nothing to wrap.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Style inputs of a measurement, as a text box stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlockStyle<'a> {
    pub text: &'a str,
    pub font_size: f32,
    pub font_family: &'a str,
    /// Box width including padding; `None` until the box has been sized.
    pub width: Option<f32>,
    pub text_align: TextAlign,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    pub padding: f32,
}

impl<'a> TextBlockStyle<'a> {
    /// Width available to the text once padding is removed.
    pub fn wrap_width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_MEASURE_WIDTH) - self.padding * 2.0
    }

    pub fn run_style(&self) -> RunStyle<'a> {
        RunStyle {
            font_size: self.font_size,
            font_family: self.font_family,
        }
    }

    fn block(&self) -> TextBlock<'a> {
        TextBlock {
            text: self.text,
            style: self.run_style(),
            width: self.wrap_width(),
            text_align: self.text_align,
            line_height: self.line_height,
        }
    }
}

/// Measurement context wrapping a layout surface.
///
/// Results are independent snapshots: the surface is overwritten by every
/// call and nothing is retained between measurements.
#[derive(Debug)]
pub struct MeasureContext<S> {
    surface: S,
}

impl<S: LayoutSurface> MeasureContext<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn quirks(&self) -> QuirkProfile {
        self.surface.quirks()
    }

    /// Measure the block and build its line rects.
    pub fn measure(&mut self, style: &TextBlockStyle<'_>) -> Measurement {
        self.measure_with(style, true)
    }

    /// Height of the block, skipping line rect construction.
    pub fn measure_height(&mut self, style: &TextBlockStyle<'_>) -> f32 {
        self.measure_with(style, false).height
    }

    /// Assign the text of `style` to the rects of `measurement`.
    pub fn wrap(&mut self, measurement: &Measurement, style: &TextBlockStyle<'_>) -> Vec<WrappedLine> {
        let quirks = self.surface.quirks();
        wrap_lines(
            &mut self.surface,
            &measurement.rects,
            style.text,
            &style.run_style(),
            quirks,
        )
    }

    fn measure_with(&mut self, style: &TextBlockStyle<'_>, with_rects: bool) -> Measurement {
        let layout = self.surface.layout(&style.block());
        let container = layout.container;
        let first = layout.client_rects.first();

        let first_line_offset = first.map_or(0.0, |r| r.top - container.top);
        let baseline = first.map_or(0.0, |r| r.bottom - container.top);
        let height = container.height() - 2.0 * first_line_offset;

        let rects = if with_rects {
            layout
                .client_rects
                .iter()
                .map(|r| LineRect {
                    left: r.left - container.left,
                    top: r.top - container.top - first_line_offset,
                    bottom: r.bottom - container.top,
                    width: r.width(),
                    height: r.height(),
                    absolute_bottom: container.bottom,
                })
                .collect()
        } else {
            Vec::new()
        };

        log::trace!(
            "measured {} line rects: height={height} first_line_offset={first_line_offset} baseline={baseline}",
            layout.client_rects.len()
        );

        Measurement {
            height,
            first_line_offset,
            baseline,
            rects,
        }
    }
}
