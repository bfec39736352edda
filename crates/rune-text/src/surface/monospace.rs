use crate::layout::{Point, flow_text};
use crate::quirks::QuirkProfile;

use super::{
    LayoutSurface, LineGeometry, RunStyle, SurfaceLayout, TextBlock, char_cell_at, place_lines,
};

/// Deterministic surface where every char advances by the same fraction of
/// the font size.
///
/// Useful for tests and headless previews where no font is available.
#[derive(Debug, Clone)]
pub struct MonospaceSurface {
    /// Advance of one char, as a multiple of the font size.
    pub advance_ratio: f32,
    /// Content box height (ascent + descent), as a multiple of the font size.
    pub content_ratio: f32,
    /// Where the container sits in surface coordinates.
    pub origin: Point,
    pub quirks: QuirkProfile,
}

impl Default for MonospaceSurface {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            content_ratio: 1.15,
            origin: Point::zero(),
            quirks: QuirkProfile::default(),
        }
    }
}

impl MonospaceSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quirks(mut self, quirks: QuirkProfile) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_ratios(mut self, advance_ratio: f32, content_ratio: f32) -> Self {
        self.advance_ratio = advance_ratio;
        self.content_ratio = content_ratio;
        self
    }

    /// Advance of a single char at `font_size`.
    pub fn advance(&self, font_size: f32) -> f32 {
        font_size * self.advance_ratio
    }

    fn advances(&self, run: &str, font_size: f32) -> Vec<f32> {
        vec![self.advance(font_size); run.chars().count()]
    }
}

impl LayoutSurface for MonospaceSurface {
    fn layout(&mut self, block: &TextBlock<'_>) -> SurfaceLayout {
        let font_size = block.style.font_size;
        let lines = flow_text(block.text, block.width, |line| self.advances(line, font_size));
        let geometry = LineGeometry {
            line_px: font_size * block.line_height,
            content_px: font_size * self.content_ratio,
        };
        place_lines(block, &lines, geometry, self.origin, self.quirks)
    }

    fn char_index_at(&mut self, run: &str, style: &RunStyle<'_>, point: Point) -> Option<usize> {
        char_cell_at(&self.advances(run, style.font_size), point.x)
    }

    fn quirks(&self) -> QuirkProfile {
        self.quirks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextAlign;

    const STYLE: RunStyle<'static> = RunStyle {
        font_size: 10.0,
        font_family: "Verdana",
    };

    #[test]
    fn probe_hits_char_cells() {
        let mut surface = MonospaceSurface::new().with_ratios(1.0, 1.0);
        assert_eq!(surface.char_index_at("Hello", &STYLE, Point::new(49.0, 5.0)), Some(4));
        assert_eq!(surface.char_index_at("Hello", &STYLE, Point::new(0.0, 5.0)), Some(0));
        assert_eq!(surface.char_index_at("Hello", &STYLE, Point::new(50.0, 5.0)), None);
        assert_eq!(surface.char_index_at("", &STYLE, Point::new(0.0, 5.0)), None);
    }

    #[test]
    fn layout_is_offset_by_origin() {
        let mut surface = MonospaceSurface::new()
            .with_ratios(1.0, 1.0)
            .with_origin(Point::new(30.0, 40.0));
        let block = TextBlock {
            text: "ab",
            style: STYLE,
            width: 100.0,
            text_align: TextAlign::Left,
            line_height: 1.5,
        };
        let layout = surface.layout(&block);
        assert_eq!(layout.container.left, 30.0);
        assert_eq!(layout.container.top, 40.0);
        assert_eq!(layout.container.height(), 15.0);
        assert_eq!(layout.client_rects[0].left, 30.0);
        assert_eq!(layout.client_rects[0].top, 42.5);
        assert_eq!(layout.client_rects[0].width(), 20.0);
    }
}
