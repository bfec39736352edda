pub mod flow;
pub mod geometry;
pub mod line_breaker;

pub use flow::{FlowLine, flow_text};
pub use geometry::{Point, Rect};
pub use line_breaker::break_offsets;

/// Horizontal alignment of lines within a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Offset of a line of `line_width` inside a block of `block_width`.
    pub fn offset(self, block_width: f32, line_width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => (block_width - line_width) * 0.5,
            TextAlign::Right => block_width - line_width,
        }
    }
}
