//! Seams to the scene editor the text box lives in.

use rune_text::Point;

use crate::props::PropertyChange;

/// Identifier of an element in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Selection and change tracking of the host editor.
pub trait SelectionHost {
    fn is_selected(&self, id: ElementId) -> bool;

    /// The element entered or left edit mode.
    fn selection_changed(&mut self);

    /// A triggered property change, for undo history and form refresh.
    fn property_changed(&mut self, id: ElementId, change: &PropertyChange) {
        let _ = (id, change);
    }
}

/// The in-place editor widget shown over the text while editing.
pub trait InlineEditor {
    fn activate(&mut self);
    fn deactivate(&mut self);
    /// Re-align the input region with the element after it moved.
    fn reposition(&mut self);
}

/// Resize handles of a selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Knob {
    pub const ALL: [Knob; 8] = [
        Knob::TopLeft,
        Knob::Top,
        Knob::TopRight,
        Knob::Right,
        Knob::BottomRight,
        Knob::Bottom,
        Knob::BottomLeft,
        Knob::Left,
    ];
}

impl Knob {
    /// `-1` for knobs on the left edge, `1` on the right edge, else `0`.
    pub fn horizontal(self) -> i8 {
        match self {
            Knob::TopLeft | Knob::Left | Knob::BottomLeft => -1,
            Knob::TopRight | Knob::Right | Knob::BottomRight => 1,
            Knob::Top | Knob::Bottom => 0,
        }
    }

    /// `-1` for knobs on the top edge, `1` on the bottom edge, else `0`.
    pub fn vertical(self) -> i8 {
        match self {
            Knob::TopLeft | Knob::Top | Knob::TopRight => -1,
            Knob::BottomLeft | Knob::Bottom | Knob::BottomRight => 1,
            Knob::Left | Knob::Right => 0,
        }
    }
}

/// Axis-aligned element box in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Generic box behavior shared by scene elements.
pub trait ElementBase {
    fn frame(&self) -> Frame;

    fn knobs(&self) -> Vec<Knob> {
        Knob::ALL.to_vec()
    }

    /// Position of the box after resizing it to `width` x `height`.
    ///
    /// A direction of `1` keeps the right (or bottom) edge in place, `-1`
    /// keeps the left (or top) edge.
    fn position_for_size(&self, width: f32, height: f32, dir_x: i8, dir_y: i8) -> Point {
        let frame = self.frame();
        let x = if dir_x > 0 {
            frame.x + frame.width - width
        } else {
            frame.x
        };
        let y = if dir_y > 0 {
            frame.y + frame.height - height
        } else {
            frame.y
        };
        Point::new(x, y)
    }

    /// Frame after dragging `knob` by `diff`; the opposite edges stay put.
    fn resize_with_knob(&self, knob: Knob, diff: Point) -> Frame {
        let mut frame = self.frame();
        match knob.horizontal() {
            -1 => {
                frame.x += diff.x;
                frame.width -= diff.x;
            }
            1 => frame.width += diff.x,
            _ => {}
        }
        match knob.vertical() {
            -1 => {
                frame.y += diff.y;
                frame.height -= diff.y;
            }
            1 => frame.height += diff.y,
            _ => {}
        }
        frame
    }
}

impl ElementBase for Frame {
    fn frame(&self) -> Frame {
        *self
    }
}
