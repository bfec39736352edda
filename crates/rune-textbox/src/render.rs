//! Output of a text box for the canvas painter and the host's UI.

use rune_text::{LineRect, TextAlign};

use crate::props::VerticalAlign;

/// Fill used for glyphs while the inline editor paints the text.
pub const EDITING_FILL: &str = "transparent";
/// Fill of the text inside the inline editor.
pub const EDITOR_FILL: &str = "blue";

/// White-space handling requested from the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiteSpace {
    Normal,
    PreWrap,
}

/// One painted line of text, in group-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine {
    pub text: String,
    pub x: f32,
    /// Top of the line; glyphs sit one em below.
    pub y: f32,
    pub font_family: String,
    pub font_size: f32,
    pub fill: String,
    pub white_space: WhiteSpace,
}

/// Everything needed to paint a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRender {
    /// Transparent hit area (width, height) catching pointer events.
    pub hit_size: (f32, f32),
    /// Measured line rects, drawn only when line debugging is on.
    pub debug_rects: Vec<LineRect>,
    /// Translation of the line group inside the element.
    pub translate: (f32, f32),
    pub lines: Vec<RenderedLine>,
}

/// Inputs for the inline editor widget, in element-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorRequest {
    pub text: String,
    pub font_size: f32,
    pub font_family: String,
    pub vertical_align: VerticalAlign,
    pub line_height: f32,
    pub text_align: TextAlign,
    pub padding: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: &'static str,
}

/// Kind of input the property panel shows for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// One property panel entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub key: &'static str,
    pub title: &'static str,
}

/// Fields the property panel offers for text boxes.
pub const FORM: [FormField; 3] = [
    FormField {
        kind: FieldKind::Text,
        key: "text",
        title: "Text",
    },
    FormField {
        kind: FieldKind::Number,
        key: "fontSize",
        title: "Font Size",
    },
    FormField {
        kind: FieldKind::Number,
        key: "lineHeight",
        title: "Line Height",
    },
];
