use rune_config::TextBoxConfig;
use rune_text::{TextAlign, TextBlockStyle};

/// Vertical placement of the text inside a box with a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Properties of a text box element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    pub font_family: String,
    pub vertical_align: VerticalAlign,
    /// Multiple of the font size.
    pub line_height: f32,
    pub text_align: TextAlign,
    /// CSS color of the glyphs.
    pub fill: String,
    pub padding: f32,
    pub editable: bool,
    pub x: f32,
    pub y: f32,
    pub width: Option<f32>,
    /// Fixed height; the box grows with its text when unset.
    pub height: Option<f32>,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 12.0,
            font_family: "Verdana".to_string(),
            vertical_align: VerticalAlign::Top,
            line_height: 1.5,
            text_align: TextAlign::Left,
            fill: "black".to_string(),
            padding: 2.0,
            editable: true,
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
        }
    }
}

impl TextProps {
    /// Defaults with the typography of the `[textbox]` config section.
    pub fn from_config(config: &TextBoxConfig) -> Self {
        Self {
            font_size: config.font_size,
            font_family: config.font_family.clone(),
            line_height: config.line_height,
            padding: config.padding,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Measurement inputs of these props.
    pub fn block_style(&self) -> TextBlockStyle<'_> {
        TextBlockStyle {
            text: &self.text,
            font_size: self.font_size,
            font_family: &self.font_family,
            width: self.width,
            text_align: self.text_align,
            line_height: self.line_height,
            padding: self.padding,
        }
    }

    /// Apply a change; returns whether the value differed.
    pub fn apply(&mut self, change: &PropertyChange) -> bool {
        fn set<T: PartialEq + Clone>(slot: &mut T, value: &T) -> bool {
            if slot == value {
                return false;
            }
            *slot = value.clone();
            true
        }

        match change {
            PropertyChange::Text(v) => set(&mut self.text, v),
            PropertyChange::FontSize(v) => set(&mut self.font_size, v),
            PropertyChange::FontFamily(v) => set(&mut self.font_family, v),
            PropertyChange::VerticalAlign(v) => set(&mut self.vertical_align, v),
            PropertyChange::LineHeight(v) => set(&mut self.line_height, v),
            PropertyChange::TextAlign(v) => set(&mut self.text_align, v),
            PropertyChange::Fill(v) => set(&mut self.fill, v),
            PropertyChange::Padding(v) => set(&mut self.padding, v),
            PropertyChange::Editable(v) => set(&mut self.editable, v),
            PropertyChange::X(v) => set(&mut self.x, v),
            PropertyChange::Y(v) => set(&mut self.y, v),
            PropertyChange::Width(v) => set(&mut self.width, v),
            PropertyChange::Height(v) => set(&mut self.height, v),
        }
    }
}

/// A change to one property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyChange {
    Text(String),
    FontSize(f32),
    FontFamily(String),
    VerticalAlign(VerticalAlign),
    LineHeight(f32),
    TextAlign(TextAlign),
    Fill(String),
    Padding(f32),
    Editable(bool),
    X(f32),
    Y(f32),
    Width(Option<f32>),
    Height(Option<f32>),
}

impl PropertyChange {
    /// Property name as used by the host's forms and change log.
    pub fn key(&self) -> &'static str {
        match self {
            PropertyChange::Text(_) => "text",
            PropertyChange::FontSize(_) => "fontSize",
            PropertyChange::FontFamily(_) => "fontFamily",
            PropertyChange::VerticalAlign(_) => "verticalAlign",
            PropertyChange::LineHeight(_) => "lineHeight",
            PropertyChange::TextAlign(_) => "textAlign",
            PropertyChange::Fill(_) => "fill",
            PropertyChange::Padding(_) => "padding",
            PropertyChange::Editable(_) => "editable",
            PropertyChange::X(_) => "x",
            PropertyChange::Y(_) => "y",
            PropertyChange::Width(_) => "width",
            PropertyChange::Height(_) => "height",
        }
    }

    /// Changes to these properties invalidate the measurement.
    pub fn affects_wrapping(&self) -> bool {
        matches!(
            self,
            PropertyChange::Text(_)
                | PropertyChange::FontSize(_)
                | PropertyChange::FontFamily(_)
                | PropertyChange::VerticalAlign(_)
                | PropertyChange::LineHeight(_)
                | PropertyChange::TextAlign(_)
                | PropertyChange::Width(_)
                | PropertyChange::Padding(_)
        )
    }
}
