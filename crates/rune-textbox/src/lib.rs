//! rune-textbox: the auto-wrapping, editable text box element.
//!
//! The element measures its text against a [`rune_text::LayoutSurface`],
//! keeps the wrapped lines in sync with its properties and toggles an
//! inline editor on quick clicks while selected.

pub mod edit;
pub mod element;
pub mod host;
pub mod props;
pub mod render;

pub use edit::{
    DEFAULT_PRESS_THRESHOLD, Deferred, DeferredTask, EditMode, EventResult, PressTracker,
};
pub use element::{KnobResponse, TextBoxSettings, TextElement, quirks_from_config};
pub use host::{ElementBase, ElementId, Frame, InlineEditor, Knob, SelectionHost};
pub use props::{PropertyChange, TextProps, VerticalAlign};
pub use render::{
    EDITING_FILL, EDITOR_FILL, EditorRequest, FORM, FieldKind, FormField, RenderedLine,
    TextRender, WhiteSpace,
};
