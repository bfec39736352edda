use std::time::Duration;

use rune_config::TextBoxConfig;
use rune_text::{
    LayoutSurface, MeasureContext, Measurement, Point, QuirkProfile, Rect, WrappedLine,
    measure::DEFAULT_MEASURE_WIDTH,
};

use crate::edit::{
    DEFAULT_PRESS_THRESHOLD, Deferred, DeferredTask, EditMode, EventResult, PressTracker,
};
use crate::host::{ElementBase, ElementId, Frame, InlineEditor, Knob, SelectionHost};
use crate::props::{PropertyChange, TextProps, VerticalAlign};
use crate::render::{
    EDITING_FILL, EDITOR_FILL, EditorRequest, FORM, FormField, RenderedLine, TextRender,
    WhiteSpace,
};

/// Offset of the line group from the top of a top-aligned box.
const TOP_INSET: f32 = 2.0;
/// Keeps the editor input just inside the box so it does not re-wrap.
const EDITOR_WIDTH_SLACK: f32 = 0.01;

/// Behavior settings shared by text boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxSettings {
    pub press_threshold: Duration,
    pub reposition_delay: Duration,
    pub debug_line_rects: bool,
}

impl Default for TextBoxSettings {
    fn default() -> Self {
        Self {
            press_threshold: DEFAULT_PRESS_THRESHOLD,
            reposition_delay: Duration::from_millis(1),
            debug_line_rects: false,
        }
    }
}

impl TextBoxSettings {
    pub fn from_config(config: &TextBoxConfig) -> Self {
        Self {
            press_threshold: Duration::from_millis(config.press_threshold_ms),
            reposition_delay: Duration::from_millis(config.editor_reposition_delay_ms),
            debug_line_rects: config.debug_line_rects,
        }
    }
}

/// Quirk profile named by the config, falling back to the default profile.
pub fn quirks_from_config(config: &TextBoxConfig) -> QuirkProfile {
    config.quirks.parse().unwrap_or_else(|err| {
        log::warn!("{err}; using {}", QuirkProfile::default());
        QuirkProfile::default()
    })
}

/// Outcome of dragging a resize knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobResponse {
    /// Width changed and the height followed the re-wrapped text.
    Handled,
    /// Resized by the generic [`ElementBase`] handling.
    Forwarded,
}

/// An auto-wrapping, editable text box.
///
/// The element keeps its measurement and wrapped lines in sync with its
/// properties; all work runs synchronously inside the calls below.
pub struct TextElement<S> {
    id: ElementId,
    props: TextProps,
    settings: TextBoxSettings,
    ctx: MeasureContext<S>,
    measurement: Measurement,
    lines: Vec<WrappedLine>,
    mode: EditMode,
    press: PressTracker,
    moving: bool,
    editor: Option<Box<dyn InlineEditor>>,
    deferred: Deferred,
    now: Duration,
}

impl<S: LayoutSurface> TextElement<S> {
    pub fn new(id: ElementId, props: TextProps, surface: S, settings: TextBoxSettings) -> Self {
        let press = PressTracker::new(settings.press_threshold);
        let mut element = Self {
            id,
            props,
            settings,
            ctx: MeasureContext::new(surface),
            measurement: Measurement::default(),
            lines: Vec::new(),
            mode: EditMode::Display,
            press,
            moving: false,
            editor: None,
            deferred: Deferred::default(),
            now: Duration::ZERO,
        };
        element.remeasure();
        element
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn props(&self) -> &TextProps {
        &self.props
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn lines(&self) -> &[WrappedLine] {
        &self.lines
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn quirks(&self) -> QuirkProfile {
        self.ctx.quirks()
    }

    pub fn attach_editor(&mut self, editor: Box<dyn InlineEditor>) {
        self.editor = Some(editor);
    }

    pub fn detach_editor(&mut self) -> Option<Box<dyn InlineEditor>> {
        self.editor.take()
    }

    /// Whether deferred work is waiting to run.
    pub fn has_deferred_work(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// The host is dragging the element.
    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    pub fn box_width(&self) -> f32 {
        self.props.width.unwrap_or(DEFAULT_MEASURE_WIDTH)
    }

    /// Fixed height, or the measured text height plus padding.
    pub fn box_height(&self) -> f32 {
        self.props
            .height
            .unwrap_or(self.measurement.height + 2.0 * self.props.padding)
    }

    /// Hit area of the rendered text in element space.
    pub fn bbox(&self) -> Option<Rect> {
        if self.measurement.is_empty() {
            return None;
        }
        Some(Rect::from_origin(
            Point::zero(),
            self.box_width(),
            self.measurement.height + 2.0 * self.props.padding,
        ))
    }

    pub fn form(&self) -> &'static [FormField] {
        &FORM
    }

    /// Apply a property change.
    ///
    /// Boxes without a fixed height follow their text: before a wrap
    /// property other than the width changes, the new height is measured
    /// and the position is recomputed for it. `trigger` reports the change
    /// to the host.
    pub fn process_change(
        &mut self,
        host: &mut dyn SelectionHost,
        change: PropertyChange,
        trigger: bool,
    ) {
        let wraps = change.affects_wrapping();
        if wraps && !matches!(change, PropertyChange::Width(_)) && self.props.height.is_none() {
            let mut next = self.props.clone();
            next.apply(&change);
            let new_height = self.ctx.measure_height(&next.block_style()) + 2.0 * self.props.padding;
            let position = self.position_for_size(self.box_width(), new_height, 1, -1);
            self.process_change(host, PropertyChange::X(position.x), false);
            self.process_change(host, PropertyChange::Y(position.y), false);
        }

        if self.props.apply(&change) {
            if wraps {
                self.remeasure();
            }
            if matches!(change, PropertyChange::X(_) | PropertyChange::Y(_)) {
                self.deferred.schedule(
                    self.now + self.settings.reposition_delay,
                    DeferredTask::RepositionEditor,
                );
            }
        }

        if trigger {
            host.property_changed(self.id, &change);
        }
    }

    /// Drag a resize knob by `diff`.
    ///
    /// Side knobs change the width and re-measure the height, keeping the
    /// opposite edge in place. Other knobs resize the frame generically and
    /// fix the height.
    pub fn process_knob_change(
        &mut self,
        host: &mut dyn SelectionHost,
        knob: Knob,
        diff: Point,
    ) -> KnobResponse {
        let (width, dir_x) = match knob {
            Knob::Left => (self.box_width() - diff.x, 1),
            Knob::Right => (self.box_width() + diff.x, -1),
            _ => {
                let next = self.resize_with_knob(knob, diff);
                self.process_change(host, PropertyChange::X(next.x), false);
                self.process_change(host, PropertyChange::Y(next.y), false);
                if knob.horizontal() != 0 {
                    self.process_change(host, PropertyChange::Width(Some(next.width)), true);
                }
                self.process_change(host, PropertyChange::Height(Some(next.height)), true);
                return KnobResponse::Forwarded;
            }
        };

        let mut next = self.props.clone();
        next.width = Some(width);
        let height = self.ctx.measure_height(&next.block_style()) + 2.0 * self.props.padding;
        let position = self.position_for_size(width, height, dir_x, -1);

        self.process_change(host, PropertyChange::X(position.x), false);
        self.process_change(host, PropertyChange::Y(position.y), false);
        self.process_change(host, PropertyChange::Width(Some(width)), true);
        KnobResponse::Handled
    }

    /// Text typed into the inline editor.
    pub fn text_changed(&mut self, host: &mut dyn SelectionHost, text: impl Into<String>) {
        self.process_change(host, PropertyChange::Text(text.into()), true);
    }

    pub fn pointer_down(&mut self, host: &dyn SelectionHost, at: Duration) -> EventResult {
        self.now = self.now.max(at);
        if self.props.editable && host.is_selected(self.id) {
            self.press.press(at);
        }
        EventResult::Ignored
    }

    /// A quick click on a selected, editable box enters edit mode.
    pub fn pointer_up(&mut self, host: &mut dyn SelectionHost, at: Duration) -> EventResult {
        self.now = self.now.max(at);
        if self.moving || !self.props.editable || !host.is_selected(self.id) {
            return EventResult::Ignored;
        }
        if self.press.release(at) {
            self.set_mode(host, EditMode::Editing);
            return EventResult::Handled;
        }
        EventResult::Ignored
    }

    pub fn editor_blurred(&mut self, host: &mut dyn SelectionHost) {
        self.set_mode(host, EditMode::Display);
    }

    /// Advance the element clock and run deferred work that is due.
    pub fn run_deferred(&mut self, now: Duration) {
        self.now = self.now.max(now);
        for task in self.deferred.take_due(self.now) {
            match task {
                DeferredTask::RepositionEditor => {
                    if let Some(editor) = self.editor.as_mut() {
                        editor.reposition();
                    }
                }
            }
        }
    }

    /// Placement and style of the inline editor, when the box is editable.
    pub fn editor_request(&self) -> Option<EditorRequest> {
        if !self.props.editable {
            return None;
        }

        let props = &self.props;
        let baseline = self.measurement.baseline;
        let text_baseline = self.measurement.rects.first().map_or(baseline, |rect| {
            // Glyph box of the first line in the text's own space; the
            // alignment translate of the line group is not included.
            let bottom = rect.top + rect.height;
            if self.quirks().rounds_text_baseline() {
                bottom.round()
            } else {
                bottom
            }
        });
        let dy = (text_baseline - baseline).round();

        Some(EditorRequest {
            text: props.text.clone(),
            font_size: props.font_size,
            font_family: props.font_family.clone(),
            vertical_align: props.vertical_align,
            line_height: props.line_height,
            text_align: props.text_align,
            padding: props.padding,
            x: props.padding,
            y: props.padding + dy,
            width: self.box_width() - props.padding * 2.0 - EDITOR_WIDTH_SLACK,
            height: self.box_height() - props.padding * 2.0,
            fill: EDITOR_FILL,
        })
    }

    /// Paint model of the box; `None` when there is nothing to draw.
    pub fn render(&self) -> Option<TextRender> {
        if self.measurement.is_empty() {
            return None;
        }

        let height = self.measurement.height;
        let y = self.group_offset();

        let fill = if self.mode.is_editing() {
            EDITING_FILL.to_string()
        } else {
            self.props.fill.clone()
        };
        let white_space = if self.quirks().pre_wrap_text_style() {
            WhiteSpace::PreWrap
        } else {
            WhiteSpace::Normal
        };
        let lines = self
            .lines
            .iter()
            .map(|line| RenderedLine {
                text: line.text.clone(),
                x: line.x,
                y: line.y,
                font_family: self.props.font_family.clone(),
                font_size: self.props.font_size,
                fill: fill.clone(),
                white_space,
            })
            .collect();

        Some(TextRender {
            hit_size: (self.box_width(), height + 2.0 * self.props.padding),
            debug_rects: if self.settings.debug_line_rects {
                self.measurement.rects.clone()
            } else {
                Vec::new()
            },
            translate: (self.props.padding, y),
            lines,
        })
    }

    /// Vertical offset of the line group inside the padding box.
    fn group_offset(&self) -> f32 {
        let height = self.measurement.height;
        let fixed = self.props.height.unwrap_or(0.0);
        match self.props.vertical_align {
            VerticalAlign::Top => TOP_INSET,
            VerticalAlign::Bottom => fixed - height,
            VerticalAlign::Middle => (fixed - height) * 0.5,
        }
    }

    fn set_mode(&mut self, host: &mut dyn SelectionHost, mode: EditMode) {
        if self.mode == mode {
            return;
        }
        log::debug!("text element {:?}: {:?} -> {:?}", self.id, self.mode, mode);
        self.mode = mode;
        host.selection_changed();
        if let Some(editor) = self.editor.as_mut() {
            match mode {
                EditMode::Editing => editor.activate(),
                EditMode::Display => editor.deactivate(),
            }
        }
    }

    fn remeasure(&mut self) {
        let style = self.props.block_style();
        self.measurement = self.ctx.measure(&style);
        self.lines = self.ctx.wrap(&self.measurement, &style);
        log::debug!(
            "text element {:?}: {} lines, height {}",
            self.id,
            self.lines.len(),
            self.measurement.height
        );
    }
}

impl<S: LayoutSurface> ElementBase for TextElement<S> {
    fn frame(&self) -> Frame {
        Frame {
            x: self.props.x,
            y: self.props.y,
            width: self.box_width(),
            height: self.box_height(),
        }
    }

    /// Resize knobs; none while editing.
    fn knobs(&self) -> Vec<Knob> {
        if self.mode.is_editing() {
            Vec::new()
        } else {
            Knob::ALL.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rune_text::MonospaceSurface;

    #[derive(Default)]
    struct Host {
        changes: Vec<PropertyChange>,
    }

    impl SelectionHost for Host {
        fn is_selected(&self, _id: ElementId) -> bool {
            true
        }

        fn selection_changed(&mut self) {}

        fn property_changed(&mut self, _id: ElementId, change: &PropertyChange) {
            self.changes.push(change.clone());
        }
    }

    fn element(text: &str) -> TextElement<MonospaceSurface> {
        TextElement::new(
            ElementId(1),
            TextProps::default().with_text(text).with_width(100.0),
            MonospaceSurface::new().with_ratios(0.5, 1.0),
            TextBoxSettings::default(),
        )
    }

    #[test]
    fn measures_on_construction() {
        let el = element("Hello world");
        assert_eq!(el.lines().len(), 1);
        assert_eq!(el.lines()[0].text, "Hello world");
        // One 18px line minus 2 * 3px half-leading.
        assert_eq!(el.measurement().height, 12.0);
        assert_eq!(el.box_height(), 16.0);
    }

    #[test]
    fn silent_changes_are_not_reported() {
        let mut el = element("a");
        let mut host = Host::default();
        el.process_change(&mut host, PropertyChange::Fill("red".to_string()), false);
        assert!(host.changes.is_empty());
        el.process_change(&mut host, PropertyChange::Fill("blue".to_string()), true);
        assert_eq!(host.changes, vec![PropertyChange::Fill("blue".to_string())]);
    }

    #[test]
    fn vertical_alignment_offsets_the_group() {
        let mut el = element("a");
        let mut host = Host::default();
        assert_eq!(el.render().map(|r| r.translate), Some((2.0, TOP_INSET)));

        el.process_change(&mut host, PropertyChange::Height(Some(40.0)), false);
        el.process_change(&mut host, PropertyChange::VerticalAlign(VerticalAlign::Bottom), false);
        assert_eq!(el.render().map(|r| r.translate), Some((2.0, 28.0)));

        el.process_change(&mut host, PropertyChange::VerticalAlign(VerticalAlign::Middle), false);
        assert_eq!(el.render().map(|r| r.translate), Some((2.0, 14.0)));
    }

    #[test]
    fn unknown_quirks_fall_back() {
        let config = TextBoxConfig {
            quirks: "presto".to_string(),
            ..TextBoxConfig::default()
        };
        assert_eq!(quirks_from_config(&config), QuirkProfile::Gecko);
        let config = TextBoxConfig {
            quirks: "webkit".to_string(),
            ..TextBoxConfig::default()
        };
        assert_eq!(quirks_from_config(&config), QuirkProfile::WebKit);
    }
}
