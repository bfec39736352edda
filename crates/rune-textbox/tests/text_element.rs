use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rune_text::{MonospaceSurface, Point, QuirkProfile};
use rune_textbox::{
    EDITING_FILL, EditMode, ElementBase, ElementId, EventResult, InlineEditor, Knob, KnobResponse,
    PropertyChange, SelectionHost, TextBoxSettings, TextElement, TextProps, VerticalAlign,
    WhiteSpace,
};

const ID: ElementId = ElementId(7);

struct Host {
    selected: bool,
    selection_changes: usize,
    changes: Vec<PropertyChange>,
}

impl Host {
    fn selected() -> Self {
        Self {
            selected: true,
            selection_changes: 0,
            changes: Vec::new(),
        }
    }
}

impl SelectionHost for Host {
    fn is_selected(&self, id: ElementId) -> bool {
        self.selected && id == ID
    }

    fn selection_changed(&mut self) {
        self.selection_changes += 1;
    }

    fn property_changed(&mut self, _id: ElementId, change: &PropertyChange) {
        self.changes.push(change.clone());
    }
}

#[derive(Clone, Default)]
struct Editor {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl InlineEditor for Editor {
    fn activate(&mut self) {
        self.calls.borrow_mut().push("activate");
    }

    fn deactivate(&mut self) {
        self.calls.borrow_mut().push("deactivate");
    }

    fn reposition(&mut self) {
        self.calls.borrow_mut().push("reposition");
    }
}

/// 12px text, 6px per char, 12px glyph boxes on 18px lines, padded by 2.
fn element_with(props: TextProps, quirks: QuirkProfile) -> (TextElement<MonospaceSurface>, Editor) {
    let surface = MonospaceSurface::new()
        .with_ratios(0.5, 1.0)
        .with_quirks(quirks);
    let mut element = TextElement::new(ID, props, surface, TextBoxSettings::default());
    let editor = Editor::default();
    element.attach_editor(Box::new(editor.clone()));
    (element, editor)
}

fn element(text: &str) -> (TextElement<MonospaceSurface>, Editor) {
    let props = TextProps {
        x: 10.0,
        y: 20.0,
        ..TextProps::default().with_text(text).with_width(100.0)
    };
    element_with(props, QuirkProfile::Gecko)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn quick_click_enters_edit_mode_and_blur_leaves_it() {
    let (mut el, editor) = element("Hello");
    let mut host = Host::selected();

    assert_eq!(el.pointer_down(&host, ms(1000)), EventResult::Ignored);
    assert_eq!(el.pointer_up(&mut host, ms(1100)), EventResult::Handled);
    assert_eq!(el.mode(), EditMode::Editing);
    assert_eq!(host.selection_changes, 1);
    assert!(el.knobs().is_empty());

    let render = el.render().expect("text renders");
    assert!(render.lines.iter().all(|line| line.fill == EDITING_FILL));

    el.editor_blurred(&mut host);
    assert_eq!(el.mode(), EditMode::Display);
    assert_eq!(host.selection_changes, 2);
    assert_eq!(el.knobs().len(), 8);
    assert_eq!(*editor.calls.borrow(), vec!["activate", "deactivate"]);

    // Blurring again is not a transition.
    el.editor_blurred(&mut host);
    assert_eq!(host.selection_changes, 2);
}

#[test]
fn slow_press_does_not_edit() {
    let (mut el, editor) = element("Hello");
    let mut host = Host::selected();

    el.pointer_down(&host, ms(0));
    assert_eq!(el.pointer_up(&mut host, ms(200)), EventResult::Ignored);
    assert_eq!(el.mode(), EditMode::Display);
    assert!(editor.calls.borrow().is_empty());
}

#[test]
fn release_without_press_does_not_edit() {
    let (mut el, _) = element("Hello");
    let mut host = Host::selected();
    assert_eq!(el.pointer_up(&mut host, ms(10)), EventResult::Ignored);
    assert_eq!(el.mode(), EditMode::Display);
}

#[test]
fn unselected_moving_or_locked_boxes_do_not_edit() {
    let (mut el, _) = element("Hello");
    let mut host = Host::selected();
    host.selected = false;
    el.pointer_down(&host, ms(0));
    el.pointer_up(&mut host, ms(50));
    assert_eq!(el.mode(), EditMode::Display);

    host.selected = true;
    el.set_moving(true);
    el.pointer_down(&host, ms(100));
    el.pointer_up(&mut host, ms(150));
    assert_eq!(el.mode(), EditMode::Display);
    el.set_moving(false);

    el.process_change(&mut host, PropertyChange::Editable(false), true);
    el.pointer_down(&host, ms(200));
    el.pointer_up(&mut host, ms(250));
    assert_eq!(el.mode(), EditMode::Display);
    assert!(el.editor_request().is_none());
    assert_eq!(host.selection_changes, 0);
}

#[test]
fn box_grows_with_its_text() {
    let (mut el, _) = element("aaaa");
    let mut host = Host::selected();
    assert_eq!(el.box_height(), 16.0);

    el.text_changed(&mut host, "aaaa bbbb cccc dddd");
    let texts: Vec<&str> = el.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["aaaa bbbb cccc", "dddd"]);
    // Two 18px lines minus the outer half-leading, plus padding.
    assert_eq!(el.measurement().height, 30.0);
    assert_eq!(el.box_height(), 34.0);
    assert_eq!((el.props().x, el.props().y), (10.0, 20.0));
    assert_eq!(
        host.changes,
        vec![PropertyChange::Text("aaaa bbbb cccc dddd".to_string())]
    );
    assert!(!el.has_deferred_work());
}

#[test]
fn fixed_height_is_kept() {
    let (mut el, _) = element("aaaa");
    let mut host = Host::selected();
    el.process_change(&mut host, PropertyChange::Height(Some(50.0)), false);
    el.text_changed(&mut host, "aaaa bbbb cccc dddd");
    assert_eq!(el.box_height(), 50.0);
    assert_eq!(el.lines().len(), 2);
}

#[test]
fn left_knob_keeps_the_right_edge() {
    let (mut el, _) = element("aaaa bbbb cccc");
    let mut host = Host::selected();
    assert_eq!(el.lines().len(), 1);

    let response = el.process_knob_change(&mut host, Knob::Left, Point::new(40.0, 0.0));
    assert_eq!(response, KnobResponse::Handled);
    assert_eq!(el.props().width, Some(60.0));
    assert_eq!(el.props().x, 50.0);
    assert_eq!(el.props().y, 20.0);
    assert_eq!(el.lines().len(), 2);
    assert_eq!(el.box_height(), 34.0);
    assert_eq!(host.changes, vec![PropertyChange::Width(Some(60.0))]);
}

#[test]
fn right_knob_keeps_the_left_edge() {
    let (mut el, _) = element("aaaa bbbb cccc");
    let mut host = Host::selected();

    let response = el.process_knob_change(&mut host, Knob::Right, Point::new(-40.0, 0.0));
    assert_eq!(response, KnobResponse::Handled);
    assert_eq!(el.props().width, Some(60.0));
    assert_eq!(el.props().x, 10.0);
    assert_eq!(el.lines().len(), 2);
}

#[test]
fn corner_knobs_resize_the_frame() {
    let (mut el, _) = element("aaaa");
    let mut host = Host::selected();
    let response = el.process_knob_change(&mut host, Knob::TopLeft, Point::new(5.0, 5.0));
    assert_eq!(response, KnobResponse::Forwarded);
    assert_eq!((el.props().x, el.props().y), (15.0, 25.0));
    assert_eq!(el.props().width, Some(95.0));
    assert_eq!(el.props().height, Some(11.0));
    assert_eq!(
        host.changes,
        vec![
            PropertyChange::Width(Some(95.0)),
            PropertyChange::Height(Some(11.0)),
        ]
    );
}

#[test]
fn bottom_knob_fixes_the_height() {
    let (mut el, _) = element("aaaa");
    let mut host = Host::selected();
    el.process_knob_change(&mut host, Knob::Bottom, Point::new(0.0, 24.0));
    assert_eq!(el.props().width, Some(100.0));
    assert_eq!(el.box_height(), 40.0);
    assert_eq!((el.props().x, el.props().y), (10.0, 20.0));
}

#[test]
fn moving_the_box_repositions_the_editor_later() {
    let (mut el, editor) = element("aaaa");
    let mut host = Host::selected();

    el.process_change(&mut host, PropertyChange::X(30.0), true);
    el.process_change(&mut host, PropertyChange::Y(40.0), true);
    assert!(el.has_deferred_work());

    el.run_deferred(ms(0));
    assert!(editor.calls.borrow().is_empty());

    el.run_deferred(ms(1));
    assert_eq!(*editor.calls.borrow(), vec!["reposition"]);
    assert!(!el.has_deferred_work());

    el.run_deferred(ms(5));
    assert_eq!(editor.calls.borrow().len(), 1);
}

#[test]
fn editor_overlays_the_first_line() {
    let (el, _) = element("aaaa");
    let request = el.editor_request().expect("editable");

    assert_eq!(request.text, "aaaa");
    assert_eq!(request.x, 2.0);
    // Glyph box bottom at 12 against a baseline of 3 + 12.
    assert_eq!(request.y, -1.0);
    assert!((request.width - 95.99).abs() < 1e-4);
    assert_eq!(request.height, 12.0);
    assert_eq!(request.fill, "blue");
}

#[test]
fn editor_offset_ignores_vertical_alignment() {
    let (mut el, _) = element("aaaa");
    let mut host = Host::selected();
    let top = el.editor_request().expect("editable");

    el.process_change(&mut host, PropertyChange::Height(Some(60.0)), false);
    el.process_change(&mut host, PropertyChange::VerticalAlign(VerticalAlign::Bottom), false);
    assert_eq!(el.render().map(|r| r.translate.1), Some(48.0));

    let bottom = el.editor_request().expect("editable");
    assert_eq!(bottom.y, top.y);
    assert_eq!(bottom.height, 56.0);
}

#[test]
fn empty_text_renders_nothing() {
    let (el, _) = element("");
    assert!(el.render().is_none());
    assert!(el.bbox().is_none());
    assert_eq!(el.box_height(), 4.0);
}

#[test]
fn render_follows_the_quirk_profile() {
    let props = TextProps::default().with_text("Hello world").with_width(50.0);

    let (gecko, _) = element_with(props.clone(), QuirkProfile::Gecko);
    let render = gecko.render().expect("text renders");
    let texts: Vec<&str> = render.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Hello", "world"]);
    assert!(render.lines.iter().all(|l| l.white_space == WhiteSpace::Normal));
    assert!(render.debug_rects.is_empty());

    let (edge, _) = element_with(props, QuirkProfile::EdgeHtml);
    let render = edge.render().expect("text renders");
    assert!(render.lines.iter().all(|l| l.white_space == WhiteSpace::PreWrap));
}

#[test]
fn debug_rects_follow_the_settings() {
    let surface = MonospaceSurface::new().with_ratios(0.5, 1.0);
    let settings = TextBoxSettings {
        debug_line_rects: true,
        ..TextBoxSettings::default()
    };
    let props = TextProps::default().with_text("a b").with_width(100.0);
    let el = TextElement::new(ID, props, surface, settings);
    let render = el.render().expect("text renders");
    assert_eq!(render.debug_rects, el.measurement().rects);
    assert_eq!(render.hit_size, (100.0, 16.0));
}
