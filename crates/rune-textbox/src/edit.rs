//! Edit-mode toggle and the deferred work around it.

use std::time::Duration;

/// Default longest press that still counts as a click.
pub const DEFAULT_PRESS_THRESHOLD: Duration = Duration::from_millis(200);

/// Result of handling a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and should not propagate
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

/// Whether the text box shows its lines or the inline editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Display,
    Editing,
}

impl EditMode {
    pub fn is_editing(self) -> bool {
        matches!(self, EditMode::Editing)
    }
}

/// Detects the quick press/release pair that enters edit mode.
#[derive(Debug, Clone)]
pub struct PressTracker {
    threshold: Duration,
    pressed_at: Option<Duration>,
}

impl PressTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            pressed_at: None,
        }
    }

    pub fn press(&mut self, at: Duration) {
        self.pressed_at = Some(at);
    }

    /// Consume the recorded press; `true` when it was shorter than the
    /// threshold.
    pub fn release(&mut self, at: Duration) -> bool {
        self.pressed_at
            .take()
            .is_some_and(|down| at.saturating_sub(down) < self.threshold)
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PRESS_THRESHOLD)
    }
}

/// Work postponed until the layout has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    RepositionEditor,
}

/// Single-threaded timer queue drained by `TextElement::run_deferred`.
#[derive(Debug, Default)]
pub struct Deferred {
    pending: Vec<(Duration, DeferredTask)>,
}

impl Deferred {
    /// Schedule `task` at `due`. A task already pending keeps its place.
    pub fn schedule(&mut self, due: Duration, task: DeferredTask) {
        if !self.pending.iter().any(|(_, t)| *t == task) {
            self.pending.push((due, task));
        }
    }

    /// Remove and return the tasks due at `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<DeferredTask> {
        let mut due: Vec<(Duration, DeferredTask)> = Vec::new();
        self.pending.retain(|&(at, task)| {
            if at <= now {
                due.push((at, task));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn quick_click_is_detected() {
        let mut tracker = PressTracker::default();
        tracker.press(ms(1000));
        assert!(tracker.release(ms(1199)));
    }

    #[test]
    fn long_press_and_missing_press_are_not_clicks() {
        let mut tracker = PressTracker::default();
        tracker.press(ms(1000));
        assert!(!tracker.release(ms(1200)));
        assert!(!tracker.release(ms(1201)));
    }

    #[test]
    fn deferred_runs_once_when_due() {
        let mut deferred = Deferred::default();
        deferred.schedule(ms(5), DeferredTask::RepositionEditor);
        deferred.schedule(ms(9), DeferredTask::RepositionEditor);
        assert!(deferred.take_due(ms(4)).is_empty());
        assert_eq!(deferred.take_due(ms(5)), vec![DeferredTask::RepositionEditor]);
        assert!(deferred.is_empty());
    }
}
