//! TUI state algebra.
//!
//! `Form` is what the pure transition function works on: the selection plus
//! focus and cursor positions. `App` wraps it with the derived allowance,
//! the animator and the timer slot, and is the only place where a form
//! change turns into an animation restart.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::{debug, trace};

use crate::animator::Animator;
use crate::selection::Selection;
use crate::timer::TimerSlot;
use crate::types::{CalculatorConfig, Period, Variant};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop feeds into the app.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key press.
    Key(KeyEvent),
    /// The loop woke up at this instant; the timer may be due.
    Tick(Instant),
}

// ============================================================================
// FORM
// ============================================================================

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Period,
    PackSize,
}

impl Field {
    /// Fields present in a variant, top to bottom.
    pub fn order(variant: Variant) -> &'static [Field] {
        match variant {
            Variant::Fixed => &[Field::Day, Field::Period],
            Variant::Monthly => &[Field::Day, Field::Period, Field::PackSize],
        }
    }
}

/// Inputs plus navigation state. Owned by value through `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub selection: Selection,
    pub focus: Field,
    /// Highlighted day in the day control (1-based).
    pub day_cursor: u8,
    /// Highlighted index in the period control.
    pub period_cursor: usize,
}

impl Form {
    pub fn new(variant: Variant, default_pack: &str) -> Self {
        let selection = Selection::new(variant, default_pack);
        let period_cursor = period_index(selection.period());
        Form {
            selection,
            focus: Field::Day,
            day_cursor: 1,
            period_cursor,
        }
    }

    pub fn variant(&self) -> Variant {
        self.selection.variant()
    }

    /// Period choices offered by this form's selector.
    pub fn periods(&self) -> Vec<Period> {
        self.variant().periods()
    }
}

/// Position of a period in its variant's choice list.
pub fn period_index(period: Period) -> usize {
    period
        .variant()
        .periods()
        .iter()
        .position(|&p| p == period)
        .unwrap_or(0)
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus the next control.
    FocusNext,
    /// Focus the previous control.
    FocusPrev,
    /// Move the highlight left inside the focused control.
    MoveLeft,
    /// Move the highlight right inside the focused control.
    MoveRight,
    /// Commit the highlighted choice.
    Select,
    /// A printable character. Text input when the pack field has focus,
    /// a shortcut otherwise.
    Char(char),
    /// Delete the last pack character.
    Backspace,
    /// Back to defaults ("Calculate Again").
    Reset,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Continue with this form (possibly unchanged).
    Form(Form),
    /// Restore every input to its default.
    Reset,
    /// Quit the application.
    Quit,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub form: Form,
    /// Last computed allowance; None hides the result panel.
    pub allowance: Option<f64>,
    pub animator: Animator,
    pub timer: TimerSlot,
    pub config: CalculatorConfig,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: CalculatorConfig) -> Self {
        App {
            form: Form::new(config.variant, &config.default_pack),
            allowance: None,
            animator: Animator::new(config.animation),
            timer: TimerSlot::new(),
            config,
            should_quit: false,
        }
    }

    /// Apply a transition produced by `update`.
    pub fn apply(&mut self, transition: Transition, now: Instant) {
        match transition {
            Transition::Form(form) => self.set_form(form, now),
            Transition::Reset => {
                debug!("reset to defaults");
                let fresh = Form::new(self.config.variant, &self.config.default_pack);
                self.set_form(fresh, now);
            }
            Transition::Quit => {
                self.teardown();
                self.should_quit = true;
            }
        }
    }

    /// Replace the form, recompute the allowance and retarget the animator
    /// if the allowance changed.
    pub fn set_form(&mut self, form: Form, now: Instant) {
        self.form = form;
        let next = self.form.selection.allowance();
        if next == self.allowance {
            return;
        }

        debug!(
            previous = ?self.allowance,
            allowance = ?next,
            day = ?self.form.selection.day(),
            days_in_month = self.form.selection.days_in_month(),
            "allowance recomputed"
        );
        self.allowance = next;
        self.animator.retarget(next);
        self.sync_timer(now);
    }

    /// Advance the animation if the timer fired.
    pub fn on_tick(&mut self, now: Instant) {
        if !self.timer.fire_if_due(now) {
            return;
        }
        let more = self.animator.tick();
        trace!(display = self.animator.display(), "animation tick");
        if !more {
            self.timer.cancel();
            debug!(value = self.animator.display(), "animation settled");
        }
    }

    /// How long the loop may sleep before the next tick. None when idle.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Stop all timing; nothing ticks after this.
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }

    /// One timer while animating, none otherwise. Always cancel first.
    fn sync_timer(&mut self, now: Instant) {
        self.timer.cancel();
        if self.animator.is_animating() {
            self.timer.arm(now, self.config.animation.tick);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::Phase;
    use crate::types::{DayCount, Month};

    fn monthly_app() -> App {
        App::new(CalculatorConfig::default())
    }

    fn with_day(app: &App, day: u8) -> Form {
        let mut form = app.form.clone();
        form.selection.select_day(day);
        form
    }

    #[test]
    fn app_starts_idle() {
        let app = monthly_app();
        assert_eq!(app.allowance, None);
        assert_eq!(app.animator.phase(), Phase::Idle);
        assert!(!app.timer.is_armed());
        assert!(!app.should_quit);
        assert_eq!(app.form.focus, Field::Day);
        assert_eq!(app.form.period_cursor, 0);
    }

    #[test]
    fn fixed_form_cursor_points_at_default_period() {
        let form = Form::new(Variant::Fixed, "375");
        assert_eq!(form.selection.period(), Period::Fixed(DayCount::ThirtyOne));
        assert_eq!(form.period_cursor, 1);
    }

    #[test]
    fn field_order_per_variant() {
        assert_eq!(Field::order(Variant::Fixed), &[Field::Day, Field::Period]);
        assert_eq!(Field::order(Variant::Monthly).len(), 3);
    }

    #[test]
    fn period_index_lookup() {
        assert_eq!(period_index(Period::Month(Month::March)), 2);
        assert_eq!(period_index(Period::Fixed(DayCount::Thirty)), 0);
    }

    #[test]
    fn choosing_a_day_starts_animation() {
        let mut app = monthly_app();
        let now = Instant::now();
        let form = with_day(&app, 10);
        app.apply(Transition::Form(form), now);

        let expected = 10.0 * (375.0 / 31.0);
        assert_eq!(app.allowance, Some(expected));
        assert!(app.animator.is_animating());
        assert!(app.timer.is_armed());
        assert_eq!(app.next_tick_in(now), Some(app.config.animation.tick));
    }

    #[test]
    fn ticks_converge_and_disarm_timer() {
        let mut app = monthly_app();
        let mut now = Instant::now();
        app.apply(Transition::Form(with_day(&app, 31)), now);

        let tick = app.config.animation.tick;
        for _ in 0..200 {
            now += tick;
            app.on_tick(now);
        }
        assert_eq!(Some(app.animator.display()), app.allowance);
        assert!(!app.timer.is_armed());
        assert_eq!(app.next_tick_in(now), None);
    }

    #[test]
    fn tick_before_deadline_does_nothing() {
        let mut app = monthly_app();
        let now = Instant::now();
        app.apply(Transition::Form(with_day(&app, 5)), now);
        app.on_tick(now);
        assert_eq!(app.animator.display(), 0.0);
    }

    #[test]
    fn unchanged_allowance_keeps_animation_running() {
        let mut app = monthly_app();
        let mut now = Instant::now();
        app.apply(Transition::Form(with_day(&app, 5)), now);
        now += app.config.animation.tick;
        app.on_tick(now);
        let shown = app.animator.display();

        // Moving focus changes the form but not the allowance.
        let mut form = app.form.clone();
        form.focus = Field::PackSize;
        app.apply(Transition::Form(form), now);
        assert_eq!(app.animator.display(), shown);
        assert!(app.timer.is_armed());
    }

    #[test]
    fn invalid_pack_hides_result_and_stops_timer() {
        let mut app = monthly_app();
        let now = Instant::now();
        app.apply(Transition::Form(with_day(&app, 5)), now);

        let mut form = app.form.clone();
        form.selection.set_pack_input("abc");
        app.apply(Transition::Form(form), now);

        assert_eq!(app.allowance, None);
        assert_eq!(app.animator.phase(), Phase::Idle);
        assert!(!app.timer.is_armed());
    }

    #[test]
    fn reset_returns_everything_to_defaults() {
        let mut app = monthly_app();
        let now = Instant::now();
        let mut form = with_day(&app, 15);
        form.selection.select_period(Period::Month(Month::June));
        form.selection.set_pack_input("500");
        form.focus = Field::PackSize;
        app.apply(Transition::Form(form), now);
        assert!(app.allowance.is_some());

        app.apply(Transition::Reset, now);
        assert_eq!(app.form, Form::new(Variant::Monthly, "375"));
        assert_eq!(app.allowance, None);
        assert_eq!(app.animator.phase(), Phase::Idle);
        assert!(!app.timer.is_armed());
    }

    #[test]
    fn quit_tears_down_timer() {
        let mut app = monthly_app();
        let now = Instant::now();
        app.apply(Transition::Form(with_day(&app, 5)), now);
        app.apply(Transition::Quit, now);
        assert!(app.should_quit);
        assert!(!app.timer.is_armed());
    }
}
