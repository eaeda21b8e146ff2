//! Pure state transitions: (Form, Action) → Transition.
//!
//! Fully testable without a terminal. Each focused control decides what an
//! action means; anything it does not handle returns the form unchanged.

use super::state::{Action, Field, Form, Transition};

/// Pure state transition function.
pub fn update(form: Form, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::Reset => Transition::Reset,
        Action::FocusNext => Transition::Form(cycle_focus(form, 1)),
        Action::FocusPrev => Transition::Form(cycle_focus(form, -1)),
        Action::Char(c) if form.focus == Field::PackSize => Transition::Form(type_char(form, *c)),
        Action::Char(c) => shortcut(form, *c),
        Action::Backspace => Transition::Form(backspace(form)),
        Action::MoveLeft | Action::MoveRight | Action::Select => match form.focus {
            Field::Day => Transition::Form(update_day(form, action)),
            Field::Period => Transition::Form(update_period(form, action)),
            Field::PackSize => Transition::Form(form),
        },
    }
}

// ============================================================================
// FOCUS
// ============================================================================

fn cycle_focus(mut form: Form, delta: isize) -> Form {
    let order = Field::order(form.variant());
    let current = order.iter().position(|&f| f == form.focus).unwrap_or(0) as isize;
    let len = order.len() as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    form.focus = order[next];
    form
}

/// Single-letter shortcuts, active when no text field has focus.
fn shortcut(form: Form, c: char) -> Transition {
    match c {
        'q' => Transition::Quit,
        'r' => Transition::Reset,
        ' ' => update(form, &Action::Select),
        'h' => update(form, &Action::MoveLeft),
        'l' => update(form, &Action::MoveRight),
        'j' => update(form, &Action::FocusNext),
        'k' => update(form, &Action::FocusPrev),
        _ => Transition::Form(form),
    }
}

// ============================================================================
// PER-CONTROL HANDLERS
// ============================================================================

/// Day control: move the highlight within the current month, commit it.
fn update_day(mut form: Form, action: &Action) -> Form {
    let last = form.selection.days_in_month();
    match action {
        Action::MoveLeft => form.day_cursor = form.day_cursor.saturating_sub(1).max(1),
        Action::MoveRight => form.day_cursor = (form.day_cursor + 1).min(last),
        Action::Select => {
            form.selection.select_day(form.day_cursor);
        }
        _ => {}
    }
    form
}

/// Period control: move the highlight, commit it. Committing a shorter
/// month pulls the day highlight back inside the new range.
fn update_period(mut form: Form, action: &Action) -> Form {
    let periods = form.periods();
    let len = periods.len();
    match action {
        Action::MoveLeft => form.period_cursor = form.period_cursor.saturating_sub(1),
        Action::MoveRight => {
            form.period_cursor = if len == 0 { 0 } else { (form.period_cursor + 1).min(len - 1) };
        }
        Action::Select => {
            if let Some(&period) = periods.get(form.period_cursor) {
                form.selection.select_period(period);
                form.day_cursor = form.day_cursor.min(form.selection.days_in_month());
            }
        }
        _ => {}
    }
    form
}

/// Pack field: append any printable character. Validation happens when the
/// allowance is derived, never here.
fn type_char(mut form: Form, c: char) -> Form {
    if !c.is_control() {
        form.selection.push_pack_char(c);
    }
    form
}

fn backspace(mut form: Form) -> Form {
    if form.focus == Field::PackSize {
        form.selection.pop_pack_char();
    }
    form
}

// ============================================================================
// TESTS
// ============================================================================
