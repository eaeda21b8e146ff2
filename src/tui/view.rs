//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() writing to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::report::{caption, format_amount};
use crate::types::{Period, Variant};

use super::state::{App, Field, Form};
use super::theme;

/// Width of one day option: " 31 ".
const DAY_OPTION_WIDTH: usize = 4;

/// Height of a single-line bordered block.
const FIELD_HEIGHT: u16 = 3;

/// Heading, value, caption and reset hint plus borders.
const RESULT_HEIGHT: u16 = 6;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the calculator to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: header at top, controls in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(2), // title + subtitle
        Constraint::Min(0),    // controls and result
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_header(), chunks[0]);
    frame.render_widget(render_help(app.form.focus), chunks[2]);

    render_body(app, frame, chunks[1]);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    let form = &app.form;
    let inner_width = area.width.saturating_sub(2) as usize;

    let day_lines = segmented_lines(day_options(form), inner_width);
    let period_lines = segmented_lines(period_options(form), inner_width);

    let mut constraints = vec![
        Constraint::Length(day_lines.len() as u16 + 2),
        Constraint::Length(period_lines.len() as u16 + 2),
    ];
    let has_pack = form.variant() == Variant::Monthly;
    if has_pack {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
    }
    if app.allowance.is_some() {
        constraints.push(Constraint::Length(RESULT_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::vertical(constraints).split(area);
    let mut next = 0;

    let day_block = field_block("Day of the Month", form.focus == Field::Day);
    frame.render_widget(Paragraph::new(day_lines).block(day_block), chunks[next]);
    next += 1;

    let period_title = match form.variant() {
        Variant::Fixed => "Days In The Month",
        Variant::Monthly => "Month",
    };
    let period_block = field_block(period_title, form.focus == Field::Period);
    frame.render_widget(Paragraph::new(period_lines).block(period_block), chunks[next]);
    next += 1;

    if has_pack {
        frame.render_widget(render_pack_field(form), chunks[next]);
        next += 1;
    }

    if app.allowance.is_some() {
        frame.render_widget(render_result(app), chunks[next]);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled("  Usage Alchemist", theme::STYLE_TITLE)),
        Line::from(Span::styled(
            "  Calculate your daily allowance.",
            theme::STYLE_DIM,
        )),
    ])
}

/// Help line showing available keybindings for the focused control.
fn render_help(focus: Field) -> Paragraph<'static> {
    let help_text = match focus {
        Field::Day | Field::Period => {
            "[←/→] move  [Enter] select  [Tab] next field  [r] reset  [q] quit"
        }
        Field::PackSize => "type to edit  [Backspace] delete  [Tab] next field  [^R] reset  [Esc] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let (title_style, border_style) = if focused {
        (theme::STYLE_LABEL_FOCUSED, theme::STYLE_FOCUS_BORDER)
    } else {
        (theme::STYLE_LABEL, theme::STYLE_BORDER)
    };
    Block::bordered()
        .title(Span::styled(format!(" {} ", title), title_style))
        .border_style(border_style)
}

// ============================================================================
// SEGMENTED CONTROLS
// ============================================================================

/// Style of one option: committed, highlighted, both, or neither.
fn option_style(selected: bool, highlighted: bool) -> Style {
    let base = if selected {
        theme::STYLE_SELECTED
    } else {
        theme::STYLE_OPTION
    };
    if highlighted {
        base.patch(theme::STYLE_CURSOR)
    } else {
        base
    }
}

fn day_options(form: &Form) -> Vec<Span<'static>> {
    let focused = form.focus == Field::Day;
    form.selection
        .day_choices()
        .map(|day| {
            let selected = form.selection.day() == Some(day);
            let highlighted = focused && form.day_cursor == day;
            Span::styled(
                format!("{:>width$} ", day, width = DAY_OPTION_WIDTH - 1),
                option_style(selected, highlighted),
            )
        })
        .collect()
}

fn period_options(form: &Form) -> Vec<Span<'static>> {
    let focused = form.focus == Field::Period;
    let current = form.selection.period();
    form.periods()
        .into_iter()
        .enumerate()
        .map(|(i, period): (usize, Period)| {
            let selected = period == current;
            let highlighted = focused && form.period_cursor == i;
            Span::styled(
                format!(" {} ", period.label()),
                option_style(selected, highlighted),
            )
        })
        .collect()
}

/// Pack options left to right into as many lines as the width needs.
/// An option is never split across lines.
fn segmented_lines(options: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in options {
        let w = span.width();
        if used + w > width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        used += w;
        current.push(span);
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

// ============================================================================
// PACK FIELD
// ============================================================================

fn render_pack_field(form: &Form) -> Paragraph<'static> {
    let focused = form.focus == Field::PackSize;
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(form.selection.pack_input().to_string(), theme::STYLE_IMPORTANT),
    ];
    if focused {
        spans.push(Span::styled(" ", theme::STYLE_CURSOR));
    }
    spans.push(Span::styled(" GB", theme::STYLE_DIM));

    Paragraph::new(Line::from(spans)).block(field_block("Pack Size", focused))
}

// ============================================================================
// RESULT PANEL
// ============================================================================

fn render_result(app: &App) -> Paragraph<'static> {
    let unit = app.form.variant().unit();
    let selection = &app.form.selection;

    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", format_amount(app.animator.display(), unit)),
        theme::STYLE_RESULT,
    ))];

    if let Some(day) = selection.day() {
        lines.push(Line::from(Span::styled(
            format!("  {}", caption(day, selection.days_in_month())),
            theme::STYLE_DIM,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [r] ", theme::STYLE_INTERACTIVE),
        Span::raw("Calculate Again"),
    ]));

    let block = Block::bordered()
        .title(Span::styled(" Your Usage Allowance ", theme::STYLE_LABEL_FOCUSED))
        .border_style(theme::STYLE_INTERACTIVE);
    Paragraph::new(lines).block(block)
}

// ============================================================================
// TESTS
// ============================================================================
