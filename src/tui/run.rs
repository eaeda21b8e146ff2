//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: the loop sleeps in `event::poll` until either a key
//! arrives or the animation timer is due. With no timer armed it blocks on
//! the next terminal event.

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::types::CalculatorConfig;

use super::state::{Action, App, AppEvent};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Letters are passed
/// through as `Char`; the focused control decides what they mean.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reset),
            _ => None,
        };
    }

    match key.code {
        // Focus
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),

        // Inside a control
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Backspace => Some(Action::Backspace),

        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::Char(c)),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT HANDLING
// ============================================================================

/// Feed one event into the app.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => {
            if let Some(action) = map_key(key) {
                debug!(?action, "key action");
                let form = app.form.clone();
                let transition = update(form, &action);
                app.apply(transition, Instant::now());
            }
        }
        AppEvent::Tick(now) => app.on_tick(now),
    }
}

/// Wait for the next event: a key press, or a tick once the timer is due.
fn next_event(app: &App) -> io::Result<AppEvent> {
    loop {
        let ready = match app.next_tick_in(Instant::now()) {
            Some(timeout) => event::poll(timeout)?,
            None => true, // nothing animating: block on input
        };

        if !ready {
            return Ok(AppEvent::Tick(Instant::now()));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(AppEvent::Key(key)),
            Event::Resize(..) => return Ok(AppEvent::Tick(Instant::now())),
            _ => {} // ignore mouse, key release, focus
        }
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the calculator until the user quits.
pub fn run(config: CalculatorConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    info!(variant = ?app.config.variant, "calculator started");

    let result = event_loop(&mut terminal, &mut app);

    // Nothing may tick after the view is gone, error or not.
    app.teardown();
    restore_terminal()?;
    info!("calculator closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let event = next_event(app)?;
        handle_event(app, event);
    }
}

// ============================================================================
// TESTS
// ============================================================================
