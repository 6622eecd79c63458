//! Terminal demo of the 3×3 keyboard.
//!
//! Type with the numeric pad (or the keys of the configured preset), or
//! click the cells with the mouse. `Done` prints the text and exits; Esc or
//! Ctrl-C quits without submitting.
//!
//! Run with: cargo run --example tui_keyboard [-- path/to/config.toml]
//!
//! Set `NINEKEY_LOG=debug` to write a log file to the temp directory.

use std::{cell::RefCell, env, error::Error, io, rc::Rc, time::Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode as CKeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ninekey::{
    KeyboardBuilder, KeyboardConfig,
    tui::{CursorBlink, TerminalRenderer, Theme, input::input_event},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "NINEKEY_LOG";

/// Logs go to a file; the terminal belongs to the keyboard.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_ENV).ok()?;
    let file_appender = tracing_appender::rolling::never(env::temp_dir(), "ninekey.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .init();
    tracing::info!(log = %env::temp_dir().join("ninekey.log").display(), "demo starting");
    Some(guard)
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(key) => {
            key.code == CKeyCode::Esc
                || (key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _log_guard = init_logging();

    let config = match env::args().nth(1) {
        Some(path) => KeyboardConfig::load(path)?,
        None => KeyboardConfig::default(),
    };
    let theme = Theme::from_config(&config.style)?;

    let submitted: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let text_changed = Rc::new(RefCell::new(false));
    let mut keyboard = {
        let submitted = Rc::clone(&submitted);
        let text_changed = Rc::clone(&text_changed);
        KeyboardBuilder::from_config(&config)?
            .mirror_input(true)
            .on_done(move |text| *submitted.borrow_mut() = Some(text.to_string()))
            .on_update(move |_| *text_changed.borrow_mut() = true)
            .build()
    };

    // Setup terminal
    let mouse = keyboard.touch_mode().enabled();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut renderer = TerminalRenderer::new(terminal, theme, CursorBlink::new(Instant::now()));

    let result = run(&mut keyboard, &mut renderer, &submitted, &text_changed);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(renderer.terminal_mut().backend_mut(), DisableMouseCapture)?;
    }
    execute!(renderer.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    renderer.terminal_mut().show_cursor()?;

    result?;
    if let Some(text) = submitted.borrow().as_deref() {
        println!("{text}");
    }
    Ok(())
}

fn run(
    keyboard: &mut ninekey::Keyboard,
    renderer: &mut TerminalRenderer<CrosstermBackend<io::Stdout>>,
    submitted: &RefCell<Option<String>>,
    text_changed: &RefCell<bool>,
) -> io::Result<()> {
    keyboard.render(renderer)?;
    loop {
        let timeout = renderer.cursor_mut().until_next(Instant::now());
        if !event::poll(timeout)? {
            if renderer.cursor_mut().tick(Instant::now()) {
                keyboard.render(renderer)?;
            }
            continue;
        }

        let event = event::read()?;
        if is_quit(&event) {
            tracing::debug!("quit without submitting");
            return Ok(());
        }
        if matches!(event, Event::Resize(..)) {
            keyboard.render(renderer)?;
            continue;
        }

        let Some(input) = input_event(&event, renderer.layout()) else {
            continue;
        };
        let Some(changes) = keyboard.dispatch(input) else {
            continue;
        };
        if submitted.borrow().is_some() {
            return Ok(());
        }
        if text_changed.replace(false) {
            renderer.cursor_mut().reset(Instant::now());
        }
        if changes.needs_redraw() {
            keyboard.render(renderer)?;
        }
    }
}
