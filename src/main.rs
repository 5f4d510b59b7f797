mod app;
mod event;
mod game;
mod settings;
mod stats;
mod ui;

use std::io;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler, TICK_RATE_MS};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Ask for key-release reporting where the terminal can do it; the input
    // layer falls back to autorepeat-refreshed holds otherwise.
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app and event handler
    let mut app = App::new(release_events);
    let event_handler = EventHandler::new(TICK_RATE_MS);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;
        if !app.game.is_active() {
            terminal.show_cursor()?;
        }

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
