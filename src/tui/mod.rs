pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use tracing::info;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    info!("estimator started");

    let mut events = EventHandler::new(app.tick_rate_ms);

    let outcome = loop {
        // Every draw reads the current inputs, so the score is never stale
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(anyhow::Error::from(e).context("Failed to draw terminal"));
        }

        match events.next().await {
            Some(event) => {
                if let Err(e) = handle_event(&mut app, event) {
                    break Err(e);
                }
            }
            None => break Ok(()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();
    info!(inputs = ?app.estimator.inputs(), "estimator closed");

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    outcome
}

fn handle_event(app: &mut App, event: Event) -> anyhow::Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.update_flash(),
        Event::Resize => {}
        Event::Error(msg) => anyhow::bail!("Terminal input failed: {}", msg),
    }
    Ok(())
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Factor selection
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.next_factor(),
                KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.previous_factor(),

                // Slider movement
                KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') => app.increase_selected(),
                KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => app.decrease_selected(),
                KeyCode::Char('L') | KeyCode::End => app.selected_to_max(),
                KeyCode::Char('H') | KeyCode::Home => app.selected_to_min(),

                // Reset
                KeyCode::Char('r') => app.reset(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                // Score breakdown
                KeyCode::Char('b') => app.show_score_breakdown(),

                _ => {}
            }
        }
        app::InputMode::ScoreBreakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') => app.dismiss_score_breakdown(),
            // Adjusting stays live while the breakdown is open
            KeyCode::Char('j') | KeyCode::Down => app.next_factor(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_factor(),
            KeyCode::Char('l') | KeyCode::Right => app.increase_selected(),
            KeyCode::Char('h') | KeyCode::Left => app.decrease_selected(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
