use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use dadjokes_core::{AppConfig, JokeDeck, JokeFetcher, Side};
use dadjokes_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    theme::Palette,
    widgets::{JokeCardWidget, StatusBarWidget, WaveWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // The initial render waits on the one-time fetch; a failure falls back
    // to an empty deck and the fallback card.
    let deck = fetch_deck(&config).await;

    let mut rng = rand::thread_rng();
    let mut palette = Palette::from_config(&config.ui.colors);
    palette.shuffle(&mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Dad Jokes")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), palette, deck);
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Checked at the END of each iteration to pick the NEXT poll timeout
    let mut needs_fast_update = false;

    // Main loop
    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        match event_handler.next(needs_fast_update)? {
            Some(AppEvent::Key(key)) => app.on_action(handle_key_event(key)),
            Some(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Some(AppEvent::Resize(w, h)) => app.on_resize(w, h),
            Some(AppEvent::Tick) | None => {}
        }

        app.tick();
        needs_fast_update = app.needs_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

async fn fetch_deck(config: &AppConfig) -> JokeDeck {
    let fetcher = match JokeFetcher::new(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!(error = %e, "invalid joke endpoint");
            return JokeDeck::default();
        }
    };
    match fetcher.fetch().await {
        Ok(jokes) => {
            let mut deck = JokeDeck::new(jokes);
            deck.shuffle(&mut rand::thread_rng());
            deck
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch dad jokes");
            JokeDeck::default()
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (x, y) = app.logical_point(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.drag_began(x, y),
        MouseEventKind::Drag(MouseButton::Left) => app.drag_moved(x, y),
        MouseEventKind::Up(MouseButton::Left) => app.drag_ended(x, y),
        _ => {}
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    JokeCardWidget::render(frame, chunks[0], app);

    // The last-touched slider paints on top
    let (below, above) = match app.top_side {
        Side::Left => (Side::Right, Side::Left),
        Side::Right => (Side::Left, Side::Right),
    };
    WaveWidget::render(frame, chunks[0], app, below);
    WaveWidget::render(frame, chunks[0], app, above);

    StatusBarWidget::render(frame, chunks[1], app);
}
