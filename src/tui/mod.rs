//! Terminal UI for Connect Four.
//!
//! The presentation layer: it owns the terminal, consumes [`GameEvent`]s
//! from the engine, and forwards column selections to the active seat's
//! interactive player. The engine itself holds no reference to any of this.

mod app;
mod ui;

use crate::cli::{PlayerKind, PlayerSpec};
use crate::engine::{GameEvent, TurnEngine};
use crate::players::{ComputerPlayer, HumanPlayer, Player, SelectionHandle};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Runs one game session in the terminal.
pub async fn run_tui(player_one: PlayerSpec, player_two: PlayerSpec) -> Result<()> {
    info!(
        player_one = %player_one.name,
        player_two = %player_two.name,
        "Starting Connect Four TUI"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut handles: [Option<SelectionHandle>; 2] = [None, None];
    let seat_one = build_player(&player_one, &mut handles[0]);
    let seat_two = build_player(&player_two, &mut handles[1]);

    let mut engine = TurnEngine::new(seat_one, seat_two, event_tx);
    let mut app = App::new(engine.snapshot());

    // The engine runs to completion (or abandonment) on its own task; the
    // UI loop below only observes events and forwards input.
    let engine_task = tokio::spawn(async move { engine.run().await });

    let res = run_event_loop(&mut terminal, &mut app, &mut event_rx, &handles).await;

    engine_task.abort();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn build_player(spec: &PlayerSpec, handle: &mut Option<SelectionHandle>) -> Box<dyn Player> {
    match spec.kind {
        PlayerKind::Human => {
            let player = HumanPlayer::new(spec.name.clone());
            *handle = Some(player.handle());
            Box::new(player)
        }
        PlayerKind::Computer => Box::new(ComputerPlayer::new(spec.name.clone())),
    }
}

async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
    handles: &[Option<SelectionHandle>; 2],
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for keyboard input (non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char(c) => {
                        if let Some(digit) = c.to_digit(10) {
                            let digit = digit as usize;
                            if (1..=app.grid().columns()).contains(&digit) && !app.game_over() {
                                // Only the active seat's control is wired;
                                // selections for a computer seat go nowhere.
                                if let Some(handle) = &handles[app.next_turn().index()] {
                                    handle.column_selected(digit - 1);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
