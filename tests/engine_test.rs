//! Whole-game tests driving the engine with scripted players.

use anyhow::{Context, Result};
use connect_four::{EngineSnapshot, GameEvent, Outcome, Player, PlayerId, TurnEngine};
use std::collections::VecDeque;
use tokio::sync::mpsc;

/// Player double that replays a fixed list of column choices.
struct ScriptedPlayer {
    name: &'static str,
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    fn new(name: &'static str, moves: impl IntoIterator<Item = usize>) -> Box<dyn Player> {
        Box::new(Self {
            name,
            moves: moves.into_iter().collect(),
        })
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn request_move(&mut self, _view: &EngineSnapshot) -> Result<usize> {
        self.moves.pop_front().context("script ran out of moves")
    }

    fn name(&self) -> &str {
        self.name
    }
}

async fn play(
    one: Box<dyn Player>,
    two: Box<dyn Player>,
) -> Result<(Outcome, Vec<GameEvent>, Option<Outcome>)> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut engine = TurnEngine::new(one, two, event_tx);
    let outcome = engine.run().await?;

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    Ok((outcome, events, engine.outcome()))
}

fn completed_seats(events: &[GameEvent]) -> Vec<PlayerId> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::MoveCompleted { player, .. } => Some(*player),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_horizontal_win_with_strict_alternation() {
    let one = ScriptedPlayer::new("Ann", [0, 1, 2, 3]);
    let two = ScriptedPlayer::new("Ben", [0, 1, 2]);

    let (outcome, events, stored) = play(one, two).await.unwrap();

    assert_eq!(outcome, Outcome::Winner(PlayerId::One));
    assert_eq!(stored, Some(Outcome::Winner(PlayerId::One)));

    let seats = completed_seats(&events);
    assert_eq!(seats.len(), 7);
    for (i, seat) in seats.iter().enumerate() {
        let expected = if i % 2 == 0 {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        assert_eq!(*seat, expected, "turn {i} out of order");
    }

    // The terminal notification comes last and names the winner.
    match events.last() {
        Some(GameEvent::GameOver { winner, snapshot }) => {
            assert_eq!(*winner, Some(PlayerId::One));
            assert_eq!(snapshot.players[0], "Ann");
        }
        other => panic!("expected GameOver last, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_moves_retry_same_player() {
    // Column 0 fills up after six moves; Ann then tries it twice more
    // before switching to column 1, which she stacks for a vertical four.
    let one = ScriptedPlayer::new("Ann", [0, 0, 0, 0, 0, 1, 1, 1, 1]);
    let two = ScriptedPlayer::new("Ben", [0, 0, 0, 2, 2, 2]);

    let (outcome, events, _) = play(one, two).await.unwrap();
    assert_eq!(outcome, Outcome::Winner(PlayerId::One));

    let invalid: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::MoveInvalid {
                column,
                player,
                snapshot,
            } => Some((*column, *player, snapshot)),
            _ => None,
        })
        .collect();

    // Each attempt is reported individually, against the same seat.
    assert_eq!(invalid.len(), 2);
    for (column, player, snapshot) in &invalid {
        assert_eq!(*column, 0);
        assert_eq!(*player, PlayerId::One);
        // The attempt changed nothing: column 0 still full, column 1 still
        // untouched, and it is still Ann's turn.
        assert_eq!(snapshot.grid.fill_depth(0), 6);
        assert_eq!(snapshot.grid.fill_depth(1), 0);
        assert_eq!(snapshot.next_turn, PlayerId::One);
    }

    // Turn order over successful moves is unaffected by the retries.
    let seats = completed_seats(&events);
    assert_eq!(seats.len(), 13);
    for (i, seat) in seats.iter().enumerate() {
        let expected = if i % 2 == 0 {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        assert_eq!(*seat, expected);
    }
}

#[tokio::test]
async fn test_full_board_without_four_is_a_draw() {
    // Filling row by row in the column order below gives every cell to the
    // seat prescribed by ((col + 2*row) mod 4 < 2), a pattern with no four
    // in any orientation. Subsets of a four-free grid are four-free, so no
    // win can occur mid-game either.
    let order = [0, 2, 1, 3, 4, 6, 5];
    let mut all_moves = Vec::new();
    for _ in 0..6 {
        all_moves.extend(order);
    }
    let one_moves: Vec<usize> = all_moves.iter().copied().step_by(2).collect();
    let two_moves: Vec<usize> = all_moves.iter().copied().skip(1).step_by(2).collect();

    let one = ScriptedPlayer::new("Ann", one_moves);
    let two = ScriptedPlayer::new("Ben", two_moves);

    let (outcome, events, stored) = play(one, two).await.unwrap();

    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(stored, Some(Outcome::Draw));
    assert_eq!(completed_seats(&events).len(), 42);

    match events.last() {
        Some(GameEvent::GameOver { winner, snapshot }) => {
            assert_eq!(*winner, None);
            assert!(snapshot.grid.is_full());
        }
        other => panic!("expected GameOver last, got {other:?}"),
    }
}

#[tokio::test]
async fn test_move_completed_snapshot_names_next_player() {
    let one = ScriptedPlayer::new("Ann", [0, 1, 2, 3]);
    let two = ScriptedPlayer::new("Ben", [0, 1, 2]);

    let (_, events, _) = play(one, two).await.unwrap();

    match &events[0] {
        GameEvent::MoveCompleted {
            column,
            player,
            snapshot,
        } => {
            assert_eq!(*column, 0);
            assert_eq!(*player, PlayerId::One);
            // The snapshot is taken after the turn advances.
            assert_eq!(snapshot.next_turn, PlayerId::Two);
            assert_eq!(snapshot.next_player_name(), "Ben");
            assert_eq!(snapshot.grid.occupant(0, 0), Some(PlayerId::One));
        }
        other => panic!("expected MoveCompleted first, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exhausted_player_aborts_the_session() {
    let one = ScriptedPlayer::new("Ann", [0]);
    let two = ScriptedPlayer::new("Ben", []);

    assert!(play(one, two).await.is_err());
}
