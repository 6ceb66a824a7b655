//! The two preset rule sets, end to end: known opening sequences, the
//! differences the presets are built around, and full games driven to
//! (or toward) completion with the invariants checked after every turn.

use owela_engine::{
    Board, Coord, EngineError, GameConfig, GameEngine, InvalidMove, Player, StepKind, TurnOutcome,
};

/// The first playable pit in reading order, if any.
fn first_playable(engine: &GameEngine, player: Player) -> Option<Coord> {
    Board::coords().find(|&pit| player.owns_row(pit.row) && engine.is_pit_playable(pit, player))
}

/// Drive a game with a first-playable-pit policy for at most `max_moves`
/// accepted moves, checking invariants after every one. Returns the winner
/// if the game ended.
fn drive(engine: &mut GameEngine, max_moves: usize) -> Option<Player> {
    for _ in 0..max_moves {
        let player = engine.state().current_player();
        let Some(pit) = first_playable(engine, player) else {
            break;
        };

        let record = engine
            .submit_move(player, pit)
            .expect("playable move must be accepted");

        // Seed conservation after every accepted move.
        assert_eq!(engine.state().seeds_in_play(), engine.state().initial_seeds());
        assert_eq!(engine.state().seeds_in_hand(), 0);
        assert!(!record.events.is_empty());

        match record.outcome {
            TurnOutcome::Switched { next } => {
                assert_eq!(engine.state().current_player(), next);
                assert!(engine.state().awaiting_input());
            }
            TurnOutcome::Won { winner } => {
                assert_eq!(engine.winner(), Some(winner));
                return Some(winner);
            }
        }
    }
    engine.winner()
}

/// The full rules' opening from (0,0) is fully forced: seven chained
/// sub-turns, three single-neighbor captures along the inner row, then a
/// hand-over.
#[test]
fn full_rules_opening_from_corner() {
    let mut engine = GameEngine::new(GameConfig::full());
    let record = engine.submit_move(Player::One, Coord::new(0, 0)).unwrap();

    assert_eq!(record.sub_turns, 7);
    assert_eq!(record.outcome, TurnOutcome::Switched { next: Player::Two });

    let captured: Vec<_> = record
        .events
        .iter()
        .filter_map(|ev| match &ev.kind {
            StepKind::SeedsCaptured { pits, seeds } => Some((pits.to_vec(), *seeds)),
            _ => None,
        })
        .collect();
    assert_eq!(
        captured,
        vec![
            (vec![Coord::new(2, 7)], 2),
            (vec![Coord::new(2, 4)], 2),
            (vec![Coord::new(2, 1)], 2),
        ]
    );

    assert_eq!(engine.state().captured(Player::One), 6);
    assert_eq!(engine.state().board().total_seeds(), 64 - 6);
    assert_eq!(engine.state().seeds_in_play(), 64);
}

/// The simplified rules' opening from (1,3) is a quiet two-step sow into
/// the empty half of the inner row.
#[test]
fn simplified_rules_opening_is_quiet() {
    let mut engine = GameEngine::new(GameConfig::simplified());
    let record = engine.submit_move(Player::One, Coord::new(1, 3)).unwrap();

    assert_eq!(record.sub_turns, 1);
    assert_eq!(record.outcome, TurnOutcome::Switched { next: Player::Two });
    assert!(record
        .events
        .iter()
        .all(|ev| !matches!(ev.kind, StepKind::SeedsCaptured { .. })));

    assert_eq!(engine.state().board().count(Coord::new(1, 3)), 0);
    assert_eq!(engine.state().board().count(Coord::new(1, 4)), 1);
    assert_eq!(engine.state().board().count(Coord::new(1, 5)), 1);
    assert_eq!(engine.state().board().total_seeds(), 48);
}

/// A lone seed is sowable under the full rules and rejected under the
/// simplified threshold.
#[test]
fn lone_seed_playability_differs_between_variants() {
    let layout = [
        [1, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 2],
        [2, 0, 0, 0, 0, 0, 0, 0],
        [2, 0, 0, 0, 0, 0, 0, 0],
    ];

    let mut full = GameEngine::new(GameConfig::full().with_layout(layout));
    assert!(full.submit_move(Player::One, Coord::new(0, 0)).is_ok());

    let mut simplified = GameEngine::new(GameConfig::simplified().with_layout(layout));
    let err = simplified
        .submit_move(Player::One, Coord::new(0, 0))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidMove(InvalidMove::BelowThreshold {
            pit: Coord::new(0, 0),
            count: 1,
            min: 2,
        })
    );
}

/// Front-row-empty win through the public API: the winning capture strips
/// the opponent's inner row, the engine halts, and resubmission of the
/// same losing-side move is rejected without touching the board.
#[test]
fn front_row_empty_win_halts_submissions() {
    let layout = [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, 2, 0, 0, 0, 0, 0],
        [3, 0, 0, 0, 0, 0, 0, 0],
        [2, 2, 0, 0, 0, 0, 0, 0],
    ];
    let mut engine = GameEngine::new(GameConfig::full().with_layout(layout));
    let record = engine.submit_move(Player::One, Coord::new(1, 2)).unwrap();

    assert_eq!(
        record.outcome,
        TurnOutcome::Won {
            winner: Player::One
        }
    );
    assert!(matches!(
        record.events.last().unwrap().kind,
        StepKind::GameOver {
            winner: Player::One
        }
    ));

    let frozen = engine.state().clone();
    for _ in 0..2 {
        let err = engine
            .submit_move(Player::Two, Coord::new(3, 0))
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidMove(InvalidMove::GameOver));
        assert_eq!(engine.state(), &frozen);
    }
}

/// Players strictly alternate across switched turns; nobody moves twice
/// in a row at the submission level.
#[test]
fn turns_alternate_across_switches() {
    let mut engine = GameEngine::new(GameConfig::simplified());
    let mut mover = Player::One;

    for _ in 0..12 {
        let Some(pit) = first_playable(&engine, mover) else {
            break;
        };
        let record = engine.submit_move(mover, pit).unwrap();

        // The other player may not move out of turn while we could.
        match record.outcome {
            TurnOutcome::Switched { next } => {
                assert_eq!(next, mover.opponent());
                let err = engine.submit_move(mover, pit).unwrap_err();
                assert!(matches!(
                    err,
                    EngineError::InvalidMove(InvalidMove::OutOfTurn(_))
                ));
                mover = next;
            }
            TurnOutcome::Won { .. } => break,
        }
    }
}

#[test]
fn full_rules_game_drive_keeps_invariants() {
    let mut engine = GameEngine::new(GameConfig::full());
    let winner = drive(&mut engine, 300);

    // Whether or not the game reached a verdict within the cap, the state
    // must still be coherent.
    assert_eq!(engine.state().seeds_in_play(), 64);
    if let Some(winner) = winner {
        assert_eq!(engine.winner(), Some(winner));
        let err = engine
            .submit_move(winner, Coord::new(0, 0))
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidMove(InvalidMove::GameOver));
    }
}

#[test]
fn simplified_rules_game_drive_keeps_invariants() {
    let mut engine = GameEngine::new(GameConfig::simplified());
    let winner = drive(&mut engine, 300);

    assert_eq!(engine.state().seeds_in_play(), 48);
    if let Some(winner) = winner {
        assert_eq!(engine.winner(), Some(winner));
    }
}
