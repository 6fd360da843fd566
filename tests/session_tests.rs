//! Session, replay and playout integration tests.

use ludo_engine::core::{
    DieSource, EngineConfig, GameState, LudoError, LudoEvent, OvershootPolicy, PlayerId,
    ScriptedDice, TRACK_END,
};
use ludo_engine::rules::TurnEngine;
use ludo_engine::session::{play_out, replay, LudoGameBuilder, RollRecord, DEFAULT_MAX_ROLLS};
use ludo_engine::{DieValue, GameRng};

/// Drive the engine by hand with a scripted die, the way a presentation
/// layer would: roll, apply, render events.
#[test]
fn test_scripted_dice_drive_engine() {
    let engine = TurnEngine::default();
    // A: 6 then 4. B: 2 (blocked). C: 6, 6, 1. D: 3 (blocked).
    let mut dice = ScriptedDice::new(&[6, 4, 2, 6, 6, 1, 3]).unwrap();
    let mut state = GameState::new();
    let mut log = Vec::new();

    for _ in 0..7 {
        let value = engine.roll_die(&mut dice);
        let outcome = engine
            .apply_roll(&state, state.current_turn(), value.get())
            .unwrap();
        log.extend(outcome.events.iter().copied());
        state = outcome.state;
    }

    assert_eq!(state.positions().values(), &[10, 0, 13, 0]);
    assert_eq!(state.current_turn(), PlayerId(0));
    assert_eq!(state.turn_number(), 5);
    assert_eq!(state.rolls_applied(), 7);
    let blocked = log
        .iter()
        .filter(|e| matches!(e, LudoEvent::BlockedAtHome { .. }))
        .count();
    assert_eq!(blocked, 2);
}

#[test]
fn test_replay_rejects_out_of_order_history() {
    let records = [
        RollRecord {
            turn_number: 1,
            player: PlayerId(0),
            value: DieValue::new(3).unwrap(),
        },
        RollRecord {
            turn_number: 2,
            player: PlayerId(2),
            value: DieValue::new(3).unwrap(),
        },
    ];

    assert_eq!(
        replay(&EngineConfig::default(), &GameState::new(), &records).unwrap_err(),
        LudoError::OutOfTurn {
            expected: PlayerId(1),
            actual: PlayerId(2),
        }
    );
}

#[test]
fn test_replay_from_session_start() {
    let start = GameState::from_positions([0, 30, 12, 0], PlayerId(1)).unwrap();
    let mut game = LudoGameBuilder::new().start_from(start).build(4);
    play_out(&mut game, DEFAULT_MAX_ROLLS, |_| {}).unwrap();

    let replayed = replay(game.engine().config(), game.start(), game.history()).unwrap();
    assert_eq!(&replayed, game.state());
}

#[test]
fn test_replay_of_finished_game() {
    for seed in 0..5 {
        let mut game = LudoGameBuilder::new().build(seed);
        play_out(&mut game, DEFAULT_MAX_ROLLS, |_| {}).unwrap();

        let replayed = replay(game.engine().config(), game.start(), game.history()).unwrap();
        assert_eq!(&replayed, game.state());
        assert!(replayed.is_finished());
    }
}

#[test]
fn test_history_serializes() {
    let mut game = LudoGameBuilder::new().build(9);
    for _ in 0..20 {
        game.roll().unwrap();
    }

    let json = serde_json::to_string(game.history()).unwrap();
    let records: Vec<RollRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records, game.history());
}

#[test]
fn test_playouts_reach_goal_for_both_policies() {
    for policy in [OvershootPolicy::KeepTurn, OvershootPolicy::ForfeitTurn] {
        for seed in 0..10 {
            let mut game = LudoGameBuilder::new()
                .config(EngineConfig::new().with_overshoot(policy))
                .build(seed);
            let stats = play_out(&mut game, DEFAULT_MAX_ROLLS, |_| {}).unwrap();

            let winner = stats.winner.unwrap();
            assert_eq!(game.state().position_of(winner), TRACK_END);
            for player in PlayerId::all().filter(|&p| p != winner) {
                assert!(game.state().position_of(player) < TRACK_END);
            }
        }
    }
}

#[test]
fn test_forked_seeds_drive_batch_games() {
    let seeds = |master_seed| {
        let mut master = GameRng::new(master_seed);
        (0..8).map(|_| master.fork().seed()).collect::<Vec<u64>>()
    };
    let batch = seeds(42);
    assert_eq!(batch, seeds(42));
    for (i, seed) in batch.iter().enumerate() {
        assert!(!batch[i + 1..].contains(seed));
    }

    let run = |seed| {
        let mut game = LudoGameBuilder::new().build(seed);
        play_out(&mut game, DEFAULT_MAX_ROLLS, |_| {}).unwrap();
        game.history().to_vec()
    };
    assert_eq!(run(batch[0]), run(batch[0]));
    assert_ne!(run(batch[0]), run(batch[1]));
}

#[test]
fn test_moves_feed_animation_pairs() {
    let mut game = LudoGameBuilder::new().build(21);
    let mut moves = Vec::new();
    play_out(&mut game, 300, |event| {
        if let LudoEvent::Moved { from, to, .. } = *event {
            moves.push((from, to));
        }
    })
    .unwrap();

    assert!(!moves.is_empty());
    for (from, to) in moves {
        assert!(to > from && to - from <= 6);
        assert!(to <= TRACK_END);
    }
}

#[test]
fn test_advance_turn_on_session() {
    let mut game = LudoGameBuilder::new().build(1);
    assert_eq!(game.advance_turn().unwrap().current_turn(), PlayerId(1));

    game.apply(PlayerId(1), 6).unwrap();
    // Bonus roll pending: the turn stays.
    assert_eq!(game.advance_turn().unwrap().current_turn(), PlayerId(1));
}

#[test]
fn test_scripted_dice_as_trait_object() {
    let mut dice = ScriptedDice::new(&[5]).unwrap();
    let source: &mut dyn DieSource = &mut dice;
    assert_eq!(TurnEngine::default().roll_die(source).get(), 5);
}
