//! Façade-driven integration: a full engine round with AI seats, checking
//! the structural invariants after every operation.

use crate::ai::{AiPlayer, RandomPlayer, Strategist};
use crate::domain::cards_types::Rank;
use crate::domain::engine::{
    clear_completed_trick, deal_next_card, end_round, finalize_trump_declaration, initialize_game,
    make_trump_declaration, prepare_next_round, process_play, putback_kitty_cards,
};
use crate::domain::fixtures::{hand, playing_state, spades_two};
use crate::domain::snapshot::validate_card_conservation;
use crate::domain::state::{GamePhase, GameState, HAND_SIZE, KITTY_SIZE, PLAYERS};
use crate::errors::DomainError;
use crate::services::game_flow::{get_ai_declaration, get_ai_kitty_swap, get_ai_move};

type Seats = [Box<dyn AiPlayer + Send + Sync>; 4];

fn strategist_seats() -> Seats {
    [
        Box::new(Strategist::new(Some(1))),
        Box::new(Strategist::new(Some(2))),
        Box::new(RandomPlayer::new(Some(3))),
        Box::new(Strategist::new(Some(4))),
    ]
}

/// Drive one full round through the façade; returns the state in Scoring.
fn drive_round(mut state: GameState, ais: &Seats) -> GameState {
    let mut guard = 0;
    while state.phase == GamePhase::Dealing {
        state = deal_next_card(&state).expect("deal");
        validate_card_conservation(&state).expect("conservation during deal");

        let dealt = (state.current_player + 3) % 4;
        if let Some(decl) = get_ai_declaration(&state, dealt, ais[dealt as usize].as_ref()) {
            state = make_trump_declaration(&state, dealt, decl).expect("declare");
        }
        guard += 1;
        assert!(guard < 200, "dealing never terminated");
    }
    assert_eq!(state.phase, GamePhase::Declaring);

    // Accepted declarations must be strictly stronger across players,
    // equal-or-stronger for a self-strengthen.
    for pair in state.declarations.history.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.player == next.player {
            assert!(next.decl_type.strength() >= prev.decl_type.strength());
        } else {
            assert!(next.decl_type.strength() > prev.decl_type.strength());
        }
    }

    state = finalize_trump_declaration(&state).expect("finalize");
    let starter = state.round_starter;
    assert_eq!(state.hand(starter).len(), HAND_SIZE + KITTY_SIZE);
    for seat in 0..PLAYERS as u8 {
        if seat != starter {
            assert_eq!(state.hand(seat).len(), HAND_SIZE);
        }
    }

    let kitty = get_ai_kitty_swap(&state, starter, ais[starter as usize].as_ref()).expect("kitty");
    state = putback_kitty_cards(&state, starter, &kitty).expect("putback");
    validate_card_conservation(&state).expect("conservation after kitty");
    assert_eq!(state.kitty.len(), KITTY_SIZE);

    let mut guard = 0;
    while state.phase == GamePhase::Playing {
        let seat = state.current_player;
        let cards = get_ai_move(&state, seat, ais[seat as usize].as_ref()).expect("ai move");
        state = process_play(&state, seat, &cards).expect("process_play accepts AI move");

        if state.current_trick.as_ref().is_some_and(|t| t.is_complete()) {
            state = clear_completed_trick(&state).expect("clear");
            validate_card_conservation(&state).expect("conservation after trick");
            let first = state.hand(0).len();
            for seat in 1..PLAYERS as u8 {
                assert_eq!(state.hand(seat).len(), first, "unequal hands after trick");
            }
        }
        guard += 1;
        assert!(guard < 500, "playing never terminated");
    }
    assert_eq!(state.phase, GamePhase::Scoring);
    assert_eq!(state.trick_history.len(), HAND_SIZE);
    state
}

#[test]
fn full_round_through_the_facade() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .try_init();
    let ais = strategist_seats();
    let state = initialize_game([21u8; 32], Rank::Two);
    validate_card_conservation(&state).expect("initial conservation");

    let state = drive_round(state, &ais);
    let total_points: u32 = state.teams.iter().map(|t| t.round_points).sum();
    let kitty_points: u32 = state.kitty.iter().map(|c| c.points()).sum();
    assert_eq!(total_points + kitty_points, 200, "the double deck carries 200 points");

    let (state, result) = end_round(&state).expect("end_round");
    if !result.game_over {
        let next = prepare_next_round(&state, &result).expect("prepare");
        assert_eq!(next.phase, GamePhase::Dealing);
        assert_eq!(next.round_number, 2);
        assert_eq!(next.round_starter, result.next_starter);
        assert!(next.players.iter().all(|p| p.hand.is_empty()));
        assert!(next.trick_history.is_empty());
        validate_card_conservation(&next).expect("fresh round conservation");
    }
}

#[test]
fn same_seeds_replay_identically() {
    let run = || {
        let ais = strategist_seats();
        let state = initialize_game([22u8; 32], Rank::Two);
        drive_round(state, &ais)
    };
    assert_eq!(run(), run());
}

#[test]
fn wrong_player_is_rejected_without_state_change() {
    let state = playing_state(
        ["AH 3C", "4H 5C", "6H 7C", "8H 9C"],
        spades_two(),
        0,
    );
    let err = process_play(&state, 2, &hand("6H")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::WrongPlayer {
            expected: 0,
            actual: 2
        }
    ));
}

#[test]
fn wrong_phase_is_rejected() {
    let state = initialize_game([5u8; 32], Rank::Two);
    assert!(matches!(
        process_play(&state, 0, &hand("AH")),
        Err(DomainError::WrongPhase { .. })
    ));
    assert!(matches!(
        finalize_trump_declaration(&state),
        Err(DomainError::WrongPhase { .. })
    ));
    assert!(matches!(
        end_round(&state),
        Err(DomainError::WrongPhase { .. })
    ));
}

#[test]
fn cards_not_in_hand_are_rejected() {
    let state = playing_state(
        ["AH 3C", "4H 5C", "6H 7C", "8H 9C"],
        spades_two(),
        0,
    );
    let before = state.clone();
    let err = process_play(&state, 0, &hand("KD")).unwrap_err();
    assert!(matches!(err, DomainError::IllegalPlay(_)));
    assert_eq!(state, before, "failed op must not mutate");
}

#[test]
fn follow_violations_surface_as_illegal_play() {
    let state = playing_state(
        ["8D 8D1 3C", "QD JD 7H", "4H 5C 6C", "8H 9C TC"],
        spades_two(),
        0,
    );
    let state = process_play(&state, 0, &hand("8D 8D1")).expect("lead");
    let err = process_play(&state, 1, &hand("QD 7H")).unwrap_err();
    assert!(matches!(err, DomainError::IllegalPlay(_)));
    // The legal follow is accepted.
    assert!(process_play(&state, 1, &hand("QD JD")).is_ok());
}
