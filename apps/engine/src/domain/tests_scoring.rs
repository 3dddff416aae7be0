//! Round scoring and rank advancement scenarios.

use crate::domain::cards_types::Rank;
use crate::domain::engine::end_round;
use crate::domain::fixtures::scored_state;
use crate::domain::scoring::compute_round_result;
use crate::domain::state::{GamePhase, TeamId};

// Team A (seats 0, 2) defends in every fixture; team B attacks.

#[test]
fn shutout_gives_defenders_three_ranks() {
    // A shutout round: the attackers never captured a point.
    let state = scored_state(0, 0, "3D 4D", 0);
    let result = compute_round_result(&state).unwrap();
    assert_eq!(result.advancing_team, TeamId::A);
    assert_eq!(result.rank_delta, 3);
    assert!(result.defenders_held);
}

#[test]
fn advancement_table_breakpoints() {
    for (points, team, delta) in [
        (35, TeamId::A, 2),
        (60, TeamId::A, 1),
        (79, TeamId::A, 1),
        (80, TeamId::B, 0),
        (119, TeamId::B, 0),
        (120, TeamId::B, 1),
        (160, TeamId::B, 2),
        (200, TeamId::B, 3),
    ] {
        let state = scored_state(points, 0, "3D 4D", 0);
        let result = compute_round_result(&state).unwrap();
        assert_eq!(result.advancing_team, team, "at {points} points");
        assert_eq!(result.rank_delta, delta, "at {points} points");
        assert_eq!(result.defenders_held, team == TeamId::A);
    }
}

#[test]
fn attackers_taking_the_last_trick_double_the_kitty() {
    // 15 kitty points; last trick to attacker seat 1 doubles them to 30.
    let state = scored_state(60, 1, "5D TD", 0);
    let result = compute_round_result(&state).unwrap();
    assert_eq!(result.kitty_points, 15);
    assert_eq!(result.kitty_awarded, 30);
    assert_eq!(result.attacker_points, 90);
    assert!(!result.defenders_held);
}

#[test]
fn defenders_taking_the_last_trick_kill_the_kitty() {
    let state = scored_state(60, 2, "5D TD", 0);
    let result = compute_round_result(&state).unwrap();
    assert_eq!(result.kitty_awarded, 0);
    assert_eq!(result.attacker_points, 60);
    assert!(result.defenders_held);
}

#[test]
fn next_starter_rotates_within_the_winning_side() {
    // Defense held: the starter's partner leads next.
    let state = scored_state(60, 0, "3D 4D", 0);
    let result = compute_round_result(&state).unwrap();
    assert_eq!(result.next_defending_team, TeamId::A);
    assert_eq!(result.next_starter, 2);

    // Attackers won: the attacker after the old starter leads next.
    let state = scored_state(120, 0, "3D 4D", 0);
    let result = compute_round_result(&state).unwrap();
    assert_eq!(result.next_defending_team, TeamId::B);
    assert_eq!(result.next_starter, 1);
}

#[test]
fn end_round_applies_advancement() {
    let state = scored_state(0, 0, "3D 4D", 0);
    let (next, result) = end_round(&state).unwrap();
    assert_eq!(result.rank_delta, 3);
    assert_eq!(next.team(TeamId::A).rank, Rank::Five);
    assert_eq!(next.team(TeamId::B).rank, Rank::Two);
    assert_eq!(next.phase, GamePhase::Scoring);
}

#[test]
fn advancing_past_ace_ends_the_game() {
    let mut state = scored_state(0, 0, "3D 4D", 0);
    state.teams[TeamId::A.index()].rank = Rank::King;
    state.trump.rank = Rank::King;
    let (next, result) = end_round(&state).unwrap();
    assert!(result.game_over);
    assert_eq!(next.phase, GamePhase::GameOver);
    // The rank never advances past Ace.
    assert_eq!(next.team(TeamId::A).rank, Rank::King);
}

#[test]
fn exactly_one_team_advances_and_never_backwards() {
    for points in [0u32, 10, 40, 79, 80, 115, 160, 245] {
        let state = scored_state(points, 1, "3D 4D", 0);
        let before = [state.teams[0].rank, state.teams[1].rank];
        let (next, result) = end_round(&state).unwrap();
        let after = [next.teams[0].rank, next.teams[1].rank];
        assert!(after[0] >= before[0] && after[1] >= before[1]);
        let advanced = usize::from(after[0] > before[0]) + usize::from(after[1] > before[1]);
        assert!(advanced <= 1, "at {points} points");
        if result.rank_delta > 0 && !result.game_over {
            assert_eq!(advanced, 1);
        }
    }
}
