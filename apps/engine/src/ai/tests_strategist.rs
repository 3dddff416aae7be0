//! Strategist decision scenarios: contribute, beat, ruff, dispose.

use crate::ai::memory::CardMemory;
use crate::ai::trait_def::AiPlayer;
use crate::ai::Strategist;
use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::fixtures::{hand, playing_state, trick};
use crate::domain::player_view::SeatView;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::trump::TrumpInfo;

fn hearts_two() -> TrumpInfo {
    TrumpInfo::new(Rank::Two, Some(Suit::Hearts))
}

fn choose(state: &GameState, seat: PlayerId) -> Vec<Card> {
    let view = SeatView::new(state, seat);
    let memory = CardMemory::from_view(&view);
    Strategist::new(None)
        .choose_play(&view, &memory)
        .expect("strategist move")
}

/// Put a partial trick on the table and hand the turn to `seat`.
fn with_trick(
    mut state: GameState,
    leader: PlayerId,
    plays: &[(PlayerId, &str)],
    seat: PlayerId,
) -> GameState {
    let trump = state.trump;
    state.current_trick = Some(trick(leader, plays, &trump));
    state.current_player = seat;
    state
}

#[test]
fn fourth_seat_wins_a_rich_trick_as_cheaply_as_possible() {
    // Opponent winning, 20 points down, 9S and TS pairs
    // in hand. The 9S pair wins the trick; the TS pair would waste points.
    let trump = hearts_two();
    let state = playing_state(
        ["3C", "4C", "5C", "9S 9S1 TS TS1 3D"],
        trump,
        0,
    );
    let state = with_trick(
        state,
        0,
        &[(0, "8S 8S1"), (1, "5S 5S1"), (2, "5D 5D1")],
        3,
    );
    assert_eq!(choose(&state, 3), hand("9S 9S1"));
}

#[test]
fn fourth_seat_feeds_points_to_a_winning_teammate() {
    // Teammate holds the trick with an ace pair; the
    // point-bearing TS pair goes over the 9S pair.
    let trump = hearts_two();
    let state = playing_state(
        ["3C", "4C", "5C", "9S 9S1 TS TS1 3D"],
        trump,
        0,
    );
    let state = with_trick(
        state,
        0,
        &[(0, "4S 4S1"), (1, "AS AS1"), (2, "6S 6S1")],
        3,
    );
    assert_eq!(choose(&state, 3), hand("TS TS1"));
}

#[test]
fn void_seat_refuses_to_waste_a_joker_pair_it_cannot_win_with() {
    // The opponent already ruffed with the Big Joker
    // pair. The Small Joker pair cannot beat it, so the cheapest cards go.
    let trump = TrumpInfo::new(Rank::Two, Some(Suit::Diamonds));
    let state = playing_state(
        ["9H 3H", "BJ BJ1 4C", "SJ SJ1 3C 3C1 9S 9S1", "7H 7H1"],
        trump,
        3,
    );
    let state = with_trick(
        state,
        3,
        &[(3, "7H 7H1"), (0, "9H 3H"), (1, "BJ BJ1")],
        2,
    );
    assert_eq!(choose(&state, 2), hand("3C 3C1"));
}

#[test]
fn void_seat_ruffs_a_low_trick_with_a_medium_trump_only() {
    let trump = TrumpInfo::new(Rank::Two, Some(Suit::Spades));
    // Second seat behind an opponent's lead, no points on the table: the
    // king pair is a reasonable ruff, the joker pair is not.
    let state = playing_state(
        ["9H 3H", "9H1 6H", "KS KS1 BJ BJ1 4C", "7C 8C"],
        trump,
        1,
    );
    let state = with_trick(state, 1, &[(1, "9H 9H1")], 2);
    assert_eq!(choose(&state, 2), hand("KS KS1"));
}

#[test]
fn void_seat_holds_back_jokers_on_a_worthless_trick() {
    let trump = TrumpInfo::new(Rank::Two, Some(Suit::Spades));
    // Only the joker pair would win; the trick is worthless, so dispose.
    let state = playing_state(
        ["9H 3H", "9H1 6H", "BJ BJ1 4C 5C1", "7C 8C"],
        trump,
        1,
    );
    let state = with_trick(state, 1, &[(1, "9H 9H1")], 2);
    assert_eq!(choose(&state, 2), hand("4C 5C1"));
}

#[test]
fn void_seat_spends_a_joker_pair_on_a_rich_trick() {
    let trump = TrumpInfo::new(Rank::Two, Some(Suit::Spades));
    let state = playing_state(
        ["9H 3H", "KH KH1", "BJ BJ1 4C 5C1", "7C 8C"],
        trump,
        1,
    );
    // A king pair led: 20 points on the table.
    let state = with_trick(state, 1, &[(1, "KH KH1")], 2);
    assert_eq!(choose(&state, 2), hand("BJ BJ1"));
}

#[test]
fn void_seat_feeds_points_when_the_teammate_is_safe() {
    let trump = TrumpInfo::new(Rank::Two, Some(Suit::Spades));
    // Teammate (seat 0) ruffed with the big joker; seat 2 is void in
    // hearts and holds point cards to donate.
    let state = playing_state(
        ["BJ 3H", "4H 6H", "TD KC 3C 4C1", "7C 8C"],
        trump,
        3,
    );
    let state = with_trick(state, 3, &[(3, "9H 9H1"), (0, "BJ BJ1"), (1, "4H 6H")], 2);
    let play = choose(&state, 2);
    assert_eq!(play, hand("TD KC"));
}

#[test]
fn single_valid_combo_is_forced() {
    let trump = hearts_two();
    let state = playing_state(
        ["3C", "QD JD 7D", "5C", "9S"],
        trump,
        0,
    );
    let state = with_trick(state, 0, &[(0, "8D 8D1")], 1);
    // Only one pair shape exists? No pair at all: enough-remaining path
    // must still produce two diamonds.
    let play = choose(&state, 1);
    assert_eq!(play.len(), 2);
    assert!(play.iter().all(|c| c.suit() == Some(Suit::Diamonds)));
}

#[test]
fn leading_seat_cashes_a_guaranteed_winner() {
    let trump = hearts_two();
    let state = playing_state(
        ["AD 7D 3C 4C", "QD JD 7H", "5C 6C", "9S TS"],
        trump,
        0,
    );
    let play = choose(&state, 0);
    assert_eq!(play, hand("AD"));
}
