//! Hand- and state-building helpers for tests.

use crate::domain::cards_parsing::{parse_card, parse_hand};
use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::engine::initialize_game;
use crate::domain::state::{GamePhase, GameState, PlayerId, TeamId};
use crate::domain::tricks::{Trick, TrickPlay};
use crate::domain::trump::TrumpInfo;

pub fn card(token: &str) -> Card {
    parse_card(token).expect("valid fixture card token")
}

pub fn hand(tokens: &str) -> Vec<Card> {
    parse_hand(tokens).expect("valid fixture hand tokens")
}

pub fn spades_two() -> TrumpInfo {
    TrumpInfo::new(Rank::Two, Some(Suit::Spades))
}

/// A mid-round Playing state with the given hands and trump. Card
/// conservation is not maintained; engine-driven tests build real states.
pub fn playing_state(hands: [&str; 4], trump: TrumpInfo, leader: PlayerId) -> GameState {
    let mut state = initialize_game([11u8; 32], trump.rank);
    state.trump = trump;
    state.phase = GamePhase::Playing;
    state.deck.clear();
    for (i, tokens) in hands.iter().enumerate() {
        state.players[i].hand = hand(tokens);
    }
    state.round_starter = leader;
    state.current_player = leader;
    state
}

/// Build a trick from (player, cards) plays; resolves the winner when the
/// trick is complete.
pub fn trick(leader: PlayerId, plays: &[(PlayerId, &str)], trump: &TrumpInfo) -> Trick {
    let mut t = Trick::new(leader);
    for (player, tokens) in plays {
        t.plays.push(TrickPlay {
            player: *player,
            cards: hand(tokens),
        });
    }
    if t.is_complete() {
        t.winner = t.winning_player(trump);
    }
    t
}

/// A Scoring-phase state: team A (seats 0, 2) defending, team B attacking
/// with `attacker_points` trick points, the last trick won by
/// `last_winner`, and `kitty_tokens` buried.
pub fn scored_state(
    attacker_points: u32,
    last_winner: PlayerId,
    kitty_tokens: &str,
    starter: PlayerId,
) -> GameState {
    let trump = spades_two();
    let mut state = initialize_game([13u8; 32], trump.rank);
    state.trump = trump;
    state.phase = GamePhase::Scoring;
    state.deck.clear();
    state.kitty = hand(kitty_tokens);
    state.round_starter = starter;
    state.teams[TeamId::A.index()].defending = true;
    state.teams[TeamId::B.index()].defending = false;
    state.teams[TeamId::B.index()].round_points = attacker_points;
    state.trick_history = vec![trick(
        last_winner,
        &[
            (last_winner, "3C"),
            ((last_winner + 1) % 4, "4C"),
            ((last_winner + 2) % 4, "6C"),
            ((last_winner + 3) % 4, "7C"),
        ],
        &trump,
    )];
    // The fixture's last "trick" leads with the winner's own card so the
    // recorded winner matches the leader.
    state.trick_history[0].winner = Some(last_winner);
    state
}
