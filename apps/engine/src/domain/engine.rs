//! The engine façade: every operation the UI or a harness drives.
//!
//! All operations are pure transitions from a state and an input to a new
//! state:
//! validation happens against the input state, the clone is mutated, and a
//! failed operation leaves the caller's state untouched.

use tracing::{debug, info};

use crate::domain::cards_types::{Card, Rank};
use crate::domain::dealing::shuffled_deck;
use crate::domain::declarations::{validate_declaration, TrumpDeclaration, TrumpDeclarationState};
use crate::domain::plays::{all_in_hand, validate_follow, validate_lead};
use crate::domain::scoring::{compute_round_result, RoundResult};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{
    next_player, team_of, GamePhase, GameState, Player, PlayerId, Team, TeamId, KITTY_SIZE,
};
use crate::domain::tricks::{Trick, TrickPlay};
use crate::domain::trump::TrumpInfo;
use crate::errors::{DomainError, PlayViolation};

/// A fresh game: shuffled double deck, both teams at `starting_rank`,
/// team A provisionally defending until a round-one declaration names the
/// starter.
pub fn initialize_game(seed: [u8; 32], starting_rank: Rank) -> GameState {
    let deck = shuffled_deck(derive_dealing_seed(&seed, 1));
    let state = GameState {
        players: [0u8, 1, 2, 3].map(|id| Player {
            id,
            team: team_of(id),
            hand: Vec::new(),
        }),
        teams: [
            Team {
                id: TeamId::A,
                rank: starting_rank,
                round_points: 0,
                defending: true,
            },
            Team {
                id: TeamId::B,
                rank: starting_rank,
                round_points: 0,
                defending: false,
            },
        ],
        trump: TrumpInfo::new(starting_rank, None),
        phase: GamePhase::Dealing,
        deck,
        kitty: Vec::new(),
        current_trick: None,
        trick_history: Vec::new(),
        round_number: 1,
        current_player: 0,
        round_starter: 0,
        declarations: TrumpDeclarationState::new(),
        game_seed: seed,
    };
    info!(op = "initialize_game", rank = ?starting_rank, "game initialized");
    state
}

/// Move one card from the deck into the current player's hand. When only
/// the kitty remains, dealing ends and the declaration window opens.
pub fn deal_next_card(state: &GameState) -> Result<GameState, DomainError> {
    require_phase(state, GamePhase::Dealing)?;

    let mut next = state.clone();
    let card = next
        .deck
        .pop()
        .ok_or_else(|| DomainError::internal("dealing from an empty deck"))?;
    let dealt_to = next.current_player;
    let hand = &mut next.players[dealt_to as usize].hand;
    hand.push(card);
    hand.sort();
    next.current_player = next_player(dealt_to);

    if next.deck.len() == KITTY_SIZE {
        next.phase = GamePhase::Declaring;
        debug!(op = "deal_next_card", "deal complete, declaration window open");
    }
    Ok(next)
}

/// Register a trump declaration if it beats the standing one.
pub fn make_trump_declaration(
    state: &GameState,
    player: PlayerId,
    decl: TrumpDeclaration,
) -> Result<GameState, DomainError> {
    if !matches!(state.phase, GamePhase::Dealing | GamePhase::Declaring) {
        return Err(DomainError::WrongPhase {
            expected: GamePhase::Dealing,
            actual: state.phase,
        });
    }
    if decl.player != player {
        return Err(DomainError::WrongPlayer {
            expected: player,
            actual: decl.player,
        });
    }
    validate_declaration(&decl, state.hand(player), state.trump.rank)?;
    state.declarations.accepts(&decl)?;

    let mut next = state.clone();
    next.trump.suit = decl.suit;
    if next.round_number == 1 {
        // Round one has no predetermined starter: the first (and every
        // overriding) declarer claims it, and their team defends.
        next.round_starter = player;
        let defending = team_of(player);
        for team in &mut next.teams {
            team.defending = team.id == defending;
        }
        next.trump.rank = next.team(defending).rank;
    }
    info!(
        op = "make_trump_declaration",
        player,
        decl_type = ?decl.decl_type,
        suit = ?decl.suit,
        "trump declaration accepted"
    );
    next.declarations.record(decl);
    Ok(next)
}

/// Lock the trump for the round and hand the kitty to the round starter.
pub fn finalize_trump_declaration(state: &GameState) -> Result<GameState, DomainError> {
    require_phase(state, GamePhase::Declaring)?;

    let mut next = state.clone();
    if next.deck.len() != KITTY_SIZE {
        return Err(DomainError::internal(format!(
            "finalizing with {} cards undealt, expected the {KITTY_SIZE}-card kitty",
            next.deck.len()
        )));
    }
    let starter = next.round_starter;
    let kitty_cards: Vec<Card> = next.deck.drain(..).collect();
    let hand = &mut next.players[starter as usize].hand;
    hand.extend(kitty_cards);
    hand.sort();
    next.phase = GamePhase::KittySwap;
    next.current_player = starter;
    info!(
        op = "finalize_trump_declaration",
        rank = ?next.trump.rank,
        suit = ?next.trump.suit,
        starter,
        "trump locked"
    );
    Ok(next)
}

/// The round starter buries exactly eight cards, then play begins.
pub fn putback_kitty_cards(
    state: &GameState,
    player: PlayerId,
    cards: &[Card],
) -> Result<GameState, DomainError> {
    require_phase(state, GamePhase::KittySwap)?;
    if player != state.round_starter {
        return Err(DomainError::WrongPlayer {
            expected: state.round_starter,
            actual: player,
        });
    }
    if cards.len() != KITTY_SIZE {
        return Err(PlayViolation::WrongLength {
            expected: KITTY_SIZE,
            actual: cards.len(),
        }
        .into());
    }
    if !all_in_hand(cards, state.hand(player)) {
        return Err(PlayViolation::CardsNotInHand.into());
    }

    let mut next = state.clone();
    remove_from_hand(&mut next, player, cards)?;
    next.kitty = cards.to_vec();
    next.phase = GamePhase::Playing;
    next.current_player = next.round_starter;
    next.current_trick = None;
    info!(op = "putback_kitty_cards", player, "kitty buried, play begins");
    Ok(next)
}

/// Submit one player's cards for the current trick. The fourth play
/// resolves the winner; awarding and archiving wait for
/// [`clear_completed_trick`] so a UI can display the result.
pub fn process_play(
    state: &GameState,
    player: PlayerId,
    cards: &[Card],
) -> Result<GameState, DomainError> {
    require_phase(state, GamePhase::Playing)?;
    if player != state.current_player {
        return Err(DomainError::WrongPlayer {
            expected: state.current_player,
            actual: player,
        });
    }
    if state
        .current_trick
        .as_ref()
        .is_some_and(Trick::is_complete)
    {
        return Err(DomainError::internal(
            "completed trick must be cleared before the next play",
        ));
    }
    if !all_in_hand(cards, state.hand(player)) {
        return Err(PlayViolation::CardsNotInHand.into());
    }
    match state.current_trick.as_ref().and_then(Trick::leading_cards) {
        None => validate_lead(cards, &state.trump)?,
        Some(leading) => validate_follow(cards, leading, state.hand(player), &state.trump)?,
    }

    let mut next = state.clone();
    remove_from_hand(&mut next, player, cards)?;
    let trump = next.trump;
    let trick = next.current_trick.get_or_insert_with(|| Trick::new(player));
    trick.plays.push(TrickPlay {
        player,
        cards: cards.to_vec(),
    });
    if trick.is_complete() {
        trick.winner = trick.winning_player(&trump);
        debug!(op = "process_play", player, winner = ?trick.winner, "trick resolved");
    } else {
        next.current_player = next_player(player);
        debug!(op = "process_play", player, "play accepted");
    }
    Ok(next)
}

/// Archive a resolved trick: award its points, seat the winner as the next
/// leader, and move to scoring once the hands are empty.
pub fn clear_completed_trick(state: &GameState) -> Result<GameState, DomainError> {
    require_phase(state, GamePhase::Playing)?;

    let mut next = state.clone();
    let trick = match next.current_trick.take() {
        Some(t) if t.is_complete() => t,
        _ => return Err(DomainError::internal("no completed trick to clear")),
    };
    let winner = trick
        .winner
        .ok_or_else(|| DomainError::internal("completed trick without a resolved winner"))?;
    let points = trick.points();
    next.team_mut(team_of(winner)).round_points += points;
    next.trick_history.push(trick);
    next.current_player = winner;

    if next.players.iter().all(|p| p.hand.is_empty()) {
        next.phase = GamePhase::Scoring;
    }
    info!(op = "clear_completed_trick", winner, points, "trick cleared");
    Ok(next)
}

/// Score the finished round and apply rank advancement. The returned
/// [`RoundResult`] feeds [`prepare_next_round`].
pub fn end_round(state: &GameState) -> Result<(GameState, RoundResult), DomainError> {
    require_phase(state, GamePhase::Scoring)?;
    let result = compute_round_result(state)?;

    let mut next = state.clone();
    match next.team(result.advancing_team).rank.advance(result.rank_delta) {
        Some(rank) => next.team_mut(result.advancing_team).rank = rank,
        None => next.phase = GamePhase::GameOver,
    }
    info!(
        op = "end_round",
        attacker_points = result.attacker_points,
        advancing = ?result.advancing_team,
        delta = result.rank_delta,
        game_over = result.game_over,
        "round scored"
    );
    Ok((next, result))
}

/// Reset the table for the next round: fresh deck, swapped or held roles,
/// the new defending team's rank as trump rank, and the decided starter.
pub fn prepare_next_round(
    state: &GameState,
    result: &RoundResult,
) -> Result<GameState, DomainError> {
    require_phase(state, GamePhase::Scoring)?;

    let mut next = state.clone();
    next.round_number += 1;
    for team in &mut next.teams {
        team.defending = team.id == result.next_defending_team;
        team.round_points = 0;
    }
    next.trump = TrumpInfo::new(next.team(result.next_defending_team).rank, None);
    next.round_starter = result.next_starter;
    next.current_player = result.next_starter;
    next.deck = shuffled_deck(derive_dealing_seed(&next.game_seed, next.round_number));
    for player in &mut next.players {
        player.hand.clear();
    }
    next.kitty.clear();
    next.current_trick = None;
    next.trick_history.clear();
    next.declarations = TrumpDeclarationState::new();
    next.phase = GamePhase::Dealing;
    info!(
        op = "prepare_next_round",
        round = next.round_number,
        starter = next.round_starter,
        rank = ?next.trump.rank,
        "next round prepared"
    );
    Ok(next)
}

fn require_phase(state: &GameState, expected: GamePhase) -> Result<(), DomainError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(DomainError::WrongPhase {
            expected,
            actual: state.phase,
        })
    }
}

fn remove_from_hand(
    state: &mut GameState,
    player: PlayerId,
    cards: &[Card],
) -> Result<(), DomainError> {
    let hand = &mut state.players[player as usize].hand;
    for card in cards {
        match hand.iter().position(|c| c == card) {
            Some(i) => {
                hand.remove(i);
            }
            None => {
                return Err(DomainError::internal(format!(
                    "card {card} vanished from player {player}'s hand mid-operation"
                )))
            }
        }
    }
    Ok(())
}
