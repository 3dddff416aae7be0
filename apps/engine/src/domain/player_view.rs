//! Per-seat projection of game state: what a player (or their AI) may see
//! at a decision point.

use crate::domain::cards_types::Card;
use crate::domain::state::{same_team, GamePhase, GameState, PlayerId, Team};
use crate::domain::tricks::{Trick, TrickPlay};
use crate::domain::trump::TrumpInfo;

/// Read-only view for one seat. Everything here is either public (tricks,
/// teams, trump) or the seat's own hand; AI implementations receive this
/// instead of reaching into other hands.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub seat: PlayerId,
    pub hand: &'a [Card],
    pub trump: &'a TrumpInfo,
    pub phase: GamePhase,
    pub current_trick: Option<&'a Trick>,
    pub trick_history: &'a [Trick],
    pub teams: &'a [Team; 2],
    pub round_starter: PlayerId,
    pub defending: bool,
}

impl<'a> SeatView<'a> {
    pub fn new(state: &'a GameState, seat: PlayerId) -> Self {
        Self {
            seat,
            hand: state.hand(seat),
            trump: &state.trump,
            phase: state.phase,
            current_trick: state.current_trick.as_ref(),
            trick_history: &state.trick_history,
            teams: &state.teams,
            round_starter: state.round_starter,
            defending: state.is_defender(seat),
        }
    }

    /// The leader's cards of the trick in progress, `None` when this seat
    /// leads.
    pub fn leading_cards(&self) -> Option<&'a [Card]> {
        self.current_trick.and_then(Trick::leading_cards)
    }

    /// 0 when leading, 1..=3 otherwise.
    pub fn position_in_trick(&self) -> usize {
        self.current_trick.map_or(0, |t| t.plays.len())
    }

    pub fn is_last_to_play(&self) -> bool {
        self.position_in_trick() == 3
    }

    /// Point cards on the table so far this trick.
    pub fn trick_points(&self) -> u32 {
        self.current_trick.map_or(0, Trick::points)
    }

    /// The play currently taking the trick, if any cards are down.
    pub fn current_winning_play(&self) -> Option<&'a TrickPlay> {
        let trick = self.current_trick?;
        trick.winning_index(self.trump).map(|i| &trick.plays[i])
    }

    pub fn is_teammate(&self, other: PlayerId) -> bool {
        same_team(self.seat, other)
    }

    /// Seats that still play after this one in the current trick.
    pub fn seats_after(&self) -> Vec<PlayerId> {
        let trick_len = self.position_in_trick();
        (trick_len + 1..4)
            .map(|offset| {
                let lead = self
                    .current_trick
                    .map_or(self.seat, |t| t.leader);
                (lead + offset as u8) % 4
            })
            .collect()
    }
}
