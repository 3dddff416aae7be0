//! End-of-round scoring: attacker points, kitty award, rank advancement,
//! and next-round roles.

use serde::{Deserialize, Serialize};

use crate::domain::state::{next_player, partner, team_of, GameState, PlayerId, TeamId};
use crate::errors::DomainError;

/// Everything `end_round` decides, consumed by `prepare_next_round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Attacker trick points plus the kitty award.
    pub attacker_points: u32,
    /// Face value of the point cards buried in the kitty.
    pub kitty_points: u32,
    /// What the kitty actually added: double face value when the attackers
    /// took the last trick, nothing otherwise.
    pub kitty_awarded: u32,
    pub defenders_held: bool,
    pub advancing_team: TeamId,
    pub rank_delta: u8,
    pub next_defending_team: TeamId,
    pub next_starter: PlayerId,
    pub game_over: bool,
}

/// Score a finished round. Requires the full trick history (the last trick
/// decides the kitty award).
pub fn compute_round_result(state: &GameState) -> Result<RoundResult, DomainError> {
    let attackers = state.attacking_team();
    let defenders = state.defending_team();

    let last_winner = state
        .trick_history
        .last()
        .and_then(|t| t.winner)
        .ok_or_else(|| DomainError::internal("scoring a round with no finished tricks"))?;

    let kitty_points: u32 = state.kitty.iter().map(|c| c.points()).sum();
    let kitty_awarded = if team_of(last_winner) == attackers {
        kitty_points * 2
    } else {
        0
    };
    let attacker_points = state.team(attackers).round_points + kitty_awarded;

    let (advancing_team, rank_delta, defenders_held) = if attacker_points < 80 {
        let delta = match attacker_points {
            0 => 3,
            1..=39 => 2,
            _ => 1,
        };
        (defenders, delta, true)
    } else {
        (attackers, ((attacker_points - 80) / 40) as u8, false)
    };

    let next_defending_team = if defenders_held { defenders } else { attackers };
    // The lead rotates within the winning side: the starter's partner when
    // the defense held, otherwise the attacker next in seat order.
    let next_starter = if defenders_held {
        partner(state.round_starter)
    } else {
        next_player(state.round_starter)
    };

    let game_over = state
        .team(advancing_team)
        .rank
        .advance(rank_delta)
        .is_none();

    Ok(RoundResult {
        attacker_points,
        kitty_points,
        kitty_awarded,
        defenders_held,
        advancing_team,
        rank_delta,
        next_defending_team,
        next_starter,
        game_over,
    })
}
