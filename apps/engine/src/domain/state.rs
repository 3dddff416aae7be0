//! Game state tree: players, teams, phases, and the card containers.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Rank};
use crate::domain::declarations::TrumpDeclarationState;
use crate::domain::tricks::Trick;
use crate::domain::trump::TrumpInfo;

pub type PlayerId = u8; // 0..=3

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 25;
pub const KITTY_SIZE: usize = 8;
pub const DECK_SIZE: usize = 108;

pub fn next_player(p: PlayerId) -> PlayerId {
    (p + 1) % PLAYERS as u8
}

pub fn partner(p: PlayerId) -> PlayerId {
    (p + 2) % PLAYERS as u8
}

pub fn same_team(a: PlayerId, b: PlayerId) -> bool {
    a % 2 == b % 2
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    pub fn other(self) -> TeamId {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            TeamId::A => 0,
            TeamId::B => 1,
        }
    }
}

/// Fixed partnerships: seats 0 and 2 are team A, seats 1 and 3 team B.
pub fn team_of(player: PlayerId) -> TeamId {
    if player % 2 == 0 {
        TeamId::A
    } else {
        TeamId::B
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team: TeamId,
    pub hand: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Current rank; the defending team's rank is the round's trump rank.
    pub rank: Rank,
    /// Trick points captured this round.
    pub round_points: u32,
    pub defending: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    Dealing,
    Declaring,
    KittySwap,
    Playing,
    Scoring,
    GameOver,
}

/// The full game state. Owns every card: the multiset
/// deck ∪ hands ∪ kitty ∪ current trick ∪ trick history is always the
/// 108-card double deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; 4],
    pub teams: [Team; 2],
    pub trump: TrumpInfo,
    pub phase: GamePhase,
    pub deck: Vec<Card>,
    pub kitty: Vec<Card>,
    pub current_trick: Option<Trick>,
    pub trick_history: Vec<Trick>,
    pub round_number: u32,
    pub current_player: PlayerId,
    pub round_starter: PlayerId,
    pub declarations: TrumpDeclarationState,
    pub game_seed: [u8; 32],
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    pub fn hand(&self, id: PlayerId) -> &[Card] {
        &self.players[id as usize].hand
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.index()]
    }

    pub fn defending_team(&self) -> TeamId {
        if self.teams[0].defending {
            TeamId::A
        } else {
            TeamId::B
        }
    }

    pub fn attacking_team(&self) -> TeamId {
        self.defending_team().other()
    }

    pub fn is_defender(&self, player: PlayerId) -> bool {
        team_of(player) == self.defending_team()
    }

    /// Total number of cards across every container.
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        let in_trick: usize = self
            .current_trick
            .as_ref()
            .map(Trick::cards_played)
            .unwrap_or(0);
        let in_history: usize = self.trick_history.iter().map(Trick::cards_played).sum();
        self.deck.len() + self.kitty.len() + in_hands + in_trick + in_history
    }
}
