//! Card memory: everything an AI may remember, rebuilt from the completed
//! trick history.
//!
//! Memory is a pure function of (history, trump). Void inference is
//! monotone: once a seat shows out of a group it stays marked for the
//! round.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::cards_types::{Card, CardFace};
use crate::domain::player_view::SeatView;
use crate::domain::state::PlayerId;
use crate::domain::tricks::Trick;
use crate::domain::trump::{compare_cards, EffectiveSuit, TrumpInfo};

/// What has been observed about one seat.
#[derive(Debug, Clone, Default)]
pub struct PlayerMemory {
    /// Cards this seat has shown, in play order.
    pub known_cards: Vec<Card>,
    /// Groups this seat has proven void in.
    pub voids: BTreeSet<EffectiveSuit>,
}

impl PlayerMemory {
    pub fn is_void(&self, group: EffectiveSuit) -> bool {
        self.voids.contains(&group)
    }
}

/// Shared memory of the round so far.
#[derive(Debug, Clone, Default)]
pub struct CardMemory {
    /// Multiset of every card played in completed tricks.
    pub played: Vec<Card>,
    played_faces: BTreeMap<CardFace, u8>,
    pub players: [PlayerMemory; 4],
    pub tricks_analyzed: usize,
}

impl CardMemory {
    pub fn from_view(view: &SeatView<'_>) -> Self {
        Self::from_history(view.trick_history, view.trump)
    }

    pub fn from_history(history: &[Trick], trump: &TrumpInfo) -> Self {
        let mut memory = CardMemory::default();
        for trick in history {
            memory.absorb_trick(trick, trump);
        }
        memory
    }

    fn absorb_trick(&mut self, trick: &Trick, trump: &TrumpInfo) {
        let lead_group = trick
            .leading_cards()
            .and_then(|cards| cards.first().map(|&c| trump.effective_suit(c)));

        for (i, play) in trick.plays.iter().enumerate() {
            let seat = &mut self.players[play.player as usize];
            seat.known_cards.extend(play.cards.iter().copied());
            for &card in &play.cards {
                self.played.push(card);
                *self.played_faces.entry(card.face()).or_default() += 1;
            }

            if i == 0 {
                continue;
            }
            let Some(group) = lead_group else { continue };
            let followed = play
                .cards
                .iter()
                .all(|&c| trump.effective_suit(c) == group);
            if !followed {
                // Off-group cards prove the void, whether chosen or forced
                // by an exhausted suit.
                seat.voids.insert(group);
                if group != EffectiveSuit::Trump
                    && play.cards.iter().all(|&c| !trump.is_trump(c))
                {
                    // Could not follow and still produced no trump.
                    seat.voids.insert(EffectiveSuit::Trump);
                }
            }
        }
        self.tricks_analyzed += 1;
    }

    /// Copies of a face not yet seen in completed tricks (0..=2).
    pub fn unseen_copies(&self, face: CardFace) -> u8 {
        2 - self.played_faces.get(&face).copied().unwrap_or(0).min(2)
    }

    /// Point mass still unaccounted for in a plain suit. Every suit starts
    /// at 50 (two 5s, two 10s, two kings) and sheds what the history shows.
    pub fn suit_point_potential(&self, suit: crate::domain::cards_types::Suit) -> u32 {
        let seen: u32 = self
            .played
            .iter()
            .filter(|c| c.suit() == Some(suit))
            .map(|c| c.points())
            .sum();
        50u32.saturating_sub(seen)
    }

    pub fn is_void(&self, seat: PlayerId, group: EffectiveSuit) -> bool {
        self.players[seat as usize].is_void(group)
    }

    /// A guaranteed winner: no copy of any strictly stronger card of the
    /// same group remains outside `own_hand` and the played history.
    pub fn is_guaranteed_winner(&self, card: Card, trump: &TrumpInfo, own_hand: &[Card]) -> bool {
        let group = trump.effective_suit(card);
        for face in all_faces() {
            let probe = face.card(0);
            if trump.effective_suit(probe) != group {
                continue;
            }
            if compare_cards(probe, card, trump) != std::cmp::Ordering::Greater {
                continue;
            }
            let held = own_hand.iter().filter(|c| c.face() == face).count() as u8;
            if self.unseen_copies(face) > held {
                return false;
            }
        }
        true
    }
}

fn all_faces() -> impl Iterator<Item = CardFace> {
    use crate::domain::cards_types::{JokerKind, Rank, Suit};
    let suited = Suit::ALL.into_iter().flat_map(|suit| {
        Rank::ALL
            .into_iter()
            .map(move |rank| CardFace::Suited { suit, rank })
    });
    suited.chain([
        CardFace::Joker(JokerKind::Small),
        CardFace::Joker(JokerKind::Big),
    ])
}
