//! Card primitives: suits, ranks, jokers, and the double-deck card type.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in the 2..A ladder: Two = 0, Ace = 12.
    pub fn index(self) -> u8 {
        Rank::ALL
            .iter()
            .position(|&r| r == self)
            .unwrap_or_default() as u8
    }

    /// Point value carried by cards of this rank.
    pub fn points(self) -> u32 {
        match self {
            Rank::Five => 5,
            Rank::Ten | Rank::King => 10,
            _ => 0,
        }
    }

    /// Advance a team rank by `by` steps. `None` means the rank passed Ace
    /// and the game is over.
    pub fn advance(self, by: u8) -> Option<Rank> {
        let target = self.index() as usize + by as usize;
        Rank::ALL.get(target).copied()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum JokerKind {
    Small,
    Big,
}

/// Which of the two physical decks a card came from.
pub type DeckId = u8;

/// A physical card in the 108-card double deck.
///
/// Identity is (face, deck): two cards with the same face but different deck
/// ids are distinct physical cards that are nonetheless equal in play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Suited { suit: Suit, rank: Rank, deck: DeckId },
    Joker { kind: JokerKind, deck: DeckId },
}

impl Card {
    pub fn suited(suit: Suit, rank: Rank, deck: DeckId) -> Self {
        Card::Suited { suit, rank, deck }
    }

    pub fn joker(kind: JokerKind, deck: DeckId) -> Self {
        Card::Joker { kind, deck }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(suit),
            Card::Joker { .. } => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker { .. } => None,
        }
    }

    pub fn deck(self) -> DeckId {
        match self {
            Card::Suited { deck, .. } | Card::Joker { deck, .. } => deck,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Card::Suited { rank, .. } => rank.points(),
            Card::Joker { .. } => 0,
        }
    }

    pub fn is_point_card(self) -> bool {
        self.points() > 0
    }

    /// Identity modulo deck id; the pairing key ("equal in play").
    pub fn face(self) -> CardFace {
        match self {
            Card::Suited { suit, rank, .. } => CardFace::Suited { suit, rank },
            Card::Joker { kind, .. } => CardFace::Joker(kind),
        }
    }
}

// Note: Ord on Card is only for stable sorting in hands and fixtures:
// suit order C<D<H<S then rank, jokers after all suited cards.
// Do not use for trick resolution or anything trump-aware.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Card {
    fn sort_key(self) -> (u8, u8, u8, DeckId) {
        match self {
            Card::Suited { suit, rank, deck } => (0, suit as u8, rank.index(), deck),
            Card::Joker { kind, deck } => (1, kind as u8, 0, deck),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face())
    }
}

/// A card face: what a card looks like, ignoring which deck it came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CardFace {
    Suited { suit: Suit, rank: Rank },
    Joker(JokerKind),
}

impl CardFace {
    pub fn suit(self) -> Option<Suit> {
        match self {
            CardFace::Suited { suit, .. } => Some(suit),
            CardFace::Joker(_) => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            CardFace::Suited { rank, .. } => Some(rank),
            CardFace::Joker(_) => None,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            CardFace::Suited { rank, .. } => rank.points(),
            CardFace::Joker(_) => 0,
        }
    }

    pub fn card(self, deck: DeckId) -> Card {
        match self {
            CardFace::Suited { suit, rank } => Card::Suited { suit, rank, deck },
            CardFace::Joker(kind) => Card::Joker { kind, deck },
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Suited { suit, rank } => {
                let rank_ch = match rank {
                    Rank::Two => '2',
                    Rank::Three => '3',
                    Rank::Four => '4',
                    Rank::Five => '5',
                    Rank::Six => '6',
                    Rank::Seven => '7',
                    Rank::Eight => '8',
                    Rank::Nine => '9',
                    Rank::Ten => 'T',
                    Rank::Jack => 'J',
                    Rank::Queen => 'Q',
                    Rank::King => 'K',
                    Rank::Ace => 'A',
                };
                let suit_ch = match suit {
                    Suit::Clubs => 'C',
                    Suit::Diamonds => 'D',
                    Suit::Hearts => 'H',
                    Suit::Spades => 'S',
                };
                write!(f, "{rank_ch}{suit_ch}")
            }
            CardFace::Joker(JokerKind::Small) => write!(f, "SJ"),
            CardFace::Joker(JokerKind::Big) => write!(f, "BJ"),
        }
    }
}
