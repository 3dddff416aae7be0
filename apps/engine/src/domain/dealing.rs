//! Double-deck construction and deterministic shuffling.

use crate::domain::cards_types::{Card, JokerKind, Rank, Suit};
use crate::domain::state::DECK_SIZE;

/// The full 108-card double deck in canonical order.
pub fn double_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for deck_id in 0..2u8 {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::suited(suit, rank, deck_id));
            }
        }
        deck.push(Card::joker(JokerKind::Small, deck_id));
        deck.push(Card::joker(JokerKind::Big, deck_id));
    }
    deck
}

/// Simple deterministic RNG for shuffling.
///
/// SplitMix64-style generator: well distributed, fast, and stable across
/// platforms given a seed.
struct SimpleLcg {
    state: u64,
}

impl SimpleLcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Rejection sampling over the largest multiple of m to avoid
        // modulo bias.
        let limit = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Fisher-Yates shuffle using the deterministic RNG.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = SimpleLcg::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_range(i + 1);
        deck.swap(i, j);
    }
}

/// A freshly shuffled double deck for one round.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = double_deck();
    shuffle_with_seed(&mut deck, seed);
    deck
}
