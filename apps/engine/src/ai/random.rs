//! Random AI player - makes random legal moves.

use std::sync::Mutex;

use rand::prelude::*;

use crate::domain::cards_types::Card;
use crate::domain::combos::identify_combos;
use crate::domain::declarations::TrumpDeclaration;
use crate::domain::player_view::SeatView;
use crate::domain::plays::legal_follow_with_order;
use crate::domain::state::KITTY_SIZE;

use super::memory::CardMemory;
use super::trait_def::{AiError, AiPlayer};

/// AI that makes random legal moves.
///
/// Can be seeded for deterministic behavior in tests and simulations.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock_rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_play(&self, view: &SeatView<'_>, _memory: &CardMemory) -> Result<Vec<Card>, AiError> {
        let mut rng = self.lock_rng()?;
        match view.leading_cards() {
            None => {
                let combos = identify_combos(view.hand, view.trump);
                combos
                    .choose(&mut *rng)
                    .map(|c| c.cards.clone())
                    .ok_or_else(|| AiError::InvalidMove("no combo to lead".into()))
            }
            Some(leading) => {
                let mut order: Vec<Card> = view.hand.to_vec();
                order.shuffle(&mut *rng);
                let play = legal_follow_with_order(leading, view.hand, view.trump, |c| {
                    order.iter().position(|&x| x == c).unwrap_or(0) as i64
                });
                if play.is_empty() {
                    return Err(AiError::InvalidMove("no legal follow".into()));
                }
                Ok(play)
            }
        }
    }

    fn choose_kitty_swap(&self, view: &SeatView<'_>) -> Result<Vec<Card>, AiError> {
        let mut rng = self.lock_rng()?;
        let mut cards: Vec<Card> = view.hand.to_vec();
        cards.shuffle(&mut *rng);
        cards.truncate(KITTY_SIZE);
        if cards.len() < KITTY_SIZE {
            return Err(AiError::InvalidMove("hand smaller than the kitty".into()));
        }
        Ok(cards)
    }

    fn choose_declaration(
        &self,
        view: &SeatView<'_>,
        options: &[TrumpDeclaration],
    ) -> Result<Option<TrumpDeclaration>, AiError> {
        let _ = view;
        if options.is_empty() {
            return Ok(None);
        }
        let mut rng = self.lock_rng()?;
        // Decline most of the time so declarations stay contested rather
        // than going to whoever is dealt to first.
        let pick = rng.random_range(0..options.len() * 4);
        Ok(options.get(pick).cloned())
    }
}
