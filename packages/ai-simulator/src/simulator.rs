//! In-memory game loop: drives the engine façade with AI seats from the
//! first deal to game over.

use engine::ai::AiPlayer;
use engine::domain::cards_types::Rank;
use engine::domain::engine::{
    clear_completed_trick, deal_next_card, end_round, finalize_trump_declaration, initialize_game,
    make_trump_declaration, prepare_next_round, process_play, putback_kitty_cards,
};
use engine::domain::state::{GamePhase, GameState, TeamId};
use engine::errors::DomainError;
use engine::services::game_flow::{get_ai_declaration, get_ai_kitty_swap, get_ai_move};

/// One round's outcome, kept for metrics.
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub round_number: u32,
    pub trump_rank: Rank,
    pub trump_suit: Option<String>,
    pub starter: u8,
    pub defending_team: TeamId,
    pub attacker_points: u32,
    pub kitty_awarded: u32,
    pub defenders_held: bool,
    pub rank_delta: u8,
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub rounds_played: u32,
    /// The team that pushed past Ace, `None` when the round cap hit first.
    pub winner: Option<TeamId>,
    pub final_ranks: [Rank; 2],
    pub rounds: Vec<RoundRecord>,
}

/// Errors that end a simulated game.
#[derive(Debug)]
pub enum SimulatorError {
    /// The engine rejected an operation; the rules were violated somewhere.
    Domain(DomainError),
    /// A phase loop failed to terminate.
    Stuck(&'static str),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Domain(e) => write!(f, "domain error: {e}"),
            SimulatorError::Stuck(phase) => write!(f, "simulation stuck in {phase}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(e: DomainError) -> Self {
        SimulatorError::Domain(e)
    }
}

type Seats = [Box<dyn AiPlayer + Send + Sync>; 4];

/// In-memory game simulator over the engine façade.
pub struct Simulator {
    game_seed: [u8; 32],
    max_rounds: u32,
}

impl Simulator {
    pub fn new(game_seed: [u8; 32], max_rounds: u32) -> Self {
        Self {
            game_seed,
            max_rounds,
        }
    }

    /// Simulate a complete game with the given AI players.
    pub fn simulate_game(&self, ais: &Seats) -> Result<GameResult, SimulatorError> {
        let mut state = initialize_game(self.game_seed, Rank::Two);
        let mut rounds = Vec::new();
        let mut winner = None;

        for _ in 0..self.max_rounds {
            state = self.play_round(state, ais)?;
            let (scored, result) = end_round(&state)?;
            rounds.push(RoundRecord {
                round_number: scored.round_number,
                trump_rank: scored.trump.rank,
                trump_suit: scored.trump.suit.map(|s| format!("{s:?}")),
                starter: scored.round_starter,
                defending_team: scored.defending_team(),
                attacker_points: result.attacker_points,
                kitty_awarded: result.kitty_awarded,
                defenders_held: result.defenders_held,
                rank_delta: result.rank_delta,
            });
            if result.game_over {
                winner = Some(result.advancing_team);
                state = scored;
                break;
            }
            state = prepare_next_round(&scored, &result)?;
        }

        Ok(GameResult {
            rounds_played: rounds.len() as u32,
            winner,
            final_ranks: [state.team(TeamId::A).rank, state.team(TeamId::B).rank],
            rounds,
        })
    }

    /// Deal, declare, swap the kitty, and play out all tricks of one round.
    fn play_round(&self, mut state: GameState, ais: &Seats) -> Result<GameState, SimulatorError> {
        let mut guard = 0;
        while state.phase == GamePhase::Dealing {
            state = deal_next_card(&state)?;
            let dealt = (state.current_player + 3) % 4;
            if let Some(decl) = get_ai_declaration(&state, dealt, ais[dealt as usize].as_ref()) {
                state = make_trump_declaration(&state, dealt, decl)?;
            }
            guard += 1;
            if guard > 200 {
                return Err(SimulatorError::Stuck("dealing"));
            }
        }

        state = finalize_trump_declaration(&state)?;

        let starter = state.round_starter;
        let kitty = get_ai_kitty_swap(&state, starter, ais[starter as usize].as_ref())?;
        state = putback_kitty_cards(&state, starter, &kitty)?;

        let mut guard = 0;
        while state.phase == GamePhase::Playing {
            let seat = state.current_player;
            let cards = get_ai_move(&state, seat, ais[seat as usize].as_ref())?;
            state = process_play(&state, seat, &cards)?;
            if state
                .current_trick
                .as_ref()
                .is_some_and(|t| t.is_complete())
            {
                state = clear_completed_trick(&state)?;
            }
            guard += 1;
            if guard > 500 {
                return Err(SimulatorError::Stuck("playing"));
            }
        }
        Ok(state)
    }
}
