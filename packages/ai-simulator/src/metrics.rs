//! Metrics collection for simulation results.

use serde::Serialize;

use crate::simulator::{GameResult, RoundRecord};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: String,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 4],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub rounds_played: u32,
    pub winner_team: Option<String>,
    pub final_ranks: [String; 2],
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub trump_rank: String,
    pub trump_suit: Option<String>,
    pub starter: u8,
    pub defending_team: String,
    pub attacker_points: u32,
    pub kitty_awarded: u32,
    pub defenders_held: bool,
    pub rank_delta: u8,
}

impl From<&RoundRecord> for RoundMetrics {
    fn from(record: &RoundRecord) -> Self {
        Self {
            round_no: record.round_number,
            trump_rank: format!("{:?}", record.trump_rank),
            trump_suit: record.trump_suit.clone(),
            starter: record.starter,
            defending_team: format!("{:?}", record.defending_team),
            attacker_points: record.attacker_points,
            kitty_awarded: record.kitty_awarded,
            defenders_held: record.defenders_held,
            rank_delta: record.rank_delta,
        }
    }
}

/// Flat row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: String,
    pub winner: String,
    pub rounds_played: u32,
    pub team_a_rank: String,
    pub team_b_rank: String,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        Self {
            game_id: metrics.game_id,
            seed: metrics.seed.clone(),
            winner: metrics
                .result
                .winner_team
                .clone()
                .unwrap_or_else(|| "none".to_string()),
            rounds_played: metrics.result.rounds_played,
            team_a_rank: metrics.result.final_ranks[0].clone(),
            team_b_rank: metrics.result.final_ranks[1].clone(),
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    game_seed: &[u8; 32],
    ai_types: [String; 4],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    GameMetrics {
        game_id,
        seed: hex::encode(game_seed),
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            rounds_played: result.rounds_played,
            winner_team: result.winner.map(|t| format!("{t:?}")),
            final_ranks: [
                format!("{:?}", result.final_ranks[0]),
                format!("{:?}", result.final_ranks[1]),
            ],
            duration_ms,
        },
        rounds: result.rounds.iter().map(RoundMetrics::from).collect(),
    }
}
