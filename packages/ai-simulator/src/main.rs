//! AI Simulator CLI - fast in-memory Shengji games for AI evaluation.
//!
//! Drives full games through the engine façade with all four seats on AI,
//! and reports rounds played, the winning team, final ranks, and any rule
//! violation the engine surfaced.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::{Parser, ValueEnum};
use engine::ai::{create_ai, AiConfig, AiPlayer};
use metrics::build_game_metrics;
use output::OutputWriter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use simulator::{GameResult, Simulator};
use std::time::Instant;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Shengji simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "strategist")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "strategist")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "strategist")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "strategist")]
    seat3: AiType,

    /// Master seed; per-game 32-byte seeds are expanded from it
    #[arg(long)]
    seed: Option<u64>,

    /// Safety cap on rounds per game
    #[arg(long, default_value = "30")]
    max_rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSONL output
    #[arg(long)]
    compress: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum AiType {
    Strategist,
    Random,
}

impl AiType {
    fn name(&self) -> &'static str {
        match self {
            AiType::Strategist => "Strategist",
            AiType::Random => "RandomPlayer", // Actual name in registry
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types = if let Some(all) = args.seats {
        [all.clone(), all.clone(), all.clone(), all]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };

    if args.show_output {
        info!("Starting AI simulator: {} games", args.games);
        info!(
            "AI types: seat0={:?}, seat1={:?}, seat2={:?}, seat3={:?}",
            seat_types[0], seat_types[1], seat_types[2], seat_types[3]
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let ai_types = [
        seat_types[0].name().to_string(),
        seat_types[1].name().to_string(),
        seat_types[2].name().to_string(),
        seat_types[3].name().to_string(),
    ];

    // Expand the master seed into per-game and per-seat seeds so every run
    // is reproducible end to end.
    let mut seed_rng = match args.seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_seed(rand::random()),
    };

    let start = Instant::now();
    let mut results: Vec<GameResult> = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_seed: [u8; 32] = seed_rng.random();
        let ais: [Box<dyn AiPlayer + Send + Sync>; 4] = [
            make_ai(seat_types[0].name(), seed_rng.random())?,
            make_ai(seat_types[1].name(), seed_rng.random())?,
            make_ai(seat_types[2].name(), seed_rng.random())?,
            make_ai(seat_types[3].name(), seed_rng.random())?,
        ];

        let game_start = Instant::now();
        match Simulator::new(game_seed, args.max_rounds).simulate_game(&ais) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    &game_seed,
                    ai_types.clone(),
                    args.games,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {game_num}: {e}");
                }
                if args.verbose {
                    info!(
                        "Game {game_num} completed: winner={:?}, rounds={}",
                        result.winner, result.rounds_played
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {game_num} failed: {e}");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.cloned();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn make_ai(
    ai_type: &str,
    seed: u64,
) -> Result<Box<dyn AiPlayer + Send + Sync>, Box<dyn std::error::Error>> {
    let config = AiConfig::from_json(Some(&serde_json::json!({ "seed": seed })));
    create_ai(ai_type, config).ok_or_else(|| format!("Unknown AI type: {ai_type}").into())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut team_wins = [0u32; 2];
    let mut unfinished = 0u32;
    let mut total_rounds = 0u64;
    for result in results {
        total_rounds += u64::from(result.rounds_played);
        match result.winner {
            Some(engine::domain::TeamId::A) => team_wins[0] += 1,
            Some(engine::domain::TeamId::B) => team_wins[1] += 1,
            None => unfinished += 1,
        }
    }

    println!("\n=== Results by Team ===");
    let n = results.len() as f64;
    println!(
        "Team A (seats 0, 2): wins={} ({:.1}%)",
        team_wins[0],
        team_wins[0] as f64 / n * 100.0
    );
    println!(
        "Team B (seats 1, 3): wins={} ({:.1}%)",
        team_wins[1],
        team_wins[1] as f64 / n * 100.0
    );
    if unfinished > 0 {
        println!("Hit the round cap: {unfinished}");
    }
    println!("Average rounds per game: {:.1}", total_rounds as f64 / n);
}
