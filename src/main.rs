use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use log::{error, info};

use hex_chess::engines::default_ai::DefaultAi;
use hex_chess::engines::engine_trait::ChessAi;
use hex_chess::game_state::chess_rules::STARTING_POSITION;
use hex_chess::game_state::chess_types::BoardState;
use hex_chess::move_generation::move_generator::get_moves;
use hex_chess::search::ai_config::AiConfig;
use hex_chess::search::negamax::SearchConfig;
use hex_chess::utils::long_algebraic::move_to_long_algebraic;
use hex_chess::utils::render_board::render_board;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Let the default AI play Glinski hexagonal chess against itself.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position string
    #[arg(long, default_value = STARTING_POSITION)]
    position: String,

    /// JSON file with piece values, cell tables and strategy weights
    #[arg(long)]
    ai_config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Stop after this many plies even if the game is not over
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .format_timestamp_millis()
        .init();

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("hex_chess self-play {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let config = match &args.ai_config {
        Some(path) => AiConfig::from_path(path)?,
        None => AiConfig::default(),
    };
    let ai = Arc::new(DefaultAi::new(config).with_search_config(SearchConfig { depth: args.depth }));
    let mut board = BoardState::from_position(&args.position)?;
    info!("{} searching at depth {}", ai.name(), args.depth);

    println!("{}", render_board(&board));

    for ply in 1..=args.max_plies {
        let state = board.update_game_state(get_moves(&board, false).len());
        if state.is_game_over() {
            println!("Game over: {state}");
            return Ok(());
        }

        let worker_ai = Arc::clone(&ai);
        let worker_board = BoardState::copy_from(&board);
        let handle = thread::spawn(move || worker_ai.search(&worker_board));

        let mut last_status = String::new();
        while !handle.is_finished() {
            let status = ai.progress().read();
            if status != last_status {
                info!("{status}");
                last_status = status;
            }
            thread::sleep(POLL_INTERVAL);
        }
        let result = handle.join().map_err(|_| "search thread panicked")?;

        let Some(mv) = result.best_move else {
            break;
        };
        let mover = board.side_to_move();
        board.make_move(mv);

        let state = board.update_game_state(get_moves(&board, false).len());
        println!(
            "{ply}. {mover:?} plays {} (score {}, {} nodes)",
            move_to_long_algebraic(mv),
            result.best_score,
            result.nodes + result.quiescence_nodes
        );
        println!("{}", render_board(&board));
        println!("{}  [{state}]", board.to_position_string());
    }

    println!("Stopped after {} plies", args.max_plies);
    Ok(())
}
