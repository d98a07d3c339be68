use anyhow::{Context, Result};
use chess_agents::game::play_game;
use chess_agents::{AgentConfig, ChessPosition, Color, Position, StrategyKind};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play search agents against each other", long_about = None)]
struct Args {
    /// Starting FEN position (default: standard start)
    #[arg(long)]
    fen: Option<String>,

    /// Strategy for White
    #[arg(long, value_enum, default_value_t = StrategyKind::AlphaBeta)]
    white: StrategyKind,

    /// Strategy for Black
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    black: StrategyKind,

    /// Search depth in plies [default: 3, or the config's]
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for random agents, Black uses seed + 1 [default: 0, or the config's]
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// JSON agent config; --depth, --seed and --verify-restore override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check that every apply/undo restores the position exactly
    #[arg(long)]
    verify_restore: bool,
}

fn agent_config(base: &AgentConfig, strategy: StrategyKind, seed: u64) -> AgentConfig {
    AgentConfig { strategy, seed, ..base.clone() }
}

fn result_text(pos: &ChessPosition) -> &'static str {
    if pos.is_checkmate() {
        if pos.side_to_move() == Color::White { "0-1 (checkmate)" } else { "1-0 (checkmate)" }
    } else if pos.is_terminal() {
        "1/2-1/2"
    } else {
        "* (ply limit)"
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::default(),
    }
    .with_overrides(args.depth, args.seed, args.verify_restore);
    let white = agent_config(&base, args.white, base.seed);
    let black = agent_config(&base, args.black, base.seed.wrapping_add(1));

    let mut pos = match &args.fen {
        Some(fen) => ChessPosition::from_fen(fen).context("invalid --fen")?,
        None => ChessPosition::startpos(),
    };
    info!("white {:?} black {:?} depth {}", white.strategy, black.strategy, base.depth);

    let mut white = white.build_strategy();
    let mut black = black.build_strategy();
    let mut plies = 0usize;
    let mut start = Instant::now();
    play_game(&mut pos, white.as_mut(), black.as_mut(), args.max_plies, |p, mv| {
        plies += 1;
        println!("{:>3}. {:?} {} ({} ms)", plies, p.side_to_move(), p.uci(mv), start.elapsed().as_millis());
        start = Instant::now();
    })?;

    println!("Final FEN: {}", pos.fen());
    println!("Result: {}", result_text(&pos));
    Ok(())
}
