//! Terminal Blokus runner (default binary).
//!
//! Hot-seat play: every player shares the keyboard and the turn passes after
//! each placed piece. Input comes from crossterm; drawing goes through the
//! framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use blokus::core::Piece;
use blokus::engine::{load_catalog_dir, standard_pieces, BoardSize, GameConfig, Session};
use blokus::input::{handle_key_event, piece_slot, should_quit};
use blokus::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

#[derive(Parser, Debug)]
#[command(name = "blokus", version, about = "Blokus in the terminal, hot-seat")]
struct Cli {
    /// Number of players (2 to 4)
    #[arg(short, long, default_value_t = 4, env = "BLOKUS_PLAYERS")]
    players: u8,

    /// Board size as <width>x<height>
    #[arg(short, long, default_value = "20x20", env = "BLOKUS_BOARD")]
    board: BoardSize,

    /// Directory of *.txt piece files (default: the built-in standard set)
    #[arg(long, env = "BLOKUS_PIECES")]
    pieces: Option<PathBuf>,

    /// Seed for dealing colors (default: clock)
    #[arg(long, env = "BLOKUS_SEED")]
    seed: Option<u32>,

    /// Write logs here; filter with BLOKUS_LOG (e.g. "debug")
    #[arg(long, env = "BLOKUS_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig::new(cli.players, cli.board)?;
    let catalog = load_pieces(cli.pieces.as_ref())?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    let mut session = Session::new(&config, &catalog, seed)?;
    tracing::info!(
        players = config.players,
        board = %config.board,
        seed,
        pieces = catalog.len(),
        "session started"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.leave();
    result
}

/// The terminal belongs to the renderer, so logs go to a file or nowhere.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_env("BLOKUS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn load_pieces(dir: Option<&PathBuf>) -> Result<Vec<Piece>> {
    match dir {
        Some(dir) => load_catalog_dir(dir)
            .with_context(|| format!("cannot load pieces from {}", dir.display())),
        None => standard_pieces().context("built-in piece table is invalid"),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // No clock: block until something happens.
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    tracing::info!(turn = session.turn(), "quit");
                    return Ok(());
                }
                if let Some(slot) = piece_slot(key) {
                    match session.select_piece(slot) {
                        Ok(()) => tracing::trace!(slot, "select"),
                        // Already shown on the status line.
                        Err(err) => tracing::trace!(slot, code = err.code(), "select refused"),
                    }
                } else if let Some(action) = handle_key_event(key) {
                    let outcome = session.apply_action(action);
                    tracing::trace!(action = action.as_str(), ?outcome, "action");
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
