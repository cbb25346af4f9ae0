use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minesweep_core::{ActionOutcome, Board, Command, Coord, Difficulty, GameSession, render};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod canvas;
mod prompt;
mod settings;

use canvas::TextCanvas;
use prompt::{HELP, Input, parse_input};
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with default settings, flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<Coord>,

    #[arg(long)]
    height: Option<Coord>,

    /// One of easy, medium, hard, expert
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pixel size of a cell for `click` commands
    #[arg(long)]
    cell_size: Option<f64>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        settings.width = self.width.unwrap_or(settings.width);
        settings.height = self.height.unwrap_or(settings.height);
        settings.difficulty = self.difficulty.unwrap_or(settings.difficulty);
        settings.seed = self.seed.or(settings.seed);
        settings.cell_size = self.cell_size.unwrap_or(settings.cell_size);
        settings.validate()?;
        Ok(settings)
    }
}

/// Mode switches change the status line without touching the board.
fn needs_redraw(command: Command, outcome: ActionOutcome) -> bool {
    outcome.has_update() || command == Command::ToggleFlagMode
}

fn draw(session: &GameSession, cell_size: f64, out: &mut impl Write) -> io::Result<()> {
    let (width, height) = session.board().size();
    let mut canvas = TextCanvas::new(width.into(), height.into(), cell_size);
    render(session, &mut canvas, cell_size);

    write!(out, "{canvas}")?;
    if !session.is_finished() {
        let mode = if session.flag_mode() { "flag" } else { "reveal" };
        writeln!(out, "mines left: {}  mode: {mode}", session.mines_left())?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let settings = args.settings()?;
    log::debug!("settings: {settings:?}");

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let board = Board::new(
        settings.width,
        settings.height,
        settings.difficulty,
        SmallRng::seed_from_u64(seed),
    )
    .context("creating board")?;
    let mut session = GameSession::new(board);

    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;
    draw(&session, settings.cell_size, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading command")?;
        let command = match parse_input(&line, settings.cell_size) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Ok(Input::Command(command)) => command,
            Err(err) => {
                log::warn!("{err:#}");
                continue;
            }
        };

        let outcome = match command.apply(&mut session) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("{err}");
                continue;
            }
        };
        log::debug!("{command:?}: {outcome:?}");
        if !needs_redraw(command, outcome) {
            continue;
        }

        draw(&session, settings.cell_size, &mut out)?;
        if session.is_finished() {
            break;
        }
    }

    Ok(())
}
