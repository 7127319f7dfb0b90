use std::io::{self, BufRead, BufReader, IsTerminal};

use clap::Parser;
use seating::config::{ColorMode, DEFAULT_MAX_SEATS, DEFAULT_SEATS_PER_ROW, DEFAULT_WIDTH};
use seating::Options;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seating", about = "Edit a classroom seating chart from the terminal")]
struct Cli {
    /// Command script (reads from stdin if not provided)
    script: Option<std::path::PathBuf>,

    /// Maximum width of the table grid in columns
    #[arg(long, short = 'w', default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Seat markers per line inside a table
    #[arg(long, default_value_t = DEFAULT_SEATS_PER_ROW)]
    seats_per_row: usize,

    /// Largest number of seats a table may have
    #[arg(long, default_value_t = DEFAULT_MAX_SEATS)]
    max_seats: u32,

    /// Paint table borders in their color
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SEATING_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let interactive = cli.script.is_none() && io::stdin().is_terminal();
    let options = Options {
        width: cli.width,
        seats_per_row: cli.seats_per_row,
        max_seats: cli.max_seats,
        color: cli.color.enabled(stdout.is_terminal()),
        prompt: interactive,
    };

    let input: Box<dyn BufRead> = match cli.script {
        Some(path) => match std::fs::File::open(&path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("ERROR: failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    if let Err(e) = seating::run(input, &mut stdout.lock(), &options) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
