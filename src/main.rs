use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use cplx::{error::SessionError, session::Session};
use tracing_subscriber::EnvFilter;

/// cplx is an interactive calculator for complex numbers and doubles.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the input lines from a file instead of the terminal.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Logs every token and transition to stderr. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<usize, SessionError> {
    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| SessionError::ScriptUnreadable {
                                           path: path.clone(),
                                           source,
                                       })?;
            Box::new(BufReader::new(file))
        },
        None => Box::new(io::stdin().lock()),
    };

    Session::new(input, io::stdout().lock()).run()
}
