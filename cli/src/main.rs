use clap::{Parser, ValueEnum};
use mt64_core_rs::{Mt64, StateError, StateSnapshot};
use serde::ser::{SerializeSeq, Serializer as _};
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw values from a 64-bit Mersenne Twister", long_about = None)]
struct Args {
    /// Seed value (omit to use the default seed 987654321)
    #[arg(short, long, conflicts_with = "load_state")]
    seed: Option<u64>,

    /// Number of values to draw
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Output type and range
    #[arg(short, long, value_enum, default_value_t = Kind::Uint64)]
    kind: Kind,

    /// Print a JSON array instead of one value per line
    #[arg(long)]
    json: bool,

    /// Resume from a snapshot file written by --save-state
    #[arg(long)]
    load_state: Option<PathBuf>,

    /// Write the generator state here after drawing
    #[arg(long)]
    save_state: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Integer on [0, 2^64-1]
    Uint64,
    /// Real on [0, 1]
    Closed,
    /// Real on [0, 1)
    HalfOpen,
    /// Real on (0, 1)
    Open,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Output failed: {0}")]
    Output(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid state file: {0}")]
    State(#[from] StateError),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Value {
    Int(u64),
    Real(f64),
}

fn main() {
    setup_logging();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("mt64: {}", e);
        exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut rng = build_generator(args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_values(&mut rng, args.kind, args.count, args.json, &mut out)?;
    out.flush()?;
    info!(count = args.count, kind = ?args.kind, "drew values");

    if let Some(path) = &args.save_state {
        let json = rng.snapshot().to_json()?;
        fs::write(path, json).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), cursor = rng.cursor(), "saved generator state");
    }

    Ok(())
}

/// Draw `count` values, writing each one as it is drawn
fn write_values<W: Write>(
    rng: &mut Mt64,
    kind: Kind,
    count: usize,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    if json {
        let mut serializer = serde_json::Serializer::new(&mut *out);
        let mut seq = (&mut serializer).serialize_seq(Some(count))?;
        for _ in 0..count {
            seq.serialize_element(&draw(rng, kind))?;
        }
        seq.end()?;
        writeln!(out)?;
    } else {
        for _ in 0..count {
            match draw(rng, kind) {
                Value::Int(v) => writeln!(out, "{}", v)?,
                Value::Real(v) => writeln!(out, "{}", v)?,
            }
        }
    }
    Ok(())
}

fn build_generator(args: &Args) -> Result<Mt64, CliError> {
    if let Some(path) = &args.load_state {
        let json = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rng = Mt64::restore(StateSnapshot::from_json(&json)?)?;
        debug!(path = %path.display(), cursor = rng.cursor(), "loaded generator state");
        return Ok(rng);
    }

    Ok(match args.seed {
        Some(seed) => Mt64::with_seed(seed),
        None => Mt64::new(),
    })
}

fn draw(rng: &mut Mt64, kind: Kind) -> Value {
    match kind {
        Kind::Uint64 => Value::Int(rng.next_uint64()),
        Kind::Closed => Value::Real(rng.next_real_closed()),
        Kind::HalfOpen => Value::Real(rng.next_real_half_open()),
        Kind::Open => Value::Real(rng.next_real_open()),
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
