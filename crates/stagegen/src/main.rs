//! Stage generator command line
//!
//! Generates one stage and prints it as JSON or as a short summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use sg_core::stage::{generate_stage, GenerationParams, Stage};
use sg_core::{GenResult, GenRng};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable listing of major rooms and edges
    Summary,
    /// The whole stage as pretty-printed JSON
    Json,
}

/// Procedural stage generator
#[derive(Parser, Debug)]
#[command(name = "stagegen")]
#[command(author, version, about = "Lay out rooms and link the major ones", long_about = None)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of rooms to place
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Radius of the placement disc
    #[arg(long = "radius")]
    radius: Option<f64>,

    /// Smallest room edge
    #[arg(long = "min-size")]
    min_size: Option<f64>,

    /// Largest room edge
    #[arg(long = "max-size")]
    max_size: Option<f64>,

    /// Area a room needs to become a major room
    #[arg(long = "threshold")]
    threshold: Option<f64>,

    /// Maximum number of major rooms
    #[arg(long = "max-major")]
    max_major: Option<usize>,

    /// Read params from a JSON file
    #[arg(short = 'p', long = "params")]
    params: Option<PathBuf>,

    /// Start from the showcase preset instead of the defaults
    #[arg(long = "showcase")]
    showcase: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Defaults, then preset, then params file, then explicit flags
    fn resolve_params(&self) -> GenResult<GenerationParams> {
        let mut params = match &self.params {
            Some(path) => GenerationParams::load_from_file(path)?,
            None if self.showcase => GenerationParams::showcase(),
            None => GenerationParams::default(),
        };

        if let Some(n) = self.rooms {
            params.total_rooms = n;
        }
        if let Some(r) = self.radius {
            params.generation_radius = r;
        }
        if let Some(s) = self.min_size {
            params.min_room_size = s;
        }
        if let Some(s) = self.max_size {
            params.max_room_size = s;
        }
        if let Some(t) = self.threshold {
            params.major_room_threshold = t;
        }
        if let Some(m) = self.max_major {
            params.major_room_max_count = m;
        }

        params.validate()?;
        Ok(params)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("stagegen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> GenResult<()> {
    let params = args.resolve_params()?;
    let mut rng = match args.seed {
        Some(seed) => GenRng::new(seed),
        None => GenRng::from_entropy(),
    };

    let stage = generate_stage(&params, &mut rng)?;

    match args.format {
        Format::Json => stage.write_json_pretty(std::io::stdout().lock())?,
        Format::Summary => print_summary(&stage),
    }
    Ok(())
}

fn print_summary(stage: &Stage) {
    println!("seed {}", stage.seed);
    println!(
        "{} rooms, {} major, {} edges",
        stage.rooms.len(),
        stage.major_order.len(),
        stage.edges.len()
    );
    println!(
        "separation: {} steps, {}",
        stage.separation.steps,
        if stage.separation.converged {
            "converged".to_string()
        } else {
            format!("{} overlapping pairs left", stage.separation.residual_overlaps)
        }
    );

    for room in stage.major_rooms() {
        println!(
            "  major #{:<3} at ({:>5}, {:>5})  {}x{}",
            room.id, room.midpoint.x, room.midpoint.y, room.width, room.height
        );
    }
    for edge in &stage.edges {
        println!("  edge {} - {}", edge.a, edge.b);
    }
}
