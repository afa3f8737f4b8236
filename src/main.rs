use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use trianglefree::config::{AnalysisConfig, PackingStrategy};
use trianglefree::graph::SimpleGraph;
use trianglefree::report::analyze_batch;

#[derive(Parser)]
#[command(name = "trianglefree")]
#[command(about = "Triangle structure and far-from-triangle-free certificates for small graphs", long_about = None)]
struct Cli {
    /// Adjacency-matrix files (n lines of n '0'/'1' characters, n <= 64)
    files: Vec<PathBuf>,

    /// Fraction epsilon for the far-from-triangle-free verdict
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    epsilon: f64,

    /// Shuffled first-fit passes for the packing (0 = canonical greedy only)
    #[arg(short, long, default_value_t = 0)]
    rounds: usize,

    /// Seed for shuffled packing passes
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Omit witness triangles and edges from the report
    #[arg(long)]
    no_witnesses: bool,

    /// Validate the bundled reference graphs and exit
    #[arg(long, visible_alias = "test")]
    validate: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trianglefree=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.validate {
        return match trianglefree::validate::validate_known_graphs() {
            Ok(()) => {
                println!("Validation OK: bundled reference graphs are correct.");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Validation FAILED: {e}");
                ExitCode::from(1)
            }
        };
    }

    if cli.files.is_empty() {
        eprintln!("no input files (see --help)");
        return ExitCode::from(2);
    }

    let cfg = AnalysisConfig {
        epsilon: cli.epsilon,
        packing: if cli.rounds == 0 {
            PackingStrategy::Greedy
        } else {
            PackingStrategy::Randomized {
                seed: cli.seed,
                rounds: cli.rounds,
            }
        },
        collect_witnesses: !cli.no_witnesses,
    };
    if let Err(e) = cfg.validate() {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    let mut graphs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        match SimpleGraph::load_from_file(path) {
            Ok(g) => graphs.push(g),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::from(1);
            }
        }
    }

    let reports = match analyze_batch(&graphs, &cfg) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };
    for (path, report) in cli.files.iter().zip(&reports) {
        println!("== {}", path.display());
        println!("{report}");
    }
    ExitCode::SUCCESS
}
