//! Reduce a matrix read from JSON and report on it
//!
//! The input file holds the matrix as a JSON array of rows:
//!
//! ```text
//! [[5.0, 6.0, -4.0, -4.0], [4.0, -3.0, -5.0, 22.0], [7.0, -1.0, 6.0, 11.0]]
//! ```
//!
//! Usage:
//!   cargo run --release --bin matrix-reduce -- --input system.json --augmented
//!   cargo run --release --bin matrix-reduce -- --help

use clap::{Parser, ValueEnum};
use math_audio_matrix::{
    LinearCombination, Matrix, PivotStrategy, ReductionConfig, ZeroTest, classify_with,
    reduce_with, row_reduce_with,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "matrix-reduce",
    about = "Gaussian elimination of a dense matrix to (reduced) row-echelon form"
)]
struct Args {
    /// JSON file holding the matrix as an array of rows
    #[arg(short, long)]
    input: PathBuf,

    /// Optional JSON reduction configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target form
    #[arg(long, value_enum, default_value_t = Mode::Reduced)]
    mode: Mode,

    /// Override the pivot strategy of the configuration
    #[arg(long, value_enum)]
    pivot_strategy: Option<StrategyChoice>,

    /// Treat entries with magnitude at most this value as zero
    #[arg(long)]
    tolerance: Option<f64>,

    /// Round the result to this many decimal places before printing
    #[arg(long)]
    round: Option<i32>,

    /// Treat the last column as the right-hand side and report consistency
    /// and independence
    #[arg(long)]
    augmented: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Echelon,
    Reduced,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyChoice {
    ColumnAligned,
    NextFreeRow,
}

impl From<StrategyChoice> for PivotStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::ColumnAligned => PivotStrategy::ColumnAligned,
            StrategyChoice::NextFreeRow => PivotStrategy::NextFreeRow,
        }
    }
}

fn load_config(args: &Args) -> Result<ReductionConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ReductionConfig::from_file(path)?,
        None => ReductionConfig::default(),
    };
    if let Some(strategy) = args.pivot_strategy {
        config.pivot_strategy = strategy.into();
    }
    if let Some(tolerance) = args.tolerance {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(format!("Tolerance must be non-negative; got {tolerance}").into());
        }
        config.zero_test = ZeroTest::Absolute(tolerance);
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let input = Matrix::from_json_file(&args.input)?;
    log::info!(
        "Loaded {}x{} matrix from {}",
        input.rows(),
        input.cols(),
        args.input.display()
    );

    println!("Input:\n{}\n", input);
    if args.augmented {
        println!("System: {}\n", LinearCombination(&input));
    }

    let mut matrix = input.clone();
    match args.mode {
        Mode::Echelon => reduce_with(&mut matrix, &config),
        Mode::Reduced => {
            let pivots = row_reduce_with(&mut matrix, &config);
            let positions: Vec<String> = pivots
                .iter()
                .map(|p| format!("({}, {})", p.row, p.col))
                .collect();
            println!("Pivots: {}", positions.join(" "));
        }
    }

    if let Some(places) = args.round {
        matrix.round(places);
    }
    println!("Result:\n{}", matrix);

    if args.augmented {
        let report = classify_with(&input, &config);
        println!();
        println!("Consistent:  {}", report.consistent);
        println!("Independent: {}", report.independent);
        println!("Rank:        {}", report.rank());
    }

    Ok(())
}
