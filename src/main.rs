//! QGraph - nerve-fiber boundary-condition system generator
//!
//! Reads an adjacency matrix and prints the assembled system matrix.
//!
//! # Usage
//!
//! ```bash
//! qgraph fiber.txt --root 0 --alpha 1.0 --beta 1.0 --numeric
//! ```

use std::path::PathBuf;

use clap::Parser;
use qgraph_core::{
    error::Result,
    network::{self, VertexId},
    Assembler, AssemblyConfig, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_LAMBDA, DEFAULT_SEGMENT_LENGTH,
};
use tracing_subscriber::EnvFilter;

/// Nerve-fiber boundary-condition system generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the adjacency matrix file
    #[arg(value_name = "ADJACENCY_FILE")]
    adjacency_file: PathBuf,

    /// Root vertex of the fiber
    #[arg(short, long, default_value_t = 0)]
    root: usize,

    /// Parent-side transmission coefficient
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Child-side transmission coefficient
    #[arg(short, long, default_value_t = DEFAULT_BETA)]
    beta: f64,

    /// Eigen-parameter λ
    #[arg(short, long, default_value_t = DEFAULT_LAMBDA)]
    lambda: f64,

    /// Length of every segment
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH)]
    length: f64,

    /// Print evaluated coefficients instead of formulas
    #[arg(short, long)]
    numeric: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("qgraph_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Build the network
    let net = network::load_adjacency(&args.adjacency_file)?;

    // Assemble
    let config = AssemblyConfig::new()
        .with_root(VertexId(args.root))
        .with_transmission(args.alpha, args.beta)
        .with_lambda(args.lambda)
        .with_default_length(args.length);
    let system = Assembler::new(config).assemble_system(&net)?;

    if args.numeric {
        print!("{}", system.matrix.display_numeric());
    } else {
        print!("{}", system.matrix);
    }

    for (row, condition) in system.conditions.iter().enumerate() {
        match condition {
            Some(c) => tracing::debug!(row, condition = %c, "Row condition"),
            None => tracing::warn!(row, "Row has no condition"),
        }
    }

    Ok(())
}
