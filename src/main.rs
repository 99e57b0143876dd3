//! Command-line demo of the vector library.
//!
//! Takes two 3D vectors and prints their sum, the projection of the first
//! onto the second, and their cross product, one per line.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vecops::library::*;
use vecops::Vector3;

/// Random components are drawn from `[-RANDOM_RANGE, RANDOM_RANGE)`
const RANDOM_RANGE: f64 = 10.0;
/// Log directives used when `RUST_LOG` is unset or unparsable
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "vecops", about = "Add, project and cross two 3D vectors", version)]
struct Cli {
    /// First vector, written as "(x, y, z)"
    #[arg(long, default_value = "(1, 2, 3)")]
    v1: Vector3,
    /// Second vector, written as "(x, y, z)"
    #[arg(long, default_value = "(5, 6, 7)")]
    v2: Vector3,
    /// Ignore --v1/--v2 and use random vectors instead
    #[arg(long)]
    random: bool,
}

/// Draws a vector with every component uniform in `[-RANDOM_RANGE, RANDOM_RANGE)`.
///
/// Used by `--random` in place of the `--v1`/`--v2` arguments.
fn random_vector() -> Vector3 {
    Vector3::new(
        rand::random_range(-RANDOM_RANGE..RANDOM_RANGE),
        rand::random_range(-RANDOM_RANGE..RANDOM_RANGE),
        rand::random_range(-RANDOM_RANGE..RANDOM_RANGE),
    )
}

/// Builds the three output lines, in the order they are printed.
///
/// # Arguments
///
/// * `v1` - The vector being projected
/// * `v2` - The vector projected onto
///
/// # Returns
///
/// `add(v1, v2)`, `projection(v1, v2)` and `cross_product(v1, v2)`, each in
/// their `(x, y, z)` display form.
fn report(v1: Vector3, v2: Vector3) -> [String; 3] {
    [
        add(v1, v2).to_string(),
        projection(v1, v2).to_string(),
        cross_product(v1, v2).to_string(),
    ]
}

/// Builds the log filter from `RUST_LOG`-style directives.
///
/// # Arguments
///
/// * `directives` - The value of `RUST_LOG`, if set
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    // Results go to stdout, so keep the logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (v1, v2) = if cli.random {
        (random_vector(), random_vector())
    } else {
        (cli.v1, cli.v2)
    };
    tracing::debug!(%v1, %v2, "input vectors");

    if magnitude(v2) == 0.0 {
        tracing::warn!("second vector is zero; its projection collapses to the zero vector");
    }

    for line in report(v1, v2) {
        println!("{}", line);
    }
}
