//! romanwords CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch
//! conversion, and exit with appropriate status.
//! For programmatic use, prefer the library API (`romanwords::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
