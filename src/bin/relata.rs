//! Relata CLI binary.

use std::process;

use clap::Parser;
use relata::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = RelataArgs::parse();

    // -q / -v pick the default level; RUST_LOG still wins
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
