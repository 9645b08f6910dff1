// src/bin/cli.rs
use clap::Parser;
use fide_scrape::cli;

fn main() {
    let args = cli::Args::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
