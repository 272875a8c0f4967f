//! Docbot CLI Binary
//!
//! Runs the intent handler locally on an event or a dotted name.

use clap::Parser;
use docbot::tooling::cli::{Cli, CliContext};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let context = match CliContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing docbot: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = context.init_logging() {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match context.execute(&cli.command).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
