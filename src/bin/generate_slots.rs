//! Slot vocabulary generator
//!
//! `generate_slots <slot_name> <slot_description> <slot_raw_filename>`

use anyhow::Context;
use clap::Parser;
use docbot::logging::init_logging;
use docbot::tooling::cli::{load_config, SlotsCli};

fn main() -> anyhow::Result<()> {
    let args = SlotsCli::parse();

    let config = load_config(None).context("Failed to load configuration")?;
    init_logging(Some(&config.logging), config.timezone.log_zone()?)?;

    let path = args.run(&config.slots).with_context(|| {
        format!(
            "Failed to generate slot {} from {}",
            args.slot_name,
            config.slots.dir.join(&args.slot_raw_filename).display()
        )
    })?;
    println!("{}", path.display());
    Ok(())
}
