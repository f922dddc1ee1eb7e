// src/bin/cli.rs
use clap::Parser;
use festival_programme::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::Args::parse();
    let summary = cli::run(&args)?;

    println!(
        "Wrote {} ({} events over {} days)",
        summary.page_path.display(),
        summary.events,
        summary.days
    );
    Ok(())
}
