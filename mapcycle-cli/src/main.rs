//! mapcycle-gen CLI
//!
//! Builds a TF2 server `mapcycle_matchmaking.txt` from the game's
//! `items_game.txt`.

mod cli_types;
mod error;
mod logging;

use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mapcycle_lib::{GeneratorOptions, MapCycleGenerator, settings};

use cli_types::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
    }

    if !cli.quiet {
        println!(
            "{}",
            "mapcycle generator for TF2".if_supports_color(Stdout, |t| t.bold()),
        );
        println!("Version: {}", env!("CARGO_PKG_VERSION"));
    }

    let base = if cli.no_settings {
        GeneratorOptions::default()
    } else {
        settings::load_settings()
    };
    let options = cli.filter.apply(base);
    log::debug!("Filter options: {options:?}");

    run_generate(&cli, options);
}

/// Run the generator. Results go to stdout (unless `--quiet`), failures
/// to the logger; the process still exits 0.
fn run_generate(cli: &Cli, options: GeneratorOptions) {
    let input = &cli.itemsgame_path;
    if !input.exists() {
        log::warn!(
            "Input file {} does not exist!",
            input.display().if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    let start = Instant::now();
    let report = MapCycleGenerator::new(input).options(options).generate();
    let elapsed = start.elapsed();

    if cli.quiet {
        return;
    }

    if let Some(path) = &report.output {
        println!(
            "Mapcycle file saved as {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
        println!(
            "  {} maps matched, {} written",
            report.maps_found, report.maps_written,
        );
    }

    println!(
        "Mapcycle generated in {:.3} ms.",
        elapsed.as_secs_f64() * 1000.0
    );
}
