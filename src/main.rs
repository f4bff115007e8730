//! `sightline`: compute horizon distance and angle for observers above a
//! circular planet, from the terminal.

mod args;
mod report;


use std::process::ExitCode;

use clap::Parser;
use sightline_canvas::engine::EngineCore;
use sightline_canvas::validate::InputError;

use args::Cli;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "sightline failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let core = session(cli)?;
    Ok(report::render(&core, cli.format)?)
}

/// Build a session from the parsed arguments: planet first, then observers in
/// the order given, then the optional rescale.
fn session(cli: &Cli) -> Result<EngineCore, InputError> {
    let mut core = EngineCore::with_planet_radius(cli.planet_radius);
    for spec in &cli.observers {
        core.on_add_observer(spec.height_km, spec.offset_km, &spec.color)?;
    }
    if let Some(radius_km) = cli.rescale {
        core.on_set_planet_radius(radius_km)?;
    }
    tracing::info!(observers = core.observers.len(), radius = %core.planet_label(), "session built");
    Ok(core)
}
