//! relic: bless artifacts from the command line
//!
//! Replays the Holy Hand Grenade ceremony by default.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use relic_cli::{Step, forge_artifact, log_filter, replay};
use relic_core::{Altar, ArtifactKind, Delay, InstantDelay, RelicOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Bless artifacts and make them radiant
#[derive(Parser, Debug)]
#[command(name = "relic")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Artifact name
    #[arg(short = 'n', long = "name", default_value = "Holy Hand Grenade of Antioch")]
    name: String,

    /// Artifact power
    #[arg(short = 'p', long = "power", default_value_t = 1000)]
    power: u32,

    /// Initial state (unholy, normal, blessed, radiant_normal, radiant_blessed)
    #[arg(short = 's', long = "state", default_value = "unholy")]
    state: ArtifactKind,

    /// Healing power; only valid with a radiant initial state
    #[arg(long = "healing")]
    healing: Option<u64>,

    /// Options file (relicrc)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Skip the ceremony pause
    #[arg(long = "instant")]
    instant: bool,

    /// Print the resulting artifact as JSON
    #[arg(long = "json")]
    json: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Steps to run, in order
    #[arg(value_enum, default_values_t = [Step::Bless, Step::Bless])]
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let options = match &args.config {
        Some(path) => RelicOptions::load_from_file(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => RelicOptions::default(),
    };
    debug!(?options, "options loaded");

    if args.instant {
        run(&args, Altar::with_delay(InstantDelay::new(), options))
    } else {
        run(&args, Altar::new(options))
    }
}

fn run<D: Delay>(args: &Args, mut altar: Altar<D>) -> Result<()> {
    let artifact = forge_artifact(&altar, args.state, &args.name, args.power, args.healing)?;

    let mut stdout = io::stdout().lock();
    let result = replay(&mut altar, artifact, &args.steps, &mut stdout)?;

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{result}")?;
    }
    Ok(())
}
