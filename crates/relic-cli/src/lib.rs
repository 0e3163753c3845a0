//! relic-cli: replays blessing ceremonies from the command line

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use relic_core::{Altar, Artifact, ArtifactKind, Delay, Transition};
use strum::Display;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log filter from `RUST_LOG`, defaulting to `warn`.
///
/// `verbose` adds a global `debug` directive on top.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default());
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}

/// Build the starting artifact on `altar`.
///
/// An explicit healing power is only accepted for radiant kinds.
pub fn forge_artifact<D: Delay>(
    altar: &Altar<D>,
    kind: ArtifactKind,
    name: &str,
    power: u32,
    healing: Option<u64>,
) -> Result<Artifact> {
    match healing {
        Some(_) if !kind.is_radiant() => {
            bail!("--healing needs a radiant state, got {kind}")
        }
        Some(healing) => Ok(Artifact::radiant(kind, name, power, healing)?
            .with_area_of_effect(altar.options().area_of_effect)),
        None => Ok(altar.forge(kind, name, power)?),
    }
}

/// One step of a ceremony script
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Step {
    /// Raise the artifact one holiness tier
    Bless,
    /// Give the artifact healing power
    Radiant,
    /// Use the artifact
    Use,
}

impl Step {
    pub const fn transition(self) -> Option<Transition> {
        match self {
            Step::Bless => Some(Transition::Bless),
            Step::Radiant => Some(Transition::MakeRadiant),
            Step::Use => None,
        }
    }
}

/// Run `steps` against `artifact`, writing every altar message to `out`.
///
/// Stops at the first rejected transition; messages produced up to that
/// point are still written.
pub fn replay<D: Delay>(
    altar: &mut Altar<D>,
    artifact: Artifact,
    steps: &[Step],
    out: &mut impl Write,
) -> Result<Artifact> {
    let mut current = artifact;

    for (i, step) in steps.iter().enumerate() {
        let outcome = match step.transition() {
            Some(transition) => altar.apply(transition, &current).map(Some),
            None => {
                altar.use_artifact(&current);
                Ok(None)
            }
        };

        for msg in altar.drain_messages() {
            writeln!(out, "{msg}")?;
        }

        if let Some(next) = outcome.with_context(|| format!("step {} ({step}) failed", i + 1))? {
            current = next;
        }
    }

    Ok(current)
}
