//! Blessing and radiance transitions

use tracing::{debug, warn};

use super::{Artifact, Transition};
use crate::ceremony::Ceremony;
use crate::error::ArtifactError;

fn rejected(artifact: &Artifact, operation: Transition) -> ArtifactError {
    warn!(artifact = artifact.name(), current = %artifact.kind(), %operation, "transition rejected");
    ArtifactError::InvalidStateTransition {
        current: artifact.kind(),
        operation,
    }
}

/// Raise an artifact one holiness tier.
///
/// `Unholy -> Normal`, `Normal -> Blessed` and `RadiantNormal -> RadiantBlessed`;
/// blessed artifacts are rejected before the ceremony starts.
pub fn bless(artifact: &Artifact, ceremony: &mut impl Ceremony) -> Result<Artifact, ArtifactError> {
    let blessed = match artifact {
        Artifact::Unholy(base) => Artifact::Normal(base.clone()),
        Artifact::Normal(base) => Artifact::Blessed(base.clone()),
        Artifact::RadiantNormal {
            base,
            healing_power,
        } => Artifact::RadiantBlessed {
            base: base.clone(),
            healing_power: *healing_power,
        },
        Artifact::Blessed(_) | Artifact::RadiantBlessed { .. } => {
            return Err(rejected(artifact, Transition::Bless));
        }
    };

    // Only artifacts with a bless edge reach the ceremony
    ceremony.perform(artifact);

    debug!(artifact = artifact.name(), from = %artifact.kind(), to = %blessed.kind(), "blessed");
    Ok(blessed)
}

/// Give a normal or blessed artifact healing power.
///
/// Normal artifacts heal for their power, blessed ones for twice that.
pub fn make_radiant(artifact: &Artifact) -> Result<Artifact, ArtifactError> {
    let radiant = match artifact {
        Artifact::Normal(base) => Artifact::RadiantNormal {
            healing_power: u64::from(base.power()),
            base: base.clone(),
        },
        Artifact::Blessed(base) => Artifact::RadiantBlessed {
            healing_power: u64::from(base.power()) * 2,
            base: base.clone(),
        },
        Artifact::Unholy(_) | Artifact::RadiantNormal { .. } | Artifact::RadiantBlessed { .. } => {
            return Err(rejected(artifact, Transition::MakeRadiant));
        }
    };

    debug!(artifact = artifact.name(), from = %artifact.kind(), to = %radiant.kind(), "made radiant");
    Ok(radiant)
}

/// Apply either transition by name
pub fn apply(
    transition: Transition,
    artifact: &Artifact,
    ceremony: &mut impl Ceremony,
) -> Result<Artifact, ArtifactError> {
    match transition {
        Transition::Bless => bless(artifact, ceremony),
        Transition::MakeRadiant => make_radiant(artifact),
    }
}
