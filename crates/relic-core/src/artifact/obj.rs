//! Artifact values
//!
//! An artifact is an immutable value: every transition builds a new one.

use serde::{Deserialize, Serialize};

use super::{ArtifactKind, Capabilities, Holiness};
use crate::error::ArtifactError;

/// Fields shared by every artifact state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBase")]
pub struct ArtifactBase {
    name: String,
    power: u32,
    area_of_effect: u32,
}

#[derive(Deserialize)]
struct RawBase {
    name: String,
    power: u32,
    #[serde(default = "default_area_of_effect")]
    area_of_effect: u32,
}

fn default_area_of_effect() -> u32 {
    ArtifactBase::DEFAULT_AREA_OF_EFFECT
}

impl TryFrom<RawBase> for ArtifactBase {
    type Error = ArtifactError;

    fn try_from(raw: RawBase) -> Result<Self, Self::Error> {
        Ok(ArtifactBase::new(raw.name, raw.power)?.with_area_of_effect(raw.area_of_effect))
    }
}

impl ArtifactBase {
    pub const DEFAULT_AREA_OF_EFFECT: u32 = 5;

    /// Fails with [`ArtifactError::EmptyName`] for a blank name
    pub fn new(name: impl Into<String>, power: u32) -> Result<Self, ArtifactError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArtifactError::EmptyName);
        }
        Ok(Self {
            name,
            power,
            area_of_effect: Self::DEFAULT_AREA_OF_EFFECT,
        })
    }

    pub fn with_area_of_effect(mut self, area_of_effect: u32) -> Self {
        self.area_of_effect = area_of_effect;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn area_of_effect(&self) -> u32 {
        self.area_of_effect
    }
}

/// An artifact in exactly one of its five states
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Artifact {
    Unholy(ArtifactBase),
    Normal(ArtifactBase),
    Blessed(ArtifactBase),
    RadiantNormal {
        #[serde(flatten)]
        base: ArtifactBase,
        healing_power: u64,
    },
    RadiantBlessed {
        #[serde(flatten)]
        base: ArtifactBase,
        healing_power: u64,
    },
}

impl Artifact {
    /// Build an artifact of the given kind.
    ///
    /// Radiant kinds get the healing power `make_radiant` would give them;
    /// use [`Artifact::radiant`] to pick it explicitly.
    pub fn new(kind: ArtifactKind, name: impl Into<String>, power: u32) -> Result<Self, ArtifactError> {
        let base = ArtifactBase::new(name, power)?;
        Ok(match kind {
            ArtifactKind::Unholy => Artifact::Unholy(base),
            ArtifactKind::Normal => Artifact::Normal(base),
            ArtifactKind::Blessed => Artifact::Blessed(base),
            ArtifactKind::RadiantNormal => Artifact::RadiantNormal {
                healing_power: u64::from(base.power),
                base,
            },
            ArtifactKind::RadiantBlessed => Artifact::RadiantBlessed {
                healing_power: u64::from(base.power) * 2,
                base,
            },
        })
    }

    /// Build an artifact of any kind with an explicit healing power.
    ///
    /// The healing power is ignored for non-radiant kinds.
    pub fn radiant(
        kind: ArtifactKind,
        name: impl Into<String>,
        power: u32,
        healing_power: u64,
    ) -> Result<Self, ArtifactError> {
        let base = ArtifactBase::new(name, power)?;
        Ok(Self::from_parts(kind, base, healing_power))
    }

    pub fn unholy(name: impl Into<String>, power: u32) -> Result<Self, ArtifactError> {
        Self::new(ArtifactKind::Unholy, name, power)
    }

    pub fn normal(name: impl Into<String>, power: u32) -> Result<Self, ArtifactError> {
        Self::new(ArtifactKind::Normal, name, power)
    }

    pub fn blessed(name: impl Into<String>, power: u32) -> Result<Self, ArtifactError> {
        Self::new(ArtifactKind::Blessed, name, power)
    }

    pub fn radiant_normal(
        name: impl Into<String>,
        power: u32,
        healing_power: u64,
    ) -> Result<Self, ArtifactError> {
        Self::radiant(ArtifactKind::RadiantNormal, name, power, healing_power)
    }

    pub fn radiant_blessed(
        name: impl Into<String>,
        power: u32,
        healing_power: u64,
    ) -> Result<Self, ArtifactError> {
        Self::radiant(ArtifactKind::RadiantBlessed, name, power, healing_power)
    }

    pub(crate) fn from_parts(kind: ArtifactKind, base: ArtifactBase, healing_power: u64) -> Self {
        match kind {
            ArtifactKind::Unholy => Artifact::Unholy(base),
            ArtifactKind::Normal => Artifact::Normal(base),
            ArtifactKind::Blessed => Artifact::Blessed(base),
            ArtifactKind::RadiantNormal => Artifact::RadiantNormal { base, healing_power },
            ArtifactKind::RadiantBlessed => Artifact::RadiantBlessed { base, healing_power },
        }
    }

    /// Same artifact with a different area of effect
    pub fn with_area_of_effect(&self, area_of_effect: u32) -> Self {
        let base = self.base().clone().with_area_of_effect(area_of_effect);
        Self::from_parts(self.kind(), base, self.healing_power().unwrap_or(0))
    }

    /// Variant tag
    pub const fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Unholy(_) => ArtifactKind::Unholy,
            Artifact::Normal(_) => ArtifactKind::Normal,
            Artifact::Blessed(_) => ArtifactKind::Blessed,
            Artifact::RadiantNormal { .. } => ArtifactKind::RadiantNormal,
            Artifact::RadiantBlessed { .. } => ArtifactKind::RadiantBlessed,
        }
    }

    pub fn base(&self) -> &ArtifactBase {
        match self {
            Artifact::Unholy(base) | Artifact::Normal(base) | Artifact::Blessed(base) => base,
            Artifact::RadiantNormal { base, .. } | Artifact::RadiantBlessed { base, .. } => base,
        }
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn power(&self) -> u32 {
        self.base().power()
    }

    pub fn area_of_effect(&self) -> u32 {
        self.base().area_of_effect()
    }

    /// Healing power, only present on radiant artifacts
    pub fn healing_power(&self) -> Option<u64> {
        match self {
            Artifact::RadiantNormal { healing_power, .. }
            | Artifact::RadiantBlessed { healing_power, .. } => Some(*healing_power),
            _ => None,
        }
    }

    pub const fn holiness(&self) -> Holiness {
        self.kind().holiness()
    }

    pub const fn is_radiant(&self) -> bool {
        self.kind().is_radiant()
    }

    pub const fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }
}
