//! Artifact state tags, holiness tiers and the transition table

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Holiness tier (Unholy < Normal < Blessed)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Holiness {
    Unholy,
    Normal,
    Blessed,
}

/// The variant tag of an artifact
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum ArtifactKind {
    #[strum(to_string = "unholy")]
    Unholy,
    #[strum(to_string = "normal")]
    Normal,
    #[strum(to_string = "blessed")]
    Blessed,
    #[strum(to_string = "radiant normal", serialize = "radiant_normal")]
    RadiantNormal,
    #[strum(to_string = "radiant blessed", serialize = "radiant_blessed")]
    RadiantBlessed,
}

/// Operations that move an artifact between states
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Transition {
    #[strum(to_string = "bless")]
    Bless,
    #[strum(to_string = "make radiant", serialize = "make_radiant", serialize = "radiant")]
    MakeRadiant,
}

bitflags! {
    /// What an artifact carries
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        const HAS_NAME = 0x01;
        const HAS_POWER = 0x02;
        const IS_RADIANT = 0x04;
    }
}

impl ArtifactKind {
    pub const fn holiness(self) -> Holiness {
        match self {
            ArtifactKind::Unholy => Holiness::Unholy,
            ArtifactKind::Normal | ArtifactKind::RadiantNormal => Holiness::Normal,
            ArtifactKind::Blessed | ArtifactKind::RadiantBlessed => Holiness::Blessed,
        }
    }

    pub const fn is_radiant(self) -> bool {
        matches!(self, ArtifactKind::RadiantNormal | ArtifactKind::RadiantBlessed)
    }

    pub const fn capabilities(self) -> Capabilities {
        let base = Capabilities::HAS_NAME.union(Capabilities::HAS_POWER);
        if self.is_radiant() {
            base.union(Capabilities::IS_RADIANT)
        } else {
            base
        }
    }

    /// State reached by applying `transition`, or `None` when there is no edge.
    ///
    /// ```text
    /// Unholy --bless--> Normal --bless--> Blessed
    /// Normal --radiant--> RadiantNormal --bless--> RadiantBlessed
    /// Blessed --radiant--> RadiantBlessed
    /// ```
    pub const fn next(self, transition: Transition) -> Option<ArtifactKind> {
        match (self, transition) {
            (ArtifactKind::Unholy, Transition::Bless) => Some(ArtifactKind::Normal),
            (ArtifactKind::Normal, Transition::Bless) => Some(ArtifactKind::Blessed),
            (ArtifactKind::RadiantNormal, Transition::Bless) => Some(ArtifactKind::RadiantBlessed),
            (ArtifactKind::Normal, Transition::MakeRadiant) => Some(ArtifactKind::RadiantNormal),
            (ArtifactKind::Blessed, Transition::MakeRadiant) => Some(ArtifactKind::RadiantBlessed),
            _ => None,
        }
    }

    pub const fn can(self, transition: Transition) -> bool {
        self.next(transition).is_some()
    }

    /// No further blessing possible
    pub const fn is_terminal(self) -> bool {
        !self.can(Transition::Bless)
    }
}
