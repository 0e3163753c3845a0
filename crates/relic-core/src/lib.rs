//! relic-core: artifact blessing lifecycle
//!
//! Artifacts move through three holiness tiers (unholy, normal, blessed) and
//! can be made radiant once, gaining healing power. Every transition yields a
//! new immutable value; invalid transitions are rejected with
//! [`ArtifactError::InvalidStateTransition`].
//!
//! Blessing plays a ceremony first. The ceremony's pause is behind
//! [`Delay`], so tests can use [`InstantDelay`].

pub mod altar;
pub mod artifact;
pub mod ceremony;
pub mod options;

mod error;

pub use altar::Altar;
pub use artifact::{
    Artifact, ArtifactBase, ArtifactKind, Capabilities, Holiness, Transition, bless, describe,
    make_radiant,
};
pub use ceremony::{Ceremony, Delay, InstantDelay, QuietCeremony, ThreadSleep};
pub use error::ArtifactError;
pub use options::{OptionsError, RelicOptions};
