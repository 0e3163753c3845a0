//! Artifact system
//!
//! Artifact values, their state tags and the transitions between them.

mod artname;
mod bless;
mod kind;
mod obj;

pub use artname::{describe, use_message};
pub use bless::{apply, bless, make_radiant};
pub use kind::{ArtifactKind, Capabilities, Holiness, Transition};
pub use obj::{Artifact, ArtifactBase};
