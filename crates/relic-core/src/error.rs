//! Errors raised by artifact construction and transitions

use thiserror::Error;

use crate::artifact::{ArtifactKind, Transition};

/// Errors produced by the artifact model and the transition engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactError {
    /// The transition has no edge from the artifact's current state
    #[error("invalid transition: {operation} from {current}")]
    InvalidStateTransition {
        current: ArtifactKind,
        operation: Transition,
    },

    #[error("artifact name must not be empty")]
    EmptyName,
}

impl ArtifactError {
    /// Variant the failed operation was attempted on, if any
    pub const fn current(&self) -> Option<ArtifactKind> {
        match self {
            ArtifactError::InvalidStateTransition { current, .. } => Some(*current),
            ArtifactError::EmptyName => None,
        }
    }
}
