//! The blessing ceremony
//!
//! Blessing plays an expensive animation before the artifact changes. The
//! pause goes through [`Delay`] so tests can run it without sleeping.

use std::time::Duration;

use crate::artifact::Artifact;

/// Something that can wait for a while
pub trait Delay {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately, remembering every requested pause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantDelay {
    pauses: Vec<Duration>,
}

impl InstantDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all requested pauses
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Delay for InstantDelay {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Performs the blessing ceremony for an artifact about to be blessed
pub trait Ceremony {
    fn perform(&mut self, artifact: &Artifact);
}

/// A ceremony that only waits, with no notifications
#[derive(Debug, Clone)]
pub struct QuietCeremony<D: Delay> {
    delay: D,
    duration: Duration,
}

impl<D: Delay> QuietCeremony<D> {
    pub fn new(delay: D, duration: Duration) -> Self {
        Self { delay, duration }
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}

impl<D: Delay> Ceremony for QuietCeremony<D> {
    fn perform(&mut self, _artifact: &Artifact) {
        self.delay.pause(self.duration);
    }
}

pub(crate) fn start_message(artifact: &Artifact) -> String {
    format!("Playing blessing animation for {}...", artifact.name())
}

pub(crate) const PROGRESS_MESSAGE: &str = "...";
pub(crate) const COMPLETE_MESSAGE: &str = "Blessing animation complete!";
