//! The altar: where artifacts are blessed, made radiant and used
//!
//! Holds the ceremony delay, the options and the message log the
//! ceremony writes to.

use tracing::info;

use crate::artifact::{self, Artifact, Transition, use_message};
use crate::ceremony::{COMPLETE_MESSAGE, Ceremony, Delay, PROGRESS_MESSAGE, ThreadSleep, start_message};
use crate::error::ArtifactError;
use crate::options::RelicOptions;

#[derive(Debug, Clone)]
pub struct Altar<D: Delay = ThreadSleep> {
    delay: D,
    options: RelicOptions,

    /// Messages since the last [`Altar::clear_messages`]
    messages: Vec<String>,

    /// Every message ever shown
    message_history: Vec<String>,
}

impl Altar<ThreadSleep> {
    /// An altar whose ceremony really sleeps
    pub fn new(options: RelicOptions) -> Self {
        Self::with_delay(ThreadSleep, options)
    }
}

impl Default for Altar<ThreadSleep> {
    fn default() -> Self {
        Self::new(RelicOptions::default())
    }
}

impl<D: Delay> Altar<D> {
    pub fn with_delay(delay: D, options: RelicOptions) -> Self {
        Self {
            delay,
            options,
            messages: Vec::new(),
            message_history: Vec::new(),
        }
    }

    pub fn options(&self) -> &RelicOptions {
        &self.options
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn message_history(&self) -> &[String] {
        &self.message_history
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Take the pending messages, leaving the history intact
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn bless(&mut self, artifact: &Artifact) -> Result<Artifact, ArtifactError> {
        artifact::bless(artifact, self)
    }

    pub fn make_radiant(&mut self, artifact: &Artifact) -> Result<Artifact, ArtifactError> {
        artifact::make_radiant(artifact)
    }

    pub fn apply(&mut self, transition: Transition, artifact: &Artifact) -> Result<Artifact, ArtifactError> {
        artifact::apply(transition, artifact, self)
    }

    pub fn use_artifact(&mut self, artifact: &Artifact) {
        self.message(use_message(artifact));
    }

    /// Build an artifact with the configured area of effect
    pub fn forge(
        &self,
        kind: artifact::ArtifactKind,
        name: impl Into<String>,
        power: u32,
    ) -> Result<Artifact, ArtifactError> {
        Ok(Artifact::new(kind, name, power)?.with_area_of_effect(self.options.area_of_effect))
    }
}

impl<D: Delay> Ceremony for Altar<D> {
    fn perform(&mut self, artifact: &Artifact) {
        info!(artifact = artifact.name(), ms = self.options.ceremony_ms, "blessing ceremony started");
        self.message(start_message(artifact));
        self.delay.pause(self.options.ceremony());
        if self.options.verbose {
            self.message(PROGRESS_MESSAGE);
        }
        self.message(COMPLETE_MESSAGE);
        info!(artifact = artifact.name(), "blessing ceremony complete");
    }
}
