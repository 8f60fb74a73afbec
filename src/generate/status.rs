//! Run states and status reporting.

use std::fmt;

use serde::Serialize;

/// States of one generation run. `Idle` is the between-runs state; a run
/// emits `Loading`, `Requesting`, `Applying` and then exactly one terminal
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Loading,
    Requesting,
    Applying,
    Success,
    Error,
}

impl GenerationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Requesting => "requesting",
            Self::Applying => "applying",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(tag)
    }
}

/// One emission of the run state machine: the state entered plus a
/// human-readable line for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub state: GenerationState,
    pub message: String,
}

impl StatusUpdate {
    pub fn new(state: GenerationState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }
}

/// Observer of run progress. Every state transition delivers exactly one
/// update, in order.
pub trait StatusSink {
    fn status(&mut self, update: &StatusUpdate);
}

/// Sink that keeps every update, for assertions and dumps.
#[derive(Clone, Debug, Default)]
pub struct RecordingStatusSink {
    updates: Vec<StatusUpdate>,
}

impl RecordingStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> &[StatusUpdate] {
        &self.updates
    }

    /// State tags in emission order.
    pub fn states(&self) -> Vec<GenerationState> {
        self.updates.iter().map(|update| update.state).collect()
    }

    pub fn last(&self) -> Option<&StatusUpdate> {
        self.updates.last()
    }
}

impl StatusSink for RecordingStatusSink {
    fn status(&mut self, update: &StatusUpdate) {
        self.updates.push(update.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(GenerationState::Success.is_terminal());
        assert!(GenerationState::Error.is_terminal());
        assert!(!GenerationState::Requesting.is_terminal());
        assert!(!GenerationState::Idle.is_terminal());
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingStatusSink::new();
        sink.status(&StatusUpdate::new(GenerationState::Loading, "a"));
        sink.status(&StatusUpdate::new(GenerationState::Error, "b"));
        assert_eq!(
            sink.states(),
            vec![GenerationState::Loading, GenerationState::Error]
        );
        assert_eq!(sink.last().map(|u| u.message.as_str()), Some("b"));
    }
}
