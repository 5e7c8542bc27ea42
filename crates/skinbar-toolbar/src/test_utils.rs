//! Shared test utilities for skinbar-toolbar tests.
//!
//! Provides a [`RecordingEditor`] that records every command for assertion.

use crate::descriptor::EditorCommand;
use crate::toolbar::EditorCommands;

/// An editing engine stand-in that records the commands it receives.
pub struct RecordingEditor {
    pub commands: Vec<EditorCommand>,
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The most recent command, if any.
    pub fn last(&self) -> Option<EditorCommand> {
        self.commands.last().copied()
    }
}

impl EditorCommands for RecordingEditor {
    fn execute(&mut self, command: EditorCommand) {
        self.commands.push(command);
    }
}
