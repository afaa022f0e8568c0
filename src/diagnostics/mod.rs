// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for search activity.
//!
//! Raw error details never reach the UI. They are mirrored to the `log`
//! facade and kept in a memory-bounded ring buffer so the last few hundred
//! events can be inspected (from tests, or a debugger) after the fact.
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped search/thumbnail events
//! - [`Diagnostics`]: Recorder owned by the search session

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind};

/// Records diagnostic events and mirrors them to the log.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
        }
    }

    /// Logs `kind` at its level and appends it to the buffer.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        log::log!(kind.level(), "{kind}");
        self.events.push(DiagnosticEvent::now(kind));
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
