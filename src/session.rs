//! Editing session with debounced autosave
//!
//! An [`EditSession`] owns the document being edited and tracks a revision
//! counter plus the time of the last edit. Autosave fires once the debounce
//! window has elapsed with no further edits; every edit reschedules the
//! window. The session only produces serialized snapshots; shipping them to
//! the backend (and coordinating overlapping saves) is the caller's problem.

use std::time::{Duration, Instant};

use crate::document::Document;

/// Quiet period after the last edit before an autosave fires
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// One editing session over a single document
#[derive(Debug)]
pub struct EditSession {
    document: Document,
    debounce: Duration,
    revision: u64,
    saved_revision: u64,
    last_edit: Option<Instant>,
}

impl EditSession {
    /// Start a session over a document; the initial state counts as saved
    pub fn new(document: Document) -> Self {
        Self {
            document,
            debounce: DEFAULT_DEBOUNCE,
            revision: 0,
            saved_revision: 0,
            last_edit: None,
        }
    }

    /// Override the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The current document state
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of edits applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether there are edits that have not been snapshotted yet
    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    /// Apply an edit, bumping the revision and rescheduling the debounce
    pub fn edit<F: FnOnce(&mut Document)>(&mut self, now: Instant, apply: F) {
        apply(&mut self.document);
        self.revision += 1;
        self.last_edit = Some(now);
    }

    /// Whether the debounce window has expired with unsaved edits
    pub fn autosave_due(&self, now: Instant) -> bool {
        match self.last_edit {
            Some(last) if self.is_dirty() => now.duration_since(last) >= self.debounce,
            _ => false,
        }
    }

    /// Take a serialized snapshot if an autosave is due, marking it saved
    ///
    /// Returns None while the window is still open or nothing changed.
    pub fn autosave_payload(&mut self, now: Instant) -> Option<String> {
        if !self.autosave_due(now) {
            return None;
        }
        self.saved_revision = self.revision;
        Some(self.document.to_json())
    }

    /// Serialize the current state unconditionally (explicit save)
    pub fn save_payload(&mut self) -> String {
        self.saved_revision = self.revision;
        self.document.to_json()
    }
}
