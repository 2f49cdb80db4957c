//! Collaborator traits for the host application.
//!
//! The chain core never owns macros or drives execution itself; everything it
//! needs from the host goes through these seams so the core stays testable
//! with a mock host.

use crate::slot::{MacroRef, MacroSlot};

/// Host-side macro facilities: the execution pipeline, its re-entrancy lock,
/// the storage table, and the per-frame state the watchdog samples.
///
/// All methods are called on the host's main update thread; implementations
/// do not need to be thread-safe.
pub trait MacroHost {
    /// Whether the host's execution pipeline is currently re-entrant-locked
    /// (a chain is mid-flight).
    fn macro_locked(&self) -> bool;

    /// Set or clear the execution pipeline lock. The dispatcher clears it
    /// before chaining so the host accepts a follow-up execution.
    fn set_macro_locked(&mut self, locked: bool);

    /// Look up the macro stored at `slot`. `None` means the table could not
    /// produce a handle, which the core treats as a host-side inconsistency.
    fn get_macro(&self, slot: MacroSlot) -> Option<MacroRef>;

    /// Trigger execution of a macro. The host may re-observe this call
    /// through its own hook; the tracker's lock guard absorbs that.
    fn execute(&mut self, macro_ref: MacroRef);

    /// The host's per-frame macro-line cursor. Negative means no macro line
    /// is currently executing.
    fn current_line(&self) -> i32;

    /// Whether the user is authenticated/connected to the session.
    fn is_logged_in(&self) -> bool;
}

/// Text output channel for user-facing command feedback.
pub trait ChatSink {
    /// Print an informational line.
    fn print(&mut self, message: &str);

    /// Print an error line.
    fn print_error(&mut self, message: &str);
}
