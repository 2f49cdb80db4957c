//! Chain state tracking driven by the host's macro-execution observations.
//!
//! The host notifies the tracker after every macro it executes; the tracker
//! records the execution and derives the candidate targets a follow-up
//! `/nextmacro` can chain into.

use crate::host::MacroHost;
use crate::slot::{MacroRef, MacroSlot};

/// The per-session chain state: the last observed execution and the
/// candidates derived from it.
///
/// Invariant: when `last_executed` is `None`, every candidate is `None`.
/// Candidates are only ever recomputed together when `last_executed`
/// changes, so they can never be independently stale.
#[derive(Debug, Default)]
pub struct ChainState {
    last_executed: Option<MacroRef>,
    next_candidate: Option<MacroRef>,
    down_candidate: Option<MacroRef>,
    specific_candidate: Option<MacroRef>,
}

impl ChainState {
    /// Create an empty state: no chain in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently observed macro execution, if a chain is in flight.
    pub fn last_executed(&self) -> Option<MacroRef> {
        self.last_executed
    }

    /// Target for a plain `/nextmacro`: one slot forward in the same bank.
    pub fn next_candidate(&self) -> Option<MacroRef> {
        self.next_candidate
    }

    /// Target for `/nextmacro down`: ten slots forward in the same bank.
    pub fn down_candidate(&self) -> Option<MacroRef> {
        self.down_candidate
    }

    /// Target for the numeric `/nextmacro` form: the slot just executed.
    pub fn specific_candidate(&self) -> Option<MacroRef> {
        self.specific_candidate
    }

    /// Whether a chain is currently in flight.
    pub fn is_active(&self) -> bool {
        self.last_executed.is_some()
    }

    /// Forget the chain entirely. Any previously handed-out `MacroRef` is
    /// invalid after this.
    pub fn clear(&mut self) {
        self.last_executed = None;
        self.next_candidate = None;
        self.down_candidate = None;
        self.specific_candidate = None;
    }

    /// Record a macro execution observed from the host.
    ///
    /// This is a post-hoc notification: the host has already run the macro.
    /// Events arriving while the host's execution pipeline is re-entrant-
    /// locked are dropped, so the tracker never observes its own chained
    /// executions.
    pub fn on_macro_executed(&mut self, slot: MacroSlot, host: &impl MacroHost) {
        if host.macro_locked() {
            log::trace!("ignoring execution of {:?} while pipeline is locked", slot);
            return;
        }

        self.clear();
        self.last_executed = host.get_macro(slot);
        if self.last_executed.is_none() {
            log::error!("storage table has no macro at {:?}", slot);
            return;
        }

        // Terminal and reserved slots record the execution but never derive
        // chain targets.
        if slot.is_terminal() {
            log::debug!("macro {} is terminal, not deriving candidates", slot.index());
            return;
        }
        if slot.is_reserved() {
            log::debug!("macro {} is reserved, not deriving candidates", slot.index());
            return;
        }

        self.next_candidate = slot.next().and_then(|s| host.get_macro(s));
        self.down_candidate = slot.down().and_then(|s| host.get_macro(s));
        self.specific_candidate = slot.specific().and_then(|s| host.get_macro(s));
    }
}
