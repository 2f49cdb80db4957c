//! Typed errors for the macro-chain command boundary.
//!
//! Every variant maps to exactly one user-visible chat line; nothing here
//! propagates past the command handlers and nothing is fatal to the host.

use thiserror::Error;

use crate::slot::MacroSlot;

/// Failures reported by the `/nextmacro` and `/runmacro` handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// `/nextmacro` was issued with no chain in flight.
    #[error("No macro is running.")]
    NoActiveChain,

    /// The "down" candidate is excluded because the last macro sat in the
    /// reserved range.
    #[error("Can't use `/nextmacro down` on macro 90+")]
    DownUnavailable,

    /// The "next" candidate is excluded because the last macro was the
    /// bank's terminal slot.
    #[error("Can't use `/nextmacro` on macro 99.")]
    NextUnavailable,

    /// The numeric argument to `/nextmacro` did not parse or fell outside
    /// `[0, 99]`.
    #[error("Number must be between [0;99]")]
    InvalidSlotNumber,

    /// The slot argument to `/runmacro` did not parse or fell outside
    /// `[0, 99]`.
    #[error("Invalid Macro number.\nShould be 0 - 99")]
    InvalidMacroNumber,

    /// `/runmacro` was issued while a chain is in flight; it is reserved for
    /// use outside of macros.
    #[error("/runmacro is not usable while macros are running. Please use /nextmacro")]
    ChainActive,

    /// The host storage table failed to produce a handle for a slot the
    /// chain state expected to exist. Logged as a diagnostic in addition to
    /// the chat line.
    #[error("Macro slot {index} in the {bank:?} bank is unavailable.", index = .0.index(), bank = .0.bank())]
    MacroUnavailable(MacroSlot),
}

impl ChainError {
    /// Whether this failure should also be recorded to the diagnostic log
    /// (host-side inconsistencies, as opposed to plain user errors).
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ChainError::MacroUnavailable(_))
    }
}
