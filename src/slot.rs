//! Macro slot addressing: banks, slot coordinates, and chain-candidate
//! derivation with boundary rules.
//!
//! Each bank holds 100 slots (0-99). Slots 90-99 are reserved for system use
//! and are never auto-chained into; slot 99 is additionally the hard terminal
//! case for the "next" direction.

/// Number of macro slots per bank.
pub const SLOTS_PER_BANK: u8 = 100;

/// First slot of the reserved trailing range. Executions in `[90, 99]`
/// derive no chain candidates.
pub const RESERVED_START: u8 = 90;

/// One of the two independent 100-slot macro storage partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bank {
    /// Per-character macros.
    #[default]
    Individual,
    /// Account-wide macros.
    Shared,
}

/// Storage coordinates of a macro: a bank and a slot index in `0..100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroSlot {
    bank: Bank,
    index: u8,
}

impl MacroSlot {
    /// Create a slot address. Returns `None` if `index` is out of range.
    pub fn new(bank: Bank, index: u8) -> Option<Self> {
        (index < SLOTS_PER_BANK).then_some(Self { bank, index })
    }

    /// The bank this slot belongs to.
    pub fn bank(self) -> Bank {
        self.bank
    }

    /// The slot index within the bank (0-99).
    pub fn index(self) -> u8 {
        self.index
    }

    /// Whether this slot falls in the reserved trailing range `[90, 99]`.
    pub fn is_reserved(self) -> bool {
        self.index >= RESERVED_START
    }

    /// Whether this slot is the bank's terminal slot (99).
    pub fn is_terminal(self) -> bool {
        self.index == SLOTS_PER_BANK - 1
    }

    /// Chain target one slot forward in the same bank.
    ///
    /// Undefined for reserved slots and for the terminal slot 99. Slot 98 is
    /// allowed to land on 99 (the terminal slot is a valid target once, but
    /// never a source).
    pub fn next(self) -> Option<Self> {
        if self.is_terminal() || self.is_reserved() {
            return None;
        }
        Self::new(self.bank, self.index + 1)
    }

    /// Chain target ten slots down in the same bank (the next hotbar row).
    ///
    /// Undefined for reserved slots, which also means `index + 10` can never
    /// exceed 99 here.
    pub fn down(self) -> Option<Self> {
        if self.is_reserved() {
            return None;
        }
        Self::new(self.bank, self.index + 10)
    }

    /// The slot itself as a re-run target. Undefined for reserved slots.
    pub fn specific(self) -> Option<Self> {
        (!self.is_reserved()).then_some(self)
    }
}

/// Opaque, non-owning handle to a macro instance in host storage.
///
/// Minted by the host's storage table and compared by identity, not content.
/// A `MacroRef` is only valid while the chain state that recorded it is
/// alive; it must be re-fetched from the table rather than cached across
/// chain lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroRef {
    slot: MacroSlot,
}

impl MacroRef {
    /// Mint a handle for the given slot. Intended for host-side storage
    /// tables; the chain core never constructs these itself.
    pub fn new(slot: MacroSlot) -> Self {
        Self { slot }
    }

    /// The storage coordinates this handle points at.
    pub fn slot(self) -> MacroSlot {
        self.slot
    }
}
