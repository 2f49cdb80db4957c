//! Shared integration test helpers for macro-chain.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{TestHost, TestChat};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use macro_chain::{Bank, ChatSink, MacroHost, MacroRef, MacroSlot};

/// In-memory stand-in for the host application: lock flag, line cursor,
/// session state, and a storage table that mints a handle for every slot.
#[derive(Debug)]
pub struct TestHost {
    pub macro_locked: bool,
    pub current_line: i32,
    pub logged_in: bool,
    /// Every macro executed through this host, in order.
    pub executed: Vec<MacroRef>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            macro_locked: false,
            current_line: -1,
            logged_in: true,
            executed: Vec::new(),
        }
    }

    /// Coordinates of everything executed so far, for terse assertions.
    pub fn executed_slots(&self) -> Vec<(Bank, u8)> {
        self.executed
            .iter()
            .map(|m| (m.slot().bank(), m.slot().index()))
            .collect()
    }
}

impl MacroHost for TestHost {
    fn macro_locked(&self) -> bool {
        self.macro_locked
    }

    fn set_macro_locked(&mut self, locked: bool) {
        self.macro_locked = locked;
    }

    fn get_macro(&self, slot: MacroSlot) -> Option<MacroRef> {
        Some(MacroRef::new(slot))
    }

    fn execute(&mut self, macro_ref: MacroRef) {
        self.executed.push(macro_ref);
    }

    fn current_line(&self) -> i32 {
        self.current_line
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

/// Chat sink that records every line for assertions.
#[derive(Debug, Default)]
pub struct TestChat {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl TestChat {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatSink for TestChat {
    fn print(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn print_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Shorthand for building a slot address in tests.
pub fn slot(bank: Bank, index: u8) -> MacroSlot {
    MacroSlot::new(bank, index).expect("test slot index out of range")
}
