//! Shared mock host for unit tests.

#![allow(dead_code)]

use crate::host::{ChatSink, MacroHost};
use crate::slot::{MacroRef, MacroSlot};

/// In-memory stand-in for the host application.
///
/// The storage table hands out a handle for every valid slot unless the slot
/// is listed in `missing`, which simulates a storage inconsistency.
#[derive(Debug, Default)]
pub struct MockHost {
    pub macro_locked: bool,
    pub current_line: i32,
    pub logged_in: bool,
    pub missing: Vec<MacroSlot>,
    /// Every macro executed through this host, in order.
    pub executed: Vec<MacroRef>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            macro_locked: false,
            current_line: -1,
            logged_in: true,
            missing: Vec::new(),
            executed: Vec::new(),
        }
    }
}

impl MacroHost for MockHost {
    fn macro_locked(&self) -> bool {
        self.macro_locked
    }

    fn set_macro_locked(&mut self, locked: bool) {
        self.macro_locked = locked;
    }

    fn get_macro(&self, slot: MacroSlot) -> Option<MacroRef> {
        (!self.missing.contains(&slot)).then(|| MacroRef::new(slot))
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
pub struct MockChat {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatSink for MockChat {
    fn print(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn print_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
