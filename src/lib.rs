//! Macro chaining for hosts with slot-indexed macro banks.
//!
//! Watches the host's macro executions, predicts the macros the user likely
//! wants to run next (one slot forward, or one hotbar row down), and exposes
//! two chat commands to run them:
//!
//! - `/nextmacro [down|N]` — advance an active chain
//! - `/runmacro N [individual|shared]` — run an arbitrary slot outside a chain
//!
//! A padding watchdog samples the host's per-frame macro-line cursor to
//! decide when a run has truly finished, since a macro can invoke further
//! macros and completion is never a single event.
//!
//! The host drives everything from its main update thread through the three
//! entry points on [`MacroChain`]; the crate spawns no threads and keeps no
//! state beyond the session.

pub mod chain;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod slot;
pub mod watchdog;

#[cfg(test)]
mod testing;

pub use chain::ChainState;
pub use commands::{CommandSpec, NEXT_MACRO_COMMAND, RUN_MACRO_COMMAND};
pub use config::ChainConfig;
pub use error::ChainError;
pub use host::{ChatSink, MacroHost};
pub use slot::{Bank, MacroRef, MacroSlot};
pub use watchdog::PaddingWatchdog;

/// The plugin core: chain state plus the padding watchdog, wired to the
/// host's three callbacks.
///
/// Create one per session and drop it at teardown; nothing persists.
#[derive(Debug)]
pub struct MacroChain {
    state: ChainState,
    watchdog: PaddingWatchdog,
}

impl MacroChain {
    /// Create a plugin instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(&ChainConfig::default())
    }

    /// Create a plugin instance with the given configuration.
    pub fn with_config(config: &ChainConfig) -> Self {
        Self {
            state: ChainState::new(),
            watchdog: PaddingWatchdog::new(config.padding()),
        }
    }

    /// The chat commands the host should register, with their help text.
    pub fn commands() -> [CommandSpec; 2] {
        [NEXT_MACRO_COMMAND, RUN_MACRO_COMMAND]
    }

    /// Read access to the chain state, mainly for host-side UI.
    pub fn state(&self) -> &ChainState {
        &self.state
    }

    /// Execution-observation callback: the host reports every macro it
    /// executed, after the fact.
    pub fn on_macro_executed(&mut self, slot: MacroSlot, host: &impl MacroHost) {
        self.state.on_macro_executed(slot, host);
    }

    /// Per-frame callback: samples the host's line cursor and session state
    /// and retires the chain once the run has been idle long enough.
    pub fn on_frame_update(&mut self, host: &impl MacroHost) {
        self.watchdog.tick(&mut self.state, host);
    }

    /// Command callback: dispatch a registered command by name. Unknown
    /// names are logged and ignored; all failures end as chat error lines.
    pub fn on_command(
        &mut self,
        name: &str,
        args: &str,
        host: &mut impl MacroHost,
        chat: &mut impl ChatSink,
    ) {
        match name {
            n if n == NEXT_MACRO_COMMAND.name => {
                commands::handle_next_macro(&self.state, host, chat, args);
            }
            n if n == RUN_MACRO_COMMAND.name => {
                commands::handle_run_macro(&self.state, host, chat, args);
            }
            other => log::warn!("unknown command dispatched to macro-chain: {other}"),
        }
    }
}

impl Default for MacroChain {
    fn default() -> Self {
        Self::new()
    }
}
