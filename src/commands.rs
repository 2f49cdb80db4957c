//! The `/nextmacro` and `/runmacro` command handlers.
//!
//! Both handlers convert every failure into a single chat error line at the
//! command boundary; host-side inconsistencies are additionally recorded to
//! the diagnostic log. Nothing propagates past this module.

use crate::chain::ChainState;
use crate::error::ChainError;
use crate::host::{ChatSink, MacroHost};
use crate::slot::{Bank, MacroRef, MacroSlot};

/// Registration data for one chat command: the host registers the name and
/// shows the help text in its command listing.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command name including the leading slash.
    pub name: &'static str,
    /// Help text shown by the host's command listing.
    pub help: &'static str,
}

/// The chat command that advances an active chain.
pub const NEXT_MACRO_COMMAND: CommandSpec = CommandSpec {
    name: "/nextmacro",
    help: "Executes the next macro. Add number to specify which macro to run next",
};

/// The chat command that runs an arbitrary macro outside of a chain.
pub const RUN_MACRO_COMMAND: CommandSpec = CommandSpec {
    name: "/runmacro",
    help: "Execute a macro (Not usable inside macros). - /runmacro ## [individual|shared].",
};

/// Handle `/nextmacro`, reporting any failure to `chat`.
pub fn handle_next_macro(
    state: &ChainState,
    host: &mut impl MacroHost,
    chat: &mut impl ChatSink,
    args: &str,
) {
    if let Err(e) = advance(state, host, args) {
        report(chat, &e);
    }
}

/// Handle `/runmacro`, reporting any failure to `chat`.
pub fn handle_run_macro(
    state: &ChainState,
    host: &mut impl MacroHost,
    chat: &mut impl ChatSink,
    args: &str,
) {
    if let Err(e) = run_macro(state, host, args) {
        report(chat, &e);
    }
}

fn report(chat: &mut impl ChatSink, error: &ChainError) {
    if error.is_unexpected() {
        log::error!("macro command failed: {error}");
    }
    chat.print_error(&error.to_string());
}

/// Advance the active chain according to `args`.
///
/// Blank args chain to the "next" candidate, `down` chains ten slots down,
/// and a number in `[0, 99]` re-executes the slot that just ran. The typed
/// number is only validated, never used to select a target.
pub fn advance(
    state: &ChainState,
    host: &mut impl MacroHost,
    args: &str,
) -> Result<(), ChainError> {
    if !state.is_active() {
        return Err(ChainError::NoActiveChain);
    }

    let result = select_target(state, args).map(|target| {
        host.set_macro_locked(false);
        host.execute(target);
    });

    // Unconditional second clear, kept from the original behavior: harmless
    // when a target already ran, and it leaves the pipeline usable after a
    // reported error.
    host.set_macro_locked(false);
    result
}

fn select_target(state: &ChainState, args: &str) -> Result<MacroRef, ChainError> {
    let last = state.last_executed().ok_or(ChainError::NoActiveChain)?;
    let args = args.trim();

    if args.eq_ignore_ascii_case("down") {
        return state.down_candidate().ok_or(ChainError::DownUnavailable);
    }

    if args.is_empty() {
        return state.next_candidate().ok_or(ChainError::NextUnavailable);
    }

    match args.parse::<u8>() {
        Ok(n) if n <= 99 => {
            // The parsed value intentionally selects nothing; the numeric
            // form re-runs the slot that just executed.
            state
                .specific_candidate()
                .ok_or(ChainError::MacroUnavailable(last.slot()))
        }
        _ => Err(ChainError::InvalidSlotNumber),
    }
}

/// Run an arbitrary macro by slot number, only while no chain is in flight.
pub fn run_macro(
    state: &ChainState,
    host: &mut impl MacroHost,
    args: &str,
) -> Result<(), ChainError> {
    if state.is_active() {
        return Err(ChainError::ChainActive);
    }

    let mut tokens = args.split_whitespace();
    let index = tokens
        .next()
        .and_then(|t| t.parse::<u8>().ok())
        .ok_or(ChainError::InvalidMacroNumber)?;
    if index > 99 {
        return Err(ChainError::InvalidMacroNumber);
    }

    // Bank keywords may appear in any order; the last one wins.
    let mut bank = Bank::Individual;
    for token in tokens {
        match token.to_ascii_lowercase().as_str() {
            "shared" | "share" | "s" => bank = Bank::Shared,
            "individual" | "i" => bank = Bank::Individual,
            _ => {}
        }
    }

    let slot = MacroSlot::new(bank, index).ok_or(ChainError::InvalidMacroNumber)?;
    let target = host
        .get_macro(slot)
        .ok_or(ChainError::MacroUnavailable(slot))?;
    host.execute(target);
    Ok(())
}
