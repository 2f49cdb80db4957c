//! Runtime configuration for the chain tracker.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User-tunable settings, typically deserialized from the host's plugin
/// config file. All fields have defaults so an empty mapping is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    /// How long the host's macro-line cursor must stay idle, in
    /// milliseconds, before a run is considered finished. The window absorbs
    /// the host posting the next line state a frame or two late.
    #[serde(default = "default_padding_ms")]
    pub padding_ms: u64,
}

fn default_padding_ms() -> u64 {
    2000
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            padding_ms: default_padding_ms(),
        }
    }
}

impl ChainConfig {
    /// The padding threshold as a [`Duration`].
    pub fn padding(&self) -> Duration {
        Duration::from_millis(self.padding_ms)
    }
}
