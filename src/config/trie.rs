//! Trie configuration module.
//!
//! This module defines how the trie built by the loader accounts for keys.

use super::{ConfigResult, Validate};
use crate::data_structures::{CountingMode, LanaiTrieConfig};
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrieSettings {
    /// Counting policy: `distinct` keys, or `literal` per-call accounting
    pub counting: CountingMode,
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        // Every counting mode is valid on its own.
        Ok(())
    }
}

impl From<TrieSettings> for LanaiTrieConfig {
    fn from(settings: TrieSettings) -> Self {
        Self {
            counting: settings.counting,
        }
    }
}
