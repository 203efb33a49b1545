//! # Token Module
//!
//! Presence check for `DEMO_TOKEN`. The value is read only to test for
//! emptiness and is dropped immediately; it is never stored or logged.

use crate::{Ambient, TOKEN_VAR};
use serde::{Deserialize, Serialize};

/// Whether `DEMO_TOKEN` is defined and non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPresence(pub bool);

impl TokenPresence {
    /// Check the ambient environment. An empty value counts as absent.
    #[must_use]
    pub fn resolve(ambient: &impl Ambient) -> Self {
        Self(ambient.var(TOKEN_VAR).is_some_and(|value| !value.is_empty()))
    }

    /// Check if the token is present.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0
    }
}

impl std::fmt::Display for TokenPresence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "True" } else { "False" })
    }
}

// =============================================================================
// TESTS
// =============================================================================
