//! # Identity Module
//!
//! Host and user identities as reported by the operating environment.
//!
//! Neither value is validated. Whatever the platform returns is printed.

use crate::{Ambient, NULL_MARKER, ReportError, USER_VAR};
use serde::{Deserialize, Serialize};

/// The machine's network hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostIdentity(pub String);

impl HostIdentity {
    /// Resolve the hostname once. There is no retry and no fallback name.
    pub fn resolve(ambient: &impl Ambient) -> Result<Self, ReportError> {
        ambient
            .hostname()
            .map(Self)
            .ok_or(ReportError::HostnameUnavailable)
    }

    /// The hostname as returned by the platform.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The invoking user's name from `USER`, if defined.
///
/// An undefined variable renders as the null marker. A defined but empty
/// variable renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(pub Option<String>);

impl UserIdentity {
    /// Read `USER` from the ambient environment.
    #[must_use]
    pub fn resolve(ambient: &impl Ambient) -> Self {
        Self(ambient.var(USER_VAR))
    }

    /// The user name, or `None` when `USER` is undefined.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Check whether `USER` was defined.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }
}

impl std::fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or(NULL_MARKER))
    }
}

// =============================================================================
// TESTS
// =============================================================================
