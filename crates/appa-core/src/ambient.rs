//! # Ambient Module
//!
//! The seam between the report and the operating environment.
//!
//! The report never calls the clock, the hostname lookup or `std::env`
//! directly. It asks an [`Ambient`], so tests can pin every value without
//! touching process-global state.

use chrono::{DateTime, FixedOffset, Local};
use std::collections::BTreeMap;
use sysinfo::System;

// =============================================================================
// AMBIENT TRAIT
// =============================================================================

/// Source of the values the report is built from.
pub trait Ambient {
    /// Current moment in the local timezone, offset included.
    fn now(&self) -> DateTime<FixedOffset>;

    /// The machine's network hostname, if the platform provides one.
    fn hostname(&self) -> Option<String>;

    /// Value of an environment variable, if it is defined.
    ///
    /// Presence depends only on whether the variable is defined, never on
    /// whether its value decodes as UTF-8.
    fn var(&self, key: &str) -> Option<String>;
}

// =============================================================================
// SYSTEM AMBIENT
// =============================================================================

/// Reads the real clock, hostname and process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAmbient;

impl SystemAmbient {
    /// Create a new system-backed ambient.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Ambient for SystemAmbient {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn hostname(&self) -> Option<String> {
        System::host_name()
    }

    fn var(&self, key: &str) -> Option<String> {
        // Defined but non-UTF-8 values stay defined; invalid bytes become U+FFFD.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

// =============================================================================
// FIXED AMBIENT
// =============================================================================

/// Replays a fixed moment, hostname and set of variables.
///
/// Uses BTreeMap so that iteration (and `Debug` output) is ordered.
#[derive(Debug, Clone)]
pub struct FixedAmbient {
    now: DateTime<FixedOffset>,
    hostname: Option<String>,
    vars: BTreeMap<String, String>,
}

impl FixedAmbient {
    /// Create an ambient frozen at `now` with no hostname and no variables.
    #[must_use]
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now,
            hostname: None,
            vars: BTreeMap::new(),
        }
    }

    /// Set the hostname returned by [`Ambient::hostname`].
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Simulate a platform that cannot resolve its hostname.
    #[must_use]
    pub fn without_hostname(mut self) -> Self {
        self.hostname = None;
        self
    }

    /// Define an environment variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Ambient for FixedAmbient {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

// =============================================================================
// TESTS
// =============================================================================
