//! # AppA Core
//!
//! Gathers the four ambient values of the AppA report and renders them.
//!
//! Every read of the outside world (clock, hostname, environment) goes
//! through the [`Ambient`] trait. [`SystemAmbient`] reads the real process
//! environment, [`FixedAmbient`] replays fixed values.
//!
//! Output is raw structure or plain strings. Writing to a terminal is the
//! binary's job.

pub mod ambient;
pub mod identity;
pub mod moment;
pub mod report;
pub mod token;

pub use ambient::{Ambient, FixedAmbient, SystemAmbient};
pub use identity::{HostIdentity, UserIdentity};
pub use moment::{CurrentMoment, parse_iso8601};
pub use report::{Report, ReportRecord};
pub use token::TokenPresence;

// Re-export chrono so callers can build moments without a separate dependency.
pub use chrono;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Tag printed in brackets at the start of every report line.
pub const DEFAULT_TAG: &str = "AppA";

/// Environment variable holding the invoking user's name.
pub const USER_VAR: &str = "USER";

/// Environment variable whose presence (never value) is reported.
pub const TOKEN_VAR: &str = "DEMO_TOKEN";

/// Rendering of an absent value.
pub const NULL_MARKER: &str = "None";

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised while gathering a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// The operating system did not return a hostname.
    #[error("hostname could not be resolved by the operating system")]
    HostnameUnavailable,
}
