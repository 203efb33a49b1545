//! # Report Module
//!
//! Assembles the four ambient values and renders them.
//!
//! Text output is four fixed lines, in this order:
//!
//! ```text
//! [AppA] Now: 2024-03-15T10:30:00-07:00
//! [AppA] Host=build01 User=alice
//! [AppA] Day-of-year=75
//! [AppA] DEMO_TOKEN set? True
//! ```
//!
//! Each value is resolved exactly once per [`Report::gather`]; nothing is
//! cached across reports.

use crate::{
    Ambient, CurrentMoment, HostIdentity, ReportError, TOKEN_VAR, TokenPresence, UserIdentity,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One snapshot of the ambient environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// When the report was taken.
    pub moment: CurrentMoment,
    /// Machine hostname.
    pub host: HostIdentity,
    /// Value of `USER`, if any.
    pub user: UserIdentity,
    /// Whether `DEMO_TOKEN` is set.
    pub token: TokenPresence,
}

impl Report {
    /// Resolve every value from the ambient environment.
    ///
    /// The moment is read first so that the day-of-year always agrees with
    /// the printed timestamp. Fails only when the hostname is unavailable.
    pub fn gather(ambient: &impl Ambient) -> Result<Self, ReportError> {
        let moment = CurrentMoment::new(ambient.now());
        let host = HostIdentity::resolve(ambient)?;
        let user = UserIdentity::resolve(ambient);
        let token = TokenPresence::resolve(ambient);

        debug!(
            host = %host,
            user_known = user.is_known(),
            token_set = token.is_set(),
            "gathered report"
        );

        Ok(Self {
            moment,
            host,
            user,
            token,
        })
    }

    /// 1-based ordinal day of the report's moment.
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.moment.day_of_year()
    }

    /// The four report lines, each prefixed with `[tag]`.
    #[must_use]
    pub fn lines(&self, tag: &str) -> [String; 4] {
        [
            format!("[{}] Now: {}", tag, self.moment),
            format!("[{}] Host={} User={}", tag, self.host, self.user),
            format!("[{}] Day-of-year={}", tag, self.day_of_year()),
            format!("[{}] {} set? {}", tag, TOKEN_VAR, self.token),
        ]
    }

    /// The four lines joined, each terminated by a newline.
    #[must_use]
    pub fn to_text(&self, tag: &str) -> String {
        let mut output = String::new();
        for line in self.lines(tag) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Flatten into a serialisable record for machine-readable output.
    #[must_use]
    pub fn record(&self, tag: &str) -> ReportRecord {
        ReportRecord {
            app: tag.to_string(),
            now: self.moment.to_iso8601(),
            host: self.host.as_str().to_string(),
            user: self.user.as_deref().map(str::to_string),
            day_of_year: self.day_of_year(),
            demo_token_set: self.token.is_set(),
        }
    }
}

/// Flat, serialisable form of a [`Report`].
///
/// Carries only the token's presence, never its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// The tag the report was rendered with.
    pub app: String,
    /// ISO-8601 timestamp with offset.
    pub now: String,
    /// Machine hostname.
    pub host: String,
    /// Value of `USER`; `null` when undefined.
    pub user: Option<String>,
    /// 1-based ordinal day.
    pub day_of_year: u32,
    /// Whether `DEMO_TOKEN` is defined and non-empty.
    pub demo_token_set: bool,
}

// =============================================================================
// TESTS
// =============================================================================
