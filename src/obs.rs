//! Optional observability helpers for handshake steps.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `openid_strategy.handshake` with the
//!   `variant` and `stage` fields, plus warnings for swallowed protocol failures and overlapping
//!   attribute lists.
//! - Enable `metrics` to increment the `openid_strategy_handshake_total` counter for every
//!   attempt and outcome, labeled by `variant` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, http::Outcome};

/// Outcome labels recorded for each handshake step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandshakeOutcome {
	/// Entry to the engine.
	Attempt,
	/// Redirect to the provider issued.
	Redirect,
	/// Identifier form rendered.
	Form,
	/// Auth envelope produced.
	Success,
	/// Error envelope produced.
	Failure,
}
impl HandshakeOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HandshakeOutcome::Attempt => "attempt",
			HandshakeOutcome::Redirect => "redirect",
			HandshakeOutcome::Form => "form",
			HandshakeOutcome::Success => "success",
			HandshakeOutcome::Failure => "failure",
		}
	}
}
impl Display for HandshakeOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<&Outcome> for HandshakeOutcome {
	fn from(outcome: &Outcome) -> Self {
		match outcome {
			Outcome::Redirect(_) => HandshakeOutcome::Redirect,
			Outcome::RenderForm { .. } => HandshakeOutcome::Form,
			Outcome::Success(_) => HandshakeOutcome::Success,
			Outcome::Failure(_) => HandshakeOutcome::Failure,
		}
	}
}
