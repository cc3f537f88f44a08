//! Strategy-level error types.
//!
//! [`Error`] covers configuration problems raised while a strategy is assembled.
//! [`HandshakeError`] is the closed set of handshake failures; the engine never returns it to
//! its caller but converts it into an [`ErrorEnvelope`] delivered to the host.

// self
use crate::{
	_prelude::*,
	auth::{ErrorCode, ErrorEnvelope, NameError, ProviderName},
};

/// Strategy-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical strategy error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration and validation failures raised while assembling a strategy.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Environment host URL carries no host component.
	#[error("Environment host `{url}` has no host component.")]
	HostWithoutDomain {
		/// URL that failed validation.
		url: String,
	},
	/// Environment host URL cannot be parsed.
	#[error("Environment host is invalid.")]
	InvalidHost {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Attribute key in `required` or `optional` failed validation.
	#[error("Attribute list `{list}` is invalid.")]
	InvalidAttribute {
		/// Which list carried the key.
		list: &'static str,
		/// Underlying key failure.
		#[source]
		source: NameError,
	},
	/// Provider name failed validation.
	#[error("Provider name is invalid.")]
	InvalidProvider(#[from] NameError),
	/// Identifier form path is empty while the variant needs one.
	#[error("The identifier form path cannot be empty.")]
	MissingIdentifierForm,
	/// Identifier form field name is empty.
	#[error("The identifier form field cannot be empty.")]
	MissingIdentifierField,
	/// Explicit identifier override is empty.
	#[error("The identifier override cannot be empty.")]
	EmptyIdentifier,
	/// Redirect URI template is blank.
	#[error("Redirect URI template at index {index} is blank.")]
	BlankRedirectTemplate {
		/// Position of the template in `redirect_uris`.
		index: usize,
	},
	/// Strategy options could not be parsed.
	#[error("Strategy options are malformed at `{path}`.")]
	OptionsParse {
		/// Path to the offending field.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::OptionsParse { path, source: e.into_inner() }
	}
}

/// Terminal handshake failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum HandshakeError {
	/// Auth URL construction failed; carries the underlying message unchanged.
	#[error("{message}")]
	BadIdentifier {
		/// Message reported by the protocol client or redirect expansion.
		message: String,
	},
	/// User aborted at the provider.
	#[error("User has canceled authentication")]
	Canceled,
	/// Callback did not validate.
	#[error("User has not logged in")]
	NotLoggedIn,
}
impl HandshakeError {
	/// Wraps any failure raised while computing the redirect.
	pub fn bad_identifier(src: impl Display) -> Self {
		Self::BadIdentifier { message: src.to_string() }
	}

	/// Returns the envelope code for the failure.
	pub const fn code(&self) -> ErrorCode {
		match self {
			HandshakeError::BadIdentifier { .. } => ErrorCode::BadIdentifier,
			HandshakeError::Canceled => ErrorCode::CancelAuthentication,
			HandshakeError::NotLoggedIn => ErrorCode::NotLoggedIn,
		}
	}

	/// Converts the failure into the envelope handed to the host.
	pub fn into_envelope(self, provider: ProviderName) -> ErrorEnvelope {
		ErrorEnvelope { provider, code: self.code(), message: self.to_string() }
	}
}
