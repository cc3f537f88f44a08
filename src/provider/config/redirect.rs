// self
use crate::_prelude::*;

/// Placeholder the host replaces with the absolute URL of the strategy endpoint.
pub const STRATEGY_URL_PLACEHOLDER: &str = "{complete_url_to_strategy}";
/// Redirect URI template used by OpenID Connect strategies by default.
pub const DEFAULT_REDIRECT_URI: &str = "{complete_url_to_strategy}oauth2callback";

/// Failures raised while expanding a [`RedirectUriTemplate`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RedirectUriError {
	/// Template needs the strategy URL but the host did not supply one.
	#[error("Redirect URI template `{template}` needs the strategy URL, but none was supplied.")]
	MissingStrategyUrl {
		/// Template that could not be expanded.
		template: String,
	},
	/// Expanded template is not an absolute URL.
	#[error("Redirect URI `{expanded}` is invalid: {source}.")]
	Invalid {
		/// Expanded URI text.
		expanded: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Callback URI template with an optional `{complete_url_to_strategy}` placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectUriTemplate(String);
impl RedirectUriTemplate {
	/// Wraps a template string.
	pub fn new(template: impl Into<String>) -> Self {
		Self(template.into())
	}

	/// Returns the raw template.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true when the template references the strategy URL.
	pub fn needs_strategy_url(&self) -> bool {
		self.0.contains(STRATEGY_URL_PLACEHOLDER)
	}

	/// Expands the placeholder with the host-provided strategy URL and parses the result.
	pub fn expand(&self, strategy_url: Option<&Url>) -> Result<Url, RedirectUriError> {
		let expanded = if self.needs_strategy_url() {
			let base = strategy_url
				.ok_or_else(|| RedirectUriError::MissingStrategyUrl { template: self.0.clone() })?;

			self.0.replace(STRATEGY_URL_PLACEHOLDER, base.as_str())
		} else {
			self.0.clone()
		};

		Url::parse(&expanded).map_err(|source| RedirectUriError::Invalid { expanded, source })
	}
}
impl From<String> for RedirectUriTemplate {
	fn from(template: String) -> Self {
		Self(template)
	}
}
impl From<&str> for RedirectUriTemplate {
	fn from(template: &str) -> Self {
		Self(template.to_owned())
	}
}
impl Display for RedirectUriTemplate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
