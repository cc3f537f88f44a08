//! Strategy configuration data structures and per-variant defaults.
//!
//! A [`StrategyConfig`] is built once when the strategy is registered and stays read-only for
//! the lifetime of the process; the handshake engine only ever borrows it.

/// Builder API for assembling strategy configurations.
pub mod builder;
/// JSON option loading.
pub mod options;
/// Redirect URI templates.
pub mod redirect;

pub use builder::*;
pub use options::*;
pub use redirect::*;

// self
use crate::{
	_prelude::*,
	auth::{AttributeList, ProviderName, keys},
};

/// Form field carrying the user-entered identifier.
pub const DEFAULT_IDENTIFIER_FIELD: &str = "openid_url";
/// View rendered when the user has not supplied an identifier yet.
pub const DEFAULT_IDENTIFIER_FORM: &str = "identifier_request.html";

/// Protocol flavor served by a strategy.
///
/// Both flavors share one handshake; they differ in attribute vocabulary, defaults, and how the
/// identifier is acquired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
	/// OpenID 2.0 with attribute exchange; the user types an identifier.
	OpenId,
	/// OpenID Connect; the identifier is derived from the environment host.
	OpenIdConnect,
}
impl Variant {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Variant::OpenId => "openid",
			Variant::OpenIdConnect => "openid_connect",
		}
	}

	/// Provider name stamped on envelopes unless the configuration overrides it.
	pub const fn default_provider(self) -> &'static str {
		match self {
			Variant::OpenId => "OpenID",
			Variant::OpenIdConnect => "OpenIDConnect",
		}
	}

	/// Attribute key the normalizer reads the email address from.
	pub const fn email_key(self) -> &'static str {
		match self {
			Variant::OpenId => keys::INTERNET_EMAIL,
			Variant::OpenIdConnect => keys::EMAIL,
		}
	}

	/// Attributes requested as mandatory when the configuration omits `required`.
	pub const fn default_required(self) -> &'static [&'static str] {
		match self {
			Variant::OpenId => &[
				keys::INTERNET_EMAIL,
				keys::FIRST_NAME,
				keys::LAST_NAME,
				keys::FRIENDLY_NAME,
				keys::GUID,
			],
			Variant::OpenIdConnect => &[],
		}
	}

	/// Attributes requested as optional when the configuration omits `optional`.
	pub const fn default_optional(self) -> &'static [&'static str] {
		match self {
			Variant::OpenId => &[keys::PHONE, keys::WEB, keys::IMAGE],
			Variant::OpenIdConnect => &[],
		}
	}

	/// Redirect URI templates used when the configuration omits `redirect_uris`.
	pub const fn default_redirect_uris(self) -> &'static [&'static str] {
		match self {
			Variant::OpenId => &[],
			Variant::OpenIdConnect => &[DEFAULT_REDIRECT_URI],
		}
	}
}
impl Display for Variant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Where the handshake obtains the identifier it hands to the protocol client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierSource {
	/// Read from the named form field; render the identifier form when it is missing.
	UserEntered {
		/// Form field name.
		field: String,
	},
	/// Fixed identifier known at configuration time.
	Derived {
		/// Identifier passed to the protocol client on every request.
		identifier: String,
	},
}

/// Immutable strategy configuration consumed by the handshake engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
	/// Protocol flavor.
	pub variant: Variant,
	/// Name stamped on every envelope.
	pub provider: ProviderName,
	/// Host component of the environment host, used as the trust root.
	pub realm: String,
	/// Attributes the provider must return.
	pub required: AttributeList,
	/// Attributes the provider may return.
	pub optional: AttributeList,
	/// How the identifier is acquired.
	pub identifier_source: IdentifierSource,
	/// View rendered when a user-entered identifier is missing.
	pub identifier_form: String,
	/// Callback URI templates handed to the provider, in preference order.
	pub redirect_uris: Vec<RedirectUriTemplate>,
	/// Client name announced to OpenID Connect providers.
	pub client_name: Option<String>,
}
impl StrategyConfig {
	/// Creates a new builder for the provided variant and environment host.
	pub fn builder(variant: Variant, host: Url) -> StrategyConfigBuilder {
		StrategyConfigBuilder::new(variant, host)
	}

	/// Builds a configuration populated entirely with the variant's defaults.
	pub fn defaults(variant: Variant, host: Url) -> Result<Self> {
		Ok(Self::builder(variant, host).build()?)
	}

	/// Loads a configuration from a JSON object of strategy options layered over the
	/// variant's defaults.
	pub fn from_json(variant: Variant, host: Url, json: &str) -> Result<Self> {
		let options = StrategyOptions::from_json(json)?;

		Ok(options.apply(Self::builder(variant, host)).build()?)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn host() -> Url {
		Url::parse("https://app.example.com/auth").expect("Host fixture should parse.")
	}

	#[test]
	fn openid_defaults_request_attribute_exchange_schema() {
		let config = StrategyConfig::defaults(Variant::OpenId, host())
			.expect("Default OpenID configuration should build.");

		assert_eq!(config.provider.as_str(), "OpenID");
		assert_eq!(config.realm, "app.example.com");
		assert_eq!(config.required.len(), 5);
		assert!(config.required.contains("contact/internet/email"));
		assert!(config.required.contains("person/guid"));
		assert!(config.optional.contains("media/image"));
		assert_eq!(
			config.identifier_source,
			IdentifierSource::UserEntered { field: DEFAULT_IDENTIFIER_FIELD.into() }
		);
		assert_eq!(config.identifier_form, DEFAULT_IDENTIFIER_FORM);
		assert!(config.redirect_uris.is_empty());
	}

	#[test]
	fn connect_defaults_derive_identifier_from_host() {
		let config = StrategyConfig::defaults(Variant::OpenIdConnect, host())
			.expect("Default OpenID Connect configuration should build.");

		assert_eq!(config.provider.as_str(), "OpenIDConnect");
		assert!(config.required.is_empty());
		assert!(config.optional.is_empty());
		assert_eq!(
			config.identifier_source,
			IdentifierSource::Derived { identifier: "app.example.com".into() }
		);
		assert_eq!(
			config.redirect_uris.iter().map(RedirectUriTemplate::as_str).collect::<Vec<_>>(),
			["{complete_url_to_strategy}oauth2callback"]
		);
	}

	#[test]
	fn variants_read_email_from_their_own_vocabulary() {
		assert_eq!(Variant::OpenId.email_key(), "contact/internet/email");
		assert_eq!(Variant::OpenIdConnect.email_key(), "contact/email");
	}
}
