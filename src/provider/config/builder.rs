// std
use std::iter::IntoIterator;
// self
use crate::{
	_prelude::*,
	auth::{AttributeList, ProviderName},
	error::ConfigError,
	obs,
	provider::{
		DEFAULT_IDENTIFIER_FIELD, DEFAULT_IDENTIFIER_FORM, IdentifierSource, RedirectUriTemplate,
		StrategyConfig, Variant,
	},
};

/// Builder for [`StrategyConfig`] values.
///
/// Every field left unset falls back to the variant's defaults when [`build`](Self::build)
/// runs.
#[derive(Debug)]
pub struct StrategyConfigBuilder {
	/// Protocol flavor of the strategy being configured.
	pub variant: Variant,
	/// Environment host the realm and derived identifier come from.
	pub host: Url,
	/// Envelope provider name override.
	pub provider: Option<ProviderName>,
	/// Mandatory attribute override.
	pub required: Option<AttributeList>,
	/// Optional attribute override.
	pub optional: Option<AttributeList>,
	/// Identifier source override.
	pub identifier_source: Option<IdentifierSource>,
	/// Identifier form view override.
	pub identifier_form: Option<String>,
	/// Redirect URI template override.
	pub redirect_uris: Option<Vec<RedirectUriTemplate>>,
	/// Client name announced to OpenID Connect providers.
	pub client_name: Option<String>,
}
impl StrategyConfigBuilder {
	/// Creates a new builder for the variant and environment host.
	pub fn new(variant: Variant, host: Url) -> Self {
		Self {
			variant,
			host,
			provider: None,
			required: None,
			optional: None,
			identifier_source: None,
			identifier_form: None,
			redirect_uris: None,
			client_name: None,
		}
	}

	/// Creates a new builder from the environment host as written in the host's configuration.
	pub fn from_host_str(variant: Variant, host: &str) -> Result<Self, ConfigError> {
		let host = Url::parse(host).map_err(|source| ConfigError::InvalidHost { source })?;

		Ok(Self::new(variant, host))
	}

	/// Overrides the provider name stamped on envelopes.
	pub fn provider(mut self, provider: ProviderName) -> Self {
		self.provider = Some(provider);

		self
	}

	/// Overrides the mandatory attribute list.
	pub fn required(mut self, required: AttributeList) -> Self {
		self.required = Some(required);

		self
	}

	/// Overrides the optional attribute list.
	pub fn optional(mut self, optional: AttributeList) -> Self {
		self.optional = Some(optional);

		self
	}

	/// Overrides how the identifier is acquired.
	pub fn identifier_source(mut self, source: IdentifierSource) -> Self {
		self.identifier_source = Some(source);

		self
	}

	/// Pins the identifier handed to the protocol client.
	pub fn identifier(self, identifier: impl Into<String>) -> Self {
		self.identifier_source(IdentifierSource::Derived { identifier: identifier.into() })
	}

	/// Reads the identifier from the named form field.
	pub fn identifier_field(self, field: impl Into<String>) -> Self {
		self.identifier_source(IdentifierSource::UserEntered { field: field.into() })
	}

	/// Overrides the identifier form view.
	pub fn identifier_form(mut self, view: impl Into<String>) -> Self {
		self.identifier_form = Some(view.into());

		self
	}

	/// Overrides the redirect URI templates.
	pub fn redirect_uris<I, T>(mut self, templates: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<RedirectUriTemplate>,
	{
		self.redirect_uris = Some(templates.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the client name announced to OpenID Connect providers.
	pub fn client_name(mut self, name: impl Into<String>) -> Self {
		self.client_name = Some(name.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<StrategyConfig, ConfigError> {
		let variant = self.variant;
		let realm = self
			.host
			.host_str()
			.filter(|host| !host.is_empty())
			.map(str::to_owned)
			.ok_or_else(|| ConfigError::HostWithoutDomain { url: self.host.to_string() })?;
		let provider = match self.provider {
			Some(provider) => provider,
			None => ProviderName::new(variant.default_provider())?,
		};
		let required = match self.required {
			Some(list) => list,
			None => AttributeList::new(variant.default_required())
				.map_err(|source| ConfigError::InvalidAttribute { list: "required", source })?,
		};
		let optional = match self.optional {
			Some(list) => list,
			None => AttributeList::new(variant.default_optional())
				.map_err(|source| ConfigError::InvalidAttribute { list: "optional", source })?,
		};
		let identifier_source = self.identifier_source.unwrap_or_else(|| match variant {
			Variant::OpenId =>
				IdentifierSource::UserEntered { field: DEFAULT_IDENTIFIER_FIELD.into() },
			Variant::OpenIdConnect => IdentifierSource::Derived { identifier: realm.clone() },
		});
		let identifier_form =
			self.identifier_form.unwrap_or_else(|| DEFAULT_IDENTIFIER_FORM.to_owned());
		let redirect_uris = self.redirect_uris.unwrap_or_else(|| {
			variant.default_redirect_uris().iter().copied().map(RedirectUriTemplate::new).collect()
		});
		let config = StrategyConfig {
			variant,
			provider,
			realm,
			required,
			optional,
			identifier_source,
			identifier_form,
			redirect_uris,
			client_name: self.client_name,
		};

		config.validate()?;

		if let Some(key) = config.required.overlap(&config.optional).next() {
			obs::warn_attribute_overlap(variant, key);
		}

		Ok(config)
	}
}

impl StrategyConfig {
	/// Validates invariants for the configuration.
	fn validate(&self) -> Result<(), ConfigError> {
		match &self.identifier_source {
			IdentifierSource::UserEntered { field } => {
				if field.trim().is_empty() {
					return Err(ConfigError::MissingIdentifierField);
				}
				if self.identifier_form.trim().is_empty() {
					return Err(ConfigError::MissingIdentifierForm);
				}
			},
			IdentifierSource::Derived { identifier } =>
				if identifier.trim().is_empty() {
					return Err(ConfigError::EmptyIdentifier);
				},
		}

		for (index, template) in self.redirect_uris.iter().enumerate() {
			if template.as_str().trim().is_empty() {
				return Err(ConfigError::BlankRedirectTemplate { index });
			}
		}

		Ok(())
	}
}
