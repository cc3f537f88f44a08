// self
use crate::{
	_prelude::*,
	auth::{AttributeList, ProviderName},
	error::ConfigError,
	provider::{RedirectUriTemplate, StrategyConfigBuilder},
};

/// Strategy options as they appear in the host's configuration file.
///
/// Every key is optional; omitted keys keep the variant's defaults. Unknown keys are ignored so
/// the options can live next to host-specific settings in the same object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyOptions {
	/// Provider name stamped on envelopes.
	pub provider: Option<ProviderName>,
	/// Attributes the provider must return.
	pub required: Option<AttributeList>,
	/// Attributes the provider may return.
	pub optional: Option<AttributeList>,
	/// View rendered when no identifier was supplied.
	pub identifier_form: Option<String>,
	/// Form field carrying the user-entered identifier.
	pub identifier_field: Option<String>,
	/// Fixed identifier; takes precedence over `identifier_field`.
	pub identifier: Option<String>,
	/// Callback URI templates handed to OpenID Connect providers.
	pub redirect_uris: Option<Vec<RedirectUriTemplate>>,
	/// Client name announced to OpenID Connect providers.
	pub client_name: Option<String>,
}
impl StrategyOptions {
	/// Parses options from a JSON object, reporting the path of the first malformed field.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(json);

		Ok(serde_path_to_error::deserialize(de)?)
	}

	/// Layers the options over the builder, leaving unset keys untouched.
	pub fn apply(self, mut builder: StrategyConfigBuilder) -> StrategyConfigBuilder {
		if let Some(provider) = self.provider {
			builder = builder.provider(provider);
		}
		if let Some(required) = self.required {
			builder = builder.required(required);
		}
		if let Some(optional) = self.optional {
			builder = builder.optional(optional);
		}
		if let Some(view) = self.identifier_form {
			builder = builder.identifier_form(view);
		}
		if let Some(field) = self.identifier_field {
			builder = builder.identifier_field(field);
		}
		if let Some(identifier) = self.identifier {
			builder = builder.identifier(identifier);
		}
		if let Some(templates) = self.redirect_uris {
			builder = builder.redirect_uris(templates);
		}
		if let Some(name) = self.client_name {
			builder = builder.client_name(name);
		}

		builder
	}
}
