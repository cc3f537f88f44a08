// self
use openid_strategy::{
	auth::AttributeKey,
	error::{ConfigError, Error},
	provider::{IdentifierSource, RedirectUriTemplate, StrategyConfig, Variant},
	url::Url,
};

fn host() -> Url {
	Url::parse("https://app.example.com/auth").expect("Host fixture should parse.")
}

#[test]
fn json_options_override_connect_defaults() {
	let config = StrategyConfig::from_json(
		Variant::OpenIdConnect,
		host(),
		r#"{
			"provider": "Corporate",
			"required": ["contact/email", "namePerson/first", "contact/email"],
			"identifier": "https://login.example.org",
			"redirect_uris": ["{complete_url_to_strategy}cb", "https://app.example.com/fallback"],
			"client_name": "Example App"
		}"#,
	)
	.expect("Options should load.");

	assert_eq!(config.provider.as_str(), "Corporate");
	assert_eq!(
		config.required.iter().map(AttributeKey::as_str).collect::<Vec<_>>(),
		["contact/email", "namePerson/first"]
	);
	assert!(config.optional.is_empty());
	assert_eq!(
		config.identifier_source,
		IdentifierSource::Derived { identifier: "https://login.example.org".into() }
	);
	assert_eq!(
		config.redirect_uris,
		[
			RedirectUriTemplate::new("{complete_url_to_strategy}cb"),
			RedirectUriTemplate::new("https://app.example.com/fallback"),
		]
	);
	assert_eq!(config.client_name.as_deref(), Some("Example App"));
}

#[test]
fn empty_options_equal_variant_defaults() {
	for variant in [Variant::OpenId, Variant::OpenIdConnect] {
		let loaded =
			StrategyConfig::from_json(variant, host(), "{}").expect("Empty options should load.");
		let defaults = StrategyConfig::defaults(variant, host()).expect("Defaults should build.");

		assert_eq!(loaded, defaults);
	}
}

#[test]
fn invalid_options_surface_config_errors() {
	let err = StrategyConfig::from_json(Variant::OpenId, host(), r#"{ "provider": "" }"#)
		.expect_err("Empty provider names should be rejected.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::OptionsParse { ref path, .. }) if path == "provider"
	));

	let err = StrategyConfig::from_json(Variant::OpenId, host(), r#"{ "identifier_field": " " }"#)
		.expect_err("Blank identifier fields should be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::MissingIdentifierField)));

	let err = StrategyConfig::from_json(Variant::OpenId, host(), "42")
		.expect_err("Options must be a JSON object.");

	assert!(matches!(err, Error::Config(ConfigError::OptionsParse { .. })));
}

#[test]
fn config_round_trips_through_json() {
	let config = StrategyConfig::defaults(Variant::OpenId, host())
		.expect("Default OpenID configuration should build.");
	let json = serde_json::to_string(&config).expect("Configuration should serialize.");
	let restored: StrategyConfig =
		serde_json::from_str(&json).expect("Configuration should deserialize.");

	assert_eq!(restored, config);
	assert!(json.contains("\"variant\":\"open_id\""));
}
