//! In-memory protocol client and recording host for tests and demos; enabled via `cfg(test)` or
//! the `test` crate feature.
//!
//! [`ScriptedClient`] stands in for a real OpenID library: it answers with whatever the test
//! scripted and encodes the [`AuthRequest`] into the auth URL so callers can inspect what the
//! engine handed over. [`RecordingHost`] captures every outcome dispatched to it.

// self
use crate::{
	_prelude::*,
	auth::{AttributeKey, AttributeList, AttributeMap, AuthEnvelope, ErrorEnvelope},
	http::{InboundRequest, Outcome, ResultSink, StrategyHost},
	provider::{AuthRequest, HandshakeMode, ProtocolClient},
};

/// Failure reported by [`ScriptedClient`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{0}")]
pub struct ScriptedError(pub String);

/// Scripted answer to [`ProtocolClient::validate_callback`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScriptedValidation {
	/// Assertion checks out for the identity.
	Accept(String),
	/// Assertion does not check out.
	#[default]
	Reject,
	/// Library fails while validating.
	Fail(String),
}

/// Protocol client answering from a script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedClient {
	/// Fixed mode; `None` reads the mode from the request like a real library.
	pub mode: Option<HandshakeMode>,
	/// Provider endpoint auth URLs are built on; `None` fails discovery.
	pub endpoint: Option<Url>,
	/// Forced discovery failure message.
	pub discovery_failure: Option<String>,
	/// Answer to callback validation.
	pub validation: ScriptedValidation,
	/// Attributes returned after a validated callback.
	pub attributes: AttributeMap,
}
impl ScriptedClient {
	/// Creates a client whose discovery resolves to the endpoint.
	pub fn new(endpoint: Url) -> Self {
		Self { endpoint: Some(endpoint), ..Self::default() }
	}

	/// Pins the mode regardless of the request.
	pub fn with_mode(mut self, mode: HandshakeMode) -> Self {
		self.mode = Some(mode);

		self
	}

	/// Makes auth URL construction fail with the message.
	pub fn failing_discovery(mut self, message: impl Into<String>) -> Self {
		self.discovery_failure = Some(message.into());

		self
	}

	/// Sets the validation answer.
	pub fn with_validation(mut self, validation: ScriptedValidation) -> Self {
		self.validation = validation;

		self
	}

	/// Accepts callbacks for the identity.
	pub fn accepting(self, identity: impl Into<String>) -> Self {
		self.with_validation(ScriptedValidation::Accept(identity.into()))
	}

	/// Adds an attribute returned after validation.
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key.into(), value.into());

		self
	}
}
impl ProtocolClient for ScriptedClient {
	type Error = ScriptedError;

	fn current_mode(&self, request: &InboundRequest) -> HandshakeMode {
		match self.mode {
			Some(mode) => mode,
			None => HandshakeMode::from_request(request),
		}
	}

	fn build_auth_url(&self, request: &AuthRequest<'_>) -> Result<Url, Self::Error> {
		if let Some(message) = &self.discovery_failure {
			return Err(ScriptedError(message.clone()));
		}

		let mut url = self.endpoint.clone().ok_or_else(|| {
			ScriptedError(format!("No OpenID server found at {}", request.identifier))
		})?;
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("openid.mode", "checkid_setup");
		pairs.append_pair("openid.identity", request.identifier);
		pairs.append_pair("openid.realm", request.realm);

		if let Some(return_to) = request.return_to() {
			pairs.append_pair("openid.return_to", return_to.as_str());
		}
		if !request.required.is_empty() {
			pairs.append_pair("openid.ax.required", &join(request.required));
		}
		if !request.optional.is_empty() {
			pairs.append_pair("openid.ax.if_available", &join(request.optional));
		}
		if let Some(name) = request.client_name {
			pairs.append_pair("client_name", name);
		}

		drop(pairs);

		Ok(url)
	}

	fn validate_callback(&self, _request: &InboundRequest) -> Result<Option<String>, Self::Error> {
		match &self.validation {
			ScriptedValidation::Accept(identity) => Ok(Some(identity.clone())),
			ScriptedValidation::Reject => Ok(None),
			ScriptedValidation::Fail(message) => Err(ScriptedError(message.clone())),
		}
	}

	fn fetch_attributes(&self, _request: &InboundRequest) -> AttributeMap {
		self.attributes.clone()
	}
}

/// Host that records every outcome dispatched to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingHost {
	/// Outcomes in dispatch order.
	pub outcomes: Vec<Outcome>,
}
impl RecordingHost {
	/// Returns the only recorded outcome, or `None` when zero or several were recorded.
	pub fn single(&self) -> Option<&Outcome> {
		match self.outcomes.as_slice() {
			[outcome] => Some(outcome),
			_ => None,
		}
	}
}
impl ResultSink for RecordingHost {
	fn on_success(&mut self, envelope: AuthEnvelope) {
		self.outcomes.push(Outcome::Success(envelope));
	}

	fn on_error(&mut self, envelope: ErrorEnvelope) {
		self.outcomes.push(Outcome::Failure(envelope));
	}
}
impl StrategyHost for RecordingHost {
	fn issue_redirect(&mut self, url: &Url) {
		self.outcomes.push(Outcome::Redirect(url.clone()));
	}

	fn render_form(&mut self, view: &str) {
		self.outcomes.push(Outcome::RenderForm { view: view.to_owned() });
	}
}

fn join(list: &AttributeList) -> String {
	list.iter().map(AttributeKey::as_str).collect::<Vec<_>>().join(",")
}
