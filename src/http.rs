//! Host-facing request and response primitives.
//!
//! The strategy never touches HTTP directly. Hosts translate their inbound request into an
//! [`InboundRequest`] and implement [`StrategyHost`] so the engine can redirect, render the
//! identifier form, or hand back a finished envelope. Every handshake produces exactly one
//! [`Outcome`], and [`Outcome::dispatch`] forwards it to exactly one host primitive.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{AuthEnvelope, ErrorEnvelope},
};

/// Query and form parameters of one inbound request, plus the strategy's own URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboundRequest {
	/// Query-string parameters.
	pub query: BTreeMap<String, String>,
	/// `application/x-www-form-urlencoded` body parameters.
	pub form: BTreeMap<String, String>,
	/// Absolute URL of the strategy endpoint, used to expand redirect URI templates.
	pub strategy_url: Option<Url>,
}
impl InboundRequest {
	/// Creates an empty request.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a request from a full URL, capturing its query parameters.
	pub fn from_url(url: &Url) -> Self {
		Self { query: url.query_pairs().into_owned().collect(), ..Self::default() }
	}

	/// Adds a query parameter.
	pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(name.into(), value.into());

		self
	}

	/// Adds a form parameter.
	pub fn with_form_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.form.insert(name.into(), value.into());

		self
	}

	/// Merges an urlencoded request body into the form parameters.
	pub fn with_form_body(mut self, body: &str) -> Self {
		self.form.extend(form_urlencoded::parse(body.as_bytes()).into_owned());

		self
	}

	/// Sets the absolute URL of the strategy endpoint.
	pub fn with_strategy_url(mut self, url: Url) -> Self {
		self.strategy_url = Some(url);

		self
	}

	/// Looks up a query parameter.
	pub fn query(&self, name: &str) -> Option<&str> {
		self.query.get(name).map(String::as_str)
	}

	/// Looks up a form parameter.
	pub fn form(&self, name: &str) -> Option<&str> {
		self.form.get(name).map(String::as_str)
	}

	/// Looks up a parameter, preferring the query string over the form body.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.query(name).or_else(|| self.form(name))
	}
}

/// Receives the terminal result of a handshake.
pub trait ResultSink {
	/// Called once with the envelope of a validated login.
	fn on_success(&mut self, envelope: AuthEnvelope);

	/// Called once with the structured failure of an aborted or rejected login.
	fn on_error(&mut self, envelope: ErrorEnvelope);
}

/// Full set of outbound primitives a hosting framework provides to the strategy.
pub trait StrategyHost: ResultSink {
	/// Sends the user agent to the provider. The redirect cannot be taken back once issued.
	fn issue_redirect(&mut self, url: &Url);

	/// Writes the identifier-entry view and ends the response.
	fn render_form(&mut self, view: &str);
}

/// The single effect one handshake step resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Redirect the user agent to the provider.
	Redirect(Url),
	/// Render the identifier-entry view and wait for the next request.
	RenderForm {
		/// View path.
		view: String,
	},
	/// Login succeeded.
	Success(AuthEnvelope),
	/// Login failed.
	Failure(ErrorEnvelope),
}
impl Outcome {
	/// Returns true for the envelope-producing outcomes.
	pub fn is_terminal(&self) -> bool {
		matches!(self, Outcome::Success(_) | Outcome::Failure(_))
	}

	/// Forwards the outcome to the matching host primitive.
	pub fn dispatch<H>(self, host: &mut H)
	where
		H: ?Sized + StrategyHost,
	{
		match self {
			Outcome::Redirect(url) => host.issue_redirect(&url),
			Outcome::RenderForm { view } => host.render_form(&view),
			Outcome::Success(envelope) => host.on_success(envelope),
			Outcome::Failure(envelope) => host.on_error(envelope),
		}
	}
}
