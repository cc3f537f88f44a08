//! Mode dispatch for a single handshake step.
//!
//! [`HandshakeEngine::resolve`] opens a [`HandshakeSession`], branches on its mode, and folds
//! every failure into an error envelope:
//!
//! - `None`: render the identifier form when a user-entered identifier is missing, otherwise
//!   redirect to the auth URL (`bad_identifier` when it cannot be built).
//! - `Cancel`: `cancel_authentication`.
//! - `Completed`: validate the callback (`not_logged_in` on failure), then normalize the
//!   attribute set into an auth envelope.

// self
use crate::{
	_prelude::*,
	auth::AuthEnvelope,
	error::HandshakeError,
	flows::{HandshakeEngine, HandshakeSession},
	http::{InboundRequest, Outcome, StrategyHost},
	obs::{self, HandshakeOutcome, HandshakeSpan},
	provider::{AuthRequest, HandshakeMode, ProtocolClient},
};

impl<P> HandshakeEngine<P>
where
	P: ?Sized + ProtocolClient,
{
	/// Runs one handshake step and dispatches its outcome to the host.
	///
	/// Exactly one host primitive is invoked per call.
	pub fn request<H>(&self, request: &InboundRequest, host: &mut H)
	where
		H: ?Sized + StrategyHost,
	{
		self.resolve(request).dispatch(host);
	}

	/// Resolves one handshake step into its outcome without touching the host.
	pub fn resolve(&self, request: &InboundRequest) -> Outcome {
		let variant = self.config.variant;
		let guard = HandshakeSpan::new(variant, "resolve").entered();

		obs::record_handshake_outcome(variant, HandshakeOutcome::Attempt);

		let session = HandshakeSession::open(&self.config, self.client.as_ref(), request);

		guard.record_mode(session.mode);

		let outcome = match self.step(&session, request) {
			Ok(outcome) => outcome,
			Err(e) => Outcome::Failure(e.into_envelope(self.config.provider.clone())),
		};

		obs::record_handshake_outcome(variant, HandshakeOutcome::from(&outcome));

		outcome
	}

	fn step(
		&self,
		session: &HandshakeSession,
		request: &InboundRequest,
	) -> Result<Outcome, HandshakeError> {
		match session.mode {
			HandshakeMode::None => self.begin(session, request),
			HandshakeMode::Cancel => Err(HandshakeError::Canceled),
			HandshakeMode::Completed => self.complete(request).map(Outcome::Success),
		}
	}

	fn begin(
		&self,
		session: &HandshakeSession,
		request: &InboundRequest,
	) -> Result<Outcome, HandshakeError> {
		let Some(identifier) = session.identifier.as_deref() else {
			return Ok(Outcome::RenderForm { view: self.config.identifier_form.clone() });
		};
		let redirect_uris = self
			.config
			.redirect_uris
			.iter()
			.map(|template| template.expand(request.strategy_url.as_ref()))
			.collect::<Result<Vec<_>, _>>()
			.map_err(HandshakeError::bad_identifier)?;
		let auth = AuthRequest {
			identifier,
			realm: &self.config.realm,
			redirect_uris: &redirect_uris,
			required: &self.config.required,
			optional: &self.config.optional,
			client_name: self.config.client_name.as_deref(),
		};

		self.client.build_auth_url(&auth).map(Outcome::Redirect).map_err(|e| {
			obs::warn_protocol_failure(self.config.variant, "build_auth_url", &e);

			HandshakeError::bad_identifier(e)
		})
	}

	fn complete(&self, request: &InboundRequest) -> Result<AuthEnvelope, HandshakeError> {
		let identity = match self.client.validate_callback(request) {
			Ok(Some(identity)) => identity,
			Ok(None) => return Err(HandshakeError::NotLoggedIn),
			Err(e) => {
				obs::warn_protocol_failure(self.config.variant, "validate_callback", &e);

				return Err(HandshakeError::NotLoggedIn);
			},
		};
		let raw = self.client.fetch_attributes(request);

		Ok(AuthEnvelope::from_attributes(
			self.config.provider.clone(),
			identity,
			self.config.variant,
			raw,
		))
	}
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
	// std
	use std::sync::Mutex;
	// self
	use super::*;
	use crate::{
		auth::AttributeMap,
		provider::{StrategyConfig, Variant},
		testing::ScriptedError,
	};

	#[derive(Default)]
	struct SpanRecordingClient {
		span_at_mode_lookup: Mutex<Option<&'static str>>,
	}
	impl ProtocolClient for SpanRecordingClient {
		type Error = ScriptedError;

		fn current_mode(&self, _request: &InboundRequest) -> HandshakeMode {
			let name = tracing::Span::current().metadata().map(|metadata| metadata.name());

			if let Ok(mut slot) = self.span_at_mode_lookup.lock() {
				*slot = name;
			}

			HandshakeMode::Cancel
		}

		fn build_auth_url(&self, _request: &AuthRequest<'_>) -> Result<Url, Self::Error> {
			Err(ScriptedError("Discovery is not scripted.".into()))
		}

		fn validate_callback(
			&self,
			_request: &InboundRequest,
		) -> Result<Option<String>, Self::Error> {
			Ok(None)
		}

		fn fetch_attributes(&self, _request: &InboundRequest) -> AttributeMap {
			AttributeMap::new()
		}
	}

	#[test]
	fn mode_lookup_runs_inside_the_handshake_span() {
		let host = Url::parse("https://app.example.com").expect("Host fixture should parse.");
		let config = StrategyConfig::defaults(Variant::OpenId, host)
			.expect("Default configuration should build.");
		let engine =
			HandshakeEngine::<SpanRecordingClient>::new(config, SpanRecordingClient::default());
		let outcome = tracing::subscriber::with_default(tracing_subscriber::registry(), || {
			engine.resolve(&InboundRequest::new())
		});

		assert!(matches!(outcome, Outcome::Failure(_)));
		assert_eq!(
			*engine.client.span_at_mode_lookup.lock().expect("Mode lookup lock should not poison."),
			Some("openid_strategy.handshake")
		);
	}
}
