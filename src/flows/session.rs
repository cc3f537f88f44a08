//! Per-request handshake state: the mode and the identifier read from one inbound request.

// self
use crate::{
	http::InboundRequest,
	provider::{HandshakeMode, IdentifierSource, ProtocolClient, StrategyConfig},
};

/// Per-request handshake state, opened at the start of every engine call.
///
/// The mode is read once from the protocol client and never changes within the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandshakeSession {
	/// Mode reported by the provider round trip.
	pub mode: HandshakeMode,
	/// Identifier for the auth URL; `None` when the user has not entered one yet.
	pub identifier: Option<String>,
}
impl HandshakeSession {
	/// Opens a session for the inbound request.
	pub fn open<P>(config: &StrategyConfig, client: &P, request: &InboundRequest) -> Self
	where
		P: ?Sized + ProtocolClient,
	{
		let mode = client.current_mode(request);
		let identifier = match &config.identifier_source {
			IdentifierSource::UserEntered { field } => request
				.form(field)
				.map(str::trim)
				.filter(|value| !value.is_empty())
				.map(str::to_owned),
			IdentifierSource::Derived { identifier } => Some(identifier.clone()),
		};

		Self { mode, identifier }
	}
}
