//! Handshake engine driving both OpenID variants through one state machine.

pub mod handshake;
pub mod normalize;
pub mod session;

pub use normalize::*;
pub use session::*;

// self
use crate::{
	_prelude::*,
	provider::{ProtocolClient, StrategyConfig},
};

/// Drives the three-mode OpenID handshake against a single strategy configuration.
///
/// The engine owns the read-only configuration and a shared handle to the protocol client.
/// It keeps no per-request state, so one engine can serve concurrent requests; every call to
/// [`request`](Self::request) opens a fresh [`HandshakeSession`] and produces exactly one
/// outcome.
pub struct HandshakeEngine<P>
where
	P: ?Sized + ProtocolClient,
{
	/// Strategy configuration fixed at registration time.
	pub config: StrategyConfig,
	/// Protocol library performing discovery, association, and verification.
	pub client: Arc<P>,
}
impl<P> HandshakeEngine<P>
where
	P: ?Sized + ProtocolClient,
{
	/// Creates an engine for the configuration and protocol client.
	pub fn new(config: StrategyConfig, client: impl Into<Arc<P>>) -> Self {
		Self { config, client: client.into() }
	}
}
impl<P> Clone for HandshakeEngine<P>
where
	P: ?Sized + ProtocolClient,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), client: self.client.clone() }
	}
}
impl<P> Debug for HandshakeEngine<P>
where
	P: ?Sized + ProtocolClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HandshakeEngine")
			.field("variant", &self.config.variant)
			.field("provider", &self.config.provider)
			.field("identifier_source", &self.config.identifier_source)
			.finish()
	}
}
