// self
use crate::{
	_prelude::*,
	auth::AttributeKey,
	provider::{HandshakeMode, Variant},
};

/// A span builder used by the handshake engine.
#[derive(Clone, Debug)]
pub struct HandshakeSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl HandshakeSpan {
	/// Creates a new span tagged with the provided variant + stage.
	pub fn new(variant: Variant, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"openid_strategy.handshake",
				variant = variant.as_str(),
				stage,
				mode = tracing::field::Empty
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (variant, stage);

			Self {}
		}
	}

	/// Enters the span for the whole handshake step, including the mode lookup.
	pub fn entered(self) -> HandshakeSpanGuard {
		#[cfg(feature = "tracing")]
		{
			HandshakeSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			HandshakeSpanGuard {}
		}
	}
}

/// RAII guard returned by [`HandshakeSpan::entered`].
pub struct HandshakeSpanGuard {
	#[cfg(feature = "tracing")]
	guard: tracing::span::EnteredSpan,
}
impl HandshakeSpanGuard {
	/// Records the mode read from the protocol client on the entered span.
	pub fn record_mode(&self, mode: HandshakeMode) {
		#[cfg(feature = "tracing")]
		{
			self.guard.record("mode", mode.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = mode;
		}
	}
}
impl Debug for HandshakeSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("HandshakeSpanGuard(..)")
	}
}

/// Reports a protocol-client failure that the engine folded into an error envelope.
pub fn warn_protocol_failure(variant: Variant, stage: &'static str, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(variant = variant.as_str(), stage, %error, "Protocol client failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (variant, stage, error);
	}
}

/// Reports an attribute requested as both mandatory and optional.
pub fn warn_attribute_overlap(variant: Variant, key: &AttributeKey) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			variant = variant.as_str(),
			attribute = key.as_str(),
			"Attribute is listed as both required and optional."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (variant, key);
	}
}
