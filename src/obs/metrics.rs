// self
use crate::{obs::HandshakeOutcome, provider::Variant};

/// Records a handshake outcome via the global metrics recorder (when enabled).
pub fn record_handshake_outcome(variant: Variant, outcome: HandshakeOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"openid_strategy_handshake_total",
			"variant" => variant.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (variant, outcome);
	}
}
