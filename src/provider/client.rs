//! Protocol-client seam wrapping an external OpenID / OpenID Connect library.
//!
//! Discovery, association, signature verification, and attribute-exchange encoding all live
//! behind [`ProtocolClient`]. The handshake engine hands the client everything it needs for one
//! request through [`AuthRequest`] instead of mutating shared client fields, so a single
//! configured client can serve concurrent requests.

// self
use crate::{
	_prelude::*,
	auth::{AttributeList, AttributeMap},
	http::InboundRequest,
};

/// Request parameters that carry the handshake mode, in lookup order.
///
/// OpenID 2.0 providers send `openid.mode`; PHP-style hosts rewrite the dot to an underscore.
pub const MODE_PARAMS: [&str; 2] = ["openid.mode", "openid_mode"];

/// Phase of the federated handshake as reported by the provider round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandshakeMode {
	/// No provider response yet; the handshake has to start.
	None,
	/// User aborted at the provider.
	Cancel,
	/// Provider redirected back with an assertion to validate.
	Completed,
}
impl HandshakeMode {
	/// Classifies a raw mode value: absent or empty starts the handshake, `cancel` aborts it,
	/// and any other value is treated as a callback to validate.
	pub fn from_wire(value: Option<&str>) -> Self {
		match value {
			None | Some("") => HandshakeMode::None,
			Some("cancel") => HandshakeMode::Cancel,
			Some(_) => HandshakeMode::Completed,
		}
	}

	/// Reads the mode from the parameters listed in [`MODE_PARAMS`].
	pub fn from_request(request: &InboundRequest) -> Self {
		Self::from_wire(MODE_PARAMS.iter().find_map(|name| request.param(name)))
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HandshakeMode::None => "none",
			HandshakeMode::Cancel => "cancel",
			HandshakeMode::Completed => "completed",
		}
	}
}
impl Display for HandshakeMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Request-scoped context handed to [`ProtocolClient::build_auth_url`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthRequest<'a> {
	/// User-entered or derived identifier naming the provider or the user's identity.
	pub identifier: &'a str,
	/// Trust root announced to the provider.
	pub realm: &'a str,
	/// Expanded callback URIs, in preference order.
	pub redirect_uris: &'a [Url],
	/// Attributes the provider must return.
	pub required: &'a AttributeList,
	/// Attributes the provider may return.
	pub optional: &'a AttributeList,
	/// Client name announced to OpenID Connect providers.
	pub client_name: Option<&'a str>,
}
impl AuthRequest<'_> {
	/// Callback URI the provider should send the user back to.
	pub fn return_to(&self) -> Option<&Url> {
		self.redirect_uris.first()
	}
}

/// Capability set the handshake engine consumes from an OpenID protocol library.
///
/// Implementors are required to be `Send + Sync`; every method takes `&self` and receives its
/// per-request inputs explicitly. Calls may block on network I/O, and any timeout policy belongs
/// to the implementation.
pub trait ProtocolClient
where
	Self: Send + Sync,
{
	/// Failure reported by the library; its `Display` text is surfaced to the host verbatim.
	type Error: 'static + Send + Sync + StdError;

	/// Reads the handshake mode from the inbound request.
	///
	/// The default implementation inspects the parameters listed in [`MODE_PARAMS`].
	fn current_mode(&self, request: &InboundRequest) -> HandshakeMode {
		HandshakeMode::from_request(request)
	}

	/// Builds the provider URL the user is redirected to.
	fn build_auth_url(&self, request: &AuthRequest<'_>) -> Result<Url, Self::Error>;

	/// Verifies the provider's callback.
	///
	/// Returns the validated identity on success and `None` when the assertion does not check
	/// out.
	fn validate_callback(&self, request: &InboundRequest) -> Result<Option<String>, Self::Error>;

	/// Returns the attribute set the provider attached to a validated callback.
	fn fetch_attributes(&self, request: &InboundRequest) -> AttributeMap;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn wire_modes_map_to_three_states() {
		assert_eq!(HandshakeMode::from_wire(None), HandshakeMode::None);
		assert_eq!(HandshakeMode::from_wire(Some("")), HandshakeMode::None);
		assert_eq!(HandshakeMode::from_wire(Some("cancel")), HandshakeMode::Cancel);
		assert_eq!(HandshakeMode::from_wire(Some("id_res")), HandshakeMode::Completed);
		assert_eq!(HandshakeMode::from_wire(Some("setup_needed")), HandshakeMode::Completed);
	}

	#[test]
	fn request_mode_accepts_dotted_and_underscored_names() {
		let dotted = InboundRequest::new().with_query_param("openid.mode", "cancel");
		let underscored = InboundRequest::new().with_form_param("openid_mode", "id_res");

		assert_eq!(HandshakeMode::from_request(&dotted), HandshakeMode::Cancel);
		assert_eq!(HandshakeMode::from_request(&underscored), HandshakeMode::Completed);
		assert_eq!(HandshakeMode::from_request(&InboundRequest::new()), HandshakeMode::None);
	}
}
