//! Success and failure envelopes produced by exactly one handshake each.

// self
use crate::{
	_prelude::*,
	auth::{AttributeMap, ProviderName},
};

/// Canonical identity fields flattened from a provider's attribute set.
///
/// The record is sparse: a field is only populated when the provider returned a non-empty
/// value for one of its source keys, and unset fields are omitted when serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
	/// Email address.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Given name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	/// Family name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	/// Nickname.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nickname: Option<String>,
	/// Phone number.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	/// Related links.
	#[serde(default, skip_serializing_if = "IdentityUrls::is_empty")]
	pub urls: IdentityUrls,
	/// Avatar image URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}
impl IdentityInfo {
	/// Returns true when no field was populated.
	pub fn is_empty(&self) -> bool {
		self.email.is_none()
			&& self.name.is_none()
			&& self.first_name.is_none()
			&& self.last_name.is_none()
			&& self.nickname.is_none()
			&& self.phone.is_none()
			&& self.urls.is_empty()
			&& self.image.is_none()
	}
}

/// Links nested under `info.urls`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUrls {
	/// Personal website.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub website: Option<String>,
}
impl IdentityUrls {
	/// Returns true when no link was populated.
	pub fn is_empty(&self) -> bool {
		self.website.is_none()
	}
}

/// Canonical success result handed to the host once a callback validates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEnvelope {
	/// Strategy that produced the envelope.
	pub provider: ProviderName,
	/// Validated identity URI.
	pub uid: String,
	/// Normalized identity fields.
	pub info: IdentityInfo,
	/// Always empty for the OpenID family; there is no access token to carry.
	pub credentials: BTreeMap<String, String>,
	/// Complete, untransformed attribute set returned by the provider.
	pub raw: AttributeMap,
}

/// Closed set of handshake failure classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
	/// Auth URL could not be built from the identifier or configuration.
	BadIdentifier,
	/// User aborted at the provider.
	CancelAuthentication,
	/// Callback failed validation.
	NotLoggedIn,
}
impl ErrorCode {
	/// Returns the wire label used in error envelopes.
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorCode::BadIdentifier => "bad_identifier",
			ErrorCode::CancelAuthentication => "cancel_authentication",
			ErrorCode::NotLoggedIn => "not_logged_in",
		}
	}
}
impl Display for ErrorCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Structured failure handed to the host's error callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
	/// Strategy that produced the envelope.
	pub provider: ProviderName,
	/// Failure classification.
	pub code: ErrorCode,
	/// Human-readable detail.
	pub message: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn provider() -> ProviderName {
		ProviderName::new("OpenIDConnect").expect("Provider fixture should be valid.")
	}

	#[test]
	fn sparse_info_serializes_without_absent_fields() {
		let info = IdentityInfo {
			email: Some("a@b.com".into()),
			urls: IdentityUrls { website: Some("https://a.example".into()) },
			..Default::default()
		};
		let value = serde_json::to_value(&info).expect("Info should serialize.");

		assert_eq!(
			value,
			serde_json::json!({ "email": "a@b.com", "urls": { "website": "https://a.example" } })
		);
		assert_eq!(serde_json::to_string(&IdentityInfo::default()).expect("serialize"), "{}");
		assert!(IdentityInfo::default().is_empty());
		assert!(!info.is_empty());
	}

	#[test]
	fn error_envelope_uses_snake_case_codes() {
		let envelope = ErrorEnvelope {
			provider: provider(),
			code: ErrorCode::CancelAuthentication,
			message: "User has canceled authentication".into(),
		};
		let value = serde_json::to_value(&envelope).expect("Envelope should serialize.");

		assert_eq!(
			value,
			serde_json::json!({
				"provider": "OpenIDConnect",
				"code": "cancel_authentication",
				"message": "User has canceled authentication",
			})
		);
		assert_eq!(ErrorCode::NotLoggedIn.to_string(), "not_logged_in");
	}

	#[test]
	fn auth_envelope_keeps_empty_credentials_object() {
		let envelope = AuthEnvelope {
			provider: provider(),
			uid: "https://id.example/alice".into(),
			info: IdentityInfo::default(),
			credentials: BTreeMap::new(),
			raw: AttributeMap::new(),
		};
		let value = serde_json::to_value(&envelope).expect("Envelope should serialize.");

		assert_eq!(value["credentials"], serde_json::json!({}));
		assert_eq!(value["info"], serde_json::json!({}));
	}
}
