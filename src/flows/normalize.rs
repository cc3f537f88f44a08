//! Identity normalizer flattening provider attribute sets into [`IdentityInfo`].
//!
//! Rules run in table order and a later rule overwrites an earlier one targeting the same
//! field, so `fullname` wins over `namePerson` when a provider sends both. Empty values never
//! populate a field.

// std
use std::iter;
// self
use crate::{
	_prelude::*,
	auth::{AttributeMap, AuthEnvelope, IdentityInfo, ProviderName, keys},
	provider::Variant,
};

type FieldSlot = fn(&mut IdentityInfo) -> &mut Option<String>;

const PROFILE_RULES: [(&str, FieldSlot); 8] = [
	(keys::NAME_PERSON, |info| &mut info.name),
	(keys::FULLNAME, |info| &mut info.name),
	(keys::FIRST_NAME, |info| &mut info.first_name),
	(keys::LAST_NAME, |info| &mut info.last_name),
	(keys::FRIENDLY_NAME, |info| &mut info.nickname),
	(keys::PHONE, |info| &mut info.phone),
	(keys::WEB, |info| &mut info.urls.website),
	(keys::IMAGE, |info| &mut info.image),
];

/// Maps a raw attribute set onto the canonical identity fields for the variant's vocabulary.
pub fn normalize(variant: Variant, attributes: &AttributeMap) -> IdentityInfo {
	let email: (&str, FieldSlot) = (variant.email_key(), |info| &mut info.email);
	let mut info = IdentityInfo::default();

	for (key, slot) in iter::once(email).chain(PROFILE_RULES) {
		if let Some(value) = attributes.get(key).filter(|value| !value.is_empty()) {
			*slot(&mut info) = Some(value.clone());
		}
	}

	info
}

impl AuthEnvelope {
	/// Builds the success envelope for a validated identity, keeping `raw` untouched.
	pub fn from_attributes(
		provider: ProviderName,
		uid: impl Into<String>,
		variant: Variant,
		raw: AttributeMap,
	) -> Self {
		Self {
			provider,
			uid: uid.into(),
			info: normalize(variant, &raw),
			credentials: BTreeMap::new(),
			raw,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::IdentityUrls;

	fn attributes<const N: usize>(pairs: [(&str, &str); N]) -> AttributeMap {
		pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
	}

	#[test]
	fn fullname_overwrites_name_person() {
		let only_name = attributes([("namePerson", "Alice Liddell")]);

		assert_eq!(
			normalize(Variant::OpenId, &only_name).name.as_deref(),
			Some("Alice Liddell")
		);

		let both = attributes([("namePerson", "Alice Liddell"), ("fullname", "Alice P. Liddell")]);

		assert_eq!(normalize(Variant::OpenId, &both).name.as_deref(), Some("Alice P. Liddell"));

		let empty_fullname = attributes([("namePerson", "Alice Liddell"), ("fullname", "")]);

		assert_eq!(
			normalize(Variant::OpenId, &empty_fullname).name.as_deref(),
			Some("Alice Liddell")
		);
	}

	#[test]
	fn unrecognized_or_empty_attributes_yield_empty_info() {
		let raw = attributes([("person/guid", "42"), ("contact/phone", ""), ("x/custom", "v")]);

		assert!(normalize(Variant::OpenIdConnect, &raw).is_empty());
		assert!(normalize(Variant::OpenId, &AttributeMap::new()).is_empty());
	}

	#[test]
	fn email_key_follows_the_variant() {
		let raw = attributes([
			("contact/internet/email", "ax@example.com"),
			("contact/email", "connect@example.com"),
		]);

		assert_eq!(normalize(Variant::OpenId, &raw).email.as_deref(), Some("ax@example.com"));
		assert_eq!(
			normalize(Variant::OpenIdConnect, &raw).email.as_deref(),
			Some("connect@example.com")
		);
	}

	#[test]
	fn every_profile_field_is_mapped() {
		let raw = attributes([
			("contact/email", "a@b.com"),
			("namePerson", "Alice"),
			("namePerson/first", "A"),
			("namePerson/last", "L"),
			("namePerson/friendly", "al"),
			("contact/phone", "+1 555 0100"),
			("contact/web", "https://alice.example"),
			("media/image", "https://alice.example/me.png"),
		]);
		let info = normalize(Variant::OpenIdConnect, &raw);

		assert_eq!(
			info,
			IdentityInfo {
				email: Some("a@b.com".into()),
				name: Some("Alice".into()),
				first_name: Some("A".into()),
				last_name: Some("L".into()),
				nickname: Some("al".into()),
				phone: Some("+1 555 0100".into()),
				urls: IdentityUrls { website: Some("https://alice.example".into()) },
				image: Some("https://alice.example/me.png".into()),
			}
		);
	}

	#[test]
	fn envelope_preserves_raw_attributes() {
		let raw = attributes([("contact/email", "a@b.com"), ("namePerson/first", "A"), ("z", "")]);
		let provider = ProviderName::new("OpenIDConnect").expect("Provider fixture is valid.");
		let envelope = AuthEnvelope::from_attributes(
			provider,
			"https://id.example.com/a",
			Variant::OpenIdConnect,
			raw.clone(),
		);

		assert_eq!(envelope.uid, "https://id.example.com/a");
		assert_eq!(envelope.raw, raw);
		assert!(envelope.credentials.is_empty());
		assert_eq!(
			serde_json::to_value(&envelope.info).expect("Info should serialize."),
			serde_json::json!({ "email": "a@b.com", "first_name": "A" })
		);
	}
}
