//! Attribute-exchange vocabulary and the normalized attribute lists requested from providers.

// std
use std::{collections::BTreeSet, slice::Iter};
// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError, ser::SerializeSeq};
// self
use crate::{
	_prelude::*,
	auth::{AttributeKey, NameError},
};

/// Raw attribute set returned by a provider, keyed by the provider's attribute names.
pub type AttributeMap = BTreeMap<String, String>;

/// Attribute keys recognized by the identity normalizer.
pub mod keys {
	/// Email address in the OpenID 2.0 attribute-exchange schema.
	pub const INTERNET_EMAIL: &str = "contact/internet/email";
	/// Email address in the OpenID Connect attribute vocabulary.
	pub const EMAIL: &str = "contact/email";
	/// Full name.
	pub const NAME_PERSON: &str = "namePerson";
	/// Full name as reported by providers that prefer the short key.
	pub const FULLNAME: &str = "fullname";
	/// Given name.
	pub const FIRST_NAME: &str = "namePerson/first";
	/// Family name.
	pub const LAST_NAME: &str = "namePerson/last";
	/// Nickname or screen name.
	pub const FRIENDLY_NAME: &str = "namePerson/friendly";
	/// Phone number.
	pub const PHONE: &str = "contact/phone";
	/// Personal website.
	pub const WEB: &str = "contact/web";
	/// Avatar image URL.
	pub const IMAGE: &str = "media/image";
	/// Provider-scoped stable user identifier.
	pub const GUID: &str = "person/guid";
}

/// Normalized set of attribute keys requested from the provider.
///
/// Keys are deduplicated and sorted so two lists naming the same attributes compare equal
/// regardless of how the configuration spelled them out.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeList(Vec<AttributeKey>);
impl AttributeList {
	/// Creates a normalized list from any iterator of key strings.
	pub fn new<I, S>(keys: I) -> Result<Self, NameError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let set = keys
			.into_iter()
			.map(|key| AttributeKey::new(key.as_ref()))
			.collect::<Result<BTreeSet<_>, _>>()?;

		Ok(Self(set.into_iter().collect()))
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no keys are requested.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the list contains the provided key.
	pub fn contains(&self, key: &str) -> bool {
		self.0.binary_search_by(|candidate| candidate.as_str().cmp(key)).is_ok()
	}

	/// Iterator over the normalized keys.
	pub fn iter(&self) -> Iter<'_, AttributeKey> {
		self.0.iter()
	}

	/// Keys present in both lists.
	pub fn overlap<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a AttributeKey> {
		self.0.iter().filter(|key| other.contains(key.as_str()))
	}
}
impl Debug for AttributeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_list().entries(self.0.iter().map(AttributeKey::as_str)).finish()
	}
}
impl<'a> IntoIterator for &'a AttributeList {
	type IntoIter = Iter<'a, AttributeKey>;
	type Item = &'a AttributeKey;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
impl Serialize for AttributeList {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

		for key in &self.0 {
			seq.serialize_element(key.as_str())?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for AttributeList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let values = <Vec<String>>::deserialize(deserializer)?;

		AttributeList::new(values).map_err(DeError::custom)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn lists_are_sorted_and_deduplicated() {
		let list = AttributeList::new(["namePerson/last", "contact/email", "namePerson/last"])
			.expect("Attribute fixture should be valid.");

		assert_eq!(list.len(), 2);
		assert_eq!(
			list.iter().map(AttributeKey::as_str).collect::<Vec<_>>(),
			["contact/email", "namePerson/last"]
		);
		assert!(list.contains(keys::LAST_NAME));
		assert!(!list.contains(keys::FIRST_NAME));
	}

	#[test]
	fn invalid_keys_are_rejected() {
		let err = AttributeList::new(["contact/email", ""]).expect_err("Empty keys must fail.");

		assert_eq!(err, NameError::EmptyAttributeKey);
	}

	#[test]
	fn overlap_reports_shared_keys() {
		let required =
			AttributeList::new([keys::EMAIL, keys::PHONE]).expect("Required fixture is valid.");
		let optional =
			AttributeList::new([keys::PHONE, keys::IMAGE]).expect("Optional fixture is valid.");
		let shared = required.overlap(&optional).map(AttributeKey::as_str).collect::<Vec<_>>();

		assert_eq!(shared, [keys::PHONE]);
	}

	#[test]
	fn serde_uses_plain_string_sequences() {
		let list: AttributeList = serde_json::from_str("[\"media/image\",\"contact/web\"]")
			.expect("Attribute list should deserialize.");

		assert_eq!(
			serde_json::to_string(&list).expect("Attribute list should serialize."),
			"[\"contact/web\",\"media/image\"]"
		);
		assert!(serde_json::from_str::<AttributeList>("[\"bad key\"]").is_err());
	}
}
