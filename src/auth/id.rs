//! Validated names for exchanged attributes and envelope providers.

// std
use std::borrow::Borrow;
// self
use crate::_prelude::*;

/// Error returned when an attribute key or provider name fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum NameError {
	/// Attribute key is empty.
	#[error("Attribute key cannot be empty.")]
	EmptyAttributeKey,
	/// Attribute key contains whitespace, which attribute-exchange type URIs never do.
	#[error("Attribute key `{key}` contains whitespace.")]
	AttributeKeyWhitespace {
		/// Offending key.
		key: String,
	},
	/// Attribute key contains a comma, which would split it when lists are joined on the wire.
	#[error("Attribute key `{key}` contains a comma.")]
	AttributeKeyComma {
		/// Offending key.
		key: String,
	},
	/// Provider name is empty.
	#[error("Provider name cannot be empty.")]
	EmptyProviderName,
	/// Provider name contains whitespace.
	#[error("Provider name `{name}` contains whitespace.")]
	ProviderNameWhitespace {
		/// Offending name.
		name: String,
	},
}

/// Name of one exchanged profile field.
///
/// Either a short alias such as `contact/email` or a full attribute-exchange type URI such as
/// `http://axschema.org/contact/email`; no length cap applies since type URIs vary widely.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttributeKey(String);
impl AttributeKey {
	/// Validates and wraps an attribute key.
	pub fn new(key: impl Into<String>) -> Result<Self, NameError> {
		let key = key.into();

		if key.is_empty() {
			return Err(NameError::EmptyAttributeKey);
		}
		if key.chars().any(char::is_whitespace) {
			return Err(NameError::AttributeKeyWhitespace { key });
		}
		if key.contains(',') {
			return Err(NameError::AttributeKeyComma { key });
		}

		Ok(Self(key))
	}

	/// Returns the key as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl TryFrom<String> for AttributeKey {
	type Error = NameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<AttributeKey> for String {
	fn from(value: AttributeKey) -> Self {
		value.0
	}
}
impl Borrow<str> for AttributeKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for AttributeKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "AttributeKey({})", self.0)
	}
}
impl Display for AttributeKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Name a strategy stamps on every envelope it produces, such as `OpenID`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderName(String);
impl ProviderName {
	/// Validates and wraps a provider name.
	pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
		let name = name.into();

		if name.is_empty() {
			return Err(NameError::EmptyProviderName);
		}
		if name.chars().any(char::is_whitespace) {
			return Err(NameError::ProviderNameWhitespace { name });
		}

		Ok(Self(name))
	}

	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl TryFrom<String> for ProviderName {
	type Error = NameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ProviderName> for String {
	fn from(value: ProviderName) -> Self {
		value.0
	}
}
impl FromStr for ProviderName {
	type Err = NameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for ProviderName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ProviderName({})", self.0)
	}
}
impl Display for ProviderName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
