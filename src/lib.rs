//! Pluggable OpenID 2.0 and OpenID Connect login strategy—drive the federated handshake state
//! machine and normalize provider attributes into one provider-agnostic auth envelope.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
#[cfg(any(test, feature = "test"))]
pub mod testing;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use url;
#[cfg(test)] use color_eyre as _;
#[cfg(test)] use tracing_subscriber as _;
