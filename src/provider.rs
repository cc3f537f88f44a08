//! Strategy configuration (data) and the protocol-client seam (behavior).
//!
//! `config` exposes the validated [`StrategyConfig`] covering the attribute lists requested
//! from the provider, the identifier source, the identifier form, and the OpenID Connect
//! redirect URI templates. `client` defines [`ProtocolClient`], the capability set the
//! handshake engine needs from an external OpenID / OpenID Connect library.

pub mod client;
pub mod config;

pub use client::*;
pub use config::*;
