//! Auth-domain identifiers, attribute lists, and the envelopes handed back to the host.

pub mod attribute;
pub mod envelope;
pub mod id;

pub use attribute::*;
pub use envelope::*;
pub use id::*;
