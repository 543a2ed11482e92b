//! Request pipeline shared by every endpoint.
//!
//! Each handler runs the same stages: decode the raw request parts into a typed request,
//! validate it, authenticate the caller where required, execute the operation, then
//! localize and encode the outcome. Decoding and validation live in [`request`]; the
//! final two stages live in [`response`]. Handlers compose the stages explicitly so that
//! every step of an endpoint is visible in one function.

pub mod request;
pub mod response;

use std::fmt;

pub use request::{decode, FromWire, Guarded, Validate, WireRequest};
pub use response::Responder;

/// Stage of the pipeline a failure originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Validate,
    Authenticate,
    Execute,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Validate => "validate",
            Self::Authenticate => "authenticate",
            Self::Execute => "execute",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
