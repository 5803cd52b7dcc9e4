//! Export encoding for Framecut.
//!
//! The crop widget exports the sampled frame region as JPEG at a fixed
//! quality level. Encoding is synchronous and pure: the same region and
//! quality always produce the same bytes.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_QUALITY};
