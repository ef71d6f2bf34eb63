// Copyright (c) 2025 - Cowboy AI, Inc.
//! Scalar Coders
//!
//! Parse the primitive encodings the CloudSigma API uses on the wire:
//!
//! - [`timestamp`] - ISO-8601 timestamps with an explicit offset and second precision
//! - [`magnitude`] - arbitrary-precision byte counts and amounts
//! - [`token`] - closed enumerations with an `Unrecognized` fallback
//!
//! Absent input is never an error. Present-but-malformed input is, and it is
//! returned to the caller as a [`DecodeError`](crate::errors::DecodeError).

pub mod magnitude;
pub mod timestamp;
pub mod token;

pub use magnitude::{decode_integer, decode_magnitude, Magnitude};
pub use timestamp::{decode_timestamp, encode_timestamp, parse_timestamp, WIRE_TIMESTAMP_FORMAT};
pub use token::{decode_token, WireToken};

pub(crate) use token::wire_enum;
