//! CloudSigma API binding for the Composable Information Machine
//!
//! Turns CloudSigma 2.0 response bodies into strongly-typed domain values
//! and back into request bodies:
//!
//! - [`wire`] - loosely-typed records as the API sends them
//! - [`codec`] - timestamps, sizes and enumeration tokens
//! - [`convert`] - wire records to domain values
//! - [`envelope`] - `{"objects": [...]}` unwrapping
//! - [`requests`] - outbound bodies built from domain values
//! - [`compute`] - provider-neutral compute and security group views
//!
//! The HTTP transport lives in `client` behind the `client` feature.

pub mod codec;
pub mod compute;
pub mod config;
pub mod convert;
pub mod domain;
pub mod envelope;
pub mod errors;
pub mod requests;
pub mod wire;

#[cfg(feature = "client")]
pub mod client;

// Re-export commonly used types
pub use codec::Magnitude;
pub use compute::{ComputeAdapter, ComputeNode, DriveCache, DriveLookup, NodeStatus};
pub use config::CloudSigmaConfig;
pub use convert::{FromId, FromWire};
pub use envelope::{unwrap_list, unwrap_single, Envelope};
pub use errors::{CloudSigmaError, CloudSigmaResult, DecodeError, DecodeResult};

#[cfg(feature = "client")]
pub use client::CloudSigmaClient;
