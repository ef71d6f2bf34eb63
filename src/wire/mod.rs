// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire Records
//!
//! Field-sparse mirrors of the CloudSigma JSON schema. Every field is
//! optional: an absent field means "unknown or not requested" and a present
//! `null` means "explicitly unset". Both decode to `None` here and are skipped
//! by the converters, so the domain value keeps its default.
//!
//! Scalars the provider encodes loosely (sizes as strings or numbers, ids as
//! strings or numbers) are kept in their raw form and handed to the
//! [scalar coders](crate::codec) during conversion.

pub mod billing;
pub mod compute;
pub mod network;

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub use billing::*;
pub use compute::*;
pub use network::*;

/// Free-form `meta` map as it appears on the wire
pub type WireMeta = BTreeMap<String, Value>;

/// A number the provider may send as a JSON integer, float or decimal string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for WireNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{}", value),
            Self::Signed(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for WireNumber {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<&str> for WireNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Reference to the owning user account
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireOwner {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub email: Option<String>,
}

/// A nested resource that may be inlined as a record or given as a bare id
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireRef<T> {
    Id(WireNumber),
    Record(T),
}

impl<T> WireRef<T> {
    /// The bare identifier, when the reference is not inlined
    pub fn id(&self) -> Option<String> {
        match self {
            Self::Id(id) => Some(id.to_string()),
            Self::Record(_) => None,
        }
    }

    /// The inline record, when the reference carries one
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Record(record) => Some(record),
            Self::Id(_) => None,
        }
    }
}
