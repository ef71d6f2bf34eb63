// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire-to-domain Converters
//!
//! Each domain type implements [`FromWire`] for the wire record it is built
//! from. Converters are pure: no I/O and no shared state, so they may run
//! on any thread without coordination.
//!
//! # Absence Propagation
//!
//! [`convert`] maps `None` to `Ok(None)`. An absent nested record never
//! materializes as an empty domain value.
//!
//! # References
//!
//! The provider inlines nested resources either as a record or as a bare
//! identifier. Types that can stand for such an identifier implement
//! [`FromId`], and [`convert_ref`] accepts both encodings.

mod billing;
mod compute;
mod network;
mod reference;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Meta;
use crate::errors::DecodeResult;
use crate::wire::{WireMeta, WireRef};

/// Build a domain value from its wire record
pub trait FromWire: Sized {
    /// Wire record this type is converted from
    type Wire: DeserializeOwned;

    fn from_wire(wire: &Self::Wire) -> DecodeResult<Self>;
}

/// Build a domain reference from a bare identifier
pub trait FromId {
    fn from_id(id: String) -> Self;
}

/// Convert an optional record; `None` stays `None`
pub fn convert<T: FromWire>(wire: Option<&T::Wire>) -> DecodeResult<Option<T>> {
    wire.map(T::from_wire).transpose()
}

/// Convert every record of an optional list, keeping wire order
pub fn convert_list<T: FromWire>(wire: Option<&[T::Wire]>) -> DecodeResult<Vec<T>> {
    wire.unwrap_or_default().iter().map(T::from_wire).collect()
}

/// Convert a reference that may be a bare id or an inline record
pub fn convert_ref<T: FromWire + FromId>(wire: &WireRef<T::Wire>) -> DecodeResult<T> {
    match wire {
        WireRef::Id(id) => Ok(T::from_id(id.to_string())),
        WireRef::Record(record) => T::from_wire(record),
    }
}

/// Convert an optional reference; `None` stays `None`
pub fn convert_opt_ref<T: FromWire + FromId>(
    wire: Option<&WireRef<T::Wire>>,
) -> DecodeResult<Option<T>> {
    wire.map(convert_ref).transpose()
}

/// Convert an optional list of references, keeping wire order
pub fn convert_refs<T: FromWire + FromId>(
    wire: Option<&[WireRef<T::Wire>]>,
) -> DecodeResult<Vec<T>> {
    wire.unwrap_or_default().iter().map(convert_ref).collect()
}

/// Flatten a wire `meta` map to strings.
///
/// String values are kept as-is, `null` entries are dropped and any other
/// JSON value is kept in its JSON text form.
pub fn convert_meta(wire: Option<&WireMeta>) -> Meta {
    wire.map(|meta| {
        meta.iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect()
    })
    .unwrap_or_default()
}
