// Copyright (c) 2025 - Cowboy AI, Inc.
//! Response Envelope Unwrapping
//!
//! The API delivers the same resource kind in three shapes:
//!
//! 1. a bare record: `{"uuid": "...", "name": "..."}`
//! 2. a singleton envelope: `{"objects": [{...}]}`
//! 3. a list envelope: `{"meta": {...}, "objects": [{...}, {...}]}`
//!
//! Decoding is two-phase. [`Envelope::detect`] first reports which shape a
//! body has, then [`unwrap_single`] or [`unwrap_list`] decodes the payload
//! of that shape into wire records and converts them.
//!
//! A non-empty `objects` array always wins over top-level fields that
//! happen to sit next to it. A body whose only field is `meta` is a record
//! unless that `meta` carries pagination keys.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::convert::FromWire;
use crate::errors::DecodeResult;

const OBJECTS: &str = "objects";
const LIST_META: &str = "meta";
const PAGINATION_KEYS: [&str; 3] = ["total_count", "limit", "offset"];

/// Shape of a decoded response body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope<'a> {
    /// The body is the record itself
    Bare(&'a Value),
    /// Records wrapped in a non-empty `objects` array (or a top-level array)
    Objects(&'a [Value]),
    /// No usable record: empty body, empty `objects`, or only pagination metadata
    Empty,
}

impl<'a> Envelope<'a> {
    /// Detect the shape of a response body
    pub fn detect(body: &'a Value) -> Self {
        match body {
            Value::Object(fields) => match fields.get(OBJECTS) {
                Some(Value::Array(records)) if !records.is_empty() => Self::Objects(records),
                _ if fields
                    .keys()
                    .any(|key| key != OBJECTS && key != LIST_META) =>
                {
                    Self::Bare(body)
                }
                Some(_) => Self::Empty,
                None => match fields.get(LIST_META) {
                    Some(meta) if !is_pagination(meta) => Self::Bare(body),
                    _ => Self::Empty,
                },
            },
            Value::Array(records) if !records.is_empty() => Self::Objects(records),
            _ => Self::Empty,
        }
    }

    /// First record of the body, if any
    pub fn first(&self) -> Option<&'a Value> {
        match *self {
            Self::Bare(record) => Some(record),
            Self::Objects(records) => records.first(),
            Self::Empty => None,
        }
    }

    /// Every record of the body, in body order
    pub fn records(&self) -> &'a [Value] {
        match *self {
            Self::Bare(record) => std::slice::from_ref(record),
            Self::Objects(records) => records,
            Self::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Decode one record of a body into its domain value
fn decode_record<T: FromWire>(record: &Value) -> DecodeResult<T> {
    let wire = <T::Wire as Deserialize>::deserialize(record)?;
    T::from_wire(&wire)
}

/// Unwrap a body that carries one resource.
///
/// A bare record and a singleton envelope yield the same value; an empty
/// or missing body yields `None`.
pub fn unwrap_single<T: FromWire>(body: Option<&Value>) -> DecodeResult<Option<T>> {
    let Some(body) = body else {
        return Ok(None);
    };

    let envelope = Envelope::detect(body);
    debug!(
        "Unwrapping single {} from {} envelope",
        short_type_name::<T>(),
        envelope.kind()
    );

    envelope.first().map(decode_record::<T>).transpose()
}

/// Unwrap a body that carries a list of resources.
///
/// Order is preserved. An empty `objects` array yields an empty list, and a
/// bare record yields a list of one.
pub fn unwrap_list<T: FromWire>(body: Option<&Value>) -> DecodeResult<Vec<T>> {
    let Some(body) = body else {
        return Ok(Vec::new());
    };

    let envelope = Envelope::detect(body);
    let records = envelope.records();
    debug!(
        "Unwrapping {} {} record(s) from {} envelope",
        records.len(),
        short_type_name::<T>(),
        envelope.kind()
    );

    records.iter().map(decode_record::<T>).collect()
}

impl Envelope<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Bare(_) => "bare",
            Self::Objects(_) => "objects",
            Self::Empty => "empty",
        }
    }
}

/// Whether a `meta` value is list pagination rather than a record's own metadata
fn is_pagination(meta: &Value) -> bool {
    meta.as_object()
        .is_some_and(|fields| PAGINATION_KEYS.iter().any(|key| fields.contains_key(*key)))
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
