// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timestamp coder for `2013-05-28T11:57:01+00:00` style values

use chrono::{DateTime, Utc};

use crate::errors::{DecodeError, DecodeResult};

/// chrono format string for wire timestamps
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Parse a wire timestamp, normalizing it to UTC
pub fn parse_timestamp(raw: &str) -> DecodeResult<DateTime<Utc>> {
    DateTime::parse_from_str(raw, WIRE_TIMESTAMP_FORMAT)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| DecodeError::Timestamp {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Decode an optional wire timestamp; `None` stays unset
pub fn decode_timestamp(raw: Option<&str>) -> DecodeResult<Option<DateTime<Utc>>> {
    raw.map(parse_timestamp).transpose()
}

/// Encode a timestamp in the wire format
pub fn encode_timestamp(value: &DateTime<Utc>) -> String {
    value.format(WIRE_TIMESTAMP_FORMAT).to_string()
}
