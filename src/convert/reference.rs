// Copyright (c) 2025 - Cowboy AI, Inc.
//! Owner and untyped resource references

use super::{convert, FromId, FromWire};
use crate::domain::{Owner, ResourceRef};
use crate::errors::DecodeResult;
use crate::wire::{WireOwner, WireTagResource};

impl FromWire for Owner {
    type Wire = WireOwner;

    fn from_wire(wire: &WireOwner) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            email: wire.email.clone(),
        })
    }
}

impl FromId for Owner {
    fn from_id(id: String) -> Self {
        Self::new(id)
    }
}

impl FromWire for ResourceRef {
    type Wire = WireTagResource;

    fn from_wire(wire: &WireTagResource) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
        })
    }
}

impl FromId for ResourceRef {
    fn from_id(id: String) -> Self {
        Self {
            uuid: Some(id),
            ..Default::default()
        }
    }
}
