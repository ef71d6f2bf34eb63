// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall, VLAN, IP and tag converters

use super::{convert, convert_list, convert_meta, convert_opt_ref, convert_refs, FromId, FromWire};
use crate::codec::{decode_integer, decode_token};
use crate::domain::{
    AddressMatch, Drive, FirewallPolicy, FirewallRule, Ip, IpInfo, PortRange, ResourceRef, Server,
    Subscription, Tag, TagResource, TagResourceType, Vlan, VlanInfo,
};
use crate::errors::DecodeResult;
use crate::wire::{WireFirewallPolicy, WireFirewallRule, WireIp, WireTag, WireTagResource, WireVlan};

// ============================================================================
// Firewall
// ============================================================================

impl FromWire for FirewallPolicy {
    type Wire = WireFirewallPolicy;

    fn from_wire(wire: &WireFirewallPolicy) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
            name: wire.name.clone(),
            rules: convert_list(wire.rules.as_deref())?,
            servers: convert_refs::<Server>(wire.servers.as_deref())?,
            tags: convert_refs::<Tag>(wire.tags.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}

impl FromId for FirewallPolicy {
    fn from_id(id: String) -> Self {
        Self::with_uuid(id)
    }
}

impl FromWire for FirewallRule {
    type Wire = WireFirewallRule;

    fn from_wire(wire: &WireFirewallRule) -> DecodeResult<Self> {
        Ok(Self {
            action: decode_token(wire.action.as_deref()),
            comment: wire.comment.clone(),
            direction: decode_token(wire.direction.as_deref()),
            ip_protocol: decode_token(wire.ip_proto.as_deref()),
            source_ip: AddressMatch::decode(wire.src_ip.as_deref())?,
            source_port: PortRange::decode(wire.src_port.as_ref())?,
            destination_ip: AddressMatch::decode(wire.dst_ip.as_deref())?,
            destination_port: PortRange::decode(wire.dst_port.as_ref())?,
        })
    }
}

// ============================================================================
// VLANs and IPs
// ============================================================================

impl FromWire for Vlan {
    type Wire = WireVlan;

    fn from_wire(wire: &WireVlan) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
        })
    }
}

impl FromId for Vlan {
    fn from_id(id: String) -> Self {
        Self::with_uuid(id)
    }
}

impl FromWire for VlanInfo {
    type Wire = WireVlan;

    fn from_wire(wire: &WireVlan) -> DecodeResult<Self> {
        Ok(Self {
            vlan: Vlan::from_wire(wire)?,
            servers: convert_refs::<Server>(wire.servers.as_deref())?,
            subscription: convert_opt_ref::<Subscription>(wire.subscription.as_ref())?,
            tags: convert_refs::<Tag>(wire.tags.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}

impl FromWire for Ip {
    type Wire = WireIp;

    fn from_wire(wire: &WireIp) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
            server: convert_opt_ref::<Server>(wire.server.as_deref())?.map(Box::new),
        })
    }
}

impl FromId for Ip {
    fn from_id(id: String) -> Self {
        Self::with_uuid(id)
    }
}

impl FromWire for IpInfo {
    type Wire = WireIp;

    fn from_wire(wire: &WireIp) -> DecodeResult<Self> {
        Ok(Self {
            ip: Ip::from_wire(wire)?,
            gateway: wire.gateway.clone(),
            nameservers: wire.nameservers.clone().unwrap_or_default(),
            netmask: decode_integer("netmask", wire.netmask.as_ref())?,
            subscription: convert_opt_ref::<Subscription>(wire.subscription.as_ref())?,
            tags: convert_refs::<Tag>(wire.tags.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}

// ============================================================================
// Tags
// ============================================================================

impl FromWire for Tag {
    type Wire = WireTag;

    fn from_wire(wire: &WireTag) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
            name: wire.name.clone(),
            resources: convert_refs::<TagResource>(wire.resources.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}

impl FromId for Tag {
    fn from_id(id: String) -> Self {
        Self::with_uuid(id)
    }
}

impl FromWire for TagResource {
    type Wire = WireTagResource;

    fn from_wire(wire: &WireTagResource) -> DecodeResult<Self> {
        let uuid = wire.uuid.clone();
        let resource_uri = wire.resource_uri.clone();
        let owner = convert(wire.owner.as_ref())?;

        let resource = match decode_token(wire.res_type.as_deref()) {
            Some(TagResourceType::Servers) => Self::Server(Server {
                uuid,
                resource_uri,
                owner,
                ..Default::default()
            }),
            Some(TagResourceType::Drives) => Self::Drive(Drive {
                uuid,
                resource_uri,
                owner,
                ..Default::default()
            }),
            Some(TagResourceType::Ips) => Self::Ip(Ip {
                uuid,
                resource_uri,
                owner,
                ..Default::default()
            }),
            Some(TagResourceType::Vlans) => Self::Vlan(Vlan {
                uuid,
                resource_uri,
                owner,
            }),
            Some(TagResourceType::Unrecognized) | None => Self::Unrecognized(ResourceRef {
                uuid,
                resource_uri,
                owner,
            }),
        };
        Ok(resource)
    }
}

impl FromId for TagResource {
    fn from_id(id: String) -> Self {
        Self::Unrecognized(ResourceRef::from_id(id))
    }
}
