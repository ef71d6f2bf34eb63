// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire records for firewall policies, VLANs, IPs and tags

use serde::Deserialize;

use super::{WireMeta, WireNumber, WireOwner, WireRef, WireServer, WireSubscription};

/// `/fwpolicies/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireFirewallPolicy {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub name: Option<String>,
    pub meta: Option<WireMeta>,
    pub rules: Option<Vec<WireFirewallRule>>,
    pub servers: Option<Vec<WireRef<WireServer>>>,
    pub tags: Option<Vec<WireRef<WireTag>>>,
}

/// Single firewall rule; ports may be numbers or `"!1:1024"` style strings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireFirewallRule {
    pub action: Option<String>,
    pub comment: Option<String>,
    pub direction: Option<String>,
    pub dst_ip: Option<String>,
    pub dst_port: Option<WireNumber>,
    pub ip_proto: Option<String>,
    pub src_ip: Option<String>,
    pub src_port: Option<WireNumber>,
}

/// `/vlans/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireVlan {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub meta: Option<WireMeta>,
    pub servers: Option<Vec<WireRef<WireServer>>>,
    pub subscription: Option<WireRef<WireSubscription>>,
    pub tags: Option<Vec<WireRef<WireTag>>>,
}

/// `/ips/` record; the `uuid` of an IP is its dotted address
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireIp {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub server: Option<Box<WireRef<WireServer>>>,
    pub meta: Option<WireMeta>,
    pub subscription: Option<WireRef<WireSubscription>>,
    pub tags: Option<Vec<WireRef<WireTag>>>,
    pub nameservers: Option<Vec<String>>,
    pub netmask: Option<WireNumber>,
    pub gateway: Option<String>,
}

/// `/tags/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireTag {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub name: Option<String>,
    pub meta: Option<WireMeta>,
    pub resources: Option<Vec<WireRef<WireTagResource>>>,
}

/// Entry of a tag's `resources` list, discriminated by `res_type`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireTagResource {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub res_type: Option<String>,
}
