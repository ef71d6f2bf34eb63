// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLANs and IP addresses owned by the account

use serde::Serialize;

use super::{Meta, Owner, Server, Subscription, Tag};

/// VLAN summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Vlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl Vlan {
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }
}

/// VLAN detail
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct VlanInfo {
    #[serde(flatten)]
    pub vlan: Vlan,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Usually a partial reference: `id` and `resource_uri` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl VlanInfo {
    pub fn uuid(&self) -> Option<&str> {
        self.vlan.uuid.as_deref()
    }
}

impl AsRef<Vlan> for VlanInfo {
    fn as_ref(&self) -> &Vlan {
        &self.vlan
    }
}

/// IP summary; the identity of an IP is its address
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Ip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    /// Server the address is currently assigned to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Box<Server>>,
}

impl Ip {
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.uuid.as_deref()
    }
}

/// IP detail
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IpInfo {
    #[serde(flatten)]
    pub ip: Ip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
    /// Prefix length of the subnet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl IpInfo {
    pub fn address(&self) -> Option<&str> {
        self.ip.address()
    }

    /// Address with its prefix, such as `185.12.6.183/24`
    pub fn cidr(&self) -> Option<String> {
        let address = self.address()?;
        Some(match self.netmask {
            Some(prefix) => format!("{}/{}", address, prefix),
            None => address.to_string(),
        })
    }
}

impl AsRef<Ip> for IpInfo {
    fn as_ref(&self) -> &Ip {
        &self.ip
    }
}
