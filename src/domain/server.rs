// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server aggregates
//!
//! [`ServerInfo`] wraps a [`Server`] summary. Its `drives` are attachment
//! records ([`ServerDrive`]) that each wrap a [`Drive`] summary; a server
//! never embeds full drive details.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    DeviceEmulationType, Drive, FirewallPolicy, InterfaceType, Ip, IpConfigurationType, Meta,
    NicModel, Owner, ServerStatus, Tag, Vlan,
};
use crate::codec::Magnitude;

/// Boot order of a drive or NIC that does not boot
pub const BOOT_ORDER_UNSET: i32 = -1;

/// Server summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Server {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<ServerRuntime>,
}

impl Server {
    /// Summary carrying only an identity
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }
}

/// Server detail
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ServerInfo {
    #[serde(flatten)]
    pub server: Server,
    /// CPU frequency in MHz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus_instead_of_cores: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smp: Option<u32>,
    /// Memory in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_numa: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hv_relaxed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hv_tsc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnc_password: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drives: Vec<ServerDrive>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nics: Vec<Nic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl ServerInfo {
    pub fn builder() -> ServerInfoBuilder {
        ServerInfoBuilder::from_summary(Server::default())
    }

    /// Upcast a summary into a detail builder
    pub fn from_summary(server: Server) -> ServerInfoBuilder {
        ServerInfoBuilder::from_summary(server)
    }

    pub fn uuid(&self) -> Option<&str> {
        self.server.uuid.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.server.name.as_deref()
    }
}

impl AsRef<Server> for ServerInfo {
    fn as_ref(&self) -> &Server {
        &self.server
    }
}

/// Builder for [`ServerInfo`] with fluent API
#[derive(Debug, Clone)]
pub struct ServerInfoBuilder {
    info: ServerInfo,
}

impl ServerInfoBuilder {
    fn from_summary(server: Server) -> Self {
        Self {
            info: ServerInfo {
                server,
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.server.name = Some(name.into());
        self
    }

    pub fn cpu(mut self, mhz: u32) -> Self {
        self.info.cpu = Some(mhz);
        self
    }

    pub fn smp(mut self, cores: u32) -> Self {
        self.info.smp = Some(cores);
        self
    }

    pub fn memory(mut self, bytes: impl Into<Magnitude>) -> Self {
        self.info.memory = Some(bytes.into());
        self
    }

    pub fn vnc_password(mut self, password: impl Into<String>) -> Self {
        self.info.vnc_password = Some(password.into());
        self
    }

    pub fn drive(mut self, drive: ServerDrive) -> Self {
        self.info.drives.push(drive);
        self
    }

    pub fn nic(mut self, nic: Nic) -> Self {
        self.info.nics.push(nic);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.info.tags.push(tag);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.meta.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ServerInfo {
        self.info
    }
}

/// Drive attached to a server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServerDrive {
    /// [`BOOT_ORDER_UNSET`] when the drive does not boot
    pub boot_order: i32,
    /// Bus position such as `0:0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_emulation_type: Option<DeviceEmulationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<Drive>,
}

impl Default for ServerDrive {
    fn default() -> Self {
        Self {
            boot_order: BOOT_ORDER_UNSET,
            device_channel: None,
            device_emulation_type: None,
            drive_uuid: None,
            drive: None,
        }
    }
}

impl ServerDrive {
    /// Attachment of `drive_uuid` on `device_channel`
    pub fn new(
        drive_uuid: impl Into<String>,
        device_channel: impl Into<String>,
        emulation: DeviceEmulationType,
    ) -> Self {
        Self {
            device_channel: Some(device_channel.into()),
            device_emulation_type: Some(emulation),
            drive_uuid: Some(drive_uuid.into()),
            ..Default::default()
        }
    }

    pub fn with_boot_order(self, boot_order: i32) -> Self {
        Self { boot_order, ..self }
    }

    pub fn has_boot_order(&self) -> bool {
        self.boot_order != BOOT_ORDER_UNSET
    }
}

/// Network interface of a server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Nic {
    /// [`BOOT_ORDER_UNSET`] when the NIC does not PXE boot
    pub boot_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy: Option<FirewallPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_v4_configuration: Option<IpConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_v6_configuration: Option<IpConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<NicModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<NicStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<Vlan>,
}

impl Default for Nic {
    fn default() -> Self {
        Self {
            boot_order: BOOT_ORDER_UNSET,
            firewall_policy: None,
            ip_v4_configuration: None,
            ip_v6_configuration: None,
            mac: None,
            model: None,
            runtime: None,
            vlan: None,
        }
    }
}

impl Nic {
    /// Public interface configured over DHCP
    pub fn dhcp(model: NicModel) -> Self {
        Self {
            model: Some(model),
            ip_v4_configuration: Some(IpConfiguration {
                configuration_type: Some(IpConfigurationType::Dhcp),
                ip: None,
            }),
            ..Default::default()
        }
    }

    /// Private interface on a VLAN
    pub fn private(model: NicModel, vlan: Vlan) -> Self {
        Self {
            model: Some(model),
            vlan: Some(vlan),
            ..Default::default()
        }
    }

    /// Address currently bound to the interface, falling back to the static configuration
    pub fn ipv4_address(&self) -> Option<&str> {
        self.runtime
            .as_ref()
            .and_then(|runtime| runtime.ip_v4.as_ref())
            .or_else(|| {
                self.ip_v4_configuration
                    .as_ref()
                    .and_then(|conf| conf.ip.as_ref())
            })
            .and_then(|ip| ip.uuid.as_deref())
    }
}

/// IPv4/IPv6 configuration of a NIC
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IpConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_type: Option<IpConfigurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Ip>,
}

/// Runtime state of a running server
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ServerRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nics: Vec<NicStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
}

/// Runtime state of a NIC
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NicStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<InterfaceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io: Option<IoStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_v4: Option<Ip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_v6: Option<Ip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}

/// Interface counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IoStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_recv: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_sent: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets_recv: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets_sent: Option<Magnitude>,
}
