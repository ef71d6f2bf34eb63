// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire records for drives and servers

use serde::Deserialize;

use super::{WireFirewallPolicy, WireIp, WireMeta, WireNumber, WireOwner, WireRef, WireTag, WireVlan};

/// `/drives/`, `/drives/detail/` and `/libdrives/` record
///
/// Library drives share the drive schema and add the catalogue fields at
/// the end of this struct.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireDrive {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub status: Option<String>,
    pub name: Option<String>,
    pub size: Option<WireNumber>,
    pub media: Option<String>,
    pub allow_multimount: Option<bool>,
    pub affinities: Option<Vec<String>>,
    pub licenses: Option<Vec<WireDriveLicense>>,
    pub meta: Option<WireMeta>,
    pub mounted_on: Option<Vec<WireRef<WireServer>>>,
    pub tags: Option<Vec<WireRef<WireTag>>>,
    pub storage_type: Option<String>,

    // Library catalogue fields
    pub arch: Option<String>,
    pub category: Option<Vec<String>>,
    pub description: Option<String>,
    pub favorite: Option<bool>,
    pub image_type: Option<String>,
    pub install_notes: Option<String>,
    pub os: Option<String>,
    pub paid: Option<bool>,
    pub url: Option<String>,
}

/// Metered license descriptor (`/licenses/`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireLicense {
    pub burstable: Option<bool>,
    pub long_name: Option<String>,
    pub name: Option<String>,
    pub resource_uri: Option<String>,
    #[serde(rename = "type")]
    pub license_type: Option<String>,
    pub user_metric: Option<String>,
}

/// License attached to a drive
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireDriveLicense {
    pub amount: Option<WireNumber>,
    pub license: Option<WireLicense>,
    pub user: Option<WireOwner>,
}

/// `/servers/` and `/servers/detail/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireServer {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub owner: Option<WireOwner>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub runtime: Option<WireServerRuntime>,
    pub cpu: Option<WireNumber>,
    pub cpus_instead_of_cores: Option<bool>,
    pub drives: Option<Vec<WireServerDrive>>,
    pub enable_numa: Option<bool>,
    pub hv_relaxed: Option<bool>,
    pub hv_tsc: Option<bool>,
    pub mem: Option<WireNumber>,
    pub meta: Option<WireMeta>,
    pub nics: Option<Vec<WireNic>>,
    pub requirements: Option<Vec<String>>,
    pub tags: Option<Vec<WireRef<WireTag>>>,
    pub vnc_password: Option<String>,
    pub smp: Option<WireNumber>,
    pub context: Option<bool>,
}

/// Drive attachment inside a server record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireServerDrive {
    pub boot_order: Option<WireNumber>,
    pub dev_channel: Option<String>,
    pub device: Option<String>,
    pub drive: Option<WireRef<WireDrive>>,
}

/// Network interface inside a server record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireNic {
    pub boot_order: Option<WireNumber>,
    pub firewall_policy: Option<Box<WireRef<WireFirewallPolicy>>>,
    pub ip_v4_conf: Option<WireIpConfiguration>,
    pub ip_v6_conf: Option<WireIpConfiguration>,
    pub mac: Option<String>,
    pub model: Option<String>,
    pub runtime: Option<WireNicStats>,
    pub vlan: Option<Box<WireRef<WireVlan>>>,
}

/// `ip_v4_conf` / `ip_v6_conf`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireIpConfiguration {
    pub conf: Option<String>,
    pub ip: Option<Box<WireRef<WireIp>>>,
}

/// Runtime block of a running server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireServerRuntime {
    pub active_since: Option<String>,
    pub nics: Option<Vec<WireNicStats>>,
    pub status: Option<String>,
}

/// Runtime block of a NIC
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireNicStats {
    pub interface_type: Option<String>,
    pub io: Option<WireIoStats>,
    pub ip_v4: Option<Box<WireRef<WireIp>>>,
    pub ip_v6: Option<Box<WireRef<WireIp>>>,
    pub mac: Option<String>,
}

/// Interface counters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireIoStats {
    pub bytes_recv: Option<WireNumber>,
    pub bytes_sent: Option<WireNumber>,
    pub packets_recv: Option<WireNumber>,
    pub packets_sent: Option<WireNumber>,
}
