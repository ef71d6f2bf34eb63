// Copyright (c) 2025 - Cowboy AI, Inc.
//! Generic compute node view of a server

use serde::Serialize;

use crate::codec::Magnitude;
use crate::domain::{InterfaceType, Nic, ServerInfo, ServerStatus};

/// Provider-neutral node status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Running,
    Pending,
    Suspended,
    Error,
    Unrecognized,
}

impl From<ServerStatus> for NodeStatus {
    fn from(status: ServerStatus) -> Self {
        match status {
            ServerStatus::Running => Self::Running,
            ServerStatus::Starting | ServerStatus::Stopping => Self::Pending,
            ServerStatus::Paused | ServerStatus::Stopped => Self::Suspended,
            ServerStatus::Unavailable => Self::Error,
            ServerStatus::Unrecognized => Self::Unrecognized,
        }
    }
}

/// Compute node assembled from a server and its boot drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputeNode {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: NodeStatus,
    /// CPU frequency in MHz
    pub cpu_mhz: Option<u32>,
    pub cores: Option<u32>,
    /// Memory in bytes
    pub memory: Option<Magnitude>,
    pub public_addresses: Vec<String>,
    pub private_addresses: Vec<String>,
    /// Uuid of the drive the server boots from
    pub boot_drive: Option<String>,
    /// Name of the boot drive, used as the image name
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl ComputeNode {
    /// Build the node view; `boot_drive` and `image` come from the adapter
    pub fn from_server(
        server: &ServerInfo,
        boot_drive: Option<String>,
        image: Option<String>,
    ) -> Self {
        let mut public_addresses = Vec::new();
        let mut private_addresses = Vec::new();
        for nic in &server.nics {
            let addresses = nic_addresses(nic);
            if is_private(nic) {
                private_addresses.extend(addresses);
            } else {
                public_addresses.extend(addresses);
            }
        }

        Self {
            id: server.server.uuid.clone(),
            name: server.server.name.clone(),
            status: server
                .server
                .status
                .map(NodeStatus::from)
                .unwrap_or(NodeStatus::Unrecognized),
            cpu_mhz: server.cpu,
            cores: server.smp,
            memory: server.memory.clone(),
            public_addresses,
            private_addresses,
            boot_drive,
            image,
            tags: server
                .tags
                .iter()
                .filter_map(|tag| tag.name.clone().or_else(|| tag.uuid.clone()))
                .collect(),
        }
    }
}

fn is_private(nic: &Nic) -> bool {
    nic.vlan.is_some()
        || nic
            .runtime
            .as_ref()
            .and_then(|runtime| runtime.interface_type)
            == Some(InterfaceType::Private)
}

/// Runtime addresses of a NIC, falling back to its static configuration
fn nic_addresses(nic: &Nic) -> Vec<String> {
    let runtime: Vec<String> = nic
        .runtime
        .iter()
        .flat_map(|runtime| [runtime.ip_v4.as_ref(), runtime.ip_v6.as_ref()])
        .flatten()
        .filter_map(|ip| ip.uuid.clone())
        .collect();
    if !runtime.is_empty() {
        return runtime;
    }

    [nic.ip_v4_configuration.as_ref(), nic.ip_v6_configuration.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|conf| conf.ip.as_ref().and_then(|ip| ip.uuid.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Ip, IpConfiguration, IpConfigurationType, NicModel, NicStats, Server, Tag, Vlan,
    };
    use test_case::test_case;

    #[test_case(ServerStatus::Running, NodeStatus::Running)]
    #[test_case(ServerStatus::Starting, NodeStatus::Pending)]
    #[test_case(ServerStatus::Stopping, NodeStatus::Pending)]
    #[test_case(ServerStatus::Paused, NodeStatus::Suspended)]
    #[test_case(ServerStatus::Stopped, NodeStatus::Suspended)]
    #[test_case(ServerStatus::Unavailable, NodeStatus::Error)]
    #[test_case(ServerStatus::Unrecognized, NodeStatus::Unrecognized)]
    fn test_status_mapping(status: ServerStatus, expected: NodeStatus) {
        assert_eq!(NodeStatus::from(status), expected);
    }

    #[test]
    fn test_addresses_split_public_and_private() {
        let public = Nic {
            runtime: Some(NicStats {
                interface_type: Some(InterfaceType::Public),
                ip_v4: Some(Ip::with_uuid("31.171.246.37")),
                ..Default::default()
            }),
            ..Nic::dhcp(NicModel::Virtio)
        };
        let static_public = Nic {
            ip_v4_configuration: Some(IpConfiguration {
                configuration_type: Some(IpConfigurationType::Static),
                ip: Some(Ip::with_uuid("185.12.6.183")),
            }),
            ..Default::default()
        };
        let private = Nic {
            runtime: Some(NicStats {
                interface_type: Some(InterfaceType::Private),
                ip_v4: Some(Ip::with_uuid("10.0.0.5")),
                ..Default::default()
            }),
            ..Nic::private(NicModel::Virtio, Vlan::with_uuid("v1"))
        };

        let server = ServerInfo {
            server: Server {
                uuid: Some("s1".to_string()),
                name: Some("web01".to_string()),
                status: Some(ServerStatus::Running),
                ..Default::default()
            },
            nics: vec![public, static_public, private],
            tags: vec![Tag::builder().name("prod").build(), Tag::with_uuid("t2")],
            ..Default::default()
        };

        let node = ComputeNode::from_server(&server, Some("d1".to_string()), Some("Debian".to_string()));
        assert_eq!(node.status, NodeStatus::Running);
        assert_eq!(node.public_addresses, vec!["31.171.246.37", "185.12.6.183"]);
        assert_eq!(node.private_addresses, vec!["10.0.0.5"]);
        assert_eq!(node.tags, vec!["prod", "t2"]);
        assert_eq!(node.image.as_deref(), Some("Debian"));
    }

    #[test]
    fn test_missing_status_is_unrecognized() {
        let node = ComputeNode::from_server(&ServerInfo::default(), None, None);
        assert_eq!(node.status, NodeStatus::Unrecognized);
        assert!(node.public_addresses.is_empty());
    }
}
