// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall policy to security group translation

use serde::Serialize;

use crate::codec::WireToken;
use crate::domain::{
    FirewallAction, FirewallIpProtocol, FirewallPolicy, FirewallRule, IpAddressWithCidr,
};

/// Inbound permission of a generic security group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IngressPermission {
    pub protocol: FirewallIpProtocol,
    pub from_port: u16,
    pub to_port: u16,
    pub cidr: IpAddressWithCidr,
}

/// Translate the inbound accept rules of a policy, in rule order.
///
/// A rule without a protocol opens both TCP and UDP, and a rule without a
/// destination port opens every port. Security groups cannot express
/// inverted matches, so a negated destination port widens to 0-65535 and a
/// negated source address widens to the unrestricted block of its family.
pub fn ingress_permissions(policy: &FirewallPolicy) -> Vec<IngressPermission> {
    policy
        .inbound_rules()
        .filter(|rule| rule.action == Some(FirewallAction::Accept))
        .flat_map(rule_permissions)
        .collect()
}

fn rule_permissions(rule: &FirewallRule) -> Vec<IngressPermission> {
    let protocols: &[FirewallIpProtocol] = match &rule.ip_protocol {
        None => FirewallIpProtocol::KNOWN,
        Some(protocol) if protocol.is_recognized() => std::slice::from_ref(protocol),
        Some(_) => &[],
    };

    let (from_port, to_port) = rule
        .destination_port
        .filter(|ports| !ports.is_negated())
        .map(|ports| (ports.from_port(), ports.to_port()))
        .unwrap_or((0, u16::MAX));

    let cidr = rule
        .source_ip
        .as_ref()
        .map(|source| source.collapsed())
        .unwrap_or_else(|| IpAddressWithCidr::unrestricted(false));

    protocols
        .iter()
        .map(|protocol| IngressPermission {
            protocol: *protocol,
            from_port,
            to_port,
            cidr: cidr.clone(),
        })
        .collect()
}
