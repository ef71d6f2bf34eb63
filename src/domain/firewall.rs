// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall policies

use serde::Serialize;

use super::{
    AddressMatch, FirewallAction, FirewallDirection, FirewallIpProtocol, Meta, Owner, PortRange,
    Server, Tag,
};

/// Firewall policy with its ordered rule list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FirewallPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rules in evaluation order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FirewallRule>,
    /// Servers with a NIC bound to this policy
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl FirewallPolicy {
    pub fn builder() -> FirewallPolicyBuilder {
        FirewallPolicyBuilder::default()
    }

    /// Reference carrying only an identity
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }

    /// Rules that apply to inbound traffic
    pub fn inbound_rules(&self) -> impl Iterator<Item = &FirewallRule> {
        self.rules.iter().filter(|rule| rule.applies_inbound())
    }
}

/// Builder for [`FirewallPolicy`]
#[derive(Debug, Clone, Default)]
pub struct FirewallPolicyBuilder {
    policy: FirewallPolicy,
}

impl FirewallPolicyBuilder {
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.policy.uuid = Some(uuid.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.policy.name = Some(name.into());
        self
    }

    pub fn rule(mut self, rule: FirewallRule) -> Self {
        self.policy.rules.push(rule);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.policy.tags.push(tag);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.policy.meta.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> FirewallPolicy {
        self.policy
    }
}

/// Single firewall rule
///
/// Unset address or port fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FirewallRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FirewallAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<FirewallDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<FirewallIpProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<AddressMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<PortRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip: Option<AddressMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<PortRange>,
}

impl FirewallRule {
    /// Accept rule for inbound traffic
    pub fn accept_inbound(protocol: FirewallIpProtocol) -> Self {
        Self {
            action: Some(FirewallAction::Accept),
            direction: Some(FirewallDirection::In),
            ip_protocol: Some(protocol),
            ..Default::default()
        }
    }

    pub fn with_destination_port(self, port: PortRange) -> Self {
        Self {
            destination_port: Some(port),
            ..self
        }
    }

    pub fn with_source_ip(self, address: AddressMatch) -> Self {
        Self {
            source_ip: Some(address),
            ..self
        }
    }

    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..self
        }
    }

    /// Direction `in` or `both`
    pub fn applies_inbound(&self) -> bool {
        matches!(
            self.direction,
            Some(FirewallDirection::In) | Some(FirewallDirection::Both)
        )
    }
}
