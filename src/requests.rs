// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request Bodies
//!
//! Outbound bodies built from domain values. A field is only written when
//! the domain value has it set, so an edit never clears attributes the
//! caller did not touch. Nested resources are referenced by uuid.
//!
//! Creation endpoints take a list envelope; wrap bodies with
//! [`Objects::one`] or [`Objects::many`].

use serde::{Serialize, Serializer};

use crate::codec::{Magnitude, WireToken};
use crate::domain::{
    DeviceEmulationType, DriveInfo, FirewallAction, FirewallDirection, FirewallIpProtocol,
    FirewallPolicy, FirewallRule, IpConfiguration, IpConfigurationType, IpInfo, MediaType, Meta,
    Nic, NicModel, ProfileInfo, ServerDrive, ServerInfo, Subscription, SubscriptionResource, Tag,
    TagResource, VlanInfo,
};

/// `{"objects": [...]}` envelope for creation requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Objects<T> {
    pub objects: Vec<T>,
}

impl<T> Objects<T> {
    pub fn one(body: T) -> Self {
        Self {
            objects: vec![body],
        }
    }

    pub fn many(bodies: impl IntoIterator<Item = T>) -> Self {
        Self {
            objects: bodies.into_iter().collect(),
        }
    }
}

/// Drop the `Unrecognized` sentinel; it has no meaning to the API
fn known<E: WireToken>(value: Option<E>) -> Option<E> {
    value.filter(|token| token.is_recognized())
}

/// Sizes go out as JSON numbers, falling back to decimal text past `u64`
fn magnitude_as_number<S: Serializer>(
    value: &Option<Magnitude>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(magnitude) => match magnitude.to_u64() {
            Some(number) => serializer.serialize_u64(number),
            None => magnitude.serialize(serializer),
        },
        None => serializer.serialize_none(),
    }
}

fn tag_uuids(tags: &[Tag]) -> Vec<String> {
    tags.iter().filter_map(|tag| tag.uuid.clone()).collect()
}

// ============================================================================
// Tags, VLANs and IPs
// ============================================================================

/// Body for creating or editing a tag
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl From<&Tag> for TagRequest {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            meta: tag.meta.clone(),
            resources: tag
                .resources
                .iter()
                .filter_map(TagResource::uuid)
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Body for editing a VLAN; only `meta` and `tags` are writable
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VlanRequest {
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&VlanInfo> for VlanRequest {
    fn from(vlan: &VlanInfo) -> Self {
        Self {
            meta: vlan.meta.clone(),
            tags: tag_uuids(&vlan.tags),
        }
    }
}

/// Body for editing an IP; only `meta` and `tags` are writable
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpRequest {
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&IpInfo> for IpRequest {
    fn from(ip: &IpInfo) -> Self {
        Self {
            meta: ip.meta.clone(),
            tags: tag_uuids(&ip.tags),
        }
    }
}

// ============================================================================
// Drives and servers
// ============================================================================

/// Body for creating or editing a drive
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "magnitude_as_number"
    )]
    pub size: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multimount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affinities: Vec<String>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&DriveInfo> for DriveRequest {
    fn from(drive: &DriveInfo) -> Self {
        Self {
            name: drive.name.clone(),
            size: drive.size.clone(),
            media: known(drive.media),
            allow_multimount: drive.allow_multimount,
            storage_type: drive.storage_type.clone(),
            affinities: drive.affinities.clone(),
            meta: drive.meta.clone(),
            tags: tag_uuids(&drive.tags),
        }
    }
}

/// Body for cloning a drive
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloneDriveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affinities: Vec<String>,
}

/// Body for creating or editing a server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smp: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "magnitude_as_number"
    )]
    pub mem: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus_instead_of_cores: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_numa: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hv_relaxed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hv_tsc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnc_password: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drives: Vec<ServerDriveRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nics: Vec<NicRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&ServerInfo> for ServerRequest {
    fn from(server: &ServerInfo) -> Self {
        Self {
            name: server.server.name.clone(),
            cpu: server.cpu,
            smp: server.smp,
            mem: server.memory.clone(),
            cpus_instead_of_cores: server.cpus_instead_of_cores,
            enable_numa: server.enable_numa,
            hv_relaxed: server.hv_relaxed,
            hv_tsc: server.hv_tsc,
            vnc_password: server.vnc_password.clone(),
            drives: server.drives.iter().map(ServerDriveRequest::from).collect(),
            nics: server.nics.iter().map(NicRequest::from).collect(),
            requirements: server.requirements.clone(),
            meta: server.meta.clone(),
            tags: tag_uuids(&server.tags),
        }
    }
}

/// Drive attachment inside a [`ServerRequest`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServerDriveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceEmulationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
}

impl From<&ServerDrive> for ServerDriveRequest {
    fn from(attachment: &ServerDrive) -> Self {
        Self {
            boot_order: attachment
                .has_boot_order()
                .then_some(attachment.boot_order),
            dev_channel: attachment.device_channel.clone(),
            device: known(attachment.device_emulation_type),
            drive: attachment
                .drive_uuid
                .clone()
                .or_else(|| attachment.drive.as_ref().and_then(|d| d.uuid.clone())),
        }
    }
}

/// NIC inside a [`ServerRequest`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NicRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_v4_conf: Option<IpConfigurationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_v6_conf: Option<IpConfigurationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<NicModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<String>,
}

impl From<&Nic> for NicRequest {
    fn from(nic: &Nic) -> Self {
        Self {
            boot_order: (nic.boot_order != crate::domain::BOOT_ORDER_UNSET)
                .then_some(nic.boot_order),
            firewall_policy: nic
                .firewall_policy
                .as_ref()
                .and_then(|policy| policy.uuid.clone()),
            ip_v4_conf: nic.ip_v4_configuration.as_ref().map(IpConfigurationRequest::from),
            ip_v6_conf: nic.ip_v6_configuration.as_ref().map(IpConfigurationRequest::from),
            mac: nic.mac.clone(),
            model: known(nic.model),
            vlan: nic.vlan.as_ref().and_then(|vlan| vlan.uuid.clone()),
        }
    }
}

/// `ip_v4_conf` / `ip_v6_conf` inside a [`NicRequest`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf: Option<IpConfigurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl From<&IpConfiguration> for IpConfigurationRequest {
    fn from(conf: &IpConfiguration) -> Self {
        Self {
            conf: known(conf.configuration_type),
            ip: conf.ip.as_ref().and_then(|ip| ip.uuid.clone()),
        }
    }
}

// ============================================================================
// Firewall policies
// ============================================================================

/// Body for creating or editing a firewall policy
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FirewallPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FirewallRuleRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&FirewallPolicy> for FirewallPolicyRequest {
    fn from(policy: &FirewallPolicy) -> Self {
        Self {
            name: policy.name.clone(),
            meta: policy.meta.clone(),
            rules: policy.rules.iter().map(FirewallRuleRequest::from).collect(),
            tags: tag_uuids(&policy.tags),
        }
    }
}

/// Rule inside a [`FirewallPolicyRequest`]; addresses and ports keep their `!` marker
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FirewallRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FirewallAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<FirewallDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_proto: Option<FirewallIpProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_port: Option<String>,
}

impl From<&FirewallRule> for FirewallRuleRequest {
    fn from(rule: &FirewallRule) -> Self {
        Self {
            action: known(rule.action),
            comment: rule.comment.clone(),
            direction: known(rule.direction),
            ip_proto: known(rule.ip_protocol),
            src_ip: rule.source_ip.as_ref().map(|ip| ip.to_wire()),
            src_port: rule.source_port.map(|port| port.to_wire()),
            dst_ip: rule.destination_ip.as_ref().map(|ip| ip.to_wire()),
            dst_port: rule.destination_port.map(|port| port.to_wire()),
        }
    }
}

// ============================================================================
// Billing and profile
// ============================================================================

/// Body for purchasing a subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionRequest {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "magnitude_as_number"
    )]
    pub amount: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<SubscriptionResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
}

impl From<&Subscription> for SubscriptionRequest {
    fn from(subscription: &Subscription) -> Self {
        Self {
            amount: subscription.amount.clone(),
            period: subscription.period.clone(),
            resource: known(subscription.resource),
            auto_renew: subscription.auto_renew,
        }
    }
}

/// Body for editing the account profile
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_https_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotopup_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotopup_threshold: Option<String>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl From<&ProfileInfo> for ProfileRequest {
    fn from(profile: &ProfileInfo) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            nickname: profile.nickname.clone(),
            title: profile.title.clone(),
            company: profile.company.clone(),
            address: profile.address.clone(),
            town: profile.town.clone(),
            postcode: profile.postcode.clone(),
            state: profile.state.clone(),
            country: profile.country.clone(),
            phone: profile.phone.clone(),
            vat: profile.vat.clone(),
            bank_reference: profile.bank_reference.clone(),
            language: profile.language.clone(),
            my_notes: profile.my_notes.clone(),
            api_https_only: profile.api_https_only,
            key_auth: profile.key_auth,
            mailing_list: profile.mailing_list,
            autotopup_amount: profile.autotopup_amount.clone(),
            autotopup_threshold: profile.autotopup_threshold.clone(),
            meta: profile.meta.clone(),
        }
    }
}
