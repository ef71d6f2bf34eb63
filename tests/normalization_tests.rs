// Copyright (c) 2025 - Cowboy AI, Inc.
//! Normalization Tests
//!
//! Full response bodies, as the API sends them, through the envelope
//! unwrappers and converters.

mod fixtures;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use cim_infrastructure_cloudsigma::codec::Magnitude;
use cim_infrastructure_cloudsigma::compute::{boot_drive_uuid, ingress_permissions, ComputeNode, NodeStatus};
use cim_infrastructure_cloudsigma::domain::{
    AccountUsage, Drive, DriveInfo, DriveStatus, FirewallAction, FirewallIpProtocol, FirewallPolicy,
    InterfaceType, MediaType, ProfileInfo, Server, ServerInfo, ServerStatus, Subscription,
    SubscriptionResource, SubscriptionStatus, Tag, TagResource, TagResourceType, Vlan,
    BOOT_ORDER_UNSET,
};
use cim_infrastructure_cloudsigma::envelope::{unwrap_list, unwrap_single};
use cim_infrastructure_cloudsigma::errors::DecodeError;

use fixtures::*;

#[test]
fn test_server_detail_list() {
    let body = envelope(vec![server_detail()]);
    let servers: Vec<ServerInfo> = unwrap_list(Some(&body)).unwrap();

    assert_eq!(servers.len(), 1);
    let server = &servers[0];
    assert_eq!(server.uuid(), Some(SERVER_UUID));
    assert_eq!(server.server.status, Some(ServerStatus::Running));
    assert_eq!(server.cpu, Some(2000));
    assert_eq!(server.smp, Some(2));
    assert_eq!(server.memory, Some(Magnitude::from(2_147_483_648)));
    assert_eq!(server.server.owner.as_ref().and_then(|o| o.uuid.as_deref()), Some(OWNER_UUID));
    assert_eq!(
        server.server.runtime.as_ref().and_then(|r| r.active_since),
        Some(Utc.with_ymd_and_hms(2013, 5, 28, 11, 57, 1).unwrap())
    );

    assert_eq!(server.drives[0].boot_order, BOOT_ORDER_UNSET);
    assert_eq!(server.drives[1].boot_order, 1);
    assert_eq!(boot_drive_uuid(server), Some(BOOT_DRIVE_UUID));

    let private = &server.nics[1];
    assert_eq!(private.vlan, Some(Vlan {
        uuid: Some(VLAN_UUID.to_string()),
        resource_uri: Some(format!("/api/2.0/vlans/{}/", VLAN_UUID)),
        ..Default::default()
    }));
    assert_eq!(
        private.runtime.as_ref().and_then(|r| r.interface_type),
        Some(InterfaceType::Private)
    );
    assert_eq!(server.tags, vec![Tag::builder().uuid(TAG_UUID).name("production").build()]);
}

#[test]
fn test_attached_drive_equals_independent_summary() {
    let body = server_detail();
    let server: ServerInfo = unwrap_single(Some(&body)).unwrap().unwrap();
    let summary: Drive = unwrap_single(Some(&body["drives"][1]["drive"])).unwrap().unwrap();

    assert_eq!(server.drives[1].drive.as_ref(), Some(&summary));
    assert_eq!(summary.uuid.as_deref(), Some(BOOT_DRIVE_UUID));
}

#[test]
fn test_embedded_firewall_policy_is_normalized() {
    let server: ServerInfo = unwrap_single(Some(&server_detail())).unwrap().unwrap();
    let policy = server.nics[0].firewall_policy.as_ref().unwrap();

    assert_eq!(policy.name.as_deref(), Some("web"));
    assert_eq!(policy.rules.len(), 4);
    assert_eq!(policy.servers, vec![Server::with_uuid(SERVER_UUID)]);

    let privileged = &policy.rules[1];
    let ports = privileged.destination_port.unwrap();
    assert_eq!((ports.from_port(), ports.to_port(), ports.is_negated()), (1, 1024, true));
    assert_eq!(privileged.action, Some(FirewallAction::Drop));
}

#[test]
fn test_ingress_translation_of_policy() {
    let policy: FirewallPolicy = unwrap_single(Some(&firewall_policy_detail()))
        .unwrap()
        .unwrap();
    let permissions = ingress_permissions(&policy);

    // ssh rule, then the protocol-less dns rule expanded to tcp and udp
    let summary: Vec<_> = permissions
        .iter()
        .map(|p| (p.protocol, p.from_port, p.to_port, p.cidr.as_cidr()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (FirewallIpProtocol::Tcp, 22, 22, "10.0.0.0/8".to_string()),
            (FirewallIpProtocol::Tcp, 53, 53, "0.0.0.0/0".to_string()),
            (FirewallIpProtocol::Udp, 53, 53, "0.0.0.0/0".to_string()),
        ]
    );

    // the domain value still carries the negation
    let dns = &policy.rules[2];
    assert!(dns.source_ip.as_ref().unwrap().negated);
}

#[test]
fn test_compute_node_from_fixture() {
    let server: ServerInfo = unwrap_single(Some(&server_detail())).unwrap().unwrap();
    let node = ComputeNode::from_server(
        &server,
        boot_drive_uuid(&server).map(str::to_string),
        Some("Ubuntu 22.04 LTS".to_string()),
    );

    assert_eq!(node.status, NodeStatus::Running);
    assert_eq!(node.public_addresses, vec![PUBLIC_IP]);
    assert_eq!(node.private_addresses, vec!["10.0.0.5"]);
    assert_eq!(node.boot_drive.as_deref(), Some(BOOT_DRIVE_UUID));
    assert_eq!(node.tags, vec!["production"]);
}

#[test]
fn test_drive_detail_single_and_enveloped_agree() {
    let bare: Option<DriveInfo> = unwrap_single(Some(&boot_drive_detail())).unwrap();
    let wrapped: Option<DriveInfo> =
        unwrap_single(Some(&envelope(vec![boot_drive_detail()]))).unwrap();
    assert_eq!(bare, wrapped);

    let drive = bare.unwrap();
    assert_eq!(drive.drive.status, Some(DriveStatus::Mounted));
    assert_eq!(drive.media, Some(MediaType::Disk));
    assert_eq!(drive.size, Some(Magnitude::from(10_737_418_240)));
    assert_eq!(drive.mounted_on.len(), 1);
    assert_eq!(drive.tags, vec![Tag::with_uuid(TAG_UUID)]);
    assert_eq!(drive.meta.get("replicas").map(String::as_str), Some("2"));
    assert!(!drive.meta.contains_key("note"));
}

#[test]
fn test_tag_detail_resources() {
    let tag: Tag = unwrap_single(Some(&tag_detail())).unwrap().unwrap();

    assert_eq!(tag.resources.len(), 5);
    assert!(matches!(&tag.resources[0], TagResource::Server(server) if server.owner.is_some()));
    assert!(matches!(&tag.resources[1], TagResource::Drive(_)));
    assert_eq!(tag.resources[2].uuid(), Some(PUBLIC_IP));
    assert_eq!(tag.resources_of(TagResourceType::Vlans).count(), 1);
    assert_eq!(tag.resources[4].resource_type(), TagResourceType::Unrecognized);
    assert_eq!(tag.resources[4].uuid(), Some("4d2c"));
}

#[test]
fn test_subscription_list() {
    let subscriptions: Vec<Subscription> = unwrap_list(Some(&subscription_list())).unwrap();

    let ids: Vec<_> = subscriptions.iter().filter_map(|s| s.id.as_deref()).collect();
    assert_eq!(ids, vec!["7271", "7272"]);
    assert_eq!(subscriptions[0].resource, Some(SubscriptionResource::Cpu));
    assert_eq!(subscriptions[0].price.as_deref(), Some("14.00"));
    assert_eq!(subscriptions[1].status, Some(SubscriptionStatus::Inactive));
    assert_eq!(subscriptions[1].amount, Some(Magnitude::from(10_737_418_240)));
    assert_eq!(subscriptions[1].subscribed_object.as_deref(), Some(BOOT_DRIVE_UUID));
}

#[test]
fn test_current_usage_is_a_bare_record() {
    let usage: AccountUsage = unwrap_single(Some(&current_usage())).unwrap().unwrap();

    assert_eq!(
        usage.get(SubscriptionResource::Mem).and_then(|r| r.subscribed.clone()),
        Some(Magnitude::from(2_147_483_648))
    );
    assert_eq!(usage.usage.len(), 3);
}

#[test]
fn test_profile() {
    let profile: ProfileInfo = unwrap_single(Some(&profile())).unwrap().unwrap();
    assert_eq!(profile.email.as_deref(), Some("ops@example.com"));
    assert_eq!(profile.display_name().as_deref(), Some("Ada Lovelace"));
    assert!(profile.signup_time.is_some());
}

#[test]
fn test_empty_and_missing_bodies() {
    let empty = json!({"meta": {"total_count": 0}, "objects": []});

    let none: Option<ServerInfo> = unwrap_single(Some(&empty)).unwrap();
    assert_eq!(none, None);
    let list: Vec<ServerInfo> = unwrap_list(Some(&empty)).unwrap();
    assert!(list.is_empty());

    let missing: Option<DriveInfo> = unwrap_single(None).unwrap();
    assert_eq!(missing, None);
}

#[test]
fn test_malformed_record_fails_the_whole_list() {
    let mut broken = server_detail();
    broken["runtime"]["active_since"] = json!("28/05/2013");
    let body = envelope(vec![server_detail(), broken]);

    let result: Result<Vec<ServerInfo>, _> = unwrap_list(Some(&body));
    assert!(matches!(result, Err(DecodeError::Timestamp { .. })));
}

#[test]
fn test_oversized_integer_literals_are_rejected() {
    let body: serde_json::Value =
        serde_json::from_str(r#"{"uuid": "d1", "size": 99999999999999999999}"#).unwrap();
    let drive: Result<Option<DriveInfo>, _> = unwrap_single(Some(&body));
    assert!(matches!(drive, Err(DecodeError::Magnitude(_))));

    let body: serde_json::Value = serde_json::from_str(r#"{"uuid": "s1", "mem": 1e30}"#).unwrap();
    let server: Result<Option<ServerInfo>, _> = unwrap_single(Some(&body));
    assert!(matches!(server, Err(DecodeError::Magnitude(_))));

    // the same size sent as text keeps every digit
    let body: serde_json::Value =
        serde_json::from_str(r#"{"uuid": "d1", "size": "99999999999999999999"}"#).unwrap();
    let drive: DriveInfo = unwrap_single(Some(&body)).unwrap().unwrap();
    assert_eq!(drive.size.map(|s| s.to_string()).as_deref(), Some("99999999999999999999"));
}

#[test]
fn test_wire_type_mismatch_is_a_json_error() {
    let body = json!({"uuid": 42, "name": "web01"});
    let result: Result<Option<ServerInfo>, _> = unwrap_single(Some(&body));
    assert!(matches!(result, Err(DecodeError::Json(_))));
}
