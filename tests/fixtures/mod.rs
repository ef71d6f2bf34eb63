// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-infrastructure-cloudsigma
//!
//! Deterministic response bodies shaped like the CloudSigma 2.0 API.
//! All uuids and timestamps are fixed constants so tests are reproducible.
#![allow(dead_code)]

use serde_json::{json, Value};

pub const SERVER_UUID: &str = "a2f7e1c4-2a8f-4b5e-9d37-0c6b2f0e1a01";
pub const BOOT_DRIVE_UUID: &str = "e96f3c63-6f50-47eb-9401-a56c5ccf6b32";
pub const DATA_DRIVE_UUID: &str = "3a8d1f20-5b6c-4e7d-8f90-a1b2c3d4e5f6";
pub const POLICY_UUID: &str = "8c4a7f6e-b2d1-4c3e-9a5f-6e7d8c9b0a1f";
pub const VLAN_UUID: &str = "96537817-f4b6-496b-a861-e74192d3ccb0";
pub const TAG_UUID: &str = "68bb0cfc-0c94-4c53-9dd6-2b4e6d2d6c3e";
pub const OWNER_UUID: &str = "5b4a69a3-8e78-4c45-a8ba-8b13f0895e23";
pub const PUBLIC_IP: &str = "185.12.6.183";

pub const FIXED_TIMESTAMP: &str = "2013-05-28T11:57:01+00:00";

fn owner() -> Value {
    json!({
        "uuid": OWNER_UUID,
        "resource_uri": format!("/api/2.0/user/{}/", OWNER_UUID)
    })
}

/// Detail record of the boot drive
pub fn boot_drive_detail() -> Value {
    json!({
        "uuid": BOOT_DRIVE_UUID,
        "name": "Ubuntu 22.04 LTS",
        "size": 10737418240u64,
        "media": "disk",
        "status": "mounted",
        "allow_multimount": false,
        "storage_type": "dssd",
        "affinities": [],
        "licenses": [],
        "mounted_on": [{
            "uuid": SERVER_UUID,
            "resource_uri": format!("/api/2.0/servers/{}/", SERVER_UUID)
        }],
        "owner": owner(),
        "meta": {"description": "boot volume", "replicas": 2, "note": null},
        "tags": [TAG_UUID]
    })
}

/// Firewall policy with a negated port range and a negated source
pub fn firewall_policy_detail() -> Value {
    json!({
        "uuid": POLICY_UUID,
        "name": "web",
        "owner": owner(),
        "resource_uri": format!("/api/2.0/fwpolicies/{}/", POLICY_UUID),
        "rules": [
            {
                "action": "accept",
                "comment": "ssh from office",
                "direction": "in",
                "dst_port": "22",
                "ip_proto": "tcp",
                "src_ip": "10.0.0.0/8"
            },
            {
                "action": "drop",
                "comment": "privileged ports",
                "direction": "in",
                "dst_port": "!1:1024",
                "ip_proto": "tcp"
            },
            {
                "action": "accept",
                "comment": "dns anywhere but one host",
                "direction": "both",
                "dst_port": 53,
                "src_ip": "!23.0.0.0/32"
            },
            {
                "action": "accept",
                "direction": "out",
                "ip_proto": "udp"
            }
        ],
        "servers": [{"uuid": SERVER_UUID}],
        "meta": {},
        "tags": []
    })
}

/// Server detail with two drives, a public and a private NIC
pub fn server_detail() -> Value {
    json!({
        "uuid": SERVER_UUID,
        "name": "web01",
        "status": "running",
        "cpu": 2000,
        "cpus_instead_of_cores": false,
        "smp": 2,
        "mem": 2147483648u64,
        "enable_numa": false,
        "hv_relaxed": false,
        "hv_tsc": false,
        "vnc_password": "tester",
        "owner": owner(),
        "resource_uri": format!("/api/2.0/servers/{}/", SERVER_UUID),
        "requirements": [],
        "drives": [
            {
                "boot_order": null,
                "dev_channel": "0:1",
                "device": "virtio",
                "drive": {
                    "uuid": DATA_DRIVE_UUID,
                    "resource_uri": format!("/api/2.0/drives/{}/", DATA_DRIVE_UUID)
                }
            },
            {
                "boot_order": 1,
                "dev_channel": "0:0",
                "device": "virtio",
                "drive": {
                    "uuid": BOOT_DRIVE_UUID,
                    "resource_uri": format!("/api/2.0/drives/{}/", BOOT_DRIVE_UUID)
                }
            }
        ],
        "nics": [
            {
                "boot_order": null,
                "firewall_policy": firewall_policy_detail(),
                "ip_v4_conf": {"conf": "static", "ip": {"uuid": PUBLIC_IP}},
                "ip_v6_conf": null,
                "mac": "22:a7:a0:0b:43:7d",
                "model": "virtio",
                "runtime": {
                    "interface_type": "public",
                    "ip_v4": {"uuid": PUBLIC_IP},
                    "ip_v6": null,
                    "io": {
                        "bytes_recv": "1024",
                        "bytes_sent": 2048,
                        "packets_recv": 8,
                        "packets_sent": "16"
                    }
                },
                "vlan": null
            },
            {
                "boot_order": null,
                "firewall_policy": null,
                "ip_v4_conf": null,
                "mac": "22:b1:3c:0f:4e:02",
                "model": "e1000",
                "runtime": {"interface_type": "private", "ip_v4": "10.0.0.5"},
                "vlan": {"uuid": VLAN_UUID, "resource_uri": format!("/api/2.0/vlans/{}/", VLAN_UUID)}
            }
        ],
        "runtime": {
            "active_since": FIXED_TIMESTAMP,
            "status": "running"
        },
        "meta": {"ssh_public_key": "ssh-ed25519 AAAA"},
        "tags": [{"uuid": TAG_UUID, "name": "production"}]
    })
}

/// Tag detail referencing one resource of each kind plus one unknown kind
pub fn tag_detail() -> Value {
    json!({
        "uuid": TAG_UUID,
        "name": "production",
        "owner": owner(),
        "resources": [
            {"uuid": SERVER_UUID, "res_type": "servers", "owner": owner()},
            {"uuid": BOOT_DRIVE_UUID, "res_type": "drives"},
            {"uuid": PUBLIC_IP, "res_type": "ips"},
            {"uuid": VLAN_UUID, "res_type": "vlans"},
            {"uuid": "4d2c", "res_type": "snapshots"}
        ],
        "meta": {}
    })
}

/// Wrap records in a list envelope with pagination metadata
pub fn envelope(records: Vec<Value>) -> Value {
    let total = records.len();
    json!({
        "meta": {"limit": 0, "offset": 0, "total_count": total},
        "objects": records
    })
}

/// Account usage body with an unrecognized resource key
pub fn current_usage() -> Value {
    json!({
        "balance": {"balance": "999.43", "currency": "USD"},
        "usage": {
            "cpu": {"burst": 0, "subscribed": 2000, "using": 2000},
            "mem": {"burst": 0, "subscribed": "2147483648", "using": 2147483648u64},
            "tx": {"burst": 1073741824, "subscribed": 0, "using": 1073741824}
        }
    })
}

pub fn subscription_list() -> Value {
    envelope(vec![
        json!({
            "id": "7271",
            "amount": "2000",
            "auto_renew": true,
            "period": "1 month",
            "price": "14.00",
            "resource": "cpu",
            "status": "active",
            "start_time": FIXED_TIMESTAMP,
            "end_time": "2013-06-28T11:57:01+00:00",
            "descendants": []
        }),
        json!({
            "id": 7272,
            "amount": 10737418240u64,
            "resource": "dssd",
            "status": "inactive",
            "subscribed_object": BOOT_DRIVE_UUID
        }),
    ])
}

pub fn profile() -> Value {
    json!({
        "uuid": OWNER_UUID,
        "email": "ops@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "company": "Example AG",
        "currency": "CHF",
        "language": "en-au",
        "signup_time": FIXED_TIMESTAMP,
        "meta": {}
    })
}
