// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire records for billing and account resources

use serde::Deserialize;
use std::collections::BTreeMap;

use super::{WireMeta, WireNumber, WireRef};

/// `/subscriptions/` record
///
/// Inside IP and VLAN records only `id` and `resource_uri` are present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireSubscription {
    pub id: Option<WireNumber>,
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub amount: Option<WireNumber>,
    pub auto_renew: Option<bool>,
    pub descendants: Option<Vec<WireRef<WireSubscription>>>,
    pub discount_amount: Option<WireNumber>,
    pub discount_percent: Option<WireNumber>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub last_notification: Option<String>,
    pub period: Option<String>,
    pub price: Option<WireNumber>,
    pub remaining: Option<WireNumber>,
    pub resource: Option<String>,
    pub status: Option<String>,
    pub subscribed_object: Option<String>,
}

/// `/pricing/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WirePricing {
    pub id: Option<WireNumber>,
    pub currency: Option<String>,
    pub level: Option<WireNumber>,
    pub multiplier: Option<WireNumber>,
    pub price: Option<WireNumber>,
    pub resource: Option<String>,
    pub unit: Option<String>,
}

/// `/balance/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireBalance {
    pub balance: Option<WireNumber>,
    pub currency: Option<String>,
}

/// `/discount/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireDiscount {
    pub period: Option<String>,
    pub value: Option<WireNumber>,
}

/// `/ledger/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireTransaction {
    pub id: Option<WireNumber>,
    pub amount: Option<WireNumber>,
    pub billing_cycle: Option<WireNumber>,
    pub initial: Option<WireNumber>,
    pub reason: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub time: Option<String>,
}

/// `/currentusage/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireUsage {
    pub balance: Option<WireBalance>,
    pub usage: Option<BTreeMap<String, WireUsageRecord>>,
}

/// Per-resource usage counters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireUsageRecord {
    pub burst: Option<WireNumber>,
    pub subscribed: Option<WireNumber>,
    pub using: Option<WireNumber>,
}

/// `/profile/` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireProfile {
    pub uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub town: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub vat: Option<String>,
    pub bank_reference: Option<String>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub reseller: Option<String>,
    pub my_notes: Option<String>,
    pub api_https_only: Option<bool>,
    pub key_auth: Option<bool>,
    pub mailing_list: Option<bool>,
    pub autotopup_amount: Option<WireNumber>,
    pub autotopup_threshold: Option<WireNumber>,
    pub signup_time: Option<String>,
    pub meta: Option<WireMeta>,
}
