// Copyright (c) 2025 - Cowboy AI, Inc.
//! Billing resources
//!
//! Monetary values are kept as the decimal strings the provider sends;
//! they are never rounded through floating point.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{SubscriptionResource, SubscriptionStatus};
use crate::codec::Magnitude;

/// Subscription, possibly with renewal descendants
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descendants: Vec<Subscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_notification: Option<DateTime<Utc>>,
    /// Billing period such as `1 month`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<SubscriptionResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Uuid of the VLAN or address the subscription pays for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_object: Option<String>,
}

impl Subscription {
    /// Reference carrying only an id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Number of subscriptions in this renewal tree, including itself
    pub fn tree_size(&self) -> usize {
        1 + self
            .descendants
            .iter()
            .map(Subscription::tree_size)
            .sum::<usize>()
    }
}

/// Price of one unit of a resource at a burst level
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Pricing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<SubscriptionResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Account balance
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Balance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Discount granted for a subscription period
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Discount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Ledger entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<u64>,
    /// Balance before the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// Current usage of the account, keyed by resource token (`cpu`, `dssd`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AccountUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub usage: BTreeMap<String, UsageRecord>,
}

impl AccountUsage {
    pub fn get(&self, resource: SubscriptionResource) -> Option<&UsageRecord> {
        self.usage.get(resource.as_str())
    }
}

/// Usage counters for one resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct UsageRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burst: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using: Option<Magnitude>,
}
