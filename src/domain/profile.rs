// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account profile

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Meta;

/// Profile of the authenticated account
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ProfileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
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
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reseller: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl ProfileInfo {
    /// `first_name last_name`, when either is set
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
