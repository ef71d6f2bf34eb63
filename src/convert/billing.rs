// Copyright (c) 2025 - Cowboy AI, Inc.
//! Billing and account converters

use std::collections::BTreeMap;

use super::{convert, convert_meta, convert_refs, FromId, FromWire};
use crate::codec::{decode_integer, decode_magnitude, decode_timestamp, decode_token};
use crate::domain::{
    AccountUsage, Balance, Discount, Pricing, ProfileInfo, Subscription, Transaction, UsageRecord,
};
use crate::errors::DecodeResult;
use crate::wire::{
    WireBalance, WireDiscount, WireNumber, WirePricing, WireProfile, WireSubscription,
    WireTransaction, WireUsage, WireUsageRecord,
};

/// Monetary amounts keep the provider's decimal text
fn decimal(raw: Option<&WireNumber>) -> Option<String> {
    raw.map(WireNumber::to_string)
}

impl FromWire for Subscription {
    type Wire = WireSubscription;

    fn from_wire(wire: &WireSubscription) -> DecodeResult<Self> {
        Ok(Self {
            id: wire.id.as_ref().map(WireNumber::to_string),
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            amount: decode_magnitude(wire.amount.as_ref())?,
            auto_renew: wire.auto_renew,
            descendants: convert_refs::<Subscription>(wire.descendants.as_deref())?,
            discount_amount: decimal(wire.discount_amount.as_ref()),
            discount_percent: decimal(wire.discount_percent.as_ref()),
            start_time: decode_timestamp(wire.start_time.as_deref())?,
            end_time: decode_timestamp(wire.end_time.as_deref())?,
            last_notification: decode_timestamp(wire.last_notification.as_deref())?,
            period: wire.period.clone(),
            price: decimal(wire.price.as_ref()),
            remaining: decode_magnitude(wire.remaining.as_ref())?,
            resource: decode_token(wire.resource.as_deref()),
            status: decode_token(wire.status.as_deref()),
            subscribed_object: wire.subscribed_object.clone(),
        })
    }
}

impl FromId for Subscription {
    fn from_id(id: String) -> Self {
        Self::with_id(id)
    }
}

impl FromWire for Pricing {
    type Wire = WirePricing;

    fn from_wire(wire: &WirePricing) -> DecodeResult<Self> {
        Ok(Self {
            id: wire.id.as_ref().map(WireNumber::to_string),
            currency: wire.currency.clone(),
            level: decode_integer("level", wire.level.as_ref())?,
            multiplier: decode_magnitude(wire.multiplier.as_ref())?,
            price: decimal(wire.price.as_ref()),
            resource: decode_token(wire.resource.as_deref()),
            unit: wire.unit.clone(),
        })
    }
}

impl FromWire for Balance {
    type Wire = WireBalance;

    fn from_wire(wire: &WireBalance) -> DecodeResult<Self> {
        Ok(Self {
            balance: decimal(wire.balance.as_ref()),
            currency: wire.currency.clone(),
        })
    }
}

impl FromWire for Discount {
    type Wire = WireDiscount;

    fn from_wire(wire: &WireDiscount) -> DecodeResult<Self> {
        Ok(Self {
            period: wire.period.clone(),
            value: decimal(wire.value.as_ref()),
        })
    }
}

impl FromWire for Transaction {
    type Wire = WireTransaction;

    fn from_wire(wire: &WireTransaction) -> DecodeResult<Self> {
        Ok(Self {
            id: wire.id.as_ref().map(WireNumber::to_string),
            amount: decimal(wire.amount.as_ref()),
            billing_cycle: decode_integer("billing_cycle", wire.billing_cycle.as_ref())?,
            initial: decimal(wire.initial.as_ref()),
            reason: wire.reason.clone(),
            start: decode_timestamp(wire.start.as_deref())?,
            end: decode_timestamp(wire.end.as_deref())?,
            time: decode_timestamp(wire.time.as_deref())?,
        })
    }
}

impl FromWire for AccountUsage {
    type Wire = WireUsage;

    fn from_wire(wire: &WireUsage) -> DecodeResult<Self> {
        let usage: BTreeMap<String, UsageRecord> = match &wire.usage {
            Some(records) => records
                .iter()
                .map(|(resource, record)| Ok((resource.clone(), UsageRecord::from_wire(record)?)))
                .collect::<DecodeResult<_>>()?,
            None => BTreeMap::new(),
        };

        Ok(Self {
            balance: convert(wire.balance.as_ref())?,
            usage,
        })
    }
}

impl FromWire for UsageRecord {
    type Wire = WireUsageRecord;

    fn from_wire(wire: &WireUsageRecord) -> DecodeResult<Self> {
        Ok(Self {
            burst: decode_magnitude(wire.burst.as_ref())?,
            subscribed: decode_magnitude(wire.subscribed.as_ref())?,
            using: decode_magnitude(wire.using.as_ref())?,
        })
    }
}

impl FromWire for ProfileInfo {
    type Wire = WireProfile;

    fn from_wire(wire: &WireProfile) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            email: wire.email.clone(),
            first_name: wire.first_name.clone(),
            last_name: wire.last_name.clone(),
            nickname: wire.nickname.clone(),
            title: wire.title.clone(),
            company: wire.company.clone(),
            address: wire.address.clone(),
            town: wire.town.clone(),
            postcode: wire.postcode.clone(),
            state: wire.state.clone(),
            country: wire.country.clone(),
            phone: wire.phone.clone(),
            vat: wire.vat.clone(),
            bank_reference: wire.bank_reference.clone(),
            currency: wire.currency.clone(),
            language: wire.language.clone(),
            reseller: wire.reseller.clone(),
            my_notes: wire.my_notes.clone(),
            api_https_only: wire.api_https_only,
            key_auth: wire.key_auth,
            mailing_list: wire.mailing_list,
            autotopup_amount: decimal(wire.autotopup_amount.as_ref()),
            autotopup_threshold: decimal(wire.autotopup_threshold.as_ref()),
            signup_time: decode_timestamp(wire.signup_time.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}
