// Copyright (c) 2025 - Cowboy AI, Inc.
//! Enumeration Totality Properties
//!
//! Every string decodes to some variant. Known tokens decode to their own
//! variant; anything else lands on `Unrecognized`.

use cim_infrastructure_cloudsigma::codec::{decode_token, WireToken};
use cim_infrastructure_cloudsigma::domain::{
    DriveStatus, FirewallIpProtocol, MediaType, NicModel, ServerStatus, SubscriptionResource,
};
use proptest::prelude::*;

fn check_total<E: WireToken + PartialEq + std::fmt::Debug>(token: &str) -> Result<(), TestCaseError> {
    let decoded: Option<E> = decode_token(Some(token));
    let decoded = decoded.unwrap();
    let known = E::KNOWN.iter().any(|variant| variant.as_token() == token);
    prop_assert_eq!(decoded.is_recognized(), known);
    if known {
        prop_assert_eq!(decoded.as_token(), token);
    }
    Ok(())
}

fn check_known_tokens<E: WireToken + PartialEq + std::fmt::Debug>() {
    for variant in E::KNOWN {
        assert_eq!(E::from_token(variant.as_token()), *variant);
        assert!(variant.is_recognized());
    }
}

#[test]
fn test_known_tokens_decode_to_themselves() {
    check_known_tokens::<DriveStatus>();
    check_known_tokens::<MediaType>();
    check_known_tokens::<ServerStatus>();
    check_known_tokens::<NicModel>();
    check_known_tokens::<FirewallIpProtocol>();
    check_known_tokens::<SubscriptionResource>();
}

#[test]
fn test_absent_token_stays_unset() {
    assert_eq!(decode_token::<ServerStatus>(None), None);
}

proptest! {
    #[test]
    fn prop_any_token_decodes(token in "[a-z_0-9]{0,24}") {
        check_total::<DriveStatus>(&token)?;
        check_total::<ServerStatus>(&token)?;
        check_total::<SubscriptionResource>(&token)?;
    }

    #[test]
    fn prop_matching_is_case_sensitive(index in 0usize..6) {
        let variant = ServerStatus::KNOWN[index];
        let shouted = variant.as_token().to_uppercase();
        prop_assert_eq!(ServerStatus::from_token(&shouted), ServerStatus::Unrecognized);
    }
}
