// Copyright (c) 2025 - Cowboy AI, Inc.
//! Scalar Coder Properties

use cim_infrastructure_cloudsigma::codec::{parse_timestamp, encode_timestamp, Magnitude};
use cim_infrastructure_cloudsigma::domain::{AddressMatch, PortRange};
use cim_infrastructure_cloudsigma::errors::DecodeError;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_port_range_bounds(a in any::<u16>(), b in any::<u16>(), negated in any::<bool>()) {
        let (from, to) = (a.min(b), a.max(b));
        let raw = format!("{}{}:{}", if negated { "!" } else { "" }, from, to);

        let range = PortRange::parse(&raw).unwrap().unwrap();
        prop_assert_eq!(range.from_port(), from);
        prop_assert_eq!(range.to_port(), to);
        prop_assert_eq!(range.is_negated(), negated);
        prop_assert_eq!(PortRange::parse(&range.to_wire()).unwrap(), Some(range));
    }

    #[test]
    fn prop_inverted_range_is_rejected(a in 1u16..=u16::MAX, gap in 1u16..1000) {
        let low = a.saturating_sub(gap);
        prop_assume!(low < a);
        let raw = format!("{}:{}", a, low);
        prop_assert_eq!(PortRange::parse(&raw), Err(DecodeError::Port(raw.clone())));
    }

    #[test]
    fn prop_single_port(port in any::<u16>()) {
        let range = PortRange::parse(&port.to_string()).unwrap().unwrap();
        prop_assert!(range.is_single());
        prop_assert!(range.contains(port));
    }

    #[test]
    fn prop_negated_address_keeps_network(
        octets in any::<[u8; 4]>(),
        prefix in 0u8..=32,
    ) {
        let network = format!("{}.{}.{}.{}/{}", octets[0], octets[1], octets[2], octets[3], prefix);
        let negated = AddressMatch::parse(&format!("!{}", network)).unwrap().unwrap();
        let plain = AddressMatch::parse(&network).unwrap().unwrap();

        prop_assert!(negated.negated);
        prop_assert_eq!(&negated.network, &plain.network);
        prop_assert_eq!(negated.collapsed().as_cidr(), "0.0.0.0/0");
        prop_assert_eq!(plain.collapsed(), plain.network.clone());
    }

    #[test]
    fn prop_magnitude_beyond_u64(digits in "[1-9][0-9]{0,40}") {
        let magnitude = Magnitude::parse(&digits).unwrap();
        prop_assert_eq!(magnitude.to_string(), digits.clone());
        prop_assert_eq!(magnitude.to_u64().is_some(), digits.parse::<u64>().is_ok());
    }

    #[test]
    fn prop_magnitude_rejects_non_digits(raw in "[0-9]{0,4}[a-zA-Z.,-][0-9]{0,4}") {
        prop_assert_eq!(Magnitude::parse(&raw), Err(DecodeError::Magnitude(raw.clone())));
    }

    #[test]
    fn prop_timestamp_round_trip(secs in 0i64..4_102_444_800) {
        let instant = Utc.timestamp_opt(secs, 0).unwrap();
        let encoded = encode_timestamp(&instant);
        prop_assert!(encoded.ends_with("+00:00"));
        prop_assert_eq!(parse_timestamp(&encoded).unwrap(), instant);
    }
}
