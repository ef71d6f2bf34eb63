// Copyright (c) 2025 - Cowboy AI, Inc.
//! Envelope Properties

use cim_infrastructure_cloudsigma::domain::{DriveInfo, Tag};
use cim_infrastructure_cloudsigma::envelope::{unwrap_list, unwrap_single};
use proptest::prelude::*;
use serde_json::{json, Value};

fn uuids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[0-9a-f]{8}", 0..20)
}

proptest! {
    #[test]
    fn prop_list_order_is_preserved(ids in uuids()) {
        let records: Vec<Value> = ids.iter().map(|id| json!({"uuid": id})).collect();
        let body = json!({"meta": {"total_count": ids.len()}, "objects": records});

        let drives: Vec<DriveInfo> = unwrap_list(Some(&body)).unwrap();
        let decoded: Vec<String> = drives
            .iter()
            .filter_map(|d| d.uuid().map(str::to_string))
            .collect();
        prop_assert_eq!(decoded, ids);
    }

    #[test]
    fn prop_singleton_envelope_equals_bare_record(
        id in "[0-9a-f]{8}",
        name in "[a-z]{1,10}",
    ) {
        let record = json!({"uuid": id, "name": name});
        let wrapped = json!({"objects": [record.clone()]});

        let bare: Option<Tag> = unwrap_single(Some(&record)).unwrap();
        let single: Option<Tag> = unwrap_single(Some(&wrapped)).unwrap();
        prop_assert_eq!(&bare, &single);

        let list: Vec<Tag> = unwrap_list(Some(&wrapped)).unwrap();
        prop_assert_eq!(list.into_iter().next(), bare);
    }

    #[test]
    fn prop_single_takes_first_of_many(ids in prop::collection::vec("[0-9a-f]{8}", 1..10)) {
        let records: Vec<Value> = ids.iter().map(|id| json!({"uuid": id})).collect();
        let body = json!({"objects": records});

        let first: Option<Tag> = unwrap_single(Some(&body)).unwrap();
        prop_assert_eq!(first.and_then(|t| t.uuid), Some(ids[0].clone()));
    }
}
