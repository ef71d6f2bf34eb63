// Copyright (c) 2025 - Cowboy AI, Inc.
//! Absence Propagation Properties
//!
//! A field missing from the wire record, or sent as `null`, is unset in the
//! domain value. It never turns into zero or an empty record.

use cim_infrastructure_cloudsigma::codec::Magnitude;
use cim_infrastructure_cloudsigma::domain::{DriveInfo, ServerInfo, BOOT_ORDER_UNSET};
use cim_infrastructure_cloudsigma::envelope::unwrap_single;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// How an optional field is written: omitted, `null`, or a value
#[derive(Debug, Clone)]
enum Field<T> {
    Omitted,
    Null,
    Present(T),
}

fn field<T: std::fmt::Debug + Clone + 'static>(
    value: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Field<T>> {
    prop_oneof![
        Just(Field::Omitted),
        Just(Field::Null),
        value.prop_map(Field::Present),
    ]
}

fn put<T: Into<Value> + Clone>(record: &mut Map<String, Value>, key: &str, field: &Field<T>) {
    match field {
        Field::Omitted => {}
        Field::Null => {
            record.insert(key.to_string(), Value::Null);
        }
        Field::Present(value) => {
            record.insert(key.to_string(), value.clone().into());
        }
    }
}

fn present<T: Clone>(field: &Field<T>) -> Option<T> {
    match field {
        Field::Present(value) => Some(value.clone()),
        _ => None,
    }
}

proptest! {
    #[test]
    fn prop_server_scalars_follow_presence(
        name in field("[a-z][a-z0-9-]{0,15}"),
        cpu in field(1u32..100_000),
        mem in field(any::<u64>()),
        vnc in field("[A-Za-z0-9]{1,12}"),
    ) {
        let mut record = Map::new();
        record.insert("uuid".to_string(), json!("s1"));
        put(&mut record, "name", &name);
        put(&mut record, "cpu", &cpu);
        put(&mut record, "mem", &mem);
        put(&mut record, "vnc_password", &vnc);

        let server: ServerInfo = unwrap_single(Some(&Value::Object(record)))
            .unwrap()
            .unwrap();

        prop_assert_eq!(server.server.name, present(&name));
        prop_assert_eq!(server.cpu, present(&cpu));
        prop_assert_eq!(server.memory, present(&mem).map(Magnitude::from));
        prop_assert_eq!(server.vnc_password, present(&vnc));
        prop_assert!(server.drives.is_empty());
        prop_assert!(server.server.runtime.is_none());
    }

    #[test]
    fn prop_missing_nested_records_stay_unset(
        with_owner in any::<bool>(),
        with_size in any::<bool>(),
    ) {
        let mut record = json!({"uuid": "d1"});
        if with_owner {
            record["owner"] = json!({"uuid": "u1"});
        }
        if with_size {
            record["size"] = json!("1024");
        }

        let drive: DriveInfo = unwrap_single(Some(&record)).unwrap().unwrap();
        prop_assert_eq!(drive.drive.owner.is_some(), with_owner);
        prop_assert_eq!(drive.size.is_some(), with_size);
        prop_assert!(drive.mounted_on.is_empty());
        prop_assert!(drive.meta.is_empty());
    }

    #[test]
    fn prop_boot_order_present_or_unset(order in field(0i64..1000)) {
        let mut attachment = Map::new();
        attachment.insert("drive".to_string(), json!("d1"));
        put(&mut attachment, "boot_order", &order);
        let record = json!({"uuid": "s1", "drives": [Value::Object(attachment)]});

        let server: ServerInfo = unwrap_single(Some(&record)).unwrap().unwrap();
        let expected = present(&order).map(|o| o as i32).unwrap_or(BOOT_ORDER_UNSET);
        prop_assert_eq!(server.drives[0].boot_order, expected);
    }
}
