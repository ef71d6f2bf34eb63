// Copyright (c) 2025 - Cowboy AI, Inc.
//! Boot drive selection

use crate::domain::{ServerDrive, ServerInfo};

/// Drive a server boots from.
///
/// The attachment with the strictly highest boot order wins; among equal
/// boot orders the first attachment in wire order is kept. Attachments
/// without a boot order never win. Returns `None` when no attachment has a
/// boot order.
pub fn boot_drive(server: &ServerInfo) -> Option<&ServerDrive> {
    server
        .drives
        .iter()
        .filter(|drive| drive.has_boot_order())
        .fold(None, |best: Option<&ServerDrive>, candidate| match best {
            Some(current) if current.boot_order >= candidate.boot_order => Some(current),
            _ => Some(candidate),
        })
}

/// Uuid of the boot drive, if both the drive and its uuid are known
pub fn boot_drive_uuid(server: &ServerInfo) -> Option<&str> {
    let attachment = boot_drive(server)?;
    attachment
        .drive_uuid
        .as_deref()
        .or_else(|| attachment.drive.as_ref().and_then(|drive| drive.uuid.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeviceEmulationType;

    fn attachment(uuid: &str, boot_order: Option<i32>) -> ServerDrive {
        let drive = ServerDrive::new(uuid, "0:0", DeviceEmulationType::Virtio);
        match boot_order {
            Some(order) => drive.with_boot_order(order),
            None => drive,
        }
    }

    fn server(drives: Vec<ServerDrive>) -> ServerInfo {
        ServerInfo {
            drives,
            ..Default::default()
        }
    }

    #[test]
    fn test_highest_present_boot_order_wins() {
        let server = server(vec![attachment("a", None), attachment("b", Some(1))]);
        assert_eq!(boot_drive_uuid(&server), Some("b"));
    }

    #[test]
    fn test_first_seen_wins_on_tie() {
        let server = server(vec![
            attachment("a", Some(1)),
            attachment("b", Some(2)),
            attachment("c", Some(2)),
        ]);
        assert_eq!(boot_drive_uuid(&server), Some("b"));
    }

    #[test]
    fn test_no_boot_order_means_no_boot_drive() {
        let server = server(vec![attachment("a", None), attachment("b", None)]);
        assert_eq!(boot_drive(&server), None);
        assert_eq!(boot_drive(&ServerInfo::default()), None);
    }

    #[test]
    fn test_zero_boot_order_is_present() {
        let server = server(vec![attachment("a", None), attachment("b", Some(0))]);
        assert_eq!(boot_drive_uuid(&server), Some("b"));
    }
}
