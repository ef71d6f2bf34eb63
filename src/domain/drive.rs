// Copyright (c) 2025 - Cowboy AI, Inc.
//! Drive aggregates
//!
//! - [`Drive`] - summary shape: identity and status
//! - [`DriveInfo`] - detail shape: a `Drive` plus its full attribute set
//! - [`LibraryDrive`] - a `DriveInfo` from the public drive library
//!
//! Detail embeds summary; it never duplicates the summary's fields.

use serde::Serialize;

use super::{DriveStatus, ImageType, MediaType, Meta, Owner, Server, Tag};
use crate::codec::Magnitude;

/// Drive summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Drive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DriveStatus>,
}

impl Drive {
    /// Summary carrying only an identity
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }
}

/// Drive detail
///
/// `mounted_on` references servers by summary only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DriveInfo {
    #[serde(flatten)]
    pub drive: Drive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multimount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affinities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<DriveLicense>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mounted_on: Vec<Server>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl DriveInfo {
    /// Start a detail value from scratch
    pub fn builder() -> DriveInfoBuilder {
        DriveInfoBuilder::from_summary(Drive::default())
    }

    /// Upcast a summary: the detail starts with the summary's identity and status
    pub fn from_summary(drive: Drive) -> DriveInfoBuilder {
        DriveInfoBuilder::from_summary(drive)
    }

    pub fn uuid(&self) -> Option<&str> {
        self.drive.uuid.as_deref()
    }

    /// Whether the drive is attached to any server
    pub fn is_mounted(&self) -> bool {
        !self.mounted_on.is_empty() || self.drive.status == Some(DriveStatus::Mounted)
    }
}

impl AsRef<Drive> for DriveInfo {
    fn as_ref(&self) -> &Drive {
        &self.drive
    }
}

/// Builder for [`DriveInfo`] with fluent API
#[derive(Debug, Clone)]
pub struct DriveInfoBuilder {
    info: DriveInfo,
}

impl DriveInfoBuilder {
    fn from_summary(drive: Drive) -> Self {
        Self {
            info: DriveInfo {
                drive,
                ..Default::default()
            },
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.info.drive.uuid = Some(uuid.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.name = Some(name.into());
        self
    }

    pub fn size(mut self, size: impl Into<Magnitude>) -> Self {
        self.info.size = Some(size.into());
        self
    }

    pub fn media(mut self, media: MediaType) -> Self {
        self.info.media = Some(media);
        self
    }

    pub fn allow_multimount(mut self, allow: bool) -> Self {
        self.info.allow_multimount = Some(allow);
        self
    }

    pub fn storage_type(mut self, storage_type: impl Into<String>) -> Self {
        self.info.storage_type = Some(storage_type.into());
        self
    }

    pub fn affinity(mut self, affinity: impl Into<String>) -> Self {
        self.info.affinities.push(affinity.into());
        self
    }

    pub fn license(mut self, license: DriveLicense) -> Self {
        self.info.licenses.push(license);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.info.tags.push(tag);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.meta.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> DriveInfo {
        self.info
    }
}

/// Metered license descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burstable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    /// Billing type (`instance`, `install`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    /// Usage metric the license is billed against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metric: Option<String>,
}

/// License attached to a drive
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DriveLicense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// Account that purchased the license
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Owner>,
}

/// Drive from the public drive library
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LibraryDrive {
    #[serde(flatten)]
    pub info: DriveInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AsRef<DriveInfo> for LibraryDrive {
    fn as_ref(&self) -> &DriveInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let info = DriveInfo::builder()
            .name("backup")
            .size(1_024_000_000u64)
            .media(MediaType::Disk)
            .affinity("ssd")
            .meta("description", "nightly")
            .build();

        assert_eq!(info.name.as_deref(), Some("backup"));
        assert_eq!(info.size, Some(Magnitude::from(1_024_000_000)));
        assert_eq!(info.affinities, vec!["ssd".to_string()]);
        assert_eq!(info.meta.get("description").map(String::as_str), Some("nightly"));
        assert_eq!(info.uuid(), None);
    }

    #[test]
    fn test_upcast_keeps_summary() {
        let summary = Drive {
            uuid: Some("e96f3c63-6f50-47eb-9401-a56c5ccf6b32".to_string()),
            status: Some(DriveStatus::Mounted),
            ..Default::default()
        };

        let info = DriveInfo::from_summary(summary.clone()).name("root").build();
        assert_eq!(info.drive, summary);
        assert!(info.is_mounted());
    }

    #[test]
    fn test_untouched_fields_keep_defaults() {
        let info = DriveInfo::builder().name("only-name").build();
        assert_eq!(info.size, None);
        assert_eq!(info.allow_multimount, None);
        assert!(info.mounted_on.is_empty());
    }
}
