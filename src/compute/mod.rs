// Copyright (c) 2025 - Cowboy AI, Inc.
//! Compute Adapter
//!
//! Maps normalized servers onto a provider-neutral compute view:
//!
//! - [`boot_drive`] - deterministic, total boot drive selection
//! - [`NodeStatus`] - server status mapped to a generic node status
//! - [`ComputeNode`] - addresses, sizing and image of a server
//! - [`ingress_permissions`] - firewall policy as security group permissions
//!
//! Resolving the image name needs the boot drive's details. The adapter
//! fetches them through a [`DriveLookup`] and keeps them in a bounded
//! [`DriveCache`].

pub mod boot;
pub mod cache;
pub mod node;
pub mod security;

use async_trait::async_trait;
use tracing::{debug, warn};

pub use boot::{boot_drive, boot_drive_uuid};
pub use cache::{DriveCache, DEFAULT_DRIVE_CACHE_CAPACITY};
pub use node::{ComputeNode, NodeStatus};
pub use security::{ingress_permissions, IngressPermission};

use crate::domain::{DriveInfo, ServerInfo};
use crate::errors::CloudSigmaResult;

/// Source of drive details, usually the API client
#[async_trait]
pub trait DriveLookup: Send + Sync {
    /// Fetch a drive by uuid; a drive that does not exist yields `Ok(None)`
    async fn drive_info(&self, uuid: &str) -> CloudSigmaResult<Option<DriveInfo>>;
}

/// Builds [`ComputeNode`]s, caching boot drive lookups
pub struct ComputeAdapter<L> {
    lookup: L,
    cache: DriveCache,
}

impl<L: DriveLookup> ComputeAdapter<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_cache(lookup, DriveCache::default())
    }

    pub fn with_cache(lookup: L, cache: DriveCache) -> Self {
        Self { lookup, cache }
    }

    pub fn cache(&self) -> &DriveCache {
        &self.cache
    }

    /// Details of the drive a server boots from.
    ///
    /// `None` when the server has no boot drive or the drive no longer exists.
    pub async fn boot_image(&self, server: &ServerInfo) -> CloudSigmaResult<Option<DriveInfo>> {
        let Some(uuid) = boot_drive_uuid(server) else {
            debug!("Server {:?} has no boot drive", server.uuid());
            return Ok(None);
        };

        if let Some(cached) = self.cache.get(uuid) {
            return Ok(Some(cached));
        }

        match self.lookup.drive_info(uuid).await? {
            Some(drive) => {
                self.cache.insert(uuid, drive.clone());
                Ok(Some(drive))
            }
            None => {
                warn!("Boot drive {} of server {:?} not found", uuid, server.uuid());
                Ok(None)
            }
        }
    }

    /// Compute node view of a server
    pub async fn node(&self, server: &ServerInfo) -> CloudSigmaResult<ComputeNode> {
        let image = self.boot_image(server).await?;
        Ok(ComputeNode::from_server(
            server,
            boot_drive_uuid(server).map(str::to_string),
            image.and_then(|drive| drive.name),
        ))
    }
}
