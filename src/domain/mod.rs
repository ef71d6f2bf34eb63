// Copyright (c) 2025 - Cowboy AI, Inc.
//! CloudSigma Domain Models
//!
//! Immutable, strongly-typed values produced by normalizing wire records.
//! Every field that the provider may omit is an `Option` (or an empty
//! collection); an unset field always means "not supplied", never zero.
//!
//! # Summary and Detail Shapes
//!
//! Detail types embed their summary instead of repeating its fields:
//!
//! - [`Drive`] / [`DriveInfo`] / [`LibraryDrive`]
//! - [`Server`] / [`ServerInfo`]
//! - [`Vlan`] / [`VlanInfo`]
//! - [`Ip`] / [`IpInfo`]
//!
//! # Value Objects
//!
//! - [`IpAddressWithCidr`] - IPv4/IPv6 with CIDR notation
//! - [`AddressMatch`] - firewall address, possibly negated
//! - [`PortRange`] - firewall port or port range, possibly negated
//! - [`Magnitude`](crate::codec::Magnitude) - arbitrary-precision sizes
//!
//! # Composition Rules
//!
//! - `DriveInfo::mounted_on` holds server summaries only
//! - `ServerInfo::drives` holds attachments wrapping drive summaries
//! - `FirewallPolicy::rules` keeps wire order
//! - `Tag::resources` is a sum type over servers, drives, IPs and VLANs

pub mod billing;
pub mod drive;
pub mod enums;
pub mod firewall;
pub mod ipam;
pub mod network;
pub mod profile;
pub mod reference;
pub mod server;
pub mod tag;

pub use billing::{AccountUsage, Balance, Discount, Pricing, Subscription, Transaction, UsageRecord};
pub use drive::{Drive, DriveInfo, DriveInfoBuilder, DriveLicense, LibraryDrive, License};
pub use enums::{
    DeviceEmulationType, DriveStatus, FirewallAction, FirewallDirection, FirewallIpProtocol,
    ImageType, InterfaceType, IpConfigurationType, MediaType, NicModel, ServerStatus,
    SubscriptionResource, SubscriptionStatus, TagResourceType,
};
pub use firewall::{FirewallPolicy, FirewallPolicyBuilder, FirewallRule};
pub use ipam::{Ip, IpInfo, Vlan, VlanInfo};
pub use network::{AddressMatch, IpAddressWithCidr, PortRange};
pub use profile::ProfileInfo;
pub use reference::{Meta, Owner, ResourceRef};
pub use server::{
    IoStats, IpConfiguration, Nic, NicStats, ServerDrive, ServerInfo, ServerInfoBuilder,
    ServerRuntime, BOOT_ORDER_UNSET, Server,
};
pub use tag::{Tag, TagBuilder, TagResource};
