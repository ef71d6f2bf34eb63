// Copyright (c) 2025 - Cowboy AI, Inc.
//! Drive and server converters

use super::{convert, convert_list, convert_meta, convert_opt_ref, convert_refs, FromId, FromWire};
use crate::codec::{decode_integer, decode_magnitude, decode_timestamp, decode_token};
use crate::domain::{
    Drive, DriveInfo, DriveLicense, FirewallPolicy, Ip, IoStats, IpConfiguration, LibraryDrive,
    License, Nic, NicStats, Server, ServerDrive, ServerInfo, ServerRuntime, Tag, Vlan,
    BOOT_ORDER_UNSET,
};
use crate::errors::DecodeResult;
use crate::wire::{
    WireDrive, WireDriveLicense, WireIoStats, WireIpConfiguration, WireLicense, WireNic,
    WireNicStats, WireRef, WireServer, WireServerDrive, WireServerRuntime,
};

// ============================================================================
// Drives
// ============================================================================

impl FromWire for Drive {
    type Wire = WireDrive;

    fn from_wire(wire: &WireDrive) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
            status: decode_token(wire.status.as_deref()),
        })
    }
}

impl FromId for Drive {
    fn from_id(id: String) -> Self {
        Self::with_uuid(id)
    }
}

impl FromWire for DriveInfo {
    type Wire = WireDrive;

    fn from_wire(wire: &WireDrive) -> DecodeResult<Self> {
        Ok(Self {
            drive: Drive::from_wire(wire)?,
            name: wire.name.clone(),
            size: decode_magnitude(wire.size.as_ref())?,
            media: decode_token(wire.media.as_deref()),
            allow_multimount: wire.allow_multimount,
            storage_type: wire.storage_type.clone(),
            affinities: wire.affinities.clone().unwrap_or_default(),
            licenses: convert_list(wire.licenses.as_deref())?,
            mounted_on: convert_refs::<Server>(wire.mounted_on.as_deref())?,
            tags: convert_refs::<Tag>(wire.tags.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}

impl FromWire for LibraryDrive {
    type Wire = WireDrive;

    fn from_wire(wire: &WireDrive) -> DecodeResult<Self> {
        Ok(Self {
            info: DriveInfo::from_wire(wire)?,
            arch: wire.arch.clone(),
            category: wire.category.clone().unwrap_or_default(),
            description: wire.description.clone(),
            favorite: wire.favorite,
            image_type: decode_token(wire.image_type.as_deref()),
            install_notes: wire.install_notes.clone(),
            os: wire.os.clone(),
            paid: wire.paid,
            url: wire.url.clone(),
        })
    }
}

impl FromWire for License {
    type Wire = WireLicense;

    fn from_wire(wire: &WireLicense) -> DecodeResult<Self> {
        Ok(Self {
            burstable: wire.burstable,
            long_name: wire.long_name.clone(),
            name: wire.name.clone(),
            resource_uri: wire.resource_uri.clone(),
            license_type: wire.license_type.clone(),
            user_metric: wire.user_metric.clone(),
        })
    }
}

impl FromWire for DriveLicense {
    type Wire = WireDriveLicense;

    fn from_wire(wire: &WireDriveLicense) -> DecodeResult<Self> {
        Ok(Self {
            amount: decode_magnitude(wire.amount.as_ref())?,
            license: convert(wire.license.as_ref())?,
            user: convert(wire.user.as_ref())?,
        })
    }
}

// ============================================================================
// Servers
// ============================================================================

impl FromWire for Server {
    type Wire = WireServer;

    fn from_wire(wire: &WireServer) -> DecodeResult<Self> {
        Ok(Self {
            uuid: wire.uuid.clone(),
            resource_uri: wire.resource_uri.clone(),
            owner: convert(wire.owner.as_ref())?,
            name: wire.name.clone(),
            status: decode_token(wire.status.as_deref()),
            runtime: convert(wire.runtime.as_ref())?,
        })
    }
}

impl FromId for Server {
    fn from_id(id: String) -> Self {
        Self::with_uuid(id)
    }
}

impl FromWire for ServerInfo {
    type Wire = WireServer;

    fn from_wire(wire: &WireServer) -> DecodeResult<Self> {
        Ok(Self {
            server: Server::from_wire(wire)?,
            cpu: decode_integer("cpu", wire.cpu.as_ref())?,
            cpus_instead_of_cores: wire.cpus_instead_of_cores,
            smp: decode_integer("smp", wire.smp.as_ref())?,
            memory: decode_magnitude(wire.mem.as_ref())?,
            enable_numa: wire.enable_numa,
            hv_relaxed: wire.hv_relaxed,
            hv_tsc: wire.hv_tsc,
            context: wire.context,
            vnc_password: wire.vnc_password.clone(),
            drives: convert_list(wire.drives.as_deref())?,
            nics: convert_list(wire.nics.as_deref())?,
            requirements: wire.requirements.clone().unwrap_or_default(),
            tags: convert_refs::<Tag>(wire.tags.as_deref())?,
            meta: convert_meta(wire.meta.as_ref()),
        })
    }
}

impl FromWire for ServerDrive {
    type Wire = WireServerDrive;

    fn from_wire(wire: &WireServerDrive) -> DecodeResult<Self> {
        let drive = convert_opt_ref::<Drive>(wire.drive.as_ref())?;
        let drive_uuid = match &wire.drive {
            Some(WireRef::Id(id)) => Some(id.to_string()),
            _ => drive.as_ref().and_then(|drive| drive.uuid.clone()),
        };

        Ok(Self {
            boot_order: decode_integer("boot_order", wire.boot_order.as_ref())?
                .unwrap_or(BOOT_ORDER_UNSET),
            device_channel: wire.dev_channel.clone(),
            device_emulation_type: decode_token(wire.device.as_deref()),
            drive_uuid,
            drive,
        })
    }
}

impl FromWire for Nic {
    type Wire = WireNic;

    fn from_wire(wire: &WireNic) -> DecodeResult<Self> {
        Ok(Self {
            boot_order: decode_integer("boot_order", wire.boot_order.as_ref())?
                .unwrap_or(BOOT_ORDER_UNSET),
            firewall_policy: convert_opt_ref::<FirewallPolicy>(wire.firewall_policy.as_deref())?,
            ip_v4_configuration: convert(wire.ip_v4_conf.as_ref())?,
            ip_v6_configuration: convert(wire.ip_v6_conf.as_ref())?,
            mac: wire.mac.clone(),
            model: decode_token(wire.model.as_deref()),
            runtime: convert(wire.runtime.as_ref())?,
            vlan: convert_opt_ref::<Vlan>(wire.vlan.as_deref())?,
        })
    }
}

impl FromWire for IpConfiguration {
    type Wire = WireIpConfiguration;

    fn from_wire(wire: &WireIpConfiguration) -> DecodeResult<Self> {
        Ok(Self {
            configuration_type: decode_token(wire.conf.as_deref()),
            ip: convert_opt_ref::<Ip>(wire.ip.as_deref())?,
        })
    }
}

impl FromWire for ServerRuntime {
    type Wire = WireServerRuntime;

    fn from_wire(wire: &WireServerRuntime) -> DecodeResult<Self> {
        Ok(Self {
            active_since: decode_timestamp(wire.active_since.as_deref())?,
            nics: convert_list(wire.nics.as_deref())?,
            status: decode_token(wire.status.as_deref()),
        })
    }
}

impl FromWire for NicStats {
    type Wire = WireNicStats;

    fn from_wire(wire: &WireNicStats) -> DecodeResult<Self> {
        Ok(Self {
            interface_type: decode_token(wire.interface_type.as_deref()),
            io: convert(wire.io.as_ref())?,
            ip_v4: convert_opt_ref::<Ip>(wire.ip_v4.as_deref())?,
            ip_v6: convert_opt_ref::<Ip>(wire.ip_v6.as_deref())?,
            mac: wire.mac.clone(),
        })
    }
}

impl FromWire for IoStats {
    type Wire = WireIoStats;

    fn from_wire(wire: &WireIoStats) -> DecodeResult<Self> {
        Ok(Self {
            bytes_recv: decode_magnitude(wire.bytes_recv.as_ref())?,
            bytes_sent: decode_magnitude(wire.bytes_sent.as_ref())?,
            packets_recv: decode_magnitude(wire.packets_recv.as_ref())?,
            packets_sent: decode_magnitude(wire.packets_sent.as_ref())?,
        })
    }
}
