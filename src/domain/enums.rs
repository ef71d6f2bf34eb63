// Copyright (c) 2025 - Cowboy AI, Inc.
//! Closed enumerations of the CloudSigma API
//!
//! Every enumeration carries an `Unrecognized` variant that absorbs tokens
//! this client does not know yet.

use crate::codec::wire_enum;

wire_enum! {
    /// Drive lifecycle status
    pub enum DriveStatus {
        Mounted => "mounted",
        Unmounted => "unmounted",
        Creating => "creating",
        Resizing => "resizing",
        Copying => "copying",
        Unavailable => "unavailable",
    }
}

wire_enum! {
    /// Drive media
    pub enum MediaType {
        Disk => "disk",
        Cdrom => "cdrom",
    }
}

wire_enum! {
    /// Server lifecycle status
    pub enum ServerStatus {
        Running => "running",
        Starting => "starting",
        Stopped => "stopped",
        Stopping => "stopping",
        Paused => "paused",
        Unavailable => "unavailable",
    }
}

wire_enum! {
    /// Emulated bus of a drive attachment
    pub enum DeviceEmulationType {
        Ide => "ide",
        Virtio => "virtio",
    }
}

wire_enum! {
    /// Emulated network card model
    pub enum NicModel {
        Virtio => "virtio",
        E1000 => "e1000",
        Rtl8139 => "rtl8139",
    }
}

wire_enum! {
    /// How a NIC obtains its address
    pub enum IpConfigurationType {
        Dhcp => "dhcp",
        Static => "static",
        Manual => "manual",
    }
}

wire_enum! {
    /// Runtime interface classification
    pub enum InterfaceType {
        Public => "public",
        Private => "private",
    }
}

wire_enum! {
    /// Firewall rule verdict
    pub enum FirewallAction {
        Accept => "accept",
        Drop => "drop",
    }
}

wire_enum! {
    /// Traffic direction a firewall rule applies to
    pub enum FirewallDirection {
        In => "in",
        Out => "out",
        Both => "both",
    }
}

wire_enum! {
    /// Transport protocol a firewall rule matches
    pub enum FirewallIpProtocol {
        Tcp => "tcp",
        Udp => "udp",
    }
}

wire_enum! {
    /// Discriminator of a tagged resource (`res_type`)
    pub enum TagResourceType {
        Servers => "servers",
        Drives => "drives",
        Ips => "ips",
        Vlans => "vlans",
    }
}

wire_enum! {
    /// Subscription status
    pub enum SubscriptionStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Billable resource kinds (subscriptions, pricing, usage)
    pub enum SubscriptionResource {
        Cpu => "cpu",
        Mem => "mem",
        Tx => "tx",
        Ip => "ip",
        Vlan => "vlan",
        Dssd => "dssd",
        Ssd => "ssd",
        MsftLwa00135 => "msft_lwa_00135",
        MsftP7304837 => "msft_p73_04837",
        MsftTfa00009 => "msft_tfa_00009",
        MsftTfa00523 => "msft_tfa_00523",
        WindowsWebServer2008 => "windows_web_server_2008",
        SqlServerStandard2008 => "sql_server_standard_2008",
    }
}

wire_enum! {
    /// Library drive image kind
    pub enum ImageType {
        Install => "install",
        Preinstalled => "preinst",
    }
}

impl ServerStatus {
    /// Whether the server is running or on its way there
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Starting)
    }
}

impl SubscriptionResource {
    /// Whether this resource is a software license rather than capacity
    pub fn is_license(&self) -> bool {
        matches!(
            self,
            Self::MsftLwa00135
                | Self::MsftP7304837
                | Self::MsftTfa00009
                | Self::MsftTfa00523
                | Self::WindowsWebServer2008
                | Self::SqlServerStandard2008
        )
    }
}
