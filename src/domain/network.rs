// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects for firewall rules
//!
//! Firewall rules on the wire use compact string encodings:
//!
//! - addresses: `"10.0.0.0/8"`, `"185.12.6.183"`, `"!23.0.0.0/32"`
//! - ports: `""`, `"22"`, `"1:1024"`, `"!1:1024"`
//!
//! A leading `!` inverts the match. The parsed bounds are always those of the
//! stripped value; the inversion is kept separately in `negated`.

use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::errors::{DecodeError, DecodeResult};
use crate::wire::WireNumber;

const NEGATION: char = '!';

/// IP address with optional CIDR prefix
///
/// Invariants:
/// - Valid IPv4 or IPv6 address
/// - Prefix length 0-32 for IPv4, 0-128 for IPv6
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IpAddressWithCidr {
    address: IpAddr,
    prefix_length: Option<u8>,
}

impl IpAddressWithCidr {
    /// Parse `"192.168.1.10"` or `"192.168.1.0/24"`
    pub fn new(cidr: impl AsRef<str>) -> DecodeResult<Self> {
        let cidr = cidr.as_ref().trim();

        let (addr_str, prefix_length) = match cidr.split_once('/') {
            Some((addr_str, prefix_str)) => {
                let prefix = prefix_str
                    .parse::<u8>()
                    .map_err(|_| DecodeError::Address(cidr.to_string()))?;
                (addr_str, Some(prefix))
            }
            None => (cidr, None),
        };

        let address =
            IpAddr::from_str(addr_str).map_err(|_| DecodeError::Address(cidr.to_string()))?;

        Self::from_parts(address, prefix_length)
    }

    /// Create from separate address and prefix
    pub fn from_parts(address: IpAddr, prefix_length: Option<u8>) -> DecodeResult<Self> {
        if let Some(prefix) = prefix_length {
            let max_prefix = match address {
                IpAddr::V4(_) => 32,
                IpAddr::V6(_) => 128,
            };
            if prefix > max_prefix {
                return Err(DecodeError::Address(format!("{}/{}", address, prefix)));
            }
        }

        Ok(Self {
            address,
            prefix_length,
        })
    }

    /// The block matching every address of the same family (`0.0.0.0/0`, `::/0`)
    pub fn unrestricted(ipv6: bool) -> Self {
        let address = if ipv6 {
            IpAddr::V6(Ipv6Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        };
        Self {
            address,
            prefix_length: Some(0),
        }
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_length(&self) -> Option<u8> {
        self.prefix_length
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self.address, IpAddr::V6(_))
    }

    /// Get as CIDR notation string
    pub fn as_cidr(&self) -> String {
        if let Some(prefix) = self.prefix_length {
            format!("{}/{}", self.address, prefix)
        } else {
            self.address.to_string()
        }
    }
}

impl fmt::Display for IpAddressWithCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_cidr())
    }
}

impl FromStr for IpAddressWithCidr {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Source or destination address of a firewall rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AddressMatch {
    pub network: IpAddressWithCidr,
    pub negated: bool,
}

impl AddressMatch {
    /// Parse a wire address; empty means "no restriction" and yields `None`
    pub fn parse(raw: &str) -> DecodeResult<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let (negated, body) = strip_negation(raw);
        let network = IpAddressWithCidr::new(body)?;
        Ok(Some(Self { network, negated }))
    }

    /// Decode an optional wire address
    pub fn decode(raw: Option<&str>) -> DecodeResult<Option<Self>> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Ok(None),
        }
    }

    /// Block to use where inversion cannot be expressed.
    ///
    /// An inverted match collapses to the unrestricted block of its family.
    pub fn collapsed(&self) -> IpAddressWithCidr {
        if self.negated {
            IpAddressWithCidr::unrestricted(self.network.is_ipv6())
        } else {
            self.network.clone()
        }
    }

    /// Wire encoding, including the `!` marker
    pub fn to_wire(&self) -> String {
        if self.negated {
            format!("{}{}", NEGATION, self.network)
        } else {
            self.network.to_string()
        }
    }
}

impl fmt::Display for AddressMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Port or inclusive port range of a firewall rule
///
/// Invariant: `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PortRange {
    from: u16,
    to: u16,
    negated: bool,
}

impl PortRange {
    /// Single port
    pub fn single(port: u16) -> Self {
        Self {
            from: port,
            to: port,
            negated: false,
        }
    }

    /// Inclusive range
    pub fn range(from: u16, to: u16) -> DecodeResult<Self> {
        if from > to {
            return Err(DecodeError::Port(format!("{}:{}", from, to)));
        }
        Ok(Self {
            from,
            to,
            negated: false,
        })
    }

    /// Same bounds, inverted match
    pub fn negate(self) -> Self {
        Self {
            negated: !self.negated,
            ..self
        }
    }

    /// Parse `""`, `"22"`, `"1:1024"` or any of those prefixed with `!`
    pub fn parse(raw: &str) -> DecodeResult<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let (negated, body) = strip_negation(raw);
        let port = |s: &str| {
            s.trim()
                .parse::<u16>()
                .map_err(|_| DecodeError::Port(raw.to_string()))
        };

        let parsed = match body.split_once(':') {
            Some((from, to)) => Self::range(port(from)?, port(to)?)
                .map_err(|_| DecodeError::Port(raw.to_string()))?,
            None => Self::single(port(body)?),
        };

        Ok(Some(if negated { parsed.negate() } else { parsed }))
    }

    /// Decode an optional wire port, which may also arrive as a JSON number
    pub fn decode(raw: Option<&WireNumber>) -> DecodeResult<Option<Self>> {
        match raw {
            None => Ok(None),
            Some(WireNumber::Text(text)) => Self::parse(text),
            Some(WireNumber::Unsigned(port)) => u16::try_from(*port)
                .map(|port| Some(Self::single(port)))
                .map_err(|_| DecodeError::Port(port.to_string())),
            Some(other) => Err(DecodeError::Port(other.to_string())),
        }
    }

    pub fn from_port(&self) -> u16 {
        self.from
    }

    pub fn to_port(&self) -> u16 {
        self.to
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_single(&self) -> bool {
        self.from == self.to
    }

    /// Whether `port` falls inside the bounds, ignoring inversion
    pub fn contains(&self, port: u16) -> bool {
        (self.from..=self.to).contains(&port)
    }

    /// Wire encoding, including the `!` marker
    pub fn to_wire(&self) -> String {
        let bounds = if self.is_single() {
            self.from.to_string()
        } else {
            format!("{}:{}", self.from, self.to)
        };
        if self.negated {
            format!("{}{}", NEGATION, bounds)
        } else {
            bounds
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

fn strip_negation(raw: &str) -> (bool, &str) {
    match raw.strip_prefix(NEGATION) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, raw),
    }
}
