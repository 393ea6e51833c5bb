use crate::error::{CidrError, Result};
use lazy_static::lazy_static;
use regex::Captures;
use regex::Regex;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Bit width of an IPv4 address, and so the longest prefix a block may have.
pub const MAX_BITS: u8 = 32;
const HIGHEST_BIT: u32 = 1 << (MAX_BITS - 1);
const GROUP_SIZE: u32 = 8;

/// Netmask with the leading `prefix` bits set.
///
/// Prefix 0 yields 0; the shift by the full width is never performed.
pub fn netmask_for(prefix: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_BITS.saturating_sub(prefix)))
        .unwrap_or(0)
}

/// Number of addresses in a block with the given prefix, `2^(32 - prefix)`.
pub fn range_size_for(prefix: u8) -> u64 {
    1u64 << MAX_BITS.saturating_sub(prefix)
}

/// True iff `address` is the first address of the range selected by `netmask`.
pub fn is_standardized(address: u32, netmask: u32) -> bool {
    address & netmask == address
}

/// First address of the range `address` falls in under `netmask`.
pub fn standardize_address(address: u32, netmask: u32) -> u32 {
    address & netmask
}

/// Dotted-quad rendering, most significant octet first.
pub fn format_address(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{}.{}.{}.{}", a, b, c, d)
}

/// An IPv4 CIDR block in standard form.
///
/// The stored address is always the first one of the range, so
/// `address & netmask == address` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Cidr {
    net: u32,
    prefix: u8,
    netmask: u32,
    range: u64,
}

impl Ipv4Cidr {
    /// Builds a block from a numeric address and prefix.
    ///
    /// With `standardize` set, host bits of `address` are cleared. Otherwise an address
    /// that is not the first of its range is rejected with
    /// [`CidrError::NonStandardAddress`].
    pub fn new(address: u32, prefix: u8, standardize: bool) -> Result<Self> {
        if prefix > MAX_BITS {
            return Err(CidrError::InvalidFormat);
        }
        let netmask = netmask_for(prefix);
        let net = if standardize {
            standardize_address(address, netmask)
        } else if is_standardized(address, netmask) {
            address
        } else {
            return Err(CidrError::NonStandardAddress);
        };
        Ok(Ipv4Cidr {
            net,
            prefix,
            netmask,
            range: range_size_for(prefix),
        })
    }

    /// Parses `a.b.c.d` or `a.b.c.d/e`. A missing prefix means `/32`.
    pub fn parse(text: &str, standardize: bool) -> Result<Self> {
        lazy_static! {
            static ref RE: Regex = Regex::new(concat!(
                r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.",
                r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.",
                r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.",
                r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
                r"(?:/([0-9]|[1-2][0-9]|3[0-2]))?$"
            ))
            .expect("Not possible");
        }
        fn group<T: FromStr>(v: &Captures<'_>, ind: usize) -> Result<T> {
            v.get(ind)
                .and_then(|r| r.as_str().parse::<T>().ok())
                .ok_or(CidrError::InvalidFormat)
        }

        let v = RE.captures(text).ok_or(CidrError::InvalidFormat)?;
        let mut address = 0u32;
        for ind in 1..=4 {
            address = (address << GROUP_SIZE) | group::<u32>(&v, ind)?;
        }
        let prefix = match v.get(5) {
            Some(_) => group::<u8>(&v, 5)?,
            None => MAX_BITS,
        };
        Ipv4Cidr::new(address, prefix, standardize)
    }

    /// Divides the block into its lower and upper halves, one prefix bit longer.
    pub fn split(&self) -> Result<(Ipv4Cidr, Ipv4Cidr)> {
        if self.range == 1 {
            return Err(CidrError::NotSplittable);
        }
        let netmask = (self.netmask >> 1) | HIGHEST_BIT;
        let lower = Ipv4Cidr {
            net: self.net,
            prefix: self.prefix + 1,
            netmask,
            range: self.range / 2,
        };
        // The only bit set in the new mask but not the old one selects the upper half.
        let upper = Ipv4Cidr {
            net: self.net | (netmask ^ self.netmask),
            ..lower
        };
        Ok((lower, upper))
    }

    /// The `n`-th address of the block, counting from 1.
    pub fn nth_ip(&self, n: u64) -> Result<Ipv4Addr> {
        if n == 0 || n > self.range {
            return Err(CidrError::OutOfRange);
        }
        // n - 1 < range <= 2^32 and net is the first address, so neither step overflows.
        Ok(Ipv4Addr::from(self.net + (n - 1) as u32))
    }

    /// The `n`-th address of the block as text, with `/prefix` appended on request.
    pub fn nth_address(&self, n: u64, include_prefix: bool) -> Result<String> {
        let ip = self.nth_ip(n)?;
        let address = format_address(u32::from(ip));
        if include_prefix {
            Ok(format!("{}/{}", address, self.prefix))
        } else {
            Ok(address)
        }
    }

    pub fn address(&self) -> String {
        format_address(self.net)
    }

    pub fn netmask(&self) -> String {
        format_address(self.netmask)
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix
    }

    /// Addresses covered by the block; `2^32` for `/0`.
    pub fn range_size(&self) -> u64 {
        self.range
    }

    pub fn address_bits(&self) -> u32 {
        self.net
    }

    pub fn netmask_bits(&self) -> u32 {
        self.netmask
    }

    pub fn first_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.net)
    }

    pub fn last_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.net | !self.netmask)
    }

    pub fn contains_ip(&self, ip: &Ipv4Addr) -> bool {
        u32::from(*ip) & self.netmask == self.net
    }

    /// True when every address of `cidr` is also in `self`.
    pub fn contains_cidr(&self, cidr: &Ipv4Cidr) -> bool {
        self.prefix <= cidr.prefix && cidr.net & self.netmask == self.net
    }
}

/// Strict parsing: non-standard addresses are rejected.
impl FromStr for Ipv4Cidr {
    type Err = CidrError;
    fn from_str(s: &str) -> Result<Self> {
        Ipv4Cidr::parse(s, false)
    }
}

impl Display for Ipv4Cidr {
    fn fmt(&self, f: &mut Formatter) -> std::result::Result<(), Error> {
        write!(f, "{}/{}", self.address(), self.prefix)
    }
}
