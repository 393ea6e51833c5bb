//! IPv4 CIDR blocks.
//!
//! A block is parsed from `a.b.c.d` or `a.b.c.d/e`, kept in standard form (the stored
//! address is always the first address of its range) and can be split into two halves
//! or asked for the n-th address it covers.
//!
//! ```
//! use ipv4cidr::Ipv4Cidr;
//!
//! let block = Ipv4Cidr::parse("10.10.0.0/26", false).unwrap();
//! assert_eq!("255.255.255.192", block.netmask());
//! assert_eq!(64, block.range_size());
//!
//! let (lower, upper) = block.split().unwrap();
//! assert_eq!("10.10.0.0/27", lower.to_string());
//! assert_eq!("10.10.0.32/27", upper.to_string());
//!
//! assert_eq!("10.10.0.9/26", block.nth_address(10, true).unwrap());
//! ```
mod error;
pub mod ipv4;

pub use error::{CidrError, Result};
pub use ipv4::Ipv4Cidr;
