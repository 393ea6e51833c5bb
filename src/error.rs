use thiserror::Error;

/// Ways a CIDR block operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("IP address is invalid, it should be of the format a.b.c.d or a.b.c.d/e, where 0 <= a, b, c, d < 256 and 0 <= e <= 32")]
    InvalidFormat,
    #[error("IP address is not standardized, the IP part of IP/CIDR should be the first IP in the range")]
    NonStandardAddress,
    #[error("There is only one IP address in this CIDR range, further splitting is not possible")]
    NotSplittable,
    #[error("Requested IP exceeds the CIDR range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, CidrError>;
