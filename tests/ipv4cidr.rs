use ipv4cidr::{CidrError, Ipv4Cidr};

#[test]
fn valid_block_without_standardization() {
    let cidr = Ipv4Cidr::parse("10.10.0.0/26", false).unwrap();
    assert_eq!("10.10.0.0/26", cidr.to_string());
    assert_eq!("10.10.0.0", cidr.address());
    assert_eq!("255.255.255.192", cidr.netmask());
    assert_eq!(64, cidr.range_size());
    assert_eq!(26, cidr.prefix_length());
}

#[test]
fn non_standard_block_is_rejected() {
    let err = Ipv4Cidr::parse("10.10.0.1/26", false).unwrap_err();
    assert_eq!(CidrError::NonStandardAddress, err);
    assert_eq!(
        "IP address is not standardized, the IP part of IP/CIDR should be the first IP in the range",
        err.to_string()
    );
    assert_eq!(Err(CidrError::NonStandardAddress), "10.10.0.1/26".parse::<Ipv4Cidr>());
}

#[test]
fn non_standard_block_is_standardized() {
    let cidr = Ipv4Cidr::parse("10.10.0.1/26", true).unwrap();
    assert_eq!("10.10.0.0", cidr.address());
    assert_eq!("255.255.255.192", cidr.netmask());
    assert_eq!(64, cidr.range_size());
    assert_eq!(26, cidr.prefix_length());
}

#[test]
fn invalid_octet() {
    assert_eq!(
        Err(CidrError::InvalidFormat),
        Ipv4Cidr::parse("200.200.200.256/23", false)
    );
}

#[test]
fn single_address() {
    let cidr = Ipv4Cidr::parse("10.2.3.4", false).unwrap();
    assert_eq!("10.2.3.4", cidr.address());
    assert_eq!("255.255.255.255", cidr.netmask());
    assert_eq!(1, cidr.range_size());
    assert_eq!(32, cidr.prefix_length());
}

#[test]
fn split_block() {
    let cidr = Ipv4Cidr::parse("10.10.0.0/26", false).unwrap();
    let (lower, upper) = cidr.split().unwrap();

    assert_eq!("10.10.0.0", lower.address());
    assert_eq!("255.255.255.224", lower.netmask());
    assert_eq!(27, lower.prefix_length());
    assert_eq!(32, lower.range_size());

    assert_eq!("10.10.0.32", upper.address());
    assert_eq!("255.255.255.224", upper.netmask());
    assert_eq!(27, upper.prefix_length());
    assert_eq!(32, upper.range_size());

    // the parent is left as it was
    assert_eq!("10.10.0.0/26", cidr.to_string());
}

#[test]
fn split_single_address() {
    let cidr = Ipv4Cidr::parse("10.10.0.0/32", false).unwrap();
    let err = cidr.split().unwrap_err();
    assert_eq!(CidrError::NotSplittable, err);
    assert_eq!(
        "There is only one IP address in this CIDR range, further splitting is not possible",
        err.to_string()
    );
}

#[test]
fn nth_address_in_range() {
    let cidr = Ipv4Cidr::parse("10.10.0.0/26", false).unwrap();
    assert_eq!("10.10.0.9", cidr.nth_address(10, false).unwrap());
    assert_eq!("10.10.0.9/26", cidr.nth_address(10, true).unwrap());
    assert_eq!("10.10.0.63/26", cidr.nth_address(64, true).unwrap());
}

#[test]
fn nth_address_out_of_range() {
    let cidr = Ipv4Cidr::parse("10.10.0.0/30", false).unwrap();
    let err = cidr.nth_address(10, false).unwrap_err();
    assert_eq!(CidrError::OutOfRange, err);
    assert_eq!("Requested IP exceeds the CIDR range", err.to_string());
    assert_eq!(Err(CidrError::OutOfRange), cidr.nth_address(5, true));
}

#[test]
fn repeated_split_reaches_single_addresses() {
    let mut cidr = Ipv4Cidr::parse("172.16.0.0/28", false).unwrap();
    let mut uppers = Vec::new();
    while let Ok((lower, upper)) = cidr.split() {
        uppers.push(upper.to_string());
        cidr = lower;
    }
    assert_eq!("172.16.0.0/32", cidr.to_string());
    assert_eq!(
        vec!["172.16.0.8/29", "172.16.0.4/30", "172.16.0.2/31", "172.16.0.1/32"],
        uppers
    );
}
