// Private/reserved address classification
//
// A textual IP address is "private" when it falls inside one of a fixed set
// of ranges reserved for internal, loopback, or link-local use. See
// https://en.wikipedia.org/wiki/Private_network and
// https://en.wikipedia.org/wiki/Link-local_address

use std::net::IpAddr;

use ipnet::IpNet;
use lazy_static::lazy_static;

use crate::error::AddressError;

lazy_static! {
    /// Private, loopback, and link-local CIDR blocks, IPv4 and IPv6.
    /// Built once at first use and read-only afterwards; a parse failure
    /// here is a defect in the table itself, so unwrap is deliberate.
    static ref PRIVATE_RANGES: Vec<IpNet> = [
        "127.0.0.0/8",    // loopback
        "10.0.0.0/8",     // 24-bit private block
        "172.16.0.0/12",  // 20-bit private block
        "192.168.0.0/16", // 16-bit private block
        "169.254.0.0/16", // link-local
        "::1/128",        // loopback IPv6
        "fc00::/7",       // unique local IPv6
        "fe80::/10",      // link-local IPv6
    ]
    .iter()
    .map(|block| block.parse().unwrap())
    .collect();
}

/// Returns whether `address` lies inside a private/reserved network range.
///
/// Fails with `AddressError::InvalidAddress` when the string does not parse
/// as an IPv4 or IPv6 address; the classification is meaningless in that
/// case, so callers must check the error before the boolean.
pub fn is_private_address(address: &str) -> Result<bool, AddressError> {
    let ip: IpAddr = address
        .parse()
        .map_err(|_| AddressError::InvalidAddress(address.to_string()))?;

    // Table is eight entries; a linear scan beats any cleverness.
    Ok(PRIVATE_RANGES.iter().any(|range| range.contains(&ip)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_private_ranges() {
        for addr in [
            "127.0.0.1",
            "127.255.255.254",
            "10.0.0.0",
            "10.255.255.255",
            "172.16.0.0",
            "172.31.255.255",
            "192.168.0.1",
            "192.168.255.255",
            "169.254.1.1",
        ] {
            assert_eq!(is_private_address(addr), Ok(true), "{addr}");
        }
    }

    #[test]
    fn test_ipv6_private_ranges() {
        for addr in ["::1", "fc00::1", "fdff:ffff::1", "fe80::1"] {
            assert_eq!(is_private_address(addr), Ok(true), "{addr}");
        }
    }

    #[test]
    fn test_public_addresses() {
        for addr in ["147.12.56.11", "8.8.8.8", "2001:db8::1", "2606:4700::1111"] {
            assert_eq!(is_private_address(addr), Ok(false), "{addr}");
        }
    }

    #[test]
    fn test_boundary_of_172_block() {
        // 172.16.0.0/12 covers 172.16.0.0 through 172.31.255.255 only
        assert_eq!(is_private_address("172.15.0.0"), Ok(false));
        assert_eq!(is_private_address("172.16.0.0"), Ok(true));
        assert_eq!(is_private_address("172.31.255.255"), Ok(true));
        assert_eq!(is_private_address("172.32.0.0"), Ok(false));
    }

    #[test]
    fn test_malformed_address() {
        for addr in ["not-an-ip", "", "256.1.1.1", "1.2.3", "fe80::zzzz"] {
            assert_eq!(
                is_private_address(addr),
                Err(AddressError::InvalidAddress(addr.to_string())),
                "{addr:?}"
            );
        }
    }
}
