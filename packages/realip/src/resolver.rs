// Header-priority client address resolution
//
// Walks a fixed precedence list of forwarding headers and returns the first
// acceptable candidate, falling back to the transport peer address. The
// resolver never fails: every input produces a string, possibly empty when
// the peer address itself is unusable.

use std::net::SocketAddr;

use http::HeaderMap;

use crate::classifier::is_private_address;
use crate::error::AddressError;

/// How a precedence entry's raw value is interpreted.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Single value set by a hosting platform or CDN edge; taken on faith
    /// and returned verbatim, with no validation or private filtering.
    Verbatim,
    /// Comma-separated proxy chain appended hop by hop; client-forgeable,
    /// so candidates are validated and private addresses rejected.
    ForwardedList,
}

/// Recognized headers in precedence order. The set and its order are a
/// public contract: adding a header means appending here and documenting
/// the change, never reordering.
const HEADER_PRECEDENCE: &[(&str, Strategy)] = &[
    ("x-client-ip", Strategy::Verbatim),
    ("x-original-forwarded-for", Strategy::ForwardedList),
    ("x-forwarded-for", Strategy::ForwardedList),
    ("cf-connecting-ip", Strategy::Verbatim),
    ("fastly-client-ip", Strategy::Verbatim),
    ("true-client-ip", Strategy::Verbatim),
    ("x-real-ip", Strategy::Verbatim),
    ("x-forwarded", Strategy::ForwardedList),
    ("forwarded-for", Strategy::ForwardedList),
    ("forwarded", Strategy::ForwardedList),
];

/// Resolves the best-guess client address from `headers`, falling back to
/// the host portion of `peer_addr`.
///
/// Precedence entries are tried in the fixed order above and the first one
/// that yields a result wins outright. Forwarded-for style lists use a
/// stop-at-first-entry policy: only the first non-empty entry is evaluated,
/// and if it is private or malformed, the whole header is abandoned in
/// favor of the next precedence entry. Repeated headers read their first
/// occurrence; values that are not valid UTF-8 are treated as absent.
///
/// `peer_addr` may be `ip:port`, a bare IP, or `[v6]:port`; the port is
/// split off when present. An unsplittable colon-containing peer address
/// resolves to the empty string rather than an error.
pub fn resolve(headers: &HeaderMap, peer_addr: &str) -> String {
    for (name, strategy) in HEADER_PRECEDENCE {
        let Some(value) = headers.get(*name).and_then(|v| v.to_str().ok()) else {
            continue;
        };

        match strategy {
            Strategy::Verbatim => {
                if !value.is_empty() {
                    return value.to_string();
                }
            }
            Strategy::ForwardedList => {
                if let Ok(address) = first_forwarded_address(value) {
                    return address;
                }
            }
        }
    }

    peer_host(peer_addr)
}

/// Evaluates a forwarded-for chain, where the leftmost entry is the
/// original client and later entries are proxies.
///
/// Only the first non-empty entry decides the outcome: public addresses
/// are returned, private ones fail the header so resolution moves on to
/// the next precedence entry.
fn first_forwarded_address(value: &str) -> Result<String, AddressError> {
    for candidate in value.split(',').map(str::trim) {
        if candidate.is_empty() {
            continue;
        }
        return if is_private_address(candidate)? {
            Err(AddressError::NoQualifyingAddress)
        } else {
            Ok(candidate.to_string())
        };
    }

    Err(AddressError::NoQualifyingAddress)
}

/// Extracts the host portion of a transport peer address, dropping the
/// port when one is present. Split failures yield the empty string.
fn peer_host(peer_addr: &str) -> String {
    if !peer_addr.contains(':') {
        return peer_addr.to_string();
    }

    // Covers ip:port and [v6]:port forms.
    if let Ok(addr) = peer_addr.parse::<SocketAddr>() {
        return addr.ip().to_string();
    }

    // Something with a colon that is not a socket address: split off the
    // trailing port if that leaves a colon-free host, otherwise give up.
    // A bare unbracketed IPv6 literal lands here and becomes empty.
    match peer_addr.rsplit_once(':') {
        Some((host, _)) if !host.contains(':') => host.to_string(),
        _ => String::new(),
    }
}
