use thiserror::Error;

/// Errors internal to address resolution
///
/// Neither variant escapes `resolver::resolve`, which always returns a
/// string; they drive the fallthrough from one precedence entry to the next.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is not a valid IP: {0}")]
    InvalidAddress(String),

    #[error("header produced no usable public address")]
    NoQualifyingAddress,
}
