// realip - Client IP resolution for proxied HTTP requests
//
// Determines the originating public client address for a request that may
// have crossed reverse proxies, load balancers, or CDNs. Pure functions over
// the request headers and the transport peer address; the axum middleware in
// `middleware` is the only framework-aware piece.

pub mod classifier;
pub mod error;
pub mod middleware;
pub mod resolver;

pub use classifier::is_private_address;
pub use error::AddressError;
pub use middleware::{client_ip_middleware, ClientIp};
pub use resolver::resolve;
