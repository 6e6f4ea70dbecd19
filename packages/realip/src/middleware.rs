use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::debug;

use crate::resolver::resolve;

/// Extension key for the resolved client address
///
/// Kept as a string rather than an `IpAddr`: verbatim platform headers are
/// passed through unvalidated, so the value is not guaranteed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientIp(pub String);

/// Middleware that resolves the client address for each request
///
/// Runs the header-priority resolver over the request headers with the
/// socket peer address as fallback, and stores the result in the request
/// extensions as [`ClientIp`] for downstream handlers (rate-limit keys,
/// access logs).
pub async fn client_ip_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let ip = resolve(request.headers(), &addr.to_string());
    debug!("resolved client address: {}", ip);
    request.extensions_mut().insert(ClientIp(ip));

    next.run(request).await
}
