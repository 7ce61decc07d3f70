//! Client IP resolution from request metadata.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Recorded when no address can be determined.
pub const UNKNOWN_IP: &str = "unknown";

/// Resolves the client IP address for click tracking.
///
/// When `behind_proxy` is set, the first `X-Forwarded-For` entry wins,
/// then `X-Real-IP`. Otherwise only the socket peer address is trusted.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
///
/// assert_eq!(extract_client_ip(&headers, None, true), "203.0.113.7");
/// assert_eq!(extract_client_ip(&headers, None, false), "unknown");
/// ```
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>, behind_proxy: bool) -> String {
    if behind_proxy && let Some(ip) = forwarded_ip(headers) {
        return ip;
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let from_header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    from_header("x-forwarded-for").or_else(|| from_header("x-real-ip"))
}
