//! Best-effort local address resolution
//!
//! The audit log records which host performed a push. Resolution is
//! allowed to fail (offline hosts, exotic network setups); callers
//! substitute the [`UNKNOWN_IP`] sentinel.

use std::net::UdpSocket;

/// Sentinel recorded when no local address can be determined
pub const UNKNOWN_IP: &str = "Unknown IP";

/// Resolve the local address used for outbound traffic.
///
/// Opens a UDP socket and connects it to a public address. No packet
/// is sent; connecting only asks the OS which local interface would
/// route there. Returns `None` when the OS cannot answer.
pub fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip().to_string())
}

/// Resolve the local address, falling back to [`UNKNOWN_IP`].
pub fn local_ip_or_unknown() -> String {
    local_ip().unwrap_or_else(|| UNKNOWN_IP.to_string())
}
