//! UDP transmission of an already-assembled datagram.

use std::io;
use std::net::UdpSocket;

use log::debug;

use crate::error::SendError;

/// Send `buf` as one datagram to `host:port`.
///
/// The socket is scoped to this call: bound on entry, released when the
/// function returns on any path. Delivery semantics are plain UDP, so a
/// returned `Ok` means the datagram was handed to the network stack, nothing
/// more. Callers that care about transient failures apply their own retry
/// policy; this layer never retries.
pub fn transmit(buf: &[u8], host: &str, port: u16) -> Result<(), SendError> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    let sent = socket.send_to(buf, (host, port))?;
    if sent != buf.len() {
        return Err(SendError::Transmission(io::Error::other(format!(
            "short send: {sent} of {} bytes",
            buf.len()
        ))));
    }
    debug!("sent {sent} bytes to {host}:{port}");
    Ok(())
}
