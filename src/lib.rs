//! Encode a single OSC 1.0 message and send it as one UDP datagram.
//!
//! The crate does exactly one thing: take an address pattern plus an ordered
//! list of typed arguments, produce the OSC 1.0 byte layout (big
//! endian, every segment NUL-terminated where applicable and padded to 4-byte
//! alignment), and hand the result to an ephemeral UDP socket. Bundles,
//! timestamps and the receive side are deliberately absent.
//!
//! ```no_run
//! use kuldonc_rust::{OscArg, send};
//!
//! send("/volume", vec![OscArg::Float(0.75)]).unwrap();
//! ```

pub mod error;
pub mod net;
pub mod osc;

pub use error::SendError;
pub use osc::message::{OscArg, OscMessage};
pub use osc::trace::{StderrTrace, TraceEvent, TraceSink};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Send one message to the default target (`127.0.0.1:8000`), no tracing.
pub fn send(address: &str, args: Vec<OscArg>) -> Result<(), SendError> {
    send_to(address, args, DEFAULT_HOST, DEFAULT_PORT, false)
}

/// Send one message to `host:port`. With `debug` set, every encoding stage
/// is printed to stderr; the traced bytes are the transmitted bytes.
///
/// Each call is a single linear pass (validate, encode, assemble, send) with
/// no state retained afterwards, so concurrent calls need no coordination.
pub fn send_to(
    address: &str,
    args: Vec<OscArg>,
    host: &str,
    port: u16,
    debug: bool,
) -> Result<(), SendError> {
    let mut stderr = StderrTrace;
    let trace: Option<&mut dyn TraceSink> = if debug { Some(&mut stderr) } else { None };
    send_traced(address, args, host, port, trace)
}

/// Like `send_to`, but with a caller-supplied trace sink.
pub fn send_traced(
    address: &str,
    args: Vec<OscArg>,
    host: &str,
    port: u16,
    trace: Option<&mut dyn TraceSink>,
) -> Result<(), SendError> {
    let msg = OscMessage {
        addr: address.to_string(),
        args,
    };
    // The datagram is fully assembled before the socket is opened, so any
    // failure up to this point is atomic: nothing partial hits the network.
    let datagram = osc::assemble(&msg, trace)?;
    net::transmit(&datagram, host, port)
}
