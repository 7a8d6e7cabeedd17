use std::fmt;
use std::io;

use derive_more::From;

/// Everything that can go wrong while building or sending a message.
///
/// The variants fall into three classes: caller input that cannot be put on
/// the wire (`UnsupportedArg`, `BadAddress`, `InvalidString`), socket-level
/// failures (`Transmission`), and internal assembly defects (`Misaligned`).
/// Assembly always finishes before the socket is touched, so a failed call
/// never leaves a partial datagram on the network.
#[derive(Debug, From)]
pub enum SendError {
    /// Argument at `index` has no OSC 1.0 type tag (e.g. a bool).
    #[from(ignore)]
    UnsupportedArg { index: usize },
    /// Address pattern is empty, non-ASCII, or does not start with '/'.
    #[from(ignore)]
    BadAddress { addr: String },
    /// String argument at `index` contains a NUL or non-ASCII byte.
    #[from(ignore)]
    InvalidString { index: usize },
    /// The underlying UDP socket reported a failure.
    #[from]
    Transmission(io::Error),
    /// A produced segment broke the 4-byte alignment invariant. This is a
    /// defect in the encoder, not in the caller's input.
    #[from(ignore)]
    Misaligned { segment: &'static str, len: usize },
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::UnsupportedArg { index } => {
                write!(f, "argument {index} has no OSC 1.0 encoding")
            }
            SendError::BadAddress { addr } => {
                write!(f, "'{addr}' is not a valid OSC address pattern")
            }
            SendError::InvalidString { index } => {
                write!(f, "string argument {index} is not plain ASCII")
            }
            SendError::Transmission(err) => write!(f, "UDP send failed: {err}"),
            SendError::Misaligned { segment, len } => {
                write!(f, "{segment} segment is {len} bytes, not a multiple of 4")
            }
        }
    }
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendError::Transmission(err) => Some(err),
            _ => None,
        }
    }
}
