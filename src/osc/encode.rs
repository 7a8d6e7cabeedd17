//! Pure byte-level encoding for the three supported argument types, plus the
//! type-tag derivation. Everything here is deterministic; tracing happens a
//! layer up so these stay trivially testable.

use crate::error::SendError;
use crate::osc::message::OscArg;

/// OSC 1.0 aligns every segment to 4 bytes.
pub const ALIGN: usize = 4;

/// Length of a string segment on the wire: the raw bytes, one NUL
/// terminator, then zero padding up to the next multiple of 4. An empty
/// string still occupies 4 bytes.
pub fn padded_len(raw: usize) -> usize {
    (raw + 1).next_multiple_of(ALIGN)
}

/// Encode an ASCII string: bytes, NUL terminator, zero padding to 4-byte
/// alignment. Callers are expected to have validated the string already.
pub fn encode_str(s: &str) -> Vec<u8> {
    let mut out = vec![0u8; padded_len(s.len())];
    out[..s.len()].copy_from_slice(s.as_bytes());
    out
}

/// Big-endian two's-complement int32.
pub fn encode_i32(v: i32) -> [u8; 4] {
    v.to_be_bytes()
}

/// Big-endian IEEE-754 single precision.
pub fn encode_f32(v: f32) -> [u8; 4] {
    v.to_be_bytes()
}

/// Derive the type-tag string: ',' followed by one tag character per
/// argument, in order. The match is exhaustive over `OscArg` so a new
/// variant cannot slip through untagged; anything without a wire mapping
/// fails the whole call rather than vanishing from the tag.
pub fn type_tag(args: &[OscArg]) -> Result<String, SendError> {
    let mut tag = String::with_capacity(args.len() + 1);
    tag.push(',');
    for (index, arg) in args.iter().enumerate() {
        tag.push(match arg {
            OscArg::Int(_) => 'i',
            // Doubles are narrowed to single precision, so both tag as 'f'
            OscArg::Float(_) | OscArg::Double(_) => 'f',
            OscArg::Str(_) => 's',
            OscArg::Bool(_) => return Err(SendError::UnsupportedArg { index }),
        });
    }
    Ok(tag)
}
