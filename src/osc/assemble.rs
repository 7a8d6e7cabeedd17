//! Turns a validated `OscMessage` into one contiguous datagram buffer.
//!
//! The total length is computed up front from the segment lengths and the
//! buffer allocated once; each segment is then written at its computed
//! offset. Segment order is fixed by OSC 1.0: address, type tag, then the
//! arguments in their original order.

use crate::error::SendError;
use crate::osc::encode::{ALIGN, encode_f32, encode_i32, encode_str, padded_len, type_tag};
use crate::osc::message::{OscArg, OscMessage};
use crate::osc::trace::{TraceEvent, TraceSink};

/// Wire length of a single argument segment.
fn arg_len(arg: &OscArg) -> usize {
    match arg {
        OscArg::Int(_) | OscArg::Float(_) | OscArg::Double(_) => 4,
        OscArg::Str(s) => padded_len(s.len()),
        // Rejected by type_tag() before this is ever reached
        OscArg::Bool(_) => 0,
    }
}

fn check_aligned(segment: &'static str, len: usize) -> Result<(), SendError> {
    if len % ALIGN != 0 {
        return Err(SendError::Misaligned { segment, len });
    }
    Ok(())
}

/// Validate the message, encode every segment and concatenate them.
///
/// Validation happens entirely up front, so by the time bytes are produced
/// nothing can fail except a broken alignment invariant, which is reported
/// as `Misaligned` rather than debug-asserted away.
pub fn assemble(
    msg: &OscMessage,
    mut trace: Option<&mut dyn TraceSink>,
) -> Result<Vec<u8>, SendError> {
    // NUL is ASCII but would truncate the address on the wire, so it gets
    // the same rejection as string arguments below
    if msg.addr.is_empty()
        || !msg.addr.starts_with('/')
        || !msg.addr.is_ascii()
        || msg.addr.bytes().any(|b| b == 0)
    {
        return Err(SendError::BadAddress {
            addr: msg.addr.clone(),
        });
    }
    for (index, arg) in msg.args.iter().enumerate() {
        if let OscArg::Str(s) = arg {
            if !s.is_ascii() || s.bytes().any(|b| b == 0) {
                return Err(SendError::InvalidString { index });
            }
        }
    }

    let tag = type_tag(&msg.args)?;

    let addr_len = padded_len(msg.addr.len());
    let tag_len = padded_len(tag.len());
    let total = addr_len + tag_len + msg.args.iter().map(arg_len).sum::<usize>();

    let mut buf = vec![0u8; total];

    let addr_seg = encode_str(&msg.addr);
    check_aligned("address", addr_seg.len())?;
    buf[..addr_len].copy_from_slice(&addr_seg);
    if let Some(sink) = trace.as_deref_mut() {
        sink.event(TraceEvent::Address { bytes: &addr_seg });
        sink.event(TraceEvent::TypeTagRaw { tag: &tag });
    }

    // The type tag is a string segment like any other: NUL-terminated, then
    // padded to the next multiple of 4
    let tag_seg = encode_str(&tag);
    check_aligned("type tag", tag_seg.len())?;
    buf[addr_len..addr_len + tag_len].copy_from_slice(&tag_seg);
    if let Some(sink) = trace.as_deref_mut() {
        sink.event(TraceEvent::TypeTagPadded { bytes: &tag_seg });
    }

    let mut offset = addr_len + tag_len;
    for (index, arg) in msg.args.iter().enumerate() {
        let seg: Vec<u8> = match arg {
            OscArg::Int(v) => encode_i32(*v).to_vec(),
            OscArg::Float(v) => encode_f32(*v).to_vec(),
            OscArg::Double(v) => encode_f32(*v as f32).to_vec(),
            OscArg::Str(s) => encode_str(s),
            // type_tag() already failed the call for these
            OscArg::Bool(_) => unreachable!("unsupported arg survived type_tag"),
        };
        check_aligned("argument", seg.len())?;
        buf[offset..offset + seg.len()].copy_from_slice(&seg);
        if let Some(sink) = trace.as_deref_mut() {
            // index + 1 in the tag string: position 0 is the ','
            let tag_char = tag.as_bytes()[index + 1] as char;
            sink.event(TraceEvent::Arg {
                index,
                tag: tag_char,
                bytes: &seg,
            });
        }
        offset += seg.len();
    }

    check_aligned("datagram", buf.len())?;
    if let Some(sink) = trace.as_deref_mut() {
        sink.event(TraceEvent::Datagram { bytes: &buf });
    }
    Ok(buf)
}
