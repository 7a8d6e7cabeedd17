//! Optional per-stage observation of the encoding pipeline.
//!
//! The assembler calls into a `TraceSink` at each stage instead of printing
//! inline, so the encode path itself stays pure. Sinks only ever observe the
//! bytes; nothing they do can change what goes on the wire.

/// One encoding stage, with the bytes it produced.
#[derive(Debug)]
pub enum TraceEvent<'a> {
    Address { bytes: &'a [u8] },
    TypeTagRaw { tag: &'a str },
    TypeTagPadded { bytes: &'a [u8] },
    Arg { index: usize, tag: char, bytes: &'a [u8] },
    Datagram { bytes: &'a [u8] },
}

pub trait TraceSink {
    fn event(&mut self, event: TraceEvent<'_>);
}

/// The default sink behind the CLI `--debug` flag: human-readable hex on
/// stderr, one line per stage.
pub struct StderrTrace;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl TraceSink for StderrTrace {
    fn event(&mut self, event: TraceEvent<'_>) {
        match event {
            TraceEvent::Address { bytes } => {
                eprintln!("[osc] address   ({} bytes): {}", bytes.len(), hex(bytes));
            }
            TraceEvent::TypeTagRaw { tag } => {
                eprintln!("[osc] type tag  (raw): {tag}");
            }
            TraceEvent::TypeTagPadded { bytes } => {
                eprintln!("[osc] type tag  ({} bytes): {}", bytes.len(), hex(bytes));
            }
            TraceEvent::Arg { index, tag, bytes } => {
                eprintln!("[osc] arg {index} '{tag}' ({} bytes): {}", bytes.len(), hex(bytes));
            }
            TraceEvent::Datagram { bytes } => {
                eprintln!("[osc] datagram  ({} bytes): {}", bytes.len(), hex(bytes));
            }
        }
    }
}
