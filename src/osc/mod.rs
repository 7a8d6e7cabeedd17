pub mod assemble;
pub mod encode;
pub mod message;
pub mod trace;

pub use assemble::assemble;
pub use message::{OscArg, OscMessage};
pub use trace::{StderrTrace, TraceEvent, TraceSink};
