use derive_more::From;

/// A single OSC argument as supplied by the caller.
///
/// Only `i` (int32), `f` (float32) and `s` (string) exist on the wire in this
/// crate. `Double` is accepted for convenience and narrowed to single
/// precision before encoding. `Bool` is representable here so that callers
/// get a real error instead of a silently shortened argument list; it always
/// fails encoding.
#[derive(Debug, Clone, PartialEq, From)]
pub enum OscArg {
    Int(i32),
    Float(f32),
    Double(f64),
    Str(String),
    Bool(bool),
}

impl From<&str> for OscArg {
    fn from(s: &str) -> Self {
        OscArg::Str(s.to_string())
    }
}

/// An address pattern plus its ordered argument list.
///
/// Built, encoded and discarded within a single send call; nothing here is
/// ever persisted or reused.
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    pub addr: String,
    pub args: Vec<OscArg>,
}

impl OscMessage {
    pub fn new(addr: impl Into<String>) -> OscMessage {
        OscMessage {
            addr: addr.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument, keeping the fluent call sites readable.
    pub fn arg(mut self, arg: impl Into<OscArg>) -> OscMessage {
        self.args.push(arg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls_cover_the_wire_types() {
        assert_eq!(OscArg::from(3), OscArg::Int(3));
        assert_eq!(OscArg::from(0.5f32), OscArg::Float(0.5));
        assert_eq!(OscArg::from(0.5f64), OscArg::Double(0.5));
        assert_eq!(OscArg::from("hi"), OscArg::Str("hi".to_string()));
        assert_eq!(OscArg::from(true), OscArg::Bool(true));
    }

    #[test]
    fn builder_keeps_argument_order() {
        let msg = OscMessage::new("/test").arg(1).arg(2.0f32).arg("three");
        assert_eq!(msg.addr, "/test");
        assert_eq!(
            msg.args,
            vec![
                OscArg::Int(1),
                OscArg::Float(2.0),
                OscArg::Str("three".to_string())
            ]
        );
    }
}
