use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, so that pre-rendered layouts (such
/// as a drawn tree) can be nested inside [`Formatter::debug_struct`] output.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
