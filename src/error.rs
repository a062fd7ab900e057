//! Error related data structures.
//!
//! Nothing in the hot path (CPU step, MMU read/write, PPU step) is
//! fallible; this type is reserved for the configuration-time and
//! host-interface error categories, surfaced through `Result` rather
//! than panics.

use std::fmt::{self, Display, Formatter};

/// Top level enum for error handling within the core.
///
/// Most of the time, you will want to use the `CustomError` variant
/// to provide a more detailed error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The ROM size does not match its header-declared size, or is
    /// otherwise not a valid Game Boy ROM size.
    RomSize,
    /// A boot ROM of the wrong size (or for the wrong hardware mode)
    /// was supplied.
    IncompatibleBootRom,
    /// A caller-supplied parameter (button id, bank index, …) is out
    /// of the range the core accepts.
    InvalidParameter(String),
    /// Catch-all for messages assembled at the call site.
    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::RomSize => String::from("Invalid ROM size"),
            Error::IncompatibleBootRom => String::from("Incompatible boot ROM"),
            Error::InvalidParameter(message) => format!("Invalid parameter: {}", message),
            Error::CustomError(message) => message.clone(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
