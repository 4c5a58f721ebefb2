use std::fmt::{Display, Formatter};

/// A color, mask or filter string that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text is not an integer in the given radix.
    InvalidInteger { input: String, radix: u32 },

    /// An `R,G,B` string that does not have exactly three fields.
    MalformedTriplet(String),

    /// One field of an `R,G,B` string is outside 0..=255.
    ComponentOutOfRange { input: String, value: i64 },

    /// The integer parsed fine but does not fit the target width.
    OutOfRange { input: String, value: i64 },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInteger { input, radix } => {
                write!(f, "invalid long int '{}' with base {}", input, radix)
            }
            Error::MalformedTriplet(input) => write!(f, "malformed R,G,B string: '{}'", input),
            Error::ComponentOutOfRange { input, value } => {
                write!(f, "channel {} in '{}' is not within 0..=255", value, input)
            }
            Error::OutOfRange { input, value } => {
                write!(f, "value {} of '{}' does not fit the color width", value, input)
            }
        }
    }
}

impl std::error::Error for Error {}
