//! When parsing a numeric literal goes wrong.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display};
use core::result;
use serde::{de, ser};
#[cfg(feature = "std")]
use std::io;

/// This type represents all possible errors that can occur when parsing a
/// numeric literal.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `json_number::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// The literal that failed to parse, exactly as it was passed in.
    ///
    /// Empty for errors raised through serde's `custom` hooks.
    pub fn input(&self) -> &[u8] {
        &self.err.input
    }

    /// The type the literal was being parsed into.
    pub fn target(&self) -> Target {
        self.err.target
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a valid numeric literal
    /// - `Category::Range` - a valid literal whose value does not fit the
    ///   requested type
    /// - `Category::Data` - an error raised by serde with a custom message
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Message(_) => Category::Data,
            ErrorCode::InvalidNumber => Category::Syntax,
            ErrorCode::NumberOutOfRange => Category::Range,
        }
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid numeric literal.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a literal that is valid but
    /// does not fit the requested type.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if this error carries a custom message from serde.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }
}

/// Categorizes the cause of a `json_number::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The input was not a valid numeric literal.
    Syntax,

    /// The input was a valid literal but its value does not fit the requested
    /// type, for example `-9223372036854775809` as a signed integer.
    Range,

    /// A custom error raised through serde.
    Data,
}

/// The type a literal was being parsed into when an error occurred.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Target {
    /// A dynamically classified number: signed, unsigned or float.
    Number,
    /// A 32-bit float.
    F32,
    /// A 64-bit float.
    F64,
    /// An unsigned 64-bit integer.
    U64,
    /// A signed 64-bit integer.
    I64,
}

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Target::Number => "number",
            Target::F32 => "f32",
            Target::F64 => "f64",
            Target::U64 => "u64",
            Target::I64 => "i64",
        })
    }
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `json_number::Error` into an `io::Error`.
    ///
    /// Every number error becomes an `InvalidData` IO error.
    fn from(j: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, j)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    target: Target,
    input: Box<[u8]>,
}

/// This type describes all possible errors that can occur when parsing a
/// numeric literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catchall for custom serde error messages.
    Message(Box<str>),

    /// Invalid number.
    InvalidNumber,

    /// Number is bigger than the maximum value of its type.
    NumberOutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn number(code: ErrorCode, input: &[u8], target: Target) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                target,
                input: input.into(),
            }),
        }
    }

    #[cold]
    pub(crate) fn invalid_number(input: &[u8], target: Target) -> Self {
        Error::number(ErrorCode::InvalidNumber, input, target)
    }

    #[cold]
    pub(crate) fn out_of_range(input: &[u8], target: Target) -> Self {
        Error::number(ErrorCode::NumberOutOfRange, input, target)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::InvalidNumber => f.write_str("invalid number"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
        }
    }
}

impl serde::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let ErrorCode::Message(_) = self.code {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} `{}` while parsing {}",
                self.code,
                String::from_utf8_lossy(&self.input),
                self.target
            )
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, input: {:?}, target: {})",
            self.err.code.to_string(),
            String::from_utf8_lossy(&self.err.input),
            self.err.target,
        )
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

fn make_error(msg: String) -> Error {
    Error {
        err: Box::new(ErrorImpl {
            code: ErrorCode::Message(msg.into_boxed_str()),
            target: Target::Number,
            input: Box::default(),
        }),
    }
}
