use std::error::Error;
use std::{fmt, io};

#[derive(Debug)]
pub enum DatestampError {
    Parse {
        input: String,
        source: time::error::Parse,
    },
    Hex(hex::FromHexError),
    InvalidLength(usize),
    OutOfRange(String),
    Format(time::error::Format),
    Io(io::Error),
    SystemTime(String),
}

impl fmt::Display for DatestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatestampError::Parse { input, source } => {
                write!(f, "Unable to parse date '{}': {}", input, source)
            }
            DatestampError::Hex(e) => write!(f, "Invalid hex: {}", e),
            DatestampError::InvalidLength(len) => write!(
                f,
                "Invalid byte length: expected 8 bytes (16 hex digits), got \
                 {} bytes",
                len
            ),
            DatestampError::OutOfRange(s) => write!(f, "Out of range: {}", s),
            DatestampError::Format(e) => write!(f, "Format error: {}", e),
            DatestampError::Io(e) => write!(f, "{}", e),
            DatestampError::SystemTime(s) => {
                write!(f, "SystemTime error: {}", s)
            }
        }
    }
}

impl Error for DatestampError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatestampError::Parse { source, .. } => Some(source),
            DatestampError::Hex(e) => Some(e),
            DatestampError::Format(e) => Some(e),
            DatestampError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for DatestampError {
    fn from(error: hex::FromHexError) -> Self {
        DatestampError::Hex(error)
    }
}

impl From<time::error::Format> for DatestampError {
    fn from(error: time::error::Format) -> Self {
        DatestampError::Format(error)
    }
}

impl From<time::error::ComponentRange> for DatestampError {
    fn from(error: time::error::ComponentRange) -> Self {
        DatestampError::OutOfRange(error.to_string())
    }
}

impl From<io::Error> for DatestampError {
    fn from(error: io::Error) -> Self {
        DatestampError::Io(error)
    }
}
