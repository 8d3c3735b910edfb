use std::fmt;
use std::io::Write;

use log::debug;

use crate::error::DatestampError;
use crate::utils::timestamp::Timestamp;

/// A date reduced to its epoch timestamp and little-endian hex bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTimestamp {
    pub timestamp: i64,
    pub hex: String,
}

impl EncodedTimestamp {
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        EncodedTimestamp {
            timestamp: timestamp.timestamp,
            hex: timestamp.to_le_hex(),
        }
    }

    pub fn write_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<(), DatestampError> {
        write!(out, "{}", self)?;
        Ok(())
    }
}

// TIMESTAMP and BYTES lines, then a blank line
impl fmt::Display for EncodedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TIMESTAMP: {}", self.timestamp)?;
        writeln!(f, "BYTES:     {}", self.hex)?;
        writeln!(f)
    }
}

pub fn encode(date: &str) -> Result<EncodedTimestamp, DatestampError> {
    let timestamp = Timestamp::from_iso8601(date)?;
    debug!("Encoded '{}' as {}", date, timestamp.timestamp);
    Ok(EncodedTimestamp::from_timestamp(timestamp))
}
