use std::time::{SystemTime, UNIX_EPOCH};

use super::time_parse_ext::{epoch_millis_to_rfc3339, iso8601_to_epoch_millis};
use crate::error::DatestampError;

pub const TIMESTAMP_BYTES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub timestamp: i64, // epoch in milliseconds
}

impl Timestamp {
    pub fn new(timestamp: i64) -> Self {
        Timestamp { timestamp }
    }

    pub fn from_iso8601(date: &str) -> Result<Self, DatestampError> {
        iso8601_to_epoch_millis(date).map(Timestamp::new)
    }

    pub fn from_system_time() -> Result<Self, DatestampError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| DatestampError::SystemTime(e.to_string()))
            .and_then(|duration| {
                i64::try_from(duration.as_millis())
                    .map(|timestamp| Timestamp { timestamp })
                    .map_err(|_| {
                        DatestampError::OutOfRange(
                            "Timestamp overflow".to_string(),
                        )
                    })
            })
    }

    /// Decode 16 hex digits holding the little-endian bytes of a timestamp.
    pub fn from_le_hex(hex_str: &str) -> Result<Self, DatestampError> {
        let bytes = hex::decode(hex_str)?;
        let bytes: [u8; TIMESTAMP_BYTES] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DatestampError::InvalidLength(bytes.len()))?;
        Ok(Timestamp::new(i64::from_le_bytes(bytes)))
    }

    pub fn to_le_bytes(&self) -> [u8; TIMESTAMP_BYTES] {
        self.timestamp.to_le_bytes()
    }

    /// Lowercase hex of the little-endian bytes, least significant first.
    pub fn to_le_hex(&self) -> String {
        hex::encode(self.to_le_bytes())
    }

    pub fn to_rfc3339(&self) -> Result<String, DatestampError> {
        epoch_millis_to_rfc3339(self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_le_hex() {
        let cases = vec![
            (0, "0000000000000000"),
            (1325376000000, "00d0909634010000"),
            (-1, "ffffffffffffffff"),
            (-1000, "18fcffffffffffff"),
        ];
        for (timestamp, hex_str) in cases {
            assert_eq!(Timestamp::new(timestamp).to_le_hex(), hex_str);
            assert_eq!(
                Timestamp::from_le_hex(hex_str).unwrap().timestamp,
                timestamp
            );
        }
    }

    #[test]
    fn test_from_le_hex_accepts_uppercase() {
        let ts = Timestamp::from_le_hex("00D0909634010000").unwrap();
        assert_eq!(ts.timestamp, 1325376000000);
    }

    #[test]
    fn test_from_le_hex_invalid() {
        assert!(matches!(
            Timestamp::from_le_hex("00d09096"),
            Err(DatestampError::InvalidLength(4))
        ));
        assert!(matches!(
            Timestamp::from_le_hex("00d0909634010000ff"),
            Err(DatestampError::InvalidLength(9))
        ));
        assert!(matches!(
            Timestamp::from_le_hex("zzd0909634010000"),
            Err(DatestampError::Hex(_))
        ));
        assert!(matches!(
            Timestamp::from_le_hex("00d090963401000"),
            Err(DatestampError::Hex(_))
        ));
    }

    #[test]
    fn test_from_system_time() {
        let now = Timestamp::from_system_time().unwrap();
        // any clock this runs on is past 2012
        assert!(now.timestamp > 1325376000000);
    }
}
