use log::debug;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::error::DatestampError;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Parse an ISO 8601 date or date-time into an instant.
///
/// RFC 3339 is tried first, then the wider ISO 8601 grammar. Inputs
/// without an offset are taken as UTC, and a bare calendar date resolves
/// to midnight UTC. On failure the RFC 3339 diagnostic is reported.
pub fn iso8601_to_datetime(
    input: &str,
) -> Result<OffsetDateTime, DatestampError> {
    let rfc3339_error = match OffsetDateTime::parse(input, &Rfc3339) {
        Ok(datetime) => return Ok(datetime),
        Err(e) => e,
    };
    debug!("'{}' is not RFC 3339 ({}), trying ISO 8601", input, rfc3339_error);

    if let Ok(datetime) = OffsetDateTime::parse(input, &Iso8601::DEFAULT) {
        return Ok(datetime);
    }

    if let Ok(datetime) = PrimitiveDateTime::parse(input, &Iso8601::DEFAULT) {
        debug!("'{}' has no offset, assuming UTC", input);
        return Ok(datetime.assume_utc());
    }

    if let Ok(datetime) = PrimitiveDateTime::parse(
        input,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
        ),
    ) {
        debug!("'{}' has no offset, assuming UTC", input);
        return Ok(datetime.assume_utc());
    }

    // Date also accepts a trailing time, so it must come after the
    // date-time forms
    if let Ok(date) = Date::parse(input, &Iso8601::DEFAULT) {
        debug!("'{}' is a calendar date, using midnight UTC", input);
        return Ok(date.midnight().assume_utc());
    }

    Err(DatestampError::Parse {
        input: input.to_string(),
        source: rfc3339_error,
    })
}

/// Milliseconds since the epoch, rounded towards negative infinity.
pub fn datetime_to_epoch_millis(
    datetime: OffsetDateTime,
) -> Result<i64, DatestampError> {
    let millis = datetime.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI);
    i64::try_from(millis).map_err(|_| {
        DatestampError::OutOfRange(format!(
            "{} milliseconds does not fit in 64 bits",
            millis
        ))
    })
}

pub fn iso8601_to_epoch_millis(input: &str) -> Result<i64, DatestampError> {
    iso8601_to_datetime(input).and_then(datetime_to_epoch_millis)
}

pub fn epoch_millis_to_rfc3339(millis: i64) -> Result<String, DatestampError> {
    let datetime = OffsetDateTime::from_unix_timestamp_nanos(
        i128::from(millis) * NANOS_PER_MILLI,
    )?;
    Ok(datetime.format(&Rfc3339)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let cases = vec![
            ("1970-01-01T00:00:00Z", 0),
            ("2012-01-01T00:00:00Z", 1325376000000),
            ("2012-03-01T00:00:00+02:00", 1330552800000),
            ("2024-02-29T12:34:56.789Z", 1709210096789),
            ("1969-12-31T23:59:59Z", -1000),
        ];
        for (input, expected) in cases {
            assert_eq!(
                iso8601_to_epoch_millis(input).unwrap(),
                expected,
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_parse_without_offset() {
        assert_eq!(
            iso8601_to_epoch_millis("2012-03-01T00:00:00").unwrap(),
            1330560000000
        );
        let cases = vec![
            ("2012-03-01", 1330560000000),
            ("20120301", 1330560000000),
            ("2012-03-01T10:00", 1330596000000),
            ("2012-03-01 10:00", 1330596000000),
            ("2012-03-01 10:00:00", 1330596000000),
            ("2012-03-01 10:00:00.250", 1330596000250),
            ("20120301T100000", 1330596000000),
        ];
        for (input, expected) in cases {
            assert_eq!(
                iso8601_to_epoch_millis(input).unwrap(),
                expected,
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_parse_invalid() {
        let invalid_cases = vec![
            "",
            "not-a-date",
            "2012-13-01T00:00:00Z",
            "2012-02-30",
            "2012-03-01T25:00:00Z",
            " 2012-03-01T00:00:00Z",
        ];
        for input in invalid_cases {
            match iso8601_to_epoch_millis(input) {
                Err(DatestampError::Parse { input: reported, .. }) => {
                    assert_eq!(reported, input)
                }
                other => panic!("'{}' unexpectedly gave {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_pre_epoch_subsecond_rounds_down() {
        // 1.5 ms before the epoch
        assert_eq!(
            iso8601_to_epoch_millis("1969-12-31T23:59:59.9985Z").unwrap(),
            -2
        );
    }

    #[test]
    fn test_epoch_millis_to_rfc3339() {
        assert_eq!(epoch_millis_to_rfc3339(0).unwrap(), "1970-01-01T00:00:00Z");
        assert_eq!(
            epoch_millis_to_rfc3339(1709210096789).unwrap(),
            "2024-02-29T12:34:56.789Z"
        );
        assert!(matches!(
            epoch_millis_to_rfc3339(i64::MAX),
            Err(DatestampError::OutOfRange(_))
        ));
    }
}
