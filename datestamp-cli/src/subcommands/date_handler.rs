use std::io::Write;

use datestamp::{encode, DatestampError, EncodedTimestamp, Timestamp};
use log::debug;

use crate::parser::PROGRAM_NAME;

pub fn handle_date(
    date_matches: &clap::ArgMatches,
    out: &mut dyn Write,
) -> Result<(), DatestampError> {
    if let Some(hex_str) = date_matches.get_one::<String>("decode") {
        return handle_decode(hex_str, out);
    }

    if *date_matches.get_one::<bool>("now").unwrap_or(&false) {
        let now = Timestamp::from_system_time()?;
        debug!("Current time is {}", now.timestamp);
        return EncodedTimestamp::from_timestamp(now).write_to(out);
    }

    match date_matches.get_one::<String>("date") {
        Some(date) => encode(date)?.write_to(out),
        None => {
            // missing date is not an error, only a hint
            writeln!(out, "usage: {} [ISO8601_DATE]", PROGRAM_NAME)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn handle_decode(
    hex_str: &str,
    out: &mut dyn Write,
) -> Result<(), DatestampError> {
    let timestamp = Timestamp::from_le_hex(hex_str)?;
    writeln!(out, "TIMESTAMP: {}", timestamp.timestamp)?;
    writeln!(out, "DATE:      {}", timestamp.to_rfc3339()?)?;
    writeln!(out)?;
    Ok(())
}
