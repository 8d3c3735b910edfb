use std::io::Write;

use datestamp::{DatestampError, MonthlyTable};

pub fn handle_table(
    table_matches: &clap::ArgMatches,
    out: &mut dyn Write,
) -> Result<(), DatestampError> {
    let table = match table_matches.get_one::<i32>("year") {
        Some(year) => MonthlyTable::new(*year)?,
        None => MonthlyTable::default(),
    };
    table.write_to(out)
}
