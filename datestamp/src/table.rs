use std::fmt;
use std::io::Write;

use log::debug;

use crate::encoder::encode;
use crate::error::DatestampError;

pub const DEFAULT_YEAR: i32 = 2012;
pub const TABLE_HEADER: &str =
    "DATE                 | DECIMAL              | HEX";
pub const TABLE_RULE: &str =
    "--------------------------------------------------------------";

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub timestamp: i64,
    pub hex: String,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {:<20} | {}", self.date, self.timestamp, self.hex)
    }
}

/// First day of every month of a year, at midnight UTC.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyTable {
    year: i32,
}

impl Default for MonthlyTable {
    fn default() -> Self {
        MonthlyTable { year: DEFAULT_YEAR }
    }
}

impl MonthlyTable {
    pub fn new(year: i32) -> Result<Self, DatestampError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DatestampError::OutOfRange(format!(
                "Year {} is outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        Ok(MonthlyTable { year })
    }

    /// Lazily encodes one row per month. Each call starts a new pass.
    pub fn rows(
        &self,
    ) -> impl Iterator<Item = Result<TableRow, DatestampError>> + '_ {
        (1..=12u8).map(move |month| self.row(month))
    }

    fn row(&self, month: u8) -> Result<TableRow, DatestampError> {
        let date = format!("{:04}-{:02}-01T00:00:00Z", self.year, month);
        let encoded = encode(&date)?;
        Ok(TableRow {
            date,
            timestamp: encoded.timestamp,
            hex: encoded.hex,
        })
    }

    pub fn write_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<(), DatestampError> {
        debug!("Writing monthly table for {}", self.year);
        writeln!(out, "{}", TABLE_HEADER)?;
        writeln!(out, "{}", TABLE_RULE)?;
        for row in self.rows() {
            writeln!(out, "{}", row?)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
