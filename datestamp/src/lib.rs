pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod table;
pub(crate) mod utils;

pub use encoder::{encode, EncodedTimestamp};
pub use error::DatestampError;
pub use table::{
    MonthlyTable, TableRow, DEFAULT_YEAR, TABLE_HEADER, TABLE_RULE,
};
pub use utils::timestamp::Timestamp;
