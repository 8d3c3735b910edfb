pub mod time_parse_ext;
pub mod timestamp;
