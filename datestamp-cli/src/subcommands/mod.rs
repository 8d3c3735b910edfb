pub mod date;
mod date_handler;
pub mod table;
mod table_handler;
