use clap::{value_parser, Arg, Command};

pub use super::table_handler::handle_table;
use crate::parser::TABLE_PROGRAM_NAME;

pub fn table_command() -> Command {
    Command::new(TABLE_PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Tabulate the first day of each month of a year as ISO 8601, \
             decimal and hex timestamps",
        )
        .arg(
            Arg::new("year")
                .long("year")
                .short('y')
                .num_args(1)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(i32))
                .help("Year to tabulate [default: 2012]"),
        )
}
