use clap::{Arg, ArgAction, Command};

pub use super::date_handler::handle_date;
use crate::parser::PROGRAM_NAME;

pub fn date_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Convert an ISO 8601 date to a millisecond epoch timestamp and \
             its little-endian bytes",
        )
        .arg(
            Arg::new("date")
                .index(1)
                .help("ISO 8601 date. E.g. '2012-03-01T00:00:00Z'"),
        )
        .arg(
            Arg::new("decode")
                .long("decode")
                .short('d')
                .num_args(1)
                .conflicts_with_all(["date", "now"])
                .help(
                    "Decode 16 hex digits of little-endian bytes back to a \
                     timestamp. E.g. '00608ecb35010000'",
                ),
        )
        .arg(
            Arg::new("now")
                .long("now")
                .short('n')
                .action(ArgAction::SetTrue)
                .conflicts_with("date")
                .help("Encode the current time [default: false]"),
        )
}
