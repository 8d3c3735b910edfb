mod parser;
mod subcommands;

pub use parser::{run_cli, run_table_cli};
