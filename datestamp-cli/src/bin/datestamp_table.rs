use std::env;

use datestamp_cli::run_table_cli;

fn main() {
    let args: Vec<String> = env::args().collect();
    run_table_cli(args);
}
