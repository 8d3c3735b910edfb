use std::io::{self, Write};

use clap::ArgMatches;
use datestamp::DatestampError;
use log::{debug, error};

use super::subcommands::date::*;
use super::subcommands::table::*;

pub const PROGRAM_NAME: &str = "datestamp";
pub const TABLE_PROGRAM_NAME: &str = "datestamp-table";

pub fn run_cli(args: Vec<String>) {
    env_logger::init();
    let matches = get_matches_or_exit(date_command(), args);
    run_handler(PROGRAM_NAME, &matches, handle_date);
}

pub fn run_table_cli(args: Vec<String>) {
    env_logger::init();
    let matches = get_matches_or_exit(table_command(), args);
    run_handler(TABLE_PROGRAM_NAME, &matches, handle_table);
}

fn get_matches_or_exit(app: clap::Command, args: Vec<String>) -> ArgMatches {
    match app.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", e);
                std::process::exit(0);
            }
            _ => {
                eprintln!("Error parsing command-line arguments: {}", e);
                eprintln!("For more detailed help, try running '--help'.");
                std::process::exit(1);
            }
        },
    }
}

fn run_handler<F>(program: &str, matches: &ArgMatches, handler: F)
where
    F: FnOnce(&ArgMatches, &mut dyn Write) -> Result<(), DatestampError>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = handler(matches, &mut out).and_then(|_| Ok(out.flush()?));
    match result {
        Ok(_) => {
            debug!("{} finished", program);
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
