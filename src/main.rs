use std::process;
use clap::Parser;
use dotenv::dotenv;

use find_active_server::{Opts, run};

fn main() {
    env_logger::init();
    // load any .env file, to allow FIND_ACTIVE_HOSTS and friends to be set there.
    dotenv().ok();
    let options = Opts::parse();

    match run(&options) {
        Ok(exit_status) => process::exit(exit_status),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(4);
        }
    }
}
