use std::io;
use std::process;

use bikeshare_explorer::config::{Cli, Settings};
use bikeshare_explorer::session::Session;
use bikeshare_explorer::ExplorerError;
use clap::Parser;

fn main() {
    let settings = Settings::from(Cli::parse());

    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .init();

    let mut session = Session::new(&settings, io::stdin().lock(), io::stdout().lock());
    match session.run() {
        Ok(()) => {}
        Err(ExplorerError::InputClosed) => {
            eprintln!("\nInput closed. Goodbye!");
        }
        Err(e) => {
            eprintln!("\nERROR: {e}");
            process::exit(1);
        }
    }
}
