//! The "Bank CLI" app's entry point.

use bank_cli::logic::{get_directory, main_loop};
use std::env;
use std::error::Error;
use std::process;

/// The "Bank CLI" app's entry point.
///
/// Takes an optional path to a JSON directory of customers;
/// the built-in directory is used without it.
fn main() -> Result<(), Box<dyn Error>> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "bank_cli=warn,bank_common=warn");
    }
    pretty_env_logger::init();

    let mut directory = match get_directory(env::args().nth(1)) {
        Ok(directory) => directory,
        Err(err) => {
            log::error!("Failed to build the customer directory: {:?}", err);
            eprintln!("[ERROR] {}", err);
            process::exit(1);
        }
    };

    main_loop(&mut directory)?;

    Ok(())
}
