mod launcher;
mod utils;

use std::process;

use launcher_core::utils::log_error;

fn main() {
    utils::logger::init_logger();

    match launcher::run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            log_error(&format!("getapi: {e}"));
            process::exit(1);
        }
    }
}
