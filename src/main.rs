use std::process;
use log::error;

use xyz2flh::cli::build_cli;
use xyz2flh::commands::{CommandFactory, Xyz2FlhCommandFactory};
use xyz2flh::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::init_console_logger(),
    }

    let factory = Xyz2FlhCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
