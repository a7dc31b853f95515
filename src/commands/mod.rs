//! CLI command implementations
//!
//! This module contains implementations of the transformation commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod options;
pub mod forward_command;
pub mod inverse_command;

pub use command_traits::{Command, CommandFactory};
pub use options::TransformOptions;
pub use forward_command::ForwardCommand;
pub use inverse_command::InverseCommand;

use clap::ArgMatches;
use crate::errors::GeoResult;

/// Factory for creating command instances based on CLI arguments
pub struct Xyz2FlhCommandFactory;

impl Xyz2FlhCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        Xyz2FlhCommandFactory
    }
}

impl Default for Xyz2FlhCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for Xyz2FlhCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> GeoResult<Box<dyn Command>> {
        let options = TransformOptions::from_args(args)?;

        if options.inverse {
            Ok(Box::new(InverseCommand::new(options)))
        } else {
            Ok(Box::new(ForwardCommand::new(options)))
        }
    }
}
