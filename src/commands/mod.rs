//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod build_command;
pub mod check_command;
pub mod command_traits;
pub mod convert_command;

pub use build_command::BuildCommand;
pub use check_command::{check_zones, CheckCommand, ConsistencyReport};
pub use command_traits::{Command, CommandFactory};
pub use convert_command::{ConvertCommand, Direction, TransformCommand};

use clap::ArgMatches;
use log::debug;

use crate::config::ProjectionConfig;
use crate::errors::{MetroError, MetroResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct MetroCommandFactory;

impl MetroCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MetroCommandFactory
    }

    /// Configuration named by `--config`, or the built-in one
    fn load_config(args: &ArgMatches) -> MetroResult<ProjectionConfig> {
        match args.get_one::<String>("config") {
            Some(path) => {
                debug!("Loading coordinate systems from {}", path);
                ProjectionConfig::from_file(path)
            }
            None => Ok(ProjectionConfig::builtin().clone()),
        }
    }
}

impl Default for MetroCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for MetroCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MetroResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("to-geographic", sub)) => {
                let config = Self::load_config(args)?;
                Ok(Box::new(ConvertCommand::new(sub, Direction::ToGeographic, &config, logger)?))
            }
            Some(("to-projected", sub)) => {
                let config = Self::load_config(args)?;
                Ok(Box::new(ConvertCommand::new(sub, Direction::ToProjected, &config, logger)?))
            }
            Some(("transform", sub)) => {
                let config = Self::load_config(args)?;
                Ok(Box::new(TransformCommand::new(sub, &config, logger)?))
            }
            Some(("build", sub)) => Ok(Box::new(BuildCommand::new(sub, logger)?)),
            Some(("check", sub)) => {
                let config = Self::load_config(args)?;
                Ok(Box::new(CheckCommand::new(sub, &config, logger)?))
            }
            Some((name, _)) => Err(MetroError::GenericError(format!("Unknown command: {}", name))),
            None => Err(MetroError::GenericError("No command given".to_string())),
        }
    }
}
