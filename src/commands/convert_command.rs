//! Single point conversion commands
//!
//! `to-geographic` and `to-projected` go through the coordinate converter
//! and print latitude first or x first respectively. `transform` talks to
//! the registry directly and prints coordinates in engine order.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::config::ProjectionConfig;
use crate::coordinate::{CoordinateConverter, CoordinateSystemFactory, ProjectedPoint};
use crate::errors::{MetroError, MetroResult};
use crate::projection::CrsRegistry;
use crate::utils::logger::Logger;

/// Which way a [`ConvertCommand`] converts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Projected (x, y) to (latitude, longitude)
    ToGeographic,
    /// (latitude, longitude) to projected (x, y)
    ToProjected,
}

/// Read a required numeric positional argument
pub(crate) fn coordinate_arg(args: &ArgMatches, name: &str) -> MetroResult<f64> {
    args.get_one::<f64>(name)
        .copied()
        .ok_or_else(|| MetroError::GenericError(format!("Missing coordinate {}", name)))
}

/// Command converting one point with the configured converter
pub struct ConvertCommand<'a> {
    direction: Direction,
    /// x or latitude
    first: f64,
    /// y or longitude
    second: f64,
    converter: CoordinateConverter,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `direction` - Conversion direction
    /// * `config` - Coordinate systems to convert between
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, direction: Direction, config: &ProjectionConfig, logger: &'a Logger) -> MetroResult<Self> {
        let (first, second) = match direction {
            Direction::ToGeographic => (coordinate_arg(args, "x")?, coordinate_arg(args, "y")?),
            Direction::ToProjected => (coordinate_arg(args, "lat")?, coordinate_arg(args, "lon")?),
        };

        Ok(ConvertCommand {
            direction,
            first,
            second,
            converter: CoordinateConverter::from_config(config)?,
            logger,
        })
    }

    /// Converted coordinates in output order
    pub fn result(&self) -> (f64, f64) {
        match self.direction {
            Direction::ToGeographic => self.converter.to_geographic(self.first, self.second),
            Direction::ToProjected => self.converter.to_projected(self.first, self.second),
        }
    }

    /// Printed form of the result: `lat,lon` or `x,y`
    pub fn render(&self) -> String {
        let (a, b) = self.result();
        match self.direction {
            Direction::ToGeographic => format!("{},{}", a, b),
            Direction::ToProjected => ProjectedPoint::from((a, b)).to_string(),
        }
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> MetroResult<()> {
        let (a, b) = self.result();
        debug!("{:?} ({}, {}) -> ({}, {})", self.direction, self.first, self.second, a, b);

        let rendered = self.render();
        println!("{}", rendered);
        self.logger.log(&format!("{:?}: {},{} -> {}", self.direction, self.first, self.second, rendered))?;
        Ok(())
    }
}

/// Command transforming one point between any two registered systems
pub struct TransformCommand<'a> {
    source: String,
    target: String,
    point: (f64, f64),
    registry: CrsRegistry,
    logger: &'a Logger,
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command
    ///
    /// `--from` and `--to` accept `EPSG:nnnn`, a bare EPSG code or any
    /// identifier defined in the configuration.
    pub fn new(args: &ArgMatches, config: &ProjectionConfig, logger: &'a Logger) -> MetroResult<Self> {
        let source = Self::resolve_identifier(args, "from")?;
        let target = Self::resolve_identifier(args, "to")?;
        let point = (coordinate_arg(args, "a")?, coordinate_arg(args, "b")?);

        let registry = config.registry()?;
        for id in [&source, &target] {
            if !registry.contains(id) {
                return Err(MetroError::UnknownCrs(format!(
                    "{} (known: {})",
                    id,
                    registry.identifiers().join(", ")
                )));
            }
        }

        info!("Transforming from {} to {}", source, target);

        Ok(TransformCommand {
            source,
            target,
            point,
            registry,
            logger,
        })
    }

    fn resolve_identifier(args: &ArgMatches, name: &str) -> MetroResult<String> {
        let raw = args
            .get_one::<String>(name)
            .ok_or_else(|| MetroError::GenericError(format!("Missing --{}", name)))?;

        Ok(match CoordinateSystemFactory::from_string(raw) {
            Ok(crs) => {
                debug!("--{} resolved to {}", name, crs.description());
                crs.identifier()
            }
            Err(_) => raw.trim().to_string(),
        })
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn execute(&self) -> MetroResult<()> {
        let (a, b) = self.registry.transform(&self.source, &self.target, self.point)?;

        println!("{},{}", a, b);
        self.logger.log(&format!(
            "{} -> {}: {},{} -> {},{}",
            self.source, self.target, self.point.0, self.point.1, a, b
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{value_parser, Arg};

    fn matches(first: &'static str, second: &'static str, values: [&str; 2]) -> ArgMatches {
        clap::Command::new("convert")
            .arg(Arg::new(first).allow_negative_numbers(true).value_parser(value_parser!(f64)).index(1))
            .arg(Arg::new(second).allow_negative_numbers(true).value_parser(value_parser!(f64)).index(2))
            .get_matches_from(["convert", values[0], values[1]])
    }

    #[test]
    fn test_to_geographic_prints_latitude_first() {
        let logger = Logger::disabled();
        let args = matches("x", "y", ["700000", "6600000"]);
        let command = ConvertCommand::new(&args, Direction::ToGeographic, ProjectionConfig::builtin(), &logger).unwrap();

        let (lat, lon) = command.result();
        assert!((lat - 46.5).abs() < 1e-9 && (lon - 3.0).abs() < 1e-9);
        assert_eq!(command.render(), format!("{},{}", lat, lon));
    }

    #[test]
    fn test_to_projected_prints_x_first() {
        let logger = Logger::disabled();
        let args = matches("lat", "lon", ["46.5", "3"]);
        let command = ConvertCommand::new(&args, Direction::ToProjected, ProjectionConfig::builtin(), &logger).unwrap();

        let (x, y) = command.result();
        assert!((x - 700000.0).abs() < 1e-6 && (y - 6600000.0).abs() < 1e-6);
        assert_eq!(command.render(), ProjectedPoint::new(x, y).to_string());
    }
}
