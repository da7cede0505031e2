//! Data preparation command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{MetroError, MetroResult};
use crate::pipeline::DataPipeline;
use crate::utils::logger::Logger;

/// Command running the metro data pipeline
pub struct BuildCommand<'a> {
    source_dir: String,
    output_dir: String,
    logger: &'a Logger,
}

impl<'a> BuildCommand<'a> {
    /// Create a new build command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MetroResult<Self> {
        let dir = |name: &str| {
            args.get_one::<String>(name)
                .cloned()
                .ok_or_else(|| MetroError::GenericError(format!("Missing --{}", name)))
        };

        Ok(BuildCommand {
            source_dir: dir("source")?,
            output_dir: dir("output")?,
            logger,
        })
    }
}

impl<'a> Command for BuildCommand<'a> {
    fn execute(&self) -> MetroResult<()> {
        info!("Building metro data from {} into {}", self.source_dir, self.output_dir);

        let pipeline = DataPipeline::new(&self.source_dir, &self.output_dir, self.logger);
        let report = pipeline.run()?;

        self.logger.log_summary(
            "Build Summary",
            &[
                ("Removed files", report.removed_files.to_string()),
                ("Zones", report.zones.to_string()),
                ("Accesses", report.accesses.to_string()),
                ("Zone/access relationships", report.zone_access_relationships.to_string()),
                ("Zone/line relationships", report.zone_line_relationships.to_string()),
                ("Metro stations", report.metro_stations.to_string()),
            ],
        )?;

        println!(
            "{} metro stations written to {}",
            report.metro_stations,
            pipeline.output_dir().display()
        );
        Ok(())
    }
}
