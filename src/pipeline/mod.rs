//! Metro data preparation
//!
//! Normalizes the raw open-data exports (stop areas, accesses and their
//! relationships to zones and lines) into clean JSON files, then combines
//! them into a single list of metro stations.

mod combine;
mod json_io;

pub use self::combine::{accesses_by_zone, combine, lines_by_zone};
pub use self::json_io::{read_records, write_records};

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{MetroError, MetroResult};
use crate::model::{Access, Zone, ZoneAccessRelationship, ZoneLineRelationship};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Raw export of stop areas
pub const ZONES_SOURCE: &str = "zones-d-arrets.json";
/// Raw export of accesses
pub const ACCESSES_SOURCE: &str = "acces.json";
/// Raw export of zone/access relationships
pub const ZONE_ACCESS_SOURCE: &str = "relations-acces.json";
/// Raw export of stations and the lines serving them
pub const ZONE_LINE_SOURCE: &str = "emplacement-des-gares-idf.json";

pub const ZONES_FILE: &str = "zones.json";
pub const ACCESSES_FILE: &str = "accesses.json";
pub const ZONE_ACCESS_FILE: &str = "zones_accesses_rel.json";
pub const ZONE_LINE_FILE: &str = "zones_lines_rel.json";
/// Final output: metro stations with accesses and lines
pub const METRO_ZONES_FILE: &str = "zones_metro.json";

/// Clean, four normalizations, combine
const PIPELINE_STEPS: u64 = 6;

/// Record counts of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub removed_files: usize,
    pub zones: usize,
    pub accesses: usize,
    pub zone_access_relationships: usize,
    pub zone_line_relationships: usize,
    pub metro_stations: usize,
}

/// Runs the preparation steps between a source and an output directory
pub struct DataPipeline<'a> {
    source_dir: PathBuf,
    output_dir: PathBuf,
    logger: &'a Logger,
}

impl<'a> DataPipeline<'a> {
    /// Create a pipeline reading raw exports from `source_dir` and writing
    /// generated files to `output_dir`
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, output_dir: Q, logger: &'a Logger) -> Self {
        DataPipeline {
            source_dir: source_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            logger,
        }
    }

    /// Run every step: clean, normalize the four exports, combine
    pub fn run(&self) -> MetroResult<PipelineReport> {
        let progress = ProgressTracker::new(PIPELINE_STEPS, "Building metro data");

        progress.start_step("clean");
        let mut report = PipelineReport {
            removed_files: self.clean()?,
            ..PipelineReport::default()
        };
        progress.complete_step();

        progress.start_step(ZONES_SOURCE);
        report.zones = self.normalize::<Zone>(ZONES_SOURCE, ZONES_FILE)?;
        progress.complete_step();

        progress.start_step(ACCESSES_SOURCE);
        report.accesses = self.normalize::<Access>(ACCESSES_SOURCE, ACCESSES_FILE)?;
        progress.complete_step();

        progress.start_step(ZONE_ACCESS_SOURCE);
        report.zone_access_relationships =
            self.normalize::<ZoneAccessRelationship>(ZONE_ACCESS_SOURCE, ZONE_ACCESS_FILE)?;
        progress.complete_step();

        progress.start_step(ZONE_LINE_SOURCE);
        report.zone_line_relationships =
            self.normalize::<ZoneLineRelationship>(ZONE_LINE_SOURCE, ZONE_LINE_FILE)?;
        progress.complete_step();

        progress.start_step(METRO_ZONES_FILE);
        report.metro_stations = self.combine()?.len();
        progress.finish(&format!("{} metro stations", report.metro_stations));

        self.logger.log(&format!("Pipeline finished: {:?}", report))?;
        Ok(report)
    }

    /// Fail when both directories resolve to the same place
    ///
    /// Cleaning would otherwise delete the raw exports.
    fn ensure_separate_dirs(&self) -> MetroResult<()> {
        match (fs::canonicalize(&self.source_dir), fs::canonicalize(&self.output_dir)) {
            (Ok(source), Ok(output)) if source == output => Err(MetroError::GenericError(format!(
                "Output directory {} is the source directory; refusing to delete its JSON files",
                self.output_dir.display()
            ))),
            _ => Ok(()),
        }
    }

    /// Delete generated JSON files, creating the output directory if needed
    pub fn clean(&self) -> MetroResult<usize> {
        self.ensure_separate_dirs()?;
        fs::create_dir_all(&self.output_dir)?;

        let mut removed = 0;
        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                fs::remove_file(&path)?;
                debug!("Removed {}", path.display());
                removed += 1;
            }
        }

        info!("Cleaned {} generated files in {}", removed, self.output_dir.display());
        Ok(removed)
    }

    /// Read a raw export and write it back with clean field names
    pub fn normalize<T>(&self, source_name: &str, target_name: &str) -> MetroResult<usize>
    where
        T: DeserializeOwned + Serialize,
    {
        let records: Vec<T> = read_records(&self.source_dir.join(source_name))?;
        write_records(&self.output_dir.join(target_name), &records)?;

        info!("Normalized {} records: {} -> {}", records.len(), source_name, target_name);
        self.logger.log(&format!("{} -> {}: {} records", source_name, target_name, records.len()))?;
        Ok(records.len())
    }

    /// Combine the normalized files into the metro station list
    pub fn combine(&self) -> MetroResult<Vec<Zone>> {
        let accesses: Vec<Access> = read_records(&self.output_dir.join(ACCESSES_FILE))?;
        let zones: Vec<Zone> = read_records(&self.output_dir.join(ZONES_FILE))?;
        let access_relationships: Vec<ZoneAccessRelationship> =
            read_records(&self.output_dir.join(ZONE_ACCESS_FILE))?;
        let line_relationships: Vec<ZoneLineRelationship> =
            read_records(&self.output_dir.join(ZONE_LINE_FILE))?;

        let stations = combine(zones, &accesses, &access_relationships, &line_relationships)?;
        write_records(&self.output_dir.join(METRO_ZONES_FILE), &stations)?;

        info!("Wrote {} metro stations to {}", stations.len(), METRO_ZONES_FILE);
        Ok(stations)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
