//! Consistency check of stored access coordinates
//!
//! Each access carries both Lambert 93 coordinates and a geographic point.
//! The check converts the former and measures how far it lands from the
//! latter. Nothing is rewritten; the command only reports.

use std::path::Path;

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::config::ProjectionConfig;
use crate::coordinate::CoordinateConverter;
use crate::errors::{MetroError, MetroResult};
use crate::model::Zone;
use crate::pipeline::read_records;
use crate::utils::logger::Logger;

/// Number of worst offenders reported individually
const REPORTED_OFFENDERS: usize = 5;

/// Distance between converted and stored coordinates of one access
#[derive(Debug, Clone, PartialEq)]
pub struct AccessDeviation {
    pub zone_id: String,
    pub access_id: String,
    /// Metres
    pub distance: f64,
}

/// Result of a consistency check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsistencyReport {
    /// Accesses checked
    pub count: usize,
    /// Mean deviation in metres
    pub mean: f64,
    /// Largest deviation in metres
    pub max: f64,
    /// Accesses deviating more than the tolerance, largest first
    pub beyond_tolerance: Vec<AccessDeviation>,
    /// Accesses whose distance is not finite, excluded from mean and max
    pub unconvertible: Vec<AccessDeviation>,
}

/// Compare every access of `zones` against the converter
pub fn check_zones(converter: &CoordinateConverter, zones: &[Zone], tolerance: f64) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    let mut total = 0.0;
    let mut measured = 0usize;

    for zone in zones {
        for access in &zone.accesses {
            let (x, y) = access.projected().as_tuple();
            let converted = converter.geo_point(x, y);
            let distance = converted.distance_to(&access.geo_point);
            let deviation = AccessDeviation {
                zone_id: zone.id.clone(),
                access_id: access.id.clone(),
                distance,
            };

            report.count += 1;
            if !distance.is_finite() {
                report.unconvertible.push(deviation);
                continue;
            }

            measured += 1;
            total += distance;
            report.max = report.max.max(distance);

            if distance > tolerance {
                report.beyond_tolerance.push(deviation);
            }
        }
    }

    if measured > 0 {
        report.mean = total / measured as f64;
    }
    report
        .beyond_tolerance
        .sort_by(|a, b| b.distance.total_cmp(&a.distance));
    report
}

/// Command checking a combined station file
pub struct CheckCommand<'a> {
    input: String,
    tolerance: f64,
    converter: CoordinateConverter,
    logger: &'a Logger,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command
    pub fn new(args: &ArgMatches, config: &ProjectionConfig, logger: &'a Logger) -> MetroResult<Self> {
        let input = args
            .get_one::<String>("file")
            .cloned()
            .ok_or_else(|| MetroError::GenericError("Missing station file".to_string()))?;
        let tolerance = args.get_one::<f64>("tolerance").copied().unwrap_or(5.0);
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(MetroError::GenericError(format!("Invalid tolerance: {}", tolerance)));
        }

        Ok(CheckCommand {
            input,
            tolerance,
            converter: CoordinateConverter::from_config(config)?,
            logger,
        })
    }
}

impl<'a> Command for CheckCommand<'a> {
    fn execute(&self) -> MetroResult<()> {
        let zones: Vec<Zone> = read_records(Path::new(&self.input))?;
        info!("Checking {} stations from {}", zones.len(), self.input);

        let report = check_zones(&self.converter, &zones, self.tolerance);

        for deviation in &report.unconvertible {
            warn!(
                "Access {} of zone {} could not be compared with its stored position",
                deviation.access_id, deviation.zone_id
            );
        }

        for deviation in report.beyond_tolerance.iter().take(REPORTED_OFFENDERS) {
            warn!(
                "Access {} of zone {} is {:.2} m away from its stored position",
                deviation.access_id, deviation.zone_id, deviation.distance
            );
        }

        self.logger.log_summary(
            "Consistency Summary",
            &[
                ("File", self.input.clone()),
                ("Accesses", report.count.to_string()),
                ("Mean deviation (m)", format!("{:.3}", report.mean)),
                ("Max deviation (m)", format!("{:.3}", report.max)),
                ("Tolerance (m)", format!("{}", self.tolerance)),
                ("Beyond tolerance", report.beyond_tolerance.len().to_string()),
                ("Not comparable", report.unconvertible.len().to_string()),
            ],
        )?;

        println!(
            "{} accesses, mean {:.3} m, max {:.3} m, {} beyond {} m, {} not comparable",
            report.count,
            report.mean,
            report.max,
            report.beyond_tolerance.len(),
            self.tolerance,
            report.unconvertible.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Access, GeoPoint};

    fn station(accesses: Vec<Access>) -> Zone {
        Zone {
            id: "71264".to_string(),
            name: "Châtelet".to_string(),
            kind: Some("metroStation".to_string()),
            town: "Paris".to_string(),
            postal_region: "75101".to_string(),
            x_lambert_93: 651900,
            y_lambert_93: 6862000,
            accesses,
            lines: Vec::new(),
        }
    }

    fn access(id: &str, x: i64, y: i64, geo_point: GeoPoint) -> Access {
        Access {
            id: id.to_string(),
            name: format!("Access {}", id),
            short_name: None,
            x_lambert_93: x,
            y_lambert_93: y,
            geo_point,
        }
    }

    #[test]
    fn test_consistent_access_within_tolerance() {
        let converter = CoordinateConverter::lambert93().unwrap();
        let geo_point = converter.geo_point(652469.0, 6862035.0);
        let zones = vec![station(vec![access("a", 652469, 6862035, geo_point)])];

        let report = check_zones(&converter, &zones, 1.0);
        assert_eq!(report.count, 1);
        assert!(report.max < 1e-6);
        assert!(report.beyond_tolerance.is_empty());
    }

    #[test]
    fn test_offenders_sorted_largest_first() {
        let converter = CoordinateConverter::lambert93().unwrap();
        let near = converter.geo_point(652469.0, 6862035.0);
        let zones = vec![station(vec![
            access("near", 652469, 6862035, near),
            access("far", 652569, 6862035, near),
            access("farther", 653469, 6862035, near),
        ])];

        let report = check_zones(&converter, &zones, 5.0);
        assert_eq!(report.count, 3);
        let ids: Vec<&str> = report.beyond_tolerance.iter().map(|d| d.access_id.as_str()).collect();
        assert_eq!(ids, vec!["farther", "far"]);
        assert!((report.beyond_tolerance[1].distance - 100.0).abs() < 1.0);
        assert!((report.max - 1000.0).abs() < 5.0);
    }

    #[test]
    fn test_non_finite_distance_reported_separately() {
        let converter = CoordinateConverter::lambert93().unwrap();
        let near = converter.geo_point(652469.0, 6862035.0);
        let zones = vec![station(vec![
            access("near", 652469, 6862035, near),
            access("broken", 652469, 6862035, GeoPoint::new(f64::NAN, f64::NAN)),
        ])];

        let report = check_zones(&converter, &zones, 5.0);
        assert_eq!(report.count, 2);
        assert_eq!(report.unconvertible.len(), 1);
        assert_eq!(report.unconvertible[0].access_id, "broken");
        assert!(report.beyond_tolerance.is_empty());
        assert!(report.mean.is_finite() && report.mean < 1e-6);
        assert!(report.max < 1e-6);
    }

    #[test]
    fn test_empty_input() {
        let converter = CoordinateConverter::lambert93().unwrap();
        let report = check_zones(&converter, &[station(Vec::new())], 5.0);
        assert_eq!(report, ConsistencyReport::default());
    }
}
