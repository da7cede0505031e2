//! Assembling metro stations from the normalized files

use std::collections::HashMap;

use log::{debug, warn};

use crate::errors::{MetroError, MetroResult};
use crate::model::{Access, Line, Zone, ZoneAccessRelationship, ZoneLineRelationship};

/// Group accesses by zone, following relationship order
///
/// Each relationship resolves to the first access with the referenced id.
pub fn accesses_by_zone(
    accesses: &[Access],
    relationships: &[ZoneAccessRelationship],
) -> MetroResult<HashMap<String, Vec<Access>>> {
    let mut by_id: HashMap<&str, &Access> = HashMap::with_capacity(accesses.len());
    for access in accesses {
        by_id.entry(access.id.as_str()).or_insert(access);
    }

    let mut grouped: HashMap<String, Vec<Access>> = HashMap::new();
    for rel in relationships {
        let access = by_id.get(rel.access_id.as_str()).ok_or_else(|| MetroError::MissingAccess {
            zone_id: rel.zone_id.clone(),
            access_id: rel.access_id.clone(),
        })?;
        grouped.entry(rel.zone_id.clone()).or_default().push((*access).clone());
    }

    Ok(grouped)
}

/// Group metro lines by zone
///
/// Non-metro relationships are skipped. A line is built from the first
/// relationship that mentions it and shared by every zone it serves.
pub fn lines_by_zone(relationships: &[ZoneLineRelationship]) -> HashMap<String, Vec<Line>> {
    let mut lines: HashMap<&str, Line> = HashMap::new();
    let mut grouped: HashMap<String, Vec<Line>> = HashMap::new();

    for rel in relationships.iter().filter(|r| r.is_metro()) {
        let line = lines.entry(rel.line_id.as_str()).or_insert_with(|| Line {
            id: rel.line_id.clone(),
            name: rel.line_name.clone(),
            icon_url: rel.line_icon_url.clone(),
            color: None,
        });
        grouped.entry(rel.zone_id.clone()).or_default().push(line.clone());
    }

    debug!("{} distinct metro lines", lines.len());
    grouped
}

/// Keep metro stations and attach their accesses and lines
pub fn combine(
    zones: Vec<Zone>,
    accesses: &[Access],
    access_relationships: &[ZoneAccessRelationship],
    line_relationships: &[ZoneLineRelationship],
) -> MetroResult<Vec<Zone>> {
    let accesses_by_zone = accesses_by_zone(accesses, access_relationships)?;
    let lines_by_zone = lines_by_zone(line_relationships);

    let stations: Vec<Zone> = zones.into_iter().filter(Zone::is_metro_station).collect();
    let mut combined = Vec::with_capacity(stations.len());
    for mut zone in stations {
        zone.accesses = accesses_by_zone.get(&zone.id).cloned().unwrap_or_default();
        zone.lines = lines_by_zone.get(&zone.id).cloned().unwrap_or_default();
        if zone.lines.is_empty() {
            warn!("Metro station {} ({}) has no metro line", zone.name, zone.id);
        }
        combined.push(zone);
    }

    Ok(combined)
}
