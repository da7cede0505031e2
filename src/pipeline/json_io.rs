//! JSON file helpers

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::errors::{MetroError, MetroResult};

/// Read a JSON array of records
pub fn read_records<T: DeserializeOwned>(path: &Path) -> MetroResult<Vec<T>> {
    let file = File::open(path).map_err(|e| {
        MetroError::GenericError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let records: Vec<T> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        MetroError::GenericError(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records as JSON indented with four spaces
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> MetroResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;
    writer.flush()?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
