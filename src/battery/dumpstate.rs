use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ScanError;
use crate::models::battery_stats::BatteryStats;

use super::extract::extract_field;
use super::Field;

/// Forward scan of one dumpState snapshot, streaming line by line. First
/// occurrence wins within the file, and fields already filled by an earlier
/// candidate are left alone.
pub fn parse_dumpstate(path: &Path, stats: &mut BatteryStats) -> Result<bool, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.map_err(|e| ScanError::io(path, e))?;
        for field in Field::ALL {
            if field.is_set(stats) {
                continue;
            }
            if let Some(raw) = extract_field(&line, field.dump_marker()) {
                field.fill_from_dump(stats, &raw);
            }
        }
    }
    Ok(stats.is_valid())
}
