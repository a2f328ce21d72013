use std::path::Path;

use crate::error::ScanError;
use crate::models::battery_stats::BatteryStats;
use crate::utils::reverse_reader::ReverseLineReader;

use super::Field;

/// Read a battery_service_main_history file backward from its last byte so
/// the most recently appended value for each field wins. Fields already
/// filled are never overwritten; the scan stops once all three are present.
pub fn parse_history(path: &Path, stats: &mut BatteryStats) -> Result<bool, ScanError> {
    let reader = ReverseLineReader::open(path).map_err(|e| ScanError::io(path, e))?;
    for line in reader {
        let line = line.map_err(|e| ScanError::io(path, e))?;
        for field in Field::ALL {
            if field.is_set(stats) {
                continue;
            }
            if let Some(caps) = field.history_pattern().captures(&line) {
                field.fill_from_history(stats, caps.get(1).unwrap().as_str());
            }
        }
        if stats.is_complete() {
            break;
        }
    }
    Ok(stats.is_valid())
}
