use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::ScanError;
use crate::models::battery_stats::{BatteryStats, UNSET};

pub mod discovery;
pub mod dumpstate;
pub mod extract;
pub mod history;

lazy_static! {
    // # [SS][BattInfo]FirstUseDateData saveInfoHistory    efsValue:20230501
    static ref HISTORY_FIRST_USE: Regex =
        Regex::new(r"# \[SS]\[BattInfo]FirstUseDateData saveInfoHistory\s+efsValue:(\d+)").unwrap();
    static ref HISTORY_ASOC: Regex =
        Regex::new(r"# \[SS]\[BattInfo]AsocData saveInfoHistory\s+efsValue:(\d+)").unwrap();
    static ref HISTORY_DISCHARGE: Regex =
        Regex::new(r"# \[SS]\[BattInfo]DischargeLevelData saveInfoHistory\s+efsValue:(\d+)").unwrap();
    static ref EIGHT_DIGIT_DATE: Regex = Regex::new(r"^\d{8}$").unwrap();
}

/// One extractable battery fact. Carries the markers for both log grammars
/// and the fill rules, so the two parsers share a single fill path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstUseDate,
    Health,
    ChargeCycles,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstUseDate, Field::Health, Field::ChargeCycles];

    /// Label the dumpState grammar prints in front of the value.
    pub fn dump_marker(self) -> &'static str {
        match self {
            Field::FirstUseDate => "battery FirstUseDate:",
            Field::Health => "mSavedBatteryAsoc:",
            Field::ChargeCycles => "mSavedBatteryUsage:",
        }
    }

    /// Line pattern in the battery_service history grammar.
    pub fn history_pattern(self) -> &'static Regex {
        match self {
            Field::FirstUseDate => &HISTORY_FIRST_USE,
            Field::Health => &HISTORY_ASOC,
            Field::ChargeCycles => &HISTORY_DISCHARGE,
        }
    }

    pub fn is_set(self, stats: &BatteryStats) -> bool {
        match self {
            Field::FirstUseDate => stats.first_use_date.is_some(),
            Field::Health => stats.health_percentage != UNSET,
            Field::ChargeCycles => stats.charge_cycles != UNSET,
        }
    }

    /// Fill from a history-log capture group. The group is all digits by
    /// construction, so the date token is stored without a shape check here.
    /// The raw discharge counter encodes hundredths of a cycle.
    pub fn fill_from_history(self, stats: &mut BatteryStats, digits: &str) {
        match self {
            Field::FirstUseDate => stats.first_use_date = Some(digits.to_string()),
            Field::Health => {
                if let Ok(v) = digits.parse::<i32>() {
                    stats.health_percentage = v;
                }
            }
            Field::ChargeCycles => {
                if let Ok(v) = digits.parse::<i32>() {
                    stats.charge_cycles = v / 100;
                }
            }
        }
    }

    /// Fill from a dumpState extraction. The date must be exactly eight
    /// digits or it is discarded; integers that fail to parse leave the
    /// field unset.
    pub fn fill_from_dump(self, stats: &mut BatteryStats, raw: &str) {
        match self {
            Field::FirstUseDate => {
                if EIGHT_DIGIT_DATE.is_match(raw) {
                    stats.first_use_date = Some(raw.to_string());
                }
            }
            Field::Health => {
                if let Ok(v) = raw.parse::<i32>() {
                    stats.health_percentage = v;
                }
            }
            Field::ChargeCycles => {
                if let Ok(v) = raw.parse::<i32>() {
                    stats.charge_cycles = v / 100;
                }
            }
        }
    }
}

/// A candidate log file tagged with the grammar used to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    History(PathBuf),
    DumpState(PathBuf),
}

impl LogSource {
    pub fn path(&self) -> &Path {
        match self {
            LogSource::History(p) | LogSource::DumpState(p) => p,
        }
    }

    /// Run this source's parser over the shared record. Returns whether the
    /// record is valid afterwards.
    pub fn try_parse(&self, stats: &mut BatteryStats) -> Result<bool, ScanError> {
        match self {
            LogSource::History(path) => history::parse_history(path, stats),
            LogSource::DumpState(path) => dumpstate::parse_dumpstate(path, stats),
        }
    }
}

/// Candidate order: the history file when present, then dumpState snapshots
/// newest first. A missing history file is not an error, just no candidate.
pub fn candidate_sources(base: &Path) -> Vec<LogSource> {
    let mut sources = Vec::new();
    let history = discovery::history_path(base);
    if history.exists() {
        sources.push(LogSource::History(history));
    }
    for path in discovery::dump_state_candidates(base) {
        sources.push(LogSource::DumpState(path));
    }
    sources
}

/// Scan a log directory for battery facts, stopping at the first candidate
/// that leaves the record valid. Unreadable candidates are logged and
/// skipped; the caller only sees the accumulated record.
pub fn scan_log_dir(base: &Path) -> BatteryStats {
    let mut stats = BatteryStats::new();
    for source in candidate_sources(base) {
        match source.try_parse(&mut stats) {
            Ok(true) => {
                debug!("{} produced a valid record", source.path().display());
                return stats;
            }
            Ok(false) => debug!("no battery fields in {}", source.path().display()),
            Err(e) => warn!("skipping candidate: {}", e),
        }
    }
    stats
}
