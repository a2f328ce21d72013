use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

/// Sentinel for an integer field that has not been found yet.
pub const UNSET: i32 = -1;

/// The accumulated battery facts pulled out of a log scan. One instance is
/// created per read, filled incrementally while candidate files are tried,
/// then handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryStats {
    /// First-use date as an eight-digit `YYYYMMDD` token.
    pub first_use_date: Option<String>,
    /// State of health in percent, `UNSET` when absent.
    pub health_percentage: i32,
    /// Full charge cycles, `UNSET` when absent.
    pub charge_cycles: i32,
}

impl BatteryStats {
    pub fn new() -> Self {
        BatteryStats {
            first_use_date: None,
            health_percentage: UNSET,
            charge_cycles: UNSET,
        }
    }

    /// True once at least one field has been found. This only says the scan
    /// produced something, not that it produced everything.
    pub fn is_valid(&self) -> bool {
        self.first_use_date.is_some()
            || self.health_percentage != UNSET
            || self.charge_cycles != UNSET
    }

    /// True once every field has been found. The backward history scan uses
    /// this to stop early.
    pub fn is_complete(&self) -> bool {
        self.first_use_date.is_some()
            && self.health_percentage != UNSET
            && self.charge_cycles != UNSET
    }

    /// First-use date rendered as e.g. "Jan 31, 2024". Falls back to the raw
    /// token when it does not parse as a date.
    pub fn first_use_formatted(&self) -> Option<String> {
        self.first_use_date.as_ref().map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y%m%d")
                .map(|d| d.format("%b %d, %Y").to_string())
                .unwrap_or_else(|_| raw.clone())
        })
    }

    pub fn health_band(&self) -> &'static str {
        if self.health_percentage >= 80 {
            "good"
        } else if self.health_percentage >= 70 {
            "fair"
        } else {
            "poor"
        }
    }
}

impl Default for BatteryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for BatteryStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.first_use_formatted() {
            Some(date) => writeln!(f, "First Use: {}", date)?,
            None => writeln!(f, "First Use: Not available")?,
        }
        if self.health_percentage != UNSET {
            writeln!(
                f,
                "Battery Health: {}% ({})",
                self.health_percentage,
                self.health_band()
            )?;
        } else {
            writeln!(f, "Battery Health: Not available")?;
        }
        if self.charge_cycles != UNSET {
            write!(f, "Charge Cycles: {}", self.charge_cycles)
        } else {
            write!(f, "Charge Cycles: Not available")
        }
    }
}
