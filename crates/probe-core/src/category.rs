use crate::error::{ProbeError, Result};
use std::fmt;
use std::str::FromStr;

// ── SensorCategory ────────────────────────────────────────────────────────────

/// The closed set of sensor categories the probe knows how to classify.
///
/// This is an engineer-curated list, not the set of categories a given
/// report happens to contain: a valid category can legitimately be absent
/// from a report, and a report can carry a category outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorCategory {
    Battery,
    Current,
    Intrusion,
    Memory,
    Power,
    Temperature,
    Fan,
    Performance,
    Processor,
    Redundancy,
    SystemPerformance,
    Voltage,
}

/// Every recognised category, in declaration order.
pub const ALL_CATEGORIES: [SensorCategory; 12] = [
    SensorCategory::Battery,
    SensorCategory::Current,
    SensorCategory::Intrusion,
    SensorCategory::Memory,
    SensorCategory::Power,
    SensorCategory::Temperature,
    SensorCategory::Fan,
    SensorCategory::Performance,
    SensorCategory::Processor,
    SensorCategory::Redundancy,
    SensorCategory::SystemPerformance,
    SensorCategory::Voltage,
];

impl FromStr for SensorCategory {
    type Err = ProbeError;

    /// Case-insensitive construction from the `--sensortype` value.
    ///
    /// Returns [`ProbeError::UnknownScope`] for unrecognised strings.
    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "battery" => Ok(SensorCategory::Battery),
            "current" => Ok(SensorCategory::Current),
            "intrusion" => Ok(SensorCategory::Intrusion),
            "memory" => Ok(SensorCategory::Memory),
            "power" => Ok(SensorCategory::Power),
            "temperature" => Ok(SensorCategory::Temperature),
            "fan" => Ok(SensorCategory::Fan),
            "performance" => Ok(SensorCategory::Performance),
            "processor" => Ok(SensorCategory::Processor),
            "redundancy" => Ok(SensorCategory::Redundancy),
            "system_performance" => Ok(SensorCategory::SystemPerformance),
            "voltage" => Ok(SensorCategory::Voltage),
            other => Err(ProbeError::UnknownScope(other.to_string())),
        }
    }
}

impl SensorCategory {
    /// The canonical lowercase identifier, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorCategory::Battery => "battery",
            SensorCategory::Current => "current",
            SensorCategory::Intrusion => "intrusion",
            SensorCategory::Memory => "memory",
            SensorCategory::Power => "power",
            SensorCategory::Temperature => "temperature",
            SensorCategory::Fan => "fan",
            SensorCategory::Performance => "performance",
            SensorCategory::Processor => "processor",
            SensorCategory::Redundancy => "redundancy",
            SensorCategory::SystemPerformance => "system_performance",
            SensorCategory::Voltage => "voltage",
        }
    }

    /// The normalised inventory key this category appears under in a parsed
    /// report, e.g. `SYSTEM_PERFORMANCE`.
    pub fn inventory_key(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Map a normalised inventory key back to a category, if it is one of
    /// the recognised set.
    pub fn from_inventory_key(key: &str) -> Option<SensorCategory> {
        key.parse().ok()
    }

    /// The classification rule applied to this category's sensors.
    ///
    /// Total over the enum: every recognised category has exactly one rule.
    pub fn rule(&self) -> RuleKind {
        match self {
            SensorCategory::Redundancy => RuleKind::Redundancy,
            SensorCategory::Power => RuleKind::Power,
            SensorCategory::Memory => RuleKind::Memory,
            SensorCategory::Intrusion => RuleKind::Intrusion,
            SensorCategory::Battery
            | SensorCategory::Current
            | SensorCategory::Temperature
            | SensorCategory::Fan
            | SensorCategory::Performance
            | SensorCategory::Processor
            | SensorCategory::SystemPerformance
            | SensorCategory::Voltage => RuleKind::Generic,
        }
    }
}

impl fmt::Display for SensorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RuleKind ──────────────────────────────────────────────────────────────────

/// How a category's sensors are reduced to verdict fragments.
///
/// The filtering kinds only ever emit the positive case, so their output can
/// never carry a vendor failure token; `Generic` surfaces the raw state
/// token verbatim, which is the one path by which `Warning`/`Critical`
/// reach the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Pass-through: report every sensor's reading and state.
    Generic,
    /// Only report supplies whose field list contains `Full Redundant`.
    Redundancy,
    /// Only report supplies whose state is exactly `Present`.
    Power,
    /// Only report modules whose second field is `Presence_Detected`.
    Memory,
    /// Only report sensors whose state is exactly `Closed`.
    Intrusion,
}

// ── Scope ─────────────────────────────────────────────────────────────────────

/// Classification request granularity: one category, or everything the
/// report contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every category present in the report, in report order.
    All,
    /// A single recognised category.
    Category(SensorCategory),
}

impl FromStr for Scope {
    type Err = ProbeError;

    fn from_str(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("all") {
            Ok(Scope::All)
        } else {
            value.parse().map(Scope::Category)
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Category(category) => category.fmt(f),
        }
    }
}
