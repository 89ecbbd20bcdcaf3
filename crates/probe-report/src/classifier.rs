//! Status classification over a parsed sensor inventory.
//!
//! Each recognised category maps to exactly one rule
//! ([`SensorCategory::rule`]). Filtering rules (redundancy, power, memory,
//! intrusion) are optimistic: they only ever report the positive case, so a
//! supply that is not `Present` simply contributes nothing. Generic rules
//! are pass-through: every sensor's raw state token is surfaced verbatim,
//! which is how vendor `Warning`/`Critical` words propagate into the
//! verdict for severity detection.

use probe_core::category::{RuleKind, Scope, SensorCategory};
use probe_core::error::Result;
use probe_core::inventory::{CategorySensors, SensorInventory};
use tracing::debug;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Outcome of a classification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyOutcome {
    /// A formatted verdict line, ready for severity detection.
    Report(String),
    /// The requested category is recognised but absent from this report.
    /// Benign: the device simply reports nothing for it.
    NoData(SensorCategory),
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Classify the inventory for a scope given as a string.
///
/// Fails only for an unrecognised scope (`UnknownScope`); every other
/// condition is represented in the outcome.
pub fn classify(
    inventory: &SensorInventory,
    scope: &str,
    perfdata: bool,
) -> Result<ClassifyOutcome> {
    let scope: Scope = scope.parse()?;
    Ok(classify_scope(inventory, scope, perfdata))
}

/// Classify the inventory for an already validated scope.
pub fn classify_scope(
    inventory: &SensorInventory,
    scope: Scope,
    perfdata: bool,
) -> ClassifyOutcome {
    match scope {
        Scope::All => ClassifyOutcome::Report(classify_all(inventory)),
        Scope::Category(category) => classify_category(inventory, category, perfdata),
    }
}

/// Verdict for every category present in the report, in report order.
///
/// Each category contributes a bracketed label followed by its rule's
/// fragments. A category outside the recognised set keeps its label but
/// contributes no fragments; it never aborts the walk.
pub fn classify_all(inventory: &SensorInventory) -> String {
    let mut output = String::new();
    for record in inventory.iter() {
        output.push_str(&format!("[{}] ", record.name));
        match SensorCategory::from_inventory_key(&record.name) {
            Some(category) => output.push_str(&apply_rule(category.rule(), &record.sensors)),
            None => debug!("no classification rule for category {}", record.name),
        }
    }
    output
}

/// Verdict for a single category: a terse Nagios summary head
/// (`<scope> - <STATE>;`, the primary status field uppercased) followed by
/// the category's rule fragments, and an optional `| <STATE>` perfdata
/// suffix.
pub fn classify_category(
    inventory: &SensorInventory,
    category: SensorCategory,
    perfdata: bool,
) -> ClassifyOutcome {
    let Some(record) = inventory.category(&category.inventory_key()) else {
        return ClassifyOutcome::NoData(category);
    };

    let state = primary_state(&record.sensors);
    let fragments = apply_rule(category.rule(), &record.sensors);

    let mut output = format!("{} - {}; {}", category, state, fragments);
    if perfdata {
        output.push_str(&format!("| {}", state));
    }
    ClassifyOutcome::Report(output)
}

// ── Category rules ────────────────────────────────────────────────────────────

fn apply_rule(rule: RuleKind, sensors: &CategorySensors) -> String {
    match rule {
        RuleKind::Generic => rule_generic(sensors),
        RuleKind::Redundancy => rule_redundancy(sensors),
        RuleKind::Power => rule_power(sensors),
        RuleKind::Memory => rule_memory(sensors),
        RuleKind::Intrusion => rule_intrusion(sensors),
    }
}

/// Redundancy groups are only reported when fully redundant.
fn rule_redundancy(sensors: &CategorySensors) -> String {
    let mut out = String::new();
    for (name, fields) in sensors {
        if fields.iter().any(|field| field == "Full Redundant") {
            out.push_str(&format!("- {} : is Ok ", name));
        }
    }
    out
}

/// Power supplies are only reported while present.
fn rule_power(sensors: &CategorySensors) -> String {
    let mut out = String::new();
    for (name, fields) in sensors {
        if fields.first().map(String::as_str) == Some("Present") {
            out.push_str(&format!("- {} : is Ok ", name));
        }
    }
    out
}

/// Memory modules are reported with their state once presence is detected.
fn rule_memory(sensors: &CategorySensors) -> String {
    let mut out = String::new();
    for (name, fields) in sensors {
        if fields.get(1).map(String::as_str) == Some("Presence_Detected") {
            out.push_str(&format!("- {} is {} ", name, fields[0]));
        }
    }
    out
}

/// Intrusion sensors are only reported while the chassis is closed.
fn rule_intrusion(sensors: &CategorySensors) -> String {
    let mut out = String::new();
    for (name, fields) in sensors {
        if fields.first().map(String::as_str) == Some("Closed") {
            out.push_str(&format!("- {} is Ok ", name));
        }
    }
    out
}

/// Pass-through: every sensor's reading and raw state token, no filtering.
/// Missing fields render empty rather than dropping the sensor, so a bare
/// state token still reaches the verdict.
fn rule_generic(sensors: &CategorySensors) -> String {
    let mut out = String::new();
    for (name, fields) in sensors {
        let state = fields.first().map(String::as_str).unwrap_or_default();
        let reading = fields.get(1).map(String::as_str).unwrap_or_default();
        out.push_str(&format!("- {}={} is {} ", name, reading, state));
    }
    out
}

/// The primary status field for the terse single-category summary:
/// `fields[0]` of the first sensor in name order, uppercased.
fn primary_state(sensors: &CategorySensors) -> String {
    sensors
        .iter()
        .next()
        .and_then(|(_, fields)| fields.first())
        .map(|state| state.to_uppercase())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}
