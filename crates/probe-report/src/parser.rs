//! `racadm getsensorinfo` report parsing.
//!
//! The report is a vendor text format, not a designed protocol: category
//! header lines (`Sensor Type : TEMPERATURE`), decorative column banners
//! (`<Sensor Name> ...`, `[Key ...]`) and loosely tabular data lines whose
//! columns are separated by runs of two or more spaces. Single spaces occur
//! inside sensor names and readings, so the column separator must stay at
//! two-or-more spaces; a stricter or looser split changes which token lands
//! in which field and therefore changes classification outcomes.

use probe_core::inventory::SensorInventory;
use regex::Regex;
use tracing::debug;

/// Parse a captured sensor report into a structured inventory.
///
/// Single forward pass with one piece of state: the current category, set
/// by the most recent header line. Never fails; lines that fit no
/// recognised shape are skipped, and empty input yields an empty inventory
/// ("no data received" is itself meaningful).
pub fn parse_report<I, S>(lines: I) -> SensorInventory
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let header = Regex::new(r"^Sensor\sType\s:\s([A-Z\s]+)").expect("regex is valid");

    let mut inventory = SensorInventory::new();
    let mut current: Option<String> = None;
    let mut unattributed = 0usize;

    for line in lines {
        let line = line.as_ref().trim_end();

        if let Some(caps) = header.captures(line) {
            let name = SensorInventory::normalize_name(&caps[1]);
            inventory.entry(&name);
            current = Some(name);
            continue;
        }

        // Column banners and key markers are decoration, not data.
        if line.starts_with('<') || line.starts_with('[') {
            continue;
        }

        let mut segments = split_columns(line);
        if segments.is_empty() {
            continue;
        }

        // A data line before any header cannot be attributed to a category.
        let Some(category) = current.as_deref() else {
            unattributed += 1;
            continue;
        };

        let name = segments.remove(0);
        inventory.entry(category).sensors.insert(name, segments);
    }

    if unattributed > 0 {
        debug!(
            "skipped {} data line(s) seen before any category header",
            unattributed
        );
    }

    inventory
}

/// Split a data line into columns on runs of two or more spaces, trimming
/// each column and dropping empty ones.
fn split_columns(line: &str) -> Vec<String> {
    line.split("  ")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_columns_requires_two_spaces() {
        assert_eq!(
            split_columns("CPU1 Temp  Critical  40C"),
            vec!["CPU1 Temp", "Critical", "40C"]
        );
        // A single space is part of the column, not a separator.
        assert_eq!(split_columns("CPU1 Temp"), vec!["CPU1 Temp"]);
    }

    #[test]
    fn test_split_columns_collapses_longer_runs() {
        assert_eq!(split_columns("a   b"), vec!["a", "b"]);
        assert_eq!(split_columns("a      b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_columns_empty_line() {
        assert!(split_columns("").is_empty());
        assert!(split_columns("    ").is_empty());
    }

    #[test]
    fn test_parse_empty_input_yields_empty_inventory() {
        let inventory = parse_report(Vec::<String>::new());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_parse_one_category() {
        let lines = [
            "Sensor Type : INTRUSION",
            "<Sensor Name>         <Status>",
            "Chassis  Closed  ",
        ];
        let inventory = parse_report(lines);
        assert_eq!(inventory.len(), 1);
        let record = inventory.category("INTRUSION").unwrap();
        assert_eq!(record.sensors["Chassis"], vec!["Closed".to_string()]);
    }

    #[test]
    fn test_parse_category_count_matches_distinct_headers() {
        let lines = [
            "Sensor Type : POWER",
            "PS1 Status  Present  ",
            "Sensor Type : TEMPERATURE",
            "CPU1 Temp  Ok  40C",
            "Sensor Type : POWER",
            "PS2 Status  Present  ",
        ];
        let inventory = parse_report(lines);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_parse_header_reencounter_merges() {
        let lines = [
            "Sensor Type : POWER",
            "PS1 Status  Present  ",
            "Sensor Type : TEMPERATURE",
            "CPU1 Temp  Ok  40C",
            "Sensor Type : POWER",
            "PS2 Status  Present  ",
        ];
        let inventory = parse_report(lines);
        let power = inventory.category("POWER").unwrap();
        assert_eq!(power.sensors.len(), 2);
        assert!(power.sensors.contains_key("PS1 Status"));
        assert!(power.sensors.contains_key("PS2 Status"));
    }

    #[test]
    fn test_parse_mid_stream_header_switches_category() {
        let lines = [
            "Sensor Type : FAN",
            "Fan1  Ok  2280 RPM",
            "Sensor Type : VOLTAGE",
            "PS1 Voltage  Ok  230 Volts",
        ];
        let inventory = parse_report(lines);
        assert_eq!(inventory.category("FAN").unwrap().sensors.len(), 1);
        assert_eq!(inventory.category("VOLTAGE").unwrap().sensors.len(), 1);
    }

    #[test]
    fn test_parse_skips_banner_lines() {
        let lines = [
            "Sensor Type : FAN",
            "<Sensor Name>  <Status>  <Reading>",
            "[Key = iDRAC.Embedded.1#SystemBoardFan1]",
            "Fan1  Ok  2280 RPM",
        ];
        let inventory = parse_report(lines);
        let fan = inventory.category("FAN").unwrap();
        assert_eq!(fan.sensors.len(), 1);
        assert_eq!(fan.sensors["Fan1"], vec!["Ok".to_string(), "2280 RPM".to_string()]);
    }

    #[test]
    fn test_parse_skips_unattributed_data() {
        let lines = [
            "Dell Remote Access Controller",
            "Fan1  Ok  2280 RPM",
            "Sensor Type : FAN",
            "Fan2  Ok  2400 RPM",
        ];
        let inventory = parse_report(lines);
        assert_eq!(inventory.len(), 1);
        let fan = inventory.category("FAN").unwrap();
        assert!(!fan.sensors.contains_key("Fan1"));
        assert!(fan.sensors.contains_key("Fan2"));
    }

    #[test]
    fn test_parse_last_write_wins_for_duplicate_sensor() {
        let lines = [
            "Sensor Type : FAN",
            "Fan1  Ok  2280 RPM",
            "Fan1  Critical  0 RPM",
        ];
        let inventory = parse_report(lines);
        let fan = inventory.category("FAN").unwrap();
        assert_eq!(
            fan.sensors["Fan1"],
            vec!["Critical".to_string(), "0 RPM".to_string()]
        );
    }

    #[test]
    fn test_parse_normalizes_multi_word_category() {
        let lines = [
            "Sensor Type : SYSTEM PERFORMANCE",
            "System Board Power Optimized  Ok  Not Degraded",
        ];
        let inventory = parse_report(lines);
        assert!(inventory.category("SYSTEM_PERFORMANCE").is_some());
    }

    #[test]
    fn test_parse_header_with_no_data_still_creates_category() {
        let inventory = parse_report(["Sensor Type : BATTERY"]);
        assert_eq!(inventory.len(), 1);
        assert!(inventory.category("BATTERY").unwrap().sensors.is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let lines = [
            "Sensor Type : POWER",
            "PS1 Status  Present  ",
            "Sensor Type : TEMPERATURE",
            "CPU1 Temp  Ok  40C",
        ];
        let first = parse_report(lines);
        let second = parse_report(lines);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_sensor_name_keeps_single_spaces() {
        let lines = [
            "Sensor Type : TEMPERATURE",
            "System Board Inlet Temp  Ok  24C",
        ];
        let inventory = parse_report(lines);
        let temps = &inventory.category("TEMPERATURE").unwrap().sensors;
        assert!(temps.contains_key("System Board Inlet Temp"));
    }

    #[test]
    fn test_parse_data_line_with_name_only() {
        let lines = ["Sensor Type : TEMPERATURE", "CPU1 Temp"];
        let inventory = parse_report(lines);
        let temps = &inventory.category("TEMPERATURE").unwrap().sensors;
        assert!(temps["CPU1 Temp"].is_empty());
    }

    #[test]
    fn test_parse_trims_trailing_whitespace() {
        let lines = ["Sensor Type : INTRUSION\r", "Chassis  Closed   \r"];
        let inventory = parse_report(lines);
        let record = inventory.category("INTRUSION").unwrap();
        assert_eq!(record.sensors["Chassis"], vec!["Closed".to_string()]);
    }
}
