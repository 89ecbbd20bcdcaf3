use serde::Serialize;
use std::collections::BTreeMap;

/// The remaining whitespace-delimited tokens of a data line, in column
/// order. `fields[0]` is conventionally a state token and `fields[1]` a
/// secondary reading, but the meaning of each index is assigned by the
/// classification rules, not here.
pub type FieldList = Vec<String>;

/// Sensors of one category, keyed by sensor name.
///
/// A `BTreeMap` so that iteration is already sorted by name, which is the
/// order the classification rules enumerate sensors in. Inserting an
/// existing name overwrites it (last write wins).
pub type CategorySensors = BTreeMap<String, FieldList>;

// ── CategoryRecord ────────────────────────────────────────────────────────────

/// One sensor category as reported by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    /// Normalised category name, e.g. `SYSTEM_PERFORMANCE`.
    pub name: String,
    /// The category's sensors keyed by name.
    pub sensors: CategorySensors,
}

impl CategoryRecord {
    /// An empty record for the given (already normalised) category name.
    pub fn new(name: impl Into<String>) -> Self {
        CategoryRecord {
            name: name.into(),
            sensors: CategorySensors::new(),
        }
    }
}

// ── SensorInventory ───────────────────────────────────────────────────────────

/// The structured form of one captured sensor report.
///
/// Categories keep the order in which their headers first appeared in the
/// report; the `all` classification path and the debug dump both walk them
/// in that order. Lookup is by normalised name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorInventory {
    categories: Vec<CategoryRecord>,
}

impl SensorInventory {
    /// An inventory with no categories ("no data received").
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise a raw category name: trim, uppercase, collapse internal
    /// whitespace runs to single underscores.
    ///
    /// `" SYSTEM  PERFORMANCE "` → `"SYSTEM_PERFORMANCE"`.
    pub fn normalize_name(raw: &str) -> String {
        raw.trim()
            .to_uppercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Number of categories observed.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// `true` when no category header was observed at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRecord> {
        self.categories.iter()
    }

    /// Look up a category by name, ignoring ASCII case.
    pub fn category(&self, name: &str) -> Option<&CategoryRecord> {
        self.categories
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
    }

    /// Fetch the record for `name`, appending an empty one when the
    /// category has not been seen yet. Re-entering an existing category
    /// merges into it rather than resetting it.
    pub fn entry(&mut self, name: &str) -> &mut CategoryRecord {
        match self.categories.iter().position(|record| record.name == name) {
            Some(index) => &mut self.categories[index],
            None => {
                self.categories.push(CategoryRecord::new(name));
                let last = self.categories.len() - 1;
                &mut self.categories[last]
            }
        }
    }

    /// The inventory as a JSON document with sorted keys, for the `--debug`
    /// dump.
    pub fn to_debug_json(&self) -> serde_json::Value {
        let map: BTreeMap<&String, &CategorySensors> = self
            .categories
            .iter()
            .map(|record| (&record.name, &record.sensors))
            .collect();
        serde_json::to_value(map).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_trims_and_uppercases() {
        assert_eq!(SensorInventory::normalize_name(" temperature "), "TEMPERATURE");
        assert_eq!(
            SensorInventory::normalize_name("SYSTEM PERFORMANCE"),
            "SYSTEM_PERFORMANCE"
        );
        assert_eq!(
            SensorInventory::normalize_name("  SYSTEM   PERFORMANCE  "),
            "SYSTEM_PERFORMANCE"
        );
    }

    #[test]
    fn test_entry_preserves_insertion_order() {
        let mut inv = SensorInventory::new();
        inv.entry("POWER");
        inv.entry("TEMPERATURE");
        inv.entry("FAN");
        let names: Vec<&str> = inv.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["POWER", "TEMPERATURE", "FAN"]);
    }

    #[test]
    fn test_entry_merges_on_reencounter() {
        let mut inv = SensorInventory::new();
        inv.entry("FAN")
            .sensors
            .insert("Fan1".to_string(), vec!["Ok".to_string()]);
        inv.entry("FAN")
            .sensors
            .insert("Fan2".to_string(), vec!["Ok".to_string()]);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.category("FAN").unwrap().sensors.len(), 2);
    }

    #[test]
    fn test_sensor_overwrite_is_last_write_wins() {
        let mut inv = SensorInventory::new();
        inv.entry("FAN")
            .sensors
            .insert("Fan1".to_string(), vec!["Ok".to_string()]);
        inv.entry("FAN")
            .sensors
            .insert("Fan1".to_string(), vec!["Critical".to_string()]);
        let fields = &inv.category("FAN").unwrap().sensors["Fan1"];
        assert_eq!(fields, &vec!["Critical".to_string()]);
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        let mut inv = SensorInventory::new();
        inv.entry("INTRUSION");
        assert!(inv.category("intrusion").is_some());
        assert!(inv.category("Intrusion").is_some());
        assert!(inv.category("voltage").is_none());
    }

    #[test]
    fn test_to_debug_json_sorts_keys() {
        let mut inv = SensorInventory::new();
        inv.entry("VOLTAGE");
        inv.entry("BATTERY")
            .sensors
            .insert("CMOS Battery".to_string(), vec!["Ok".to_string()]);
        let value = inv.to_debug_json();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["BATTERY", "VOLTAGE"]);
        assert_eq!(value["BATTERY"]["CMOS Battery"][0], "Ok");
    }
}
