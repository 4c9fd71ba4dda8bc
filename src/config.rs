use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::templates::{
    SpecialRuleDef, TemplateCatalog, TemplateDef, TemplatePools, defaults,
};

/// Every tweakable setting of an arena run.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Baseline chance (0–1) that a slot turns lethal, before pacing.
    pub lethal_event_chance: f64,
    /// Chance that a tribute holding gear gets an "uses an item" line.
    pub inventory_event_chance: f64,
    /// Chance that a tribute below the inventory cap picks something up.
    pub loot_event_chance: f64,
    /// Chance that a held item with a special rule fires.
    pub special_item_event_chance: f64,
    pub min_events_per_day: u32,
    pub max_events_per_day: u32,
    /// Event-count range for day 1.
    pub bloodbath_min_events: u32,
    pub bloodbath_max_events: u32,
    /// Added to the lethal chance on day 1.
    pub bloodbath_lethal_bonus: f64,
    /// Target band for the length of a run, in days.
    pub min_days: u32,
    pub max_days: u32,
    pub max_inventory: usize,
    /// Starting gear per tribute is drawn from `0..=starting_items_max`.
    pub starting_items_max: usize,
    /// Hard stop for runs that refuse to converge.
    pub max_simulated_days: u32,
    pub inventory_items: Vec<String>,
    pub catalog: TemplateCatalog,
    /// Rendered with `{name}` and `{kills}`.
    pub victory_template: String,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            lethal_event_chance: 0.35,
            inventory_event_chance: 0.25,
            loot_event_chance: 0.2,
            special_item_event_chance: 0.3,
            min_events_per_day: 2,
            max_events_per_day: 6,
            bloodbath_min_events: 4,
            bloodbath_max_events: 10,
            bloodbath_lethal_bonus: 0.15,
            min_days: 4,
            max_days: 10,
            max_inventory: 3,
            starting_items_max: 2,
            max_simulated_days: 365,
            inventory_items: defaults::INVENTORY_ITEMS.iter().map(|s| s.to_string()).collect(),
            catalog: TemplateCatalog::default(),
            victory_template: defaults::VICTORY_TEMPLATE.to_string(),
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Build a config from a JSON object. Each field is read on its own: a
    /// missing or malformed field keeps its default, so one bad value never
    /// discards the rest of the file.
    pub fn from_value(data: &Value) -> Self {
        let d = Self::default();
        if !data.is_object() {
            tracing::warn!("arena config is not a JSON object; using defaults");
            return d;
        }

        let mut pools = TemplatePools::default();
        if let Some(defs) = read_list::<TemplateDef>(data, "lethal_events") {
            pools.lethal = defs;
        }
        if let Some(defs) = read_list::<TemplateDef>(data, "non_lethal_events") {
            pools.non_lethal = defs;
        }
        if let Some(defs) = read_list::<TemplateDef>(data, "inventory_events") {
            pools.inventory = defs;
        }
        if let Some(defs) = read_list::<TemplateDef>(data, "loot_events") {
            pools.loot = defs;
        }
        if let Some(map) = read_map(data, "item_loot_events", |key, v| {
            Some(lenient_list::<TemplateDef>(&format!("item_loot_events.{key}"), v))
        }) {
            pools.item_loot = map;
        }
        if let Some(map) = read_map(data, "special_item_events", |key, v| {
            let parsed = serde_json::from_value::<SpecialRuleDef>(v.clone()).ok();
            if parsed.is_none() {
                tracing::warn!("special_item_events.{key} is malformed; skipping");
            }
            parsed
        }) {
            pools.special_items = map;
        }

        let config = Self {
            lethal_event_chance: read_f64(data, "lethal_event_chance", d.lethal_event_chance),
            inventory_event_chance: read_f64(
                data,
                "inventory_event_chance",
                d.inventory_event_chance,
            ),
            loot_event_chance: read_f64(data, "loot_event_chance", d.loot_event_chance),
            special_item_event_chance: read_f64(
                data,
                "special_item_event_chance",
                d.special_item_event_chance,
            ),
            min_events_per_day: read_u32(data, "min_events_per_day", d.min_events_per_day),
            max_events_per_day: read_u32(data, "max_events_per_day", d.max_events_per_day),
            bloodbath_min_events: read_u32(data, "bloodbath_min_events", d.bloodbath_min_events),
            bloodbath_max_events: read_u32(data, "bloodbath_max_events", d.bloodbath_max_events),
            bloodbath_lethal_bonus: read_f64(
                data,
                "bloodbath_lethal_bonus",
                d.bloodbath_lethal_bonus,
            ),
            min_days: read_u32(data, "min_days", d.min_days),
            max_days: read_u32(data, "max_days", d.max_days),
            max_inventory: read_u32(data, "max_inventory", d.max_inventory as u32) as usize,
            starting_items_max: read_u32(data, "starting_items_max", d.starting_items_max as u32)
                as usize,
            max_simulated_days: read_u32(data, "max_simulated_days", d.max_simulated_days),
            inventory_items: read_list::<String>(data, "inventory_items")
                .unwrap_or(d.inventory_items),
            catalog: TemplateCatalog::new(&pools),
            victory_template: read_field::<String>(data, "victory_template")
                .unwrap_or(d.victory_template),
            seed: read_field::<u64>(data, "seed"),
        };
        config.sanitized()
    }

    /// Clamp probabilities into `[0, 1]` and repair inverted ranges.
    pub fn sanitized(mut self) -> Self {
        for p in [
            &mut self.lethal_event_chance,
            &mut self.inventory_event_chance,
            &mut self.loot_event_chance,
            &mut self.special_item_event_chance,
            &mut self.bloodbath_lethal_bonus,
        ] {
            *p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        }
        self.max_events_per_day = self.max_events_per_day.max(self.min_events_per_day);
        self.bloodbath_max_events = self.bloodbath_max_events.max(self.bloodbath_min_events);
        self.min_days = self.min_days.max(1);
        self.max_days = self.max_days.max(self.min_days);
        self.max_simulated_days = self.max_simulated_days.max(1);
        self
    }
}

fn read_field<T: DeserializeOwned>(data: &Value, key: &str) -> Option<T> {
    let value = data.get(key).filter(|v| !v.is_null())?;
    let parsed = serde_json::from_value::<T>(value.clone()).ok();
    if parsed.is_none() {
        tracing::warn!("config field {key:?} is malformed; using default");
    }
    parsed
}

fn read_f64(data: &Value, key: &str, default: f64) -> f64 {
    read_field::<f64>(data, key).unwrap_or(default)
}

fn read_u32(data: &Value, key: &str, default: u32) -> u32 {
    read_field::<u32>(data, key).unwrap_or(default)
}

/// A list field. Malformed entries are dropped one by one; a field that is
/// not a list at all keeps the default.
fn read_list<T: DeserializeOwned>(data: &Value, key: &str) -> Option<Vec<T>> {
    let value = data.get(key).filter(|v| !v.is_null())?;
    if !value.is_array() {
        tracing::warn!("config field {key:?} is not a list; using default");
        return None;
    }
    Some(lenient_list(key, value))
}

fn lenient_list<T: DeserializeOwned>(key: &str, value: &Value) -> Vec<T> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .enumerate()
                .filter_map(|(i, v)| {
                    let parsed = serde_json::from_value::<T>(v.clone()).ok();
                    if parsed.is_none() {
                        tracing::warn!("{key}[{i}] is malformed; skipping");
                    }
                    parsed
                })
                .collect()
        })
        .unwrap_or_default()
}

fn read_map<T>(
    data: &Value,
    key: &str,
    mut parse: impl FnMut(&str, &Value) -> Option<T>,
) -> Option<BTreeMap<String, T>> {
    let value = data.get(key).filter(|v| !v.is_null())?;
    let Some(obj) = value.as_object() else {
        tracing::warn!("config field {key:?} is not an object; using default");
        return None;
    };
    Some(
        obj.iter()
            .filter_map(|(k, v)| parse(k, v).map(|parsed| (k.clone(), parsed)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_config_values() {
        let config = ArenaConfig::default();
        assert!((config.lethal_event_chance - 0.35).abs() < f64::EPSILON);
        assert_eq!(config.min_events_per_day, 2);
        assert_eq!(config.max_events_per_day, 6);
        assert_eq!(config.min_days, 4);
        assert_eq!(config.max_days, 10);
        assert_eq!(config.max_inventory, 3);
        assert_eq!(config.inventory_items.len(), 6);
        assert!(config.seed.is_none());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ArenaConfig::from_value(&json!({})), ArenaConfig::default());
    }

    #[test]
    fn non_object_is_default() {
        assert_eq!(ArenaConfig::from_value(&json!([1, 2])), ArenaConfig::default());
    }

    #[test]
    fn present_fields_override_defaults() {
        let config = ArenaConfig::from_value(&json!({
            "lethal_event_chance": 0.8,
            "min_days": 2,
            "max_days": 3,
            "inventory_items": ["rope"],
            "seed": 7,
            "victory_template": "{name} wins"
        }));
        assert!((config.lethal_event_chance - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.min_days, 2);
        assert_eq!(config.max_days, 3);
        assert_eq!(config.inventory_items, vec!["rope"]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.victory_template, "{name} wins");
    }

    #[test]
    fn malformed_fields_recover_individually() {
        let config = ArenaConfig::from_value(&json!({
            "lethal_event_chance": "very",
            "max_events_per_day": -4,
            "min_events_per_day": 3,
            "inventory_items": "rope",
            "seed": "abc"
        }));
        let d = ArenaConfig::default();
        assert!((config.lethal_event_chance - d.lethal_event_chance).abs() < f64::EPSILON);
        assert_eq!(config.min_events_per_day, 3);
        assert_eq!(config.max_events_per_day, d.max_events_per_day);
        assert_eq!(config.inventory_items, d.inventory_items);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn malformed_template_entries_are_skipped() {
        let config = ArenaConfig::from_value(&json!({
            "lethal_events": ["{killer} wins.", 42, {"no_text": true}, {"text": "{killer} and {victim2}."}]
        }));
        let texts: Vec<&str> = config
            .catalog
            .lethal
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["{killer} wins.", "{killer} and {victim2}."]);
        assert_eq!(config.catalog.lethal.entries()[1].victim_count(), 2);
    }

    #[test]
    fn special_items_accept_both_rule_shapes() {
        let config = ArenaConfig::from_value(&json!({
            "special_item_events": {
                "bow": ["{person} looses an arrow at {victim} with the {item}."],
                "bread": {"consumes": true, "templates": ["{person} eats the {item}."]},
                "broken": 12
            }
        }));
        let catalog = &config.catalog;
        assert!(!catalog.special_rule("bow").unwrap().consumes);
        assert!(catalog.special_rule("bow").unwrap().templates[0].lethal);
        assert!(catalog.special_rule("bread").unwrap().consumes);
        assert!(catalog.special_rule("broken").is_none());
        assert!(catalog.special_rule("throwing knife").is_none());
    }

    #[test]
    fn sanitize_repairs_ranges() {
        let config = ArenaConfig::from_value(&json!({
            "lethal_event_chance": 3.0,
            "loot_event_chance": -1.0,
            "min_events_per_day": 5,
            "max_events_per_day": 1,
            "min_days": 0,
            "max_days": 0,
            "bloodbath_min_events": 9,
            "bloodbath_max_events": 2
        }));
        assert!((config.lethal_event_chance - 1.0).abs() < f64::EPSILON);
        assert!(config.loot_event_chance.abs() < f64::EPSILON);
        assert_eq!(config.max_events_per_day, 5);
        assert_eq!(config.min_days, 1);
        assert_eq!(config.max_days, 1);
        assert_eq!(config.bloodbath_max_events, 9);
    }
}
