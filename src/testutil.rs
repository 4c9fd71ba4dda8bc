use serde_json::Value;

use crate::config::ArenaConfig;

/// Roster names `T0`, `T1`, ...
pub fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("T{i}")).collect()
}

/// A config where every optional branch is switched off and no special
/// rules exist, with `overrides` merged on top.
pub fn quiet_config(overrides: Value) -> ArenaConfig {
    let mut base = serde_json::json!({
        "lethal_event_chance": 0.0,
        "inventory_event_chance": 0.0,
        "loot_event_chance": 0.0,
        "special_item_event_chance": 0.0,
        "special_item_events": {},
        "item_loot_events": {}
    });
    if let (Some(obj), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            obj.insert(k.clone(), v.clone());
        }
    }
    ArenaConfig::from_value(&base)
}
