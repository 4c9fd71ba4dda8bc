use std::collections::HashSet;

use arena_sim::{ArenaConfig, EventKind, SimulationResult};

pub fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Tribute {i}")).collect()
}

pub fn seeded(seed: u64) -> ArenaConfig {
    ArenaConfig {
        seed: Some(seed),
        ..ArenaConfig::default()
    }
}

/// Structural invariants every finished run must satisfy.
pub fn assert_invariants(result: &SimulationResult, names: &[String], config: &ArenaConfig) {
    if names.len() <= 1 {
        assert!(result.days.is_empty());
        assert!(result.winner.is_none());
    }
    // Fallen names plus the winner partition the roster.
    let mut seen: HashSet<&str> = HashSet::new();
    for name in result.fallen() {
        assert!(seen.insert(name), "{name} fell twice");
    }
    if let Some(winner) = &result.winner {
        assert!(seen.insert(winner), "winner {winner} is also listed as fallen");
    }
    if result.winner.is_some() {
        let roster: HashSet<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(seen, roster, "fallen + winner must cover the roster exactly");
    }

    // Kill accounting.
    assert_eq!(result.total_kills() as usize, result.fallen().count());

    // Day numbering.
    for (i, day) in result.days.iter().enumerate() {
        assert_eq!(day.number, i as u32 + 1);
        assert_eq!(day.bloodbath, day.number == 1);
    }

    // Inventory cap and alive flags.
    for tribute in &result.tributes {
        assert!(tribute.inventory.len() <= config.max_inventory);
        if result.winner.is_some() {
            assert_eq!(tribute.alive, result.winner.as_deref() == Some(tribute.name.as_str()));
        }
    }

    // Event metadata agrees with event kinds.
    for day in &result.days {
        for event in &day.events {
            match event.kind {
                EventKind::Lethal | EventKind::ItemSpecialLethal => {
                    assert!(!event.meta.victims.is_empty(), "{event:?}")
                }
                _ => assert!(event.meta.victims.is_empty(), "{event:?}"),
            }
        }
        for victim in &day.fallen {
            assert!(!day.survivors.contains(victim));
        }
    }

    // Exactly one victory event, at the very end.
    let victories: Vec<_> = result
        .days
        .iter()
        .flat_map(|d| d.events.iter())
        .filter(|e| e.kind == EventKind::Victory)
        .collect();
    if result.winner.is_some() {
        assert_eq!(victories.len(), 1);
        let last = result.days.last().and_then(|d| d.events.last());
        assert_eq!(last.map(|e| e.kind), Some(EventKind::Victory));
    } else {
        assert!(victories.is_empty());
    }
}
