mod common;

use std::fs;

use arena_sim::io::{export_simulation, load_config, load_names};
use arena_sim::{EventKind, SimulationResult, run_simulation};
use common::{roster, seeded};

#[test]
fn exported_file_reads_back_identically() {
    let names = roster(10);
    let result = run_simulation(&names, &seeded(77));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/nested/simulation.json");
    export_simulation(&result, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("}\n"));
    let back: SimulationResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back, result);
}

#[test]
fn exported_json_uses_wire_names() {
    let result = run_simulation(&roster(6), &seeded(3));
    let value = serde_json::to_value(&result).unwrap();

    let tributes = value["tributes"].as_array().unwrap();
    assert_eq!(tributes.len(), 6);
    for t in tributes {
        assert!(t["name"].is_string());
        assert!(t["alive"].is_boolean());
        assert!(t["kills"].is_u64());
        assert!(t["inventory"].is_array());
    }

    let day = &value["days"][0];
    assert_eq!(day["number"], 1);
    assert_eq!(day["bloodbath"], true);
    for event in day["events"].as_array().unwrap() {
        let kind: EventKind = serde_json::from_value(event["type"].clone()).unwrap();
        assert!(event["text"].is_string());
        assert!(event["meta"]["actor"].is_string());
        if !kind.is_lethal() {
            assert!(event["meta"].get("victims").is_none());
        }
    }
    assert_eq!(value["winner"].as_str(), result.winner.as_deref());
}

#[test]
fn file_inputs_drive_a_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let names_path = dir.path().join("tribute_names.txt");
    let config_path = dir.path().join("arena_events.json");
    fs::write(&names_path, "Rue\nThresh\n  Cato \nRue\n\nClove\n").unwrap();
    fs::write(
        &config_path,
        r#"{
            "seed": 12,
            "lethal_event_chance": 0.6,
            "min_days": 2,
            "max_days": 3,
            "lethal_events": ["{killer} outlasts {victim}."],
            "victory_template": "{name} wins with {kills}."
        }"#,
    )
    .unwrap();

    let names = load_names(&names_path).unwrap();
    assert_eq!(names, vec!["Rue", "Thresh", "Cato", "Clove"]);
    let config = load_config(&config_path).unwrap();
    assert_eq!(config.seed, Some(12));

    let result = run_simulation(&names, &config);
    let winner = result.winner.clone().unwrap();
    let last = result.days.last().unwrap().events.last().unwrap();
    assert_eq!(last.kind, EventKind::Victory);
    assert!(last.text.starts_with(&format!("{winner} wins with ")));
    for event in result.days.iter().flat_map(|d| d.events.iter()) {
        if event.kind == EventKind::Lethal {
            assert!(event.text.ends_with(&format!("outlasts {}.", event.meta.victims[0])));
        }
    }

    let out = dir.path().join("simulation.json");
    export_simulation(&result, &out).unwrap();
    let back: SimulationResult = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back.winner, Some(winner));
}
