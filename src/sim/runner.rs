use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::day::DayScheduler;
use crate::config::ArenaConfig;
use crate::model::{Event, EventKind, EventMeta, SimulationResult};
use crate::roster::TributeRoster;
use crate::templates::{Bindings, render};

/// Run a complete arena simulation.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed, config
/// and roster always produce the same result. Without a seed one is drawn
/// from OS entropy and logged so the run can be replayed.
pub fn run_simulation<S: AsRef<str>>(names: &[S], config: &ArenaConfig) -> SimulationResult {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, tributes = names.len(), "starting arena simulation");
    let mut rng = SmallRng::seed_from_u64(seed);
    run_simulation_with_rng(names, config, &mut rng)
}

/// Run a complete simulation drawing every random value from `rng`.
///
/// Starting inventories are handed out first, in roster order; days then
/// run until at most one tribute is alive or `max_simulated_days` is hit.
pub fn run_simulation_with_rng<S: AsRef<str>>(
    names: &[S],
    config: &ArenaConfig,
    rng: &mut dyn RngCore,
) -> SimulationResult {
    let mut roster = TributeRoster::new(names);
    roster.assign_starting_inventory(
        &config.inventory_items,
        config.starting_items_max,
        config.max_inventory,
        rng,
    );

    let scheduler = DayScheduler::new(config, roster.len());
    tracing::info!(
        tributes = roster.len(),
        desired_days = scheduler.desired_days(),
        "arena ready"
    );

    let mut days = Vec::new();
    let mut day = 0u32;
    while roster.alive_count() > 1 {
        if day >= config.max_simulated_days {
            tracing::warn!(
                day,
                alive = roster.alive_count(),
                "day limit reached before a winner emerged; stopping"
            );
            break;
        }
        day += 1;
        days.push(scheduler.run_day(day, &mut roster, rng));
    }

    let winner = match days.last_mut() {
        Some(last) => roster.sole_survivor().map(|champion| {
            let text = render(
                &config.victory_template,
                &Bindings::new()
                    .with("name", champion.name.as_str())
                    .with("kills", champion.kills.to_string()),
            );
            let meta = EventMeta {
                actor: champion.name.clone(),
                kills: Some(champion.kills),
                ..Default::default()
            };
            last.events.push(Event::new(EventKind::Victory, text, meta));
            champion.name.clone()
        }),
        None => None,
    };

    match &winner {
        Some(name) => tracing::info!(winner = %name, days = days.len(), "arena simulation finished"),
        None => tracing::info!(days = days.len(), "arena simulation finished without a winner"),
    }

    SimulationResult {
        tributes: roster.into_tributes(),
        days,
        winner,
    }
}
