//! The per-slot decision chain.
//!
//! Checks run in a fixed priority order: special item, loot, inventory
//! flavor, lethal, non-lethal. The first check whose roll succeeds decides
//! the slot, even if it then fails to fill its cast. Every draw goes
//! through the one shared generator in that order, so reordering the
//! checks changes every downstream outcome.

use std::ops::ControlFlow;

use rand::seq::index;
use rand::{Rng, RngCore};

use super::context::SlotContext;
use crate::config::ArenaConfig;
use crate::model::{Event, EventKind, EventMeta};
use crate::roster::TributeRoster;
use crate::templates::{Bindings, TemplateEntry, pick_from, render};

/// `Break(Some)` is an event, `Break(None)` a wasted slot, `Continue` hands
/// the slot to the next check.
type Step = ControlFlow<Option<Event>>;

pub struct EventGenerator<'a> {
    config: &'a ArenaConfig,
}

impl<'a> EventGenerator<'a> {
    pub fn new(config: &'a ArenaConfig) -> Self {
        Self { config }
    }

    /// Resolve one slot for `actor`. Mutates the roster only when an event
    /// is produced.
    pub fn generate(
        &self,
        actor: usize,
        roster: &mut TributeRoster,
        slot: SlotContext,
        rng: &mut dyn RngCore,
    ) -> Option<Event> {
        match self.decide(actor, roster, slot, rng) {
            ControlFlow::Break(outcome) => outcome,
            ControlFlow::Continue(()) => None,
        }
    }

    fn decide(
        &self,
        actor: usize,
        roster: &mut TributeRoster,
        slot: SlotContext,
        rng: &mut dyn RngCore,
    ) -> Step {
        self.special_item(actor, roster, rng)?;
        self.loot(actor, roster, rng)?;
        self.inventory(actor, roster, rng)?;
        self.lethal(actor, roster, slot, rng)?;
        ControlFlow::Break(self.non_lethal(actor, roster, rng))
    }

    fn special_item(&self, actor: usize, roster: &mut TributeRoster, rng: &mut dyn RngCore) -> Step {
        let catalog = &self.config.catalog;
        let mut qualifying: Vec<&str> = Vec::new();
        for item in &roster.get(actor).inventory {
            if catalog.special_rule(item).is_some() && !qualifying.contains(&item.as_str()) {
                qualifying.push(item);
            }
        }
        if qualifying.is_empty() || !roll(rng, self.config.special_item_event_chance) {
            return ControlFlow::Continue(());
        }

        let item = qualifying[rng.random_range(0..qualifying.len())].to_string();
        let Some(rule) = catalog.special_rule(&item) else {
            return ControlFlow::Continue(());
        };
        let Some(template) = pick_from(&rule.templates, rng) else {
            return ControlFlow::Continue(());
        };
        let Some(victims) = sample_cast(roster, actor, template.victim_count(), rng) else {
            log_wasted(roster, actor, template);
            return ControlFlow::Break(None);
        };

        let victims = roster.eliminate(actor, &victims);
        let consumed = rule.consumes_with(template);
        if consumed {
            roster.get_mut(actor).remove_one(&item);
        }

        let name = roster.get(actor).name.clone();
        let mut bindings = Bindings::new()
            .with("person", name.as_str())
            .with("killer", name.as_str())
            .with("item", item.as_str());
        bind_all(&mut bindings, &template.victim_slots, &victims);

        let kind = if victims.is_empty() {
            EventKind::ItemSpecial
        } else {
            EventKind::ItemSpecialLethal
        };
        let meta = EventMeta {
            actor: name,
            victims,
            item: Some(item),
            consumed: Some(consumed),
            ..Default::default()
        };
        ControlFlow::Break(Some(Event::new(kind, render(&template.text, &bindings), meta)))
    }

    fn loot(&self, actor: usize, roster: &mut TributeRoster, rng: &mut dyn RngCore) -> Step {
        let pool = &self.config.inventory_items;
        if pool.is_empty()
            || roster.get(actor).inventory.len() >= self.config.max_inventory
            || !roll(rng, self.config.loot_event_chance)
        {
            return ControlFlow::Continue(());
        }

        let item = pool[rng.random_range(0..pool.len())].clone();
        let template = self.config.catalog.pick_loot(&item, rng);
        let tribute = roster.get_mut(actor);
        tribute.inventory.push(item.clone());

        let bindings = Bindings::new()
            .with("person", tribute.name.as_str())
            .with("item", item.as_str());
        let meta = EventMeta {
            actor: tribute.name.clone(),
            item: Some(item),
            ..Default::default()
        };
        ControlFlow::Break(Some(Event::new(
            EventKind::Loot,
            render(&template.text, &bindings),
            meta,
        )))
    }

    fn inventory(&self, actor: usize, roster: &mut TributeRoster, rng: &mut dyn RngCore) -> Step {
        let tribute = roster.get(actor);
        if tribute.inventory.is_empty() || !roll(rng, self.config.inventory_event_chance) {
            return ControlFlow::Continue(());
        }

        let item = tribute.inventory[rng.random_range(0..tribute.inventory.len())].clone();
        let template = self.config.catalog.inventory.pick(rng);
        let bindings = Bindings::new()
            .with("person", tribute.name.as_str())
            .with("item", item.as_str());
        let meta = EventMeta {
            actor: tribute.name.clone(),
            item: Some(item),
            ..Default::default()
        };
        ControlFlow::Break(Some(Event::new(
            EventKind::Inventory,
            render(&template.text, &bindings),
            meta,
        )))
    }

    fn lethal(
        &self,
        actor: usize,
        roster: &mut TributeRoster,
        slot: SlotContext,
        rng: &mut dyn RngCore,
    ) -> Step {
        if roster.alive_except(actor).is_empty() || !roll(rng, slot.lethal_chance) {
            return ControlFlow::Continue(());
        }

        let template = self.config.catalog.lethal.pick(rng);
        let Some(victims) = sample_cast(roster, actor, template.victim_count(), rng) else {
            log_wasted(roster, actor, template);
            return ControlFlow::Break(None);
        };
        let victims = roster.eliminate(actor, &victims);

        let name = roster.get(actor).name.clone();
        let mut bindings = Bindings::new()
            .with("killer", name.as_str())
            .with("person", name.as_str());
        bind_all(&mut bindings, &template.victim_slots, &victims);

        let meta = EventMeta {
            actor: name,
            victims,
            ..Default::default()
        };
        ControlFlow::Break(Some(Event::new(
            EventKind::Lethal,
            render(&template.text, &bindings),
            meta,
        )))
    }

    fn non_lethal(
        &self,
        actor: usize,
        roster: &mut TributeRoster,
        rng: &mut dyn RngCore,
    ) -> Option<Event> {
        let template = self.config.catalog.non_lethal.pick(rng);
        let Some(cast) = sample_cast(roster, actor, template.roles.len(), rng) else {
            log_wasted(roster, actor, template);
            return None;
        };
        let bystanders: Vec<String> = cast.iter().map(|&i| roster.get(i).name.clone()).collect();

        let name = roster.get(actor).name.clone();
        let mut bindings = Bindings::new().with("person", name.as_str());
        bind_all(&mut bindings, &template.roles, &bystanders);

        let meta = EventMeta {
            actor: name,
            bystanders,
            ..Default::default()
        };
        Some(Event::new(
            EventKind::NonLethal,
            render(&template.text, &bindings),
            meta,
        ))
    }
}

fn roll(rng: &mut dyn RngCore, chance: f64) -> bool {
    rng.random::<f64>() < chance
}

/// Draw `count` distinct living non-actors, or `None` if too few remain.
/// Needs no draw when `count` is zero.
fn sample_cast(
    roster: &TributeRoster,
    actor: usize,
    count: usize,
    rng: &mut dyn RngCore,
) -> Option<Vec<usize>> {
    if count == 0 {
        return Some(Vec::new());
    }
    let candidates = roster.alive_except(actor);
    if candidates.len() < count {
        return None;
    }
    Some(
        index::sample(rng, candidates.len(), count)
            .into_iter()
            .map(|i| candidates[i])
            .collect(),
    )
}

fn bind_all(bindings: &mut Bindings, keys: &[String], values: &[String]) {
    for (key, value) in keys.iter().zip(values) {
        bindings.set(key.as_str(), value.as_str());
    }
}

fn log_wasted(roster: &TributeRoster, actor: usize, template: &TemplateEntry) {
    tracing::trace!(
        actor = %roster.get(actor).name,
        needed = template.cast_size(),
        "slot wasted: not enough living tributes for {:?}",
        template.text
    );
}
