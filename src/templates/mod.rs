pub mod defaults;
pub mod entry;
pub mod render;
pub mod tokens;

pub use entry::{SpecialItemRule, SpecialRuleDef, TemplateDef, TemplateEntry, TemplateKind};
pub use render::{Bindings, render};

use std::collections::BTreeMap;

use rand::{Rng, RngCore};

/// Raw, author-facing template pools before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePools {
    pub lethal: Vec<TemplateDef>,
    pub non_lethal: Vec<TemplateDef>,
    pub inventory: Vec<TemplateDef>,
    pub loot: Vec<TemplateDef>,
    pub item_loot: BTreeMap<String, Vec<TemplateDef>>,
    pub special_items: BTreeMap<String, SpecialRuleDef>,
}

impl Default for TemplatePools {
    fn default() -> Self {
        Self {
            lethal: defs(defaults::LETHAL_EVENTS),
            non_lethal: defs(defaults::NON_LETHAL_EVENTS),
            inventory: defs(defaults::INVENTORY_EVENTS),
            loot: defs(defaults::LOOT_EVENTS),
            item_loot: defaults::ITEM_LOOT_EVENTS
                .iter()
                .map(|(item, texts)| (item.to_string(), defs(*texts)))
                .collect(),
            special_items: defaults::SPECIAL_ITEM_EVENTS
                .iter()
                .map(|(item, consumes, texts)| {
                    let rule = SpecialRuleDef::Rule {
                        consumes: *consumes,
                        templates: defs(*texts),
                    };
                    (item.to_string(), rule)
                })
                .collect(),
        }
    }
}

fn defs(texts: &[&str]) -> Vec<TemplateDef> {
    texts.iter().map(|t| TemplateDef::from(*t)).collect()
}

/// A normalized pool with the built-in line used when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePool {
    entries: Vec<TemplateEntry>,
    fallback: TemplateEntry,
}

impl TemplatePool {
    pub fn new(kind: TemplateKind, defs: &[TemplateDef], fallback: &str) -> Self {
        Self {
            entries: defs.iter().map(|d| TemplateEntry::normalize(kind, d)).collect(),
            fallback: TemplateEntry::normalize(kind, &TemplateDef::from(fallback)),
        }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Uniform pick. The fallback line consumes no randomness.
    pub fn pick(&self, rng: &mut dyn RngCore) -> &TemplateEntry {
        pick_from(&self.entries, rng).unwrap_or(&self.fallback)
    }
}

/// Uniform pick from a slice; `None` (and no draw) when it is empty.
pub fn pick_from<'a, T>(items: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

/// Every template the simulation can draw from, normalized once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    pub lethal: TemplatePool,
    pub non_lethal: TemplatePool,
    pub inventory: TemplatePool,
    pub loot: TemplatePool,
    pub item_loot: BTreeMap<String, Vec<TemplateEntry>>,
    pub special_items: BTreeMap<String, SpecialItemRule>,
}

impl TemplateCatalog {
    pub fn new(pools: &TemplatePools) -> Self {
        let flavor = |defs: &Vec<TemplateDef>| -> Vec<TemplateEntry> {
            defs.iter()
                .map(|d| TemplateEntry::normalize(TemplateKind::Flavor, d))
                .collect()
        };

        let special_items = pools
            .special_items
            .iter()
            .filter_map(|(item, def)| {
                let rule = SpecialItemRule::from_def(def);
                if rule.templates.is_empty() {
                    tracing::warn!("special item rule for {item:?} has no templates; ignoring");
                    None
                } else {
                    Some((item.clone(), rule))
                }
            })
            .collect();

        Self {
            lethal: TemplatePool::new(
                TemplateKind::Lethal,
                &pools.lethal,
                defaults::LETHAL_FALLBACK,
            ),
            non_lethal: TemplatePool::new(
                TemplateKind::NonLethal,
                &pools.non_lethal,
                defaults::NON_LETHAL_FALLBACK,
            ),
            inventory: TemplatePool::new(
                TemplateKind::Flavor,
                &pools.inventory,
                defaults::INVENTORY_FALLBACK,
            ),
            loot: TemplatePool::new(TemplateKind::Flavor, &pools.loot, defaults::LOOT_FALLBACK),
            item_loot: pools
                .item_loot
                .iter()
                .map(|(item, defs)| (item.clone(), flavor(defs)))
                .filter(|(_, entries)| !entries.is_empty())
                .collect(),
            special_items,
        }
    }

    pub fn special_rule(&self, item: &str) -> Option<&SpecialItemRule> {
        self.special_items.get(item)
    }

    /// Loot line for `item`: its own list if configured, else the generic pool.
    pub fn pick_loot(&self, item: &str, rng: &mut dyn RngCore) -> &TemplateEntry {
        match self.item_loot.get(item) {
            Some(entries) => pick_from(entries, rng).unwrap_or_else(|| self.loot.pick(rng)),
            None => self.loot.pick(rng),
        }
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new(&TemplatePools::default())
    }
}
