use rand::{Rng, RngCore};

use crate::model::Tribute;

/// The competitor set for one run. Owns every `Tribute`; indices are stable
/// for the lifetime of the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TributeRoster {
    tributes: Vec<Tribute>,
}

impl TributeRoster {
    /// Names are identity keys; a repeated name is dropped with a warning.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut tributes: Vec<Tribute> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if tributes.iter().any(|t| t.name == name) {
                tracing::warn!("duplicate tribute name {name:?}; keeping the first");
                continue;
            }
            tributes.push(Tribute::new(name));
        }
        Self { tributes }
    }

    /// Hand every tribute `0..=max_each` items drawn with replacement from
    /// `items`, never exceeding `cap`. Draws happen in roster order.
    pub fn assign_starting_inventory(
        &mut self,
        items: &[String],
        max_each: usize,
        cap: usize,
        rng: &mut dyn RngCore,
    ) {
        if items.is_empty() {
            return;
        }
        for tribute in &mut self.tributes {
            let count = rng.random_range(0..=max_each).min(cap);
            for _ in 0..count {
                let item = &items[rng.random_range(0..items.len())];
                tribute.inventory.push(item.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tributes.is_empty()
    }

    pub fn get(&self, idx: usize) -> &Tribute {
        &self.tributes[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut Tribute {
        &mut self.tributes[idx]
    }

    pub fn into_tributes(self) -> Vec<Tribute> {
        self.tributes
    }

    /// Indices of living tributes, in roster order.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.tributes
            .iter()
            .enumerate()
            .filter(|(_, t)| t.alive)
            .map(|(i, _)| i)
            .collect()
    }

    /// Living tributes other than `actor`, in roster order.
    pub fn alive_except(&self, actor: usize) -> Vec<usize> {
        self.tributes
            .iter()
            .enumerate()
            .filter(|(i, t)| t.alive && *i != actor)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.tributes.iter().filter(|t| t.alive).count()
    }

    pub fn alive_names(&self) -> Vec<String> {
        self.tributes
            .iter()
            .filter(|t| t.alive)
            .map(|t| t.name.clone())
            .collect()
    }

    /// Mark `victims` dead and credit `killer` with one kill each.
    /// Returns the victims' names in the given order.
    pub fn eliminate(&mut self, killer: usize, victims: &[usize]) -> Vec<String> {
        let mut names = Vec::with_capacity(victims.len());
        for &v in victims {
            let victim = &mut self.tributes[v];
            debug_assert!(victim.alive, "{} eliminated twice", victim.name);
            victim.alive = false;
            names.push(victim.name.clone());
        }
        self.tributes[killer].kills += victims.len() as u32;
        names
    }

    /// The only living tribute, if exactly one remains.
    pub fn sole_survivor(&self) -> Option<&Tribute> {
        let mut alive = self.tributes.iter().filter(|t| t.alive);
        match (alive.next(), alive.next()) {
            (Some(t), None) => Some(t),
            _ => None,
        }
    }
}
