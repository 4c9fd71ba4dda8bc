use serde::{Deserialize, Serialize};

/// A single competitor. The name is the identity key and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tribute {
    pub name: String,
    pub alive: bool,
    pub kills: u32,
    /// Held items in pickup order. Duplicates are allowed.
    pub inventory: Vec<String>,
}

impl Tribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alive: true,
            kills: 0,
            inventory: Vec::new(),
        }
    }

    /// Remove one instance of `item`. Returns false if it was not held.
    pub fn remove_one(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|held| held == item) {
            Some(idx) => {
                self.inventory.remove(idx);
                true
            }
            None => false,
        }
    }
}
