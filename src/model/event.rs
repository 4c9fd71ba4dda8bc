use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    Lethal,
    NonLethal,
    Inventory,
    Loot,
    ItemSpecial,
    ItemSpecialLethal,
    Victory,
}

string_enum!(EventKind, "event kind", {
    Lethal => "lethal",
    NonLethal => "non-lethal",
    Inventory => "inventory",
    Loot => "loot",
    ItemSpecial => "item-special",
    ItemSpecialLethal => "item-special-lethal",
    Victory => "victory",
});

impl EventKind {
    /// Whether events of this kind remove tributes from play.
    pub fn is_lethal(self) -> bool {
        matches!(self, EventKind::Lethal | EventKind::ItemSpecialLethal)
    }
}

/// Structured participants of an event, kept alongside the rendered text so
/// a viewer never has to parse prose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    /// The acting tribute (the winner, for victory events).
    pub actor: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub victims: Vec<String>,
    /// Living tributes pulled in by a non-lethal template's extra roles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bystanders: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kills: Option<u32>,
}

/// One line of the arena narrative. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub text: String,
    pub meta: EventMeta,
}

impl Event {
    pub fn new(kind: EventKind, text: String, meta: EventMeta) -> Self {
        Self { kind, text, meta }
    }

    pub fn victims(&self) -> &[String] {
        &self.meta.victims
    }
}
