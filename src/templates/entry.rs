use serde::{Deserialize, Serialize};

use super::tokens::{placeholders, victim_index, victim_slot};

/// A template as an author wrote it: a bare string, or an object that can
/// pin down what inference would otherwise guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateDef {
    Text(String),
    Entry {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        victims: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lethal: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        consumes: Option<bool>,
    },
}

impl TemplateDef {
    pub fn text(&self) -> &str {
        match self {
            TemplateDef::Text(text) => text,
            TemplateDef::Entry { text, .. } => text,
        }
    }

    fn victims(&self) -> Option<usize> {
        match self {
            TemplateDef::Text(_) => None,
            TemplateDef::Entry { victims, .. } => *victims,
        }
    }

    fn lethal(&self) -> Option<bool> {
        match self {
            TemplateDef::Text(_) => None,
            TemplateDef::Entry { lethal, .. } => *lethal,
        }
    }

    fn consumes(&self) -> Option<bool> {
        match self {
            TemplateDef::Text(_) => None,
            TemplateDef::Entry { consumes, .. } => *consumes,
        }
    }
}

impl From<&str> for TemplateDef {
    fn from(text: &str) -> Self {
        TemplateDef::Text(text.to_string())
    }
}

/// Which pool a template belongs to. Decides the base placeholders that are
/// always bound and how victims and extra roles are inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Lethal,
    NonLethal,
    /// Inventory-use and loot lines.
    Flavor,
    SpecialItem,
}

impl TemplateKind {
    fn base_placeholders(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Lethal => &["person", "killer"],
            TemplateKind::NonLethal => &["person"],
            TemplateKind::Flavor => &["person", "item"],
            TemplateKind::SpecialItem => &["person", "killer", "item"],
        }
    }
}

/// Canonical template record, built once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub text: String,
    /// Every distinct placeholder in the text, in order of appearance.
    pub placeholders: Vec<String>,
    /// `victim`, `victim2`, ... one per required victim.
    pub victim_slots: Vec<String>,
    /// Non-victim placeholders that must each be bound to another living tribute.
    pub roles: Vec<String>,
    pub lethal: bool,
    /// Per-template override of the owning rule's consumption flag.
    pub consumes: Option<bool>,
}

impl TemplateEntry {
    pub fn normalize(kind: TemplateKind, def: &TemplateDef) -> Self {
        let text = def.text().to_string();
        let placeholders = placeholders(&text);
        let inferred = placeholders
            .iter()
            .filter_map(|p| victim_index(p))
            .max()
            .unwrap_or(0);

        let (victim_count, roles, lethal) = match kind {
            TemplateKind::Lethal => (def.victims().unwrap_or(inferred).max(1), Vec::new(), true),
            TemplateKind::NonLethal => {
                let base = kind.base_placeholders();
                let roles = placeholders
                    .iter()
                    .filter(|p| !base.contains(&p.as_str()))
                    .cloned()
                    .collect();
                (0, roles, false)
            }
            TemplateKind::Flavor => (0, Vec::new(), false),
            TemplateKind::SpecialItem => {
                let count = match def.lethal() {
                    Some(false) => 0,
                    Some(true) => def.victims().unwrap_or(inferred).max(1),
                    None => def.victims().unwrap_or(inferred),
                };
                (count, Vec::new(), count > 0)
            }
        };

        Self {
            text,
            placeholders,
            victim_slots: (1..=victim_count).map(victim_slot).collect(),
            roles,
            lethal,
            consumes: def.consumes(),
        }
    }

    pub fn victim_count(&self) -> usize {
        self.victim_slots.len()
    }

    /// Living non-actors this template needs, victims and bystanders together.
    pub fn cast_size(&self) -> usize {
        self.victim_slots.len() + self.roles.len()
    }
}

/// Explicit form of a normalized entry. Normalizing it again yields the
/// same record.
impl From<&TemplateEntry> for TemplateDef {
    fn from(entry: &TemplateEntry) -> Self {
        TemplateDef::Entry {
            text: entry.text.clone(),
            victims: Some(entry.victim_count()),
            lethal: Some(entry.lethal),
            consumes: entry.consumes,
        }
    }
}

/// Raw special-item rule: a bare template list, or a list with a rule-level
/// consumption default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecialRuleDef {
    Templates(Vec<TemplateDef>),
    Rule {
        #[serde(default)]
        consumes: bool,
        templates: Vec<TemplateDef>,
    },
}

/// Item-gated templates for one item identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialItemRule {
    pub templates: Vec<TemplateEntry>,
    pub consumes: bool,
}

impl SpecialItemRule {
    pub fn new(consumes: bool, defs: &[TemplateDef]) -> Self {
        Self {
            templates: defs
                .iter()
                .map(|d| TemplateEntry::normalize(TemplateKind::SpecialItem, d))
                .collect(),
            consumes,
        }
    }

    pub fn from_def(def: &SpecialRuleDef) -> Self {
        match def {
            SpecialRuleDef::Templates(defs) => Self::new(false, defs),
            SpecialRuleDef::Rule { consumes, templates } => Self::new(*consumes, templates),
        }
    }

    /// Whether firing `template` uses up the item.
    pub fn consumes_with(&self, template: &TemplateEntry) -> bool {
        template.consumes.unwrap_or(self.consumes)
    }
}
