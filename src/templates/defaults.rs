//! Built-in content used when a configuration omits a pool.

pub const LETHAL_EVENTS: &[&str] = &[
    "{killer} ambushes {victim} near the river.",
    "{killer} traps {victim} in a ravine.",
    "{killer} outmatches {victim} after a tense duel.",
    "{killer} sabotages {victim}'s shelter overnight.",
    "{killer} catches {victim} and {victim2} arguing over supplies and ends both of them.",
];

pub const NON_LETHAL_EVENTS: &[&str] = &[
    "{person} scouts the cornucopia from afar.",
    "{person} gathers herbs and hopes they are edible.",
    "{person} reinforces a hidden bunker.",
    "{person} shares stories with the breeze. Silence answers back.",
    "{person} stalks distant footsteps but loses the trail.",
    "{person} and {ally} agree to a fragile truce.",
    "{person} spots {rival} across the lake and slips away unseen.",
];

pub const INVENTORY_EVENTS: &[&str] = &[
    "{person} sets a {item} and waits patiently.",
    "{person} patches wounds with a trusty {item}.",
    "{person} flashes a {item} to ward off pursuers.",
    "{person} retools a {item} into something even more dangerous.",
];

pub const LOOT_EVENTS: &[&str] = &[
    "{person} pries a {item} from an abandoned pack.",
    "{person} finds a {item} tucked beneath the roots of a tree.",
    "{person} wins a {item} from a sponsor drop.",
];

pub const ITEM_LOOT_EVENTS: &[(&str, &[&str])] = &[
    ("medkit", &["A silver parachute delivers a {item} to {person}."]),
    ("ration pack", &["{person} raids a supply cache and pockets a {item}."]),
];

/// `(item, consumes, templates)`.
pub const SPECIAL_ITEM_EVENTS: &[(&str, bool, &[&str])] = &[
    (
        "throwing knife",
        true,
        &["{person} hurls a {item} that finds {victim} in the dark."],
    ),
    (
        "snare trap",
        true,
        &[
            "{person}'s {item} snaps shut on {victim}.",
            "{person}'s {item} catches {victim} and {victim2} as they flee together.",
        ],
    ),
    (
        "medkit",
        true,
        &["{person} uses a {item} to close a festering wound."],
    ),
    (
        "flare",
        false,
        &["{person} fires a {item} to scatter a pack of mutts."],
    ),
];

pub const INVENTORY_ITEMS: &[&str] = &[
    "medkit",
    "snare trap",
    "flare",
    "camouflage cloak",
    "ration pack",
    "throwing knife",
];

pub const VICTORY_TEMPLATE: &str = "{name} emerges victorious with {kills} elimination(s)!";

pub const LETHAL_FALLBACK: &str = "{killer} eliminates {victim}.";
pub const NON_LETHAL_FALLBACK: &str = "{person} passes the time in silence.";
pub const INVENTORY_FALLBACK: &str = "{person} takes stock of a {item}.";
pub const LOOT_FALLBACK: &str = "{person} finds a {item}.";
