//! Built-in ID-to-name tables for characters, artifact sets, weapons, and
//! combat properties.
//!
//! These are static snapshots assembled from showcase data; the upstream API
//! only ships text-map hashes, not names. A lookup miss never fails: every
//! function falls back to a stable `"{DomainLabel} {id}"` placeholder so
//! rendering keeps working for content the tables have not caught up with.

struct NameEntry {
    id: i64,
    name: &'static str,
}

struct FightPropEntry {
    key: &'static str,
    name: &'static str,
}

// TODO: generate these tables from the public Excel config dumps instead of
// maintaining them by hand.
#[rustfmt::skip]
const CHARACTER_NAMES: &[NameEntry] = &[
    NameEntry { id: 10000025, name: "Xingqiu" },
    NameEntry { id: 10000030, name: "Zhongli" },
    NameEntry { id: 10000031, name: "Fischl" },
    NameEntry { id: 10000046, name: "Hutao" },
    NameEntry { id: 10000047, name: "Kazuha" },
    NameEntry { id: 10000060, name: "Yelan" },
    NameEntry { id: 10000073, name: "Nahida" },
    NameEntry { id: 10000082, name: "Baizhu" },
    NameEntry { id: 10000087, name: "Neuvillette" },
    NameEntry { id: 10000089, name: "Furina" },
    NameEntry { id: 10000103, name: "Xilonen" },
    NameEntry { id: 10000123, name: "Durin" },
];

#[rustfmt::skip]
const ARTIFACT_SETS: &[NameEntry] = &[
    NameEntry { id: 15001, name: "Gladiator's Finale" },
    NameEntry { id: 15002, name: "Deepwood Memories" },
    NameEntry { id: 15003, name: "Gilded Dreams" },
    NameEntry { id: 15006, name: "Crimson Witch of Flames" },
    NameEntry { id: 15007, name: "Shimenawa's Reminiscence" },
    NameEntry { id: 15017, name: "Tenacity of the Millelith" },
    NameEntry { id: 15019, name: "Pale Flame" },
    NameEntry { id: 15020, name: "Heart of Depth" },
    NameEntry { id: 15025, name: "Vourukasha's Glow" },
    NameEntry { id: 15026, name: "Nighttime Whispers in the Echoing Woods" },
    NameEntry { id: 15028, name: "Song of Days Past" },
    NameEntry { id: 15031, name: "Marechaussee Hunter" },
    NameEntry { id: 15032, name: "Golden Troupe" },
    NameEntry { id: 15037, name: "Fragment of Harmonic Whimsy" },
];

#[rustfmt::skip]
const WEAPON_NAMES: &[NameEntry] = &[
    NameEntry { id: 11401, name: "Favonius Sword" },          // Sword_Zephyrus
    NameEntry { id: 11403, name: "Sacrificial Sword" },       // Sword_Fossil
    NameEntry { id: 11422, name: "Lion's Roar" },             // Sword_Kasabouzu
    NameEntry { id: 11424, name: "The Flute" },               // Sword_Boreas
    NameEntry { id: 11426, name: "Iron Sting" },              // Sword_Machination
    NameEntry { id: 13303, name: "Sacrificial Lance" },       // Pole_Noire
    NameEntry { id: 13501, name: "Staff of Homa" },           // Pole_Homa
    NameEntry { id: 14403, name: "Sacrificial Fragments" },   // Catalyst_Fossil
    NameEntry { id: 14406, name: "Prototype Amber" },         // Catalyst_Proto
    NameEntry { id: 14424, name: "The Widsith" },             // Catalyst_Yue
    NameEntry { id: 15401, name: "Favonius Warbow" },         // Bow_Zephyrus
    NameEntry { id: 15409, name: "The Viridescent Hunt" },    // Bow_Viridescent
];

// Numeric fightPropMap keys. Keys are stringified property IDs as the API
// sends them.
#[rustfmt::skip]
const FIGHT_PROPS: &[FightPropEntry] = &[
    FightPropEntry { key: "1",  name: "HP" },
    FightPropEntry { key: "2",  name: "ATK" },
    FightPropEntry { key: "3",  name: "DEF" },
    FightPropEntry { key: "4",  name: "HP%" },
    FightPropEntry { key: "5",  name: "ATK%" },
    FightPropEntry { key: "6",  name: "DEF%" },
    FightPropEntry { key: "7",  name: "Elemental Mastery" },
    FightPropEntry { key: "8",  name: "Energy Recharge" },
    FightPropEntry { key: "9",  name: "CRIT Rate" },
    FightPropEntry { key: "20", name: "CRIT Rate" },
    FightPropEntry { key: "22", name: "CRIT DMG" },
    FightPropEntry { key: "23", name: "Incoming Healing Bonus" },
    FightPropEntry { key: "26", name: "Elemental DMG Bonus" },
    FightPropEntry { key: "27", name: "Physical DMG Bonus" },
    FightPropEntry { key: "28", name: "Elemental Mastery" },
    FightPropEntry { key: "40", name: "Pyro DMG Bonus" },
    FightPropEntry { key: "41", name: "Electro DMG Bonus" },
    FightPropEntry { key: "42", name: "Hydro DMG Bonus" },
    FightPropEntry { key: "43", name: "Dendro DMG Bonus" },
    FightPropEntry { key: "44", name: "Anemo DMG Bonus" },
    FightPropEntry { key: "45", name: "Geo DMG Bonus" },
    FightPropEntry { key: "46", name: "Cryo DMG Bonus" },
    FightPropEntry { key: "50", name: "Pyro RES" },
    FightPropEntry { key: "51", name: "Electro RES" },
    FightPropEntry { key: "52", name: "Hydro RES" },
    FightPropEntry { key: "53", name: "Dendro RES" },
    FightPropEntry { key: "54", name: "Anemo RES" },
    FightPropEntry { key: "55", name: "Geo RES" },
    FightPropEntry { key: "56", name: "Cryo RES" },
];

// Applied in order to the title-cased symbolic tag; longer phrases must come
// before their prefixes ("Critical Hurt" before "Critical").
#[rustfmt::skip]
const PHRASE_REPLACEMENTS: &[(&str, &str)] = &[
    ("Critical Hurt",     "CRIT DMG"),
    ("Critical",          "CRIT Rate"),
    ("Charge Efficiency", "Energy Recharge"),
    ("Element Mastery",   "Elemental Mastery"),
    ("Fire Add Hurt",     "Pyro DMG Bonus"),
    ("Water Add Hurt",    "Hydro DMG Bonus"),
    ("Grass Add Hurt",    "Dendro DMG Bonus"),
    ("Elec Add Hurt",     "Electro DMG Bonus"),
    ("Wind Add Hurt",     "Anemo DMG Bonus"),
    ("Rock Add Hurt",     "Geo DMG Bonus"),
    ("Ice Add Hurt",      "Cryo DMG Bonus"),
    ("Base Attack",       "Base ATK"),
    ("Attack",            "ATK"),
    ("Defense",           "DEF"),
    ("Hp",                "HP"),
];

/// Display name for a character, or `"Character {id}"` when unknown.
pub fn character_name(avatar_id: i64) -> String {
    match lookup(CHARACTER_NAMES, avatar_id) {
        Some(name) => name.to_string(),
        None => format!("Character {avatar_id}"),
    }
}

/// Display name for an artifact set, or `"Set {id}"` when unknown.
pub fn artifact_set_name(set_id: i64) -> String {
    match lookup(ARTIFACT_SETS, set_id) {
        Some(name) => name.to_string(),
        None => format!("Set {set_id}"),
    }
}

/// Display name for a weapon, or `"Weapon {id}"` when unknown.
pub fn weapon_name(weapon_id: i64) -> String {
    match lookup(WEAPON_NAMES, weapon_id) {
        Some(name) => name.to_string(),
        None => format!("Weapon {weapon_id}"),
    }
}

/// Display name for a numeric fight-prop key, or `"Prop {key}"` when unknown.
pub fn fight_prop_name(prop_key: &str) -> String {
    match FIGHT_PROPS.iter().find(|e| e.key == prop_key) {
        Some(entry) => entry.name.to_string(),
        None => format!("Prop {prop_key}"),
    }
}

/// Display name for a stat key of either kind.
///
/// Symbolic `FIGHT_PROP_*` tags are converted algorithmically; anything else
/// goes through the numeric table with its `"Prop {key}"` fallback.
pub fn stat_name(key: &str) -> String {
    match key.strip_prefix("FIGHT_PROP_") {
        Some(tag) => symbolic_stat_name(tag),
        None => fight_prop_name(key),
    }
}

fn lookup(table: &[NameEntry], id: i64) -> Option<&'static str> {
    table.iter().find(|e| e.id == id).map(|e| e.name)
}

fn symbolic_stat_name(tag: &str) -> String {
    let mut name = tag
        .split('_')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    for &(phrase, replacement) in PHRASE_REPLACEMENTS {
        if name.contains(phrase) {
            name = name.replace(phrase, replacement);
        }
    }
    name
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
