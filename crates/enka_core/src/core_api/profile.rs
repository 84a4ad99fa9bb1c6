use crate::core_api::names;
use crate::core_api::types::{
    CharacterRecord, EquipmentItem, PlayerProfile, ReliquaryFlat, WeaponCore, WeaponFlat,
};

/// The five artifact slots in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactSlot {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

impl ArtifactSlot {
    pub fn from_equip_type(equip_type: &str) -> Option<Self> {
        match equip_type {
            "EQUIP_BRACER" => Some(Self::Flower),
            "EQUIP_NECKLACE" => Some(Self::Plume),
            "EQUIP_SHOES" => Some(Self::Sands),
            "EQUIP_RING" => Some(Self::Goblet),
            "EQUIP_DRESS" => Some(Self::Circlet),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Flower => "Flower",
            Self::Plume => "Plume",
            Self::Sands => "Sands",
            Self::Goblet => "Goblet",
            Self::Circlet => "Circlet",
        }
    }
}

/// One artifact piece flattened for tabular display: the slot label plus
/// exactly five stat cells (main stat and four substats), absent stats kept
/// as explicit blanks so the row shape never varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRow {
    pub slot: String,
    pub main_stat: Option<String>,
    pub substats: [Option<String>; 4],
}

impl ArtifactRow {
    /// The five stat cells with absent stats as empty strings.
    pub fn stat_cells(&self) -> [&str; 5] {
        [
            self.main_stat.as_deref().unwrap_or(""),
            self.substats[0].as_deref().unwrap_or(""),
            self.substats[1].as_deref().unwrap_or(""),
            self.substats[2].as_deref().unwrap_or(""),
            self.substats[3].as_deref().unwrap_or(""),
        ]
    }
}

/// Equipped weapon with its display name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponSummary<'a> {
    pub name: String,
    pub core: &'a WeaponCore,
    pub flat: &'a WeaponFlat,
}

impl PlayerProfile {
    /// Find a character by translated display name, case-insensitively.
    ///
    /// Returns the first match in list order; an unmatched name is an
    /// ordinary `None`, not an error.
    pub fn find_character(&self, name: &str) -> Option<&CharacterRecord> {
        self.characters
            .iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(name))
    }

    /// Translated names of every character, in list order.
    pub fn character_names(&self) -> Vec<String> {
        self.characters.iter().map(|c| c.display_name()).collect()
    }
}

impl CharacterRecord {
    pub fn display_name(&self) -> String {
        names::character_name(self.avatar_id)
    }

    pub fn friendship_level(&self) -> i64 {
        self.fetter_info.exp_level
    }

    /// Number of unlocked constellations, or `None` when the source omitted
    /// the list entirely.
    pub fn constellations(&self) -> Option<usize> {
        self.talent_id_list.as_ref().map(|list| list.len())
    }

    pub fn fight_prop(&self, key: &str) -> Option<f64> {
        self.fight_prop_map.get(key).copied()
    }

    /// First equipped weapon, if any.
    pub fn weapon_summary(&self) -> Option<WeaponSummary<'_>> {
        self.equip_list.iter().find_map(|item| {
            item.as_weapon().map(|(core, flat)| WeaponSummary {
                name: names::weapon_name(item.item_id()),
                core,
                flat,
            })
        })
    }

    /// Artifact table rows in fixed slot order.
    ///
    /// Reliquary items only. Rows sort Flower, Plume, Sands, Goblet, Circlet;
    /// labels outside that set go last, keeping their relative order.
    pub fn artifact_rows(&self) -> Vec<ArtifactRow> {
        let mut rows: Vec<ArtifactRow> = self
            .equip_list
            .iter()
            .filter_map(EquipmentItem::as_reliquary)
            .map(|(_, flat)| artifact_row(flat))
            .collect();
        rows.sort_by_key(|row| slot_rank(&row.slot));
        rows
    }
}

// ---------------------------------------------------------------------------
// Row construction
// ---------------------------------------------------------------------------

fn artifact_row(flat: &ReliquaryFlat) -> ArtifactRow {
    let slot = match ArtifactSlot::from_equip_type(&flat.equip_type) {
        Some(slot) => slot.label().to_string(),
        None => "Unknown".to_string(),
    };

    let main_stat = flat.reliquary_mainstat.as_ref().map(|main| {
        format!(
            "{} {}",
            names::stat_name(&main.main_prop_id),
            main.stat_value.display_string()
        )
    });

    let mut substats: [Option<String>; 4] = [None, None, None, None];
    if let Some(list) = &flat.reliquary_substats {
        for (i, sub) in list.iter().take(4).enumerate() {
            substats[i] = Some(format!(
                "{} {}",
                names::stat_name(&sub.append_prop_id),
                sub.stat_value.display_string()
            ));
        }
    }

    ArtifactRow {
        slot,
        main_stat,
        substats,
    }
}

fn slot_rank(label: &str) -> usize {
    match label {
        "Flower" => 0,
        "Plume" => 1,
        "Sands" => 2,
        "Goblet" => 3,
        "Circlet" => 4,
        _ => 999,
    }
}

#[cfg(test)]
mod tests {
    use crate::core_api::types::{ReliquaryCore, ReliquaryMainStat, ReliquarySubstat};
    use crate::stat::StatValue;

    use super::*;

    fn reliquary(equip_type: &str, substat_count: usize) -> EquipmentItem {
        let substats: Vec<ReliquarySubstat> = (0..substat_count)
            .map(|i| ReliquarySubstat {
                append_prop_id: "FIGHT_PROP_HP_PERCENT".to_string(),
                stat_value: StatValue::Float(4.1 + i as f64),
            })
            .collect();

        EquipmentItem::Reliquary {
            item_id: 20001,
            core: ReliquaryCore {
                level: 21,
                main_prop_id: 13002,
                append_prop_id_list: vec![],
            },
            flat: ReliquaryFlat {
                name_text_map_hash: "0".to_string(),
                rank_level: 5,
                item_type: "ITEM_RELIQUARY".to_string(),
                icon: "UI_RelicIcon".to_string(),
                equip_type: equip_type.to_string(),
                set_id: Some(15032),
                set_name_text_map_hash: None,
                reliquary_substats: (substat_count > 0).then_some(substats),
                reliquary_mainstat: Some(ReliquaryMainStat {
                    main_prop_id: "FIGHT_PROP_CRITICAL_HURT".to_string(),
                    stat_value: StatValue::Float(62.3),
                }),
            },
        }
    }

    fn character(equips: Vec<EquipmentItem>) -> CharacterRecord {
        CharacterRecord {
            avatar_id: 10000089,
            prop_map: Default::default(),
            talent_id_list: None,
            fight_prop_map: Default::default(),
            skill_depot_id: 8901,
            inherent_proud_skill_list: vec![],
            skill_level_map: Default::default(),
            equip_list: equips,
            fetter_info: crate::core_api::types::FriendshipInfo { exp_level: 10 },
        }
    }

    #[test]
    fn rows_follow_the_fixed_slot_order() {
        let c = character(vec![
            reliquary("EQUIP_DRESS", 0),
            reliquary("EQUIP_BRACER", 0),
            reliquary("EQUIP_RING", 0),
        ]);
        let rows = c.artifact_rows();
        let slots: Vec<&str> = rows.iter().map(|r| r.slot.as_str()).collect();
        assert_eq!(slots, ["Flower", "Goblet", "Circlet"]);
    }

    #[test]
    fn partial_sets_keep_the_order_of_present_slots() {
        let c = character(vec![
            reliquary("EQUIP_RING", 0),
            reliquary("EQUIP_BRACER", 0),
        ]);
        let rows = c.artifact_rows();
        let slots: Vec<&str> = rows.iter().map(|r| r.slot.as_str()).collect();
        assert_eq!(slots, ["Flower", "Goblet"]);
    }

    #[test]
    fn unknown_slots_sort_last_in_stable_order() {
        // The two unrecognized slots carry different substat counts so the
        // assertion can tell them apart.
        let c = character(vec![
            reliquary("EQUIP_CROWN", 1),
            reliquary("EQUIP_HALO", 2),
            reliquary("EQUIP_BRACER", 0),
        ]);
        let rows = c.artifact_rows();
        let slots: Vec<&str> = rows.iter().map(|r| r.slot.as_str()).collect();
        assert_eq!(slots, ["Flower", "Unknown", "Unknown"]);
        assert!(rows[1].substats[1].is_none());
        assert!(rows[2].substats[1].is_some());
    }

    #[test]
    fn row_shape_is_always_five_stat_cells() {
        let c = character(vec![reliquary("EQUIP_BRACER", 2)]);
        let rows = c.artifact_rows();
        let cells = rows[0].stat_cells();

        assert_eq!(cells[0], "CRIT DMG 62.3%");
        assert_eq!(cells[1], "HP Percent 4.1%");
        assert_eq!(cells[2], "HP Percent 5.1%");
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "");
    }

    #[test]
    fn only_the_first_four_substats_are_kept() {
        let c = character(vec![reliquary("EQUIP_BRACER", 6)]);
        let rows = c.artifact_rows();
        assert!(rows[0].substats.iter().all(|s| s.is_some()));
        assert_eq!(rows[0].substats.len(), 4);
    }

    #[test]
    fn weapons_never_appear_in_artifact_rows() {
        let weapon = EquipmentItem::Weapon {
            item_id: 13501,
            core: WeaponCore {
                level: 90,
                promote_level: 6,
                affix_map: Default::default(),
            },
            flat: WeaponFlat {
                name_text_map_hash: "0".to_string(),
                rank_level: 5,
                item_type: "ITEM_WEAPON".to_string(),
                icon: "UI_EquipIcon".to_string(),
                weapon_stats: vec![],
            },
        };

        let c = character(vec![weapon, reliquary("EQUIP_BRACER", 0)]);
        assert_eq!(c.artifact_rows().len(), 1);
        assert_eq!(
            c.weapon_summary().expect("expected a weapon").name,
            "Staff of Homa"
        );
    }
}
