use std::collections::BTreeMap;

use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::stat::StatValue;

/// Validated root of a `/api/uid/{uid}` response.
///
/// `characters` keeps the order the API returned; it is not re-sorted and
/// does not necessarily match any in-game ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player_info: PlayerInfo,
    pub characters: Vec<CharacterRecord>,
    pub ttl: i64,
    pub uid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub nickname: String,
    pub level: i64,
    pub world_level: i64,
    pub name_card_id: i64,
    pub finish_achievement_num: i64,
    pub tower_floor_index: i64,
    pub tower_level_index: i64,
    pub show_avatar_info_list: Vec<ShowcaseEntry>,
    pub profile_picture: ProfilePicture,
    pub theater_act_index: Option<i64>,
    pub theater_mode_index: Option<i64>,
    pub theater_star_index: Option<i64>,
    pub fetter_count: Option<i64>,
    pub tower_star_index: Option<i64>,
    pub stygian_index: Option<i64>,
    pub stygian_seconds: Option<i64>,
    pub stygian_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseEntry {
    pub avatar_id: i64,
    pub level: i64,
    pub energy_type: i64,
    pub costume_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePicture {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub avatar_id: i64,
    pub prop_map: BTreeMap<String, Value>,
    /// `None` means the source omitted the field, which is not the same as an
    /// empty list of unlocked constellations.
    pub talent_id_list: Option<Vec<i64>>,
    pub fight_prop_map: BTreeMap<String, f64>,
    pub skill_depot_id: i64,
    pub inherent_proud_skill_list: Vec<i64>,
    pub skill_level_map: BTreeMap<String, i64>,
    pub equip_list: Vec<EquipmentItem>,
    pub fetter_info: FriendshipInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipInfo {
    pub exp_level: i64,
}

/// One equipped item, either an artifact or a weapon.
///
/// On the wire this is a single object whose `flat` shape depends on which of
/// the optional `reliquary`/`weapon` cores is present. The variant is chosen
/// by reading those sibling fields, never by probing the shape of `flat`
/// itself: the two flat layouts overlap enough that structural guessing would
/// misclassify records.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentItem {
    Reliquary {
        item_id: i64,
        core: ReliquaryCore,
        flat: ReliquaryFlat,
    },
    Weapon {
        item_id: i64,
        core: WeaponCore,
        flat: WeaponFlat,
    },
}

impl EquipmentItem {
    pub fn item_id(&self) -> i64 {
        match *self {
            Self::Reliquary { item_id, .. } | Self::Weapon { item_id, .. } => item_id,
        }
    }

    pub fn as_reliquary(&self) -> Option<(&ReliquaryCore, &ReliquaryFlat)> {
        match self {
            Self::Reliquary { core, flat, .. } => Some((core, flat)),
            Self::Weapon { .. } => None,
        }
    }

    pub fn as_weapon(&self) -> Option<(&WeaponCore, &WeaponFlat)> {
        match self {
            Self::Weapon { core, flat, .. } => Some((core, flat)),
            Self::Reliquary { .. } => None,
        }
    }
}

impl Serialize for EquipmentItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Reliquary {
                item_id,
                core,
                flat,
            } => {
                let mut state = serializer.serialize_struct("EquipmentItem", 3)?;
                state.serialize_field("itemId", item_id)?;
                state.serialize_field("reliquary", core)?;
                state.serialize_field("flat", flat)?;
                state.end()
            }
            Self::Weapon {
                item_id,
                core,
                flat,
            } => {
                let mut state = serializer.serialize_struct("EquipmentItem", 3)?;
                state.serialize_field("itemId", item_id)?;
                state.serialize_field("weapon", core)?;
                state.serialize_field("flat", flat)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for EquipmentItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawEquip {
            item_id: i64,
            reliquary: Option<ReliquaryCore>,
            weapon: Option<WeaponCore>,
            flat: Value,
        }

        let raw = RawEquip::deserialize(deserializer)?;
        match (raw.reliquary, raw.weapon) {
            (Some(core), None) => {
                let flat = ReliquaryFlat::deserialize(raw.flat).map_err(|e| {
                    de::Error::custom(format!("flat does not match the reliquary core: {e}"))
                })?;
                Ok(Self::Reliquary {
                    item_id: raw.item_id,
                    core,
                    flat,
                })
            }
            (None, Some(core)) => {
                let flat = WeaponFlat::deserialize(raw.flat).map_err(|e| {
                    de::Error::custom(format!("flat does not match the weapon core: {e}"))
                })?;
                Ok(Self::Weapon {
                    item_id: raw.item_id,
                    core,
                    flat,
                })
            }
            (Some(_), Some(_)) => Err(de::Error::custom(
                "equipment carries both a reliquary and a weapon core",
            )),
            (None, None) => Err(de::Error::custom(
                "equipment carries neither a reliquary nor a weapon core",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliquaryCore {
    pub level: i64,
    pub main_prop_id: i64,
    pub append_prop_id_list: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponCore {
    pub level: i64,
    pub promote_level: i64,
    pub affix_map: BTreeMap<String, i64>,
}

impl WeaponCore {
    /// Refinement rank shown in game: highest affix value plus one, or R1
    /// when the affix map is empty.
    pub fn refinement(&self) -> i64 {
        self.affix_map.values().max().map_or(1, |v| v + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliquaryFlat {
    pub name_text_map_hash: String,
    pub rank_level: i64,
    pub item_type: String,
    pub icon: String,
    pub equip_type: String,
    pub set_id: Option<i64>,
    pub set_name_text_map_hash: Option<String>,
    pub reliquary_substats: Option<Vec<ReliquarySubstat>>,
    pub reliquary_mainstat: Option<ReliquaryMainStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliquaryMainStat {
    pub main_prop_id: String,
    pub stat_value: StatValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliquarySubstat {
    pub append_prop_id: String,
    pub stat_value: StatValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponFlat {
    pub name_text_map_hash: String,
    pub rank_level: i64,
    pub item_type: String,
    pub icon: String,
    pub weapon_stats: Vec<WeaponStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponStat {
    pub append_prop_id: String,
    pub stat_value: StatValue,
}
