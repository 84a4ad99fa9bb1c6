mod error;
mod profile;
mod types;
mod validate;
pub mod names;

pub use error::{ValidationError, ValidationIssue};
pub use profile::{ArtifactRow, ArtifactSlot, WeaponSummary};
pub use types::{
    CharacterRecord, EquipmentItem, FriendshipInfo, PlayerInfo, PlayerProfile, ProfilePicture,
    ReliquaryCore, ReliquaryFlat, ReliquaryMainStat, ReliquarySubstat, ShowcaseEntry, WeaponCore,
    WeaponFlat, WeaponStat,
};
pub use validate::{parse_profile, validate_response};
