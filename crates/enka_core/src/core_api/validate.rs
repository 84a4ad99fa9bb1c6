use serde_json::Value;

use crate::core_api::error::{ValidationError, ValidationIssue};
use crate::core_api::types::{CharacterRecord, PlayerInfo, PlayerProfile};

/// Parse a raw response body and validate it into a profile.
pub fn parse_profile(body: &str) -> Result<PlayerProfile, ValidationError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ValidationError::single("$", format!("body is not valid JSON: {e}")))?;
    validate_response(&value)
}

/// Validate a decoded response document into a profile.
///
/// The four top-level sections are checked independently, and each element of
/// `avatarInfoList` is checked on its own, so one call reports every
/// first-level problem in the document. The profile is all-or-nothing: any
/// issue discards the whole document.
pub fn validate_response(value: &Value) -> Result<PlayerProfile, ValidationError> {
    let Some(root) = value.as_object() else {
        return Err(ValidationError::single(
            "$",
            "expected a JSON object at the top level",
        ));
    };

    let mut issues = Vec::new();

    let player_info = match root.get("playerInfo") {
        Some(raw) => match serde_json::from_value::<PlayerInfo>(raw.clone()) {
            Ok(info) => Some(info),
            Err(e) => {
                issues.push(ValidationIssue::new("playerInfo", e.to_string()));
                None
            }
        },
        None => {
            issues.push(ValidationIssue::new("playerInfo", "missing required field"));
            None
        }
    };

    let characters = match root.get("avatarInfoList") {
        Some(Value::Array(items)) => {
            let mut records = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match serde_json::from_value::<CharacterRecord>(item.clone()) {
                    Ok(record) => records.push(record),
                    Err(e) => issues.push(ValidationIssue::new(
                        format!("avatarInfoList[{index}]"),
                        e.to_string(),
                    )),
                }
            }
            Some(records)
        }
        Some(_) => {
            issues.push(ValidationIssue::new("avatarInfoList", "expected an array"));
            None
        }
        None => {
            issues.push(ValidationIssue::new(
                "avatarInfoList",
                "missing required field",
            ));
            None
        }
    };

    let ttl = match root.get("ttl") {
        Some(raw) => match raw.as_i64() {
            Some(ttl) => Some(ttl),
            None => {
                issues.push(ValidationIssue::new("ttl", "expected an integer"));
                None
            }
        },
        None => {
            issues.push(ValidationIssue::new("ttl", "missing required field"));
            None
        }
    };

    let uid = match root.get("uid") {
        Some(raw) => match raw.as_str() {
            Some(uid) => Some(uid.to_string()),
            None => {
                issues.push(ValidationIssue::new("uid", "expected a string"));
                None
            }
        },
        None => {
            issues.push(ValidationIssue::new("uid", "missing required field"));
            None
        }
    };

    if issues.is_empty()
        && let (Some(player_info), Some(characters), Some(ttl), Some(uid)) =
            (player_info, characters, ttl, uid)
    {
        Ok(PlayerProfile {
            player_info,
            characters,
            ttl,
            uid,
        })
    } else {
        Err(ValidationError::new(issues))
    }
}
