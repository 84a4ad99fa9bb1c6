use std::fmt::Write as _;
use std::path::Path;

use enka_core::core_api::names;
use enka_core::core_api::{ArtifactRow, CharacterRecord, EquipmentItem, PlayerProfile};

const TABLE_COL_WIDTH: usize = 25;
const TABLE_RULE_WIDTH: usize = 120;
const CSV_HEADER: [&str; 6] = [
    "Artifact",
    "Main Stat",
    "Substat 1",
    "Substat 2",
    "Substat 3",
    "Substat 4",
];

pub fn render_player_summary(profile: &PlayerProfile) -> String {
    let player = &profile.player_info;

    let mut out = String::new();
    writeln!(&mut out, "=== PROFILE INFORMATION ===").expect("writing to String cannot fail");
    writeln!(&mut out, "Nickname: {}", player.nickname).expect("writing to String cannot fail");
    writeln!(&mut out, "Level: {}", player.level).expect("writing to String cannot fail");
    writeln!(&mut out, "World Level: {}", player.world_level)
        .expect("writing to String cannot fail");
    writeln!(&mut out, "Achievements: {}", player.finish_achievement_num)
        .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "Abyss Floor: {}-{}",
        player.tower_floor_index, player.tower_level_index
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(
        &mut out,
        "Showcase Characters ({}):",
        player.show_avatar_info_list.len()
    )
    .expect("writing to String cannot fail");
    for (i, entry) in player.show_avatar_info_list.iter().enumerate() {
        writeln!(
            &mut out,
            "  {}. {} (ID: {}), Level: {}",
            i + 1,
            names::character_name(entry.avatar_id),
            entry.avatar_id,
            entry.level
        )
        .expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(&mut out, "Response TTL: {} seconds", profile.ttl)
        .expect("writing to String cannot fail");

    out
}

pub fn render_character_details(record: &CharacterRecord) -> String {
    let mut out = String::new();
    writeln!(
        &mut out,
        "--- {} (ID: {}) ---",
        record.display_name(),
        record.avatar_id
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out, "  Friendship Level: {}", record.friendship_level())
        .expect("writing to String cannot fail");
    match record.constellations() {
        Some(count) => writeln!(&mut out, "  Constellations: {count} unlocked"),
        None => writeln!(&mut out, "  Constellations: None"),
    }
    .expect("writing to String cannot fail");

    for (key, label) in [("1", "HP"), ("2", "ATK"), ("3", "DEF")] {
        if let Some(value) = record.fight_prop(key) {
            writeln!(&mut out, "  {label}: {value:.0}").expect("writing to String cannot fail");
        }
    }
    // Crit props arrive as fractions of one, unlike the flat stats above.
    for (key, label) in [("20", "CRIT Rate"), ("22", "CRIT DMG")] {
        if let Some(value) = record.fight_prop(key) {
            writeln!(&mut out, "  {}: {:.1}%", label, value * 100.0)
                .expect("writing to String cannot fail");
        }
    }

    writeln!(&mut out, "  Equipment ({} items):", record.equip_list.len())
        .expect("writing to String cannot fail");
    for item in &record.equip_list {
        match item {
            EquipmentItem::Reliquary { flat, .. } => {
                let set_label = match flat.set_id {
                    Some(id) => format!(" ({})", names::artifact_set_name(id)),
                    None => String::new(),
                };
                if let Some(main) = &flat.reliquary_mainstat {
                    writeln!(
                        &mut out,
                        "    Artifact{}: {} = {}",
                        set_label,
                        names::stat_name(&main.main_prop_id),
                        main.stat_value.display_string()
                    )
                    .expect("writing to String cannot fail");
                }
                if let Some(substats) = &flat.reliquary_substats {
                    for substat in substats {
                        writeln!(
                            &mut out,
                            "      {}: {}",
                            names::stat_name(&substat.append_prop_id),
                            substat.stat_value.display_string()
                        )
                        .expect("writing to String cannot fail");
                    }
                }
            }
            EquipmentItem::Weapon {
                item_id,
                core,
                flat,
            } => {
                writeln!(
                    &mut out,
                    "    {}: Level {}, Refinement R{}",
                    names::weapon_name(*item_id),
                    core.level,
                    core.refinement()
                )
                .expect("writing to String cannot fail");
                for stat in &flat.weapon_stats {
                    writeln!(
                        &mut out,
                        "      {}: {}",
                        names::stat_name(&stat.append_prop_id),
                        stat.stat_value.display_string()
                    )
                    .expect("writing to String cannot fail");
                }
            }
        }
    }

    out
}

pub fn render_artifact_table(character_name: &str, rows: &[ArtifactRow]) -> String {
    let mut out = String::new();
    writeln!(&mut out, "{}", "=".repeat(TABLE_RULE_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(&mut out, "ARTIFACTS FOR {}", character_name.to_uppercase())
        .expect("writing to String cannot fail");
    writeln!(&mut out, "{}", "=".repeat(TABLE_RULE_WIDTH))
        .expect("writing to String cannot fail");

    writeln!(&mut out, "{}", table_line(CSV_HEADER)).expect("writing to String cannot fail");
    for row in rows {
        let cells = row.stat_cells();
        writeln!(
            &mut out,
            "{}",
            table_line([
                row.slot.as_str(),
                cells[0],
                cells[1],
                cells[2],
                cells[3],
                cells[4],
            ])
        )
        .expect("writing to String cannot fail");
    }
    writeln!(&mut out, "{}", "=".repeat(TABLE_RULE_WIDTH))
        .expect("writing to String cannot fail");

    out
}

pub fn write_artifact_csv(path: &Path, rows: &[ArtifactRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        let cells = row.stat_cells();
        writer.write_record([
            row.slot.as_str(),
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn default_csv_filename(character_name: &str) -> String {
    format!("{}_artifacts.csv", character_name.to_lowercase())
}

fn table_line(cells: [&str; 6]) -> String {
    let mut line = String::with_capacity(6 * (TABLE_COL_WIDTH + 2));
    for cell in cells {
        line.push_str(&format!(
            "{:<w$}  ",
            fit_column(cell, TABLE_COL_WIDTH),
            w = TABLE_COL_WIDTH
        ));
    }
    line.trim_end().to_string()
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}
