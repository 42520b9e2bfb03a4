use std::fmt;

use crate::core::types::{Action, CatalogRecord, Creature, StatEntry, Trait};

fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

fn generation_label(raw: &str) -> String {
    raw.strip_prefix("generation-").unwrap_or(raw).to_uppercase()
}

fn optional_number(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

/// Catalog sizes are decimetres and hectograms.
fn tenths(value: i64) -> String {
    format!("{:.1}", value as f64 / 10.0)
}

fn stat_line(stat: &StatEntry) -> String {
    let base = format!("{} - Base Value: {}", title_case(&stat.name), stat.base_stat);
    match &stat.expanded {
        Some(detail) => format!(
            "{base} (ID: {}, Battle Only: {})",
            detail.id,
            if detail.is_battle_only { "Yes" } else { "No" }
        ),
        None => base,
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(20);
        writeln!(f)?;
        writeln!(f, "{rule} Pokemon: {} {rule}", title_case(&self.name))?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Height: {} meters", tenths(self.height))?;
        writeln!(f, "Weight: {} kg", tenths(self.weight))?;
        writeln!(f)?;

        writeln!(f, "----- Stats -----")?;
        for stat in &self.stats {
            writeln!(f, "{}", stat_line(stat))?;
        }

        writeln!(f)?;
        writeln!(f, "----- Type(s) -----")?;
        let types = self
            .types
            .iter()
            .map(|name| title_case(name))
            .collect::<Vec<_>>();
        writeln!(f, "{}", types.join(" "))?;

        writeln!(f)?;
        writeln!(f, "----- Abilities -----")?;
        for ability in &self.abilities {
            match &ability.expanded {
                Some(record) => writeln!(f, "{record}")?,
                None => writeln!(
                    f,
                    "{} -> Additional Info: {}",
                    title_case(&ability.name),
                    ability.url
                )?,
            }
        }

        writeln!(f)?;
        writeln!(f, "----- Moves -----")?;
        for entry in &self.moves {
            match &entry.expanded {
                Some(record) => writeln!(f, "{record}")?,
                None => writeln!(
                    f,
                    "{} (Level {}) -> Additional Info: {}",
                    title_case(&entry.name),
                    entry.level_learned_at,
                    entry.url
                )?,
            }
        }
        writeln!(f, "{}", "=".repeat(100))
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let possessors = self
            .pokemon
            .iter()
            .map(|name| title_case(name))
            .collect::<Vec<_>>();
        writeln!(f, "{} - ID: {}", title_case(&self.name), self.id)?;
        writeln!(f, "Generation: {}", generation_label(&self.generation))?;
        writeln!(f, "Effect: {}", self.effect)?;
        writeln!(f, "Effect (short): {}", self.short_effect)?;
        writeln!(
            f,
            "Pokemon that can learn {}: {}.",
            self.name.to_lowercase(),
            possessors.join(", ")
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} - ID: {}",
            title_case(&self.name.replace('-', " ")),
            self.id
        )?;
        writeln!(f, "Generation: {}", generation_label(&self.generation))?;
        writeln!(f, "Accuracy: {}", optional_number(self.accuracy))?;
        writeln!(f, "PP: {}", optional_number(self.pp))?;
        writeln!(f, "Power: {}", optional_number(self.power))?;
        writeln!(f, "Move Type: {}", title_case(&self.move_type))?;
        writeln!(f, "Damage Class: {}", title_case(&self.damage_class))?;
        writeln!(f, "Effect: {}", self.short_effect)
    }
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creature(record) => fmt::Display::fmt(record, f),
            Self::Trait(record) => fmt::Display::fmt(record, f),
            Self::Action(record) => fmt::Display::fmt(record, f),
        }
    }
}
