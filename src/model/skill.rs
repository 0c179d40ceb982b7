//! Skills raise a character's stats as they gain experience.
//!
//! Levels follow a square-root curve: reaching level `l` takes
//! `ceil(4 * l² * ratio)` experience, so higher ratios make a skill slower to
//! train.

use std::fmt;

use crate::{
    error::domain::DomainError,
    model::{stats::Stats, translation::Translator},
    util::math::as_roman_numeral,
};

pub type StatModifier = fn(&Skill, Stats, i64) -> Stats;

pub struct Skill {
    pub name: &'static str,
    pub max_level: u32,
    pub experience_ratio: f64,
    pub modify_stats: StatModifier,
}

impl Skill {
    pub const fn new(
        name: &'static str,
        max_level: u32,
        experience_ratio: f64,
        modify_stats: StatModifier,
    ) -> Self {
        Self {
            name,
            max_level,
            experience_ratio,
            modify_stats,
        }
    }

    pub fn experience_to_level(&self, experience: i64) -> u32 {
        if experience <= 0 {
            return 0;
        }
        // Epsilon absorbs float error for experience values produced by level_to_experience.
        let level = ((experience as f64 / self.experience_ratio).sqrt() / 2.0 + 1e-9).floor();
        (level as u32).min(self.max_level)
    }

    pub fn level_to_experience(&self, level: u32) -> i64 {
        let level = level as f64;
        (4.0 * level * level * self.experience_ratio).ceil() as i64
    }

    pub fn apply(&self, stats: Stats, experience: i64) -> Stats {
        (self.modify_stats)(self, stats, experience)
    }

    pub fn translation_key(&self) -> String {
        format!("skill.{}", self.name)
    }

    pub fn description_key(&self) -> String {
        format!("skill.{}.description", self.name)
    }

    /// Translated name, suffixed with the roman-numeral level for multi-level skills.
    pub fn formatted_name(&self, translator: &impl Translator, language: &str, experience: i64) -> String {
        let name = translator.translate(language, &self.translation_key());
        if self.max_level <= 1 {
            return name;
        }
        format!("{} {}", name, as_roman_numeral(self.experience_to_level(experience)))
    }

    pub fn formatted_description(&self, translator: &impl Translator, language: &str) -> String {
        translator.translate(language, &self.description_key())
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Skill {}

impl fmt::Debug for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skill")
            .field("name", &self.name)
            .field("max_level", &self.max_level)
            .field("experience_ratio", &self.experience_ratio)
            .finish()
    }
}

pub static MEGALUCK: Skill = Skill::new("MEGALUCK", 1, 1.0, |_, stats, _| Stats {
    luck: stats.luck + 10,
    ..stats
});

pub static MANA_CONTROL: Skill = Skill::new("MANA_CONTROL", 20, 1.5, |skill, stats, exp| {
    let level = skill.experience_to_level(exp) as i32;
    Stats {
        mana_points: stats.mana_points + 5 * level,
        intelligence: stats.intelligence + 3 * level,
        magic: stats.magic + level,
        ..stats
    }
});

pub static SWIFT_FEET: Skill = Skill::new("SWIFT_FEET", 10, 1.0, |skill, stats, exp| {
    let level = skill.experience_to_level(exp) as i32;
    Stats {
        agility: stats.agility + 5 * level,
        ..stats
    }
});

pub static IRON_SKIN: Skill = Skill::new("IRON_SKIN", 10, 1.2, |skill, stats, exp| {
    let level = skill.experience_to_level(exp) as i32;
    Stats {
        health_points: stats.health_points + 5 * level,
        vitality: stats.vitality + 2 * level,
        ..stats
    }
});

pub static ALL_SKILLS: [&Skill; 4] = [&MEGALUCK, &MANA_CONTROL, &SWIFT_FEET, &IRON_SKIN];

/// Skills offered when a character is created, with the level they start at.
pub static STARTER_SKILL_SET: [(&Skill, u32); 4] = [
    (&MANA_CONTROL, 1),
    (&SWIFT_FEET, 1),
    (&IRON_SKIN, 1),
    (&MEGALUCK, 1),
];

pub fn skill_by_name(name: &str) -> Result<&'static Skill, DomainError> {
    ALL_SKILLS
        .iter()
        .copied()
        .find(|skill| skill.name == name)
        .ok_or_else(|| DomainError::UnknownSkill(name.to_string()))
}

pub fn starter_skill(name: &str) -> Option<(&'static Skill, u32)> {
    STARTER_SKILL_SET
        .iter()
        .copied()
        .find(|(skill, _)| skill.name == name)
}
