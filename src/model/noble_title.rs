use std::{fmt, str::FromStr};

use crate::error::domain::DomainError;

/// Hereditary rank a character can hold, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NobleTitle {
    Knight,
    Baron,
    Viscount,
    Count,
    Marquis,
    Duke,
    Prince,
    King,
    Emperor,
}

impl NobleTitle {
    pub const ALL: [NobleTitle; 9] = [
        NobleTitle::Knight,
        NobleTitle::Baron,
        NobleTitle::Viscount,
        NobleTitle::Count,
        NobleTitle::Marquis,
        NobleTitle::Duke,
        NobleTitle::Prince,
        NobleTitle::King,
        NobleTitle::Emperor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NobleTitle::Knight => "KNIGHT",
            NobleTitle::Baron => "BARON",
            NobleTitle::Viscount => "VISCOUNT",
            NobleTitle::Count => "COUNT",
            NobleTitle::Marquis => "MARQUIS",
            NobleTitle::Duke => "DUKE",
            NobleTitle::Prince => "PRINCE",
            NobleTitle::King => "KING",
            NobleTitle::Emperor => "EMPEROR",
        }
    }

    pub fn rank_key(&self) -> String {
        format!("noble.rank.{}", self.name().to_lowercase())
    }

    pub fn title_key(&self) -> String {
        format!("noble.title.{}", self.name().to_lowercase())
    }
}

impl fmt::Display for NobleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NobleTitle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|title| title.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownNobleTitle(s.to_string()))
    }
}
