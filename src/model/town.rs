//! Towns of the world map and the roads between them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::domain::DomainError,
    model::location::Location,
    util::{math::round, text::discord_relative_timestamp},
};

/// Base walking speed in distance units per second.
pub const WALK_SPEED: i64 = 6;

/// Kilometres per mile, used when showing distances in both units.
const KM_PER_MILE: f64 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

/// Buildings and institutions a town has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub capital: bool,
    pub citadel: bool,
    pub plaza: bool,
    pub port: bool,
    pub shanty: bool,
    pub temple: bool,
    pub walls: bool,
    pub blacksmith: bool,
    pub herb_garden: bool,
    pub merchants_guild: bool,
    pub adventurers_guild: bool,
    pub blacksmiths_guild: bool,
    pub herbologists_guild: bool,
}

/// A road from one town to a destination location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Destination as a location string, e.g. `Lakevale` or `Wharfwind:PORT`.
    pub name: String,
    pub distance: u32,
}

impl Connection {
    pub fn new(name: impl Into<String>, distance: u32) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }

    /// Travel time in whole seconds for a character with the given agility.
    ///
    /// Every ten points of agility add one unit to the base walking speed.
    pub fn travel_duration_secs(&self, agility: i32) -> i64 {
        let speed = (WALK_SPEED + agility as i64 / 10).max(1);
        self.distance as i64 / speed
    }

    pub fn travel_duration(&self, agility: i32) -> Duration {
        Duration::seconds(self.travel_duration_secs(agility))
    }

    /// Relative Discord timestamp of the arrival time when leaving at `now`.
    pub fn eta(&self, now: DateTime<Utc>, agility: i32) -> String {
        discord_relative_timestamp((now + self.travel_duration(agility)).timestamp())
    }

    pub fn miles(&self) -> f64 {
        round(self.distance as f64 / KM_PER_MILE, 2)
    }

    /// "760 km / 475 miles" as shown in travel menus.
    pub fn distance_label(&self) -> String {
        format!("{} km / {} miles", self.distance, self.miles())
    }

    pub fn destination(&self) -> Result<Location, DomainError> {
        self.name.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    pub name: String,
    #[serde(default)]
    pub coords: Coords,
    #[serde(rename = "type", default = "default_town_type")]
    pub town_type: String,
    #[serde(default)]
    pub population: i32,
    #[serde(default = "default_temperature")]
    pub temperature: i32,
    #[serde(default = "default_humidity")]
    pub humidity: i32,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

fn default_town_type() -> String {
    "Generic".to_string()
}

fn default_temperature() -> i32 {
    15
}

fn default_humidity() -> i32 {
    50
}

impl Town {
    /// A generic town with default climate and no features or connections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coords: Coords::default(),
            town_type: default_town_type(),
            population: 0,
            temperature: default_temperature(),
            humidity: default_humidity(),
            features: Features::default(),
            connections: Vec::new(),
        }
    }

    /// Translation key of the flavour text shown in the town menu.
    pub fn description_key(&self) -> String {
        format!("town.description.{}", self.name.replace(' ', ""))
    }

    pub fn find_connection(&self, slug: &str) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| crate::util::text::component_slug(&c.name) == slug)
    }

    pub fn from_entity(
        entity: entity::town::Model,
        connections: Vec<entity::connection::Model>,
    ) -> Self {
        Self {
            name: entity.name,
            coords: Coords {
                x: entity.x,
                y: entity.y,
            },
            town_type: entity.town_type,
            population: entity.population,
            temperature: entity.temperature,
            humidity: entity.humidity,
            features: Features {
                capital: entity.capital,
                citadel: entity.citadel,
                plaza: entity.plaza,
                port: entity.port,
                shanty: entity.shanty,
                temple: entity.temple,
                walls: entity.walls,
                blacksmith: entity.blacksmith,
                herb_garden: entity.herb_garden,
                merchants_guild: entity.merchants_guild,
                adventurers_guild: entity.adventurers_guild,
                blacksmiths_guild: entity.blacksmiths_guild,
                herbologists_guild: entity.herbologists_guild,
            },
            connections: connections
                .into_iter()
                .map(|c| Connection::new(c.destination, c.distance.max(0) as u32))
                .collect(),
        }
    }
}

/// Name of the capital shown in world statistics.
pub const CAPITAL: &str = "Lakevale";

/// Town new characters start in.
pub const DEFAULT_TOWN: &str = "MistMeadow";
