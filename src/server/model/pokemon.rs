//! Normalized Pokémon records produced from upstream API data.

use crate::model::pokemon::{PokemonDto, PokemonResponseDto, PokemonStatsDto};

/// The six base stats, always in HP, Attack, Defense, Sp. Attack, Sp. Defense, Speed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// Pokémon reshaped for chat display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub id: i32,
    pub name: String,
    pub types: String,
    pub abilities: String,
    pub stats: BaseStats,
    /// Meters, one decimal digit.
    pub height: String,
    /// Kilograms, one decimal digit.
    pub weight: String,
    pub sprite: String,
}

impl PokemonRecord {
    pub fn into_dto(self) -> PokemonDto {
        PokemonDto {
            id: self.id,
            name: self.name,
            types: self.types,
            abilities: self.abilities,
            stats: PokemonStatsDto {
                hp: self.stats.hp,
                attack: self.stats.attack,
                defense: self.stats.defense,
                sp_attack: self.stats.special_attack,
                sp_defense: self.stats.special_defense,
                speed: self.stats.speed,
            },
            height: self.height,
            weight: self.weight,
            sprite: self.sprite,
        }
    }
}

/// Outcome of a lookup against the upstream API.
///
/// An unknown name or ID is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonLookup {
    Found(PokemonRecord),
    NotFound,
}

impl PokemonLookup {
    /// Resolved Pokémon ID, if the lookup found one.
    pub fn pokemon_id(&self) -> Option<i32> {
        match self {
            Self::Found(record) => Some(record.id),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_dto(self) -> PokemonResponseDto {
        match self {
            Self::Found(record) => PokemonResponseDto {
                found: true,
                data: Some(record.into_dto()),
            },
            Self::NotFound => PokemonResponseDto {
                found: false,
                data: None,
            },
        }
    }
}
