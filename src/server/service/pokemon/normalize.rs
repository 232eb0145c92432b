//! Pokémon resource normalization.
//!
//! Upstream resources are decoded into a partial schema covering only the fields this
//! service reads. Anything missing or mistyped is reported as
//! `PokemonError::MalformedUpstreamData`; nothing is silently defaulted except the
//! sprite URLs, which are resolved best-effort inside a required `sprites` object.

use serde::Deserialize;
use serde_json::Value;

use crate::server::{
    error::pokemon::PokemonError,
    model::pokemon::{BaseStats, PokemonRecord},
};

#[derive(Debug, Deserialize)]
struct RawPokemon {
    id: i32,
    name: String,
    types: Vec<RawTypeSlot>,
    abilities: Vec<RawAbilitySlot>,
    stats: Vec<RawStat>,
    /// Decimeters.
    height: u32,
    /// Hectograms.
    weight: u32,
    sprites: RawSprites,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: RawNamedResource,
}

#[derive(Debug, Deserialize)]
struct RawAbilitySlot {
    ability: RawNamedResource,
}

#[derive(Debug, Deserialize)]
struct RawNamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: u32,
}

/// Sprite URLs are kept untyped; a candidate that is not a string is skipped.
#[derive(Debug, Deserialize)]
struct RawSprites {
    front_default: Option<Value>,
    other: Option<Value>,
}

/// Converts a decoded upstream Pokémon resource into a `PokemonRecord`.
///
/// # Arguments
/// - `value` - JSON body of the upstream single-resource endpoint
///
/// # Returns
/// - `Ok(PokemonRecord)` - Normalized record
/// - `Err(PokemonError::MalformedUpstreamData)` - A required field is absent or has the
///   wrong shape, or fewer than six stats are present
pub fn normalize(value: Value) -> Result<PokemonRecord, PokemonError> {
    let raw: RawPokemon = serde_json::from_value(value)
        .map_err(|e| PokemonError::MalformedUpstreamData(e.to_string()))?;

    let stats = base_stats(&raw.stats)?;

    let types = raw
        .types
        .iter()
        .map(|slot| capitalize(&slot.kind.name))
        .collect::<Vec<_>>()
        .join(", ");

    let abilities = raw
        .abilities
        .iter()
        .map(|slot| capitalize(&slot.ability.name.replace('-', " ")))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(PokemonRecord {
        id: raw.id,
        name: capitalize(&raw.name),
        types,
        abilities,
        stats,
        height: tenths(raw.height),
        weight: tenths(raw.weight),
        sprite: resolve_sprite(&raw.sprites),
    })
}

/// Reads the six base stats positionally.
///
/// Upstream lists stats as HP, Attack, Defense, Sp. Attack, Sp. Defense, Speed.
/// Extra trailing entries are ignored.
fn base_stats(stats: &[RawStat]) -> Result<BaseStats, PokemonError> {
    let [hp, attack, defense, special_attack, special_defense, speed, ..] = stats else {
        return Err(PokemonError::MalformedUpstreamData(format!(
            "expected 6 stats, got {}",
            stats.len()
        )));
    };

    Ok(BaseStats {
        hp: hp.base_stat,
        attack: attack.base_stat,
        defense: defense.base_stat,
        special_attack: special_attack.base_stat,
        special_defense: special_defense.base_stat,
        speed: speed.base_stat,
    })
}

/// Prefers official artwork, then the default sprite, then an empty string.
///
/// Absent, null or non-string candidates fall through to the next one.
fn resolve_sprite(sprites: &RawSprites) -> String {
    let artwork = sprites
        .other
        .as_ref()
        .and_then(|other| other.pointer("/official-artwork/front_default"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty());

    let default = sprites.front_default.as_ref().and_then(Value::as_str);

    artwork.or(default).unwrap_or_default().to_string()
}

/// Uppercases the first character only; the rest is left as is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders a value in tenths of a unit with exactly one decimal digit.
fn tenths(raw: u32) -> String {
    format!("{}.{}", raw / 10, raw % 10)
}
