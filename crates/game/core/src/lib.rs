//! Deterministic rules for a turn-based creature-collecting game.
//!
//! `bluemon-core` defines the canonical mechanics: stat alteration
//! stacks, pet progression, abilities and status effects, map movement,
//! and random encounters. It performs no I/O and draws no randomness of
//! its own: world data arrives through the oracle traits in [`env`] and
//! randomness through [`encounter::EncounterRng`], so every operation is
//! reproducible under test.
pub mod config;
pub mod effect;
pub mod encounter;
pub mod env;
pub mod error;
pub mod map;
pub mod pet;
pub mod stats;

pub use config::GameConfig;
pub use effect::{
    AbilityId, Effect, EffectBody, EffectClass, EffectError, EffectKind, StatusEffect,
    StatusOutcome, TargetFlags,
};
pub use encounter::{EncounterGenerator, EncounterRng, Pcg32};
pub use env::{AbilityOracle, TablesOracle};
pub use error::{ErrorKind, GameError};
pub use map::{Map, MapError, MoveOutcome, Npc, Player, Position, TileKind};
pub use pet::{Party, Pet, PetError, Species};
pub use stats::{
    Alterable, AlterationId, AlterationKind, BaseStats, PetStat, StatIncrements, StatTable,
    TierIncrements,
};
