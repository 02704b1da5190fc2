//! Biome system: biome kinds, definitions, and the sorted classification table.
//!
//! Elevation selects a band of biomes; moisture then picks a drier or wetter
//! member within the band. Neighbouring biomes blend across their shared
//! boundary according to their blend ranges.

mod def;
mod defaults;
mod kind;
mod table;

pub use def::Biome;
pub use defaults::default_biomes;
pub use kind::BiomeType;
pub use table::{BiomeTable, BiomeTableError, Classification, ColorWeights};
