//! Biome kinds with stable numeric codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The named biome kinds. Discriminants are the codes written to biome buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum BiomeType {
    /// Deep open water.
    Ocean = 0,
    /// Coastal shallows.
    ShallowWater = 1,
    /// Beaches and tidal flats.
    Shore = 2,
    /// Dry, barren high ground.
    Scorched = 3,
    /// Exposed rock with sparse cover.
    Bare = 4,
    /// Cold, treeless highland.
    Tundra = 5,
    /// Permanent snow and ice.
    Snow = 6,
    /// Dry temperate lowland.
    TemperateDesert = 7,
    /// Scrub on dry highland slopes.
    Shrubland = 8,
    /// Boreal conifer forest.
    Taiga = 9,
    /// Open temperate grass.
    Grassland = 10,
    /// Broadleaf temperate forest.
    TemperateDeciduousForest = 11,
    /// Wet temperate forest.
    TemperateRainforest = 12,
    /// Hot, dry lowland desert.
    SubtropicalDesert = 13,
    /// Forest with a dry season.
    TropicalSeasonalForest = 14,
    /// Wet tropical forest.
    TropicalRainforest = 15,
}

impl BiomeType {
    /// Every biome kind in code order.
    pub const ALL: [BiomeType; 16] = [
        BiomeType::Ocean,
        BiomeType::ShallowWater,
        BiomeType::Shore,
        BiomeType::Scorched,
        BiomeType::Bare,
        BiomeType::Tundra,
        BiomeType::Snow,
        BiomeType::TemperateDesert,
        BiomeType::Shrubland,
        BiomeType::Taiga,
        BiomeType::Grassland,
        BiomeType::TemperateDeciduousForest,
        BiomeType::TemperateRainforest,
        BiomeType::SubtropicalDesert,
        BiomeType::TropicalSeasonalForest,
        BiomeType::TropicalRainforest,
    ];

    /// Buffer code for this kind.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Kind for a buffer code, if valid.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Human-readable name, e.g. `"temperate_rainforest"`.
    pub fn name(self) -> &'static str {
        match self {
            BiomeType::Ocean => "ocean",
            BiomeType::ShallowWater => "shallow_water",
            BiomeType::Shore => "shore",
            BiomeType::Scorched => "scorched",
            BiomeType::Bare => "bare",
            BiomeType::Tundra => "tundra",
            BiomeType::Snow => "snow",
            BiomeType::TemperateDesert => "temperate_desert",
            BiomeType::Shrubland => "shrubland",
            BiomeType::Taiga => "taiga",
            BiomeType::Grassland => "grassland",
            BiomeType::TemperateDeciduousForest => "temperate_deciduous_forest",
            BiomeType::TemperateRainforest => "temperate_rainforest",
            BiomeType::SubtropicalDesert => "subtropical_desert",
            BiomeType::TropicalSeasonalForest => "tropical_seasonal_forest",
            BiomeType::TropicalRainforest => "tropical_rainforest",
        }
    }

    /// Whether this kind is open water.
    pub fn is_water(self) -> bool {
        matches!(self, BiomeType::Ocean | BiomeType::ShallowWater)
    }
}

impl fmt::Display for BiomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
