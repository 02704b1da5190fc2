//! Built-in biome table: water, shore, and four land bands from lowland to
//! alpine, each split by moisture.

use super::{Biome, BiomeType};

const BLEND: f32 = 0.02;

const OCEAN: [f32; 3] = [0.218_803_79, 0.210_770_31, 0.392_425_69];
const SHALLOW_WATER: [f32; 3] = [0.349_701_32, 0.329_328_24, 0.481_499_08];
const SHORE: [f32; 3] = [0.638_175_5, 0.567_911_3, 0.453_189_13];
const SCORCHED: [f32; 3] = [0.333_301_16, 0.333_353_88, 0.333_289_68];
const BARE: [f32; 3] = [0.533_284_66, 0.533_364_53, 0.533_267_2];
const TUNDRA: [f32; 3] = [0.731_535_8, 0.738_798_7, 0.659_085_3];
const SNOW: [f32; 3] = [0.870_881_14, 0.870_069_1, 0.900_611_3];
const TEMPERATE_DESERT: [f32; 3] = [0.777_712_3, 0.828_615, 0.581_402_96];
const SHRUBLAND: [f32; 3] = [0.515_588_7, 0.604_890_5, 0.452_233_43];
const TAIGA: [f32; 3] = [0.576_721_5, 0.672_678_77, 0.442_269_83];
const GRASSLAND: [f32; 3] = [0.492_525_88, 0.680_222_3, 0.277_071_9];
const TEMPERATE_DECIDUOUS_FOREST: [f32; 3] = [0.348_081_17, 0.585_715_5, 0.320_456_15];
const TEMPERATE_RAINFOREST: [f32; 3] = [0.117_757_95, 0.544_154_64, 0.311_439_13];
const SUBTROPICAL_DESERT: [f32; 3] = [0.841_064_2, 0.724_216_2, 0.519_310_4];
const TROPICAL_SEASONAL_FOREST: [f32; 3] = [0.223_445_03, 0.612_355_9, 0.209_618_51];
const TROPICAL_RAINFOREST: [f32; 3] = [0.0, 0.476_154_7, 0.321_675_4];

fn entry(kind: BiomeType, color: [f32; 3], elevation: (f32, f32), max_moisture: f32) -> Biome {
    Biome::new(kind, color, elevation.0, elevation.1, max_moisture, BLEND)
}

/// The default biome list (18 entries, unsorted; the table sorts it).
pub fn default_biomes() -> Vec<Biome> {
    use BiomeType::*;

    let lowland = (0.12, 0.3);
    let temperate = (0.3, 0.6);
    let highland = (0.6, 0.8);
    let alpine = (0.8, 1.0);

    vec![
        entry(Ocean, OCEAN, (0.0, 0.05), 1.0),
        entry(ShallowWater, SHALLOW_WATER, (0.05, 0.10), 1.0),
        entry(Shore, SHORE, (0.10, 0.12), 1.0),
        entry(Scorched, SCORCHED, alpine, 0.1),
        entry(Bare, BARE, alpine, 0.2),
        entry(Tundra, TUNDRA, alpine, 0.5),
        entry(Snow, SNOW, alpine, 1.0),
        entry(TemperateDesert, TEMPERATE_DESERT, highland, 0.33),
        entry(Shrubland, SHRUBLAND, highland, 0.66),
        entry(Taiga, TAIGA, highland, 1.0),
        entry(TemperateDesert, TEMPERATE_DESERT, temperate, 0.16),
        entry(Grassland, GRASSLAND, temperate, 0.5),
        entry(TemperateDeciduousForest, TEMPERATE_DECIDUOUS_FOREST, temperate, 0.83),
        entry(TemperateRainforest, TEMPERATE_RAINFOREST, temperate, 1.0),
        entry(SubtropicalDesert, SUBTROPICAL_DESERT, lowland, 0.16),
        entry(Grassland, GRASSLAND, lowland, 0.33),
        entry(TropicalSeasonalForest, TROPICAL_SEASONAL_FOREST, lowland, 0.66),
        entry(TropicalRainforest, TROPICAL_RAINFOREST, lowland, 1.0),
    ]
}
