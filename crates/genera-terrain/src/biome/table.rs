//! Sorted biome table and (elevation, moisture) classification.
//!
//! Entries sharing an elevation range form a *band*. Elevation picks the band,
//! moisture picks the first band member whose `max_moisture` is not exceeded.
//! Across every boundary shared by two neighbouring biomes (or bands) the
//! colors are mixed over a zone whose half-width is the mean of the two
//! `blend_range / 2` values, so classification is continuous on both axes.

use super::{Biome, BiomeType};
use crate::blend::{ClampBounds, clamped_mix, splat};
use crate::gpu::BiomeGpu;

/// Errors raised while building or verifying a [`BiomeTable`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BiomeTableError {
    /// No biomes were supplied.
    #[error("biome table is empty")]
    Empty,
    /// An elevation or moisture threshold lies outside `[0, 1]` or is not finite.
    #[error("biome {index} ({biome_type}) has an elevation or moisture outside [0, 1]")]
    OutOfRange {
        /// Position in the supplied list.
        index: usize,
        /// Kind of the offending entry.
        biome_type: BiomeType,
    },
    /// `min_elevation` exceeds `max_elevation`.
    #[error("biome {index} has min elevation {min} above max elevation {max}")]
    InvertedElevation {
        /// Position in the supplied list.
        index: usize,
        /// Offending minimum.
        min: f32,
        /// Offending maximum.
        max: f32,
    },
    /// Blend range is negative or not finite.
    #[error("biome {index} has invalid blend range {blend_range}")]
    InvalidBlendRange {
        /// Position in the supplied list.
        index: usize,
        /// Offending blend range.
        blend_range: f32,
    },
    /// A color component lies outside `[0, 1]`.
    #[error("biome {index} has color {color:?} outside [0, 1]")]
    InvalidColor {
        /// Position in the supplied list.
        index: usize,
        /// Offending color.
        color: [f32; 3],
    },
    /// Some elevations are claimed by no band, even counting blend zones.
    #[error("no biome covers elevations between {from} and {to}")]
    CoverageGap {
        /// Start of the uncovered interval.
        from: f32,
        /// End of the uncovered interval.
        to: f32,
    },
    /// Two neighbouring bands overlap by more than their blend zones.
    #[error("elevation bands ending at {lower_max} and starting at {upper_min} overlap beyond their blend ranges")]
    ExcessiveOverlap {
        /// Top of the lower band.
        lower_max: f32,
        /// Bottom of the upper band.
        upper_min: f32,
    },
}

/// Result of classifying one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Final blended color.
    pub color: [f32; 3],
    /// Table index of the biome with the largest share of `color`.
    pub biome: usize,
    /// Set when no band reached the elevation and the nearest band was used.
    pub fallback: bool,
}

/// How strongly elevation and moisture shade the classified color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorWeights {
    /// Elevation influence; higher ground gets lighter.
    pub elevation: f32,
    /// Moisture influence; wetter ground gets deeper.
    pub moisture: f32,
}

impl ColorWeights {
    /// No shading.
    pub const NONE: Self = Self {
        elevation: 0.0,
        moisture: 0.0,
    };

    /// Create a weight pair.
    pub fn new(elevation: f32, moisture: f32) -> Self {
        Self {
            elevation,
            moisture,
        }
    }

    /// Weights with invalid entries zeroed and the sum scaled down to at most 1.
    pub fn normalized(self) -> Self {
        let clean = |w: f32| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let elevation = clean(self.elevation);
        let moisture = clean(self.moisture);
        let total = elevation + moisture;
        if total > 1.0 {
            Self::new(elevation / total, moisture / total)
        } else {
            Self::new(elevation, moisture)
        }
    }

    /// Shade `color` toward white (or away from it) by the weighted offsets of
    /// elevation and moisture from the middle of their range.
    pub fn shade(&self, color: [f32; 3], elevation: f32, moisture: f32) -> [f32; 3] {
        let weights = self.normalized();
        let amount = weights.elevation * (elevation - 0.5) - weights.moisture * (moisture - 0.5);
        clamped_mix(color, splat(1.0), amount)
    }
}

/// Entries sharing one elevation range.
#[derive(Clone, Debug)]
struct Band {
    min_elevation: f32,
    max_elevation: f32,
    /// Largest blend range among the members.
    blend_range: f32,
    /// Table indices in ascending `max_moisture`.
    members: Vec<usize>,
    /// Selection range: the midpoint of a shared boundary, or the own edge
    /// widened by half the blend range where no neighbour is adjacent.
    lower_bound: f32,
    upper_bound: f32,
}

impl Band {
    fn new(biome: &Biome, index: usize) -> Self {
        let half = biome.blend_range * 0.5;
        Self {
            min_elevation: biome.min_elevation,
            max_elevation: biome.max_elevation,
            blend_range: biome.blend_range,
            members: vec![index],
            lower_bound: biome.min_elevation - half,
            upper_bound: biome.max_elevation + half,
        }
    }

    fn contains(&self, elevation: f32) -> bool {
        elevation >= self.lower_bound && elevation <= self.upper_bound
    }

    fn is_adjacent_to(&self, upper: &Band) -> bool {
        let reach = (self.blend_range + upper.blend_range) * 0.5;
        (self.max_elevation - upper.min_elevation).abs() <= reach
    }

    fn boundary_with(&self, upper: &Band) -> f32 {
        (self.max_elevation + upper.min_elevation) * 0.5
    }

    fn distance(&self, elevation: f32) -> f32 {
        if elevation < self.min_elevation {
            self.min_elevation - elevation
        } else if elevation > self.max_elevation {
            elevation - self.max_elevation
        } else {
            0.0
        }
    }
}

/// Ordered, immutable biome table.
///
/// Entries are sorted by ascending `min_elevation`, ties by ascending
/// `max_moisture`; this order is the biome buffer order.
#[derive(Clone, Debug)]
pub struct BiomeTable {
    biomes: Vec<Biome>,
    bands: Vec<Band>,
}

impl BiomeTable {
    /// Validate and sort `biomes` into a table.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeTableError::Empty`] for an empty list or the first
    /// per-entry validation failure. Coverage is checked separately by
    /// [`BiomeTable::verify_coverage`].
    pub fn new(mut biomes: Vec<Biome>) -> Result<Self, BiomeTableError> {
        if biomes.is_empty() {
            return Err(BiomeTableError::Empty);
        }
        for (index, biome) in biomes.iter().enumerate() {
            biome.validate(index)?;
        }

        biomes.sort_by(|a, b| {
            a.min_elevation
                .total_cmp(&b.min_elevation)
                .then(a.max_moisture.total_cmp(&b.max_moisture))
        });

        let mut bands: Vec<Band> = Vec::new();
        for (index, biome) in biomes.iter().enumerate() {
            let existing = bands.iter_mut().find(|band| {
                band.min_elevation == biome.min_elevation
                    && band.max_elevation == biome.max_elevation
            });
            match existing {
                Some(band) => {
                    band.blend_range = band.blend_range.max(biome.blend_range);
                    let half = band.blend_range * 0.5;
                    band.lower_bound = band.min_elevation - half;
                    band.upper_bound = band.max_elevation + half;
                    band.members.push(index);
                }
                None => bands.push(Band::new(biome, index)),
            }
        }
        bands.sort_by(|a, b| {
            a.min_elevation
                .total_cmp(&b.min_elevation)
                .then(a.max_elevation.total_cmp(&b.max_elevation))
        });
        for k in 1..bands.len() {
            let (head, tail) = bands.split_at_mut(k);
            let (lower, upper) = (&mut head[k - 1], &mut tail[0]);
            if lower.is_adjacent_to(upper) {
                let boundary = lower.boundary_with(upper);
                lower.upper_bound = boundary;
                upper.lower_bound = boundary;
            }
        }

        log::debug!(
            "built biome table: {} entries in {} elevation bands",
            biomes.len(),
            bands.len()
        );

        Ok(Self { biomes, bands })
    }

    /// Check that every elevation in `[0, 1]` falls in some band (counting
    /// blend zones) and that neighbouring bands overlap only within their
    /// blend zones.
    pub fn verify_coverage(&self) -> Result<(), BiomeTableError> {
        let first = &self.bands[0];
        if first.min_elevation - first.blend_range * 0.5 > 0.0 {
            return Err(BiomeTableError::CoverageGap {
                from: 0.0,
                to: first.min_elevation,
            });
        }

        for pair in self.bands.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let reach = (lower.blend_range + upper.blend_range) * 0.5;
            if upper.min_elevation - lower.max_elevation > reach {
                return Err(BiomeTableError::CoverageGap {
                    from: lower.max_elevation,
                    to: upper.min_elevation,
                });
            }
            if lower.max_elevation - upper.min_elevation > reach {
                return Err(BiomeTableError::ExcessiveOverlap {
                    lower_max: lower.max_elevation,
                    upper_min: upper.min_elevation,
                });
            }
        }

        let last = &self.bands[self.bands.len() - 1];
        if last.max_elevation + last.blend_range * 0.5 < 1.0 {
            return Err(BiomeTableError::CoverageGap {
                from: last.max_elevation,
                to: 1.0,
            });
        }
        Ok(())
    }

    /// Blended color for a sample.
    pub fn classify(&self, elevation: f32, moisture: f32) -> [f32; 3] {
        self.classify_detailed(elevation, moisture).color
    }

    /// Blended color for a sample, shaded by `weights`.
    pub fn classify_weighted(&self, elevation: f32, moisture: f32, weights: ColorWeights) -> [f32; 3] {
        let elevation = ClampBounds::UNIT.clamp(elevation);
        let moisture = ClampBounds::UNIT.clamp(moisture);
        weights.shade(self.classify(elevation, moisture), elevation, moisture)
    }

    /// Classify a sample, reporting the dominant biome and whether the
    /// nearest-band fallback was needed.
    ///
    /// Inputs are clamped to `[0, 1]`; NaN is treated as `0`.
    pub fn classify_detailed(&self, elevation: f32, moisture: f32) -> Classification {
        let elevation = ClampBounds::UNIT.clamp(elevation);
        let moisture = ClampBounds::UNIT.clamp(moisture);

        let (k, fallback) = match self.bands.iter().rposition(|b| b.contains(elevation)) {
            Some(k) => (k, false),
            None => (self.nearest_band(elevation), true),
        };
        let band = &self.bands[k];

        if k > 0 {
            let lower = &self.bands[k - 1];
            if let Some(t) = band_transition(lower, band, elevation) {
                return self.mix_bands(lower, band, moisture, t, fallback);
            }
        }
        if let Some(upper) = self.bands.get(k + 1) {
            if let Some(t) = band_transition(band, upper, elevation) {
                return self.mix_bands(band, upper, moisture, t, fallback);
            }
        }

        let (color, biome) = self.resolve_moisture(band, moisture);
        Classification {
            color,
            biome,
            fallback,
        }
    }

    fn mix_bands(
        &self,
        lower: &Band,
        upper: &Band,
        moisture: f32,
        t: f32,
        fallback: bool,
    ) -> Classification {
        let (a, a_index) = self.resolve_moisture(lower, moisture);
        let (b, b_index) = self.resolve_moisture(upper, moisture);
        Classification {
            color: clamped_mix(a, b, t),
            biome: if t < 0.5 { a_index } else { b_index },
            fallback,
        }
    }

    /// Moisture-resolved color within one band, with the dominant entry.
    fn resolve_moisture(&self, band: &Band, moisture: f32) -> ([f32; 3], usize) {
        let members = &band.members;
        let j = members
            .iter()
            .position(|&i| self.biomes[i].max_moisture >= moisture)
            .unwrap_or(members.len() - 1);
        let current = &self.biomes[members[j]];

        if j > 0 {
            let drier = &self.biomes[members[j - 1]];
            if let Some(t) =
                transition_weight(drier.max_moisture, drier.blend_range, current.blend_range, moisture)
            {
                let dominant = if t < 0.5 { members[j - 1] } else { members[j] };
                return (clamped_mix(drier.color, current.color, t), dominant);
            }
        }
        if let Some(&next) = members.get(j + 1) {
            let wetter = &self.biomes[next];
            if let Some(t) = transition_weight(
                current.max_moisture,
                current.blend_range,
                wetter.blend_range,
                moisture,
            ) {
                let dominant = if t < 0.5 { members[j] } else { next };
                return (clamped_mix(current.color, wetter.color, t), dominant);
            }
        }
        (current.color, members[j])
    }

    fn nearest_band(&self, elevation: f32) -> usize {
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for (i, band) in self.bands.iter().enumerate() {
            let d = band.distance(elevation);
            if d < best_distance {
                best = i;
                best_distance = d;
            }
        }
        best
    }

    /// Entries in table order.
    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }

    /// Entry at a table index.
    pub fn get(&self, index: usize) -> Option<&Biome> {
        self.biomes.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Number of distinct elevation bands.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Biome buffer contents, in table order.
    pub fn to_gpu(&self) -> Vec<BiomeGpu> {
        self.biomes.iter().map(BiomeGpu::from).collect()
    }
}

static_assertions::assert_impl_all!(BiomeTable: Send, Sync);

/// Blend weight between two neighbouring bands, if they are adjacent and the
/// elevation lies in their transition zone.
fn band_transition(lower: &Band, upper: &Band, elevation: f32) -> Option<f32> {
    if !lower.is_adjacent_to(upper) {
        return None;
    }
    transition_weight(
        lower.boundary_with(upper),
        lower.blend_range,
        upper.blend_range,
        elevation,
    )
}

/// Position of `x` in the zone centered on `boundary`: 0 at the zone start,
/// 1 at its end. `None` outside the zone or when the zone is empty.
fn transition_weight(boundary: f32, blend_a: f32, blend_b: f32, x: f32) -> Option<f32> {
    let half_width = (blend_a + blend_b) * 0.25;
    if half_width <= 0.0 {
        return None;
    }
    let start = boundary - half_width;
    let end = boundary + half_width;
    if x < start || x > end {
        return None;
    }
    Some(((x - start) / (end - start)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::default_biomes;

    const OCEAN_COLOR: [f32; 3] = [0.1, 0.2, 0.6];
    const SHORE_COLOR: [f32; 3] = [0.8, 0.7, 0.4];

    fn ocean_shore() -> BiomeTable {
        BiomeTable::new(vec![
            Biome::new(BiomeType::Shore, SHORE_COLOR, 0.4, 0.6, 1.0, 0.1),
            Biome::new(BiomeType::Ocean, OCEAN_COLOR, 0.0, 0.4, 1.0, 0.1),
        ])
        .unwrap()
    }

    fn assert_color_eq(a: [f32; 3], b: [f32; 3], tolerance: f32) {
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() <= tolerance,
                "colors differ at component {i}: {a:?} vs {b:?}"
            );
        }
    }

    fn max_delta(a: [f32; 3], b: [f32; 3]) -> f32 {
        (0..3).map(|i| (a[i] - b[i]).abs()).fold(0.0, f32::max)
    }

    #[test]
    fn test_entries_sorted_by_elevation_then_moisture() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        for pair in table.biomes().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.min_elevation < b.min_elevation
                    || (a.min_elevation == b.min_elevation && a.max_moisture <= b.max_moisture),
                "table out of order: {a:?} before {b:?}"
            );
        }
        assert_eq!(table.biomes()[0].biome_type, BiomeType::Ocean);
        assert_eq!(table.band_count(), 7);
    }

    #[test]
    fn test_scenario_shared_boundary_blends_halfway() {
        let table = ocean_shore();
        let expected = clamped_mix(OCEAN_COLOR, SHORE_COLOR, 0.5);
        for moisture in [0.0, 0.3, 1.0] {
            assert_color_eq(table.classify(0.4, moisture), expected, 1e-5);
        }
    }

    #[test]
    fn test_outside_blend_zone_is_pure_color() {
        let table = ocean_shore();
        assert_eq!(table.classify(0.1, 0.5), OCEAN_COLOR);
        assert_eq!(table.classify(0.34, 0.5), OCEAN_COLOR);
        assert_eq!(table.classify(0.5, 0.5), SHORE_COLOR);
        assert_eq!(table.classify(0.46, 0.5), SHORE_COLOR);
    }

    #[test]
    fn test_blend_weight_follows_position_in_zone() {
        let table = ocean_shore();
        let at_quarter = table.classify(0.375, 0.5);
        assert_color_eq(at_quarter, clamped_mix(OCEAN_COLOR, SHORE_COLOR, 0.25), 1e-4);
        let detail = table.classify_detailed(0.375, 0.5);
        assert_eq!(table.biomes()[detail.biome].biome_type, BiomeType::Ocean);
        let detail = table.classify_detailed(0.43, 0.5);
        assert_eq!(table.biomes()[detail.biome].biome_type, BiomeType::Shore);
    }

    #[test]
    fn test_elevation_blend_is_continuous() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        for moisture in [0.05, 0.4, 0.75, 0.99] {
            let mut prev = table.classify(0.0, moisture);
            for i in 1..=10_000 {
                let e = i as f32 / 10_000.0;
                let color = table.classify(e, moisture);
                let delta = max_delta(prev, color);
                assert!(delta < 0.02, "jump of {delta} at elevation {e}, moisture {moisture}");
                prev = color;
            }
        }
    }

    #[test]
    fn test_unequal_blend_ranges_stay_continuous() {
        let table = BiomeTable::new(vec![
            Biome::new(BiomeType::Ocean, OCEAN_COLOR, 0.0, 0.4, 1.0, 0.0),
            Biome::new(BiomeType::Shore, SHORE_COLOR, 0.4, 1.0, 1.0, 0.2),
        ])
        .unwrap();
        assert!(table.verify_coverage().is_ok());

        // Zone half-width is (0.0 + 0.2) / 4, so the zone spans [0.35, 0.45].
        assert_eq!(table.classify(0.31, 0.5), OCEAN_COLOR);
        assert_eq!(table.classify(0.349, 0.5), OCEAN_COLOR);
        assert_color_eq(
            table.classify(0.4, 0.5),
            clamped_mix(OCEAN_COLOR, SHORE_COLOR, 0.5),
            1e-5,
        );
        assert_eq!(table.classify(0.46, 0.5), SHORE_COLOR);

        let mut prev = table.classify(0.0, 0.5);
        for i in 1..=10_000 {
            let e = i as f32 / 10_000.0;
            let color = table.classify(e, 0.5);
            let delta = max_delta(prev, color);
            assert!(delta < 0.02, "jump of {delta} at elevation {e}");
            prev = color;
        }
    }

    #[test]
    fn test_moisture_blend_is_continuous() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        for elevation in [0.2, 0.45, 0.7, 0.9] {
            let mut prev = table.classify(elevation, 0.0);
            for i in 1..=10_000 {
                let m = i as f32 / 10_000.0;
                let color = table.classify(elevation, m);
                let delta = max_delta(prev, color);
                assert!(delta < 0.02, "jump of {delta} at moisture {m}, elevation {elevation}");
                prev = color;
            }
        }
    }

    #[test]
    fn test_default_table_covers_unit_square() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        assert!(table.verify_coverage().is_ok());
        for ei in 0..=200 {
            for mi in 0..=200 {
                let e = ei as f32 / 200.0;
                let m = mi as f32 / 200.0;
                let c = table.classify_detailed(e, m);
                assert!(!c.fallback, "fallback used at ({e}, {m})");
                assert!(c.color.iter().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }

    #[test]
    fn test_moisture_picks_dry_side_match() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        let kind = |e: f32, m: f32| table.biomes()[table.classify_detailed(e, m).biome].biome_type;
        assert_eq!(kind(0.45, 0.05), BiomeType::TemperateDesert);
        assert_eq!(kind(0.45, 0.3), BiomeType::Grassland);
        assert_eq!(kind(0.45, 0.7), BiomeType::TemperateDeciduousForest);
        assert_eq!(kind(0.45, 0.95), BiomeType::TemperateRainforest);
        assert_eq!(kind(0.9, 0.05), BiomeType::Scorched);
        assert_eq!(kind(0.9, 0.9), BiomeType::Snow);
        assert_eq!(kind(0.02, 0.5), BiomeType::Ocean);
    }

    #[test]
    fn test_moisture_above_band_clamps_to_wettest_member() {
        let table = BiomeTable::new(vec![
            Biome::new(BiomeType::SubtropicalDesert, [0.9, 0.7, 0.5], 0.0, 1.0, 0.3, 0.0),
            Biome::new(BiomeType::Grassland, [0.5, 0.7, 0.3], 0.0, 1.0, 0.6, 0.0),
        ])
        .unwrap();
        let c = table.classify_detailed(0.5, 0.9);
        assert_eq!(c.color, [0.5, 0.7, 0.3]);
        assert!(!c.fallback);
    }

    #[test]
    fn test_gap_falls_back_to_nearest_band() {
        let table = BiomeTable::new(vec![
            Biome::new(BiomeType::Ocean, OCEAN_COLOR, 0.0, 0.2, 1.0, 0.0),
            Biome::new(BiomeType::Snow, SHORE_COLOR, 0.7, 1.0, 1.0, 0.0),
        ])
        .unwrap();
        assert!(matches!(
            table.verify_coverage(),
            Err(BiomeTableError::CoverageGap { .. })
        ));
        let near_low = table.classify_detailed(0.3, 0.5);
        assert!(near_low.fallback);
        assert_eq!(near_low.color, OCEAN_COLOR);
        let near_high = table.classify_detailed(0.6, 0.5);
        assert!(near_high.fallback);
        assert_eq!(near_high.color, SHORE_COLOR);
    }

    #[test]
    fn test_excessive_overlap_detected() {
        let table = BiomeTable::new(vec![
            Biome::new(BiomeType::Grassland, [0.5; 3], 0.0, 0.7, 1.0, 0.02),
            Biome::new(BiomeType::Snow, [0.9; 3], 0.3, 1.0, 1.0, 0.02),
        ])
        .unwrap();
        assert!(matches!(
            table.verify_coverage(),
            Err(BiomeTableError::ExcessiveOverlap { .. })
        ));
    }

    #[test]
    fn test_non_finite_inputs_are_clamped() {
        let table = ocean_shore();
        let nan = table.classify_detailed(f32::NAN, f32::NAN);
        assert_eq!(nan.color, OCEAN_COLOR);
        assert!(!nan.fallback);
        assert_eq!(table.classify(f32::INFINITY, 0.5), table.classify(1.0, 0.5));
    }

    #[test]
    fn test_empty_and_invalid_tables_rejected() {
        assert_eq!(BiomeTable::new(Vec::new()).unwrap_err(), BiomeTableError::Empty);
        let bad = Biome::new(BiomeType::Ocean, OCEAN_COLOR, 0.5, 0.2, 1.0, 0.0);
        assert!(matches!(
            BiomeTable::new(vec![bad]),
            Err(BiomeTableError::InvertedElevation { index: 0, .. })
        ));
    }

    #[test]
    fn test_zero_weights_leave_color_unchanged() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        for (e, m) in [(0.2, 0.1), (0.5, 0.5), (0.95, 0.8)] {
            assert_eq!(
                table.classify_weighted(e, m, ColorWeights::NONE),
                table.classify(e, m)
            );
        }
    }

    #[test]
    fn test_elevation_weight_lightens_high_ground() {
        let table = ocean_shore();
        let weights = ColorWeights::new(0.5, 0.0);
        let shaded = table.classify_weighted(0.55, 0.5, weights);
        let plain = table.classify(0.55, 0.5);
        for i in 0..3 {
            assert!(shaded[i] >= plain[i], "component {i} darkened: {shaded:?} vs {plain:?}");
        }
        let low = table.classify_weighted(0.1, 0.5, weights);
        assert!(low[2] < OCEAN_COLOR[2]);
    }

    #[test]
    fn test_weights_normalized_when_sum_exceeds_one() {
        let w = ColorWeights::new(3.0, 1.0).normalized();
        assert!((w.elevation - 0.75).abs() < 1e-6);
        assert!((w.moisture - 0.25).abs() < 1e-6);
        let small = ColorWeights::new(0.2, 0.1).normalized();
        assert_eq!(small, ColorWeights::new(0.2, 0.1));
        let invalid = ColorWeights::new(f32::NAN, -1.0).normalized();
        assert_eq!(invalid, ColorWeights::NONE);
    }

    #[test]
    fn test_gpu_buffer_preserves_table_order() {
        let table = BiomeTable::new(default_biomes()).unwrap();
        let gpu = table.to_gpu();
        assert_eq!(gpu.len(), table.len());
        for (entry, biome) in gpu.iter().zip(table.biomes()) {
            assert_eq!(entry.biome_type, biome.biome_type.code());
            assert_eq!(entry.min_elevation, biome.min_elevation);
            assert_eq!(entry.color, biome.color);
        }
    }
}
