//! Chunk addressing for tiled terrain generation.

use std::ops::Range;

use glam::DVec2;

use crate::gpu::GridVertex;
use crate::viewport::Viewport;

/// Integer address of one square chunk of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chunk {
    pub x: i32,
    pub y: i32,
}

impl Chunk {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this chunk lies inside `region`.
    pub fn is_within(&self, region: &ChunkRegion) -> bool {
        region.contains(*self)
    }

    /// World position of the chunk's minimum corner.
    pub fn origin(&self, chunk_size: f64) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y)) * chunk_size
    }
}

/// Half-open rectangle of chunk addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkRegion {
    pub x: Range<i32>,
    pub y: Range<i32>,
}

impl ChunkRegion {
    pub fn new(x: Range<i32>, y: Range<i32>) -> Self {
        Self { x, y }
    }

    /// Smallest region whose chunks cover every pixel of `viewport`.
    pub fn covering(viewport: &Viewport, chunk_size: f64) -> Self {
        let min = viewport.origin / chunk_size;
        let max = (viewport.origin + viewport.world_size()) / chunk_size;
        Self {
            x: min.x.floor() as i32..max.x.ceil() as i32,
            y: min.y.floor() as i32..max.y.ceil() as i32,
        }
    }

    pub fn contains(&self, chunk: Chunk) -> bool {
        self.x.contains(&chunk.x) && self.y.contains(&chunk.y)
    }

    /// Number of chunks in the region.
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Chunks in row-major order (y outer, x inner).
    pub fn iter(&self) -> impl Iterator<Item = Chunk> + '_ {
        self.y
            .clone()
            .flat_map(move |y| self.x.clone().map(move |x| Chunk::new(x, y)))
    }
}

/// Colored vertex grid for one chunk.
#[derive(Clone, Debug)]
pub struct ChunkMesh {
    pub chunk: Chunk,
    /// Vertices per side.
    pub resolution: u32,
    /// Row-major, `resolution * resolution` entries.
    pub vertices: Vec<GridVertex>,
}

impl ChunkMesh {
    /// Vertex at grid position `(ix, iy)`.
    pub fn vertex(&self, ix: u32, iy: u32) -> Option<&GridVertex> {
        if ix >= self.resolution || iy >= self.resolution {
            return None;
        }
        self.vertices
            .get(iy as usize * self.resolution as usize + ix as usize)
    }

    /// Triangle-list indices joining neighbouring vertices into quads.
    pub fn indices(&self) -> Vec<u32> {
        let n = self.resolution;
        if n < 2 {
            return Vec::new();
        }
        let mut indices = Vec::with_capacity(((n - 1) * (n - 1) * 6) as usize);
        for iy in 0..n - 1 {
            for ix in 0..n - 1 {
                let i = iy * n + ix;
                indices.extend_from_slice(&[i, i + 1, i + n, i + 1, i + n + 1, i + n]);
            }
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains_half_open() {
        let region = ChunkRegion::new(-1..2, 0..3);
        assert!(Chunk::new(-1, 0).is_within(&region));
        assert!(Chunk::new(1, 2).is_within(&region));
        assert!(!Chunk::new(2, 0).is_within(&region));
        assert!(!Chunk::new(0, 3).is_within(&region));
        assert_eq!(region.len(), 9);
    }

    #[test]
    fn test_region_iter_row_major() {
        let region = ChunkRegion::new(0..2, 5..7);
        let chunks: Vec<Chunk> = region.iter().collect();
        assert_eq!(
            chunks,
            vec![
                Chunk::new(0, 5),
                Chunk::new(1, 5),
                Chunk::new(0, 6),
                Chunk::new(1, 6)
            ]
        );
        assert!(ChunkRegion::new(3..3, 0..4).is_empty());
    }

    #[test]
    fn test_covering_region() {
        let viewport = Viewport::new(DVec2::new(-10.0, 5.0), 100, 50, 1.0);
        let region = ChunkRegion::covering(&viewport, 32.0);
        assert_eq!(region, ChunkRegion::new(-1..3, 0..2));
    }

    #[test]
    fn test_mesh_indices() {
        let mesh = ChunkMesh {
            chunk: Chunk::new(0, 0),
            resolution: 3,
            vertices: vec![GridVertex::new([0.0, 0.0], [0.0; 3]); 9],
        };
        let indices = mesh.indices();
        assert_eq!(indices.len(), 2 * 2 * 6);
        assert!(indices.iter().all(|&i| i < 9));
        assert!(mesh.vertex(2, 2).is_some());
        assert!(mesh.vertex(3, 0).is_none());
    }
}
