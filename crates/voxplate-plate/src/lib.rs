//! Chunked sparse voxel storage with grow-only bounds.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use voxplate_blocks::{AIR, BlockState, shorten_key};

/// Slots per chunk: 16 x 16 x 16.
pub const CHUNK_VOLUME: usize = 4096;

/// Chunk coordinate owning a world position. Arithmetic shift, so negative
/// coordinates floor toward negative infinity.
#[inline]
pub fn chunk_key(x: i32, y: i32, z: i32) -> (i32, i32, i32) {
    (x >> 4, y >> 4, z >> 4)
}

/// Packed slot offset of a world position inside its chunk, range 0..4096.
#[inline]
pub fn cell_offset(x: i32, y: i32, z: i32) -> usize {
    (((x & 15) << 8) | ((z & 15) << 4) | (y & 15)) as usize
}

/// Chunk-aligned axis bounds of everything ever written. Grown on first
/// write into a chunk, never shrunk, even if the chunk empties out later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub max_z: i32,
}

impl Bounds {
    fn grow_to_chunk_of(&mut self, x: i32, y: i32, z: i32) {
        self.min_x = self.min_x.min(x & !15);
        self.min_y = self.min_y.min(y & !15);
        self.min_z = self.min_z.min(z & !15);
        self.max_x = self.max_x.max(x | 15);
        self.max_y = self.max_y.max(y | 15);
        self.max_z = self.max_z.max(z | 15);
    }
}

#[derive(Clone, Debug, Default)]
struct Chunk {
    // Sparse; grown lazily up to CHUNK_VOLUME slots.
    cells: Vec<Option<BlockState>>,
}

impl Chunk {
    #[inline]
    fn get(&self, offset: usize) -> Option<&BlockState> {
        self.cells.get(offset).and_then(|c| c.as_ref())
    }

    fn set(&mut self, offset: usize, state: BlockState) {
        if self.cells.len() <= offset {
            self.cells.resize(offset + 1, None);
        }
        self.cells[offset] = Some(state);
    }

    fn clear(&mut self, offset: usize) {
        if let Some(cell) = self.cells.get_mut(offset) {
            *cell = None;
        }
    }
}

/// Sparse 3D map of block states, keyed by 16-cubed chunks.
///
/// Air is an observable state, not a stored one: writing air deletes, and
/// reads of unwritten cells come back as the canonical air value. The raw
/// two-tier view (`get_cell`) is what face culling uses.
#[derive(Clone, Debug)]
pub struct Plate {
    chunks: HashMap<(i32, i32, i32), Chunk>,
    bounds: Bounds,
    air: BlockState,
}

impl Default for Plate {
    fn default() -> Self {
        Self::new()
    }
}

impl Plate {
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
            bounds: Bounds::default(),
            air: BlockState::new(AIR),
        }
    }

    /// Current chunk-aligned bounds. All zero until the first non-air write.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The block at a position; the canonical air value if nothing is stored.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> &BlockState {
        self.get_cell(x, y, z).unwrap_or(&self.air)
    }

    /// True if nothing is stored there. Stored air cannot exist, so this is
    /// simply absence at the raw layer.
    pub fn is_empty(&self, x: i32, y: i32, z: i32) -> bool {
        self.get_cell(x, y, z).is_none()
    }

    /// Raw accessor distinguishing "never written" from any stored state.
    pub fn get_cell(&self, x: i32, y: i32, z: i32) -> Option<&BlockState> {
        self.chunks
            .get(&chunk_key(x, y, z))?
            .get(cell_offset(x, y, z))
    }

    /// Places a block, normalizing its name first. Air deletes the cell and
    /// never allocates a chunk; anything else overwrites whole, allocating
    /// the owning chunk and growing the bounds on first write into it.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, state: BlockState) {
        let mut state = state;
        let short = shorten_key(&state.name);
        if short.len() != state.name.len() {
            let short = short.to_string();
            state.name = short;
        }

        let key = chunk_key(x, y, z);
        let offset = cell_offset(x, y, z);

        if state.is_air() {
            if let Some(chunk) = self.chunks.get_mut(&key) {
                chunk.clear(offset);
            }
            return;
        }

        if !self.chunks.contains_key(&key) {
            self.bounds.grow_to_chunk_of(x, y, z);
        }
        self.chunks.entry(key).or_default().set(offset, state);
    }
}
