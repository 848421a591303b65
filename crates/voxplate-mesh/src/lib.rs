//! Face-culling mesh batcher over a voxel plate.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use voxplate_blocks::{BlockState, TextureMappings};
use voxplate_geom::{Aabb, Vec3};
use voxplate_plate::Plate;

mod face;
pub mod shapes;

pub use face::Face;

/// Flat vertex/index accumulator for one drawable unit.
///
/// `pos`/`norm` hold xyz triples, `uv` holds pairs, and `idx` references only
/// vertices already appended here, two triangles per quad.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    fn push_vertex(&mut self, p: Vec3, n: Vec3, uv: [f32; 2]) {
        self.pos.extend_from_slice(&[p.x, p.y, p.z]);
        self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        self.uv.extend_from_slice(&uv);
    }

    #[inline]
    fn push_quad_indices(&mut self, base: u32) {
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    /// One face of the unit cube whose min corner sits at `base`.
    pub fn push_unit_face(&mut self, face: Face, base: Vec3) {
        let ndx = self.vertex_count() as u32;
        let n = face.normal();
        for (offset, uv) in face.corners() {
            let p = base + Vec3::new(offset[0], offset[1], offset[2]);
            self.push_vertex(p, n, *uv);
        }
        self.push_quad_indices(ndx);
    }

    /// Axis-aligned box of the given size centered on `center`.
    pub fn push_box(&mut self, size: Vec3, center: Vec3) {
        for face in Face::ALL {
            let ndx = self.vertex_count() as u32;
            let n = face.normal();
            for (offset, uv) in face.corners() {
                let p = center
                    + Vec3::new(
                        (offset[0] - 0.5) * size.x,
                        (offset[1] - 0.5) * size.y,
                        (offset[2] - 0.5) * size.z,
                    );
                self.push_vertex(p, n, *uv);
            }
            self.push_quad_indices(ndx);
        }
    }

    /// Unit plane in the XY axes, facing +Z, centered on the origin.
    /// Single-sided here; double-sided display is the sink's call.
    pub fn push_plane(&mut self) {
        let ndx = self.vertex_count() as u32;
        let n = Vec3::new(0.0, 0.0, 1.0);
        self.push_vertex(Vec3::new(-0.5, -0.5, 0.0), n, [0.0, 0.0]);
        self.push_vertex(Vec3::new(0.5, -0.5, 0.0), n, [1.0, 0.0]);
        self.push_vertex(Vec3::new(-0.5, 0.5, 0.0), n, [0.0, 1.0]);
        self.push_vertex(Vec3::new(0.5, 0.5, 0.0), n, [1.0, 1.0]);
        self.push_quad_indices(ndx);
    }

    pub fn translate(&mut self, d: Vec3) {
        for p in self.pos.chunks_exact_mut(3) {
            p[0] += d.x;
            p[1] += d.y;
            p[2] += d.z;
        }
    }

    pub fn rotate_y(&mut self, angle: f32) {
        rotate_triples(&mut self.pos, |v| v.rotated_y(angle));
        rotate_triples(&mut self.norm, |v| v.rotated_y(angle));
    }

    pub fn rotate_x(&mut self, angle: f32) {
        rotate_triples(&mut self.pos, |v| v.rotated_x(angle));
        rotate_triples(&mut self.norm, |v| v.rotated_x(angle));
    }

    /// Merges another build into this one, re-basing its indices.
    pub fn append(&mut self, other: MeshBuild) {
        let base = self.vertex_count() as u32;
        self.pos.extend_from_slice(&other.pos);
        self.norm.extend_from_slice(&other.norm);
        self.uv.extend_from_slice(&other.uv);
        self.idx.extend(other.idx.into_iter().map(|i| i + base));
    }
}

fn rotate_triples(data: &mut [f32], rot: impl Fn(Vec3) -> Vec3) {
    for t in data.chunks_exact_mut(3) {
        let v = rot(Vec3::new(t[0], t[1], t[2]));
        t[0] = v.x;
        t[1] = v.y;
        t[2] = v.z;
    }
}

/// A self-contained mesh for one custom-geometry cell, already translated to
/// the cell center. Not batched and never face-culled.
#[derive(Clone, Debug)]
pub struct CustomMesh {
    pub key: String,
    pub build: MeshBuild,
}

/// Everything the batcher produces for one plate.
#[derive(Default, Clone, Debug)]
pub struct PlateMesh {
    pub batches: HashMap<String, MeshBuild>,
    pub customs: Vec<CustomMesh>,
    pub bounds: Aabb,
}

impl PlateMesh {
    pub fn quad_count(&self) -> usize {
        self.batches.values().map(|b| b.quad_count()).sum()
    }
}

/// Scans the plate's bounding box and emits per-material batches plus
/// standalone custom-shape meshes.
///
/// The scan covers every cell of the box regardless of sparsity; empty cells
/// cost one raw lookup. The plate must not be mutated during the scan.
pub fn build_plate_mesh(plate: &Plate, mappings: &TextureMappings) -> PlateMesh {
    let b = plate.bounds();
    let mut batches: HashMap<String, MeshBuild> = HashMap::new();
    let mut customs: Vec<CustomMesh> = Vec::new();

    for x in b.min_x..=b.max_x {
        for y in b.min_y..=b.max_y {
            for z in b.min_z..=b.max_z {
                let Some(state) = plate.get_cell(x, y, z) else {
                    continue;
                };

                if let Some(kind) = mappings.custom_geometry(&state.name) {
                    // The generator owns all six faces; texture lookup is
                    // direction-agnostic.
                    let key = mappings.texture_key(state, None);
                    let mut build = shapes::build_custom(kind, state, cell_seed(x, y, z));
                    build.translate(Vec3::new(
                        x as f32 + 0.5,
                        y as f32 + 0.5,
                        z as f32 + 0.5,
                    ));
                    customs.push(CustomMesh { key, build });
                    continue;
                }

                let base = Vec3::new(x as f32, y as f32, z as f32);
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    if occludes(plate.get_cell(x + dx, y + dy, z + dz), mappings) {
                        continue;
                    }
                    let key = mappings.texture_key(state, Some(face.orientation()));
                    batches.entry(key).or_default().push_unit_face(face, base);
                }
            }
        }
    }

    PlateMesh {
        batches,
        customs,
        bounds: Aabb::new(
            Vec3::new(b.min_x as f32, b.min_y as f32, b.min_z as f32),
            Vec3::new(b.max_x as f32 + 1.0, b.max_y as f32 + 1.0, b.max_z as f32 + 1.0),
        ),
    }
}

#[inline]
fn occludes(neighbor: Option<&BlockState>, mappings: &TextureMappings) -> bool {
    match neighbor {
        None => false,
        Some(nb) => !mappings.translucent_or_open(&nb.name),
    }
}

/// Stable per-cell seed for the cosmetic jitter sources.
#[inline]
fn cell_seed(x: i32, y: i32, z: i32) -> u64 {
    let mut h = (x as i64 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    h ^= (y as i64 as u64).rotate_left(21);
    h = h.wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    h ^ (z as i64 as u64).rotate_left(42)
}
