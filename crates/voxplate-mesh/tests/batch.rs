use std::sync::Arc;

use voxplate_blocks::mappings::{FaceTextures, Mapping};
use voxplate_blocks::{BlockState, TextureMappings};
use voxplate_mesh::build_plate_mesh;
use voxplate_plate::Plate;

fn plate_with(blocks: &[((i32, i32, i32), &str)]) -> Plate {
    let mut plate = Plate::new();
    for &((x, y, z), name) in blocks {
        plate.set_block(x, y, z, BlockState::new(name));
    }
    plate
}

#[test]
fn isolated_block_emits_exactly_six_quads() {
    let plate = plate_with(&[((0, 0, 0), "stone")]);
    let mesh = build_plate_mesh(&plate, &TextureMappings::new());

    assert_eq!(mesh.batches.len(), 1);
    let batch = &mesh.batches["stone"];
    assert_eq!(batch.quad_count(), 6);
    assert_eq!(batch.vertex_count(), 24);
    assert_eq!(batch.idx.len(), 36);
    assert_eq!(batch.norm.len(), batch.pos.len());
    assert_eq!(batch.uv.len() / 2, batch.vertex_count());
    assert!(mesh.customs.is_empty());
}

#[test]
fn surrounded_block_emits_nothing() {
    // Center plus all six neighbors: each neighbor exposes 5 faces, the
    // center exposes none, so 30 quads total.
    let plate = plate_with(&[
        ((1, 1, 1), "stone"),
        ((0, 1, 1), "stone"),
        ((2, 1, 1), "stone"),
        ((1, 0, 1), "stone"),
        ((1, 2, 1), "stone"),
        ((1, 1, 0), "stone"),
        ((1, 1, 2), "stone"),
    ]);
    let mesh = build_plate_mesh(&plate, &TextureMappings::new());
    assert_eq!(mesh.quad_count(), 30);
}

#[test]
fn two_blocks_hide_their_shared_face() {
    let plate = plate_with(&[((0, 0, 0), "alpha"), ((1, 0, 0), "beta")]);
    let mesh = build_plate_mesh(&plate, &TextureMappings::new());

    // No mappings configured: batches key by the bare block names.
    assert_eq!(mesh.batches.len(), 2);
    assert_eq!(mesh.batches["alpha"].quad_count(), 5);
    assert_eq!(mesh.batches["beta"].quad_count(), 5);
}

#[test]
fn translucent_neighbor_does_not_cull() {
    let mut mappings = TextureMappings::new();
    mappings.insert(
        "glass",
        Mapping::Faces(Box::new(FaceTextures {
            translucent: true,
            ..FaceTextures::plain("glass")
        })),
    );
    let plate = plate_with(&[((0, 0, 0), "stone"), ((1, 0, 0), "glass")]);
    let mesh = build_plate_mesh(&plate, &mappings);

    // Stone keeps the face behind the glass; the glass itself loses the face
    // against the opaque stone.
    assert_eq!(mesh.batches["stone"].quad_count(), 6);
    assert_eq!(mesh.batches["glass"].quad_count(), 5);
}

#[test]
fn custom_geometry_cell_is_standalone_and_open() {
    let mut mappings = TextureMappings::new();
    mappings.insert(
        "oak_fence",
        Mapping::Faces(Box::new(FaceTextures {
            geometry: Some(voxplate_blocks::GeometryKind::Fence),
            ..FaceTextures::plain("oak_planks")
        })),
    );
    let plate = plate_with(&[((0, 0, 0), "stone"), ((1, 0, 0), "oak_fence")]);
    let mesh = build_plate_mesh(&plate, &mappings);

    // The fence never occludes its neighbor and produces no batched faces.
    assert_eq!(mesh.batches["stone"].quad_count(), 6);
    assert_eq!(mesh.batches.len(), 1);
    assert_eq!(mesh.customs.len(), 1);

    let custom = &mesh.customs[0];
    assert_eq!(custom.key, "oak_planks");
    // Translated to the cell center: the post straddles x = 1.5.
    let xs: Vec<f32> = custom.build.pos.chunks_exact(3).map(|p| p[0]).collect();
    assert!(xs.iter().all(|&x| (1.0..=2.0).contains(&x)));
    assert!(xs.iter().any(|&x| (x - 1.375).abs() < 1e-6));
    assert!(xs.iter().any(|&x| (x - 1.625).abs() < 1e-6));
}

#[test]
fn supplier_key_names_the_batch() {
    let mut mappings = TextureMappings::new();
    mappings.set_supplier(
        "beacon",
        Arc::new(|state: &BlockState, _| format!("{}_active", state.name)),
    );
    let plate = plate_with(&[((0, 0, 0), "beacon")]);
    let mesh = build_plate_mesh(&plate, &mappings);
    assert_eq!(mesh.batches.len(), 1);
    assert_eq!(mesh.batches["beacon_active"].quad_count(), 6);
}

#[test]
fn scan_covers_the_whole_grown_box() {
    // Distant blocks in separate chunks still both mesh, and the box covers
    // the air between them without emitting anything for it.
    let plate = plate_with(&[((0, 0, 0), "stone"), ((40, 0, 0), "stone")]);
    let mesh = build_plate_mesh(&plate, &TextureMappings::new());
    assert_eq!(mesh.batches["stone"].quad_count(), 12);
    assert_eq!(mesh.bounds.min.x, 0.0);
    assert_eq!(mesh.bounds.max.x, 48.0);
}

#[test]
fn meshing_twice_is_deterministic() {
    let mut mappings = TextureMappings::new();
    mappings.insert(
        "fern",
        Mapping::Faces(Box::new(FaceTextures {
            geometry: Some(voxplate_blocks::GeometryKind::Plant),
            ..FaceTextures::plain("fern")
        })),
    );
    let plate = plate_with(&[((3, 0, 7), "fern"), ((5, 0, 7), "fern")]);

    let a = build_plate_mesh(&plate, &mappings);
    let b = build_plate_mesh(&plate, &mappings);
    assert_eq!(a.customs.len(), 2);
    for (ca, cb) in a.customs.iter().zip(&b.customs) {
        assert_eq!(ca.build.pos, cb.build.pos);
    }
    // Two cells, two independent jitter rolls; the meshes need not match
    // each other, only themselves across runs.
}
