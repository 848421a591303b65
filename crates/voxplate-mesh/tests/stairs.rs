use voxplate_blocks::BlockState;
use voxplate_geom::Vec3;
use voxplate_mesh::MeshBuild;
use voxplate_mesh::shapes::stairs;

fn count_quads_with_normal(build: &MeshBuild, normal: Vec3, min: Vec3, max: Vec3) -> usize {
    let eps = 1e-4f32;
    let pos = &build.pos;
    let nor = &build.norm;
    let mut total = 0usize;
    for i in 0..build.vertex_count() / 4 {
        let nbase = i * 12;
        if (nor[nbase] - normal.x).abs() > 1e-5
            || (nor[nbase + 1] - normal.y).abs() > 1e-5
            || (nor[nbase + 2] - normal.z).abs() > 1e-5
        {
            continue;
        }
        let pbase = i * 12;
        let inside = (0..4).all(|v| {
            let x = pos[pbase + v * 3];
            let y = pos[pbase + v * 3 + 1];
            let z = pos[pbase + v * 3 + 2];
            x >= min.x - eps
                && x <= max.x + eps
                && y >= min.y - eps
                && y <= max.y + eps
                && z >= min.z - eps
                && z <= max.z + eps
        });
        if inside {
            total += 1;
        }
    }
    total
}

fn state(props: &[(&str, &str)]) -> BlockState {
    BlockState::with_props("oak_stairs", props.iter().copied())
}

#[test]
fn straight_bottom_south_is_base_plus_one_step() {
    let mb = stairs(&state(&[
        ("shape", "straight"),
        ("half", "bottom"),
        ("facing", "south"),
    ]));
    assert_eq!(mb.quad_count(), 12);

    // Base slab fills the lower half.
    assert_eq!(
        count_quads_with_normal(
            &mb,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
        ),
        1
    );
    // Step tread sits on top at the south (+Z) half, unrotated.
    assert_eq!(
        count_quads_with_normal(
            &mb,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.5),
        ),
        1
    );
}

#[test]
fn top_half_mirrors_the_step_downward() {
    let mb = stairs(&state(&[
        ("shape", "straight"),
        ("half", "top"),
        ("facing", "south"),
    ]));
    assert_eq!(mb.quad_count(), 12);

    // The step hangs below; its underside is at the very bottom.
    assert_eq!(
        count_quads_with_normal(
            &mb,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.5),
        ),
        1
    );
    // And the base slab now fills the upper half.
    assert_eq!(
        count_quads_with_normal(
            &mb,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, 0.5),
        ),
        1
    );
}

#[test]
fn facing_east_rotates_the_step_onto_positive_x() {
    let mb = stairs(&state(&[
        ("shape", "straight"),
        ("half", "bottom"),
        ("facing", "east"),
    ]));
    assert_eq!(
        count_quads_with_normal(
            &mb,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.5, -0.5),
            Vec3::new(0.5, 0.5, 0.5),
        ),
        1
    );
}

#[test]
fn corner_shapes_change_the_box_count() {
    let inner = stairs(&state(&[("shape", "inner_left"), ("facing", "south")]));
    assert_eq!(inner.quad_count(), 18);

    let outer = stairs(&state(&[("shape", "outer_right"), ("facing", "south")]));
    assert_eq!(outer.quad_count(), 12);
}

#[test]
fn unrecognized_shape_degrades_to_a_full_cube() {
    let mb = stairs(&state(&[("shape", "spiral")]));
    assert_eq!(mb.quad_count(), 6);
    for p in mb.pos.chunks_exact(3) {
        assert!(p.iter().all(|c| c.abs() <= 0.5 + 1e-5));
    }
}
