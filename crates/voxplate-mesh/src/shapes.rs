//! Parametric generators for the non-cube geometry families.
//!
//! Each generator is total over its property domain: unrecognized values get
//! a safe default shape, never an error. Geometry is built centered on the
//! origin; the batcher translates it to the cell center.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use voxplate_blocks::{BlockState, GeometryKind};
use voxplate_geom::Vec3;

use super::MeshBuild;

pub fn build_custom(kind: GeometryKind, state: &BlockState, seed: u64) -> MeshBuild {
    match kind {
        GeometryKind::Stairs => stairs(state),
        GeometryKind::Fence => fence(state),
        GeometryKind::Pane => pane(state),
        GeometryKind::Plant => plant(state, seed),
        GeometryKind::PressurePlate => pressure_plate(state),
        GeometryKind::Rail => rail(state),
    }
}

/// Half-height base plus one or two step boxes picked by `shape`, mirrored
/// vertically for `half=top` and yawed by `facing` (south is zero).
pub fn stairs(state: &BlockState) -> MeshBuild {
    let upside_down = state.prop_is("half", "top");
    let step_y = if upside_down { -0.25 } else { 0.25 };
    let base_y = -step_y;

    let mut mb = MeshBuild::default();
    mb.push_box(Vec3::new(1.0, 0.5, 1.0), Vec3::new(0.0, base_y, 0.0));

    let half = Vec3::new(0.5, 0.5, 0.5);
    let shape = state.prop("shape").unwrap_or("inner");
    if shape == "straight" {
        mb.push_box(Vec3::new(1.0, 0.5, 0.5), Vec3::new(0.0, step_y, 0.25));
    } else if shape.starts_with("inner") {
        mb.push_box(Vec3::new(1.0, 0.5, 0.5), Vec3::new(0.0, step_y, 0.25));
        if shape.ends_with("left") {
            mb.push_box(half, Vec3::new(0.25, step_y, -0.25));
        } else if shape.ends_with("right") {
            mb.push_box(half, Vec3::new(-0.25, step_y, -0.25));
        } else {
            mb.push_box(half, Vec3::ZERO);
        }
    } else if shape.starts_with("outer") {
        if shape.ends_with("left") {
            mb.push_box(half, Vec3::new(0.25, step_y, 0.25));
        } else if shape.ends_with("right") {
            mb.push_box(half, Vec3::new(-0.25, step_y, 0.25));
        } else {
            mb.push_box(half, Vec3::ZERO);
        }
    } else {
        log::warn!("unhandled stairs shape '{}', emitting full cube", shape);
        let mut cube = MeshBuild::default();
        cube.push_box(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        return cube;
    }

    mb.rotate_y(facing_angle(state));
    mb
}

fn facing_angle(state: &BlockState) -> f32 {
    match state.prop("facing") {
        Some("north") => PI,
        Some("east") => FRAC_PI_2,
        Some("west") => PI * 1.5,
        // south and everything else stay unrotated
        _ => 0.0,
    }
}

const BAR_UPPER_Y: f32 = 6.0 / 16.0;
const BAR_LOWER_Y: f32 = -1.0 / 16.0;

/// Full-height central post plus an upper/lower bar pair per connected side.
pub fn fence(state: &BlockState) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.push_box(Vec3::new(0.25, 1.0, 0.25), Vec3::ZERO);

    let z_bar = Vec3::new(2.0 / 16.0, 3.0 / 16.0, 8.0 / 16.0);
    let x_bar = Vec3::new(8.0 / 16.0, 3.0 / 16.0, 2.0 / 16.0);
    for (side, size, offset) in [
        ("north", z_bar, Vec3::new(0.0, 0.0, -4.0 / 16.0)),
        ("south", z_bar, Vec3::new(0.0, 0.0, 4.0 / 16.0)),
        ("east", x_bar, Vec3::new(4.0 / 16.0, 0.0, 0.0)),
        ("west", x_bar, Vec3::new(-4.0 / 16.0, 0.0, 0.0)),
    ] {
        if state.prop_is(side, "true") {
            mb.push_box(size, Vec3::new(offset.x, BAR_UPPER_Y, offset.z));
            mb.push_box(size, Vec3::new(offset.x, BAR_LOWER_Y, offset.z));
        }
    }
    mb
}

const PANE_T: f32 = 2.0 / 16.0;

/// Through-run panels when opposite sides connect; otherwise a central post
/// plus half-length panels per connected side.
pub fn pane(state: &BlockState) -> MeshBuild {
    let north = state.prop_is("north", "true");
    let south = state.prop_is("south", "true");
    let east = state.prop_is("east", "true");
    let west = state.prop_is("west", "true");

    let mut mb = MeshBuild::default();
    if north && south {
        mb.push_box(Vec3::new(PANE_T, 1.0, 1.0), Vec3::ZERO);
    }
    if east && west {
        mb.push_box(Vec3::new(1.0, 1.0, PANE_T), Vec3::ZERO);
    }
    if !mb.is_empty() {
        return mb;
    }

    // Center post
    mb.push_box(Vec3::new(PANE_T, 1.0, PANE_T), Vec3::ZERO);
    if north {
        mb.push_box(Vec3::new(PANE_T, 1.0, 0.5), Vec3::new(0.0, 0.0, -0.25));
    }
    if south {
        mb.push_box(Vec3::new(PANE_T, 1.0, 0.5), Vec3::new(0.0, 0.0, 0.25));
    }
    if east {
        mb.push_box(Vec3::new(0.5, 1.0, PANE_T), Vec3::new(0.25, 0.0, 0.0));
    }
    if west {
        mb.push_box(Vec3::new(0.5, 1.0, PANE_T), Vec3::new(-0.25, 0.0, 0.0));
    }
    mb
}

/// Two crossed planes sharing a small horizontal jitter. Fixed variants
/// (any `half` or `direction` property) stay centered.
pub fn plant(state: &BlockState, seed: u64) -> MeshBuild {
    let fixed = state.prop("half").is_some() || state.prop("direction").is_some();
    let (jx, jz) = if fixed {
        (0.0, 0.0)
    } else {
        let mut rng = fastrand::Rng::with_seed(seed);
        (
            rng.u32(0..4) as f32 / 10.0 - 0.2,
            rng.u32(0..4) as f32 / 10.0 - 0.2,
        )
    };

    let jitter = Vec3::new(jx, 0.0, jz);
    let mut mb = MeshBuild::default();
    mb.push_plane();
    mb.rotate_y(FRAC_PI_4);
    mb.translate(jitter);

    let mut cross = MeshBuild::default();
    cross.push_plane();
    cross.rotate_y(-FRAC_PI_4);
    cross.translate(jitter);

    mb.append(cross);
    mb
}

/// Flat box, half as thick while pressed.
pub fn pressure_plate(state: &BlockState) -> MeshBuild {
    let thickness = if state.prop_is("powered", "true") {
        1.0 / 32.0
    } else {
        1.0 / 16.0
    };
    let mut mb = MeshBuild::default();
    mb.push_box(Vec3::new(0.8, thickness, 0.8), Vec3::ZERO);
    mb
}

/// Straight rails lie flat; ascending and corner shapes keep the upright
/// plane the texture was drawn for.
pub fn rail(state: &BlockState) -> MeshBuild {
    let mut mb = MeshBuild::default();
    mb.push_plane();
    if matches!(state.prop("shape"), Some("north_south" | "east_west")) {
        mb.rotate_x(FRAC_PI_2);
        if state.prop_is("shape", "east_west") {
            mb.rotate_y(FRAC_PI_2);
        }
    }
    mb
}
