use proptest::prelude::*;
use proptest::strategy::Strategy;
use voxplate_geom::Vec3;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    -1e4f32..=1e4f32
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // a + b == b + a (element-wise)
    #[test]
    fn vec3_add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // Rotation about Y preserves length and the Y component
    #[test]
    fn vec3_rotated_y_isometry(v in arb_vec3(), angle in -10.0f32..10.0) {
        let r = v.rotated_y(angle);
        let scale = v.length().max(1.0);
        prop_assert!(approx(r.length(), v.length(), 1e-3 * scale));
        prop_assert!(approx(r.y, v.y, 1e-6));
    }

    // Rotating forward then back is the identity
    #[test]
    fn vec3_rotated_y_roundtrip(v in arb_vec3(), angle in -10.0f32..10.0) {
        let r = v.rotated_y(angle).rotated_y(-angle);
        let scale = v.length().max(1.0);
        prop_assert!(vapprox(r, v, 1e-3 * scale));
    }

    // X rotation preserves length and the X component
    #[test]
    fn vec3_rotated_x_isometry(v in arb_vec3(), angle in -10.0f32..10.0) {
        let r = v.rotated_x(angle);
        let scale = v.length().max(1.0);
        prop_assert!(approx(r.length(), v.length(), 1e-3 * scale));
        prop_assert!(approx(r.x, v.x, 1e-6));
    }
}

#[test]
fn quarter_turn_y_maps_z_onto_x() {
    let v = Vec3::new(0.0, 0.0, 1.0).rotated_y(std::f32::consts::FRAC_PI_2);
    assert!(vapprox(v, Vec3::new(1.0, 0.0, 0.0), 1e-6));
}

#[test]
fn quarter_turn_x_lays_y_onto_z() {
    let v = Vec3::new(0.0, 1.0, 0.0).rotated_x(std::f32::consts::FRAC_PI_2);
    assert!(vapprox(v, Vec3::new(0.0, 0.0, 1.0), 1e-6));
}
