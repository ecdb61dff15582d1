// Host-side checks for the sampled instance field.

use glam::Vec3;
use hearts_core::extrude::MeshData;
use hearts_core::material::PhysicalMaterial;
use hearts_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use std::rc::Rc;
use std::time::Duration;

fn make_field(seed: u64) -> InstancedField {
    let mut rng = StdRng::seed_from_u64(seed);
    InstancedField::build(
        Rc::new(MeshData::default()),
        Rc::new(PhysicalMaterial::default()),
        INSTANCE_COUNT,
        &mut rng,
    )
}

#[test]
fn field_has_fixed_capacity() {
    let field = make_field(1);
    assert_eq!(field.len(), 700);
    assert_eq!(field.colors().len(), 700);
    assert_eq!(field.instance_data().len(), 700);
}

#[test]
fn positions_stay_inside_spawn_cube_and_scale_is_unit() {
    for seed in [1, 7, 42] {
        let field = make_field(seed);
        for t in field.transforms() {
            for c in t.position.to_array() {
                assert!((-SPAWN_RADIUS..=SPAWN_RADIUS).contains(&c), "coord {c}");
            }
            assert_eq!(t.scale, Vec3::ONE);
        }
    }
}

#[test]
fn rotations_use_only_x_and_y_in_one_turn() {
    let field = make_field(9);
    for t in field.transforms() {
        assert!((0.0..TAU).contains(&t.rotation_x));
        assert!((0.0..TAU).contains(&t.rotation_y));
    }
}

#[test]
fn positions_actually_spread_out() {
    let field = make_field(5);
    let (lo, hi) = field.transforms().iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), t| (lo.min(t.position), hi.max(t.position)),
    );
    assert!(lo.max_element() < -40.0, "lo={lo:?}");
    assert!(hi.min_element() > 40.0, "hi={hi:?}");
}

#[test]
fn colors_are_red_variants() {
    let field = make_field(11);
    for c in field.colors() {
        assert_eq!(c.h, 0.0);
        assert!((0.8..=1.0).contains(&c.s), "saturation {}", c.s);
        assert!((0.4..=0.6).contains(&c.l), "lightness {}", c.l);
    }
    for raw in field.instance_data() {
        let [r, g, b, a] = raw.color;
        assert!(r > g && (g - b).abs() < 1e-5, "not a red tint: {:?}", raw.color);
        assert_eq!(a, 1.0);
    }
}

#[test]
fn instance_matrices_encode_the_sampled_placement() {
    let field = make_field(3);
    for (t, raw) in field.transforms().iter().zip(field.instance_data()) {
        let m = glam::Mat4::from_cols_array_2d(&raw.model);
        assert!((m.w_axis.truncate() - t.position).length() < 1e-4);
    }
}

#[test]
fn spinning_never_touches_instance_transforms() {
    let mut field = make_field(21);
    let before: Vec<_> = field.transforms().to_vec();
    let mode = RotationMode::FixedPerTick(ROTATION_STEP_PER_TICK);
    for _ in 0..100 {
        field.rotate_y(mode.step(Duration::from_millis(16)));
    }
    assert_eq!(field.transforms(), &before[..]);
    assert!((field.rotation_y() - 0.3).abs() < 1e-4);
}

#[test]
fn same_seed_same_field() {
    let a = make_field(77);
    let b = make_field(77);
    assert_eq!(a.transforms(), b.transforms());
    assert_eq!(a.colors(), b.colors());
}
