use bhmerge::simulation::scenario::initial_bodies;
use bhmerge::{merge, radius_for_mass, Binary, Body, NVec3, Parameters};

use proptest::prelude::*;

fn vec3(range: f64) -> impl Strategy<Value = NVec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| NVec3::new(x, y, z))
}

proptest! {
    #[test]
    fn radius_always_matches_mass(m in 0.01f64..500.0, m2 in 0.01f64..500.0) {
        let mut b = Body::new(m, NVec3::zeros(), NVec3::zeros());
        prop_assert!((b.radius() - radius_for_mass(m)).abs() < 1e-12);

        b.set_mass(m2);
        prop_assert!((b.radius() - m2.powf(0.7) * 0.8).abs() < 1e-12);
    }

    #[test]
    fn initial_pair_orbits_origin_with_zero_momentum(
        mass_ratio in 0.05f64..2.0,
        separation in 5.0f64..200.0,
    ) {
        let params = Parameters::default();
        let [b1, b2, _] = initial_bodies(&Binary { mass_ratio, separation }, &params);

        let com = (b1.x * b1.m() + b2.x * b2.m()) / (b1.m() + b2.m());
        prop_assert!(com.norm() < 1e-9 * separation);

        let momentum = b1.momentum() + b2.momentum();
        prop_assert!(momentum.norm() < 1e-9);

        prop_assert!(((b1.x - b2.x).norm() - separation).abs() < 1e-9 * separation);
        prop_assert!((b1.m() + b2.m() - params.primary_mass * (1.0 + mass_ratio)).abs() < 1e-9);
    }

    #[test]
    fn merge_conserves_momentum(
        m1 in 0.1f64..50.0,
        m2 in 0.1f64..50.0,
        x1 in vec3(100.0),
        x2 in vec3(100.0),
        v1 in vec3(50.0),
        v2 in vec3(50.0),
        mass_loss in 0.0f64..0.5,
    ) {
        let b1 = Body::new(m1, x1, v1);
        let b2 = Body::new(m2, x2, v2);
        let remnant = merge(&b1, &b2, mass_loss);

        prop_assert!((remnant.mass - (m1 + m2) * (1.0 - mass_loss)).abs() < 1e-9);
        prop_assert!((remnant.radius - radius_for_mass(remnant.mass)).abs() < 1e-9);

        let p_in = b1.momentum() + b2.momentum();
        let p_out = remnant.v * remnant.mass;
        prop_assert!((p_in - p_out).norm() < 1e-8 * (1.0 + p_in.norm()));

        let com = (x1 * m1 + x2 * m2) / (m1 + m2);
        prop_assert!((remnant.x - com).norm() < 1e-9 * (1.0 + com.norm()));
    }
}
