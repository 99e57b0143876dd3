use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use vecops::library::*;
use vecops::{Vector2, Vector3};

const LIMIT: f64 = 1e3;

fn vector2() -> impl Strategy<Value = Vector2> {
    (-LIMIT..LIMIT, -LIMIT..LIMIT).prop_map(|(x, y)| Vector2::new(x, y))
}

fn vector3() -> impl Strategy<Value = Vector3> {
    (-LIMIT..LIMIT, -LIMIT..LIMIT, -LIMIT..LIMIT).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

proptest! {
    #[test]
    fn add_commutes(a in vector3(), b in vector3(), p in vector2(), q in vector2()) {
        prop_assert_eq!(add(a, b), add(b, a));
        prop_assert_eq!(add(p, q), add(q, p));
    }

    #[test]
    fn subtract_anticommutes(a in vector3(), b in vector3(), p in vector2(), q in vector2()) {
        prop_assert_eq!(subtract(a, b), scale(subtract(b, a), -1.0));
        prop_assert_eq!(subtract(p, q), -subtract(q, p));
    }

    #[test]
    fn cross_product_anticommutes(a in vector3(), b in vector3()) {
        prop_assert_eq!(cross_product(a, b), scale(cross_product(b, a), -1.0));
    }

    #[test]
    fn cross_product_is_orthogonal(a in vector3(), b in vector3()) {
        let c = cross_product(a, b);
        // Each term of the dot product is bounded by LIMIT^3.
        assert_abs_diff_eq!(dot_product(a, c), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(dot_product(b, c), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn dot_with_self_is_squared_magnitude(v in vector3()) {
        let mag = magnitude(v);
        assert_abs_diff_eq!(dot_product(v, v), mag * mag, epsilon = 1e-7);
    }

    #[test]
    fn unit_vector_has_unit_length(v in vector3(), w in vector2()) {
        prop_assume!(magnitude(v) > 0.0 && magnitude(w) > 0.0);
        assert_abs_diff_eq!(magnitude(unit_vector(v)), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(magnitude(unit_vector(w)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn orthogonal_2d_keeps_length(v in vector2()) {
        let o = orthogonal_vector(v);
        assert_abs_diff_eq!(magnitude(o), magnitude(v), epsilon = 1e-12);
        prop_assert_eq!(dot_product(v, o), 0.0);
    }

    #[test]
    fn area_is_symmetric_and_non_negative(
        a in vector3(),
        b in vector3(),
        p in vector2(),
        q in vector2(),
    ) {
        prop_assert!(vector_area(a, b) >= 0.0);
        prop_assert!(vector_area(p, q) >= 0.0);
        prop_assert_eq!(vector_area(a, b), vector_area(b, a));
        assert_abs_diff_eq!(vector_area(p, q), vector_area(q, p), epsilon = 1e-9);
    }

    #[test]
    fn angle_never_nan(a in vector3(), b in vector3()) {
        let deg = angle(a, b);
        prop_assert!(!deg.is_nan());
        prop_assert!((0.0..=180.0 + 1e-9).contains(&deg));
    }

    #[test]
    fn projection_lies_along_target(a in vector3(), b in vector3()) {
        prop_assume!(magnitude(b) > 1e-3);
        let p = projection(a, b);
        assert_abs_diff_eq!(magnitude(cross_product(p, unit_vector(b))), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(magnitude(p), vector_component(a, b).abs(), epsilon = 1e-9);
    }

    #[test]
    fn display_round_trips(v in vector3(), w in vector2()) {
        prop_assert_eq!(v.to_string().parse::<Vector3>(), Ok(v));
        prop_assert_eq!(w.to_string().parse::<Vector2>(), Ok(w));
    }
}
