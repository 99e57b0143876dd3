//! Two and three dimensional vector arithmetic.
//!
//! The value types [`Vector2`] and [`Vector3`] live in their own modules;
//! every operation on them is a free function in [`library`], generic over
//! the [`Vector`] trait so the same call works for either dimension.

mod parse;
pub mod vector2;
pub mod vector3;

pub use library::Vector;
pub use parse::ParseVectorError;
pub use vector2::Vector2;
pub use vector3::Vector3;

pub mod library {
    use crate::vector3::Vector3;
    use std::fmt::{Debug, Display};

    /// Per-dimension primitives. The formulas live in the `Vector2` and
    /// `Vector3` implementations; the free functions below only dispatch.
    pub trait Vector: Copy + Default + PartialEq + Debug + Display {
        fn add(self, other: Self) -> Self;
        fn subtract(self, other: Self) -> Self;
        fn scale(self, k: f64) -> Self;
        fn dot_product(self, other: Self) -> f64;
        fn magnitude(self) -> f64;
        /// Returns the zero vector when `self` has zero magnitude.
        fn unit_vector(self) -> Self;
        fn orthogonal_vector(self) -> Self;
        fn vector_area(self, other: Self) -> f64;
    }

    pub fn add<V: Vector>(v1: V, v2: V) -> V {
        v1.add(v2)
    }

    pub fn subtract<V: Vector>(v1: V, v2: V) -> V {
        v1.subtract(v2)
    }

    pub fn scale<V: Vector>(v: V, k: f64) -> V {
        v.scale(k)
    }

    pub fn dot_product<V: Vector>(v1: V, v2: V) -> f64 {
        v1.dot_product(v2)
    }

    pub fn cross_product(v1: Vector3, v2: Vector3) -> Vector3 {
        let x = v1.y() * v2.z() - v1.z() * v2.y();
        let y = v1.z() * v2.x() - v1.x() * v2.z();
        let z = v1.x() * v2.y() - v1.y() * v2.x();
        Vector3::new(x, y, z)
    }

    /// Euclidean length, computed with `hypot` so large or tiny components
    /// don't overflow or underflow in the intermediate squares.
    pub fn magnitude<V: Vector>(v: V) -> f64 {
        v.magnitude()
    }

    /// Direction of `v` with length one.
    ///
    /// There is no unit vector for the zero vector; in that case the zero
    /// vector itself is returned instead of NaN components.
    pub fn unit_vector<V: Vector>(v: V) -> V {
        v.unit_vector()
    }

    /// A vector perpendicular to `v`.
    ///
    /// In 2D this is `v` rotated 90 degrees counter-clockwise. In 3D it is
    /// `cross_product(v, (1, 0, 0))`, which is the zero vector whenever `v`
    /// is parallel to the x-axis.
    pub fn orthogonal_vector<V: Vector>(v: V) -> V {
        v.orthogonal_vector()
    }

    /// Area of the parallelogram spanned by `v1` and `v2`.
    pub fn vector_area<V: Vector>(v1: V, v2: V) -> f64 {
        v1.vector_area(v2)
    }

    /// Angle between `v1` and `v2` in degrees.
    ///
    /// Returns `0.0` whenever the arccosine comes out as NaN: when either
    /// vector is zero, and when rounding pushes the cosine of nearly
    /// (anti-)parallel vectors just outside `[-1, 1]`. The cosine is not
    /// clamped.
    pub fn angle<V: Vector>(v1: V, v2: V) -> f64 {
        let cos = dot_product(v1, v2) / (magnitude(v1) * magnitude(v2));
        let angle = cos.acos().to_degrees();
        if angle.is_nan() {
            return 0.0;
        }
        angle
    }

    /// Scalar projection of `v1` onto `v2`.
    ///
    /// Not guarded: a zero `v2` divides by zero and yields NaN or infinity.
    pub fn vector_component<V: Vector>(v1: V, v2: V) -> f64 {
        dot_product(v1, v2) / magnitude(v2)
    }

    /// Vector projection of `v1` onto `v2`.
    ///
    /// Projecting onto the zero vector gives the zero vector: the
    /// direction from [`unit_vector`] is already zero, and the unguarded
    /// [`vector_component`] is never multiplied into it.
    #[doc(alias = "proyection")]
    pub fn projection<V: Vector>(v1: V, v2: V) -> V {
        let direction = unit_vector(v2);
        if direction == V::default() {
            return direction;
        }
        scale(direction, vector_component(v1, v2))
    }
}
