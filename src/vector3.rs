use crate::library::{cross_product, Vector};
use crate::parse::{parse_components, ParseVectorError};
use std::fmt;
use std::ops;
use std::str::FromStr;

/// An `(x, y, z)` triple. Components are stored as given, NaN and infinities included.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X_AXIS: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn z(&self) -> f64 {
        self.z
    }
}

impl Vector for Vector3 {
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    fn subtract(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    fn scale(self, k: f64) -> Vector3 {
        Vector3::new(self.x * k, self.y * k, self.z * k)
    }

    fn dot_product(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn magnitude(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    fn unit_vector(self) -> Vector3 {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector3::ZERO;
        }
        Vector3::new(self.x / mag, self.y / mag, self.z / mag)
    }

    // Degenerates to zero for inputs parallel to the x-axis.
    fn orthogonal_vector(self) -> Vector3 {
        cross_product(self, Vector3::X_AXIS)
    }

    fn vector_area(self, other: Vector3) -> f64 {
        cross_product(self, other).magnitude()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_components(s)?;
        Ok(Vector3::new(x, y, z))
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector::add(self, rhs)
    }
}

impl ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector::subtract(self, rhs)
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector::scale(self, -1.0)
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, k: f64) -> Vector3 {
        Vector::scale(self, k)
    }
}

impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector::scale(v, self)
    }
}
