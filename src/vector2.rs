use crate::library::Vector;
use crate::parse::{parse_components, ParseVectorError};
use std::fmt;
use std::ops;
use std::str::FromStr;

/// An `(x, y)` pair. Components are stored as given, NaN and infinities included.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }
}

impl Vector for Vector2 {
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    fn scale(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    fn dot_product(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    fn unit_vector(self) -> Vector2 {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x / mag, self.y / mag)
    }

    fn orthogonal_vector(self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    fn vector_area(self, other: Vector2) -> f64 {
        self.dot_product(other.orthogonal_vector()).abs()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Vector2 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components(s)?;
        Ok(Vector2::new(x, y))
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl ops::Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector::add(self, rhs)
    }
}

impl ops::Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector::subtract(self, rhs)
    }
}

impl ops::Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector::scale(self, -1.0)
    }
}

impl ops::Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        Vector::scale(self, k)
    }
}

impl ops::Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        Vector::scale(v, self)
    }
}
