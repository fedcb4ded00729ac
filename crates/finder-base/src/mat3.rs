use std::ops::{Add, Mul, Neg, Sub};

use crate::{Vec2, Vec3};

/// Column-major 3x3 matrix. Used as a homogeneous 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3<T> {
    pub cols: [Vec3<T>; 3],
}

impl<T> Mat3<T> {
    pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self { cols: [c0, c1, c2] }
    }
}

impl Mat3<f32> {
    pub fn identity() -> Self {
        Self::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    pub fn translation(offset: Vec2<f32>) -> Self {
        Self::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(offset.x, offset.y, 1.0),
        )
    }

    /// Rotation by `degrees` about the origin.
    ///
    /// Right angles use exact sine and cosine so that quarter turns stay
    /// free of rounding noise.
    pub fn rotation(degrees: f32) -> Self {
        let turn = degrees.rem_euclid(360.0);
        let (sin, cos) = if turn == 0.0 {
            (0.0, 1.0)
        } else if turn == 90.0 {
            (1.0, 0.0)
        } else if turn == 180.0 {
            (0.0, -1.0)
        } else if turn == 270.0 {
            (-1.0, 0.0)
        } else {
            degrees.to_radians().sin_cos()
        };
        Self::from_cols(
            Vec3::new(cos, sin, 0.0),
            Vec3::new(-sin, cos, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    /// Rotation by `degrees` about `center`.
    pub fn rotation_about(degrees: f32, center: Vec2<f32>) -> Self {
        Self::translation(center) * Self::rotation(degrees) * Self::translation(-center)
    }

    pub fn transform_point(self, point: Vec2<f32>) -> Vec2<f32> {
        (self * Vec3::point(point)).xy()
    }

    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-7 {
            return None;
        }
        Some(self.cofactor_matrix().transpose() * (1.0 / det))
    }

    /// Element-wise comparison with tolerance `eps`.
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        self.cols.iter().zip(other.cols.iter()).all(|(a, b)| {
            (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
        })
    }
}

impl<T: Copy> Mat3<T> {
    pub fn transpose(self) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(
            Vec3::new(c0.x, c1.x, c2.x),
            Vec3::new(c0.y, c1.y, c2.y),
            Vec3::new(c0.z, c1.z, c2.z),
        )
    }
}

impl<T: Mul<Output = T> + Sub<Output = T> + Add<Output = T> + Copy> Mat3<T> {
    pub fn determinant(self) -> T {
        let [c0, c1, c2] = self.cols;
        c0.x * (c1.y * c2.z - c1.z * c2.y) - c1.x * (c0.y * c2.z - c0.z * c2.y)
            + c2.x * (c0.y * c1.z - c0.z * c1.y)
    }
}

impl<T: Mul<Output = T> + Sub<Output = T> + Neg<Output = T> + Copy> Mat3<T> {
    fn cofactor_matrix(self) -> Self {
        let [c0, c1, c2] = self.cols;
        // Cofactor (i,j) = (-1)^(i+j) * minor(i,j)
        Self::from_cols(
            Vec3::new(
                c1.y * c2.z - c1.z * c2.y,
                -(c1.x * c2.z - c1.z * c2.x),
                c1.x * c2.y - c1.y * c2.x,
            ),
            Vec3::new(
                -(c0.y * c2.z - c0.z * c2.y),
                c0.x * c2.z - c0.z * c2.x,
                -(c0.x * c2.y - c0.y * c2.x),
            ),
            Vec3::new(
                c0.y * c1.z - c0.z * c1.y,
                -(c0.x * c1.z - c0.z * c1.x),
                c0.x * c1.y - c0.y * c1.x,
            ),
        )
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self {
            cols: [self.cols[0] * rhs, self.cols[1] * rhs, self.cols[2] * rhs],
        }
    }
}

// Mat3 * Vec3
impl<T: Mul<Output = T> + Add<Output = T> + Copy> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;
    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

// Mat3 * Mat3
impl<T: Mul<Output = T> + Add<Output = T> + Copy> Mul<Mat3<T>> for Mat3<T> {
    type Output = Self;
    fn mul(self, rhs: Mat3<T>) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}
