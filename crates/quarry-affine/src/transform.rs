//! The 3×3 homogeneous transform matrix.

use std::ops::Mul;

/// A 2D point.
pub type Point = [f64; 2];

/// Row-major 3×3 matrix acting on 2D points in homogeneous coordinates.
///
/// Composition reads left to right with [`then`](Transform::then):
/// `a.then(b)` applies `a` first. The `*` operator is the raw matrix
/// product, so `b * a` is the same composite.
///
/// # Example
///
/// ```
/// use quarry_affine::Transform;
///
/// let spin = Transform::rotation_degrees(90.0);
/// let [x, y] = spin.apply([1.0, 0.0]);
/// assert!((x - 0.0).abs() < 1e-12);
/// assert!((y - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub struct Transform {
    rows: [[f64; 3]; 3],
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Build a transform from row-major coefficients.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The row-major coefficients.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Translation by `(tx, ty)`.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::from_rows([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Scaling by `(sx, sy)` about the origin.
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation about the origin, in radians.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation about the origin, in degrees.
    pub fn rotation_degrees(degrees: f64) -> Self {
        Self::rotation(degrees.to_radians())
    }

    /// Shear with factors `kx` (x by y) and `ky` (y by x).
    pub fn shear(kx: f64, ky: f64) -> Self {
        Self::from_rows([[1.0, kx, 0.0], [ky, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Conjugate `local` so it acts about the pivot `(px, py)`.
    ///
    /// Equivalent to translating the pivot to the origin, applying
    /// `local`, and translating back.
    pub fn about_point(local: Transform, px: f64, py: f64) -> Self {
        Self::translation(px, py) * local * Self::translation(-px, -py)
    }

    /// The composite that applies `self` first, then `next`.
    pub fn then(self, next: Transform) -> Self {
        next * self
    }

    /// Apply to a single point, with perspective divide.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let [x, y] = point;
        let hx = self.rows[0][0] * x + self.rows[0][1] * y + self.rows[0][2];
        let hy = self.rows[1][0] * x + self.rows[1][1] * y + self.rows[1][2];
        let w = self.rows[2][0] * x + self.rows[2][1] * y + self.rows[2][2];
        [hx / w, hy / w]
    }

    /// Apply to a batch of points.
    #[must_use]
    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// Matrix product: `(a * b).apply(p) == a.apply(b.apply(p))` for
    /// affine operands.
    fn mul(self, rhs: Transform) -> Transform {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Transform::from_rows(rows)
    }
}
