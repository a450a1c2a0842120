//! 2D affine matrices (`SVGMatrix`).

use std::fmt;

use tracing::debug;

use crate::error::{Result, SvgError};
use crate::point::Point2D;

/// Determinants whose magnitude falls below this are treated as singular.
pub const SINGULAR_TOLERANCE: f64 = 1e-12;

/// 2D affine transform matrix.
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// Every operation returns a new matrix. `multiply` computes `self × other`,
/// so in a product the right-hand matrix is applied to a point first. The
/// elementary factories (`translate`, `rotate`, ...) all post-multiply, which
/// matches the left-to-right reading of an SVG `transform` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineMatrix {
    /// The identity matrix.
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        a: 1.0, b: 0.0,
        c: 0.0, d: 1.0,
        e: 0.0, f: 0.0,
    };

    /// Create a matrix from its six components.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Create identity matrix.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// True only for the exact components `(1, 0, 0, 1, 0, 0)`.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Components in `[a, b, c, d, e, f]` order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() >= SINGULAR_TOLERANCE
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &AffineMatrix, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(l, r)| (l - r).abs() <= epsilon)
    }

    /// Multiply two matrices, returning `self × other`.
    pub fn multiply(&self, other: &AffineMatrix) -> Self {
        AffineMatrix {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Get inverse matrix.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < SINGULAR_TOLERANCE {
            debug!(determinant = det, "refusing to invert singular matrix");
            return Err(SvgError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;
        Ok(AffineMatrix {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            e: (self.c * self.f - self.d * self.e) * inv_det,
            f: (self.b * self.e - self.a * self.f) * inv_det,
        })
    }

    /// Post-multiply by a translation.
    pub fn translate(&self, tx: f64, ty: f64) -> Self {
        self.multiply(&AffineMatrix {
            a: 1.0, b: 0.0,
            c: 0.0, d: 1.0,
            e: tx, f: ty,
        })
    }

    /// Post-multiply by a uniform scale.
    pub fn scale(&self, s: f64) -> Self {
        self.scale_non_uniform(s, s)
    }

    pub fn scale_non_uniform(&self, sx: f64, sy: f64) -> Self {
        self.multiply(&AffineMatrix {
            a: sx, b: 0.0,
            c: 0.0, d: sy,
            e: 0.0, f: 0.0,
        })
    }

    /// Post-multiply by a rotation about the origin (degrees).
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.multiply(&AffineMatrix {
            a: cos, b: sin,
            c: -sin, d: cos,
            e: 0.0, f: 0.0,
        })
    }

    /// Rotate by the angle of the vector `(x, y)`.
    pub fn rotate_from_vector(&self, x: f64, y: f64) -> Result<Self> {
        if x == 0.0 && y == 0.0 {
            return Err(SvgError::DegenerateVector);
        }
        Ok(self.rotate(y.atan2(x).to_degrees()))
    }

    /// Mirror across the y axis.
    pub fn flip_x(&self) -> Self {
        self.scale_non_uniform(-1.0, 1.0)
    }

    /// Mirror across the x axis.
    pub fn flip_y(&self) -> Self {
        self.scale_non_uniform(1.0, -1.0)
    }

    /// Post-multiply by a horizontal skew (degrees).
    pub fn skew_x(&self, angle: f64) -> Self {
        self.multiply(&AffineMatrix {
            a: 1.0, b: 0.0,
            c: angle.to_radians().tan(), d: 1.0,
            e: 0.0, f: 0.0,
        })
    }

    /// Post-multiply by a vertical skew (degrees).
    pub fn skew_y(&self, angle: f64) -> Self {
        self.multiply(&AffineMatrix {
            a: 1.0, b: angle.to_radians().tan(),
            c: 0.0, d: 1.0,
            e: 0.0, f: 0.0,
        })
    }

    /// Transform a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn transform_point(&self, point: Point2D) -> Point2D {
        let (x, y) = self.apply(point.x, point.y);
        Point2D::new(x, y)
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for AffineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample() -> AffineMatrix {
        AffineMatrix::new(2.0, 0.5, -1.5, 3.0, 7.0, -4.0)
    }

    #[test]
    fn test_matrix_identity() {
        let m = AffineMatrix::identity();
        assert!(m.is_identity());
        assert_eq!(m.apply(10.0, 20.0), (10.0, 20.0));
        assert_eq!(AffineMatrix::default(), m);
    }

    #[test]
    fn test_identity_is_exact() {
        let almost = AffineMatrix::new(1.0, 0.0, 0.0, 1.0, 1e-300, 0.0);
        assert!(!almost.is_identity());

        // A full turn lands numerically close to identity but is not tagged as such.
        let turned = AffineMatrix::identity().rotate(360.0);
        assert!(turned.approx_eq(&AffineMatrix::IDENTITY, EPS));
        assert!(!turned.is_identity());
    }

    #[test]
    fn test_multiply_by_identity() {
        let m = sample();
        assert_eq!(AffineMatrix::identity().multiply(&m), m);
        assert_eq!(m.multiply(&AffineMatrix::identity()), m);
    }

    #[test]
    fn test_multiply_order() {
        let t = AffineMatrix::identity().translate(5.0, 0.0);
        let s = AffineMatrix::identity().scale_non_uniform(2.0, 3.0);
        let product = t.multiply(&s);
        assert_eq!(product, AffineMatrix::new(2.0, 0.0, 0.0, 3.0, 5.0, 0.0));

        // The right-hand matrix is applied first.
        let (x, y) = product.apply(1.0, 1.0);
        let (sx, sy) = s.apply(1.0, 1.0);
        assert_eq!((x, y), t.apply(sx, sy));
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).approx_eq(&AffineMatrix::IDENTITY, EPS));
        assert!(inv.multiply(&m).approx_eq(&AffineMatrix::IDENTITY, EPS));

        let t = AffineMatrix::identity().translate(10.0, 20.0);
        assert_eq!(
            t.inverse().unwrap(),
            AffineMatrix::identity().translate(-10.0, -20.0)
        );
    }

    #[test]
    fn test_inverse_singular() {
        let m = AffineMatrix::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        assert!(!m.is_invertible());
        assert!(matches!(
            m.inverse(),
            Err(SvgError::SingularMatrix { .. })
        ));

        let tiny = AffineMatrix::identity().scale(1e-7);
        assert!(tiny.inverse().is_err());
    }

    #[test]
    fn test_neutral_factories() {
        let m = sample();
        assert_eq!(m.translate(0.0, 0.0), m);
        assert_eq!(m.scale(1.0), m);
        assert_eq!(m.rotate(0.0), m);
    }

    #[test]
    fn test_matrix_translate() {
        let m = AffineMatrix::identity().translate(5.0, 10.0);
        assert_eq!(m.apply(10.0, 20.0), (15.0, 30.0));
    }

    #[test]
    fn test_matrix_scale() {
        let m = AffineMatrix::identity().scale_non_uniform(2.0, 3.0);
        assert_eq!(m.apply(10.0, 20.0), (20.0, 60.0));
        assert_eq!(
            AffineMatrix::identity().scale(4.0),
            AffineMatrix::identity().scale_non_uniform(4.0, 4.0)
        );
    }

    #[test]
    fn test_matrix_rotate() {
        let m = AffineMatrix::identity().rotate(90.0);
        let (x, y) = m.apply(1.0, 0.0);
        assert!(x.abs() < EPS);
        assert!((y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_from_vector() {
        assert_eq!(
            AffineMatrix::identity().rotate_from_vector(0.0, 0.0),
            Err(SvgError::DegenerateVector)
        );

        let m = AffineMatrix::identity().rotate_from_vector(1.0, 0.0).unwrap();
        assert_eq!(m, AffineMatrix::identity().rotate(0.0));

        let m = AffineMatrix::identity().rotate_from_vector(0.0, 1.0).unwrap();
        assert!(m.approx_eq(&AffineMatrix::identity().rotate(90.0), EPS));

        // Only the direction matters.
        let m = AffineMatrix::identity().rotate_from_vector(3.0, 3.0).unwrap();
        assert!(m.approx_eq(&AffineMatrix::identity().rotate(45.0), EPS));
    }

    #[test]
    fn test_flip() {
        let m = sample();
        assert_eq!(m.flip_x(), m.scale_non_uniform(-1.0, 1.0));
        assert_eq!(m.flip_y(), m.scale_non_uniform(1.0, -1.0));
        assert_eq!(AffineMatrix::identity().flip_x().apply(3.0, 4.0), (-3.0, 4.0));
    }

    #[test]
    fn test_skew() {
        let m = AffineMatrix::identity().skew_x(45.0);
        let (x, y) = m.apply(0.0, 2.0);
        assert!((x - 2.0).abs() < EPS);
        assert_eq!(y, 2.0);

        let m = AffineMatrix::identity().skew_y(45.0);
        let (x, y) = m.apply(2.0, 0.0);
        assert_eq!(x, 2.0);
        assert!((y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_factories_do_not_mutate() {
        let m = sample();
        let _ = m.translate(3.0, 4.0).rotate(30.0).skew_x(10.0);
        assert_eq!(m, sample());
    }

    #[test]
    fn test_matrix_display() {
        let m = AffineMatrix::new(1.0, 0.0, 0.0, 1.0, 2.5, -3.0);
        assert_eq!(m.to_string(), "matrix(1 0 0 1 2.5 -3)");
    }
}
