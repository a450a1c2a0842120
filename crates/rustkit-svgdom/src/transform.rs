//! Elementary transforms (`SVGTransform`).
//!
//! A [`Transform`] pairs the arguments it was built from with the matrix they
//! produce. Both live behind a single setter call, so a transform is never
//! observed with a tag that disagrees with its cached matrix.

use std::fmt;

use crate::matrix::AffineMatrix;

/// The `type` of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Matrix,
    Translate,
    Scale,
    Rotate,
    SkewX,
    SkewY,
}

impl TransformKind {
    /// Function name used in the `transform` attribute.
    pub fn function_name(&self) -> &'static str {
        match self {
            TransformKind::Matrix => "matrix",
            TransformKind::Translate => "translate",
            TransformKind::Scale => "scale",
            TransformKind::Rotate => "rotate",
            TransformKind::SkewX => "skewX",
            TransformKind::SkewY => "skewY",
        }
    }
}

/// Arguments of an elementary transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Matrix(AffineMatrix),
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    /// Rotation in degrees about `(cx, cy)`.
    Rotate { angle: f64, cx: f64, cy: f64 },
    SkewX { angle: f64 },
    SkewY { angle: f64 },
}

impl TransformOp {
    pub fn kind(&self) -> TransformKind {
        match self {
            TransformOp::Matrix(_) => TransformKind::Matrix,
            TransformOp::Translate { .. } => TransformKind::Translate,
            TransformOp::Scale { .. } => TransformKind::Scale,
            TransformOp::Rotate { .. } => TransformKind::Rotate,
            TransformOp::SkewX { .. } => TransformKind::SkewX,
            TransformOp::SkewY { .. } => TransformKind::SkewY,
        }
    }

    /// Angle in degrees, 0 for kinds that carry none.
    pub fn angle(&self) -> f64 {
        match *self {
            TransformOp::Rotate { angle, .. }
            | TransformOp::SkewX { angle }
            | TransformOp::SkewY { angle } => angle,
            _ => 0.0,
        }
    }

    /// Equivalent matrix.
    pub fn to_matrix(&self) -> AffineMatrix {
        let identity = AffineMatrix::identity();
        match *self {
            TransformOp::Matrix(m) => m,
            TransformOp::Translate { tx, ty } => identity.translate(tx, ty),
            TransformOp::Scale { sx, sy } => identity.scale_non_uniform(sx, sy),
            TransformOp::Rotate { angle, cx, cy } => identity
                .translate(cx, cy)
                .rotate(angle)
                .translate(-cx, -cy),
            TransformOp::SkewX { angle } => identity.skew_x(angle),
            TransformOp::SkewY { angle } => identity.skew_y(angle),
        }
    }
}

/// An elementary transform with its cached matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    op: TransformOp,
    matrix: AffineMatrix,
}

impl Transform {
    pub fn new(op: TransformOp) -> Self {
        Self {
            op,
            matrix: op.to_matrix(),
        }
    }

    pub fn from_matrix(matrix: AffineMatrix) -> Self {
        Self::new(TransformOp::Matrix(matrix))
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(TransformOp::Translate { tx, ty })
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(TransformOp::Scale { sx, sy })
    }

    /// Rotation in degrees about `(cx, cy)`.
    pub fn rotate(angle: f64, cx: f64, cy: f64) -> Self {
        Self::new(TransformOp::Rotate { angle, cx, cy })
    }

    pub fn skew_x(angle: f64) -> Self {
        Self::new(TransformOp::SkewX { angle })
    }

    pub fn skew_y(angle: f64) -> Self {
        Self::new(TransformOp::SkewY { angle })
    }

    pub fn kind(&self) -> TransformKind {
        self.op.kind()
    }

    pub fn angle(&self) -> f64 {
        self.op.angle()
    }

    pub fn matrix(&self) -> AffineMatrix {
        self.matrix
    }

    /// Arguments this transform was last set from.
    pub fn op(&self) -> TransformOp {
        self.op
    }

    pub fn set_matrix(&mut self, matrix: AffineMatrix) {
        *self = Self::from_matrix(matrix);
    }

    pub fn set_translate(&mut self, tx: f64, ty: f64) {
        *self = Self::translate(tx, ty);
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        *self = Self::scale(sx, sy);
    }

    pub fn set_rotate(&mut self, angle: f64, cx: f64, cy: f64) {
        *self = Self::rotate(angle, cx, cy);
    }

    pub fn set_skew_x(&mut self, angle: f64) {
        *self = Self::skew_x(angle);
    }

    pub fn set_skew_y(&mut self, angle: f64) {
        *self = Self::skew_y(angle);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_matrix(AffineMatrix::identity())
    }
}

impl From<AffineMatrix> for Transform {
    fn from(matrix: AffineMatrix) -> Self {
        Self::from_matrix(matrix)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            TransformOp::Matrix(m) => write!(f, "{}", m),
            TransformOp::Translate { tx, ty } => write!(f, "translate({} {})", tx, ty),
            TransformOp::Scale { sx, sy } => write!(f, "scale({} {})", sx, sy),
            TransformOp::Rotate { angle, cx, cy } if cx == 0.0 && cy == 0.0 => {
                write!(f, "rotate({})", angle)
            }
            TransformOp::Rotate { angle, cx, cy } => {
                write!(f, "rotate({} {} {})", angle, cx, cy)
            }
            TransformOp::SkewX { angle } => write!(f, "skewX({})", angle),
            TransformOp::SkewY { angle } => write!(f, "skewY({})", angle),
        }
    }
}
