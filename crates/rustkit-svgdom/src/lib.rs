//! # RustKit SVG DOM
//!
//! Matrix, transform and list types behind the SVG DOM for the RustKit browser
//! engine.
//!
//! ## Features
//!
//! - **AffineMatrix**: composition, inversion, elementary transforms (`SVGMatrix`)
//! - **Transform**: tagged translate/scale/rotate/skew/matrix (`SVGTransform`)
//! - **Lists**: one list type with DOM edit semantics, used for both
//!   `transform` and `points` attributes (`SVGTransformList`, `SVGPointList`)
//! - **Parsing**: attribute text to lists, atomically
//! - **preserveAspectRatio**: the alignment value consumed by viewport fitting
//!
//! ## Architecture
//!
//! ```text
//! attribute text
//!    └── SvgList::replace_from_str
//!           ├── TransformList ── consolidate() ── AffineMatrix ──> renderer
//!           └── PointList ────── iter() ──────── Point2D ──────> renderer
//! ```
//!
//! Matrix products read left to right like the attribute does:
//! `translate(5) scale(2,3)` consolidates to `T × S`, so the scale is applied
//! to a point before the translation.

pub mod aspect_ratio;
pub mod error;
pub mod list;
pub mod logging;
pub mod matrix;
mod parser;
pub mod point;
pub mod point_list;
pub mod transform;
pub mod transform_list;

pub use aspect_ratio::{Align, AspectRatioSpec, MeetOrSlice};
pub use error::{Result, SvgError};
pub use list::{ListItem, SvgList};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use matrix::{AffineMatrix, SINGULAR_TOLERANCE};
pub use point::Point2D;
pub use point_list::PointList;
pub use transform::{Transform, TransformKind, TransformOp};
pub use transform_list::TransformList;
