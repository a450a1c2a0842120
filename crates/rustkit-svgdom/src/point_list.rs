//! `points` attribute lists for `<polyline>` and `<polygon>`.

use crate::error::Result;
use crate::list::{ListItem, SvgList};
use crate::matrix::AffineMatrix;
use crate::parser::Scanner;
use crate::point::Point2D;

/// List of points.
pub type PointList = SvgList<Point2D>;

impl SvgList<Point2D> {
    /// New list with every point mapped through `matrix`.
    pub fn transform(&self, matrix: &AffineMatrix) -> PointList {
        self.iter().map(|p| p.matrix_transform(matrix)).collect()
    }
}

impl ListItem for Point2D {
    const LIST_NAME: &'static str = "points";

    fn parse_list(text: &str) -> Result<Vec<Self>> {
        let mut s = Scanner::new(text);
        let mut points = Vec::new();
        // x coordinate waiting for its y, with its offset for error reporting.
        let mut pending: Option<(f64, usize)> = None;

        s.skip_whitespace();
        while !s.is_at_end() {
            let start = s.pos();
            let value = s.number()?;
            pending = match pending.take() {
                Some((x, _)) => {
                    points.push(Point2D::new(x, value));
                    None
                }
                None => Some((value, start)),
            };
            if s.skip_comma_whitespace() && s.is_at_end() {
                return Err(s.error_at(s.pos() - 1, "trailing comma"));
            }
        }

        if let Some((_, start)) = pending {
            return Err(s.error_at(start, "odd number of coordinates"));
        }

        Ok(points)
    }
}
