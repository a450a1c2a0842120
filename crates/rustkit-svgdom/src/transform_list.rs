//! `transform` attribute lists.

use tracing::trace;

use crate::error::Result;
use crate::list::{ListItem, SvgList};
use crate::matrix::AffineMatrix;
use crate::parser::Scanner;
use crate::transform::{Transform, TransformKind, TransformOp};

/// List of transforms, applied in document order.
pub type TransformList = SvgList<Transform>;

impl SvgList<Transform> {
    /// Wrap `matrix` in a matrix-type transform. The list is not touched.
    pub fn create_svg_transform_from_matrix(matrix: AffineMatrix) -> Transform {
        Transform::from_matrix(matrix)
    }

    /// Product of every item's matrix, left to right. Identity when empty.
    pub fn total_matrix(&self) -> AffineMatrix {
        self.iter()
            .fold(AffineMatrix::identity(), |acc, t| acc.multiply(&t.matrix()))
    }

    /// Collapse the list into a single matrix transform and return it.
    ///
    /// Returns `None` and leaves the list alone when it is empty.
    pub fn consolidate(&mut self) -> Option<Transform> {
        if self.is_empty() {
            return None;
        }
        trace!(items = self.len(), "consolidating transform list");
        let consolidated = Transform::from_matrix(self.total_matrix());
        self.initialize(consolidated);
        Some(consolidated)
    }
}

impl ListItem for Transform {
    const LIST_NAME: &'static str = "transform";

    fn parse_list(text: &str) -> Result<Vec<Self>> {
        let mut s = Scanner::new(text);
        let mut transforms = Vec::new();

        s.skip_whitespace();
        while !s.is_at_end() {
            transforms.push(parse_transform(&mut s)?);
            if s.skip_comma_whitespace() && s.is_at_end() {
                return Err(s.error_at(s.pos() - 1, "trailing comma"));
            }
        }

        Ok(transforms)
    }
}

/// Parse one `name(args)` call.
fn parse_transform(s: &mut Scanner<'_>) -> Result<Transform> {
    let start = s.pos();
    let name = s.identifier();
    let kind = match name {
        "matrix" => TransformKind::Matrix,
        "translate" => TransformKind::Translate,
        "scale" => TransformKind::Scale,
        "rotate" => TransformKind::Rotate,
        "skewX" => TransformKind::SkewX,
        "skewY" => TransformKind::SkewY,
        "" => return Err(s.error("expected transform function")),
        _ => return Err(s.error_at(start, "unknown transform function")),
    };

    s.skip_whitespace();
    s.expect(b'(', "expected '(' after transform function")?;

    let mut args = Vec::with_capacity(6);
    let mut pending_comma = false;
    loop {
        s.skip_whitespace();
        if !pending_comma && s.peek() == Some(b')') {
            s.expect(b')', "expected ')'")?;
            break;
        }
        if s.is_at_end() {
            return Err(s.error("unterminated argument list"));
        }
        args.push(s.number()?);
        pending_comma = s.skip_comma_whitespace();
    }

    let op = match (kind, args.as_slice()) {
        (TransformKind::Matrix, &[a, b, c, d, e, f]) => {
            TransformOp::Matrix(AffineMatrix::new(a, b, c, d, e, f))
        }
        (TransformKind::Translate, &[tx]) => TransformOp::Translate { tx, ty: 0.0 },
        (TransformKind::Translate, &[tx, ty]) => TransformOp::Translate { tx, ty },
        (TransformKind::Scale, &[sx]) => TransformOp::Scale { sx, sy: sx },
        (TransformKind::Scale, &[sx, sy]) => TransformOp::Scale { sx, sy },
        (TransformKind::Rotate, &[angle]) => TransformOp::Rotate {
            angle,
            cx: 0.0,
            cy: 0.0,
        },
        (TransformKind::Rotate, &[angle, cx, cy]) => TransformOp::Rotate { angle, cx, cy },
        (TransformKind::SkewX, &[angle]) => TransformOp::SkewX { angle },
        (TransformKind::SkewY, &[angle]) => TransformOp::SkewY { angle },
        _ => {
            let reason = format!(
                "wrong number of arguments for {}: {}",
                kind.function_name(),
                args.len()
            );
            return Err(s.error_at(start, &reason));
        }
    };

    Ok(Transform::new(op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SvgError;

    #[test]
    fn test_consolidate_empty() {
        let mut list = TransformList::new();
        assert_eq!(list.consolidate(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_consolidate_order() {
        let mut list = TransformList::new();
        list.append_item(Transform::translate(10.0, 0.0));
        list.append_item(Transform::scale(2.0, 2.0));

        let expected = Transform::translate(10.0, 0.0)
            .matrix()
            .multiply(&Transform::scale(2.0, 2.0).matrix());

        let consolidated = list.consolidate().unwrap();
        assert_eq!(consolidated.kind(), TransformKind::Matrix);
        assert_eq!(consolidated.matrix(), expected);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_item(0), Ok(&consolidated));
    }

    #[test]
    fn test_consolidate_single_item() {
        let mut list = TransformList::new();
        list.append_item(Transform::rotate(30.0, 5.0, 5.0));
        let expected = Transform::rotate(30.0, 5.0, 5.0).matrix();
        assert_eq!(list.consolidate().map(|t| t.matrix()), Some(expected));
    }

    #[test]
    fn test_total_matrix_does_not_mutate() {
        let list: TransformList = "translate(1 2) scale(3)".parse().unwrap();
        let before = list.clone();
        assert_eq!(
            list.total_matrix(),
            AffineMatrix::new(3.0, 0.0, 0.0, 3.0, 1.0, 2.0)
        );
        assert_eq!(list, before);
        assert!(TransformList::new().total_matrix().is_identity());
    }

    #[test]
    fn test_create_from_matrix() {
        let list = TransformList::new();
        let m = AffineMatrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let t = TransformList::create_svg_transform_from_matrix(m);
        assert_eq!(t.kind(), TransformKind::Matrix);
        assert_eq!(t.matrix(), m);
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_transform_list() {
        let list: TransformList = "translate(5) scale(2,3)".parse().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get_item(0).unwrap().kind(), TransformKind::Translate);
        assert_eq!(list.get_item(1).unwrap().kind(), TransformKind::Scale);
        assert_eq!(
            list.total_matrix(),
            AffineMatrix::new(2.0, 0.0, 0.0, 3.0, 5.0, 0.0)
        );
    }

    #[test]
    fn test_parse_defaults() {
        let list: TransformList = "translate(7) scale(4) rotate(90)".parse().unwrap();
        assert_eq!(list.get_item(0).unwrap().op(), TransformOp::Translate { tx: 7.0, ty: 0.0 });
        assert_eq!(list.get_item(1).unwrap().op(), TransformOp::Scale { sx: 4.0, sy: 4.0 });
        assert_eq!(
            list.get_item(2).unwrap().op(),
            TransformOp::Rotate { angle: 90.0, cx: 0.0, cy: 0.0 }
        );
    }

    #[test]
    fn test_parse_all_functions() {
        let text = "matrix(1 0 0 1 10 20), rotate(45 5 5)\n skewX(10)\tskewY( -10 )";
        let list: TransformList = text.parse().unwrap();
        let kinds: Vec<_> = list.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TransformKind::Matrix,
                TransformKind::Rotate,
                TransformKind::SkewX,
                TransformKind::SkewY,
            ]
        );
        assert_eq!(list.get_item(1).unwrap().angle(), 45.0);
        assert_eq!(list.get_item(3).unwrap().angle(), -10.0);
    }

    #[test]
    fn test_parse_whitespace_variants() {
        let list: TransformList = "  translate (1,2)scale(3)  ".parse().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!("".parse::<TransformList>().unwrap(), TransformList::new());
        assert!(" \n\t".parse::<TransformList>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_unknown_function() {
        let err = "scale(2) shear(1)".parse::<TransformList>().unwrap_err();
        match err {
            SvgError::Format { position, token, .. } => {
                assert_eq!(position, 9);
                assert_eq!(token, "shear");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_argument_counts() {
        for text in [
            "translate()",
            "translate(1 2 3)",
            "scale(1 2 3)",
            "rotate(1 2)",
            "rotate(1 2 3 4)",
            "skewX(1 2)",
            "skewY()",
            "matrix(1 2 3 4 5)",
        ] {
            assert!(
                matches!(text.parse::<TransformList>(), Err(SvgError::Format { .. })),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_malformed_syntax() {
        for text in [
            "translate(1",
            "translate 1 2",
            "translate(1,)",
            "translate(1,,2)",
            "scale(2),",
            "scale(a)",
            "(1)",
            "Scale(2)",
        ] {
            assert!(text.parse::<TransformList>().is_err(), "{} should be rejected", text);
        }
    }

    #[test]
    fn test_failed_parse_keeps_contents() {
        let mut list: TransformList = "rotate(15)".parse().unwrap();
        let before = list.clone();
        assert!(list.replace_from_str("translate(1) bogus(2)").is_err());
        assert_eq!(list, before);

        list.replace_from_str("scale(2)").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_item(0).unwrap().kind(), TransformKind::Scale);
    }

    #[test]
    fn test_display_round_trip() {
        let list: TransformList =
            "matrix(1,2,3,4,5,6) translate(5) scale(2,3) rotate(30,1,2) rotate(-45) skewX(12.5) skewY(3)"
                .parse()
                .unwrap();
        let text = list.to_string();
        assert_eq!(
            text,
            "matrix(1 2 3 4 5 6) translate(5 0) scale(2 3) rotate(30 1 2) rotate(-45) skewX(12.5) skewY(3)"
        );
        assert_eq!(text.parse::<TransformList>().unwrap(), list);
    }
}
