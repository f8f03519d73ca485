//! Closed-form solvers for an intersecting pair: common point and acute angle.

use nalgebra::{matrix, Vector2};

use super::classify::{classify, RelationKind};
use super::types::{Line, EPS};

/// Intersection point of two lines, or `None` when they do not intersect.
///
/// Solves the 2×2 system
/// ```text
/// a1·x + b1·y = -c1
/// a2·x + b2·y = -c2
/// ```
/// by Cramer's rule:
/// `x = (b1·c2 - b2·c1)/det`, `y = (a2·c1 - a1·c2)/det` with
/// `det = a1·b2 - a2·b1`. The determinant re-check after classification is
/// defensive; classification already guarantees `|det| >= EPS` on the
/// intersecting arm.
pub fn intersection(l1: &Line, l2: &Line) -> Option<Vector2<f64>> {
    if classify(l1, l2) != RelationKind::Intersecting {
        return None;
    }
    let m = matrix![l1.a(), l1.b(); l2.a(), l2.b()];
    let det = m.determinant();
    if det.abs() < EPS {
        return None;
    }
    let x = (l1.b() * l2.c() - l2.b() * l1.c()) / det;
    let y = (l2.a() * l1.c() - l1.a() * l2.c()) / det;
    Some(Vector2::new(x, y))
}

/// Acute angle between two intersecting lines, in degrees within [0, 90].
/// `None` when the pair does not intersect.
///
/// Vertical lines have no slope, so an angle against a vertical line is
/// measured down from the vertical axis: `90 - atan(|m|)`. Otherwise
/// `tanθ = |m2 - m1| / |1 + m1·m2|`, with the eps-zero denominator mapped to
/// exactly 90. The arctan of a non-negative ratio already lands in [0, 90),
/// so no further reduction is applied.
pub fn angle_between(l1: &Line, l2: &Line) -> Option<f64> {
    if classify(l1, l2) != RelationKind::Intersecting {
        return None;
    }
    match (l1.slope(), l2.slope()) {
        // Two verticals are parallel; unreachable past the classify check.
        (None, None) => None,
        (None, Some(m)) | (Some(m), None) => Some(90.0 - m.abs().atan().to_degrees()),
        (Some(m1), Some(m2)) => {
            let denom = 1.0 + m1 * m2;
            if denom.abs() < EPS {
                return Some(90.0);
            }
            Some(((m2 - m1).abs() / denom.abs()).atan().to_degrees())
        }
    }
}

/// Normal-orthogonality test: `|a1·a2 + b1·b2| < EPS`.
///
/// For an intersecting pair this agrees with `angle_between` returning 90;
/// it also covers the vertical/horizontal pairing where slopes cannot be
/// multiplied.
#[inline]
pub fn perpendicular(l1: &Line, l2: &Line) -> bool {
    l1.normal().dot(&l2.normal()).abs() < EPS
}
