//! Three-way classification of a line pair from coefficient proportionality.

use super::types::{Line, EPS};

/// How two lines relate: same line, same direction, or one common point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    /// All three coefficients proportional: the same point set.
    Coincident,
    /// Proportional normals but a different constant term: no common point.
    Parallel,
    /// Linearly independent normals: exactly one common point.
    Intersecting,
}

/// Proportionality of the two coefficient triples, as
/// `(directions_proportional, all_proportional)`.
///
/// Directions are proportional iff the normal cross product `a1·b2 - a2·b1`
/// is eps-zero. In that case the scale factor `k` is recovered from whichever
/// of `a2`, `b2` exceeds `EPS` (one of them must, since `l2` upholds the line
/// invariant) and `c1` is compared against `k·c2`.
pub(super) fn proportionality(l1: &Line, l2: &Line) -> (bool, bool) {
    let cross = crate::cross2(l1.normal(), l2.normal());
    if cross.abs() >= EPS {
        return (false, false);
    }
    let k = if l2.a().abs() > EPS {
        l1.a() / l2.a()
    } else {
        // l2 is a valid line, so b2 carries the nonzero coefficient here.
        l1.b() / l2.b()
    };
    let all = (l1.c() - k * l2.c()).abs() < EPS;
    (true, all)
}

/// Decide whether two lines coincide, run parallel, or intersect.
///
/// Reflexively `Coincident`, symmetric in its arguments, and invariant under
/// nonzero rescaling of either coefficient triple (for coefficients within
/// the absolute-tolerance regime `EPS` assumes).
pub fn classify(l1: &Line, l2: &Line) -> RelationKind {
    match proportionality(l1, l2) {
        (_, true) => RelationKind::Coincident,
        (true, false) => RelationKind::Parallel,
        (false, _) => RelationKind::Intersecting,
    }
}
