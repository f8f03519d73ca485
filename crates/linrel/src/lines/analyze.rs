//! Pair analysis: the relation value with payload, and the all-pairs sweep.

use nalgebra::Vector2;

use super::classify::{classify, RelationKind};
use super::solvers::{angle_between, intersection};
use super::types::Line;

/// Relationship of one line pair.
///
/// Only the intersecting arm carries data, so a parallel or coincident result
/// can never hold a stale point or angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Relation {
    Coincident,
    Parallel,
    Intersecting { point: Vector2<f64>, angle_deg: f64 },
}

impl Relation {
    /// Collapse to the bare classification tag.
    #[inline]
    pub fn kind(&self) -> RelationKind {
        match self {
            Relation::Coincident => RelationKind::Coincident,
            Relation::Parallel => RelationKind::Parallel,
            Relation::Intersecting { .. } => RelationKind::Intersecting,
        }
    }

    #[inline]
    pub fn is_intersecting(&self) -> bool {
        matches!(self, Relation::Intersecting { .. })
    }

    /// Intersection point, if any.
    #[inline]
    pub fn point(&self) -> Option<Vector2<f64>> {
        match self {
            Relation::Intersecting { point, .. } => Some(*point),
            _ => None,
        }
    }

    /// Acute angle in degrees, if any.
    #[inline]
    pub fn angle_deg(&self) -> Option<f64> {
        match self {
            Relation::Intersecting { angle_deg, .. } => Some(*angle_deg),
            _ => None,
        }
    }
}

/// One entry of the all-pairs sweep.
///
/// `indices` are 1-based positions in the input sequence, attached for
/// display only; the math never consumes them.
#[derive(Clone, Copy, Debug)]
pub struct PairAnalysis {
    pub indices: (usize, usize),
    pub lines: (Line, Line),
    pub relation: Relation,
}

/// Classify one pair and, on the intersecting arm, attach point and angle.
pub fn analyze_pair(l1: &Line, l2: &Line) -> Relation {
    match classify(l1, l2) {
        RelationKind::Coincident => Relation::Coincident,
        RelationKind::Parallel => Relation::Parallel,
        RelationKind::Intersecting => {
            let point = intersection(l1, l2);
            let angle_deg = angle_between(l1, l2);
            debug_assert!(
                point.is_some() && angle_deg.is_some(),
                "classifier and solvers disagree on an intersecting pair"
            );
            match (point, angle_deg) {
                (Some(point), Some(angle_deg)) => Relation::Intersecting { point, angle_deg },
                // Not reachable while classifier and solvers agree; report
                // no intersection details rather than inventing a payload.
                _ => Relation::Parallel,
            }
        }
    }
}

/// Analyze every unordered pair `(i, j)` with `i < j`, in ascending position
/// order of the input sequence.
///
/// `n` lines yield exactly `n·(n-1)/2` entries; zero or one line yields an
/// empty vec. Whether that is enough input to be useful is the caller's
/// concern, not an engine invariant.
pub fn analyze_all(lines: &[Line]) -> Vec<PairAnalysis> {
    let n = lines.len();
    let mut out = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            out.push(PairAnalysis {
                indices: (i + 1, j + 1),
                lines: (lines[i], lines[j]),
                relation: analyze_pair(&lines[i], &lines[j]),
            });
        }
    }
    out
}
