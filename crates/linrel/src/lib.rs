//! Pairwise geometry of straight lines in general form.
//!
//! The engine classifies pairs of lines `a·x + b·y + c = 0` as coincident,
//! parallel, or intersecting, and computes the intersection point and acute
//! angle on the intersecting arm. It is a pure, synchronous function library:
//! no I/O, no shared state, no process-wide configuration. Presentation
//! (reports, plots, UIs) belongs to callers consuming the returned values.

pub mod lines;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports to keep caller code close to the math notation.
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::lines::rand::{draw_line, draw_lines, CoeffCfg, ReplayToken};
    pub use crate::lines::{
        analyze_all, analyze_pair, angle_between, classify, intersection, perpendicular,
        InvalidLine, Line, PairAnalysis, Relation, RelationKind, EPS,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}

/// Cross product of 2D vectors `a` and `b` (signed parallelogram area).
/// Two line normals are proportional exactly when their cross product
/// vanishes, which is what the relationship classifier tests.
#[inline]
pub fn cross2(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
