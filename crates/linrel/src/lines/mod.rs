//! Lines `a·x + b·y + c = 0` and their pairwise relationships.
//!
//! Purpose
//! - Represent a validated line in general form (`Line`) and decide, for each
//!   pair, whether the lines coincide, run parallel, or intersect, with the
//!   intersection point and acute angle attached on the intersecting arm.
//! - Keep the API small and numerically explicit: one absolute tolerance
//!   (`EPS`), closed-form 2×2 solves, `Option` on every degenerate path.
//!
//! Why one absolute tolerance
//! - Inputs are small human-entered coefficients, and a single fixed `EPS`
//!   keeps every predicate total and the classifier consistent with the
//!   solvers. There is no relative tolerance: callers mixing coefficient
//!   magnitudes across many orders may see surprising classifications (see
//!   the note on `EPS`).
//!
//! Code cross-refs: `types::{Line, InvalidLine}`, `classify::classify`,
//! `solvers::{intersection, angle_between}`, `analyze::{analyze_all, Relation}`

pub mod rand;

mod analyze;
mod classify;
mod solvers;
mod types;

pub use analyze::{analyze_all, analyze_pair, PairAnalysis, Relation};
pub use classify::{classify, RelationKind};
pub use solvers::{angle_between, intersection, perpendicular};
pub use types::{InvalidLine, Line, EPS};
