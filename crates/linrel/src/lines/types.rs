//! Line values in general form, plus the shared absolute tolerance.

use std::fmt;

use nalgebra::Vector2;
use thiserror::Error;

/// Absolute tolerance for every near-zero test (normal cross products,
/// coefficient differences, denominators).
///
/// There is deliberately no relative tolerance: predicates stay cheap and
/// consistent across the classifier and the solvers, at the cost that
/// coefficient triples of wildly different magnitudes can classify
/// surprisingly. Inputs are expected in the small human-entered range.
pub const EPS: f64 = 1e-10;

/// Construction rejected: `a` and `b` are both eps-zero, so
/// `a·x + b·y + c = 0` describes no line (either the empty set or the whole
/// plane, depending on `c`).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid line: a and b cannot both be zero (a={a}, b={b})")]
pub struct InvalidLine {
    pub a: f64,
    pub b: f64,
}

/// A straight line `a·x + b·y + c = 0`, validated at construction.
///
/// Invariants:
/// - The normal `(a, b)` is not the zero vector (up to `EPS`).
/// - Fields stay private and the value is never mutated, so the invariant
///   holds for the life of the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Build a line, rejecting the degenerate `a ≈ b ≈ 0` triple.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, InvalidLine> {
        if a.abs() < EPS && b.abs() < EPS {
            return Err(InvalidLine { a, b });
        }
        Ok(Self { a, b, c })
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Normal vector `(a, b)`; never zero for a constructed line.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    /// `|b| < EPS`: the line is `x = -c/a`.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.b.abs() < EPS
    }

    /// `|a| < EPS`: the line is `y = -c/b`.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.a.abs() < EPS
    }

    /// Slope `-a/b`, or `None` for a vertical line.
    ///
    /// A `b` below `EPS` counts as vertical and never reaches the division;
    /// the absent case is an explicit `None`, not a float sentinel.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(-self.a / self.b)
        }
    }

    /// `y` at a given `x`, or `None` for a vertical line.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(-(self.a * x + self.c) / self.b)
        }
    }

    /// `x` at a given `y`, or `None` for a horizontal line.
    #[inline]
    pub fn x_at(&self, y: f64) -> Option<f64> {
        if self.is_horizontal() {
            None
        } else {
            Some(-(self.b * y + self.c) / self.a)
        }
    }

    /// Signed residual of a point in the line equation, `a·x + b·y + c`.
    /// Zero (up to numeric noise) exactly on the line.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

impl fmt::Display for Line {
    /// Human equation form, e.g. `x + 2y - 3 = 0`, with eps-zero terms,
    /// unit coefficients, and the leading `+` suppressed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        write_term(f, &mut wrote, self.a, Some("x"))?;
        write_term(f, &mut wrote, self.b, Some("y"))?;
        write_term(f, &mut wrote, self.c, None)?;
        if !wrote {
            // A valid line always has an x or y term; keep Display total anyway.
            f.write_str("0")?;
        }
        f.write_str(" = 0")
    }
}

fn write_term(
    f: &mut fmt::Formatter<'_>,
    wrote: &mut bool,
    coef: f64,
    var: Option<&str>,
) -> fmt::Result {
    if coef.abs() < EPS {
        return Ok(());
    }
    if *wrote {
        f.write_str(if coef < 0.0 { " - " } else { " + " })?;
    } else if coef < 0.0 {
        f.write_str("-")?;
    }
    let mag = coef.abs();
    match var {
        // Unit coefficients print as the bare variable.
        Some(v) if (mag - 1.0).abs() < EPS => f.write_str(v)?,
        Some(v) => write!(f, "{mag}{v}")?,
        None => write!(f, "{mag}")?,
    }
    *wrote = true;
    Ok(())
}
