//! Rendering of batch analysis results: derivation-style text and JSON.
//!
//! The engine returns structured values; everything human-readable lives
//! here. The text report walks the derivation (coefficient ratios, Cramer
//! determinants, slopes) before stating each verdict, so a reader can check
//! the classification by hand.

use serde_json::{json, Value};

use linrel::lines::{perpendicular, Line, PairAnalysis, Relation, RelationKind, EPS};

/// Ratio `num/den` to four decimals, or `inf` for an eps-zero denominator.
fn ratio(num: f64, den: f64) -> String {
    if den.abs() < EPS {
        "inf".to_string()
    } else {
        format!("{:.4}", num / den)
    }
}

/// Slope to four decimals, or the word `vertical`.
fn slope_label(line: &Line) -> String {
    match line.slope() {
        Some(m) => format!("{m:.4}"),
        None => "vertical".to_string(),
    }
}

fn relation_tag(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::Coincident => "coincident",
        RelationKind::Parallel => "parallel",
        RelationKind::Intersecting => "intersecting",
    }
}

/// Plain-text report over all analyzed pairs, one derivation block per pair.
pub fn render_text(results: &[PairAnalysis]) -> String {
    if results.is_empty() {
        return "No line pairs to analyze (need at least 2 lines).\n".to_string();
    }
    let mut out = String::new();
    for pa in results {
        render_pair_text(&mut out, pa);
    }
    out
}

fn render_pair_text(out: &mut String, pa: &PairAnalysis) {
    use std::fmt::Write;

    let (i, j) = pa.indices;
    let (l1, l2) = &pa.lines;
    // A write! into a String cannot fail; ignore the fmt::Result.
    let _ = writeln!(out, "Analysis of lines l{i} and l{j}:");
    let _ = writeln!(out, "  l{i}: {l1}");
    let _ = writeln!(out, "  l{j}: {l2}");
    let _ = writeln!(
        out,
        "  ratios: a{i}/a{j} = {}, b{i}/b{j} = {}, c{i}/c{j} = {}",
        ratio(l1.a(), l2.a()),
        ratio(l1.b(), l2.b()),
        ratio(l1.c(), l2.c()),
    );
    match pa.relation {
        Relation::Coincident => {
            let _ = writeln!(out, "  -> coincident (the same line)");
        }
        Relation::Parallel => {
            let _ = writeln!(out, "  -> parallel, distinct (no common point)");
        }
        Relation::Intersecting { point, angle_deg } => {
            // Cramer derivation, spelled out for checking by hand.
            let det = l1.a() * l2.b() - l2.a() * l1.b();
            let det_x = (-l1.c()) * l2.b() - (-l2.c()) * l1.b();
            let det_y = l1.a() * (-l2.c()) - l2.a() * (-l1.c());
            let _ = writeln!(
                out,
                "  determinants: D = {det:.4}, Dx = {det_x:.4}, Dy = {det_y:.4}"
            );
            let _ = writeln!(
                out,
                "  point: x = Dx/D = {:.4}, y = Dy/D = {:.4}",
                point.x, point.y
            );
            let _ = writeln!(
                out,
                "  slopes: m{i} = {}, m{j} = {}",
                slope_label(l1),
                slope_label(l2)
            );
            let perp = if perpendicular(l1, l2) {
                " (perpendicular)"
            } else {
                ""
            };
            let _ = writeln!(out, "  -> intersect at ({:.4}, {:.4}), angle {angle_deg:.2}°{perp}", point.x, point.y);
        }
    }
    out.push('\n');
}

/// JSON document over all analyzed pairs; the non-intersecting arms carry
/// `null` for point and angle.
pub fn render_json(results: &[PairAnalysis]) -> Value {
    let entries: Vec<Value> = results
        .iter()
        .map(|pa| {
            let (l1, l2) = &pa.lines;
            json!({
                "pair": [pa.indices.0, pa.indices.1],
                "line1": line_json(l1),
                "line2": line_json(l2),
                "relation": relation_tag(pa.relation.kind()),
                "intersection": pa.relation.point().map(|p| vec![p.x, p.y]),
                "angle_deg": pa.relation.angle_deg(),
                "perpendicular": pa.relation.is_intersecting() && perpendicular(l1, l2),
            })
        })
        .collect();
    json!({
        "count": results.len(),
        "pairs": entries,
    })
}

fn line_json(line: &Line) -> Value {
    json!({
        "a": line.a(),
        "b": line.b(),
        "c": line.c(),
        "equation": line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use linrel::lines::analyze_all;

    fn lines(coeffs: &[(f64, f64, f64)]) -> Vec<Line> {
        coeffs
            .iter()
            .map(|&(a, b, c)| Line::new(a, b, c).expect("valid test line"))
            .collect()
    }

    #[test]
    fn text_report_walks_the_derivation() {
        let results = analyze_all(&lines(&[(1.0, 1.0, -2.0), (1.0, -1.0, 0.0)]));
        let text = render_text(&results);
        assert!(text.contains("Analysis of lines l1 and l2:"));
        assert!(text.contains("l1: x + y - 2 = 0"));
        assert!(text.contains("ratios: a1/a2 = 1.0000"));
        assert!(text.contains("c1/c2 = inf"));
        assert!(text.contains("determinants: D = -2.0000"));
        assert!(text.contains("intersect at (1.0000, 1.0000), angle 90.00°"));
        assert!(text.contains("(perpendicular)"));
    }

    #[test]
    fn text_report_parallel_and_coincident_verdicts() {
        let parallel = analyze_all(&lines(&[(1.0, 1.0, -2.0), (1.0, 1.0, -4.0)]));
        assert!(render_text(&parallel).contains("parallel, distinct"));

        let coincident = analyze_all(&lines(&[(2.0, -3.0, 5.0), (4.0, -6.0, 10.0)]));
        assert!(render_text(&coincident).contains("coincident (the same line)"));
    }

    #[test]
    fn text_report_empty_input() {
        assert!(render_text(&[]).contains("need at least 2 lines"));
    }

    #[test]
    fn json_document_shape() {
        let results = analyze_all(&lines(&[
            (1.0, 0.0, -3.0),
            (0.0, 1.0, -2.0),
            (1.0, 0.0, -5.0),
        ]));
        let doc = render_json(&results);
        assert_eq!(doc["count"], 3);
        let pairs = doc["pairs"].as_array().expect("pairs array");
        assert_eq!(pairs.len(), 3);

        // l1 x l2: vertical meets horizontal at (3, 2), perpendicular.
        assert_eq!(pairs[0]["pair"], json!([1, 2]));
        assert_eq!(pairs[0]["relation"], "intersecting");
        assert_eq!(pairs[0]["intersection"], json!([3.0, 2.0]));
        assert_eq!(pairs[0]["angle_deg"], json!(90.0));
        assert_eq!(pairs[0]["perpendicular"], json!(true));
        assert_eq!(pairs[0]["line1"]["equation"], "x - 3 = 0");

        // l1 x l3: two verticals, no payload.
        assert_eq!(pairs[1]["pair"], json!([1, 3]));
        assert_eq!(pairs[1]["relation"], "parallel");
        assert_eq!(pairs[1]["intersection"], Value::Null);
        assert_eq!(pairs[1]["angle_deg"], Value::Null);
        assert_eq!(pairs[1]["perpendicular"], json!(false));
    }
}
