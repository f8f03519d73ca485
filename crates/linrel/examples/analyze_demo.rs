//! Print the built-in demo line sets and their pairwise analysis.
//!
//! Usage:
//!   cargo run -p linrel --example analyze_demo

use linrel::prelude::*;

fn main() {
    let sets: &[(&str, [(f64, f64, f64); 2])] = &[
        ("intersecting", [(1.0, 1.0, -2.0), (1.0, -1.0, 0.0)]),
        ("parallel", [(1.0, 1.0, -2.0), (1.0, 1.0, -4.0)]),
        ("coincident", [(2.0, -3.0, 5.0), (4.0, -6.0, 10.0)]),
        ("vertical-horizontal", [(1.0, 0.0, -3.0), (0.0, 1.0, -2.0)]),
    ];
    for (name, coeffs) in sets {
        let lines: Vec<Line> = coeffs
            .iter()
            .map(|&(a, b, c)| Line::new(a, b, c).expect("demo coefficients are valid"))
            .collect();
        println!("== {name} ==");
        for pa in analyze_all(&lines) {
            println!(
                "  l{} ({})  vs  l{} ({})",
                pa.indices.0, pa.lines.0, pa.indices.1, pa.lines.1
            );
            match pa.relation {
                Relation::Coincident => println!("    coincident (same line)"),
                Relation::Parallel => println!("    parallel, distinct"),
                Relation::Intersecting { point, angle_deg } => println!(
                    "    intersect at ({:.3}, {:.3}), angle {:.2}°",
                    point.x, point.y, angle_deg
                ),
            }
        }
    }
}
