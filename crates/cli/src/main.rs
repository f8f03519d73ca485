use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use linrel::lines::rand::{draw_lines, CoeffCfg, ReplayToken};
use linrel::lines::{analyze_all, Line};

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Pairwise line relationship analyzer (Ax + By + C = 0)")]
struct Cmd {
    /// Emit a JSON document instead of the text report
    #[arg(long)]
    json: bool,

    /// Also write the rendered output to a file
    #[arg(long)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze lines given as comma-separated A,B,C triples
    Analyze {
        /// One line as `A,B,C`; repeat the flag for each line
        #[arg(long = "line", required = true)]
        lines: Vec<String>,
    },
    /// Analyze the built-in example sets
    Demo,
    /// Analyze randomly drawn lines (reproducible by seed)
    Random {
        /// Number of lines to draw
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// RNG seed; the same seed always yields the same lines
        #[arg(long, default_value_t = 2025)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let output = match &cmd.action {
        Action::Analyze { lines } => {
            let lines = parse_lines(lines)?;
            tracing::info!(n = lines.len(), "analyze");
            render(&lines, cmd.json)?
        }
        Action::Demo => {
            tracing::info!("demo");
            demo(cmd.json)?
        }
        Action::Random { count, seed } => {
            tracing::info!(count, seed, "random");
            let lines = draw_lines(
                *count,
                CoeffCfg::default(),
                ReplayToken {
                    seed: *seed,
                    index: 0,
                },
            );
            render(&lines, cmd.json)?
        }
    };
    print!("{output}");
    if let Some(out) = &cmd.out {
        write_output(Path::new(out), &output)?;
    }
    Ok(())
}

/// Parse `A,B,C` triples into engine lines.
///
/// Any parse error or invalid triple aborts the whole run before analysis
/// starts; there is no partial batch.
fn parse_lines(triples: &[String]) -> Result<Vec<Line>> {
    let mut lines = Vec::with_capacity(triples.len());
    for (i, triple) in triples.iter().enumerate() {
        let parts: Vec<&str> = triple.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            bail!(
                "line {}: expected three comma-separated coefficients, got {triple:?}",
                i + 1
            );
        }
        let coef = |s: &str| -> Result<f64> {
            s.parse::<f64>()
                .with_context(|| format!("line {}: bad coefficient {s:?}", i + 1))
        };
        let (a, b, c) = (coef(parts[0])?, coef(parts[1])?, coef(parts[2])?);
        let line = Line::new(a, b, c).with_context(|| format!("line {}", i + 1))?;
        lines.push(line);
    }
    Ok(lines)
}

fn render(lines: &[Line], json: bool) -> Result<String> {
    let results = analyze_all(lines);
    if json {
        let mut doc = serde_json::to_string_pretty(&report::render_json(&results))?;
        doc.push('\n');
        Ok(doc)
    } else {
        Ok(report::render_text(&results))
    }
}

fn demo_set(
    name: &'static str,
    coeffs: [(f64, f64, f64); 2],
) -> Result<(&'static str, Vec<Line>)> {
    let lines = coeffs
        .iter()
        .map(|&(a, b, c)| Line::new(a, b, c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((name, lines))
}

/// The worked example sets: one per relationship kind, plus the
/// vertical/horizontal right-angle case.
fn demo_sets() -> Result<Vec<(&'static str, Vec<Line>)>> {
    Ok(vec![
        demo_set("intersecting", [(1.0, 1.0, -2.0), (1.0, -1.0, 0.0)])?,
        demo_set("parallel", [(1.0, 1.0, -2.0), (1.0, 1.0, -4.0)])?,
        demo_set("coincident", [(2.0, -3.0, 5.0), (4.0, -6.0, 10.0)])?,
        demo_set("vertical-horizontal", [(1.0, 0.0, -3.0), (0.0, 1.0, -2.0)])?,
    ])
}

fn demo(json: bool) -> Result<String> {
    let sets = demo_sets()?;
    if json {
        let doc: Vec<serde_json::Value> = sets
            .iter()
            .map(|(name, lines)| {
                serde_json::json!({
                    "name": name,
                    "analysis": report::render_json(&analyze_all(lines)),
                })
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        Ok(out)
    } else {
        let mut out = String::new();
        for (name, lines) in &sets {
            out.push_str(&format!("=== {name} ===\n"));
            out.push_str(&report::render_text(&analyze_all(lines)));
        }
        Ok(out)
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_triples_with_spaces() {
        let lines = parse_lines(&["1,2,3".into(), " 4 , -5 , 0.5 ".into()]).expect("parses");
        assert_eq!(lines.len(), 2);
        assert_eq!(
            (lines[1].a(), lines[1].b(), lines[1].c()),
            (4.0, -5.0, 0.5)
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_lines(&["1,2".into()]).is_err());
        assert!(parse_lines(&["1,2,3,4".into()]).is_err());
        assert!(parse_lines(&["1,x,3".into()]).is_err());
    }

    #[test]
    fn parse_rejects_invalid_line_before_analysis() {
        // One bad triple fails the whole batch.
        let err = parse_lines(&["1,1,-2".into(), "0,0,5".into()]).expect_err("invalid line");
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn demo_sets_are_constructible() {
        let sets = demo_sets().expect("demo sets valid");
        assert_eq!(sets.len(), 4);
        assert!(sets.iter().all(|(_, lines)| lines.len() == 2));
    }

    #[test]
    fn render_json_mode_is_valid_json() {
        let lines = parse_lines(&["1,1,-2".into(), "1,-1,0".into()]).expect("parses");
        let doc = render(&lines, true).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&doc).expect("valid JSON");
        assert_eq!(value["count"], 1);
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("reports").join("out.txt");
        write_output(&path, "report body\n").expect("writes");
        let read = std::fs::read_to_string(&path).expect("reads back");
        assert_eq!(read, "report body\n");
    }
}
