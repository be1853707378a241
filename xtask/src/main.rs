use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "matrix-graph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save this run under
        #[arg(long, default_value = "current")]
        baseline: String,

        /// Baseline the report compares against
        #[arg(long, default_value = "main")]
        against: String,
    },
}

const BENCHES: &[&str] = &["graph_benchmark", "search_benchmark"];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Mean time in nanoseconds, keyed by benchmark id and then by baseline.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
            against,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&baseline, &against)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run", "-p", "matrix-graph"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Running {bench} (baseline `{baseline}`)");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0")
            .args(["bench", "-p", "matrix-graph", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--").arg("--save-baseline").arg(baseline);
        if quick {
            cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;
        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {bench} failed");
        }
    }

    Ok(())
}

fn generate_report(baseline: &str, against: &str) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Graph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | {baseline} | {against} | Change |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (id, runs) in &results {
        let now = runs.get(baseline).copied();
        let then = runs.get(against).copied();
        let change = match (now, then) {
            (Some(now), Some(then)) if then > 0.0 => format!("**{:+.1}%**", (now / then - 1.0) * 100.0),
            _ => "-".to_string(),
        };
        writeln!(file, "| {id} | {} | {} | {change} |", format_time(now), format_time(then))?;
    }

    let missing: BTreeSet<_> = results
        .iter()
        .filter(|(_, runs)| !runs.contains_key(baseline))
        .map(|(id, _)| id.as_str())
        .collect();
    if !missing.is_empty() {
        writeln!(file)?;
        writeln!(file, "Not measured in `{baseline}`: {}", missing.into_iter().collect::<Vec<_>>().join(", "))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: Option<f64>) -> String {
    match ns {
        None => "N/A".to_string(),
        Some(ns) if ns >= 1_000_000.0 => format!("{:.2} ms", ns / 1_000_000.0),
        Some(ns) if ns >= 1_000.0 => format!("{:.2} us", ns / 1_000.0),
        Some(ns) => format!("{ns:.0} ns"),
    }
}

// Layout: target/criterion/<group>/<function>/<parameter>/<baseline>/estimates.json
fn collect_results(root: &Path, dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(bench_dir) = baseline_dir.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(id) = bench_dir.strip_prefix(root) else {
            continue;
        };
        let id = id.to_string_lossy().replace('\\', "/");
        if baseline == "report" || baseline == "change" || id.split('/').any(|part| part == "report") {
            continue;
        }

        let Some(mean) = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<Estimates>(&content).ok())
            .map(|e| e.mean.point_estimate)
        else {
            continue;
        };
        if mean > 0.0 {
            results.entry(id).or_default().insert(baseline.to_string(), mean);
        }
    }
}
