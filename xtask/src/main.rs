//! Custom cargo commands for cribsheet.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and sequential builds)
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &[
    "normalization",
    "score_bounds",
    "position_mapping",
    "search_queries",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + constants)
  test      Run all Rust tests, with and without the parallel feature
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run fuzz targets for 60s each (needs cargo-fuzz and nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("cribsheet Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running sequential build tests...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ No clippy warnings\n");

    println!("[5/5] Checking documented thresholds...");
    verify_constants()?;
    println!("✓ README thresholds match the code\n");

    println!("==========================================");
    println!("All verification checks passed");
    println!("==========================================");
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target, or all of them, for a minute each.
fn fuzz(target: Option<&str>) -> Result<()> {
    let root = project_root()?.join("fuzz");
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("unknown fuzz target {t:?}, expected one of {FUZZ_TARGETS:?}"),
        None => FUZZ_TARGETS.to_vec(),
    };

    for target in targets {
        println!("fuzzing {target}...");
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {target} failed");
        }
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The README's accuracy table is what users read; keep it honest.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let ranking_rs = std::fs::read_to_string(root.join("src/scoring/ranking.rs"))
        .context("Failed to read src/scoring/ranking.rs")?;
    let high = extract_const(&ranking_rs, "HIGH_THRESHOLD")
        .context("HIGH_THRESHOLD not found in ranking.rs")?;
    let medium = extract_const(&ranking_rs, "MEDIUM_THRESHOLD")
        .context("MEDIUM_THRESHOLD not found in ranking.rs")?;

    let readme_path = root.join("README.md");
    if !readme_path.exists() {
        println!("  (no README.md, skipping threshold check)");
        return Ok(());
    }
    let readme = std::fs::read_to_string(&readme_path).context("Failed to read README.md")?;

    let readme_high = extract_readme_threshold(&readme, "High");
    let readme_medium = extract_readme_threshold(&readme, "Medium");

    if readme_high != Some(high) {
        bail!("HIGH_THRESHOLD={} but README says {:?}", high, readme_high);
    }
    if readme_medium != Some(medium) {
        bail!("MEDIUM_THRESHOLD={} but README says {:?}", medium, readme_medium);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const HIGH_THRESHOLD: f64 = 0.8;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|value| value.trim().trim_end_matches(';').trim().parse().ok())
}

fn extract_readme_threshold(content: &str, bucket: &str) -> Option<f64> {
    // Look for "| High   | score ≥ 0.8 | ..."
    content
        .lines()
        .filter(|line| line.starts_with('|'))
        .find(|line| line.split('|').nth(1).map(str::trim) == Some(bucket))
        .and_then(|line| line.split('≥').nth(1))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|value| value.trim_end_matches('|').parse().ok())
}
