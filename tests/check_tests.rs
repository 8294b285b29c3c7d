//! Integration tests for the memory check pipeline.
//!
//! These tests run `MemoryCheck` against fixture procfs directories for
//! both estimation formulas and the failure paths.

use herakles_check_mem::{Formula, KernelVersion, MemoryCheck, Severity, Thresholds, ZoneWatermarks};
use std::fs;
use tempfile::TempDir;

const MEMINFO_MODERN: &str = "\
MemTotal:        8192000 kB
MemFree:          300000 kB
MemAvailable:    2048000 kB
Buffers:           80000 kB
Cached:          1600000 kB
Active(file):     700000 kB
Inactive(file):   900000 kB
SReclaimable:     150000 kB
";

const MEMINFO_LEGACY: &str = "\
MemTotal:        4096000 kB
MemFree:          800000 kB
Buffers:           50000 kB
Cached:           900000 kB
Active(file):     400000 kB
Inactive(file):   500000 kB
SReclaimable:     100000 kB
";

const ZONEINFO: &str = "\
Node 0, zone      DMA
  pages free     3975
        min      17
        low      21
        high     25
Node 0, zone    DMA32
  pages free     120000
        min      2116
        low      2645
        high     3174
Node 0, zone   Normal
  pages free     50000
        min      6649
        low      8311
        high     9973
";

/// Helper to create a procfs-like directory with the given files.
fn proc_dir(meminfo: Option<&str>, zoneinfo: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    if let Some(content) = meminfo {
        fs::write(dir.path().join("meminfo"), content).expect("Failed to write meminfo");
    }
    if let Some(content) = zoneinfo {
        fs::write(dir.path().join("zoneinfo"), content).expect("Failed to write zoneinfo");
    }
    dir
}

fn check(dir: &TempDir, release: &str, warn: i64, crit: i64) -> MemoryCheck {
    MemoryCheck::new(
        dir.path(),
        KernelVersion::from_release(release),
        Thresholds::new(warn, crit),
    )
}

#[test]
fn test_modern_kernel_uses_mem_available() {
    let dir = proc_dir(Some(MEMINFO_MODERN), Some(ZONEINFO));
    let check = check(&dir, "5.15.0-91-generic", 60, 30);

    let availability = check.availability().expect("availability");
    assert_eq!(availability.formula, Formula::MemAvailable);
    assert_eq!(availability.free_kb, 2_048_000);
    assert_eq!(availability.free_percent, 25);

    let outcome = check.run();
    assert_eq!(outcome.severity, Severity::Critical);
    assert_eq!(outcome.to_string(), "CRITICAL - 25% Free (2000M/8000M)");
    assert_eq!(outcome.exit_code(), 2);
}

#[test]
fn test_legacy_kernel_subtracts_watermarks() {
    let dir = proc_dir(Some(MEMINFO_LEGACY), Some(ZONEINFO));
    let check = check(&dir, "2.6.32-754.el6.x86_64", 60, 30);

    let reserved = ZoneWatermarks::parse(ZONEINFO).unwrap().total_kb().unwrap();
    assert_eq!(reserved, (21 + 2645 + 8311) * 12);

    let availability = check.availability().expect("availability");
    let expected_free = 800_000 + 100_000 + 400_000 + 500_000 - reserved;
    assert_eq!(availability.formula, Formula::Legacy);
    assert_eq!(availability.free_kb, expected_free);
    assert_eq!(availability.free_percent, 100 * expected_free / 4_096_000);

    // 1668276 kB free of 4096000 kB -> 40%
    let outcome = check.run();
    assert_eq!(outcome.severity, Severity::Warning);
    assert_eq!(outcome.message, "40% Free (1629M/4000M)");
}

#[test]
fn test_legacy_snapshot_on_modern_kernel_is_unknown() {
    let dir = proc_dir(Some(MEMINFO_LEGACY), Some(ZONEINFO));
    let outcome = check(&dir, "5.4", 60, 30).run();
    assert_eq!(outcome.severity, Severity::Unknown);
    assert_eq!(outcome.message, "Missing field 'MemAvailable' in meminfo");
}

#[test]
fn test_ok_when_plenty_free() {
    let dir = proc_dir(Some(MEMINFO_MODERN), Some(ZONEINFO));
    let outcome = check(&dir, "6.1.0", 20, 10).run();
    assert_eq!(outcome.severity, Severity::Ok);
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn test_missing_zoneinfo_is_unknown() {
    let dir = proc_dir(Some(MEMINFO_MODERN), None);
    let outcome = check(&dir, "5.4", 60, 30).run();
    assert_eq!(outcome.severity, Severity::Unknown);
    assert!(
        outcome.message.starts_with("Failed to read ") && outcome.message.contains("zoneinfo"),
        "unexpected message: {}",
        outcome.message
    );
}

#[test]
fn test_missing_meminfo_is_unknown() {
    let dir = proc_dir(None, Some(ZONEINFO));
    let outcome = check(&dir, "5.4", 60, 30).run();
    assert_eq!(outcome.severity, Severity::Unknown);
    assert!(outcome.message.contains("meminfo"));
}

#[test]
fn test_zero_total_is_unknown() {
    let dir = proc_dir(Some("MemTotal: 0 kB\nMemAvailable: 0 kB\n"), Some(""));
    let outcome = check(&dir, "5.4", 60, 30).run();
    assert_eq!(outcome.severity, Severity::Unknown);
    assert_eq!(
        outcome.message,
        "Total memory is zero, cannot compute free percentage"
    );
}

#[test]
fn test_malformed_zoneinfo_is_unknown() {
    let dir = proc_dir(Some(MEMINFO_MODERN), Some("        low 21 22\n"));
    let outcome = check(&dir, "5.4", 60, 30).run();
    assert_eq!(outcome.severity, Severity::Unknown);
    assert!(outcome.message.contains("Malformed watermark line 1"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = proc_dir(Some(MEMINFO_MODERN), Some(ZONEINFO));
    let check = check(&dir, "5.4", 60, 30);
    let first = check.run();
    let second = check.run();
    assert_eq!(first, second);
    assert_eq!(first.exit_code(), second.exit_code());
}
