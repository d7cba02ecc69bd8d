use dynsell::batch::RateRange;
use dynsell::timing::{mean_solve_time, Timers, SOLVE_TIMER};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::process::Command;
use std::time::Duration;

fn dynsell() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dynsell"))
}

#[test]
fn default_run_prints_the_worked_example() {
    let out = dynsell().output().expect("run dynsell");
    assert!(out.status.success());
    let s = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        s.trim_end(),
        "Best selling plan:\n\
         stock of 3 batches sold for 18\n\
         stock of 1 batches sold for 5\n\
         Total amount of money: 23"
    );
}

#[test]
fn table_file_is_loaded_and_validated() {
    let dir = "out_table_test";
    fs::create_dir_all(dir).unwrap();
    let good = format!("{dir}/good.json");
    let bad = format!("{dir}/bad.json");
    fs::write(&good, "[[0,0],[1,1],[2,5],[3,8],[4,9]]").unwrap();
    fs::write(&bad, "[[0,0],[2,5]]").unwrap();

    let out = dynsell().args(["--table", &good]).output().unwrap();
    assert!(out.status.success());
    let s = String::from_utf8(out.stdout).unwrap();
    assert!(s.ends_with("Total amount of money: 10\n"), "{s}");

    let status = dynsell().args(["--table", &bad]).status().unwrap();
    assert!(!status.success());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn conflicting_sources_are_rejected() {
    let status = dynsell()
        .args(["--prices", "1,2", "--n", "5"])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn bench_writes_timing_table_with_one_header() {
    let out = "out_bench_test";
    let status = dynsell()
        .args([
            "--mode",
            "bench",
            "--sizes",
            "5,10,20",
            "--repetitions",
            "5",
            "--seed",
            "3",
            "--out-dir",
            out,
            "--no-draw",
        ])
        .status()
        .expect("run dynsell");
    assert!(status.success());

    let s = fs::read_to_string(format!("{out}/timings.csv")).unwrap();
    let header_count = s.lines().filter(|l| l.starts_with("size,")).count();
    assert_eq!(header_count, 1, "CSV must have exactly one header row");
    assert_eq!(s.lines().next(), Some("size,mean_secs,fitted_secs"));
    let sizes: Vec<&str> = s
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(sizes, ["5", "10", "20"]);

    let fit: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(format!("{out}/fit.json")).unwrap()).unwrap();
    assert!(fit["a"].is_number());
    assert!(fit["b"].is_number());
    assert!(!std::path::Path::new(&format!("{out}/time_vs_size.png")).exists());

    let _ = fs::remove_dir_all(out);
}

#[test]
fn verbose_bench_logs_per_size_not_per_solve() {
    let out = "out_verbose_bench_test";
    let output = dynsell()
        .args([
            "--mode",
            "bench",
            "--sizes",
            "5,10",
            "--repetitions",
            "100",
            "--out-dir",
            out,
            "--no-draw",
            "--verbose",
        ])
        .output()
        .expect("run dynsell");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().filter(|l| l.contains("solved")).count(), 0, "{stderr}");
    assert_eq!(stderr.lines().filter(|l| l.contains("timed size")).count(), 2, "{stderr}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("(5, "), "{stdout}");
    assert!(stdout.contains(") (10, "), "{stdout}");

    let _ = fs::remove_dir_all(out);
}

#[test]
fn bench_rejects_instance_sources() {
    for extra in [["--n", "5"], ["--prices", "1,2"], ["--table", "t.json"]] {
        let status = dynsell()
            .args(["--mode", "bench", "--sizes", "5,10", "--repetitions", "1", "--no-draw"])
            .args(extra)
            .status()
            .unwrap();
        assert!(!status.success(), "bench accepted {extra:?}");
    }
}

#[test]
fn larger_stocks_take_longer_on_average() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut timers = Timers::new();
    let rates = RateRange::default();
    let small = mean_solve_time(5, 200, &rates, &mut rng, &mut timers).unwrap();
    let large = mean_solve_time(600, 20, &rates, &mut rng, &mut timers).unwrap();
    // the accumulator is reset between sizes
    assert_eq!(timers.count(SOLVE_TIMER), 20);
    assert!(large > small, "small={small:?} large={large:?}");
}

#[test]
fn timers_accumulate_until_reset() {
    let mut t = Timers::new();
    assert_eq!(t.mean("x"), None);
    t.record("x", Duration::from_millis(2));
    t.record("x", Duration::from_millis(4));
    t.record("y", Duration::from_millis(100));
    assert_eq!(t.count("x"), 2);
    assert_eq!(t.mean("x"), Some(Duration::from_millis(3)));
    t.reset("x");
    assert_eq!(t.count("x"), 0);
    assert_eq!(t.mean("y"), Some(Duration::from_millis(100)));
    t.clear();
    t.record("z", Duration::from_nanos(1));
    t.record("z", Duration::from_nanos(2));
    // whole nanoseconds, rounded down
    assert_eq!(t.mean("z"), Some(Duration::from_nanos(1)));
    assert_eq!(t.total("y"), Duration::ZERO);
}
