use dynsell::batch::{generate, price_table, Batch, RateRange};
use dynsell::fit::{fit_quadratic, QuadraticFit};
use dynsell::plot::plot_time_vs_size;
use dynsell::report::{format_pairs, format_solution, secs, write_timings_csv, TimingRow};
use dynsell::solver::solve;
use dynsell::timing::{time_sets, BenchConfig, Timers};
use dynsell::verifier::verify_solution;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{create_dir_all, File};

/// Prices of the instance from the assignment sheet, sizes 1..=4
const WORKED_EXAMPLE: [f64; 4] = [5.0, 9.0, 18.0, 21.0];

#[derive(Parser, Debug)]
#[command(
    name = "dynsell",
    version,
    about = "Optimal batch-selling plans by dynamic programming + solver benchmark"
)]
struct Args {
    /// `solve` or `bench`
    #[arg(long, default_value = "solve")]
    mode: String,

    /// JSON price table: [[0,0],[1,p1],...,[n,pn]]
    #[arg(long)]
    table: Option<String>,
    /// Prices of sizes 1..=n, comma separated
    #[arg(long, value_delimiter = ',')]
    prices: Vec<f64>,
    /// Stock size of a random instance
    #[arg(long)]
    n: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 4)]
    rate_min: u32,
    #[arg(long, default_value_t = 8)]
    rate_max: u32,

    /// Stock sizes to benchmark, comma separated
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,
    #[arg(long, default_value_t = 1000)]
    repetitions: u32,

    #[arg(long, default_value = "out")]
    out_dir: String,
    #[arg(long = "no-draw", action = clap::ArgAction::SetFalse, default_value_t = true)]
    draw: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn validate_inputs(args: &Args) -> Result<()> {
    let sources = [args.table.is_some(), !args.prices.is_empty(), args.n.is_some()];
    if sources.iter().filter(|s| **s).count() > 1 {
        return Err(anyhow!("use at most one of --table, --prices, --n"));
    }
    if args.mode == "bench" && sources.iter().any(|s| *s) {
        return Err(anyhow!(
            "bench: --table, --prices and --n do not apply; instances are generated per size"
        ));
    }
    if args.repetitions < 1 {
        return Err(anyhow!("repetitions must be ≥ 1 (got {})", args.repetitions));
    }
    if args.mode == "bench" && !args.sizes.is_empty() && args.sizes.len() < 2 {
        return Err(anyhow!(
            "bench: need ≥ 2 sizes to fit a curve (got {})",
            args.sizes.len()
        ));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    validate_inputs(&args)?;
    let rates = RateRange::new(args.rate_min, args.rate_max)?;

    match args.mode.as_str() {
        "solve" => run_solve(&args, rates),
        "bench" => run_bench(&args, rates),
        m => Err(anyhow!("unknown mode: {}", m)),
    }
}

fn load_table(path: &str) -> Result<Vec<Batch>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let pairs: Vec<(usize, f64)> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path))?;
    Ok(pairs.into_iter().map(Batch::from).collect())
}

fn run_solve(args: &Args, rates: RateRange) -> Result<()> {
    let table = if let Some(path) = &args.table {
        load_table(path)?
    } else if !args.prices.is_empty() {
        price_table(&args.prices)
    } else if let Some(n) = args.n {
        generate(n, &rates, &mut rng_from(args.seed))
    } else {
        price_table(&WORKED_EXAMPLE)
    };

    let sol = solve(&table)?;
    println!("{}", format_solution(&sol));

    if args.verbose {
        let rep = verify_solution(&table, &sol)?;
        println!(
            "[verify] n={} size_sum={} price_sum={} brute_force={} optimal={}",
            rep.n,
            rep.size_sum,
            rep.price_sum,
            rep.brute_force_value
                .map_or_else(|| "skipped".to_string(), |v| v.to_string()),
            rep.optimal_ok
        );
    }
    Ok(())
}

fn run_bench(args: &Args, rates: RateRange) -> Result<()> {
    let defaults = BenchConfig::default();
    let cfg = BenchConfig {
        sizes: if args.sizes.is_empty() { defaults.sizes } else { args.sizes.clone() },
        repetitions: args.repetitions,
        rates,
        seed: args.seed.unwrap_or(defaults.seed),
    };
    create_dir_all(&args.out_dir)?;

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut timers = Timers::new();
    let means = time_sets(&cfg.sizes, cfg.repetitions, &cfg.rates, &mut rng, &mut timers)?;
    let times: Vec<f64> = means.into_iter().map(secs).collect();

    let xs: Vec<f64> = cfg.sizes.iter().map(|&n| n as f64).collect();
    let fit = fit_quadratic(&xs, &times)?;

    println!("{}", format_pairs(&cfg.sizes, &times));
    println!("fit: t ≈ {:.6e}·n² + {:.6e}", fit.a, fit.b);
    if args.verbose {
        if let Some((sa, sb)) = fit.std_errors() {
            println!("  std errors: a ± {:.3e}, b ± {:.3e}", sa, sb);
        }
    }

    write_outputs(&args.out_dir, &cfg, &times, &fit)?;
    if args.draw {
        plot_time_vs_size(
            &cfg.sizes,
            &times,
            &fit,
            &format!("{}/time_vs_size.png", &args.out_dir),
        )?;
    }
    Ok(())
}

fn write_outputs(out_dir: &str, cfg: &BenchConfig, times: &[f64], fit: &QuadraticFit) -> Result<()> {
    let rows: Vec<TimingRow> = cfg
        .sizes
        .iter()
        .zip(times)
        .map(|(&size, &mean_secs)| TimingRow {
            size,
            mean_secs,
            fitted_secs: fit.eval(size as f64),
        })
        .collect();
    write_timings_csv(File::create(format!("{}/timings.csv", out_dir))?, &rows)?;
    serde_json::to_writer_pretty(File::create(format!("{}/fit.json", out_dir))?, fit)?;
    serde_json::to_writer_pretty(File::create(format!("{}/config.json", out_dir))?, cfg)?;
    Ok(())
}
