//! u-itinerary: plan theme park visits from the command line.
//!
//! `u-itinerary <ALGORITHM> <NUM_RIDES> <TIME_BUDGET> <DAY> <DESIRED_RIDES>`
//! generates a park, solves one visitor request with the chosen algorithm and
//! prints the park data alongside the itinerary. `compare`, or no arguments at
//! all, runs all three algorithms over many generated parks and prints
//! averages.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use u_itinerary::compare::{simulate, summarize, Algorithm, TimedResult};
use u_itinerary::generator::generate_park;
use u_itinerary::models::{Park, ProblemInstance, Visitor, Weekday};
use u_itinerary::random::create_rng;

/// Without arguments, runs the comparison over 50 generated parks.
#[derive(Parser, Debug)]
#[command(
    name = "u-itinerary",
    version,
    about = "Theme park itinerary optimizer",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare all algorithms over randomly generated parks.
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Algorithm to use: greedy, hill or genetic.
    #[arg(requires_all = ["num_rides", "time_budget", "day", "desired_rides"])]
    algorithm: Option<String>,
    /// Number of attractions in the generated park.
    num_rides: Option<usize>,
    /// Minutes available to the visitor.
    time_budget: Option<u64>,
    /// Day of the visit (e.g. monday). Unrecognized days are neutral.
    day: Option<String>,
    /// Comma-separated indices of the desired rides.
    #[arg(value_delimiter = ',')]
    desired_rides: Vec<usize>,
    /// Seed for park generation and randomized solvers.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Number of parks to generate.
    #[arg(long, default_value_t = 50)]
    parks: usize,
    /// Seed for the whole simulation.
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            parks: 50,
            seed: None,
        }
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    enable_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Command::Compare(args)) => compare(args),
        None if cli.run.algorithm.is_some() => run(cli.run),
        None => compare(CompareArgs {
            seed: cli.run.seed,
            ..CompareArgs::default()
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.as_deref().context("missing algorithm")?.parse()?;
    let num_rides = args.num_rides.context("missing number of rides")?;
    let time_budget = args.time_budget.context("missing time budget")?;
    let day = args.day.as_deref().context("missing visit day")?;
    if args.desired_rides.is_empty() {
        bail!("missing desired rides");
    }

    let visit_day = match day.parse::<Weekday>() {
        Ok(day) => Some(day),
        Err(e) => {
            warn!("{e}; treating the visit as a neutral day");
            None
        }
    };

    let mut rng = create_rng(args.seed);
    let park = generate_park("UserPark", num_rides, &mut rng)
        .context("generating park data")?;
    let visitor = Visitor::new(args.desired_rides, time_budget, visit_day);
    let problem = ProblemInstance::new(park, visitor).context("invalid visitor request")?;

    let timed = algorithm.run_timed(&problem, args.seed)?;

    if args.json {
        let doc = serde_json::json!({
            "algorithm": algorithm.name(),
            "computation_seconds": timed.elapsed.as_secs_f64(),
            "park": problem.park(),
            "visitor": problem.visitor(),
            "result": timed.result,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_run(&problem, &timed);
    }
    Ok(())
}

fn print_run(problem: &ProblemInstance, timed: &TimedResult) {
    println!();
    println!("Algorithm used: {}", timed.algorithm.title());
    println!("Computation Time: {:.4} seconds", timed.elapsed.as_secs_f64());
    print_park(problem.park());
    print_visitor(problem.visitor());
    println!(
        "Number of rides in the returned path: {}",
        timed.result.ride_count()
    );
    println!("Total time of the path: {} minutes", timed.result.total_time());
    println!("Returned path: {:?}", timed.result.path());
}

fn print_park(park: &Park) {
    let travel: Vec<Vec<u64>> = park.travel().clone().into();
    let durations: Vec<u64> = park.attractions().iter().map(|a| a.duration()).collect();
    let categories: Vec<String> = park
        .attractions()
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{i}: {}", a.category()))
        .collect();
    let delays: Vec<String> = park
        .category_delays()
        .iter()
        .map(|(c, p)| format!("{c}: {p}%"))
        .collect();
    let effects: Vec<String> = park
        .day_effects()
        .iter()
        .map(|(d, c)| format!("{d}: {c}"))
        .collect();

    println!("--- {} Data ---", park.name());
    println!("Travel Times: {travel:?}");
    println!("Ride Times: {durations:?}");
    println!("Ride Categories: {{{}}}", categories.join(", "));
    println!("Category Time Addition: {{{}}}", delays.join(", "));
    println!("Day Category Affect: {{{}}}", effects.join(", "));
    println!();
}

fn print_visitor(visitor: &Visitor) {
    println!("Desired Rides: {:?}", visitor.desired_rides);
    println!("Total Time Available: {} minutes", visitor.time_budget);
    match visitor.visit_day {
        Some(day) => println!("Visit Day: {day}"),
        None => println!("Visit Day: none"),
    }
    println!();
}

fn compare(args: CompareArgs) -> Result<()> {
    let mut rng = create_rng(args.seed);
    let comparisons = simulate(args.parks, &mut rng).context("running simulations")?;

    print!("{:>6} {:>6}", "park", "rides");
    for a in Algorithm::ALL {
        print!(" | {:>8} {:>5} {:>5} {:>9}", a.name(), "n", "time", "ms");
    }
    println!();
    for c in &comparisons {
        print!("{:>6} {:>6}", c.name, c.num_attractions);
        for r in &c.results {
            print!(
                " | {:>8} {:>5} {:>5} {:>9.3}",
                "",
                r.result.ride_count(),
                r.result.total_time(),
                millis(r.elapsed)
            );
        }
        println!();
    }

    println!();
    for s in summarize(&comparisons) {
        println!(
            "{:<18} mean rides {:>6.2}  mean time {:>7.2} min  mean compute {:>9.3} ms",
            s.algorithm.title(),
            s.mean_rides,
            s.mean_total_time,
            millis(s.mean_elapsed)
        );
    }
    Ok(())
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}
