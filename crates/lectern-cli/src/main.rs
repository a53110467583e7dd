// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Lectern CLI
//!
//! `lectern solve` searches a JSON course catalog for conflict-free section
//! combinations, `lectern generate` writes random catalogs and `lectern demo`
//! keeps generating catalogs until one admits a full timetable.
//!
//! Logs go to stderr and honour `RUST_LOG` (default `info`); results go to
//! stdout.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lectern_model::course::Course;
use lectern_model::generator::CourseGenerator;
use lectern_model::loading::{CourseLoader, to_json_string, write_courses};
use lectern_search::combination::{CourseCombination, FeasibilityCheck};
use lectern_search::course_set::CourseSet;
use lectern_search::monitor::{
    composite::CompositeMonitor, log::LogMonitor, time_limit::TimeLimitMonitor,
};
use lectern_search::result::SearchOutcome;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lectern")]
#[command(about = "Find conflict-free section combinations for a set of courses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a JSON catalog for feasible combinations
    Solve {
        /// Path to the JSON catalog
        file: PathBuf,

        /// Minimum number of courses per combination
        #[arg(long, default_value_t = 0)]
        min: usize,

        /// Maximum number of courses per combination (unbounded if omitted)
        #[arg(long)]
        max: Option<usize>,

        /// Abort the search after this many milliseconds
        #[arg(long)]
        time_limit_ms: Option<u64>,

        /// Re-check every pair of sections instead of only the newly added one
        #[arg(long)]
        exhaustive_check: bool,
    },

    /// Generate a random catalog as JSON
    Generate {
        /// Number of courses to generate
        #[arg(short, long, default_value_t = 5)]
        courses: usize,

        /// Seed for reproducible output (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Generate catalogs until one has a combination covering every course
    Demo {
        /// Number of courses per catalog
        #[arg(short, long, default_value_t = 3)]
        courses: usize,

        /// Number of catalogs to try before giving up
        #[arg(short, long, default_value_t = 1000)]
        attempts: usize,

        /// Seed of the first attempt (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Solve {
            file,
            min,
            max,
            time_limit_ms,
            exhaustive_check,
        } => solve(file, min, max, time_limit_ms, exhaustive_check),
        Commands::Generate {
            courses,
            seed,
            out,
        } => generate(courses, seed, out),
        Commands::Demo {
            courses,
            attempts,
            seed,
        } => demo(courses, attempts, seed),
    }
}

fn solve(
    file: PathBuf,
    min: usize,
    max: Option<usize>,
    time_limit_ms: Option<u64>,
    exhaustive_check: bool,
) -> Result<()> {
    let courses = CourseLoader::new()
        .from_path(&file)
        .with_context(|| format!("failed to load catalog from {}", file.display()))?;
    info!(file = %file.display(), courses = courses.len(), "loaded catalog");

    let check = if exhaustive_check {
        FeasibilityCheck::Exhaustive
    } else {
        FeasibilityCheck::Incremental
    };
    let set = CourseSet::new()
        .with_min_courses(min)
        .with_max_courses(max)
        .with_feasibility_check(check);

    let mut monitor = CompositeMonitor::with_capacity(2);
    monitor.add_monitor(LogMonitor::new());
    if let Some(ms) = time_limit_ms {
        monitor.add_monitor(TimeLimitMonitor::new(Duration::from_millis(ms)));
    }

    let outcome = set
        .search(&courses, monitor)
        .context("catalog cannot be searched")?;
    if !outcome.is_exhausted() {
        warn!(reason = %outcome.reason(), "search stopped early, results are partial");
    }

    print_outcome(&outcome);
    Ok(())
}

fn generate(count: usize, seed: Option<u64>, out: Option<PathBuf>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, courses = count, "generating catalog");

    let courses = CourseGenerator::with_seed(seed)
        .generate_courses(count)
        .context("failed to generate courses")?;

    match out {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_courses(std::io::BufWriter::new(file), &courses)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "catalog written");
        }
        None => println!("{}", to_json_string(&courses)?),
    }
    Ok(())
}

/// A generated catalog that admits a combination covering every course.
#[derive(Debug)]
struct DemoCatalog {
    attempt: usize,
    seed: u64,
    courses: Vec<Course>,
}

/// Tries seeds `base_seed`, `base_seed + 1`, ... until a catalog of `count`
/// courses has a full timetable, giving up after `attempts` catalogs.
fn find_demo_catalog(count: usize, attempts: usize, base_seed: u64) -> Result<Option<DemoCatalog>> {
    let set = CourseSet::new().with_min_courses(count);

    for attempt in 0..attempts {
        let seed = base_seed.wrapping_add(attempt as u64);
        let courses = CourseGenerator::with_seed(seed)
            .generate_courses(count)
            .context("failed to generate courses")?;

        if !set.find_combinations(&courses)?.is_empty() {
            return Ok(Some(DemoCatalog {
                attempt,
                seed,
                courses,
            }));
        }
    }
    Ok(None)
}

fn demo(count: usize, attempts: usize, seed: Option<u64>) -> Result<()> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let Some(found) = find_demo_catalog(count, attempts, base_seed)? else {
        bail!(
            "no catalog of {} courses with a full timetable in {} attempts (first seed {})",
            count,
            attempts,
            base_seed
        );
    };

    info!(
        attempt = found.attempt + 1,
        seed = found.seed,
        "found a catalog with a full timetable"
    );
    let combinations = CourseSet::new()
        .with_min_courses(count)
        .find_combinations(&found.courses)?;
    println!("{}", to_json_string(&found.courses)?);
    print_combinations(&combinations, &found.courses);
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome<'_>) {
    for (index, combination) in outcome.combinations().iter().enumerate() {
        println!("Combination #{} ({} courses)", index + 1, combination.len());
        print_entries(combination);
    }
    println!("{} combination(s), {}", outcome.combinations().len(), outcome.reason());
    print!("{}", outcome.statistics());
}

fn print_combinations(combinations: &[CourseCombination<'_>], courses: &[Course]) {
    for (index, combination) in combinations.iter().enumerate() {
        println!("Combination #{} ({} of {} courses)", index + 1, combination.len(), courses.len());
        print_entries(combination);
    }
}

fn print_entries(combination: &CourseCombination<'_>) {
    for entry in combination.iter() {
        println!("  {} -> {}", entry.course().code(), entry.section().identifier());
        for session in entry.section().sessions() {
            println!("      {}", session);
        }
    }
}
