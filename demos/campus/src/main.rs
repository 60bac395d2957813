//! campus — run the rotating-sign exposure simulation from the command line.
//!
//! With no arguments this runs the default configuration (1 000 students,
//! 16 weeks, an 8-slide sign) and prints the exposure summary followed by a
//! handful of individual students.
//!
//! ```text
//! campus --config config.json --weeks 4 --students 0,10,20 --output out/
//! RUST_LOG=sv_sim=debug campus
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sv_core::{HistogramRange, ModelConfig, StudentId};
use sv_output::{CsvWriter, OutputObserver, StudentReport, Summary};
use sv_sim::{DayReport, ModelBuilder, SimObserver};
use sv_student::StudentStore;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(about = "Simulate how many slides of a rotating campus sign each student sees", long_about = None)]
struct Args {
    /// JSON configuration file (flat or `{"value": ...}` layout).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the configured number of weeks.
    #[arg(short, long)]
    weeks: Option<u32>,

    /// Students to report individually.
    #[arg(long, value_delimiter = ',', default_value = "0,1,40,44")]
    students: Vec<u32>,

    /// Write `student_exposure.csv` and `day_reports.csv` into this directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print only the summary, as JSON.
    #[arg(long)]
    json: bool,

    /// Give students who saw every slide their own histogram bucket.
    #[arg(long)]
    inclusive_histogram: bool,

    /// Debug-level logging unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts simulated days and forwards to the CSV observer when one is set.
struct CampusObserver {
    csv:     Option<OutputObserver<CsvWriter>>,
    days:    usize,
    skipped: usize,
}

impl CampusObserver {
    fn new(output: Option<&Path>) -> Result<Self> {
        let csv = output
            .map(|dir| {
                CsvWriter::new(dir)
                    .with_context(|| format!("opening output directory {}", dir.display()))
            })
            .transpose()?
            .map(OutputObserver::new);
        Ok(Self { csv, days: 0, skipped: 0 })
    }
}

impl SimObserver for CampusObserver {
    fn on_day_end(&mut self, report: &DayReport) {
        self.days += 1;
        if report.outcome == sv_sim::DayOutcome::Skipped {
            self.skipped += 1;
        }
        if let Some(csv) = &mut self.csv {
            csv.on_day_end(report);
        }
    }

    fn on_run_end(&mut self, students: &StudentStore) {
        if let Some(csv) = &mut self.csv {
            csv.on_run_end(students);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 1. Configuration.
    let mut config = match &args.config {
        Some(path) => ModelConfig::from_json_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ModelConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(weeks) = args.weeks {
        config.weeks = weeks;
    }
    if args.inclusive_histogram {
        config.histogram = HistogramRange::Inclusive;
    }

    // 2. Build and run.
    let mut model = ModelBuilder::from_config(config)?.build()?;
    let mut obs = CampusObserver::new(args.output.as_deref())?;

    let t0 = Instant::now();
    model.run(&mut obs)?;
    info!(
        elapsed_secs = t0.elapsed().as_secs_f64(),
        days = obs.days,
        skipped = obs.skipped,
        "simulation complete"
    );

    if let Some(e) = obs.csv.as_mut().and_then(OutputObserver::take_error) {
        return Err(e).context("writing CSV output");
    }

    // 3. Report.
    let summary = Summary::from_store(&model.students, model.config.n_slides, model.config.histogram)?;
    if args.json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!("{summary}");
    println!();
    for &id in &args.students {
        match StudentReport::for_student(&model.students, StudentId(id)) {
            Some(report) => println!("{report}"),
            None => warn!(student = id, count = model.students.count, "no such student; skipped"),
        }
    }
    if let Some(dir) = &args.output {
        println!();
        println!("CSV output written to {}", dir.display());
    }

    Ok(())
}
