//! `stress` subcommand
//!
//! Builds a large list and runs every list operation on it, printing the
//! elapsed time of each. A run that finishes shows the operations stay
//! within constant call-stack depth.
//!
//! Settings are resolved with priority CLI > environment > scenario YAML >
//! default.

use anyhow::{Context, Result, bail};
use clap::Args;
use conslist::persistent::PersistentList;
use serde::Deserialize;
use std::env;
use std::fs;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const DEFAULT_SIZE: usize = 200_000;
const DEFAULT_REPEAT: u32 = 1;

/// Arguments for the stress subcommand
#[derive(Args, Debug, Default)]
pub struct StressArgs {
    /// Number of list elements
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// How many times each operation is run
    #[arg(long, short = 'r')]
    pub repeat: Option<u32>,

    /// Scenario YAML file path
    #[arg(long, short = 's')]
    pub scenario: Option<PathBuf>,
}

/// Scenario configuration from YAML
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ScenarioConfig {
    name: Option<String>,
    size: Option<usize>,
    repeat: Option<u32>,
}

/// Fully resolved settings for one run
#[derive(Debug, PartialEq, Eq)]
struct StressSettings {
    name: String,
    size: usize,
    repeat: u32,
}

impl StressSettings {
    /// Resolve settings from CLI arguments, an environment lookup and the
    /// scenario file.
    fn resolve<E>(args: &StressArgs, scenario: &ScenarioConfig, lookup: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let size = match args.size {
            Some(size) => size,
            None => match lookup("CONSLIST_STRESS_SIZE") {
                Some(value) => value
                    .parse()
                    .with_context(|| format!("Invalid CONSLIST_STRESS_SIZE: {value}"))?,
                None => scenario.size.unwrap_or(DEFAULT_SIZE),
            },
        };

        let repeat = match args.repeat {
            Some(repeat) => repeat,
            None => match lookup("CONSLIST_STRESS_REPEAT") {
                Some(value) => value
                    .parse()
                    .with_context(|| format!("Invalid CONSLIST_STRESS_REPEAT: {value}"))?,
                None => scenario.repeat.unwrap_or(DEFAULT_REPEAT),
            },
        };

        if size == 0 {
            bail!("Stress size must be greater than zero");
        }
        if repeat == 0 {
            bail!("Stress repeat must be greater than zero");
        }

        Ok(Self {
            name: scenario
                .name
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            size,
            repeat,
        })
    }
}

/// Load a scenario file
fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario file: {}", path.display()))
}

/// Times `operation` over `repeat` runs and returns the total.
fn measure<R>(repeat: u32, mut operation: impl FnMut() -> R) -> Duration {
    let started = Instant::now();
    for _ in 0..repeat {
        black_box(operation());
    }
    started.elapsed()
}

/// Runs every operation once per repeat and returns `(name, elapsed)` rows.
fn run_operations(settings: &StressSettings) -> Vec<(&'static str, Duration)> {
    let size = settings.size;
    let repeat = settings.repeat;
    let list: PersistentList<usize> = PersistentList::from_sequence(0..size);
    let other: PersistentList<usize> = PersistentList::from_sequence(0..size / 2);

    vec![
        (
            "from_sequence",
            measure(repeat, || PersistentList::from_sequence(0..size)),
        ),
        (
            "cons",
            measure(repeat, || {
                (0..size).fold(PersistentList::new(), |accumulator, value| {
                    accumulator.cons(value)
                })
            }),
        ),
        ("len", measure(repeat, || list.len())),
        ("at", measure(repeat, || list.at(size - 1).copied())),
        ("reverse", measure(repeat, || list.reverse())),
        ("concat", measure(repeat, || list.concat(&other))),
        ("remove_at", measure(repeat, || list.remove_at(size / 2))),
        ("map", measure(repeat, || list.map(|value| value * 2))),
        (
            "flat_map",
            measure(repeat, || {
                list.flat_map(|value| PersistentList::from_sequence([*value, value + 1]))
            }),
        ),
        ("filter", measure(repeat, || list.filter(|value| value % 2 == 1))),
        ("eq", measure(repeat, || list == list.reverse().reverse())),
        ("display", measure(repeat, || list.to_string().len())),
    ]
}

pub fn run(args: &StressArgs) -> Result<()> {
    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default(),
    };
    let settings = StressSettings::resolve(args, &scenario, |key| env::var(key).ok())?;

    eprintln!(
        "stress: scenario={} size={} repeat={}",
        settings.name, settings.size, settings.repeat
    );

    for (name, elapsed) in run_operations(&settings) {
        println!("{name:<14} {:>10.3} ms", elapsed.as_secs_f64() * 1000.0);
    }

    eprintln!("stress: completed without stack overflow");
    Ok(())
}
