use colored::Colorize;
use gdportal_core::Catalog;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::LogicCheck;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `logic` or the browser label the scenario ran in.
    pub runner: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_millis")]
    pub average_duration: Duration,
}

impl ScenarioResult {
    pub fn single(
        scenario_name: impl Into<String>,
        runner: impl Into<String>,
        outcome: &anyhow::Result<()>,
        duration: Duration,
    ) -> Self {
        let failures = match outcome {
            Ok(()) => Vec::new(),
            Err(e) => vec![format!("{e:#}")],
        };
        Self {
            scenario_name: scenario_name.into(),
            runner: runner.into(),
            passed: failures.is_empty(),
            iterations_run: 1,
            successful_iterations: usize::from(failures.is_empty()),
            failures,
            average_duration: duration,
        }
    }
}

pub struct LogicTester<'a> {
    catalog: &'a Catalog,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(catalog: &'a Catalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    /// Run `check` `iterations` times; repeated runs also catch hidden state drift.
    pub fn run_check(&self, name: &str, check: LogicCheck, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", name.bright_white());
        }

        let iterations = iterations.max(1);
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut total = Duration::ZERO;

        for i in 0..iterations {
            let start = Instant::now();
            match check(self.catalog) {
                Ok(()) => successes += 1,
                Err(e) => failures.push(format!("Iteration {}: {e:#}", i + 1)),
            }
            total += start.elapsed();
        }

        ScenarioResult {
            scenario_name: name.to_string(),
            runner: "logic".to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration: total / u32::try_from(iterations).unwrap_or(u32::MAX),
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(millis.max(0.0) / 1000.0))
    }
}
