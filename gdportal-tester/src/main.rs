mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use gdportal_core::Catalog;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, new_session};
use common::scenario::{
    BrowserScenario, CombinedScenario, ScenarioCtx, get_scenario, list_scenarios,
};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Catalog and routing checks (fast, no browser)
    Logic,
    /// Browser automation against a served build
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "gdportal-tester", version)]
#[command(about = "Automated QA for the GD Portal front-end - logic checks and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (WebDriver), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario (logic mode only)
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the built front-end is served from
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

type Scenario = Box<dyn CombinedScenario + Send + Sync>;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = resolve_scenarios(&args.scenarios);
    let catalog = Catalog::bundled().context("bundled catalog failed validation")?;

    let mut all_results = run_logic_scenarios(&args, &scenarios, catalog);
    all_results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_report(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target, "  {key:20} - {description}")?;
    }
    output_target.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎮 GD Portal Automated Tester".bright_cyan().bold());
    println!("{}", "=============================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn resolve_scenarios(scenarios_arg: &str) -> Vec<(String, Scenario)> {
    expand_scenarios(scenarios_arg)
        .into_iter()
        .filter_map(|key| {
            let scenario = get_scenario(&key);
            if scenario.is_none() {
                eprintln!("⚠️  Unknown scenario: {}", key.yellow());
            }
            scenario.map(|s| (key, s))
        })
        .collect()
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[(String, Scenario)],
    catalog: &Catalog,
) -> Vec<ScenarioResult> {
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return Vec::new();
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(catalog, args.verbose);
    scenarios
        .iter()
        .filter_map(|(_, scenario)| {
            scenario
                .as_logic_check()
                .map(|check| tester.run_check(scenario.name(), check, args.iterations))
        })
        .collect()
}

/// Scenarios with a page-driving half; logic-only checks are left to the logic pass.
fn browser_scenarios(
    scenarios: &[(String, Scenario)],
) -> impl Iterator<Item = &(String, Scenario)> {
    scenarios.iter().filter(|(_, scenario)| scenario.has_browser())
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

async fn run_browser_scenarios(args: &Args, scenarios: &[(String, Scenario)]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            verbose: args.verbose,
        };
        for (key, scenario) in browser_scenarios(scenarios) {
            let result = run_one_in_browser(args, kind, &driver, &ctx, key, scenario.as_ref()).await;
            results.push(result);
        }
        let _ = driver.quit().await;
    }

    results
}

async fn run_one_in_browser(
    args: &Args,
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
    ctx: &ScenarioCtx,
    key: &str,
    scenario: &(dyn CombinedScenario + Send + Sync),
) -> ScenarioResult {
    let label = kind.label();
    let scenario_start = Instant::now();
    let outcome = scenario.run_browser(driver, ctx).await;
    let duration = scenario_start.elapsed();

    match &outcome {
        Ok(()) => println!("✅ [{}] {} - {:?}", label.green(), key, duration),
        Err(e) => {
            eprintln!("❌ [{}] {} - {:?}: {:#}", label.red(), key, duration, e);
            let dir = artifacts_dir(&args.artifacts_dir, &label, key);
            if let Err(capture_err) = capture_artifacts(driver, &dir, e).await {
                log::warn!("could not capture artifacts into {dir}: {capture_err:#}");
            }
        }
    }

    ScenarioResult::single(scenario.name(), label, &outcome, duration)
}

fn write_report(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(&mut output_target, results)?;
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}
