use anyhow::Result;
use gdportal_core::Catalog;
use thirtyfour::prelude::*;

pub mod checks;
pub mod navigation;
pub mod smoke;

/// Pure check run against a catalog, no browser involved.
pub type LogicCheck = fn(&Catalog) -> Result<()>;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub verbose: bool,
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn name(&self) -> &'static str;
    fn as_logic_check(&self) -> Option<LogicCheck>;

    /// Whether `run_browser` drives a real page.
    fn has_browser(&self) -> bool {
        true
    }
}

/// Scenario with only a logic half.
#[derive(Clone)]
pub struct LogicOnlyScenario {
    name: &'static str,
    check: LogicCheck,
}

impl LogicOnlyScenario {
    pub const fn new(name: &'static str, check: LogicCheck) -> Self {
        Self { name, check }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnlyScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx) -> Result<()> {
        anyhow::bail!("{} has no browser implementation", self.name)
    }
}

impl CombinedScenario for LogicOnlyScenario {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_logic_check(&self) -> Option<LogicCheck> {
        Some(self.check)
    }

    fn has_browser(&self) -> bool {
        false
    }
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "open-game" | "open" => Some(Box::new(navigation::OpenGameScenario)),
        "missing-game" | "missing" => Some(Box::new(navigation::MissingGameScenario)),
        "catalog-integrity" | "catalog" => Some(Box::new(LogicOnlyScenario::new(
            "Catalog Integrity",
            checks::catalog_integrity,
        ))),
        "routing" => Some(Box::new(LogicOnlyScenario::new(
            "Route Dispatch",
            checks::routing,
        ))),
        "fault-boundary" | "fault" => Some(Box::new(LogicOnlyScenario::new(
            "Fault Boundary",
            checks::fault_boundary,
        ))),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Listing shows every catalog entry"),
        ("open-game", "Opening GD SubZero frames its catalog locator"),
        ("missing-game", "Unknown id shows GAME NOT FOUND and GO BACK returns home"),
        ("catalog-integrity", "Bundled catalog ids are unique and resolvable"),
        ("routing", "Path dispatch selects home, player and not-found views"),
        ("fault-boundary", "First render fault wins and is terminal"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} should resolve");
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn only_page_driving_scenarios_claim_a_browser_half() {
        let with_browser: Vec<&str> = list_scenarios()
            .into_iter()
            .map(|(key, _)| key)
            .filter(|key| get_scenario(key).is_some_and(|s| s.has_browser()))
            .collect();
        assert_eq!(with_browser, ["smoke", "open-game", "missing-game"]);
    }

    #[test]
    fn every_scenario_has_a_logic_half() {
        let catalog = Catalog::bundled().expect("bundled catalog loads");
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).expect("scenario resolves");
            let check = scenario.as_logic_check().expect("logic check present");
            check(catalog).unwrap_or_else(|e| panic!("{key} failed: {e:#}"));
        }
    }
}
