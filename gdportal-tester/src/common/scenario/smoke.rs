use anyhow::{Context, Result, ensure};
use gdportal_core::{Catalog, ViewSelection, select_view};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx};
use crate::browser::app_url;

pub struct SmokeScenario;

fn smoke_check(catalog: &Catalog) -> Result<()> {
    let ViewSelection::Home(games) = select_view(catalog, "/") else {
        anyhow::bail!("root path should select the listing");
    };
    ensure!(!games.is_empty(), "listing should not be empty");
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let catalog = Catalog::bundled()?;
        driver.goto(&app_url(&ctx.base_url, "/")).await?;

        driver
            .find(By::Css("a.game-card"))
            .await
            .context("listing never rendered a game card")?;

        let titles = driver.find_all(By::Css("a.game-card .game-title")).await?;
        let mut seen = Vec::with_capacity(titles.len());
        for title in titles {
            seen.push(title.text().await?);
        }
        let expected: Vec<&str> = catalog.iter().map(|g| g.title.as_str()).collect();
        ensure!(
            seen == expected,
            "listing titles {seen:?} do not match catalog {expected:?}"
        );

        if ctx.verbose {
            println!("  🌐 Listing shows {} cards", seen.len());
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Smoke Test"
    }

    fn as_logic_check(&self) -> Option<LogicCheck> {
        Some(smoke_check)
    }
}
