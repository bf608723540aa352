use anyhow::{Context, Result, ensure};
use gdportal_core::{Catalog, Destination, ViewSelection, select_view};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx};
use crate::browser::app_url;

const TARGET_TITLE: &str = "GD SubZero";
const MISSING_ID: &str = "does-not-exist";

pub struct OpenGameScenario;
pub struct MissingGameScenario;

fn open_game_check(catalog: &Catalog) -> Result<()> {
    let game = catalog
        .iter()
        .find(|g| g.title == TARGET_TITLE)
        .with_context(|| format!("no catalog entry titled {TARGET_TITLE}"))?;
    let path = Destination::Game(game.id.clone()).to_path();
    match select_view(catalog, &path) {
        ViewSelection::Player(selected) => {
            ensure!(selected.url == game.url, "player locator drifted from catalog");
            Ok(())
        }
        other => anyhow::bail!("{path} selected {}", other.kind()),
    }
}

fn missing_game_check(catalog: &Catalog) -> Result<()> {
    let path = Destination::Game(MISSING_ID.to_string()).to_path();
    let expected = ViewSelection::NotFound {
        requested: MISSING_ID,
    };
    let selected = select_view(catalog, &path);
    ensure!(selected == expected, "{path} should select not-found");
    Ok(())
}

async fn wait_for_fragment(driver: &WebDriver, suffix: &str) -> Result<String> {
    for _ in 0..20 {
        let url = driver.current_url().await?;
        if let Some(fragment) = url.fragment() {
            if fragment.ends_with(suffix) {
                return Ok(fragment.to_string());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("URL fragment never reached `{suffix}`")
}

#[async_trait::async_trait]
impl BrowserScenario for OpenGameScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let catalog = Catalog::bundled()?;
        let game = catalog
            .iter()
            .find(|g| g.title == TARGET_TITLE)
            .with_context(|| format!("no catalog entry titled {TARGET_TITLE}"))?;

        driver.goto(&app_url(&ctx.base_url, "/")).await?;
        let mut clicked = false;
        for card in driver.find_all(By::Css("a.game-card")).await? {
            let title = card.find(By::Css(".game-title")).await?.text().await?;
            if title == TARGET_TITLE {
                card.click().await?;
                clicked = true;
                break;
            }
        }
        ensure!(clicked, "no card titled {TARGET_TITLE} on the listing");

        let expected_path = Destination::Game(game.id.clone()).to_path();
        let fragment = wait_for_fragment(driver, &expected_path).await?;
        if ctx.verbose {
            println!("  🖱️  Navigated to #{fragment}");
        }

        let heading = driver.find(By::Css(".player-title")).await?.text().await?;
        ensure!(heading == TARGET_TITLE, "player heading was `{heading}`");

        let frame_src = driver
            .find(By::Css("iframe.game-frame"))
            .await?
            .attr("src")
            .await?
            .unwrap_or_default();
        ensure!(
            frame_src == game.url,
            "frame src `{frame_src}` differs from catalog `{}`",
            game.url
        );
        Ok(())
    }
}

impl CombinedScenario for OpenGameScenario {
    fn name(&self) -> &'static str {
        "Open Game"
    }

    fn as_logic_check(&self) -> Option<LogicCheck> {
        Some(open_game_check)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for MissingGameScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let path = Destination::Game(MISSING_ID.to_string()).to_path();
        driver.goto(&app_url(&ctx.base_url, &path)).await?;

        let panel = driver
            .find(By::Css(".not-found"))
            .await
            .context("not-found view never rendered")?;
        let text = panel.text().await?;
        ensure!(text.contains("GAME NOT FOUND"), "unexpected not-found text `{text}`");

        panel.find(By::Css("button")).await?.click().await?;
        let _ = wait_for_fragment(driver, "/").await?;
        driver
            .find(By::Css("a.game-card"))
            .await
            .context("GO BACK did not return to the listing")?;

        if ctx.verbose {
            println!("  ↩️  GO BACK returned to the listing");
        }
        Ok(())
    }
}

impl CombinedScenario for MissingGameScenario {
    fn name(&self) -> &'static str {
        "Missing Game"
    }

    fn as_logic_check(&self) -> Option<LogicCheck> {
        Some(missing_game_check)
    }
}
