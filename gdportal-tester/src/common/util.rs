use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Best-effort dump of what the browser was showing when a scenario failed.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Ok(png) = driver.screenshot_as_png().await {
        let _ = fs::write(Path::new(dir).join("screenshot.png"), &png);
    }

    if let Ok(src) = driver.source().await {
        let _ = fs::write(Path::new(dir).join("dom.html"), src);
    }

    if let Ok(url) = driver.current_url().await {
        let _ = fs::write(Path::new(dir).join("url.txt"), url.as_str());
    }

    let chain = format!("{err:#}");
    let _ = fs::write(Path::new(dir).join("error.txt"), chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_drops_blanks() {
        assert_eq!(split_csv(" smoke, ,open-game,"), ["smoke", "open-game"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn artifacts_dir_nests_browser_and_scenario() {
        let dir = artifacts_dir("target/a", "chrome", "smoke");
        assert!(dir.starts_with("target/a/chrome/smoke/"));
    }
}
