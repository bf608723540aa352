pub mod session;

pub use session::{BrowserConfig, BrowserKind, new_session};

/// Absolute URL for an in-app path under hash routing.
pub fn app_url(base_url: &str, path: &str) -> String {
    let base = base_url.split('#').next().unwrap_or_default();
    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("{base}/#{path}")
}

#[cfg(test)]
mod tests {
    use super::app_url;

    #[test]
    fn joins_base_and_hash_path() {
        assert_eq!(
            app_url("http://localhost:8080/", "/game/geometry-dash"),
            "http://localhost:8080/#/game/geometry-dash"
        );
        assert_eq!(app_url("http://localhost:8080", "/"), "http://localhost:8080/#/");
        assert_eq!(
            app_url("https://example.com/play/#/game/old", "game/new"),
            "https://example.com/play/#/game/new"
        );
    }
}
