use futures::executor::block_on;
use gdportal_core::{GameRecord, ViewSelection};
use gdportal_web::app::AppInner;
use gdportal_web::app::outlet::render_selection;
use gdportal_web::components::fault_boundary::{FaultBoundary, Props as BoundaryProps};
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::Router;
use yew_router::history::{AnyHistory, History, MemoryHistory};

const SUBZERO_FRAME: &str = "https://unblocked-games.s3.amazonaws.com/geometry-dash.html";

#[derive(Properties, PartialEq)]
struct AppAtProps {
    path: &'static str,
    #[prop_or_default]
    catalog_data: Option<AttrValue>,
}

#[function_component(AppAt)]
fn app_at(props: &AppAtProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.path);
    html! {
        <Router {history}>
            <AppInner catalog_data={props.catalog_data.clone()} />
        </Router>
    }
}

fn render_at(path: &'static str) -> String {
    block_on(
        LocalServerRenderer::<AppAt>::with_props(AppAtProps {
            path,
            catalog_data: None,
        })
        .hydratable(false)
        .render(),
    )
}

fn card_titles(html: &str) -> Vec<&str> {
    html.split("game-title")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find('>')? + 1;
            let end = chunk[start..].find('<')? + start;
            Some(&chunk[start..end])
        })
        .collect()
}

#[test]
fn root_lists_every_game_in_catalog_order() {
    let html = render_at("/");
    assert_eq!(
        card_titles(&html),
        ["Geometry Dash Original", "GD SubZero", "GD Meltdown", "GD World"]
    );
    assert!(html.contains("POPULAR NOW"));
    assert!(html.contains("GEOMETRY DASH 2025"));
    assert!(html.contains("GD PORTAL PRO"));
}

#[test]
fn unknown_path_falls_back_to_listing() {
    let root = render_at("/");
    let fallback = render_at("/foo/bar");
    assert_eq!(card_titles(&root), card_titles(&fallback));
    assert!(!fallback.contains("GAME NOT FOUND"));
}

#[test]
fn subzero_card_links_to_its_player_route() {
    let html = render_at("/");
    assert!(html.contains(r#"href="/game/geometry-dash-subzero""#));
}

#[test]
fn player_route_frames_the_catalog_locator() {
    let html = render_at("/game/geometry-dash-subzero");
    assert!(html.contains("GD SubZero"));
    assert!(html.contains(&format!(r#"src="{SUBZERO_FRAME}""#)));
    assert!(html.contains("allow=\"autoplay; encrypted-media\""));
    assert!(html.contains("← BACK"));
    assert!(card_titles(&html).is_empty());
}

#[test]
fn unknown_game_renders_not_found() {
    let html = render_at("/game/does-not-exist");
    assert!(html.contains("GAME NOT FOUND"));
    assert!(html.contains("GO BACK"));
    assert!(!html.contains("<iframe"));
}

#[test]
fn same_path_renders_identically() {
    for path in ["/", "/game/geometry-dash", "/game/nope"] {
        assert_eq!(render_at(path), render_at(path));
    }
}

#[test]
fn broken_catalog_trips_the_fault_boundary() {
    let html = block_on(
        LocalServerRenderer::<AppAt>::with_props(AppAtProps {
            path: "/",
            catalog_data: Some(AttrValue::from("{ \"games\": oops")),
        })
        .hydratable(false)
        .render(),
    );
    assert!(html.contains("CRITICAL ERROR"));
    assert!(html.contains("catalog data is not valid JSON"));
    assert!(html.contains("REBOOT SYSTEM"));
    assert!(!html.contains("POPULAR NOW"));
}

#[test]
fn duplicate_ids_trip_the_fault_boundary() {
    let record = r#"{"id":"twin","title":"Twin","thumbnail":"https://example.com/t.png","url":"https://example.com/p.html","category":"Rhythm","description":""}"#;
    let data = format!("[{record},{record}]");
    let html = block_on(
        LocalServerRenderer::<AppAt>::with_props(AppAtProps {
            path: "/game/twin",
            catalog_data: Some(AttrValue::from(data)),
        })
        .hydratable(false)
        .render(),
    );
    assert!(html.contains("CRITICAL ERROR"));
    assert!(html.contains("appears more than once"));
}

#[test]
fn override_catalog_replaces_bundled_records() {
    let data = r#"[{"id":"solo","title":"Solo Run","thumbnail":"https://example.com/s.png","url":"https://example.com/solo.html","category":"Arcade","description":"One level."}]"#;
    let html = block_on(
        LocalServerRenderer::<AppAt>::with_props(AppAtProps {
            path: "/",
            catalog_data: Some(AttrValue::from(data)),
        })
        .hydratable(false)
        .render(),
    );
    assert_eq!(card_titles(&html), ["Solo Run"]);
}

fn scripted_record() -> GameRecord {
    GameRecord {
        id: "scripted".to_string(),
        title: "Scripted".to_string(),
        thumbnail: "https://example.com/s.png".to_string(),
        url: "javascript:alert(1)".to_string(),
        category: "Arcade".to_string(),
        description: String::new(),
    }
}

fn render_guarded(render: Callback<(), Result<Html, gdportal_core::RenderFault>>) -> String {
    block_on(
        LocalServerRenderer::<FaultBoundary>::with_props(BoundaryProps {
            render,
            on_reboot: Some(Callback::noop()),
        })
        .hydratable(false)
        .render(),
    )
}

#[test]
fn failing_player_body_trips_the_fault_boundary() {
    let html = render_guarded(Callback::from(|()| {
        let game = scripted_record();
        render_selection(ViewSelection::Player(&game), &Callback::noop())
    }));
    assert!(html.contains("CRITICAL ERROR"));
    assert!(html.contains("javascript:alert(1)"));
    assert!(!html.contains("<iframe"));
}

#[test]
fn failing_card_in_listing_trips_the_fault_boundary() {
    let html = render_guarded(Callback::from(|()| {
        let mut game = scripted_record();
        game.url = "https://example.com/s.html".to_string();
        game.thumbnail = "file:///etc/passwd".to_string();
        let games = [game];
        render_selection(ViewSelection::Home(&games), &Callback::noop())
    }));
    assert!(html.contains("CRITICAL ERROR"));
    assert!(html.contains("non-http thumbnail locator"));
    assert!(!html.contains("POPULAR NOW"));
}

#[test]
fn arcade_category_renders_each_tag_once() {
    let data = r#"[{"id":"solo","title":"Solo Run","thumbnail":"https://example.com/s.png","url":"https://example.com/solo.html","category":"Arcade","description":"One level."}]"#;
    let html = block_on(
        LocalServerRenderer::<AppAt>::with_props(AppAtProps {
            path: "/game/solo",
            catalog_data: Some(AttrValue::from(data)),
        })
        .hydratable(false)
        .render(),
    );
    assert_eq!(html.matches("#ARCADE").count(), 1);
    assert!(html.contains("#UNBLOCKED"));
}
