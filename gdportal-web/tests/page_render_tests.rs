use futures::executor::block_on;
use gdportal_core::{Catalog, GameRecord, RenderFault};
use gdportal_web::components::fault_boundary::{FaultBoundary, Props};
use gdportal_web::pages::{
    not_found::not_found,
    player::player,
    recovery::{RecoveryPage, RecoveryPageProps},
};
use yew::{Callback, Html, LocalServerRenderer};

fn record(id: &str) -> GameRecord {
    Catalog::bundled()
        .expect("bundled catalog loads")
        .lookup(id)
        .cloned()
        .expect("record present")
}

fn render_view(view: Result<Html, RenderFault>) -> String {
    let props = Props {
        render: Callback::from(move |()| view.clone()),
        on_reboot: Some(Callback::noop()),
    };
    block_on(
        LocalServerRenderer::<FaultBoundary>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

#[test]
fn player_page_shows_metadata_and_tags() {
    let html = render_view(player(&record("geometry-dash-meltdown"), &Callback::noop()));
    assert!(html.contains("GD Meltdown"));
    assert!(html.contains("spikes and monsters"));
    assert!(html.contains("RATING: 4.9/5"));
    assert!(html.contains("#RHYTHM"));
    assert!(html.contains("FULLSCREEN"));
    assert!(html.contains("title=\"GD Meltdown\""));
}

#[test]
fn not_found_offers_a_single_way_home() {
    let html = render_view(Ok(not_found(&Callback::noop())));
    assert!(html.contains("GAME NOT FOUND"));
    assert!(html.contains("GO BACK"));
    assert_eq!(html.matches("<button").count(), 1);
}

#[test]
fn recovery_page_shows_raw_description() {
    let props = RecoveryPageProps {
        description: "render panicked: index out of bounds".into(),
        on_reboot: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RecoveryPage>::with_props(props).render());
    assert!(html.contains("CRITICAL ERROR"));
    assert!(html.contains("The game engine encountered a fatal exception."));
    assert!(html.contains("render panicked: index out of bounds"));
    assert_eq!(html.matches("<button").count(), 1);
}
