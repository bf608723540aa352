use anyhow::{Context, Result, ensure};
use gdportal_core::{
    Catalog, CatalogError, FaultBoundary, Guarded, RenderFault, ViewSelection, select_view,
};
use std::collections::HashSet;

pub fn catalog_integrity(catalog: &Catalog) -> Result<()> {
    ensure!(!catalog.is_empty(), "catalog should not be empty");
    let mut seen = HashSet::new();
    for game in catalog {
        ensure!(seen.insert(&game.id), "duplicate id `{}`", game.id);
        let found = catalog
            .lookup(&game.id)
            .with_context(|| format!("lookup of `{}` came back empty", game.id))?;
        ensure!(found == game, "lookup of `{}` returned another record", game.id);
    }
    for absent in ["", "does-not-exist", "../geometry-dash", "a/b"] {
        ensure!(
            catalog.lookup(absent).is_none(),
            "`{absent}` should not resolve"
        );
    }
    Ok(())
}

pub fn routing(catalog: &Catalog) -> Result<()> {
    for path in ["/", "/foo/bar", "/game", "/game/a/b"] {
        match select_view(catalog, path) {
            ViewSelection::Home(games) => ensure!(
                games == catalog.games(),
                "{path} should list the whole catalog in order"
            ),
            other => anyhow::bail!("{path} selected {} instead of home", other.kind()),
        }
    }
    for game in catalog {
        let path = format!("/game/{}", game.id);
        let first = select_view(catalog, &path);
        ensure!(
            first == ViewSelection::Player(game),
            "{path} should open its player"
        );
        let second = select_view(catalog, &path);
        ensure!(first == second, "{path} dispatch is not stable");
    }
    ensure!(
        select_view(catalog, "/game/does-not-exist").kind() == "not-found",
        "unknown id should select not-found"
    );
    Ok(())
}

pub fn fault_boundary(_catalog: &Catalog) -> Result<()> {
    let mut boundary = FaultBoundary::new();
    let healthy = boundary.guard(|| Ok::<_, RenderFault>("listing"));
    ensure!(
        healthy == Guarded::Rendered("listing"),
        "healthy render should pass through"
    );

    let first = RenderFault::from(CatalogError::DuplicateId("twin".to_string()));
    let Guarded::Recovery { description } = boundary.guard(|| Err::<(), _>(first.clone())) else {
        anyhow::bail!("failing render should produce recovery");
    };
    ensure!(description == first.to_string(), "description should match the fault");

    ensure!(
        !boundary.capture(&RenderFault::Panicked("second".to_string())),
        "second fault should not transition"
    );
    ensure!(
        boundary.description() == Some(first.to_string().as_str()),
        "first fault should win"
    );
    Ok(())
}
