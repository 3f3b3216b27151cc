//! End-to-end flows: welcome -> home, location, browsing and the detail overlay.

mod common;

use std::sync::Arc;

use common::*;
use slaysafe::{NavigationError, Navigator, Route, location::ProviderConfig};

#[test]
fn test_navigation_is_forward_only() {
    let mut navigator = Navigator::new();
    assert_eq!(navigator.current(), Route::Welcome);

    navigator.navigate(Route::Home).unwrap();
    assert_eq!(navigator.current(), Route::Home);

    assert_eq!(
        navigator.navigate(Route::Welcome),
        Err(NavigationError {
            from: Route::Home,
            to: Route::Welcome
        })
    );
    assert!(navigator.navigate(Route::Home).is_err());
    assert_eq!(navigator.current(), Route::Home);
}

#[tokio::test]
async fn test_browse_venue_reviews_and_close() -> anyhow::Result<()> {
    let catalog = builtin_catalog();
    let config = AppConfig::default();
    let location = LocationTask::spawn(fixed_provider(), config.location.timeout())
        .wait()
        .await;
    let mut view = ViewState::new();

    // Default tab lists the three venues in fixture order.
    assert_eq!(view.tab(), Tab::Venues);
    let screen = presenter::present(&catalog, &view, &location, &config.map);
    let TabContent::Listing { items, .. } = &screen.content else {
        panic!("expected listing");
    };
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Luna Lounge", "The Pink Door", "Girls Night Party"]);
    assert!(screen.overlay.is_none());

    // Tap venue #2.
    view.select_venue(&catalog, &items[1].id)?;
    let screen = presenter::present(&catalog, &view, &location, &config.map);
    let overlay = screen.overlay.expect("overlay open");
    let reviews: Vec<&str> = overlay.reviews.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(reviews, vec!["3", "4"]);
    assert_eq!(
        overlay.reviews[1].text,
        "Friendly bouncers, zero tolerance for harassment"
    );

    // Close.
    view.clear_selection();
    let screen = presenter::present(&catalog, &view, &location, &config.map);
    assert!(screen.overlay.is_none());
    assert_eq!(view.tab(), Tab::Venues);
    assert!(view.is_initial());
    Ok(())
}

#[tokio::test]
async fn test_permission_denied_degrades_to_fallback() -> anyhow::Result<()> {
    let catalog = builtin_catalog();
    let mut config = AppConfig::from_toml_str(
        r#"
[map]
fallback = { latitude = 34.0522, longitude = -118.2437 }

[location.provider]
kind = "denied"
"#,
    )?;
    assert_eq!(config.location.provider, ProviderConfig::Denied);
    config.location.timeout_secs = 0;

    let provider = Arc::new(config.location.provider.build());
    let location = LocationTask::spawn(provider, config.location.timeout())
        .wait()
        .await;
    let screen = presenter::present(&catalog, &ViewState::new(), &location, &config.map);

    let TabContent::Listing { map, items, .. } = screen.content else {
        panic!("expected listing");
    };
    assert_eq!(map.center, Coordinate::new(34.0522, -118.2437));
    assert_eq!(map.centered_on, MapCenter::Fallback);
    assert_eq!(items.len(), 3);
    for venue in &catalog.venues {
        let marker = map
            .markers
            .iter()
            .find(|m| m.id == venue.id)
            .expect("every venue with a coordinate gets a marker");
        assert_eq!(Some(marker.coordinate), venue.coordinate);
        assert_eq!(marker.kind, MarkerKind::Venue);
    }
    assert!(matches!(
        screen.notice,
        Some(StatusNotice::LocationUnavailable {
            reason: "permission_denied",
            ..
        })
    ));
    Ok(())
}

#[tokio::test]
async fn test_configured_fixed_provider_centers_map() -> anyhow::Result<()> {
    let file = write_toml(
        r#"
[location.provider]
kind = "fixed"
latitude = 47.6062
longitude = -122.3321
accuracy = 20.0
"#,
    );
    let config = AppConfig::load(file.path())?;

    let provider = Arc::new(config.location.provider.build());
    let location = LocationTask::spawn(provider, config.location.timeout())
        .wait()
        .await;
    let screen = presenter::present(
        &builtin_catalog(),
        &ViewState::new(),
        &location,
        &config.map,
    );

    let TabContent::Listing { map, .. } = screen.content else {
        panic!("expected listing");
    };
    assert_eq!(map.center, Coordinate::new(47.6062, -122.3321));
    assert_eq!(map.centered_on, MapCenter::Fix);
    Ok(())
}

#[tokio::test]
async fn test_catalog_path_from_config() -> anyhow::Result<()> {
    let catalog_file = write_toml(
        r#"
[[venues]]
id = "x"
name = "Only Venue"
category = "Bar"
address = "9 Bay St"
safety_rating = 4.0
"#,
    );
    let config_file = write_toml(&format!(
        "catalog = {:?}\n",
        catalog_file.path().display().to_string()
    ));

    let config = AppConfig::load(config_file.path())?;
    let catalog = Catalog::load(config.catalog.as_ref().expect("catalog path set"))?;
    let screen = presenter::present(
        &catalog,
        &ViewState::new(),
        &GateState::Pending,
        &config.map,
    );

    let TabContent::Listing { items, map, .. } = screen.content else {
        panic!("expected listing");
    };
    assert_eq!(items.len(), 1);
    assert!(map.markers.is_empty());
    Ok(())
}

#[test]
fn test_relative_catalog_path_resolves_next_to_config() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("catalog.toml"),
        r#"
[[venues]]
id = "r"
name = "Relative Venue"
category = "Club"
address = "1 Side St"
safety_rating = 3.5
"#,
    )?;
    let config_path = dir.path().join("slaysafe.toml");
    std::fs::write(&config_path, "catalog = \"catalog.toml\"\n")?;

    let config = AppConfig::load(&config_path)?;
    let catalog_path = config.catalog.expect("catalog path set");
    assert_eq!(catalog_path, dir.path().join("catalog.toml"));

    let catalog = Catalog::load(&catalog_path)?;
    assert_eq!(catalog.venues.len(), 1);
    assert_eq!(catalog.venues[0].name, "Relative Venue");
    Ok(())
}
