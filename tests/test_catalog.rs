//! Catalog loading and validation.

mod common;

use common::*;
use slaysafe::CatalogError;

#[test]
fn test_builtin_catalog_contents() {
    let catalog = builtin_catalog();

    let venue_names: Vec<&str> = catalog.venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        venue_names,
        vec!["Luna Lounge", "The Pink Door", "Girls Night Party"]
    );
    assert!(catalog.venues.iter().all(|v| v.reviews.len() == 2));
    assert_eq!(catalog.events.len(), 2);
    assert_eq!(catalog.safety_tips.len(), 4);
    assert_eq!(catalog.safety_tips[0].title, "Pepper Spray Maintenance");
    assert_eq!(catalog.emergency_resources.len(), 3);
    assert_eq!(catalog.emergency_resources[1].number, "911");
}

#[test]
fn test_find_is_scoped_to_listing() {
    let catalog = builtin_catalog();

    let pink_door = catalog.find(Listing::Venues, "2").expect("venue 2 exists");
    assert_eq!(pink_door.name, "The Pink Door");
    assert!(catalog.find(Listing::Events, "2").is_none());
    assert!(catalog.find(Listing::Venues, "e1").is_none());
    assert_eq!(
        catalog.find(Listing::Events, "e1").map(|v| v.name.as_str()),
        Some("Ladies' Salsa Night")
    );
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let file = write_toml(
        r#"
[[venues]]
id = "a"
name = "Corner Cafe"
category = "Cafe"
address = "1 Elm St"
safety_rating = 3.5

[[emergency_resources]]
id = "1"
name = "Hotline"
number = "555"
available = "24/7"
"#,
    );

    let catalog = Catalog::load(file.path())?;
    assert_eq!(catalog.venues.len(), 1);
    assert!(catalog.venues[0].features.is_empty());
    assert!(catalog.venues[0].coordinate.is_none());
    assert!(catalog.events.is_empty());
    assert!(catalog.safety_tips.is_empty());
    assert_eq!(catalog.emergency_resources[0].name, "Hotline");
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = Catalog::load(dir.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_duplicate_venue_ids_rejected() {
    let source = r#"
[[venues]]
id = "1"
name = "A"
category = "Bar"
address = "x"
safety_rating = 4.0

[[venues]]
id = "1"
name = "B"
category = "Bar"
address = "y"
safety_rating = 4.0
"#;
    let err = Catalog::from_toml_str(source).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { kind: "venue", .. }));
}

#[test]
fn test_out_of_range_review_rating_rejected() {
    let source = r#"
[[events]]
id = "1"
name = "A"
category = "Party"
address = "x"
safety_rating = 4.0

[[events.reviews]]
id = "r"
text = "too good"
rating = 7.5
"#;
    let err = Catalog::from_toml_str(source).unwrap_err();
    assert!(matches!(err, CatalogError::RatingOutOfRange { kind: "review", .. }));
}

#[test]
fn test_invalid_coordinate_rejected() {
    let source = r#"
[[venues]]
id = "1"
name = "Nowhere"
category = "Bar"
address = "x"
safety_rating = 4.0
coordinate = { latitude = 123.0, longitude = 0.0 }
"#;
    let err = Catalog::from_toml_str(source).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCoordinate { .. }));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = Catalog::from_toml_str("[[venues]]\nid = ").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}
