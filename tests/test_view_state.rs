mod common;

use common::*;

#[test]
fn test_initial_state() {
    let view = ViewState::new();
    assert_eq!(view.tab(), Tab::Venues);
    assert!(view.selection().is_none());
    assert!(view.is_initial());
}

#[test]
fn test_select_tab_keeps_exactly_one_tab() {
    let mut view = ViewState::new();
    for tab in Tab::ALL {
        view.select_tab(tab);
        assert_eq!(view.tab(), tab);
    }
}

#[test]
fn test_select_then_clear_returns_to_initial() {
    let catalog = builtin_catalog();
    let mut view = ViewState::new();

    view.select_venue(&catalog, "2").expect("venue 2 exists");
    let selection = view.selection().expect("selection stored");
    assert_eq!(selection.listing, Listing::Venues);
    assert_eq!(selection.venue_id, "2");
    assert!(!view.is_initial());

    view.clear_selection();
    assert!(view.is_initial());
}

#[test]
fn test_unknown_id_is_lookup_not_found() {
    let catalog = builtin_catalog();
    let mut view = ViewState::new();

    let err = view.select_venue(&catalog, "42").unwrap_err();
    assert_eq!(
        err,
        LookupNotFound {
            listing: "venues".to_string(),
            id: "42".to_string()
        }
    );
    assert!(view.is_initial());
}

#[test]
fn test_failed_lookup_keeps_previous_selection() {
    let catalog = builtin_catalog();
    let mut view = ViewState::new();
    view.select_venue(&catalog, "1").unwrap();

    assert!(view.select_venue(&catalog, "nope").is_err());
    assert_eq!(view.selection().map(|s| s.venue_id.as_str()), Some("1"));
}

#[test]
fn test_lookup_follows_current_tab() {
    let catalog = builtin_catalog();
    let mut view = ViewState::new();

    // Event ids are not venue ids.
    assert!(view.select_venue(&catalog, "e1").is_err());

    view.select_tab(Tab::Events);
    view.select_venue(&catalog, "e1").unwrap();
    assert_eq!(view.selection().map(|s| s.listing), Some(Listing::Events));

    view.select_tab(Tab::Safety);
    let err = view.select_venue(&catalog, "1").unwrap_err();
    assert_eq!(err.listing, "safety");
}

#[test]
fn test_tab_switch_to_other_list_clears_selection() {
    let catalog = builtin_catalog();
    let mut view = ViewState::new();
    view.select_venue(&catalog, "3").unwrap();

    // Re-selecting the same tab keeps the overlay open.
    view.select_tab(Tab::Venues);
    assert_eq!(view.selection().map(|s| s.venue_id.as_str()), Some("3"));

    view.select_tab(Tab::Safety);
    assert_eq!(view.tab(), Tab::Safety);
    assert!(view.selection().is_none());

    view.select_tab(Tab::Events);
    view.select_venue(&catalog, "e1").unwrap();
    view.select_tab(Tab::Venues);
    assert!(view.selection().is_none());
    assert!(view.is_initial());
}
