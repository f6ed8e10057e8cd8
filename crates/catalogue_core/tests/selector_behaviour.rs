use std::collections::BTreeSet;
use std::sync::Once;

use catalogue_core::{Catalogue, ProductRecord, SelectorOutcome, SelectorState, YearToken};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalogue_logging::initialize_for_tests);
}

fn single_record_catalogue() -> Catalogue {
    Catalogue::new(vec![ProductRecord::new(
        "Health",
        "WASH",
        2020,
        "Report A",
        "http://x/a",
    )])
}

fn rich_catalogue() -> Catalogue {
    Catalogue::new(vec![
        ProductRecord::new("Health", "WASH", 2021, "Water Points", "http://x/wp"),
        ProductRecord::new("Health", "WASH", 2020, "Latrines", "http://x/l"),
        ProductRecord::new("Health", "WASH", 2021, "Hygiene Kits", "http://x/hk"),
        ProductRecord::new("Health", "Nutrition", 2019, "Malnutrition Map", "http://x/mm"),
        ProductRecord::new("Health", "Nutrition", 2022, "Feeding Sites", "http://x/fs"),
        ProductRecord::new("Education", "Schools", 2022, "School Map", "http://x/sm"),
    ])
}

fn years(values: &[i64]) -> Vec<YearToken> {
    values.iter().copied().map(YearToken::Number).collect()
}

#[test]
fn single_record_defaults_cascade_to_a_complete_selection() {
    init_logging();
    let catalogue = single_record_catalogue();
    let mut selector = SelectorState::new();

    assert!(selector.enter_category(&catalogue, "health"));

    assert_eq!(selector.sector_options(), ["WASH".to_string()]);
    assert_eq!(selector.sector(), Some("WASH"));
    assert_eq!(selector.year_options(), years(&[2020]).as_slice());
    assert_eq!(selector.year(), Some(&YearToken::Number(2020)));
    assert_eq!(selector.title_options(), vec!["Report A".to_string()].as_slice());
    assert_eq!(selector.title(), Some("Report A"));
    assert!(selector.year_enabled());
    assert!(selector.title_enabled());
}

#[test]
fn unknown_sector_is_rejected_on_a_fresh_selector() {
    init_logging();
    let catalogue = single_record_catalogue();
    let mut selector = SelectorState::new();

    let outcome = selector.set_sector(&catalogue, Some("Nutrition"));

    assert_eq!(outcome, SelectorOutcome::Rejected);
    assert_eq!(selector, SelectorState::new());
    assert_eq!(selector.sector(), None);
    assert!(selector.year_options().is_empty());
    assert!(!selector.year_enabled());
    assert!(selector.title_options().is_empty());
    assert!(!selector.title_enabled());
}

#[test]
fn unknown_sector_leaves_entered_category_untouched() {
    init_logging();
    let catalogue = single_record_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");
    let before = selector.clone();

    assert_eq!(
        selector.set_sector(&catalogue, Some("Nutrition")),
        SelectorOutcome::Rejected
    );
    assert_eq!(selector, before);
}

#[test]
fn changing_sector_resets_year_and_title() {
    init_logging();
    let catalogue = rich_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert_eq!(
        selector.set_sector(&catalogue, Some("WASH")),
        SelectorOutcome::Applied
    );
    assert_eq!(selector.year(), None);
    assert_eq!(selector.title(), None);
    assert!(selector.title_options().is_empty());
    assert!(!selector.title_enabled());
    assert_eq!(selector.year_options(), years(&[2020, 2021]).as_slice());

    assert_eq!(
        selector.set_year(&catalogue, Some(&YearToken::Number(2021))),
        SelectorOutcome::Applied
    );
    assert_eq!(
        selector.title_options(),
        ["Hygiene Kits".to_string(), "Water Points".to_string()]
    );
    assert_eq!(
        selector.set_title(Some("Water Points")),
        SelectorOutcome::Applied
    );

    assert_eq!(
        selector.set_sector(&catalogue, Some("Nutrition")),
        SelectorOutcome::Applied
    );
    assert_eq!(selector.year(), None);
    assert_eq!(selector.title(), None);
    assert!(selector.title_options().is_empty());
    assert_eq!(selector.year_options(), years(&[2019, 2022]).as_slice());
}

#[test]
fn changing_year_resets_title_only() {
    init_logging();
    let catalogue = rich_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");
    selector.set_sector(&catalogue, Some("WASH"));
    selector.set_year(&catalogue, Some(&YearToken::Number(2021)));
    selector.set_title(Some("Hygiene Kits"));

    selector.set_year(&catalogue, Some(&YearToken::Number(2020)));

    assert_eq!(selector.sector(), Some("WASH"));
    assert_eq!(selector.title(), None);
    assert_eq!(selector.title_options(), ["Latrines".to_string()]);
}

#[test]
fn year_options_equal_sorted_distinct_years_for_every_sector() {
    init_logging();
    let catalogue = rich_catalogue();
    for slug in ["health", "education"] {
        let mut selector = SelectorState::new();
        selector.enter_category(&catalogue, slug);
        for sector in selector.sector_options().to_vec() {
            selector.set_sector(&catalogue, None);
            selector.set_sector(&catalogue, Some(sector.as_str()));
            let expected: Vec<YearToken> = catalogue
                .records()
                .iter()
                .filter(|r| r.category_slug() == slug && r.sector == sector)
                .map(|r| r.year.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            assert_eq!(selector.year_options(), expected.as_slice());
        }
    }
}

#[test]
fn values_outside_the_legal_set_are_rejected_at_every_level() {
    init_logging();
    let catalogue = rich_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");
    selector.set_sector(&catalogue, Some("WASH"));
    let before = selector.clone();

    assert_eq!(
        selector.set_sector(&catalogue, Some("Schools")),
        SelectorOutcome::Rejected
    );
    assert_eq!(
        selector.set_year(&catalogue, Some(&YearToken::Number(2019))),
        SelectorOutcome::Rejected
    );
    assert_eq!(selector.set_title(Some("Latrines")), SelectorOutcome::Rejected);
    assert_eq!(selector, before);
}

#[test]
fn title_requires_a_year() {
    init_logging();
    let catalogue = rich_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");
    selector.set_sector(&catalogue, Some("WASH"));

    assert_eq!(selector.set_title(Some("Latrines")), SelectorOutcome::Rejected);
    assert_eq!(selector.title(), None);
}

#[test]
fn clearing_a_level_clears_everything_below() {
    init_logging();
    let catalogue = single_record_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert_eq!(selector.set_year(&catalogue, None), SelectorOutcome::Applied);
    assert_eq!(selector.sector(), Some("WASH"));
    assert_eq!(selector.year(), None);
    assert_eq!(selector.title(), None);
    assert!(selector.year_enabled());
    assert!(!selector.title_enabled());

    assert_eq!(selector.set_sector(&catalogue, None), SelectorOutcome::Applied);
    assert!(selector.year_options().is_empty());
    assert!(!selector.year_enabled());
    assert_eq!(selector.set_sector(&catalogue, None), SelectorOutcome::Unchanged);
}

#[test]
fn reselecting_the_current_sector_clears_year_and_title() {
    init_logging();
    let catalogue = single_record_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");
    assert_eq!(selector.title(), Some("Report A"));

    assert_eq!(
        selector.set_sector(&catalogue, Some("WASH")),
        SelectorOutcome::Applied
    );
    assert_eq!(selector.sector(), Some("WASH"));
    assert_eq!(selector.year(), None);
    assert_eq!(selector.title(), None);
    assert!(selector.title_options().is_empty());
    assert_eq!(selector.year_options(), years(&[2020]).as_slice());

    // Nothing left below to clear.
    assert_eq!(
        selector.set_sector(&catalogue, Some("WASH")),
        SelectorOutcome::Unchanged
    );
}

#[test]
fn reselecting_the_current_year_clears_title() {
    init_logging();
    let catalogue = single_record_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert_eq!(
        selector.set_year(&catalogue, Some(&YearToken::Number(2020))),
        SelectorOutcome::Applied
    );
    assert_eq!(selector.year(), Some(&YearToken::Number(2020)));
    assert_eq!(selector.title(), None);
    assert_eq!(selector.title_options(), vec!["Report A".to_string()].as_slice());
}

#[test]
fn defaults_are_picked_independently_and_may_not_resolve() {
    init_logging();
    // Default sector is "Nutrition" (first sorted), but the default year comes
    // from all per-sector representatives: WASH's first record has 2018, which
    // Nutrition never offers, so the year stays unset.
    let catalogue = Catalogue::new(vec![
        ProductRecord::new("Health", "WASH", 2018, "Alpha", "http://x/1"),
        ProductRecord::new("Health", "Nutrition", 2020, "Beta", "http://x/2"),
    ]);
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert_eq!(selector.sector(), Some("Nutrition"));
    assert_eq!(selector.year_options(), years(&[2020]).as_slice());
    assert_eq!(selector.year(), None);
    assert_eq!(selector.title(), None);
    assert!(selector.year_enabled());
    assert!(!selector.title_enabled());
}

#[test]
fn sector_defaults_use_the_first_record_per_sector() {
    init_logging();
    // The later WASH record (2019, "Aardvark") is not a representative, so the
    // default year/title come from the first WASH record.
    let catalogue = Catalogue::new(vec![
        ProductRecord::new("Health", "WASH", 2021, "Zulu", "http://x/1"),
        ProductRecord::new("Health", "WASH", 2019, "Aardvark", "http://x/2"),
    ]);
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert_eq!(selector.year(), Some(&YearToken::Number(2021)));
    assert_eq!(selector.title(), Some("Zulu"));
    assert_eq!(selector.year_options(), years(&[2019, 2021]).as_slice());
}

#[test]
fn entering_an_unknown_category_leaves_an_empty_selector() {
    init_logging();
    let catalogue = rich_catalogue();
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert!(!selector.enter_category(&catalogue, "logistics"));
    assert_eq!(selector, SelectorState::new());
    assert!(!selector.sector_enabled());
}

#[test]
fn text_years_sort_after_numeric_years() {
    init_logging();
    let catalogue = Catalogue::new(vec![
        ProductRecord::new("Health", "WASH", YearToken::Text("2020-2021".into()), "A", "u"),
        ProductRecord::new("Health", "WASH", 2022, "B", "u"),
        ProductRecord::new("Health", "WASH", 2019, "C", "u"),
    ]);
    let mut selector = SelectorState::new();
    selector.enter_category(&catalogue, "health");

    assert_eq!(
        selector.year_options(),
        [
            YearToken::Number(2019),
            YearToken::Number(2022),
            YearToken::Text("2020-2021".into())
        ]
    );
}
