use catalogue_core::{
    resolve, resolve_content, ContentFallback, ContentStatus, ProductRecord, Resolution,
    SelectionTuple, YearToken, NO_DESCRIPTION,
};
use pretty_assertions::assert_eq;

fn records() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("Health", "WASH", 2020, "Report A", "http://x/a")
            .with_description("Water access report"),
        ProductRecord::new("Health", "WASH", 2020, "Report A", "http://x/a-dup"),
        ProductRecord::new("Health", "WASH", 2021, "Report B", "http://x/b"),
    ]
}

#[test]
fn exact_match_returns_first_in_source_order() {
    let records = records();
    let found = resolve(&records, "Health", "WASH", &YearToken::Number(2020), "Report A");
    assert_eq!(found.record().map(|r| r.url.as_str()), Some("http://x/a"));
}

#[test]
fn category_is_compared_verbatim_not_by_slug() {
    let records = records();
    let found = resolve(&records, "health", "WASH", &YearToken::Number(2020), "Report A");
    assert_eq!(found, Resolution::NotFound);
}

#[test]
fn resolve_is_idempotent() {
    let records = records();
    let year = YearToken::Number(2021);
    let first = resolve(&records, "Health", "WASH", &year, "Report B");
    let second = resolve(&records, "Health", "WASH", &year, "Report B");
    assert_eq!(first, second);
}

#[test]
fn complete_but_unmatched_selection_yields_fallback() {
    let records = records();
    let fallback = ContentFallback::default();
    let year = YearToken::Number(2021);
    let content = resolve_content(
        &records,
        SelectionTuple {
            category: Some("Health"),
            sector: Some("WASH"),
            year: Some(&year),
            title: Some("Report A"),
        },
        &fallback,
    );
    assert_eq!(content.status, ContentStatus::Incomplete);
    assert_eq!(content.url, "/assets/loading.html");
    assert_eq!(content.description, fallback.description);
}

#[test]
fn missing_components_yield_configured_fallback() {
    let records = records();
    let fallback = ContentFallback {
        url: "/placeholder".into(),
        description: "Pick everything".into(),
    };
    let year = YearToken::Number(2020);
    let partial = SelectionTuple {
        category: Some("Health"),
        sector: Some("WASH"),
        year: Some(&year),
        title: None,
    };
    let blank_title = SelectionTuple {
        title: Some(""),
        ..partial
    };

    for selection in [SelectionTuple::default(), partial, blank_title] {
        let content = resolve_content(&records, selection, &fallback);
        assert_eq!(content.url, "/placeholder");
        assert_eq!(content.description, "Pick everything");
        assert_eq!(content.status, ContentStatus::Incomplete);
    }
}

#[test]
fn resolved_content_carries_description_or_placeholder_text() {
    let records = records();
    let fallback = ContentFallback::default();
    let y2020 = YearToken::Number(2020);
    let y2021 = YearToken::Number(2021);

    let described = resolve_content(
        &records,
        SelectionTuple {
            category: Some("Health"),
            sector: Some("WASH"),
            year: Some(&y2020),
            title: Some("Report A"),
        },
        &fallback,
    );
    assert_eq!(described.status, ContentStatus::Resolved);
    assert_eq!(described.url, "http://x/a");
    assert_eq!(described.description, "Water access report");

    let undescribed = resolve_content(
        &records,
        SelectionTuple {
            category: Some("Health"),
            sector: Some("WASH"),
            year: Some(&y2021),
            title: Some("Report B"),
        },
        &fallback,
    );
    assert_eq!(undescribed.url, "http://x/b");
    assert_eq!(undescribed.description, NO_DESCRIPTION);
}
