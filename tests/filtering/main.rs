//! Integration tests for the catalog filter/sort engine.


use marketplace_catalog::{apply_filters, Condition, FilterSpec, PriceRange, SortOption};

use fixtures::{assorted, ids, listing, prices, walkthrough};

fn range(min: f64, max: f64) -> PriceRange {
    PriceRange::new(min, max).unwrap()
}

/// A spread of specs touching every predicate, alone and combined.
fn specs() -> Vec<FilterSpec> {
    let base = FilterSpec::default();
    vec![
        base.clone(),
        base.clone().with_search_term("tent"),
        base.clone().with_search_term("TENT").with_sort(SortOption::PriceLow),
        base.clone().with_price_range(range(40.0, 120.0)),
        base.clone().with_categories(["sports", "toys"]),
        base.clone().with_conditions([Condition::LikeNew, Condition::Fair]),
        base.clone()
            .with_search_term("e")
            .with_price_range(range(50.0, 300.0))
            .with_categories(["electronics", "sports"])
            .with_conditions([Condition::Good, Condition::New])
            .with_sort(SortOption::PriceHigh),
        base.with_price_range(range(0.0, 1.0)),
    ]
}

#[test]
fn walkthrough_books_under_100() {
    let spec = FilterSpec::default()
        .with_categories(["books"])
        .with_price_range(range(0.0, 100.0))
        .with_sort(SortOption::PriceLow);

    let results = apply_filters(&walkthrough(), &spec);
    assert_eq!(ids(&results), vec!["1", "3"]);
    assert_eq!(prices(&results), vec![50.0, 80.0]);
}

#[test]
fn unconstrained_spec_returns_everything_sorted() {
    let listings = assorted();

    for sort in SortOption::ALL {
        let spec = FilterSpec::default().with_sort(sort);
        let results = apply_filters(&listings, &spec);
        assert_eq!(results.len(), listings.len(), "sort {}", sort);
    }

    let newest = apply_filters(&listings, &FilterSpec::default());
    assert_eq!(ids(&newest), vec!["13", "11", "9", "7", "5", "4", "2"]);
}

#[test]
fn every_result_satisfies_every_active_predicate() {
    let listings = assorted();

    for spec in specs() {
        let results = apply_filters(&listings, &spec);
        let needle = spec.search_term().to_lowercase();

        for listing in &results {
            assert!(listing.title.to_lowercase().contains(&needle));
            assert!(spec.price_range().contains(listing.price));
            assert!(spec.categories().is_empty() || spec.categories().contains(&listing.category));
            assert!(spec.conditions().is_empty() || spec.conditions().contains(&listing.condition));
        }

        let excluded = listings
            .iter()
            .filter(|l| !results.iter().any(|r| r.id == l.id));
        for listing in excluded {
            assert!(!spec.matches(listing), "listing {} wrongly excluded", listing.id);
        }
    }
}

#[test]
fn price_sorts_are_mirror_images_with_distinct_prices() {
    let listings = assorted();

    for spec in specs() {
        let low = apply_filters(&listings, &spec.clone().with_sort(SortOption::PriceLow));
        let high = apply_filters(&listings, &spec.with_sort(SortOption::PriceHigh));

        let mut reversed = prices(&high);
        reversed.reverse();
        assert_eq!(prices(&low), reversed);
    }
}

#[test]
fn equal_prices_keep_input_order_in_both_directions() {
    let listings = vec![
        listing("30", "Lamp A", 20.0, "home", Condition::Good),
        listing("10", "Lamp B", 35.0, "home", Condition::Good),
        listing("20", "Lamp C", 20.0, "home", Condition::Good),
        listing("40", "Lamp D", 5.0, "home", Condition::Good),
        listing("50", "Lamp E", 20.0, "home", Condition::Good),
    ];

    let low = apply_filters(&listings, &FilterSpec::default().with_sort(SortOption::PriceLow));
    assert_eq!(ids(&low), vec!["40", "30", "20", "50", "10"]);

    let high = apply_filters(&listings, &FilterSpec::default().with_sort(SortOption::PriceHigh));
    assert_eq!(ids(&high), vec!["10", "30", "20", "50", "40"]);
}

#[test]
fn filtering_is_idempotent() {
    let listings = assorted();

    for spec in specs() {
        let first = apply_filters(&listings, &spec);
        let second = apply_filters(&listings, &spec);
        assert_eq!(first, second);
    }
}

#[test]
fn clearing_restores_full_collection_newest_first() {
    let listings = assorted();
    let bounds = PriceRange::default();

    for spec in specs() {
        assert!(apply_filters(&listings, &spec).len() <= listings.len());

        let cleared = FilterSpec::cleared(bounds);
        let results = apply_filters(&listings, &cleared);
        assert_eq!(results.len(), listings.len());
        assert_eq!(ids(&results), vec!["13", "11", "9", "7", "5", "4", "2"]);
        assert_eq!(cleared.sort(), SortOption::Newest);
    }
}

#[test]
fn empty_collection_and_empty_results_are_values() {
    assert!(apply_filters(&[], &FilterSpec::default()).is_empty());

    let spec = FilterSpec::default().with_price_range(range(0.0, 1.0));
    assert!(apply_filters(&assorted(), &spec).is_empty());
}

#[test]
fn category_match_is_exact() {
    let spec = FilterSpec::default().with_categories(["Books"]);
    assert!(apply_filters(&walkthrough(), &spec).is_empty());
}
