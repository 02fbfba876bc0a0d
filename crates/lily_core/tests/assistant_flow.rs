//! End-to-end routing over a realistic catalog with the real fuzzy
//! matcher and the shipped FAQ table.

use lily_core::{
    route, Catalog, FaqTable, JaroWinklerMatcher, Product, ProductSelector, ResolvedIntent,
    RouterConfig,
};

fn storefront() -> Catalog {
    Catalog::new(vec![
        Product::new("FW-101", "Canvas Sneakers", "footwear", "sneakers", 29.99),
        Product::new("FW-102", "Retro Running Sneakers", "footwear", "sneakers", 49.5),
        Product::new("FW-103", "High-Top Sneakers", "footwear", "sneakers", 65.0),
        Product::new("FW-201", "Chelsea Boots", "footwear", "boots", 89.0),
        Product::new("CL-301", "Linen Shirt", "clothing", "shirts", 35.0),
        Product::new("CL-302", "Oxford Shirt", "clothing", "shirts", 42.0),
        Product::new("AC-401", "Leather Belt", "accessories", "belts", 19.0),
    ])
    .unwrap()
}

fn ask(query: &str, min: f64, max: f64) -> ResolvedIntent {
    route(
        query,
        min,
        max,
        &storefront(),
        &FaqTable::default(),
        &JaroWinklerMatcher,
        &RouterConfig::default(),
    )
    .unwrap()
}

#[test]
fn faq_beats_search_triggers() {
    // Contains "find" AND an FAQ trigger; FAQ has precedence.
    let intent = ask("where do i find order tracking", 0.0, 100.0);
    match intent {
        ResolvedIntent::FaqAnswer { answer } => {
            assert!(answer.contains("Track Order"));
        }
        other => panic!("expected FaqAnswer, got {:?}", other),
    }
}

#[test]
fn category_listing_covers_whole_catalog() {
    let intent = ask("which categories can i browse", 0.0, 100.0);
    assert_eq!(
        intent,
        ResolvedIntent::CategoryList {
            categories: vec![
                "footwear".to_string(),
                "clothing".to_string(),
                "accessories".to_string()
            ],
        }
    );
}

#[test]
fn typo_still_finds_the_subcategory() {
    let intent = ask("find sneekers under fifty", 0.0, 50.0);
    match intent {
        ResolvedIntent::ProductResults { selector, products } => {
            assert_eq!(selector, ProductSelector::Subcategory("sneakers".into()));
            let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["FW-101", "FW-102"]);
        }
        other => panic!("expected ProductResults, got {:?}", other),
    }
}

#[test]
fn price_band_with_no_stock_reports_the_label() {
    let intent = ask("find boots", 0.0, 20.0);
    assert_eq!(
        intent,
        ResolvedIntent::NoProductsFound {
            selector: "boots".to_string()
        }
    );
}

#[test]
fn styling_question_defers_to_fallback() {
    let intent = ask("does this jacket come in blue", 0.0, 100.0);
    assert_eq!(
        intent,
        ResolvedIntent::Unhandled {
            query: "does this jacket come in blue".to_string()
        }
    );
}

#[test]
fn results_never_exceed_the_limit() {
    let intent = ask("show me footwear", 0.0, 1000.0);
    match intent {
        ResolvedIntent::ProductResults { products, .. } => {
            assert!(products.len() <= 5);
        }
        other => panic!("expected ProductResults, got {:?}", other),
    }
}

#[test]
fn repeated_queries_are_stable() {
    for _ in 0..3 {
        assert_eq!(
            ask("find shirts", 0.0, 100.0),
            ask("find shirts", 0.0, 100.0)
        );
    }
}
