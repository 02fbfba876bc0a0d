//! Product resolution: selector + price range -> bounded result page.
//!
//! The selector is exactly one of category or subcategory; when the
//! caller has both, subcategory is authoritative (more specific
//! wins). Matching is case-insensitive substring on the selector
//! field, then an inclusive price filter, then truncation to the
//! limit. Catalog row order is preserved throughout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;

/// Default page size for product results.
pub const DEFAULT_LIMIT: usize = 5;

/// Exactly one catalog field to filter on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSelector {
    Category(String),
    Subcategory(String),
}

impl ProductSelector {
    /// Build from the optional pair shape of the external interface.
    /// Subcategory is authoritative when both are present; neither
    /// present is `MissingSelector`. Blank strings count as absent.
    pub fn from_options(
        category: Option<String>,
        subcategory: Option<String>,
    ) -> Result<Self, ResolveError> {
        let non_blank = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        match (non_blank(category), non_blank(subcategory)) {
            (_, Some(sub)) => Ok(Self::Subcategory(sub.to_lowercase())),
            (Some(cat), None) => Ok(Self::Category(cat.to_lowercase())),
            (None, None) => Err(ResolveError::MissingSelector),
        }
    }

    /// The label text, for messages.
    pub fn label(&self) -> &str {
        match self {
            Self::Category(label) | Self::Subcategory(label) => label,
        }
    }
}

impl std::fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category(label) => write!(f, "category '{}'", label),
            Self::Subcategory(label) => write!(f, "subcategory '{}'", label),
        }
    }
}

/// Validated inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Rejects inverted or negative bounds; never swaps them.
    pub fn new(min: f64, max: f64) -> Result<Self, ResolveError> {
        if min < 0.0 || max < 0.0 || min > max {
            return Err(ResolveError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// Unbounded-in-practice range, mirroring the storefront default.
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 999_999.0,
        }
    }
}

/// Caller contract violations. Distinct from an empty result set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid price range: min {min} > max {max} (bounds are never swapped)")]
    InvalidRange { min: f64, max: f64 },

    #[error("no category or subcategory given; ask the user to pick one")]
    MissingSelector,
}

/// What a product search returned for exactly id, title, price.
/// Selector labels are not echoed back per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    pub id: String,
    pub title: String,
    pub price: f64,
}

/// Outcome of a valid search. Zero matches is a normal outcome with
/// its own variant so callers render "no results for X" rather than
/// a blank page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSelection {
    Found(Vec<ProductHit>),
    NoneFound { selector: String },
}

/// Filter the catalog by selector and price range, returning at most
/// `limit` hits in catalog row order.
pub fn resolve_products(
    selector: &ProductSelector,
    range: PriceRange,
    limit: usize,
    catalog: &Catalog,
) -> ProductSelection {
    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };

    let hits: Vec<ProductHit> = catalog
        .products()
        .iter()
        .filter(|product| match selector {
            ProductSelector::Subcategory(label) => product.subcategory.contains(label.as_str()),
            ProductSelector::Category(label) => product.category.contains(label.as_str()),
        })
        .filter(|product| range.contains(product.price))
        .take(limit)
        .map(|product| ProductHit {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
        })
        .collect();

    debug!(selector = %selector, hits = hits.len(), "resolved products");

    if hits.is_empty() {
        ProductSelection::NoneFound {
            selector: selector.label().to_string(),
        }
    } else {
        ProductSelection::Found(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("p1", "Canvas Shoes", "footwear", "shoes", 20.0),
            Product::new("p2", "Leather Shoes", "footwear", "shoes", 40.0),
            Product::new("p3", "Dress Shoes", "footwear", "shoes", 60.0),
            Product::new("p4", "Plain Shirt", "clothing", "shirts", 15.0),
            Product::new("p5", "Running Shoes", "footwear", "running shoes", 35.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_price_filter_preserves_order() {
        let selector = ProductSelector::Subcategory("shoes".into());
        let range = PriceRange::new(0.0, 50.0).unwrap();

        let selection = resolve_products(&selector, range, 5, &catalog());

        match selection {
            ProductSelection::Found(hits) => {
                // p5's subcategory "running shoes" contains "shoes" too.
                let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
                assert_eq!(ids, vec!["p1", "p2", "p5"]);
                assert_eq!(hits[0].price, 20.0);
                assert_eq!(hits[1].price, 40.0);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_rows_within_range() {
        // 3 matching rows priced {20, 40, 60}; range 0..=50 returns
        // exactly the first two, in original order.
        let products = vec![
            Product::new("a", "A", "x", "shoes", 20.0),
            Product::new("b", "B", "x", "shoes", 40.0),
            Product::new("c", "C", "x", "shoes", 60.0),
        ];
        let catalog = Catalog::new(products).unwrap();
        let selector = ProductSelector::Subcategory("shoes".into());
        let range = PriceRange::new(0.0, 50.0).unwrap();

        match resolve_products(&selector, range, 5, &catalog) {
            ProductSelection::Found(hits) => {
                let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
                assert_eq!(ids, vec!["a", "b"]);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_none_found_is_explicit() {
        let selector = ProductSelector::Subcategory("hats".into());
        let selection = resolve_products(&selector, PriceRange::default(), 5, &catalog());
        assert_eq!(
            selection,
            ProductSelection::NoneFound {
                selector: "hats".to_string()
            }
        );
    }

    #[test]
    fn test_price_filter_can_empty_a_match() {
        let selector = ProductSelector::Subcategory("shirts".into());
        let range = PriceRange::new(100.0, 200.0).unwrap();
        let selection = resolve_products(&selector, range, 5, &catalog());
        assert!(matches!(selection, ProductSelection::NoneFound { .. }));
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = PriceRange::new(100.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidRange {
                min: 100.0,
                max: 10.0
            }
        );
    }

    #[test]
    fn test_negative_bounds_rejected() {
        assert!(PriceRange::new(-1.0, 10.0).is_err());
    }

    #[test]
    fn test_missing_selector() {
        let err = ProductSelector::from_options(None, None).unwrap_err();
        assert_eq!(err, ResolveError::MissingSelector);

        let err = ProductSelector::from_options(Some("  ".into()), None).unwrap_err();
        assert_eq!(err, ResolveError::MissingSelector);
    }

    #[test]
    fn test_subcategory_authoritative_over_category() {
        let selector =
            ProductSelector::from_options(Some("footwear".into()), Some("shoes".into())).unwrap();
        assert_eq!(selector, ProductSelector::Subcategory("shoes".into()));
    }

    #[test]
    fn test_limit_truncates() {
        let selector = ProductSelector::Category("footwear".into());
        match resolve_products(&selector, PriceRange::default(), 2, &catalog()) {
            ProductSelection::Found(hits) => {
                let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
                assert_eq!(ids, vec!["p1", "p2"]);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_hit_carries_only_id_title_price() {
        let selector = ProductSelector::Subcategory("shirts".into());
        match resolve_products(&selector, PriceRange::default(), 5, &catalog()) {
            ProductSelection::Found(hits) => {
                let json = serde_json::to_value(&hits[0]).unwrap();
                let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
                assert_eq!(keys, vec!["id", "price", "title"]);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }
}
